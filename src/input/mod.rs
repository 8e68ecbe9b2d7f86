use macroquad::prelude::*;
use tracing::warn;

use crate::application::{FrameScheduler, GameState};
use crate::ui::{Button, ButtonAction, GridLayout, Stepper, grid_area_width, nudged_grid_size, GRID_SIZE_STEP};

/// Map a pointer position to the (row, col) under it:
/// `floor(coordinate / cell_size)` relative to the grid origin.
/// Points left of or above the origin map to nothing.
pub fn cell_at(pos: (f32, f32), layout: &GridLayout) -> Option<(usize, usize)> {
    let x = pos.0 - layout.origin.0;
    let y = pos.1 - layout.origin.1;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / layout.cell_size).floor() as usize;
    let row = (y / layout.cell_size).floor() as usize;
    Some((row, col))
}

/// Toggle the cell under a left click inside the grid area
pub fn handle_grid_click<S: FrameScheduler>(state: &mut GameState<S>, layout: &GridLayout, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }
    let Some((row, col)) = cell_at(mouse_pos, layout) else {
        return;
    };
    if let Err(err) = state.toggle_cell(row, col) {
        warn!(%err, "click ignored");
    }
}

fn resize_by<S: FrameScheduler>(state: &mut GameState<S>, delta: i32) {
    let size = nudged_grid_size(state.size(), delta);
    if size == state.size() {
        return;
    }
    if let Err(err) = state.resize(size) {
        warn!(%err, "resize rejected");
    }
}

/// Apply one button action to the game
pub fn apply_action<S: FrameScheduler>(state: &mut GameState<S>, action: ButtonAction) {
    match action {
        ButtonAction::Start => state.start(),
        ButtonAction::Pause => state.pause(),
        ButtonAction::Step => state.step_once(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Random => state.randomize(),
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input<S: FrameScheduler>(state: &mut GameState<S>) {
    let actions: [(KeyCode, fn(&mut GameState<S>)); 8] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::S, GameState::step_once),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_rate(1)),
        (KeyCode::Down, |s| s.adjust_rate(-1)),
        (KeyCode::LeftBracket, |s| resize_by(s, -GRID_SIZE_STEP)),
        (KeyCode::RightBracket, |s| resize_by(s, GRID_SIZE_STEP)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(state));
}

/// Process button clicks
pub fn process_button_clicks<S: FrameScheduler>(state: &mut GameState<S>, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .filter_map(Button::action)
        .for_each(|action| apply_action(state, action));
}

/// Process the speed and grid-size steppers
pub fn process_steppers<S: FrameScheduler>(
    state: &mut GameState<S>,
    speed: &Stepper,
    grid_size: &Stepper,
    mouse_pos: (f32, f32),
) {
    if let Some(delta) = speed.clicked_delta(mouse_pos) {
        state.adjust_rate(delta);
    }
    if let Some(delta) = grid_size.clicked_delta(mouse_pos) {
        resize_by(state, delta);
    }
}
