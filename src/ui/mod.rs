mod button;
mod stepper;

pub use button::{Button, ButtonAction};
pub use stepper::Stepper;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const GRID_MARGIN: f32 = 10.0;

/// Smallest cell drawn, however large the grid gets
pub const MIN_CELL_SIZE: f32 = 2.0;

/// Grid sizes reachable from the size stepper and `[`/`]`
pub const MIN_UI_GRID_SIZE: usize = 5;
pub const MAX_UI_GRID_SIZE: usize = 100;
pub const GRID_SIZE_STEP: i32 = 5;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Where the grid sits on screen and how large each cell is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin: (f32, f32),
    pub cell_size: f32,
}

impl GridLayout {
    /// Use `preferred` cell size, shrunk so `size` cells fit the area
    pub fn fit(size: usize, preferred: f32, area_width: f32, area_height: f32) -> Self {
        let room = (area_width.min(area_height) - 2.0 * GRID_MARGIN).max(0.0);
        let fitted = (room / size.max(1) as f32).floor();
        Self {
            origin: (GRID_MARGIN, GRID_MARGIN),
            cell_size: preferred.min(fitted).max(MIN_CELL_SIZE),
        }
    }

    pub fn for_screen(size: usize, preferred: f32) -> Self {
        Self::fit(size, preferred, grid_area_width(), grid_area_height())
    }

    /// Pixel extent of a grid with `size` cells per side
    pub fn extent(&self, size: usize) -> f32 {
        size as f32 * self.cell_size
    }
}

/// Next grid size after a stepper or key nudge, kept within the UI range.
/// A size configured outside that range never moves against `delta`.
pub fn nudged_grid_size(current: usize, delta: i32) -> usize {
    let next = (current as i64 + i64::from(delta))
        .clamp(MIN_UI_GRID_SIZE as i64, MAX_UI_GRID_SIZE as i64) as usize;
    match delta.signum() {
        1 => next.max(current),
        -1 => next.min(current),
        _ => current,
    }
}

/// Control buttons; Start is disabled while running, Pause while stopped
pub fn create_buttons(running: bool) -> Vec<Button> {
    let px = panel_x();
    [
        (ButtonAction::Start, !running),
        (ButtonAction::Pause, running),
        (ButtonAction::Step, true),
        (ButtonAction::Clear, true),
        (ButtonAction::Random, true),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, enabled))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        Button::for_action(px, y, PANEL_WIDTH - GRID_MARGIN, BUTTON_HEIGHT, action).with_enabled(enabled)
    })
    .collect()
}

/// Speed and grid-size steppers, below the buttons
pub fn create_steppers() -> (Stepper, Stepper) {
    let px = panel_x();
    let width = PANEL_WIDTH - GRID_MARGIN;
    (
        Stepper::new(px, 290.0, width, "Speed (gen/s)", 1),
        Stepper::new(px, 350.0, width, "Grid size", GRID_SIZE_STEP),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_preferred_when_room() {
        let layout = GridLayout::fit(30, 15.0, 800.0, 600.0);
        assert_eq!(layout.cell_size, 15.0);
        assert_eq!(layout.extent(30), 450.0);
    }

    #[test]
    fn test_fit_shrinks_large_grids() {
        let layout = GridLayout::fit(100, 15.0, 800.0, 600.0);
        assert_eq!(layout.cell_size, 5.0);
        assert!(layout.extent(100) <= 600.0 - 2.0 * GRID_MARGIN);
    }

    #[test]
    fn test_fit_never_below_minimum() {
        let layout = GridLayout::fit(10_000, 15.0, 300.0, 300.0);
        assert_eq!(layout.cell_size, MIN_CELL_SIZE);
    }

    #[test]
    fn test_nudged_grid_size_clamps() {
        assert_eq!(nudged_grid_size(30, 5), 35);
        assert_eq!(nudged_grid_size(5, -5), MIN_UI_GRID_SIZE);
        assert_eq!(nudged_grid_size(98, 5), MAX_UI_GRID_SIZE);
    }

    #[test]
    fn test_nudged_grid_size_outside_range_never_reverses() {
        assert_eq!(nudged_grid_size(300, GRID_SIZE_STEP), 300);
        assert_eq!(nudged_grid_size(300, -GRID_SIZE_STEP), MAX_UI_GRID_SIZE);
        assert_eq!(nudged_grid_size(1, -GRID_SIZE_STEP), 1);
        assert_eq!(nudged_grid_size(1, GRID_SIZE_STEP), MIN_UI_GRID_SIZE);
        assert_eq!(nudged_grid_size(30, 0), 30);
    }
}
