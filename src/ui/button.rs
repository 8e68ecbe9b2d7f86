use macroquad::prelude::*;

/// What a control-panel button asks the game to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Pause,
    Step,
    Clear,
    Random,
}

impl ButtonAction {
    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::Start => "Start",
            ButtonAction::Pause => "Pause",
            ButtonAction::Step => "Step",
            ButtonAction::Clear => "Clear",
            ButtonAction::Random => "Random",
        }
    }
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: Option<ButtonAction>,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action: None,
            enabled: true,
        }
    }

    /// Button labelled after, and dispatching, `action`
    pub fn for_action(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            action: Some(action),
            ..Self::new(x, y, width, height, action.label())
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn action(&self) -> Option<ButtonAction> {
        self.action
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if the point lies over the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect; disabled buttons are greyed out
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if !self.enabled {
            Color::from_rgba(60, 60, 60, 255)
        } else if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let text_color = if self.enabled { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            text_color,
        );
    }

    /// Check if the enabled button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
