use macroquad::prelude::*;

use super::Button;

const NUDGE_WIDTH: f32 = 36.0;

/// A labelled "- value +" control standing in for a slider
#[derive(Clone)]
pub struct Stepper {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    step: i32,
    minus: Button,
    plus: Button,
}

impl Stepper {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, step: i32) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            step,
            minus: Button::new(x, y, NUDGE_WIDTH, super::BUTTON_HEIGHT, "-"),
            plus: Button::new(x + width - NUDGE_WIDTH, y, NUDGE_WIDTH, super::BUTTON_HEIGHT, "+"),
        }
    }

    /// Signed change requested by a click on `-` or `+`, if any
    pub fn clicked_delta(&self, mouse_pos: (f32, f32)) -> Option<i32> {
        if self.minus.is_clicked(mouse_pos) {
            Some(-self.step)
        } else if self.plus.is_clicked(mouse_pos) {
            Some(self.step)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32), value: &str) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);
        self.minus.draw(mouse_pos);
        self.plus.draw(mouse_pos);

        let text_size = measure_text(value, None, 18, 1.0);
        draw_text(
            value,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (super::BUTTON_HEIGHT + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }
}
