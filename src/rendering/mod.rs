mod frame_clock;

pub use frame_clock::MacroquadFrames;

use macroquad::prelude::*;

use crate::application::{FrameScheduler, GameState};
use crate::domain::Grid;
use crate::ui::{Button, GridLayout, Stepper, panel_x, PANEL_WIDTH};

pub const BACKGROUND_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0); // #000
pub const ALIVE_COLOR: Color = Color::new(74.0 / 255.0, 144.0 / 255.0, 217.0 / 255.0, 1.0); // #4a90d9
pub const DEAD_COLOR: Color = Color::new(17.0 / 255.0, 17.0 / 255.0, 17.0 / 255.0, 1.0); // #111

/// Pixel-addressable target the grid is painted onto
pub trait DrawingSurface {
    /// Side of one cell in pixels
    fn cell_size(&self) -> f32;

    fn clear(&mut self, width: f32, height: f32);

    fn fill_cell(&mut self, row: usize, col: usize, color: Color);
}

/// Paint every cell of `grid`: one clear, then one fill per cell
pub fn draw_grid(grid: &Grid, surface: &mut impl DrawingSurface) {
    let extent = grid.size() as f32 * surface.cell_size();
    surface.clear(extent, extent);

    for (row, col, cell) in grid.iter_cells() {
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        surface.fill_cell(row, col, color);
    }
}

/// The macroquad window as a drawing surface
pub struct MacroquadSurface {
    layout: GridLayout,
}

impl MacroquadSurface {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }
}

impl DrawingSurface for MacroquadSurface {
    fn cell_size(&self) -> f32 {
        self.layout.cell_size
    }

    fn clear(&mut self, width: f32, height: f32) {
        let (x, y) = self.layout.origin;
        draw_rectangle(x, y, width, height, BACKGROUND_COLOR);
    }

    fn fill_cell(&mut self, row: usize, col: usize, color: Color) {
        let (x, y) = self.layout.origin;
        let size = self.layout.cell_size;
        // 1px gap leaves the background showing as grid lines
        let inner = (size - 1.0).max(1.0);
        draw_rectangle(x + col as f32 * size, y + row as f32 * size, inner, inner, color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x() - 10.0,
        0.0,
        PANEL_WIDTH + 10.0,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, steppers and statistics
pub fn draw_controls<S: FrameScheduler>(
    state: &GameState<S>,
    buttons: &[Button],
    speed: &Stepper,
    grid_size: &Stepper,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    speed.draw(mouse_pos, &state.rate().to_string());
    grid_size.draw(mouse_pos, &format!("{0}x{0}", state.size()));

    let px = panel_x();
    let stat_color = Color::from_rgba(180, 180, 180, 255);
    let (status, status_color) = if state.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    let generation = state.generation().to_string();
    let population = state.population().to_string();

    let labels = [
        ("Generation:", px, 430.0, 16.0, WHITE),
        (generation.as_str(), px, 450.0, 20.0, ALIVE_COLOR),
        ("Population:", px, 480.0, 16.0, WHITE),
        (population.as_str(), px, 500.0, 20.0, stat_color),
        ("Status:", px, 530.0, 16.0, WHITE),
        (status, px, 550.0, 16.0, status_color),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let help = [
        "Click: toggle cell",
        "Space: start/pause",
        "S: step  C: clear",
        "R: randomize",
        "Up/Down: speed",
        "[ / ]: grid size",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 585.0 + i as f32 * 14.0, 12.0, GRAY);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<(f32, f32)>,
        fills: Vec<(usize, usize, Color)>,
    }

    impl DrawingSurface for RecordingSurface {
        fn cell_size(&self) -> f32 {
            15.0
        }

        fn clear(&mut self, width: f32, height: f32) {
            self.clears.push((width, height));
        }

        fn fill_cell(&mut self, row: usize, col: usize, color: Color) {
            self.fills.push((row, col, color));
        }
    }

    #[test]
    fn test_one_clear_and_a_fill_per_cell() {
        let grid = Grid::new(4);
        let mut surface = RecordingSurface::default();
        draw_grid(&grid, &mut surface);

        assert_eq!(surface.clears, vec![(60.0, 60.0)]);
        assert_eq!(surface.fills.len(), 16);
        assert!(surface.fills.iter().all(|&(_, _, color)| color == DEAD_COLOR));
    }

    #[test]
    fn test_alive_cells_get_alive_color() {
        let mut grid = Grid::new(3);
        grid.set(2, 1, Cell::Alive);
        let mut surface = RecordingSurface::default();
        draw_grid(&grid, &mut surface);

        let alive: Vec<_> = surface
            .fills
            .iter()
            .filter(|&&(_, _, color)| color == ALIVE_COLOR)
            .map(|&(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(2, 1)]);
    }
}
