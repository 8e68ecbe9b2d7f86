use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|&(row, _)| row).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|&(_, col)| col).max().map_or(0, |c| c + 1);
        Self { name, description, height, width, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Cells that land beyond the grid edge are dropped.
    /// Returns how many cells were written.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> usize {
        self.cells
            .iter()
            .filter(|&&(dr, dc)| grid.set(row + dr, col + dc, Cell::Alive))
            .count()
    }

    /// Top-left anchor that centres the pattern on a grid of `size`
    pub fn centered_anchor(&self, size: usize) -> (usize, usize) {
        (
            size.saturating_sub(self.height) / 2,
            size.saturating_sub(self.width) / 2,
        )
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }

    /// Look up a preset by its (case-insensitive) name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(pattern: &Pattern, size: usize) -> Grid {
        let mut grid = Grid::new(size);
        let (row, col) = pattern.centered_anchor(size);
        pattern.place_on(&mut grid, row, col);
        grid
    }

    #[test]
    fn test_extents() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.height, blinker.width), (1, 3));
    }

    #[test]
    fn test_place_clips_at_edge() {
        let mut grid = Grid::new(4);
        let written = presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(written, 1);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let start = stamped(&pattern, 10);
            let once = start.evolve();
            assert_ne!(once, start, "{} should change after one step", pattern.name);
            assert_eq!(once.evolve(), start, "{} should have period 2", pattern.name);
        }
    }

    #[test]
    fn test_glider_keeps_five_cells_away_from_edges() {
        let mut grid = stamped(&presets::glider(), 20);
        for _ in 0..8 {
            grid = grid.evolve();
            assert_eq!(grid.population(), 5);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("Glider").map(|p| p.name), Some("glider"));
        assert!(presets::by_name("gosper").is_none());
    }
}
