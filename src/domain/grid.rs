use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Moore neighbourhood offsets as (row, col) deltas
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Square N×N grid of cells, stored row-major.
///
/// Evolution never writes into `self`: every generation is computed into a
/// fresh buffer so neighbour counts always read the previous generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid where each cell is alive with probability `density`.
    /// `density` must already be validated to lie in [0, 1].
    pub fn random<R: Rng>(size: usize, density: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| Cell::from_alive(rng.random_bool(density)))
            .collect();
        Self { size, cells }
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; returns false when out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Count live neighbours; cells beyond the edge count as dead
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .map(Cell::bit)
            .sum()
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)].evolve(self.count_live_neighbors(row, col))
    }

    /// Serial evolution - returns the next generation as a new grid
    pub fn evolve(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self { size: self.size, cells }
    }

    /// Parallel evolution using rayon, one row per task.
    /// Produces exactly the same grid as [`Grid::evolve`].
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        if self.size > 0 {
            cells
                .par_chunks_mut(self.size)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, cell) in out.iter_mut().enumerate() {
                        *cell = self.next_cell(row, col);
                    }
                });
        }

        Self { size: self.size, cells }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.size, i % self.size, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in alive {
            assert!(grid.set(row, col, Cell::Alive));
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7);
        assert_eq!(grid.size(), 7);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 49);
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(3);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.set(3, 3, Cell::Alive));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        // Alive cells in the three other corners would be neighbours on a torus
        let grid = grid_with(4, &[(0, 3), (3, 0), (3, 3)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_full_ring() {
        let grid = grid_with(
            3,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_blinker_evolution() {
        let horizontal = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);

        assert_eq!(horizontal.evolve(), vertical);
        assert_eq!(vertical.evolve(), horizontal);
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        let block = grid_with(4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(block.evolve(), block);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_with(1, &[(0, 0)]);
        assert_eq!(grid.evolve().population(), 0);
        assert_eq!(grid.evolve_parallel().population(), 0);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::random(64, 0.35, &mut rng);
        for _ in 0..10 {
            let serial = grid.evolve();
            assert_eq!(grid.evolve_parallel(), serial);
            grid = serial;
        }
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::random(10, 1.0, &mut rng).population(), 100);
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = grid_with(3, &[(1, 2)]);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(1, 2)]);
    }
}
