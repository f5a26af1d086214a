use rand::Rng;
use crate::simulation::cell::Cell;

/// Moore neighbourhood offsets as (row, column)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size grid of cells, stored row-major.
///
/// `next` is the scratch buffer a generation is staged into before the two
/// buffers are swapped, so neighbour counts always read the previous
/// generation.
pub struct Grid {
    cells: Vec<Cell>,
    next: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a grid of dead cells
    pub fn new(rows: usize, columns: usize) -> Self {
        let cell_count = rows * columns;
        Self {
            cells: vec![Cell::DEAD; cell_count],
            next: vec![Cell::DEAD; cell_count],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Current generation, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Give every cell an independent, uniformly random state.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen::<bool>());
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::DEAD);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// State at (row, col); anything outside the grid is a dead wall.
    fn state_at(&self, row: isize, col: isize) -> u32 {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.columns {
            return 0;
        }
        self.cells[row as usize * self.columns + col as usize].state()
    }

    /// Number of live cells in the Moore neighbourhood of (row, col).
    pub fn live_neighbors(&self, row: usize, col: usize) -> u32 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.state_at(row as isize + dr, col as isize + dc))
            .sum()
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let index = row * self.columns + col;
                self.next[index] = self.cells[index].next(self.live_neighbors(row, col));
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }
}

#[cfg(test)]
impl Grid {
    /// Build a grid from rows of `#` (alive) and `.` (dead).
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        let columns = pattern.first().map_or(0, |row| row.len());
        let mut grid = Self::new(rows, columns);
        for (r, line) in pattern.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                grid.cells[r * columns + c] = Cell::from(ch == '#');
            }
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }
}
