use crate::config::CELL_SPACING;

/// GPU-compatible cell state.
///
/// Layout: 4 bytes, one `u32` per cell so the grid can be copied into a
/// WGSL `array<u32>` storage buffer as-is.
/// - 0 = dead
/// - 1 = alive
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Cell(u32);

impl Cell {
    pub const DEAD: Cell = Cell(0);
    pub const ALIVE: Cell = Cell(1);

    pub fn is_alive(self) -> bool {
        self == Cell::ALIVE
    }

    /// Raw state, 0 or 1
    pub fn state(self) -> u32 {
        self.0
    }

    /// State of this cell in the next generation given its live neighbour count.
    pub fn next(self, live_neighbors: u32) -> Cell {
        match (self.is_alive(), live_neighbors) {
            // Survival
            (true, 2) | (true, 3) => Cell::ALIVE,
            // Reproduction
            (false, 3) => Cell::ALIVE,
            // Underpopulation, overpopulation, or stays dead
            _ => Cell::DEAD,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::ALIVE
        } else {
            Cell::DEAD
        }
    }
}

/// Pixel coordinate of the top-left corner of the cell at `index` along one axis.
pub fn cell_origin(index: usize, cell_size: u32) -> u32 {
    index as u32 * (cell_size + CELL_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<Cell>(), 4);
    }

    #[test]
    fn test_live_cell_survives_with_two_or_three() {
        assert_eq!(Cell::ALIVE.next(2), Cell::ALIVE);
        assert_eq!(Cell::ALIVE.next(3), Cell::ALIVE);
    }

    #[test]
    fn test_live_cell_dies_otherwise() {
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::ALIVE.next(n), Cell::DEAD, "{} neighbours", n);
        }
    }

    #[test]
    fn test_dead_cell_born_only_with_three() {
        assert_eq!(Cell::DEAD.next(3), Cell::ALIVE);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::DEAD.next(n), Cell::DEAD, "{} neighbours", n);
        }
    }

    #[test]
    fn test_cell_origin_includes_spacing() {
        assert_eq!(cell_origin(0, 10), 0);
        assert_eq!(cell_origin(1, 10), 11);
        assert_eq!(cell_origin(5, 10), 55);
    }
}
