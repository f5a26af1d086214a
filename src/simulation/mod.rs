mod cell;
mod grid;
mod session;

pub use cell::{cell_origin, Cell};
pub use grid::Grid;
pub use session::{Command, Session};
