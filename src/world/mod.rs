pub mod grid;
pub mod parser;
pub mod state;

pub use grid::{CellGrid, Grid};
pub use parser::{parse_setup, parse_setup_from_str, Setup};
pub use state::{save_state, write_state};
