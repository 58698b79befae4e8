//! # Langton's Ant
//!
//! A single ant walking a bounded tape of black and white cells.
//!
//! On a white cell the ant paints it black and turns left; on a black cell
//! it paints it white and turns right. It then moves one cell forward. The
//! run ends the first time that move would leave the tape.

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod utils;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use direction::Orientation;
pub use error::{Error, ParseError, Result, SimError};
pub use simulation::{Engine, Mode, Session, SessionConfig, Snapshot};
pub use world::{CellGrid, Grid, Setup};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, CellGrid, Engine, Error, Grid, Mode, Orientation, ParseError, Result, Session,
        SessionConfig, SimError, Snapshot,
    };
}
