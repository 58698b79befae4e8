pub mod engine;
pub mod render;
pub mod session;

pub use engine::{Engine, Snapshot};
pub use render::{render, render_plain};
pub use session::{Mode, Session, SessionConfig, SessionOutcome};
