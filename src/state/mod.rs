//! Application state (pure).
//!
//! Pattern, viewport and the session state machine that ties them to the
//! filter engine. Nothing here touches the terminal.

pub mod pattern;
pub mod session;
pub mod viewport;

pub use pattern::Pattern;
pub use session::{Session, SessionStatus};
pub use viewport::{Direction, Viewport};
