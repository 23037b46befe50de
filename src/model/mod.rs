//! Domain model types (pure).
//!
//! All types in this module are plain data with no terminal or I/O access.

pub mod error;
pub mod key_action;
pub mod match_mode;
pub mod orientation;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
pub use match_mode::MatchMode;
pub use orientation::{InvalidOrientation, Orientation};
pub use record::{RecordId, RecordStore};
