//! Result pane orientation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction in which the result pane grows away from the input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// First match sits directly above the separator; later matches stack upwards.
    #[default]
    BottomUp,
    /// First match sits at the top of the screen; later matches stack downwards.
    TopDown,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::BottomUp => f.write_str("bottom-up"),
            Orientation::TopDown => f.write_str("top-down"),
        }
    }
}

/// Error for an unrecognised layout name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown orientation '{0}' (expected 'bottom-up' or 'top-down')")]
pub struct InvalidOrientation(pub String);

impl FromStr for Orientation {
    type Err = InvalidOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom-up" | "bottomup" => Ok(Orientation::BottomUp),
            "top-down" | "topdown" | "reverse" => Ok(Orientation::TopDown),
            other => Err(InvalidOrientation(other.to_string())),
        }
    }
}
