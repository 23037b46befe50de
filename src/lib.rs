//! fview
//!
//! Interactive incremental line filter. Loads a file into an immutable
//! record store, narrows it as the user types, and returns the chosen line.
//!
//! Pure core (`model`, `filter`, `state`) and impure shell (`source`,
//! `view`, `config`, `logging`).

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
