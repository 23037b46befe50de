//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based tests drive the real `TuiApp` against a `TestBackend`,
//! feeding one event at a time and observing state and rendered output.

mod acceptance_filter;
