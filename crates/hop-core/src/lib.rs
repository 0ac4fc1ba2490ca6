//! hop-core - Shared library for the hop workspace
//!
//! Well-known file locations (the project store, the shell handoff file)
//! and path display helpers.

pub mod paths;

pub use paths::{display_tilde, Paths};
