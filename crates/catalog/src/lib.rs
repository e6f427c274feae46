//! Demonstration problems and text reports for the rootline solvers.
//!
//! - [`problems`]: the four reference equations with their starting data
//! - [`render`]: plain-text rendering of reports and iteration traces
//! - [`trace`]: per-run iteration histories
//! - [`args`]: command-line parsing for the `rootline` binary
//! - [`config`]: JSON report settings

pub mod args;
pub mod config;
pub mod problems;
pub mod render;
pub mod trace;
