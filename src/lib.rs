pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod gemini;
pub mod prompt;
pub mod runner;

pub use crate::core::error::ProbeError;
pub use crate::runner::{ProbeOutcome, run_probe};
