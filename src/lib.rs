//! suggestcheck - smoke test for suggestion generation
//!
//! Verifies that a local Ollama endpoint produces conversation suggestions
//! free of translation content, and that a sample generation payload
//! survives a JSON round-trip.

pub mod checks;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod ollama;
pub mod prompt;
pub mod suite;
pub mod telemetry;
