//! Command-line interface for suggestcheck
//!
//! Provides argument parsing and subcommand handling for the suggestcheck binary.

use clap::{Parser, Subcommand};

/// Smoke test for suggestion generation against a local Ollama endpoint
#[derive(Parser)]
#[command(name = "suggestcheck")]
#[command(version)]
#[command(about = "Smoke test for suggestion generation against a local Ollama endpoint")]
#[command(
    long_about = "suggestcheck round-trips a sample generation response through JSON, then asks \
    the local generation endpoint for conversation suggestions and checks the reply for \
    translation-related content. Results are printed; the exit code is always 0."
)]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# suggestcheck Configuration
# ==========================
#
# Every setting is optional. The values below are the built-in defaults,
# which is what runs when no --config file is given.

# ─────────────────────────────────────────────────────────────────────────────
# GENERATION ENDPOINT
# ─────────────────────────────────────────────────────────────────────────────

[endpoint]
# Ollama generate API (POST, non-streaming)
url = "http://localhost:11434/api/generate"

# Model identifier sent in the request body
model = "llama3.1:8b"

# Sampling temperature (0.0-2.0)
temperature = 1.0

# Request timeout in seconds (1-300)
timeout_seconds = 30

# ─────────────────────────────────────────────────────────────────────────────
# CHECKS
# ─────────────────────────────────────────────────────────────────────────────

[checks]
# Prior chat text the suggestions should continue
conversation_context = "Hey team, let's push to the extraction point. I see some enemies ahead."

# Case-insensitive substrings that trigger the translation warning
forbidden_keywords = ["translation", "translate", "translated"]

# Fail the suggestion check instead of warning when a keyword is found
fail_on_forbidden_keywords = false

# ─────────────────────────────────────────────────────────────────────────────
# OBSERVABILITY
# ─────────────────────────────────────────────────────────────────────────────

[observability]
# Log level for stderr diagnostics: "trace", "debug", "info", "warn", "error"
# RUST_LOG takes precedence when set.
log_level = "warn"
"#
}
