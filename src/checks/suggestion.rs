//! Suggestion generation check
//!
//! Sends the suggestion prompt to the generation endpoint once, prints the
//! reply and scans it for translation-related keywords.

use crate::config::Config;
use crate::console::Console;
use crate::error::GenerationError;
use crate::ollama::{GenerateRequest, OllamaClient};
use crate::prompt::build_suggestion_prompt;
use std::io::Write;

/// Printed when a 200 reply has no `response` field
pub const NO_SUGGESTIONS_PLACEHOLDER: &str = "No suggestions generated";

/// Keywords from `keywords` found in `text`, compared case-insensitively
pub fn find_forbidden_keywords<'a>(text: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .collect()
}

/// Run the check against the configured endpoint
pub async fn run<W: Write>(config: &Config, console: &mut Console<W>) -> bool {
    let prompt = build_suggestion_prompt(&config.checks.conversation_context);

    console.heading("Suggestion Generation Test");
    console.line(format_args!(
        "Conversation context: {}",
        config.checks.conversation_context
    ));
    console.line(format_args!("Prompt: {}", prompt));
    console.blank();
    console.separator();
    console.blank();

    let client = match OllamaClient::new(&config.endpoint) {
        Ok(client) => client,
        Err(e) => {
            console.line(format_args!("❌ FAILED: Error occurred: {}", e));
            return false;
        }
    };

    console.line("Sending request to Ollama API...");
    let request = GenerateRequest::new(&config.endpoint, prompt);

    match client.generate(&request).await {
        Ok(reply) => {
            let suggestions = reply
                .response
                .unwrap_or_else(|| NO_SUGGESTIONS_PLACEHOLDER.to_string());

            console.line("✅ SUCCESS: Suggestions generated!");
            console.line(format_args!("Response: {}", suggestions));

            let hits =
                find_forbidden_keywords(&suggestions, &config.checks.forbidden_keywords);
            if hits.is_empty() {
                console.line("✅ GOOD: No translation-related content in response");
                true
            } else {
                tracing::warn!(keywords = ?hits, "Suggestions contain forbidden keywords");
                console.line("⚠️  WARNING: Response contains translation-related keywords");
                !config.checks.fail_on_forbidden_keywords
            }
        }
        Err(GenerationError::UnexpectedStatus { status, body }) => {
            console.line(format_args!("❌ FAILED: API returned status {}", status));
            console.line(format_args!("Response: {}", body));
            false
        }
        Err(e @ GenerationError::Unreachable { .. }) => {
            console.line(format_args!(
                "❌ FAILED: Could not connect to Ollama API at {}",
                client.authority()
            ));
            console.line("Make sure Ollama is running with: ollama serve");
            console.line(format_args!("Error: {}", e));
            false
        }
        Err(e) => {
            console.line(format_args!("❌ FAILED: Error occurred: {}", e));
            false
        }
    }
}
