//! JSON parsing check
//!
//! Round-trips a sample generation response through serde_json and confirms
//! the `response` field survives with non-blank text.

use crate::console::Console;
use crate::error::FixtureError;
use serde_json::Value;
use std::io::Write;

/// Sample body shaped like an `/api/generate` reply
pub fn sample_response() -> Value {
    serde_json::json!({
        "response": "1. I'll cover you while you move!\n2. Watch out for snipers on the roof.\n3. Let's flank them from the left side.",
        "model": "llama3.1:8b",
        "created_at": "2024-01-01T12:00:00Z",
        "done": true,
    })
}

/// Serialize `fixture`, parse it back and pull out `response`
///
/// A missing or non-string `response` yields an empty string.
pub fn extract_suggestions(fixture: &Value) -> Result<String, FixtureError> {
    let text = serde_json::to_string(fixture).map_err(FixtureError::Serialize)?;
    let parsed: Value = serde_json::from_str(&text).map_err(FixtureError::Deserialize)?;

    Ok(parsed
        .get("response")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

/// Run the check against the built-in sample
pub fn run<W: Write>(console: &mut Console<W>) -> bool {
    run_with_fixture(&sample_response(), console)
}

/// Run the check against an arbitrary fixture
pub fn run_with_fixture<W: Write>(fixture: &Value, console: &mut Console<W>) -> bool {
    console.blank();
    console.heading("JSON Parsing Test");

    let suggestions = match extract_suggestions(fixture) {
        Ok(suggestions) => suggestions,
        Err(e @ FixtureError::Deserialize(_)) => {
            tracing::warn!(error = %e, "Fixture failed to parse");
            console.line(format_args!("❌ FAILED: JSON parsing error: {}", e));
            return false;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Fixture round-trip failed");
            console.line(format_args!("❌ FAILED: Unexpected error: {}", e));
            return false;
        }
    };

    console.line("✅ SUCCESS: JSON parsing works correctly");
    console.line(format_args!("Parsed suggestions: {}", suggestions));

    if suggestions.trim().is_empty() {
        console.line("❌ FAILED: Suggestions are empty");
        false
    } else {
        console.line("✅ GOOD: Suggestions are not empty");
        true
    }
}
