//! Runs both checks in order and prints the summary

use crate::checks::{json_parse, suggestion};
use crate::config::Config;
use crate::console::Console;
use std::io::Write;
use tracing::Instrument;
use uuid::Uuid;

/// Printed when every check passed
pub const ALL_PASSED_MESSAGE: &str = "🎉 ALL TESTS PASSED! Suggestions work without translation.";

/// Printed when at least one check failed
pub const SOME_FAILED_MESSAGE: &str = "⚠️  Some tests failed. Check the output above for details.";

/// Pass/fail outcome of each check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteResults {
    pub json_parse: bool,
    pub suggestion_generation: bool,
}

impl SuiteResults {
    pub fn all_passed(&self) -> bool {
        self.json_parse && self.suggestion_generation
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed { "✅ PASSED" } else { "❌ FAILED" }
}

/// Run the JSON check then the suggestion check, then print the summary
///
/// Both checks always run; a failing JSON check does not skip the network call.
pub async fn run<W: Write>(config: &Config, console: &mut Console<W>) -> SuiteResults {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("smoke_run", run_id = %run_id);

    async {
        tracing::info!(
            endpoint = %config.endpoint.url,
            model = %config.endpoint.model,
            "Starting smoke run"
        );

        console.line("Testing LiveCaptions-Translator Suggestion System");
        console.line("This test verifies that suggestions work without translation");
        console.blank();

        let json_parse = json_parse::run(console);
        let suggestion_generation = suggestion::run(config, console).await;

        let results = SuiteResults {
            json_parse,
            suggestion_generation,
        };
        print_summary(&results, console);

        tracing::info!(
            json_parse = results.json_parse,
            suggestion_generation = results.suggestion_generation,
            "Smoke run finished"
        );
        results
    }
    .instrument(span)
    .await
}

/// Print the per-check verdicts and the aggregate line
pub fn print_summary<W: Write>(results: &SuiteResults, console: &mut Console<W>) {
    console.blank();
    console.separator();
    console.heading("TEST RESULTS");
    console.line(format_args!(
        "JSON Parsing Test: {}",
        verdict(results.json_parse)
    ));
    console.line(format_args!(
        "Suggestion Generation Test: {}",
        verdict(results.suggestion_generation)
    ));
    console.blank();

    if results.all_passed() {
        console.line(ALL_PASSED_MESSAGE);
    } else {
        console.line(SOME_FAILED_MESSAGE);
    }
}
