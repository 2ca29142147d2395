//! suggestcheck binary
//!
//! Runs the JSON parsing check and the suggestion generation check, then
//! prints a summary. Check failures are reported as text, never as an exit code.

use clap::Parser;
use suggestcheck::cli::{Cli, Command, generate_config_template};
use suggestcheck::{config::Config, console::Console, suite, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        match output {
            Some(path) => {
                std::fs::write(&path, generate_config_template())?;
                println!("Wrote template configuration to {}", path);
            }
            None => print!("{}", generate_config_template()),
        }
        return Ok(());
    }

    // Load configuration (defaults when no file is given)
    let config = Config::load(cli.config.as_deref())?;

    telemetry::init(&config.observability.log_level);

    let mut console = Console::stdout();
    let results = suite::run(&config, &mut console).await;

    tracing::debug!(all_passed = results.all_passed(), "Exiting");
    Ok(())
}
