//! nudeps - NuGet package dependency lister CLI tool
//!
//! Validates a JSON run configuration and, outside test-repo mode,
//! fetches the package's direct dependency list from a NuGet-style feed
//! by retrieving and parsing its .nuspec manifest.

use nudeps::cli::{CliArgs, USAGE};
use nudeps::config::Config;
use nudeps::fetcher::DependencyFetcher;
use nudeps::output::TextReport;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(config_path) = CliArgs::config_path_from(std::env::args()) else {
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    match run(&config_path) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Unexpected error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(config_path: &Path) -> anyhow::Result<ExitCode> {
    let config = match Config::load_and_validate(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = TextReport::new();
    let mut stdout = io::stdout().lock();
    report.write_config(&config, &mut stdout)?;

    if config.test_repo_mode {
        eprintln!("test_repo_mode enabled; skipping dependency fetch");
        return Ok(ExitCode::SUCCESS);
    }

    let url = DependencyFetcher::manifest_url(&config);

    // Fetch failures degrade to an empty list with a diagnostic; the run
    // still succeeds once the configuration has validated.
    let dependencies = match DependencyFetcher::new().and_then(|f| f.fetch(&config)) {
        Ok(dependencies) => dependencies,
        Err(e) => {
            eprintln!("warning: dependency fetch failed: {}", e);
            Vec::new()
        }
    };

    report.write_dependencies(&url, &dependencies, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
