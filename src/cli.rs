//! CLI argument handling
//!
//! The surface is deliberately small: exactly one positional argument
//! naming the configuration file. Every other invocation (no arguments,
//! surplus arguments, unknown flags, or any of the help flags) maps to
//! the usage text and exit status 1, so clap's own help and error
//! rendering is disabled.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage text printed for every invalid invocation.
pub const USAGE: &str = "Usage: nudeps <config_file.json>";

/// NuGet package dependency lister
#[derive(Parser, Debug, Clone)]
#[command(name = "nudeps", disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Path to the JSON configuration file
    pub config_path: Option<PathBuf>,

    /// Print usage information
    #[arg(short = 'h', long = "help", alias = "h")]
    pub help: bool,
}

impl CliArgs {
    /// Parse an argument list down to the configuration path.
    ///
    /// Returns the path only for a well-formed invocation: exactly one
    /// positional argument and no help flag. Everything else is `None`,
    /// which the caller maps to usage output and a non-zero exit.
    pub fn config_path_from<I, T>(args: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let parsed = CliArgs::try_parse_from(args).ok()?;
        if parsed.help {
            return None;
        }
        parsed.config_path
    }
}
