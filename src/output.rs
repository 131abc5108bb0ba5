//! Human-readable report output
//!
//! This module provides:
//! - Configuration report, one `key: value` per line, bounded by
//!   separator lines
//! - Manifest URL and dependency list display
//!
//! Reports write to any `io::Write` so tests can capture them.

use crate::config::Config;
use colored::Colorize;
use std::io::{self, Write};

const CONFIG_HEADER: &str = "=== Configuration ===";
const CONFIG_FOOTER: &str = "=====================";

/// Text report writer.
pub struct TextReport {
    color: bool,
}

impl TextReport {
    /// Create a report writer with colored headings.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a report writer with colors forced on or off.
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Write the configuration report in canonical parameter order.
    pub fn write_config(&self, config: &Config, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", self.heading(CONFIG_HEADER))?;
        writeln!(writer, "package_name: {}", config.package_name)?;
        writeln!(writer, "repo_url_or_path: {}", config.repo_url_or_path)?;
        writeln!(writer, "test_repo_mode: {}", config.test_repo_mode)?;
        writeln!(writer, "package_version: {}", config.package_version)?;
        writeln!(writer, "max_depth: {}", config.max_depth)?;
        writeln!(writer, "filter_substring: {}", config.filter_substring)?;
        writeln!(writer, "{}", self.heading(CONFIG_FOOTER))?;
        Ok(())
    }

    /// Write the manifest URL and the sorted dependency list, or a
    /// "none found" notice when the list is empty.
    pub fn write_dependencies(
        &self,
        url: &str,
        dependencies: &[String],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Manifest URL: {}", url)?;

        if dependencies.is_empty() {
            writeln!(writer, "No dependencies found.")?;
            return Ok(());
        }

        writeln!(writer, "{}", self.heading("Dependencies:"))?;
        for dependency in dependencies {
            writeln!(writer, "  {}", dependency)?;
        }
        Ok(())
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}
