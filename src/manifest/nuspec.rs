//! Nuspec dependency extraction
//!
//! Handles:
//! - Top-level `<dependencies>` declarations
//! - Declarations nested in per-target-framework `<group>` elements
//!
//! Grouped and ungrouped declarations are merged into one flat list; the
//! group condition is discarded.

use crate::error::FetchError;
use crate::manifest::NUSPEC_NAMESPACE;
use roxmltree::Document;
use std::fmt;

/// A single dependency declaration from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Package id of the dependency
    pub id: String,
    /// Version constraint, may be empty
    pub version: String,
}

impl DependencyEntry {
    /// Creates a new dependency entry
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} {}", self.id, self.version)
        }
    }
}

/// Extract every dependency declaration from a nuspec document.
///
/// Matches `dependency` elements in the nuspec namespace anywhere in the
/// document. Elements without an `id` attribute are skipped; a missing
/// `version` attribute defaults to the empty string.
pub fn extract_dependencies(xml: &str) -> Result<Vec<DependencyEntry>, FetchError> {
    let document = Document::parse(xml).map_err(|e| FetchError::xml_parse(e.to_string()))?;

    let entries = document
        .descendants()
        .filter(|node| node.has_tag_name((NUSPEC_NAMESPACE, "dependency")))
        .filter_map(|node| {
            node.attribute("id").map(|id| {
                DependencyEntry::new(id, node.attribute("version").unwrap_or_default())
            })
        })
        .collect();

    Ok(entries)
}
