//! NuGet manifest (.nuspec) handling
//!
//! This module provides:
//! - Manifest URL construction from package identity fields
//! - Nuspec XML parsing and dependency extraction

mod nuspec;
mod url;

pub use nuspec::{extract_dependencies, DependencyEntry};
pub use url::manifest_url;

/// XML namespace of NuGet manifest documents.
pub const NUSPEC_NAMESPACE: &str = "http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd";
