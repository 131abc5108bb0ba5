//! Manifest URL construction
//!
//! NuGet-style feeds expose a package manifest at a conventional path:
//! `<repo>/<package>/<version>/<package>.nuspec`.

/// Build the manifest URL for a package.
///
/// Components are joined verbatim with `/` separators. No percent-encoding
/// or slash normalization is applied; the URL goes out exactly as the
/// configuration spells it.
pub fn manifest_url(repo: &str, package: &str, version: &str) -> String {
    format!("{}/{}/{}/{}.nuspec", repo, package, version, package)
}
