//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with loading and validating the run configuration
//! - FetchError: Issues with fetching or parsing a package manifest
//!
//! Configuration errors are fatal and terminate the run; fetch errors are
//! caught at the fetch boundary and downgraded to an empty dependency list.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration object is absent or empty
    #[error("configuration not loaded")]
    NotLoaded,

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration content is not well-formed JSON
    #[error("invalid JSON in configuration file: {message}")]
    ParseError { message: String },

    /// Failed to read configuration file
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required parameter is absent
    #[error("missing required parameter: {field}")]
    MissingField { field: &'static str },

    /// A parameter has the wrong type
    #[error("{field} must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// Errors related to manifest fetching and parsing
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to construct the HTTP client
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    /// Transport-level request failure
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Response carried a non-success HTTP status
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Manifest body could not be parsed as XML
    #[error("failed to parse manifest XML: {message}")]
    XmlParse { message: String },
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ParseError
    pub fn parse_error(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(field: &'static str) -> Self {
        ConfigError::MissingField { field }
    }

    /// Creates a new TypeMismatch error
    pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
        ConfigError::TypeMismatch { field, expected }
    }
}

impl FetchError {
    /// Creates a new Client error
    pub fn client(message: impl Into<String>) -> Self {
        FetchError::Client {
            message: message.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        FetchError::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a new XmlParse error
    pub fn xml_parse(message: impl Into<String>) -> Self {
        FetchError::XmlParse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_loaded() {
        let err = ConfigError::NotLoaded;
        assert_eq!(format!("{}", err), "configuration not loaded");
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::not_found("/path/to/config.json");
        let msg = format!("{}", err);
        assert!(msg.contains("configuration file not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::parse_error("expected value at line 1 column 1");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid JSON"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn test_config_error_io() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::io("/protected/config.json", source);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read configuration file"));
        assert!(msg.contains("/protected/config.json"));
    }

    #[test]
    fn test_config_error_missing_field() {
        let err = ConfigError::missing_field("package_name");
        assert_eq!(
            format!("{}", err),
            "missing required parameter: package_name"
        );
    }

    #[test]
    fn test_config_error_type_mismatch() {
        let err = ConfigError::type_mismatch("max_depth", "a non-negative integer");
        assert_eq!(format!("{}", err), "max_depth must be a non-negative integer");
    }

    #[test]
    fn test_fetch_error_client() {
        let err = FetchError::client("builder failure");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to create HTTP client"));
    }

    #[test]
    fn test_fetch_error_network() {
        let err = FetchError::network("http://feed/Foo/1.0/Foo.nuspec", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("http://feed/Foo/1.0/Foo.nuspec"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_fetch_error_http_status() {
        let err = FetchError::http_status("http://feed/Foo/1.0/Foo.nuspec", 404);
        let msg = format!("{}", err);
        assert!(msg.contains("404"));
        assert!(msg.contains("http://feed/Foo/1.0/Foo.nuspec"));
    }

    #[test]
    fn test_fetch_error_xml_parse() {
        let err = FetchError::xml_parse("unexpected end of stream");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse manifest XML"));
        assert!(msg.contains("unexpected end of stream"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ConfigError::missing_field("max_depth");
        let debug = format!("{:?}", err);
        assert!(debug.contains("MissingField"));
    }
}
