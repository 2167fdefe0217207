// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// `Network` and `Parse` cover the two ways a record fetch can fail: no
/// usable response at all, or a response whose body cannot be decoded.
/// `Config` and `Io` cover preference and session persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Network(String),
    Parse(String),
    Config(String),
    Io(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    /// Used to surface errors as localized inline text.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Network(_) => "error-network",
            Error::Parse(_) => "error-parse",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_network_error() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network Error: connection refused");
    }

    #[test]
    fn display_formats_parse_error() {
        let err = Error::Parse("unexpected token".to_string());
        assert_eq!(format!("{}", err), "Parse Error: unexpected token");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_parse_variant() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("not [valid").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_cover_all_variants() {
        assert_eq!(Error::Network(String::new()).i18n_key(), "error-network");
        assert_eq!(Error::Parse(String::new()).i18n_key(), "error-parse");
        assert_eq!(Error::Config(String::new()).i18n_key(), "error-config");
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-io");
    }
}
