// SPDX-License-Identifier: MPL-2.0
//! Session view-parameter persistence using CBOR format.
//!
//! The browser mirrors its page and category into this store on every
//! change, so a later launch (or a `--params` string shared between
//! machines) reproduces the same view the way a shareable URL would.
//! Search text is deliberately not mirrored; it stays in view state.
//!
//! # Path Resolution
//!
//! The session file location can be customized for testing or portable
//! deployments:
//! 1. explicit base directory via `load_from()`/`save_to()`
//! 2. `ICED_CATALOG_DATA_DIR` environment variable
//! 3. platform-specific data directory

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

const STATE_FILE: &str = "session.cbor";
const APP_DIR: &str = "IcedCatalog";
const DATA_DIR_ENV: &str = "ICED_CATALOG_DATA_DIR";

/// View parameters that persist across sessions.
///
/// Both values are kept as strings: that is the parameter-store contract,
/// and it keeps shared parameter strings and stored sessions symmetrical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    /// Current page as a numeric string; absent reads as "1".
    #[serde(default)]
    pub page: Option<String>,
    /// Current category filter; absent reads as "".
    #[serde(default)]
    pub category: Option<String>,
}

impl SessionState {
    /// Parsed page number. Non-numeric or zero values fall back to 1.
    pub fn page_number(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.parse().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    /// Stored category filter, defaulting to "no filter".
    pub fn category_filter(&self) -> String {
        self.category.clone().unwrap_or_default()
    }

    /// Loads the session from the default location.
    ///
    /// Returns the state plus an optional i18n warning key when the file
    /// exists but cannot be read; corrupt sessions degrade to defaults.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => return (Self::default(), Some("warning-session-load".to_string())),
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (Self::default(), Some("warning-session-load".to_string())),
        }
    }

    /// Saves the session to the default location. Returns an i18n warning
    /// key on failure; persistence problems never interrupt browsing.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let path = Self::state_file_path(base_dir)?;
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("warning-session-save".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(_) => return Some("warning-session-save".to_string()),
        };
        match ciborium::into_writer(self, BufWriter::new(file)) {
            Ok(()) => None,
            Err(_) => Some("warning-session-save".to_string()),
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        let dir = base_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))?;
        Some(dir.join(STATE_FILE))
    }
}

/// Parses a shareable `page=2&category=movie` style parameter string.
/// Unknown keys are ignored; missing keys come back as `None`.
pub fn parse_query(params: &str) -> SessionState {
    let mut state = SessionState::default();
    for pair in params.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "page" => state.page = Some(value.to_string()),
            "category" => state.category = Some(value.to_string()),
            _ => {}
        }
    }
    state
}

/// Formats the shareable parameter string for the given view.
pub fn format_query(page: u32, category: &str) -> String {
    if category.is_empty() {
        format!("page={page}")
    } else {
        format!("page={page}&category={category}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let state = SessionState {
            page: Some("3".to_string()),
            category: Some("series".to_string()),
        };

        assert_eq!(state.save_to(Some(dir.path().to_path_buf())), None);
        let (loaded, warning) = SessionState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(loaded, state);
        assert_eq!(warning, None);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = SessionState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(loaded, SessionState::default());
        assert_eq!(warning, None);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(STATE_FILE), b"definitely not cbor")
            .expect("failed to write file");

        let (loaded, warning) = SessionState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(loaded, SessionState::default());
        assert_eq!(warning, Some("warning-session-load".to_string()));
    }

    #[test]
    fn page_number_falls_back_to_one() {
        for bad in [None, Some("0"), Some("-2"), Some("abc"), Some("")] {
            let state = SessionState {
                page: bad.map(str::to_string),
                category: None,
            };
            assert_eq!(state.page_number(), 1, "for {bad:?}");
        }

        let state = SessionState {
            page: Some("4".to_string()),
            category: None,
        };
        assert_eq!(state.page_number(), 4);
    }

    #[test]
    fn parse_query_reads_known_keys_and_ignores_the_rest() {
        let state = parse_query("page=2&category=movie&utm=nope");
        assert_eq!(state.page, Some("2".to_string()));
        assert_eq!(state.category, Some("movie".to_string()));

        let state = parse_query("category=series");
        assert_eq!(state.page, None);
        assert_eq!(state.page_number(), 1);
        assert_eq!(state.category_filter(), "series");
    }

    #[test]
    fn format_query_omits_empty_category() {
        assert_eq!(format_query(2, "movie"), "page=2&category=movie");
        assert_eq!(format_query(1, ""), "page=1");
    }

    #[test]
    fn format_and_parse_are_symmetric() {
        let state = parse_query(&format_query(5, "episode"));
        assert_eq!(state.page_number(), 5);
        assert_eq!(state.category_filter(), "episode");
    }
}
