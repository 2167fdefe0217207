// SPDX-License-Identifier: MPL-2.0
//! Asynchronous retrieval of the full record set.

use crate::catalog::record::Record;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("IcedCatalog/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Fetches every record from the catalog service.
///
/// The service takes no filtering or paging parameters; the full set comes
/// back in one response and all narrowing happens locally. A failed request
/// maps to [`Error::Network`], a body that is not a JSON array of records
/// to [`Error::Parse`].
pub async fn fetch_records(url: &str) -> Result<Vec<Record>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let records = serde_json::from_slice(&body)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_maps_to_network_error() {
        let result = fetch_records("not a url").await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn record_array_body_decodes() {
        let body = br#"[
            {"Title": "Alien", "Year": "1979", "Type": "movie", "Poster": "N/A"},
            {"Title": "Aliens", "Year": "1986", "Type": "movie", "Poster": "N/A"}
        ]"#;
        let records: Vec<Record> = serde_json::from_slice(body).expect("valid body");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        let body = br#"{"message": "service unavailable"}"#;
        let result: Result<Vec<Record>> =
            serde_json::from_slice(body).map_err(Error::from);
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
