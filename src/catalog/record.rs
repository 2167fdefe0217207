// SPDX-License-Identifier: MPL-2.0
//! Catalog record type and the upstream JSON shape it is decoded from.

use serde::{Deserialize, Deserializer};

/// One catalog entry as served by the record source.
///
/// The upstream service emits capitalized field names, so every field
/// carries an explicit rename. Records are immutable once fetched; the
/// browser owns the set for the duration of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year. Kept as text because some sources emit ranges such
    /// as "2011–2019".
    #[serde(rename = "Year", deserialize_with = "string_or_number")]
    pub year: String,
    /// Open tag set: "movie", "series", "episode", or anything else the
    /// source invents.
    #[serde(rename = "Type")]
    pub category: String,
    /// Poster URI, or an opaque placeholder like "N/A".
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Accepts both `"2010"` and `2010` for the year field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_field_names() {
        let json = r#"{
            "Title": "Blade Runner",
            "Year": "1982",
            "Type": "movie",
            "Poster": "http://example.org/posters/blade-runner.jpg"
        }"#;
        let record: Record = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.title, "Blade Runner");
        assert_eq!(record.year, "1982");
        assert_eq!(record.category, "movie");
        assert!(record.poster.ends_with("blade-runner.jpg"));
    }

    #[test]
    fn accepts_numeric_year() {
        let json = r#"{"Title": "Dune", "Year": 2021, "Type": "movie", "Poster": "N/A"}"#;
        let record: Record = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.year, "2021");
    }

    #[test]
    fn rejects_missing_title() {
        let json = r#"{"Year": "1982", "Type": "movie", "Poster": "N/A"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
