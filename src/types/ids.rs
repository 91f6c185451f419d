// src/types/ids.rs
//! Notion object ID parsing and normalization.
//!
//! Users paste IDs in three shapes: a bare 32-character hex string, a
//! hyphenated UUID, or a full `notion.so` URL whose last path segment ends
//! with the ID. All three normalize to the same canonical 32-hex form.

use super::ValidationError;
use crate::constants::NOTION_ID_LENGTH;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A normalized Notion object ID. The same ID type addresses pages,
/// databases, and blocks — which kind it refers to is only knowable by
/// asking the API (see `NotionFetcher::validate_resource`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotionId(String); // canonical non-hyphenated form

impl NotionId {
    /// Returns the canonical non-hyphenated ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hyphenated UUID form the API endpoints accept.
    pub fn to_hyphenated(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            &self.0[0..8],
            &self.0[8..12],
            &self.0[12..16],
            &self.0[16..20],
            &self.0[20..32]
        )
    }

    /// Parses any of the accepted input shapes into a normalized ID.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');

        // 1. Hyphenated UUID
        if let Ok(uuid) = Uuid::parse_str(cleaned) {
            return Ok(NotionId(uuid.as_simple().to_string()));
        }

        // 2. Bare 32-char hex ID
        if cleaned.len() == NOTION_ID_LENGTH && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(cleaned);
        }

        // 3. URL — the ID trails the last path segment
        if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            return Self::extract_from_url(cleaned);
        }

        Err(ValidationError::InvalidId(format!(
            "could not parse a Notion ID from: {}",
            input
        )))
    }

    /// Builds an ID from a validated hex string.
    fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() == NOTION_ID_LENGTH && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(NotionId(hex.to_lowercase()))
        } else {
            Err(ValidationError::InvalidId(format!(
                "invalid Notion ID format: {}",
                hex
            )))
        }
    }

    /// Extracts the ID from a Notion URL.
    ///
    /// Page URLs embed the ID after the slugified title
    /// (`/My-Page-abcd1234…`), view URLs carry it as the last path segment,
    /// and either form may end with a query string.
    fn extract_from_url(url: &str) -> Result<Self, ValidationError> {
        lazy_static::lazy_static! {
            static ref ID_REGEX: Regex = Regex::new(
                r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
            ).expect("Notion ID regex must compile");
        }

        if let Some(captures) = ID_REGEX.captures(url) {
            if let Some(id_match) = captures.get(1) {
                let id = id_match.as_str().replace('-', "");
                return Self::from_hex(&id);
            }
        }

        Err(ValidationError::InvalidId(format!(
            "no valid ID found in URL: {}",
            url
        )))
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NotionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NotionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NotionId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_hex_id() {
        let id = NotionId::parse("abcd1234abcd1234abcd1234abcd1234").unwrap();
        assert_eq!(id.as_str(), "abcd1234abcd1234abcd1234abcd1234");
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let id = NotionId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn extracts_id_from_page_url_with_query_string() {
        let id = NotionId::parse(
            "https://notion.so/workspace/My-Page-abcd1234abcd1234abcd1234abcd1234?v=1",
        )
        .unwrap();
        assert_eq!(id.as_str(), "abcd1234abcd1234abcd1234abcd1234");
    }

    #[test]
    fn extracts_id_from_bare_path_url() {
        let id =
            NotionId::parse("https://www.notion.so/550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn normalizes_to_lowercase() {
        let id = NotionId::parse("ABCD1234ABCD1234ABCD1234ABCD1234").unwrap();
        assert_eq!(id.as_str(), "abcd1234abcd1234abcd1234abcd1234");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(NotionId::parse("too-short").is_err());
        assert!(NotionId::parse("").is_err());
        assert!(NotionId::parse("https://notion.so/workspace/no-id-here").is_err());
        assert!(NotionId::parse("zzzz1234abcd1234abcd1234abcd1234").is_err());
    }

    #[test]
    fn to_hyphenated_round_trip() {
        let id = NotionId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(NotionId::parse(&id.to_hyphenated()).unwrap(), id);
    }
}
