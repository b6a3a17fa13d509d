//! Trip requirements snapshot
//!
//! `TripInfo` mirrors the provider's restrictions payload. It is decoded once
//! per request and never mutated afterwards.
//!
//! Decoding is lenient about absence and strict about type: a missing key or
//! an explicit `null` yields the empty value, while a number where a string is
//! expected fails the whole decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A requirement document as published by the provider
///
/// The provider does not fix a schema for documents, so they are kept as
/// open key/value maps. `document_url` and `title` are common but optional.
pub type Document = Map<String, Value>;

/// Origin or destination of a trip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Display name, e.g. "France"
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// ISO country code as echoed by the provider
    #[serde(deserialize_with = "nullable")]
    pub country_code: String,
    /// Kind of location, usually "country_code"
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub location_type: String,
}

/// Requirement category or sub-category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// One travel requirement (visa, testing, quarantine, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementEntry {
    #[serde(deserialize_with = "nullable")]
    pub category: Category,
    #[serde(deserialize_with = "nullable")]
    pub sub_category: Category,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub details: String,
    /// Opaque display string, not guaranteed to be ISO formatted
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    /// Opaque display string, not guaranteed to be ISO formatted
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub documents: Vec<Document>,
}

/// Decoded restrictions for an origin/destination pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripInfo {
    #[serde(deserialize_with = "nullable")]
    pub origin: Place,
    #[serde(deserialize_with = "nullable")]
    pub destination: Place,
    /// Free-text status token such as "allowed" or "restricted"
    #[serde(deserialize_with = "nullable")]
    pub authorization_status: String,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub details: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    /// When the provider last refreshed this record
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub requirements: Vec<RequirementEntry>,
}

impl TripInfo {
    /// Total number of documents across all requirements
    pub fn document_count(&self) -> usize {
        self.requirements.iter().map(|r| r.documents.len()).sum()
    }
}

/// Treat an explicit `null` the same as a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept an RFC 3339 timestamp, dropping values the provider formats oddly
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}
