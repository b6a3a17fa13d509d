//! View projection
//!
//! Flattens a [`TripInfo`] into the shape the page renderer consumes. The
//! projection is pure and cannot fail: absent values become empty strings.

use chrono::{DateTime, Utc};
use domain::{Document, RequirementEntry, TripInfo};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Document key holding the link target
const DOCUMENT_URL_KEY: &str = "document_url";

/// Keys tried, in order, for a document's visible label
const DOCUMENT_LABEL_KEYS: [&str; 2] = ["title", "name"];

/// URL schemes rendered as links
const LINKABLE_SCHEMES: [&str; 2] = ["http", "https"];

/// Label used when a document has neither a title nor a URL
const FALLBACK_DOCUMENT_LABEL: &str = "Document";

/// Rendering-ready view of a trip's requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripView {
    pub origin_name: String,
    pub destination_name: String,
    /// Title-cased authorization status, e.g. "Allowed"
    pub status_label: String,
    pub summary: String,
    pub details: String,
    pub start_date: String,
    pub end_date: String,
    /// Date of the provider's last update, `YYYY-MM-DD` or empty
    pub updated_on: String,
    pub requirements: Vec<RequirementView>,
}

/// One requirement paragraph with its documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementView {
    pub category: String,
    pub sub_category: String,
    pub summary: String,
    pub details: String,
    pub start_date: String,
    pub end_date: String,
    pub documents: Vec<DocumentLink>,
}

/// A document note, linked when the provider supplied an http(s) URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub label: String,
    pub url: Option<String>,
}

/// Project decoded trip info into a view
pub fn project(info: &TripInfo) -> TripView {
    TripView {
        origin_name: info.origin.name.clone(),
        destination_name: info.destination.name.clone(),
        status_label: to_title_case(&info.authorization_status),
        summary: info.summary.clone(),
        details: info.details.clone(),
        start_date: info.start_date.trim().to_string(),
        end_date: info.end_date.trim().to_string(),
        updated_on: format_display_date(info.updated_at.as_ref()),
        requirements: info.requirements.iter().map(project_requirement).collect(),
    }
}

fn project_requirement(entry: &RequirementEntry) -> RequirementView {
    RequirementView {
        category: entry.category.name.clone(),
        sub_category: entry.sub_category.name.clone(),
        summary: entry.summary.clone(),
        details: entry.details.clone(),
        start_date: entry.start_date.trim().to_string(),
        end_date: entry.end_date.trim().to_string(),
        documents: entry.documents.iter().map(project_document).collect(),
    }
}

fn project_document(document: &Document) -> DocumentLink {
    let url = non_blank(document, DOCUMENT_URL_KEY).filter(|u| is_linkable(u));
    let label = DOCUMENT_LABEL_KEYS
        .iter()
        .find_map(|key| non_blank(document, key))
        .or_else(|| url.clone())
        .unwrap_or_else(|| FALLBACK_DOCUMENT_LABEL.to_string());

    DocumentLink { label, url }
}

/// String value of `key`, trimmed, if present and not blank
fn non_blank(document: &Document, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn is_linkable(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| LINKABLE_SCHEMES.contains(&url.scheme()))
}

/// Uppercase the first letter of each word and lowercase the rest
///
/// A word starts after whitespace or after ASCII punctuation other than `_`,
/// so `partially-allowed` becomes `Partially-Allowed` while `not_allowed`
/// stays one word. Separators are preserved as-is.
pub fn to_title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if is_word_separator(c) {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || (c.is_ascii() && !c.is_ascii_alphanumeric() && c != '_')
}

/// Format a timestamp as a calendar date, or empty when absent
pub fn format_display_date(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp.map_or_else(String::new, |t| t.format("%Y-%m-%d").to_string())
}
