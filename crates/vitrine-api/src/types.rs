//! Shared response types for the Contentful GraphQL API.
//!
//! The envelope types model the transport-level `{ data, errors }` wrapper;
//! the scalar types (sys reference, image asset, CTA, collection wrapper)
//! recur across every content type's DTOs. Field names use camelCase via
//! `#[serde(rename_all = "camelCase")]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── GraphQL envelope ─────────────────────────────────────────────────

/// Request body for the single POST endpoint: a query document plus
/// its variables.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Response envelope: optional `data`, optional `errors`.
///
/// A well-formed response carries at least one of the two; an envelope
/// with a non-empty `errors` array is a CMS-reported failure even when
/// partial `data` is present.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One query-level error from the envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
}

/// Source position of a query error.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

impl GraphqlError {
    /// One-line rendering with the first source location, if any.
    pub fn summary(&self) -> String {
        match self.locations.first() {
            Some(loc) => format!("{} (line {}, column {})", self.message, loc.line, loc.column),
            None => self.message.clone(),
        }
    }
}

// ── Shared scalars ───────────────────────────────────────────────────

/// The `sys` reference carried by every entry: the CMS-assigned
/// stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sys {
    pub id: String,
}

/// Image asset reference. Only `url` is guaranteed; the rest is
/// author-supplied metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Call-to-action reference (label + target URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaDto {
    pub label: String,
    pub url: String,
}

/// Generic collection wrapper: Contentful exposes every reference list
/// as `{ "items": [...] }` with author-controlled ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
