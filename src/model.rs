// src/model.rs
//! Scrape result as returned by the backend.
//!
//! Only the fields the client dereferences are typed (`title`, `text`,
//! `truncated`, counts). Per-item content (links, images, tables, …) stays as
//! opaque JSON values because the client never looks inside them.
//!
//! Everything past `url` is defaulted, so a sparse payload still decodes.
//! Presence is kept: an absent optional field stays absent on output, an
//! explicit `null` stays `null`, a sent `[]` stays `[]`, and keys the client
//! does not model ride along in `extra`. An export is the received result.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Section key as the backend sent it: a string, or a bare number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionId {
    Text(String),
    Number(Number),
}

impl SectionId {
    /// Opaque key used by the accordion. `1` and `"1"` share a key.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            SectionId::Text(s) => Cow::Borrowed(s),
            SectionId::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.key() == *other
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub scraped_at: Option<Option<String>>,
    #[serde(default)]
    pub meta: Meta,
    /// Presentation order; never re-sorted.
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub interactions: Interactions,
    /// `None` when the backend left the key out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorLog>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScrapeResult {
    /// Page title, treating an empty string as missing.
    pub fn title(&self) -> Option<&str> {
        present(&self.meta.title)
    }

    pub fn scraped_at(&self) -> Option<&str> {
        present(&self.scraped_at)
    }

    pub fn errors(&self) -> &[ErrorLog] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// Ids that appear more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for s in &self.sections {
            let key = s.id.key().into_owned();
            if !seen.insert(key.clone()) && !dups.contains(&key) {
                dups.push(key);
            }
        }
        dups
    }
}

/// Non-empty text of a field that may be absent, `null` or `""`.
pub fn present(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref()).filter(|s| !s.is_empty())
}

/// Outer `None`: key absent. `Some(None)`: key sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub language: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub canonical: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub source_url: Option<Option<String>>,
    /// A section without `content` reads as empty content.
    #[serde(default)]
    pub content: SectionContent,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub raw_html: Option<Option<String>>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub headings: Vec<Value>,
    #[serde(default)]
    pub links: Vec<Value>,
    #[serde(default)]
    pub images: Vec<Value>,
    #[serde(default)]
    pub lists: Vec<Value>,
    #[serde(default)]
    pub tables: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SectionContent {
    /// (label, cardinality) in display order.
    pub fn counts(&self) -> [(&'static str, usize); 5] {
        [
            ("Headings", self.headings.len()),
            ("Links", self.links.len()),
            ("Images", self.images.len()),
            ("Lists", self.lists.len()),
            ("Tables", self.tables.len()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Interactions {
    #[serde(default)]
    pub scrolls: u64,
    #[serde(default)]
    pub clicks: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Non-fatal problem the backend hit while scraping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLog {
    pub message: String,
    #[serde(default)]
    pub phase: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
