use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Upstream e-commerce source a product was listed from.
///
/// The wire tags are not uniformly cased: the backend sends `"Flipkart"`
/// capitalized and the other two in lowercase. Any other tag reads as
/// [`Store::Unknown`] rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Store {
    #[serde(rename = "Flipkart")]
    Flipkart,
    #[serde(rename = "myntra")]
    Myntra,
    #[serde(rename = "meesho")]
    Meesho,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Store {
    pub const ALL: [Store; 3] = [Store::Flipkart, Store::Myntra, Store::Meesho];

    /// The tag exactly as the backend expects it in `?store=`.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Store::Flipkart => "Flipkart",
            Store::Myntra => "myntra",
            Store::Meesho => "meesho",
            Store::Unknown => "unknown",
        }
    }

    /// Human-facing name for page headers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Store::Flipkart => "Flipkart",
            Store::Myntra => "Myntra",
            Store::Meesho => "Meesho",
            Store::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Case-insensitive, so `flipkart` and `Myntra` are accepted on the command line.
impl FromStr for Store {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Store::ALL
            .into_iter()
            .find(|store| store.as_tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownStore(s.to_string()))
    }
}

/// A product record as served by the deals backend.
///
/// Read-only on the client: records are created and updated by the backend
/// and only ever re-fetched here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Price as display text, exactly as the backend returns it (e.g. `"₹499"`).
    pub price: String,
    /// Image URL or path.
    pub image: String,
    pub store: Store,
    #[serde(rename = "affiliateLink")]
    pub affiliate_link: String,
    pub category: String,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Returns `true` if the title or category contains `needle`, ignoring case.
    ///
    /// `needle` is expected to be lower-cased already; callers filtering a
    /// whole list lower-case it once.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// Reads RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC).
/// Anything else, including non-strings, becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => parse_timestamp(&text),
        Raw::Other(_) => None,
    })
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
