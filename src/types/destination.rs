use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A travel wishlist entry.
///
/// `id` is assigned by the store on insert and is always present on records
/// read back from it. `date_added` is an ISO-8601 UTC timestamp and doubles
/// as the list sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub date_added: String,
    #[serde(default)]
    pub visited: bool,
}

impl Destination {
    /// Builds an unsaved record stamped with the current time.
    ///
    /// Text fields are trimmed; blank notes and image URLs become `None`.
    pub fn draft(name: &str, notes: Option<&str>, image_url: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.trim().to_string(),
            notes: non_blank(notes),
            image_url: non_blank(image_url),
            date_added: timestamp_now(),
            visited: false,
        }
    }
}

/// Trims `value`, mapping empty or whitespace-only input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// The format is fixed-width, so lexicographic order equals chronological order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
