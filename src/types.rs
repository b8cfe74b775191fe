//! Wire types of the concept search service

use serde::{Deserialize, Deserializer, Serialize};

/// A concept as returned by the search service.
///
/// The well-known fields are surfaced for convenience. Anything else the
/// service sends is kept in `extra` so the record passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub concept_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Concept {
    /// Trailing path segment of `id`, e.g. the UUID of
    /// `http://www.ft.com/thing/<uuid>`.
    pub fn uuid(&self) -> Option<&str> {
        self.id
            .as_deref()
            .and_then(|id| id.trim_end_matches('/').rsplit('/').next())
            .filter(|segment| !segment.is_empty())
    }
}

/// Successful search body. A missing or null `concepts` matched nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub concepts: Vec<Concept>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Concept>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Concept>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body the service sends alongside a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
