//! Remote API payload types
//!
//! Records are deserialized leniently: every field is optional, text fields
//! accept JSON strings or numbers, and values of any other type read as
//! absent. One malformed field never rejects a whole page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Charts
// ============================================================================

/// A chart record as returned by the charts listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawChart {
    /// Internal identifier
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Public identifier (preferred over `id`)
    #[serde(deserialize_with = "lenient_string")]
    pub public_id: Option<String>,
    /// Chart title
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    /// Visualization type code, e.g. `d3-bars-stacked`
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub chart_type: Option<String>,
    /// Creation timestamp
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    /// Publication timestamp
    #[serde(deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
    /// Last modification timestamp
    #[serde(deserialize_with = "lenient_string")]
    pub last_modified_at: Option<String>,
    /// Public URL of the published chart
    #[serde(deserialize_with = "lenient_string")]
    pub public_url: Option<String>,
    /// Published version number
    #[serde(deserialize_with = "lenient_u64")]
    pub public_version: Option<u64>,
    /// Creator account id
    #[serde(deserialize_with = "lenient_string")]
    pub author_id: Option<String>,
    /// Owning organization id
    #[serde(deserialize_with = "lenient_string")]
    pub organization_id: Option<String>,
    /// Owning team id (older name for `organization_id`)
    #[serde(deserialize_with = "lenient_string")]
    pub team_id: Option<String>,
    /// Nested descriptive metadata
    pub metadata: Option<Value>,
}

impl RawChart {
    /// Identifier used for deduplication and output: the public id when
    /// present, else the internal id, else empty
    pub fn key(&self) -> &str {
        non_empty(self.public_id.as_deref())
            .or_else(|| non_empty(self.id.as_deref()))
            .unwrap_or("")
    }

    /// String at a `/`-separated path under `metadata`
    pub fn metadata_str(&self, pointer: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.pointer(pointer))
            .and_then(Value::as_str)
    }
}

/// One page of the charts listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPage {
    /// Records on this page
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<RawChart>,
    /// Total matching records reported by the server
    #[serde(deserialize_with = "lenient_u64")]
    pub total: Option<u64>,
}

impl ChartPage {
    /// Create a page from records and a reported total
    pub fn new(list: Vec<RawChart>, total: Option<u64>) -> Self {
        Self { list, total }
    }
}

/// Filter and window for a single charts request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartQuery {
    /// Index of the first record
    pub offset: usize,
    /// Page size
    pub limit: usize,
    /// Restrict to one author
    pub author_id: Option<String>,
    /// Restrict to one team
    pub team_id: Option<String>,
    /// Restrict to published charts
    pub published_only: bool,
}

// ============================================================================
// Identity
// ============================================================================

/// The caller's account profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    pub teams: Option<Vec<Team>>,
}

/// A team (organization) the account belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Response of the teams listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamList {
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<Team>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Treat an empty string like a missing value
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accept strings or numbers as text; anything else is absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept non-negative integers or their string form; anything else is absent
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
