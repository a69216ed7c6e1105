// Rust guideline compliant 2026-10-12

//! Core data models for Tasklist.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque task identifier (format: tsk-XXXXXXXX).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an identifier string without validating it.
    ///
    /// Ids coming back over the wire are opaque, so any string is accepted.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Selected for the next bulk transition.
    #[serde(default)]
    pub checked: bool,
    /// Set by the finish transition.
    #[serde(default)]
    pub finished: bool,
    /// Soft-delete flag, set by the delete transition.
    #[serde(default)]
    pub deleted: bool,
    /// Free-form numeric value edited by the user.
    ///
    /// A `null` metric (a non-finite number written by a JSON encoder) reads as zero.
    #[serde(default, deserialize_with = "metric_or_zero")]
    pub metric: f64,
}

fn metric_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    /// Creates a fresh task with every flag cleared and a zero metric.
    pub fn new(id: TaskId, name: String) -> Self {
        Self {
            id,
            name,
            checked: false,
            finished: false,
            deleted: false,
            metric: 0.0,
        }
    }
}

/// Sortable task attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Task name.
    Name,
    /// Task metric.
    Metric,
    /// Finished flag.
    Finished,
    /// Deleted flag.
    Deleted,
}

impl SortKey {
    /// Every sort key in declaration order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Metric,
        SortKey::Finished,
        SortKey::Deleted,
    ];

    /// Returns the wire name of the key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Metric => "metric",
            SortKey::Finished => "finished",
            SortKey::Deleted => "deleted",
        }
    }

    /// Parses a wire name into a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a sortable attribute.
    pub fn parse(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "metric" => Ok(SortKey::Metric),
            "finished" => Ok(SortKey::Finished),
            "deleted" => Ok(SortKey::Deleted),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown sort key: {}",
                other
            ))),
        }
    }
}

/// Sort direction for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Parses `asc`/`desc` (or the long forms).
    ///
    /// # Errors
    ///
    /// Returns an error for any other value.
    pub fn parse(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown sort direction: {}",
                other
            ))),
        }
    }
}

/// One level of a multi-key ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    /// Attribute compared by this rule.
    pub key: SortKey,
    /// Direction applied to the comparison.
    pub direction: SortDirection,
}

impl SortRule {
    /// Creates an ascending rule for `key`.
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }
}
