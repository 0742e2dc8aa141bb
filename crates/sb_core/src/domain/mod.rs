use serde::{Deserialize, Serialize};

/// Categorical severity label. Used only for filtering and display; the type
/// deliberately implements no ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Severity filter as exposed by the filter select: `All` or one severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Low,
    Medium,
    High,
}

impl SeverityFilter {
    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Low => severity == Severity::Low,
            SeverityFilter::Medium => severity == Severity::Medium,
            SeverityFilter::High => severity == Severity::High,
        }
    }
}

/// Sort order for the incident list, keyed on `reported_at`.
/// Serialized forms match the sort select values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

/// A single reported AI-safety incident.
///
/// `reported_at` is an RFC3339 UTC string assigned at creation time; records
/// are never mutated or deleted after creation, and `id` is unique for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: String,
}

/// Transient, unsaved state of the new-incident form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Default for IncidentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            severity: Severity::Medium,
        }
    }
}
