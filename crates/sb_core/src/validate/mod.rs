use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::IncidentDraft;

/// Per-field required-field flags from the last submit attempt.
///
/// These drive the inline form messages directly, so they are plain booleans
/// rather than a warning list. A flag is cleared when its field is edited or
/// when a submit succeeds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub title: bool,
    pub description: bool,
}

impl ValidationError {
    pub fn any(self) -> bool {
        self.title || self.description
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut missing = Vec::new();
        if self.title {
            missing.push("title");
        }
        if self.description {
            missing.push("description");
        }
        write!(
            f,
            "[VALIDATION_REQUIRED_FIELD] Missing required fields: {}",
            missing.join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// Check the draft's required fields. Blank means empty after trimming
/// whitespace; the stored record keeps the text exactly as entered.
pub fn validate_draft(draft: &IncidentDraft) -> ValidationError {
    ValidationError {
        title: draft.title.trim().is_empty(),
        description: draft.description.trim().is_empty(),
    }
}
