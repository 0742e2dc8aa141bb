use serde::{Deserialize, Serialize};

use crate::board::IncidentBoard;
use crate::domain::{IncidentDraft, Severity, SeverityFilter, SortOrder};
use crate::timestamps::display_timestamp;
use crate::validate::ValidationError;

pub const BOARD_SNAPSHOT_VERSION: u32 = 1;

/// One incident in visible order, carrying everything the card needs so the
/// frontend does no computation of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentCardV1 {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub severity_class: String,
    pub reported_at: String,
    pub reported_at_display: String,
    pub expanded: bool,
}

/// Versioned render payload derived from the board on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshotV1 {
    pub version: u32,
    pub total_count: i64,
    pub visible_count: i64,
    pub severity_filter: SeverityFilter,
    pub sort_order: SortOrder,
    pub show_form: bool,
    pub draft: IncidentDraft,
    pub draft_errors: ValidationError,
    pub incidents: Vec<IncidentCardV1>,
}

/// CSS hook for the severity badge.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "severity-low",
        Severity::Medium => "severity-medium",
        Severity::High => "severity-high",
    }
}

pub fn build_board_snapshot(board: &IncidentBoard) -> BoardSnapshotV1 {
    let visible = board.visible_incidents();

    let incidents: Vec<IncidentCardV1> = visible
        .iter()
        .map(|incident| IncidentCardV1 {
            id: incident.id,
            title: incident.title.clone(),
            description: incident.description.clone(),
            severity: incident.severity,
            severity_class: severity_class(incident.severity).to_string(),
            reported_at: incident.reported_at.clone(),
            reported_at_display: display_timestamp(&incident.reported_at),
            expanded: board.is_expanded(incident.id),
        })
        .collect();

    BoardSnapshotV1 {
        version: BOARD_SNAPSHOT_VERSION,
        total_count: board.incidents().len() as i64,
        visible_count: incidents.len() as i64,
        severity_filter: board.severity_filter(),
        sort_order: board.sort_order(),
        show_form: board.show_form(),
        draft: board.draft().clone(),
        draft_errors: board.draft_errors(),
        incidents,
    }
}
