use time::OffsetDateTime;

use crate::domain::{Incident, IncidentDraft, Severity, SeverityFilter, SortOrder};
use crate::timestamps::parse_rfc3339;
use crate::validate::{validate_draft, ValidationError};

/// In-memory view-model for the incident dashboard.
///
/// Owns the incident collection and all transient UI state (filter, sort,
/// expanded id, form visibility, draft, per-field flags). Every state
/// transition happens synchronously inside one of the methods below; the
/// collection is never exposed by mutable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentBoard {
    incidents: Vec<Incident>,
    severity_filter: SeverityFilter,
    sort_order: SortOrder,
    expanded_incident: Option<i64>,
    show_form: bool,
    draft: IncidentDraft,
    draft_errors: ValidationError,
}

impl Default for IncidentBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl IncidentBoard {
    pub fn new() -> Self {
        Self {
            incidents: Vec::new(),
            severity_filter: SeverityFilter::All,
            sort_order: SortOrder::Newest,
            expanded_incident: None,
            show_form: false,
            draft: IncidentDraft::default(),
            draft_errors: ValidationError::default(),
        }
    }

    /// Build a board over a pre-assembled collection (demo seed). Ids are
    /// taken as-is; callers are responsible for keeping them unique.
    pub fn with_incidents(incidents: Vec<Incident>) -> Self {
        Self {
            incidents,
            ..Self::new()
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn severity_filter(&self) -> SeverityFilter {
        self.severity_filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn expanded_incident(&self) -> Option<i64> {
        self.expanded_incident
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded_incident == Some(id)
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    pub fn draft(&self) -> &IncidentDraft {
        &self.draft
    }

    pub fn draft_errors(&self) -> ValidationError {
        self.draft_errors
    }

    /// Append a new record. Fails when either required field is blank after
    /// trimming; on success the record gets `id = current count + 1` and the
    /// given creation timestamp, and a clone of it is returned.
    ///
    /// `reported_at` is computed by the caller (the shell owns the wall
    /// clock), which keeps this method deterministic under test.
    pub fn add_incident(
        &mut self,
        title: &str,
        description: &str,
        severity: Severity,
        reported_at: &str,
    ) -> Result<Incident, ValidationError> {
        let errors = ValidationError {
            title: title.trim().is_empty(),
            description: description.trim().is_empty(),
        };
        if errors.any() {
            return Err(errors);
        }

        let incident = Incident {
            id: self.incidents.len() as i64 + 1,
            title: title.to_string(),
            description: description.to_string(),
            severity,
            reported_at: reported_at.to_string(),
        };
        self.incidents.push(incident.clone());
        Ok(incident)
    }

    /// Submit the current draft. On validation failure the per-field flags
    /// are stored for the inline messages and the collection is unchanged.
    /// On success the draft and flags reset to defaults and the form hides.
    pub fn submit_draft(&mut self, reported_at: &str) -> Result<Incident, ValidationError> {
        let errors = validate_draft(&self.draft);
        self.draft_errors = errors;
        if errors.any() {
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.draft);
        let incident = self.add_incident(
            &draft.title,
            &draft.description,
            draft.severity,
            reported_at,
        )?;
        self.show_form = false;
        Ok(incident)
    }

    pub fn set_severity_filter(&mut self, filter: SeverityFilter) {
        self.severity_filter = filter;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Show/hide the report form. Hiding via the toggle (Cancel) keeps the
    /// draft and flags; only a successful submit resets them.
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn set_draft_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
        self.draft_errors.title = false;
    }

    pub fn set_draft_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.draft_errors.description = false;
    }

    pub fn set_draft_severity(&mut self, severity: Severity) {
        self.draft.severity = severity;
    }

    /// Toggle the single globally-tracked expanded incident: at most one
    /// record shows its details at a time, and a second toggle on the same
    /// id collapses it.
    pub fn toggle_details(&mut self, id: i64) {
        self.expanded_incident = if self.expanded_incident == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// The derived view: filter by severity, then stable-sort by
    /// `reported_at`. Recomputed on every call; equal timestamps keep
    /// insertion order, and unparseable ones sort as the UNIX epoch.
    pub fn visible_incidents(&self) -> Vec<&Incident> {
        let mut visible: Vec<&Incident> = self
            .incidents
            .iter()
            .filter(|incident| self.severity_filter.matches(incident.severity))
            .collect();

        fn sort_key(incident: &Incident) -> OffsetDateTime {
            parse_rfc3339(&incident.reported_at).unwrap_or(OffsetDateTime::UNIX_EPOCH)
        }

        match self.sort_order {
            SortOrder::Newest => visible.sort_by(|a, b| sort_key(b).cmp(&sort_key(a))),
            SortOrder::Oldest => visible.sort_by(|a, b| sort_key(a).cmp(&sort_key(b))),
        }

        visible
    }
}
