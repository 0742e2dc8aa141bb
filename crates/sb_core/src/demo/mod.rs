use crate::board::IncidentBoard;
use crate::domain::{Incident, Severity};

/// Canonical seed dataset shown on first launch.
///
/// Timestamps are RFC3339 so the sorted view is deterministic; ids are
/// sequential from 1 so form submissions continue the sequence.
pub fn demo_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: 1,
            title: "Biased Recommendation Algorithm".to_string(),
            description: "Algorithm consistently favored certain demographics in job \
                          recommendations, leading to unfair outcomes for applicants from \
                          underrepresented groups."
                .to_string(),
            severity: Severity::Medium,
            reported_at: "2025-03-15T10:00:00Z".to_string(),
        },
        Incident {
            id: 2,
            title: "LLM Hallucination in Critical Info".to_string(),
            description: "LLM provided incorrect safety procedure information to healthcare \
                          workers, potentially endangering patient care in emergency situations."
                .to_string(),
            severity: Severity::High,
            reported_at: "2025-04-01T14:30:00Z".to_string(),
        },
        Incident {
            id: 3,
            title: "Minor Data Leak via Chatbot".to_string(),
            description: "Chatbot inadvertently exposed non-sensitive user metadata through API \
                          responses that weren't properly sanitized."
                .to_string(),
            severity: Severity::Low,
            reported_at: "2025-03-20T09:15:00Z".to_string(),
        },
    ]
}

/// A board pre-populated with the demo dataset, as managed by the shell at
/// startup.
pub fn seed_demo_board() -> IncidentBoard {
    IncidentBoard::with_incidents(demo_incidents())
}
