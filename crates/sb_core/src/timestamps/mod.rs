use time::format_description;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Parse a canonical RFC3339 timestamp. Every record in the collection gets
/// its `reported_at` from the shell clock or the demo seed, so this only
/// returns `None` for values that bypassed record creation entirely.
pub fn parse_rfc3339(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).ok()
}

/// Render an RFC3339 timestamp for the incident card, e.g.
/// `2025-03-15T10:00:00Z` -> `Mar 15, 2025, 10:00 AM`.
///
/// Unparseable input is returned verbatim rather than silently corrected.
pub fn display_timestamp(value: &str) -> String {
    let Some(dt) = parse_rfc3339(value) else {
        return value.to_string();
    };

    let fmt = match format_description::parse(
        "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]",
    ) {
        Ok(items) => items,
        Err(_) => return value.to_string(),
    };

    dt.format(&fmt).unwrap_or_else(|_| value.to_string())
}
