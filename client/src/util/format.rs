//! Small display formatters for job and application records.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// First sentence of a job description, used on listing cards.
#[must_use]
pub fn excerpt(description: &str) -> &str {
    let text = description.trim();
    match text.find('.') {
        Some(end) => &text[..end],
        None => text,
    }
}

#[must_use]
pub fn applicant_label(count: usize) -> String {
    if count == 1 { "1 Applicant".to_owned() } else { format!("{count} Applicants") }
}

#[must_use]
pub fn hiring_status_placeholder(is_open: bool) -> &'static str {
    if is_open { "Hiring Status ( Open )" } else { "Hiring Status ( Closed )" }
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` without parsing
/// offsets; falls back to the raw string when the shape is unexpected.
#[must_use]
pub fn display_timestamp(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() >= 16
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && matches!(bytes[10], b'T' | b' ')
        && bytes[13] == b':';
    match (well_formed, raw.get(..10), raw.get(11..16)) {
        (true, Some(date), Some(time)) => format!("{date} {time}"),
        _ => raw.to_owned(),
    }
}
