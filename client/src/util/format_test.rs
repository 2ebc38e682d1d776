use super::*;

#[test]
fn excerpt_stops_at_first_period() {
    assert_eq!(excerpt("We build boards. You ship features."), "We build boards");
}

#[test]
fn excerpt_without_period_returns_trimmed_text() {
    assert_eq!(excerpt("  No sentences here  "), "No sentences here");
    assert_eq!(excerpt(""), "");
}

#[test]
fn applicant_label_pluralizes() {
    assert_eq!(applicant_label(0), "0 Applicants");
    assert_eq!(applicant_label(1), "1 Applicant");
    assert_eq!(applicant_label(12), "12 Applicants");
}

#[test]
fn hiring_status_placeholder_reflects_flag() {
    assert_eq!(hiring_status_placeholder(true), "Hiring Status ( Open )");
    assert_eq!(hiring_status_placeholder(false), "Hiring Status ( Closed )");
}

#[test]
fn display_timestamp_trims_seconds_and_zone() {
    assert_eq!(display_timestamp("2026-01-03T10:20:30.123Z"), "2026-01-03 10:20");
    assert_eq!(display_timestamp("2026-01-03 10:20:30+05:30"), "2026-01-03 10:20");
}

#[test]
fn display_timestamp_passes_through_unexpected_input() {
    assert_eq!(display_timestamp("yesterday"), "yesterday");
    assert_eq!(display_timestamp("2026/01/03T10:20"), "2026/01/03T10:20");
}

#[test]
fn display_timestamp_tolerates_multibyte_input() {
    assert_eq!(display_timestamp("2026-01-01T00:0é:00Z"), "2026-01-01T00:0é:00Z");
    assert_eq!(display_timestamp("2026-01-01Tü0:00:00Z"), "2026-01-01Tü0:00:00Z");
}
