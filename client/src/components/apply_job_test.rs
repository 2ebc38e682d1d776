use super::*;

#[test]
fn applied_wins_over_closed() {
    assert_eq!(trigger_state(true, false), ("Applied", false));
    assert_eq!(trigger_state(true, true), ("Applied", false));
}

#[test]
fn closed_job_cannot_be_applied_to() {
    assert_eq!(trigger_state(false, false), ("Hiring Closed", false));
}

#[test]
fn open_job_enables_apply() {
    assert_eq!(trigger_state(false, true), ("Apply", true));
}
