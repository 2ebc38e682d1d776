use super::*;

#[test]
fn company_logo_ids_are_unique() {
    let mut ids: Vec<u32> = COMPANY_LOGOS.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), COMPANY_LOGOS.len());
}

#[test]
fn locations_are_sorted_and_unique() {
    let mut sorted = LOCATIONS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, LOCATIONS.to_vec());
}

#[test]
fn logo_strip_offset_wraps() {
    assert_eq!(logo_strip_offset(0), 0);
    assert_eq!(logo_strip_offset(COMPANY_LOGOS.len()), 0);
    assert_eq!(logo_strip_offset(COMPANY_LOGOS.len() + 3), 3);
}

#[test]
fn rotated_logos_keeps_every_logo() {
    let rotated = rotated_logos(2);
    assert_eq!(rotated.len(), COMPANY_LOGOS.len());
    assert_eq!(rotated[0], COMPANY_LOGOS[2]);
    assert_eq!(rotated[rotated.len() - 1], COMPANY_LOGOS[1]);
}

#[test]
fn faqs_have_text() {
    assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
}
