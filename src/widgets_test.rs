use super::*;

#[test]
fn existing_title_is_kept() {
    assert_eq!(fallback_title(Some("Save"), "  Save changes "), None);
}

#[test]
fn empty_existing_title_is_still_kept() {
    assert_eq!(fallback_title(Some(""), "text"), None);
}

#[test]
fn missing_title_uses_trimmed_text() {
    assert_eq!(fallback_title(None, "\n  Save changes  \n").as_deref(), Some("Save changes"));
}

#[test]
fn global_names_match_bootstrap() {
    assert_eq!(Component::Tooltip.global_name(), "Tooltip");
    assert_eq!(Component::Toast.global_name(), "Toast");
    assert_eq!(Component::Offcanvas.global_name(), "Offcanvas");
}
