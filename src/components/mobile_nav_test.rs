use super::*;

#[test]
fn open_drawer_carries_the_active_marker() {
    let mut nav = NavState::default();
    nav.toggle();
    assert_eq!(sidebar_class(&nav), "sidebar active");
    assert_eq!(overlay_class(&nav), "sidebar-overlay active");
}

#[test]
fn closed_drawer_has_bare_classes() {
    let nav = NavState::default();
    assert_eq!(sidebar_class(&nav), "sidebar");
    assert_eq!(overlay_class(&nav), "sidebar-overlay");
}
