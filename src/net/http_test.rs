use super::*;

#[test]
fn only_401_counts_as_unauthorized() {
    assert!(is_unauthorized(401));
    assert!(!is_unauthorized(200));
    assert!(!is_unauthorized(403));
    assert!(!is_unauthorized(500));
}

#[test]
fn expired_sessions_land_on_the_login_page() {
    assert_eq!(LOGIN_REDIRECT, "/login");
}

#[test]
fn redirect_fires_after_the_fixed_delay() {
    assert_eq!(UNAUTHORIZED_DELAY_MS, 100);
}

#[test]
fn session_expired_alert_mentions_logging_in() {
    assert!(session_expired_alert().contains("log in"));
}
