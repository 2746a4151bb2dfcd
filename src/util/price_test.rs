use super::*;

// =============================================================
// validate bounds
// =============================================================

#[test]
fn negative_price_is_rejected() {
    assert_eq!(validate("-1"), PriceValidity::Negative);
    assert_eq!(validate("-0.01"), PriceValidity::Negative);
}

#[test]
fn price_above_ceiling_is_rejected() {
    assert_eq!(validate("1000000000"), PriceValidity::TooLarge);
}

#[test]
fn price_exactly_at_ceiling_is_accepted() {
    assert_eq!(validate("999999999.99"), PriceValidity::Valid);
}

#[test]
fn in_bounds_price_is_accepted() {
    assert_eq!(validate("100.5"), PriceValidity::Valid);
    assert_eq!(validate("0"), PriceValidity::Valid);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(validate("  -3 "), PriceValidity::Negative);
}

// =============================================================
// validate non-numeric edge case
// =============================================================

// Unparseable text never compares against either bound, so it clears any
// previous failure state rather than reporting one.
#[test]
fn non_numeric_input_clears_validity() {
    assert_eq!(validate("abc"), PriceValidity::Valid);
    assert_eq!(validate(""), PriceValidity::Valid);
}

#[test]
fn nan_literal_clears_validity() {
    assert_eq!(validate("NaN"), PriceValidity::Valid);
}

// =============================================================
// messages
// =============================================================

#[test]
fn valid_message_is_empty_so_it_clears_the_failure_state() {
    assert_eq!(PriceValidity::Valid.message(), "");
    assert!(PriceValidity::Valid.is_valid());
}

#[test]
fn failure_messages_are_non_empty() {
    assert!(!PriceValidity::Negative.message().is_empty());
    assert!(!PriceValidity::TooLarge.message().is_empty());
    assert!(!PriceValidity::Negative.is_valid());
    assert!(!PriceValidity::TooLarge.is_valid());
}

// =============================================================
// blur formatting
// =============================================================

#[test]
fn blur_formats_to_two_decimals() {
    assert_eq!(format_on_blur("100.5"), Some("100.50".to_owned()));
    assert_eq!(format_on_blur("7"), Some("7.00".to_owned()));
    assert_eq!(format_on_blur("3.14159"), Some("3.14".to_owned()));
}

#[test]
fn blur_leaves_empty_field_untouched() {
    assert_eq!(format_on_blur(""), None);
    assert_eq!(format_on_blur("   "), None);
}

#[test]
fn blur_leaves_unparseable_text_untouched() {
    assert_eq!(format_on_blur("abc"), None);
}
