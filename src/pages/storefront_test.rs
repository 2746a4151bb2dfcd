use super::*;

#[test]
fn product_count_label_reports_the_count() {
    assert_eq!(product_count_label(0), "Total: 0 products");
    assert_eq!(product_count_label(12), "Total: 12 products");
}

#[test]
fn total_amount_renders_as_currency_with_two_decimals() {
    assert_eq!(format_total_amount(1234.5), "$1234.50");
    assert_eq!(format_total_amount(0.0), "$0.00");
}

#[test]
fn parse_new_product_trims_and_accepts_valid_fields() {
    let payload = parse_new_product("  Widget ", " 9.99 ").unwrap();
    assert_eq!(payload.name, "Widget");
    assert!((payload.price - 9.99).abs() < f64::EPSILON);
}

#[test]
fn parse_new_product_requires_a_name() {
    assert!(parse_new_product("   ", "9.99").is_err());
}

#[test]
fn parse_new_product_requires_a_numeric_price() {
    assert!(parse_new_product("Widget", "abc").is_err());
    assert!(parse_new_product("Widget", "").is_err());
}

#[test]
fn parse_new_product_rejects_out_of_bounds_prices() {
    assert!(parse_new_product("Widget", "-1").is_err());
    assert!(parse_new_product("Widget", "1000000000").is_err());
}
