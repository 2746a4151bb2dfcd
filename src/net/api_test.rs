use super::*;

#[test]
fn failure_messages_carry_the_status_code() {
    assert_eq!(products_request_failed_message(500), "products request failed: 500");
    assert_eq!(calculate_request_failed_message(502), "calculate request failed: 502");
    assert_eq!(create_product_failed_message(422), "create product failed: 422");
}

#[test]
fn failure_messages_are_distinct_per_endpoint() {
    assert_ne!(products_request_failed_message(500), calculate_request_failed_message(500));
    assert_ne!(calculate_request_failed_message(500), create_product_failed_message(500));
}
