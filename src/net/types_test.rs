use super::*;

#[test]
fn product_parses_and_ignores_unknown_fields() {
    let raw = r#"{"id":3,"name":"Widget","price":12.5,"barcode":"X1","stock":4}"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.id, 3);
    assert_eq!(product.name, "Widget");
    assert!((product.price - 12.5).abs() < f64::EPSILON);
}

#[test]
fn calculate_response_parses_total_and_precision() {
    let raw = r#"{"total_value":1234.5,"precision":"1234.50"}"#;
    let resp: CalculateResponse = serde_json::from_str(raw).unwrap();
    assert!((resp.total_value - 1234.5).abs() < f64::EPSILON);
    assert_eq!(resp.precision, "1234.50");
}

#[test]
fn new_product_serializes_name_and_price() {
    let payload = NewProduct { name: "Widget".to_owned(), price: 9.99 };
    let raw = serde_json::to_string(&payload).unwrap();
    assert!(raw.contains("\"name\":\"Widget\""));
    assert!(raw.contains("\"price\":9.99"));
}
