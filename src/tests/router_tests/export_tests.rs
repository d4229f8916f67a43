use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn the_export_is_an_xlsx_attachment() {
    let app = test_app();

    let resp = handle(get("/export?price_min=75&price_max=175"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(disposition.contains("filtered_listings.xlsx"));
}

#[test]
fn an_inverted_range_fails_the_export_as_well() {
    let app = test_app();

    assert!(handle(get("/export?price_min=200&price_max=100"), &app).is_err());
}

#[test]
fn example_listings_download_as_csv() {
    let app = test_app();

    let resp = handle(get("/examples/example1.csv"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/csv"));

    let body = body_string(resp);
    assert!(body.starts_with("listing_url,"));
}

#[test]
fn the_stylesheet_is_served() {
    let app = test_app();

    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}
