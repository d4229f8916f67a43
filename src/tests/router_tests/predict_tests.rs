use url::form_urlencoded;

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, post, test_app, TEST_UPLOAD};

#[test]
fn a_raw_csv_upload_is_priced() {
    let app = test_app();

    let resp = handle(post("/predict", "text/csv", TEST_UPLOAD), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // 50 + 5 + 2 + 40 - 2 + 18 under the test model.
    assert!(body.contains("Your listing is worth <strong>113$</strong>"));
    // Superhost is off in the upload and weighs +10.
    assert!(body.contains("By becoming a superhost"));
    assert!(body.contains("<strong>10$</strong>"));
    // The profile picture is already there.
    assert!(body.contains("already added a profile picture"));
    // One more guest weighs +20.
    assert!(body.contains("accommodate one more person"));
}

#[test]
fn the_form_field_upload_is_priced_too() {
    let app = test_app();

    let form: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("listing_csv", TEST_UPLOAD)
        .finish();

    let resp = handle(
        post("/predict", "application/x-www-form-urlencoded", &form),
        &app,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("Your listing is worth"));
}

#[test]
fn a_missing_feature_column_is_rejected_by_name() {
    let app = test_app();

    let without_rating = TEST_UPLOAD
        .replace(",review_scores_rating", "")
        .replace(",4.5,95", ",95");

    let err = handle(post("/predict", "text/csv", &without_rating), &app).unwrap_err();
    match err {
        ServerError::BadRequest(msg) => assert!(msg.contains("review_scores_rating")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn an_empty_upload_is_rejected() {
    let app = test_app();

    let err = handle(post("/predict", "text/csv", "  "), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn a_missing_form_field_is_rejected() {
    let app = test_app();

    let err = handle(
        post("/predict", "application/x-www-form-urlencoded", "other=1"),
        &app,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
