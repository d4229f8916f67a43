use url::form_urlencoded;

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

fn check_url_path(url: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("check_url", url)
        .finish();
    format!("/?{query}")
}

#[test]
fn an_overvalued_listing_warns_the_renter() {
    let app = test_app();

    // Listed at 200, predicted at 180.
    let resp = handle(
        get(&check_url_path("https://www.airbnb.com/rooms/4")),
        &app,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("hosted by Dana"));
    assert!(body.contains("You might be overpaying"));
}

#[test]
fn a_fairly_priced_listing_is_a_catch() {
    let app = test_app();

    // Listed at 100, predicted at 110.
    let resp = handle(
        get(&check_url_path("https://www.airbnb.com/rooms/2")),
        &app,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("found yourself a catch"));
}

#[test]
fn an_unknown_url_is_a_message_not_an_error() {
    let app = test_app();

    let resp = handle(
        get(&check_url_path("https://www.airbnb.com/rooms/404")),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("could not be found in our database"));
}

#[test]
fn a_blank_lookup_shows_no_result_section() {
    let app = test_app();

    let resp = handle(get("/?check_url="), &app).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("could not be found in our database"));
}
