use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn the_dashboard_shows_everything_by_default() {
    let app = test_app();

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("match <strong>4</strong> of <strong>4</strong> listings"));
}

#[test]
fn a_price_band_narrows_the_view() {
    let app = test_app();

    let resp = handle(get("/?price_min=75&price_max=175"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("match <strong>2</strong> of <strong>4</strong> listings"));
    // Mean of 100 and 150.
    assert!(body.contains("125$"));
}

#[test]
fn a_room_type_narrows_the_view() {
    let app = test_app();

    let resp = handle(get("/?room_type=Private+room"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("match <strong>2</strong> of <strong>4</strong> listings"));
}

#[test]
fn a_stale_neighbourhood_is_ignored_without_a_group() {
    let app = test_app();

    let resp = handle(get("/?group=All&neighbourhood=Bushwick"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("match <strong>4</strong> of <strong>4</strong> listings"));
}

#[test]
fn a_group_reveals_its_detailed_neighbourhoods() {
    let app = test_app();

    let resp = handle(get("/?group=Brooklyn&neighbourhood=Bushwick"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("match <strong>1</strong> of <strong>4</strong> listings"));
    assert!(body.contains("Detailed neighbourhood"));
    assert!(body.contains("Williamsburg"));
}

#[test]
fn an_empty_view_shows_no_data_instead_of_numbers() {
    let app = test_app();

    let resp = handle(get("/?price_min=900&price_max=1000"), &app).unwrap();
    let body = body_string(resp);

    assert!(body.contains("match <strong>0</strong> of <strong>4</strong> listings"));
    assert!(body.contains("nothing to average"));
}

#[test]
fn an_inverted_price_range_is_rejected() {
    let app = test_app();

    let err = handle(get("/?price_min=200&price_max=100"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn a_garbled_price_is_rejected() {
    let app = test_app();

    let err = handle(get("/?price_min=cheap"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app();

    let err = handle(get("/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
