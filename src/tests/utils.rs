use std::io::Read;

use astra::{Body, Request, Response};

use crate::app::App;
use crate::dataset::Dataset;
use crate::model::LinearModel;

/// A small dataset with the production schema: two boroughs, two room
/// types, prices 50/100/150/200, one listing priced above its prediction.
pub const TEST_CSV: &str = "\
listing_url,host_name,picture_url,room_type,neighbourhood_group_cleansed,neighbourhood_cleansed,latitude,longitude,host_is_superhost,host_identity_verified,host_has_profile_pic,accommodates,minimum_nights,review_scores_rating,price,predicted_price
https://www.airbnb.com/rooms/1,Ana,https://example.com/1.jpg,Entire home/apt,Manhattan,Harlem,40.81,-73.95,1,1,1,2,2,4.9,50,60
https://www.airbnb.com/rooms/2,Ben,https://example.com/2.jpg,Private room,Brooklyn,Williamsburg,40.71,-73.96,0,1,1,2,1,4.5,100,110
https://www.airbnb.com/rooms/3,Cleo,https://example.com/3.jpg,Private room,Brooklyn,Bushwick,40.69,-73.92,0,0,1,3,3,4.2,150,150
https://www.airbnb.com/rooms/4,Dana,https://example.com/4.jpg,Entire home/apt,Manhattan,East Village,40.73,-73.99,1,1,1,4,2,4.8,200,180
";

/// Same artifact shape as the production file, with round coefficients so
/// the expected deltas are easy to read off.
pub const TEST_MODEL: &str = r#"{
    "name": "test-linear",
    "intercept": 50.0,
    "features": [
        {"name": "host_is_superhost", "coefficient": 10.0},
        {"name": "host_identity_verified", "coefficient": 5.0},
        {"name": "host_has_profile_pic", "coefficient": 2.0},
        {"name": "accommodates", "coefficient": 20.0},
        {"name": "minimum_nights", "coefficient": -1.0},
        {"name": "review_scores_rating", "coefficient": 4.0}
    ]
}"#;

/// An upload with superhost off, so the what-if page must suggest the
/// +10$ superhost improvement under `TEST_MODEL`.
pub const TEST_UPLOAD: &str = "\
listing_url,host_name,picture_url,room_type,neighbourhood_group_cleansed,neighbourhood_cleansed,latitude,longitude,host_is_superhost,host_identity_verified,host_has_profile_pic,accommodates,minimum_nights,review_scores_rating,price
https://www.airbnb.com/rooms/555,Rae,https://example.com/555.jpg,Private room,Queens,Astoria,40.76,-73.92,0,1,1,2,2,4.5,95
";

/// Builds a fully in-memory `App`; no files, no network.
pub fn test_app() -> App {
    let dataset = Dataset::from_reader(TEST_CSV.as_bytes()).expect("test dataset should load");
    let model = LinearModel::from_json(TEST_MODEL).expect("test model should load");
    App { dataset, model }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post(path: &str, content_type: &str, body: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
