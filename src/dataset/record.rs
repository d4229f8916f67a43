use serde::Deserialize;

/// One raw CSV row. Every column is optional so dataset rows and uploaded
/// rows (which may omit the display columns and `predicted_price`) both
/// deserialize through the same struct; validation happens in the domain
/// layer, where missing columns turn into named messages.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawListing {
    pub listing_url: Option<String>,
    pub host_name: Option<String>,
    pub picture_url: Option<String>,
    pub room_type: Option<String>,
    #[serde(rename = "neighbourhood_group_cleansed")]
    pub neighbourhood_group: Option<String>,
    #[serde(rename = "neighbourhood_cleansed")]
    pub neighbourhood: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub host_is_superhost: Option<u8>,
    pub host_identity_verified: Option<u8>,
    pub host_has_profile_pic: Option<u8>,
    pub accommodates: Option<u32>,
    pub minimum_nights: Option<u32>,
    pub review_scores_rating: Option<f64>,
    pub price: Option<f64>,
    pub predicted_price: Option<f64>,
}
