use crate::dataset::record::RawListing;
use crate::model::features::FeatureRow;

/// One rental listing as loaded from the dataset, validated and normalized.
/// This acts as an anti-corruption layer between the raw CSV row and
/// everything downstream: once a `Listing` exists, its invariants hold.
#[derive(Debug, PartialEq, Clone)]
pub struct Listing {
    pub listing_url: String,
    pub host_name: String,
    pub picture_url: String,
    pub room_type: String,
    pub neighbourhood_group: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub host_is_superhost: bool,
    pub host_identity_verified: bool,
    pub host_has_profile_pic: bool,
    pub accommodates: u32,
    pub minimum_nights: u32,
    pub review_scores_rating: Option<f64>,
    pub price: f64,
    /// Estimated by an offline model run; shipped with the dataset.
    pub predicted_price: f64,
}

impl Listing {
    /// Creates a clean `Listing` from a raw dataset row. Every column the
    /// dashboard relies on must be present and in range.
    pub fn from_raw(raw: RawListing) -> Result<Self, String> {
        let listing_url = required_text(raw.listing_url, "listing_url")?;
        let room_type = required_text(raw.room_type, "room_type")?;
        let neighbourhood_group =
            required_text(raw.neighbourhood_group, "neighbourhood_group_cleansed")?;
        let neighbourhood = required_text(raw.neighbourhood, "neighbourhood_cleansed")?;

        let latitude = raw.latitude.ok_or("missing latitude")?;
        let longitude = raw.longitude.ok_or("missing longitude")?;

        let price = non_negative(raw.price, "price")?;
        let predicted_price = non_negative(raw.predicted_price, "predicted_price")?;

        Ok(Listing {
            listing_url,
            host_name: raw.host_name.unwrap_or_default(),
            picture_url: raw.picture_url.unwrap_or_default(),
            room_type,
            neighbourhood_group,
            neighbourhood,
            latitude,
            longitude,
            host_is_superhost: flag(raw.host_is_superhost, "host_is_superhost")?,
            host_identity_verified: flag(raw.host_identity_verified, "host_identity_verified")?,
            host_has_profile_pic: flag(raw.host_has_profile_pic, "host_has_profile_pic")?,
            accommodates: positive(raw.accommodates, "accommodates")?,
            minimum_nights: positive(raw.minimum_nights, "minimum_nights")?,
            review_scores_rating: rating(raw.review_scores_rating)?,
            price,
            predicted_price,
        })
    }
}

/// One uploaded listing row, reduced to the columns the price model and the
/// what-if analysis need. Uploads carry the dataset columns minus
/// `predicted_price`; any `price` column is ignored.
#[derive(Debug, PartialEq, Clone)]
pub struct NewListing {
    pub host_is_superhost: bool,
    pub host_identity_verified: bool,
    pub host_has_profile_pic: bool,
    pub accommodates: u32,
    pub minimum_nights: u32,
    pub review_scores_rating: f64,
}

impl NewListing {
    /// Validates an uploaded row. This runs before the model is ever
    /// invoked, so a bad upload is reported as a plain validation message
    /// instead of a failed prediction.
    pub fn from_raw(raw: &RawListing) -> Result<Self, String> {
        Ok(NewListing {
            host_is_superhost: flag(raw.host_is_superhost, "host_is_superhost")?,
            host_identity_verified: flag(raw.host_identity_verified, "host_identity_verified")?,
            host_has_profile_pic: flag(raw.host_has_profile_pic, "host_has_profile_pic")?,
            accommodates: positive(raw.accommodates, "accommodates")?,
            minimum_nights: positive(raw.minimum_nights, "minimum_nights")?,
            review_scores_rating: rating(raw.review_scores_rating)?
                .ok_or("missing review_scores_rating")?,
        })
    }

    /// The model input for this listing. This is the only place feature
    /// rows are built, so the baseline and every counterfactual variant go
    /// through the identical column set.
    pub fn feature_row(&self) -> FeatureRow {
        FeatureRow::new(
            self.host_is_superhost,
            self.host_identity_verified,
            self.host_has_profile_pic,
            self.accommodates,
            self.minimum_nights,
            self.review_scores_rating,
        )
    }
}

fn required_text(value: Option<String>, column: &str) -> Result<String, String> {
    value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| format!("missing or empty {column}"))
}

fn flag(value: Option<u8>, column: &str) -> Result<bool, String> {
    match value {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        Some(other) => Err(format!("{column} must be 0 or 1, got {other}")),
        None => Err(format!("missing {column}")),
    }
}

fn positive(value: Option<u32>, column: &str) -> Result<u32, String> {
    match value {
        Some(n) if n >= 1 => Ok(n),
        Some(n) => Err(format!("{column} must be at least 1, got {n}")),
        None => Err(format!("missing {column}")),
    }
}

fn non_negative(value: Option<f64>, column: &str) -> Result<f64, String> {
    match value {
        Some(v) if v >= 0.0 => Ok(v),
        Some(v) => Err(format!("{column} must not be negative, got {v}")),
        None => Err(format!("missing {column}")),
    }
}

fn rating(value: Option<f64>) -> Result<Option<f64>, String> {
    match value {
        Some(v) if (0.0..=5.0).contains(&v) => Ok(Some(v)),
        Some(v) => Err(format!("review_scores_rating must be within 0..5, got {v}")),
        None => Ok(None),
    }
}

#[cfg(test)]
pub(crate) fn test_listing(url: &str, price: f64) -> Listing {
    Listing {
        listing_url: url.to_string(),
        host_name: "Dana".to_string(),
        picture_url: "https://example.com/pic.jpg".to_string(),
        room_type: "Entire home/apt".to_string(),
        neighbourhood_group: "Manhattan".to_string(),
        neighbourhood: "Harlem".to_string(),
        latitude: 40.81,
        longitude: -73.95,
        host_is_superhost: false,
        host_identity_verified: true,
        host_has_profile_pic: true,
        accommodates: 2,
        minimum_nights: 2,
        review_scores_rating: Some(4.5),
        price,
        predicted_price: price,
    }
}
