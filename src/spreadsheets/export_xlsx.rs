use rust_xlsxwriter::Workbook;

use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};

/// Writes the current filtered view into a workbook and returns it as a
/// download.
pub fn export_listings_xlsx(listings: &[&Listing]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Listing URL",
        "Host",
        "Room Type",
        "Neighbourhood Group",
        "Neighbourhood",
        "Price",
        "Predicted Price",
        "Accommodates",
        "Minimum Nights",
        "Review Rating",
        "Superhost",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.listing_url)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write url: {e}")))?;

        worksheet
            .write_string(r, 1, &listing.host_name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write host: {e}")))?;

        worksheet
            .write_string(r, 2, &listing.room_type)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write room type: {e}")))?;

        worksheet
            .write_string(r, 3, &listing.neighbourhood_group)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write group: {e}")))?;

        worksheet
            .write_string(r, 4, &listing.neighbourhood)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write neighbourhood: {e}")))?;

        worksheet
            .write_number(r, 5, listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {e}")))?;

        worksheet
            .write_number(r, 6, listing.predicted_price)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write predicted price: {e}"))
            })?;

        worksheet
            .write_number(r, 7, f64::from(listing.accommodates))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write accommodates: {e}")))?;

        worksheet
            .write_number(r, 8, f64::from(listing.minimum_nights))
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write minimum nights: {e}"))
            })?;

        if let Some(rating) = listing.review_scores_rating {
            worksheet
                .write_number(r, 9, rating)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write rating: {e}")))?;
        }

        worksheet
            .write_string(r, 10, if listing.host_is_superhost { "Yes" } else { "No" })
            .map_err(|e| ServerError::XlsxError(format!("Failed to write superhost: {e}")))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "filtered_listings.xlsx")
}
