use crate::dataset::record::RawListing;
use crate::domain::listing::NewListing;
use crate::errors::ServerError;

/// Parses an uploaded single-row CSV into a validated [`NewListing`].
/// Validation failures are user errors (400) and are reported before the
/// model is ever invoked.
pub fn parse_new_listing(csv_text: &str) -> Result<NewListing, ServerError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let raw = match reader.deserialize::<RawListing>().next() {
        Some(Ok(raw)) => raw,
        Some(Err(e)) => {
            return Err(ServerError::BadRequest(format!(
                "could not parse the listing row: {e}"
            )))
        }
        None => {
            return Err(ServerError::BadRequest(
                "the upload contains no listing row".to_string(),
            ))
        }
    };

    // Like the original dashboard, only the first row is priced.
    NewListing::from_raw(&raw).map_err(ServerError::BadRequest)
}
