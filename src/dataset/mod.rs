pub mod record;
pub mod upload;

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::listing::Listing;
use crate::errors::ServerError;
use self::record::RawListing;

/// The process-wide table of listings. Loaded once at startup, never
/// mutated afterwards; every interaction works on borrowed views of it.
#[derive(Debug)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ServerError::DatasetError(format!("failed to open {}: {e}", path.display()))
        })?;
        Self::from_reader(file)
    }

    /// Reads and validates every row. Any violation is fatal: a dashboard
    /// over a half-loaded dataset would silently lie.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ServerError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut listings = Vec::new();
        let mut seen_urls = HashSet::new();
        let mut group_of: HashMap<String, String> = HashMap::new();

        for (index, result) in csv_reader.deserialize::<RawListing>().enumerate() {
            // The header is line 1, so the first record is line 2.
            let line = index + 2;
            let raw = result
                .map_err(|e| ServerError::DatasetError(format!("line {line}: {e}")))?;
            let listing = Listing::from_raw(raw)
                .map_err(|msg| ServerError::DatasetError(format!("line {line}: {msg}")))?;

            if !seen_urls.insert(listing.listing_url.clone()) {
                return Err(ServerError::DatasetError(format!(
                    "line {line}: duplicate listing_url {}",
                    listing.listing_url
                )));
            }

            // Each neighbourhood belongs to exactly one group.
            if let Some(previous) = group_of.insert(
                listing.neighbourhood.clone(),
                listing.neighbourhood_group.clone(),
            ) {
                if previous != listing.neighbourhood_group {
                    return Err(ServerError::DatasetError(format!(
                        "line {line}: neighbourhood {} appears in both {previous} and {}",
                        listing.neighbourhood, listing.neighbourhood_group
                    )));
                }
            }

            listings.push(listing);
        }

        if listings.is_empty() {
            return Err(ServerError::DatasetError(
                "the dataset contains no listings".to_string(),
            ));
        }

        Ok(Dataset { listings })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Lowest and highest price in the dataset, used as the default range
    /// of the price inputs.
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for listing in &self.listings {
            min = min.min(listing.price);
            max = max.max(listing.price);
        }
        (min, max)
    }

    pub fn room_types(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.room_type.as_str()))
    }

    pub fn neighbourhood_groups(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.neighbourhood_group.as_str()))
    }

    /// Detailed neighbourhoods available within one group.
    pub fn neighbourhoods_in(&self, group: &str) -> Vec<&str> {
        distinct(
            self.listings
                .iter()
                .filter(|l| l.neighbourhood_group == group)
                .map(|l| l.neighbourhood.as_str()),
        )
    }
}

/// Distinct values in first-seen order, matching how the original option
/// lists were built.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
