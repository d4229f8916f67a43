use crate::domain::listing::Listing;

/// How the asking price relates to the model's estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Overvalued,
    FairOrUndervalued,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub price: f64,
    pub predicted_price: f64,
    pub verdict: Verdict,
}

impl Comparison {
    pub fn of(listing: &Listing) -> Self {
        let verdict = if listing.price > listing.predicted_price {
            Verdict::Overvalued
        } else {
            Verdict::FairOrUndervalued
        };
        Comparison {
            price: listing.price,
            predicted_price: listing.predicted_price,
            verdict,
        }
    }
}

/// Exact match on the listing URL, first hit in dataset order. The loader
/// rejects duplicate URLs, so the first hit is the only hit. A miss is a
/// normal outcome the caller turns into a "not found" message.
pub fn find_by_url<'a>(listings: &'a [Listing], url: &str) -> Option<&'a Listing> {
    listings.iter().find(|listing| listing.listing_url == url)
}
