use crate::domain::filter::FilterConstraint;
use crate::domain::listing::Listing;

/// Applies the constraint to the full table, preserving dataset order. The
/// result borrows from the dataset; an empty result is a valid outcome, not
/// an error.
pub fn filter<'a>(listings: &'a [Listing], constraint: &FilterConstraint) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| constraint.matches(listing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{PriceRange, Selection};
    use crate::domain::listing::test_listing;

    fn dataset() -> Vec<Listing> {
        vec![
            test_listing("https://www.airbnb.com/rooms/1", 50.0),
            test_listing("https://www.airbnb.com/rooms/2", 100.0),
            test_listing("https://www.airbnb.com/rooms/3", 150.0),
            test_listing("https://www.airbnb.com/rooms/4", 200.0),
        ]
    }

    fn wide_open() -> FilterConstraint {
        FilterConstraint::unconstrained(PriceRange::new(0.0, 1000.0).unwrap())
    }

    #[test]
    fn unconstrained_filter_is_the_identity() {
        let listings = dataset();

        let filtered = filter(&listings, &wide_open());

        assert_eq!(filtered.len(), listings.len());
        assert!(filtered
            .iter()
            .zip(listings.iter())
            .all(|(a, b)| a.listing_url == b.listing_url));
    }

    #[test]
    fn filtering_is_idempotent() {
        let listings = dataset();
        let mut constraint = wide_open();
        constraint.price = PriceRange::new(75.0, 175.0).unwrap();

        let once: Vec<Listing> = filter(&listings, &constraint)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &constraint);

        assert_eq!(once.len(), twice.len());
        assert!(once
            .iter()
            .zip(twice.iter())
            .all(|(a, b)| a.listing_url == b.listing_url));
    }

    #[test]
    fn price_range_keeps_the_inner_listings() {
        let listings = dataset();
        let mut constraint = wide_open();
        constraint.price = PriceRange::new(75.0, 175.0).unwrap();

        let filtered = filter(&listings, &constraint);

        let prices: Vec<f64> = filtered.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![100.0, 150.0]);
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let listings = dataset();
        let mut constraint = wide_open();
        constraint.room_type = Selection::Equals("Hotel room".to_string());

        assert!(filter(&listings, &constraint).is_empty());
    }
}
