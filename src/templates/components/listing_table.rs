use maud::{html, Markup};

use crate::domain::listing::Listing;

/// The raw rows behind the current filters.
pub fn listing_table(listings: &[&Listing]) -> Markup {
    html! {
        table class="listings" {
            thead {
                tr {
                    th { "Listing" }
                    th { "Room type" }
                    th { "Neighbourhood" }
                    th { "Accommodates" }
                    th { "Min. nights" }
                    th { "Rating" }
                    th { "Price" }
                    th { "Predicted" }
                }
            }
            tbody {
                @for listing in listings {
                    tr {
                        td { a href=(listing.listing_url) { (listing.listing_url) } }
                        td { (listing.room_type) }
                        td { (listing.neighbourhood) ", " (listing.neighbourhood_group) }
                        td { (listing.accommodates) }
                        td { (listing.minimum_nights) }
                        td {
                            @match listing.review_scores_rating {
                                Some(rating) => { (format!("{rating:.2}")) }
                                None => { "—" }
                            }
                        }
                        td { (format!("{:.0}$", listing.price)) }
                        td { (format!("{:.0}$", listing.predicted_price)) }
                    }
                }
            }
        }
    }
}
