use crate::domain::listing::Listing;

/// One categorical filter dimension. The HTML form's "All" option maps to
/// `Unconstrained` at the boundary; everything downstream works on this
/// tagged form instead of comparing sentinel strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unconstrained,
    Equals(String),
}

impl Selection {
    /// "All", empty, or absent form values mean no constraint.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("All") => Selection::Unconstrained,
            Some(v) => Selection::Equals(v.to_string()),
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::Unconstrained => true,
            Selection::Equals(wanted) => wanted == value,
        }
    }

    /// The constrained value, for echoing the selection back into the form.
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::Unconstrained => None,
            Selection::Equals(v) => Some(v),
        }
    }
}

/// Inclusive price bounds. Inverted ranges are invalid input and never
/// construct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, String> {
        if min > max {
            return Err(format!(
                "the minimum price {min} is above the maximum price {max}"
            ));
        }
        Ok(PriceRange { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The user's current filter choices, built fresh on every interaction and
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConstraint {
    pub price: PriceRange,
    pub room_type: Selection,
    pub neighbourhood_group: Selection,
    pub neighbourhood: Selection,
}

impl FilterConstraint {
    pub fn unconstrained(price: PriceRange) -> Self {
        FilterConstraint {
            price,
            room_type: Selection::Unconstrained,
            neighbourhood_group: Selection::Unconstrained,
            neighbourhood: Selection::Unconstrained,
        }
    }

    /// The detailed neighbourhood only narrows the result once a group is
    /// chosen; a stale neighbourhood selection while the group is back on
    /// "All" is ignored.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.price.contains(listing.price) {
            return false;
        }
        if !self.room_type.admits(&listing.room_type) {
            return false;
        }
        match &self.neighbourhood_group {
            Selection::Unconstrained => true,
            Selection::Equals(group) => {
                listing.neighbourhood_group == *group
                    && self.neighbourhood.admits(&listing.neighbourhood)
            }
        }
    }
}
