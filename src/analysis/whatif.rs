use crate::domain::listing::NewListing;
use crate::errors::ServerError;
use crate::model::Predictor;

/// Outcome of one counterfactual: the attribute is already in its best
/// state, or changing it moves the predicted price by `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    AlreadySatisfied,
    Improvement(f64),
    NoImprovement(f64),
}

/// Price sensitivities for the fixed set of easily changeable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfReport {
    /// Predicted price of the listing exactly as uploaded.
    pub baseline: f64,
    pub superhost: Outcome,
    pub identity_verified: Outcome,
    pub profile_pic: Outcome,
    pub extra_guest: Outcome,
}

/// Prices the uploaded listing and one independent variant per attribute.
/// The input is never mutated; every variant is a fresh copy of the
/// unmodified baseline, so branches cannot contaminate each other.
pub fn evaluate_counterfactuals(
    listing: &NewListing,
    predictor: &dyn Predictor,
) -> Result<WhatIfReport, ServerError> {
    let baseline = predict_one(predictor, listing)?;

    let superhost = toggled(listing, predictor, baseline, listing.host_is_superhost, |l| {
        l.host_is_superhost = true
    })?;
    let identity_verified = toggled(
        listing,
        predictor,
        baseline,
        listing.host_identity_verified,
        |l| l.host_identity_verified = true,
    )?;
    let profile_pic = toggled(
        listing,
        predictor,
        baseline,
        listing.host_has_profile_pic,
        |l| l.host_has_profile_pic = true,
    )?;

    // Hosting one more guest is always worth pricing; a count has no
    // "already satisfied" state.
    let mut variant = listing.clone();
    variant.accommodates += 1;
    let extra_guest = outcome(predict_one(predictor, &variant)? - baseline);

    Ok(WhatIfReport {
        baseline,
        superhost,
        identity_verified,
        profile_pic,
        extra_guest,
    })
}

/// Prices a variant with one boolean attribute switched on. Attributes that
/// are already set report `AlreadySatisfied` without invoking the model.
fn toggled(
    listing: &NewListing,
    predictor: &dyn Predictor,
    baseline: f64,
    already_set: bool,
    set: impl Fn(&mut NewListing),
) -> Result<Outcome, ServerError> {
    if already_set {
        return Ok(Outcome::AlreadySatisfied);
    }
    let mut variant = listing.clone();
    set(&mut variant);
    Ok(outcome(predict_one(predictor, &variant)? - baseline))
}

fn predict_one(predictor: &dyn Predictor, listing: &NewListing) -> Result<f64, ServerError> {
    let prices = predictor.predict(&[listing.feature_row()])?;
    prices.first().copied().ok_or(ServerError::InternalError)
}

fn outcome(delta: f64) -> Outcome {
    if delta > 0.0 {
        Outcome::Improvement(delta)
    } else {
        Outcome::NoImprovement(delta)
    }
}
