pub mod dashboard;
pub mod prediction;

pub use dashboard::{dashboard_page, DashboardVm, FoundListingVm, LookupVm};
pub use prediction::{prediction_page, PredictionVm};
