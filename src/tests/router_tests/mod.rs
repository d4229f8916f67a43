mod dashboard_tests;
mod export_tests;
mod lookup_tests;
mod predict_tests;
