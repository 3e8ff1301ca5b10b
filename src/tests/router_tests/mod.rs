mod dashboard_tests;
mod predict_tests;
