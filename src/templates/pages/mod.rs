pub mod dashboard;
pub mod home;

pub use dashboard::{dashboard_page, DashboardVm};
pub use home::{predict_page, prediction_result, PredictionVm};
