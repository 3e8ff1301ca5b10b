pub mod card;
pub mod chart;
pub mod error;

pub use card::card;
pub use chart::{bar_chart, scatter_chart, Bar};
pub use error::html_error_response;
