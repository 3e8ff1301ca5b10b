pub mod html;
pub mod static_files;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{html_response, html_status_response};
pub use static_files::css_response;
pub use xlsx::xlsx_response;
