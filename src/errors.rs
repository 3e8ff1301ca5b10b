use crate::model::ModelError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (model, dataset, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Model Error: {0}")]
    Model(#[from] ModelError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
