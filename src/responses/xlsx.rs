use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Spreadsheet download; `filename` ends up in the browser's save dialog.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let len = buffer.len();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header("Content-Length", len)
        .header("Cache-Control", "no-store")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
