use crate::errors::ServerError;
use crate::responses::html_status_response;
use astra::{Body, Response};
use maud::{html, Markup, DOCTYPE};
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),

        ServerError::BadRequest(msg) => (400, msg.clone()),

        ServerError::Model(e) => (500, format!("Model Error: {e}")),

        ServerError::XlsxError(msg) => (500, format!("Spreadsheet Error: {msg}")),

        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    if status >= 500 {
        error!("{err}");
    }

    html_status_response(status, render_error(status, &message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}
