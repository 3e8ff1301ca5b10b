use crate::domain::DatasetStatus;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, html_response};
use crate::spreadsheets::export_listings_xlsx;
use crate::state::AppState;
use crate::templates::pages::home::{ROOMS_MAX, ROOMS_MIN, SQFT_MAX, SQFT_MIN};
use crate::templates::pages::{dashboard_page, predict_page, prediction_result, DashboardVm, PredictionVm};
use astra::Request;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::info;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    info!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => html_response(predict_page(&state.model.locations(), None)),

        ("GET", "/predict") => {
            let params = parse_query(&req);
            let vm = predict(&params, state)?;

            // htmx only wants the fragment
            if req.headers().contains_key("HX-Request") {
                html_response(prediction_result(&vm))
            } else {
                html_response(predict_page(&state.model.locations(), Some(&vm)))
            }
        }

        ("GET", "/dashboard") => match &state.dataset {
            DatasetStatus::Loaded(ds) => {
                html_response(dashboard_page(Ok(&DashboardVm::from_dataset(ds))))
            }
            DatasetStatus::Unavailable(reason) => html_response(dashboard_page(Err(reason.as_str()))),
        },

        ("GET", "/dashboard/export") => {
            let ds = state.dataset.dataset().ok_or(ServerError::NotFound)?;
            export_listings_xlsx(ds.listings())
        }

        ("GET", "/static/main.css") => css_response(),

        _ => Err(ServerError::NotFound),
    }
}

fn predict(params: &HashMap<String, String>, state: &AppState) -> Result<PredictionVm, ServerError> {
    let location = params
        .get("location")
        .cloned()
        .ok_or_else(|| ServerError::BadRequest("Missing field 'location'".into()))?;

    let sqft: f64 = parse_field(params, "sqft")?;
    if !(SQFT_MIN..=SQFT_MAX).contains(&sqft) {
        return Err(ServerError::BadRequest(format!(
            "sqft must be between {SQFT_MIN} and {SQFT_MAX}"
        )));
    }

    let bath: u32 = parse_field(params, "bath")?;
    let bhk: u32 = parse_field(params, "bhk")?;
    for (name, value) in [("bath", bath), ("bhk", bhk)] {
        if !(ROOMS_MIN..=ROOMS_MAX).contains(&value) {
            return Err(ServerError::BadRequest(format!(
                "{name} must be between {ROOMS_MIN} and {ROOMS_MAX}"
            )));
        }
    }

    let estimate = state
        .model
        .estimate(&location, sqft, bath as f64, bhk as f64)?;

    info!(
        %location,
        sqft,
        bath,
        bhk,
        price = estimate.price_lakhs,
        matched = estimate.location_matched,
        "prediction"
    );

    Ok(PredictionVm {
        location,
        sqft,
        bath,
        bhk,
        estimate,
    })
}

fn parse_field<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<T, ServerError> {
    let raw = params
        .get(key)
        .ok_or_else(|| ServerError::BadRequest(format!("Missing field '{key}'")))?;

    raw.trim()
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Field '{key}' must be a number, got '{raw}'")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
