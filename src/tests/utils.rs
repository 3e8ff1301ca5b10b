use crate::domain::{Dataset, DatasetStatus, ListingRecord};
use crate::model::{ColumnSchema, LinearModel, PriceModel};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Schema: sqft, bath, bhk, whitefield, hebbal, indira nagar.
/// Price = 10 + 0.05*sqft + bath + 2*bhk + location bonus (30 / 5 / 50).
pub fn test_model() -> PriceModel {
    let schema = ColumnSchema::new(
        ["sqft", "bath", "bhk", "whitefield", "hebbal", "indira nagar"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
    .expect("valid schema");
    let model = LinearModel::new(10.0, vec![0.05, 1.0, 2.0, 30.0, 5.0, 50.0]);

    PriceModel::new(schema, Box::new(model)).expect("model matches schema")
}

pub fn test_dataset() -> Dataset {
    let row = |location: &str, bhk: u32, area: f64, price: f64| ListingRecord {
        price,
        area,
        bhk,
        bath: 2.0,
        location: location.to_string(),
    };

    Dataset::from_listings(vec![
        row("Whitefield", 2, 1100.0, 60.0),
        row("Whitefield", 3, 1650.0, 95.0),
        row("Hebbal", 2, 1200.0, 70.0),
        row("Indira Nagar", 3, 1800.0, 210.0),
        row("Yelahanka", 1, 600.0, 28.5),
    ])
}

pub fn test_state() -> AppState {
    AppState {
        model: test_model(),
        dataset: DatasetStatus::Loaded(test_dataset()),
    }
}

pub fn state_without_dataset() -> AppState {
    AppState {
        model: test_model(),
        dataset: DatasetStatus::Unavailable("dataset file not found: data.csv".to_string()),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
