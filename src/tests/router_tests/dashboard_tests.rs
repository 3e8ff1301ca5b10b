use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, state_without_dataset, test_state};

#[test]
fn dashboard_renders_charts() {
    let state = test_state();

    let resp = handle(get("/dashboard"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Market Dashboard"));
    assert!(body.contains("5</strong> listings after cleaning"));
    assert!(body.contains("Average price by location"));
    assert!(body.contains("Average price by BHK"));
    assert!(body.contains("Area against price"));
    assert_eq!(body.matches("<circle").count(), 5);
}

#[test]
fn dashboard_without_dataset_shows_notice() {
    let state = state_without_dataset();

    let resp = handle(get("/dashboard"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Dataset unavailable"));
    assert!(body.contains("dataset file not found"));
    assert!(!body.contains("class=\"chart\""));
}

#[test]
fn prediction_still_works_without_dataset() {
    let state = state_without_dataset();

    let resp = handle(
        get("/predict?location=whitefield&sqft=1000&bath=2&bhk=2"),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("96.00"));
}

#[test]
fn export_downloads_xlsx() {
    let state = test_state();

    let resp = handle(get("/dashboard/export"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("bangalore_listings_clean.xlsx"));
}

#[test]
fn export_without_dataset_is_not_found() {
    let state = state_without_dataset();

    assert!(matches!(
        handle(get("/dashboard/export"), &state),
        Err(ServerError::NotFound)
    ));
}
