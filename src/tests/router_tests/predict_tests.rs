use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::Method;

#[test]
fn home_page_lists_sorted_locations() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Predict Price"));

    let hebbal = body.find(">hebbal<").expect("hebbal option");
    let indira = body.find(">indira nagar<").expect("indira nagar option");
    let whitefield = body.find(">whitefield<").expect("whitefield option");
    assert!(hebbal < indira && indira < whitefield);
}

#[test]
fn predict_renders_full_page_with_estimate() {
    let state = test_state();

    let resp = handle(
        get("/predict?location=Whitefield&sqft=1000&bath=2&bhk=2"),
        &state,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // 10 + 50 + 2 + 4 + 30
    assert!(body.contains("96.00"), "body: {body}");
    assert!(body.contains("Estimated Price"));
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("Location not recognized"));
}

#[test]
fn predict_decodes_form_encoded_location() {
    let state = test_state();

    let resp = handle(
        get("/predict?location=Indira+Nagar&sqft=1000&bath=2&bhk=2"),
        &state,
    )
    .expect("Handler failed");

    // 10 + 50 + 2 + 4 + 50
    assert!(body_string(resp).contains("116.00"));
}

#[test]
fn htmx_request_gets_fragment_only() {
    let state = test_state();

    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/predict?location=hebbal&sqft=1500&bath=3&bhk=3")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &state).expect("Handler failed"));

    // 10 + 75 + 3 + 6 + 5
    assert!(body.contains("99.00"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn unknown_location_degrades_to_no_location_signal() {
    let state = test_state();

    let resp = handle(
        get("/predict?location=Atlantis&sqft=1000&bath=2&bhk=2"),
        &state,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // 10 + 50 + 2 + 4
    assert!(body.contains("66.00"));
    assert!(body.contains("Location not recognized"));
}

#[test]
fn invalid_inputs_are_bad_requests() {
    let state = test_state();

    for uri in [
        "/predict?location=hebbal&sqft=abc&bath=2&bhk=2",
        "/predict?location=hebbal&sqft=1000&bath=0&bhk=2",
        "/predict?location=hebbal&sqft=1000&bath=2&bhk=11",
        "/predict?location=hebbal&sqft=20&bath=2&bhk=2",
        "/predict?location=hebbal&sqft=NaN&bath=2&bhk=2",
        "/predict?location=hebbal&bath=2&bhk=2",
        "/predict?sqft=1000&bath=2&bhk=2",
    ] {
        let result = handle(get(uri), &state);
        assert!(
            matches!(result, Err(ServerError::BadRequest(_))),
            "expected 400 for {uri}"
        );
    }
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    assert!(matches!(
        handle(get("/admin"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();

    let resp = handle(get("/static/main.css"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}
