// templates/pages/home.rs

use crate::model::Estimate;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub const SQFT_MIN: f64 = 500.0;
pub const SQFT_MAX: f64 = 10_000.0;
pub const ROOMS_MIN: u32 = 1;
pub const ROOMS_MAX: u32 = 10;

/// A validated prediction request and its result.
#[derive(Debug, Clone)]
pub struct PredictionVm {
    pub location: String,
    pub sqft: f64,
    pub bath: u32,
    pub bhk: u32,
    pub estimate: Estimate,
}

pub fn predict_page(locations: &[&str], result: Option<&PredictionVm>) -> Markup {
    let sqft = result.map(|r| r.sqft).unwrap_or(1000.0);
    let bath = result.map(|r| r.bath).unwrap_or(2);
    let bhk = result.map(|r| r.bhk).unwrap_or(2);
    let selected = result.map(|r| r.location.to_lowercase());

    desktop_layout(
        "Predict",
        html! {
            main class="container" {
                h1 { "Bangalore Home Price Prediction" }
                p { "Estimate " strong { "house prices in Bangalore" } " based on area, bedrooms, bathrooms, and location." }

                (card("Your home", html! {
                    form
                        action="/predict"
                        method="get"
                        hx-get="/predict"
                        hx-target="#prediction-result"
                        hx-swap="innerHTML"
                        class="predict-form"
                    {
                        div class="field" {
                            label for="sqft" { "Total Square Feet" }
                            input type="number" id="sqft" name="sqft" min=(SQFT_MIN) max=(SQFT_MAX) step="50" value=(sqft) required;
                        }
                        div class="field" {
                            label for="bath" { "Number of Bathrooms" }
                            input type="range" id="bath" name="bath" min=(ROOMS_MIN) max=(ROOMS_MAX) value=(bath)
                                oninput="this.nextElementSibling.value = this.value";
                            output { (bath) }
                        }
                        div class="field" {
                            label for="bhk" { "Number of BHK" }
                            input type="range" id="bhk" name="bhk" min=(ROOMS_MIN) max=(ROOMS_MAX) value=(bhk)
                                oninput="this.nextElementSibling.value = this.value";
                            output { (bhk) }
                        }
                        div class="field" {
                            label for="location" { "Select Location" }
                            select id="location" name="location" required {
                                @for loc in locations {
                                    option value=(loc) selected[selected.as_deref() == Some(*loc)] { (loc) }
                                }
                            }
                        }
                        button type="submit" class="primary" { "Predict Price" }
                    }
                }))

                div id="prediction-result" {
                    @if let Some(vm) = result {
                        (prediction_result(vm))
                    }
                }
            }
        },
    )
}

/// The fragment swapped into `#prediction-result`.
pub fn prediction_result(vm: &PredictionVm) -> Markup {
    html! {
        div class="result success" {
            p class="price" {
                "💰 Estimated Price: ₹ " strong { (format!("{:.2}", vm.estimate.price_lakhs)) } " Lakhs"
            }
            p class="muted" {
                (vm.sqft) " sqft · " (vm.bath) " bath · " (vm.bhk) " BHK · " (vm.location)
            }
            @if !vm.estimate.location_matched {
                p class="warning" {
                    "Location not recognized; the estimate uses area, bathrooms and BHK only."
                }
            }
        }
    }
}
