use crate::domain::stats::{self, Summary};
use crate::domain::Dataset;
use crate::templates::components::{bar_chart, scatter_chart, Bar};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

const PRICE_BINS: usize = 12;
const TOP_LOCATIONS: usize = 15;
const SCATTER_POINTS: usize = 600;

pub struct DashboardVm {
    pub summary: Option<Summary>,
    pub dropped: usize,
    pub price_bins: Vec<Bar>,
    pub top_locations: Vec<Bar>,
    pub bhk_prices: Vec<Bar>,
    pub sqft_price: Vec<(f64, f64)>,
}

impl DashboardVm {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let listings = dataset.listings();

        DashboardVm {
            summary: stats::summary(listings),
            dropped: dataset.dropped(),
            price_bins: stats::price_histogram(listings, PRICE_BINS)
                .into_iter()
                .map(|b| Bar {
                    label: format!("{:.0}–{:.0}", b.lower, b.upper),
                    value: b.count as f64,
                })
                .collect(),
            top_locations: stats::location_averages(listings, TOP_LOCATIONS)
                .into_iter()
                .map(|g| Bar {
                    label: format!("{} ({})", g.key, g.count),
                    value: g.mean_price,
                })
                .collect(),
            bhk_prices: stats::bhk_averages(listings)
                .into_iter()
                .map(|g| Bar {
                    label: format!("{} BHK ({})", g.key, g.count),
                    value: g.mean_price,
                })
                .collect(),
            sqft_price: stats::sqft_price_points(listings, SCATTER_POINTS),
        }
    }
}

/// `vm` is `Err(reason)` when no dataset could be loaded.
pub fn dashboard_page(vm: Result<&DashboardVm, &str>) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Market Dashboard" }

                @match vm {
                    Err(reason) => {
                        section class="card notice" {
                            h3 { "Dataset unavailable" }
                            p { "The listings dataset could not be loaded, so charts are disabled. Price prediction still works." }
                            p class="muted" { (reason) }
                            a href="/" { "Go to prediction" }
                        }
                    }
                    Ok(vm) => {
                        (summary_card(vm))

                        @if vm.summary.is_some() {
                            (card("Price distribution", bar_chart("Listings per price band (Lakhs)", &vm.price_bins, "listings")))
                            (card("Location averages", bar_chart("Average price by location", &vm.top_locations, "Lakhs")))
                            (card("BHK vs price", bar_chart("Average price by BHK", &vm.bhk_prices, "Lakhs")))
                            (card("Sqft vs price", scatter_chart("Area against price", &vm.sqft_price, "Total sqft", "Price (Lakhs)")))
                        }
                    }
                }
            }
        },
    )
}

fn summary_card(vm: &DashboardVm) -> Markup {
    card(
        "Dataset",
        html! {
            @match &vm.summary {
                Some(s) => {
                    p { strong { (s.count) } " listings after cleaning, " (vm.dropped) " rows dropped." }
                    p { "Mean price: " strong { (format!("{:.2}", s.mean_price)) } " Lakhs · Median: " strong { (format!("{:.2}", s.median_price)) } " Lakhs" }
                    a href="/dashboard/export" { "Download cleaned listings (.xlsx)" }
                }
                None => p { "No usable listings (" (vm.dropped) " rows dropped)." },
            }
        },
    )
}
