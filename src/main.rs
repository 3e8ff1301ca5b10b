use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod domain;
mod errors;
mod model;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "homeprice=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Read settings
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load model + schema (required) and the dataset (optional)
    let state = match AppState::load(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Failed to load price model: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);

    let server = Server::bind(config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
