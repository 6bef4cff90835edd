mod api;
mod client;
mod dto;
mod error;
mod state;

use crate::{client::HslClient, state::AppState};
use axum::routing::get;
use chrono_tz::Tz;
use clap::Parser;
use std::{sync::Arc, time::Duration};
use tracing::{error, info};
use transit_lens::hsl;

#[derive(Parser)]
#[command(name = "transit-lens-server")]
#[command(about = "Nearby stop and departure statistics for the HSL area")]
struct Args {
    /// Port to run the HTTP server on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,
    /// Digitransit subscription key, sent with every request
    #[arg(long, env = "HSL_API_KEY")]
    api_key: Option<String>,
    /// GraphQL endpoint, defaults to the HSL router
    #[arg(long, env = "HSL_ENDPOINT")]
    endpoint: Option<String>,
    /// Upstream request timeout in seconds
    #[arg(long, env = "HSL_TIMEOUT", default_value = "10")]
    timeout: u64,
    /// IANA zone the service day starts in, defaults to Europe/Helsinki
    #[arg(long, env = "HSL_TIME_ZONE")]
    time_zone: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args = Args::parse();
    if args.api_key.is_none() {
        error!("No HSL_API_KEY set, requests will most likely be rejected");
    }

    let mut config = hsl::Config::default();
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(name) = args.time_zone {
        config.time_zone = match name.parse::<Tz>() {
            Ok(zone) => zone,
            Err(err) => {
                error!("Unknown time zone {name}: {err}");
                std::process::exit(1);
            }
        };
    }
    info!("Service days start at midnight in {}", config.time_zone);
    let client = match HslClient::new(config, args.api_key, Duration::from_secs(args.timeout)) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(client));

    let app = axum::Router::new()
        .route("/health", get(api::health))
        .route("/near", get(api::near))
        .route("/map", get(api::map))
        .route("/modes", get(api::modes))
        .route("/stops/{id}/analysis", get(api::analysis))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", args.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", args.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
