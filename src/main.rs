//! This service is split in 2 main modules:
//!
//! - [chapa] (Chapa gateway integration)
//! - [checkout] (client-facing checkout API)
#![doc = include_str!("../README.md")]

use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

/// Gateway integration implementation
///
/// This module defines the types and methods to communicate with the Chapa
/// payment API, along with the endpoint Chapa notifies after a checkout
/// attempt completes.
mod chapa;
/// Client-facing API surface
///
/// Payment initiation and status polling, consumed by the checkout form.
mod checkout;
mod config;
mod state;
mod store;
mod tx_ref;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };
    let config = Arc::new(config::Config::from_env());
    let port = config.port;
    let gateway = chapa::ChapaGateway::new(Arc::clone(&config));
    let state = state::AppState::new(
        Arc::new(gateway),
        Arc::new(store::MemoryStatusStore::default()),
    );

    let app = Router::new()
        .merge(checkout::api::router())
        .merge(chapa::api::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
        .await
        .unwrap();

    tracing::info!("Serving on port {port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();
}
