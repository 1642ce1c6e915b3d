use std::sync::Arc;

use fichatrack::client::LookupClient;
use fichatrack::config::TrackConfig;
use fichatrack::routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = TrackConfig::from_env().expect("config load failed");
    let lookup = LookupClient::new(&config).expect("lookup client build failed");
    let state = routes::AppState::new(Arc::new(lookup));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "fichatrack listening");
    axum::serve(listener, app).await.expect("server failed");
}
