pub mod handlers;
pub mod types;

use crate::{Result, config::Config, whatsapp::CloudApiClient};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Path aliases served by the same webhook handlers.
pub const WEBHOOK_PATHS: &[&str] = &["/webhook", "/whatsapp/webhook"];

pub fn router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route("/", get(handlers::health))
        .route("/api/message", post(handlers::message));

    for path in WEBHOOK_PATHS {
        router = router.route(
            path,
            get(handlers::verify_webhook).post(handlers::receive_webhook),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let sender = Arc::new(CloudApiClient::new(&config.whatsapp));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let app = router(AppState::new(config, sender));

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
