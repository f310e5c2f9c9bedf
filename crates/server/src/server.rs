use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use textsim_ai::EmbeddingProvider;
use textsim_shared::AppError;
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>textsim</h1><p>POST /api/v0/similarity</p>")
}

/// Full application router with state attached.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(state)
}

pub async fn server(provider: Arc<dyn EmbeddingProvider>, addr: &str) -> Result<(), AppError> {
  let app = router(AppState::new(provider));

  let listener = TcpListener::bind(addr).await?;

  tracing::info!("server started at http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
