use std::sync::{Arc, LazyLock};

use textsim_ai::OpenAiEmbedder;
use textsim_server::server;
use textsim_shared::{APP_ENV, AppError};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,textsim_core=debug,textsim_ai=debug,textsim_server=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(ErrorLayer::default())
    .init();

  // Fail at startup, not on the first request, when configuration is missing.
  LazyLock::force(&APP_ENV);

  let provider = Arc::new(OpenAiEmbedder::from_env());
  tracing::info!(
    provider = %APP_ENV.embedding_provider,
    base_url = %APP_ENV.openai_base_url,
    "embedding provider configured"
  );

  server(provider, &APP_ENV.listen_addr).await
}
