use std::sync::Arc;

use textsim_ai::EmbeddingProvider;

#[derive(Clone)]
pub struct AppState {
  pub provider: Arc<dyn EmbeddingProvider>,
}

impl AppState {
  #[must_use]
  pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
    Self { provider }
  }
}
