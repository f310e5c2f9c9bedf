use anyhow::anyhow;
use async_openai::{Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs};
use async_trait::async_trait;
use textsim_shared::{APP_ENV, AppError, ModelConfig};

use crate::EmbeddingProvider;

/// Embeddings from any OpenAI-compatible `/embeddings` endpoint.
#[derive(Clone)]
pub struct OpenAiEmbedder {
  name: String,
  client: Client<OpenAIConfig>,
}

impl OpenAiEmbedder {
  #[must_use]
  pub fn new(name: impl Into<String>, api_base: &str, api_key: &str) -> Self {
    let config = OpenAIConfig::new()
      .with_api_key(api_key)
      .with_api_base(api_base);

    Self {
      name: name.into(),
      client: Client::with_config(config),
    }
  }

  /// Build from `OPENAI_*` and `EMBEDDING_PROVIDER` environment variables.
  #[must_use]
  pub fn from_env() -> Self {
    Self::new(
      APP_ENV.embedding_provider.as_str(),
      &APP_ENV.openai_base_url,
      &APP_ENV.openai_api_key,
    )
  }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
  fn name(&self) -> &str {
    &self.name
  }

  async fn embed_many(
    &self,
    inputs: &[String],
    config: &ModelConfig,
  ) -> Result<Vec<Vec<f32>>, AppError> {
    if inputs.is_empty() {
      return Ok(vec![]);
    }

    let mut args = CreateEmbeddingRequestArgs::default();
    args.model(&config.model).input(inputs.to_vec());
    if let Some(dimensions) = config.dimensions {
      args.dimensions(dimensions);
    }
    let request = args.build()?;

    let response = self.client.embeddings().create(request).await?;

    // Sort by index to ensure ordering matches input
    let mut data = response.data;
    data.sort_by_key(|e| e.index);

    if data.len() != inputs.len() {
      return Err(
        anyhow!(
          "embedding count mismatch: expected {}, got {}",
          inputs.len(),
          data.len()
        )
        .into(),
      );
    }

    tracing::debug!(
      provider = %self.name,
      model = %config.model,
      count = data.len(),
      "embeddings received"
    );

    Ok(data.into_iter().map(|e| e.embedding).collect())
  }
}
