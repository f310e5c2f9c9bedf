use anyhow::anyhow;
use async_trait::async_trait;
use textsim_shared::{AppError, ModelConfig};

/// Source of embedding vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
  /// Identifier requests use to select this provider.
  fn name(&self) -> &str;

  /// Embed multiple texts with one configuration.
  ///
  /// Returns one vector per input, in the same order.
  async fn embed_many(
    &self,
    inputs: &[String],
    config: &ModelConfig,
  ) -> Result<Vec<Vec<f32>>, AppError>;

  async fn embed(&self, input: &str, config: &ModelConfig) -> Result<Vec<f32>, AppError> {
    self
      .embed_many(&[input.to_owned()], config)
      .await?
      .pop()
      .ok_or_else(|| anyhow!("empty embedding").into())
  }

  /// Whether this provider answers for `config.provider`.
  fn serves(&self, config: &ModelConfig) -> bool {
    self.name().eq_ignore_ascii_case(config.provider.trim())
  }
}
