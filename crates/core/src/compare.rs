use textsim_ai::EmbeddingProvider;
use textsim_shared::{ModelConfig, ModelType};
use thiserror::Error;

use crate::{SimilarityError, SimilarityResult, score};

#[derive(Debug, Error)]
pub enum CompareError {
  #[error("Both text1 and text2 are required")]
  MissingText,

  #[error("model type `{0}` does not produce embeddings")]
  UnsupportedModelType(ModelType),

  #[error("provider `{requested}` is not available (configured: `{available}`)")]
  UnsupportedProvider { requested: String, available: String },

  #[error("embedding provider failed: {0}")]
  Embedding(anyhow::Error),

  #[error(transparent)]
  Similarity(#[from] SimilarityError),
}

#[derive(Debug, Clone)]
pub struct Comparison {
  pub result: SimilarityResult,
  pub provider: String,
  pub model: String,
}

/// Embed both texts with the same model and score them.
///
/// The two embedding calls run concurrently; scoring waits for both.
pub async fn compare_texts(
  provider: &dyn EmbeddingProvider,
  text1: &str,
  text2: &str,
  config: &ModelConfig,
) -> Result<Comparison, CompareError> {
  if text1.is_empty() || text2.is_empty() {
    return Err(CompareError::MissingText);
  }
  if !config.model_type.produces_embeddings() {
    return Err(CompareError::UnsupportedModelType(config.model_type));
  }
  if !provider.serves(config) {
    return Err(CompareError::UnsupportedProvider {
      requested: config.provider.clone(),
      available: provider.name().to_owned(),
    });
  }

  let (a, b) = tokio::try_join!(provider.embed(text1, config), provider.embed(text2, config))
    .map_err(|err| {
      tracing::warn!(
        provider = %config.provider,
        model = %config.model,
        error = %err,
        "embedding failed"
      );
      CompareError::Embedding(err.into_inner())
    })?;

  let result = score(&a, &b).inspect_err(|err| {
    tracing::warn!(
      provider = %config.provider,
      model = %config.model,
      error = %err,
      "similarity scoring failed"
    );
  })?;

  tracing::debug!(
    provider = %config.provider,
    model = %config.model,
    dimension = result.dimension,
    score = result.score,
    "texts compared"
  );

  Ok(Comparison {
    result,
    provider: config.provider.clone(),
    model: config.model.clone(),
  })
}
