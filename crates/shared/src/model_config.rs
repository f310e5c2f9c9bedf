use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Kind of model a configuration points at.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModelType {
  Llm,
  TextEmbedding,
  Rerank,
  #[serde(rename = "speech2text")]
  #[strum(serialize = "speech2text")]
  Speech2Text,
  Tts,
  Moderation,
}

impl ModelType {
  #[must_use]
  pub const fn produces_embeddings(self) -> bool {
    matches!(self, Self::TextEmbedding)
  }
}

/// Which embedding model to use. Both texts of a comparison are embedded
/// with the same configuration so their vectors share one coordinate space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelConfig {
  pub provider: String,
  pub model: String,
  pub model_type: ModelType,
  /// Requested output dimension, for models that support shortening.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dimensions: Option<u32>,
}

impl ModelConfig {
  #[must_use]
  pub fn text_embedding(provider: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      provider: provider.into(),
      model: model.into(),
      model_type: ModelType::TextEmbedding,
      dimensions: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn model_type_wire_names() {
    assert_eq!(ModelType::TextEmbedding.to_string(), "text-embedding");
    assert_eq!(ModelType::Speech2Text.to_string(), "speech2text");
    assert_eq!(ModelType::from_str("rerank").unwrap(), ModelType::Rerank);

    let parsed: ModelType = serde_json::from_str("\"speech2text\"").unwrap();
    assert_eq!(parsed, ModelType::Speech2Text);
  }

  #[test]
  fn only_text_embedding_produces_embeddings() {
    assert!(ModelType::TextEmbedding.produces_embeddings());
    assert!(!ModelType::Llm.produces_embeddings());
    assert!(!ModelType::Rerank.produces_embeddings());
  }

  #[test]
  fn deserializes_without_dimensions() {
    let config: ModelConfig = serde_json::from_str(
      r#"{"provider":"openai","model":"text-embedding-3-small","model_type":"text-embedding"}"#,
    )
    .unwrap();

    assert_eq!(
      config,
      ModelConfig::text_embedding("openai", "text-embedding-3-small")
    );
  }
}
