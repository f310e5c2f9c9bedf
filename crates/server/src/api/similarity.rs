use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
};
use serde::{Deserialize, Serialize};
use textsim_core::{CompareError, compare_texts, score};
use textsim_shared::{AppError, ModelConfig};
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct Similarity {
  #[serde(default)]
  pub text1: String,
  #[serde(default)]
  pub text2: String,
  /// Model both texts are embedded with
  pub embedding_model: Option<ModelConfig>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimilarityResponse {
  /// Score in [0, 1]; 1 means the embeddings point the same way
  pub similarity: f64,
  pub text1: String,
  pub text2: String,
  pub model_provider: String,
  pub model_name: String,
  pub embedding_dimension: usize,
}

#[derive(Deserialize, ToSchema)]
pub struct VectorSimilarity {
  pub a: Vec<f32>,
  pub b: Vec<f32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VectorSimilarityResponse {
  pub similarity: f64,
  pub embedding_dimension: usize,
}

fn rejection(err: JsonRejection) -> AppError {
  AppError::with_status(err.status(), anyhow::anyhow!(err.body_text()))
}

fn compare_error(err: CompareError) -> AppError {
  let status = match &err {
    CompareError::MissingText
    | CompareError::UnsupportedModelType(_)
    | CompareError::UnsupportedProvider { .. } => StatusCode::BAD_REQUEST,
    CompareError::Embedding(_) => StatusCode::BAD_GATEWAY,
    CompareError::Similarity(_) => StatusCode::UNPROCESSABLE_ENTITY,
  };
  AppError::with_status(status, err)
}

/// Compare two texts by the cosine of their embeddings
#[utoipa::path(
  post,
  path = "/api/v0/similarity",
  request_body = Similarity,
  responses(
    (status = 200, description = "Similarity of the two texts", body = SimilarityResponse),
    (status = 400, description = "Missing text, missing or unusable model", body = textsim_shared::ErrorBody),
    (status = 422, description = "Embeddings could not be scored", body = textsim_shared::ErrorBody),
    (status = 502, description = "Embedding provider failed", body = textsim_shared::ErrorBody)
  )
)]
#[axum::debug_handler]
pub async fn similarity(
  State(state): State<AppState>,
  payload: Result<Json<Similarity>, JsonRejection>,
) -> Result<Json<SimilarityResponse>, AppError> {
  let Json(payload) = payload.map_err(rejection)?;

  let Some(model) = payload.embedding_model else {
    return Err(AppError::with_status(
      StatusCode::BAD_REQUEST,
      anyhow::anyhow!("Embedding model is required"),
    ));
  };

  let comparison = compare_texts(state.provider.as_ref(), &payload.text1, &payload.text2, &model)
    .await
    .map_err(compare_error)?;

  Ok(Json(SimilarityResponse {
    similarity: comparison.result.score,
    text1: payload.text1,
    text2: payload.text2,
    model_provider: comparison.provider,
    model_name: comparison.model,
    embedding_dimension: comparison.result.dimension,
  }))
}

/// Score two precomputed embedding vectors
#[utoipa::path(
  post,
  path = "/api/v0/similarity/vectors",
  request_body = VectorSimilarity,
  responses(
    (status = 200, description = "Similarity of the two vectors", body = VectorSimilarityResponse),
    (status = 422, description = "Empty, mismatched, zero or non-finite vectors", body = textsim_shared::ErrorBody)
  )
)]
#[axum::debug_handler]
pub async fn vector_similarity(
  payload: Result<Json<VectorSimilarity>, JsonRejection>,
) -> Result<Json<VectorSimilarityResponse>, AppError> {
  let Json(payload) = payload.map_err(rejection)?;

  let result = score(&payload.a, &payload.b)
    .map_err(|err| AppError::with_status(StatusCode::UNPROCESSABLE_ENTITY, err))?;

  Ok(Json(VectorSimilarityResponse {
    similarity: result.score,
    embedding_dimension: result.dimension,
  }))
}
