use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod similarity;

pub use similarity::{
  Similarity, SimilarityResponse, VectorSimilarity, VectorSimilarityResponse,
};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "textsim API",
    version = "0.0.1",
    description = "Embedding-based similarity between two texts, scored 0 to 1"
  ),
  paths(
    health,
    similarity::similarity,
    similarity::vector_similarity
  ),
  components(schemas(
    Similarity,
    SimilarityResponse,
    VectorSimilarity,
    VectorSimilarityResponse,
    textsim_shared::ErrorBody,
    textsim_shared::ModelConfig,
    textsim_shared::ModelType,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

/// Liveness probe
#[utoipa::path(
  get,
  path = "/health",
  responses((status = 200, description = "Service is up", body = String))
)]
async fn health() -> &'static str {
  "ok"
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/health", get(health))
    .route("/api/v0/similarity", post(similarity::similarity))
    .route(
      "/api/v0/similarity/vectors",
      post(similarity::vector_similarity),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
