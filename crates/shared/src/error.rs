use std::{backtrace::BacktraceStatus, fmt::Display};

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Failure payload. Any failed comparison reports a similarity of zero
/// alongside the reason, never a partial score.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
  pub error: String,
  pub similarity: f64,
}

impl ErrorBody {
  #[must_use]
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
      similarity: 0.0,
    }
  }
}

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
  status_code: StatusCode,
}

impl AppError {
  /// Create with 500 status
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self {
      err: err.into(),
      status_code: StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Create with custom status
  pub fn with_status<E: Into<anyhow::Error>>(status: StatusCode, err: E) -> Self {
    Self {
      err: err.into(),
      status_code: status,
    }
  }

  #[must_use]
  pub const fn status_code(&self) -> StatusCode {
    self.status_code
  }

  #[must_use]
  pub fn into_inner(self) -> anyhow::Error {
    self.err
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    // The client only ever sees the message; backtraces stay in the logs.
    if self.status_code.is_server_error() {
      let bt = self.err.backtrace();
      if bt.status() == BacktraceStatus::Captured {
        tracing::error!(error = %self.err, backtrace = %bt, "request failed");
      } else {
        tracing::error!(error = %self.err, "request failed");
      }
    }
    (self.status_code, Json(ErrorBody::new(self.err.to_string()))).into_response()
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {}", self.status_code, self.err)
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_body_reports_zero_similarity() {
    let body = serde_json::to_value(ErrorBody::new("boom")).unwrap();
    assert_eq!(body["error"], "boom");
    assert_eq!(body["similarity"], 0.0);
  }

  #[test]
  fn status_defaults_to_internal_error() {
    let err = AppError::new(anyhow::anyhow!("provider down"));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.to_string(), "[500 Internal Server Error] provider down");
  }

  #[test]
  fn custom_status_reaches_response() {
    let err = AppError::with_status(StatusCode::BAD_REQUEST, anyhow::anyhow!("bad input"));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }
}
