use serde::Serialize;
use thiserror::Error;

/// Which input of a pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorSide {
  Left,
  Right,
}

impl std::fmt::Display for VectorSide {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Left => f.write_str("left"),
      Self::Right => f.write_str("right"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
  #[error("embedding vector is empty")]
  EmptyVector,

  #[error("embedding dimensions differ: {left} vs {right}")]
  DimensionMismatch { left: usize, right: usize },

  #[error("{side} embedding has zero norm")]
  DegenerateVector { side: VectorSide },

  #[error("{side} embedding has a non-finite component at index {index}")]
  NonFiniteComponent { side: VectorSide, index: usize },
}

/// Score of one comparison plus the dimension both vectors shared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
  /// Always within `[0.0, 1.0]`.
  pub score: f64,
  pub dimension: usize,
}

/// Euclidean length of `v`, accumulated in `f64`.
#[must_use]
pub fn l2_norm(v: &[f32]) -> f64 {
  v.iter()
    .map(|&x| f64::from(x))
    .fold(0.0_f64, |acc, x| x.mul_add(x, acc))
    .sqrt()
}

fn validate(a: &[f32], b: &[f32]) -> Result<(), SimilarityError> {
  if a.is_empty() || b.is_empty() {
    return Err(SimilarityError::EmptyVector);
  }
  if a.len() != b.len() {
    return Err(SimilarityError::DimensionMismatch {
      left: a.len(),
      right: b.len(),
    });
  }
  for (side, v) in [(VectorSide::Left, a), (VectorSide::Right, b)] {
    if let Some(index) = v.iter().position(|x| !x.is_finite()) {
      return Err(SimilarityError::NonFiniteComponent { side, index });
    }
  }
  Ok(())
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1.0, 1.0]`.
///
/// Both vectors are L2 normalized before the dot product, so the result is
/// independent of their magnitudes.
///
/// # Errors
///
/// Fails on empty input, mismatched dimensions, non-finite components, or a
/// vector whose norm is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
  validate(a, b)?;

  let norm_a = l2_norm(a);
  if norm_a == 0.0 {
    return Err(SimilarityError::DegenerateVector {
      side: VectorSide::Left,
    });
  }
  let norm_b = l2_norm(b);
  if norm_b == 0.0 {
    return Err(SimilarityError::DegenerateVector {
      side: VectorSide::Right,
    });
  }

  // Per-factor normalization: swapping a and b yields bit-identical products.
  let dot = a.iter().zip(b).fold(0.0_f64, |acc, (&x, &y)| {
    (f64::from(x) / norm_a).mul_add(f64::from(y) / norm_b, acc)
  });

  Ok(dot.clamp(-1.0, 1.0))
}

/// Similarity of two embeddings on a `[0.0, 1.0]` scale.
///
/// The cosine is remapped with `(cosine + 1) / 2`: opposite vectors score
/// `0.0`, orthogonal ones `0.5`, and vectors pointing the same way `1.0`.
///
/// # Errors
///
/// See [`cosine_similarity`].
pub fn score(a: &[f32], b: &[f32]) -> Result<SimilarityResult, SimilarityError> {
  let cosine = cosine_similarity(a, b)?;

  Ok(SimilarityResult {
    score: ((cosine + 1.0) / 2.0).clamp(0.0, 1.0),
    dimension: a.len(),
  })
}
