use proptest::prelude::*;
use textsim_core::{SimilarityError, l2_norm, score};

fn nonzero_vector(dim: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f32>> {
  prop::collection::vec(-1000.0_f32..1000.0, dim).prop_filter("zero norm", |v| l2_norm(v) > 0.0)
}

fn pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
  (1usize..64).prop_flat_map(|d| (nonzero_vector(d..d + 1), nonzero_vector(d..d + 1)))
}

proptest! {
  #[test]
  fn self_similarity_is_one(v in nonzero_vector(1..64)) {
    let s = score(&v, &v).unwrap().score;
    prop_assert!((s - 1.0).abs() < 1e-9, "score(v, v) = {}", s);
  }

  #[test]
  fn symmetric((a, b) in pair()) {
    prop_assert_eq!(score(&a, &b).unwrap().score, score(&b, &a).unwrap().score);
  }

  #[test]
  fn bounded((a, b) in pair()) {
    let s = score(&a, &b).unwrap().score;
    prop_assert!((0.0..=1.0).contains(&s), "score out of range: {}", s);
  }

  #[test]
  fn scale_invariant(v in nonzero_vector(1..32), k in 0.01_f32..100.0) {
    let scaled: Vec<f32> = v.iter().map(|x| x * k).collect();
    prop_assume!(l2_norm(&scaled) > 0.0);
    let s = score(&v, &scaled).unwrap().score;
    prop_assert!((s - 1.0).abs() < 1e-6, "score(v, k*v) = {}", s);
  }

  #[test]
  fn negation_scores_zero(v in nonzero_vector(1..32)) {
    let negated: Vec<f32> = v.iter().map(|x| -x).collect();
    let s = score(&v, &negated).unwrap().score;
    prop_assert!(s.abs() < 1e-9, "score(v, -v) = {}", s);
  }

  #[test]
  fn reports_shared_dimension((a, b) in pair()) {
    prop_assert_eq!(score(&a, &b).unwrap().dimension, a.len());
  }

  #[test]
  fn mismatched_dimensions_always_fail(
    a in nonzero_vector(1..16),
    b in nonzero_vector(16..32),
  ) {
    prop_assert_eq!(
      score(&a, &b),
      Err(SimilarityError::DimensionMismatch { left: a.len(), right: b.len() })
    );
  }
}
