mod similarity;
pub use similarity::{
  SimilarityError, SimilarityResult, VectorSide, cosine_similarity, l2_norm, score,
};

mod compare;
pub use compare::{CompareError, Comparison, compare_texts};
