pub mod similarity_score;

pub use similarity_score::SimilarityScore;
