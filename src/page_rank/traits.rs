use algograph::graph::VertexId;
use std::collections::HashMap;

/// Per-page rank scores; non-negative, summing to 1 across the corpus.
pub type RankMap = HashMap<VertexId, f64, ahash::RandomState>;

pub trait PageRank {
    fn calc(&mut self) -> Result<RankMap, RankError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("ranks did not settle within {rounds} rounds")]
    NoConvergence { rounds: usize },
}
