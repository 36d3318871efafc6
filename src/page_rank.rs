pub mod iterated;
pub mod sampled;
mod traits;
pub use self::traits::{PageRank, RankError, RankMap};
pub mod transition;
pub use self::transition::{transition, Distribution};

/// Probability that the surfer follows a link instead of jumping anywhere.
pub const DAMPING: f64 = 0.85;
/// Steps taken by the sampling walk.
pub const SAMPLES: usize = 10_000;
