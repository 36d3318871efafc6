pub mod corpus;
pub use self::corpus::Corpus;
pub mod crawl;
pub use self::crawl::{crawl, CrawlError};
mod common;
pub use self::common::*;

pub mod page_rank;
pub use self::page_rank::{PageRank, RankError, RankMap, DAMPING, SAMPLES};

#[cfg(test)]
mod fixtures;
