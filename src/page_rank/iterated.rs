use super::*;
use crate::{norm_1, Corpus};
use algograph::graph::VertexId;
use std::collections::BTreeMap;

/// Fixed-point rank solver.
///
/// Sweeps the PageRank recurrence
/// `rank(p) = (1-damping)/N + damping * sum over q->p of rank(q)/outdeg(q)`
/// until the ranks settle. Dangling pages contribute to no one here; their
/// jump mass is not redistributed.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    epsilon: f64,
    max_rounds: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Per-page movement below this counts as settled.
    pub epsilon: f64,
    /// Rounds allowed before giving up with [`RankError::NoConvergence`].
    pub max_rounds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            epsilon: 0.001,
            max_rounds: 10_000,
        }
    }
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> Self {
        let damping = config.damping;
        assert!(0.0 < damping && damping < 1.0, "damping={damping}");
        let epsilon = config.epsilon;
        assert!(epsilon > 0.0, "epsilon={epsilon}");
        assert!(!corpus.is_empty());
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in corpus.iter() {
                let l = corpus.out_degree(u);
                if l == 0 {
                    continue;
                }
                let unit = damping / (l as f64);
                for v in corpus.out_links(u) {
                    transitions.insert((u, v), unit);
                }
            }
            transitions
        };
        Self {
            corpus,
            damping,
            epsilon,
            max_rounds: config.max_rounds,
            transitions,
        }
    }
}

impl PageRank for IteratedPageRank<'_> {
    fn calc(&mut self) -> Result<RankMap, RankError> {
        let n = self.corpus.len();
        let mut p: RankMap = self.corpus.iter().map(|v| (v, 1.0 / n as f64)).collect();
        let mut r = RankMap::with_hasher(ahash::RandomState::new());
        let base = (1.0 - self.damping) / n as f64;
        for round in 0..self.max_rounds {
            for v in self.corpus.iter() {
                r.insert(v, base);
            }
            for ((u, v), w) in self.transitions.iter() {
                let from = p.get(u).unwrap();
                let to = r.get_mut(v).unwrap();
                *to += from * w;
            }

            let settled = self
                .corpus
                .iter()
                .filter(|v| {
                    let a = p.get(v).unwrap();
                    let b = r.get(v).unwrap();
                    (a - b).abs() <= self.epsilon
                })
                .count();
            tracing::debug!(round, settled, mass = norm_1(&r), "rank sweep");

            // loose on purpose: one page may still be moving when we stop
            if settled + 1 >= n {
                return Ok(r);
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
        Err(RankError::NoConvergence {
            rounds: self.max_rounds,
        })
    }
}
