use super::*;
use crate::Corpus;
use algograph::graph::VertexId;
use rand::Rng;
use std::collections::HashMap;

/// Monte Carlo rank estimator: a random surfer walks the corpus for a fixed
/// number of steps and each page's rank is its share of the visits.
///
/// Generic over the random source so callers can seed it for reproducible
/// runs.
pub struct SampledPageRank<'a, R: Rng> {
    corpus: &'a Corpus,
    damping: f64,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
        }
    }
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> Self {
        let damping = config.damping;
        assert!(0.0 < damping && damping < 1.0, "damping={damping}");
        let samples = config.samples;
        assert!(samples > 0, "samples={samples}");
        assert!(!corpus.is_empty());
        Self {
            corpus,
            damping,
            samples,
            rng,
        }
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    fn calc(&mut self) -> Result<RankMap, RankError> {
        let mut visits: HashMap<VertexId, u64, ahash::RandomState> =
            self.corpus.iter().map(|v| (v, 0)).collect();
        // any fixed start works, the chain mixes
        let mut current = self.corpus.iter().next().unwrap();
        *visits.get_mut(&current).unwrap() = 1;
        for _ in 0..self.samples {
            let dist = transition(self.corpus, current, self.damping);
            current = draw(&dist, &mut self.rng);
            *visits.get_mut(&current).unwrap() += 1;
        }
        // with the seed visit the counts total samples+1; dividing by
        // `samples` keeps that extra credit, a known slight over-count
        let n = self.samples as f64;
        Ok(visits
            .into_iter()
            .map(|(v, count)| (v, count as f64 / n))
            .collect())
    }
}

/// Weighted draw over an ordered distribution.
fn draw<R: Rng>(dist: &Distribution, rng: &mut R) -> VertexId {
    let x: f64 = rng.random();
    let mut acc = 0.0;
    let mut last = None;
    for (v, p) in dist.iter() {
        acc += p;
        if x < acc {
            return *v;
        }
        last = Some(*v);
    }
    // rounding may leave acc a hair under 1; the tail absorbs it
    last.unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{triangle, with_dangling};
    use crate::norm_1;
    use crate::page_rank::iterated;
    use rand::{rngs::StdRng, SeedableRng};

    fn sample(corpus: &Corpus, config: &Config, seed: u64) -> RankMap {
        let rng = StdRng::seed_from_u64(seed);
        SampledPageRank::new(corpus, config, rng).calc().unwrap()
    }

    #[test]
    fn same_seed_same_ranks() {
        let c = triangle();
        let cfg = Config::default();
        let r0 = sample(&c, &cfg, 42);
        let r1 = sample(&c, &cfg, 42);
        assert_eq!(r0, r1);
    }

    #[test]
    fn mass_includes_seed_visit() {
        let c = triangle();
        let cfg = Config {
            samples: 1000,
            ..Config::default()
        };
        let ranks = sample(&c, &cfg, 7);
        let mass = norm_1(&ranks);
        assert!((mass - 1001.0 / 1000.0).abs() < 1e-9, "mass={mass}");
    }

    #[test]
    fn agrees_with_iteration() {
        let c = triangle();
        let cfg = Config {
            samples: 100_000,
            ..Config::default()
        };
        let sampled = sample(&c, &cfg, 3407);
        let mut solver = iterated::IteratedPageRank::new(&c, &iterated::Config::default());
        let iterated = solver.calc().unwrap();
        for v in c.iter() {
            let a = sampled.get(&v).unwrap();
            let b = iterated.get(&v).unwrap();
            assert!((a - b).abs() < 0.02, "{}: {a} vs {b}", c.name(v));
        }
    }

    #[test]
    fn walks_through_dangling_pages() {
        let c = with_dangling();
        let cfg = Config {
            samples: 10_000,
            ..Config::default()
        };
        let ranks = sample(&c, &cfg, 11);
        // the surfer teleports out of c.html, so every page gets visits
        for v in c.iter() {
            assert!(*ranks.get(&v).unwrap() > 0.0, "{}", c.name(v));
        }
    }
}
