use crate::Corpus;
use algograph::graph::VertexId;
use std::collections::BTreeMap;

/// A probability distribution over pages.
///
/// Kept ordered so that walking it with a seeded generator is reproducible
/// run to run.
pub type Distribution = BTreeMap<VertexId, f64>;

/// Where the random surfer goes next from `current`.
///
/// With probability `damping` the surfer follows one of `current`'s links,
/// each equally likely; otherwise it jumps to any corpus page uniformly at
/// random. A dangling `current` (no out-links) yields the uniform
/// distribution over the whole corpus. The result sums to 1 across all
/// pages.
///
/// `current` must belong to `corpus` and `damping` must lie in (0, 1);
/// violating either is a caller bug.
pub fn transition(corpus: &Corpus, current: VertexId, damping: f64) -> Distribution {
    assert!(0.0 < damping && damping < 1.0, "damping={damping}");
    assert!(!corpus.is_empty());
    assert!(corpus.contains(current), "{current:?} not in corpus");

    let n = corpus.len() as f64;
    let l = corpus.out_degree(current);
    if l == 0 {
        return corpus.iter().map(|v| (v, 1.0 / n)).collect();
    }

    let mut dist: Distribution = corpus.iter().map(|v| (v, (1.0 - damping) / n)).collect();
    let link_share = damping / (l as f64);
    for v in corpus.out_links(current) {
        *dist.get_mut(&v).unwrap() += link_share;
    }
    dist
}
