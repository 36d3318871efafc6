use algograph::graph::*;
use std::collections::{HashMap, HashSet};

/// A closed universe of named documents and the hyperlinks between them.
///
/// Construction drops self-links and links to documents outside the corpus,
/// so every remaining edge points at another corpus page. The graph is
/// immutable afterwards; both estimators read it concurrently without
/// coordination.
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    ids: HashMap<String, VertexId, ahash::RandomState>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from raw `(page, out-links)` pairs.
    ///
    /// Out-link sets are deduplicated; a page appearing twice has its link
    /// sets merged.
    pub fn from_links<I, S, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let pages: Vec<(String, Vec<String>)> = pages
            .into_iter()
            .map(|(name, links)| {
                let links = links.into_iter().map(|l| l.into()).collect();
                (name.into(), links)
            })
            .collect();

        let mut graph = directed::TreeBackedGraph::new();
        let mut ids: HashMap<String, VertexId, ahash::RandomState> = Default::default();
        let mut names: HashMap<VertexId, String, ahash::RandomState> = Default::default();
        for (name, _) in pages.iter() {
            if ids.contains_key(name) {
                continue;
            }
            let v = graph.add_vertex();
            ids.insert(name.clone(), v);
            names.insert(v, name.clone());
        }

        for (name, links) in pages.iter() {
            let u = *ids.get(name).unwrap();
            let mut seen: HashSet<VertexId, ahash::RandomState> =
                graph.out_edges(&u).map(|e| e.sink).collect();
            for link in links.iter() {
                // only in-corpus targets, never the page itself
                let Some(&v) = ids.get(link) else { continue };
                if v == u || !seen.insert(v) {
                    continue;
                }
                graph.add_edge(u, v);
            }
        }

        Self { graph, ids, names }
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.vertex_size() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.iter_vertices()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.graph.contains_vertex(&v)
    }

    pub fn out_links(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&v).map(|e| e.sink)
    }

    pub fn in_links(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.in_edges(&v).map(|e| e.source)
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.graph.out_edges(&v).count()
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Panics on vertices from another corpus.
    pub fn name(&self, v: VertexId) -> &str {
        self.names.get(&v).unwrap_or_else(|| panic!("{v:?} not in corpus"))
    }

    /// Resolves a rank table into `(name, rank)` pairs sorted by name.
    pub fn by_name<'a>(
        &'a self,
        ranks: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> Vec<(&'a str, f64)> {
        let mut res: Vec<_> = ranks
            .iter()
            .map(|(v, rank)| (self.name(*v), *rank))
            .collect();
        res.sort_by_key(|(name, _)| *name);
        res
    }
}
