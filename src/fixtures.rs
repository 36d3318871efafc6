use crate::Corpus;

pub fn corpus(pages: &[(&str, &[&str])]) -> Corpus {
    Corpus::from_links(
        pages
            .iter()
            .map(|(name, links)| (*name, links.iter().copied())),
    )
}

/// The A -> {B, C}, B -> C, C -> A triangle; C collects the most rank.
pub fn triangle() -> Corpus {
    corpus(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["c.html"]),
        ("c.html", &["a.html"]),
    ])
}

pub fn two_cycle() -> Corpus {
    corpus(&[("a.html", &["b.html"]), ("b.html", &["a.html"])])
}

/// A connected corpus whose page C has no out-links.
pub fn with_dangling() -> Corpus {
    corpus(&[
        ("a.html", &["b.html"]),
        ("b.html", &["a.html", "c.html"]),
        ("c.html", &[]),
    ])
}

/// A random strongly-connected corpus: a ring plus random chords, with the
/// occasional out-of-corpus target thrown in to exercise construction-time
/// filtering. Every page keeps at least one out-link.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub pages: Vec<(String, Vec<String>)>,
}

impl RandomCorpus {
    pub fn corpus(&self) -> Corpus {
        Corpus::from_links(
            self.pages
                .iter()
                .map(|(name, links)| (name.clone(), links.clone())),
        )
    }
}

impl quickcheck::Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n = 2 + usize::arbitrary(g) % N;
        let name = |i: usize| format!("p{i}.html");
        let mut pages = vec![];
        for i in 0..n {
            let mut links = vec![name((i + 1) % n)];
            for j in 0..n {
                if bool::arbitrary(g) {
                    links.push(name(j));
                }
            }
            if bool::arbitrary(g) {
                links.push("elsewhere.html".to_string());
            }
            pages.push((name(i), links));
        }
        Self { pages }
    }
}
