use crate::Corpus;
use regex::Regex;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap());

#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("cannot read corpus at {dir}: {source}")]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no .html documents under {0}")]
    EmptyCorpus(PathBuf),
}

/// Reads every `.html` file under `dir` and builds the link graph from their
/// anchor-tag `href` targets. Self-links and targets outside the corpus are
/// dropped by corpus construction.
pub fn crawl(dir: &Path) -> Result<Corpus, CrawlError> {
    let io_err = |source| CrawlError::Io {
        dir: dir.to_path_buf(),
        source,
    };
    let mut pages: Vec<(String, HashSet<String>)> = vec![];
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(io_err)?;
        let links: HashSet<String> = HREF
            .captures_iter(&contents)
            .map(|cap| cap[1].to_string())
            .collect();
        tracing::debug!(page = name, links = links.len(), "crawled");
        pages.push((name.to_string(), links));
    }
    if pages.is_empty() {
        return Err(CrawlError::EmptyCorpus(dir.to_path_buf()));
    }
    Ok(Corpus::from_links(pages))
}
