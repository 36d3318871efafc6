use anyhow::Context;
use clap::Parser;
use corpus_rank::{
    crawl,
    page_rank::{iterated, sampled, PageRank, DAMPING, SAMPLES},
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

/// Estimate page ranks for a directory of HTML documents.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Directory holding the .html corpus
    corpus: PathBuf,
    /// Probability of following a link instead of jumping anywhere
    #[arg(long, default_value_t = DAMPING)]
    damping: f64,
    /// Steps taken by the sampling walk
    #[arg(long, default_value_t = SAMPLES)]
    samples: usize,
    /// Seed for the sampling walk; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let corpus = crawl(&args.corpus)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: args.damping,
        samples: args.samples,
    };
    let ranks = sampled::SampledPageRank::new(&corpus, &cfg, rng).calc()?;
    println!("PageRank Results from Sampling (n = {})", args.samples);
    for (page, rank) in corpus.by_name(&ranks) {
        println!("  {page}: {rank:.4}");
    }

    let cfg = iterated::Config {
        damping: args.damping,
        ..Default::default()
    };
    let ranks = iterated::IteratedPageRank::new(&corpus, &cfg)
        .calc()
        .context("iterative estimator")?;
    println!("PageRank Results from Iteration");
    for (page, rank) in corpus.by_name(&ranks) {
        println!("  {page}: {rank:.4}");
    }
    Ok(())
}
