use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use katsuyou::enrich::{self, Document};
use katsuyou::{exceptions, Config};

#[derive(Parser)]
pub(crate) struct EnrichArgs {
    /// Word list to enrich. Files ending in `.gz` are decompressed.
    input: PathBuf,
    /// Where to write the enriched word list. Defaults to overwriting the
    /// input.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Number of threads to use, defaults to the configured number or one per
    /// core.
    #[arg(long)]
    threads: Option<usize>,
}

pub(crate) fn run(config: &Config, args: &EnrichArgs) -> Result<()> {
    let conjugator = config.conjugator();

    let mut builder = rayon::ThreadPoolBuilder::new();

    if let Some(threads) = args.threads.or(config.threads) {
        builder = builder.num_threads(threads);
    }

    let pool = builder.build().context("Building thread pool")?;

    tracing::info!(input = %args.input.display(), "Loading word list");
    let mut document = Document::load(&args.input)?;

    if let Some(version) = document.exceptions_version() {
        if version != u64::from(exceptions::VERSION) {
            tracing::warn!(
                version,
                current = exceptions::VERSION,
                "Word list was enriched with other exception data, stored forms are kept"
            );
        }
    }

    let report = pool.install(|| enrich::enrich_words(&conjugator, document.words_mut()));

    if !document.stamp_exceptions_version() {
        tracing::debug!("Top-level array, exception data version not recorded");
    }

    let output = args.output.as_ref().unwrap_or(&args.input);
    document.save(output)?;

    tracing::info!(output = %output.display(), "Saved word list");
    println!("{report}");
    Ok(())
}
