//! pubmed-annotator - Entry Point
//!
//! Two mutually exclusive modes: resolve a list of DOIs directly, or rewrite
//! a BibTeX file with annotations merged into each entry's note field.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_annotator::bibliography::rewrite;
use pubmed_annotator::config::{Config, api};
use pubmed_annotator::{EuropePmcClient, resolve};

#[derive(Parser, Debug)]
#[command(name = "pubmed-annotator")]
#[command(about = "Annotate BibTeX entries with PMID/PMCID links resolved from DOIs")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["doi", "bibtex"])))]
struct Cli {
    /// DOIs to resolve; prints one annotation per DOI, in argument order
    #[arg(long, value_name = "DOI", num_args = 1..)]
    doi: Vec<String>,

    /// BibTeX file whose DOI-carrying entries get annotated
    #[arg(long, value_name = "FILE")]
    bibtex: Option<PathBuf>,

    /// Output path for the modified bibliography
    #[arg(long, value_name = "FILE", default_value = api::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Lookup warnings belong on stdout, like the rest of the output.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().without_time())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let client = EuropePmcClient::new(Config::new())?;

    if let Some(input) = cli.bibtex {
        tracing::debug!(input = %input.display(), output = %cli.output.display(), "rewriting bibliography");
        rewrite(&client, &input, &cli.output).await?;
    } else {
        for doi in &cli.doi {
            let annotation = resolve(&client, doi).await?;
            println!("{annotation}");
        }
    }

    Ok(())
}
