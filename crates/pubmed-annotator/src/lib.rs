//! pubmed-annotator
//!
//! Enriches bibliographic citation entries with identifiers fetched from the
//! Europe PMC search API: given a DOI, discover the corresponding PMID and
//! PMCID and render a bracketed `\href` annotation for each. In bibliography
//! mode, every BibTeX entry carrying a `doi` field gets the annotation
//! merged into its `note` field.
//!
//! # Example
//!
//! ```no_run
//! use pubmed_annotator::{annotation::resolve, client::EuropePmcClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EuropePmcClient::new(Config::new())?;
//!     let annotation = resolve(&client, "10.1093/bioinformatics/btab069").await?;
//!     println!("{annotation}");
//!     Ok(())
//! }
//! ```

pub mod annotation;
pub mod bibliography;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use annotation::{Annotation, normalize_doi, resolve};
pub use client::{EuropePmcClient, Lookup};
pub use config::Config;
pub use error::{Error, Result};
