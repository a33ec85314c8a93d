//! DOI normalization, lookup, and annotation rendering.
//!
//! An [`Annotation`] is created per DOI, populated by exactly one remote
//! call, and never mutated afterward. Rendering is a hard external contract:
//! downstream LaTeX documents consume the `\href` fragments literally, so
//! the output must match byte for byte.

use std::fmt;

use url::Url;

use crate::client::{EuropePmcClient, Lookup};
use crate::config::api;
use crate::error::Result;

/// Strip a resolver-URL prefix from a pasted DOI.
///
/// If the input parses as a URL with a non-empty path (e.g.
/// `https://doi.org/10.1006/jmbi.1994.1017`), the path with leading slashes
/// stripped is the DOI. Anything else is used unchanged. Idempotent: a bare
/// DOI is not a parseable URL and passes through.
#[must_use]
pub fn normalize_doi(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => {
            let path = url.path().trim_start_matches('/');
            if path.is_empty() {
                raw.to_string()
            } else {
                path.to_string()
            }
        }
        Err(_) => raw.to_string(),
    }
}

/// Identifiers known for one work, plus the link prefixes used to render
/// them.
///
/// The prefixes are per-instance and fixed at construction; there is no
/// shared mutable state between annotations.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Normalized DOI.
    doi: String,

    /// PubMed identifier, absent until the lookup finds one.
    pmid: Option<String>,

    /// PubMed Central identifier, absent until the lookup finds one.
    pmcid: Option<String>,

    doi_link: String,
    pm_link: String,
    pmc_link: String,
}

impl Annotation {
    /// Create an annotation for a raw DOI string, normalizing it first.
    /// Both secondary identifiers start absent.
    #[must_use]
    pub fn new(raw_doi: &str) -> Self {
        Self {
            doi: normalize_doi(raw_doi),
            pmid: None,
            pmcid: None,
            doi_link: api::DOI_LINK.to_string(),
            pm_link: api::PUBMED_LINK.to_string(),
            pmc_link: api::PMC_LINK.to_string(),
        }
    }

    /// The normalized DOI this annotation describes.
    #[must_use]
    pub fn doi(&self) -> &str {
        &self.doi
    }

    /// Whether the lookup found a PMID.
    #[must_use]
    pub fn has_pmid(&self) -> bool {
        self.pmid.is_some()
    }

    /// Whether the lookup found a PMCID.
    #[must_use]
    pub fn has_pmcid(&self) -> bool {
        self.pmcid.is_some()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pmid) = &self.pmid {
            write!(f, "[PubMed:\\href{{{}{}}}{{{}}}]", self.pm_link, pmid, pmid)?;
        }
        if let Some(pmcid) = &self.pmcid {
            write!(f, "[PubMed Central:\\href{{{}{}}}{{{}}}]", self.pmc_link, pmcid, pmcid)?;
        }
        write!(f, "[doi:\\href{{{}{}}}{{{}}}]", self.doi_link, self.doi, self.doi)
    }
}

/// A received PMCID may carry a path-like prefix; only the final path
/// segment is the identifier.
fn trim_pmcid(raw: &str) -> String {
    raw.split('/').next_back().unwrap_or(raw).to_string()
}

/// Resolve one raw DOI into an annotation via a single Europe PMC lookup.
///
/// Every way the lookup can miss (unknown DOI, empty result list, record
/// without a PMID or PMCID) logs a warning and leaves that identifier
/// absent; the annotation always carries at least the DOI segment.
///
/// # Errors
///
/// Returns error only on transport or decode failure.
pub async fn resolve(client: &EuropePmcClient, raw_doi: &str) -> Result<Annotation> {
    let mut annotation = Annotation::new(raw_doi);

    match client.lookup(&annotation.doi).await? {
        Lookup::Found(record) => {
            if let Some(pmid) = record.pmid {
                annotation.pmid = Some(pmid);
            } else {
                tracing::warn!("PMID not found for {}", annotation.doi);
            }

            if let Some(pmcid) = record.pmcid {
                annotation.pmcid = Some(trim_pmcid(&pmcid));
            } else {
                tracing::warn!("PMCID not found for {}", annotation.doi);
            }
        }
        Lookup::NoMatch => {
            tracing::warn!("Wrong DOI - {}", annotation.doi);
        }
        Lookup::StatusError(status) => {
            tracing::warn!(status, "DOI not found - {}", annotation.doi);
        }
    }

    Ok(annotation)
}
