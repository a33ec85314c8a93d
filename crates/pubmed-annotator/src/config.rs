//! Configuration for the Europe PMC lookup client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Europe PMC search endpoint.
    pub const SEARCH_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest/search";

    /// Link prefix for DOI resolver links.
    pub const DOI_LINK: &str = "http://dx.doi.org/";

    /// Link prefix for PubMed article links.
    pub const PUBMED_LINK: &str = "http://www.ncbi.nlm.nih.gov/pubmed/";

    /// Link prefix for PubMed Central article links.
    pub const PMC_LINK: &str = "http://www.ncbi.nlm.nih.gov/pmc/articles/";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default output filename for bibliography mode.
    pub const DEFAULT_OUTPUT: &str = "modified.bib";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint URL (overridable for testing with mock servers).
    pub search_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the real Europe PMC API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_url: api::SEARCH_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            search_url: format!("{}/europepmc/webservices/rest/search", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
