//! Europe PMC search client.
//!
//! One shared reqwest client, one GET per lookup. No retries, no rate
//! limiting, no caching: the operating model is a one-shot batch run.

use reqwest::Client;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ArticleResult, SearchResponse};

/// Outcome of a single DOI lookup.
///
/// Only transport and decode failures surface as errors; every way the API
/// can decline to know a DOI is a variant here.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// The API returned at least one match (first result wins).
    Found(ArticleResult),

    /// 200 response with an empty result list.
    NoMatch,

    /// Non-200 response.
    StatusError(u16),
}

/// Europe PMC API client.
#[derive(Debug, Clone)]
pub struct EuropePmcClient {
    /// HTTP client.
    client: Client,

    /// Search endpoint URL.
    search_url: String,
}

impl EuropePmcClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, reqwest::header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, search_url: config.search_url })
    }

    /// Look up the PMID/PMCID record for one normalized DOI.
    ///
    /// Issues the single GET `?query=doi:<doi>&format=json` and classifies
    /// the response. Multiple matches are not disambiguated; the first
    /// result is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or an undecodable body.
    pub async fn lookup(&self, doi: &str) -> Result<Lookup> {
        let params = [
            ("query".to_string(), format!("doi:{doi}")),
            ("format".to_string(), "json".to_string()),
        ];

        let response = self.client.get(&self.search_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(Lookup::StatusError(status.as_u16()));
        }

        let body: SearchResponse = serde_json::from_str(&response.text().await?)?;

        Ok(body
            .result_list
            .result
            .into_iter()
            .next()
            .map_or(Lookup::NoMatch, Lookup::Found))
    }
}
