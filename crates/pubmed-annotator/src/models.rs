//! Data models matching the Europe PMC search API schema.
//!
//! All optional fields use `#[serde(default)]`; unknown fields in the
//! response are ignored.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Container for the result list.
    #[serde(rename = "resultList", default)]
    pub result_list: ResultList,
}

/// The list of matching articles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultList {
    /// Matching articles, best match first.
    #[serde(default)]
    pub result: Vec<ArticleResult>,
}

/// A single article record.
///
/// Only the two identifier fields are read; everything else the API returns
/// is dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleResult {
    /// PubMed identifier, if the article is indexed in PubMed.
    #[serde(default)]
    pub pmid: Option<String>,

    /// PubMed Central identifier, if full text is archived. May arrive with
    /// a path-like prefix.
    #[serde(default)]
    pub pmcid: Option<String>,
}
