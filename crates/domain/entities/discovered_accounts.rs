use serde::{Deserialize, Serialize};

/// One Instagram link scraped off a search results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSearchResult {
    pub username: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAccount {
    pub username: String,
    pub title: String,
    pub snippet: String,
    /// How many times the account showed up across all searches.
    pub count: u32,
}

impl From<RawSearchResult> for DiscoveredAccount {
    fn from(result: RawSearchResult) -> Self {
        Self {
            username: result.username,
            title: result.title,
            snippet: result.snippet,
            count: 1,
        }
    }
}
