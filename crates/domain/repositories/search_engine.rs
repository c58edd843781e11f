use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::discovered_accounts::RawSearchResult;

#[automock]
#[async_trait]
pub trait SearchEngine {
    /// Instagram profiles matching a free-text query.
    async fn search_profiles(&self, query: &str) -> Result<Vec<RawSearchResult>>;

    /// Profiles similar to `seed`, narrowed by a niche keyword.
    async fn search_related_profiles(
        &self,
        seed: &str,
        keyword: &str,
    ) -> Result<Vec<RawSearchResult>>;
}
