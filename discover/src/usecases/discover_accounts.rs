use std::{collections::HashMap, sync::Arc, time::Duration};

use crates::domain::{
    entities::discovered_accounts::{DiscoveredAccount, RawSearchResult},
    repositories::search_engine::SearchEngine,
    value_objects::niches::{Niche, is_ignored_segment, is_mei_account},
};
use rand::Rng;
use tracing::{info, warn};

use crate::config::config_model::Pacing;

const KEYWORD_QUERIES: usize = 4;
const LOCATION_QUERIES: usize = 2;
const RELATED_SEEDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedSearch {
    Keyword(String),
    Related {
        seed: &'static str,
        keyword: &'static str,
    },
}

/// Location-scoped keyword searches first, then plain keywords, then seed lookalikes.
pub fn plan_searches(niche: &Niche, location: Option<&str>) -> Vec<PlannedSearch> {
    let mut searches = Vec::new();

    if let Some(location) = location.filter(|l| !l.trim().is_empty()) {
        searches.extend(
            niche
                .keywords
                .iter()
                .take(LOCATION_QUERIES)
                .map(|keyword| PlannedSearch::Keyword(format!("{keyword} {location}"))),
        );
    }
    searches.extend(
        niche
            .keywords
            .iter()
            .take(KEYWORD_QUERIES)
            .map(|keyword| PlannedSearch::Keyword(keyword.to_string())),
    );

    if let Some(&keyword) = niche.keywords.first() {
        searches.extend(
            niche
                .seeds
                .iter()
                .copied()
                .take(RELATED_SEEDS)
                .map(|seed| PlannedSearch::Related { seed, keyword }),
        );
    }

    searches
}

/// Dedupes results into accounts ranked by how often they showed up.
/// Known seeds, cross-niche MEI accounts and non-profile paths are dropped.
pub fn collect_accounts(results: Vec<RawSearchResult>, niche: &Niche) -> Vec<DiscoveredAccount> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut accounts: Vec<DiscoveredAccount> = Vec::new();

    for result in results {
        let username = result.username.as_str();
        if is_ignored_segment(username) || niche.is_seed(username) || is_mei_account(username) {
            continue;
        }

        match positions.get(username) {
            Some(&position) => accounts[position].count += 1,
            None => {
                positions.insert(result.username.clone(), accounts.len());
                accounts.push(DiscoveredAccount::from(result));
            }
        }
    }

    // Stable, so first-seen order breaks ties.
    accounts.sort_by(|a, b| b.count.cmp(&a.count));
    accounts
}

pub struct DiscoverAccountsUseCase {
    search_engine: Arc<dyn SearchEngine + Send + Sync>,
    pacing: Pacing,
}

impl DiscoverAccountsUseCase {
    pub fn new(search_engine: Arc<dyn SearchEngine + Send + Sync>, pacing: Pacing) -> Self {
        Self {
            search_engine,
            pacing,
        }
    }

    /// Runs every planned search for `niche`. A failed search is logged and skipped.
    pub async fn discover(&self, niche: &Niche, location: Option<&str>) -> Vec<DiscoveredAccount> {
        let mut results = Vec::new();

        for search in plan_searches(niche, location) {
            let outcome = match &search {
                PlannedSearch::Keyword(query) => self.search_engine.search_profiles(query).await,
                PlannedSearch::Related { seed, keyword } => {
                    self.search_engine
                        .search_related_profiles(seed, keyword)
                        .await
                }
            };

            match outcome {
                Ok(found) => {
                    info!(niche = niche.name, search = ?search, results = found.len(), "discover: search finished");
                    results.extend(found);
                }
                Err(err) => {
                    warn!(niche = niche.name, search = ?search, error = %err, "discover: search failed");
                }
            }

            self.pause().await;
        }

        collect_accounts(results, niche)
    }

    async fn pause(&self) {
        let wait = {
            let min = self.pacing.min_pause.as_millis() as u64;
            let max = self.pacing.max_pause.as_millis().max(min as u128) as u64;
            rand::thread_rng().gen_range(min..=max)
        };
        if wait > 0 {
            tokio::time::sleep(Duration::from_millis(wait)).await;
        }
    }
}
