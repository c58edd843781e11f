use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thirtyfour::{By, WebDriver};
use tracing::debug;
use url::Url;

use crate::{
    domain::{
        entities::discovered_accounts::RawSearchResult,
        repositories::search_engine::SearchEngine,
        value_objects::instagram_profiles::extract_username,
    },
    infra::web_driver::driver::{WebDriverConfig, initialize_driver},
};

const SEARCH_URL: &str = "https://www.google.com/search";
const RESULTS_PER_PAGE: &str = "20";
const SEARCH_LANGUAGE: &str = "pt-BR";

const CONSENT_BUTTON_XPATH: &str = "//button[contains(., 'Aceitar') or contains(., 'Accept all') or contains(., 'I agree')]";

const SNIPPET_CHARS: usize = 200;

/// Every link on the page with its anchor text and, unless `arguments[0]` is true,
/// the text of the enclosing result block.
const EXTRACT_LINKS_SCRIPT: &str = r#"
const skipSnippet = arguments[0];
return Array.from(document.querySelectorAll("a[href]")).map((a) => {
    const container = a.closest("[data-snhf]") || a.closest(".g") || a.parentElement;
    return {
        href: a.href || "",
        title: (a.textContent || "").trim(),
        snippet: skipSnippet ? "" : ((container && container.textContent) || "").trim(),
    };
});
"#;

#[derive(Debug, Deserialize)]
struct ScrapedLink {
    href: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

/// Google results scraped through a real browser session.
pub struct GoogleSearch {
    driver: WebDriver,
}

impl GoogleSearch {
    pub async fn launch(config: &WebDriverConfig) -> Result<Self> {
        let driver = initialize_driver(config).await?;
        Ok(Self { driver })
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }

    async fn open_results(&self, query: &str) -> Result<()> {
        let url = search_url(query)?;
        self.driver
            .goto(url.as_str())
            .await
            .with_context(|| format!("failed to load results for {query:?}"))?;
        Ok(())
    }

    async fn dismiss_consent(&self) -> Result<()> {
        let buttons = self.driver.find_all(By::XPath(CONSENT_BUTTON_XPATH)).await?;
        if let Some(button) = buttons.first() {
            if button.is_displayed().await.unwrap_or(false) {
                debug!("google_search: accepting cookie consent");
                button.click().await?;
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
        Ok(())
    }

    async fn scrape(&self, skip_snippet: bool) -> Result<Vec<RawSearchResult>> {
        let ret = self
            .driver
            .execute(EXTRACT_LINKS_SCRIPT, vec![json!(skip_snippet)])
            .await?;
        let links: Vec<ScrapedLink> = serde_json::from_value(ret.json().clone())
            .context("unexpected link list from results page")?;
        Ok(profiles_from_links(links))
    }
}

#[async_trait]
impl SearchEngine for GoogleSearch {
    async fn search_profiles(&self, query: &str) -> Result<Vec<RawSearchResult>> {
        self.open_results(&format!("site:instagram.com {query}")).await?;
        self.dismiss_consent().await?;
        self.scrape(false).await
    }

    async fn search_related_profiles(
        &self,
        seed: &str,
        keyword: &str,
    ) -> Result<Vec<RawSearchResult>> {
        self.open_results(&format!("related:instagram.com/{seed} {keyword}"))
            .await?;
        tokio::time::sleep(Duration::from_millis(500)).await;
        self.scrape(true).await
    }
}

fn search_url(query: &str) -> Result<Url> {
    Url::parse_with_params(
        SEARCH_URL,
        [
            ("q", query),
            ("num", RESULTS_PER_PAGE),
            ("hl", SEARCH_LANGUAGE),
        ],
    )
    .context("failed to build search URL")
}

fn profiles_from_links(links: Vec<ScrapedLink>) -> Vec<RawSearchResult> {
    links
        .into_iter()
        .filter_map(|link| {
            let username = extract_username(&link.href)?;
            Some(RawSearchResult {
                username,
                title: link.title,
                snippet: link.snippet.chars().take(SNIPPET_CHARS).collect(),
            })
        })
        .collect()
}
