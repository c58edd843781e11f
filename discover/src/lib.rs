pub mod cli;
pub mod config;
pub mod report;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use crates::{
    domain::value_objects::niches::Niche,
    infra::web_driver::{driver::WebDriverConfig, google_search::GoogleSearch},
};
use tracing::{info, warn};

use crate::{
    config::config_model::DotEnvyConfig, report::format_report,
    usecases::discover_accounts::DiscoverAccountsUseCase,
};

const BROWSER_LOCALE: &str = "pt-BR";
const SEARCH_PAGE_TIMEOUT_SECS: u64 = 15;

pub async fn run(
    niches: Vec<&'static Niche>,
    location: Option<String>,
    headed: bool,
    config: DotEnvyConfig,
) -> Result<()> {
    let mut web_driver = WebDriverConfig::new(config.browser.webdriver_url.clone());
    web_driver.headless = !headed;
    web_driver.user_agent = Some(config.browser.user_agent.clone());
    web_driver.locale = Some(BROWSER_LOCALE.to_string());
    web_driver.window = Some((1280, 900));
    web_driver.page_load_timeout = std::time::Duration::from_secs(SEARCH_PAGE_TIMEOUT_SECS);

    let search = Arc::new(GoogleSearch::launch(&web_driver).await?);
    info!("Browser session has been established");

    let usecase = DiscoverAccountsUseCase::new(search.clone(), config.pacing);
    for niche in niches {
        info!(niche = niche.name, ">> Discovering: {}", niche.name);
        let accounts = usecase.discover(niche, location.as_deref()).await;
        println!("{}", format_report(niche, &accounts));
    }
    drop(usecase);

    match Arc::try_unwrap(search) {
        Ok(search) => {
            if let Err(err) = search.quit().await {
                warn!(error = %err, "discover: failed to close browser session");
            }
        }
        Err(_) => warn!("discover: browser session still shared, leaving it to the server"),
    }

    Ok(())
}
