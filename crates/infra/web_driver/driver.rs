use std::time::Duration;

use anyhow::{Context, Result};
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::info;

#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub server_url: String,
    pub headless: bool,
    pub window: Option<(u32, u32)>,
    pub user_agent: Option<String>,
    pub locale: Option<String>,
    pub page_load_timeout: Duration,
}

impl WebDriverConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            headless: true,
            window: None,
            user_agent: None,
            locale: None,
            page_load_timeout: Duration::from_secs(30),
        }
    }
}

pub async fn initialize_driver(config: &WebDriverConfig) -> Result<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    if config.headless {
        caps.add_arg("--headless=new")?;
    }
    caps.add_arg("--disable-blink-features=AutomationControlled")?;
    caps.add_arg("--hide-scrollbars")?;
    if let Some(user_agent) = &config.user_agent {
        caps.add_arg(&format!("--user-agent={user_agent}"))?;
    }
    if let Some(locale) = &config.locale {
        caps.add_arg(&format!("--lang={locale}"))?;
    }

    let driver = WebDriver::new(config.server_url.as_str(), caps)
        .await
        .with_context(|| format!("failed to start a browser session at {}", config.server_url))?;

    driver.set_page_load_timeout(config.page_load_timeout).await?;
    driver.set_script_timeout(Duration::from_secs(30)).await?;
    if let Some((width, height)) = config.window {
        driver
            .set_window_rect(0, 0, width, height)
            .await
            .context("failed to size browser window")?;
    }

    info!(
        server_url = %config.server_url,
        headless = config.headless,
        "web_driver: browser session started"
    );
    Ok(driver)
}
