use std::time::Duration;

use anyhow::{Context, Result, bail};

use super::config_model::{Browser, DotEnvyConfig, Pacing};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let browser = Browser {
        webdriver_url: std::env::var("WEBDRIVER_URL")
            .unwrap_or_else(|_| "http://localhost:4444".to_string()),
        user_agent: std::env::var("DISCOVER_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
    };

    let min_pause_ms: u64 = std::env::var("DISCOVER_PAUSE_MIN_MS")
        .unwrap_or_else(|_| "1500".to_string())
        .parse()
        .context("DISCOVER_PAUSE_MIN_MS is invalid")?;
    let max_pause_ms: u64 = std::env::var("DISCOVER_PAUSE_MAX_MS")
        .unwrap_or_else(|_| "2500".to_string())
        .parse()
        .context("DISCOVER_PAUSE_MAX_MS is invalid")?;
    if max_pause_ms < min_pause_ms {
        bail!("DISCOVER_PAUSE_MAX_MS must not be lower than DISCOVER_PAUSE_MIN_MS");
    }

    Ok(DotEnvyConfig {
        browser,
        pacing: Pacing {
            min_pause: Duration::from_millis(min_pause_ms),
            max_pause: Duration::from_millis(max_pause_ms),
        },
    })
}
