use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

use super::config_model::{DotEnvyConfig, Polling, RekanApi, Support};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let base_url = std::env::var("REKAN_API_URL")
        .unwrap_or_else(|_| "http://localhost:8090".to_string());
    let rekan_api = RekanApi {
        base_url: Url::parse(&base_url).context("REKAN_API_URL is invalid")?,
        request_timeout: Duration::from_secs(
            std::env::var("INVITE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("INVITE_REQUEST_TIMEOUT_SECS is invalid")?,
        ),
        auth_cookie: std::env::var("PB_AUTH_COOKIE")
            .ok()
            .filter(|v| !v.trim().is_empty()),
    };

    let interval_secs: u64 = std::env::var("INVITE_POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "3".to_string())
        .parse()
        .context("INVITE_POLL_INTERVAL_SECS is invalid")?;
    if interval_secs == 0 {
        bail!("INVITE_POLL_INTERVAL_SECS must be greater than zero");
    }
    let polling = Polling {
        interval: Duration::from_secs(interval_secs),
    };

    let support = Support {
        whatsapp_number: std::env::var("WHATSAPP_NUMBER").context("WHATSAPP_NUMBER is invalid")?,
    };

    Ok(DotEnvyConfig {
        rekan_api,
        polling,
        support,
    })
}
