use std::path::PathBuf;

use anyhow::{Context, Result};
use crates::{infra::web_driver::driver::WebDriverConfig, observability::parse_bool};

use super::config_model::{Brand, DotEnvyConfig};

const BUNDLED_LOGO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/brand/logo-mark.svg");

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let mut web_driver = WebDriverConfig::new(
        std::env::var("WEBDRIVER_URL").unwrap_or_else(|_| "http://localhost:4444".to_string()),
    );
    web_driver.headless = match std::env::var("RENDER_HEADLESS") {
        Ok(raw) => parse_bool(&raw).context("RENDER_HEADLESS is invalid")?,
        Err(_) => true,
    };

    let brand = Brand {
        logo_path: std::env::var("BRAND_LOGO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(BUNDLED_LOGO)),
    };

    Ok(DotEnvyConfig { web_driver, brand })
}
