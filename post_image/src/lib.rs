pub mod cli;
pub mod config;
pub mod templates;
pub mod usecases;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use crates::{
    domain::value_objects::post_specs::parse_post_config,
    infra::{
        assets::{read_logo_svg, resolve_path},
        web_driver::page_renderer::WebDriverPageRenderer,
    },
};
use tracing::{info, warn};

use crate::{config::config_model::DotEnvyConfig, usecases::generate_post_images::GeneratePostImagesUseCase};

pub async fn run(config_file: &Path, config: DotEnvyConfig) -> Result<Vec<PathBuf>> {
    let config_file = resolve_path(config_file);
    let raw = tokio::fs::read_to_string(&config_file)
        .await
        .with_context(|| format!("failed to read {}", config_file.display()))?;
    let entries = parse_post_config(&raw)?;
    let logo_svg = read_logo_svg(&config.brand.logo_path)
        .await
        .context("brand logo is unavailable")?;

    let renderer = Arc::new(WebDriverPageRenderer::launch(&config.web_driver).await?);
    info!("Browser session has been established");

    let usecase = GeneratePostImagesUseCase::new(renderer.clone(), logo_svg);
    let result = usecase.generate(entries).await;
    drop(usecase);

    match Arc::try_unwrap(renderer) {
        Ok(renderer) => {
            if let Err(err) = renderer.quit().await {
                warn!(error = %err, "post_image: failed to close browser session");
            }
        }
        Err(_) => warn!("post_image: browser session still shared, leaving it to the server"),
    }

    result
}
