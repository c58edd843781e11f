use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use crates::{
    domain::{repositories::page_renderer::PageRenderer, value_objects::post_specs::PostSpec},
    infra::assets::resolve_path,
};
use serde_json::Value;
use tracing::info;

use crate::templates::{PostImageError, build_post_html};

pub struct GeneratePostImagesUseCase {
    renderer: Arc<dyn PageRenderer + Send + Sync>,
    logo_svg: String,
}

impl GeneratePostImagesUseCase {
    pub fn new(renderer: Arc<dyn PageRenderer + Send + Sync>, logo_svg: String) -> Self {
        Self { renderer, logo_svg }
    }

    /// Renders the posts in order. The first failure stops the batch; files
    /// already written stay on disk.
    pub async fn generate(&self, entries: Vec<Value>) -> Result<Vec<PathBuf>> {
        let total = entries.len();
        info!(total, "post_image: generating batch");

        let mut saved = Vec::with_capacity(total);
        for (index, entry) in entries.into_iter().enumerate() {
            let output = self
                .generate_one(entry)
                .await
                .with_context(|| format!("post {} of {} failed", index + 1, total))?;
            println!("Saved: {}", output.display());
            saved.push(output);
        }

        info!(saved = saved.len(), "post_image: batch finished");
        Ok(saved)
    }

    async fn generate_one(&self, entry: Value) -> Result<PathBuf> {
        let post = PostSpec::from_value(entry).map_err(PostImageError::from)?;
        let html = build_post_html(&post, &self.logo_svg).await?;
        let output = resolve_path(post.output());

        self.renderer.render_png(&html, &output).await?;
        info!(kind = post.kind(), output = %output.display(), "post_image: post rendered");
        Ok(output)
    }
}
