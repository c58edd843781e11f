use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

#[automock]
#[async_trait]
pub trait PageRenderer {
    /// Renders a full HTML document at the post canvas size and writes it as PNG.
    async fn render_png(&self, html: &str, output: &Path) -> Result<()>;
}
