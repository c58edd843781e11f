use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use thirtyfour::{WebDriver, extensions::cdp::ChromeDevTools};
use tracing::debug;

use crate::{
    domain::{
        repositories::page_renderer::PageRenderer,
        value_objects::brand::{CANVAS_HEIGHT, CANVAS_WIDTH},
    },
    infra::web_driver::driver::{WebDriverConfig, initialize_driver},
};

/// Resolves once the document and its web fonts have loaded and no resource
/// has finished for `arguments[0]` ms, giving up after `arguments[1]` ms.
const WAIT_FOR_PAINT_SCRIPT: &str = r#"
const [quietMs, maxMs] = arguments;
const done = arguments[arguments.length - 1];
const started = performance.now();
const waitForQuiet = () => {
    let seen = performance.getEntriesByType("resource").length;
    let quietSince = performance.now();
    const check = () => {
        const count = performance.getEntriesByType("resource").length;
        const now = performance.now();
        if (count !== seen) {
            seen = count;
            quietSince = now;
        }
        if (now - quietSince >= quietMs || now - started >= maxMs) {
            done(true);
        } else {
            setTimeout(check, 50);
        }
    };
    check();
};
const settle = () => document.fonts.ready.then(waitForQuiet, waitForQuiet);
if (document.readyState === "complete") {
    settle();
} else {
    window.addEventListener("load", settle, { once: true });
}
"#;

const NETWORK_QUIET: Duration = Duration::from_millis(500);
const NETWORK_QUIET_MAX_WAIT: Duration = Duration::from_secs(10);

fn paint_wait_args() -> Vec<Value> {
    vec![
        json!(NETWORK_QUIET.as_millis() as u64),
        json!(NETWORK_QUIET_MAX_WAIT.as_millis() as u64),
    ]
}

/// Renders post HTML in one shared Chrome session, one tab per post.
pub struct WebDriverPageRenderer {
    driver: WebDriver,
}

impl WebDriverPageRenderer {
    pub async fn launch(config: &WebDriverConfig) -> Result<Self> {
        let driver = initialize_driver(config).await?;
        Ok(Self { driver })
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }

    async fn capture(&self, html: &str) -> Result<Vec<u8>> {
        let devtools = ChromeDevTools::new(self.driver.handle.clone());
        devtools.execute_cdp("Page.enable").await?;
        devtools
            .execute_cdp_with_params(
                "Emulation.setDeviceMetricsOverride",
                json!({
                    "width": CANVAS_WIDTH,
                    "height": CANVAS_HEIGHT,
                    "deviceScaleFactor": 1,
                    "mobile": false
                }),
            )
            .await?;

        let frame_tree = devtools.execute_cdp("Page.getFrameTree").await?;
        let frame_id = frame_tree["frameTree"]["frame"]["id"]
            .as_str()
            .context("browser did not report a frame for the new tab")?
            .to_string();
        devtools
            .execute_cdp_with_params(
                "Page.setDocumentContent",
                json!({ "frameId": frame_id, "html": html }),
            )
            .await?;

        self.driver
            .execute_async(WAIT_FOR_PAINT_SCRIPT, paint_wait_args())
            .await
            .context("page did not finish loading")?;

        let screenshot = devtools
            .execute_cdp_with_params(
                "Page.captureScreenshot",
                json!({
                    "format": "png",
                    "captureBeyondViewport": false,
                    "clip": {
                        "x": 0,
                        "y": 0,
                        "width": CANVAS_WIDTH,
                        "height": CANVAS_HEIGHT,
                        "scale": 1
                    }
                }),
            )
            .await?;
        let data = screenshot["data"]
            .as_str()
            .context("browser returned an empty screenshot")?;

        STANDARD
            .decode(data)
            .context("browser returned a malformed screenshot")
    }
}

#[async_trait]
impl PageRenderer for WebDriverPageRenderer {
    async fn render_png(&self, html: &str, output: &Path) -> Result<()> {
        let origin = self.driver.window().await?;
        let tab = self.driver.new_tab().await?;
        self.driver.switch_to_window(tab).await?;

        let captured = self.capture(html).await;

        let closed = self.driver.close_window().await;
        self.driver.switch_to_window(origin).await?;
        let png = captured?;
        closed?;

        write_png(output, &png).await
    }
}

async fn write_png(output: &Path, png: &[u8]) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(output, png)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    debug!(output = %output.display(), bytes = png.len(), "web_driver: screenshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_png_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("rekan-render-{}", std::process::id()));
        let output = dir.join("nested").join("post.png");

        write_png(&output, b"\x89PNG").await.unwrap();
        assert_eq!(tokio::fs::read(&output).await.unwrap(), b"\x89PNG");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[test]
    fn paint_wait_passes_quiet_window_then_cap_in_millis() {
        assert_eq!(paint_wait_args(), vec![json!(500), json!(10_000)]);
        assert!(NETWORK_QUIET < NETWORK_QUIET_MAX_WAIT);
    }

    #[tokio::test]
    #[ignore = "needs a running WebDriver server at WEBDRIVER_URL"]
    async fn renders_a_png_at_canvas_size() {
        dotenvy::dotenv().ok();
        let server_url =
            std::env::var("WEBDRIVER_URL").unwrap_or_else(|_| "http://localhost:4444".to_string());
        let renderer = WebDriverPageRenderer::launch(&WebDriverConfig::new(server_url))
            .await
            .unwrap();

        let output = std::env::temp_dir().join("rekan-render-smoke.png");
        let result = renderer
            .render_png("<html><body style=\"background:#F97368\"></body></html>", &output)
            .await;
        renderer.quit().await.unwrap();
        result.unwrap();

        let png = tokio::fs::read(&output).await.unwrap();
        assert_eq!(&png[1..4], b"PNG");
        // IHDR width and height, big endian.
        assert_eq!(u32::from_be_bytes(png[16..20].try_into().unwrap()), CANVAS_WIDTH);
        assert_eq!(u32::from_be_bytes(png[20..24].try_into().unwrap()), CANVAS_HEIGHT);
    }
}
