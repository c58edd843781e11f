use crates::{
    domain::value_objects::{
        brand::{BRAND_NAME, CANVAS_HEIGHT, CANVAS_WIDTH, DARK_BG, resolve_color},
        post_specs::OverlayPost,
    },
    infra::assets::image_to_data_uri,
};

use super::{
    FONT_IMPORT, PostImageError,
    emphasis::{apply_emphasis, escape_html},
};

const DEFAULT_OVERLAY_OPACITY: f64 = 0.6;

/// Hook text over a darkened photo, or over a flat color when there is no photo.
pub async fn overlay_html(post: &OverlayPost, logo_svg: &str) -> Result<String, PostImageError> {
    let emphasis_color = resolve_color(post.emphasis_color.as_deref());
    let hook_html = apply_emphasis(&post.hook, &post.emphasis, emphasis_color);
    let background_color = post.background_color.as_deref().unwrap_or(DARK_BG);
    let overlay_opacity = post.overlay_opacity.unwrap_or(DEFAULT_OVERLAY_OPACITY);

    let background = match &post.background_image {
        Some(path) => format!(
            "url('{}') center/cover no-repeat",
            image_to_data_uri(path).await?
        ),
        None => background_color.to_string(),
    };

    let niche_tag = match &post.niche_tag {
        Some(tag) => format!("<div class=\"niche-tag\">{}</div>", escape_html(tag)),
        None => "<div style=\"margin-bottom:auto\"></div>".to_string(),
    };
    let subtitle = post
        .subtitle
        .as_deref()
        .map(|subtitle| format!("<div class=\"subtitle\">{}</div>", escape_html(subtitle)))
        .unwrap_or_default();
    let cta = post
        .cta
        .as_deref()
        .map(|cta| format!("<div class=\"cta\">{}</div>", escape_html(cta)))
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  {FONT_IMPORT}

  * {{ margin: 0; padding: 0; box-sizing: border-box; }}

  body {{
    width: {CANVAS_WIDTH}px;
    height: {CANVAS_HEIGHT}px;
    font-family: 'Urbanist', system-ui, sans-serif;
    overflow: hidden;
    position: relative;
    background: {background_color};
  }}

  .bg-image {{
    position: absolute;
    inset: 0;
    background: {background};
  }}

  .bg-overlay {{
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, {overlay_opacity});
  }}

  .content {{
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    height: 100%;
    padding: 60px 64px;
  }}

  .niche-tag {{
    font-size: 22px;
    font-weight: 600;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: rgba(255, 255, 255, 0.6);
    margin-bottom: auto;
  }}

  .hook {{
    font-size: 54px;
    font-weight: 800;
    line-height: 1.15;
    color: #ffffff;
    margin-bottom: 28px;
    max-width: 95%;
  }}

  .subtitle {{
    font-size: 26px;
    font-weight: 400;
    color: rgba(255, 255, 255, 0.55);
    margin-bottom: auto;
    line-height: 1.4;
  }}

  .bottom-bar {{
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 40px;
  }}

  .logo {{
    display: flex;
    align-items: center;
    gap: 14px;
  }}

  .logo svg {{
    width: 44px;
    height: auto;
  }}

  .logo-text {{
    font-size: 26px;
    font-weight: 300;
    letter-spacing: 0.05em;
    color: rgba(255, 255, 255, 0.7);
    text-transform: lowercase;
  }}

  .cta {{
    font-size: 22px;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.6);
    letter-spacing: 0.02em;
  }}
</style>
</head>
<body>
  <div class="bg-image"></div>
  <div class="bg-overlay"></div>
  <div class="content">
    {niche_tag}
    <div class="hook">{hook_html}</div>
    {subtitle}
    <div class="bottom-bar">
      <div class="logo">
        {logo_svg}
        <span class="logo-text">{BRAND_NAME}</span>
      </div>
      {cta}
    </div>
  </div>
</body>
</html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn post() -> OverlayPost {
        OverlayPost {
            hook: "Seu bolo merece fotos melhores".to_string(),
            emphasis: vec!["fotos melhores".to_string()],
            emphasis_color: Some("green".to_string()),
            background_color: None,
            background_image: None,
            overlay_opacity: None,
            niche_tag: None,
            subtitle: None,
            cta: None,
            output: PathBuf::from("out.png"),
        }
    }

    #[tokio::test]
    async fn defaults_to_dark_background_and_scrim() {
        let html = overlay_html(&post(), "<svg></svg>").await.unwrap();

        assert!(html.contains("background: #0a0a0c;"));
        assert!(html.contains("rgba(0, 0, 0, 0.6)"));
        assert!(html.contains("width: 1080px;"));
        assert!(html.contains("height: 1350px;"));
        assert!(html.contains("<em style=\"color:#87AA8C;font-style:normal\">fotos melhores</em>"));
        assert!(html.contains("<div style=\"margin-bottom:auto\"></div>"));
        assert!(!html.contains("class=\"cta\""));
    }

    #[tokio::test]
    async fn optional_parts_are_escaped() {
        let mut post = post();
        post.niche_tag = Some("Doces & Bolos".to_string());
        post.subtitle = Some("Linha 1\nLinha 2".to_string());
        post.cta = Some("Chama no <zap>".to_string());
        post.overlay_opacity = Some(0.35);

        let html = overlay_html(&post, "<svg></svg>").await.unwrap();
        assert!(html.contains("<div class=\"niche-tag\">Doces &amp; Bolos</div>"));
        assert!(html.contains("<div class=\"subtitle\">Linha 1<br>Linha 2</div>"));
        assert!(html.contains("<div class=\"cta\">Chama no &lt;zap&gt;</div>"));
        assert!(html.contains("rgba(0, 0, 0, 0.35)"));
    }

    #[tokio::test]
    async fn missing_background_image_fails() {
        let mut post = post();
        post.background_image = Some(PathBuf::from("definitely/not/here.jpg"));

        let err = overlay_html(&post, "<svg></svg>").await.unwrap_err();
        assert!(err.to_string().starts_with("Background image not found: "));
    }
}
