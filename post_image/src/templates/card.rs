use crates::domain::value_objects::{
    brand::{
        BRAND_NAME, CANVAS_HEIGHT, CANVAS_WIDTH, CHARCOAL, CORAL, GREEN, OFF_WHITE, is_light_color,
        resolve_color,
    },
    post_specs::CardPost,
};

use super::{
    FONT_IMPORT,
    emphasis::{apply_emphasis, escape_html},
};

const WHATSAPP_GLYPH_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

/// Text colors that read well on the card background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPalette {
    pub text: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub fn card_palette(background: &str) -> CardPalette {
    if is_light_color(background) {
        CardPalette {
            text: CHARCOAL,
            subtitle: "rgba(68, 68, 74, 0.6)",
            cta: "rgba(68, 68, 74, 0.5)",
        }
    } else {
        CardPalette {
            text: "#ffffff",
            subtitle: "rgba(255, 255, 255, 0.55)",
            cta: "rgba(255, 255, 255, 0.6)",
        }
    }
}

fn whatsapp_svg(color: &str) -> String {
    format!(
        r#"<svg class="whatsapp-icon" viewBox="0 0 24 24" fill="{color}"><path d="{WHATSAPP_GLYPH_PATH}"/></svg>"#
    )
}

/// Centered hook on a solid or gradient background.
pub fn card_html(post: &CardPost, logo_svg: &str) -> String {
    let emphasis_color = resolve_color(post.emphasis_color.as_deref());
    let hook_html = apply_emphasis(&post.hook, &post.emphasis, emphasis_color);
    let background_color = post.background_color.as_deref().unwrap_or(OFF_WHITE);
    let CardPalette {
        text: text_color,
        subtitle: subtitle_color,
        cta: cta_color,
    } = card_palette(background_color);

    let subtitle = post
        .subtitle
        .as_deref()
        .map(|subtitle| {
            format!(
                "<div class=\"divider\"></div><div class=\"subtitle\">{}</div>",
                escape_html(subtitle)
            )
        })
        .unwrap_or_default();
    let bottom = match post.cta.as_deref() {
        Some(cta) => format!(
            "<div class=\"cta\">{} {}</div>",
            whatsapp_svg(cta_color),
            escape_html(cta)
        ),
        None => format!("<div class=\"brand-line\">{logo_svg}<span>{BRAND_NAME}</span></div>"),
    };

    format!(
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
    background: {background_color};
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 80px 72px;
  }}

  .logo-mark {{
    margin-bottom: 40px;
  }}

  .logo-mark svg {{
    width: 72px;
    height: auto;
  }}

  .hook {{
    font-size: 58px;
    font-weight: 800;
    line-height: 1.12;
    color: {text_color};
    text-align: center;
    margin: auto 0;
    max-width: 100%;
  }}

  .subtitle {{
    font-size: 28px;
    font-weight: 400;
    color: {subtitle_color};
    text-align: center;
    line-height: 1.4;
    margin-top: 36px;
    margin-bottom: auto;
  }}

  .bottom-bar {{
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 14px;
    width: 100%;
    margin-top: 40px;
  }}

  .cta {{
    font-size: 22px;
    font-weight: 600;
    color: {cta_color};
    letter-spacing: 0.02em;
    display: flex;
    align-items: center;
    gap: 10px;
  }}

  .whatsapp-icon {{
    width: 28px;
    height: 28px;
    fill: {cta_color};
  }}

  .brand-line {{
    display: flex;
    align-items: center;
    gap: 10px;
  }}

  .brand-line svg {{
    width: 32px;
    height: auto;
  }}

  .brand-line span {{
    font-size: 22px;
    font-weight: 300;
    letter-spacing: 0.05em;
    color: {cta_color};
    text-transform: lowercase;
  }}

  .divider {{
    width: 120px;
    height: 3px;
    background: linear-gradient(90deg, {CORAL}, {GREEN});
    border-radius: 2px;
    margin: 32px auto;
  }}
</style>
</head>
<body>
  <div class="logo-mark">{logo_svg}</div>
  <div class="hook">{hook_html}</div>
  {subtitle}
  <div class="bottom-bar">
    {bottom}
  </div>
</body>
</html>"#
    )
}
