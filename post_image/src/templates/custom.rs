use crates::{
    domain::value_objects::{
        brand::{CANVAS_HEIGHT, CANVAS_WIDTH, CHARCOAL, CORAL, GREEN, OFF_WHITE},
        post_specs::CustomPost,
    },
    infra::assets::{image_to_data_uri, read_html_fragment},
};

use super::{FONT_IMPORT, PostImageError};

const LOGO_PLACEHOLDER: &str = "{{logo}}";
const BACKGROUND_IMAGE_PLACEHOLDER: &str = "{{backgroundImage}}";

/// Hand-written body from `htmlFile`, wrapped with brand fonts and CSS variables.
pub async fn custom_html(post: &CustomPost, logo_svg: &str) -> Result<String, PostImageError> {
    let fragment = read_html_fragment(&post.html_file).await?;

    let mut body = fragment.replace(LOGO_PLACEHOLDER, logo_svg);
    if let Some(image) = &post.background_image {
        body = body.replace(BACKGROUND_IMAGE_PLACEHOLDER, &image_to_data_uri(image).await?);
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  {FONT_IMPORT}

  :root {{
    --coral: {CORAL};
    --green: {GREEN};
    --charcoal: {CHARCOAL};
    --off-white: {OFF_WHITE};
  }}

  * {{ margin: 0; padding: 0; box-sizing: border-box; }}

  body {{
    width: {CANVAS_WIDTH}px;
    height: {CANVAS_HEIGHT}px;
    font-family: 'Urbanist', system-ui, sans-serif;
    overflow: hidden;
  }}
</style>
</head>
<body>
{body}
</body>
</html>"#
    ))
}
