pub mod card;
pub mod custom;
pub mod emphasis;
pub mod overlay;

use crates::{domain::value_objects::post_specs::{PostSpec, PostSpecError}, infra::assets::AssetError};
use thiserror::Error;

pub(crate) const FONT_IMPORT: &str = "@import url('https://fonts.googleapis.com/css2?family=Urbanist:wght@300;400;600;700;800&display=swap');";

#[derive(Debug, Error)]
pub enum PostImageError {
    #[error(transparent)]
    Spec(#[from] PostSpecError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Full HTML document for one post.
pub async fn build_post_html(post: &PostSpec, logo_svg: &str) -> Result<String, PostImageError> {
    match post {
        PostSpec::Overlay(overlay) => overlay::overlay_html(overlay, logo_svg).await,
        PostSpec::Card(card) => Ok(card::card_html(card, logo_svg)),
        PostSpec::Custom(custom) => custom::custom_html(custom, logo_svg).await,
    }
}
