use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const TEMPLATE_NAMES: [&str; 3] = ["overlay", "card", "custom"];

/// One post image to render. The `type` field selects the template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostSpec {
    Overlay(OverlayPost),
    Card(CardPost),
    Custom(CustomPost),
}

/// Hook text over a darkened photo (or flat color) background.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPost {
    pub hook: String,
    #[serde(default)]
    pub emphasis: Vec<String>,
    pub emphasis_color: Option<String>,
    pub background_color: Option<String>,
    pub background_image: Option<PathBuf>,
    pub overlay_opacity: Option<f64>,
    pub niche_tag: Option<String>,
    pub subtitle: Option<String>,
    pub cta: Option<String>,
    pub output: PathBuf,
}

/// Centered hook on a solid or gradient background.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardPost {
    pub hook: String,
    #[serde(default)]
    pub emphasis: Vec<String>,
    pub emphasis_color: Option<String>,
    pub background_color: Option<String>,
    pub subtitle: Option<String>,
    pub cta: Option<String>,
    pub output: PathBuf,
}

/// Hand-written HTML fragment with `{{logo}}` / `{{backgroundImage}}` placeholders.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomPost {
    pub html_file: PathBuf,
    pub background_image: Option<PathBuf>,
    pub output: PathBuf,
}

#[derive(Debug, Error)]
pub enum PostSpecError {
    #[error("Unknown template type: {0}. Use \"overlay\", \"card\" or \"custom\".")]
    UnknownType(String),
    #[error("Invalid {kind} post: {source}")]
    Invalid {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid post config: {0}")]
    Config(#[source] serde_json::Error),
}

impl PostSpec {
    /// Decodes one config entry, reporting an unknown `type` before any field errors.
    pub fn from_value(value: Value) -> Result<Self, PostSpecError> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => other.to_string(),
            None => "undefined".to_string(),
        };
        if !TEMPLATE_NAMES.contains(&kind.as_str()) {
            return Err(PostSpecError::UnknownType(kind));
        }

        serde_json::from_value(value).map_err(|source| PostSpecError::Invalid { kind, source })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PostSpec::Overlay(_) => "overlay",
            PostSpec::Card(_) => "card",
            PostSpec::Custom(_) => "custom",
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            PostSpec::Overlay(post) => &post.output,
            PostSpec::Card(post) => &post.output,
            PostSpec::Custom(post) => &post.output,
        }
    }
}

/// A config file holds either one post object or an array of them. Entries stay raw
/// so each one is decoded only when the batch reaches it.
pub fn parse_post_config(raw: &str) -> Result<Vec<Value>, PostSpecError> {
    match serde_json::from_str::<Value>(raw).map_err(PostSpecError::Config)? {
        Value::Array(entries) => Ok(entries),
        single => Ok(vec![single]),
    }
}
