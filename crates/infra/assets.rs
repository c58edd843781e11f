use std::path::{Path, PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Background image not found: {}", .0.display())]
    ImageNotFound(PathBuf),
    #[error("HTML file not found: {}", .0.display())]
    HtmlNotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Relative paths are taken from the current working directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

pub async fn read_logo_svg(path: &Path) -> Result<String, AssetError> {
    read_text(path).await
}

/// Inlines an image as a base64 `data:` URI.
pub async fn image_to_data_uri(path: &Path) -> Result<String, AssetError> {
    let resolved = resolve_path(path);
    if !exists(&resolved).await {
        return Err(AssetError::ImageNotFound(resolved));
    }

    let bytes = tokio::fs::read(&resolved)
        .await
        .map_err(|source| AssetError::Read {
            path: resolved.clone(),
            source,
        })?;

    Ok(format!(
        "data:{};base64,{}",
        image_mime(&resolved),
        STANDARD.encode(bytes)
    ))
}

pub async fn read_html_fragment(path: &Path) -> Result<String, AssetError> {
    let resolved = resolve_path(path);
    if !exists(&resolved).await {
        return Err(AssetError::HtmlNotFound(resolved));
    }
    read_text(&resolved).await
}

fn image_mime(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        _ => mime_guess::from_ext(&ext)
            .first()
            .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| format!("image/{ext}")),
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn read_text(path: &Path) -> Result<String, AssetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rekan-assets-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(image_mime(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(image_mime(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("photo.png")), "image/png");
        assert_eq!(image_mime(Path::new("photo.webp")), "image/webp");
        assert_eq!(image_mime(Path::new("logo.svg")), "image/svg+xml");
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path(Path::new("posts/a.png")), cwd.join("posts/a.png"));
        assert_eq!(resolve_path(Path::new("/tmp/a.png")), PathBuf::from("/tmp/a.png"));
    }

    #[tokio::test]
    async fn images_become_data_uris() {
        let dir = scratch_dir("image");
        let image = dir.join("bg.png");
        std::fs::write(&image, [1u8, 2, 3]).unwrap();

        let uri = image_to_data_uri(&image).await.unwrap();
        assert_eq!(uri, "data:image/png;base64,AQID");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_files_name_the_resolved_path() {
        let missing = std::env::temp_dir().join("rekan-assets-missing/bg.jpg");
        let err = image_to_data_uri(&missing).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Background image not found: {}", missing.display())
        );

        let err = read_html_fragment(&missing.with_extension("html"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("HTML file not found: "));
    }
}
