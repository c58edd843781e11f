use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str = "Usage: post-image --config <posts.json>";

#[derive(Debug, Parser)]
#[command(name = "post-image")]
#[command(about = "Render branded 1080x1350 Instagram post images")]
pub struct Cli {
    /// JSON file holding one post object or an array of them.
    #[arg(long, value_name = "posts.json")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_flag_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["post-image"]).unwrap();
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["post-image", "--config", "posts.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("posts.json")));
    }

    #[test]
    fn flag_without_value_is_rejected() {
        assert!(Cli::try_parse_from(["post-image", "--config"]).is_err());
    }
}
