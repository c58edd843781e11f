use anyhow::Result;
use clap::{Parser, error::ErrorKind};
use post_image::{
    cli::{Cli, USAGE},
    config::config_loader,
};
use std::path::PathBuf;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config_file = match Cli::try_parse() {
        Ok(Cli {
            config: Some(config_file),
        }) => config_file,
        Ok(_) => usage_exit(),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => usage_exit(),
    };

    if let Err(error) = run(config_file).await {
        error!("Post image generator exited with error: {:#}", error);
        std::process::exit(1);
    }
}

fn usage_exit() -> ! {
    eprintln!("{USAGE}");
    std::process::exit(1);
}

async fn run(config_file: PathBuf) -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("post-image")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    post_image::run(&config_file, dotenvy_env).await?;
    Ok(())
}
