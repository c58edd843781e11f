use anyhow::Result;
use clap::Parser;
use invite::{cli::Cli, config::config_loader};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        error!("Invite exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("invite")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let view = invite::run(cli, dotenvy_env).await?;
    info!(terminal = view.is_terminal(), "invite: done");
    Ok(())
}
