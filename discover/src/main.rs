use anyhow::Result;
use clap::Parser;
use crates::domain::value_objects::niches::Niche;
use discover::{
    cli::{Cli, NicheSelectionError, is_informational, rejected_arg, usage},
    config::config_loader,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => {
            if let Some(arg) = rejected_arg(&err) {
                eprintln!("Unknown arg: {arg}");
            }
            usage_exit()
        }
    };
    let niches = match cli.selected_niches() {
        Ok(niches) => niches,
        Err(err) => {
            if let NicheSelectionError::Unknown(arg) = err {
                eprintln!("Unknown arg: {arg}");
            }
            usage_exit()
        }
    };

    if let Err(error) = run(niches, cli).await {
        error!("Discover exited with error: {}", error);
        std::process::exit(1);
    }
}

fn usage_exit() -> ! {
    eprintln!("{}", usage());
    std::process::exit(1);
}

async fn run(niches: Vec<&'static Niche>, cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("discover")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    discover::run(niches, cli.location, cli.headed, dotenvy_env).await
}
