use clap::{
    Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use crates::domain::value_objects::niches::{Niche, NICHES, find_niche, niche_names};

#[derive(Debug, Parser)]
#[command(name = "discover")]
#[command(about = "List Instagram accounts worth following in a business niche")]
pub struct Cli {
    /// One or more niche names.
    pub niches: Vec<String>,

    /// Search every known niche.
    #[arg(long)]
    pub all: bool,

    /// City or region added to the first keyword searches.
    #[arg(long, value_name = "CITY")]
    pub location: Option<String>,

    /// Show the browser window.
    #[arg(long)]
    pub headed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum NicheSelectionError {
    Unknown(String),
    Empty,
}

pub fn usage() -> String {
    format!(
        "Usage: discover <{}|--all> [--location \"city\"] [--headed]",
        niche_names().join("|")
    )
}

/// Help and version requests are not failures; clap prints them itself.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// The argument clap could not place, if it names one.
pub fn rejected_arg(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    }
}

impl Cli {
    /// Niches to run, in the order given. `--all` wins over explicit names.
    pub fn selected_niches(&self) -> Result<Vec<&'static Niche>, NicheSelectionError> {
        if self.all {
            return Ok(NICHES.iter().collect());
        }

        let mut selected = Vec::with_capacity(self.niches.len());
        for name in &self.niches {
            let niche =
                find_niche(name).ok_or_else(|| NicheSelectionError::Unknown(name.clone()))?;
            selected.push(niche);
        }

        if selected.is_empty() {
            return Err(NicheSelectionError::Empty);
        }
        Ok(selected)
    }
}
