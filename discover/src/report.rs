use std::fmt::{self, Write};

use crates::domain::{
    entities::discovered_accounts::DiscoveredAccount,
    value_objects::niches::{MEI_ACCOUNTS, Niche},
};

const RULE_WIDTH: usize = 60;
const TITLE_CHARS: usize = 80;

/// Plain-text report for one niche: new accounts, known seeds, hashtags to browse.
pub fn format_report(niche: &Niche, accounts: &[DiscoveredAccount]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, niche, accounts);
    out
}

fn write_report(out: &mut String, niche: &Niche, accounts: &[DiscoveredAccount]) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{rule}")?;
    writeln!(out, " {} - discovered accounts", niche.name.to_uppercase())?;
    writeln!(out, "{rule}")?;

    if accounts.is_empty() {
        writeln!(out, "\nNo new accounts found.")?;
    } else {
        writeln!(out, "\nFound {} accounts (sorted by relevance):\n", accounts.len())?;
        for account in accounts {
            write!(out, "  @{}", account.username)?;
            if account.count > 1 {
                write!(out, " (appeared {}x)", account.count)?;
            }
            writeln!(out)?;
            if !account.title.is_empty() {
                let title: String = account.title.chars().take(TITLE_CHARS).collect();
                writeln!(out, "    {title}")?;
            }
        }
    }

    writeln!(out, "\n{rule}")?;
    writeln!(out, " Already-known seed accounts:")?;
    writeln!(out, "{rule}")?;
    for seed in niche.seeds {
        writeln!(out, "  @{seed}")?;
    }
    for account in MEI_ACCOUNTS {
        writeln!(out, "  @{account}  (cross-niche MEI)")?;
    }

    writeln!(out, "\n{rule}")?;
    writeln!(out, " Hashtags to explore:")?;
    writeln!(out, "{rule}")?;
    for hashtag in niche.hashtags {
        writeln!(out, "  #{hashtag}  ->  {}", Niche::hashtag_url(hashtag))?;
    }

    Ok(())
}
