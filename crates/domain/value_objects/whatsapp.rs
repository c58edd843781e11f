use anyhow::{Result, anyhow};
use url::Url;

/// Builds a `wa.me` click-to-chat link with a prefilled message.
pub fn wa_link(number: &str, text: &str) -> Result<Url> {
    let number: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if number.is_empty() {
        return Err(anyhow!("WhatsApp number has no digits"));
    }

    let base = format!("https://wa.me/{}", number);
    Url::parse_with_params(&base, &[("text", text)])
        .map_err(|err| anyhow!("Invalid WhatsApp link: {}", err))
}
