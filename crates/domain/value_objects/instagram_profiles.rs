const PROFILE_HOST: &str = "instagram.com/";

/// Pulls the lowercased first path segment out of an instagram.com link.
/// Occurrences without a name, like a bare host inside a redirect, are skipped.
pub fn extract_username(href: &str) -> Option<String> {
    href.match_indices(PROFILE_HOST).find_map(|(at, _)| {
        let username: String = href[at + PROFILE_HOST.len()..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
            .collect();
        (!username.is_empty()).then(|| username.to_ascii_lowercase())
    })
}
