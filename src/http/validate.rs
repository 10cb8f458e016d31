use url::Url;

const ACCEPTED_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Returns true when `candidate` is an absolute `http`, `https` or `ftp` URL
/// (lowercase scheme only)
/// with a non-empty remainder free of whitespace and double quotes that also
/// survives strict parsing.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let Some(rest) = ACCEPTED_SCHEMES
        .iter()
        .find_map(|scheme| candidate.strip_prefix(scheme))
    else {
        return false;
    };

    if rest.is_empty() || rest.chars().any(|ch| ch.is_whitespace() || ch == '"') {
        return false;
    }

    Url::parse(candidate).is_ok_and(|url| url.has_host())
}

/// Appends `apiversion=<version>` as a query parameter.
#[must_use]
pub fn with_api_version(url: &str, version: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}apiversion={version}")
}
