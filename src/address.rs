//! Address normalization and display titles.

use url::Url;

const SECURE_SCHEME_PREFIX: &str = "https://";

/// Trims the address and prefixes bare hostnames with `https://`.
///
/// Returns `None` for an empty address. Anything already starting with
/// `http://` or `https://` is passed through untouched.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("http://") || trimmed.starts_with(SECURE_SCHEME_PREFIX) {
        Some(trimmed.to_owned())
    } else {
        Some(format!("{SECURE_SCHEME_PREFIX}{trimmed}"))
    }
}

/// Derives a bookmark label from the host of `address`, dropping a leading
/// `www.`. Falls back to the raw address when it cannot be parsed.
pub fn derive_title(address: &str) -> String {
    let host = Url::parse(address)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned));

    match host {
        Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_owned(),
        None => address.to_owned(),
    }
}
