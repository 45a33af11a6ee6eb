//! URL normalization and validation for whitelist entries.
//!
//! Decides whether a user-supplied string is an acceptable web address and
//! produces the canonical form used for storage and duplicate comparison.
//! Normalization is applied before both validation and persistence so that
//! `"example.com"` and `"https://EXAMPLE.COM"` store as the same value.
//!
//! Validation deliberately accepts only simple ASCII domain-style hosts:
//! IP literals, internationalized hostnames, and hosts without a
//! dot-separated alphabetic TLD are rejected. This is a narrowing to the
//! common case, not a general URL validator.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Host pattern: dot-separated labels of ASCII alphanumerics (internal
/// hyphens allowed, 63 chars max per label) ending in an alphabetic TLD of
/// at least two characters.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("domain pattern is a valid regex")
});

/// Canonicalizes a URL string for storage and comparison.
///
/// Trims surrounding whitespace, lowercases the whole string, and prepends
/// `https://` when no `http://`/`https://` scheme is present. Idempotent.
///
/// Note that the blanket lowercase also lowers the path and query. Stored
/// whitelist entries are matched by host in practice, but this may alter
/// case-sensitive resource paths.
pub fn normalize(input: &str) -> String {
    let normalized = input.trim().to_lowercase();

    if normalized.starts_with("http://") || normalized.starts_with("https://") {
        normalized
    } else {
        format!("https://{normalized}")
    }
}

/// Returns whether the input normalizes to a URL with an acceptable host.
///
/// Never panics; any parse failure or missing host yields `false`.
/// Non-ASCII input is rejected up front: the URL parser would otherwise
/// punycode an internationalized host into an `xn--` form the ASCII domain
/// pattern happily matches.
pub fn is_valid(input: &str) -> bool {
    let normalized = normalize(input);

    if !normalized.is_ascii() {
        return false;
    }

    match Url::parse(&normalized) {
        Ok(url) => url
            .host_str()
            .is_some_and(|host| DOMAIN_PATTERN.is_match(host)),
        Err(_) => false,
    }
}

/// Extracts the host from the normalized form of the input.
///
/// Falls back to returning the original input unchanged (not the normalized
/// form) when it cannot be parsed or has no host, so callers always receive
/// a usable string.
pub fn extract_domain(input: &str) -> String {
    let normalized = normalize(input);

    // Same ASCII guard as validation: never surface a punycoded host the
    // caller did not supply.
    if !normalized.is_ascii() {
        return input.to_string();
    }

    match Url::parse(&normalized) {
        Ok(url) => url
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| input.to_string()),
        Err(_) => input.to_string(),
    }
}
