//! Query-string helpers shared by the auth routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the OAuth completion handler and the login page read parameters
//! from `window.location.search`; parsing lives here so it stays pure and
//! natively testable.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Return the first non-empty, percent-decoded value for `key`.
///
/// Empty values (`?error=`) count as absent, matching how the redirect
/// contract treats them. Values that fail to decode fall back to the raw
/// text rather than being dropped.
#[cfg(any(test, feature = "hydrate"))]
pub fn non_empty_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, v)| *k == key && !v.is_empty())
        .map(|(_, v)| urlencoding::decode(v).map_or_else(|_| v.to_owned(), |d| d.into_owned()))
}
