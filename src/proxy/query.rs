//! Query string sanitization
//!
//! The one trust boundary in the system: whatever the caller put in the
//! `apiKey` parameter is discarded and replaced with the server-held secret.
//! Every other parameter passes through untouched, duplicates and relative
//! order included.

use url::form_urlencoded;

/// Reserved query parameter authenticating against the HERE APIs
pub const API_KEY_PARAM: &str = "apiKey";

/// Rebuild a raw query string with the API key injected
///
/// Parses `raw` as an ordered multi-map, drops every `apiKey` entry
/// regardless of its value, and appends exactly one `apiKey=<secret>` at
/// the end. An empty `raw` yields the key parameter alone.
pub fn sanitize_query(raw: &str, api_key: &str) -> String {
    let mut sanitized = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key == API_KEY_PARAM {
            continue;
        }
        sanitized.append_pair(&key, &value);
    }

    sanitized.append_pair(API_KEY_PARAM, api_key);
    sanitized.finish()
}
