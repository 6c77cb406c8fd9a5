//! Query-string construction.

use std::fmt::Write;

use crate::request::Query;

/// Production endpoint of the OpenSecrets API.
pub const DEFAULT_BASE_URL: &str = "https://www.opensecrets.org/api/";

/// Build the full request URL for one call.
///
/// Layout: `<base>?method=<m>&output=json&apikey=<key>`, then required
/// parameters, then optional ones that are set and non-zero. Values are
/// percent-encoded; alphanumeric IDs pass through unchanged.
pub fn build_url<Q: Query + ?Sized>(base_url: &str, api_key: &str, method: &str, request: &Q) -> String {
    let mut url = format!(
        "{base_url}?method={method}&output=json&apikey={}",
        urlencoding::encode(api_key)
    );

    for param in request.required() {
        // Writing to a String cannot fail.
        let _ = write!(url, "&{}={}", param.param, urlencoding::encode(param.value));
    }
    for (name, value) in request.optional() {
        if let Some(value) = value.filter(|v| *v != 0) {
            let _ = write!(url, "&{name}={value}");
        }
    }

    url
}
