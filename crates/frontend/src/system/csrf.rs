//! CSRF token attached to unsafe requests.

use crate::shared::dom;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Methods the server does not check the token for.
pub fn is_safe_method(method: &str) -> bool {
    matches!(
        method.to_ascii_uppercase().as_str(),
        "GET" | "HEAD" | "OPTIONS" | "TRACE"
    )
}

/// Value of cookie `name` in a `document.cookie` string, percent-decoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let value = pair.strip_prefix(name)?.strip_prefix('=')?;
        Some(
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}

/// Read the token from the page cookies.
pub fn token(cookie_name: &str) -> Option<String> {
    let document = dom::document()?.dyn_into::<HtmlDocument>().ok()?;
    cookie_value(&document.cookie().ok()?, cookie_name)
}
