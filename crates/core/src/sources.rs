//! Fixed font sources for NPR pages.

use crate::protocol::Protocol;

/// Family declarations passed to the loader, identical for both branches.
pub const FAMILIES: [&str; 3] = ["Gotham SSm:n4,n7", "Gotham:n4,n7", "Knockout 31 4r:n4"];

/// Stylesheet URLs for pages served over plain HTTP.
pub const DEFAULT_URLS: [&str; 3] = [
    "http://s.npr.org/templates/css/fonts/GothamSSm.css",
    "http://s.npr.org/templates/css/fonts/Gotham.css",
    "http://s.npr.org/templates/css/fonts/Knockout.css",
];

/// Stylesheet URLs for pages served over HTTPS.
pub const SECURE_URLS: [&str; 3] = [
    "https://secure.npr.org/templates/css/fonts/GothamSSm.css",
    "https://secure.npr.org/templates/css/fonts/Gotham.css",
    "https://secure.npr.org/templates/css/fonts/Knockout.css",
];

/// Loader timeout in milliseconds.
pub const LOAD_TIMEOUT_MS: u64 = 10_000;

/// Choose the stylesheet URLs for the page's access protocol.
///
/// Index *i* of [`FAMILIES`] corresponds to index *i* of the returned list.
pub const fn select_urls(protocol: Protocol) -> &'static [&'static str; 3] {
    match protocol {
        Protocol::Https => &SECURE_URLS,
        Protocol::Http => &DEFAULT_URLS,
    }
}
