//! Page access protocol.

/// The scheme a page is served over. Only `https` is distinguished; every
/// other scheme takes the default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    /// Parse the scheme string the hosting environment supplies.
    ///
    /// Accepts the form with or without the trailing colon (`"https:"` or
    /// `"https"`), case-insensitively. Anything else, including an empty
    /// string or an unrecognized scheme like `file:`, maps to [`Protocol::Http`],
    /// so parsing never fails.
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.trim_end_matches(':').eq_ignore_ascii_case("https") {
            Protocol::Https
        } else {
            Protocol::Http
        }
    }

    pub const fn is_secure(self) -> bool {
        matches!(self, Protocol::Https)
    }
}
