//! Loader configuration assembly.

use std::time::Duration;

use crate::{error::Result, family::FamilyDeclaration, protocol::Protocol, sources};

/// The `custom` section of a loader configuration: self-hosted stylesheets
/// plus the families they provide, in matching order. The loader does its
/// own family-to-stylesheet pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSource {
    pub families: Vec<FamilyDeclaration>,
    pub urls: Vec<String>,
}

/// Everything the loader needs for one load request. Built once, handed to
/// the loader, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub custom: CustomSource,
    pub timeout: Duration,
}

impl LoaderConfig {
    /// Build the configuration for a page protocol from the fixed sources.
    pub fn for_protocol(protocol: Protocol) -> Result<Self> {
        let families = sources::FAMILIES
            .iter()
            .map(|family| family.parse())
            .collect::<Result<Vec<_>>>()?;
        let urls = sources::select_urls(protocol)
            .iter()
            .map(|url| (*url).to_string())
            .collect();
        Ok(Self {
            custom: CustomSource { families, urls },
            timeout: Duration::from_millis(sources::LOAD_TIMEOUT_MS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_fixed_sources() {
        let config = LoaderConfig::for_protocol(Protocol::Https).unwrap();
        assert_eq!(config.custom.families.len(), 3);
        assert_eq!(config.custom.urls.len(), 3);
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn families_do_not_depend_on_protocol() {
        let http = LoaderConfig::for_protocol(Protocol::Http).unwrap();
        let https = LoaderConfig::for_protocol(Protocol::Https).unwrap();
        assert_eq!(http.custom.families, https.custom.families);
        assert_eq!(http.timeout, https.timeout);
        assert_ne!(http.custom.urls, https.custom.urls);
    }

    #[test]
    fn shipped_declarations_parse() {
        let config = LoaderConfig::for_protocol(Protocol::Http).unwrap();
        let names: Vec<_> = config.custom.families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Gotham SSm", "Gotham", "Knockout 31 4r"]);
    }
}
