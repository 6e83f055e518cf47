//! Loader seam and the HTTP stylesheet loader.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::warn;

use crate::{config::LoaderConfig, error::Result, protocol::Protocol};

/// Entry point of a webfont loader.
///
/// Loading is fire-and-forget: the loader owns fetching, timeout handling,
/// and fallback, and surfaces nothing back to the caller.
pub trait WebfontLoader {
    fn load(&self, config: &LoaderConfig);
}

/// Build the configuration for `protocol` and hand it to `loader`.
pub fn select_and_load(protocol: Protocol, loader: &impl WebfontLoader) -> Result<()> {
    let config = LoaderConfig::for_protocol(protocol)?;
    loader.load(&config);
    Ok(())
}

/// Loader that fetches each stylesheet over HTTP and stores it under an
/// output directory.
pub struct HttpLoader {
    output_dir: PathBuf,
}

impl HttpLoader {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    fn fetch(
        client: &reqwest::blocking::Client,
        url: &str,
        output_dir: &Path,
    ) -> anyhow::Result<()> {
        let name = url
            .rsplit('/')
            .find(|part| !part.is_empty())
            .unwrap_or("stylesheet.css");
        println!("  {name}");

        let response = client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {url}"))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {status} for {url}");
        }

        let bytes = response.bytes()?;
        fs::write(output_dir.join(name), &bytes)?;
        println!("  Fetched ({} bytes)", bytes.len());
        Ok(())
    }
}

impl WebfontLoader for HttpLoader {
    /// Failures stay inside the loader; a stylesheet that cannot be fetched
    /// simply leaves the page on its fallback fonts.
    fn load(&self, config: &LoaderConfig) {
        if let Err(e) = fs::create_dir_all(&self.output_dir) {
            warn!("cannot create {}: {e}", self.output_dir.display());
            return;
        }
        let client = match reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("cannot build HTTP client: {e}");
                return;
            }
        };

        let mut failures = Vec::new();
        for (family, url) in config.custom.families.iter().zip(&config.custom.urls) {
            println!("Loading {}", family.name);
            if let Err(e) = Self::fetch(&client, url, &self.output_dir) {
                warn!("{e:?}");
                failures.push(family.name.as_str());
            }
        }

        let success = config.custom.urls.len() - failures.len();
        println!("\nLoad Summary");
        println!("  Success: {success}");
        if !failures.is_empty() {
            println!("  Failed:  {}", failures.len());
            for name in &failures {
                println!("    - {name}");
            }
        }
    }
}
