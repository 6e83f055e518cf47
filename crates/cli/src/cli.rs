//! CLI definitions and command dispatch.

use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use webfont_core::{HttpLoader, LoaderConfig, Protocol, select_and_load};

#[derive(Parser)]
#[command(name = "webfont")]
#[command(about = "Select and load NPR webfont stylesheets by page protocol")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stylesheets and families selected for a protocol.
    Sources {
        #[arg(long, default_value = "http:")]
        protocol: String,
    },
    /// Fetch the selected stylesheets into an output directory.
    Load {
        #[arg(long, default_value = "http:")]
        protocol: String,
        #[arg(long, default_value = "fonts")]
        output_dir: PathBuf,
    },
    /// Remove the output directory.
    Clean {
        #[arg(long, default_value = "fonts")]
        output_dir: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Sources { protocol } => {
                let config = LoaderConfig::for_protocol(Protocol::from_scheme(&protocol))?;
                println!("Families:");
                for family in &config.custom.families {
                    println!("  {family}");
                }
                println!("Stylesheets:");
                for url in &config.custom.urls {
                    println!("  {url}");
                }
                println!("Timeout: {} ms", config.timeout.as_millis());
            }
            Commands::Load { protocol, output_dir } => {
                let loader = HttpLoader::new(output_dir);
                select_and_load(Protocol::from_scheme(&protocol), &loader)?;
            }
            Commands::Clean { output_dir } => {
                if output_dir.exists() {
                    fs::remove_dir_all(&output_dir)?;
                    println!("Removed {}", output_dir.display());
                } else {
                    println!("Skipped {} (not found)", output_dir.display());
                }
            }
        }
        Ok(())
    }
}
