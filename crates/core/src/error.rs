//! Error types for webfont configuration parsing.

use std::result;

/// Errors that can occur while parsing font source declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid variation code: {0:?}")]
    Variation(String),

    #[error("invalid family declaration: {0:?}")]
    Family(String),
}

pub type Result<T> = result::Result<T, Error>;
