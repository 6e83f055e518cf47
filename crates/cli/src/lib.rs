//! Webfont CLI library.

pub mod cli;
