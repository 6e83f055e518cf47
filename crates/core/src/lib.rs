//! Webfont Core - protocol-based font source selection and loading.

pub mod config;
pub mod error;
pub mod family;
pub mod loader;
pub mod protocol;
pub mod sources;
pub mod variation;

pub use config::{CustomSource, LoaderConfig};
pub use error::{Error, Result};
pub use family::FamilyDeclaration;
pub use loader::{HttpLoader, WebfontLoader, select_and_load};
pub use protocol::Protocol;
pub use sources::{DEFAULT_URLS, FAMILIES, LOAD_TIMEOUT_MS, SECURE_URLS, select_urls};
pub use variation::{FontStyle, Variation, Weight};
