//! Infrastructure adapters

pub mod catalogue_loader;
pub mod link_shortener;

pub use catalogue_loader::CatalogueLoader;
pub use link_shortener::{validate_share_url, TinyUrlShortener};
