//! SEO metadata and JSON-LD structured data for the Endpoint Media site.
//!
//! Pages declare an [`seo::SeoIntent`] and a list of schema.org objects
//! ([`pages::Page`]). [`seo::build_metadata`] turns the intent into fully
//! defaulted, canonical-URL-consistent metadata, and
//! [`seo::secure_json_ld`] serializes the schema objects so they can be
//! embedded in a `<script>` element without breaking out of it.

pub mod config;
pub mod error;
pub mod pages;
pub mod seo;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, SiteConfig};
pub use error::SeoError;
