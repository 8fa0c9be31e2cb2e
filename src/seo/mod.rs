pub mod audit;
pub mod jsonld;
pub mod meta;
pub mod schema;

// Re-export commonly used functions
pub use audit::{audit_catalog, audit_metadata};
pub use jsonld::{script_tag, secure_json_ld};
pub use meta::{build_metadata, canonical_url, ResolvedMetadata, SeoIntent};
