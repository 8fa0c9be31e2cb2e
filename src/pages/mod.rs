//! The site's pages as data: each page is its SEO intent plus the schema.org
//! objects it emits. Resolving a page runs both through the metadata builder
//! and the JSON-LD serializer.

pub mod blog;
pub mod industries;
pub mod locations;
pub mod services;
pub mod site;

use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::SeoError;
use crate::seo::jsonld::secure_json_ld;
use crate::seo::meta::{build_metadata, ResolvedMetadata, SeoIntent};

/// Calendar date for page tables. Only call from `const` items so a typo
/// fails the build.
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date in page table"),
    }
}

/// One page of the site.
#[derive(Debug, Clone)]
pub struct Page {
    pub intent: SeoIntent,
    pub schemas: Vec<Value>,
}

/// Everything the rendering layer needs for a page's head.
#[derive(Debug, Clone)]
pub struct ResolvedPage {
    pub metadata: ResolvedMetadata,
    /// One escaped payload per schema object, in page order.
    pub json_ld: Vec<String>,
}

impl Page {
    pub fn new(intent: SeoIntent, schemas: Vec<Value>) -> Self {
        Self { intent, schemas }
    }

    pub fn path(&self) -> &str {
        &self.intent.path
    }

    pub fn resolve(&self, config: &SiteConfig) -> Result<ResolvedPage, SeoError> {
        let metadata = build_metadata(config, &self.intent)?;
        let json_ld = self
            .schemas
            .iter()
            .map(secure_json_ld)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Resolved page {} with {} structured data block(s)",
            self.intent.path,
            json_ld.len()
        );
        Ok(ResolvedPage { metadata, json_ld })
    }
}

/// Every page of the site, in navigation order.
pub fn catalog(config: &SiteConfig) -> Vec<Page> {
    let mut pages = vec![site::home(config), site::author(config), site::pricing(config)];
    pages.push(locations::index(config));
    pages.extend(locations::pages(config));
    pages.push(services::index(config));
    pages.extend(services::pages(config));
    pages.push(industries::index(config));
    pages.extend(industries::pages(config));
    pages.push(blog::index(config));
    pages.extend(blog::pages(config));
    pages
}

/// Look up a page by its site-relative path.
pub fn find(config: &SiteConfig, path: &str) -> Option<Page> {
    catalog(config).into_iter().find(|p| p.path() == path)
}

/// Resolve the whole catalog, stopping at the first malformed page.
pub fn resolve_all(config: &SiteConfig) -> Result<Vec<ResolvedPage>, SeoError> {
    catalog(config).iter().map(|p| p.resolve(config)).collect()
}
