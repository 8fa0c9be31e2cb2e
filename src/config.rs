//! Site-wide constants shared by the metadata builder and the schema builders.
//!
//! A [`SiteConfig`] is built once (defaults, an optional `site.toml`, and the
//! `SITE_BASE_URL` environment override) and then passed by reference. The
//! knowledge-graph identifiers are derived from the base URL on every call,
//! so pointing a config at a staging host moves every canonical URL and
//! every `@id` together.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::seo::meta::canonical_url;

/// Default configuration file name.
pub const CONFIG_FILENAME: &str = "site.toml";

/// Environment variable that overrides `base_url`.
pub const BASE_URL_ENV: &str = "SITE_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://endpointmedia.co.za";

/// Immutable site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin every canonical URL and identifier hangs off. No trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub alternate_name: String,
    pub description: String,
    /// Open Graph locale, e.g. `en_ZA`.
    pub locale: String,
    /// Language tags used for the default hreflang alternates.
    pub language_tags: Vec<String>,
    /// Title branding template. `{title}` and `{site_name}` are substituted.
    pub title_template: String,
    pub logo_path: String,
    pub share_image: ShareImage,
    pub price_range: String,
    pub same_as: Vec<String>,
    pub contact: ContactConfig,
    pub address: AddressConfig,
    pub author: AuthorConfig,
    /// Search console verification tokens keyed by engine (`google`, `bing`, ...).
    pub verification: BTreeMap<String, String>,
}

/// Default social share image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareImage {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub telephone: String,
    pub email: String,
    pub contact_type: String,
    pub area_served: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub locality: String,
    pub region: String,
    pub country: String,
}

/// The site's author, referenced by articles and the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub slug: String,
    pub name: String,
    pub job_title: String,
    pub image_path: String,
    pub same_as: Vec<String>,
    pub knows_about: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            site_name: "Endpoint Media".to_owned(),
            alternate_name: "Endpoint Media Web Design".to_owned(),
            description: "Endpoint Media builds high-performance, lead-generating websites for Johannesburg service businesses.".to_owned(),
            locale: "en_ZA".to_owned(),
            language_tags: vec!["en-ZA".to_owned(), "en".to_owned()],
            title_template: "{title} | {site_name}".to_owned(),
            logo_path: "/images/logo.png".to_owned(),
            share_image: ShareImage::default(),
            price_range: "R5,500 - R15,000".to_owned(),
            same_as: vec![
                "https://www.facebook.com/people/Endpoint-Media/61583029051159/".to_owned(),
            ],
            contact: ContactConfig::default(),
            address: AddressConfig::default(),
            author: AuthorConfig::default(),
            verification: BTreeMap::new(),
        }
    }
}

impl Default for ShareImage {
    fn default() -> Self {
        Self {
            path: "/images/EPM.jpg".to_owned(),
            width: 1200,
            height: 630,
            alt: "Endpoint Media - Web Design Johannesburg".to_owned(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            telephone: "+27-76-972-4559".to_owned(),
            email: "hello@endpointmedia.co.za".to_owned(),
            contact_type: "Sales".to_owned(),
            area_served: "ZA".to_owned(),
        }
    }
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            locality: "Johannesburg".to_owned(),
            region: "Gauteng".to_owned(),
            country: "ZA".to_owned(),
        }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            slug: "frank-smit".to_owned(),
            name: "Frank Smit".to_owned(),
            job_title: "Web Design Expert & Founder".to_owned(),
            image_path: "/images/frank-smit.jpg".to_owned(),
            same_as: vec!["https://www.linkedin.com/in/frank-smittt".to_owned()],
            knows_about: [
                "Web Design",
                "Local SEO",
                "Next.js Development",
                "E-commerce Development",
                "Technical SEO",
            ]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl SiteConfig {
    /// Load configuration.
    ///
    /// Reads `config_path` when given, otherwise `site.toml` in the current
    /// directory if present, otherwise the built-in defaults.
    /// `SITE_BASE_URL` then takes precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unparsable, or if the
    /// resulting configuration fails validation.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::read_file(path)?
            }
            None if Path::new(CONFIG_FILENAME).exists() => {
                Self::read_file(Path::new(CONFIG_FILENAME))?
            }
            None => Self::default(),
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                info!("{} overrides base_url with {}", BASE_URL_ENV, base_url.trim());
                config.base_url = base_url;
            }
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        info!("Loaded site config from {}", path.display());
        Ok(toml::from_str(&content)?)
    }

    /// Parse a TOML document. Missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Same configuration pointed at another origin (e.g. a staging host).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `base_url` is not an http(s) origin.
    pub fn with_base_url(&self, base_url: &str) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        config.base_url = base_url.to_owned();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_owned();
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "base_url")?;
        require_origin(&self.base_url, "base_url")?;
        require_non_empty(&self.site_name, "site_name")?;
        require_non_empty(&self.locale, "locale")?;
        require_non_empty(&self.author.name, "author.name")?;
        require_non_empty(&self.author.slug, "author.slug")?;
        if self.author.slug.contains('/') {
            return Err(ConfigError::Validation(
                "author.slug cannot contain '/'".into(),
            ));
        }
        if !self.title_template.contains("{title}") {
            return Err(ConfigError::Validation(
                "title_template must contain {title}".into(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for a site-relative path.
    pub fn url(&self, path: &str) -> String {
        canonical_url(&self.base_url, path)
    }

    /// Knowledge-graph identifier of the organization.
    pub fn org_id(&self) -> String {
        format!("{}/#organization", self.base_url)
    }

    /// Knowledge-graph identifier of the author.
    pub fn person_id(&self) -> String {
        format!("{}#person", self.author_url())
    }

    pub fn website_id(&self) -> String {
        format!("{}/#website", self.base_url)
    }

    pub fn local_business_id(&self) -> String {
        format!("{}/#localbusiness", self.base_url)
    }

    pub fn author_url(&self) -> String {
        self.url(&format!("/about/author/{}", self.author.slug))
    }

    pub fn share_image_url(&self) -> String {
        self.url(&self.share_image.path)
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require an http(s) origin without query or fragment.
fn require_origin(value: &str, field: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::Validation(format!("{field} is not a valid URL: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::Validation(format!(
            "{field} cannot carry a query or fragment"
        )));
    }
    Ok(())
}
