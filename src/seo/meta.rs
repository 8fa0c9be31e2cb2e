use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::SeoError;

/// Open Graph object types accepted by `og:type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenGraphType {
    #[default]
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "profile")]
    Profile,
    #[serde(rename = "music.song")]
    MusicSong,
    #[serde(rename = "music.album")]
    MusicAlbum,
    #[serde(rename = "music.playlist")]
    MusicPlaylist,
    #[serde(rename = "music.radio_station")]
    MusicRadioStation,
    #[serde(rename = "video.movie")]
    VideoMovie,
    #[serde(rename = "video.episode")]
    VideoEpisode,
    #[serde(rename = "video.tv_show")]
    VideoTvShow,
    #[serde(rename = "video.other")]
    VideoOther,
}

impl OpenGraphType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Book => "book",
            Self::Profile => "profile",
            Self::MusicSong => "music.song",
            Self::MusicAlbum => "music.album",
            Self::MusicPlaylist => "music.playlist",
            Self::MusicRadioStation => "music.radio_station",
            Self::VideoMovie => "video.movie",
            Self::VideoEpisode => "video.episode",
            Self::VideoTvShow => "video.tv_show",
            Self::VideoOther => "video.other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
}

/// Share image attached to Open Graph previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
            alt: None,
        }
    }

    pub fn sized(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Per-page Open Graph overrides. The URL is deliberately absent: it always
/// follows the canonical URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphOverrides {
    #[serde(rename = "type")]
    pub og_type: Option<OpenGraphType>,
    pub locale: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterOverrides {
    pub card: Option<TwitterCard>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
}

/// What a page wants search engines and social previews to see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoIntent {
    pub title: String,
    pub description: String,
    /// Site-relative path, starting with `/`.
    pub path: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraphOverrides,
    pub twitter: TwitterOverrides,
    /// hreflang alternates; defaults to every configured language tag
    /// pointing at the canonical URL.
    pub hreflang: Option<BTreeMap<String, String>>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl SeoIntent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn og_type(mut self, og_type: OpenGraphType) -> Self {
        self.open_graph.og_type = Some(og_type);
        self
    }

    pub fn og_images(mut self, images: Vec<Image>) -> Self {
        self.open_graph.images = Some(images);
        self
    }

    pub fn twitter_images(mut self, images: Vec<String>) -> Self {
        self.twitter.images = Some(images);
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

/// Fully defaulted metadata for one page, ready for the head of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    pub canonical_url: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: Twitter,
    pub robots: Robots,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub verification: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    pub languages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: OpenGraphType,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Twitter {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: String,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Robots {
    fn new(index: bool, follow: bool) -> Self {
        Self {
            index,
            follow,
            google_bot: GoogleBot {
                index,
                follow,
                max_video_preview: -1,
                max_image_preview: "large".to_owned(),
                max_snippet: -1,
            },
        }
    }

    /// Value for `<meta name="robots">`.
    pub fn content(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }
}

/// Join a site-relative path onto the base URL.
///
/// Exactly one `/` separates the two, the leading slash on `path` is
/// optional, repeated and trailing slashes are dropped, and the root path
/// maps to the bare base URL.
pub fn canonical_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        base.to_owned()
    } else {
        format!("{}/{}", base, segments.join("/"))
    }
}

/// Resolve a page's SEO intent against the site configuration.
pub fn build_metadata(config: &SiteConfig, intent: &SeoIntent) -> Result<ResolvedMetadata, SeoError> {
    validate_intent(intent)?;

    let url = canonical_url(&config.base_url, &intent.path);
    let parsed =
        url::Url::parse(&url).map_err(|e| SeoError::invalid_intent(&intent.path, e.to_string()))?;
    if parsed.as_str().trim_end_matches('/') != url {
        return Err(SeoError::invalid_intent(
            &intent.path,
            format!("path normalizes to {}", parsed.as_str()),
        ));
    }

    let languages = intent.hreflang.clone().unwrap_or_else(|| {
        config
            .language_tags
            .iter()
            .map(|tag| (tag.clone(), url.clone()))
            .collect()
    });

    let keywords = if intent.keywords.is_empty() {
        None
    } else {
        Some(intent.keywords.clone())
    };

    let og = &intent.open_graph;
    let images = match &og.images {
        Some(images) => images
            .iter()
            .map(|img| Image {
                url: absolutize(config, &img.url),
                ..img.clone()
            })
            .collect(),
        None => vec![Image::new(config.share_image_url())
            .sized(config.share_image.width, config.share_image.height)
            .alt(config.share_image.alt.clone())],
    };

    let tw = &intent.twitter;
    let twitter_images = match &tw.images {
        Some(images) => images.iter().map(|u| absolutize(config, u)).collect(),
        None => vec![config.share_image_url()],
    };

    debug!("Resolved metadata for {} -> {}", intent.path, url);

    Ok(ResolvedMetadata {
        canonical_url: url.clone(),
        title: branded_title(config, &intent.title),
        description: intent.description.clone(),
        keywords,
        alternates: Alternates {
            canonical: url.clone(),
            languages,
        },
        open_graph: OpenGraph {
            og_type: og.og_type.unwrap_or_default(),
            url,
            title: og.title.clone().unwrap_or_else(|| intent.title.clone()),
            description: og
                .description
                .clone()
                .unwrap_or_else(|| intent.description.clone()),
            site_name: config.site_name.clone(),
            locale: og.locale.clone().unwrap_or_else(|| config.locale.clone()),
            images,
        },
        twitter: Twitter {
            card: tw.card.unwrap_or_default(),
            title: tw.title.clone().unwrap_or_else(|| intent.title.clone()),
            description: tw
                .description
                .clone()
                .unwrap_or_else(|| intent.description.clone()),
            images: twitter_images,
        },
        robots: Robots::new(!intent.noindex, !intent.nofollow),
        verification: config.verification.clone(),
    })
}

fn validate_intent(intent: &SeoIntent) -> Result<(), SeoError> {
    let path = intent.path.as_str();
    if intent.title.trim().is_empty() {
        return Err(SeoError::invalid_intent(path, "title cannot be empty"));
    }
    if intent.description.trim().is_empty() {
        return Err(SeoError::invalid_intent(path, "description cannot be empty"));
    }
    if !path.starts_with('/') {
        return Err(SeoError::invalid_intent(path, "path must start with '/'"));
    }
    if path.contains("//") {
        return Err(SeoError::invalid_intent(path, "path cannot contain '//'"));
    }
    path.split('/').try_for_each(|segment| validate_segment(path, segment))
}

/// One path segment: RFC 3986 `pchar`s and well-formed `%XX` escapes, no
/// dot segments.
fn validate_segment(path: &str, segment: &str) -> Result<(), SeoError> {
    if matches!(segment, "." | "..") {
        return Err(SeoError::invalid_intent(path, "path cannot contain dot segments"));
    }
    let bytes = segment.as_bytes();
    for (i, c) in segment.char_indices() {
        if c == '%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(SeoError::invalid_intent(path, "malformed percent escape"));
            }
        } else if !is_pchar(c) {
            return Err(SeoError::invalid_intent(
                path,
                format!("path cannot contain {c:?}"),
            ));
        }
    }
    Ok(())
}

fn is_pchar(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@".contains(c)
}

/// Apply the title template unless the title already carries the brand.
fn branded_title(config: &SiteConfig, title: &str) -> String {
    if title.contains(&config.site_name) {
        title.to_owned()
    } else {
        config
            .title_template
            .replace("{site_name}", &config.site_name)
            .replace("{title}", title)
    }
}

fn absolutize(config: &SiteConfig, url: &str) -> String {
    if url.starts_with('/') {
        config.url(url)
    } else {
        url.to_owned()
    }
}
