/// Errors raised while building page metadata or structured data.
#[derive(Debug, thiserror::Error)]
pub enum SeoError {
    /// A page supplied a malformed SEO intent.
    #[error("invalid SEO intent for {path:?}: {reason}")]
    InvalidSeoIntent {
        /// Path as given by the page.
        path: String,
        reason: String,
    },
    /// A schema object could not be represented as JSON.
    #[error("value cannot be serialized as JSON-LD: {0}")]
    UnserializableValue(#[from] serde_json::Error),
}

impl SeoError {
    pub(crate) fn invalid_intent(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSeoIntent {
            path: path.to_owned(),
            reason: reason.into(),
        }
    }
}
