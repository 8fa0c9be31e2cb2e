use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use super::meta::ResolvedMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Individual SEO check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub code: String,
    pub severity: Severity,
    pub message: String,
    pub points_lost: i32,
}

/// Audit result for one page's resolved metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAudit {
    pub score: i32, // 0-100
    pub grade: String, // "good", "needs_work", "poor"
    pub issues: Vec<SeoIssue>,
}

impl SeoAudit {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

struct Findings {
    issues: Vec<SeoIssue>,
    deductions: i32,
}

impl Findings {
    fn push(&mut self, code: &str, severity: Severity, message: String, points_lost: i32) {
        self.issues.push(SeoIssue {
            code: code.to_owned(),
            severity,
            message,
            points_lost,
        });
        self.deductions += points_lost;
    }
}

/// Score resolved metadata.
/// Starts at 100 and deducts points for each issue found.
pub fn audit_metadata(meta: &ResolvedMetadata) -> SeoAudit {
    let mut found = Findings {
        issues: Vec::new(),
        deductions: 0,
    };

    // ── Title ──
    let title_len = meta.title.chars().count();
    if meta.title.trim().is_empty() {
        found.push("title_missing", Severity::Error, "Title is missing".into(), 15);
    } else if title_len < 30 {
        found.push(
            "title_short",
            Severity::Warning,
            format!("Title is too short ({} chars, aim for 50-60)", title_len),
            5,
        );
    } else if title_len > 100 {
        found.push(
            "title_long",
            Severity::Warning,
            format!(
                "Title is too long ({} chars, may be truncated in search results)",
                title_len
            ),
            3,
        );
    }

    // ── Description ──
    let desc_len = meta.description.chars().count();
    if meta.description.trim().is_empty() {
        found.push(
            "meta_desc_missing",
            Severity::Error,
            "Meta description is missing".into(),
            15,
        );
    } else if desc_len < 70 {
        found.push(
            "meta_desc_short",
            Severity::Warning,
            format!(
                "Meta description is too short ({} chars, aim for 120-160)",
                desc_len
            ),
            5,
        );
    } else if desc_len > 250 {
        found.push(
            "meta_desc_long",
            Severity::Warning,
            format!("Meta description is too long ({} chars, may be truncated)", desc_len),
            3,
        );
    }

    // ── Keywords ──
    match &meta.keywords {
        None => found.push(
            "keywords_missing",
            Severity::Info,
            "No keywords declared".into(),
            2,
        ),
        Some(keywords) if keywords.iter().any(|k| k.trim().is_empty()) => found.push(
            "keyword_blank",
            Severity::Warning,
            "A keyword is blank".into(),
            3,
        ),
        Some(_) => {}
    }

    // ── Canonical / Open Graph consistency ──
    if meta.open_graph.url != meta.canonical_url {
        found.push(
            "og_url_mismatch",
            Severity::Error,
            format!(
                "og:url {} differs from canonical {}",
                meta.open_graph.url, meta.canonical_url
            ),
            20,
        );
    }
    if meta.canonical_url.ends_with('/') {
        found.push(
            "canonical_trailing_slash",
            Severity::Warning,
            "Canonical URL ends with a slash".into(),
            3,
        );
    }

    // ── Share image ──
    if meta.open_graph.images.is_empty() {
        found.push(
            "og_image_missing",
            Severity::Warning,
            "No Open Graph image".into(),
            10,
        );
    } else if meta.open_graph.images.iter().any(|i| i.alt.is_none()) {
        found.push(
            "og_image_alt_missing",
            Severity::Info,
            "Open Graph image has no alt text".into(),
            2,
        );
    }

    // ── Indexing ──
    if !meta.robots.index {
        found.push(
            "noindex",
            Severity::Info,
            "Page is excluded from search results".into(),
            0,
        );
    }

    let score = (100 - found.deductions).max(0);
    let grade = if score >= 80 {
        "good"
    } else if score >= 50 {
        "needs_work"
    } else {
        "poor"
    };

    for issue in found.issues.iter().filter(|i| i.severity != Severity::Info) {
        warn!("{}: {} ({})", meta.canonical_url, issue.message, issue.code);
    }

    SeoAudit {
        score,
        grade: grade.to_owned(),
        issues: found.issues,
    }
}

/// Cross-page checks: every canonical URL and every title must be unique.
pub fn audit_catalog(pages: &[ResolvedMetadata]) -> Vec<SeoIssue> {
    let mut issues = Vec::new();
    let mut canonicals: HashMap<&str, usize> = HashMap::new();
    let mut titles: HashMap<&str, usize> = HashMap::new();

    for meta in pages {
        *canonicals.entry(meta.canonical_url.as_str()).or_default() += 1;
        *titles.entry(meta.title.as_str()).or_default() += 1;
    }

    let mut dup_canonicals: Vec<_> = canonicals.into_iter().filter(|(_, n)| *n > 1).collect();
    dup_canonicals.sort_unstable();
    for (url, count) in dup_canonicals {
        issues.push(SeoIssue {
            code: "duplicate_canonical".into(),
            severity: Severity::Error,
            message: format!("{} pages share canonical URL {}", count, url),
            points_lost: 20,
        });
    }

    let mut dup_titles: Vec<_> = titles.into_iter().filter(|(_, n)| *n > 1).collect();
    dup_titles.sort_unstable();
    for (title, count) in dup_titles {
        issues.push(SeoIssue {
            code: "duplicate_title".into(),
            severity: Severity::Warning,
            message: format!("{} pages share title {:?}", count, title),
            points_lost: 5,
        });
    }

    for issue in &issues {
        warn!("{} ({})", issue.message, issue.code);
    }
    issues
}
