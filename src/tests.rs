#![cfg(test)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::pages::{self, Page};
use crate::seo::meta::{Image, OpenGraphType, TwitterCard};
use crate::seo::{
    audit_catalog, audit_metadata, build_metadata, canonical_url, schema, script_tag,
    secure_json_ld, SeoIntent,
};

const BASE: &str = "https://endpointmedia.co.za";

/// Fragments that stress the script-text escaping: closing tags in mixed
/// case, comment openers, line separators, multi-byte text.
const PIECES: &[&str] = &[
    "<", ">", "/", "</", "</script>", "</SCRIPT>", "</ScRiPt ", "<script>", "<!--", "-->",
    "!--", "script", "\u{2028}", "\u{2029}", "\\", "\"", "\\u003c", "'", "&", " ", "\n", "\t",
    "é", "日本", "🚀", "Sandton", "a", "z", "0", "9",
];

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| PIECES[rng.gen_range(0..PIECES.len())])
        .collect()
}

fn random_value(rng: &mut StdRng, depth: u32) -> Value {
    let kinds = if depth == 0 { 4 } else { 6 };
    match rng.gen_range(0..kinds) {
        0 => Value::Null,
        1 => Value::Bool(rng.gen_bool(0.5)),
        2 => json!(rng.gen_range(-1_000_000i64..1_000_000)),
        3 => Value::String(random_text(rng)),
        4 => {
            let len = rng.gen_range(0..4);
            Value::Array((0..len).map(|_| random_value(rng, depth - 1)).collect())
        }
        _ => {
            let len = rng.gen_range(0..4);
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(random_text(rng), random_value(rng, depth - 1));
            }
            Value::Object(map)
        }
    }
}

fn random_segment(rng: &mut StdRng) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
    let len = rng.gen_range(1..10);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn slashes(rng: &mut StdRng) -> String {
    "/".repeat(rng.gen_range(1..4))
}

/// Collect every string stored under an `@id` key.
fn collect_ids<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match (key.as_str(), v) {
                    ("@id", Value::String(id)) => out.push(id),
                    _ => collect_ids(v, out),
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_ids(v, out)),
        _ => {}
    }
}

fn catalog_ids(config: &SiteConfig) -> Vec<String> {
    let catalog = pages::catalog(config);
    let mut ids = Vec::new();
    for page in &catalog {
        for entity in &page.schemas {
            let mut found = Vec::new();
            collect_ids(entity, &mut found);
            ids.extend(found.into_iter().map(str::to_owned));
        }
    }
    ids
}

// ═══════════════════════════════════════════════════════════
// JSON-LD serializer
// ═══════════════════════════════════════════════════════════

#[test]
fn jsonld_round_trips_random_values() {
    let mut rng = seeded(0x5eed_0001);
    for _ in 0..2_000 {
        let value = random_value(&mut rng, 3);
        let payload = secure_json_ld(&value).unwrap();
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, value, "payload {payload}");
    }
}

#[test]
fn jsonld_never_emits_markup_significant_text() {
    let mut rng = seeded(0x5eed_0002);
    for _ in 0..2_000 {
        let name = format!("{}</script>{}", random_text(&mut rng), random_text(&mut rng));
        let value = json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": name,
            "nested": [{ "description": random_text(&mut rng) }],
        });
        let payload = secure_json_ld(&value).unwrap();
        let lower = payload.to_lowercase();
        assert!(!lower.contains("</script"), "payload {payload}");
        assert!(!payload.contains("<!--"));
        assert!(!payload.contains('<'));
        assert!(!payload.contains('\u{2028}'));
        assert!(!payload.contains('\u{2029}'));

        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["name"], name);
    }
}

#[test]
fn jsonld_script_injection_scenario() {
    let value = json!({
        "@type": "Organization",
        "name": "</script><script>alert(1)</script>",
    });
    let tag = script_tag(&value).unwrap();
    assert!(tag.starts_with(r#"<script type="application/ld+json">"#));
    // the only closing tag is the one we wrote
    assert_eq!(tag.matches("</script").count(), 1);
    assert!(tag.ends_with("</script>"));

    let payload = secure_json_ld(&value).unwrap();
    let parsed: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["name"], "</script><script>alert(1)</script>");
}

#[test]
fn jsonld_is_deterministic_for_catalog() {
    let config = SiteConfig::default();
    let first = pages::resolve_all(&config).unwrap();
    let second = pages::resolve_all(&config).unwrap();
    let a: Vec<_> = first.iter().map(|p| &p.json_ld).collect();
    let b: Vec<_> = second.iter().map(|p| &p.json_ld).collect();
    assert_eq!(a, b);
}

// ═══════════════════════════════════════════════════════════
// Metadata builder
// ═══════════════════════════════════════════════════════════

#[test]
fn canonical_url_normalizes_generated_paths() {
    let mut rng = seeded(0x5eed_0003);
    for _ in 0..1_000 {
        let segments: Vec<String> = (0..rng.gen_range(0..5))
            .map(|_| random_segment(&mut rng))
            .collect();

        let mut path = String::new();
        if rng.gen_bool(0.7) {
            path.push_str(&slashes(&mut rng));
        }
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push_str(&slashes(&mut rng));
            }
            path.push_str(segment);
        }
        if rng.gen_bool(0.3) {
            path.push_str(&slashes(&mut rng));
        }

        let expected = if segments.is_empty() {
            BASE.to_owned()
        } else {
            format!("{BASE}/{}", segments.join("/"))
        };
        let url = canonical_url(BASE, &path);
        assert_eq!(url, expected, "path {path:?}");
        assert!(!url["https://".len()..].contains("//"));
        assert!(!url.ends_with('/'));
    }
}

#[test]
fn build_metadata_canonical_matches_generated_paths() {
    let config = SiteConfig::default();
    let mut rng = seeded(0x5eed_0004);
    for _ in 0..500 {
        let segments: Vec<String> = (0..rng.gen_range(0..5))
            .map(|_| random_segment(&mut rng))
            .collect();
        let path = format!("/{}", segments.join("/"));
        let intent = SeoIntent::new("Generated page", "A generated page description.", path.clone());
        let meta = build_metadata(&config, &intent).unwrap();
        assert_eq!(meta.canonical_url, canonical_url(BASE, &path));
        assert_eq!(meta.alternates.canonical, meta.canonical_url);
    }
}

#[test]
fn og_url_always_follows_canonical() {
    let config = SiteConfig::default();
    let mut rng = seeded(0x5eed_0005);
    let og_types = [
        OpenGraphType::Website,
        OpenGraphType::Article,
        OpenGraphType::Profile,
        OpenGraphType::VideoOther,
    ];
    for _ in 0..500 {
        let path = format!("/{}/{}", random_segment(&mut rng), random_segment(&mut rng));
        let mut intent = SeoIntent::new(
            format!("Title {}", random_segment(&mut rng)),
            format!("Description {}", random_text(&mut rng)),
            path,
        )
        .og_type(og_types[rng.gen_range(0..og_types.len())]);
        if rng.gen_bool(0.5) {
            intent.open_graph.title = Some(random_text(&mut rng));
            intent.open_graph.images = Some(vec![Image::new(format!(
                "/images/{}.jpg",
                random_segment(&mut rng)
            ))]);
        }
        if rng.gen_bool(0.5) {
            intent.twitter.card = Some(TwitterCard::Summary);
        }
        let meta = build_metadata(&config, &intent).unwrap();
        assert_eq!(meta.open_graph.url, meta.canonical_url);
        assert!(meta
            .open_graph
            .images
            .iter()
            .all(|img| img.url.starts_with(BASE)));
    }
}

#[test]
fn sandton_scenario() {
    let intent = SeoIntent::new(
        "Web Design Sandton",
        "Professional web design and local SEO services for Sandton businesses.",
        "/locations/sandton",
    )
    .keywords(["web design sandton"]);
    let meta = build_metadata(&SiteConfig::default(), &intent).unwrap();
    assert_eq!(meta.canonical_url, "https://endpointmedia.co.za/locations/sandton");
    assert_eq!(meta.open_graph.url, "https://endpointmedia.co.za/locations/sandton");
}

#[test]
fn empty_keywords_are_omitted_on_every_page() {
    let config = SiteConfig::default();
    for page in pages::catalog(&config) {
        let declared = !page.intent.keywords.is_empty();
        let meta = build_metadata(&config, &page.intent).unwrap();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json.get("keywords").is_some(), declared, "{}", page.path());

        let mut bare = page.intent.clone();
        bare.keywords.clear();
        let meta = build_metadata(&config, &bare).unwrap();
        assert!(meta.keywords.is_none());
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("keywords").is_none(), "{}", page.path());
    }
}

// ═══════════════════════════════════════════════════════════
// Shared identifiers
// ═══════════════════════════════════════════════════════════

#[test]
fn org_id_serializes_identically_across_pages() {
    let config = SiteConfig::default();
    let home = pages::find(&config, "/").unwrap();
    let author_path = format!("/about/author/{}", config.author.slug);
    let author = pages::find(&config, &author_path).unwrap();

    let org = secure_json_ld(&schema::organization(&config)).unwrap();
    let person = author
        .resolve(&config)
        .unwrap()
        .json_ld
        .into_iter()
        .find(|p| p.contains("\"worksFor\""))
        .unwrap();

    let needle = format!("\"@id\":\"{}\"", config.org_id());
    assert!(org.contains(&needle));
    assert!(person.contains(&needle));
    assert!(home.resolve(&config).unwrap().json_ld[0].contains(&needle));
}

#[test]
fn catalog_references_use_configured_ids() {
    let config = SiteConfig::default();
    let ids = catalog_ids(&config);
    let orgs: Vec<_> = ids.iter().filter(|id| id.ends_with("#organization")).collect();
    let people: Vec<_> = ids.iter().filter(|id| id.ends_with("#person")).collect();
    assert!(orgs.len() > 10);
    assert!(people.len() > 5);
    assert!(orgs.iter().all(|id| **id == config.org_id()));
    assert!(people.iter().all(|id| **id == config.person_id()));
}

#[test]
fn staging_config_moves_every_url_and_id() {
    let staging = SiteConfig::default()
        .with_base_url("https://staging.example.com")
        .unwrap();
    let resolved = pages::resolve_all(&staging).unwrap();
    for page in &resolved {
        assert!(page.metadata.canonical_url.starts_with("https://staging.example.com"));
        for payload in &page.json_ld {
            assert!(!payload.contains(BASE), "{payload}");
        }
    }
    let ids = catalog_ids(&staging);
    assert!(ids
        .iter()
        .all(|id| id.starts_with("https://staging.example.com")));
}

// ═══════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════

#[test]
fn catalog_resolves_and_audits_clean() {
    let config = SiteConfig::default();
    let catalog = pages::catalog(&config);
    assert!(catalog.len() >= 20);

    let resolved = pages::resolve_all(&config).unwrap();
    assert_eq!(resolved.len(), catalog.len());
    for (page, res) in catalog.iter().zip(&resolved) {
        let audit = audit_metadata(&res.metadata);
        assert!(!audit.has_errors(), "{}: {:?}", page.path(), audit.issues);
        assert_eq!(res.json_ld.len(), page.schemas.len());
    }

    let metas: Vec<_> = resolved.into_iter().map(|r| r.metadata).collect();
    assert!(audit_catalog(&metas).is_empty());
}

#[test]
fn catalog_canonicals_are_unique() {
    let config = SiteConfig::default();
    let mut urls: Vec<String> = pages::resolve_all(&config)
        .unwrap()
        .into_iter()
        .map(|r| r.metadata.canonical_url)
        .collect();
    let total = urls.len();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), total);
}

#[test]
fn breadcrumbs_point_at_catalog_pages() {
    let config = SiteConfig::default();
    let canonicals: Vec<String> = pages::resolve_all(&config)
        .unwrap()
        .into_iter()
        .map(|r| r.metadata.canonical_url)
        .collect();
    let mut checked = 0;
    for page in pages::catalog(&config) {
        for entity in page.schemas.iter().filter(|e| e["@type"] == "BreadcrumbList") {
            for item in entity["itemListElement"].as_array().unwrap() {
                let target = item["item"].as_str().unwrap();
                assert!(
                    canonicals.iter().any(|c| c == target),
                    "{} links to {target}",
                    page.path()
                );
                checked += 1;
            }
        }
    }
    assert!(checked > 50);
}

#[test]
fn catalog_covers_every_section_index() {
    let config = SiteConfig::default();
    for path in ["/", "/services", "/industries", "/locations", "/blog", "/pricing"] {
        assert!(pages::find(&config, path).is_some(), "{path}");
    }
}

#[test]
fn every_schema_carries_context() {
    let config = SiteConfig::default();
    for page in pages::catalog(&config) {
        for entity in &page.schemas {
            assert_eq!(entity["@context"], schema::SCHEMA_CONTEXT, "{}", page.path());
        }
    }
}

#[test]
fn malformed_page_fails_resolution() {
    let config = SiteConfig::default();
    let page = Page::new(
        SeoIntent::new("Broken", "A page with a bad path.", "no-leading-slash"),
        Vec::new(),
    );
    assert!(page.resolve(&config).is_err());
}
