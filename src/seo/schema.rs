//! schema.org entity builders.
//!
//! Every builder returns a plain `serde_json::Value` stamped with the
//! schema.org context. Cross-entity links (`publisher`, `worksFor`,
//! `provider`, ...) are `{"@id": ...}` references taken from [`SiteConfig`],
//! never spelled out by hand, so one base URL change reaches every page.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A suburb or district served by a location page.
#[derive(Debug, Clone, Copy)]
pub struct LocalArea<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub street_address: Option<&'a str>,
    pub geo: GeoPoint,
    /// Radius of the service circle around `geo`.
    pub radius_km: Option<u32>,
}

/// schema.org type of a service entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// A sellable `Service` with an `Offer`.
    Service,
    /// An industry-facing `ProfessionalService`, no offer attached.
    ProfessionalService,
}

impl ServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::ProfessionalService => "ProfessionalService",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AreaServed<'a> {
    City(&'a str),
    Places(&'a [&'a str]),
}

impl AreaServed<'_> {
    fn to_value(self) -> Value {
        match self {
            Self::City(name) => json!({ "@type": "City", "name": name }),
            Self::Places(names) => Value::Array(
                names
                    .iter()
                    .map(|name| json!({ "@type": "Place", "name": name }))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceSpec<'a> {
    pub kind: ServiceKind,
    pub path: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub service_type: &'a str,
    pub area_served: AreaServed<'a>,
    pub audience: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct Crumb<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

#[derive(Debug, Clone)]
pub struct ArticleSpec<'a> {
    pub path: &'a str,
    pub headline: &'a str,
    pub description: &'a str,
    pub image_path: Option<&'a str>,
    pub published: NaiveDate,
    pub modified: Option<NaiveDate>,
    pub section: Option<&'a str>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Rating {
    pub value: f64,
    pub best: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PriceSpec<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub currency: &'a str,
    pub min_price: u64,
    pub max_price: u64,
    pub vat_included: bool,
    pub region: &'a str,
    /// Wikidata (or similar) URL identifying `region`.
    pub region_same_as: Option<&'a str>,
}

/// `{"@id": id}` link to an entity declared elsewhere.
pub fn entity_ref(id: &str) -> Value {
    json!({ "@id": id })
}

/// Fragment identifier for an entity declared on the page at `path`.
fn page_entity_id(config: &SiteConfig, path: &str, fragment: &str) -> String {
    format!("{}#{}", config.url(path), fragment)
}

fn postal_address(config: &SiteConfig, locality: &str, street: Option<&str>) -> Value {
    let mut address = json!({
        "@type": "PostalAddress",
        "addressLocality": locality,
        "addressRegion": config.address.region,
        "addressCountry": config.address.country,
    });
    if let (Some(street), Some(obj)) = (street, address.as_object_mut()) {
        obj.insert("streetAddress".to_owned(), json!(street));
    }
    address
}

fn geo_coordinates(geo: GeoPoint) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": geo.latitude,
        "longitude": geo.longitude,
    })
}

fn iso_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn organization(config: &SiteConfig) -> Value {
    let languages: Vec<&String> = config.language_tags.iter().take(1).collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "@id": config.org_id(),
        "name": config.site_name,
        "alternateName": config.alternate_name,
        "url": config.base_url,
        "logo": config.url(&config.logo_path),
        "description": config.description,
        "founder": {
            "@type": "Person",
            "@id": config.person_id(),
            "name": config.author.name,
        },
        "address": postal_address(config, &config.address.locality, None),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": config.contact.telephone,
            "contactType": config.contact.contact_type,
            "email": config.contact.email,
            "areaServed": config.contact.area_served,
            "availableLanguage": languages,
        },
        "sameAs": config.same_as,
    })
}

/// The site author (E-E-A-T anchor for articles).
pub fn person(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "@id": config.person_id(),
        "name": config.author.name,
        "jobTitle": config.author.job_title,
        "url": config.author_url(),
        "image": config.url(&config.author.image_path),
        "sameAs": config.author.same_as,
        "worksFor": entity_ref(&config.org_id()),
        "knowsAbout": config.author.knows_about,
    })
}

pub fn website(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "@id": config.website_id(),
        "url": config.base_url,
        "name": config.site_name,
        "description": config.description,
        "publisher": entity_ref(&config.org_id()),
        "inLanguage": config.language_tags.first(),
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}?q={{search_term_string}}", config.url("/search")),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

/// Site-wide LocalBusiness for the head office, serving every listed city.
pub fn headquarters(config: &SiteConfig, geo: GeoPoint, cities: &[&str]) -> Value {
    let area_served: Vec<Value> = cities
        .iter()
        .map(|city| json!({ "@type": "City", "name": city }))
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "@id": config.local_business_id(),
        "name": config.site_name,
        "image": config.url(&config.logo_path),
        "description": config.description,
        "address": postal_address(config, &config.address.locality, None),
        "geo": geo_coordinates(geo),
        "url": config.base_url,
        "telephone": config.contact.telephone,
        "email": config.contact.email,
        "priceRange": config.price_range,
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "opens": "09:00",
            "closes": "17:00",
        },
        "parentOrganization": entity_ref(&config.org_id()),
        "areaServed": area_served,
    })
}

/// LocalBusiness for a single suburb landing page.
pub fn local_business(config: &SiteConfig, area: &LocalArea<'_>) -> Value {
    let mut entity = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "@id": page_entity_id(config, area.path, "localbusiness"),
        "name": format!("{} - Web Design {}", config.site_name, area.name),
        "image": config.url(&config.logo_path),
        "description": area.description,
        "address": postal_address(config, area.name, area.street_address),
        "geo": geo_coordinates(area.geo),
        "url": config.url(area.path),
        "telephone": config.contact.telephone,
        "email": config.contact.email,
        "priceRange": config.price_range,
        "parentOrganization": entity_ref(&config.org_id()),
        "areaServed": { "@type": "City", "name": area.name },
    });
    if let (Some(radius), Some(obj)) = (area.radius_km, entity.as_object_mut()) {
        obj.insert(
            "serviceArea".to_owned(),
            json!({
                "@type": "GeoCircle",
                "geoMidpoint": geo_coordinates(area.geo),
                "geoRadius": {
                    "@type": "Distance",
                    "value": radius.to_string(),
                    "unitCode": "KM",
                },
            }),
        );
    }
    entity
}

/// `Service` or `ProfessionalService` provided by the organization.
pub fn service(config: &SiteConfig, spec: &ServiceSpec<'_>) -> Value {
    let mut entity = Map::new();
    entity.insert("@context".to_owned(), json!(SCHEMA_CONTEXT));
    entity.insert("@type".to_owned(), json!(spec.kind.as_str()));
    entity.insert(
        "@id".to_owned(),
        json!(page_entity_id(config, spec.path, "service")),
    );
    entity.insert("name".to_owned(), json!(spec.name));
    entity.insert("description".to_owned(), json!(spec.description));
    entity.insert("provider".to_owned(), entity_ref(&config.org_id()));
    entity.insert("areaServed".to_owned(), spec.area_served.to_value());
    entity.insert("serviceType".to_owned(), json!(spec.service_type));
    if spec.kind == ServiceKind::Service {
        entity.insert(
            "offers".to_owned(),
            json!({
                "@type": "Offer",
                "priceCurrency": "ZAR",
                "availability": "https://schema.org/InStock",
                "url": config.url(spec.path),
            }),
        );
    }
    if let Some(audience) = spec.audience {
        entity.insert(
            "audience".to_owned(),
            json!({ "@type": "Audience", "audienceType": audience }),
        );
    }
    Value::Object(entity)
}

pub fn faq_page(config: &SiteConfig, path: &str, faqs: &[Faq<'_>]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "@id": page_entity_id(config, path, "faq"),
        "mainEntity": questions,
    })
}

/// Breadcrumb trail, positions numbered from 1.
pub fn breadcrumb_list(config: &SiteConfig, crumbs: &[Crumb<'_>]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": config.url(crumb.path),
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn article(config: &SiteConfig, spec: &ArticleSpec<'_>) -> Value {
    let url = config.url(spec.path);
    let published = iso_timestamp(spec.published);
    let modified = spec.modified.map_or_else(|| published.clone(), iso_timestamp);

    let mut entity = Map::new();
    entity.insert("@context".to_owned(), json!(SCHEMA_CONTEXT));
    entity.insert("@type".to_owned(), json!("Article"));
    entity.insert("@id".to_owned(), json!(format!("{url}#article")));
    entity.insert("headline".to_owned(), json!(spec.headline));
    entity.insert("description".to_owned(), json!(spec.description));
    if let Some(image) = spec.image_path {
        entity.insert("image".to_owned(), json!(config.url(image)));
    }
    entity.insert("datePublished".to_owned(), json!(published));
    entity.insert("dateModified".to_owned(), json!(modified));
    entity.insert(
        "author".to_owned(),
        json!({
            "@type": "Person",
            "@id": config.person_id(),
            "name": config.author.name,
        }),
    );
    entity.insert("publisher".to_owned(), entity_ref(&config.org_id()));
    entity.insert(
        "mainEntityOfPage".to_owned(),
        json!({ "@type": "WebPage", "@id": url }),
    );
    if let Some(section) = spec.section {
        entity.insert("articleSection".to_owned(), json!(section));
    }
    if !spec.keywords.is_empty() {
        entity.insert("keywords".to_owned(), json!(spec.keywords));
    }
    Value::Object(entity)
}

/// Review summary for the organization.
pub fn aggregate_rating(config: &SiteConfig, rating: &Rating) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "AggregateRating",
        "itemReviewed": {
            "@type": "Organization",
            "@id": config.org_id(),
            "name": config.site_name,
        },
        "ratingValue": rating.value,
        "bestRating": rating.best,
        "worstRating": 1,
        "ratingCount": rating.count,
    })
}

pub fn price_specification(config: &SiteConfig, spec: &PriceSpec<'_>) -> Value {
    let mut region = json!({ "@type": "Country", "name": spec.region });
    if let (Some(same_as), Some(obj)) = (spec.region_same_as, region.as_object_mut()) {
        obj.insert("sameAs".to_owned(), json!(same_as));
    }
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "PriceSpecification",
        "@id": page_entity_id(config, spec.path, "priceSpecification"),
        "name": spec.name,
        "description": spec.description,
        "priceCurrency": spec.currency,
        "minPrice": spec.min_price,
        "maxPrice": spec.max_price,
        "valueAddedTaxIncluded": spec.vat_included,
        "eligibleRegion": region,
        "provider": entity_ref(&config.org_id()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandton() -> LocalArea<'static> {
        LocalArea {
            path: "/locations/sandton",
            name: "Sandton",
            description: "Professional web design and local SEO services for Sandton businesses",
            street_address: Some("Sandton Central"),
            geo: GeoPoint {
                latitude: -26.1076,
                longitude: 28.0567,
            },
            radius_km: Some(10),
        }
    }

    #[test]
    fn person_works_for_organization() {
        let config = SiteConfig::default();
        let org = organization(&config);
        let author = person(&config);
        assert_eq!(author["worksFor"]["@id"], org["@id"]);
        assert_eq!(org["founder"]["@id"], author["@id"]);
        assert_eq!(author["@context"], SCHEMA_CONTEXT);
    }

    #[test]
    fn local_business_has_page_scoped_id() {
        let config = SiteConfig::default();
        let entity = local_business(&config, &sandton());
        assert_eq!(
            entity["@id"],
            "https://endpointmedia.co.za/locations/sandton#localbusiness"
        );
        assert_eq!(entity["address"]["streetAddress"], "Sandton Central");
        assert_eq!(entity["address"]["addressRegion"], "Gauteng");
        assert_eq!(entity["geo"]["latitude"], -26.1076);
        assert_eq!(entity["serviceArea"]["geoRadius"]["value"], "10");
        assert_eq!(entity["parentOrganization"]["@id"], config.org_id());
    }

    #[test]
    fn local_business_without_radius_has_no_service_area() {
        let config = SiteConfig::default();
        let mut area = sandton();
        area.radius_km = None;
        area.street_address = None;
        let entity = local_business(&config, &area);
        assert!(entity.get("serviceArea").is_none());
        assert!(entity["address"].get("streetAddress").is_none());
    }

    #[test]
    fn breadcrumbs_are_numbered_from_one() {
        let config = SiteConfig::default();
        let list = breadcrumb_list(
            &config,
            &[
                Crumb { name: "Home", path: "/" },
                Crumb { name: "Locations", path: "/locations" },
                Crumb { name: "Sandton", path: "/locations/sandton" },
            ],
        );
        let items = list["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://endpointmedia.co.za");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(items[2]["item"], "https://endpointmedia.co.za/locations/sandton");
    }

    #[test]
    fn faq_page_lists_questions() {
        let config = SiteConfig::default();
        let faqs = [
            Faq { question: "How long?", answer: "30-45 days." },
            Faq { question: "Do you build pages?", answer: "Yes." },
        ];
        let page = faq_page(&config, "/services/local-seo", &faqs);
        assert_eq!(page["@type"], "FAQPage");
        assert_eq!(page["@id"], "https://endpointmedia.co.za/services/local-seo#faq");
        assert_eq!(page["mainEntity"][1]["acceptedAnswer"]["text"], "Yes.");
    }

    #[test]
    fn article_links_author_and_publisher() {
        let config = SiteConfig::default();
        let spec = ArticleSpec {
            path: "/blog/the-schema-vacuum-technical-seo-advantage",
            headline: "The Schema Vacuum",
            description: "Schema markup explained.",
            image_path: Some("/images/blog/the-schema-vacuum-technical-seo-advantage.jpg"),
            published: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            modified: None,
            section: Some("Technical SEO"),
            keywords: vec!["technical seo".to_owned()],
        };
        let entity = article(&config, &spec);
        assert_eq!(entity["datePublished"], "2025-10-15T00:00:00.000Z");
        assert_eq!(entity["dateModified"], entity["datePublished"]);
        assert_eq!(entity["author"]["@id"], config.person_id());
        assert_eq!(entity["publisher"]["@id"], config.org_id());
        assert_eq!(
            entity["mainEntityOfPage"]["@id"],
            "https://endpointmedia.co.za/blog/the-schema-vacuum-technical-seo-advantage"
        );
        assert_eq!(entity["articleSection"], "Technical SEO");
    }

    #[test]
    fn article_omits_absent_optionals() {
        let config = SiteConfig::default();
        let spec = ArticleSpec {
            path: "/blog/x",
            headline: "X",
            description: "Y",
            image_path: None,
            published: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            modified: NaiveDate::from_ymd_opt(2025, 2, 3),
            section: None,
            keywords: Vec::new(),
        };
        let entity = article(&config, &spec);
        assert!(entity.get("image").is_none());
        assert!(entity.get("articleSection").is_none());
        assert!(entity.get("keywords").is_none());
        assert_eq!(entity["dateModified"], "2025-02-03T00:00:00.000Z");
    }

    #[test]
    fn price_specification_carries_range() {
        let config = SiteConfig::default();
        let spec = PriceSpec {
            path: "/services/website-design-prices",
            name: "Custom Web Architecture Development",
            description: "Server-side rendered development.",
            currency: "ZAR",
            min_price: 15_000,
            max_price: 150_000,
            vat_included: true,
            region: "South Africa",
            region_same_as: Some("https://www.wikidata.org/wiki/Q258"),
        };
        let entity = price_specification(&config, &spec);
        assert_eq!(entity["minPrice"], 15_000);
        assert_eq!(entity["maxPrice"], 150_000);
        assert_eq!(entity["eligibleRegion"]["sameAs"], "https://www.wikidata.org/wiki/Q258");
        assert_eq!(entity["provider"]["@id"], config.org_id());
    }

    #[test]
    fn aggregate_rating_reviews_the_organization() {
        let config = SiteConfig::default();
        let entity = aggregate_rating(
            &config,
            &Rating {
                value: 4.9,
                best: 5.0,
                count: 37,
            },
        );
        assert_eq!(entity["itemReviewed"]["@id"], config.org_id());
        assert_eq!(entity["ratingValue"], 4.9);
        assert_eq!(entity["ratingCount"], 37);
    }

    #[test]
    fn service_links_provider_and_audience() {
        let config = SiteConfig::default();
        let spec = ServiceSpec {
            kind: ServiceKind::Service,
            path: "/services/local-seo",
            name: "Local SEO",
            description: "Hyper-local SEO sprints.",
            service_type: "Local SEO",
            area_served: AreaServed::City("Johannesburg"),
            audience: Some("Trades"),
        };
        let entity = service(&config, &spec);
        assert_eq!(entity["@type"], "Service");
        assert_eq!(entity["provider"]["@id"], config.org_id());
        assert_eq!(entity["areaServed"]["@type"], "City");
        assert_eq!(entity["audience"]["audienceType"], "Trades");
        assert_eq!(entity["offers"]["url"], "https://endpointmedia.co.za/services/local-seo");
    }

    #[test]
    fn professional_service_lists_places_without_offer() {
        let config = SiteConfig::default();
        let spec = ServiceSpec {
            kind: ServiceKind::ProfessionalService,
            path: "/industries/manufacturing-logistics",
            name: "Alrode Industrial Web Development",
            description: "Digital services for heavy industry.",
            service_type: "B2B Digital Transformation",
            area_served: AreaServed::Places(&["Alrode", "Wadeville"]),
            audience: None,
        };
        let entity = service(&config, &spec);
        assert_eq!(entity["@type"], "ProfessionalService");
        assert_eq!(
            entity["@id"],
            "https://endpointmedia.co.za/industries/manufacturing-logistics#service"
        );
        assert_eq!(entity["areaServed"][1]["@type"], "Place");
        assert_eq!(entity["areaServed"][1]["name"], "Wadeville");
        assert!(entity.get("offers").is_none());
        assert!(entity.get("audience").is_none());
    }

    #[test]
    fn website_declares_search_action() {
        let config = SiteConfig::default();
        let site = website(&config);
        let action = &site["potentialAction"];
        assert_eq!(action["@type"], "SearchAction");
        assert_eq!(
            action["target"]["urlTemplate"],
            "https://endpointmedia.co.za/search?q={search_term_string}"
        );
        assert_eq!(action["query-input"], "required name=search_term_string");
    }
}
