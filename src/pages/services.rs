use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::seo::meta::{OpenGraphType, SeoIntent};
use crate::seo::schema::{
    self, AreaServed, ArticleSpec, Crumb, Faq, PriceSpec, Rating, ServiceKind, ServiceSpec,
};

use super::{date, Page};

const PRICES_PUBLISHED: NaiveDate = date(2025, 11, 1);

/// `/services` overview. The original page declares no keywords.
pub fn index(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Web Design & SEO Services Johannesburg | Endpoint Media",
        "Endpoint Media offers expert web design, local SEO, Google Ads, and website maintenance services tailored for Johannesburg service businesses seeking measurable growth.",
        "/services",
    );

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Services", path: "/services" },
        ],
    );
    Page::new(intent, vec![breadcrumbs])
}

pub fn pages(config: &SiteConfig) -> Vec<Page> {
    vec![
        local_seo(config),
        website_redesign(config),
        review_management(config),
        website_design_prices(config),
    ]
}

fn breadcrumbs(config: &SiteConfig, name: &str, path: &str) -> serde_json::Value {
    schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Services", path: "/services" },
            Crumb { name, path },
        ],
    )
}

const LOCAL_SEO_FAQS: &[Faq<'static>] = &[
    Faq {
        question: "How long does it take to see local SEO traction?",
        answer: "Quick wins show up in 30-45 days once Google Business Profile, citations, and service pages are aligned. Full suburb dominance typically takes 3-4 months depending on competition and review cadence.",
    },
    Faq {
        question: "Will you manage Google Business Profile posts and messaging?",
        answer: "Yes. We schedule weekly post assets, reply to reviews, combat spam edits, and wire GBP messaging directly into your CRM or WhatsApp workflows so every lead is captured.",
    },
    Faq {
        question: "Do you build location pages as part of this service?",
        answer: "Absolutely. We ship suburb-specific landing pages with unique proof, FAQs, and structured data so you capture “service + suburb” searches across Johannesburg.",
    },
    Faq {
        question: "Can you migrate my existing citations without breaking NAP consistency?",
        answer: "We audit every listing, clean duplicates, and migrate to a master NAP so phones, addresses, and categories match everywhere Google crawls.",
    },
];

pub fn local_seo(config: &SiteConfig) -> Page {
    const PATH: &str = "/services/local-seo";
    let intent = SeoIntent::new(
        "Local SEO & Google Business Profile Services Johannesburg | Endpoint Media",
        "Own the map pack in Sandton, Randburg, Midrand, and beyond. Endpoint Media engineers Local SEO sprints: GBP optimisation, suburb landing pages, review automation, and conversion tracking.",
        PATH,
    )
    .keywords([
        "local seo johannesburg",
        "google business profile management",
        "map pack optimization joburg",
        "local seo agency sandton",
        "local citation cleanup south africa",
    ]);

    let service = schema::service(
        config,
        &ServiceSpec {
            kind: ServiceKind::Service,
            path: PATH,
            name: "Local SEO & Google Business Profile Domination",
            description: "Hyper-local SEO sprints for Johannesburg service businesses: GBP optimisation, suburb landing pages, review acceleration, and conversion tracking.",
            service_type: "Local SEO",
            area_served: AreaServed::City("Johannesburg"),
            audience: Some("Trades, professional services, medical practices, retail operators"),
        },
    );

    Page::new(
        intent,
        vec![
            service,
            schema::faq_page(config, PATH, LOCAL_SEO_FAQS),
            breadcrumbs(config, "Local SEO", PATH),
        ],
    )
}

pub fn website_redesign(config: &SiteConfig) -> Page {
    const PATH: &str = "/services/website-redesign";
    let intent = SeoIntent::new(
        "Website Redesign Services Johannesburg | Outdated Website Transformation | Endpoint Media",
        "Stop losing clients to competitors with outdated websites. Endpoint Media transforms underperforming, mobile-incompatible websites into high-converting, modern assets that generate measurable ROI.",
        PATH,
    )
    .keywords([
        "website redesign services johannesburg",
        "outdated website redesign",
        "mobile-incompatible website fix",
        "website transformation johannesburg",
    ]);

    let service = schema::service(
        config,
        &ServiceSpec {
            kind: ServiceKind::Service,
            path: PATH,
            name: "Website Redesign",
            description: "Rebuilds of underperforming, mobile-incompatible websites into fast, high-converting lead generation assets.",
            service_type: "Website Redesign",
            area_served: AreaServed::City("Johannesburg"),
            audience: None,
        },
    );

    Page::new(intent, vec![service, breadcrumbs(config, "Website Redesign", PATH)])
}

pub fn review_management(config: &SiteConfig) -> Page {
    const PATH: &str = "/services/review-management";
    let intent = SeoIntent::new(
        "Review Management Johannesburg | Google Reviews & Reputation Service | Endpoint Media",
        "Turn satisfied customers into 5-star reviews. Endpoint Media offers automated review generation, professional response management, and reputation repair for Johannesburg businesses.",
        PATH,
    )
    .keywords([
        "review management johannesburg",
        "google reviews service",
        "reputation management south africa",
        "review generation automation",
    ]);

    let service = schema::service(
        config,
        &ServiceSpec {
            kind: ServiceKind::Service,
            path: PATH,
            name: "Review Management & Reputation Repair",
            description: "Automated review generation, response management, and AggregateRating rich snippets for Johannesburg businesses.",
            service_type: "Reputation Management",
            area_served: AreaServed::City("Johannesburg"),
            audience: None,
        },
    );
    let rating = schema::aggregate_rating(
        config,
        &Rating {
            value: 5.0,
            best: 5.0,
            count: 24,
        },
    );

    Page::new(
        intent,
        vec![service, rating, breadcrumbs(config, "Review Management", PATH)],
    )
}

pub fn website_design_prices(config: &SiteConfig) -> Page {
    const PATH: &str = "/services/website-design-prices";
    let intent = SeoIntent::new(
        "Website Design Prices South Africa 2025 | Transparent Pricing & ROI Calculator | Endpoint Media",
        "Website design prices in South Africa: R15,000-R150,000. Don't compare page counts, calculate ROI. Transparent pricing, zero hidden costs.",
        PATH,
    )
    .keywords([
        "website design prices",
        "website design prices south africa",
        "website design cost johannesburg",
        "how much does a website cost",
    ])
    .og_type(OpenGraphType::Article);

    let price = schema::price_specification(
        config,
        &PriceSpec {
            path: PATH,
            name: "Custom Web Architecture Development",
            description: "Server-side rendered development with semantic SEO optimization and Knowledge Graph integration",
            currency: "ZAR",
            min_price: 15_000,
            max_price: 150_000,
            vat_included: true,
            region: "South Africa",
            region_same_as: Some("https://www.wikidata.org/wiki/Q258"),
        },
    );

    let article = schema::article(
        config,
        &ArticleSpec {
            path: PATH,
            headline: "Website Design Prices South Africa 2025: The True Cost of Digital Assets",
            description: "Understanding website design prices goes beyond page counts, with transparent pricing for enterprise digital assets.",
            image_path: None,
            published: PRICES_PUBLISHED,
            modified: None,
            section: Some("Pricing & ROI"),
            keywords: Vec::new(),
        },
    );

    Page::new(
        intent,
        vec![price, article, breadcrumbs(config, "Website Design Prices", PATH)],
    )
}
