use crate::config::SiteConfig;
use crate::seo::meta::{OpenGraphType, SeoIntent};
use crate::seo::schema::{self, Crumb, GeoPoint};

use super::Page;

const JOHANNESBURG: GeoPoint = GeoPoint {
    latitude: -26.2041,
    longitude: 28.0473,
};

const CITIES_SERVED: &[&str] = &[
    "Johannesburg",
    "Sandton",
    "Randburg",
    "Bryanston",
    "Rivonia",
    "Midrand",
    "Roodepoort",
];

pub fn home(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Web Design Johannesburg | Endpoint Media | Websites That Generate Revenue",
        "Stop buying online brochures. Endpoint Media builds high-performance, lead-generating websites for Johannesburg service businesses. We deliver ROI, not excuses. Get your free audit.",
        "/",
    )
    .keywords([
        "web design johannesburg",
        "local SEO johannesburg",
        "web developer johannesburg",
        "lead generation website",
        "small business website johannesburg",
        "website design prices johannesburg",
    ]);

    Page::new(
        intent,
        vec![
            schema::organization(config),
            schema::headquarters(config, JOHANNESBURG, CITIES_SERVED),
            schema::website(config),
            schema::person(config),
        ],
    )
}

pub fn author(config: &SiteConfig) -> Page {
    let path = format!("/about/author/{}", config.author.slug);
    let intent = SeoIntent::new(
        format!(
            "{} - Web Design Expert Johannesburg | {} Founder",
            config.author.name, config.site_name
        ),
        format!(
            "{} is the founder of {}, specializing in high-performance web design and local SEO for Johannesburg businesses. Expert in Next.js, technical SEO, and lead generation.",
            config.author.name, config.site_name
        ),
        path.clone(),
    )
    .keywords([
        "johannesburg web developer",
        "endpoint media founder",
        "web design expert johannesburg",
    ])
    .og_type(OpenGraphType::Profile);

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb {
                name: &config.author.name,
                path: &path,
            },
        ],
    );

    Page::new(intent, vec![schema::person(config), breadcrumbs])
}

pub fn pricing(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Website Design Pricing Johannesburg | Endpoint Media Packages",
        "Transparent website design and SEO package pricing for Johannesburg service businesses. Explore our Foundation, Growth Engine, and Market Leader options for clear ROI.",
        "/pricing",
    )
    .keywords([
        "website design pricing johannesburg",
        "web design packages south africa",
        "local seo pricing joburg",
        "small business website cost",
        "affordable web design johannesburg",
    ]);

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Pricing", path: "/pricing" },
        ],
    );

    Page::new(intent, vec![breadcrumbs])
}
