use crate::config::SiteConfig;
use crate::seo::meta::SeoIntent;
use crate::seo::schema::{self, Crumb, GeoPoint, LocalArea};

use super::Page;

/// A suburb landing page.
struct Location {
    slug: &'static str,
    name: &'static str,
    title: &'static str,
    description: &'static str,
    street_address: Option<&'static str>,
    geo: GeoPoint,
    radius_km: Option<u32>,
}

const fn geo(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint {
        latitude,
        longitude,
    }
}

const LOCATIONS: &[Location] = &[
    Location {
        slug: "sandton",
        name: "Sandton",
        title: "Web Design Sandton | Website Design Services Sandton | Endpoint Media",
        description: "Professional web design and local SEO services for Sandton businesses. Dominate Africa's richest square mile with a high-performance, lead-generating website. Free audit available.",
        street_address: Some("Sandton Central"),
        geo: geo(-26.1076, 28.0567),
        radius_km: Some(10),
    },
    Location {
        slug: "rosebank",
        name: "Rosebank",
        title: "Web Design Rosebank | Website Design Services Rosebank | Endpoint Media",
        description: "Professional web design and local SEO services for Rosebank businesses. Dominate local search in this premium Johannesburg commercial hub. Free audit available.",
        street_address: None,
        geo: geo(-26.1467, 28.0431),
        radius_km: None,
    },
    Location {
        slug: "randburg",
        name: "Randburg",
        title: "Web Design Randburg | Website Design Services Randburg | Endpoint Media",
        description: "Professional web design and local SEO services for Randburg businesses. Build a high-performance website that dominates local search. Free audit available.",
        street_address: None,
        geo: geo(-26.0936, 28.0064),
        radius_km: None,
    },
    Location {
        slug: "bryanston",
        name: "Bryanston",
        title: "Web Design Bryanston | Website Design Services Bryanston | Endpoint Media",
        description: "Professional web design and local SEO services for Bryanston businesses. Premium area with medical practices, professional services, and retail. Build a high-performance website. Free audit available.",
        street_address: None,
        geo: geo(-26.0561, 28.0178),
        radius_km: None,
    },
    Location {
        slug: "rivonia",
        name: "Rivonia",
        title: "Web Design Rivonia | Website Design Services Rivonia | Endpoint Media",
        description: "Professional web design and local SEO services for Rivonia businesses. Office parks and professional services. Build a high-performance, lead-generating website. Free audit available.",
        street_address: None,
        geo: geo(-26.0500, 28.0667),
        radius_km: None,
    },
    Location {
        slug: "midrand",
        name: "Midrand",
        title: "Web Design Midrand | Website Design Services Midrand | Endpoint Media",
        description: "Professional web design and local SEO services for Midrand businesses. Growing commercial hub between Joburg and Pretoria. Build a high-performance, lead-generating website. Free audit available.",
        street_address: None,
        geo: geo(-25.9964, 28.1372),
        radius_km: None,
    },
    Location {
        slug: "roodepoort",
        name: "Roodepoort",
        title: "Web Design Roodepoort | Website Design Services Roodepoort | Endpoint Media",
        description: "Professional web design and local SEO services for Roodepoort businesses. Build a high-performance, lead-generating website that dominates local search. Free audit available.",
        street_address: None,
        geo: geo(-26.1625, 27.8725),
        radius_km: None,
    },
    Location {
        slug: "fourways",
        name: "Fourways",
        title: "Web Design Fourways | Website Design Services Fourways | Endpoint Media",
        description: "Professional web design and local SEO services for Fourways businesses. Build a high-performance, lead-generating website. Free audit available.",
        street_address: None,
        geo: geo(-26.0167, 28.0167),
        radius_km: None,
    },
    Location {
        slug: "waterfall",
        name: "Waterfall",
        title: "Web Design Waterfall | Website Design Services Waterfall | Endpoint Media",
        description: "Professional web design and local SEO services for Waterfall businesses. Dominate this emerging business district with a high-performance website. Free audit available.",
        street_address: None,
        geo: geo(-26.0967, 28.0867),
        radius_km: None,
    },
];

pub fn index(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Web Design Locations Johannesburg | Suburbs We Serve | Endpoint Media",
        "Hyper-local web design and SEO across Johannesburg: Sandton, Rosebank, Randburg, Bryanston, Rivonia, Midrand, Roodepoort, Fourways and Waterfall.",
        "/locations",
    )
    .keywords(["web design johannesburg suburbs", "local web designer near me"]);

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Locations", path: "/locations" },
        ],
    );
    Page::new(intent, vec![breadcrumbs])
}

pub fn pages(config: &SiteConfig) -> Vec<Page> {
    LOCATIONS.iter().map(|loc| page(config, loc)).collect()
}

fn page(config: &SiteConfig, loc: &Location) -> Page {
    let path = format!("/locations/{}", loc.slug);
    let lower = loc.name.to_lowercase();

    let intent = SeoIntent::new(loc.title, loc.description, path.clone()).keywords([
        format!("web design {lower}"),
        format!("website design {lower}"),
        format!("local SEO {lower}"),
        format!("web developer {lower}"),
        format!("website redesign {lower}"),
    ]);

    let description = format!(
        "Professional web design and local SEO services for {} businesses",
        loc.name
    );
    let area = LocalArea {
        path: &path,
        name: loc.name,
        description: &description,
        street_address: loc.street_address,
        geo: loc.geo,
        radius_km: loc.radius_km,
    };

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Locations", path: "/locations" },
            Crumb {
                name: loc.name,
                path: &path,
            },
        ],
    );

    Page::new(intent, vec![schema::local_business(config, &area), breadcrumbs])
}
