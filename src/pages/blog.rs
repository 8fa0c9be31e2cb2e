use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::seo::meta::{Image, OpenGraphType, SeoIntent};
use crate::seo::schema::{self, ArticleSpec, Crumb};

use super::{date, Page};

pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub published: NaiveDate,
    pub category: &'static str,
}

pub const POSTS: &[Post] = &[
    Post {
        slug: "the-true-cost-of-a-website-in-johannesburg",
        title: "The True Cost of a Website in Johannesburg: 2025 Price Guide",
        excerpt: "Your comprehensive guide to JHB web design prices. We break down costs by page, e-commerce, and maintenance fees. Get full price transparency.",
        published: date(2025, 10, 30),
        category: "Pricing & ROI",
    },
    Post {
        slug: "freelancer-vs-agency-the-low-risk-choice-for-johannesburg",
        title: "Freelancer vs. Agency: The Low-Risk Choice for Johannesburg Web Design",
        excerpt: "Agencies are expensive. Freelancers are risky. We break down the true cost, risk, and capacity for Joburg businesses to choose the right web design partner.",
        published: date(2025, 10, 23),
        category: "Business Strategy",
    },
    Post {
        slug: "the-schema-vacuum-technical-seo-advantage",
        title: "The Schema Vacuum: The Technical SEO Advantage All Your Johannesburg Competitors Are Missing",
        excerpt: "We reveal the one technical advantage local competitors ignore. Learn what Schema Markup is, why 100% of Joburg agencies fail to use it, and how it earns you Rich Snippets.",
        published: date(2025, 10, 15),
        category: "Technical SEO",
    },
    Post {
        slug: "wix-vs-wordpress-guide-johannesburg-small-businesses",
        title: "Wix vs WordPress: A Guide for Johannesburg Small Businesses (2025)",
        excerpt: "DIY website builders vs custom WordPress development. We break down the true costs, limitations, and when DIY solutions fail Johannesburg businesses. Learn when to hire a professional.",
        published: date(2025, 11, 5),
        category: "Business Strategy",
    },
    Post {
        slug: "how-much-does-website-cost-south-africa-2025",
        title: "How Much Does a Website Cost in South Africa? Complete 2025 Pricing Guide",
        excerpt: "Your definitive guide to website costs in South Africa. We break down pricing by provider, complexity, and functionality. Includes hidden costs, maintenance fees, and ROI analysis.",
        published: date(2025, 11, 12),
        category: "Pricing & ROI",
    },
];

pub fn index(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Web Design & Local SEO Blog Johannesburg | Endpoint Media Insights",
        "Practical guides on website costs, local SEO, and technical SEO for Johannesburg businesses, from the team at Endpoint Media.",
        "/blog",
    )
    .keywords(["web design blog johannesburg", "local seo guides south africa"]);

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Blog", path: "/blog" },
        ],
    );
    Page::new(intent, vec![breadcrumbs])
}

pub fn pages(config: &SiteConfig) -> Vec<Page> {
    POSTS.iter().map(|post| page(config, post)).collect()
}

/// Post page: Article schema plus breadcrumbs, with the post's own share image.
pub fn page(config: &SiteConfig, post: &Post) -> Page {
    let path = format!("/blog/{}", post.slug);
    let image_path = format!("/images/blog/{}.jpg", post.slug);
    let keywords = vec![
        "web design johannesburg".to_owned(),
        "website design prices".to_owned(),
        "local SEO joburg".to_owned(),
        post.category.to_lowercase(),
    ];

    let intent = SeoIntent::new(
        format!("{} | {} Blog", post.title, config.site_name),
        post.excerpt,
        path.clone(),
    )
    .keywords(keywords.clone())
    .og_type(OpenGraphType::Article)
    .og_images(vec![Image::new(image_path.clone())
        .sized(1200, 630)
        .alt(post.title)])
    .twitter_images(vec![image_path.clone()]);

    let article = schema::article(
        config,
        &ArticleSpec {
            path: &path,
            headline: post.title,
            description: post.excerpt,
            image_path: Some(image_path.as_str()),
            published: post.published,
            modified: None,
            section: Some(post.category),
            keywords,
        },
    );

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Blog", path: "/blog" },
            Crumb {
                name: post.title,
                path: &path,
            },
        ],
    );

    Page::new(intent, vec![article, breadcrumbs])
}
