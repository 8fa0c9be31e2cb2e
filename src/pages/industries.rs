use crate::config::SiteConfig;
use crate::seo::meta::{OpenGraphType, SeoIntent};
use crate::seo::schema::{self, AreaServed, Crumb, Faq, ServiceKind, ServiceSpec};

use super::Page;

/// An industry vertical landing page.
struct Industry {
    slug: &'static str,
    /// Breadcrumb label.
    label: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    og_type: Option<OpenGraphType>,
    service_name: &'static str,
    service_description: &'static str,
    service_type: &'static str,
    area_served: AreaServed<'static>,
    faqs: &'static [Faq<'static>],
}

const JOHANNESBURG: AreaServed<'static> = AreaServed::City("Johannesburg");

const INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "finance",
        label: "Financial Services",
        title: "Web Design for Financial Services Johannesburg | Finance Website Design | Endpoint Media",
        description: "Professional web design for Johannesburg financial advisors, accountants, and finance firms. Trust, security, and compliance-focused websites that generate qualified leads.",
        keywords: &[
            "web design for financial services johannesburg",
            "financial advisor website design",
            "accountant website design johannesburg",
            "finance firm website",
            "financial services SEO",
        ],
        og_type: None,
        service_name: "Web Design for Financial Services",
        service_description: "Professional web design services specifically for financial services firms",
        service_type: "Financial Services Website Design",
        area_served: JOHANNESBURG,
        faqs: &[
            Faq {
                question: "How much does a financial services website cost in Johannesburg?",
                answer: "Financial services websites typically range from R20,000 to R80,000 depending on complexity, secure portal requirements, and integration with CRM/financial systems.",
            },
            Faq {
                question: "Are financial services websites secure and compliant?",
                answer: "Yes. We build websites with SSL encryption, secure client portals, and compliance with financial regulations. Security is non-negotiable for financial services.",
            },
            Faq {
                question: "Can you integrate with financial planning software?",
                answer: "Yes. We integrate with financial planning tools, CRM systems, and portfolio management software. We can also build custom integrations for proprietary systems.",
            },
            Faq {
                question: "How do you ensure client data privacy?",
                answer: "We implement end-to-end encryption, secure client portals, data encryption at rest, and comply with financial data protection regulations. Client privacy is our top priority.",
            },
            Faq {
                question: "Will my financial services website build trust with potential clients?",
                answer: "Absolutely. We showcase credentials, certifications, regulatory compliance, and testimonials. Trust signals are essential for financial services, and we optimize for them throughout your website.",
            },
        ],
    },
    Industry {
        slug: "real-estate",
        label: "Real Estate",
        title: "Web Design for Real Estate Johannesburg | Property Website Design | Endpoint Media",
        description: "Professional web design for Johannesburg real estate agents and agencies. Property listings, IDX integration, lead capture, and local SEO optimized for real estate success.",
        keywords: &[
            "web design for real estate johannesburg",
            "real estate website design",
            "property website design johannesburg",
            "real estate agent website",
            "IDX integration johannesburg",
            "property listings website",
        ],
        og_type: None,
        service_name: "Web Design for Real Estate",
        service_description: "Professional web design services specifically for real estate agents and agencies",
        service_type: "Real Estate Website Design",
        area_served: JOHANNESBURG,
        faqs: &[
            Faq {
                question: "How much does a real estate website cost in Johannesburg?",
                answer: "Real estate websites typically range from R20,000 to R60,000 depending on IDX integration, number of property listings, and required features like lead capture systems.",
            },
            Faq {
                question: "Do you integrate with MLS/IDX systems?",
                answer: "Yes. We integrate with major MLS/IDX systems to display live property listings, ensuring your website stays updated automatically with new listings.",
            },
            Faq {
                question: "Can you add property search and filtering features?",
                answer: "Absolutely. We build advanced property search with filters for price, location, property type, bedrooms, and more to help visitors find exactly what they're looking for.",
            },
            Faq {
                question: "Will my real estate website work on mobile devices?",
                answer: "Yes. Every real estate website we build is mobile-first and responsive, ensuring property listings look perfect on phones, tablets, and desktops. Most property searches happen on mobile.",
            },
            Faq {
                question: "How do you capture leads from property listings?",
                answer: "We implement lead capture forms on property pages, saved search functionality, newsletter signups, and inquiry forms. All leads are automatically forwarded to your email and CRM if integrated.",
            },
        ],
    },
    Industry {
        slug: "manufacturing-logistics",
        label: "Alrode Manufacturing",
        title: "Industrial Web Design Alrode | B2B Procurement Portals | Endpoint Media",
        description: "We build ISO-compliant websites for Alrode manufacturers and logistics firms. Secure document portals, catalogue digitization, and supply chain integration.",
        keywords: &[
            "industrial web design alrode",
            "B2B portal development johannesburg",
            "manufacturing website design",
            "logistics web design R59",
            "SAB supplier website requirements",
            "ISO 9001 compliant websites",
            "catalogue digitization alrode",
            "B2B procurement portals gauteng",
        ],
        og_type: Some(OpenGraphType::Article),
        service_name: "Alrode Industrial Web Development",
        service_description: "Specialized digital services for heavy industry, logistics, and manufacturing in the Alrode/Alrode South node.",
        service_type: "B2B Digital Transformation",
        area_served: AreaServed::Places(&["Alrode", "Alrode South", "Wadeville"]),
        faqs: &[
            Faq {
                question: "What are the website requirements for Alrode suppliers?",
                answer: "Suppliers in Alrode often need ISO 9001 compliant portals, secure document storage for BEE certificates, and Tax Clearance availability for procurement audits.",
            },
            Faq {
                question: "Do you offer industrial photography in Alrode?",
                answer: "Yes. Endpoint Media provides on-site industrial photography in Alrode and Wadeville to ensure your digital presence reflects your physical scale.",
            },
            Faq {
                question: "Can you integrate my website with ERP systems?",
                answer: "Yes. We integrate websites with ERP systems for real-time inventory display, automated catalogue updates, and seamless supply chain visibility.",
            },
        ],
    },
    Industry {
        slug: "medical",
        label: "Medical Practices",
        title: "Web Design for Medical Practices Johannesburg | Healthcare Website Design | Endpoint Media",
        description: "Professional web design for Johannesburg medical practices, clinics, and healthcare providers. HIPAA-compliant, patient-focused websites with online booking and secure portals.",
        keywords: &[
            "web design for medical practices johannesburg",
            "healthcare website design",
            "medical clinic website",
            "doctor website design johannesburg",
            "HIPAA compliant website",
            "medical practice SEO",
        ],
        og_type: None,
        service_name: "Web Design for Medical Practices",
        service_description: "Professional web design services specifically for medical practices and healthcare providers",
        service_type: "Healthcare Website Design",
        area_served: JOHANNESBURG,
        faqs: &[
            Faq {
                question: "How much does a medical practice website cost in Johannesburg?",
                answer: "Medical practice websites typically range from R18,000 to R60,000 depending on number of providers, booking system requirements, and patient portal features.",
            },
            Faq {
                question: "Are medical websites HIPAA compliant?",
                answer: "Yes. We build websites with HIPAA-compliant patient portals, encrypted data transmission, secure forms, and compliance with healthcare data protection regulations.",
            },
            Faq {
                question: "Can you integrate with practice management software?",
                answer: "Yes. We integrate with major practice management systems for appointment booking, patient records, and billing. We can also build custom integrations when needed.",
            },
            Faq {
                question: "How does online appointment booking work?",
                answer: "Patients can book appointments 24/7 through your website. The system syncs with your practice management software, sends confirmation emails, and can send SMS reminders. You control availability and appointment types.",
            },
            Faq {
                question: "Will my medical practice website help patients find me?",
                answer: "Absolutely. We optimize for searches like 'doctor near me', 'GP Sandton', 'specialist Johannesburg', and 'medical clinic near me'. Local SEO is critical for medical practices.",
            },
        ],
    },
    Industry {
        slug: "law-firms",
        label: "Law Firms",
        title: "Web Design for Law Firms Johannesburg | Legal Website Design | Endpoint Media",
        description: "Professional web design for Johannesburg law firms. Trust, professionalism, and user navigation are non-negotiable. We build high-performance websites that reflect your expertise and generate qualified leads.",
        keywords: &[
            "web design for law firms johannesburg",
            "law firm website design",
            "legal website design johannesburg",
            "lawyer website design",
            "attorney website design johannesburg",
            "legal marketing website",
            "law firm SEO johannesburg",
        ],
        og_type: None,
        service_name: "Web Design for Law Firms",
        service_description: "Professional web design services specifically for law firms",
        service_type: "Legal Website Design",
        area_served: JOHANNESBURG,
        faqs: &[
            Faq {
                question: "How much does a law firm website cost in Johannesburg?",
                answer: "Law firm websites typically range from R15,000 to R60,000 depending on number of practice areas, attorney profiles, and required features like client portals or booking systems.",
            },
            Faq {
                question: "Do you create practice area pages for law firms?",
                answer: "Yes. We create dedicated practice area pages optimized for SEO, showcasing your expertise in areas like family law, corporate law, criminal defense, and estate planning.",
            },
            Faq {
                question: "Can you integrate client portals or case management systems?",
                answer: "Yes. We integrate with Clio, PracticePanther, MyCase, and other case management systems. We can also build custom client portals for secure document sharing and communication.",
            },
            Faq {
                question: "Will my law firm website be optimized for local search?",
                answer: "Absolutely. We optimize for searches like 'divorce lawyer Sandton', 'criminal defense attorney Johannesburg', and 'estate planning attorney Bryanston'. Local SEO is critical for law firm success.",
            },
            Faq {
                question: "How long does it take to build a law firm website?",
                answer: "A typical law firm website takes 6-10 weeks depending on complexity, number of practice areas, and attorney profiles. We work efficiently while ensuring every detail reflects your firm's professionalism.",
            },
        ],
    },
];

pub fn index(config: &SiteConfig) -> Page {
    let intent = SeoIntent::new(
        "Industry-Specific Web Design Johannesburg | Law Firms, Real Estate, Finance, Medical | Endpoint Media",
        "Specialized web design services for Johannesburg businesses. We serve law firms, real estate agents, financial advisors, medical practices, and more with industry-specific solutions.",
        "/industries",
    )
    .keywords([
        "industry-specific web design johannesburg",
        "web design for law firms",
        "web design for real estate",
        "web design for financial services",
        "web design for medical practices",
    ]);

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Industries", path: "/industries" },
        ],
    );
    Page::new(intent, vec![breadcrumbs])
}

pub fn pages(config: &SiteConfig) -> Vec<Page> {
    INDUSTRIES.iter().map(|ind| page(config, ind)).collect()
}

/// Industry page: ProfessionalService, FAQ and breadcrumbs.
fn page(config: &SiteConfig, ind: &Industry) -> Page {
    let path = format!("/industries/{}", ind.slug);

    let mut intent = SeoIntent::new(ind.title, ind.description, path.clone())
        .keywords(ind.keywords.iter().copied());
    intent.open_graph.og_type = ind.og_type;

    let service = schema::service(
        config,
        &ServiceSpec {
            kind: ServiceKind::ProfessionalService,
            path: &path,
            name: ind.service_name,
            description: ind.service_description,
            service_type: ind.service_type,
            area_served: ind.area_served,
            audience: None,
        },
    );

    let breadcrumbs = schema::breadcrumb_list(
        config,
        &[
            Crumb { name: "Home", path: "/" },
            Crumb { name: "Industries", path: "/industries" },
            Crumb {
                name: ind.label,
                path: &path,
            },
        ],
    );

    Page::new(
        intent,
        vec![service, schema::faq_page(config, &path, ind.faqs), breadcrumbs],
    )
}
