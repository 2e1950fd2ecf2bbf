//! Services page: detailed service cards, process steps, CTA.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct ServiceDetail {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

fn service_details() -> [ServiceDetail; 8] {
    [
        ServiceDetail {
            icon: "code",
            title: "Website Development",
            description: "Custom websites built with modern technologies like React, Next.js, and Node.js for optimal performance.",
            features: ["Responsive Design", "Fast Loading", "SEO Optimized", "Cross-browser Compatible"],
        },
        ServiceDetail {
            icon: "search",
            title: "SEO Marketing",
            description: "Comprehensive SEO strategies to improve your search engine rankings and drive organic traffic.",
            features: ["Keyword Research", "On-page SEO", "Technical SEO", "Link Building"],
        },
        ServiceDetail {
            icon: "smartphone",
            title: "Mobile App Development",
            description: "Native and cross-platform mobile applications that provide excellent user experiences.",
            features: ["iOS & Android", "React Native", "App Store Optimization", "Push Notifications"],
        },
        ServiceDetail {
            icon: "trending-up",
            title: "Digital Marketing",
            description: "Complete digital marketing solutions including social media, PPC, and content marketing.",
            features: ["Social Media Marketing", "Google Ads", "Content Strategy", "Analytics & Reporting"],
        },
        ServiceDetail {
            icon: "shopping-cart",
            title: "E-commerce Solutions",
            description: "Full-featured online stores with secure payment processing and inventory management.",
            features: ["Payment Integration", "Inventory Management", "Order Tracking", "Customer Portal"],
        },
        ServiceDetail {
            icon: "palette",
            title: "UI/UX Design",
            description: "Beautiful and intuitive user interfaces that enhance user experience and engagement.",
            features: ["User Research", "Wireframing", "Prototyping", "Design Systems"],
        },
        ServiceDetail {
            icon: "database",
            title: "Database Management",
            description: "Efficient database design and management for optimal data storage and retrieval.",
            features: ["Database Design", "Performance Optimization", "Data Migration", "Backup Solutions"],
        },
        ServiceDetail {
            icon: "shield",
            title: "Security & Maintenance",
            description: "Comprehensive security measures and ongoing maintenance to keep your systems safe.",
            features: ["Security Audits", "Regular Updates", "Backup Management", "24/7 Monitoring"],
        },
    ]
}

const PROCESS: [(&str, &str, &str); 4] = [
    ("01", "Discovery", "We understand your business goals and requirements"),
    ("02", "Planning", "Create a detailed project plan and timeline"),
    ("03", "Development", "Build your solution using best practices"),
    ("04", "Launch", "Deploy and provide ongoing support"),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__container">
                <div class="section__intro">
                    <h1 class="section__title">"Our Services"</h1>
                    <p class="section__lead">
                        "We offer comprehensive digital solutions to help your business succeed in the modern digital landscape. From website development to digital marketing, we've got you covered."
                    </p>
                </div>

                <div class="card-grid card-grid--2">
                    {service_details()
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <div
                                    class="card card--detailed"
                                    style=format!("animation: card-appear 0.6s ease-out {}ms both;", i * 100)
                                >
                                    <div class="card__header">
                                        <div class="card__icon">{icon(service.icon)}</div>
                                        <h3 class="card__title">{service.title}</h3>
                                    </div>
                                    <p class="card__description">{service.description}</p>
                                    <h4 class="card__subheading">"Key Features:"</h4>
                                    <ul class="card__features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="process">
                    <div class="section__intro">
                        <h2 class="section__title">"Our Process"</h2>
                        <p class="section__lead">
                            "We follow a proven methodology to ensure your project is delivered on time and exceeds expectations"
                        </p>
                    </div>
                    <div class="process__grid">
                        {PROCESS
                            .iter()
                            .map(|(step, title, description)| {
                                view! {
                                    <div class="process__step">
                                        <div class="process__badge">{*step}</div>
                                        <h3 class="process__title">{*title}</h3>
                                        <p class="process__description">{*description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="section__intro">
                    <h2 class="section__title">"Ready to Start Your Project?"</h2>
                    <p class="section__lead">
                        "Let's discuss your requirements and create a custom solution that fits your needs and budget"
                    </p>
                    <div class="hero__actions hero__actions--center">
                        <a href="/contact" class="button button--primary button--lg">"Get a Quote"</a>
                        <a href="/" class="button button--outline button--lg">"Learn More"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
