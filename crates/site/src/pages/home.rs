//! Landing page: hero, services overview, about, stats, FAQ, CTA.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

fn services() -> [Service; 4] {
    [
        Service {
            icon: "code",
            title: "Website Development",
            description: "Custom websites built with modern technologies for optimal performance and user experience.",
        },
        Service {
            icon: "search",
            title: "SEO Marketing",
            description: "Boost your online visibility with our comprehensive SEO strategies and optimization techniques.",
        },
        Service {
            icon: "smartphone",
            title: "Mobile-First Design",
            description: "Responsive designs that look perfect on all devices, from mobile phones to desktop computers.",
        },
        Service {
            icon: "trending-up",
            title: "Digital Marketing",
            description: "Complete digital marketing solutions to grow your business and reach your target audience.",
        },
    ]
}

const STATS: [(&str, &str); 4] = [
    ("100+", "Projects Completed"),
    ("50+", "Happy Clients"),
    ("5+", "Years Experience"),
    ("24/7", "Support Available"),
];

const FAQS: [(&str, &str); 6] = [
    (
        "What services does Samo Soft offer?",
        "We specialize in website development, digital marketing, SEO optimization, and mobile-first design. Our team creates custom solutions tailored to your business needs.",
    ),
    (
        "How long does it take to build a website?",
        "The timeline depends on the complexity of your project. A basic website typically takes 2-4 weeks, while more complex e-commerce or custom applications may take 6-12 weeks.",
    ),
    (
        "Do you provide ongoing support and maintenance?",
        "Yes, we offer comprehensive support and maintenance packages to keep your website secure, updated, and performing optimally. We provide 24/7 technical support.",
    ),
    (
        "What is your approach to SEO?",
        "Our SEO strategy includes keyword research, on-page optimization, technical SEO, content creation, and link building. We focus on sustainable, white-hat techniques for long-term results.",
    ),
    (
        "Can you help with e-commerce websites?",
        "We build custom e-commerce solutions with secure payment processing, inventory management, and user-friendly shopping experiences that drive conversions.",
    ),
    (
        "What makes Samo Soft different from other agencies?",
        "We combine technical expertise with creative design, focusing on results-driven solutions. Our personalized approach ensures each project meets your specific business goals and budget.",
    ),
];

const WHY_US: [&str; 4] = [
    "Custom solutions tailored to your business",
    "Modern technologies and best practices",
    "Ongoing support and maintenance",
    "Results-driven approach",
];

#[component]
fn FaqAccordion() -> impl IntoView {
    // Single-open accordion; clicking the open entry collapses it.
    let (open_index, set_open_index) = signal(None::<usize>);

    view! {
        <div class="accordion">
            {FAQS
                .iter()
                .enumerate()
                .map(|(i, (question, answer))| {
                    let is_open = move || open_index.get() == Some(i);
                    view! {
                        <div class="accordion__item" class:is-open=is_open>
                            <button
                                class="accordion__trigger"
                                on:click=move |_| {
                                    set_open_index
                                        .update(|open| {
                                            *open = if *open == Some(i) { None } else { Some(i) };
                                        });
                                }
                            >
                                <span>{*question}</span>
                                <span class="accordion__chevron">{icon("arrow-right")}</span>
                            </button>
                            <div class="accordion__content">
                                <p>{*answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="section hero">
            <div class="section__container hero__grid">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        "Build Your Digital"
                        <span class="hero__title-accent">"Presence"</span>
                    </h1>
                    <p class="hero__lead">
                        "Professional website development and digital marketing services to help your business thrive online."
                    </p>
                    <div class="hero__actions">
                        <a href="/contact" class="button button--primary button--lg">
                            "Get Started" {icon("arrow-right")}
                        </a>
                        <a href="/services" class="button button--outline button--lg">
                            "View Services"
                        </a>
                    </div>
                </div>
                <div class="hero__art" aria-hidden="true">
                    <div class="hero__art-panel">{icon("code")}</div>
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="section__container">
                <div class="section__intro">
                    <h2 class="section__title">"Our Services"</h2>
                    <p class="section__lead">
                        "We offer comprehensive digital solutions to help your business succeed online"
                    </p>
                </div>
                <div class="card-grid card-grid--4">
                    {services()
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <div
                                    class="card"
                                    style=format!("animation: card-appear 0.6s ease-out {}ms both;", i * 100)
                                >
                                    <div class="card__icon">{icon(service.icon)}</div>
                                    <h3 class="card__title">{service.title}</h3>
                                    <p class="card__description">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="section__container about__grid">
                <div class="about__art" aria-hidden="true">
                    <div class="about__art-panel">{icon("trending-up")}</div>
                </div>
                <div class="about__copy">
                    <h2 class="section__title">"Why Choose Samo Soft?"</h2>
                    <p class="section__lead">
                        "We're passionate about creating digital experiences that drive results. Our team combines creativity with technical expertise to deliver solutions that exceed expectations."
                    </p>
                    <div class="about__points">
                        {WHY_US
                            .iter()
                            .map(|point| {
                                view! {
                                    <div class="about__point">
                                        <span class="about__check">{icon("check-circle")}</span>
                                        <span>{*point}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <section class="section section--muted">
            <div class="section__container stats">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, (number, label))| {
                        view! {
                            <div
                                class="stats__item"
                                style=format!("animation: card-appear 0.6s ease-out {}ms both;", i * 100)
                            >
                                <div class="stats__number">{*number}</div>
                                <div class="stats__label">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <div class="section__container">
                <div class="section__intro">
                    <h2 class="section__title">"Frequently Asked Questions"</h2>
                    <p class="section__lead">
                        "Get answers to common questions about our services and process"
                    </p>
                </div>
                <div class="section--narrow">
                    <FaqAccordion />
                </div>
            </div>
        </section>

        <section class="section section--inverted">
            <div class="section__container section__intro">
                <h2 class="section__title">"Ready to Get Started?"</h2>
                <p class="section__lead">
                    "Let's discuss your project and create something amazing together"
                </p>
                <a href="/contact" class="button button--secondary button--lg">
                    "Contact Us Today" {icon("arrow-right")}
                </a>
            </div>
        </section>
    }
}
