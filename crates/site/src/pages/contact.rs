//! Contact page: contact info cards and a message form (markup only, no
//! submission backend).

use crate::shared::icons::icon;
use leptos::prelude::*;

const CONTACT_LINES: [(&str, &str, &str); 4] = [
    ("mail", "Email", "info@samosoft.com"),
    ("phone", "Phone", "+1 (555) 123-4567"),
    ("map-pin", "Office", "New York, NY"),
    ("clock", "Hours", "Mon-Fri, 9:00-18:00"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__container">
                <div class="section__intro">
                    <h1 class="section__title">"Get in Touch"</h1>
                    <p class="section__lead">
                        "Have a project in mind? Tell us about it and we'll get back to you within one business day."
                    </p>
                </div>

                <div class="contact__grid">
                    <div class="card-grid card-grid--1 contact__info">
                        {CONTACT_LINES
                            .iter()
                            .enumerate()
                            .map(|(i, (icon_name, label, value))| {
                                view! {
                                    <div
                                        class="card card--compact"
                                        style=format!("animation: card-appear 0.6s ease-out {}ms both;", i * 100)
                                    >
                                        <div class="card__icon card__icon--small">{icon(icon_name)}</div>
                                        <div>
                                            <h3 class="card__title card__title--small">{*label}</h3>
                                            <p class="card__description">{*value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="contact__form" on:submit=move |ev| ev.prevent_default()>
                        <label class="contact__field">
                            <span>"Name"</span>
                            <input type="text" name="name" placeholder="Your name" />
                        </label>
                        <label class="contact__field">
                            <span>"Email"</span>
                            <input type="email" name="email" placeholder="you@company.com" />
                        </label>
                        <label class="contact__field">
                            <span>"Message"</span>
                            <textarea name="message" rows="6" placeholder="Tell us about your project"></textarea>
                        </label>
                        <button type="submit" class="button button--primary button--lg">
                            "Send Message" {icon("arrow-right")}
                        </button>
                    </form>
                </div>
            </div>
        </section>

        <section class="section section--inverted">
            <div class="section__container section__intro">
                <h2 class="section__title">"Prefer email?"</h2>
                <p class="section__lead">
                    "Write to info@samosoft.com and we'll take it from there."
                </p>
            </div>
        </section>
    }
}
