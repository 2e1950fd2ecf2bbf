use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__grid">
                    <div class="footer__col">
                        <div class="footer__brand">
                            {icon("code")}
                            <span>"Samo Soft"</span>
                        </div>
                        <p class="footer__muted">
                            "Professional website development and digital marketing services to help your business grow online."
                        </p>
                    </div>

                    <div class="footer__col">
                        <h3 class="footer__heading">"Quick Links"</h3>
                        <a href="/" class="footer__link">"Home"</a>
                        <a href="/services" class="footer__link">"Services"</a>
                        <a href="/contact" class="footer__link">"Contact"</a>
                    </div>

                    <div class="footer__col">
                        <h3 class="footer__heading">"Services"</h3>
                        <p class="footer__muted">"Website Development"</p>
                        <p class="footer__muted">"Digital Marketing"</p>
                        <p class="footer__muted">"SEO Optimization"</p>
                        <p class="footer__muted">"E-commerce Solutions"</p>
                    </div>

                    <div class="footer__col">
                        <h3 class="footer__heading">"Contact"</h3>
                        <div class="footer__line">{icon("mail")}<span>"info@samosoft.com"</span></div>
                        <div class="footer__line">{icon("phone")}<span>"+1 (555) 123-4567"</span></div>
                        <div class="footer__line">{icon("map-pin")}<span>"New York, NY"</span></div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p class="footer__muted">"© 2024 Samo Soft. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
