use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use crate::routes::AppRoutes;
use crate::shared::components::loader::Loader;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <Router>
                <Loader />
                <div class="page">
                    <Navbar />
                    <main class="page__main">
                        <AppRoutes />
                    </main>
                    <Footer />
                </div>
            </Router>
        </ThemeProvider>
    }
}
