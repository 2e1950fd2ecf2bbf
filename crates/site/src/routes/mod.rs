//! Route table and the navigation items derived from it.

use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::services::ServicesPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// A single entry in the site navigation. `icon` is resolved through
/// `shared::icons::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Exact path equality. No prefix matching and no trailing-slash
    /// normalization: `/services` does not match `/services/`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Navigable routes in display order.
pub fn nav_items() -> [NavItem; 3] {
    [
        NavItem {
            label: "Home",
            path: "/",
            icon: "home",
        },
        NavItem {
            label: "Services",
            path: "/services",
            icon: "briefcase",
        },
        NavItem {
            label: "Contact",
            path: "/contact",
            icon: "mail",
        },
    ]
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="section section--narrow">
            <h1 class="section__title">"Page not found"</h1>
            <p class="section__lead">"The page you are looking for does not exist."</p>
            <a href="/" class="button button--primary">"Back to home"</a>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/contact") view=ContactPage />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_is_exact_match() {
        let items = nav_items();
        let active: Vec<_> = items.iter().filter(|i| i.is_active("/services")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "/services");
    }

    #[test]
    fn test_no_prefix_or_trailing_slash_matching() {
        let services = NavItem {
            label: "Services",
            path: "/services",
            icon: "briefcase",
        };
        assert!(!services.is_active("/services/"));
        assert!(!services.is_active("/services/web"));
        assert!(!services.is_active("/"));

        let home = NavItem {
            label: "Home",
            path: "/",
            icon: "home",
        };
        assert!(home.is_active("/"));
        assert!(!home.is_active("/services"));
    }

    #[test]
    fn test_at_most_one_active_item() {
        let items = nav_items();
        for path in ["/", "/services", "/contact", "/unknown", ""] {
            let count = items.iter().filter(|i| i.is_active(path)).count();
            assert!(count <= 1, "path {path:?} matched {count} items");
        }
    }
}
