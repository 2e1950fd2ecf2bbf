//! Persistent navigation header.
//!
//! Composes three independent behaviors: scroll elevation, the mobile menu
//! state machine, and the shared theme toggle. Active-route highlighting is
//! derived from the router location; the desktop underline is a single
//! indicator repositioned from the active link's measured rect on every route
//! change.

pub mod menu;
pub mod scroll;

use crate::routes::{nav_items, NavItem};
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use menu::{MenuState, MobileMenu};
use scroll::use_scroll_elevation;

#[component]
pub fn Navbar() -> impl IntoView {
    let elevated = use_scroll_elevation();
    let menu = RwSignal::new(MenuState::default());
    let theme = use_theme();
    let pathname = use_location().pathname;

    // (left, width) of the active desktop link relative to the nav container,
    // or None when no route matches. Remeasured on every route change; the
    // underline slides between items via CSS transitions.
    let indicator = RwSignal::new(None::<(f64, f64)>);
    Effect::new(move |_| {
        pathname.track();
        let doc = web_sys::window().and_then(|w| w.document());
        let nav = doc
            .as_ref()
            .and_then(|d| d.query_selector(".navbar__links").ok().flatten());
        let link = doc
            .as_ref()
            .and_then(|d| d.query_selector(".navbar__link.is-active").ok().flatten());
        match (nav, link) {
            (Some(nav), Some(link)) => {
                let nav_rect = nav.get_bounding_client_rect();
                let link_rect = link.get_bounding_client_rect();
                indicator.set(Some((link_rect.left() - nav_rect.left(), link_rect.width())));
            }
            _ => indicator.set(None),
        }
    });

    let indicator_style = move || match indicator.get() {
        Some((left, width)) => {
            format!("opacity: 1; transform: translateX({left}px); width: {width}px;")
        }
        None => "opacity: 0;".to_string(),
    };

    view! {
        <header class="navbar" class:navbar--elevated=move || elevated.get()>
            <div class="navbar__container">
                <a href="/" class="brand">
                    <span class="brand__primary">"Samo"</span>
                    <span class="brand__secondary">"Soft"</span>
                </a>

                <nav class="navbar__links">
                    {nav_items()
                        .iter()
                        .map(|item| {
                            let item: NavItem = *item;
                            let is_active = move || item.is_active(&pathname.get());
                            view! {
                                <a href=item.path class="navbar__link" class:is-active=is_active>
                                    <span class="navbar__link-icon">{icon(item.icon)}</span>
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <span class="navbar__indicator" style=indicator_style></span>
                </nav>

                <div class="navbar__actions">
                    <button
                        class="navbar__icon-btn"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        <span class="theme-icon theme-icon--sun">{icon("sun")}</span>
                        <span class="theme-icon theme-icon--moon">{icon("moon")}</span>
                    </button>

                    <div class="navbar__mobile">
                        <button
                            class="navbar__icon-btn navbar__menu-btn"
                            aria-label="Toggle menu"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                menu.update(|m| m.toggle());
                            }
                        >
                            // Decorative cross-fade between glyphs; never
                            // gates the state transition.
                            <span class="menu-glyph" class:is-open=move || menu.get().is_open()>
                                <span class="menu-glyph__menu">{icon("menu")}</span>
                                <span class="menu-glyph__close">{icon("x")}</span>
                            </span>
                        </button>

                        <MobileMenu menu=menu />
                    </div>
                </div>
            </div>
        </header>
    }
}
