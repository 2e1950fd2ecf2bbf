//! Mobile navigation menu: open/closed state machine and the coordinated
//! open/close animation timeline.
//!
//! The animation is not driven by timers. [`MenuTimeline`] holds the named
//! stage offsets and renders them as CSS transition durations and delays, so
//! the whole sequence is recomputed from the latest open/closed state on every
//! toggle. Interrupting an in-flight run is just a style swap; the transitions
//! converge on the requested state.

use crate::routes::{nav_items, NavItem};
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, ResolvedTheme};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Open/closed state of the mobile panel. Closed is the initial state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The only transition exposed to the trigger button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// No-op when already closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Activates a navigation item from inside the panel: navigation is
/// requested first, then the menu closes. Both complete before this returns,
/// so the handler commits them within a single event turn.
pub fn activate_item(menu: &mut MenuState, item: &NavItem, mut navigate: impl FnMut(&str)) {
    navigate(item.path);
    menu.close();
}

/// Clip-path anchors for the top-right reveal. The panel and the overlay
/// expand from and collapse toward the same point.
const CLIP_OPEN: &str = "circle(150% at 95% 10%)";
const CLIP_CLOSED: &str = "circle(0% at 95% 10%)";

/// Named stage offsets of the open/close sequence, in milliseconds.
///
/// Opening: overlay reveals first, the panel follows after
/// `open_panel_delay_ms`, then the children cascade top-to-bottom starting at
/// `open_children_delay_ms` with `open_stagger_ms` between entries.
/// Closing reverses the order (panel first, overlay delayed, children
/// bottom-to-top) with shorter durations, so it reads faster than opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTimeline {
    pub open_reveal_ms: u32,
    pub open_panel_delay_ms: u32,
    pub close_collapse_ms: u32,
    pub close_overlay_delay_ms: u32,
    pub open_item_ms: u32,
    pub close_item_ms: u32,
    pub open_children_delay_ms: u32,
    pub open_stagger_ms: u32,
    pub close_stagger_ms: u32,
}

impl Default for MenuTimeline {
    fn default() -> Self {
        Self {
            open_reveal_ms: 500,
            open_panel_delay_ms: 500,
            close_collapse_ms: 300,
            close_overlay_delay_ms: 300,
            open_item_ms: 300,
            close_item_ms: 200,
            open_children_delay_ms: 200,
            open_stagger_ms: 100,
            close_stagger_ms: 50,
        }
    }
}

impl MenuTimeline {
    /// Delay before the overlay starts moving. Zero on open (the dim layer
    /// leads), trailing the panel on close.
    pub fn overlay_delay_ms(&self, open: bool) -> u32 {
        if open {
            0
        } else {
            self.close_overlay_delay_ms
        }
    }

    /// Delay before the panel starts moving. Trailing the overlay on open,
    /// zero on close (the panel leads).
    pub fn panel_delay_ms(&self, open: bool) -> u32 {
        if open {
            self.open_panel_delay_ms
        } else {
            0
        }
    }

    /// Duration of the overlay/panel reveal or collapse.
    pub fn surface_ms(&self, open: bool) -> u32 {
        if open {
            self.open_reveal_ms
        } else {
            self.close_collapse_ms
        }
    }

    /// Duration of a single child transition.
    pub fn item_ms(&self, open: bool) -> u32 {
        if open {
            self.open_item_ms
        } else {
            self.close_item_ms
        }
    }

    /// Stagger delay for child `index` of `count`. Opening cascades
    /// top-to-bottom; closing reverses, bottom-to-top.
    pub fn item_delay_ms(&self, index: usize, count: usize, open: bool) -> u32 {
        if open {
            self.open_children_delay_ms + index as u32 * self.open_stagger_ms
        } else {
            count.saturating_sub(index + 1) as u32 * self.close_stagger_ms
        }
    }

    /// Inline style for the full-screen dim overlay.
    pub fn overlay_style(&self, open: bool) -> String {
        let duration = self.surface_ms(open);
        let delay = self.overlay_delay_ms(open);
        if open {
            format!(
                "clip-path: {CLIP_OPEN}; opacity: 1; visibility: visible; pointer-events: auto; \
                 transition: clip-path {duration}ms ease-out {delay}ms, opacity {duration}ms ease-out {delay}ms;"
            )
        } else {
            let settled = delay + duration;
            format!(
                "clip-path: {CLIP_CLOSED}; opacity: 0; visibility: hidden; pointer-events: none; \
                 transition: clip-path {duration}ms ease-in-out {delay}ms, opacity {duration}ms ease-in-out {delay}ms, visibility 0ms linear {settled}ms;"
            )
        }
    }

    /// Inline style for the panel container.
    pub fn panel_style(&self, open: bool) -> String {
        let duration = self.surface_ms(open);
        let delay = self.panel_delay_ms(open);
        if open {
            format!(
                "clip-path: {CLIP_OPEN}; opacity: 1; visibility: visible; pointer-events: auto; \
                 transition: clip-path {duration}ms ease-out {delay}ms, opacity {duration}ms ease-out {delay}ms;"
            )
        } else {
            let settled = delay + duration;
            format!(
                "clip-path: {CLIP_CLOSED}; opacity: 0; visibility: hidden; pointer-events: none; \
                 transition: clip-path {duration}ms ease-in-out {delay}ms, opacity {duration}ms ease-in-out {delay}ms, visibility 0ms linear {settled}ms;"
            )
        }
    }

    /// Inline style for staggered child `index` of `count` (logo, nav items,
    /// theme row). Children rest 20px right of their slot, transparent.
    pub fn item_style(&self, index: usize, count: usize, open: bool) -> String {
        let duration = self.item_ms(open);
        let delay = self.item_delay_ms(index, count, open);
        if open {
            format!(
                "opacity: 1; transform: translateX(0); \
                 transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;"
            )
        } else {
            format!(
                "opacity: 0; transform: translateX(20px); \
                 transition: opacity {duration}ms ease-in {delay}ms, transform {duration}ms ease-in {delay}ms;"
            )
        }
    }
}

/// The collapsible panel plus its dim backdrop. Stays mounted while closed so
/// the collapse animation can play; a closed panel is inert
/// (visibility/pointer-events off once settled).
#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let items = nav_items();
    // logo + nav items + theme row
    let child_count = items.len() + 2;
    let timeline = MenuTimeline::default();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let theme = use_theme();

    let open = move || menu.get().is_open();

    view! {
        <div
            class="mobile-menu__overlay"
            style=move || timeline.overlay_style(open())
            on:click=move |_| menu.update(|m| m.close())
        ></div>

        <div class="mobile-menu" style=move || timeline.panel_style(open())>
            <div class="mobile-menu__inner">
                <div class="mobile-menu__logo" style=move || timeline.item_style(0, child_count, open())>
                    <a href="/" class="brand" on:click=move |_| menu.update(|m| m.close())>
                        <span class="brand__primary">"Samo"</span>
                        <span class="brand__secondary">"Soft"</span>
                    </a>
                </div>

                <nav class="mobile-menu__nav">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let item: NavItem = *item;
                            let navigate = navigate.clone();
                            let is_active = move || item.is_active(&pathname.get());
                            view! {
                                <button
                                    class="mobile-menu__item"
                                    class:is-active=is_active
                                    style=move || timeline.item_style(i + 1, child_count, open())
                                    on:click=move |_| {
                                        let mut state = menu.get_untracked();
                                        activate_item(&mut state, &item, |path| {
                                            navigate(path, Default::default())
                                        });
                                        menu.set(state);
                                    }
                                >
                                    <span class="mobile-menu__item-icon" class:is-active=is_active>
                                        {icon(item.icon)}
                                    </span>
                                    <span>{item.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                // Toggling the theme from here intentionally leaves the menu
                // open, matching the persistent header affordance.
                <div
                    class="mobile-menu__theme"
                    style=move || timeline.item_style(child_count - 1, child_count, open())
                >
                    <button
                        class="button button--ghost mobile-menu__theme-btn"
                        on:click=move |_| theme.toggle()
                    >
                        <span class="theme-icon">
                            {move || match theme.resolved() {
                                ResolvedTheme::Dark => icon("moon"),
                                ResolvedTheme::Light => icon("sun"),
                            }}
                        </span>
                        <span>"Toggle Theme"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_toggle_parity() {
        let mut state = MenuState::default();
        assert!(!state.is_open());
        for n in 1..=10 {
            state.toggle();
            assert_eq!(state.is_open(), n % 2 == 1);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = MenuState::default();
        state.close();
        let once = state;
        state.close();
        assert_eq!(state, once);
        assert!(!state.is_open());

        state.toggle();
        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_item_activation_navigates_then_closes() {
        let item = NavItem {
            label: "Services",
            path: "/services",
            icon: "briefcase",
        };
        let mut state = MenuState::default();
        state.toggle();
        assert!(state.is_open());

        let mut navigated = Vec::new();
        activate_item(&mut state, &item, |path| navigated.push(path.to_string()));

        assert_eq!(navigated, ["/services"]);
        assert!(!state.is_open());
    }

    #[test]
    fn test_item_activation_from_closed_menu_stays_closed() {
        let item = NavItem {
            label: "Home",
            path: "/",
            icon: "home",
        };
        let mut state = MenuState::default();

        let mut calls = 0;
        activate_item(&mut state, &item, |_| calls += 1);

        assert_eq!(calls, 1);
        assert!(!state.is_open());
    }

    #[test]
    fn test_overlay_leads_on_open_panel_leads_on_close() {
        let tl = MenuTimeline::default();
        assert!(tl.overlay_delay_ms(true) < tl.panel_delay_ms(true));
        assert!(tl.panel_delay_ms(false) < tl.overlay_delay_ms(false));
    }

    #[test]
    fn test_open_cascade_is_top_to_bottom() {
        let tl = MenuTimeline::default();
        let n = 5;
        for i in 0..n - 1 {
            assert!(tl.item_delay_ms(i, n, true) < tl.item_delay_ms(i + 1, n, true));
        }
    }

    #[test]
    fn test_close_cascade_is_bottom_to_top_and_faster() {
        let tl = MenuTimeline::default();
        let n = 5;
        for i in 0..n - 1 {
            assert!(tl.item_delay_ms(i, n, false) > tl.item_delay_ms(i + 1, n, false));
        }
        assert_eq!(tl.item_delay_ms(n - 1, n, false), 0);

        // Closing must read faster than opening: the last child settles sooner.
        let open_settled = tl.item_delay_ms(n - 1, n, true) + tl.item_ms(true);
        let close_settled = tl.item_delay_ms(0, n, false) + tl.item_ms(false);
        assert!(close_settled < open_settled);
    }

    #[test]
    fn test_styles_reflect_state() {
        let tl = MenuTimeline::default();
        assert!(tl.panel_style(true).contains(CLIP_OPEN));
        assert!(tl.panel_style(false).contains(CLIP_CLOSED));
        assert!(tl.overlay_style(false).contains("pointer-events: none"));
        assert!(tl.overlay_style(true).contains("pointer-events: auto"));
    }
}
