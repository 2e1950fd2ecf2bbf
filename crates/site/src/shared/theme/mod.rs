//! Color-scheme preference shared across the whole application.
//!
//! The stored preference is three-valued (light / dark / system) and persisted
//! in localStorage. Rendering always works with the resolved two-valued theme;
//! `system` is resolved through the platform `prefers-color-scheme` query.
//! The resolved theme is applied as a `dark` class on the document element.

use leptos::prelude::*;
use web_sys::window;

/// Stored color-scheme preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete theme used for rendering once `System` has been resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage / attribute value for this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Resolve to a concrete theme. `system_dark` is the platform's ambient
    /// preference, consulted only for `System`.
    pub fn resolve(&self, system_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    /// The preference a two-way toggle selects from the current resolved
    /// theme. Always `Light` or `Dark`, never `System`.
    pub fn toggled_from(resolved: ResolvedTheme) -> ThemePreference {
        match resolved {
            ResolvedTheme::Dark => ThemePreference::Light,
            ResolvedTheme::Light => ThemePreference::Dark,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

/// Load the preference from localStorage.
fn load_preference_from_storage() -> ThemePreference {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| ThemePreference::from_str(&s))
        .unwrap_or_default()
}

/// Save the preference to localStorage.
fn save_preference_to_storage(preference: ThemePreference) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, preference.as_str());
    }
}

/// Whether the platform currently prefers a dark color scheme.
fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Sync the `dark` class on `<html>` with the resolved theme. All dark-mode
/// styling in the stylesheet hangs off that class.
fn apply_theme_class(resolved: ResolvedTheme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let _ = match resolved {
        ResolvedTheme::Dark => class_list.add_1("dark"),
        ResolvedTheme::Light => class_list.remove_1("dark"),
    };
    let _ = root.set_attribute("data-theme", resolved_as_str(resolved));
}

fn resolved_as_str(resolved: ResolvedTheme) -> &'static str {
    match resolved {
        ResolvedTheme::Dark => "dark",
        ResolvedTheme::Light => "light",
    }
}

/// Theme context type. Single source of truth for the whole app: the header
/// bar and the mobile panel both act on this one store.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
}

impl ThemeContext {
    /// Current resolved theme (reactive through the stored preference).
    pub fn resolved(&self) -> ResolvedTheme {
        self.preference.get().resolve(system_prefers_dark())
    }

    /// Set the preference, persist it, and sync the document class.
    pub fn set_preference(&self, preference: ThemePreference) {
        self.preference.set(preference);
        save_preference_to_storage(preference);
        apply_theme_class(preference.resolve(system_prefers_dark()));
    }

    /// Two-way toggle: dark if the resolved theme is not dark, else light.
    pub fn toggle(&self) {
        let resolved = self
            .preference
            .get_untracked()
            .resolve(system_prefers_dark());
        self.set_preference(ThemePreference::toggled_from(resolved));
    }
}

/// Provides the theme context to children and applies the stored preference
/// on initial render.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_preference_from_storage();
    let preference = RwSignal::new(initial);

    apply_theme_class(initial.resolve(system_prefers_dark()));

    provide_context(ThemeContext { preference });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_never_yields_system() {
        assert_eq!(
            ThemePreference::toggled_from(ResolvedTheme::Dark),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::toggled_from(ResolvedTheme::Light),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_system_resolves_through_platform_preference() {
        assert_eq!(
            ThemePreference::System.resolve(true),
            ResolvedTheme::Dark
        );
        assert_eq!(
            ThemePreference::System.resolve(false),
            ResolvedTheme::Light
        );
        // Explicit preferences ignore the platform value.
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
    }

    #[test]
    fn test_round_trip_storage_values() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_str(pref.as_str()), pref);
        }
        // Unknown values fall back to system.
        assert_eq!(ThemePreference::from_str("forest"), ThemePreference::System);
    }
}
