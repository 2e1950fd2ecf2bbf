//! Scroll-position tracking for the navigation header.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// Offset in px past which the header renders elevated.
const ELEVATION_THRESHOLD_PX: f64 = 10.0;

/// Elevated iff the page has scrolled strictly past the threshold.
pub fn is_elevated(offset: f64) -> bool {
    offset > ELEVATION_THRESHOLD_PX
}

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Subscribes to the window scroll position and exposes the elevated flag.
///
/// The signal is written only when the boolean actually changes, so
/// sub-threshold scroll deltas cause no re-renders. The listener is removed
/// exactly once, on cleanup of the calling component. Without a window there
/// is no scroll source and the header stays non-elevated.
pub fn use_scroll_elevation() -> ReadSignal<bool> {
    let (elevated, set_elevated) = signal(is_elevated(current_offset()));

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        let next = is_elevated(current_offset());
        if elevated.get_untracked() != next {
            set_elevated.set(next);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }

    let on_scroll = send_wrapper::SendWrapper::new(on_scroll);
    on_cleanup(move || {
        if let Some(win) = web_sys::window() {
            let _ =
                win.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
    });

    elevated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_sequence() {
        let offsets = [0.0, 5.0, 15.0, 8.0];
        let expected = [false, false, true, false];
        let actual: Vec<bool> = offsets.iter().map(|o| is_elevated(*o)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_elevated(10.0));
        assert!(is_elevated(10.1));
    }
}
