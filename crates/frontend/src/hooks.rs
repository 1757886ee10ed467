//! Custom hooks.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;

/// Whether the window is scrolled further than `threshold` pixels.
///
/// Listens to window `scroll` events for the lifetime of the component.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let window = web_sys::window();

            let listener = window.as_ref().map(|window| {
                let target = window.clone();
                let on_scroll = Closure::<dyn Fn()>::new(move || {
                    let y = target.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > threshold);
                });
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                {
                    web_sys::console::warn_1(&err);
                }
                on_scroll
            });

            if window.is_none() {
                web_sys::console::warn_1(&"no window, filter bar ignores scrolling".into());
            }

            move || {
                if let (Some(window), Some(on_scroll)) = (window, listener)
                    && let Err(err) = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    )
                {
                    web_sys::console::warn_1(&err);
                }
            }
        });
    }

    *scrolled
}
