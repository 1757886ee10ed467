//! Delayed smooth scroll to the project container.

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

use crate::config::SCROLL_DELAY_MS;

/// Scroll `target` into view after [`SCROLL_DELAY_MS`].
///
/// Fire and forget: the timeout is never cancelled. Scrolling to an
/// already visible container does nothing, so overlapping calls are fine.
pub fn scroll_into_view_later(target: NodeRef) {
    Timeout::new(SCROLL_DELAY_MS, move || scroll_into_view(&target)).forget();
}

fn scroll_into_view(target: &NodeRef) {
    let Some(element) = target.cast::<web_sys::Element>() else {
        web_sys::console::debug_1(&"projects container not mounted, skipping scroll".into());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
