#![forbid(unsafe_code)]

//! Scroll-linked chrome: the navbar backdrop and the back-to-top button.
//!
//! One passive scroll listener feeds the engine's [`ScrollWatcher`]; the
//! watcher's edge detection means classes are touched only when a
//! threshold is actually crossed, not on every scroll event.

use folio_core::{ScrollChange, ScrollWatcher};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{self, Listener, WebError};

pub(crate) struct ScrollHandle {
    _scroll: Listener,
    _to_top: Option<Listener>,
}

/// Wire the scroll chrome, or `None` when the page has neither a navbar
/// nor a back-to-top button.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<ScrollHandle>, WebError> {
    let navbar = dom::by_id::<Element>(document, "navbar");
    let to_top = dom::by_id::<Element>(document, "back-to-top");
    if navbar.is_none() && to_top.is_none() {
        return Ok(None);
    }

    let scroll = {
        let view = window.clone();
        let navbar = navbar.clone();
        let button = to_top.clone();
        let mut watcher = ScrollWatcher::new();
        Listener::passive(window, "scroll", move |_event| {
            let Ok(offset) = view.page_y_offset() else {
                return;
            };
            apply(&watcher.observe(offset), navbar.as_ref(), button.as_ref());
        })?
    };

    let to_top_click = match &to_top {
        Some(button) => {
            let view = window.clone();
            Some(Listener::new(button, "click", move |_event| {
                scroll_to_top(&view);
            })?)
        }
        None => None,
    };

    Ok(Some(ScrollHandle {
        _scroll: scroll,
        _to_top: to_top_click,
    }))
}

fn apply(change: &ScrollChange, navbar: Option<&Element>, to_top: Option<&Element>) {
    if let (Some(scrolled), Some(navbar)) = (change.navbar_scrolled, navbar) {
        dom::set_class(navbar, "scrolled", scrolled);
    }
    if let (Some(visible), Some(button)) = (change.back_to_top_visible, to_top) {
        dom::set_class(button, "visible", visible);
    }
}

/// Smooth-scroll the viewport back to the origin.
fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
