#![forbid(unsafe_code)]

//! Mobile hamburger menu: toggles the slide-in panel and locks body
//! scrolling while it is open. Clicking any link inside the panel closes
//! it again.

use web_sys::{Document, Element, Window};

use super::dom::{self, Listener, WebError};

pub(crate) struct MenuHandle {
    document: Document,
    _toggle: Listener,
    _closers: Vec<Listener>,
}

/// Wire the menu, or `None` unless both the hamburger and the link panel
/// are on the page.
pub(crate) fn install(
    _window: &Window,
    document: &Document,
) -> Result<Option<MenuHandle>, WebError> {
    let (Some(hamburger), Some(panel)) = (
        dom::by_id::<Element>(document, "hamburger"),
        dom::by_id::<Element>(document, "nav-links"),
    ) else {
        return Ok(None);
    };

    let toggle = {
        let doc = document.clone();
        let burger = hamburger.clone();
        let links = panel.clone();
        Listener::new(&hamburger, "click", move |_event| {
            let _ = burger.class_list().toggle("active");
            let _ = links.class_list().toggle("active");
            lock_body_scroll(&doc, links.class_list().contains("active"));
        })?
    };

    let anchors = dom::query_all_in(&panel, "a");
    let mut closers = Vec::with_capacity(anchors.len());
    for anchor in &anchors {
        let doc = document.clone();
        let burger = hamburger.clone();
        let links = panel.clone();
        closers.push(Listener::new(anchor, "click", move |_event| {
            dom::set_class(&burger, "active", false);
            dom::set_class(&links, "active", false);
            lock_body_scroll(&doc, false);
        })?);
    }

    Ok(Some(MenuHandle {
        document: document.clone(),
        _toggle: toggle,
        _closers: closers,
    }))
}

impl Drop for MenuHandle {
    fn drop(&mut self) {
        // Never leave the page unscrollable if torn down while open.
        lock_body_scroll(&self.document, false);
    }
}

/// The open panel covers the viewport; hold the page behind it still.
fn lock_body_scroll(document: &Document, locked: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
