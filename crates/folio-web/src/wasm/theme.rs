#![forbid(unsafe_code)]

//! Theme toggle: restores the persisted preference on startup and flips it
//! on click.
//!
//! The stylesheet keys off one attribute on the document root, so applying
//! a theme is setting or removing that attribute; [`folio_core::Theme`]
//! decides which.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::Theme;
use folio_core::theme::{DOCUMENT_ATTRIBUTE, STORAGE_KEY};
use web_sys::{Document, Element, Window};

use super::dom::{self, Listener, WebError};

pub(crate) struct ThemeHandle {
    _click: Listener,
}

/// Wire the theme toggle, or `None` when the page has no toggle button.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<ThemeHandle>, WebError> {
    let Some(button) = dom::by_id::<Element>(document, "theme-toggle") else {
        return Ok(None);
    };
    let Some(root) = document.document_element() else {
        return Ok(None);
    };

    let theme = Rc::new(Cell::new(load(window)));
    apply(&root, theme.get())?;

    let click = {
        let view = window.clone();
        let root = root.clone();
        let theme = Rc::clone(&theme);
        Listener::new(&button, "click", move |_event| {
            let next = theme.get().toggled();
            theme.set(next);
            if let Err(err) = apply(&root, next) {
                dom::report("theme", &err);
            }
            persist(&view, next);
        })?
    };

    Ok(Some(ThemeHandle { _click: click }))
}

fn load(window: &Window) -> Theme {
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn apply(root: &Element, theme: Theme) -> Result<(), WebError> {
    match theme.document_attribute() {
        Some(value) => root.set_attribute(DOCUMENT_ATTRIBUTE, value)?,
        None => root.remove_attribute(DOCUMENT_ATTRIBUTE)?,
    }
    Ok(())
}

/// Best effort; storage can be unavailable in private browsing.
fn persist(window: &Window, theme: Theme) {
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, theme.storage_value());
}
