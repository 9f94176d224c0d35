#![forbid(unsafe_code)]

//! Typed-text rotator under the hero heading.
//!
//! The engine's [`Typewriter`] decides what is visible and how long to
//! wait; this module renders each frame and keeps the timeout chain
//! going. The chain starts after a short lead-in so the headline settles
//! before the first keystroke.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::Typewriter;
use folio_core::typed::LEAD_IN;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Window};

use crate::config;

use super::dom::{self, WebError};

pub(crate) struct TypewriterHandle {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    timer: Rc<Cell<i32>>,
    live: Rc<Cell<bool>>,
}

/// Wire the rotator, or `None` when the page has no typed-text slot.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<TypewriterHandle>, WebError> {
    let Some(element) = dom::by_id::<Element>(document, "typed-text") else {
        return Ok(None);
    };

    let mut rotator = Typewriter::new(
        config::ROTATING_TITLES
            .iter()
            .map(|title| (*title).to_owned())
            .collect(),
    )?;

    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let timer = Rc::new(Cell::new(0));
    let live = Rc::new(Cell::new(true));

    let closure = {
        let view = window.clone();
        let callback = Rc::clone(&callback);
        let timer = Rc::clone(&timer);
        let live = Rc::clone(&live);
        Closure::new(move || {
            if !live.get() {
                return;
            }
            let delay = rotator.step();
            element.set_text_content(Some(rotator.visible()));

            let slot = callback.borrow();
            let Some(closure) = slot.as_ref() else {
                return;
            };
            match view.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                dom::timeout_millis(delay),
            ) {
                Ok(id) => timer.set(id),
                Err(err) => dom::report("typed text", &WebError::from(err)),
            }
        })
    };
    *callback.borrow_mut() = Some(closure);

    {
        let slot = callback.borrow();
        if let Some(closure) = slot.as_ref() {
            timer.set(window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                dom::timeout_millis(LEAD_IN),
            )?);
        }
    }

    Ok(Some(TypewriterHandle {
        window: window.clone(),
        callback,
        timer,
        live,
    }))
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.live.set(false);
        self.window.clear_timeout_with_handle(self.timer.get());
        // Breaks the closure's cycle through `callback` so it can be freed.
        self.callback.borrow_mut().take();
    }
}
