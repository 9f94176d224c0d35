#![forbid(unsafe_code)]

//! Shared DOM plumbing: the web error type, element lookups, and handles
//! for listeners and animation-frame loops.
//!
//! Every component owns the closures it installs. Dropping the owning
//! handle detaches the listener or stops the loop, so application teardown
//! is nothing more than dropping handles.

use core::time::Duration;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use folio_core::PhraseSetError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window, console};

/// Errors raised while wiring components to the page or talking to the
/// relays.
#[derive(Debug)]
pub(crate) enum WebError {
    /// No global `window` object (not a browser main thread).
    NoWindow,
    /// `window.document` is missing.
    NoDocument,
    /// The canvas exists but refused to hand out a 2d context.
    NoCanvasContext,
    /// The rotating-title list was empty.
    Phrases(PhraseSetError),
    /// An endpoint answered with a non-success status.
    Http(u16),
    /// The counter read came back without an entity tag.
    MissingEtag,
    /// The conditional counter write kept losing races.
    Contended,
    /// The realtime stream dropped; the browser reconnects on its own.
    StreamInterrupted,
    /// A JSON body or stream payload failed to parse or serialize.
    Json(serde_json::Error),
    /// Anything the browser reported as a raw JS value.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window object"),
            Self::NoDocument => write!(f, "no document object"),
            Self::NoCanvasContext => write!(f, "canvas 2d context unavailable"),
            Self::Phrases(err) => write!(f, "{err}"),
            Self::Http(status) => write!(f, "endpoint answered {status}"),
            Self::MissingEtag => write!(f, "counter read returned no entity tag"),
            Self::Contended => write!(f, "counter write kept losing races"),
            Self::StreamInterrupted => write!(f, "realtime stream interrupted, reconnecting"),
            Self::Json(err) => write!(f, "payload did not parse: {err}"),
            Self::Js(detail) => write!(f, "browser call failed: {detail}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<PhraseSetError> for WebError {
    fn from(err: PhraseSetError) -> Self {
        Self::Phrases(err)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Report a component failure to the browser console. One component
/// failing to wire is not fatal to the rest of the page.
pub(crate) fn report(component: &str, err: &WebError) {
    console::error_1(&JsValue::from_str(&format!("[folio] {component}: {err}")));
}

/// Debug-level note for wiring, skips and stream lifecycle.
pub(crate) fn note(component: &str, message: &str) {
    console::debug_1(&JsValue::from_str(&format!("[folio] {component}: {message}")));
}

/// The global window, or an error off the browser main thread.
pub(crate) fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::NoDocument)
}

/// Look up `id` and downcast to `T`. `None` when the node is absent or of
/// an unexpected type; components treat both as "not on this page".
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

/// All elements under `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove `class` on `element`.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    if on {
        let _ = list.add_1(class);
    } else {
        let _ = list.remove_1(class);
    }
}

/// An event listener detached on drop.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event` on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Attach a passive listener. The handler must never call
    /// `preventDefault`, which lets the browser keep scrolling off the
    /// main thread.
    pub(crate) fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}

/// Drives `tick` once per animation frame until it returns `false` or the
/// loop is dropped.
pub(crate) struct RafLoop {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame: Rc<Cell<i32>>,
    live: Rc<Cell<bool>>,
}

impl RafLoop {
    pub(crate) fn start(
        window: &Window,
        mut tick: impl FnMut() -> bool + 'static,
    ) -> Result<Self, WebError> {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame = Rc::new(Cell::new(0));
        let live = Rc::new(Cell::new(true));

        let closure = {
            let window = window.clone();
            let callback = Rc::clone(&callback);
            let frame = Rc::clone(&frame);
            let live = Rc::clone(&live);
            Closure::new(move || {
                if !live.get() || !tick() {
                    return;
                }
                let slot = callback.borrow();
                let Some(closure) = slot.as_ref() else {
                    return;
                };
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(next) => frame.set(next),
                    Err(err) => report("frame loop", &WebError::from(err)),
                }
            })
        };
        *callback.borrow_mut() = Some(closure);

        {
            let slot = callback.borrow();
            if let Some(closure) = slot.as_ref() {
                frame.set(window.request_animation_frame(closure.as_ref().unchecked_ref())?);
            }
        }

        Ok(Self {
            window: window.clone(),
            callback,
            frame,
            live,
        })
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.live.set(false);
        let _ = self.window.cancel_animation_frame(self.frame.get());
        // Breaks the closure's cycle through `callback` so it can be freed.
        self.callback.borrow_mut().take();
    }
}

/// Clamp a delay to the signed-millisecond range `setTimeout` accepts.
pub(crate) fn timeout_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Run `action` once after `delay`. The returned timer id can be passed to
/// `clearTimeout`; ownership of the closure moves to the JS side.
pub(crate) fn schedule_once(
    window: &Window,
    delay: Duration,
    action: impl FnOnce() + 'static,
) -> Result<i32, WebError> {
    let callback = Closure::once_into_js(action);
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_millis(delay),
    )?;
    Ok(id)
}
