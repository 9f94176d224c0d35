#![forbid(unsafe_code)]

//! Shared download counter over the realtime database's REST surface.
//!
//! Count changes stream in over an `EventSource`; the click-side
//! increment is a conditional write (entity tag + `if-match`) retried a
//! few times under contention. The database serializes the writes, so
//! losing a race only means another visitor bumped the counter first —
//! the retry re-reads and lands on top of their value.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::DownloadCounter;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, EventSource, Headers, MessageEvent, Request, RequestInit, Response,
    Window,
};

use crate::wire;

use super::dom::{self, Listener, WebError};

/// Conditional-write attempts before giving up on an increment.
const MAX_WRITE_ATTEMPTS: u32 = 5;

/// Status the database answers when the entity tag no longer matches.
const PRECONDITION_FAILED: u16 = 412;

pub(crate) struct DownloadsHandle {
    source: EventSource,
    _put: Listener,
    _patch: Listener,
    _open: Listener,
    _error: Listener,
    _click: Listener,
}

impl Drop for DownloadsHandle {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Wire the counter, or `None` unless both the download control and the
/// count label are on the page.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<DownloadsHandle>, WebError> {
    let (Some(button), Some(label)) = (
        dom::by_id::<Element>(document, "download-resume-btn"),
        dom::by_id::<Element>(document, "download-count"),
    ) else {
        return Ok(None);
    };

    let source = EventSource::new(&wire::counter_url())?;
    let counter = Rc::new(RefCell::new(DownloadCounter::new()));

    let put = stream_listener(&source, "put", Rc::clone(&counter), label.clone())?;
    let patch = stream_listener(&source, "patch", Rc::clone(&counter), label.clone())?;

    let open = Listener::new(&source, "open", move |_event| {
        dom::note("download counter", "stream open");
    })?;

    let error = Listener::new(&source, "error", move |_event| {
        // The browser reconnects on its own; just surface the hiccup.
        dom::report("download counter", &WebError::StreamInterrupted);
    })?;

    let click = {
        let view = window.clone();
        Listener::new(&button, "click", move |_event| {
            let view = view.clone();
            spawn_local(async move {
                if let Err(err) = bump(&view).await {
                    dom::report("download counter", &err);
                }
            });
        })?
    };

    Ok(Some(DownloadsHandle {
        source,
        _put: put,
        _patch: patch,
        _open: open,
        _error: error,
        _click: click,
    }))
}

/// Apply `put`/`patch` frames from the stream to the projected count and
/// re-render the label.
fn stream_listener(
    source: &EventSource,
    event: &'static str,
    counter: Rc<RefCell<DownloadCounter>>,
    label: Element,
) -> Result<Listener, WebError> {
    Listener::new(source, event, move |event: Event| {
        let Ok(message) = event.dyn_into::<MessageEvent>() else {
            return;
        };
        let Some(payload) = message.data().as_string() else {
            return;
        };
        match wire::parse_stream_frame(&payload) {
            Ok(frame) => {
                let mut counter = counter.borrow_mut();
                counter.apply_snapshot(frame.data);
                label.set_text_content(Some(&counter.label()));
            }
            Err(err) => dom::report("download counter", &WebError::from(err)),
        }
    })
}

/// Increment the counter with a compare-and-swap loop over entity tags.
async fn bump(window: &Window) -> Result<(), WebError> {
    let url = wire::counter_url();
    for _ in 0..MAX_WRITE_ATTEMPTS {
        let (etag, current) = read_with_etag(window, &url).await?;
        let next = DownloadCounter::increment(current);
        if write_if_match(window, &url, next, &etag).await? {
            return Ok(());
        }
    }
    Err(WebError::Contended)
}

async fn read_with_etag(window: &Window, url: &str) -> Result<(String, Option<i64>), WebError> {
    let headers = Headers::new()?;
    headers.set(wire::ETAG_REQUEST_HEADER, "true")?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_headers(headers.as_ref());

    let request = Request::new_with_str_and_init(url, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(WebError::Http(response.status()));
    }

    let etag = response
        .headers()
        .get("ETag")?
        .ok_or(WebError::MissingEtag)?;
    let body = JsFuture::from(response.text()?).await?;
    let count = wire::parse_count(&body.as_string().unwrap_or_default())?;
    Ok((etag, count))
}

/// `true` when stored; `false` when the entity tag no longer matched and
/// the caller should re-read and retry.
async fn write_if_match(
    window: &Window,
    url: &str,
    next: i64,
    etag: &str,
) -> Result<bool, WebError> {
    let headers = Headers::new()?;
    headers.set(wire::ETAG_CONDITION_HEADER, etag)?;

    let init = RequestInit::new();
    init.set_method("PUT");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&wire::count_body(next)));

    let request = Request::new_with_str_and_init(url, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if response.status() == PRECONDITION_FAILED {
        return Ok(false);
    }
    if !response.ok() {
        return Err(WebError::Http(response.status()));
    }
    Ok(true)
}
