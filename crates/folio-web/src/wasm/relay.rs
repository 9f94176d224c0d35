#![forbid(unsafe_code)]

//! Contact form relay: gathers the fields, posts the JSON envelope to the
//! email service and renders the outcome.
//!
//! The engine's [`ContactForm`] state machine guards against double
//! submits and decides the control label and status line; this module
//! mirrors that state onto the DOM around the async send.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ContactForm, StatusTone};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Event, FormData, Headers, HtmlButtonElement, HtmlElement, HtmlFormElement, Request,
    RequestInit, Response, Window,
};

use crate::config;
use crate::wire::{EmailRequest, TemplateParams};

use super::dom::{self, Listener, WebError};

/// Status text colors for the two tones.
const SUCCESS_COLOR: &str = "#10b981";
const FAILURE_COLOR: &str = "#ef4444";

pub(crate) struct RelayHandle {
    _submit: Listener,
}

struct FormPanel {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    status: HtmlElement,
}

impl FormPanel {
    /// Mirror the engine state onto the controls.
    fn render(&self, state: &ContactForm) {
        self.button.set_disabled(!state.control_enabled());
        self.button.set_text_content(Some(state.control_label()));
        match state.status() {
            Some((message, tone)) => {
                self.status.set_text_content(Some(message));
                let style = self.status.style();
                let _ = style.set_property("color", tone_color(tone));
                let _ = style.set_property("display", "block");
            }
            None => {
                let _ = self.status.style().set_property("display", "none");
            }
        }
    }
}

const fn tone_color(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => SUCCESS_COLOR,
        StatusTone::Error => FAILURE_COLOR,
    }
}

/// Wire the contact form, or `None` unless the form, its submit control
/// and its status line are all on the page.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<RelayHandle>, WebError> {
    let (Some(form), Some(button), Some(status)) = (
        dom::by_id::<HtmlFormElement>(document, "contact-form"),
        dom::by_id::<HtmlButtonElement>(document, "form-submit-btn"),
        dom::by_id::<HtmlElement>(document, "form-status"),
    ) else {
        return Ok(None);
    };

    let panel = Rc::new(FormPanel {
        form,
        button,
        status,
    });
    let state = Rc::new(RefCell::new(ContactForm::new()));

    let submit = {
        let view = window.clone();
        let ui = Rc::clone(&panel);
        let state = Rc::clone(&state);
        Listener::new(&panel.form, "submit", move |event: Event| {
            event.prevent_default();
            if !state.borrow_mut().begin() {
                return;
            }
            ui.render(&state.borrow());

            let params = match gather(&ui.form) {
                Ok(params) => params,
                Err(err) => {
                    dom::report("contact form", &err);
                    state.borrow_mut().fail();
                    ui.render(&state.borrow());
                    return;
                }
            };

            let view = view.clone();
            let ui = Rc::clone(&ui);
            let state = Rc::clone(&state);
            spawn_local(async move {
                let outcome = deliver(&view, EmailRequest::new(params)).await;
                let mut form_state = state.borrow_mut();
                match outcome {
                    Ok(()) => {
                        dom::note("contact form", "message relayed");
                        form_state.succeed();
                        ui.form.reset();
                    }
                    Err(err) => {
                        dom::report("contact form", &err);
                        form_state.fail();
                    }
                }
                ui.render(&form_state);
            });
        })?
    };

    Ok(Some(RelayHandle { _submit: submit }))
}

/// Read the three template fields out of the live form.
fn gather(form: &HtmlFormElement) -> Result<TemplateParams, WebError> {
    let data = FormData::new_with_form(form)?;
    Ok(TemplateParams {
        from_name: field(&data, "from_name"),
        from_email: field(&data, "from_email"),
        message: field(&data, "message"),
    })
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// POST the envelope; any non-2xx answer counts as failure.
async fn deliver(window: &Window, envelope: EmailRequest) -> Result<(), WebError> {
    let body = serde_json::to_string(&envelope)?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(config::EMAIL_ENDPOINT, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if response.ok() {
        Ok(())
    } else {
        Err(WebError::Http(response.status()))
    }
}
