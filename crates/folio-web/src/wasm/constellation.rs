#![forbid(unsafe_code)]

//! Particle constellation on the background canvas.
//!
//! The engine owns all particle state; this module sizes the canvas to the
//! viewport, steps the field once per animation frame and strokes the
//! result. Colors follow the site palette: cyan/purple dots with indigo
//! links.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::ParticleField;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom::{self, Listener, RafLoop, WebError};

pub(crate) struct ConstellationHandle {
    _resize: Listener,
    _frames: RafLoop,
}

/// Wire the constellation, or `None` when the page has no canvas.
pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<ConstellationHandle>, WebError> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, "particles-canvas") else {
        return Ok(None);
    };
    let context = canvas
        .get_context("2d")?
        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(WebError::NoCanvasContext)?;

    let (width, height) = viewport(window);
    fit_canvas(&canvas, width, height);
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        js_sys::Date::now() as u64,
    )));

    let resize = {
        let view = window.clone();
        let canvas = canvas.clone();
        let field = Rc::clone(&field);
        Listener::new(window, "resize", move |_event| {
            let (width, height) = viewport(&view);
            fit_canvas(&canvas, width, height);
            field.borrow_mut().resize(width, height);
        })?
    };

    let frames = {
        let field = Rc::clone(&field);
        RafLoop::start(window, move || {
            let mut field = field.borrow_mut();
            field.step();
            draw(&context, &field);
            true
        })?
    };

    Ok(Some(ConstellationHandle {
        _resize: resize,
        _frames: frames,
    }))
}

fn viewport(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    context.clear_rect(
        0.0,
        0.0,
        f64::from(field.width()),
        f64::from(field.height()),
    );

    for particle in field.particles() {
        context.begin_path();
        let _ = context.arc(
            f64::from(particle.x),
            f64::from(particle.y),
            f64::from(particle.radius),
            0.0,
            TAU,
        );
        context.set_fill_style_str(&format!(
            "hsla({}, 80%, 65%, {})",
            particle.hue, particle.opacity
        ));
        context.fill();
    }

    for link in field.links() {
        context.begin_path();
        context.move_to(f64::from(link.ax), f64::from(link.ay));
        context.line_to(f64::from(link.bx), f64::from(link.by));
        context.set_stroke_style_str(&format!("rgba(99, 102, 241, {})", link.alpha));
        context.set_line_width(0.6);
        context.stroke();
    }
}
