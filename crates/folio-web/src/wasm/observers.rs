#![forbid(unsafe_code)]

//! Intersection-observer wiring: reveal-on-scroll, stat count-up and
//! active-section tracking.
//!
//! The engine owns the firing contracts ([`RevealGate`],
//! [`SectionTracker`]) and the construction profiles; this module builds
//! the platform observers from those profiles and owns their callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::countup::DEFAULT_SUFFIX;
use folio_core::{
    CountUp, ObserverProfile, REVEAL_PROFILE, RevealGate, SECTIONS_PROFILE, STATS_PROFILE,
    SectionTracker,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};
use web_time::Instant;

use super::dom::{self, RafLoop, WebError};

/// An intersection observer disconnected on drop.
struct Watcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Watcher {
    /// Build an observer from `profile` and start watching `targets`.
    fn watch(
        profile: ObserverProfile,
        targets: &[Element],
        handler: impl FnMut(js_sys::Array, IntersectionObserver) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::new(handler);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(f64::from(profile.threshold)));
        options.set_root_margin(profile.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) struct RevealHandle {
    _watcher: Watcher,
}

/// Wire reveal-on-scroll, or `None` when nothing on the page is marked
/// `.reveal`.
pub(crate) fn install_reveal(
    window: &Window,
    document: &Document,
) -> Result<Option<RevealHandle>, WebError> {
    let targets = dom::query_all(document, ".reveal");
    if targets.is_empty() {
        return Ok(None);
    }

    let watcher = {
        let view = window.clone();
        let elements = targets.clone();
        let mut gate = RevealGate::new(targets.len());
        Watcher::watch(
            REVEAL_PROFILE,
            &targets,
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for (position, entry) in entries.iter().enumerate() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(index) = elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let Some(delay) = gate.admit(index, position) else {
                        continue;
                    };
                    observer.unobserve(&target);
                    let staggered = dom::schedule_once(&view, delay, move || {
                        dom::set_class(&target, "visible", true);
                    });
                    if let Err(err) = staggered {
                        dom::report("reveal", &err);
                    }
                }
            },
        )?
    };

    Ok(Some(RevealHandle { _watcher: watcher }))
}

pub(crate) struct StatsHandle {
    _watcher: Watcher,
    /// Keeps in-flight count-up drivers alive until teardown.
    _drivers: Rc<RefCell<Vec<RafLoop>>>,
}

/// Wire the stat counters, or `None` when no element carries a
/// `data-count` target.
pub(crate) fn install_stats(
    window: &Window,
    document: &Document,
) -> Result<Option<StatsHandle>, WebError> {
    let targets = dom::query_all(document, ".stat-number[data-count]");
    if targets.is_empty() {
        return Ok(None);
    }

    let drivers: Rc<RefCell<Vec<RafLoop>>> = Rc::new(RefCell::new(Vec::new()));

    let watcher = {
        let view = window.clone();
        let drivers = Rc::clone(&drivers);
        Watcher::watch(
            STATS_PROFILE,
            &targets,
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    match start_count_up(&view, &target) {
                        Ok(Some(driver)) => drivers.borrow_mut().push(driver),
                        Ok(None) => {}
                        Err(err) => dom::report("stat counter", &err),
                    }
                }
            },
        )?
    };

    Ok(Some(StatsHandle {
        _watcher: watcher,
        _drivers: drivers,
    }))
}

/// Animate one stat element from zero to its `data-count` target.
///
/// Elements whose `data-count` does not parse are left untouched.
fn start_count_up(window: &Window, element: &Element) -> Result<Option<RafLoop>, WebError> {
    let Some(target) = element
        .get_attribute("data-count")
        .and_then(|raw| raw.parse::<u64>().ok())
    else {
        return Ok(None);
    };
    let suffix = element
        .get_attribute("data-suffix")
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_owned());

    let mut counter = CountUp::new(target).suffix(suffix);
    let element = element.clone();
    let mut last = Instant::now();
    let driver = RafLoop::start(window, move || {
        let now = Instant::now();
        counter.tick(now.duration_since(last));
        last = now;
        element.set_text_content(Some(&counter.label()));
        !counter.is_complete()
    })?;
    Ok(Some(driver))
}

pub(crate) struct SectionsHandle {
    _watcher: Watcher,
}

/// Wire active-link highlighting, or `None` without both sections and nav
/// links.
pub(crate) fn install_sections(
    _window: &Window,
    document: &Document,
) -> Result<Option<SectionsHandle>, WebError> {
    let sections = dom::query_all(document, "section[id]");
    let nav_links = dom::query_all(document, ".nav-links a");
    if sections.is_empty() || nav_links.is_empty() {
        return Ok(None);
    }

    let mut tracker = SectionTracker::new();
    let watcher = Watcher::watch(
        SECTIONS_PROFILE,
        &sections,
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(id) = entry.target().get_attribute("id") else {
                    continue;
                };
                if tracker.enter(&id) {
                    highlight(&nav_links, &id);
                }
            }
        },
    )?;

    Ok(Some(SectionsHandle { _watcher: watcher }))
}

/// Point the nav highlight at the link whose fragment matches `id`.
fn highlight(nav_links: &[Element], id: &str) {
    let fragment = format!("#{id}");
    for link in nav_links {
        let active = link.get_attribute("href").as_deref() == Some(fragment.as_str());
        dom::set_class(link, "active", active);
    }
}
