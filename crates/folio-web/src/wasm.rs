#![forbid(unsafe_code)]

//! Browser wiring for the portfolio page.
//!
//! Each submodule wires one page component: it looks up its markup,
//! connects the engine state from `folio-core` to DOM events and timers,
//! and returns a handle that detaches everything on drop. [`PortfolioApp`]
//! composes those handles behind the JS-facing surface.

mod constellation;
mod dom;
mod menu;
mod observers;
mod realtime;
mod relay;
mod scrolling;
mod theme;
mod typewriter;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use self::dom::WebError;

/// Everything the running page owns. Dropping it detaches every listener,
/// stops the animation loops and closes the counter stream.
struct Components {
    _theme: Option<theme::ThemeHandle>,
    _constellation: Option<constellation::ConstellationHandle>,
    _typewriter: Option<typewriter::TypewriterHandle>,
    _scroll: Option<scrolling::ScrollHandle>,
    _menu: Option<menu::MenuHandle>,
    _reveal: Option<observers::RevealHandle>,
    _stats: Option<observers::StatsHandle>,
    _sections: Option<observers::SectionsHandle>,
    _relay: Option<relay::RelayHandle>,
    _downloads: Option<realtime::DownloadsHandle>,
}

/// Interactive layer of the portfolio page.
///
/// The host constructs one instance once the document has parsed, calls
/// [`PortfolioApp::start`], and may call [`PortfolioApp::shutdown`] to
/// detach everything again (hot reload, tests).
#[wasm_bindgen]
pub struct PortfolioApp {
    components: Option<Components>,
}

#[wasm_bindgen]
impl PortfolioApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { components: None }
    }

    /// Wire every component whose markup is on the page.
    ///
    /// Absent markup means the component is skipped; a component that
    /// fails to wire is reported to the console and skipped too. Only a
    /// missing `window` or `document` is fatal. Calling `start` again
    /// while running is a no-op.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.components.is_some() {
            return Ok(());
        }
        let window = dom::window()?;
        let document = dom::document(&window)?;

        self.components = Some(Components {
            _theme: attach("theme", theme::install(&window, &document)),
            _constellation: attach("constellation", constellation::install(&window, &document)),
            _typewriter: attach("typed text", typewriter::install(&window, &document)),
            _scroll: attach("scroll chrome", scrolling::install(&window, &document)),
            _menu: attach("mobile menu", menu::install(&window, &document)),
            _reveal: attach("reveal", observers::install_reveal(&window, &document)),
            _stats: attach("stat counters", observers::install_stats(&window, &document)),
            _sections: attach(
                "section tracking",
                observers::install_sections(&window, &document),
            ),
            _relay: attach("contact form", relay::install(&window, &document)),
            _downloads: attach("download counter", realtime::install(&window, &document)),
        });
        Ok(())
    }

    /// Detach every component and release the page.
    pub fn shutdown(&mut self) {
        self.components = None;
    }
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new()
    }
}

/// One component failing to wire must not take the rest of the page down.
fn attach<T>(component: &str, outcome: Result<Option<T>, WebError>) -> Option<T> {
    match outcome {
        Ok(Some(handle)) => Some(handle),
        Ok(None) => {
            dom::note(component, "markup absent, skipped");
            None
        }
        Err(err) => {
            dom::report(component, &err);
            None
        }
    }
}
