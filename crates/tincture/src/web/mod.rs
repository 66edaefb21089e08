//! Browser capabilities and DOM wiring (feature `web`).
//!
//! | Capability       | Backed by                                         |
//! |------------------|---------------------------------------------------|
//! | [`DocumentStyle`]  | `document.documentElement.style.setProperty`    |
//! | [`LocalStorage`]   | `window.localStorage`                           |
//! | [`WindowScheme`]   | page globals `initScheme`, `applyScheme`, `toggleScheme` |
//! | [`ElementSignals`] | `CustomEvent` dispatched on the hook element    |
//!
//! [`mount`] assembles them into a controller, attaches it, and listens for
//! `phx:theme-change` on `window` and clicks on the element. From a
//! LiveView hook:
//!
//! ```js
//! import init, { ThemeHook } from "tincture";
//!
//! const ColorSchemeHook = {
//!   mounted() {
//!     this.theme = new ThemeHook(this.el);
//!     this.el.addEventListener("sync_theme", (e) => this.pushEvent("sync_theme", e.detail));
//!   },
//!   updated() { this.theme.updated(); },
//!   destroyed() { this.theme.free(); },
//! };
//! ```

mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, CustomEvent, CustomEventInit, Element, HtmlElement, Storage};

pub use logger::init_logger;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::env::{KeyValueStore, SchemeHost, SignalSink, StyleSink};
use crate::error::{Result, ThemeError};
use crate::event::SyncTheme;

/// A controller backed by the live document.
pub type WebController = ThemeController<DocumentStyle, LocalStorage, WindowScheme, ElementSignals>;

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| ThemeError::style("no global window"))
}

/// Inline style of the root element.
pub struct DocumentStyle {
    style: CssStyleDeclaration,
}

impl DocumentStyle {
    pub fn new() -> Result<Self> {
        let root = window()?
            .document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::style("document has no root element"))?;
        let root: HtmlElement = root
            .dyn_into()
            .map_err(|_| ThemeError::style("root element is not an HTML element"))?;
        Ok(Self {
            style: root.style(),
        })
    }
}

impl StyleSink for DocumentStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.style
            .set_property(name, value)
            .map_err(|e| ThemeError::style(js_message(&e)))
    }
}

/// `window.localStorage`. Absent when the browser disables storage.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %js_message(&err), "local storage is unavailable");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| ThemeError::storage("local storage is unavailable"))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::storage(js_message(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::storage(js_message(&e)))
    }
}

/// Calls the page's global scheme functions.
pub struct WindowScheme {
    window: web_sys::Window,
    init: String,
    apply: String,
    toggle: String,
}

impl WindowScheme {
    pub fn new() -> Result<Self> {
        Ok(Self {
            window: window()?,
            init: "initScheme".into(),
            apply: "applyScheme".into(),
            toggle: "toggleScheme".into(),
        })
    }

    /// Overrides the global function names.
    pub fn with_names(
        mut self,
        init: impl Into<String>,
        apply: impl Into<String>,
        toggle: impl Into<String>,
    ) -> Self {
        self.init = init.into();
        self.apply = apply.into();
        self.toggle = toggle.into();
        self
    }

    fn call(&self, name: &str, arg: Option<&JsValue>) {
        let func = js_sys::Reflect::get(&self.window, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        let Some(func) = func else {
            tracing::warn!(function = %name, "scheme function is not defined on window");
            return;
        };

        let result = match arg {
            Some(arg) => func.call1(&self.window, arg),
            None => func.call0(&self.window),
        };
        if let Err(err) = result {
            tracing::warn!(function = %name, error = %js_message(&err), "scheme function threw");
        }
    }
}

impl SchemeHost for WindowScheme {
    fn init_scheme(&mut self) {
        self.call(&self.init, None);
    }

    fn apply_scheme(&mut self, mode: &str) {
        self.call(&self.apply, Some(&JsValue::from_str(mode)));
    }

    fn toggle_scheme(&mut self) {
        self.call(&self.toggle, None);
    }
}

/// Dispatches signals as bubbling `CustomEvent`s on an element.
pub struct ElementSignals {
    target: Element,
}

impl ElementSignals {
    pub fn new(target: Element) -> Self {
        Self { target }
    }
}

impl SignalSink for ElementSignals {
    fn push_event(&mut self, name: &str, payload: Value) -> Result<()> {
        let detail = payload
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ThemeError::signal(e.to_string()))?;

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);

        let event = CustomEvent::new_with_event_init_dict(name, &init)
            .map_err(|e| ThemeError::signal(js_message(&e)))?;
        self.target
            .dispatch_event(&event)
            .map(|_| ())
            .map_err(|e| ThemeError::signal(js_message(&e)))
    }
}

/// A controller attached to an element, with its listeners.
///
/// Dropping it removes the listeners.
pub struct MountedTheme {
    controller: Rc<RefCell<WebController>>,
    _listeners: Vec<EventListener>,
}

impl MountedTheme {
    /// Re-applies saved state and pushes `sync_theme` if possible.
    pub fn refresh(&self) -> Option<SyncTheme> {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.refresh(),
            Err(_) => {
                tracing::warn!("theme controller busy, refresh skipped");
                None
            }
        }
    }

    pub fn controller(&self) -> Rc<RefCell<WebController>> {
        Rc::clone(&self.controller)
    }
}

/// Builds a controller for `element`, attaches it, and wires its listeners.
pub fn mount(element: &Element, config: ThemeConfig) -> Result<MountedTheme> {
    let window = window()?;
    let dom_event = config.events.theme_change_dom_event();

    let controller = ThemeController::new(
        DocumentStyle::new()?,
        LocalStorage::new(),
        WindowScheme::new()?,
        ElementSignals::new(element.clone()),
    )
    .with_config(config);
    let controller = Rc::new(RefCell::new(controller));
    controller.borrow_mut().attach();

    let on_change = {
        let controller = Rc::clone(&controller);
        EventListener::new(&window, dom_event, move |event| {
            let detail = event
                .dyn_ref::<CustomEvent>()
                .map(|e| e.detail())
                .unwrap_or(JsValue::NULL);
            let payload: Value = match serde_wasm_bindgen::from_value(detail) {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::warn!(error = %err, "theme change detail is not JSON");
                    return;
                }
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.handle_theme_change_value(payload);
                }
                Err(_) => tracing::warn!("theme controller busy, change dropped"),
            }
        })
    };

    let on_click = {
        let controller = Rc::clone(&controller);
        EventListener::new(element, "click", move |_| match controller.try_borrow_mut() {
            Ok(mut controller) => controller.on_click(),
            Err(_) => tracing::warn!("theme controller busy, click dropped"),
        })
    };

    Ok(MountedTheme {
        controller,
        _listeners: vec![on_change, on_click],
    })
}

/// JavaScript entry point for a LiveView hook.
#[wasm_bindgen]
pub struct ThemeHook {
    mounted: MountedTheme,
}

#[wasm_bindgen]
impl ThemeHook {
    /// Attaches to `element` with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element) -> std::result::Result<ThemeHook, JsValue> {
        init_logger(tracing_subscriber::filter::LevelFilter::INFO);
        let mounted = mount(&element, ThemeConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ThemeHook { mounted })
    }

    /// Call from the hook's `updated()` callback.
    pub fn updated(&self) {
        self.mounted.refresh();
    }
}
