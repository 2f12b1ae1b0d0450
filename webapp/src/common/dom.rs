use anyhow::Result;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, EventTarget, HtmlElement, Window};

use portfolio_common::{LayoutQuery, SectionGeometry, Unsubscribe, Viewport};

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

// attach a listener for as long as the returned guard lives
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Result<Unsubscribe> {
    let callback = Closure::<dyn FnMut()>::new(handler);

    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_error)?;

    let target = target.clone();
    Ok(Unsubscribe::new(move || {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!(error = ?err, event, "failed to detach event listener");
        }
    }))
}

pub fn on_scroll(handler: impl FnMut() + 'static) -> Result<Unsubscribe> {
    let window = window()?;
    listen(&window, "scroll", handler)
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self> {
        Ok(BrowserViewport { window: window()? })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    // an unreadable width is treated as desktop, which keeps the bar visible
    fn width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }
}

// section geometry straight from the rendered document
pub struct DomLayout {
    document: Document,
}

impl DomLayout {
    pub fn new() -> Result<Self> {
        let document = window()?
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        Ok(DomLayout { document })
    }
}

impl LayoutQuery for DomLayout {
    fn section_geometry(&self, anchor: &str) -> Option<SectionGeometry> {
        let element = self
            .document
            .query_selector(anchor)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionGeometry {
            top: element.offset_top().into(),
            height: element.offset_height().into(),
        })
    }
}
