use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser bindings. None of these are fatal for the page:
/// callers log them and leave the affected element in its resting state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` is not mounted")]
    ElementMissing(String),
    #[error("visibility observer could not attach: {0}")]
    Observer(String),
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: String, reason: String },
}

impl SiteError {
    pub fn listener(event: &str, err: JsValue) -> Self {
        SiteError::Listener {
            event: event.to_string(),
            reason: describe(&err),
        }
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}
