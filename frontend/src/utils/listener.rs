use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::error::{self, SiteError};

/// An event listener on `window` that unregisters itself when dropped.
///
/// Effects keep one of these alive and drop it from their destructor, so a
/// remounted component never ends up with two handlers.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = error::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SiteError::listener(event, e))?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            gloo_console::error!(format!("Failed to remove {} listener: {:?}", self.event, e));
        }
    }
}

/// Registers a listener or logs why it could not be registered.
pub fn listen_or_log<F>(event: &'static str, handler: F) -> Option<WindowListener>
where
    F: FnMut(Event) + 'static,
{
    match WindowListener::new(event, handler) {
        Ok(listener) => Some(listener),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Inner size of the browser window in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
