use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::latch::{RevealConfig, RevealLatch};
use crate::error::{describe, SiteError};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Reports whether an element intersects the (margin-adjusted) viewport.
/// Disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    pub fn observe<F>(element: &Element, root_margin: &str, mut on_change: F) -> Result<Self, SiteError>
    where
        F: FnMut(bool) + 'static,
    {
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::Observer(describe(&e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Latched "has this element been on screen" flag for the node behind `node`.
///
/// If the observer cannot attach the flag stays `false` and the element keeps
/// its entry look.
#[hook]
pub fn use_in_view(node: NodeRef, config: RevealConfig) -> bool {
    let latch = use_reducer(move || RevealLatch::new(config));
    let settled = latch.is_settled();

    {
        let dispatcher = latch.dispatcher();
        use_effect_with_deps(
            move |(node, settled)| {
                let observer = if *settled {
                    None
                } else {
                    let attached = node
                        .cast::<Element>()
                        .ok_or_else(|| SiteError::ElementMissing("reveal target".to_string()))
                        .and_then(|element| {
                            VisibilityObserver::observe(&element, &config.root_margin(), move |visible| {
                                dispatcher.dispatch(visible)
                            })
                        });
                    match attached {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            log::warn!("Reveal disabled for element: {}", e);
                            None
                        }
                    }
                };
                move || drop(observer)
            },
            (node, settled),
        );
    }

    latch.is_revealed()
}

/// Delay before a freshly mounted component counts as mounted, so its entry
/// style is on screen before the settled style replaces it.
const MOUNT_SETTLE_MS: u32 = 20;

/// `false` on the first render, `true` shortly after. Drives entrance
/// animations that play on mount rather than on scroll.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MOUNT_SETTLE_MS, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *mounted
}
