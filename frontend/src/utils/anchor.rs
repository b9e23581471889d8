use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::listener::listen_or_log;
use crate::error::{self, SiteError};

/// In-page sections that can be navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    About,
    Committees,
    Message,
    Faq,
    Register,
}

impl Anchor {
    /// Order of the links in the navigation bar.
    pub const NAV: [Anchor; 4] = [Anchor::About, Anchor::Committees, Anchor::Message, Anchor::Faq];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Committees => "committees",
            Anchor::Message => "message",
            Anchor::Faq => "faq",
            Anchor::Register => "register",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Committees => "Committees",
            Anchor::Message => "Message",
            Anchor::Faq => "FAQ",
            Anchor::Register => "Register",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Accepts `"faq"` as well as `"#faq"`.
    pub fn from_name(name: &str) -> Option<Anchor> {
        let id = name.trim().trim_start_matches('#');
        [
            Anchor::About,
            Anchor::Committees,
            Anchor::Message,
            Anchor::Faq,
            Anchor::Register,
        ]
        .into_iter()
        .find(|anchor| anchor.id().eq_ignore_ascii_case(id))
    }
}

/// Smooth-scrolls the section into view without touching the location.
pub fn scroll_to(anchor: Anchor) -> Result<(), SiteError> {
    let element = error::document()?
        .get_element_by_id(anchor.id())
        .ok_or_else(|| SiteError::ElementMissing(anchor.href()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_or_log(anchor: Anchor) {
    if let Err(e) = scroll_to(anchor) {
        log::warn!("Cannot scroll to {}: {}", anchor.href(), e);
    }
}

/// Whether the page is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let update = move || {
                    if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(y > threshold);
                    }
                };
                update();
                let listener = listen_or_log("scroll", move |_| update());
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_with_or_without_hash() {
        assert_eq!(Anchor::from_name("faq"), Some(Anchor::Faq));
        assert_eq!(Anchor::from_name("#register"), Some(Anchor::Register));
        assert_eq!(Anchor::from_name(" #About "), Some(Anchor::About));
        assert_eq!(Anchor::from_name("pricing"), None);
    }

    #[test]
    fn hrefs_round_trip() {
        for anchor in Anchor::NAV {
            assert_eq!(Anchor::from_name(&anchor.href()), Some(anchor));
        }
    }

    #[test]
    fn nav_leaves_registration_to_the_button() {
        assert!(!Anchor::NAV.contains(&Anchor::Register));
    }
}
