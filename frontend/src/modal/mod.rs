use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::utils::listener::listen_or_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureAction {
    /// Show the item with this id, replacing whatever is shown. `None` closes.
    Select(Option<&'static str>),
    Close,
}

/// At most one selected item out of a fixed catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    catalog: Vec<&'static str>,
    selected: Option<&'static str>,
}

impl Disclosure {
    pub fn new(catalog: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            catalog: catalog.into_iter().collect(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: DisclosureAction) -> bool {
        let next = match action {
            DisclosureAction::Close | DisclosureAction::Select(None) => None,
            DisclosureAction::Select(Some(id)) => match self.catalog.iter().find(|known| **known == id) {
                Some(known) => Some(*known),
                None => {
                    log::debug!("Ignoring selection of unknown item {:?}", id);
                    return false;
                }
            },
        };
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }
}

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: DisclosureAction) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog overlay. Closes on the close button, a backdrop click or Escape.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open
                    .then(|| {
                        listen_or_log("keydown", move |e| {
                            let escape = e
                                .dyn_ref::<KeyboardEvent>()
                                .map_or(false, |key| key.key() == "Escape");
                            if escape {
                                on_close.emit(());
                            }
                        })
                    })
                    .flatten();
                move || drop(listener)
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <div class="modal-header">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    if let Some(subtitle) = &props.subtitle {
                        <p class="modal-subtitle">{subtitle.clone()}</p>
                    }
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>{MODAL_CSS}</style>
        </div>
    }
}

const MODAL_CSS: &str = r#"
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 60;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
        background: rgba(6, 8, 14, 0.8);
        backdrop-filter: blur(4px);
        animation: modal-fade 0.2s ease-out;
    }
    .modal-panel {
        position: relative;
        width: 100%;
        max-width: 32rem;
        padding: 2rem;
        border: 1px solid var(--border-soft);
        border-radius: 0.5rem;
        background: var(--card);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: var(--muted);
        font-size: 1.5rem;
        cursor: pointer;
    }
    .modal-close:hover {
        color: var(--primary);
    }
    .modal-title {
        font-family: var(--font-serif);
        font-size: 1.5rem;
        margin: 0;
    }
    .modal-subtitle {
        margin: 0.25rem 0 0;
        font-family: var(--font-mono);
        font-size: 0.7rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: var(--muted);
    }
    .modal-body {
        margin-top: 1rem;
        color: var(--muted);
        line-height: 1.7;
    }
    @keyframes modal-fade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["unhrc", "disec", "aippm", "ip"];

    #[test]
    fn starts_closed() {
        let d = Disclosure::new(CATALOG.iter().copied());
        assert!(!d.is_open());
        assert_eq!(d.selected(), None);
    }

    #[test]
    fn second_selection_replaces_the_first() {
        let mut d = Disclosure::new(CATALOG.iter().copied());
        assert!(d.apply(DisclosureAction::Select(Some("unhrc"))));
        assert!(d.apply(DisclosureAction::Select(Some("disec"))));
        assert_eq!(d.selected(), Some("disec"));
    }

    #[test]
    fn selecting_none_closes() {
        let mut d = Disclosure::new(CATALOG.iter().copied());
        d.apply(DisclosureAction::Select(Some("unhrc")));
        assert!(d.apply(DisclosureAction::Select(None)));
        assert!(!d.is_open());
    }

    #[test]
    fn close_clears_the_selection() {
        let mut d = Disclosure::new(CATALOG.iter().copied());
        d.apply(DisclosureAction::Select(Some("ip")));
        assert!(d.apply(DisclosureAction::Close));
        assert_eq!(d.selected(), None);
        assert!(!d.apply(DisclosureAction::Close));
    }

    #[test]
    fn unknown_items_are_ignored() {
        let mut d = Disclosure::new(CATALOG.iter().copied());
        assert!(!d.apply(DisclosureAction::Select(Some("ecosoc"))));
        assert!(!d.is_open());

        d.apply(DisclosureAction::Select(Some("aippm")));
        assert!(!d.apply(DisclosureAction::Select(Some("ecosoc"))));
        assert_eq!(d.selected(), Some("aippm"));
    }

    #[test]
    fn reselecting_the_open_item_is_a_no_op() {
        let d = Rc::new(Disclosure::new(CATALOG.iter().copied())).reduce(DisclosureAction::Select(Some("disec")));
        let again = d.clone().reduce(DisclosureAction::Select(Some("disec")));
        assert!(Rc::ptr_eq(&d, &again));
    }
}
