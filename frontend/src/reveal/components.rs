use yew::prelude::*;

use super::animation::Animation;
use super::latch::RevealConfig;
use super::observer::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Usually the owning section's in-view flag.
    pub revealed: bool,
    pub animation: Animation,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in an element that animates from the entry keyframe
/// to the settled keyframe when `revealed` turns true.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <@{props.tag.to_string()}
            class={props.class.clone()}
            style={props.animation.style(props.revealed)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct InViewRevealProps {
    pub animation: Animation,
    #[prop_or_default]
    pub config: RevealConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Like [`Reveal`] but with its own observer, for elements that should
/// trigger individually rather than with their section.
#[function_component(InViewReveal)]
pub fn in_view_reveal(props: &InViewRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), props.config);

    html! {
        <div ref={node} class={props.class.clone()} style={props.animation.style(revealed)}>
            { for props.children.iter() }
        </div>
    }
}
