use yew::prelude::*;

use crate::components::about::About;
use crate::components::committees::Committees;
use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::message::Message;
use crate::components::navbar::Navbar;
use crate::config;
use crate::loading::LoadingScreen;
use crate::utils::anchor::{scroll_to_or_log, Anchor};

fn content_style(loading: bool) -> String {
    format!(
        "opacity: {}; transition: opacity {}ms ease;",
        if loading { 0 } else { 1 },
        config::CONTENT_FADE_MS
    )
}

/// Section named by the location hash, if any.
fn linked_section() -> Option<Anchor> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Anchor::from_name(&hash)
}

#[function_component(Home)]
pub fn home() -> Html {
    let loading = use_state(|| true);

    // Start at the top; the loading screen covers the page anyway
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Follow a deep link like /#faq once the page is visible
    use_effect_with_deps(
        move |loading| {
            if !*loading {
                if let Some(anchor) = linked_section() {
                    log::debug!("Deep link to {}", anchor.href());
                    scroll_to_or_log(anchor);
                }
            }
            || ()
        },
        *loading,
    );

    let on_complete = {
        let loading = loading.clone();
        Callback::from(move |_| loading.set(false))
    };

    html! {
        <>
            if *loading {
                <LoadingScreen on_complete={on_complete} />
            }
            <div class="page" style={content_style(*loading)}>
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Committees />
                    <Message />
                    <Faq />
                    <Footer />
                </main>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_hidden_while_loading() {
        assert_eq!(content_style(true), "opacity: 0; transition: opacity 500ms ease;");
        assert_eq!(content_style(false), "opacity: 1; transition: opacity 500ms ease;");
    }
}
