use yew::prelude::*;

use crate::config;
use crate::reveal::{use_mounted, Animation, Reveal, Stagger};
use crate::utils::anchor::{scroll_to_or_log, use_scrolled_past, Anchor};

const MENU_STAGGER: Stagger = Stagger::new(0.0, 0.1);

fn menu_item() -> Animation {
    Animation::fade_up(20.0).duration(0.3)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_scrolled_past(config::NAV_SCROLL_THRESHOLD);
    let mounted = use_mounted();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = |anchor: Anchor| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_or_log(anchor);
        })
    };

    let go_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <>
            <style>{NAVBAR_CSS}</style>
            <Reveal
                tag="nav"
                revealed={mounted}
                animation={Animation::drop_in(-100.0).delay(0.2)}
                class={classes!("navbar", scrolled.then_some("scrolled"))}
            >
                <div class="nav-inner">
                    <a href="#" class="nav-logo" onclick={go_top}>
                        <span class="nav-logo-name">{"AETERNUM"}</span>
                        <span class="nav-logo-tag">{"MUN"}</span>
                    </a>

                    <div class="nav-links">
                        { for Anchor::NAV.iter().map(|anchor| html! {
                            <a href={anchor.href()} class="nav-link" onclick={go_to(*anchor)}>
                                {anchor.label()}
                            </a>
                        }) }
                        <a
                            href={config::get_registration_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-gold nav-register"
                        >
                            {"Register Now"}
                        </a>
                    </div>

                    <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
            </Reveal>

            <div class={classes!("mobile-menu", menu_open.then_some("open"))}>
                <div class="mobile-menu-links">
                    { for Anchor::NAV.iter().enumerate().map(|(i, anchor)| html! {
                        <Reveal
                            tag="a"
                            revealed={*menu_open}
                            animation={menu_item().staggered(MENU_STAGGER, i)}
                            class="mobile-link"
                            onclick={go_to(*anchor)}
                        >
                            {anchor.label()}
                        </Reveal>
                    }) }
                    <Reveal
                        revealed={*menu_open}
                        animation={menu_item().staggered(MENU_STAGGER, Anchor::NAV.len())}
                    >
                        <a
                            href={config::get_registration_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-gold"
                        >
                            {"Register Now"}
                        </a>
                    </Reveal>
                </div>
            </div>
        </>
    }
}

const NAVBAR_CSS: &str = r#"
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.5rem 0;
    transition: background-color 0.5s ease, padding 0.5s ease, backdrop-filter 0.5s ease;
}

.navbar.scrolled {
    padding: 1rem 0;
    background: rgba(10, 14, 26, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border-soft);
}

.nav-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    align-items: baseline;
    gap: 0.5rem;
    text-decoration: none;
}

.nav-logo-name {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    letter-spacing: 0.1em;
    color: var(--primary);
}

.nav-logo-tag {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    color: var(--muted);
    letter-spacing: 0.2em;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    color: var(--muted);
    text-decoration: none;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: var(--primary);
}

.nav-toggle {
    display: none;
    background: none;
    border: none;
    color: var(--foreground);
    font-size: 1.25rem;
    cursor: pointer;
}

.mobile-menu {
    position: fixed;
    inset: 0;
    z-index: 40;
    background: rgba(10, 14, 26, 0.98);
    backdrop-filter: blur(12px);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.mobile-menu.open {
    opacity: 1;
    pointer-events: auto;
}

.mobile-menu-links {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100%;
    gap: 2rem;
}

.mobile-link {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    color: var(--foreground);
    cursor: pointer;
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }

    .nav-toggle {
        display: block;
        position: relative;
        z-index: 60;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_items_rise_into_place() {
        let item = menu_item();
        assert_eq!(item.entry.opacity, 0.0);
        assert_eq!((item.entry.x, item.entry.y), (0.0, 20.0));
        assert_eq!(item.duration, 0.3);
    }

    #[test]
    fn register_button_follows_the_links() {
        let last = menu_item().staggered(MENU_STAGGER, Anchor::NAV.len());
        assert!((last.delay - 0.4).abs() < 1e-9);
    }
}
