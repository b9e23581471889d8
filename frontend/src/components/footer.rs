use yew::prelude::*;

use crate::config;
use crate::reveal::{Animation, InViewReveal, Stagger};

const CARD_STAGGER: Stagger = Stagger::new(0.0, 0.1);

const SOCIALS: [(&str, &str); 3] = [
    ("fab fa-instagram", "Instagram"),
    ("fab fa-x-twitter", "Twitter"),
    ("fab fa-linkedin-in", "LinkedIn"),
];

fn info_card(index: usize, icon: &'static str, title: &'static str, body: Html) -> Html {
    html! {
        <InViewReveal
            animation={Animation::fade_up(20.0).duration(0.6).staggered(CARD_STAGGER, index)}
            class="card-diplomatic footer-card"
        >
            <i class={classes!(icon, "footer-card-icon")}></i>
            <div>
                <h3>{title}</h3>
                <p>{body}</p>
            </div>
        </InViewReveal>
    }
}

/// Closing call to action, event facts and the bottom bar. Each block
/// reveals on its own as it scrolls in.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="register" class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-top-line"></div>

            <div class="section-inner">
                <InViewReveal animation={Animation::fade_up(30.0)} class="footer-cta">
                    <h2 class="section-title">
                        {"Ready to "}<span class="text-gradient-gold">{"Make Your Mark"}</span>{"?"}
                    </h2>
                    <p class="section-lead">
                        {"Join us in Bhubaneswar for two days of diplomatic excellence. Registration opens soon."}
                    </p>
                    <a
                        href={config::get_registration_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-gold"
                    >
                        {"Register Interest"}
                    </a>
                </InViewReveal>

                <div class="footer-grid">
                    { info_card(0, "fas fa-calendar", "Event Date", html! { {config::EVENT_DATES} }) }
                    { info_card(1, "fas fa-location-dot", "Venue", html! {
                        <>{config::VENUE}<br />{config::VENUE_CITY}</>
                    }) }
                    { info_card(2, "fas fa-envelope", "Contact", html! {
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    }) }
                </div>

                <div class="footer-bar">
                    <div class="footer-brand">
                        <span class="text-gradient-gold">{config::EVENT_NAME}</span>
                        <span class="footer-year">{config::EVENT_YEAR}</span>
                    </div>

                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|(icon, label)| html! {
                            <a href="#" aria-label={*label}><i class={*icon}></i></a>
                        }) }
                    </div>

                    <p class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", config::EVENT_YEAR, config::EVENT_NAME)}
                    </p>
                </div>
            </div>

            <div class="hud-label footer-hud-left">{"PROTOCOL.END"}</div>
            <div class="hud-label footer-hud-right">{"SYS.2026.AETERNUM"}</div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.footer {
    position: relative;
    padding: 6rem 0;
    background: rgba(17, 22, 38, 0.5);
}

.footer-top-line {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, rgba(207, 174, 112, 0.3), transparent);
}

.footer-cta {
    text-align: center;
    margin-bottom: 4rem;
}

.footer-cta .btn-gold {
    display: inline-block;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin-bottom: 4rem;
}

.footer-card {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    padding: 1.5rem;
}

.footer-card-icon {
    color: var(--primary);
    margin-top: 0.25rem;
}

.footer-card h3 {
    font-family: var(--font-serif);
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.footer-card p,
.footer-card a {
    color: var(--muted);
    margin: 0;
    text-decoration: none;
}

.footer-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding-top: 2rem;
    border-top: 1px solid var(--border-soft);
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-weight: 700;
}

.footer-year,
.footer-copyright {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    font-weight: 400;
    color: var(--muted);
    letter-spacing: 0.05em;
}

.footer-socials {
    display: flex;
    gap: 1rem;
}

.footer-socials a {
    width: 2.5rem;
    height: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--border-soft);
    border-radius: 50%;
    color: var(--muted);
    transition: color 0.3s ease, border-color 0.3s ease;
}

.footer-socials a:hover {
    color: var(--primary);
    border-color: rgba(207, 174, 112, 0.3);
}

.footer-hud-left {
    bottom: 1rem;
    left: 1rem;
}

.footer-hud-right {
    bottom: 1rem;
    right: 1rem;
}

@media (max-width: 768px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .footer-bar {
        flex-direction: column;
    }

    .footer .hud-label {
        display: none;
    }
}
"#;
