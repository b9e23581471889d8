use yew::prelude::*;

use crate::config;
use crate::reveal::{use_in_view, Animation, RevealConfig, Reveal};

/// The Secretary General's welcome.
#[function_component(Message)]
pub fn message() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealConfig::section());

    html! {
        <section id="message" class="section message">
            <style>{MESSAGE_CSS}</style>
            <div class="message-backdrop"></div>
            <div class="ring ring-outer"></div>
            <div class="ring ring-inner"></div>

            <div ref={node} class="section-inner">
                <Reveal revealed={in_view} animation={Animation::fade_up(30.0)} class="message-body">
                    <span class="section-kicker">{"From Our Leadership"}</span>

                    <Reveal
                        revealed={in_view}
                        animation={Animation::grow(0.8).duration(0.6).delay(0.2)}
                        class="message-quote-icon"
                    >
                        <i class="fas fa-quote-left"></i>
                    </Reveal>

                    <Reveal
                        tag="blockquote"
                        revealed={in_view}
                        animation={Animation::fade_up(20.0).delay(0.3)}
                        class="message-quote"
                    >
                        {"\"Aeternum MUN stands as a platform where ideas are challenged, diplomacy is refined, \
                          and leadership is forged. As delegates engage with complex global issues, we \
                          encourage integrity, collaboration, and vision. We look forward to welcoming you \
                          to a conference rooted in "}
                        <span class="text-gradient-gold">{"excellence"}</span>
                        {" and "}
                        <span class="text-gradient-gold">{"purpose"}</span>
                        {".\""}
                    </Reveal>

                    <Reveal revealed={in_view} animation={Animation::fade_up(20.0).delay(0.5)}>
                        <div class="message-rule"></div>
                        <p class="message-signature">{"Secretary General"}</p>
                        <p class="message-event">{format!("{} {}", config::EVENT_NAME, config::EVENT_YEAR)}</p>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

const MESSAGE_CSS: &str = r#"
.message {
    overflow: hidden;
}

.message-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, var(--background), var(--secondary-soft), var(--background));
}

.ring {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    border-radius: 50%;
    pointer-events: none;
}

.ring-outer {
    width: 600px;
    height: 600px;
    border: 1px solid rgba(207, 174, 112, 0.05);
}

.ring-inner {
    width: 400px;
    height: 400px;
    border: 1px solid rgba(207, 174, 112, 0.1);
}

.message-body {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.message-quote-icon {
    margin: 2rem 0;
    font-size: 3rem;
    color: rgba(207, 174, 112, 0.4);
}

.message-quote {
    font-family: var(--font-serif);
    font-size: clamp(1.25rem, 2.5vw, 1.875rem);
    line-height: 1.6;
    margin: 0 0 2rem;
}

.message-rule {
    width: 4rem;
    height: 1px;
    margin: 0 auto 1.5rem;
    background: var(--primary);
}

.message-signature {
    font-family: var(--font-signature);
    font-size: 1.875rem;
    color: var(--primary);
    margin-bottom: 0.5rem;
}

.message-event {
    font-family: var(--font-mono);
    font-size: 0.875rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
}
"#;
