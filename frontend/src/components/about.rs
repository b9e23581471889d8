use yew::prelude::*;

use crate::reveal::{use_in_view, Animation, RevealConfig, Reveal, Stagger};

const FEATURES: [&str; 3] = ["Immersive Simulations", "Expert Chairs", "Networking Opportunities"];

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        icon: "fas fa-users",
        value: "200+",
        label: "Delegates Expected",
    },
    Stat {
        icon: "fas fa-globe",
        value: "4",
        label: "Committees",
    },
    Stat {
        icon: "fas fa-award",
        value: "2",
        label: "Days of Diplomacy",
    },
    Stat {
        icon: "fas fa-bullseye",
        value: "1",
        label: "Shared Vision",
    },
];

const FEATURE_STAGGER: Stagger = Stagger::new(0.4, 0.1);
const STAT_STAGGER: Stagger = Stagger::new(0.5, 0.1);

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealConfig::section());

    html! {
        <section id="about" class="section about">
            <style>{ABOUT_CSS}</style>
            <div ref={node} class="section-inner">
                <Reveal revealed={in_view} animation={Animation::fade_up(30.0)} class="section-header">
                    <span class="section-kicker">{"About the Conference"}</span>
                    <h2 class="section-title">
                        {"Where "}<span class="text-gradient-gold">{"Diplomacy"}</span>{" Meets Excellence"}
                    </h2>
                    <div class="section-rule"></div>
                </Reveal>

                <div class="about-grid">
                    <Reveal revealed={in_view} animation={Animation::slide_x(-50.0).delay(0.2)} class="about-copy">
                        <p>
                            {"Aeternum MUN is a premier Model United Nations conference that brings together \
                              future diplomats, leaders, and policymakers to engage in high-level debate, \
                              negotiation, and international cooperation."}
                        </p>
                        <p>
                            {"Hosted in the heart of Odisha at the prestigious World Skill Centre, the \
                              conference fosters critical thinking, diplomatic realism, and global awareness \
                              through immersive committee simulations."}
                        </p>

                        <div class="about-features">
                            { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <Reveal
                                    revealed={in_view}
                                    animation={Animation::slide_x(-20.0).duration(0.5).staggered(FEATURE_STAGGER, i)}
                                    class="about-feature"
                                >
                                    <span class="diamond"></span>
                                    <span>{*feature}</span>
                                </Reveal>
                            }) }
                        </div>
                    </Reveal>

                    <Reveal revealed={in_view} animation={Animation::slide_x(50.0).delay(0.3)} class="about-stats">
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <Reveal
                                revealed={in_view}
                                animation={Animation::fade_up(20.0).duration(0.5).staggered(STAT_STAGGER, i)}
                                class="card-diplomatic about-stat"
                            >
                                <i class={classes!(stat.icon, "about-stat-icon")}></i>
                                <span class="about-stat-value">{stat.value}</span>
                                <span class="about-stat-label">{stat.label}</span>
                            </Reveal>
                        }) }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.about-copy > p {
    color: var(--muted);
    line-height: 1.8;
    margin-bottom: 1.5rem;
}

.about-features {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.about-feature {
    display: flex;
    gap: 0.75rem;
    align-items: center;
}

.about-stat-icon {
    font-size: 1.75rem;
    color: var(--primary);
    margin-bottom: 1rem;
    transition: transform 0.3s ease;
}

.about-stat:hover .about-stat-icon {
    transform: scale(1.1);
}

.about-stats {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.about-stat {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    padding: 2rem 1rem;
}

.about-stat-value {
    font-family: var(--font-serif);
    font-size: 2rem;
    font-weight: 700;
    line-height: 1;
    margin-bottom: 0.5rem;
}

.about-stat-label {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: var(--muted);
    margin-top: 0.75rem;
}

@media (max-width: 900px) {
    .about-grid {
        grid-template-columns: 1fr;
        gap: 3rem;
    }
}
"#;
