use yew::prelude::*;

use crate::config;
use crate::modal::{Disclosure, DisclosureAction, Modal};
use crate::reveal::{use_in_view, Animation, RevealConfig, Reveal, Stagger};

#[derive(Debug, PartialEq)]
pub struct Committee {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    /// Card gradient, as a CSS class.
    pub tint: &'static str,
}

pub static COMMITTEES: [Committee; 4] = [
    Committee {
        id: "unhrc",
        name: "UNHRC",
        full_name: "United Nations Human Rights Council",
        icon: "fas fa-scale-balanced",
        description: "Discussing international human rights crises, accountability mechanisms, and humanitarian policy frameworks.",
        details: "The UNHRC is responsible for strengthening the promotion and protection of human rights around the globe. Delegates will address pressing humanitarian concerns and work towards comprehensive resolutions.",
        tint: "tint-amber",
    },
    Committee {
        id: "disec",
        name: "DISEC",
        full_name: "Disarmament and International Security Committee",
        icon: "fas fa-shield-halved",
        description: "Focused on global security challenges, arms regulation, and international peacekeeping.",
        details: "As the First Committee of the General Assembly, DISEC deals with disarmament, global challenges, and threats to peace. Delegates will negotiate on critical security matters affecting international stability.",
        tint: "tint-gold",
    },
    Committee {
        id: "aippm",
        name: "AIPPM",
        full_name: "All India Political Parties Meet",
        icon: "fas fa-building-columns",
        description: "A simulation of India's political landscape, encouraging consensus-building and strategic debate.",
        details: "This unique committee simulates the dynamics of Indian parliamentary democracy. Delegates will represent various political parties and engage in spirited debate on national issues.",
        tint: "tint-saffron",
    },
    Committee {
        id: "ip",
        name: "International Press",
        full_name: "International Press Corps",
        icon: "fas fa-camera",
        description: "Journalists, photographers, and analysts documenting proceedings with integrity and impact.",
        details: "The IP Corps plays a vital role in conference proceedings. Members will report on committee sessions, interview delegates, and produce journalistic content that captures the essence of Aeternum MUN.",
        tint: "tint-slate",
    },
];

pub fn committee_by_id(id: &str) -> Option<&'static Committee> {
    COMMITTEES.iter().find(|committee| committee.id == id)
}

/// Selection state for the committee dialog, one entry per card.
fn committee_disclosure() -> Disclosure {
    Disclosure::new(COMMITTEES.iter().map(|committee| committee.id))
}

const CARD_STAGGER: Stagger = Stagger::new(0.2, 0.1);

#[function_component(Committees)]
pub fn committees() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealConfig::section());
    let disclosure = use_reducer(committee_disclosure);

    let on_close = {
        let disclosure = disclosure.clone();
        Callback::from(move |_| disclosure.dispatch(DisclosureAction::Close))
    };

    let selected = disclosure.selected().and_then(committee_by_id);

    html! {
        <section id="committees" class="section committees">
            <style>{COMMITTEES_CSS}</style>
            <div class="glow glow-top-left"></div>
            <div class="glow glow-bottom-right"></div>

            <div ref={node} class="section-inner">
                <Reveal revealed={in_view} animation={Animation::fade_up(30.0)} class="section-header">
                    <span class="section-kicker">{"Our Forums"}</span>
                    <h2 class="section-title"><span class="text-gradient-gold">{"Committees"}</span></h2>
                    <p class="section-lead">
                        {"Four distinct arenas where diplomacy unfolds and future leaders emerge"}
                    </p>
                    <div class="section-rule"></div>
                </Reveal>

                <div class="committee-grid">
                    { for COMMITTEES.iter().enumerate().map(|(i, committee)| {
                        let onclick = {
                            let disclosure = disclosure.clone();
                            let id = committee.id;
                            Callback::from(move |_: MouseEvent| {
                                disclosure.dispatch(DisclosureAction::Select(Some(id)))
                            })
                        };
                        html! {
                            <Reveal
                                revealed={in_view}
                                animation={Animation::fade_up(30.0).duration(0.6).staggered(CARD_STAGGER, i)}
                                class="committee-card-wrap"
                                onclick={onclick}
                            >
                                <div class={classes!("committee-card", committee.tint)}>
                                    <span class="corner corner-top-left"></span>
                                    <span class="corner corner-bottom-right"></span>
                                    <i class={classes!(committee.icon, "committee-icon")}></i>
                                    <h3>{committee.name}</h3>
                                    <p class="committee-full-name">{committee.full_name}</p>
                                    <p class="committee-description">{committee.description}</p>
                                    <div class="committee-more">
                                        <span>{"Learn More"}</span>
                                        <span>{"→"}</span>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>

            <Modal
                open={disclosure.is_open()}
                on_close={on_close}
                title={selected.map(|c| c.name).unwrap_or_default()}
                subtitle={selected.map(|c| AttrValue::Static(c.full_name))}
            >
                if let Some(committee) = selected {
                    <i class={classes!(committee.icon, "committee-modal-icon")}></i>
                    <p class="committee-details">{committee.details}</p>
                    <div class="committee-modal-actions">
                        <a
                            href={config::get_registration_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-diplomatic"
                        >
                            {"Express Interest"}
                        </a>
                    </div>
                }
            </Modal>
        </section>
    }
}

const COMMITTEES_CSS: &str = r#"
.committees {
    background: var(--secondary-soft);
}

.glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
    pointer-events: none;
}

.glow-top-left {
    top: 0;
    left: 0;
    width: 16rem;
    height: 16rem;
    background: rgba(207, 174, 112, 0.05);
}

.glow-bottom-right {
    bottom: 0;
    right: 0;
    width: 24rem;
    height: 24rem;
    background: rgba(255, 122, 24, 0.05);
}

.committee-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    max-width: 64rem;
    margin: 0 auto;
}

.committee-card-wrap {
    cursor: pointer;
}

.committee-card {
    position: relative;
    overflow: hidden;
    height: 100%;
    padding: 2rem;
    border: 1px solid var(--border-soft);
    border-radius: 0.5rem;
    transition: transform 0.5s ease, border-color 0.5s ease, box-shadow 0.5s ease;
}

.committee-card:hover {
    transform: translateY(-0.5rem);
    border-color: rgba(207, 174, 112, 0.4);
    box-shadow: 0 20px 40px rgba(207, 174, 112, 0.1);
}

.tint-amber { background: linear-gradient(135deg, rgba(245, 158, 11, 0.2), rgba(217, 119, 6, 0.1)); }
.tint-gold { background: linear-gradient(135deg, rgba(207, 174, 112, 0.2), rgba(207, 174, 112, 0.1)); }
.tint-saffron { background: linear-gradient(135deg, rgba(255, 122, 24, 0.2), rgba(255, 122, 24, 0.1)); }
.tint-slate { background: linear-gradient(135deg, rgba(148, 163, 184, 0.2), rgba(100, 116, 139, 0.1)); }

.corner {
    position: absolute;
    width: 2rem;
    height: 2rem;
    opacity: 0;
    transition: opacity 0.5s ease;
}

.corner-top-left {
    top: 0;
    left: 0;
    border-top: 1px solid rgba(207, 174, 112, 0.3);
    border-left: 1px solid rgba(207, 174, 112, 0.3);
}

.corner-bottom-right {
    bottom: 0;
    right: 0;
    border-bottom: 1px solid rgba(207, 174, 112, 0.3);
    border-right: 1px solid rgba(207, 174, 112, 0.3);
}

.committee-card:hover .corner,
.committee-card:hover .committee-more {
    opacity: 1;
}

.committee-icon {
    font-size: 2.5rem;
    color: var(--primary);
    margin-bottom: 1.5rem;
    transition: transform 0.5s ease;
}

.committee-card:hover .committee-icon {
    transform: scale(1.1);
}

.committee-card h3 {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    margin: 0 0 0.5rem;
}

.committee-full-name {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: var(--muted);
    margin-bottom: 1rem;
}

.committee-description {
    color: var(--muted);
    line-height: 1.7;
}

.committee-more {
    display: flex;
    gap: 0.5rem;
    margin-top: 1.5rem;
    color: var(--primary);
    font-family: var(--font-mono);
    font-size: 0.875rem;
    opacity: 0;
    transition: opacity 0.3s ease;
}

.committee-modal-icon {
    font-size: 2rem;
    color: var(--primary);
    margin-bottom: 1rem;
}

.committee-details {
    color: var(--muted);
    line-height: 1.7;
}

.committee-modal-actions {
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border-soft);
}

.committee-modal-actions .btn-diplomatic {
    display: block;
    width: 100%;
    text-align: center;
    font-size: 0.75rem;
}

@media (max-width: 768px) {
    .committee-grid {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_can_open_the_dialog() {
        for committee in &COMMITTEES {
            let mut disclosure = committee_disclosure();
            assert!(disclosure.apply(DisclosureAction::Select(Some(committee.id))));
            assert_eq!(disclosure.selected().and_then(committee_by_id), Some(committee));
        }
        assert!(!committee_disclosure().apply(DisclosureAction::Select(Some("ecosoc"))));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(committee_by_id("disec").map(|c| c.name), Some("DISEC"));
        assert_eq!(
            committee_by_id("ip").map(|c| c.full_name),
            Some("International Press Corps")
        );
        assert!(committee_by_id("ecosoc").is_none());
    }

    #[test]
    fn selecting_a_card_opens_its_details() {
        let mut disclosure = committee_disclosure();
        assert!(disclosure.apply(DisclosureAction::Select(Some("aippm"))));
        let shown = disclosure.selected().and_then(committee_by_id);
        assert_eq!(shown.map(|c| c.full_name), Some("All India Political Parties Meet"));

        // a different card replaces the first
        assert!(disclosure.apply(DisclosureAction::Select(Some("unhrc"))));
        assert_eq!(disclosure.selected(), Some("unhrc"));

        assert!(disclosure.apply(DisclosureAction::Close));
        assert!(disclosure.selected().and_then(committee_by_id).is_none());
    }

    #[test]
    fn committee_cards_stagger_from_point_two() {
        let delays: Vec<f64> = (0..4).map(|i| CARD_STAGGER.delay_for(i)).collect();
        for (got, want) in delays.iter().zip([0.2, 0.3, 0.4, 0.5]) {
            assert!((got - want).abs() < 1e-9);
        }
    }
}
