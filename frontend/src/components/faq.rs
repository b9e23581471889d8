use yew::prelude::*;

use crate::reveal::{use_in_view, Animation, RevealConfig, Reveal, Stagger};

pub struct Contact {
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
}

pub enum Answer {
    Text(&'static str),
    Contacts(&'static [Contact]),
}

pub struct Question {
    pub question: &'static str,
    pub answer: Answer,
}

const CONTACTS: [Contact; 4] = [
    Contact {
        name: "Pratyush Kumar Samal",
        role: "Secretary General",
        phone: "7381320823",
    },
    Contact {
        name: "Shihan Jaiswal",
        role: "Director General",
        phone: "+91 99381 39166",
    },
    Contact {
        name: "Priyansi Pati",
        role: "Deputy Secretary General",
        phone: "+91 63711 92447",
    },
    Contact {
        name: "Angelina Samantaray",
        role: "Charge, D. Affairs",
        phone: "+91 97780 24511",
    },
];

pub static QUESTIONS: [Question; 6] = [
    Question {
        question: "Who can participate in Aeternum MUN?",
        answer: Answer::Text(
            "Students from schools and universities worldwide with an interest in diplomacy, international relations, and global affairs are welcome to participate. We encourage delegates of all experience levels to join us.",
        ),
    },
    Question {
        question: "Is prior MUN experience required?",
        answer: Answer::Text(
            "No prior experience is required. We provide comprehensive training resources, committee guides, and preparatory materials to help first-time delegates feel confident and prepared.",
        ),
    },
    Question {
        question: "What are the registration fees?",
        answer: Answer::Text(
            "Registration fees will be released with the official registration opening. Early bird discounts will be available shortly.",
        ),
    },
    Question {
        question: "What should I bring to the conference?",
        answer: Answer::Text(
            "Delegates should wear attire notified by the organizing committee, their position papers, research materials, and enthusiasm. Detailed packing guidelines will be shared closer to the event. Please follow the rules specified by the Organizing Team.",
        ),
    },
    Question {
        question: "How are committees and country assignments made?",
        answer: Answer::Text(
            "Country assignments are based on preference, experience level, and delegation size. We strive to accommodate preferences while ensuring balanced and meaningful debate in all committees.",
        ),
    },
    Question {
        question: "How do I contact the Aeternum MUN team?",
        answer: Answer::Contacts(&CONTACTS),
    },
];

/// Single-open accordion: opening one item closes the others, clicking the
/// open item collapses it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

const ITEM_STAGGER: Stagger = Stagger::new(0.3, 0.1);

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    ontoggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", "card-diplomatic", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <i class="fas fa-chevron-down toggle-icon"></i>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn render_answer(answer: &Answer) -> Html {
    match answer {
        Answer::Text(text) => html! { <p>{*text}</p> },
        Answer::Contacts(contacts) => html! {
            <div class="faq-contacts">
                { for contacts.iter().map(|contact| html! {
                    <div class="faq-contact">
                        <p class="faq-contact-name">
                            {contact.name}{" "}<span class="faq-contact-role">{format!("({})", contact.role)}</span>
                        </p>
                        <p class="faq-contact-phone">{"📞 "}{contact.phone}</p>
                    </div>
                }) }
            </div>
        },
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealConfig::section());
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section faq">
            <style>{FAQ_CSS}</style>
            <div class="faq-dots"></div>

            <div ref={node} class="section-inner">
                <Reveal revealed={in_view} animation={Animation::fade_up(30.0)} class="section-header">
                    <span class="section-kicker">{"Have Questions?"}</span>
                    <h2 class="section-title">
                        {"Frequently Asked "}<span class="text-gradient-gold">{"Questions"}</span>
                    </h2>
                    <div class="section-rule"></div>
                </Reveal>

                <Reveal revealed={in_view} animation={Animation::fade_up(20.0).delay(0.2)} class="faq-list">
                    { for QUESTIONS.iter().enumerate().map(|(i, item)| {
                        let ontoggle = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggle(*open, i)))
                        };
                        html! {
                            <Reveal
                                revealed={in_view}
                                animation={Animation::fade_up(20.0).duration(0.5).staggered(ITEM_STAGGER, i)}
                            >
                                <FaqItem question={item.question} is_open={*open == Some(i)} ontoggle={ontoggle}>
                                    { render_answer(&item.answer) }
                                </FaqItem>
                            </Reveal>
                        }
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
.faq {
    background: var(--secondary-soft);
}

.faq-dots {
    position: absolute;
    inset: 0;
    opacity: 0.05;
    background-image: radial-gradient(circle at 2px 2px, var(--primary) 1px, transparent 0);
    background-size: 40px 40px;
    pointer-events: none;
}

.faq-list {
    max-width: 48rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.faq-item {
    padding: 0 1.5rem;
    transition: border-color 0.3s ease;
}

.faq-item:hover {
    border-color: rgba(207, 174, 112, 0.3);
}

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1.25rem 0;
    background: none;
    border: none;
    color: var(--foreground);
    font-family: var(--font-serif);
    font-size: 1.125rem;
    text-align: left;
    cursor: pointer;
}

.faq-question:hover {
    color: var(--primary);
}

.toggle-icon {
    font-size: 0.875rem;
    transition: transform 0.2s ease;
}

.faq-item.open .toggle-icon {
    transform: rotate(180deg);
}

.faq-answer {
    display: none;
    padding-bottom: 1.25rem;
    color: var(--muted);
    line-height: 1.7;
}

.faq-item.open .faq-answer {
    display: block;
}

.faq-answer p {
    margin: 0;
}

.faq-contacts {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.faq-contact-name {
    font-weight: 600;
    color: var(--foreground);
}

.faq-contact-role {
    font-size: 0.875rem;
    font-weight: 400;
    color: var(--muted);
}

.faq-contact-phone {
    color: var(--primary);
    font-weight: 500;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }

    #[test]
    fn last_answer_lists_the_team() {
        let Some(last) = QUESTIONS.last() else {
            panic!("no questions");
        };
        match &last.answer {
            Answer::Contacts(contacts) => {
                assert_eq!(contacts.len(), 4);
                assert_eq!(contacts[0].role, "Secretary General");
            }
            Answer::Text(_) => panic!("expected contacts"),
        }
        assert!(QUESTIONS[..5].iter().all(|q| matches!(q.answer, Answer::Text(_))));
    }
}
