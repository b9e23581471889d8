use yew::prelude::*;

use crate::config;
use crate::countdown::{browser_target, format_unit, use_countdown};
use crate::reveal::{use_mounted, Animation, Easing, Reveal, Stagger};
use crate::utils::pointer::use_pointer_parallax;

/// Pre-title, title, year, date line, countdown, call to action.
const HERO_STAGGER: Stagger = Stagger::new(0.8, 0.2);
const GRID_PARALLAX_DIVISOR: f64 = 30.0;

const LATITUDES: [f64; 5] = [20.0, 35.0, 50.0, 65.0, 80.0];
const LONGITUDES: [f64; 6] = [15.0, 30.0, 45.0, 60.0, 75.0, 90.0];

fn grid_style((x, y): (f64, f64)) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0); transition: transform 0.8s {};",
        x,
        y,
        Easing::POWER2_OUT.css()
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let target = *use_memo(|_| browser_target(config::countdown_target()), ());
    let remaining = use_countdown(target);
    let mounted = use_mounted();
    let drift = use_pointer_parallax(GRID_PARALLAX_DIVISOR);

    let staged = |anim: Animation, step: usize| anim.staggered(HERO_STAGGER, step);

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>

            <div class="hero-grid" style={grid_style(drift)}>
                <svg class="hero-globe" viewBox="0 0 100 100" preserveAspectRatio="none">
                    { for LATITUDES.iter().map(|y| html! {
                        <line x1="0" x2="100" y1={y.to_string()} y2={y.to_string()} />
                    }) }
                    { for LONGITUDES.iter().map(|x| html! {
                        <line x1={x.to_string()} x2={x.to_string()} y1="0" y2="100" />
                    }) }
                </svg>
            </div>
            <div class="hero-vignette"></div>

            <div class="hud-label hud-top-left">{"SYS.INIT//2026"}</div>
            <div class="hud-label hud-top-right">{"DIPLOMATIC.PROTOCOL.ACTIVE"}</div>

            <Reveal
                revealed={mounted}
                animation={Animation::fade_up(30.0).duration(1.0).delay(0.5)}
                class="hero-content"
            >
                <Reveal tag="p" revealed={mounted} animation={staged(Animation::fade(), 0)} class="hero-pretitle">
                    {"Model United Nations"}
                </Reveal>
                <Reveal tag="h1" revealed={mounted} animation={staged(Animation::fade_up(20.0), 1)} class="hero-title">
                    <span class="text-gradient-gold">{"AETERNUM"}</span>
                </Reveal>
                <Reveal tag="p" revealed={mounted} animation={staged(Animation::fade(), 2)} class="hero-year">
                    {"MUN "}{config::EVENT_YEAR}
                </Reveal>
                <Reveal revealed={mounted} animation={staged(Animation::fade(), 3)} class="hero-details">
                    <span><i class="fas fa-calendar"></i>{config::EVENT_DATES}</span>
                    <span class="hero-divider"></span>
                    <span>
                        <i class="fas fa-location-dot"></i>
                        {format!("{}, {}", config::VENUE, config::VENUE_CITY)}
                    </span>
                </Reveal>

                <Reveal revealed={mounted} animation={staged(Animation::fade_up(20.0), 4)} class="countdown">
                    { for remaining.cells().iter().map(|(value, label)| html! {
                        <div class="countdown-cell">
                            <span class="countdown-value">{format_unit(*value)}</span>
                            <span class="countdown-label">{*label}</span>
                        </div>
                    }) }
                </Reveal>

                <Reveal revealed={mounted} animation={staged(Animation::fade_up(20.0), 5)} class="hero-cta">
                    <a
                        href={config::get_registration_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-gold"
                    >
                        {"Register Now"}
                    </a>
                </Reveal>
            </Reveal>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    padding: 8rem 1.5rem 4rem;
}

.hero-grid {
    position: absolute;
    inset: -40px;
    opacity: 0.15;
    pointer-events: none;
}

.hero-globe {
    width: 100%;
    height: 100%;
}

.hero-globe line {
    stroke: var(--primary);
    stroke-width: 0.1;
}

.hero-vignette {
    position: absolute;
    inset: 0;
    background: radial-gradient(ellipse at center, transparent 0%, var(--background) 75%);
    pointer-events: none;
}

.hud-top-left {
    top: 7rem;
    left: 2rem;
}

.hud-top-right {
    top: 7rem;
    right: 2rem;
}

.hero-content {
    position: relative;
    z-index: 1;
    text-align: center;
    max-width: 900px;
}

.hero-pretitle {
    font-family: var(--font-mono);
    font-size: 0.875rem;
    letter-spacing: 0.4em;
    text-transform: uppercase;
    color: var(--muted);
    margin-bottom: 1.5rem;
}

.hero-title {
    font-family: var(--font-serif);
    font-size: clamp(3.5rem, 12vw, 9rem);
    font-weight: 400;
    letter-spacing: 0.05em;
    line-height: 1;
    margin: 0;
}

.hero-year {
    font-family: var(--font-serif);
    font-size: clamp(1.5rem, 4vw, 2.5rem);
    letter-spacing: 0.3em;
    color: var(--foreground);
    margin: 1rem 0 2rem;
}

.hero-details {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
    color: var(--muted);
    margin-bottom: 3rem;
}

.hero-details i {
    color: var(--primary);
    margin-right: 0.5rem;
}

.hero-divider {
    width: 1px;
    height: 1rem;
    background: var(--border-soft);
}

.countdown {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 3rem;
}

.countdown-cell {
    display: flex;
    flex-direction: column;
    align-items: center;
    min-width: 5rem;
    padding: 1rem;
    border: 1px solid var(--border-soft);
    background: var(--card);
}

.countdown-value {
    font-family: var(--font-mono);
    font-size: clamp(1.75rem, 5vw, 3rem);
    color: var(--primary);
}

.countdown-label {
    font-family: var(--font-mono);
    font-size: 0.625rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted);
    margin-top: 0.25rem;
}

@media (max-width: 640px) {
    .hud-label {
        display: none;
    }

    .countdown {
        gap: 0.5rem;
    }

    .countdown-cell {
        min-width: 4rem;
        padding: 0.75rem 0.5rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_elements_are_staged_in_order() {
        let delays: Vec<f64> = (0..6).map(|i| HERO_STAGGER.delay_for(i)).collect();
        for (got, want) in delays.iter().zip([0.8, 1.0, 1.2, 1.4, 1.6, 1.8]) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }

    #[test]
    fn grid_follows_the_pointer() {
        let style = grid_style((-20.0, 5.0));
        assert!(style.starts_with("transform: translate3d(-20px, 5px, 0);"));
        assert!(style.contains("0.8s cubic-bezier(0.33, 1, 0.68, 1)"));
    }
}
