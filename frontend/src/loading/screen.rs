use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};
use yew::prelude::*;

use super::world_map::{generate_dots, venue_glow, Dot, MapFrame, VENUE};
use crate::config;
use crate::error::{self, describe, SiteError};
use crate::reveal::{use_mounted, Animation, Easing, Reveal};
use crate::utils::listener::{listen_or_log, viewport_size};
use crate::utils::pointer::use_pointer_parallax;

const FALLBACK_VIEWPORT: (f64, f64) = (1200.0, 800.0);

fn arc_draw() -> Animation {
    Animation::trace().duration(2.0).delay(0.5).easing(Easing::POWER2_IN_OUT)
}

/// Dash offset that hides the undrawn part of a stroke `length` long.
fn arc_dashoffset(length: f64, elapsed_ms: f64) -> f64 {
    length * (1.0 - arc_draw().sample(elapsed_ms / 1000.0).scale)
}

/// Everything the frame loop redraws from.
struct MapScene {
    frame: MapFrame,
    dots: Vec<Dot>,
    /// Set once the arc is fully drawn for this frame size.
    arc_settled: Cell<bool>,
}

impl MapScene {
    fn build(canvas: &HtmlCanvasElement) -> Self {
        let (width, height) = viewport_size().unwrap_or(FALLBACK_VIEWPORT);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let frame = MapFrame::new(width, height);
        Self {
            frame,
            dots: generate_dots(&frame, js_sys::Math::random),
            arc_settled: Cell::new(false),
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, elapsed_ms: f64) -> Result<(), JsValue> {
        let (width, height) = (self.frame.center_x * 2.0, self.frame.center_y * 2.0);
        ctx.clear_rect(0.0, 0.0, width, height);

        for dot in &self.dots {
            ctx.begin_path();
            ctx.arc(dot.x, dot.y, 1.5, 0.0, TAU)?;
            ctx.set_fill_style_str(&format!(
                "rgba(207, 174, 112, {})",
                dot.opacity_at(elapsed_ms)
            ));
            ctx.fill();
        }

        let (vx, vy) = self.frame.project(VENUE);
        let glow = venue_glow(elapsed_ms);

        let gradient = ctx.create_radial_gradient(vx, vy, 0.0, vx, vy, 50.0)?;
        gradient.add_color_stop(0.0, &format!("rgba(255, 122, 24, {})", 0.4 * glow))?;
        gradient.add_color_stop(0.5, &format!("rgba(207, 174, 112, {})", 0.2 * glow))?;
        gradient.add_color_stop(1.0, "rgba(207, 174, 112, 0)")?;
        ctx.begin_path();
        ctx.arc(vx, vy, 50.0, 0.0, TAU)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();

        ctx.begin_path();
        ctx.arc(vx, vy, 4.0, 0.0, TAU)?;
        ctx.set_fill_style_str(&format!("rgba(255, 122, 24, {})", 0.8 + glow * 0.2));
        ctx.fill();
        Ok(())
    }

    /// Traces the flight arc up to the drawn fraction. Stops touching the
    /// path once it is complete, until a resize rebuilds the scene.
    fn update_arc(&self, path: &Element, elapsed_ms: f64) -> Result<(), JsValue> {
        if self.arc_settled.get() {
            return Ok(());
        }
        let arc = self.frame.arc();
        let length = arc.length();
        path.set_attribute("d", &arc.path())?;
        path.set_attribute("stroke-dasharray", &length.to_string())?;
        path.set_attribute("stroke-dashoffset", &arc_dashoffset(length, elapsed_ms).to_string())?;
        self.arc_settled.set(arc_draw().is_complete(elapsed_ms / 1000.0));
        Ok(())
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SiteError> {
    canvas
        .get_context("2d")
        .map_err(|e| SiteError::Canvas(describe(&e)))?
        .ok_or_else(|| SiteError::Canvas("no 2d context".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SiteError::Canvas("unexpected context type".to_string()))
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Starts the map's frame loop. The returned closure stops it.
fn start_map(canvas_ref: &NodeRef, arc_ref: &NodeRef) -> Result<Box<dyn FnOnce()>, SiteError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| SiteError::ElementMissing("loading canvas".to_string()))?;
    let ctx = context_2d(&canvas)?;
    let window = error::window()?;

    let scene = Rc::new(RefCell::new(MapScene::build(&canvas)));
    let resize = {
        let scene = scene.clone();
        listen_or_log("resize", move |_| {
            *scene.borrow_mut() = MapScene::build(&canvas);
        })
    };

    let arc_path = arc_ref.cast::<Element>();
    let started = js_sys::Date::now();
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    {
        let tick_handle = tick.clone();
        let pending = pending.clone();
        let window = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_: f64| {
            let elapsed = js_sys::Date::now() - started;
            let scene = scene.borrow();
            if let Err(e) = scene.draw(&ctx, elapsed) {
                gloo_console::error!(format!("World map frame failed: {}", describe(&e)));
            }
            if let Some(path) = &arc_path {
                if let Err(e) = scene.update_arc(path, elapsed) {
                    gloo_console::error!(format!("Arc update failed: {}", describe(&e)));
                }
            }
            if let Some(callback) = tick_handle.borrow().as_ref() {
                pending.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));
    }

    if let Some(callback) = tick.borrow().as_ref() {
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| SiteError::Canvas(describe(&e)))?;
        pending.set(Some(id));
    }

    Ok(Box::new(move || {
        if let Some(id) = pending.take() {
            if let Err(e) = window.cancel_animation_frame(id) {
                gloo_console::error!(format!("Failed to cancel map frame: {}", describe(&e)));
            }
        }
        // breaks the closure's reference to itself
        tick.borrow_mut().take();
        drop(resize);
    }))
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

/// Full-screen intro: a pulsing dotted world map with a flight arc to the
/// venue. Holds for a few seconds, fades out, then calls `on_complete`.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let visible = use_state(|| true);
    let canvas_ref = use_node_ref();
    let arc_ref = use_node_ref();
    let mounted = use_mounted();
    let (drift_x, drift_y) = use_pointer_parallax(50.0);

    {
        let canvas_ref = canvas_ref.clone();
        let arc_ref = arc_ref.clone();
        use_effect_with_deps(
            move |_| {
                let stop: Box<dyn FnOnce()> = start_map(&canvas_ref, &arc_ref).unwrap_or_else(|e| {
                    log::warn!("Loading map not drawn: {}", e);
                    Box::new(|| ())
                });
                move || stop()
            },
            (),
        );
    }

    {
        let visible = visible.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let exit: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let hold = {
                    let exit = exit.clone();
                    Timeout::new(config::LOADING_HOLD_MS, move || {
                        visible.set(false);
                        *exit.borrow_mut() = Some(Timeout::new(config::LOADING_EXIT_MS, move || {
                            log::info!("Loading screen finished");
                            on_complete.emit(());
                        }));
                    })
                };
                move || {
                    drop(hold);
                    exit.borrow_mut().take();
                }
            },
            (),
        );
    }

    let screen_class = classes!("loading-screen", (!*visible).then_some("loading-exit"));
    let drift = format!(
        "transform: translate3d({}px, {}px, 0); transition: transform 0.5s {};",
        drift_x,
        drift_y,
        Easing::POWER2_OUT.css()
    );

    html! {
        <div class={screen_class}>
            <div class="hud-frame">
                <span class="hud-corner tl"></span>
                <span class="hud-corner tr"></span>
                <span class="hud-corner bl"></span>
                <span class="hud-corner br"></span>
            </div>

            <div class="loading-map" style={drift}>
                <canvas ref={canvas_ref} class="loading-canvas"></canvas>
                <svg class="loading-arc">
                    <defs>
                        <linearGradient id="arcGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="rgba(207, 174, 112, 0.2)" />
                            <stop offset="50%" stop-color="rgba(255, 122, 24, 0.6)" />
                            <stop offset="100%" stop-color="rgba(255, 122, 24, 1)" />
                        </linearGradient>
                    </defs>
                    <path
                        ref={arc_ref}
                        fill="none"
                        stroke="url(#arcGradient)"
                        stroke-width="2"
                        stroke-linecap="round"
                    />
                </svg>
            </div>

            <Reveal
                revealed={mounted}
                animation={Animation::fade_up(20.0).delay(0.5)}
                class="loading-caption"
            >
                <p class="loading-text">{"Establishing Diplomatic Uplink…"}</p>
                <div class="loading-bar"><div class="loading-bar-fill"></div></div>
            </Reveal>

            <div class="loading-coords left">{"20.2961° N, 85.8245° E"}</div>
            <div class="loading-coords right">{"BHUBANESWAR, INDIA"}</div>
            <style>{LOADING_CSS}</style>
        </div>
    }
}

const LOADING_CSS: &str = r#"
    .loading-screen {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: var(--background);
        opacity: 1;
        transform: scale(1);
        transition: opacity 0.8s ease-in-out, transform 0.8s ease-in-out;
    }
    .loading-screen.loading-exit {
        opacity: 0;
        transform: scale(0.98);
        pointer-events: none;
    }
    .hud-frame {
        position: absolute;
        inset: 2rem;
        border: 1px solid rgba(207, 174, 112, 0.1);
        pointer-events: none;
    }
    .hud-corner {
        position: absolute;
        width: 1.5rem;
        height: 1.5rem;
        border-color: rgba(207, 174, 112, 0.4);
        border-style: solid;
        border-width: 0;
    }
    .hud-corner.tl { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
    .hud-corner.tr { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
    .hud-corner.bl { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
    .hud-corner.br { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }
    .loading-map {
        position: relative;
        width: 100%;
        height: 100%;
    }
    .loading-canvas,
    .loading-arc {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        pointer-events: none;
    }
    .loading-caption {
        position: absolute;
        bottom: 6rem;
        left: 0;
        right: 0;
        text-align: center;
    }
    .loading-text {
        font-family: var(--font-mono);
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(207, 174, 112, 0.8);
        margin-bottom: 1rem;
    }
    .loading-bar {
        width: 12rem;
        height: 1px;
        margin: 0 auto;
        overflow: hidden;
        background: rgba(207, 174, 112, 0.2);
    }
    .loading-bar-fill {
        height: 100%;
        background: var(--primary);
        animation: loading-sweep 2s linear infinite;
    }
    .loading-coords {
        position: absolute;
        bottom: 2rem;
        font-family: var(--font-mono);
        font-size: 10px;
        letter-spacing: 0.1em;
        color: var(--muted-faint);
    }
    .loading-coords.left { left: 2rem; }
    .loading-coords.right { right: 2rem; }
    @keyframes loading-sweep {
        from { transform: translateX(-100%); }
        to { transform: translateX(100%); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_stays_hidden_through_the_delay() {
        assert_eq!(arc_dashoffset(400.0, 0.0), 400.0);
        assert_eq!(arc_dashoffset(400.0, 500.0), 400.0);
    }

    #[test]
    fn arc_is_half_drawn_at_the_midpoint() {
        // power2.inOut is symmetric, so half the time draws half the arc
        assert!((arc_dashoffset(400.0, 1500.0) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn arc_settles_fully_drawn() {
        assert_eq!(arc_dashoffset(400.0, 2500.0), 0.0);
        assert!(arc_draw().is_complete(2.5));
        assert!(!arc_draw().is_complete(2.4));
    }
}
