use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::listener::{listen_or_log, viewport_size};

/// Offset of a decorative layer that drifts with the pointer: the pointer's
/// distance from the viewport centre, scaled down by `divisor`.
pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64), divisor: f64) -> (f64, f64) {
    if divisor == 0.0 {
        return (0.0, 0.0);
    }
    (
        (pointer.0 - viewport.0 / 2.0) / divisor,
        (pointer.1 - viewport.1 / 2.0) / divisor,
    )
}

/// Follows the pointer across the window; `(0, 0)` until it first moves.
#[hook]
pub fn use_pointer_parallax(divisor: f64) -> (f64, f64) {
    let offset = use_state(|| (0.0, 0.0));

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |divisor| {
                let divisor = *divisor;
                let listener = listen_or_log("mousemove", move |e| {
                    let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some(viewport) = viewport_size() {
                        let pointer = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                        offset.set(parallax_offset(pointer, viewport, divisor));
                    }
                });
                move || drop(listener)
            },
            divisor,
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_has_no_offset() {
        assert_eq!(parallax_offset((600.0, 400.0), (1200.0, 800.0), 30.0), (0.0, 0.0));
    }

    #[test]
    fn corner_pointer_is_scaled_down() {
        assert_eq!(parallax_offset((0.0, 0.0), (1200.0, 800.0), 30.0), (-20.0, -40.0 / 3.0));
        assert_eq!(parallax_offset((1200.0, 800.0), (1200.0, 800.0), 50.0), (12.0, 8.0));
    }

    #[test]
    fn zero_divisor_is_inert() {
        assert_eq!(parallax_offset((10.0, 10.0), (100.0, 100.0), 0.0), (0.0, 0.0));
    }
}
