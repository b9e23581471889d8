//! Two-keyframe animations: an entry state, a settled state and the timing
//! between them. DOM elements get them as CSS transitions; frame loops
//! sample them directly.

/// Cubic bézier timing function, same control points as CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Easing {
    pub const EASE_OUT: Easing = Easing::bezier(0.0, 0.0, 0.58, 1.0);
    /// Cubic ease-out.
    pub const POWER2_OUT: Easing = Easing::bezier(0.33, 1.0, 0.68, 1.0);
    /// Cubic ease-in-out.
    pub const POWER2_IN_OUT: Easing = Easing::bezier(0.65, 0.0, 0.35, 1.0);

    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier_axis(s, self.y1, self.y2)
    }

    // Curve parameter whose x equals `x`. x(s) is monotonic for x1, x2 in [0, 1].
    fn solve_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = bezier_axis(s, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..64 {
            let value = bezier_axis(s, self.x1, self.x2);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

fn bezier_axis(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Visual state at one end of an animation. Offsets are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Keyframe {
    pub const SETTLED: Keyframe = Keyframe {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.x, self.y, self.scale
        )
    }

    pub fn lerp(&self, to: &Keyframe, t: f64) -> Keyframe {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Keyframe {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub entry: Keyframe,
    pub settled: Keyframe,
    /// Seconds.
    pub duration: f64,
    /// Seconds before the animation starts once triggered.
    pub delay: f64,
    pub easing: Easing,
}

impl Animation {
    fn from_entry(entry: Keyframe) -> Self {
        Self {
            entry,
            settled: Keyframe::SETTLED,
            duration: 0.8,
            delay: 0.0,
            easing: Easing::EASE_OUT,
        }
    }

    pub fn fade() -> Self {
        Self::from_entry(Keyframe {
            opacity: 0.0,
            ..Keyframe::SETTLED
        })
    }

    /// Rises into place from `distance` pixels below.
    pub fn fade_up(distance: f64) -> Self {
        Self::from_entry(Keyframe {
            opacity: 0.0,
            y: distance,
            ..Keyframe::SETTLED
        })
    }

    /// Slides in horizontally; negative offsets come from the left.
    pub fn slide_x(offset: f64) -> Self {
        Self::from_entry(Keyframe {
            opacity: 0.0,
            x: offset,
            ..Keyframe::SETTLED
        })
    }

    pub fn grow(from_scale: f64) -> Self {
        Self::from_entry(Keyframe {
            opacity: 0.0,
            scale: from_scale,
            ..Keyframe::SETTLED
        })
    }

    /// Scales up from nothing at full opacity. Frame loops read the sampled
    /// `scale` as the drawn fraction of a stroke.
    pub fn trace() -> Self {
        Self::from_entry(Keyframe {
            scale: 0.0,
            ..Keyframe::SETTLED
        })
    }

    /// Moves on the y axis only, fully opaque the whole time.
    pub fn drop_in(from_y: f64) -> Self {
        Self::from_entry(Keyframe {
            y: from_y,
            ..Keyframe::SETTLED
        })
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Same animation delayed for the `index`-th member of a group.
    pub fn staggered(self, stagger: Stagger, index: usize) -> Self {
        self.delay(stagger.delay_for(index))
    }

    /// Inline style for the element. The entry keyframe is rendered until
    /// `revealed`, so the element keeps its layout box before it animates.
    pub fn style(&self, revealed: bool) -> String {
        let frame = if revealed { &self.settled } else { &self.entry };
        let timing = format!("{}s {} {}s", self.duration, self.easing.css(), self.delay);
        format!(
            "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing}; will-change: opacity, transform;",
            frame.opacity,
            frame.transform(),
        )
    }

    /// Eased progress in `[0, 1]`, `elapsed` seconds after the trigger.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let t = if self.duration <= 0.0 {
            if elapsed >= self.delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        };
        self.easing.apply(t)
    }

    /// Where the animation is `elapsed` seconds after it was triggered.
    pub fn sample(&self, elapsed: f64) -> Keyframe {
        self.entry.lerp(&self.settled, self.progress(elapsed))
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Incremental delay for sequencing a group of reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn stagger_offsets_each_member() {
        let stagger = Stagger::new(0.4, 0.1);
        let delays: Vec<f64> = (0..3).map(|i| stagger.delay_for(i)).collect();
        assert!(close(delays[0], 0.4));
        assert!(close(delays[1], 0.5));
        assert!(close(delays[2], 0.6));
    }

    #[test]
    fn easing_hits_endpoints_and_is_monotonic() {
        for easing in [Easing::EASE_OUT, Easing::POWER2_OUT, Easing::POWER2_IN_OUT] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            let mut last = 0.0;
            for step in 1..=100 {
                let v = easing.apply(step as f64 / 100.0);
                assert!(v + 1e-9 >= last, "{:?} dipped at {}", easing, step);
                last = v;
            }
        }
    }

    #[test]
    fn symmetric_in_out_passes_through_the_middle() {
        assert!(close(Easing::POWER2_IN_OUT.apply(0.5), 0.5));
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        assert!(Easing::POWER2_OUT.apply(0.3) > 0.3);
        assert!(Easing::EASE_OUT.apply(0.3) > 0.3);
    }

    #[test]
    fn sample_holds_entry_during_delay_and_settles_after() {
        let anim = Animation::fade_up(30.0).duration(1.0).delay(0.5);
        assert_eq!(anim.sample(0.0), anim.entry);
        assert_eq!(anim.sample(0.5), anim.entry);
        assert_eq!(anim.sample(1.5), Keyframe::SETTLED);
        assert_eq!(anim.sample(10.0), Keyframe::SETTLED);
        assert!(anim.is_complete(1.5));
        assert!(!anim.is_complete(1.49));

        let midway = anim.sample(1.0);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.y > 0.0 && midway.y < 30.0);
    }

    #[test]
    fn zero_duration_jumps_at_the_delay() {
        let anim = Animation::fade().duration(0.0).delay(0.2);
        assert_eq!(anim.sample(0.1).opacity, 0.0);
        assert_eq!(anim.sample(0.2).opacity, 1.0);
    }

    #[test]
    fn style_renders_entry_until_revealed() {
        let anim = Animation::slide_x(-50.0).duration(0.8).delay(0.2);
        let hidden = anim.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(-50px, 0px, 0) scale(1)"));
        assert!(hidden.contains("0.8s cubic-bezier(0, 0, 0.58, 1) 0.2s"));

        let shown = anim.style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0) scale(1)"));
    }

    #[test]
    fn staggered_sets_the_delay() {
        let anim = Animation::fade_up(20.0).staggered(Stagger::new(0.2, 0.1), 3);
        assert!(close(anim.delay, 0.5));
    }

    #[test]
    fn grow_keeps_position_and_scales() {
        let anim = Animation::grow(0.8);
        assert_eq!(anim.entry.scale, 0.8);
        assert_eq!(anim.entry.y, 0.0);
        assert_eq!(anim.settled.scale, 1.0);
    }

    #[test]
    fn trace_only_moves_the_scale() {
        let anim = Animation::trace().duration(2.0).delay(0.5);
        let midway = anim.sample(1.5);
        assert_eq!(midway.opacity, 1.0);
        assert!(midway.scale > 0.0 && midway.scale < 1.0);
        assert_eq!(anim.sample(0.2).scale, 0.0);
        assert_eq!(anim.sample(2.5), Keyframe::SETTLED);
    }
}
