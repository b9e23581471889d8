//! Geometry of the loading screen's dotted world map.
//!
//! Map coordinates are normalised: x spans one map width and y one map
//! height, both centred on the viewport.

use std::f64::consts::TAU;

/// Rectangle of the map that gets sprinkled with dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Relative dot density; 1.0 is [`DOTS_PER_REGION`] dots.
    pub density: f64,
}

const fn region(x_min: f64, x_max: f64, y_min: f64, y_max: f64, density: f64) -> Region {
    Region {
        x_min,
        x_max,
        y_min,
        y_max,
        density,
    }
}

pub const DOTS_PER_REGION: f64 = 80.0;

pub const REGIONS: [Region; 7] = [
    // North America
    region(-0.45, -0.15, -0.35, 0.1, 0.6),
    // South America
    region(-0.25, -0.05, 0.1, 0.45, 0.5),
    // Europe
    region(-0.05, 0.15, -0.35, -0.1, 0.8),
    // Africa
    region(-0.1, 0.2, -0.1, 0.35, 0.5),
    // Asia
    region(0.1, 0.5, -0.4, 0.15, 0.7),
    // India, drawn denser than the rest
    region(0.2, 0.3, -0.05, 0.15, 1.2),
    // Australia
    region(0.35, 0.5, 0.2, 0.4, 0.4),
];

/// The venue, highlighted with a pulsing glow.
pub const VENUE: (f64, f64) = (0.25, 0.05);
const ARC_ORIGIN: (f64, f64) = (-0.3, -0.1);
const ARC_CONTROL: (f64, f64) = (0.0, -0.4);

const MAX_MAP_WIDTH: f64 = 900.0;

impl Region {
    pub fn dot_count(&self) -> usize {
        (DOTS_PER_REGION * self.density).floor() as usize
    }
}

/// Where the map sits on a canvas of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFrame {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl MapFrame {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let width = (viewport_width * 0.7).min(MAX_MAP_WIDTH);
        Self {
            center_x: viewport_width / 2.0,
            center_y: viewport_height / 2.0,
            width,
            height: width * 0.5,
        }
    }

    pub fn project(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.center_x + x * self.width, self.center_y + y * self.height)
    }

    /// Flight path from the Americas to the venue.
    pub fn arc(&self) -> QuadraticArc {
        QuadraticArc {
            start: self.project(ARC_ORIGIN),
            control: self.project(ARC_CONTROL),
            end: self.project(VENUE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub base_opacity: f64,
    pub phase: f64,
}

impl Dot {
    /// Opacity `elapsed_ms` after the map started drawing.
    pub fn opacity_at(&self, elapsed_ms: f64) -> f64 {
        self.base_opacity * pulse(elapsed_ms * 0.001 + self.phase)
    }
}

/// Oscillates in `[0.4, 1.0]`.
pub fn pulse(angle: f64) -> f64 {
    angle.sin() * 0.3 + 0.7
}

pub fn venue_glow(elapsed_ms: f64) -> f64 {
    pulse(elapsed_ms * 0.002)
}

/// Scatters dots over every region. `random` must yield values in `[0, 1)`.
pub fn generate_dots(frame: &MapFrame, mut random: impl FnMut() -> f64) -> Vec<Dot> {
    let total = REGIONS.iter().map(Region::dot_count).sum();
    let mut dots = Vec::with_capacity(total);
    for region in &REGIONS {
        for _ in 0..region.dot_count() {
            let nx = region.x_min + random() * (region.x_max - region.x_min);
            let ny = region.y_min + random() * (region.y_max - region.y_min);
            let (x, y) = frame.project((nx, ny));
            dots.push(Dot {
                x,
                y,
                base_opacity: 0.3 + random() * 0.4,
                phase: random() * TAU,
            });
        }
    }
    dots
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticArc {
    pub start: (f64, f64),
    pub control: (f64, f64),
    pub end: (f64, f64),
}

impl QuadraticArc {
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let inv = 1.0 - t;
        let axis = |a: f64, b: f64, c: f64| inv * inv * a + 2.0 * inv * t * b + t * t * c;
        (
            axis(self.start.0, self.control.0, self.end.0),
            axis(self.start.1, self.control.1, self.end.1),
        )
    }

    /// Polyline approximation of the curve length.
    pub fn length(&self) -> f64 {
        const SEGMENTS: usize = 64;
        let mut total = 0.0;
        let mut prev = self.start;
        for i in 1..=SEGMENTS {
            let next = self.point_at(i as f64 / SEGMENTS as f64);
            total += (next.0 - prev.0).hypot(next.1 - prev.1);
            prev = next;
        }
        total
    }

    /// SVG path data.
    pub fn path(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.0, self.start.1, self.control.0, self.control.1, self.end.0, self.end.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn map_width_is_capped() {
        assert_eq!(MapFrame::new(1000.0, 800.0).width, 700.0);
        let wide = MapFrame::new(3000.0, 1200.0);
        assert_eq!(wide.width, 900.0);
        assert_eq!(wide.height, 450.0);
        assert_eq!((wide.center_x, wide.center_y), (1500.0, 600.0));
    }

    #[test]
    fn dot_counts_follow_density() {
        let counts: Vec<usize> = REGIONS.iter().map(Region::dot_count).collect();
        assert_eq!(counts, [48, 40, 64, 40, 56, 96, 32]);
    }

    #[test]
    fn dots_land_inside_their_regions() {
        let frame = MapFrame::new(1200.0, 800.0);
        let dots = generate_dots(&frame, lcg(7));
        assert_eq!(dots.len(), 376);

        let mut offset = 0;
        for region in &REGIONS {
            let (left, top) = frame.project((region.x_min, region.y_min));
            let (right, bottom) = frame.project((region.x_max, region.y_max));
            for dot in &dots[offset..offset + region.dot_count()] {
                assert!(dot.x >= left && dot.x <= right);
                assert!(dot.y >= top && dot.y <= bottom);
                assert!(dot.base_opacity >= 0.3 && dot.base_opacity < 0.7);
                assert!(dot.phase >= 0.0 && dot.phase < TAU);
            }
            offset += region.dot_count();
        }
    }

    #[test]
    fn pulse_stays_in_band() {
        for step in 0..200 {
            let p = pulse(step as f64 * 0.1);
            assert!((0.4 - 1e-12..=1.0 + 1e-12).contains(&p));
        }
        let dot = Dot {
            x: 0.0,
            y: 0.0,
            base_opacity: 0.5,
            phase: 0.0,
        };
        assert!((dot.opacity_at(0.0) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn arc_runs_from_the_americas_to_the_venue() {
        let frame = MapFrame::new(1200.0, 800.0);
        let arc = frame.arc();
        assert_eq!(arc.point_at(0.0), frame.project((-0.3, -0.1)));
        assert_eq!(arc.point_at(1.0), frame.project(VENUE));
        // bows upward past the straight line
        let mid = arc.point_at(0.5);
        assert!(mid.1 < arc.start.1.min(arc.end.1));
    }

    #[test]
    fn arc_length_is_between_chord_and_control_polygon() {
        let arc = MapFrame::new(1200.0, 800.0).arc();
        let dist = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).hypot(a.1 - b.1);
        let chord = dist(arc.start, arc.end);
        let polygon = dist(arc.start, arc.control) + dist(arc.control, arc.end);
        let length = arc.length();
        assert!(length > chord && length < polygon, "{} not in ({}, {})", length, chord, polygon);
    }

    #[test]
    fn straight_arc_length_is_exact() {
        let arc = QuadraticArc {
            start: (0.0, 0.0),
            control: (50.0, 0.0),
            end: (100.0, 0.0),
        };
        assert!((arc.length() - 100.0).abs() < 1e-9);
        assert_eq!(arc.path(), "M 0 0 Q 50 0 100 0");
    }
}
