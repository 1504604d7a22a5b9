use std::ops::Range;

use rand::Rng;

/// `top` / `left` range, percent of the page.
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;
/// Width and height range, px.
pub const SIZE_RANGE: Range<f64> = 50.0..150.0;
/// Float animation period, seconds.
pub const FLOAT_RANGE: Range<f64> = 5.0..15.0;

/// A decorative circle drifting behind the page content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub top_pct: f64,
    pub left_pct: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub float_secs: f64,
}

impl FloatingShape {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            top_pct: rng.gen_range(POSITION_RANGE),
            left_pct: rng.gen_range(POSITION_RANGE),
            width_px: rng.gen_range(SIZE_RANGE),
            height_px: rng.gen_range(SIZE_RANGE),
            float_secs: rng.gen_range(FLOAT_RANGE),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; width: {:.1}px; height: {:.1}px; \
             animation: float {:.2}s infinite ease-in-out;",
            self.top_pct, self.left_pct, self.width_px, self.height_px, self.float_secs
        )
    }
}

/// Draw `count` shapes from `rng`.
pub fn scatter<R: Rng>(rng: &mut R, count: usize) -> Vec<FloatingShape> {
    (0..count).map(|_| FloatingShape::random(rng)).collect()
}
