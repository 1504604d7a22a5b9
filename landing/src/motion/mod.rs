//! Animation math behind the page's motion wrappers.
//!
//! Everything here is pure: given a scroll progress or a mount flag it
//! returns the CSS the wrapper should carry. The browser does the actual
//! frame scheduling through CSS transitions. [`dom`] connects these
//! functions to live scroll and mount events.

pub mod dom;
mod shapes;

pub use shapes::{FLOAT_RANGE, FloatingShape, POSITION_RANGE, SIZE_RANGE, scatter};

/// Opacity checkpoints of the reveal wrapper over scroll progress.
pub const REVEAL_OPACITY: [(f64, f64); 3] = [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];

/// Scale checkpoints of the reveal wrapper over scroll progress.
pub const REVEAL_SCALE: [(f64, f64); 3] = [(0.0, 0.8), (0.5, 1.0), (1.0, 0.8)];

/// Piecewise-linear interpolation over `(input, output)` checkpoints.
///
/// Inputs must be ascending. Values before the first checkpoint (and NaN)
/// map to the first output, values past the last one to the last output.
/// An empty table maps everything to `0.0`.
pub fn interpolate(stops: &[(f64, f64)], x: f64) -> f64 {
    let Some(&(first_x, first_y)) = stops.first() else {
        return 0.0;
    };
    if x.is_nan() || x <= first_x {
        return first_y;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    stops[stops.len() - 1].1
}

/// Progress of an element through the viewport.
///
/// `0.0` when the element's top edge touches the bottom of the viewport,
/// `1.0` when its bottom edge leaves through the top. `top` is the
/// element's bounding-rect top relative to the viewport.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span.is_nan() || span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// Timing of a single CSS transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

impl Transition {
    pub const fn new(duration: f64, delay: f64) -> Self {
        Self { duration, delay }
    }

    /// `transition` value animating each of `properties` with this timing.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|prop| {
                format!(
                    "{prop} {:.2}s ease-out {:.2}s",
                    self.duration, self.delay
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Transition for the `index`-th block of a staggered sequence.
pub fn stagger(index: usize, interval: f64, duration: f64) -> Transition {
    Transition::new(duration, index as f64 * interval)
}

/// One-shot entrance: slide up by `offset_px` while fading in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_px: f64,
    pub transition: Transition,
}

impl Entrance {
    pub const fn new(offset_px: f64, transition: Transition) -> Self {
        Self {
            offset_px,
            transition,
        }
    }

    pub fn style(&self, settled: bool) -> String {
        if settled {
            format!(
                "opacity: 1; transform: translateY(0px); transition: {};",
                self.transition.css(&["opacity", "transform"])
            )
        } else {
            format!(
                "opacity: 0; transform: translateY({}px);",
                self.offset_px
            )
        }
    }
}

/// Opacity and scale of the reveal wrapper at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub scale: f64,
}

impl RevealFrame {
    pub fn at(progress: f64) -> Self {
        Self {
            opacity: interpolate(&REVEAL_OPACITY, progress),
            scale: interpolate(&REVEAL_SCALE, progress),
        }
    }

    /// Inline style for this frame. Carries no transition: the frame is
    /// applied as-is on every scroll update.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

/// How a parallax layer moves while its element crosses the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallaxEffect {
    /// Relative speed: translates from `speed * 10` px to `-speed * 10` px.
    /// Negative values lag behind the scroll, positive ones run ahead.
    Speed(f64),
    /// Explicit translateY range in percent of the layer's own height.
    TranslatePercent(f64, f64),
}

impl ParallaxEffect {
    fn range(&self) -> (f64, f64, &'static str) {
        match *self {
            ParallaxEffect::Speed(speed) => (speed * 10.0, speed * -10.0, "px"),
            ParallaxEffect::TranslatePercent(start, end) => (start, end, "%"),
        }
    }

    /// translateY value (in the effect's unit) at `progress`.
    pub fn offset(&self, progress: f64) -> f64 {
        let (start, end, _) = self.range();
        interpolate(&[(0.0, start), (1.0, end)], progress)
    }

    pub fn transform(&self, progress: f64) -> String {
        let (_, _, unit) = self.range();
        format!("translateY({:.2}{unit})", self.offset(progress))
    }
}
