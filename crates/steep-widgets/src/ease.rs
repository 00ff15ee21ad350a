//! Easing curves for animations.
//!
//! Each curve maps a linear fraction `t` in `[0, 1]` to an eased fraction.
//! Curves start at 0 and end at 1 but are not required to stay inside
//! `[0, 1]` in between, so callers clamp when they need a strict range.

use std::fmt;
use std::str::FromStr;

/// A named easing curve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// `t`
    Linear,
    /// Quadratic, decelerating.
    OutQuad,
    /// Cubic, accelerating then decelerating.
    InOutCubic,
    /// Overshoots the end, then settles back.
    OutBack,
    /// Bounces against the end like a dropped ball.
    #[default]
    OutBounce,
}

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::OutQuad,
        Easing::InOutCubic,
        Easing::OutBack,
        Easing::OutBounce,
    ];

    /// Apply the curve to `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::OutQuad => out_quad(t),
            Easing::InOutCubic => in_out_cubic(t),
            Easing::OutBack => out_back(t),
            Easing::OutBounce => out_bounce(t),
        }
    }

    /// The curve's kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::OutQuad => "out-quad",
            Easing::InOutCubic => "in-out-cubic",
            Easing::OutBack => "out-back",
            Easing::OutBounce => "out-bounce",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown curve name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing curve `{0}`")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

/// Quadratic ease-out.
pub fn out_quad(t: f64) -> f64 {
    -t * (t - 2.0)
}

/// Cubic ease-in-out.
pub fn in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return 0.5 * t * t * t;
    }
    let t = t - 2.0;
    0.5 * t * t * t + 1.0
}

/// Back ease-out.  Peaks slightly above 1.
pub fn out_back(t: f64) -> f64 {
    const S: f64 = 1.70158;
    let t = t - 1.0;
    t * t * ((S + 1.0) * t + S) + 1.0
}

/// Bounce ease-out.
pub fn out_bounce(t: f64) -> f64 {
    const N: f64 = 7.5625;
    if t >= 1.0 {
        1.0
    } else if t < 4.0 / 11.0 {
        N * t * t
    } else if t < 8.0 / 11.0 {
        let t = t - 6.0 / 11.0;
        N * t * t + 3.0 / 4.0
    } else if t < 10.0 / 11.0 {
        let t = t - 9.0 / 11.0;
        N * t * t + 15.0 / 16.0
    } else {
        let t = t - 21.0 / 22.0;
        N * t * t + 63.0 / 64.0
    }
}
