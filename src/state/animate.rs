//! Reveal Animation - Poses, transitions and easing curves
//!
//! Every card of the feature grid animates between two poses:
//!
//! - **hidden**: transparent, pushed down, slightly shrunk
//! - **shown**: opaque, in place, full size
//!
//! The grid's [`RevealState`] picks the target pose. A card's position in
//! declaration order picks its start delay, so cards cascade in one after
//! another instead of appearing together.
//!
//! # Pattern
//!
//! - `transition_for(state, index, config)` is pure and total
//! - `Transition::sample(elapsed)` turns elapsed time into a pose
//! - No timers: the host samples on its own frame loop
//!
//! # Example
//!
//! ```ignore
//! use bento_landing::state::{transition_for, RevealState};
//!
//! let t = transition_for(RevealState::Shown, 2, &config);
//! // Card #2 starts 160ms after the grid was revealed
//! let pose = t.sample(Duration::from_millis(300));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::reveal::RevealState;
use crate::config::RevealConfig;

// =============================================================================
// EASING
// =============================================================================

/// Timing curve for a card's progress.
///
/// The named curves are the standard CSS cubic-bezier presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    /// Fast start, slow settle. Cards decelerate into place.
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the cubic-bezier curve.
    pub const fn control_points(&self) -> (f32, f32, f32, f32) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let u = solve_bezier_x(t, x1, x2);
        bezier(u, y1, y2)
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
#[inline]
fn bezier(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

#[inline]
fn bezier_slope(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
///
/// Newton-Raphson first, bisection when the slope flattens out.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier(u, x1, x2) - x;
        if err.abs() < EPSILON {
            return u;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    u = x;
    for _ in 0..32 {
        let value = bezier(u, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

// =============================================================================
// POSE
// =============================================================================

/// Visual transform of one card at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical displacement in CSS pixels (positive = below resting place).
    pub offset_y: f32,
    pub scale: f32,
}

impl Pose {
    /// Resting pose once a card has fully entered.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Pose held while the grid is hidden.
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            opacity: config.hidden_opacity,
            offset_y: config.hidden_offset_y,
            scale: config.hidden_scale,
        }
    }

    /// Linear interpolation between two poses.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let mix = |x: f32, y: f32| x + (y - x) * t;
        Self {
            opacity: mix(a.opacity, b.opacity),
            offset_y: mix(a.offset_y, b.offset_y),
            scale: mix(a.scale, b.scale),
        }
    }

    /// Inline CSS declarations for this pose.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({})",
            round3(self.opacity),
            round3(self.offset_y),
            round3(self.scale)
        )
    }
}

#[inline]
fn round3(v: f32) -> f32 {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoid "-0" in the emitted CSS.
    if r == 0.0 { 0.0 } else { r }
}

// =============================================================================
// TRANSITION
// =============================================================================

/// A card's resolved entrance: where it starts, where it ends, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    /// Time after the grid was revealed before this card starts moving.
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    /// Pose at `elapsed` time since the grid was revealed.
    pub fn sample(&self, elapsed: Duration) -> Pose {
        if elapsed < self.delay {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }

        let local = (elapsed - self.delay).as_secs_f32();
        let progress = local / self.duration.as_secs_f32();
        if progress >= 1.0 {
            return self.to;
        }
        Pose::lerp(self.from, self.to, self.easing.apply(progress))
    }

    /// Whether the card has reached its target pose at `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Start offset of the card at `index`, relative to the reveal.
pub fn stagger_delay(index: usize, stagger: Duration) -> Duration {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    stagger.saturating_mul(steps)
}

/// Resolve a card's transition from the grid state and its position.
///
/// Hidden cards snap to the hidden pose. Shown cards ease from the hidden
/// pose to [`Pose::SHOWN`], starting `index * stagger` after the reveal.
pub fn transition_for(state: RevealState, index: usize, config: &RevealConfig) -> Transition {
    let hidden = Pose::hidden(config);

    match state {
        RevealState::Hidden => Transition {
            from: hidden,
            to: hidden,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            easing: config.easing,
        },
        RevealState::Shown => Transition {
            from: hidden,
            to: Pose::SHOWN,
            delay: stagger_delay(index, config.stagger()),
            duration: config.duration(),
            easing: config.easing,
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
