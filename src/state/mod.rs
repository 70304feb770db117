//! State Module - Runtime state behind the feature-grid reveal
//!
//! - **Reveal** - One-shot Hidden → Shown latch per mounted grid
//! - **Animate** - Poses, easing curves, staggered transitions
//! - **Visibility** - Intersection observation capability and sources
//! - **Clock** - Frame timestamps (system or hand-driven)

pub mod animate;
pub mod clock;
pub mod reveal;
pub mod visibility;

pub use animate::*;
pub use clock::*;
pub use reveal::*;
pub use visibility::*;
