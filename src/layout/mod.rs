//! Layout Module
//!
//! CSS grid placement for the bento feature grid using Taffy.
//!
//! # Architecture
//!
//! The layout module uses [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant grid computation. The bridge:
//!
//! 1. Resolves the breakpoint for the container width
//! 2. Converts each card's span rules → Taffy grid placement
//! 3. Builds a one-level Taffy tree (grid container + card leaves)
//! 4. Extracts per-card rectangles in declaration order
//!
//! Cards never name a start line, only a span, so auto-placement always
//! finds them free cells. The one way a card can break the grid is a span
//! wider than the column count, which would make Taffy grow implicit
//! tracks. [`validate_placement`] rejects that at every breakpoint.
//!
//! # Example
//!
//! ```ignore
//! use bento_landing::layout::compute_grid_layout;
//! use bento_landing::{Breakpoint, FEATURE_CARDS};
//!
//! let layout = compute_grid_layout(&FEATURE_CARDS, 1104.0)?;
//! assert_eq!(layout.breakpoint, Breakpoint::Lg);
//! assert_eq!(layout.cards.len(), FEATURE_CARDS.len());
//! ```

mod taffy_bridge;
mod types;

pub use taffy_bridge::{GAP, ROW_HEIGHT, compute_grid_layout};
pub use types::*;

use tracing::warn;

use crate::error::ContentError;
use crate::primitives::FeatureCardSpec;
use crate::types::{Axis, Breakpoint, resolve_span};

/// Container width used when validating placement at `breakpoint`.
fn validation_width(breakpoint: Breakpoint) -> f32 {
    match breakpoint {
        Breakpoint::Base => 360.0,
        Breakpoint::Sm => 640.0,
        Breakpoint::Lg => 1104.0,
    }
}

/// Check every breakpoint for spans wider than the grid, then lay the
/// cards out once per breakpoint so engine failures surface here.
pub fn validate_placement(cards: &[FeatureCardSpec]) -> Result<(), ContentError> {
    for &breakpoint in Breakpoint::all() {
        let columns = breakpoint.columns();

        for card in cards {
            let span = resolve_span(card.spans, breakpoint, Axis::Column);
            if span > columns {
                warn!(title = card.title, ?breakpoint, span, columns, "span exceeds grid");
                return Err(ContentError::SpanExceedsGrid {
                    title: card.title,
                    breakpoint,
                    span,
                    columns,
                });
            }
        }

        compute_grid_layout(cards, validation_width(breakpoint))?;
    }

    Ok(())
}
