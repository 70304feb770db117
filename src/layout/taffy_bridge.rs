//! Taffy Bridge - Integration with Taffy's CSS grid engine
//!
//! Converts feature cards and their span rules to Taffy grid styles, runs
//! auto-placement, and extracts per-card rectangles.
//!
//! The cards never compute their own packing. They only state "span N
//! columns/rows from breakpoint B up" and Taffy places them the way a
//! browser grid would.

use taffy::style_helpers::{evenly_sized_tracks, length};
use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, GridPlacement, LengthPercentage, Line,
    NodeId, Size, Style, TaffyError, TaffyTree,
};
use tracing::trace;

use crate::primitives::FeatureCardSpec;
use crate::types::{Axis, Breakpoint, resolve_span};

use super::types::{CardPlacement, GridLayout};

/// Gap between grid cells, in CSS pixels.
pub const GAP: f32 = 12.0;

/// Nominal height of one grid row, in CSS pixels.
pub const ROW_HEIGHT: f32 = 120.0;

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn span_line(cells: u16) -> Line<GridPlacement> {
    Line {
        start: GridPlacement::Span(cells),
        end: GridPlacement::Auto,
    }
}

/// Grid item style for one card at `breakpoint`.
fn card_style(card: &FeatureCardSpec, breakpoint: Breakpoint) -> Style {
    Style {
        grid_column: span_line(resolve_span(card.spans, breakpoint, Axis::Column)),
        grid_row: span_line(resolve_span(card.spans, breakpoint, Axis::Row)),
        ..Default::default()
    }
}

/// Grid container style at `breakpoint`.
fn grid_style(breakpoint: Breakpoint, width: f32) -> Style {
    Style {
        display: Display::Grid,
        size: Size {
            width: TaffyDimension::Length(width),
            height: TaffyDimension::Auto,
        },
        grid_template_columns: evenly_sized_tracks(breakpoint.columns()),
        grid_auto_rows: vec![length(ROW_HEIGHT)],
        gap: Size {
            width: LengthPercentage::Length(GAP),
            height: LengthPercentage::Length(GAP),
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Place `cards` in a grid `width` pixels wide.
///
/// The column count and span rules are those of the breakpoint `width`
/// falls into. Cards are placed in declaration order by Taffy's
/// auto-placement algorithm (row flow, sparse packing).
pub fn compute_grid_layout(cards: &[FeatureCardSpec], width: f32) -> Result<GridLayout, TaffyError> {
    let breakpoint = Breakpoint::for_width(width);
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children = cards
        .iter()
        .map(|card| tree.new_leaf(card_style(card, breakpoint)))
        .collect::<Result<Vec<NodeId>, _>>()?;
    let root = tree.new_with_children(grid_style(breakpoint, width), &children)?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let mut placements = Vec::with_capacity(children.len());
    for &node in &children {
        let layout = tree.layout(node)?;
        placements.push(CardPlacement {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        });
    }

    let root_layout = tree.layout(root)?;
    trace!(?breakpoint, width, cards = cards.len(), height = root_layout.size.height, "grid layout computed");

    Ok(GridLayout {
        breakpoint,
        width: root_layout.size.width,
        height: root_layout.size.height,
        cards: placements,
    })
}
