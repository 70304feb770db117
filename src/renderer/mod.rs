//! Renderer - Section markup for the host page.
//!
//! The renderer is blind: it knows nothing about visibility or clocks.
//! It takes validated content plus, for the feature grid, a [`GridFrame`]
//! sampled by the caller, and produces [`Markup`] the host page assembly
//! layer can splice in.
//!
//! ```ignore
//! let table = compatibility_table()?;
//! let grid = feature_grid()?;
//!
//! let html = landing_sections(&table, &grid, &GridFrame::settled(&grid)).into_string();
//! ```

use maud::{Markup, html};

use crate::content::{COMPATIBILITY_HEADER, CompatibilityTable, FEATURES_HEADER, FeatureGrid};
use crate::pipeline::GridFrame;
use crate::primitives::{bento_card, compatibility_table, section};
use crate::state::Pose;
use crate::theme::active_theme;

/// Blurred accent wash centered behind the grid.
fn grid_backdrop() -> Markup {
    let style = format!(
        "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); \
         width: 600px; height: 400px; border-radius: 9999px; background: {}; \
         filter: blur(120px); pointer-events: none; z-index: -1",
        active_theme().accent.with_alpha(0.03).to_css()
    );

    html! {
        div class="bento-backdrop" aria-hidden="true" style=(style) {}
    }
}

/// The compatibility section: header plus table.
pub fn compatibility_section(table: &CompatibilityTable) -> Markup {
    section(&COMPATIBILITY_HEADER, compatibility_table(table.rows()))
}

/// The features section: header plus bento grid at `frame`.
///
/// Cards the frame does not cover render at rest.
pub fn features_section(grid: &FeatureGrid, frame: &GridFrame) -> Markup {
    let state = frame.state();

    let body = html! {
        div class="bento-stage" style="position: relative; isolation: isolate" {
            (grid_backdrop())
            div class="bento-grid" data-reveal=(state.as_str()) {
                @for (index, card) in grid.cards().iter().enumerate() {
                    (bento_card(card, index, frame.pose(index).unwrap_or(Pose::SHOWN), state))
                }
            }
        }
    };

    section(&FEATURES_HEADER, body)
}

/// Features first, then compatibility, as they appear on the page.
pub fn landing_sections(table: &CompatibilityTable, grid: &FeatureGrid, frame: &GridFrame) -> Markup {
    html! {
        (features_section(grid, frame))
        (compatibility_section(table))
    }
}
