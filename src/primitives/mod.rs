//! Landing Primitives - Markup building blocks.
//!
//! This module provides the primitives both sections are assembled from:
//! - [`badge`] - Status pill (filled or outlined)
//! - [`compatibility_table`] - The API compatibility matrix
//! - [`bento_card`] - One feature card at a given animation pose
//! - [`section`] - Anchored section with heading and lede
//!
//! # Architecture
//!
//! Primitives are pure functions from content to [`maud::Markup`]. They
//! read colors from the active theme through [`crate::theme::get_variant_style`]
//! and hold no state. Anything time-dependent (the reveal pose) is passed in
//! by the caller.
//!
//! ```ignore
//! let html = bento_card(&FEATURE_CARDS[0], 0, Pose::SHOWN, RevealState::Shown);
//! ```

mod types;
mod badge;
mod card;
mod section;
mod table;

pub use types::*;
pub use badge::{badge, badge_variant};
pub use card::{bento_card, card_variant};
pub use section::section;
pub use table::{TABLE_COLUMNS, compatibility_table};
