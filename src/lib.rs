//! # bento-landing
//!
//! Compatibility matrix and scroll-revealed bento feature grid for a
//! product landing page.
//!
//! ## Architecture
//!
//! Content is static: compatibility rows and feature cards are module-level
//! constants, validated once into [`CompatibilityTable`] and [`FeatureGrid`].
//! The only runtime state is the feature grid's one-shot reveal latch:
//! ```text
//! VisibilitySource → reveal latch → GridHandle::frame → GridFrame → renderer → Markup
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Status, CompatibilityRow, Breakpoint, etc.)
//! - [`content`] - Shipped rows and cards, validated containers
//! - [`layout`] - Taffy CSS grid placement and validation
//! - [`state`] - Reveal latch, animation curves, visibility sources, clocks
//! - [`pipeline`] - Grid mounting and frame sampling
//! - [`primitives`] - Markup building blocks (badge, table, card, section)
//! - [`renderer`] - Section markup for the host page
//! - [`theme`] - Palette and variant styles
//! - [`config`] - Reveal animation configuration

pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::RevealConfig;

pub use content::{
    COMPATIBILITY_HEADER, COMPATIBILITY_ROWS, CompatibilityTable, FEATURE_CARDS, FEATURES_HEADER,
    FeatureGrid, compatibility_table, feature_grid,
};

pub use error::{ConfigError, ContentError};

pub use layout::{CardPlacement, GridLayout, compute_grid_layout, validate_placement};

pub use pipeline::{GridFrame, GridHandle, mount_grid};

pub use primitives::{AuxBlock, Chip, Cleanup, FeatureCardSpec, SectionHeader};

pub use renderer::{compatibility_section, features_section, landing_sections};

pub use state::{
    // Reveal
    RevealLatch, RevealState,
    // Animation
    Easing, Pose, Transition, stagger_delay, transition_for,
    // Visibility
    SyntheticVisibility, TargetRect, Viewport, VisibilitySource,
    // Clock
    Clock, ManualClock, SystemClock,
};

pub use theme::{Theme, Variant, active_theme, get_variant_style, reset_theme_state, set_theme};
