//! Error types.
//!
//! Everything that can go wrong here is a static-content or configuration
//! defect. Nothing is retried; errors surface when content is constructed.

use thiserror::Error;

use crate::types::Breakpoint;

/// Defects in the compatibility rows or feature cards.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{kind} #{index} has an empty `{field}`")]
    MissingField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("duplicate compatibility row name `{0}`")]
    DuplicateRow(String),

    #[error("duplicate feature card title `{0}`")]
    DuplicateCard(&'static str),

    #[error("exactly one feature card must carry glow emphasis, found {0}")]
    GlowCount(usize),

    #[error("card `{title}` spans {span} columns but the {breakpoint:?} grid has {columns}")]
    SpanExceedsGrid {
        title: &'static str,
        breakpoint: Breakpoint,
        span: u16,
        columns: u16,
    },

    #[error("invalid compatibility rows: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),
}

/// Invalid reveal animation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid reveal config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("`durationMs` must be greater than zero")]
    ZeroDuration,

    #[error("`hiddenOpacity` must be within 0..=1, got {0}")]
    Opacity(f32),

    #[error("`hiddenScale` must be greater than zero, got {0}")]
    Scale(f32),
}
