//! Layout output types.

use crate::types::Breakpoint;

/// Rectangle a card occupies inside the grid container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of one grid layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub breakpoint: Breakpoint,
    /// Container width.
    pub width: f32,
    /// Container height (all rows plus gaps).
    pub height: f32,
    /// One placement per card, in declaration order.
    pub cards: Vec<CardPlacement>,
}
