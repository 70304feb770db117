//! Theme System for bento-landing.
//!
//! Provides the semantic palette the markup primitives draw from. Colors are
//! plain [`Rgba`] values; translucent tints are derived with
//! [`Rgba::with_alpha`] at the point of use.
//!
//! The active theme is thread-local, matching the single-threaded rendering
//! model. Swap it with [`set_theme`] before rendering.
//!
//! # Example
//!
//! ```rust
//! use bento_landing::theme::{active_theme, set_theme, Theme};
//!
//! set_theme(Theme::midnight());
//! let accent = active_theme().accent;
//! assert_eq!(accent.to_css(), "#10b981");
//! ```

use std::cell::RefCell;

use crate::types::Rgba;

pub mod variant;

pub use variant::{Variant, VariantStyle, get_variant_style};

// =============================================================================
// Theme
// =============================================================================

/// Semantic palette for both landing sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background.
    pub background: Rgba,
    /// Primary text.
    pub foreground: Rgba,
    /// Secondary text (descriptions, notes).
    pub muted: Rgba,
    /// Hairline borders, applied translucent.
    pub border: Rgba,
    /// Filled badge background.
    pub primary: Rgba,
    /// Text on top of `primary`.
    pub primary_foreground: Rgba,
    /// Emphasis color (glow card, accent chips).
    pub accent: Rgba,
    /// Text drawn in the accent hue.
    pub accent_text: Rgba,
    /// String literals in code snippets.
    pub highlight: Rgba,
}

impl Theme {
    /// Dark theme with an emerald accent.
    pub const fn midnight() -> Self {
        Self {
            background: Rgba::rgb(9, 9, 11),
            foreground: Rgba::rgb(250, 250, 250),
            muted: Rgba::rgb(161, 161, 170),
            border: Rgba::WHITE,
            primary: Rgba::rgb(250, 250, 250),
            primary_foreground: Rgba::rgb(24, 24, 27),
            accent: Rgba::rgb(16, 185, 129),
            accent_text: Rgba::rgb(52, 211, 153),
            highlight: Rgba::rgb(252, 211, 77),
        }
    }

    /// Light theme with the same accent.
    pub const fn daylight() -> Self {
        Self {
            background: Rgba::WHITE,
            foreground: Rgba::rgb(9, 9, 11),
            muted: Rgba::rgb(113, 113, 122),
            border: Rgba::BLACK,
            primary: Rgba::rgb(24, 24, 27),
            primary_foreground: Rgba::rgb(250, 250, 250),
            accent: Rgba::rgb(16, 185, 129),
            accent_text: Rgba::rgb(5, 150, 105),
            highlight: Rgba::rgb(180, 83, 9),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

// =============================================================================
// Active theme
// =============================================================================

thread_local! {
    static ACTIVE_THEME: RefCell<Theme> = RefCell::new(Theme::default());
}

/// Theme used by every renderer on this thread.
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|t| *t.borrow())
}

/// Replace the active theme.
pub fn set_theme(theme: Theme) {
    ACTIVE_THEME.with(|t| *t.borrow_mut() = theme);
}

/// Restore the default theme (for testing).
pub fn reset_theme_state() {
    set_theme(Theme::default());
}
