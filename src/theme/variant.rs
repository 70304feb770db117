//! Variant system for consistent component theming.
//!
//! Every visual treatment the landing sections use is a closed [`Variant`].
//! [`get_variant_style`] resolves a variant against the active theme into
//! concrete colors, and [`VariantStyle::to_css`] turns those into inline
//! declarations.
//!
//! # Example
//!
//! ```ignore
//! use bento_landing::theme::{Variant, get_variant_style};
//!
//! let style = get_variant_style(Variant::GlowCard);
//! assert!(style.glow.is_some());
//! ```

use super::active_theme;
use crate::types::Rgba;

// =============================================================================
// Variant Enum
// =============================================================================

/// Visual treatments used across both sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Filled badge (solid primary background).
    #[default]
    Filled,
    /// Outline badge (border only, transparent background).
    Outline,

    /// Standard bento card.
    Card,
    /// Emphasized bento card: accent border, soft tint, ambient glow.
    GlowCard,

    /// Neutral chip.
    Chip,
    /// Accent chip.
    AccentChip,

    /// Icon tile on a standard card.
    IconTile,
    /// Icon tile on the emphasized card.
    AccentIconTile,
}

impl Variant {
    /// Modifier class name, e.g. `variant-glow-card`.
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Filled => "variant-filled",
            Self::Outline => "variant-outline",
            Self::Card => "variant-card",
            Self::GlowCard => "variant-glow-card",
            Self::Chip => "variant-chip",
            Self::AccentChip => "variant-accent-chip",
            Self::IconTile => "variant-icon-tile",
            Self::AccentIconTile => "variant-accent-icon-tile",
        }
    }
}

// =============================================================================
// VariantStyle
// =============================================================================

/// Resolved colors for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Foreground (text) color
    pub fg: Rgba,
    /// Background color
    pub bg: Rgba,
    /// Border color
    pub border: Rgba,
    /// Ambient glow color (box shadow), if any
    pub glow: Option<Rgba>,
}

impl VariantStyle {
    /// Inline CSS declarations.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "color: {}; background-color: {}; border-color: {}",
            self.fg.to_css(),
            self.bg.to_css(),
            self.border.to_css()
        );
        if let Some(glow) = self.glow {
            css.push_str(&format!("; box-shadow: 0 0 40px -12px {}", glow.to_css()));
        }
        css
    }
}

// =============================================================================
// get_variant_style
// =============================================================================

/// Get colors for a variant based on the active theme.
pub fn get_variant_style(variant: Variant) -> VariantStyle {
    let theme = active_theme();

    match variant {
        Variant::Filled => VariantStyle {
            fg: theme.primary_foreground,
            bg: theme.primary,
            border: Rgba::TRANSPARENT,
            glow: None,
        },

        Variant::Outline => VariantStyle {
            fg: theme.foreground,
            bg: Rgba::TRANSPARENT,
            border: theme.border.with_alpha(0.15),
            glow: None,
        },

        Variant::Card => VariantStyle {
            fg: theme.foreground,
            bg: theme.border.with_alpha(0.02),
            border: theme.border.with_alpha(0.08),
            glow: None,
        },

        Variant::GlowCard => VariantStyle {
            fg: theme.foreground,
            bg: theme.accent.with_alpha(0.03),
            border: theme.accent.with_alpha(0.25),
            glow: Some(theme.accent.with_alpha(0.15)),
        },

        Variant::Chip => VariantStyle {
            fg: theme.muted,
            bg: theme.border.with_alpha(0.04),
            border: theme.border.with_alpha(0.08),
            glow: None,
        },

        Variant::AccentChip => VariantStyle {
            fg: theme.accent_text,
            bg: theme.accent.with_alpha(0.10),
            border: theme.accent.with_alpha(0.20),
            glow: None,
        },

        Variant::IconTile => VariantStyle {
            fg: theme.muted,
            bg: theme.border.with_alpha(0.06),
            border: Rgba::TRANSPARENT,
            glow: None,
        },

        Variant::AccentIconTile => VariantStyle {
            fg: theme.accent_text,
            bg: theme.accent.with_alpha(0.15),
            border: Rgba::TRANSPARENT,
            glow: None,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, reset_theme_state, set_theme};

    const ALL: [Variant; 8] = [
        Variant::Filled,
        Variant::Outline,
        Variant::Card,
        Variant::GlowCard,
        Variant::Chip,
        Variant::AccentChip,
        Variant::IconTile,
        Variant::AccentIconTile,
    ];

    #[test]
    fn test_variant_default() {
        assert_eq!(Variant::default(), Variant::Filled);
    }

    #[test]
    fn test_only_glow_card_glows() {
        reset_theme_state();
        for v in ALL {
            let style = get_variant_style(v);
            assert_eq!(style.glow.is_some(), v == Variant::GlowCard, "{:?}", v);
        }
    }

    #[test]
    fn test_filled_vs_outline() {
        reset_theme_state();
        let filled = get_variant_style(Variant::Filled);
        let outline = get_variant_style(Variant::Outline);

        assert!(filled.bg.is_opaque());
        assert!(outline.bg.is_transparent());
        assert!(!outline.border.is_transparent());
    }

    #[test]
    fn test_glow_card_uses_accent() {
        reset_theme_state();
        let accent = Theme::midnight().accent;
        let style = get_variant_style(Variant::GlowCard);

        assert_eq!(style.border, accent.with_alpha(0.25));
        assert_eq!(style.bg, accent.with_alpha(0.03));
    }

    #[test]
    fn test_variant_follows_theme() {
        reset_theme_state();
        let dark = get_variant_style(Variant::Filled);
        set_theme(Theme::daylight());
        let light = get_variant_style(Variant::Filled);
        reset_theme_state();

        assert_ne!(dark.bg, light.bg);
    }

    #[test]
    fn test_to_css_includes_glow_only_when_set() {
        reset_theme_state();
        assert!(get_variant_style(Variant::GlowCard).to_css().contains("box-shadow"));
        assert!(!get_variant_style(Variant::Card).to_css().contains("box-shadow"));
    }

    #[test]
    fn test_classes_unique() {
        let mut classes: Vec<_> = ALL.iter().map(|v| v.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), ALL.len());
    }
}
