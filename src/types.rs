//! Core types for bento-landing.
//!
//! These types define the content model that everything builds on.
//! They flow from the static content tables through layout and animation
//! into the markup renderer.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Same color with the alpha channel replaced by `alpha` (0.0 - 1.0).
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// CSS color literal.
    ///
    /// Opaque colors render as `#rrggbb`, everything else as `rgba(r, g, b, a)`
    /// with alpha rounded to three decimals.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

// =============================================================================
// Card Capabilities (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Optional capabilities a feature card opts into.
    ///
    /// Every card has an icon, a title and a description. These flags
    /// summarise the optional slots on top of that base record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        const NONE = 0;
        /// Emphasis treatment (accent border, tint, ambient glow).
        const GLOW = 1 << 0;
        /// At least one layout span override.
        const SPAN = 1 << 1;
        /// Nested auxiliary content below the description.
        const AUXILIARY = 1 << 2;
    }
}

// =============================================================================
// Compatibility status
// =============================================================================

/// Support status of one API surface in the compatibility table.
///
/// Deserializes from the lowercase literals `"supported"` and `"planned"`.
/// Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Supported,
    Planned,
}

impl Status {
    /// Badge label shown in the status column.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::Planned => "Planned",
        }
    }

    /// Content literal, as it appears in JSON rows.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supported => "supported",
            Self::Planned => "planned",
        }
    }
}

/// One row of the compatibility matrix.
///
/// `name` doubles as the stable render key and must be unique per table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRow {
    pub name: Cow<'static, str>,
    pub status: Status,
    pub notes: Cow<'static, str>,
}

impl CompatibilityRow {
    /// Row from static literals.
    pub const fn new(name: &'static str, status: Status, notes: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            status,
            notes: Cow::Borrowed(notes),
        }
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Icon reference for a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Puzzle,
    Server,
    Key,
    Database,
    LayoutDashboard,
    Users,
    HardDrive,
}

impl Icon {
    /// Name in the lucide icon set.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Puzzle => "puzzle",
            Self::Server => "server",
            Self::Key => "key",
            Self::Database => "database",
            Self::LayoutDashboard => "layout-dashboard",
            Self::Users => "users",
            Self::HardDrive => "hard-drive",
        }
    }
}

// =============================================================================
// Responsive grid
// =============================================================================

/// Responsive breakpoint of the feature grid.
///
/// Ordered from narrowest to widest so span rules can apply "from here up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    /// Below 640px.
    #[default]
    Base,
    /// 640px and up.
    Sm,
    /// 1024px and up.
    Lg,
}

impl Breakpoint {
    /// Minimum viewport width in CSS pixels for this breakpoint.
    pub const fn min_width(&self) -> f32 {
        match self {
            Self::Base => 0.0,
            Self::Sm => 640.0,
            Self::Lg => 1024.0,
        }
    }

    /// Number of grid columns at this breakpoint.
    pub const fn columns(&self) -> u16 {
        match self {
            Self::Base => 1,
            Self::Sm => 2,
            Self::Lg => 4,
        }
    }

    /// Utility class prefix (`""`, `"sm:"`, `"lg:"`).
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Sm => "sm:",
            Self::Lg => "lg:",
        }
    }

    /// Breakpoint that applies at the given viewport width.
    pub fn for_width(width: f32) -> Self {
        if width >= Self::Lg.min_width() {
            Self::Lg
        } else if width >= Self::Sm.min_width() {
            Self::Sm
        } else {
            Self::Base
        }
    }

    /// All breakpoints, narrowest first.
    pub const fn all() -> &'static [Breakpoint] {
        &[Self::Base, Self::Sm, Self::Lg]
    }
}

/// Grid axis a span rule stretches along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

/// Declarative "occupy more than one cell" hint.
///
/// Applies at `from` and every wider breakpoint until a later rule on the
/// same axis overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanRule {
    pub from: Breakpoint,
    pub axis: Axis,
    pub cells: u16,
}

impl SpanRule {
    pub const fn columns(from: Breakpoint, cells: u16) -> Self {
        Self { from, axis: Axis::Column, cells }
    }

    pub const fn rows(from: Breakpoint, cells: u16) -> Self {
        Self { from, axis: Axis::Row, cells }
    }

    /// Utility class for the host grid, e.g. `sm:col-span-2`.
    pub fn class(&self) -> String {
        let axis = match self.axis {
            Axis::Column => "col",
            Axis::Row => "row",
        };
        format!("{}{}-span-{}", self.from.prefix(), axis, self.cells)
    }
}

/// Effective span along `axis` at `breakpoint` (1 when no rule applies).
pub fn resolve_span(rules: &[SpanRule], breakpoint: Breakpoint, axis: Axis) -> u16 {
    rules
        .iter()
        .filter(|r| r.axis == axis && r.from <= breakpoint)
        .max_by_key(|r| r.from)
        .map(|r| r.cells.max(1))
        .unwrap_or(1)
}
