//! Primitive types - Card specs, auxiliary content and cleanup.
//!
//! These types define the interface between static content and the
//! markup primitives. Everything here is `'static` data built with const
//! builders, so content tables can live in module-level constants.

use crate::types::{Capabilities, Icon, SpanRule};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by observers and mounts.
///
/// Call this to disengage and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Section header
// =============================================================================

/// Anchor id, heading and lede of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

// =============================================================================
// Auxiliary content
// =============================================================================

/// A small pill label. Accent chips use the theme accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    pub label: &'static str,
    pub accent: bool,
}

impl Chip {
    pub const fn plain(label: &'static str) -> Self {
        Self { label, accent: false }
    }

    pub const fn accent(label: &'static str) -> Self {
        Self { label, accent: true }
    }
}

/// Syntax class of a code token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Keyword,
    Ident,
    Punct,
    Str,
}

/// One highlighted run of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: &'static str,
}

impl Token {
    pub const fn new(kind: TokenKind, text: &'static str) -> Self {
        Self { kind, text }
    }
}

/// One line of a code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine {
    pub indent: bool,
    pub tokens: &'static [Token],
}

/// Big number with a caption, as in "1 binary".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

/// Nested content rendered below a card's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxBlock {
    /// Highlighted code snippet.
    Code(&'static [CodeLine]),
    /// Row of chips.
    Chips(&'static [Chip]),
    /// Highlighted stat against a struck-through rival stat.
    Comparison { ours: Stat, theirs: Stat },
    /// Wireframe of the dashboard (sidebar + tiles).
    DashboardSketch,
}

// =============================================================================
// Feature card spec
// =============================================================================

/// Declarative description of one bento card.
///
/// Built from a base record with const builder methods for the optional
/// slots:
///
/// ```ignore
/// const HERO: FeatureCardSpec = FeatureCardSpec::new(Icon::Puzzle, "Drop-in", "…")
///     .glow()
///     .spans(HERO_SPANS)
///     .auxiliary(HERO_AUX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCardSpec {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub emphasized: bool,
    pub spans: &'static [SpanRule],
    pub auxiliary: &'static [AuxBlock],
}

impl FeatureCardSpec {
    pub const fn new(icon: Icon, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
            emphasized: false,
            spans: &[],
            auxiliary: &[],
        }
    }

    /// Apply the glow emphasis treatment.
    pub const fn glow(mut self) -> Self {
        self.emphasized = true;
        self
    }

    /// Request more than one grid cell.
    pub const fn spans(mut self, spans: &'static [SpanRule]) -> Self {
        self.spans = spans;
        self
    }

    /// Attach nested content.
    pub const fn auxiliary(mut self, blocks: &'static [AuxBlock]) -> Self {
        self.auxiliary = blocks;
        self
    }

    /// Optional slots this card uses.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::NONE;
        if self.emphasized {
            caps |= Capabilities::GLOW;
        }
        if !self.spans.is_empty() {
            caps |= Capabilities::SPAN;
        }
        if !self.auxiliary.is_empty() {
            caps |= Capabilities::AUXILIARY;
        }
        caps
    }

    /// Host grid classes for the span rules, space separated.
    pub fn span_classes(&self) -> String {
        self.spans
            .iter()
            .map(|rule| rule.class())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakpoint;

    const HERO_SPANS: &[SpanRule] = &[
        SpanRule::columns(Breakpoint::Sm, 2),
        SpanRule::rows(Breakpoint::Lg, 2),
    ];
    const HERO_CHIPS: &[Chip] = &[Chip::accent(".rpc()")];
    const HERO_AUX: &[AuxBlock] = &[AuxBlock::Chips(HERO_CHIPS)];

    const PLAIN: FeatureCardSpec = FeatureCardSpec::new(Icon::Key, "Auth", "Built in.");
    const HERO: FeatureCardSpec = FeatureCardSpec::new(Icon::Puzzle, "Drop-in", "Just works.")
        .glow()
        .spans(HERO_SPANS)
        .auxiliary(HERO_AUX);

    #[test]
    fn test_plain_card_has_no_capabilities() {
        assert_eq!(PLAIN.capabilities(), Capabilities::NONE);
        assert_eq!(PLAIN.span_classes(), "");
    }

    #[test]
    fn test_builder_sets_capabilities() {
        let caps = HERO.capabilities();
        assert!(caps.contains(Capabilities::GLOW));
        assert!(caps.contains(Capabilities::SPAN));
        assert!(caps.contains(Capabilities::AUXILIARY));
    }

    #[test]
    fn test_span_classes() {
        assert_eq!(HERO.span_classes(), "sm:col-span-2 lg:row-span-2");
    }

    #[test]
    fn test_chip_constructors() {
        assert!(Chip::accent("SELECT").accent);
        assert!(!Chip::plain("JWT").accent);
    }
}
