//! Card Primitive - One bento feature card.
//!
//! A card is an icon tile, a title, a description and any auxiliary
//! blocks. The emphasized card additionally gets the glow variant and a
//! decorative gradient overlay. The caller supplies the animation pose;
//! this module never decides when a card is visible.

use maud::{Markup, html};

use crate::state::{Pose, RevealState};
use crate::theme::{Variant, active_theme, get_variant_style};

use super::types::{AuxBlock, Chip, CodeLine, FeatureCardSpec, Stat, TokenKind};

// =============================================================================
// Variants
// =============================================================================

/// Surface variant for a card.
pub const fn card_variant(spec: &FeatureCardSpec) -> Variant {
    if spec.emphasized { Variant::GlowCard } else { Variant::Card }
}

const fn tile_variant(spec: &FeatureCardSpec) -> Variant {
    if spec.emphasized { Variant::AccentIconTile } else { Variant::IconTile }
}

const fn chip_variant(chip: &Chip) -> Variant {
    if chip.accent { Variant::AccentChip } else { Variant::Chip }
}

// =============================================================================
// Card
// =============================================================================

/// Render card `index` of the grid at `pose`.
///
/// `state` is exposed as `data-reveal` so the host can hook its own CSS.
pub fn bento_card(spec: &FeatureCardSpec, index: usize, pose: Pose, state: RevealState) -> Markup {
    let variant = card_variant(spec);
    let tile = tile_variant(spec);

    let mut class = format!("bento-card {}", variant.class());
    let spans = spec.span_classes();
    if !spans.is_empty() {
        class.push(' ');
        class.push_str(&spans);
    }

    let style = format!("{}; {}", get_variant_style(variant).to_css(), pose.to_css());

    html! {
        div class=(class) style=(style) data-reveal=(state.as_str()) data-index=(index) data-key=(spec.title) {
            @if spec.emphasized {
                (glow_overlay())
            }
            div class="card-body" {
                div class=(format!("icon-tile {}", tile.class())) style=(get_variant_style(tile).to_css()) {
                    i class="icon" data-lucide=(spec.icon.name()) aria-hidden="true" {}
                }
                h3 class="card-title" { (spec.title) }
                p class="card-description" style=(format!("color: {}", active_theme().muted.to_css())) {
                    (spec.description)
                }
                @for block in spec.auxiliary {
                    (aux_block(block))
                }
            }
        }
    }
}

fn glow_overlay() -> Markup {
    let accent = active_theme().accent;
    let style = format!(
        "background: radial-gradient(circle at top left, {}, transparent 60%)",
        accent.with_alpha(0.10).to_css()
    );

    html! {
        div class="card-glow" aria-hidden="true" style=(style) {}
    }
}

// =============================================================================
// Auxiliary blocks
// =============================================================================

fn aux_block(block: &AuxBlock) -> Markup {
    match block {
        AuxBlock::Code(lines) => code_snippet(lines),
        AuxBlock::Chips(chips) => chip_row(chips),
        AuxBlock::Comparison { ours, theirs } => comparison(ours, theirs),
        AuxBlock::DashboardSketch => dashboard_sketch(),
    }
}

fn token_color(kind: TokenKind) -> String {
    let theme = active_theme();
    let color = match kind {
        TokenKind::Comment => theme.muted.with_alpha(0.6),
        TokenKind::Keyword => theme.accent_text,
        TokenKind::Ident | TokenKind::Punct => theme.foreground,
        TokenKind::Str => theme.highlight,
    };
    format!("color: {}", color.to_css())
}

fn token_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Comment => "tok-comment",
        TokenKind::Keyword => "tok-keyword",
        TokenKind::Ident => "tok-ident",
        TokenKind::Punct => "tok-punct",
        TokenKind::Str => "tok-str",
    }
}

fn code_snippet(lines: &[CodeLine]) -> Markup {
    let surface = format!("background-color: {}", active_theme().background.with_alpha(0.4).to_css());

    html! {
        pre class="code-snippet" style=(surface) {
            code {
                @for line in lines {
                    div.code-line.indent[line.indent] {
                        @for token in line.tokens {
                            span class=(token_class(token.kind)) style=(token_color(token.kind)) {
                                (token.text)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn chip_row(chips: &[Chip]) -> Markup {
    html! {
        div class="chip-row" {
            @for chip in chips {
                @let variant = chip_variant(chip);
                span class=(format!("chip {}", variant.class())) style=(get_variant_style(variant).to_css()) {
                    (chip.label)
                }
            }
        }
    }
}

fn comparison(ours: &Stat, theirs: &Stat) -> Markup {
    let theme = active_theme();
    let strong = format!("color: {}", theme.accent_text.to_css());
    let struck = format!("color: {}; text-decoration: line-through", theme.muted.with_alpha(0.5).to_css());

    html! {
        div class="stat-comparison" {
            div class="stat stat-ours" {
                span class="stat-value" style=(strong) { (ours.value) }
                " "
                span class="stat-caption" { (ours.caption) }
            }
            span class="stat-vs" { "vs" }
            div class="stat stat-theirs" {
                span class="stat-value" style=(struck) { (theirs.value) }
                " "
                span class="stat-caption" { (theirs.caption) }
            }
        }
    }
}

fn dashboard_sketch() -> Markup {
    let line = format!("background-color: {}", active_theme().border.with_alpha(0.06).to_css());

    html! {
        div class="dashboard-sketch" aria-hidden="true" {
            div class="sketch-sidebar" style=(line) {}
            div class="sketch-main" {
                div class="sketch-bar" style=(line) {}
                div class="sketch-tiles" {
                    @for _ in 0..3 {
                        div class="sketch-tile" style=(line) {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealConfig;
    use crate::primitives::types::Token;
    use crate::theme::reset_theme_state;
    use crate::types::{Breakpoint, Icon, SpanRule};

    fn setup() {
        reset_theme_state();
    }

    const HERO_SPANS: &[SpanRule] = &[
        SpanRule::columns(Breakpoint::Sm, 2),
        SpanRule::rows(Breakpoint::Lg, 2),
    ];
    const SNIPPET: &[CodeLine] = &[
        CodeLine {
            indent: false,
            tokens: &[Token::new(TokenKind::Keyword, "const")],
        },
        CodeLine {
            indent: true,
            tokens: &[Token::new(TokenKind::Str, "'<url>'")],
        },
    ];
    const HERO_AUX: &[AuxBlock] = &[AuxBlock::Code(SNIPPET)];
    const TAGS: &[AuxBlock] = &[AuxBlock::Chips(&[Chip::plain("JWT"), Chip::accent("RPC")])];
    const VERSUS: &[AuxBlock] = &[AuxBlock::Comparison {
        ours: Stat { value: "1", caption: "binary" },
        theirs: Stat { value: "15+", caption: "containers" },
    }];

    const HERO: FeatureCardSpec = FeatureCardSpec::new(Icon::Puzzle, "Drop-in", "Change one URL.")
        .glow()
        .spans(HERO_SPANS)
        .auxiliary(HERO_AUX);
    const PLAIN: FeatureCardSpec = FeatureCardSpec::new(Icon::Key, "Auth", "Built in.").auxiliary(TAGS);

    #[test]
    fn test_glow_card_markup() {
        setup();
        let html = bento_card(&HERO, 0, Pose::SHOWN, RevealState::Shown).into_string();

        assert!(html.contains("variant-glow-card"));
        assert!(html.contains("card-glow"));
        assert!(html.contains("box-shadow"));
        assert!(html.contains("variant-accent-icon-tile"));
        assert!(html.contains("sm:col-span-2 lg:row-span-2"));
    }

    #[test]
    fn test_plain_card_has_no_glow() {
        setup();
        let html = bento_card(&PLAIN, 2, Pose::SHOWN, RevealState::Shown).into_string();

        assert!(html.contains("variant-card"));
        assert!(!html.contains("card-glow"));
        assert!(!html.contains("box-shadow"));
        assert!(!html.contains("col-span"));
        assert!(html.contains(r#"data-index="2""#));
    }

    #[test]
    fn test_hidden_pose_inline() {
        setup();
        let hidden = Pose::hidden(&RevealConfig::default());
        let html = bento_card(&PLAIN, 0, hidden, RevealState::Hidden).into_string();

        assert!(html.contains("opacity: 0; transform: translateY(20px) scale(0.97)"));
        assert!(html.contains(r#"data-reveal="hidden""#));
    }

    #[test]
    fn test_icon_reference() {
        setup();
        let html = bento_card(&HERO, 0, Pose::SHOWN, RevealState::Shown).into_string();
        assert!(html.contains(r#"data-lucide="puzzle""#));
    }

    #[test]
    fn test_code_snippet_tokens() {
        setup();
        let html = bento_card(&HERO, 0, Pose::SHOWN, RevealState::Shown).into_string();

        assert!(html.contains(r#"<div class="code-line indent">"#));
        assert!(html.contains("'&lt;url&gt;'"));
        assert!(html.contains(r#"class="tok-keyword""#));
    }

    #[test]
    fn test_chip_variants() {
        setup();
        let html = bento_card(&PLAIN, 0, Pose::SHOWN, RevealState::Shown).into_string();

        assert!(html.contains("chip variant-chip"));
        assert!(html.contains("chip variant-accent-chip"));
    }

    #[test]
    fn test_comparison_block() {
        setup();
        let card = FeatureCardSpec::new(Icon::Server, "Single Binary", "One binary.").auxiliary(VERSUS);
        let html = bento_card(&card, 1, Pose::SHOWN, RevealState::Shown).into_string();

        assert!(html.contains(">15+</span>"));
        assert!(html.contains("line-through"));
        assert!(html.contains(">vs</span>"));
    }
}
