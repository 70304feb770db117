//! Section Primitive - Anchored page section with a heading and lede.

use maud::{Markup, html};

use crate::theme::active_theme;

use super::types::SectionHeader;

/// Wrap `body` in a `<section>` headed by `header`.
pub fn section(header: &SectionHeader, body: Markup) -> Markup {
    let theme = active_theme();

    html! {
        section id=(header.id) class="landing-section" {
            header class="section-header" {
                h2 class="section-title" style=(format!("color: {}", theme.foreground.to_css())) {
                    (header.title)
                }
                p class="section-subtitle" style=(format!("color: {}", theme.muted.to_css())) {
                    (header.subtitle)
                }
            }
            (body)
        }
    }
}
