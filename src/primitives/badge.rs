//! Badge Primitive - Status pill for the compatibility table.
//!
//! The variant and label are a total function of [`Status`]. Adding a
//! status without a badge treatment is a compile error, not a fallthrough.

use maud::{Markup, html};

use crate::theme::{Variant, get_variant_style};
use crate::types::Status;

/// Visual treatment for a status badge.
pub const fn badge_variant(status: Status) -> Variant {
    match status {
        Status::Supported => Variant::Filled,
        Status::Planned => Variant::Outline,
    }
}

/// Render the badge for `status`.
pub fn badge(status: Status) -> Markup {
    let variant = badge_variant(status);
    let style = get_variant_style(variant);

    html! {
        span class=(format!("badge {}", variant.class()))
            style=(style.to_css())
            data-status=(status.as_str()) {
            (status.label())
        }
    }
}
