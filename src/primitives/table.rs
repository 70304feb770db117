//! Table Primitive - The compatibility matrix.
//!
//! One row per record in input order: name cell, status badge, notes cell.
//! Rendering is a pure function of the rows and the active theme.

use maud::{Markup, html};

use crate::theme::active_theme;
use crate::types::CompatibilityRow;

use super::badge::badge;

/// Column headings, left to right.
pub const TABLE_COLUMNS: [&str; 3] = ["API", "Status", "Notes"];

/// Render `rows` as a table.
pub fn compatibility_table(rows: &[CompatibilityRow]) -> Markup {
    let theme = active_theme();
    let rule = format!("border-color: {}", theme.border.with_alpha(0.08).to_css());
    let muted = format!("color: {}", theme.muted.to_css());

    html! {
        div class="compat-table" style=(rule) {
            table {
                thead {
                    tr {
                        @for column in TABLE_COLUMNS {
                            th scope="col" style=(muted) { (column) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr data-key=(&*row.name) style=(rule) {
                            td class="compat-name" { (&*row.name) }
                            td class="compat-status" { (badge(row.status)) }
                            td class="compat-notes" style=(muted) { (&*row.notes) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::reset_theme_state;
    use crate::types::Status;

    fn setup() {
        reset_theme_state();
    }

    #[test]
    fn test_header_columns() {
        setup();
        let html = compatibility_table(&[]).into_string();

        let api = html.find(">API</th>").unwrap();
        let status = html.find(">Status</th>").unwrap();
        let notes = html.find(">Notes</th>").unwrap();
        assert!(api < status && status < notes);
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn test_rows_in_order() {
        setup();
        let rows = [
            CompatibilityRow::new("Realtime", Status::Planned, "WebSocket subscriptions"),
            CompatibilityRow::new("Database", Status::Supported, "Direct PostgreSQL access"),
        ];
        let html = compatibility_table(&rows).into_string();

        let first = html.find(r#"data-key="Realtime""#).unwrap();
        let second = html.find(r#"data-key="Database""#).unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<tr data-key=").count(), 2);
    }

    #[test]
    fn test_notes_escaped() {
        setup();
        let rows = [CompatibilityRow::new("Import", Status::Supported, "pg_dump custom & SQL format")];
        let html = compatibility_table(&rows).into_string();

        assert!(html.contains("pg_dump custom &amp; SQL format"));
    }
}
