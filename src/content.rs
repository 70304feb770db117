//! Static landing content.
//!
//! The compatibility rows and feature cards are module-level constants,
//! built once and never mutated. [`compatibility_table`] and
//! [`feature_grid`] wrap them in validated containers; a content defect
//! surfaces there instead of as a half-rendered section.

use std::collections::HashSet;

use tracing::warn;

use crate::error::ContentError;
use crate::layout::validate_placement;
use crate::primitives::{
    AuxBlock, Chip, CodeLine, FeatureCardSpec, SectionHeader, Stat, Token, TokenKind,
};
use crate::types::{Breakpoint, CompatibilityRow, Icon, SpanRule, Status};

// =============================================================================
// Compatibility matrix
// =============================================================================

pub const COMPATIBILITY_HEADER: SectionHeader = SectionHeader {
    id: "compatibility",
    title: "API Compatibility",
    subtitle: "Works with @supabase/supabase-js out of the box.",
};

pub const COMPATIBILITY_ROWS: [CompatibilityRow; 11] = [
    CompatibilityRow::new("Auth (GoTrue)", Status::Supported, "Signup, login, token refresh, user management"),
    CompatibilityRow::new("REST (PostgREST)", Status::Supported, "Full CRUD, filtering, ordering, pagination, RPC"),
    CompatibilityRow::new("Database", Status::Supported, "Direct PostgreSQL access, connection pooling"),
    CompatibilityRow::new("Dashboard", Status::Supported, "Full project management UI"),
    CompatibilityRow::new("Database Import", Status::Supported, "pg_dump custom & SQL format"),
    CompatibilityRow::new(
        "S3 Backups",
        Status::Supported,
        "Scheduled backups with per-project selection, works with AWS S3, MinIO, R2",
    ),
    CompatibilityRow::new(
        "Admin Panel",
        Status::Supported,
        "User management, invite system, registration control (open/invite/disabled)",
    ),
    CompatibilityRow::new("Row Level Security", Status::Supported, "Standard PostgreSQL RLS policies"),
    CompatibilityRow::new("Storage", Status::Planned, "File/object storage"),
    CompatibilityRow::new("Realtime", Status::Planned, "WebSocket subscriptions"),
    CompatibilityRow::new("Edge Functions", Status::Planned, "Serverless functions"),
];

/// Ordered, validated compatibility rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityTable {
    rows: Vec<CompatibilityRow>,
}

impl CompatibilityTable {
    /// Validate `rows`: names and notes present, names unique.
    pub fn new(rows: Vec<CompatibilityRow>) -> Result<Self, ContentError> {
        check_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Parse a JSON array of `{ "name", "status", "notes" }` objects.
    ///
    /// Unknown status literals are rejected rather than defaulted.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let rows: Vec<CompatibilityRow> = serde_json::from_str(json)?;
        Self::new(rows)
    }

    pub fn rows(&self) -> &[CompatibilityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn check_rows(rows: &[CompatibilityRow]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if row.name.trim().is_empty() {
            return Err(missing("compatibility row", index, "name"));
        }
        if row.notes.trim().is_empty() {
            return Err(missing("compatibility row", index, "notes"));
        }
        if !seen.insert(&*row.name) {
            warn!(name = %row.name, "duplicate compatibility row");
            return Err(ContentError::DuplicateRow(row.name.to_string()));
        }
    }

    Ok(())
}

/// The shipped compatibility matrix.
pub fn compatibility_table() -> Result<CompatibilityTable, ContentError> {
    CompatibilityTable::new(COMPATIBILITY_ROWS.to_vec())
}

// =============================================================================
// Feature grid
// =============================================================================

pub const FEATURES_HEADER: SectionHeader = SectionHeader {
    id: "features",
    title: "Everything You Need",
    subtitle: "Zero bloat. Full Supabase compatibility. Production-ready from day one.",
};

const HERO_SPANS: &[SpanRule] = &[
    SpanRule::columns(Breakpoint::Sm, 2),
    SpanRule::rows(Breakpoint::Lg, 2),
];
const WIDE_SPANS: &[SpanRule] = &[SpanRule::columns(Breakpoint::Sm, 2)];

const CREATE_CLIENT: &[CodeLine] = &[
    CodeLine {
        indent: false,
        tokens: &[Token::new(TokenKind::Comment, "// just change the URL")],
    },
    CodeLine {
        indent: false,
        tokens: &[
            Token::new(TokenKind::Keyword, "const"),
            Token::new(TokenKind::Ident, " supabase "),
            Token::new(TokenKind::Punct, "= "),
            Token::new(TokenKind::Keyword, "createClient"),
            Token::new(TokenKind::Punct, "("),
        ],
    },
    CodeLine {
        indent: true,
        tokens: &[
            Token::new(TokenKind::Str, "'https://your-server.com'"),
            Token::new(TokenKind::Punct, ","),
        ],
    },
    CodeLine {
        indent: true,
        tokens: &[Token::new(TokenKind::Str, "'your-anon-key'")],
    },
    CodeLine {
        indent: false,
        tokens: &[Token::new(TokenKind::Punct, ")")],
    },
];

const CLIENT_CHIPS: &[Chip] = &[
    Chip::accent(".auth.signUp()"),
    Chip::accent(".from().select()"),
    Chip::accent(".rpc()"),
];

const DROP_IN_AUX: &[AuxBlock] = &[AuxBlock::Code(CREATE_CLIENT), AuxBlock::Chips(CLIENT_CHIPS)];

const SINGLE_BINARY_AUX: &[AuxBlock] = &[AuxBlock::Comparison {
    ours: Stat { value: "1", caption: "binary" },
    theirs: Stat { value: "15+", caption: "containers" },
}];

const AUTH_AUX: &[AuxBlock] = &[AuxBlock::Chips(&[
    Chip::plain("JWT"),
    Chip::plain("Signup"),
    Chip::plain("Token rotation"),
])];

const REST_AUX: &[AuxBlock] = &[AuxBlock::Chips(&[
    Chip::accent("SELECT"),
    Chip::accent("INSERT"),
    Chip::accent("RPC"),
])];

const DASHBOARD_AUX: &[AuxBlock] = &[AuxBlock::DashboardSketch];

const TENANT_AUX: &[AuxBlock] = &[AuxBlock::Chips(&[
    Chip::accent("project_a"),
    Chip::plain("project_b"),
    Chip::plain("project_..."),
])];

const BACKUP_AUX: &[AuxBlock] = &[AuxBlock::Chips(&[
    Chip::plain("AWS"),
    Chip::plain("MinIO"),
    Chip::plain("R2"),
])];

/// Bento cards in render (and stagger) order.
pub const FEATURE_CARDS: [FeatureCardSpec; 7] = [
    FeatureCardSpec::new(
        Icon::Puzzle,
        "Drop-in Compatible",
        "Works with @supabase/supabase-js out of the box. Change one URL \u{2014} everything works.",
    )
    .glow()
    .spans(HERO_SPANS)
    .auxiliary(DROP_IN_AUX),
    FeatureCardSpec::new(
        Icon::Server,
        "Single Binary",
        "One Go binary + PostgreSQL. No microservice sprawl.",
    )
    .spans(WIDE_SPANS)
    .auxiliary(SINGLE_BINARY_AUX),
    FeatureCardSpec::new(
        Icon::Key,
        "Auth Built-in",
        "GoTrue-compatible auth with JWT, signup, login, and token refresh.",
    )
    .auxiliary(AUTH_AUX),
    FeatureCardSpec::new(
        Icon::Database,
        "REST API",
        "PostgREST-compatible CRUD, filtering, ordering, and RPC.",
    )
    .auxiliary(REST_AUX),
    FeatureCardSpec::new(
        Icon::LayoutDashboard,
        "Full Dashboard",
        "Modern UI for managing projects, API keys, backups, and settings.",
    )
    .spans(WIDE_SPANS)
    .auxiliary(DASHBOARD_AUX),
    FeatureCardSpec::new(
        Icon::Users,
        "Multi-Tenant",
        "Isolated databases and API keys per project.",
    )
    .auxiliary(TENANT_AUX),
    FeatureCardSpec::new(
        Icon::HardDrive,
        "S3 Backups",
        "Scheduled backups to any S3-compatible storage.",
    )
    .auxiliary(BACKUP_AUX),
];

/// Ordered, validated feature cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureGrid {
    cards: &'static [FeatureCardSpec],
}

impl FeatureGrid {
    /// Validate `cards`: required text present, titles unique, exactly one
    /// glow card, and spans that fit and never overlap at any breakpoint.
    pub fn new(cards: &'static [FeatureCardSpec]) -> Result<Self, ContentError> {
        let mut titles = HashSet::with_capacity(cards.len());

        for (index, card) in cards.iter().enumerate() {
            if card.title.trim().is_empty() {
                return Err(missing("feature card", index, "title"));
            }
            if card.description.trim().is_empty() {
                return Err(missing("feature card", index, "description"));
            }
            if !titles.insert(card.title) {
                return Err(ContentError::DuplicateCard(card.title));
            }
        }

        let glowing = cards.iter().filter(|c| c.emphasized).count();
        if glowing != 1 {
            warn!(glowing, "feature grid needs exactly one glow card");
            return Err(ContentError::GlowCount(glowing));
        }

        validate_placement(cards)?;

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &'static [FeatureCardSpec] {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The shipped feature grid.
pub fn feature_grid() -> Result<FeatureGrid, ContentError> {
    FeatureGrid::new(&FEATURE_CARDS)
}

fn missing(kind: &'static str, index: usize, field: &'static str) -> ContentError {
    warn!(kind, index, field, "content field missing");
    ContentError::MissingField { kind, index, field }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capabilities;

    #[test]
    fn test_shipped_table_is_valid() {
        let table = compatibility_table().unwrap();
        assert_eq!(table.len(), 11);
        assert_eq!(table.rows()[0].name, "Auth (GoTrue)");
        assert_eq!(table.rows()[10].name, "Edge Functions");
    }

    #[test]
    fn test_shipped_table_status_split() {
        let table = compatibility_table().unwrap();
        let planned: Vec<_> = table
            .rows()
            .iter()
            .filter(|r| r.status == Status::Planned)
            .map(|r| &*r.name)
            .collect();
        assert_eq!(planned, vec!["Storage", "Realtime", "Edge Functions"]);
    }

    #[test]
    fn test_duplicate_row_rejected() {
        let rows = vec![
            CompatibilityRow::new("Storage", Status::Planned, "a"),
            CompatibilityRow::new("Storage", Status::Supported, "b"),
        ];
        assert!(matches!(
            CompatibilityTable::new(rows),
            Err(ContentError::DuplicateRow(name)) if name == "Storage"
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let rows = vec![CompatibilityRow::new("  ", Status::Planned, "notes")];
        assert!(matches!(
            CompatibilityTable::new(rows),
            Err(ContentError::MissingField { field: "name", index: 0, .. })
        ));
    }

    #[test]
    fn test_rows_from_json() {
        let table = CompatibilityTable::from_json(
            r#"[
                { "name": "Storage", "status": "planned", "notes": "File/object storage" },
                { "name": "Database", "status": "supported", "notes": "Direct access" }
            ]"#,
        )
        .unwrap();

        assert_eq!(table.rows()[0].status, Status::Planned);
        assert_eq!(table.rows()[1].status, Status::Supported);
    }

    #[test]
    fn test_unknown_status_in_json_fails() {
        let result = CompatibilityTable::from_json(
            r#"[{ "name": "Queues", "status": "beta", "notes": "Background jobs" }]"#,
        );
        assert!(matches!(result, Err(ContentError::Json(_))));
    }

    #[test]
    fn test_missing_field_in_json_fails() {
        let result = CompatibilityTable::from_json(r#"[{ "name": "Queues", "status": "planned" }]"#);
        assert!(matches!(result, Err(ContentError::Json(_))));
    }

    #[test]
    fn test_shipped_grid_is_valid() {
        let grid = feature_grid().unwrap();
        assert_eq!(grid.len(), 7);
        assert_eq!(grid.cards()[0].title, "Drop-in Compatible");
        assert_eq!(grid.cards()[6].title, "S3 Backups");
    }

    #[test]
    fn test_exactly_one_glow_card_is_drop_in() {
        let grid = feature_grid().unwrap();
        let glowing: Vec<_> = grid
            .cards()
            .iter()
            .filter(|c| c.capabilities().contains(Capabilities::GLOW))
            .map(|c| c.title)
            .collect();

        assert_eq!(glowing, vec!["Drop-in Compatible"]);
    }

    #[test]
    fn test_every_card_has_auxiliary_content() {
        for card in &FEATURE_CARDS {
            assert!(card.capabilities().contains(Capabilities::AUXILIARY), "{}", card.title);
        }
    }

    const NO_GLOW: [FeatureCardSpec; 2] = [
        FeatureCardSpec::new(Icon::Key, "a", "x"),
        FeatureCardSpec::new(Icon::Users, "b", "y"),
    ];

    const TWO_GLOW: [FeatureCardSpec; 2] = [
        FeatureCardSpec::new(Icon::Key, "a", "x").glow(),
        FeatureCardSpec::new(Icon::Users, "b", "y").glow(),
    ];

    const DUPLICATE_TITLES: [FeatureCardSpec; 2] = [
        FeatureCardSpec::new(Icon::Key, "a", "x").glow(),
        FeatureCardSpec::new(Icon::Users, "a", "y"),
    ];

    const EMPTY_DESCRIPTION: [FeatureCardSpec; 1] = [FeatureCardSpec::new(Icon::Key, "a", "").glow()];

    #[test]
    fn test_glow_count_enforced() {
        assert!(matches!(FeatureGrid::new(&NO_GLOW), Err(ContentError::GlowCount(0))));
        assert!(matches!(FeatureGrid::new(&TWO_GLOW), Err(ContentError::GlowCount(2))));
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        assert!(matches!(
            FeatureGrid::new(&DUPLICATE_TITLES),
            Err(ContentError::DuplicateCard("a"))
        ));
    }

    #[test]
    fn test_missing_description_rejected() {
        assert!(matches!(
            FeatureGrid::new(&EMPTY_DESCRIPTION),
            Err(ContentError::MissingField { field: "description", .. })
        ));
    }
}
