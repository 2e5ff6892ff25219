use crate::time_window::TimeWindow;

/// Identifier recorded when a request carries neither a forwarded-address
/// header nor a peer address.
pub const LOOPBACK_PLACEHOLDER: &str = "127.0.0.1";

/// Width of the `client_identifier` column.
pub const MAX_CLIENT_IDENTIFIER_LEN: usize = 100;

/// One page load. Rows are append-only and only ever removed in bulk by the
/// retention sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub id: i64,
    pub timestamp: String,
    pub client_identifier: String,
}

/// Result of a windowed count, already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorCount {
    pub window: TimeWindow,
    pub value: u64,
    pub formatted: String,
}
