//! Client-side view logic kept as pure domain code so it stays testable:
//! the table display-state derivation and the stale-response guard for
//! search-as-you-type.

pub mod search_sequence;
pub mod table_state;

/// Minimum search text length before a search is issued
pub const MIN_SEARCH_TEXT_LEN: usize = 3;
