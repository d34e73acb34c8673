use crate::MIN_SEARCH_TEXT_LEN;

/// What the users table should display.
///
/// Derived on every render from the current inputs; nothing is stored
/// between derivations. Exactly one variant holds for any input
/// combination: Loading wins outright, Populated wins whenever rows
/// exist, and the two empty states split on input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    /// A search submission is in flight
    Loading,
    /// No rows and the input is too short to have searched
    Instruction,
    /// No rows for a valid search
    Empty,
    /// Table rows
    Populated,
}

impl TableState {
    /// Derive the display state from the loading flag, the search input
    /// length (in chars) and the current row count.
    pub fn derive(is_loading: bool, search_len: usize, row_count: usize) -> Self {
        if is_loading {
            Self::Loading
        } else if row_count > 0 {
            Self::Populated
        } else if search_len < MIN_SEARCH_TEXT_LEN {
            Self::Instruction
        } else {
            Self::Empty
        }
    }

    /// Placeholder text for the empty states; None when rows (or a
    /// spinner) are shown instead.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Instruction => Some("Please enter at least 3 characters to search"),
            Self::Empty => Some("No users found"),
            Self::Loading | Self::Populated => None,
        }
    }
}
