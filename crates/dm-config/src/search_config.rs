use serde::Deserialize;

use std::str::FromStr;

/// How a search string is matched against user emails.
///
/// The match predicate belongs to the data store contract, not to the
/// dashboard, so it is configurable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Email contains the search text
    #[default]
    Substring,
    /// Email starts with the search text
    Prefix,
    /// Email equals the search text
    Exact,
}

impl FromStr for MatchMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "prefix" => Ok(Self::Prefix),
            "exact" => Ok(Self::Exact),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub match_mode: MatchMode,
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            case_sensitive: false,
        }
    }
}
