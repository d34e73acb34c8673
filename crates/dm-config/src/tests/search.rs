use crate::{MatchMode, SearchConfig};

use std::str::FromStr;

#[test]
fn test_default_search_config() {
    let config = SearchConfig::default();
    assert_eq!(config.match_mode, MatchMode::Substring);
    assert!(!config.case_sensitive);
}

#[test]
fn test_match_mode_from_str() {
    assert_eq!(MatchMode::from_str("substring").unwrap(), MatchMode::Substring);
    assert_eq!(MatchMode::from_str("Prefix").unwrap(), MatchMode::Prefix);
    assert_eq!(MatchMode::from_str("EXACT").unwrap(), MatchMode::Exact);
    assert!(MatchMode::from_str("fuzzy").is_err());
}
