use serde::Deserialize;

/// Form body of the search action. `searchText` keeps the camelCase
/// field name the search form submits.
#[derive(Debug, Deserialize)]
pub struct UserSearchRequest {
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
    /// Client-issued request counter, echoed back so stale responses
    /// can be discarded (see dm_core::SearchSequence)
    pub seq: Option<u64>,
}
