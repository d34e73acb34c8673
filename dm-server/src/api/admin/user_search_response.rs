use crate::UserWithMetricsDto;

use serde::Serialize;

/// Search action response. `seq` echoes the request counter so the
/// client can drop responses that arrive after a newer one.
#[derive(Debug, Serialize)]
pub struct UserSearchResponse {
    pub seq: u64,
    pub users: Vec<UserWithMetricsDto>,
}
