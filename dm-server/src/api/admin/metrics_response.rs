use serde::Serialize;

/// Global dashboard counts shown in the metric cards
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub user_count: i64,
    pub dns_record_count: i64,
    pub certificate_count: i64,
}
