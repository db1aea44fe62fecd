use domainboard_application::ports::DatabaseStats;
use serde::Serialize;

/// Connectivity diagnostics body, shared by the success and failure cases.
#[derive(Debug, Clone, Serialize)]
pub struct DbStatusResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl DbStatusResponse {
    pub fn connected(timestamp: String) -> Self {
        Self {
            connected: true,
            timestamp: Some(timestamp),
            error: None,
            message: "Successfully connected to database".to_string(),
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            connected: false,
            timestamp: None,
            error: Some(error),
            message: "Failed to connect to database".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatsResponse {
    pub users: i64,
    pub dns_records: i64,
    pub monitoring_entries: i64,
    pub alerts: i64,
}

impl DbStatsResponse {
    pub fn from_stats(stats: DatabaseStats) -> Self {
        Self {
            users: stats.users,
            dns_records: stats.dns_records,
            monitoring_entries: stats.monitoring_entries,
            alerts: stats.alerts,
        }
    }
}
