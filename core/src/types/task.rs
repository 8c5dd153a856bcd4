//! Task tracking records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A background task on the controller. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub root_id: Option<String>,
    pub service_type: Option<String>,
    pub progress: Option<String>,
    pub data: Option<String>,
    pub is_error: Option<bool>,
    pub error_code: Option<String>,
    pub error_key: Option<String>,
    pub failure_reason: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub last_update: Option<i64>,
    pub username: Option<String>,
    pub instance_tenant_id: Option<String>,
    #[serde(rename = "additionalStatusURL")]
    pub additional_status_url: Option<String>,
    pub operation_id_list: Option<Value>,
    pub version: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: Task,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: Vec<Task>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Filters for `GET /api/v1/task`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub data: Option<String>,
    pub error_code: Option<String>,
    pub service_type: Option<String>,
    pub username: Option<String>,
    pub progress: Option<String>,
    pub is_error: Option<bool>,
    pub failure_reason: Option<String>,
    pub parent_id: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Filters for `GET /api/v1/task/count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCountQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub data: Option<String>,
    pub error_code: Option<String>,
    pub service_type: Option<String>,
    pub username: Option<String>,
    pub progress: Option<String>,
    pub is_error: Option<bool>,
    pub failure_reason: Option<String>,
    pub parent_id: Option<String>,
}

impl From<&TaskQuery> for TaskCountQuery {
    fn from(query: &TaskQuery) -> Self {
        Self {
            start_time: query.start_time.clone(),
            end_time: query.end_time.clone(),
            data: query.data.clone(),
            error_code: query.error_code.clone(),
            service_type: query.service_type.clone(),
            username: query.username.clone(),
            progress: query.progress.clone(),
            is_error: query.is_error,
            failure_reason: query.failure_reason.clone(),
            parent_id: query.parent_id.clone(),
        }
    }
}
