use super::Endpoints;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::params::{expand_path, QueryParams};
use crate::types::{TaskCountQuery, TaskQuery};

impl Endpoints {
    /// `GET /api/v1/task`
    pub fn build_get_tasks(&self, query: &TaskQuery) -> HttpRequest {
        let query = task_filters(&TaskCountQuery::from(query))
            .opt("offset", query.offset)
            .opt("limit", query.limit)
            .opt("sortBy", query.sort_by.as_deref())
            .opt("order", query.order.as_deref());
        self.get("/api/v1/task", query)
    }

    /// `GET /api/v1/task/{taskId}`
    pub fn build_get_task_by_id(&self, task_id: &str) -> Result<HttpRequest, ApiError> {
        let path = expand_path("/api/v1/task/{taskId}", &[("taskId", task_id)])?;
        Ok(self.get(&path, QueryParams::new()))
    }

    /// `GET /api/v1/task/count`
    pub fn build_get_task_count(&self, query: &TaskCountQuery) -> HttpRequest {
        self.get("/api/v1/task/count", task_filters(query))
    }

    /// `GET /api/v1/task/operation/{operationId}/{offset}/{limit}`
    pub fn build_get_task_by_operation_id(
        &self,
        operation_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<HttpRequest, ApiError> {
        let offset = offset.to_string();
        let limit = limit.to_string();
        let path = expand_path(
            "/api/v1/task/operation/{operationId}/{offset}/{limit}",
            &[
                ("operationId", operation_id),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
            ],
        )?;
        Ok(self.get(&path, QueryParams::new()))
    }

    /// `GET /api/v1/task/{taskId}/tree`
    pub fn build_get_task_tree(&self, task_id: &str) -> Result<HttpRequest, ApiError> {
        let path = expand_path("/api/v1/task/{taskId}/tree", &[("taskId", task_id)])?;
        Ok(self.get(&path, QueryParams::new()))
    }
}

/// Filters shared by the list and count endpoints, in wire order.
fn task_filters(query: &TaskCountQuery) -> QueryParams {
    QueryParams::new()
        .opt("startTime", query.start_time.as_deref())
        .opt("endTime", query.end_time.as_deref())
        .opt("data", query.data.as_deref())
        .opt("errorCode", query.error_code.as_deref())
        .opt("serviceType", query.service_type.as_deref())
        .opt("username", query.username.as_deref())
        .opt("progress", query.progress.as_deref())
        .opt("isError", query.is_error)
        .opt("failureReason", query.failure_reason.as_deref())
        .opt("parentId", query.parent_id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://controller.local")
    }

    #[test]
    fn task_by_id_substitutes_literally() {
        let req = endpoints().build_get_task_by_id("abc123").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://controller.local/api/v1/task/abc123");
        assert!(req.body.is_none());
    }

    #[test]
    fn task_by_id_encodes_reserved_characters() {
        let req = endpoints().build_get_task_by_id("a/b c").unwrap();
        assert_eq!(req.url, "https://controller.local/api/v1/task/a%2Fb%20c");
    }

    #[test]
    fn task_by_id_rejects_empty_id() {
        let err = endpoints().build_get_task_by_id("").unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("taskId")));
    }

    #[test]
    fn operation_lookup_uses_three_path_segments_and_no_query() {
        let req = endpoints()
            .build_get_task_by_operation_id("op-7", 0, 500)
            .unwrap();
        assert_eq!(
            req.url,
            "https://controller.local/api/v1/task/operation/op-7/0/500"
        );
        assert!(req.query().is_none());
    }

    #[test]
    fn task_tree_path() {
        let req = endpoints().build_get_task_tree("t-1").unwrap();
        assert_eq!(req.url, "https://controller.local/api/v1/task/t-1/tree");
    }

    #[test]
    fn list_omits_absent_filters() {
        let query = TaskQuery {
            service_type: Some("SWIM".to_string()),
            is_error: Some(false),
            limit: Some(10),
            ..Default::default()
        };
        let req = endpoints().build_get_tasks(&query);
        assert_eq!(req.query(), Some("serviceType=SWIM&isError=false&limit=10"));
    }

    #[test]
    fn list_without_filters_has_no_query() {
        let req = endpoints().build_get_tasks(&TaskQuery::default());
        assert_eq!(req.url, "https://controller.local/api/v1/task");
    }

    #[test]
    fn count_carries_filters_only() {
        let query = TaskCountQuery {
            parent_id: Some("t-1".to_string()),
            ..Default::default()
        };
        let req = endpoints().build_get_task_count(&query);
        assert_eq!(
            req.url,
            "https://controller.local/api/v1/task/count?parentId=t-1"
        );
    }
}
