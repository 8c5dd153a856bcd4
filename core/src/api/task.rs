use crate::client::NetworkClient;
use crate::request::RequestBuilder;
use crate::transport::Transport;
use crate::types::{CountResponse, TaskCountQuery, TaskListResponse, TaskQuery, TaskResponse};

/// Task tracking.
pub struct TaskApi<'c, T> {
    client: &'c NetworkClient<T>,
}

impl<'c, T: Transport> TaskApi<'c, T> {
    pub(crate) fn new(client: &'c NetworkClient<T>) -> Self {
        Self { client }
    }

    pub fn get_tasks(&self, query: &TaskQuery) -> RequestBuilder<'c, T, TaskListResponse> {
        let request = self.client.endpoints().build_get_tasks(query);
        self.client.dispatch(Ok(request))
    }

    pub fn get_task_by_id(&self, task_id: &str) -> RequestBuilder<'c, T, TaskResponse> {
        let request = self.client.endpoints().build_get_task_by_id(task_id);
        self.client.dispatch(request)
    }

    pub fn get_task_count(&self, query: &TaskCountQuery) -> RequestBuilder<'c, T, CountResponse> {
        let request = self.client.endpoints().build_get_task_count(query);
        self.client.dispatch(Ok(request))
    }

    /// Tasks spawned by one operation, paged by `offset` and `limit`.
    pub fn get_task_by_operation_id(
        &self,
        operation_id: &str,
        offset: u32,
        limit: u32,
    ) -> RequestBuilder<'c, T, TaskListResponse> {
        let request = self
            .client
            .endpoints()
            .build_get_task_by_operation_id(operation_id, offset, limit);
        self.client.dispatch(request)
    }

    /// The task and all of its descendants.
    pub fn get_task_tree(&self, task_id: &str) -> RequestBuilder<'c, T, TaskListResponse> {
        let request = self.client.endpoints().build_get_task_tree(task_id);
        self.client.dispatch(request)
    }
}
