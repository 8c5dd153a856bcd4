//! Async client behavior over an in-memory transport.
//!
//! `RecordingTransport` captures every request it receives and answers with
//! a canned response, so these tests pin down dispatch semantics without a
//! server: one transport call per operation, nothing sent for requests that
//! fail to build, and exactly one callback invocation either way.

use std::sync::{Arc, Mutex};

use netmgmt_core::{
    ActivateImageRequest, ActivationOptions, ApiError, ClientConfig, HttpMethod, HttpRequest,
    HttpResponse, ImageQuery, NetworkClient, TaskCountQuery, Transport,
};
use pretty_assertions::assert_eq;

const BASE_URL: &str = "https://controller.local";

#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    reply: Mutex<Option<Result<HttpResponse, String>>>,
}

impl RecordingTransport {
    fn replying(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        *transport.reply.lock().unwrap() = Some(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        Arc::new(transport)
    }

    fn failing(message: &str) -> Arc<Self> {
        let transport = Self::default();
        *transport.reply.lock().unwrap() = Some(Err(message.to_string()));
        Arc::new(transport)
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        match self.reply.lock().unwrap().clone() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Transport(message)),
            None => Err(ApiError::Transport("no reply configured".to_string())),
        }
    }
}

fn client(transport: &Arc<RecordingTransport>) -> NetworkClient<Arc<RecordingTransport>> {
    NetworkClient::new(&ClientConfig::new(BASE_URL), Arc::clone(transport))
}

#[tokio::test]
async fn get_task_by_id_sends_one_request_and_decodes() {
    let transport = RecordingTransport::replying(
        200,
        r#"{"response":{"id":"abc123","progress":"done","isError":false},"version":"1.0"}"#,
    );
    let task = client(&transport)
        .tasks()
        .get_task_by_id("abc123")
        .send()
        .await
        .unwrap();

    assert_eq!(task.response.id.as_deref(), Some("abc123"));
    assert_eq!(task.response.progress.as_deref(), Some("done"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, format!("{BASE_URL}/api/v1/task/abc123"));
}

#[tokio::test]
async fn missing_parameter_never_reaches_transport() {
    let transport = RecordingTransport::replying(200, "{}");
    let err = client(&transport)
        .tasks()
        .get_task_tree("")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingParameter("taskId")));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn callback_runs_once_with_result() {
    let transport = RecordingTransport::replying(200, r#"{"response":3}"#);
    let calls = Mutex::new(Vec::new());
    client(&transport)
        .tasks()
        .get_task_count(&TaskCountQuery::default())
        .execute(|result| calls.lock().unwrap().push(result))
        .await;

    let calls = calls.into_inner().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_ref().unwrap().response, 3);
}

#[tokio::test]
async fn callback_runs_once_with_error() {
    let transport = RecordingTransport::replying(404, "");
    let calls = Mutex::new(Vec::new());
    client(&transport)
        .topology()
        .get_topology_details("999")
        .execute(|result| calls.lock().unwrap().push(result))
        .await;

    let calls = calls.into_inner().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Err(ApiError::NotFound)));
}

#[tokio::test]
async fn callback_runs_once_when_request_cannot_be_built() {
    let transport = RecordingTransport::replying(202, "{}");
    let mut calls = 0;
    client(&transport)
        .images()
        .trigger_software_image_distribution(&[])
        .execute(|result| {
            calls += 1;
            assert!(matches!(result, Err(ApiError::MissingParameter("distributions"))));
        })
        .await;

    assert_eq!(calls, 1);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn transport_failure_passes_through() {
    let transport = RecordingTransport::failing("connection reset");
    let err = client(&transport)
        .topology()
        .get_vlan_details()
        .send()
        .await
        .unwrap_err();

    match err {
        ApiError::Transport(message) => assert_eq!(message, "connection reset"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let transport = RecordingTransport::replying(500, r#"{"response":{"message":"boom"}}"#);
    let err = client(&transport)
        .images()
        .get_software_image_details(&ImageQuery::default())
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 500, .. }));
}

#[tokio::test]
async fn default_headers_precede_operation_headers() {
    let transport = RecordingTransport::replying(202, r#"{"response":{"taskId":"t-9"}}"#);
    let config = ClientConfig::new(BASE_URL).with_header("X-Auth-Token", "secret");
    let client = NetworkClient::new(&config, Arc::clone(&transport));

    let devices = [ActivateImageRequest {
        device_uuid: Some("dev-1".to_string()),
        image_uuid_list: vec!["img-1".to_string()],
        ..Default::default()
    }];
    let options = ActivationOptions {
        client_type: Some("script".to_string()),
        ..Default::default()
    };
    let ack = client
        .images()
        .trigger_software_image_activation(&devices, &options)
        .send()
        .await
        .unwrap();
    assert_eq!(ack.response.task_id, "t-9");

    let headers = transport.requests()[0].headers.clone();
    assert_eq!(
        headers,
        vec![
            ("X-Auth-Token".to_string(), "secret".to_string()),
            ("content-type".to_string(), "application/json".to_string()),
            ("Client-Type".to_string(), "script".to_string()),
        ]
    );
}

#[tokio::test]
async fn request_is_inspectable_before_sending() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = client(&transport);
    let pending = client.tasks().get_task_by_operation_id("op-1", 0, 500);

    let request = pending.request().unwrap();
    assert_eq!(
        request.url,
        format!("{BASE_URL}/api/v1/task/operation/op-1/0/500")
    );
    assert!(request.query().is_none());
    assert!(transport.requests().is_empty());
}
