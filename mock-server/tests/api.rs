use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- images ---

#[tokio::test]
async fn list_images_returns_seeded_inventory() {
    let resp = app()
        .oneshot(get_request("/api/v1/image/importation"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"].as_array().unwrap().len(), 2);
    assert_eq!(body["version"], "1.0");
}

#[tokio::test]
async fn list_images_filters_by_family_and_golden_tag() {
    let resp = app()
        .oneshot(get_request(
            "/api/v1/image/importation?family=CAT9K&isTaggedGolden=true",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let images = body["response"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["imageUuid"], "img-cat9k");
}

#[tokio::test]
async fn distribution_returns_task_id() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/image/distribution",
            r#"[{"deviceUuid":"dev-1","imageUuid":"img-isr"}]"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body = body_json(resp).await;
    let task_id = body["response"]["taskId"].as_str().unwrap();
    assert_eq!(
        body["response"]["url"].as_str().unwrap(),
        format!("/api/v1/task/{task_id}")
    );
}

#[tokio::test]
async fn distribution_of_unknown_image_is_404() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/image/distribution",
            r#"[{"deviceUuid":"dev-1","imageUuid":"img-missing"}]"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn activation_rejects_empty_list() {
    let resp = app()
        .oneshot(json_request("/api/v1/image/activation/device", "[]"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn file_import_requires_multipart() {
    let resp = app()
        .oneshot(json_request("/api/v1/image/importation/source/file", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

fn multipart_request(uri: &str, boundary: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn file_import_accepts_framed_file_part() {
    let body = "--b0und\r\n\
        Content-Disposition: form-data; name=\"file\"; filename=\"fw.bin\"\r\n\
        Content-Type: application/octet-stream\r\n\r\n\
        DATA\r\n\
        --b0und--\r\n";
    let resp = app()
        .oneshot(multipart_request(
            "/api/v1/image/importation/source/file?isThirdParty=true&thirdPartyVendor=Acme",
            "b0und",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn file_import_rejects_unframed_body() {
    let body = "Content-Disposition: form-data; name=\"file\"; filename=\"x\"\r\n\r\nDATA";
    let resp = app()
        .oneshot(multipart_request(
            "/api/v1/image/importation/source/file",
            "b0und",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn file_import_requires_file_field() {
    let body = "--b0und\r\n\
        Content-Disposition: form-data; name=\"notes\"\r\n\r\n\
        hello\r\n\
        --b0und--\r\n";
    let resp = app()
        .oneshot(multipart_request(
            "/api/v1/image/importation/source/file",
            "b0und",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn url_import_then_list_includes_new_image() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "/api/v1/image/importation/source/url",
            r#"[{"sourceURL":"http://files/asav-9.20.bin","imageFamily":"ASAV"}]"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/image/importation?family=ASAV"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["response"][0]["name"], "asav-9.20.bin");
}

// --- tasks ---

#[tokio::test]
async fn get_task_by_id() {
    let resp = app()
        .oneshot(get_request("/api/v1/task/task-child"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"]["parentId"], "task-root");
}

#[tokio::test]
async fn get_task_not_found() {
    let resp = app()
        .oneshot(get_request("/api/v1/task/nope"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn count_is_not_shadowed_by_task_id_route() {
    let resp = app()
        .oneshot(get_request("/api/v1/task/count?isError=true"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"], 1);
}

#[tokio::test]
async fn tasks_by_operation_pages() {
    let resp = app()
        .oneshot(get_request("/api/v1/task/operation/op-1/1/10"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let tasks = body["response"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], "task-child");
}

#[tokio::test]
async fn task_tree_includes_descendants() {
    let resp = app()
        .oneshot(get_request("/api/v1/task/task-root/tree"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["response"].as_array().unwrap().len(), 2);
}

// --- topology ---

#[tokio::test]
async fn l2_topology_for_known_vlan() {
    let resp = app()
        .oneshot(get_request("/api/v1/topology/l2/10"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"]["id"], "10");
    assert_eq!(body["response"]["links"][0]["startPortID"], "port-core-1");
}

#[tokio::test]
async fn l2_topology_for_unknown_vlan_is_404() {
    let resp = app()
        .oneshot(get_request("/api/v1/topology/l2/999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn l3_topology_rejects_unknown_protocol() {
    let resp = app()
        .oneshot(get_request("/api/v1/topology/l3/RIP"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vlan_names() {
    let resp = app()
        .oneshot(get_request("/api/v1/topology/vlan/vlan-names"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["response"], serde_json::json!(["1", "10", "20"]));
}
