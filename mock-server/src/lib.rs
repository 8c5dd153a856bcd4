//! In-memory stand-in for the network-management controller.
//!
//! Serves the image, task, and topology endpoints on the controller's real
//! paths with seeded data. Image mutations record a background task and
//! answer `202 Accepted` with its id, as the controller does.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_uuid: String,
    pub name: String,
    pub family: String,
    pub version: String,
    pub vendor: String,
    pub application_type: String,
    pub is_tagged_golden: bool,
    pub import_source_type: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub root_id: String,
    pub service_type: String,
    pub progress: String,
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub start_time: i64,
    pub operation_id_list: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Inventory {
    pub images: Vec<Image>,
    pub tasks: Vec<Task>,
}

impl Inventory {
    /// Two images, a parent/child task pair under operation `op-1`, and one
    /// failed task.
    pub fn seeded() -> Self {
        let images = vec![
            Image {
                image_uuid: "img-cat9k".to_string(),
                name: "cat9k_iosxe.17.09.04a.SPA.bin".to_string(),
                family: "CAT9K".to_string(),
                version: "17.9.4a".to_string(),
                vendor: "CISCO".to_string(),
                application_type: "SWIM".to_string(),
                is_tagged_golden: true,
                import_source_type: "FILESYSTEM".to_string(),
            },
            Image {
                image_uuid: "img-isr".to_string(),
                name: "isr4300-universalk9.17.06.05.SPA.bin".to_string(),
                family: "ISR4300".to_string(),
                version: "17.6.5".to_string(),
                vendor: "CISCO".to_string(),
                application_type: "SWIM".to_string(),
                is_tagged_golden: false,
                import_source_type: "URL".to_string(),
            },
        ];
        let tasks = vec![
            Task {
                id: "task-root".to_string(),
                parent_id: None,
                root_id: "task-root".to_string(),
                service_type: "SWIM".to_string(),
                progress: "Distribution completed".to_string(),
                is_error: false,
                failure_reason: None,
                start_time: 1_700_000_000_000,
                operation_id_list: vec!["op-1".to_string()],
            },
            Task {
                id: "task-child".to_string(),
                parent_id: Some("task-root".to_string()),
                root_id: "task-root".to_string(),
                service_type: "SWIM".to_string(),
                progress: "Image copied to device".to_string(),
                is_error: false,
                failure_reason: None,
                start_time: 1_700_000_001_000,
                operation_id_list: vec!["op-1".to_string()],
            },
            Task {
                id: "task-failed".to_string(),
                parent_id: None,
                root_id: "task-failed".to_string(),
                service_type: "NCSP".to_string(),
                progress: "Inventory sync failed".to_string(),
                is_error: true,
                failure_reason: Some("device unreachable".to_string()),
                start_time: 1_700_000_002_000,
                operation_id_list: vec!["op-2".to_string()],
            },
        ];
        Self { images, tasks }
    }

    fn record_task(&mut self, service_type: &str, progress: String) -> String {
        let id = Uuid::new_v4().to_string();
        self.tasks.push(Task {
            id: id.clone(),
            parent_id: None,
            root_id: id.clone(),
            service_type: service_type.to_string(),
            progress,
            is_error: false,
            failure_reason: None,
            start_time: 1_700_000_100_000,
            operation_id_list: vec![Uuid::new_v4().to_string()],
        });
        id
    }

    fn has_image(&self, image_uuid: &str) -> bool {
        self.images.iter().any(|image| image.image_uuid == image_uuid)
    }
}

pub type Db = Arc<RwLock<Inventory>>;

type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    app_with(Inventory::seeded())
}

pub fn app_with(inventory: Inventory) -> Router {
    let db: Db = Arc::new(RwLock::new(inventory));
    Router::new()
        .route("/api/v1/image/importation", get(list_images))
        .route("/api/v1/image/activation/device", post(activate_images))
        .route("/api/v1/image/distribution", post(distribute_images))
        .route("/api/v1/image/importation/source/file", post(import_file))
        .route("/api/v1/image/importation/source/url", post(import_url))
        .route("/api/v1/task", get(list_tasks))
        .route("/api/v1/task/count", get(count_tasks))
        .route("/api/v1/task/{task_id}", get(get_task))
        .route("/api/v1/task/{task_id}/tree", get(task_tree))
        .route(
            "/api/v1/task/operation/{operation_id}/{offset}/{limit}",
            get(tasks_by_operation),
        )
        .route("/api/v1/topology/l2/{vlan_id}", get(l2_topology))
        .route("/api/v1/topology/l3/{topology_type}", get(l3_topology))
        .route("/api/v1/topology/physical-topology", get(physical_topology))
        .route("/api/v1/topology/site-topology", get(site_topology))
        .route("/api/v1/topology/vlan/vlan-names", get(vlan_names))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn envelope(response: Value) -> Json<Value> {
    Json(json!({ "response": response, "version": "1.0" }))
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    let body = envelope(json!({ "errorCode": status.as_u16().to_string(), "message": message }));
    (status, body)
}

fn accepted(task_id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::ACCEPTED,
        envelope(json!({ "taskId": task_id, "url": format!("/api/v1/task/{task_id}") })),
    )
}

// --- images ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilter {
    pub image_uuid: Option<String>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub is_tagged_golden: Option<bool>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

async fn list_images(State(db): State<Db>, Query(filter): Query<ImageFilter>) -> Json<Value> {
    let inventory = db.read().await;
    let images: Vec<&Image> = inventory
        .images
        .iter()
        .filter(|i| filter.image_uuid.as_ref().is_none_or(|v| &i.image_uuid == v))
        .filter(|i| filter.name.as_ref().is_none_or(|v| &i.name == v))
        .filter(|i| filter.family.as_ref().is_none_or(|v| &i.family == v))
        .filter(|i| filter.is_tagged_golden.is_none_or(|v| i.is_tagged_golden == v))
        .skip(filter.offset.unwrap_or(0))
        .take(filter.limit.unwrap_or(usize::MAX))
        .collect();
    envelope(json!(images))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub device_uuid: Option<String>,
    #[serde(default)]
    pub image_uuid_list: Vec<String>,
}

async fn activate_images(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(devices): Json<Vec<Activation>>,
) -> ApiResult {
    if devices.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "no devices to activate"));
    }
    let mut inventory = db.write().await;
    if let Some(missing) = devices
        .iter()
        .flat_map(|d| &d.image_uuid_list)
        .find(|uuid| !inventory.has_image(uuid))
    {
        return Err(error(StatusCode::NOT_FOUND, &format!("image {missing} not found")));
    }
    let client_type = headers
        .get("client-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let task_id = inventory.record_task(
        "SWIM",
        format!("Activation of {} device(s) requested by {client_type}", devices.len()),
    );
    tracing::info!(%task_id, devices = devices.len(), "image activation triggered");
    Ok(accepted(&task_id))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub device_uuid: Option<String>,
    pub image_uuid: Option<String>,
}

async fn distribute_images(
    State(db): State<Db>,
    Json(distributions): Json<Vec<Distribution>>,
) -> ApiResult {
    if distributions.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "no distributions requested"));
    }
    let mut inventory = db.write().await;
    for distribution in &distributions {
        let image_uuid = distribution.image_uuid.as_deref().unwrap_or_default();
        if !inventory.has_image(image_uuid) {
            return Err(error(
                StatusCode::NOT_FOUND,
                &format!("image {image_uuid} not found"),
            ));
        }
    }
    let task_id = inventory.record_task(
        "SWIM",
        format!("Distribution to {} device(s) started", distributions.len()),
    );
    tracing::info!(%task_id, "image distribution triggered");
    Ok(accepted(&task_id))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileImportOptions {
    pub is_third_party: Option<bool>,
    pub third_party_vendor: Option<String>,
    pub third_party_image_family: Option<String>,
}

async fn import_file(
    State(db): State<Db>,
    Query(options): Query<FileImportOptions>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult {
    let mut multipart = multipart.map_err(|e| error(e.status(), &e.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error(e.status(), &e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| error(e.status(), &e.body_text()))?;
        upload = Some((file_name, data));
    }
    let Some((Some(file_name), data)) = upload else {
        return Err(error(StatusCode::BAD_REQUEST, "missing file part"));
    };

    let third_party = options.is_third_party.unwrap_or(false);
    let mut inventory = db.write().await;
    inventory.images.push(Image {
        image_uuid: Uuid::new_v4().to_string(),
        name: file_name.clone(),
        family: options.third_party_image_family.unwrap_or_default(),
        vendor: if third_party {
            options.third_party_vendor.unwrap_or_default()
        } else {
            "CISCO".to_string()
        },
        import_source_type: "LOCAL".to_string(),
        ..Image::default()
    });
    let task_id = inventory.record_task("SWIM", format!("Import of {file_name} started"));
    tracing::info!(%task_id, %file_name, bytes = data.len(), "local image import triggered");
    Ok(accepted(&task_id))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlImport {
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    pub image_family: Option<String>,
    pub vendor: Option<String>,
    pub application_type: Option<String>,
}

async fn import_url(State(db): State<Db>, Json(images): Json<Vec<UrlImport>>) -> ApiResult {
    if images.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "no images to import"));
    }
    let mut inventory = db.write().await;
    for image in images.iter() {
        let Some(source_url) = image.source_url.as_deref() else {
            return Err(error(StatusCode::BAD_REQUEST, "sourceURL is required"));
        };
        let name = source_url.rsplit('/').next().unwrap_or(source_url).to_string();
        inventory.images.push(Image {
            image_uuid: Uuid::new_v4().to_string(),
            name,
            family: image.image_family.clone().unwrap_or_default(),
            vendor: image.vendor.clone().unwrap_or_else(|| "CISCO".to_string()),
            application_type: image.application_type.clone().unwrap_or_default(),
            import_source_type: "URL".to_string(),
            ..Image::default()
        });
    }
    let task_id =
        inventory.record_task("SWIM", format!("Import of {} image(s) started", images.len()));
    tracing::info!(%task_id, "url image import triggered");
    Ok(accepted(&task_id))
}

// --- tasks ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub service_type: Option<String>,
    pub is_error: Option<bool>,
    pub parent_id: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.service_type.as_ref().is_none_or(|v| &task.service_type == v)
            && self.is_error.is_none_or(|v| task.is_error == v)
            && self
                .parent_id
                .as_ref()
                .is_none_or(|v| task.parent_id.as_ref() == Some(v))
    }
}

async fn list_tasks(State(db): State<Db>, Query(filter): Query<TaskFilter>) -> Json<Value> {
    let inventory = db.read().await;
    let tasks: Vec<&Task> = inventory
        .tasks
        .iter()
        .filter(|t| filter.matches(t))
        .skip(filter.offset.unwrap_or(0))
        .take(filter.limit.unwrap_or(usize::MAX))
        .collect();
    envelope(json!(tasks))
}

async fn count_tasks(State(db): State<Db>, Query(filter): Query<TaskFilter>) -> Json<Value> {
    let inventory = db.read().await;
    let count = inventory.tasks.iter().filter(|t| filter.matches(t)).count();
    envelope(json!(count))
}

async fn get_task(State(db): State<Db>, Path(task_id): Path<String>) -> ApiResult {
    let inventory = db.read().await;
    inventory
        .tasks
        .iter()
        .find(|t| t.id == task_id)
        .map(|t| (StatusCode::OK, envelope(json!(t))))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, &format!("task {task_id} not found")))
}

async fn task_tree(State(db): State<Db>, Path(task_id): Path<String>) -> ApiResult {
    let inventory = db.read().await;
    if !inventory.tasks.iter().any(|t| t.id == task_id) {
        return Err(error(StatusCode::NOT_FOUND, &format!("task {task_id} not found")));
    }
    let tree: Vec<&Task> = inventory
        .tasks
        .iter()
        .filter(|t| t.id == task_id || t.root_id == task_id)
        .collect();
    Ok((StatusCode::OK, envelope(json!(tree))))
}

async fn tasks_by_operation(
    State(db): State<Db>,
    Path((operation_id, offset, limit)): Path<(String, usize, usize)>,
) -> Json<Value> {
    let inventory = db.read().await;
    let tasks: Vec<&Task> = inventory
        .tasks
        .iter()
        .filter(|t| t.operation_id_list.contains(&operation_id))
        .skip(offset)
        .take(limit)
        .collect();
    envelope(json!(tasks))
}

// --- topology ---

const VLANS: [&str; 3] = ["1", "10", "20"];
const L3_TYPES: [&str; 5] = ["OSPF", "EIGRP", "ISIS", "static", "layer3"];

fn topology_nodes() -> Vec<Value> {
    vec![
        json!({
            "id": "node-core",
            "label": "core-1",
            "ip": "10.0.0.1",
            "deviceType": "Cisco Catalyst 9500 Switch",
            "family": "Switches and Hubs",
            "nodeType": "device",
            "role": "CORE",
            "softwareVersion": "17.9.4a",
            "tags": ["core"],
            "customParam": { "x": 100, "y": 50 }
        }),
        json!({
            "id": "node-access",
            "label": "access-1",
            "ip": "10.0.0.2",
            "deviceType": "Cisco Catalyst 9300 Switch",
            "family": "Switches and Hubs",
            "nodeType": "device",
            "role": "ACCESS",
            "softwareVersion": "17.9.4a",
            "upperNode": "node-core"
        }),
        json!({
            "id": "node-cloud",
            "label": "cloud node",
            "nodeType": "cloud node",
            "role": "UNKNOWN"
        }),
    ]
}

fn topology(id: &str, node_type: Option<&str>) -> Value {
    let nodes: Vec<Value> = topology_nodes()
        .into_iter()
        .filter(|n| node_type.is_none_or(|t| n["nodeType"] == t))
        .collect();
    json!({
        "id": id,
        "nodes": nodes,
        "links": [{
            "id": "link-1",
            "source": "node-core",
            "target": "node-access",
            "linkStatus": "up",
            "startPortID": "port-core-1",
            "startPortName": "TenGigabitEthernet1/0/1",
            "startPortIpv4Address": "10.1.1.1",
            "endPortID": "port-access-1",
            "endPortName": "TenGigabitEthernet1/1/1",
            "endPortSpeed": "10000000"
        }]
    })
}

async fn l2_topology(Path(vlan_id): Path<String>) -> ApiResult {
    if !VLANS.contains(&vlan_id.as_str()) {
        return Err(error(StatusCode::NOT_FOUND, &format!("vlan {vlan_id} not found")));
    }
    Ok((StatusCode::OK, envelope(topology(&vlan_id, None))))
}

async fn l3_topology(Path(topology_type): Path<String>) -> ApiResult {
    if !L3_TYPES.contains(&topology_type.as_str()) {
        return Err(error(
            StatusCode::BAD_REQUEST,
            &format!("unsupported topology type {topology_type}"),
        ));
    }
    Ok((StatusCode::OK, envelope(topology(&topology_type, None))))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalFilter {
    pub node_type: Option<String>,
}

async fn physical_topology(Query(filter): Query<PhysicalFilter>) -> Json<Value> {
    envelope(topology("physical", filter.node_type.as_deref()))
}

async fn site_topology() -> Json<Value> {
    envelope(json!({
        "sites": [
            {
                "id": "site-global",
                "name": "Global",
                "displayName": "Global",
                "groupNameHierarchy": "Global",
                "locationType": "area"
            },
            {
                "id": "site-sjc",
                "name": "SJC-05",
                "displayName": "SJC-05",
                "parentId": "site-global",
                "groupNameHierarchy": "Global/SJC-05",
                "locationType": "building",
                "locationAddress": "325 E Tasman Dr, San Jose",
                "locationCountry": "United States",
                "latitude": "37.41",
                "longitude": "-121.93"
            }
        ]
    }))
}

async fn vlan_names() -> Json<Value> {
    envelope(json!(VLANS))
}
