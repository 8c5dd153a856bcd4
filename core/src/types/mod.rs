//! Request and response records for the controller API.
//!
//! # Design
//! These mirror the controller's JSON payloads field for field. Wire names
//! are camelCase; nearly every field is optional because the controller
//! omits what it does not know. Unknown fields are ignored so newer
//! controller releases do not break decoding. Free-form blobs such as
//! `additionalInfo` stay as `serde_json::Value`.
//!
//! The mock-server crate defines its own records; the integration tests
//! catch schema drift between the two.

pub mod image;
pub mod task;
pub mod topology;

use serde::{Deserialize, Deserializer, Serialize};

pub use image::{
    ActivateImageRequest, ActivationOptions, ApplicableDevice, DistributeImageRequest, ImageFile,
    ImageInfo, ImageInfoList, ImageQuery, ImportFileOptions, ImportImageUrlRequest,
    ImportUrlOptions, ProfileInfo,
};
pub use task::{Task, TaskCountQuery, TaskListResponse, TaskQuery, TaskResponse};
pub use topology::{
    CustomParam, Site, SiteTopology, SiteTopologyResponse, Topology, TopologyLink, TopologyNode,
    TopologyResponse, VlanNamesResponse,
};

/// Decode an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Acknowledgement for an operation the controller runs in the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIdResponse {
    pub response: TaskId,
    #[serde(default)]
    pub version: Option<String>,
}

/// Handle to a background task; poll it through the task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskId {
    pub task_id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A bare count, as returned by `/count` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub response: u64,
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_response_decodes() {
        let raw = r#"{"response":{"taskId":"t-1","url":"/api/v1/task/t-1"},"version":"1.0"}"#;
        let ack: TaskIdResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(ack.response.task_id, "t-1");
        assert_eq!(ack.response.url.as_deref(), Some("/api/v1/task/t-1"));
    }

    #[test]
    fn task_id_url_is_optional() {
        let ack: TaskIdResponse = serde_json::from_str(r#"{"response":{"taskId":"t-2"}}"#).unwrap();
        assert!(ack.response.url.is_none());
        assert!(ack.version.is_none());
    }

    #[test]
    fn count_rejects_negative() {
        let result: Result<CountResponse, _> = serde_json::from_str(r#"{"response":-1}"#);
        assert!(result.is_err());
    }

    #[derive(Debug, Default, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn null_as_default_covers_null_missing_and_present() {
        let null: Wrapper = serde_json::from_str(r#"{"items":null}"#).unwrap();
        let missing: Wrapper = serde_json::from_str("{}").unwrap();
        let present: Wrapper = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();
        assert!(null.items.is_empty());
        assert!(missing.items.is_empty());
        assert_eq!(present.items, [1, 2]);
    }
}
