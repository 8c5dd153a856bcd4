//! Software image management records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata for one software image in the controller repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageInfo {
    pub image_uuid: Option<String>,
    pub name: Option<String>,
    pub image_name: Option<String>,
    pub family: Option<String>,
    pub version: Option<String>,
    pub vendor: Option<String>,
    pub application_type: Option<String>,
    pub feature: Option<String>,
    pub file_service_id: Option<String>,
    pub file_size: Option<String>,
    pub image_integrity_status: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub image_series: Vec<String>,
    pub image_source: Option<String>,
    pub image_type: Option<String>,
    pub import_source_type: Option<String>,
    pub is_tagged_golden: Option<bool>,
    pub md5_checksum: Option<String>,
    pub sha_check_sum: Option<String>,
    pub created_time: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub applicable_devices_for_image: Vec<ApplicableDevice>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub profile_info: Vec<ProfileInfo>,
    pub extended_attributes: Option<Value>,
}

/// A device model an image can be installed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicableDevice {
    pub mdf_id: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub product_id: Vec<String>,
    pub product_name: Option<String>,
}

/// Resource profile for virtual images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInfo {
    pub profile_name: Option<String>,
    pub description: Option<String>,
    pub product_type: Option<String>,
    pub memory: Option<i64>,
    pub shares: Option<i64>,
    pub v_cpu: Option<i64>,
    pub extended_attributes: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfoList {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub response: Vec<ImageInfo>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Filters for `GET /api/v1/image/importation`. Unset fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub image_uuid: Option<String>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub application_type: Option<String>,
    pub image_integrity_status: Option<String>,
    pub version: Option<String>,
    pub image_series: Option<String>,
    pub image_name: Option<String>,
    pub is_tagged_golden: Option<bool>,
    pub is_cco_recommended: Option<bool>,
    pub is_cco_latest: Option<bool>,
    pub created_time: Option<i64>,
    pub image_size_greater_than: Option<i64>,
    pub image_size_lesser_than: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One device to activate images on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateImageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_uuid_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub smu_image_uuid_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_upgrade_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribute_if_needed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_lower_image_version: Option<bool>,
}

/// Query and header options for image activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationOptions {
    pub schedule_validate: Option<bool>,
    /// Sent as the `Client-Type` header.
    pub client_type: Option<String>,
    /// Sent as the `Client-Url` header.
    pub client_url: Option<String>,
}

/// One device/image pair to distribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeImageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uuid: Option<String>,
}

/// An image for the controller to fetch from a remote location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportImageUrlRequest {
    #[serde(rename = "sourceURL", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party: Option<bool>,
}

/// Scheduling options for URL imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportUrlOptions {
    pub schedule_at: Option<String>,
    pub schedule_desc: Option<String>,
    pub schedule_origin: Option<String>,
}

/// Third-party metadata for local file imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportFileOptions {
    pub is_third_party: Option<bool>,
    pub third_party_vendor: Option<String>,
    pub third_party_image_family: Option<String>,
    pub third_party_application_type: Option<String>,
}

/// A local image file, uploaded as the `file` part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/octet-stream".to_string(),
            data,
        }
    }
}
