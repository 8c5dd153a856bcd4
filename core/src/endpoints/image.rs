use futures::executor::block_on;
use futures::TryStreamExt;
use reqwest::multipart::{Form, Part};

use super::Endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::params::QueryParams;
use crate::types::{
    ActivateImageRequest, ActivationOptions, DistributeImageRequest, ImageFile, ImageQuery,
    ImportFileOptions, ImportImageUrlRequest, ImportUrlOptions,
};

impl Endpoints {
    /// `GET /api/v1/image/importation`
    pub fn build_get_software_image_details(&self, query: &ImageQuery) -> HttpRequest {
        let query = QueryParams::new()
            .opt("imageUuid", query.image_uuid.as_deref())
            .opt("name", query.name.as_deref())
            .opt("family", query.family.as_deref())
            .opt("applicationType", query.application_type.as_deref())
            .opt("imageIntegrityStatus", query.image_integrity_status.as_deref())
            .opt("version", query.version.as_deref())
            .opt("imageSeries", query.image_series.as_deref())
            .opt("imageName", query.image_name.as_deref())
            .opt("isTaggedGolden", query.is_tagged_golden)
            .opt("isCCORecommended", query.is_cco_recommended)
            .opt("isCCOLatest", query.is_cco_latest)
            .opt("createdTime", query.created_time)
            .opt("imageSizeGreaterThan", query.image_size_greater_than)
            .opt("imageSizeLesserThan", query.image_size_lesser_than)
            .opt("sortBy", query.sort_by.as_deref())
            .opt("sortOrder", query.sort_order.as_deref())
            .opt("limit", query.limit)
            .opt("offset", query.offset);
        self.get("/api/v1/image/importation", query)
    }

    /// `POST /api/v1/image/activation/device`
    pub fn build_trigger_software_image_activation(
        &self,
        devices: &[ActivateImageRequest],
        options: &ActivationOptions,
    ) -> Result<HttpRequest, ApiError> {
        if devices.is_empty() {
            return Err(ApiError::MissingParameter("devices"));
        }
        let query = QueryParams::new().opt("scheduleValidate", options.schedule_validate);
        let mut req = self.post_json("/api/v1/image/activation/device", query, devices)?;
        if let Some(client_type) = &options.client_type {
            req.headers.push(("Client-Type".to_string(), client_type.clone()));
        }
        if let Some(client_url) = &options.client_url {
            req.headers.push(("Client-Url".to_string(), client_url.clone()));
        }
        Ok(req)
    }

    /// `POST /api/v1/image/distribution`
    pub fn build_trigger_software_image_distribution(
        &self,
        distributions: &[DistributeImageRequest],
    ) -> Result<HttpRequest, ApiError> {
        if distributions.is_empty() {
            return Err(ApiError::MissingParameter("distributions"));
        }
        self.post_json("/api/v1/image/distribution", QueryParams::new(), distributions)
    }

    /// `POST /api/v1/image/importation/source/file`
    ///
    /// The file travels as the `file` part of a `multipart/form-data` body.
    pub fn build_import_local_software_image(
        &self,
        file: &ImageFile,
        options: &ImportFileOptions,
    ) -> Result<HttpRequest, ApiError> {
        if file.file_name.is_empty() {
            return Err(ApiError::MissingParameter("file"));
        }
        let query = QueryParams::new()
            .opt("isThirdParty", options.is_third_party)
            .opt("thirdPartyVendor", options.third_party_vendor.as_deref())
            .opt("thirdPartyImageFamily", options.third_party_image_family.as_deref())
            .opt(
                "thirdPartyApplicationType",
                options.third_party_application_type.as_deref(),
            );
        let (content_type, body) = multipart_body(file)?;
        let mut headers = self.default_headers.clone();
        headers.push(("content-type".to_string(), content_type));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url("/api/v1/image/importation/source/file", &query),
            headers,
            body: Some(body),
        })
    }

    /// `POST /api/v1/image/importation/source/url`
    pub fn build_import_software_image_via_url(
        &self,
        images: &[ImportImageUrlRequest],
        options: &ImportUrlOptions,
    ) -> Result<HttpRequest, ApiError> {
        if images.is_empty() {
            return Err(ApiError::MissingParameter("images"));
        }
        let query = QueryParams::new()
            .opt("scheduleAt", options.schedule_at.as_deref())
            .opt("scheduleDesc", options.schedule_desc.as_deref())
            .opt("scheduleOrigin", options.schedule_origin.as_deref());
        self.post_json("/api/v1/image/importation/source/url", query, images)
    }
}

/// Encode `file` as a single-part `multipart/form-data` body.
///
/// Returns the `content-type` header value (with boundary) and the body
/// bytes. Every part is in memory, so the form stream completes without
/// waiting on any I/O.
fn multipart_body(file: &ImageFile) -> Result<(String, Vec<u8>), ApiError> {
    reject_control_chars("file", &file.file_name)?;
    reject_control_chars("content_type", &file.content_type)?;

    let part = Part::bytes(file.data.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| ApiError::InvalidParameter {
            name: "content_type",
            reason: e.to_string(),
        })?;
    let form = Form::new().part("file", part);
    let content_type = format!("multipart/form-data; boundary={}", form.boundary());

    let body = block_on(form.into_stream().try_fold(
        Vec::with_capacity(file.data.len() + 256),
        |mut body, chunk| async move {
            body.extend_from_slice(&chunk);
            Ok(body)
        },
    ))
    .map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok((content_type, body))
}

/// Part header values must stay on one line.
fn reject_control_chars(name: &'static str, value: &str) -> Result<(), ApiError> {
    if value.chars().any(char::is_control) {
        return Err(ApiError::InvalidParameter {
            name,
            reason: "control characters are not allowed".to_string(),
        });
    }
    Ok(())
}
