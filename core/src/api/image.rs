use crate::client::NetworkClient;
use crate::request::RequestBuilder;
use crate::transport::Transport;
use crate::types::{
    ActivateImageRequest, ActivationOptions, DistributeImageRequest, ImageFile, ImageInfoList,
    ImageQuery, ImportFileOptions, ImportImageUrlRequest, ImportUrlOptions, TaskIdResponse,
};

/// Software image management: listing, importing, distributing and
/// activating images. Mutations run in the background on the controller and
/// answer with a task id.
pub struct ImageApi<'c, T> {
    client: &'c NetworkClient<T>,
}

impl<'c, T: Transport> ImageApi<'c, T> {
    pub(crate) fn new(client: &'c NetworkClient<T>) -> Self {
        Self { client }
    }

    pub fn get_software_image_details(
        &self,
        query: &ImageQuery,
    ) -> RequestBuilder<'c, T, ImageInfoList> {
        let request = self
            .client
            .endpoints()
            .build_get_software_image_details(query);
        self.client.dispatch(Ok(request))
    }

    pub fn trigger_software_image_activation(
        &self,
        devices: &[ActivateImageRequest],
        options: &ActivationOptions,
    ) -> RequestBuilder<'c, T, TaskIdResponse> {
        let request = self
            .client
            .endpoints()
            .build_trigger_software_image_activation(devices, options);
        self.client.dispatch(request)
    }

    pub fn trigger_software_image_distribution(
        &self,
        distributions: &[DistributeImageRequest],
    ) -> RequestBuilder<'c, T, TaskIdResponse> {
        let request = self
            .client
            .endpoints()
            .build_trigger_software_image_distribution(distributions);
        self.client.dispatch(request)
    }

    pub fn import_local_software_image(
        &self,
        file: &ImageFile,
        options: &ImportFileOptions,
    ) -> RequestBuilder<'c, T, TaskIdResponse> {
        let request = self
            .client
            .endpoints()
            .build_import_local_software_image(file, options);
        self.client.dispatch(request)
    }

    pub fn import_software_image_via_url(
        &self,
        images: &[ImportImageUrlRequest],
        options: &ImportUrlOptions,
    ) -> RequestBuilder<'c, T, TaskIdResponse> {
        let request = self
            .client
            .endpoints()
            .build_import_software_image_via_url(images, options);
        self.client.dispatch(request)
    }
}
