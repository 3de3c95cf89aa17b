use crate::api::envelope::Envelope;
use crate::api::resource::{RestResource, Wrapping};
use crate::entities::bus::{Bus, CreateBusRequest, UpdateBusRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct AdminBusesApi {
    resource: RestResource<Bus>,
}

impl AdminBusesApi {
    pub const BASE_PATH: &'static str = "/admin/buses";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Private, Wrapping::Enveloped),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Bus>> {
        self.resource.list().await
    }

    /// Returns the full envelope
    pub async fn create(&self, payload: &CreateBusRequest) -> ApiResult<Envelope<Bus>> {
        self.resource.create_enveloped(payload).await
    }

    /// Returns the full envelope
    pub async fn update(&self, id: &str, payload: &UpdateBusRequest) -> ApiResult<Envelope<Bus>> {
        self.resource.update_enveloped(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Envelope<()>> {
        self.resource.delete_enveloped(id).await
    }
}
