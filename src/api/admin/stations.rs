use crate::api::resource::{RestResource, Wrapping};
use crate::entities::station::{CreateStationRequest, Station, UpdateStationRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct StationsApi {
    resource: RestResource<Station>,
}

impl StationsApi {
    pub const BASE_PATH: &'static str = "/admin/stations";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Private, Wrapping::Enveloped),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Station>> {
        self.resource.list().await
    }

    pub async fn create(&self, payload: &CreateStationRequest) -> ApiResult<Station> {
        self.resource.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateStationRequest) -> ApiResult<Station> {
        self.resource.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.resource.delete(id).await
    }
}
