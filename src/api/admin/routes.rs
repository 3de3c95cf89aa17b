use crate::api::envelope::Envelope;
use crate::api::resource::{RestResource, Wrapping};
use crate::entities::route::{CreateRouteRequest, Route, UpdateRouteRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct AdminRoutesApi {
    resource: RestResource<Route>,
}

impl AdminRoutesApi {
    pub const BASE_PATH: &'static str = "/admin/routes";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Private, Wrapping::Enveloped),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Route>> {
        self.resource.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Route> {
        self.resource.get(id).await
    }

    /// Returns the full envelope
    pub async fn create(&self, payload: &CreateRouteRequest) -> ApiResult<Envelope<Route>> {
        self.resource.create_enveloped(payload).await
    }

    /// Returns the full envelope
    pub async fn update(&self, id: &str, payload: &UpdateRouteRequest) -> ApiResult<Envelope<Route>> {
        self.resource.update_enveloped(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Envelope<()>> {
        self.resource.delete_enveloped(id).await
    }
}
