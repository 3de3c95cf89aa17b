use crate::api::resource::{RestResource, Wrapping};
use crate::entities::route::{CreateRouteRequest, Route, UpdateRouteRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct RoutesApi {
    resource: RestResource<Route>,
}

impl RoutesApi {
    pub const BASE_PATH: &'static str = "/booking/routes";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Public, Wrapping::Raw),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Route>> {
        self.resource.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Route> {
        self.resource.get(id).await
    }

    pub async fn create(&self, payload: &CreateRouteRequest) -> ApiResult<Route> {
        self.resource.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateRouteRequest) -> ApiResult<Route> {
        self.resource.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.resource.delete(id).await
    }
}
