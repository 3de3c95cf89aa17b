use crate::api::resource::{RestResource, Wrapping};
use crate::entities::operator::{CreateOperatorRequest, Operator, UpdateOperatorRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct OperatorsApi {
    resource: RestResource<Operator>,
}

impl OperatorsApi {
    pub const BASE_PATH: &'static str = "/booking/operators";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Public, Wrapping::Raw),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Operator>> {
        self.resource.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Operator> {
        self.resource.get(id).await
    }

    pub async fn create(&self, payload: &CreateOperatorRequest) -> ApiResult<Operator> {
        self.resource.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateOperatorRequest) -> ApiResult<Operator> {
        self.resource.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.resource.delete(id).await
    }
}
