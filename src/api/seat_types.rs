use crate::api::resource::{id_segment, RestResource, Wrapping};
use crate::entities::seat_type::{CreateSeatTypeRequest, SeatType};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

/// Seat types, always listed per operator
#[derive(Clone)]
pub struct SeatTypesApi {
    resource: RestResource<SeatType>,
}

impl SeatTypesApi {
    pub const BASE_PATH: &'static str = "/booking/seat-types";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Private, Wrapping::Raw),
        }
    }

    pub async fn create(&self, payload: &CreateSeatTypeRequest) -> ApiResult<SeatType> {
        self.resource.create(payload).await
    }

    pub async fn get_by_operator(&self, operator_id: &str) -> ApiResult<Vec<SeatType>> {
        self.resource
            .list_at(&format!("operator/{}", id_segment(operator_id)?))
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.resource.delete(id).await
    }
}
