use crate::api::resource::{id_segment, RestResource, Wrapping};
use crate::entities::bus::{Bus, CreateBusRequest, Seat, UpdateBusRequest};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

/// Public bus catalogue under `/booking/buses`
#[derive(Clone)]
pub struct BusesApi {
    resource: RestResource<Bus>,
}

impl BusesApi {
    pub const BASE_PATH: &'static str = "/booking/buses";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Public, Wrapping::Raw),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<Bus>> {
        self.resource.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Bus> {
        self.resource.get(id).await
    }

    pub async fn create(&self, payload: &CreateBusRequest) -> ApiResult<Bus> {
        self.resource.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateBusRequest) -> ApiResult<Bus> {
        self.resource.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.resource.delete(id).await
    }

    /// Replace the whole seat map of a bus.
    ///
    /// The reply is returned as-is. A failure here leaves the bus record
    /// untouched, so bus and seat map can disagree server-side.
    pub async fn save_seat_map(&self, bus_id: &str, seats: &[Seat]) -> ApiResult<serde_json::Value> {
        self.resource
            .post_at(&format!("{}/seats/custom", id_segment(bus_id)?), seats)
            .await
    }
}
