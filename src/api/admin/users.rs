use crate::api::resource::{id_segment, RestResource, Wrapping};
use crate::entities::user::{CreateUserRequest, UpdateUserRequest, UpdateUserStatusRequest, User};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct UsersApi {
    resource: RestResource<User>,
}

impl UsersApi {
    pub const BASE_PATH: &'static str = "/user/admin/users";

    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: RestResource::new(http, Self::BASE_PATH, Access::Private, Wrapping::Enveloped),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<User>> {
        self.resource.list().await
    }

    pub async fn create(&self, payload: &CreateUserRequest) -> ApiResult<User> {
        self.resource.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateUserRequest) -> ApiResult<User> {
        self.resource.update(id, payload).await
    }

    /// Enable or disable an account
    pub async fn set_enabled(&self, id: &str, enabled: bool) -> ApiResult<User> {
        tracing::info!(user_id = id, enabled, "Updating user status");
        self.resource
            .update_at(
                &format!("{}/status", id_segment(id)?),
                &UpdateUserStatusRequest { enabled },
            )
            .await
    }
}
