use crate::api::envelope::Envelope;
use crate::entities::profile::{Attachment, Profile, ProfileUpdate};
use crate::error::ApiResult;
use crate::transport::{Access, HttpClient, MultipartBody};

/// Profile of the signed-in operator admin
#[derive(Clone)]
pub struct ProfileApi {
    http: HttpClient,
}

impl ProfileApi {
    pub const BASE_PATH: &'static str = "/admin/profiles";

    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_me(&self) -> ApiResult<Profile> {
        self.http
            .get::<Envelope<Profile>>(Self::BASE_PATH, Access::Private)
            .await?
            .into_data()
    }

    /// Multipart update. Returns the full envelope.
    pub async fn update_me(
        &self,
        profile: &ProfileUpdate,
        file: Option<Attachment>,
    ) -> ApiResult<Envelope<Profile>> {
        let body = Self::multipart_body(profile, file)?;
        self.http
            .put_multipart(Self::BASE_PATH, Access::Private, body)
            .await
    }

    /// `operator` JSON part, then `file` when an attachment is given
    pub fn multipart_body(profile: &ProfileUpdate, file: Option<Attachment>) -> ApiResult<MultipartBody> {
        let mut body = MultipartBody::new().json_part("operator", profile)?;
        if let Some(file) = file {
            body = body.file_part("file", file.file_name, file.content_type, file.bytes);
        }
        Ok(body)
    }
}
