//! Generic typed REST resource.
//!
//! Every resource API is a thin wrapper over one `RestResource<T>`. The
//! resource knows its base path, whether calls carry the bearer token and
//! whether responses arrive wrapped in an [`Envelope`]. Whether a write hands
//! back unwrapped data or the whole envelope is chosen per call by the
//! wrapper (`create` vs `create_enveloped`), so each endpoint states its own
//! convention.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::api::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::transport::{Access, HttpClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapping {
    /// Body is the resource itself
    Raw,
    /// Body is `{ success, data, message }`
    Enveloped,
}

pub struct RestResource<T> {
    http: HttpClient,
    base_path: &'static str,
    access: Access,
    wrapping: Wrapping,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_path: self.base_path,
            access: self.access,
            wrapping: self.wrapping,
            _entity: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> RestResource<T> {
    pub fn new(http: HttpClient, base_path: &'static str, access: Access, wrapping: Wrapping) -> Self {
        Self {
            http,
            base_path,
            access,
            wrapping,
            _entity: PhantomData,
        }
    }

    pub fn base_path(&self) -> &'static str {
        self.base_path
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn wrapping(&self) -> Wrapping {
        self.wrapping
    }

    /// Path below the base, e.g. `path("42/status")`. The suffix is used
    /// as-is; ids inside it must already go through [`id_segment`].
    pub fn path(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.base_path.to_string()
        } else {
            format!("{}/{}", self.base_path, suffix.trim_start_matches('/'))
        }
    }

    /// `{base}/{id}` with the id percent-encoded
    pub fn item_path(&self, id: &str) -> ApiResult<String> {
        Ok(format!("{}/{}", self.base_path, id_segment(id)?))
    }

    async fn get_as<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        match self.wrapping {
            Wrapping::Raw => self.http.get(path, self.access).await,
            Wrapping::Enveloped => self
                .http
                .get::<Envelope<R>>(path, self.access)
                .await?
                .into_data(),
        }
    }

    async fn post_as<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        match self.wrapping {
            Wrapping::Raw => self.http.post(path, self.access, body).await,
            Wrapping::Enveloped => self
                .http
                .post::<Envelope<R>, _>(path, self.access, body)
                .await?
                .into_data(),
        }
    }

    async fn put_as<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        match self.wrapping {
            Wrapping::Raw => self.http.put(path, self.access, body).await,
            Wrapping::Enveloped => self
                .http
                .put::<Envelope<R>, _>(path, self.access, body)
                .await?
                .into_data(),
        }
    }

    /// GET the collection at the base path
    pub async fn list(&self) -> ApiResult<Vec<T>> {
        self.list_at("").await
    }

    /// GET a collection below the base path; an absent list reads as empty
    pub async fn list_at(&self, suffix: &str) -> ApiResult<Vec<T>> {
        let path = self.path(suffix);
        match self.wrapping {
            Wrapping::Raw => Ok(self
                .http
                .get::<Option<Vec<T>>>(&path, self.access)
                .await?
                .unwrap_or_default()),
            Wrapping::Enveloped => self
                .http
                .get::<Envelope<Vec<T>>>(&path, self.access)
                .await?
                .into_items(),
        }
    }

    pub async fn get(&self, id: &str) -> ApiResult<T> {
        self.get_as(&self.item_path(id)?).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> ApiResult<T> {
        self.post_as(self.base_path, body).await
    }

    /// POST and hand back the whole envelope, message included
    pub async fn create_enveloped<B: Serialize + ?Sized>(&self, body: &B) -> ApiResult<Envelope<T>> {
        self.http.post(self.base_path, self.access, body).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> ApiResult<T> {
        self.put_as(&self.item_path(id)?, body).await
    }

    /// PUT and hand back the whole envelope, message included
    pub async fn update_enveloped<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> ApiResult<Envelope<T>> {
        self.http.put(&self.item_path(id)?, self.access, body).await
    }

    /// PUT to a sub-path, e.g. `{id}/status`
    pub async fn update_at<B: Serialize + ?Sized>(&self, suffix: &str, body: &B) -> ApiResult<T> {
        self.put_as(&self.path(suffix), body).await
    }

    /// POST to a sub-path and decode the reply as `R`
    pub async fn post_at<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        suffix: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.post_as(&self.path(suffix), body).await
    }

    /// DELETE, discarding whatever the server replies with
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let path = self.item_path(id)?;
        match self.wrapping {
            Wrapping::Raw => {
                self.http.delete::<IgnoredAny>(&path, self.access).await?;
            }
            Wrapping::Enveloped => {
                self.http
                    .delete::<Envelope<IgnoredAny>>(&path, self.access)
                    .await?
                    .ensure_success()?;
            }
        }
        Ok(())
    }

    /// DELETE and hand back the envelope; whatever `data` held is dropped
    pub async fn delete_enveloped(&self, id: &str) -> ApiResult<Envelope<()>> {
        let envelope: Envelope<IgnoredAny> =
            self.http.delete(&self.item_path(id)?, self.access).await?;

        Ok(Envelope {
            success: envelope.success,
            data: envelope.data.map(|_| ()),
            message: envelope.message,
        })
    }
}

/// Percent-encode one id for use as a path segment. Empty ids are refused so
/// a call can never fall through to the collection path.
pub fn id_segment(id: &str) -> ApiResult<String> {
    if id.is_empty() {
        return Err(ApiError::Validation("resource id must not be empty".to_string()));
    }
    Ok(urlencoding::encode(id).into_owned())
}
