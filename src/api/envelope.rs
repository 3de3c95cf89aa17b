use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// `{ success, data, message }` wrapper returned by the admin endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    /// Only meaningful on failure, though some endpoints also send success text
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Fail with `Rejected` when the server flagged the call as unsuccessful
    pub fn ensure_success(self) -> ApiResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ))
        }
    }

    /// Take `data` out of a successful envelope
    pub fn into_data(self) -> ApiResult<T> {
        self.ensure_success()?
            .data
            .ok_or_else(|| ApiError::InvalidResponse("Missing envelope data".to_string()))
    }
}

impl<T> Envelope<Vec<T>> {
    /// Like `into_data`, but a missing list reads as empty
    pub fn into_items(self) -> ApiResult<Vec<T>> {
        Ok(self.ensure_success()?.data.unwrap_or_default())
    }
}
