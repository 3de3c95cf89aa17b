use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Delayed,
}

/// Trip form payload, checked before it is submitted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    #[validate(length(min = 1, message = "route is required"))]
    pub route_id: String,
    #[validate(length(min = 1, message = "bus is required"))]
    pub bus_id: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[validate(range(min = 0.0, message = "base price cannot be negative"))]
    pub base_price: f64,
    #[serde(default)]
    pub status: TripStatus,
}

impl TripDraft {
    /// Deserialize untyped form input and validate it.
    ///
    /// Unknown status values fail at deserialization.
    pub fn parse(value: serde_json::Value) -> ApiResult<Self> {
        let draft: TripDraft =
            serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))?;
        draft.check()?;
        Ok(draft)
    }

    pub fn check(&self) -> ApiResult<()> {
        self.validate()?;

        if self.arrival_time <= self.departure_time {
            return Err(ApiError::Validation(
                "arrival time must be after departure time".to_string(),
            ));
        }

        Ok(())
    }
}
