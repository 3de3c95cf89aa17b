use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

fn default_passengers() -> u32 {
    1
}

/// Ticket search form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[validate(length(min = 1, message = "origin is required"))]
    pub origin: String,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default = "default_passengers")]
    #[validate(range(min = 1, max = 10))]
    pub passengers: u32,
}

impl SearchParams {
    /// Validate against the caller's notion of today
    pub fn check(&self, today: NaiveDate) -> ApiResult<()> {
        self.validate()?;

        if self.origin.trim().eq_ignore_ascii_case(self.destination.trim()) {
            return Err(ApiError::Validation(
                "origin and destination must be different".to_string(),
            ));
        }

        if self.departure_date < today {
            return Err(ApiError::Validation(
                "departure date cannot be in the past".to_string(),
            ));
        }

        Ok(())
    }
}
