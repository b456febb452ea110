//! Request extractors shared by the controllers.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::server::{error::AppError, model::ride::DateRange, util::parse::parse_date_range};

/// JSON body that is deserialized and then validated with `validator`.
///
/// Malformed JSON and failed validation rules are both rejected with 400.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Calendar-day filter for ride listings.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// First day, `YYYY-MM-DD`
    pub start_time: Option<String>,
    /// Last day (inclusive), `YYYY-MM-DD`
    pub end_time: Option<String>,
}

impl DateRangeQuery {
    pub fn into_range(self) -> Result<DateRange, AppError> {
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return Err(AppError::BadRequest(
                "start_time and end_time are required".to_string(),
            ));
        };

        parse_date_range(&start, &end)
    }
}
