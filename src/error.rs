//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Pricing(PricingError::CabOutOfRange { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "cab_out_of_range")
            }
            AppError::Pricing(PricingError::NegativeField { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "negative_field")
            }
            AppError::Pricing(PricingError::GrandTotalMismatch { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "grand_total_mismatch")
            }
            AppError::Pricing(PricingError::InvalidTariff(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_tariff")
            }
            AppError::Pricing(PricingError::Overflow { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "overflow")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.parts();

        if status.is_server_error() {
            tracing::error!("{}: {}", error_type, self);
        } else {
            tracing::debug!("Rejected request ({}): {}", error_type, self);
        }

        let details = match &self {
            AppError::Pricing(PricingError::CabOutOfRange { distance_km, max_km }) => Some(
                serde_json::json!({ "distance_km": distance_km.to_string(), "max_km": max_km }),
            ),
            _ => None,
        };

        let message = if status.is_server_error() {
            "Pricing engine failure".to_string()
        } else {
            self.to_string()
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_mapping() {
        let err = AppError::BadRequest("dakshina_amount below minimum".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::from(PricingError::CabOutOfRange {
            distance_km: dec!(350),
            max_km: 300,
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::from(PricingError::GrandTotalMismatch {
            expected: 1,
            actual: 5,
        });
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(PricingError::Overflow {
            what: "travel_days",
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
