// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorBody, services::gateway::GatewayError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("AI_GATEWAY_API_KEY is not configured")]
    NotConfigured,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Gateway(GatewayError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Gateway(GatewayError::PaymentRequired) => StatusCode::PAYMENT_REQUIRED,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used by the usage counters.
    pub fn outcome(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::NotConfigured => "not_configured",
            AppError::Gateway(GatewayError::RateLimited) => "rate_limited",
            AppError::Gateway(GatewayError::PaymentRequired) => "payment_required",
            AppError::Gateway(_) => "upstream_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_upstream() {
        assert_eq!(AppError::from(GatewayError::RateLimited).status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(AppError::from(GatewayError::PaymentRequired).status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(AppError::from(GatewayError::EmptyCompletion).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::NotConfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_keeps_status_in_text() {
        let err = AppError::from(GatewayError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            body: "boom".into(),
        });
        assert_eq!(err.outcome(), "upstream_error");
        assert!(err.to_string().contains("502"));
    }
}
