/*
 * Responsibility
 * - App-wide AppError
 * - IntoResponse (HTTP status / WWW-Authenticate / JSON error body)
 * - AuthError -> 401 conversion happens in middleware::auth, which knows the challenges
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// `challenges` become `WWW-Authenticate` headers, in order.
    #[error("unauthorized: {reason}")]
    Unauthorized {
        challenges: Vec<HeaderValue>,
        reason: String,
    },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn unauthorized(challenges: Vec<HeaderValue>, reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            challenges,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized { challenges, reason } => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: "UNAUTHORIZED",
                        message: reason,
                    },
                };

                let mut res = (StatusCode::UNAUTHORIZED, Json(body)).into_response();
                for challenge in challenges {
                    res.headers_mut().append(header::WWW_AUTHENTICATE, challenge);
                }
                res
            }
            AppError::Internal => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: "INTERNAL_SERVER_ERROR",
                        message: "internal server error".into(),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
