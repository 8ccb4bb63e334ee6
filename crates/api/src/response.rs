//! Shared response envelope for API handlers.
//!
//! Every JSON body the API produces has the shape
//! `{ "success": bool, "message": string, "data"?: T, "error"?: string }`.
//! [`ApiEnvelope`] is a tagged enum so a success can never carry an error
//! and a failure can never carry data.

use std::borrow::Cow;
use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

use crate::config::AppEnvironment;

/// Uniform `{ success, message, data?, error? }` response.
#[derive(Debug)]
pub enum ApiEnvelope<T> {
    Success {
        status: StatusCode,
        message: Cow<'static, str>,
        data: T,
    },
    Failure {
        status: StatusCode,
        message: Cow<'static, str>,
        /// Underlying fault text, only populated in development mode.
        detail: Option<String>,
    },
}

/// Wire form of [`ApiEnvelope`].
#[derive(Serialize)]
struct EnvelopeBody<'a, T: Serialize> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<T> ApiEnvelope<T> {
    /// `200 OK` with a payload.
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        ApiEnvelope::Success {
            status: StatusCode::OK,
            message: message.into(),
            data,
        }
    }

    /// A failure without diagnostic detail.
    pub fn failure(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        ApiEnvelope::Failure {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// `500` for an unexpected fault. The fault's text is attached only
    /// when `environment` exposes diagnostics.
    pub fn fault(
        message: impl Into<Cow<'static, str>>,
        fault: &dyn Display,
        environment: AppEnvironment,
    ) -> Self {
        ApiEnvelope::Failure {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            detail: environment
                .exposes_diagnostics()
                .then(|| fault.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiEnvelope::Success { status, .. } | ApiEnvelope::Failure { status, .. } => *status,
        }
    }
}

impl<T: Serialize> Serialize for ApiEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            ApiEnvelope::Success { message, data, .. } => EnvelopeBody {
                success: true,
                message: &**message,
                data: Some(data),
                error: None,
            },
            ApiEnvelope::Failure {
                message, detail, ..
            } => EnvelopeBody {
                success: false,
                message: &**message,
                data: None,
                error: detail.as_deref(),
            },
        };
        body.serialize(serializer)
    }
}

impl<T: Serialize> IntoResponse for ApiEnvelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(&self)).into_response()
    }
}
