//! Pure response shaping for the three expense endpoints.
//!
//! Handlers produce `Result<T, HandlerError>`; [`Endpoint::respond`] turns that
//! into an [`ApiResponse`] that both the Lambda adapter and the local axum
//! server render verbatim.

use serde::{Deserialize, Serialize};

use super::{ErrorStatusPolicy, HandlerError};

pub const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Permissive CORS headers attached to create and delete responses.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, DELETE, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

pub const DELETE_SUCCESS_MESSAGE: &str = "Expense deleted successfully";

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn deleted() -> Self {
        Self {
            message: DELETE_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A transport-neutral HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl ApiResponse {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// The three handler entry points and their response contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Create,
    Delete,
    List,
}

impl Endpoint {
    /// Status code on success.
    pub fn success_status(self) -> u16 {
        match self {
            Endpoint::Create => 201,
            Endpoint::Delete | Endpoint::List => 200,
        }
    }

    /// Whether responses carry the permissive CORS headers.
    pub fn has_cors(self) -> bool {
        matches!(self, Endpoint::Create | Endpoint::Delete)
    }

    pub fn headers(self) -> Vec<(&'static str, &'static str)> {
        let mut headers = vec![CONTENT_TYPE];
        if self.has_cors() {
            headers.extend(CORS_HEADERS);
        }
        headers
    }

    /// Render a handler outcome.
    pub fn respond<T: Serialize>(
        self,
        outcome: Result<T, HandlerError>,
        policy: ErrorStatusPolicy,
    ) -> ApiResponse {
        let rendered = outcome.and_then(|value| {
            serde_json::to_string(&value).map_err(|e| HandlerError::Serialization(e.to_string()))
        });

        match rendered {
            Ok(body) => ApiResponse {
                status: self.success_status(),
                headers: self.headers(),
                body,
            },
            Err(error) => self.error(&error, policy),
        }
    }

    /// Render a failure as `{"error": "<message>"}`.
    pub fn error(self, error: &HandlerError, policy: ErrorStatusPolicy) -> ApiResponse {
        let body = ErrorBody {
            error: error.to_string(),
        };

        ApiResponse {
            status: policy.status_code(error),
            headers: self.headers(),
            // A struct of one String always serializes
            body: serde_json::to_string(&body).unwrap_or_default(),
        }
    }
}
