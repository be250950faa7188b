//! Rendering of [`ApiResponse`] into concrete HTTP responses.

use axum::{
    body::Body,
    extract::rejection::{BytesRejection, PathRejection},
    http::{self, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use expenses_core::api::{ApiResponse, Endpoint, ErrorStatusPolicy, HandlerError, CORS_HEADERS};

/// Shape a handler outcome, logging the failure first.
pub fn respond<T: Serialize>(
    endpoint: Endpoint,
    outcome: Result<T, HandlerError>,
    policy: ErrorStatusPolicy,
) -> ApiResponse {
    if let Err(error) = &outcome {
        tracing::error!(?endpoint, error = %error, "Request failed");
    }
    endpoint.respond(outcome, policy)
}

/// A path that axum could not decode, as a handler failure.
pub fn path_rejected(rejection: PathRejection) -> HandlerError {
    HandlerError::Rejected {
        status: rejection.status().as_u16(),
        message: rejection.body_text(),
    }
}

/// A body that axum could not buffer (e.g. over the size limit), as a handler failure.
pub fn body_rejected(rejection: BytesRejection) -> HandlerError {
    HandlerError::Rejected {
        status: rejection.status().as_u16(),
        message: rejection.body_text(),
    }
}

/// Build an `http::Response` from an [`ApiResponse`].
///
/// Generic over the body so the axum server and the Lambda runtime share it.
pub fn to_http_response<B: From<String>>(response: ApiResponse) -> http::Result<http::Response<B>> {
    let mut builder = http::Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(*name, *value);
    }
    builder.body(B::from(response.body))
}

/// Render an [`ApiResponse`] for axum.
pub fn render(response: ApiResponse) -> Response {
    match to_http_response::<Body>(response) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// CORS preflight (OPTIONS) for every expense route.
pub async fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    for (name, value) in CORS_HEADERS {
        response
            .headers_mut()
            .insert(name, http::HeaderValue::from_static(value));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_render_copies_status_headers_and_body() {
        let api = Endpoint::Delete.respond(
            Ok(expenses_core::api::MessageBody::deleted()),
            ErrorStatusPolicy::default(),
        );

        let response = render(api);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"message":"Expense deleted successfully"}"#);
    }

    #[tokio::test]
    async fn test_preflight_is_204_with_cors() {
        let response = preflight().await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .unwrap(),
            "GET, POST, DELETE, OPTIONS"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-headers")
                .unwrap(),
            "Content-Type"
        );
    }

    #[test]
    fn test_respond_logs_and_shapes_error() {
        let outcome: Result<(), HandlerError> =
            Err(HandlerError::MissingPathParameter("userId"));

        let response = respond(Endpoint::List, outcome, ErrorStatusPolicy::Typed);

        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"error":"Missing path parameter: userId"}"#);
    }
}
