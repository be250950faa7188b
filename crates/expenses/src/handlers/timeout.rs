//! Per-request deadline for the dev server.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use expenses_core::api::{Endpoint, ErrorStatusPolicy, HandlerError};

use super::response::{render, respond};

/// Deadline applied to every request, and the policy used to report a miss.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout {
    pub limit: Duration,
    pub policy: ErrorStatusPolicy,
}

/// Run the rest of the stack under [`RequestTimeout::limit`].
///
/// A request that misses the deadline gets the endpoint's JSON error body,
/// with CORS headers where that endpoint carries them.
pub async fn enforce_timeout(
    State(timeout): State<RequestTimeout>,
    request: Request,
    next: Next,
) -> Response {
    let endpoint = endpoint_for(request.method());

    match tokio::time::timeout(timeout.limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            let after_ms = u64::try_from(timeout.limit.as_millis()).unwrap_or(u64::MAX);
            let outcome: Result<(), HandlerError> = Err(HandlerError::TimedOut { after_ms });
            render(respond(endpoint, outcome, timeout.policy))
        }
    }
}

fn endpoint_for(method: &Method) -> Endpoint {
    if method == Method::POST {
        Endpoint::Create
    } else if method == Method::DELETE {
        Endpoint::Delete
    } else {
        Endpoint::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_method() {
        assert_eq!(endpoint_for(&Method::POST), Endpoint::Create);
        assert_eq!(endpoint_for(&Method::DELETE), Endpoint::Delete);
        assert_eq!(endpoint_for(&Method::GET), Endpoint::List);
    }
}
