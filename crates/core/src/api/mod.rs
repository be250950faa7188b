//! The boundary between handler logic and HTTP: error taxonomy, status policy
//! and response shaping.

mod error;
mod policy;
mod response;

pub use error::HandlerError;
pub use policy::ErrorStatusPolicy;
pub use response::{
    ApiResponse, Endpoint, ErrorBody, MessageBody, CONTENT_TYPE, CORS_HEADERS,
    DELETE_SUCCESS_MESSAGE,
};
