//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `expenses_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use expenses_core::storage::RepositoryError;

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Requests that never reached the service are connection failures.
fn transport_failure<E: Debug, R: Debug>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Some(map_connection_error(format!("{:?}", err)))
        }
        _ => None,
    }
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::{ConnectorError, ErrorMetadata};
    use aws_sdk_dynamodb::types::error::{
        InternalServerError, ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    fn is_connection_failure(err: &RepositoryError) -> bool {
        matches!(err, RepositoryError::ConnectionFailed(_))
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err = map_query_error(SdkError::<QueryError, ()>::timeout_error("took too long"));
        assert!(is_connection_failure(&err), "{err:?}");

        let err = map_put_item_error(SdkError::<PutItemError, ()>::timeout_error("took too long"));
        assert!(is_connection_failure(&err), "{err:?}");
    }

    #[test]
    fn test_dispatch_failure_is_connection_failure() {
        let dispatch = || ConnectorError::io("connection refused".into());

        let err = map_query_error(SdkError::<QueryError, ()>::dispatch_failure(dispatch()));
        assert!(is_connection_failure(&err), "{err:?}");

        let err = map_delete_item_error(SdkError::<DeleteItemError, ()>::dispatch_failure(
            dispatch(),
        ));
        assert!(is_connection_failure(&err), "{err:?}");
    }

    #[test]
    fn test_missing_table_is_query_failure() {
        let query = QueryError::ResourceNotFoundException(
            ResourceNotFoundException::builder().message("no table").build(),
        );
        assert_eq!(
            map_query_error(SdkError::service_error(query, ())),
            RepositoryError::QueryFailed("Table not found".to_string())
        );

        let put = PutItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        assert_eq!(
            map_put_item_error(SdkError::service_error(put, ())),
            RepositoryError::QueryFailed("Table not found".to_string())
        );

        let delete = DeleteItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        assert_eq!(
            map_delete_item_error(SdkError::service_error(delete, ())),
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }

    #[test]
    fn test_throttling_and_internal_errors() {
        let throttled = QueryError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder().build(),
        );
        assert_eq!(
            map_query_error(SdkError::service_error(throttled, ())),
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        );

        let internal = PutItemError::InternalServerError(InternalServerError::builder().build());
        assert_eq!(
            map_put_item_error(SdkError::service_error(internal, ())),
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        );
    }

    #[test]
    fn test_unmodelled_service_error_keeps_details() {
        let generic = QueryError::generic(
            ErrorMetadata::builder()
                .code("ValidationException")
                .message("bad key condition")
                .build(),
        );

        match map_query_error(SdkError::service_error(generic, ())) {
            RepositoryError::QueryFailed(message) => {
                assert!(message.starts_with("Query failed:"), "{message}");
                assert!(message.contains("ValidationException"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_connection_error() {
        let err = map_connection_error("endpoint unreachable");
        assert_eq!(
            err,
            RepositoryError::ConnectionFailed("endpoint unreachable".to_string())
        );
    }
}
