use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::api::ErrorBody;
use crate::errors::internal::{InternalError, LifecycleError, TokenError};

/// Error responses for the request lifecycle endpoints
#[derive(ApiResponse, Debug)]
pub enum RequestsError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorBody>),

    /// Missing, malformed or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Caller is not the owner of the targeted item
    #[oai(status = 403)]
    Forbidden(Json<ErrorBody>),

    /// Request or item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Transition violates the reservation invariant or the state machine
    #[oai(status = 409)]
    Conflict(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl RequestsError {
    pub fn validation_failed(message: impl Into<String>) -> Self {
        RequestsError::ValidationFailed(Json(ErrorBody::new("validation_failed", message, 400)))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        RequestsError::Unauthorized(Json(ErrorBody::new("unauthorized", message, 401)))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        RequestsError::Forbidden(Json(ErrorBody::new("forbidden", message, 403)))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        RequestsError::NotFound(Json(ErrorBody::new("not_found", message, 404)))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        RequestsError::Conflict(Json(ErrorBody::new("conflict", message, 409)))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        RequestsError::InternalError(Json(ErrorBody::new("internal_error", message, 500)))
    }
}

impl From<TokenError> for RequestsError {
    fn from(e: TokenError) -> Self {
        RequestsError::unauthorized(e.to_string())
    }
}

impl From<InternalError> for RequestsError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::Lifecycle(l) => match l {
                LifecycleError::RequestNotFound(_) | LifecycleError::ItemNotFound(_) => {
                    RequestsError::not_found(l.to_string())
                }
                LifecycleError::NotItemOwner { .. } => RequestsError::forbidden(l.to_string()),
                LifecycleError::ItemNotAvailable { .. }
                | LifecycleError::InvalidTransition { .. }
                | LifecycleError::ApprovalConflict { .. } => {
                    RequestsError::conflict(l.to_string())
                }
                LifecycleError::Validation(msg) => RequestsError::validation_failed(msg),
            },
            InternalError::Token(t) => t.into(),
            // Store failures surface as a generic failure with the underlying
            // message attached.
            other => RequestsError::internal_error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::DatabaseError;
    use crate::types::db::item::ItemStatus;
    use crate::types::db::request::RequestStatus;

    fn convert(e: LifecycleError) -> RequestsError {
        InternalError::from(e).into()
    }

    #[test]
    fn missing_request_or_item_maps_to_not_found() {
        assert!(matches!(
            convert(LifecycleError::RequestNotFound("r1".into())),
            RequestsError::NotFound(_)
        ));
        assert!(matches!(
            convert(LifecycleError::ItemNotFound("i1".into())),
            RequestsError::NotFound(_)
        ));
    }

    #[test]
    fn non_owner_maps_to_forbidden() {
        let err = convert(LifecycleError::NotItemOwner {
            request_id: "r1".into(),
            user_id: "u1".into(),
        });
        assert!(matches!(err, RequestsError::Forbidden(_)));
    }

    #[test]
    fn reservation_and_transition_violations_map_to_conflict() {
        assert!(matches!(
            convert(LifecycleError::ItemNotAvailable {
                item_id: "i1".into(),
                status: ItemStatus::Reserved,
            }),
            RequestsError::Conflict(_)
        ));
        assert!(matches!(
            convert(LifecycleError::InvalidTransition {
                request_id: "r1".into(),
                from: RequestStatus::Rejected,
                to: RequestStatus::Approved,
            }),
            RequestsError::Conflict(_)
        ));
        assert!(matches!(
            convert(LifecycleError::ApprovalConflict {
                item_id: "i1".into(),
            }),
            RequestsError::Conflict(_)
        ));
    }

    #[test]
    fn validation_failure_maps_to_bad_request() {
        let err = convert(LifecycleError::Validation("message too short".into()));
        assert!(matches!(err, RequestsError::ValidationFailed(_)));
    }

    #[test]
    fn token_errors_map_to_unauthorized() {
        let err: RequestsError = InternalError::from(TokenError::Expired).into();
        assert!(matches!(err, RequestsError::Unauthorized(_)));
        let err: RequestsError = TokenError::Invalid("bad signature".into()).into();
        assert!(matches!(err, RequestsError::Unauthorized(_)));
    }

    #[test]
    fn database_failures_map_to_internal_error() {
        let err: RequestsError = InternalError::from(DatabaseError::Operation {
            operation: "find_request_by_id".into(),
            source: sea_orm::DbErr::Custom("disk on fire".into()),
        })
        .into();
        assert!(matches!(err, RequestsError::InternalError(_)));
    }
}
