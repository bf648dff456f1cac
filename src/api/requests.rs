use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::DatabaseConnection;

use crate::api::helpers::{authenticate, BearerAuth};
use crate::errors::RequestsError;
use crate::services::{RequestLifecycleManager, TokenService};
use crate::stores::RequestStore;
use crate::types::dto::requests::{
    CreateRequestRequest, RequestResponse, RequestWithItemResponse, TransitionResponse,
    UpdateRequestStatusRequest,
};

/// Pickup request endpoints
pub struct RequestsApi {
    db: DatabaseConnection,
    lifecycle: Arc<RequestLifecycleManager>,
    requests: Arc<RequestStore>,
    tokens: Arc<TokenService>,
}

impl RequestsApi {
    pub fn new(
        db: DatabaseConnection,
        lifecycle: Arc<RequestLifecycleManager>,
        requests: Arc<RequestStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            db,
            lifecycle,
            requests,
            tokens,
        }
    }
}

/// API tags for request endpoints
#[derive(Tags)]
enum RequestTags {
    /// Pickup request lifecycle endpoints
    Requests,
}

#[OpenApi(prefix_path = "/requests")]
impl RequestsApi {
    /// Submit a pickup request against an Available item
    ///
    /// Creates the request with status Pending and notifies the item owner.
    /// Notification delivery is best-effort and never fails the request.
    #[oai(path = "/", method = "post", tag = "RequestTags::Requests")]
    async fn create_request(
        &self,
        auth: BearerAuth,
        body: Json<CreateRequestRequest>,
    ) -> Result<Json<RequestResponse>, RequestsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let request = self.lifecycle.submit_request(&ctx, &body).await?;
        Ok(Json(request.into()))
    }

    /// Apply an owner decision (Approved, Rejected or Completed) to a request
    #[oai(path = "/:request_id/status", method = "post", tag = "RequestTags::Requests")]
    async fn update_request_status(
        &self,
        auth: BearerAuth,
        request_id: Path<String>,
        body: Json<UpdateRequestStatusRequest>,
    ) -> Result<Json<TransitionResponse>, RequestsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let outcome = self
            .lifecycle
            .update_status(&ctx, &request_id, body.status)
            .await?;

        Ok(Json(TransitionResponse {
            request: outcome.request.into(),
            item_status: outcome.item_status,
            rejected_siblings: outcome.rejected_siblings,
        }))
    }

    /// Requests made by the authenticated user, newest first
    #[oai(path = "/mine", method = "get", tag = "RequestTags::Requests")]
    async fn list_my_requests(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<RequestWithItemResponse>>, RequestsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let rows = self.requests.list_by_requester(&self.db, &ctx.user_id).await?;
        Ok(Json(rows.into_iter().map(Into::into).collect()))
    }

    /// Requests received against the authenticated user's items, newest first
    #[oai(path = "/received", method = "get", tag = "RequestTags::Requests")]
    async fn list_received_requests(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<RequestWithItemResponse>>, RequestsError> {
        let ctx = authenticate(&self.tokens, &auth)?;
        let rows = self.requests.list_for_owner(&self.db, &ctx.user_id).await?;
        Ok(Json(rows.into_iter().map(Into::into).collect()))
    }
}
