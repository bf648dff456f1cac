use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::errors::internal::{DatabaseError, LifecycleError};
use crate::errors::InternalError;
use crate::services::emails::{
    self, OwnerNewRequest, RequesterDecision, KIND_OWNER_NEW_REQUEST, KIND_REQUEST_APPROVED,
    KIND_REQUEST_REJECTED,
};
use crate::stores::{ItemStore, NewRequest, NotificationStore, RequestStore};
use crate::types::db::item::{self, ItemStatus};
use crate::types::db::request::{self, RequestStatus};
use crate::types::dto::requests::CreateRequestRequest;
use crate::types::internal::RequestContext;

/// Result of a committed status transition
#[derive(Debug)]
pub struct TransitionOutcome {
    pub request: request::Model,
    /// Item status after reconciliation
    pub item_status: ItemStatus,
    /// Pending siblings auto-rejected by an approval
    pub rejected_siblings: u64,
}

/// Enforces the request/item lifecycle rules.
///
/// Every operation runs inside one database transaction, and the mutating
/// writes are conditional updates, so two callers racing on the same item
/// cannot both pass the precondition checks: whoever loses the conditional
/// write gets a conflict and commits nothing. Notifications are enqueued to
/// the outbox inside the same transaction and sent later by the dispatcher.
pub struct RequestLifecycleManager {
    db: DatabaseConnection,
    items: Arc<ItemStore>,
    requests: Arc<RequestStore>,
    notifications: Arc<NotificationStore>,
}

impl RequestLifecycleManager {
    pub fn new(
        db: DatabaseConnection,
        items: Arc<ItemStore>,
        requests: Arc<RequestStore>,
        notifications: Arc<NotificationStore>,
    ) -> Self {
        Self {
            db,
            items,
            requests,
            notifications,
        }
    }

    /// Submit a pickup request against an Available item.
    ///
    /// The item stays Available: multiple concurrent Pending requests per
    /// item are allowed by design, and only an owner decision changes item
    /// visibility. The owner notification is enqueued in the same
    /// transaction.
    ///
    /// # Errors
    ///
    /// `LifecycleError::ItemNotFound` for an unknown item,
    /// `LifecycleError::ItemNotAvailable` when the item is not Available,
    /// `LifecycleError::Validation` for an effectively empty message.
    pub async fn submit_request(
        &self,
        ctx: &RequestContext,
        input: &CreateRequestRequest,
    ) -> Result<request::Model, InternalError> {
        // The DTO validator enforces raw length; re-check the trimmed form so
        // a message of whitespace padding cannot slip through. Counted in
        // characters, not bytes, to match the validator.
        let message = input.message.trim();
        if message.chars().count() < 10 {
            return Err(LifecycleError::Validation(
                "message must be at least 10 characters".to_string(),
            )
            .into());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionBegin { source: e })?;

        let item = self
            .items
            .find_by_id(&txn, &input.item_id)
            .await?
            .ok_or_else(|| LifecycleError::ItemNotFound(input.item_id.clone()))?;

        if item.status != ItemStatus::Available {
            return Err(LifecycleError::ItemNotAvailable {
                item_id: item.id,
                status: item.status,
            }
            .into());
        }

        let request = self
            .requests
            .insert(
                &txn,
                NewRequest {
                    item_id: &item.id,
                    requester_id: &ctx.user_id,
                    requester_name: &input.requester_name,
                    requester_email: &input.requester_email,
                    message,
                    preferred_contact: input.preferred_contact,
                },
            )
            .await?;

        let (subject, body) = emails::owner_new_request(&OwnerNewRequest {
            owner_name: &item.contact_name,
            item_title: &item.title,
            requester_name: &request.requester_name,
            requester_email: &request.requester_email,
            message: &request.message,
            preferred_contact: match request.preferred_contact {
                request::PreferredContact::Email => "email",
                request::PreferredContact::Phone => "phone",
            },
        });
        self.notifications
            .enqueue(&txn, KIND_OWNER_NEW_REQUEST, &item.contact_email, &subject, &body)
            .await?;

        txn.commit()
            .await
            .map_err(|e| DatabaseError::TransactionCommit { source: e })?;

        tracing::info!(
            request_id = %request.id,
            item_id = %request.item_id,
            requester_id = %request.requester_id,
            "pickup request submitted"
        );

        Ok(request)
    }

    /// Apply an owner decision to a request - the core state machine.
    ///
    /// Legal edges: Pending -> {Approved, Rejected},
    /// Approved -> {Completed, Rejected}; Completed and Rejected are
    /// terminal. Item side effects per transition:
    ///
    /// - Approved: item Available -> Reserved (conditional write; losing it
    ///   reports a conflict), every other Pending request on the item is
    ///   rejected, approval email enqueued.
    /// - Rejected: item status recomputed from the surviving siblings so the
    ///   rejection cannot clobber a status established by another request;
    ///   rejection email enqueued.
    /// - Completed: item -> Collected.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        request_id: &str,
        new_status: RequestStatus,
    ) -> Result<TransitionOutcome, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionBegin { source: e })?;

        let request = self
            .requests
            .find_by_id(&txn, request_id)
            .await?
            .ok_or_else(|| LifecycleError::RequestNotFound(request_id.to_string()))?;

        let item = self
            .items
            .find_by_id(&txn, &request.item_id)
            .await?
            .ok_or_else(|| LifecycleError::ItemNotFound(request.item_id.clone()))?;

        // Transitions are driven exclusively by the item owner.
        if item.user_id != ctx.user_id {
            return Err(LifecycleError::NotItemOwner {
                request_id: request.id,
                user_id: ctx.user_id.clone(),
            }
            .into());
        }

        if !request.status.can_transition_to(new_status) {
            return Err(LifecycleError::InvalidTransition {
                request_id: request.id,
                from: request.status,
                to: new_status,
            }
            .into());
        }

        let (item_status, rejected_siblings) = match new_status {
            RequestStatus::Approved => self.approve(&txn, &request, &item).await?,
            RequestStatus::Rejected => self.reject(&txn, &request, &item).await?,
            RequestStatus::Completed => self.complete(&txn, &request, &item).await?,
            // can_transition_to never allows moving back to Pending
            RequestStatus::Pending => {
                return Err(LifecycleError::InvalidTransition {
                    request_id: request.id,
                    from: request.status,
                    to: new_status,
                }
                .into())
            }
        };

        let updated = self
            .requests
            .find_by_id(&txn, request_id)
            .await?
            .ok_or_else(|| LifecycleError::RequestNotFound(request_id.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DatabaseError::TransactionCommit { source: e })?;

        tracing::info!(
            request_id = %updated.id,
            item_id = %updated.item_id,
            new_status = ?updated.status,
            item_status = ?item_status,
            rejected_siblings,
            "request status transition committed"
        );

        Ok(TransitionOutcome {
            request: updated,
            item_status,
            rejected_siblings,
        })
    }

    /// Approval: the item row CAS is the serialization point. The item is
    /// Reserved exactly when some request holds Approved or Completed, so a
    /// failed `Available -> Reserved` write means another reservation exists.
    async fn approve<C: ConnectionTrait>(
        &self,
        conn: &C,
        request: &request::Model,
        item: &item::Model,
    ) -> Result<(ItemStatus, u64), InternalError> {
        let reserved = self
            .items
            .set_status_if(conn, &item.id, ItemStatus::Available, ItemStatus::Reserved)
            .await?;
        if !reserved {
            return Err(LifecycleError::ApprovalConflict {
                item_id: item.id.clone(),
            }
            .into());
        }

        let moved = self
            .requests
            .set_status_if(conn, &request.id, &[RequestStatus::Pending], RequestStatus::Approved)
            .await?;
        if !moved {
            return Err(LifecycleError::ApprovalConflict {
                item_id: item.id.clone(),
            }
            .into());
        }

        // First-owner-choice: the remaining Pending requests lose.
        let rejected = self
            .requests
            .reject_pending_siblings(conn, &item.id, &request.id)
            .await?;

        let location = format!("{} {}", item.city, item.postcode);
        let (subject, body) =
            emails::requester_approved(&Self::decision_input(request, item, &location));
        self.notifications
            .enqueue(conn, KIND_REQUEST_APPROVED, &request.requester_email, &subject, &body)
            .await?;

        Ok((ItemStatus::Reserved, rejected))
    }

    /// Rejection: recompute the item status instead of just setting it, so
    /// rejecting one request never clobbers a status established by a
    /// different, still-active request on the same item.
    async fn reject<C: ConnectionTrait>(
        &self,
        conn: &C,
        request: &request::Model,
        item: &item::Model,
    ) -> Result<(ItemStatus, u64), InternalError> {
        let moved = self
            .requests
            .set_status_if(
                conn,
                &request.id,
                &[RequestStatus::Pending, RequestStatus::Approved],
                RequestStatus::Rejected,
            )
            .await?;
        if !moved {
            return Err(LifecycleError::InvalidTransition {
                request_id: request.id.clone(),
                from: request.status,
                to: RequestStatus::Rejected,
            }
            .into());
        }

        let item_status = self.reconcile_item_status(conn, item, &request.id).await?;

        let location = format!("{} {}", item.city, item.postcode);
        let (subject, body) =
            emails::requester_rejected(&Self::decision_input(request, item, &location));
        self.notifications
            .enqueue(conn, KIND_REQUEST_REJECTED, &request.requester_email, &subject, &body)
            .await?;

        Ok((item_status, 0))
    }

    /// Completion: the hand-over happened, the item is gone. No email.
    async fn complete<C: ConnectionTrait>(
        &self,
        conn: &C,
        request: &request::Model,
        item: &item::Model,
    ) -> Result<(ItemStatus, u64), InternalError> {
        let moved = self
            .requests
            .set_status_if(
                conn,
                &request.id,
                &[RequestStatus::Approved],
                RequestStatus::Completed,
            )
            .await?;
        if !moved {
            return Err(LifecycleError::InvalidTransition {
                request_id: request.id.clone(),
                from: request.status,
                to: RequestStatus::Completed,
            }
            .into());
        }

        self.items
            .set_status(conn, &item.id, ItemStatus::Collected)
            .await?;

        Ok((ItemStatus::Collected, 0))
    }

    /// Item status as a pure function of the surviving requests: any
    /// Completed sibling wins, then any Approved sibling, else Available.
    /// An Expired item stays Expired - expiry is not derivable from requests.
    async fn reconcile_item_status<C: ConnectionTrait>(
        &self,
        conn: &C,
        item: &item::Model,
        rejected_request_id: &str,
    ) -> Result<ItemStatus, InternalError> {
        if item.status == ItemStatus::Expired {
            return Ok(ItemStatus::Expired);
        }

        let status = if self
            .requests
            .has_sibling_with_status(conn, &item.id, rejected_request_id, &[RequestStatus::Completed])
            .await?
        {
            ItemStatus::Collected
        } else if self
            .requests
            .has_sibling_with_status(conn, &item.id, rejected_request_id, &[RequestStatus::Approved])
            .await?
        {
            ItemStatus::Reserved
        } else {
            ItemStatus::Available
        };

        self.items.set_status(conn, &item.id, status).await?;
        Ok(status)
    }

    fn decision_input<'a>(
        request: &'a request::Model,
        item: &'a item::Model,
        location: &'a str,
    ) -> RequesterDecision<'a> {
        RequesterDecision {
            requester_name: &request.requester_name,
            item_title: &item.title,
            owner_name: &item.contact_name,
            owner_email: &item.contact_email,
            owner_phone: &item.contact_phone,
            location,
            original_message: &request.message,
        }
    }
}
