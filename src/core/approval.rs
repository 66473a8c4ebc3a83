//! Approval request business logic.
//!
//! Approval requests are inert records: creating one does not lock its
//! target, deciding one does not update the target's status. The target
//! reference (`target_type` + `target_id`) is deliberately unchecked, so a
//! request may point at a row that has since been deleted.

use crate::{
    entities::{ApprovalRequest, ApprovalStatus, ApprovalTarget, approval_request},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new approval request.
///
/// The requester must exist; the target is stored as-is without a
/// referential check.
pub async fn create_approval_request(
    db: &DatabaseConnection,
    target_type: ApprovalTarget,
    target_id: i64,
    requester_id: i64,
    comments: Option<String>,
) -> Result<approval_request::Model> {
    crate::core::user::get_user_by_id(db, requester_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: requester_id,
        })?;

    let now = chrono::Utc::now();
    let request = approval_request::ActiveModel {
        target_type: Set(target_type),
        target_id: Set(target_id),
        requester_id: Set(requester_id),
        approver_id: Set(None),
        comments: Set(comments),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = request.insert(db).await?;
    Ok(result)
}

/// Finds an approval request by its unique id.
pub async fn get_approval_request_by_id(
    db: &DatabaseConnection,
    request_id: i64,
) -> Result<Option<approval_request::Model>> {
    ApprovalRequest::find_by_id(request_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all approval requests, optionally filtered by status, newest first.
pub async fn get_all_approval_requests(
    db: &DatabaseConnection,
    status: Option<ApprovalStatus>,
) -> Result<Vec<approval_request::Model>> {
    let mut query = ApprovalRequest::find().order_by_desc(approval_request::Column::CreatedAt);
    if let Some(status) = status {
        query = query.filter(approval_request::Column::Status.eq(status));
    }
    query.all(db).await.map_err(Into::into)
}

/// Retrieves all approval requests submitted by one user, newest first.
pub async fn get_approval_requests_for_requester(
    db: &DatabaseConnection,
    requester_id: i64,
) -> Result<Vec<approval_request::Model>> {
    ApprovalRequest::find()
        .filter(approval_request::Column::RequesterId.eq(requester_id))
        .order_by_desc(approval_request::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records a decision on an approval request.
///
/// Sets the approver, status and optional comments, and bumps `updated_at`.
/// The approver must exist; no other rule applies — this does not touch the
/// booking or expense the request points at.
pub async fn decide_approval_request(
    db: &DatabaseConnection,
    request_id: i64,
    approver_id: i64,
    status: ApprovalStatus,
    comments: Option<String>,
) -> Result<approval_request::Model> {
    crate::core::user::get_user_by_id(db, approver_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: approver_id,
        })?;

    let request = get_approval_request_by_id(db, request_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "ApprovalRequest",
            id: request_id,
        })?;

    let mut active: approval_request::ActiveModel = request.into();
    active.approver_id = Set(Some(approver_id));
    active.status = Set(status);
    if comments.is_some() {
        active.comments = Set(comments);
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Deletes an approval request by id. Returns `Error::NotFound` when no row was deleted.
pub async fn delete_approval_request(db: &DatabaseConnection, request_id: i64) -> Result<()> {
    let result = ApprovalRequest::delete_by_id(request_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "ApprovalRequest",
            id: request_id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_request_applies_default_status() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let booking = create_test_booking(&db, user.id).await?;

        let request = create_approval_request(
            &db,
            ApprovalTarget::Booking,
            booking.id,
            user.id,
            None,
        )
        .await?;

        assert_eq!(request.status, ApprovalStatus::Pending);
        assert!(request.approver_id.is_none());
        assert_eq!(request.target_id, booking.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_target_is_not_referentially_checked() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        // Points at an expense row that does not exist; stored anyway
        let request = create_approval_request(
            &db,
            ApprovalTarget::Expense,
            424242,
            user.id,
            Some("typo in the id".to_string()),
        )
        .await?;
        assert_eq!(request.target_id, 424242);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_request_unknown_requester() -> Result<()> {
        let db = setup_test_db().await?;

        let result =
            create_approval_request(&db, ApprovalTarget::Booking, 1, 999, None).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_decide_request() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let approver = create_test_user(&db, "approver@satlogix.test").await?;
        let booking = create_test_booking(&db, user.id).await?;
        let request = create_test_approval(&db, user.id, booking.id).await?;

        let decided = decide_approval_request(
            &db,
            request.id,
            approver.id,
            ApprovalStatus::Rejected,
            Some("over budget".to_string()),
        )
        .await?;

        assert_eq!(decided.status, ApprovalStatus::Rejected);
        assert_eq!(decided.approver_id, Some(approver.id));
        assert_eq!(decided.comments.as_deref(), Some("over budget"));
        assert!(decided.updated_at >= request.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_decide_unknown_request() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result =
            decide_approval_request(&db, 999, user.id, ApprovalStatus::Approved, None).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_by_status_and_requester() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let approver = create_test_user(&db, "approver@satlogix.test").await?;
        let booking = create_test_booking(&db, user.id).await?;

        let first = create_test_approval(&db, user.id, booking.id).await?;
        let _second = create_test_approval(&db, user.id, booking.id).await?;
        decide_approval_request(&db, first.id, approver.id, ApprovalStatus::Approved, None)
            .await?;

        let pending = get_all_approval_requests(&db, Some(ApprovalStatus::Pending)).await?;
        assert_eq!(pending.len(), 1);

        let mine = get_approval_requests_for_requester(&db, user.id).await?;
        assert_eq!(mine.len(), 2);

        let theirs = get_approval_requests_for_requester(&db, approver.id).await?;
        assert!(theirs.is_empty());

        Ok(())
    }
}
