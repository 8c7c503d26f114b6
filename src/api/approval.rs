//! Reviewer side of the request workflow (admins and leaders).
//!
//! Leave and mission requests share one implementation through
//! [`Reviewable`]. The reviewer recorded on a request is always the username
//! of the session that performed the transition.

use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppResult, OptionExt};
use crate::model::{LeaveRequest, MissionRequest, Review, Reviewable};

pub fn pending<R: Reviewable>(store: &JsonStore, session: &Session) -> AppResult<Vec<R>> {
    session.require_admin_or_leader()?;

    Ok(store
        .load::<R>()?
        .into_iter()
        .filter(|r| r.is_pending())
        .collect())
}

fn transition<R, F>(store: &JsonStore, session: &Session, id: Uuid, apply: F) -> AppResult<R>
where
    R: Reviewable + Clone,
    F: FnOnce(&mut Review, &str) -> AppResult<()>,
{
    session.require_admin_or_leader()?;
    let reviewer = session.require_user()?.username.as_str();

    store
        .update::<R, _, _>(|requests| {
            let request = requests
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_not_found(R::KIND)?;

            apply(request.review_mut(), reviewer)?;
            Ok(request.clone())
        })
        .inspect_err(|e| warn!(kind = R::KIND, %id, reviewer, error = %e, "Review failed"))
}

pub fn approve<R: Reviewable + Clone>(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<R> {
    let request = transition::<R, _>(store, session, id, |review, reviewer| review.approve(reviewer))?;

    info!(
        kind = R::KIND,
        %id,
        employee_id = %request.employee_id(),
        reviewer = ?request.review().reviewed_by(),
        "Request approved"
    );
    Ok(request)
}

pub fn reject<R: Reviewable + Clone>(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    notes: &str,
) -> AppResult<R> {
    let request = transition::<R, _>(store, session, id, |review, reviewer| {
        review.reject(reviewer, notes)
    })?;

    info!(
        kind = R::KIND,
        %id,
        employee_id = %request.employee_id(),
        reviewer = ?request.review().reviewed_by(),
        "Request rejected"
    );
    Ok(request)
}

pub fn pending_leave(store: &JsonStore, session: &Session) -> AppResult<Vec<LeaveRequest>> {
    pending(store, session)
}

pub fn pending_missions(store: &JsonStore, session: &Session) -> AppResult<Vec<MissionRequest>> {
    pending(store, session)
}

pub fn approve_leave(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<LeaveRequest> {
    approve(store, session, id)
}

pub fn reject_leave(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    notes: &str,
) -> AppResult<LeaveRequest> {
    reject(store, session, id, notes)
}

pub fn approve_mission(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<MissionRequest> {
    approve(store, session, id)
}

pub fn reject_mission(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    notes: &str,
) -> AppResult<MissionRequest> {
    reject(store, session, id, notes)
}
