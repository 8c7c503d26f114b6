use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::auth::Session;
use crate::auth::password::hash_password;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult, OptionExt};
use crate::model::User;
use crate::models::{UpdateUserReq, UserReq};

/* =========================
List users (admin)
========================= */
pub fn list_users(store: &JsonStore, session: &Session) -> AppResult<Vec<User>> {
    session.require_admin()?;
    store.load::<User>()
}

/* =========================
Create user (admin)
========================= */
pub fn create_user(store: &JsonStore, session: &Session, payload: UserReq) -> AppResult<User> {
    session.require_admin()?;
    payload.validate()?;

    let username = payload.username.trim().to_string();
    let password_hash = hash_password(&payload.password)?;

    let user = store.update::<User, _, _>(|users| {
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::conflict("Username"));
        }

        let user = User::new(username, password_hash, payload.role, payload.email.trim().to_string());
        users.push(user.clone());
        Ok(user)
    })?;

    info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");
    Ok(user)
}

/* =========================
Update user (admin)
========================= */
pub fn update_user(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    payload: UpdateUserReq,
) -> AppResult<User> {
    session.require_admin()?;
    payload.validate()?;

    let password_hash = match payload.password.as_deref() {
        Some(p) if !p.is_empty() => Some(hash_password(p)?),
        _ => None,
    };

    if password_hash.is_none()
        && payload.role.is_none()
        && payload.email.is_none()
        && payload.active.is_none()
    {
        return Err(AppError::validation("No fields provided for update"));
    }

    let user = store.update::<User, _, _>(|users| {
        let user = users.iter_mut().find(|u| u.id == id).ok_or_not_found("User")?;

        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        if let Some(role) = payload.role {
            user.role = role;
        }
        if let Some(email) = payload.email {
            user.email = email.trim().to_string();
        }
        if let Some(active) = payload.active {
            user.active = active;
        }
        Ok(user.clone())
    })?;

    info!(user_id = %id, "User updated");
    Ok(user)
}

/* =========================
Delete user (admin)
========================= */
pub fn delete_user(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<()> {
    session.require_admin()?;

    if session.user().is_some_and(|u| u.id == id) {
        warn!(user_id = %id, "Refusing to delete the logged-in user");
        return Err(AppError::validation("You cannot delete your own account"));
    }

    store.update::<User, _, _>(|users| {
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    })?;

    info!(user_id = %id, "User deleted");
    Ok(())
}
