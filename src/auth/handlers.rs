use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        password::{hash_password, verify_password},
        session::Session,
    },
    config::{Config, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_USERNAME},
    db::JsonStore,
    error::{AppError, AppResult},
    model::{Employee, Role, User},
    models::LoginReqDto,
};

/// Checks credentials against the stored active users and, on success,
/// logs the user into `session`.
#[instrument(name = "auth_login", skip(store, session, req), fields(username = %req.username.trim()))]
pub fn authenticate(store: &JsonStore, session: &mut Session, req: &LoginReqDto) -> AppResult<()> {
    let username = req.username.trim();

    if username.is_empty() || req.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(AppError::validation("Please enter username and password"));
    }

    debug!("Fetching user from store");

    let users = store.load::<User>()?;
    let user = users
        .into_iter()
        .find(|u| u.active && u.username == username && verify_password(&req.password, &u.password_hash));

    let Some(user) = user else {
        info!("Invalid credentials");
        return Err(AppError::InvalidCredentials);
    };

    let employees = store.load::<Employee>()?;
    session.login(user, &employees);

    info!(
        role = ?session.role(),
        has_employee = session.employee().is_some(),
        "Login successful"
    );
    Ok(())
}

pub fn logout(session: &mut Session) {
    if let Some(username) = session.username() {
        info!(username, "Logout");
    }
    session.logout();
}

/// Creates the first admin account when no users exist yet.
pub fn seed_default_admin(store: &JsonStore, config: &Config) -> AppResult<bool> {
    store.update::<User, _, _>(|users| {
        if !users.is_empty() {
            return Ok(false);
        }

        let admin = User::new(
            DEFAULT_ADMIN_USERNAME.to_string(),
            hash_password(&config.default_admin_password)?,
            Role::Admin,
            DEFAULT_ADMIN_EMAIL.to_string(),
        );
        users.push(admin);

        warn!(
            username = DEFAULT_ADMIN_USERNAME,
            "Default admin user created; change its password"
        );
        Ok(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_store;
    use assert_matches::assert_matches;

    fn login(username: &str, password: &str) -> LoginReqDto {
        LoginReqDto {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn seeded_admin_can_log_in_once_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        let config = Config::with_data_dir(dir.path());

        assert!(seed_default_admin(&store, &config).unwrap());
        assert!(!seed_default_admin(&store, &config).unwrap());
        assert_eq!(store.load::<User>().unwrap().len(), 1);

        let mut session = Session::anonymous();
        authenticate(&store, &mut session, &login(" admin ", "admin123")).unwrap();
        assert!(session.is_admin());

        logout(&mut session);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn rejects_bad_input_and_inactive_users() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        let mut inactive = User::new(
            "gone".into(),
            hash_password("pw").unwrap(),
            Role::Employee,
            "gone@example.com".into(),
        );
        inactive.active = false;
        store.save(&[inactive]).unwrap();

        let mut session = Session::anonymous();
        assert_matches!(
            authenticate(&store, &mut session, &login("  ", "pw")),
            Err(AppError::Validation(_))
        );
        assert_matches!(
            authenticate(&store, &mut session, &login("gone", "pw")),
            Err(AppError::InvalidCredentials)
        );
        assert_matches!(
            authenticate(&store, &mut session, &login("nobody", "pw")),
            Err(AppError::InvalidCredentials)
        );
        assert!(!session.is_authenticated());
    }
}
