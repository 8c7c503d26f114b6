#![allow(dead_code)]

use tempfile::TempDir;
use uuid::Uuid;

use taskdesk::auth::Session;
use taskdesk::auth::handlers::authenticate;
use taskdesk::auth::password::hash_password;
use taskdesk::db::{JsonStore, init_store};
use taskdesk::model::{Employee, EmployeeType, Role, User};
use taskdesk::models::LoginReqDto;

pub const PASSWORD: &str = "test_password_123!";

/// A store in a fresh temporary directory, removed on drop.
pub struct TestStore {
    pub store: JsonStore,
    _dir: TempDir,
}

pub fn test_store() -> TestStore {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = init_store(dir.path()).expect("store should open");
    TestStore { store, _dir: dir }
}

/// Insert a user directly, with [`PASSWORD`] as its password.
pub fn create_user(store: &JsonStore, username: &str, role: Role) -> User {
    let user = User::new(
        username.to_string(),
        hash_password(PASSWORD).expect("hashing should succeed"),
        role,
        format!("{username}@test.com"),
    );
    store
        .update::<User, _, _>(|users| {
            users.push(user.clone());
            Ok(())
        })
        .expect("user insert should succeed");
    user
}

/// Insert an active employee, optionally linked to a login account.
pub fn create_employee(store: &JsonStore, name: &str, user: Option<&User>) -> Employee {
    let employee = Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@test.com", name.to_lowercase()),
        phone: None,
        employee_type: EmployeeType::Developer,
        user_id: user.map(|u| u.id),
        department: "Engineering".to_string(),
        salary: 3000.0,
        active: true,
    };
    store
        .update::<Employee, _, _>(|employees| {
            employees.push(employee.clone());
            Ok(())
        })
        .expect("employee insert should succeed");
    employee
}

pub fn login(store: &JsonStore, username: &str) -> Session {
    let mut session = Session::anonymous();
    authenticate(
        store,
        &mut session,
        &LoginReqDto {
            username: username.to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .expect("login should succeed");
    session
}

/// Standard cast: admin "alice", leader "bob" (with employee profile "Bob"),
/// employee "dana" (with employee profile "Dana").
pub struct Team {
    pub alice: Session,
    pub bob: Session,
    pub dana: Session,
    pub bob_employee: Employee,
    pub dana_employee: Employee,
}

pub fn seed_team(store: &JsonStore) -> Team {
    create_user(store, "alice", Role::Admin);
    let bob = create_user(store, "bob", Role::Leader);
    let dana = create_user(store, "dana", Role::Employee);
    let bob_employee = create_employee(store, "Bob", Some(&bob));
    let dana_employee = create_employee(store, "Dana", Some(&dana));

    Team {
        alice: login(store, "alice"),
        bob: login(store, "bob"),
        dana: login(store, "dana"),
        bob_employee,
        dana_employee,
    }
}
