use crate::api::{employee, project, user};
use crate::auth::Session;
use crate::cli::args::{EmployeesAction, ProjectsAction, UsersAction};
use crate::commands::fmt_datetime;
use crate::commands::table::Table;
use crate::db::JsonStore;
use crate::error::AppResult;
use crate::models::{UpdateUserReq, UserReq};
use crate::routes::{Screen, require_screen};

pub fn users(store: &JsonStore, session: &Session, action: UsersAction) -> AppResult<()> {
    require_screen(session, Screen::Users)?;

    match action {
        UsersAction::List => {
            let mut table = Table::new(&["ID", "USERNAME", "ROLE", "EMAIL", "ACTIVE"]);
            for u in user::list_users(store, session)? {
                table.row([
                    u.id.to_string(),
                    u.username,
                    u.role.to_string(),
                    u.email,
                    u.active.to_string(),
                ]);
            }
            table.print("No users.");
        }
        UsersAction::Add {
            login,
            new_password,
            role,
            email,
        } => {
            let created = user::create_user(
                store,
                session,
                UserReq {
                    username: login,
                    password: new_password,
                    role,
                    email,
                },
            )?;
            println!("User created: {} ({})", created.username, created.id);
        }
        UsersAction::Update {
            id,
            new_password,
            role,
            email,
            active,
        } => {
            let updated = user::update_user(
                store,
                session,
                id,
                UpdateUserReq {
                    password: new_password,
                    role,
                    email,
                    active,
                },
            )?;
            println!("User updated: {}", updated.username);
        }
        UsersAction::Delete { id } => {
            user::delete_user(store, session, id)?;
            println!("User deleted: {}", id);
        }
    }
    Ok(())
}

pub fn employees(store: &JsonStore, session: &Session, action: EmployeesAction) -> AppResult<()> {
    require_screen(session, Screen::Employees)?;

    match action {
        EmployeesAction::List(filter) => {
            let query = employee::EmployeeQuery {
                search: filter.search,
                employee_type: filter.employee_type,
                active: filter.active,
            };
            let mut table = Table::new(&[
                "ID", "NAME", "EMAIL", "PHONE", "TYPE", "DEPARTMENT", "SALARY", "ACTIVE",
            ]);
            for e in employee::list_employees(store, session, &query)? {
                table.row([
                    e.id.to_string(),
                    e.name,
                    e.email,
                    e.phone.unwrap_or_default(),
                    e.employee_type.to_string(),
                    e.department,
                    format!("{:.2}", e.salary),
                    e.active.to_string(),
                ]);
            }
            table.print("No employees.");
        }
        EmployeesAction::Add {
            name,
            email,
            phone,
            employee_type,
            department,
            salary,
            linked_user,
        } => {
            let created = employee::create_employee(
                store,
                session,
                employee::CreateEmployee {
                    name,
                    email,
                    phone,
                    employee_type,
                    department,
                    salary,
                    username: linked_user,
                },
            )?;
            println!("Employee created: {} ({})", created.name, created.id);
        }
        EmployeesAction::Update {
            id,
            name,
            email,
            phone,
            employee_type,
            department,
            salary,
            linked_user,
            unlink,
            active,
        } => {
            let user = if unlink {
                Some(employee::UserLink::Unlinked)
            } else {
                linked_user.map(employee::UserLink::Username)
            };
            let updated = employee::update_employee(
                store,
                session,
                id,
                employee::UpdateEmployee {
                    name,
                    email,
                    phone,
                    employee_type,
                    department,
                    salary,
                    user,
                    active,
                },
            )?;
            println!("Employee updated: {}", updated.name);
        }
        EmployeesAction::Delete { id } => {
            employee::delete_employee(store, session, id)?;
            println!("Employee deleted: {}", id);
        }
    }
    Ok(())
}

pub fn projects(store: &JsonStore, session: &Session, action: ProjectsAction) -> AppResult<()> {
    require_screen(session, Screen::Projects)?;

    match action {
        ProjectsAction::List => {
            let mut table = Table::new(&[
                "ID", "NAME", "CUSTOMER", "STATUS", "START", "END", "ACTIVE",
            ]);
            for p in project::list_projects(store, session)? {
                table.row([
                    p.id.to_string(),
                    p.name,
                    p.customer_name,
                    p.status.to_string(),
                    fmt_datetime(p.start_date),
                    fmt_datetime(p.end_date),
                    p.active.to_string(),
                ]);
            }
            table.print("No projects.");
        }
        ProjectsAction::Add {
            name,
            description,
            status,
        } => {
            let created = project::create_project(
                store,
                session,
                project::CreateProject {
                    name,
                    description,
                    status,
                },
            )?;
            println!("Project created: {} ({})", created.name, created.id);
        }
        ProjectsAction::Update {
            id,
            name,
            description,
            customer,
            status,
            active,
        } => {
            let updated = project::update_project(
                store,
                session,
                id,
                project::UpdateProject {
                    name,
                    description,
                    customer_name: customer,
                    status,
                    active,
                },
            )?;
            println!("Project updated: {}", updated.name);
        }
        ProjectsAction::Delete { id } => {
            project::delete_project(store, session, id)?;
            println!("Project deleted: {}", id);
        }
    }
    Ok(())
}
