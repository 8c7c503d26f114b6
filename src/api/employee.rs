use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult, OptionExt};
use crate::model::{Employee, EmployeeType, User};
use crate::utils::form::{not_blank, parse_f64};
use crate::utils::json_patch::{apply_patch, to_patch};

const SALARY_MESSAGE: &str = "Salary must be a valid number";

#[derive(Debug, Clone, Validate)]
pub struct CreateEmployee {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    pub employee_type: EmployeeType,
    #[validate(custom(function = "not_blank", message = "Department cannot be empty"))]
    pub department: String,
    /// Raw text from the salary field
    pub salary: String,
    /// Username of the login account to link
    pub username: Option<String>,
}

/// How an update changes the employee's login link.
#[derive(Debug, Clone, PartialEq)]
pub enum UserLink {
    Username(String),
    Unlinked,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateEmployee {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub employee_type: Option<EmployeeType>,
    #[validate(custom(function = "not_blank", message = "Department cannot be empty"))]
    pub department: Option<String>,
    pub salary: Option<String>,
    pub user: Option<UserLink>,
    pub active: Option<bool>,
}

/// Filters for the employee table.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    pub search: Option<String>,
    pub employee_type: Option<EmployeeType>,
    pub active: Option<bool>,
}

// Stored form of an update; absent fields are left out of the patch.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_type: Option<EmployeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
}

fn resolve_user(store: &JsonStore, username: &str) -> AppResult<Uuid> {
    let username = username.trim();
    store
        .load::<User>()?
        .into_iter()
        .find(|u| u.username == username)
        .map(|u| u.id)
        .ok_or_not_found("User")
}

// A user account backs at most one employee.
fn ensure_link_free(
    employees: &[Employee],
    user_id: Option<Uuid>,
    employee_id: Uuid,
) -> AppResult<()> {
    let taken = |user_id: Uuid| {
        employees
            .iter()
            .any(|e| e.user_id == Some(user_id) && e.id != employee_id)
    };
    match user_id {
        Some(user_id) if taken(user_id) => {
            warn!(%user_id, %employee_id, "User already linked to another employee");
            Err(AppError::conflict("User link"))
        }
        _ => Ok(()),
    }
}

fn blank_to_none(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/* =========================
List employees (admin)
========================= */
pub fn list_employees(
    store: &JsonStore,
    session: &Session,
    query: &EmployeeQuery,
) -> AppResult<Vec<Employee>> {
    session.require_admin()?;
    debug!(?query, "Listing employees");

    let search = query.search.as_deref().map(str::to_lowercase);

    Ok(store
        .load::<Employee>()?
        .into_iter()
        .filter(|e| query.employee_type.is_none_or(|t| e.employee_type == t))
        .filter(|e| query.active.is_none_or(|a| e.active == a))
        .filter(|e| {
            search.as_deref().is_none_or(|s| {
                e.name.to_lowercase().contains(s)
                    || e.email.to_lowercase().contains(s)
                    || e.department.to_lowercase().contains(s)
            })
        })
        .collect())
}

/* =========================
Create employee (admin)
========================= */
pub fn create_employee(
    store: &JsonStore,
    session: &Session,
    payload: CreateEmployee,
) -> AppResult<Employee> {
    session.require_admin()?;
    payload.validate()?;

    let salary = parse_f64(&payload.salary, SALARY_MESSAGE)?;
    let user_id = match blank_to_none(payload.username) {
        Some(username) => Some(resolve_user(store, &username)?),
        None => None,
    };

    let employee = Employee {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: blank_to_none(payload.phone),
        employee_type: payload.employee_type,
        user_id,
        department: payload.department.trim().to_string(),
        salary,
        active: true,
    };

    store.update::<Employee, _, _>(|employees| {
        ensure_link_free(employees, employee.user_id, employee.id)?;
        employees.push(employee.clone());
        Ok(())
    })?;

    info!(employee_id = %employee.id, linked = user_id.is_some(), "Employee created");
    Ok(employee)
}

/* =========================
Update employee (admin)
========================= */
pub fn update_employee(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    payload: UpdateEmployee,
) -> AppResult<Employee> {
    session.require_admin()?;
    payload.validate()?;

    let salary = payload
        .salary
        .as_deref()
        .map(|s| parse_f64(s, SALARY_MESSAGE))
        .transpose()?;

    let user_id = match payload.user {
        Some(UserLink::Username(username)) => Some(Some(resolve_user(store, &username)?)),
        Some(UserLink::Unlinked) => Some(None),
        None => None,
    };

    let patch = to_patch(&EmployeePatch {
        name: payload.name.map(|n| n.trim().to_string()),
        email: payload.email.map(|e| e.trim().to_string()),
        phone: payload.phone.map(|p| blank_to_none(Some(p))),
        employee_type: payload.employee_type,
        department: payload.department.map(|d| d.trim().to_string()),
        salary,
        user_id,
        active: payload.active,
    })?;

    let employee = store.update::<Employee, _, _>(|employees| {
        if let Some(link) = user_id {
            ensure_link_free(employees, link, id)?;
        }
        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_not_found("Employee")?;

        *slot = apply_patch(&*slot, &patch, &["id"])?;
        Ok(slot.clone())
    })?;

    info!(employee_id = %id, "Employee updated");
    Ok(employee)
}

/* =========================
Delete employee (admin)
========================= */
pub fn delete_employee(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<()> {
    session.require_admin()?;

    store.update::<Employee, _, _>(|employees| {
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(AppError::not_found("Employee"));
        }
        Ok(())
    })?;

    info!(employee_id = %id, "Employee deleted");
    Ok(())
}

/// Active employees, as offered in assignment pickers.
pub fn active_employees(store: &JsonStore) -> AppResult<Vec<Employee>> {
    Ok(store
        .load::<Employee>()?
        .into_iter()
        .filter(|e| e.active)
        .collect())
}

/// First active employee with exactly this name.
pub fn find_active_by_name(store: &JsonStore, name: &str) -> AppResult<Employee> {
    let name = name.trim();
    active_employees(store)?
        .into_iter()
        .find(|e| e.name == name)
        .ok_or_not_found("Employee")
}
