use crate::error::{AppError, AppResult};
use crate::model::{Employee, Role, User};

/// The identity an operation runs as.
///
/// Holds at most one logged-in user and, when one exists, the employee record
/// linked to that user. Passed explicitly to every operation that needs to
/// know who is acting.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,

    /// Present only if this user is linked to an employee record
    employee: Option<Employee>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Sets the current user and attaches the employee whose `user_id`
    /// points at it, if there is one.
    pub fn login(&mut self, user: User, employees: &[Employee]) {
        self.employee = employees.iter().find(|e| e.is_linked_to(user.id)).cloned();
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.employee = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_leader(&self) -> bool {
        self.role() == Some(Role::Leader)
    }

    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }

    pub fn require_user(&self) -> AppResult<&User> {
        self.user.as_ref().ok_or(AppError::Unauthorized)
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.require_user()?.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin only"))
        }
    }

    pub fn require_admin_or_leader(&self) -> AppResult<()> {
        if self.require_user()?.role.can_review() {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin/Leader only"))
        }
    }

    pub fn require_employee_profile(&self) -> AppResult<&Employee> {
        self.require_user()?;
        self.employee
            .as_ref()
            .ok_or_else(|| AppError::forbidden("No employee profile"))
    }
}
