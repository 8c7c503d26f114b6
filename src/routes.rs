use strum_macros::{Display, EnumIter};

use crate::auth::Session;
use crate::error::{AppError, AppResult};

/// A dashboard destination.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum Screen {
    #[strum(to_string = "User Management")]
    Users,
    #[strum(to_string = "Employee Management")]
    Employees,
    #[strum(to_string = "Project Management")]
    Projects,
    #[strum(to_string = "All Tasks")]
    AllTasks,
    #[strum(to_string = "Create Task")]
    CreateTask,
    #[strum(to_string = "Task Logs")]
    TaskLogs,
    Calendar,
    #[strum(to_string = "My Tasks")]
    MyTasks,
    Timecards,
    #[strum(to_string = "Leave Request")]
    LeaveRequest,
    #[strum(to_string = "Mission Request")]
    MissionRequest,
    Approvals,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub screens: Vec<Screen>,
}

// Sidebar layout, top to bottom
const SIDEBAR: &[(&str, &[Screen])] = &[
    ("Admin Module", &[Screen::Users, Screen::Employees, Screen::Projects]),
    ("Tasks Module", &[Screen::AllTasks, Screen::CreateTask, Screen::TaskLogs]),
    ("Calendar", &[Screen::Calendar]),
    ("My Tasks", &[Screen::MyTasks]),
    (
        "Employee Module",
        &[Screen::Timecards, Screen::LeaveRequest, Screen::MissionRequest],
    ),
    ("Approvals", &[Screen::Approvals]),
    ("Logout", &[Screen::Logout]),
];

/// Whether the session may open `screen`. Anonymous sessions reach nothing.
pub fn can_access(session: &Session, screen: Screen) -> bool {
    if !session.is_authenticated() {
        return false;
    }

    match screen {
        Screen::Users | Screen::Employees | Screen::Projects => session.is_admin(),
        Screen::AllTasks | Screen::CreateTask | Screen::TaskLogs | Screen::Approvals => {
            session.is_admin() || session.is_leader()
        }
        Screen::MyTasks => session.is_employee() || session.is_leader(),
        Screen::Calendar
        | Screen::Timecards
        | Screen::LeaveRequest
        | Screen::MissionRequest
        | Screen::Logout => true,
    }
}

pub fn require_screen(session: &Session, screen: Screen) -> AppResult<()> {
    if !session.is_authenticated() {
        return Err(AppError::Unauthorized);
    }
    if can_access(session, screen) {
        Ok(())
    } else {
        tracing::warn!(%screen, role = ?session.role(), "Screen not accessible");
        Err(AppError::forbidden(format!("{} is not available for your role", screen)))
    }
}

/// Sidebar sections reachable by the session, in display order. Sections
/// with no reachable screen are left out.
pub fn menu(session: &Session) -> Vec<MenuSection> {
    SIDEBAR
        .iter()
        .filter_map(|&(title, screens)| {
            let screens: Vec<Screen> = screens
                .iter()
                .copied()
                .filter(|s| can_access(session, *s))
                .collect();
            (!screens.is_empty()).then_some(MenuSection { title, screens })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, User};
    use strum::IntoEnumIterator;

    fn session_as(role: Role) -> Session {
        let mut session = Session::anonymous();
        session.login(
            User::new("u".into(), "h".into(), role, "u@example.com".into()),
            &[],
        );
        session
    }

    fn titles(session: &Session) -> Vec<&'static str> {
        menu(session).into_iter().map(|s| s.title).collect()
    }

    #[test]
    fn anonymous_reaches_nothing() {
        let session = Session::anonymous();
        assert!(Screen::iter().all(|s| !can_access(&session, s)));
        assert!(menu(&session).is_empty());
        assert!(matches!(
            require_screen(&session, Screen::Calendar),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn admin_menu() {
        let admin = session_as(Role::Admin);
        assert_eq!(
            titles(&admin),
            [
                "Admin Module",
                "Tasks Module",
                "Calendar",
                "Employee Module",
                "Approvals",
                "Logout"
            ]
        );
        assert!(!can_access(&admin, Screen::MyTasks));
    }

    #[test]
    fn leader_menu() {
        let leader = session_as(Role::Leader);
        assert_eq!(
            titles(&leader),
            [
                "Tasks Module",
                "Calendar",
                "My Tasks",
                "Employee Module",
                "Approvals",
                "Logout"
            ]
        );
        assert!(matches!(
            require_screen(&leader, Screen::Users),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn employee_menu() {
        let employee = session_as(Role::Employee);
        assert_eq!(
            titles(&employee),
            ["Calendar", "My Tasks", "Employee Module", "Logout"]
        );
        assert!(!can_access(&employee, Screen::Approvals));
        assert!(require_screen(&employee, Screen::LeaveRequest).is_ok());
    }

    #[test]
    fn every_screen_is_on_the_sidebar() {
        for screen in Screen::iter() {
            assert!(SIDEBAR.iter().any(|(_, screens)| screens.contains(&screen)));
        }
    }
}

// SIDEBAR
//  ├─ Admin Module     Users, Employees, Projects        (admin)
//  ├─ Tasks Module     All Tasks, Create Task, Task Logs (admin, leader)
//  ├─ Calendar                                           (any)
//  ├─ My Tasks                                           (employee, leader)
//  ├─ Employee Module  Timecards, Leave, Mission         (any)
//  ├─ Approvals                                          (admin, leader)
//  └─ Logout                                             (any)
