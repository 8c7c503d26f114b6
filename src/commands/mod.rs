//! Console screens. Each command checks that the session may open the
//! matching screen, calls the api layer and prints the result.

pub mod admin;
pub mod calendar;
pub mod requests;
pub mod table;
pub mod tasks;

use crate::auth::Session;
use crate::cli::Commands;
use crate::db::JsonStore;
use crate::error::AppResult;
use crate::routes::{Screen, menu, require_screen};

pub fn execute(command: Commands, store: &JsonStore, session: &Session) -> AppResult<()> {
    match command {
        Commands::Menu => show_menu(session),
        Commands::Users { action } => admin::users(store, session, action),
        Commands::Employees { action } => admin::employees(store, session, action),
        Commands::Projects { action } => admin::projects(store, session, action),
        Commands::Tasks { action } => tasks::tasks(store, session, action),
        Commands::TaskLogs { action } => tasks::task_logs(store, session, action),
        Commands::Timecards { action } => requests::timecards(store, session, action),
        Commands::Leave { action } => requests::leave(store, session, action),
        Commands::Missions { action } => requests::missions(store, session, action),
        Commands::Approvals { action } => requests::approvals(store, session, action),
        Commands::Calendar { month } => {
            require_screen(session, Screen::Calendar)?;
            calendar::show(store, session, month)
        }
    }
}

fn show_menu(session: &Session) -> AppResult<()> {
    let user = session.require_user()?;
    println!("Logged in as {} ({})", user.username, user.role);
    if let Some(employee) = session.employee() {
        println!("Employee profile: {}", employee.name);
    }

    for section in menu(session) {
        println!();
        println!("{}", section.title);
        for screen in section.screens {
            println!("  - {}", screen);
        }
    }
    Ok(())
}

/// Short form of a date-time for tables.
pub(crate) fn fmt_datetime(at: chrono::NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
