use std::collections::HashMap;

use uuid::Uuid;

use crate::api::task::{self, CreateTask};
use crate::api::task_log::{self, CreateTaskLog};
use crate::auth::Session;
use crate::cli::args::{TaskLogsAction, TasksAction};
use crate::commands::fmt_datetime;
use crate::commands::table::Table;
use crate::db::JsonStore;
use crate::error::AppResult;
use crate::model::{Employee, Project, Task};
use crate::routes::{Screen, require_screen};

fn employee_names(store: &JsonStore) -> AppResult<HashMap<Uuid, String>> {
    Ok(store
        .load::<Employee>()?
        .into_iter()
        .map(|e| (e.id, e.name))
        .collect())
}

fn print_tasks(store: &JsonStore, tasks: Vec<Task>) -> AppResult<()> {
    let employees = employee_names(store)?;
    let projects: HashMap<Uuid, String> = store
        .load::<Project>()?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let name_of = |names: &HashMap<Uuid, String>, id: &Uuid| {
        names.get(id).cloned().unwrap_or_else(|| id.to_string())
    };

    let mut table = Table::new(&[
        "CODE", "TITLE", "ASSIGNED", "PHASE", "PROJECT", "PRIORITY", "START", "END", "EST",
    ]);
    for t in tasks {
        table.row([
            t.code.clone(),
            t.title.clone(),
            name_of(&employees, &t.assigned_employee_id),
            t.task_phase.to_string(),
            name_of(&projects, &t.project_id),
            t.priority.to_string(),
            fmt_datetime(t.start_date),
            fmt_datetime(t.end_date),
            t.estimation_hours.to_string(),
        ]);
    }
    table.print("No tasks.");
    Ok(())
}

pub fn tasks(store: &JsonStore, session: &Session, action: TasksAction) -> AppResult<()> {
    match action {
        TasksAction::List => {
            require_screen(session, Screen::AllTasks)?;
            print_tasks(store, task::list_tasks(store, session)?)
        }
        TasksAction::Mine => {
            require_screen(session, Screen::MyTasks)?;
            print_tasks(store, task::my_tasks(store, session)?)
        }
        TasksAction::Create {
            code,
            title,
            description,
            assignee,
            phase,
            project,
            priority,
            start,
            end,
            estimation,
        } => {
            require_screen(session, Screen::CreateTask)?;
            let created = task::create_task(
                store,
                session,
                CreateTask {
                    code,
                    title,
                    description,
                    assigned_employee: assignee,
                    phase,
                    project,
                    priority,
                    start_date: start,
                    end_date: end,
                    estimation_hours: estimation,
                },
            )?;
            println!("Task created: {}", created.code);
            Ok(())
        }
    }
}

pub fn task_logs(store: &JsonStore, session: &Session, action: TaskLogsAction) -> AppResult<()> {
    require_screen(session, Screen::TaskLogs)?;

    match action {
        TaskLogsAction::List => {
            let employees = employee_names(store)?;
            let mut table = Table::new(&["TASK", "EMPLOYEE", "FROM", "TO", "HOURS", "NOTES"]);
            for log in task_log::list_task_logs(store, session)? {
                table.row([
                    log.task_code,
                    employees
                        .get(&log.employee_id)
                        .cloned()
                        .unwrap_or_else(|| log.employee_id.to_string()),
                    fmt_datetime(log.from_time),
                    fmt_datetime(log.to_time),
                    format!("{:.2}", log.hours_spent),
                    log.notes,
                ]);
            }
            table.print("No task logs.");
        }
        TaskLogsAction::Add {
            task,
            employee,
            date,
            from,
            to,
            notes,
        } => {
            let log = task_log::add_task_log(
                store,
                session,
                CreateTaskLog {
                    task_code: task,
                    employee,
                    date,
                    from,
                    to,
                    notes,
                },
            )?;
            println!("Logged {:.2} hours on {}", log.hours_spent, log.task_code);
        }
    }
    Ok(())
}
