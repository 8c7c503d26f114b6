//! Tasks module, timecards and the calendar month view.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use common::{Team, seed_team, test_store};
use taskdesk::api::calendar::{YearMonth, month_view, tasks_for_date};
use taskdesk::api::employee::{UpdateEmployee, update_employee};
use taskdesk::api::project::{CreateProject, create_project};
use taskdesk::api::task::{CreateTask, create_task, list_tasks, my_tasks};
use taskdesk::api::task_log::{CreateTaskLog, add_task_log, list_task_logs};
use taskdesk::api::timecard::{CreateTimecard, add_timecard, my_timecards};
use taskdesk::db::JsonStore;
use taskdesk::error::AppError;
use taskdesk::model::{Priority, ProjectStatus, Task, TaskPhase};
use taskdesk::utils::form::ClockTime;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn with_project(store: &JsonStore, team: &Team) {
    create_project(
        store,
        &team.alice,
        CreateProject {
            name: "Atlas".into(),
            description: "Internal portal".into(),
            status: ProjectStatus::Active,
        },
    )
    .unwrap();
}

fn task_req(code: &str, assignee: &str, start: NaiveDate, end: NaiveDate) -> CreateTask {
    CreateTask {
        code: code.into(),
        title: format!("Task {code}"),
        description: String::new(),
        assigned_employee: assignee.into(),
        phase: TaskPhase::Pending,
        project: "Atlas".into(),
        priority: Priority::High,
        start_date: start,
        end_date: end,
        estimation_hours: "16".into(),
    }
}

#[test]
fn leader_creates_tasks_for_active_employees() {
    let ts = test_store();
    let team = seed_team(&ts.store);
    with_project(&ts.store, &team);

    let task = create_task(
        &ts.store,
        &team.bob,
        task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 7)),
    )
    .unwrap();
    assert_eq!(task.assigned_employee_id, team.dana_employee.id);
    assert_eq!(task.creator_id, team.bob.user().map(|u| u.id));
    assert_eq!(task.start_date.to_string(), "2024-03-04 09:00:00");
    assert_eq!(task.end_date.to_string(), "2024-03-07 17:00:00");
    assert_eq!(task.estimation_hours, 16.0);

    assert_matches!(
        create_task(
            &ts.store,
            &team.alice,
            task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 7)),
        ),
        Err(AppError::Conflict(_))
    );

    // inactive employees cannot be assigned
    update_employee(
        &ts.store,
        &team.alice,
        team.dana_employee.id,
        UpdateEmployee {
            active: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    assert_matches!(
        create_task(
            &ts.store,
            &team.bob,
            task_req("T-2", "Dana", date(2024, 3, 4), date(2024, 3, 7)),
        ),
        Err(AppError::NotFound(what)) if what == "Employee"
    );

    assert_eq!(list_tasks(&ts.store, &team.alice).unwrap().len(), 1);
}

#[test]
fn task_input_is_validated() {
    let ts = test_store();
    let team = seed_team(&ts.store);
    with_project(&ts.store, &team);

    let fractional = CreateTask {
        estimation_hours: "2.5".into(),
        ..task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 4))
    };
    assert_matches!(
        create_task(&ts.store, &team.bob, fractional),
        Err(AppError::Validation(msg)) if msg == "Estimation hours must be a valid number"
    );

    let untitled = CreateTask {
        code: " ".into(),
        title: String::new(),
        ..task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 4))
    };
    assert_matches!(
        create_task(&ts.store, &team.bob, untitled),
        Err(AppError::Validation(msg)) if msg == "Task code cannot be empty, Task title cannot be empty"
    );

    let no_project = CreateTask {
        project: "Zeus".into(),
        ..task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 4))
    };
    assert_matches!(
        create_task(&ts.store, &team.bob, no_project),
        Err(AppError::NotFound(what)) if what == "Project"
    );

    assert_matches!(
        create_task(
            &ts.store,
            &team.dana,
            task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 4)),
        ),
        Err(AppError::Forbidden(_))
    );
    assert!(ts.store.load::<Task>().unwrap().is_empty());
}

#[test]
fn my_tasks_shows_only_own_assignments() {
    let ts = test_store();
    let team = seed_team(&ts.store);
    with_project(&ts.store, &team);

    create_task(&ts.store, &team.alice, task_req("D-1", "Dana", date(2024, 3, 1), date(2024, 3, 2))).unwrap();
    create_task(&ts.store, &team.alice, task_req("B-1", "Bob", date(2024, 3, 1), date(2024, 3, 2))).unwrap();

    let mine = my_tasks(&ts.store, &team.dana).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].code, "D-1");

    // no employee profile, nothing assigned
    assert!(my_tasks(&ts.store, &team.alice).unwrap().is_empty());
}

#[test]
fn task_logs_compute_hours() {
    let ts = test_store();
    let team = seed_team(&ts.store);
    with_project(&ts.store, &team);
    create_task(&ts.store, &team.bob, task_req("T-1", "Dana", date(2024, 3, 4), date(2024, 3, 7))).unwrap();

    let log = add_task_log(
        &ts.store,
        &team.bob,
        CreateTaskLog {
            task_code: "T-1".into(),
            employee: "Dana".into(),
            date: date(2024, 3, 5),
            from: ClockTime::new(9, 15),
            to: ClockTime::new(12, 45),
            notes: "pairing".into(),
        },
    )
    .unwrap();
    assert_eq!(log.hours_spent, 3.5);
    assert_eq!(log.employee_id, team.dana_employee.id);

    let backwards = CreateTaskLog {
        task_code: "T-1".into(),
        employee: "Dana".into(),
        date: date(2024, 3, 5),
        from: ClockTime::new(14, 0),
        to: ClockTime::new(13, 0),
        notes: String::new(),
    };
    assert_matches!(
        add_task_log(&ts.store, &team.bob, backwards.clone()),
        Err(AppError::Validation(_))
    );
    assert_matches!(
        add_task_log(
            &ts.store,
            &team.bob,
            CreateTaskLog {
                task_code: "NOPE".into(),
                ..backwards
            }
        ),
        Err(AppError::NotFound(_))
    );

    assert_eq!(list_task_logs(&ts.store, &team.alice).unwrap().len(), 1);
}

#[test]
fn timecards_default_to_regular_day() {
    let ts = test_store();
    let team = seed_team(&ts.store);

    let card = add_timecard(&ts.store, &team.dana, CreateTimecard::regular_day(date(2024, 4, 1))).unwrap();
    assert_eq!(card.worked_hours(), 8.0);
    assert_eq!(card.employee_id, team.dana_employee.id);

    assert_matches!(
        add_timecard(&ts.store, &team.dana, CreateTimecard::regular_day(date(2024, 4, 1))),
        Err(AppError::Conflict(_))
    );

    let early_leave = CreateTimecard {
        check_in: ClockTime::new(10, 0),
        check_out: ClockTime::new(9, 0),
        ..CreateTimecard::regular_day(date(2024, 4, 2))
    };
    assert_matches!(
        add_timecard(&ts.store, &team.dana, early_leave),
        Err(AppError::Validation(_))
    );

    assert_eq!(my_timecards(&ts.store, &team.dana).unwrap().len(), 1);
    assert!(my_timecards(&ts.store, &team.bob).unwrap().is_empty());
    assert_matches!(
        add_timecard(&ts.store, &team.alice, CreateTimecard::regular_day(date(2024, 4, 1))),
        Err(AppError::Forbidden(_))
    );
}

#[test]
fn calendar_places_tasks_on_a_sunday_first_grid() {
    let ts = test_store();
    let team = seed_team(&ts.store);
    with_project(&ts.store, &team);

    // March 2024 starts on a Friday
    create_task(&ts.store, &team.alice, task_req("D-1", "Dana", date(2024, 3, 4), date(2024, 3, 7))).unwrap();
    create_task(&ts.store, &team.alice, task_req("B-1", "Bob", date(2024, 3, 5), date(2024, 3, 5))).unwrap();

    let march = YearMonth::new(2024, 3).unwrap();
    let weeks = month_view(&ts.store, &team.alice, march).unwrap();
    assert_eq!(weeks.len(), 6);
    assert!(weeks[0][..5].iter().all(Option::is_none));
    assert_eq!(weeks[0][5].as_ref().map(|d| d.date), Some(date(2024, 3, 1)));
    assert_eq!(weeks[5][0].as_ref().map(|d| d.date), Some(date(2024, 3, 31)));

    let day = |weeks: &Vec<[Option<taskdesk::api::calendar::CalendarDay>; 7]>, d: NaiveDate| {
        weeks
            .iter()
            .flatten()
            .flatten()
            .find(|c| c.date == d)
            .map(|c| c.events.iter().map(|e| e.task_code.clone()).collect::<Vec<_>>())
            .unwrap()
    };

    // admin has no employee profile and sees everything
    assert_eq!(day(&weeks, date(2024, 3, 5)), ["D-1", "B-1"]);
    assert_eq!(day(&weeks, date(2024, 3, 6)), ["D-1"]);
    // the last day of a multi-day task is not shown
    assert!(day(&weeks, date(2024, 3, 7)).is_empty());

    let dana_weeks = month_view(&ts.store, &team.dana, march).unwrap();
    assert_eq!(day(&dana_weeks, date(2024, 3, 5)), ["D-1"]);

    let tasks = ts.store.load::<Task>().unwrap();
    assert_eq!(tasks_for_date(&team.bob, &tasks, date(2024, 3, 5)).len(), 1);
}
