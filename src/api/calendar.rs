//! Month view of tasks.
//!
//! A task appears on the day it starts and on every day strictly between its
//! start and end dates. Users with an employee profile only see the tasks
//! assigned to them; everyone else sees all tasks.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate};
use tracing::debug;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult};
use crate::model::{CalendarEvent, Task};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::of)
            .ok_or_else(|| AppError::validation(format!("Invalid month {}-{:02}", year, month)))
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    fn first_day(&self) -> NaiveDate {
        // constructed only through `of`, so the first of the month exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        self.first_day()
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    /// Heading such as "March 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("Expected YYYY-MM, got '{}'", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

/// Sunday-first; days outside the month are `None`.
pub type Week = [Option<CalendarDay>; 7];

pub fn tasks_for_date<'a>(session: &Session, tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    let employee = session.employee();

    tasks
        .iter()
        .filter(|t| t.occurs_on(date))
        .filter(|t| employee.is_none_or(|e| t.is_assigned_to(e.id)))
        .collect()
}

pub fn month_view(store: &JsonStore, session: &Session, ym: YearMonth) -> AppResult<Vec<Week>> {
    session.require_user()?;

    let tasks = store.load::<Task>()?;
    debug!(month = %ym, tasks = tasks.len(), "Building calendar");

    let mut weeks: Vec<Week> = Vec::new();
    let mut week: Week = Default::default();

    for date in ym.days() {
        let column = date.weekday().num_days_from_sunday() as usize;
        let events = tasks_for_date(session, &tasks, date)
            .into_iter()
            .map(|t| CalendarEvent::from_task(t, date))
            .collect();
        week[column] = Some(CalendarDay { date, events });

        if column == 6 {
            weeks.push(std::mem::take(&mut week));
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    Ok(weeks)
}
