use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult};
use crate::model::Timecard;
use crate::utils::form::{ClockTime, DEFAULT_END, DEFAULT_START};

#[derive(Debug, Clone)]
pub struct CreateTimecard {
    pub date: NaiveDate,
    pub check_in: ClockTime,
    pub check_out: ClockTime,
    pub notes: String,
}

impl CreateTimecard {
    /// A regular 09:00-17:00 day.
    pub fn regular_day(date: NaiveDate) -> Self {
        Self {
            date,
            check_in: DEFAULT_START,
            check_out: DEFAULT_END,
            notes: String::new(),
        }
    }
}

/// Records a working day for the logged-in employee. One timecard per day.
pub fn add_timecard(
    store: &JsonStore,
    session: &Session,
    payload: CreateTimecard,
) -> AppResult<Timecard> {
    let employee = session.require_employee_profile()?;

    let arrival_time = payload.check_in.on(payload.date)?;
    let departure_time = payload.check_out.on(payload.date)?;
    if departure_time < arrival_time {
        return Err(AppError::validation("Check-out must not be before check-in"));
    }

    let timecard = Timecard {
        id: Uuid::new_v4(),
        employee_id: employee.id,
        arrival_time,
        departure_time,
        notes: payload.notes.trim().to_string(),
    };

    store.update::<Timecard, _, _>(|timecards| {
        let taken = timecards
            .iter()
            .any(|t| t.employee_id == employee.id && t.arrival_time.date() == payload.date);
        if taken {
            warn!(employee_id = %employee.id, date = %payload.date, "Duplicate timecard");
            return Err(AppError::conflict(format!("Timecard for {}", payload.date)));
        }

        timecards.push(timecard.clone());
        Ok(())
    })?;

    info!(
        timecard_id = %timecard.id,
        employee_id = %employee.id,
        hours = timecard.worked_hours(),
        "Timecard added"
    );
    Ok(timecard)
}

pub fn my_timecards(store: &JsonStore, session: &Session) -> AppResult<Vec<Timecard>> {
    session.require_user()?;

    let Some(employee) = session.employee() else {
        return Ok(Vec::new());
    };

    let mut timecards: Vec<Timecard> = store
        .load::<Timecard>()?
        .into_iter()
        .filter(|t| t.employee_id == employee.id)
        .collect();
    timecards.sort_by_key(|t| t.arrival_time);
    Ok(timecards)
}
