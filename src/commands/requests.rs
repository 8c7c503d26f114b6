use crate::api::approval;
use crate::api::leave_request::{self, CreateLeave};
use crate::api::mission_request::{self, CreateMission};
use crate::api::timecard::{self, CreateTimecard};
use crate::auth::Session;
use crate::cli::args::{ApprovalsAction, LeaveAction, MissionsAction, TimecardsAction};
use crate::commands::fmt_datetime;
use crate::commands::table::Table;
use crate::db::JsonStore;
use crate::error::AppResult;
use crate::model::{LeaveRequest, MissionRequest, Review};
use crate::routes::{Screen, require_screen};

fn review_cells(review: &Review) -> [String; 3] {
    [
        review.status().to_string(),
        review.reviewed_by().unwrap_or("-").to_string(),
        review.review_notes().unwrap_or("").to_string(),
    ]
}

fn leave_table(requests: Vec<LeaveRequest>) -> Table {
    let mut table = Table::new(&[
        "ID", "TYPE", "FROM", "TO", "DAYS", "REASON", "STATUS", "REVIEWER", "NOTES",
    ]);
    for r in requests {
        let days = r.days();
        let [status, reviewer, notes] = review_cells(&r.review);
        table.row([
            r.id.to_string(),
            r.leave_type.to_string(),
            r.start_date.to_string(),
            r.end_date.to_string(),
            days.to_string(),
            r.reason,
            status,
            reviewer,
            notes,
        ]);
    }
    table
}

fn mission_table(requests: Vec<MissionRequest>) -> Table {
    let mut table = Table::new(&[
        "ID", "TYPE", "START", "END", "DESTINATION", "PURPOSE", "STATUS", "REVIEWER", "NOTES",
    ]);
    for r in requests {
        let [status, reviewer, notes] = review_cells(&r.review);
        table.row([
            r.id.to_string(),
            r.mission_type.to_string(),
            fmt_datetime(r.start_time),
            fmt_datetime(r.end_time),
            r.destination,
            r.purpose,
            status,
            reviewer,
            notes,
        ]);
    }
    table
}

pub fn timecards(store: &JsonStore, session: &Session, action: TimecardsAction) -> AppResult<()> {
    require_screen(session, Screen::Timecards)?;

    match action {
        TimecardsAction::List => {
            let mut table = Table::new(&["DATE", "CHECK IN", "CHECK OUT", "HOURS", "NOTES"]);
            for t in timecard::my_timecards(store, session)? {
                table.row([
                    t.arrival_time.date().to_string(),
                    t.arrival_time.format("%H:%M").to_string(),
                    t.departure_time.format("%H:%M").to_string(),
                    format!("{:.2}", t.worked_hours()),
                    t.notes,
                ]);
            }
            table.print("No timecards.");
        }
        TimecardsAction::Add {
            date,
            check_in,
            check_out,
            notes,
        } => {
            let added = timecard::add_timecard(
                store,
                session,
                CreateTimecard {
                    date,
                    check_in,
                    check_out,
                    notes,
                },
            )?;
            println!(
                "Timecard added for {} ({:.2} hours)",
                date,
                added.worked_hours()
            );
        }
    }
    Ok(())
}

pub fn leave(store: &JsonStore, session: &Session, action: LeaveAction) -> AppResult<()> {
    require_screen(session, Screen::LeaveRequest)?;

    match action {
        LeaveAction::List => {
            leave_table(leave_request::my_leave_requests(store, session)?)
                .print("No leave requests.");
        }
        LeaveAction::Submit {
            leave_type,
            from,
            to,
            reason,
        } => {
            let request = leave_request::submit_leave(
                store,
                session,
                CreateLeave {
                    leave_type,
                    start_date: from,
                    end_date: to,
                    reason,
                },
            )?;
            println!("Leave request submitted: {}", request.id);
        }
    }
    Ok(())
}

pub fn missions(store: &JsonStore, session: &Session, action: MissionsAction) -> AppResult<()> {
    require_screen(session, Screen::MissionRequest)?;

    match action {
        MissionsAction::List => {
            mission_table(mission_request::my_mission_requests(store, session)?)
                .print("No mission requests.");
        }
        MissionsAction::Submit {
            mission_type,
            date,
            start,
            end,
            destination,
            purpose,
        } => {
            let request = mission_request::submit_mission(
                store,
                session,
                CreateMission {
                    mission_type,
                    date,
                    start,
                    end,
                    destination,
                    purpose,
                },
            )?;
            println!("Mission request submitted: {}", request.id);
        }
    }
    Ok(())
}

pub fn approvals(store: &JsonStore, session: &Session, action: ApprovalsAction) -> AppResult<()> {
    require_screen(session, Screen::Approvals)?;

    match action {
        ApprovalsAction::Pending => {
            println!("Leave requests");
            leave_table(approval::pending_leave(store, session)?).print("  none pending");
            println!();
            println!("Mission requests");
            mission_table(approval::pending_missions(store, session)?).print("  none pending");
        }
        ApprovalsAction::ApproveLeave { id } => {
            approval::approve_leave(store, session, id)?;
            println!("Leave request approved");
        }
        ApprovalsAction::RejectLeave { id, notes } => {
            approval::reject_leave(store, session, id, &notes)?;
            println!("Leave request rejected");
        }
        ApprovalsAction::ApproveMission { id } => {
            approval::approve_mission(store, session, id)?;
            println!("Mission request approved");
        }
        ApprovalsAction::RejectMission { id, notes } => {
            approval::reject_mission(store, session, id, &notes)?;
            println!("Mission request rejected");
        }
    }
    Ok(())
}
