use chrono::Datelike;

use crate::api::calendar::{CalendarDay, WEEKDAY_HEADERS, YearMonth, month_view};
use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::AppResult;

const CELL: usize = 12;

pub fn show(store: &JsonStore, session: &Session, month: Option<YearMonth>) -> AppResult<()> {
    let ym = month.unwrap_or_else(YearMonth::current);
    let weeks = month_view(store, session, ym)?;

    println!("{}   (prev {}, next {})", ym.label(), ym.prev(), ym.next());
    println!(
        "{}",
        WEEKDAY_HEADERS
            .iter()
            .map(|h| format!("{:<CELL$}", h))
            .collect::<String>()
            .trim_end()
    );

    let mut agenda: Vec<&CalendarDay> = Vec::new();
    for week in &weeks {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) => {
                    let mut label = day.date.day().to_string();
                    if !day.events.is_empty() {
                        label.push_str(&format!(" ({})", day.events.len()));
                    }
                    format!("{:<CELL$}", label)
                }
                None => " ".repeat(CELL),
            })
            .collect();
        println!("{}", line.trim_end());

        agenda.extend(week.iter().flatten().filter(|d| !d.events.is_empty()));
    }

    for day in agenda {
        println!();
        println!("{}", day.date.format("%a %Y-%m-%d"));
        for event in &day.events {
            println!(
                "  {}  {}  [{} / {}]",
                event.task_code, event.task_title, event.phase, event.priority
            );
        }
    }
    Ok(())
}
