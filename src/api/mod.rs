pub mod approval;
pub mod calendar;
pub mod employee;
pub mod leave_request;
pub mod mission_request;
pub mod project;
pub mod task;
pub mod task_log;
pub mod timecard;
pub mod user;
