pub mod calendar_event;
pub mod employee;
pub mod leave_request;
pub mod mission_request;
pub mod project;
pub mod request;
pub mod role;
pub mod task;
pub mod task_log;
pub mod timecard;
pub mod user;

pub use calendar_event::CalendarEvent;
pub use employee::{Employee, EmployeeType};
pub use leave_request::{LeaveRequest, LeaveType};
pub use mission_request::{MissionRequest, MissionType};
pub use project::{Project, ProjectStatus};
pub use request::{RequestStatus, Review, Reviewable};
pub use role::Role;
pub use task::{Priority, Task, TaskPhase};
pub use task_log::TaskLog;
pub use timecard::Timecard;
pub use user::User;
