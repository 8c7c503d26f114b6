use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::api::calendar::YearMonth;
use crate::model::{EmployeeType, LeaveType, MissionType, Priority, ProjectStatus, Role, TaskPhase};
use crate::utils::form::ClockTime;

/// Task and HR administration for small teams
#[derive(Parser, Debug)]
#[command(name = "taskdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the JSON collections
    #[arg(long, global = true, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, env = "TASKDESK_USERNAME")]
    pub username: Option<String>,

    #[arg(short, long, global = true, env = "TASKDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the screens available to the logged-in user
    Menu,
    /// Manage login accounts (admin)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Manage employees (admin)
    Employees {
        #[command(subcommand)]
        action: EmployeesAction,
    },
    /// Manage projects (admin)
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },
    /// Tasks (admin / leader; `mine` for assignees)
    Tasks {
        #[command(subcommand)]
        action: TasksAction,
    },
    /// Time spent on tasks (admin / leader)
    TaskLogs {
        #[command(subcommand)]
        action: TaskLogsAction,
    },
    /// Own daily timecards
    Timecards {
        #[command(subcommand)]
        action: TimecardsAction,
    },
    /// Own leave requests
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },
    /// Own mission and permission requests
    Missions {
        #[command(subcommand)]
        action: MissionsAction,
    },
    /// Review pending requests (admin / leader)
    Approvals {
        #[command(subcommand)]
        action: ApprovalsAction,
    },
    /// Month view of tasks
    Calendar {
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<YearMonth>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    List,
    Add {
        #[arg(long)]
        login: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        email: String,
    },
    Update {
        id: Uuid,
        /// Leave out to keep the current password
        #[arg(long)]
        new_password: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Args, Debug)]
pub struct EmployeeFilter {
    /// Match against name, email or department
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long = "type")]
    pub employee_type: Option<EmployeeType>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum EmployeesAction {
    List(EmployeeFilter),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "type")]
        employee_type: EmployeeType,
        #[arg(long)]
        department: String,
        #[arg(long)]
        salary: String,
        /// Username of the login account to link
        #[arg(long = "user")]
        linked_user: Option<String>,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "type")]
        employee_type: Option<EmployeeType>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long = "user", conflicts_with = "unlink")]
        linked_user: Option<String>,
        /// Remove the login account link
        #[arg(long)]
        unlink: bool,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectsAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "Active")]
        status: ProjectStatus,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        status: Option<ProjectStatus>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum TasksAction {
    /// Every task
    List,
    /// Tasks assigned to me
    Mine,
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Assigned employee's name
        #[arg(long)]
        assignee: String,
        #[arg(long, default_value = "Pending")]
        phase: TaskPhase,
        /// Project name
        #[arg(long)]
        project: String,
        #[arg(long, default_value = "Medium")]
        priority: Priority,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Estimated hours (whole number)
        #[arg(long)]
        estimation: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskLogsAction {
    List,
    Add {
        #[arg(long)]
        task: String,
        /// Employee name
        #[arg(long)]
        employee: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "09:00")]
        from: ClockTime,
        #[arg(long, default_value = "17:00")]
        to: ClockTime,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TimecardsAction {
    List,
    Add {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "09:00")]
        check_in: ClockTime,
        #[arg(long, default_value = "17:00")]
        check_out: ClockTime,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LeaveAction {
    List,
    Submit {
        #[arg(long = "type")]
        leave_type: LeaveType,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MissionsAction {
    List,
    Submit {
        #[arg(long = "type", default_value = "MISSION")]
        mission_type: MissionType,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        start: ClockTime,
        #[arg(long)]
        end: ClockTime,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        purpose: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApprovalsAction {
    /// Pending leave and mission requests
    Pending,
    ApproveLeave {
        id: Uuid,
    },
    RejectLeave {
        id: Uuid,
        #[arg(long, default_value = "")]
        notes: String,
    },
    ApproveMission {
        id: Uuid,
    },
    RejectMission {
        id: Uuid,
        #[arg(long, default_value = "")]
        notes: String,
    },
}
