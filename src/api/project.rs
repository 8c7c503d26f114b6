use chrono::{Local, Months};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::auth::Session;
use crate::db::JsonStore;
use crate::error::{AppError, AppResult, OptionExt};
use crate::model::{Project, ProjectStatus};
use crate::utils::form::not_blank;
use crate::utils::json_patch::{apply_patch, to_patch};

#[derive(Debug, Clone, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "not_blank", message = "Project name cannot be empty"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Description cannot be empty"))]
    pub description: String,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank", message = "Project name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank", message = "Description cannot be empty"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub fn list_projects(store: &JsonStore, session: &Session) -> AppResult<Vec<Project>> {
    session.require_admin()?;
    store.load::<Project>()
}

/// New projects run from now until one month from now.
pub fn create_project(
    store: &JsonStore,
    session: &Session,
    payload: CreateProject,
) -> AppResult<Project> {
    session.require_admin()?;
    payload.validate()?;

    let start_date = Local::now().naive_local();
    let end_date = start_date
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::internal("Project end date out of range"))?;

    let project = Project {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
        customer_name: String::new(),
        start_date,
        end_date,
        status: payload.status,
        active: true,
    };

    store.update::<Project, _, _>(|projects| {
        projects.push(project.clone());
        Ok(())
    })?;

    info!(project_id = %project.id, name = %project.name, "Project created");
    Ok(project)
}

pub fn update_project(
    store: &JsonStore,
    session: &Session,
    id: Uuid,
    payload: UpdateProject,
) -> AppResult<Project> {
    session.require_admin()?;
    payload.validate()?;

    let trim = |text: Option<String>| text.map(|t| t.trim().to_string());
    let patch = to_patch(&UpdateProject {
        name: trim(payload.name),
        description: trim(payload.description),
        customer_name: trim(payload.customer_name),
        ..payload
    })?;

    let project = store.update::<Project, _, _>(|projects| {
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_not_found("Project")?;

        *slot = apply_patch(&*slot, &patch, &["id", "startDate", "endDate"])?;
        Ok(slot.clone())
    })?;

    info!(project_id = %id, "Project updated");
    Ok(project)
}

pub fn delete_project(store: &JsonStore, session: &Session, id: Uuid) -> AppResult<()> {
    session.require_admin()?;

    store.update::<Project, _, _>(|projects| {
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(AppError::not_found("Project"));
        }
        Ok(())
    })?;

    info!(project_id = %id, "Project deleted");
    Ok(())
}
