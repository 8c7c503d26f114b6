use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::db::Record;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum EmployeeType {
    Developer,
    Designer,
    #[serde(rename = "QA")]
    #[strum(to_string = "QA")]
    Qa,
    Manager,
    Analyst,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub employee_type: EmployeeType,
    /// Login account, if this employee has one
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub department: String,
    pub salary: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn is_linked_to(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

impl Record for Employee {
    const FILE: &'static str = "employees.json";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn employee_type_keeps_form_labels() {
        assert_eq!(EmployeeType::Qa.to_string(), "QA");
        assert_eq!(EmployeeType::from_str("qa").unwrap(), EmployeeType::Qa);
        assert_eq!(serde_json::to_string(&EmployeeType::Developer).unwrap(), "\"Developer\"");
    }

    #[test]
    fn reads_record_without_user_link() {
        let raw = r#"{
            "id": "5b1f3c3e-8a5e-4d43-9d55-0d1b7f6f2a10",
            "name": "Dana",
            "email": "dana@example.com",
            "employeeType": "Designer",
            "department": "UX",
            "salary": 4200.5
        }"#;
        let emp: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(emp.user_id, None);
        assert!(emp.active);
        assert_eq!(emp.phone, None);
    }
}
