use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::Record;
use crate::model::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string
    #[serde(rename = "password")]
    pub password_hash: String,
    pub role: Role,
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(username: String, password_hash: String, role: Role, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role,
            email,
            active: true,
        }
    }
}

impl Record for User {
    const FILE: &'static str = "users.json";
}
