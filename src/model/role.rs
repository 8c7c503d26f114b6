use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Admin,
    Leader,
    Employee,
}

impl Role {
    /// Roles allowed to approve or reject requests.
    pub fn can_review(&self) -> bool {
        matches!(self, Role::Admin | Role::Leader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_any_case() {
        assert_eq!(Role::from_str("leader").unwrap(), Role::Leader);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("hr").is_err());
    }

    #[test]
    fn stored_as_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"EMPLOYEE\"");
        assert_eq!(Role::Leader.to_string(), "LEADER");
    }
}
