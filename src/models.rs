use serde::Deserialize;
use validator::Validate;

use crate::model::Role;
use crate::utils::form::not_blank;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginReqDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserReq {
    #[validate(custom(function = "not_blank", message = "Username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    pub role: Role,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Changes to an existing account. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserReq {
    /// Re-hashed only when present and non-empty
    pub password: Option<String>,
    pub role: Option<Role>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub active: Option<bool>,
}
