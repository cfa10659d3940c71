use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

impl LoginForm {
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 8)]
    pub password: String,
    #[validate(min_length = 1)]
    pub full_name: String,
    pub role: Option<models::UserRole>,
}

impl RegisterForm {
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Build the user row once the password has been hashed. Role falls back
    /// to editor when the caller did not pick one.
    pub fn into_user(self, password_hash: String) -> models::User {
        let email = self.email.trim().to_lowercase();
        models::User {
            email,
            password_hash,
            full_name: self.full_name,
            role: self.role.unwrap_or_default(),
            is_active: true,
            ..models::User::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ChangePasswordForm {
    #[validate(min_length = 1)]
    pub current_password: String,
    #[validate(min_length = 8)]
    pub new_password: String,
}
