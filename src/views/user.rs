use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// What the API says about an account. The password hash never leaves
/// the models layer, this is the shape every auth response carries.
#[derive(Debug, Serialize, Default)]
pub struct Profile {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: models::UserRole,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<models::User> for Profile {
    fn from(user: models::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

impl Session {
    pub fn new(token: String, user: models::User) -> Self {
        Self {
            token,
            user: Profile::from(user),
        }
    }
}
