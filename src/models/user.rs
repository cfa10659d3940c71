use crate::helpers::JsonResponse;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::sync::Arc;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
    Viewer,
}

#[derive(Debug, Serialize, Clone, Default, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Caller identity resolved from the bearer token by the authentication
/// middleware. Extracting it in a handler makes the route require a valid
/// token.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<(), actix_web::Error> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(JsonResponse::<Self>::build().forbidden("Insufficient permissions"))
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<Arc<CurrentUser>>()
            .map(|user| user.as_ref().clone())
            .ok_or_else(|| JsonResponse::<Self>::build().unauthorized("Not authenticated"));
        ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_serialize_lowercase() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(UserRole::Editor).unwrap(), "editor");
        assert_eq!(serde_json::to_value(UserRole::Viewer).unwrap(), "viewer");
    }

    #[test]
    fn role_check_matches_membership() {
        let user = CurrentUser {
            id: 1,
            email: "editor@example.com".to_string(),
            role: UserRole::Editor,
        };

        assert!(user
            .require_role(&[UserRole::Admin, UserRole::Editor])
            .is_ok());
        assert!(user.require_role(&[UserRole::Admin]).is_err());
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            id: 3,
            email: "a@b.c".to_string(),
            password_hash: "secret".to_string(),
            full_name: "A".to_string(),
            ..User::default()
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@b.c");
    }
}
