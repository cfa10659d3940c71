use crate::configuration::AuthSettings;
use crate::models;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: models::UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for models::CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

pub fn issue(user: &models::User, settings: &AuthSettings) -> Result<String, String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(settings.token_ttl_hours)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign token: {:?}", err);
        "Failed to sign token".to_string()
    })
}

pub fn decode(token: &str, secret: &str) -> Result<Claims, String> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn test_settings() -> AuthSettings {
        AuthSettings {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 4,
        }
    }

    fn test_user() -> models::User {
        models::User {
            id: 42,
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
            ..models::User::default()
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let settings = test_settings();
        let token = issue(&test_user(), &settings).unwrap();

        let claims = decode(&token, &settings.jwt_secret).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, UserRole::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let settings = AuthSettings {
            token_ttl_hours: -2,
            ..test_settings()
        };
        let token = issue(&test_user(), &settings).unwrap();

        assert!(decode(&token, &settings.jwt_secret).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let settings = test_settings();
        let token = issue(&test_user(), &settings).unwrap();

        assert!(decode(&token, "another-secret").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode("not.a.token", "test-secret").is_err());
    }

    #[test]
    fn claims_resolve_to_current_user() {
        let settings = test_settings();
        let token = issue(&test_user(), &settings).unwrap();
        let user: models::CurrentUser = decode(&token, &settings.jwt_secret).unwrap().into();

        assert_eq!(user.id, 42);
        assert_eq!(user.role, UserRole::Admin);
    }
}
