use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetching user by id");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch user, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetching user by email");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE email = $1 LIMIT 1")
        .bind(email)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch user, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

/// Login path only ever sees active accounts.
pub async fn fetch_active_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetching active user by email");
    sqlx::query_as::<_, models::User>(
        "SELECT * FROM users WHERE email = $1 AND is_active = TRUE LIMIT 1",
    )
    .bind(email)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        e => {
            tracing::error!("Failed to fetch user, error: {:?}", e);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn insert(pool: &PgPool, user: models::User) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (email, password_hash, full_name, role, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.full_name)
    .bind(user.role)
    .bind(user.is_active)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn touch_last_login(pool: &PgPool, id: i32) -> Result<(), String> {
    let query_span = tracing::info_span!("Stamping last login");
    sqlx::query("UPDATE users SET last_login = NOW(), updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Failed to update".to_string()
        })
}

pub async fn update_password(
    pool: &PgPool,
    id: i32,
    password_hash: &str,
) -> Result<(), String> {
    let query_span = tracing::info_span!("Updating user password");
    sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Failed to update".to_string()
        })
}
