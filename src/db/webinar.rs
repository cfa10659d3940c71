use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Webinar>, String> {
    let query_span = tracing::info_span!("Fetching webinar by id");
    sqlx::query_as::<_, models::Webinar>("SELECT * FROM webinars WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch webinar, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_all(
    pool: &PgPool,
    active: Option<bool>,
) -> Result<Vec<models::Webinar>, String> {
    let query_span = tracing::info_span!("Fetching webinars");

    let mut sql = String::from("SELECT * FROM webinars");
    if active.is_some() {
        sql.push_str(" WHERE is_active = $1");
    }
    sql.push_str(" ORDER BY scheduled_date DESC");

    let mut query = sqlx::query_as::<_, models::Webinar>(&sql);
    if let Some(active) = active {
        query = query.bind(active);
    }

    query
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch webinars, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// Sessions that have not run yet, soonest first.
pub async fn fetch_upcoming(pool: &PgPool) -> Result<Vec<models::Webinar>, String> {
    let query_span = tracing::info_span!("Fetching upcoming webinars");
    sqlx::query_as::<_, models::Webinar>(
        r#"
        SELECT * FROM webinars
        WHERE is_active = TRUE AND is_past = FALSE AND scheduled_date > NOW()
        ORDER BY scheduled_date ASC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch webinars, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, webinar: models::Webinar) -> Result<models::Webinar, String> {
    let query_span = tracing::info_span!("Saving new webinar into the database");
    sqlx::query_as::<_, models::Webinar>(
        r#"
        INSERT INTO webinars (
            title, description, host_name, webinar_url, thumbnail_url,
            scheduled_date, duration_minutes, category, is_active, is_past,
            recording_url, created_by, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&webinar.title)
    .bind(&webinar.description)
    .bind(&webinar.host_name)
    .bind(&webinar.webinar_url)
    .bind(&webinar.thumbnail_url)
    .bind(webinar.scheduled_date)
    .bind(webinar.duration_minutes)
    .bind(&webinar.category)
    .bind(webinar.is_active)
    .bind(webinar.is_past)
    .bind(&webinar.recording_url)
    .bind(webinar.created_by)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, webinar: models::Webinar) -> Result<models::Webinar, String> {
    let query_span = tracing::info_span!("Updating webinar");
    sqlx::query_as::<_, models::Webinar>(
        r#"
        UPDATE webinars
        SET
            title = $2,
            description = $3,
            host_name = $4,
            webinar_url = $5,
            thumbnail_url = $6,
            scheduled_date = $7,
            duration_minutes = $8,
            category = $9,
            is_active = $10,
            is_past = $11,
            recording_url = $12,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(webinar.id)
    .bind(&webinar.title)
    .bind(&webinar.description)
    .bind(&webinar.host_name)
    .bind(&webinar.webinar_url)
    .bind(&webinar.thumbnail_url)
    .bind(webinar.scheduled_date)
    .bind(webinar.duration_minutes)
    .bind(&webinar.category)
    .bind(webinar.is_active)
    .bind(webinar.is_past)
    .bind(&webinar.recording_url)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting webinar");
    sqlx::query("DELETE FROM webinars WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| true)
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Failed to delete".to_string()
        })
}
