use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Video>, String> {
    let query_span = tracing::info_span!("Fetching video by id");
    sqlx::query_as::<_, models::Video>("SELECT * FROM videos WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch video, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Video>, String> {
    let query_span = tracing::info_span!("Fetching all videos");
    sqlx::query_as::<_, models::Video>(
        "SELECT * FROM videos ORDER BY display_order ASC, created_at DESC",
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch videos, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Public site view: only active videos assigned to the page.
pub async fn fetch_by_page(pool: &PgPool, page: &str) -> Result<Vec<models::Video>, String> {
    let query_span = tracing::info_span!("Fetching videos by display page");
    sqlx::query_as::<_, models::Video>(
        r#"
        SELECT * FROM videos
        WHERE display_page = $1 AND is_active = TRUE
        ORDER BY display_order ASC, created_at DESC
        "#,
    )
    .bind(page)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch videos, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, video: models::Video) -> Result<models::Video, String> {
    let query_span = tracing::info_span!("Saving new video into the database");
    sqlx::query_as::<_, models::Video>(
        r#"
        INSERT INTO videos (
            title, description, video_url, video_type, thumbnail_url,
            category, display_page, display_order, is_active, created_by,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&video.title)
    .bind(&video.description)
    .bind(&video.video_url)
    .bind(&video.video_type)
    .bind(&video.thumbnail_url)
    .bind(&video.category)
    .bind(&video.display_page)
    .bind(video.display_order)
    .bind(video.is_active)
    .bind(video.created_by)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, video: models::Video) -> Result<models::Video, String> {
    let query_span = tracing::info_span!("Updating video");
    sqlx::query_as::<_, models::Video>(
        r#"
        UPDATE videos
        SET
            title = $2,
            description = $3,
            video_url = $4,
            video_type = $5,
            thumbnail_url = $6,
            category = $7,
            display_page = $8,
            display_order = $9,
            is_active = $10,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(video.id)
    .bind(&video.title)
    .bind(&video.description)
    .bind(&video.video_url)
    .bind(&video.video_type)
    .bind(&video.thumbnail_url)
    .bind(&video.category)
    .bind(&video.display_page)
    .bind(video.display_order)
    .bind(video.is_active)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting video");
    sqlx::query("DELETE FROM videos WHERE id = $1")
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
