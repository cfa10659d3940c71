use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Article>, String> {
    let query_span = tracing::info_span!("Fetching article by id");
    sqlx::query_as::<_, models::Article>("SELECT * FROM articles WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch article, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<models::Article>, String> {
    let query_span = tracing::info_span!("Fetching article by slug");
    sqlx::query_as::<_, models::Article>("SELECT * FROM articles WHERE slug = $1 LIMIT 1")
        .bind(slug)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch article, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

/// Published listing sorts by publish date, the editorial listing by
/// creation date.
pub async fn fetch_all(
    pool: &PgPool,
    published_only: bool,
) -> Result<Vec<models::Article>, String> {
    let query_span = tracing::info_span!("Fetching articles");
    let sql = if published_only {
        "SELECT * FROM articles WHERE is_published = TRUE ORDER BY publish_date DESC"
    } else {
        "SELECT * FROM articles ORDER BY created_at DESC"
    };

    sqlx::query_as::<_, models::Article>(sql)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch articles, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn insert(pool: &PgPool, article: models::Article) -> Result<models::Article, String> {
    let query_span = tracing::info_span!("Saving new article into the database");
    sqlx::query_as::<_, models::Article>(
        r#"
        INSERT INTO articles (
            title, slug, excerpt, content, featured_image, author, category,
            tags, is_published, is_featured, publish_date, created_by,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&article.title)
    .bind(&article.slug)
    .bind(&article.excerpt)
    .bind(&article.content)
    .bind(&article.featured_image)
    .bind(&article.author)
    .bind(&article.category)
    .bind(&article.tags)
    .bind(article.is_published)
    .bind(article.is_featured)
    .bind(article.publish_date)
    .bind(article.created_by)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, article: models::Article) -> Result<models::Article, String> {
    let query_span = tracing::info_span!("Updating article");
    sqlx::query_as::<_, models::Article>(
        r#"
        UPDATE articles
        SET
            title = $2,
            slug = $3,
            excerpt = $4,
            content = $5,
            featured_image = $6,
            author = $7,
            category = $8,
            tags = $9,
            is_published = $10,
            is_featured = $11,
            publish_date = $12,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(article.id)
    .bind(&article.title)
    .bind(&article.slug)
    .bind(&article.excerpt)
    .bind(&article.content)
    .bind(&article.featured_image)
    .bind(&article.author)
    .bind(&article.category)
    .bind(&article.tags)
    .bind(article.is_published)
    .bind(article.is_featured)
    .bind(article.publish_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting article");
    sqlx::query("DELETE FROM articles WHERE id = $1")
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
