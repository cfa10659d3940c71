use crate::models;
use crate::services;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: uuid::Uuid) -> Result<Option<models::Quote>, String> {
    let query_span = tracing::info_span!("Fetching quote by id");
    sqlx::query_as::<_, models::Quote>("SELECT * FROM quotes WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch quote, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_by_reference(
    pool: &PgPool,
    reference: &str,
) -> Result<Option<models::Quote>, String> {
    let query_span = tracing::info_span!("Fetching quote by reference");
    sqlx::query_as::<_, models::Quote>(
        "SELECT * FROM quotes WHERE reference_number = $1 LIMIT 1",
    )
    .bind(reference)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        e => {
            tracing::error!("Failed to fetch quote, error: {:?}", e);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<models::Quote>, String> {
    let query_span = tracing::info_span!("Fetching recent quotes");
    sqlx::query_as::<_, models::Quote>("SELECT * FROM quotes ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch quotes, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn references_for_year(pool: &PgPool, year: i32) -> Result<Vec<String>, String> {
    let query_span = tracing::info_span!("Fetching quote references for year");
    sqlx::query_scalar::<_, String>(
        "SELECT reference_number FROM quotes WHERE reference_number LIKE $1",
    )
    .bind(format!("{}%", services::reference::year_prefix(year)))
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch quote references, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Allocates the next sequential reference for the current year and saves the
/// quote. Two submissions racing for the same number are arbitrated by the
/// unique index on reference_number; the loser recomputes and tries again.
pub async fn insert(pool: &PgPool, mut quote: models::Quote) -> Result<models::Quote, String> {
    let year = services::reference::current_year();
    for _ in 0..5 {
        let existing = references_for_year(pool, year).await?;
        quote.reference_number = services::reference::next_reference(year, &existing);

        match try_insert(pool, &quote).await {
            Ok(saved) => return Ok(saved),
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!(
                    "Quote reference {} already taken, retrying",
                    quote.reference_number
                );
                continue;
            }
            Err(err) => {
                tracing::error!("Failed to execute query: {:?}", err);
                return Err("Failed to insert".to_string());
            }
        }
    }

    tracing::error!("Could not allocate a quote reference after repeated collisions");
    Err("Failed to insert".to_string())
}

async fn try_insert(pool: &PgPool, quote: &models::Quote) -> Result<models::Quote, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new quote into the database");
    sqlx::query_as::<_, models::Quote>(
        r#"
        INSERT INTO quotes (
            id, reference_number, customer_data, items, total_amount,
            currency, status, comments, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(quote.id)
    .bind(&quote.reference_number)
    .bind(&quote.customer_data)
    .bind(&quote.items)
    .bind(quote.total_amount)
    .bind(&quote.currency)
    .bind(&quote.status)
    .bind(&quote.comments)
    .fetch_one(pool)
    .instrument(query_span)
    .await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
