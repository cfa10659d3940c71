use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetching product by id");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch product, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn fetch_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetching product by slug");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE slug = $1 LIMIT 1")
        .bind(slug)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch product, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

/// Optional equality filters combine; ordering is fixed to the catalogue
/// order the storefront expects.
pub async fn fetch_all(
    pool: &PgPool,
    category: Option<&str>,
    active: Option<bool>,
) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetching products");

    let mut clauses: Vec<String> = Vec::new();
    let mut next_arg = 1;
    if category.is_some() {
        clauses.push(format!("category = ${next_arg}"));
        next_arg += 1;
    }
    if active.is_some() {
        clauses.push(format!("is_active = ${next_arg}"));
    }

    let mut sql = String::from("SELECT * FROM products");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY display_order ASC, created_at DESC");

    let mut query = sqlx::query_as::<_, models::Product>(&sql);
    if let Some(category) = category {
        query = query.bind(category.to_string());
    }
    if let Some(active) = active {
        query = query.bind(active);
    }

    query
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn insert(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products (
            name, slug, description, short_description, price, currency,
            image_url, product_type, category, exam_board, duration,
            subjects_count, service_tier, features, is_active, is_featured,
            display_order, created_by, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.slug)
    .bind(&product.description)
    .bind(&product.short_description)
    .bind(product.price)
    .bind(&product.currency)
    .bind(&product.image_url)
    .bind(&product.product_type)
    .bind(&product.category)
    .bind(&product.exam_board)
    .bind(&product.duration)
    .bind(product.subjects_count)
    .bind(&product.service_tier)
    .bind(&product.features)
    .bind(product.is_active)
    .bind(product.is_featured)
    .bind(product.display_order)
    .bind(product.created_by)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET
            name = $2,
            slug = $3,
            description = $4,
            short_description = $5,
            price = $6,
            currency = $7,
            image_url = $8,
            product_type = $9,
            category = $10,
            exam_board = $11,
            duration = $12,
            subjects_count = $13,
            service_tier = $14,
            features = $15,
            is_active = $16,
            is_featured = $17,
            display_order = $18,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.slug)
    .bind(&product.description)
    .bind(&product.short_description)
    .bind(product.price)
    .bind(&product.currency)
    .bind(&product.image_url)
    .bind(&product.product_type)
    .bind(&product.category)
    .bind(&product.exam_board)
    .bind(&product.duration)
    .bind(product.subjects_count)
    .bind(&product.service_tier)
    .bind(&product.features)
    .bind(product.is_active)
    .bind(product.is_featured)
    .bind(product.display_order)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting product");
    sqlx::query("DELETE FROM products WHERE id = $1")
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
