use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub active: Option<bool>,
}

#[tracing::instrument(name = "Get product.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(JsonResponse::build().set_item(product).ok("OK")),
            None => Err(JsonResponse::<models::Product>::build().not_found("Product not found")),
        })
}

#[tracing::instrument(name = "Get product by slug.")]
#[get("/slug/{slug}")]
pub async fn by_slug(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (slug,) = path.into_inner();
    db::product::fetch_by_slug(pg_pool.get_ref(), &slug)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(JsonResponse::build().set_item(product).ok("OK")),
            None => Err(JsonResponse::<models::Product>::build().not_found("Product not found")),
        })
}

/// The storefront's category shelf, active records only.
#[tracing::instrument(name = "List products of category.")]
#[get("/category/{category}")]
pub async fn by_category(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (category,) = path.into_inner();
    db::product::fetch_all(pg_pool.get_ref(), Some(&category), Some(true))
        .await
        .map(|products| JsonResponse::build().set_list(products).ok("OK"))
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}

#[tracing::instrument(name = "List products.")]
#[get("")]
pub async fn list(
    query: web::Query<ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch_all(pg_pool.get_ref(), query.category.as_deref(), query.active)
        .await
        .map(|products| JsonResponse::build().set_list(products).ok("OK"))
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}
