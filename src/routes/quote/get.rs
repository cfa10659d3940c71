use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

#[tracing::instrument(name = "List quotes.")]
#[get("")]
pub async fn list(
    user: models::CurrentUser,
    query: web::Query<ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    let limit = query.limit.unwrap_or(MAX_LIMIT).clamp(1, MAX_LIMIT);
    db::quote::fetch_recent(pg_pool.get_ref(), limit)
        .await
        .map(|quotes| JsonResponse::build().set_list(quotes).ok("OK"))
        .map_err(|err| JsonResponse::<models::Quote>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get quote by reference.")]
#[get("/{reference}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    let (reference,) = path.into_inner();
    db::quote::fetch_by_reference(pg_pool.get_ref(), &reference)
        .await
        .map_err(|err| JsonResponse::<models::Quote>::build().internal_server_error(err))
        .and_then(|quote| match quote {
            Some(quote) => Ok(JsonResponse::build().set_item(quote).ok("OK")),
            None => Err(JsonResponse::<models::Quote>::build().not_found("Quote not found")),
        })
}
