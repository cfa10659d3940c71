use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
}

// Registered before the id route so "upcoming" is never parsed as an id.
#[tracing::instrument(name = "List upcoming webinars.")]
#[get("/upcoming")]
pub async fn upcoming(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::webinar::fetch_upcoming(pg_pool.get_ref())
        .await
        .map(|webinars| JsonResponse::build().set_list(webinars).ok("OK"))
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get webinar.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    db::webinar::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
        .and_then(|webinar| match webinar {
            Some(webinar) => Ok(JsonResponse::build().set_item(webinar).ok("OK")),
            None => Err(JsonResponse::<models::Webinar>::build().not_found("Webinar not found")),
        })
}

#[tracing::instrument(name = "List webinars.")]
#[get("")]
pub async fn list(
    query: web::Query<ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::webinar::fetch_all(pg_pool.get_ref(), query.active)
        .await
        .map(|webinars| JsonResponse::build().set_list(webinars).ok("OK"))
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
}
