use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get video.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    db::video::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))
        .and_then(|video| match video {
            Some(video) => Ok(JsonResponse::build().set_item(video).ok("OK")),
            None => Err(JsonResponse::<models::Video>::build().not_found("Video not found")),
        })
}

// Internal view, every record regardless of state.
#[tracing::instrument(name = "List videos.")]
#[get("")]
pub async fn list(
    _user: models::CurrentUser,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::video::fetch_all(pg_pool.get_ref())
        .await
        .map(|videos| JsonResponse::build().set_list(videos).ok("OK"))
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))
}

/// Public storefront listing, active records of one display page.
#[tracing::instrument(name = "List videos for page.")]
#[get("/page/{page}")]
pub async fn page_list(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (page,) = path.into_inner();
    db::video::fetch_by_page(pg_pool.get_ref(), &page)
        .await
        .map(|videos| JsonResponse::build().set_list(videos).ok("OK"))
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))
}
