use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub published: Option<bool>,
}

#[tracing::instrument(name = "Get article.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    db::article::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))
        .and_then(|article| match article {
            Some(article) => Ok(JsonResponse::build().set_item(article).ok("OK")),
            None => Err(JsonResponse::<models::Article>::build().not_found("Article not found")),
        })
}

#[tracing::instrument(name = "Get article by slug.")]
#[get("/slug/{slug}")]
pub async fn by_slug(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (slug,) = path.into_inner();
    db::article::fetch_by_slug(pg_pool.get_ref(), &slug)
        .await
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))
        .and_then(|article| match article {
            Some(article) => Ok(JsonResponse::build().set_item(article).ok("OK")),
            None => Err(JsonResponse::<models::Article>::build().not_found("Article not found")),
        })
}

/// Everything by default, newest first; `published=true` narrows to the
/// public site view ordered by publish date.
#[tracing::instrument(name = "List articles.")]
#[get("")]
pub async fn list(
    query: web::Query<ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::article::fetch_all(pg_pool.get_ref(), query.published.unwrap_or(false))
        .await
        .map(|articles| JsonResponse::build().set_list(articles).ok("OK"))
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))
}
