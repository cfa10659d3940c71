use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update article.")]
#[put("/{id}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(i32,)>,
    form: web::Json<forms::article::ArticlePatch>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Article>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    let mut article = db::article::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Article>::build().not_found("Article not found"))?;

    let patch = form.into_inner();
    if let Some(slug) = patch.slug.as_deref() {
        if slug != article.slug {
            let clash = db::article::fetch_by_slug(pg_pool.get_ref(), slug)
                .await
                .map_err(|err| {
                    JsonResponse::<models::Article>::build().internal_server_error(err)
                })?;
            if clash.is_some() {
                return Err(
                    JsonResponse::<models::Article>::build().conflict("Slug already exists")
                );
            }
        }
    }

    patch.apply(&mut article);

    db::article::update(pg_pool.get_ref(), article)
        .await
        .map(|article| JsonResponse::build().set_item(article).ok("success"))
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))
}
