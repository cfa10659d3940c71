use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add article.")]
#[post("")]
pub async fn add(
    user: models::CurrentUser,
    form: web::Json<forms::article::ArticleForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Article>::build().form_error(errors.to_string()));
    }

    let existing = db::article::fetch_by_slug(pg_pool.get_ref(), &form.slug)
        .await
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))?;
    if existing.is_some() {
        return Err(JsonResponse::<models::Article>::build().conflict("Slug already exists"));
    }

    db::article::insert(pg_pool.get_ref(), form.into_inner().into_model(user.id))
        .await
        .map(|article| {
            JsonResponse::build()
                .set_id(article.id)
                .set_item(article)
                .created("success")
        })
        .map_err(|err| JsonResponse::<models::Article>::build().internal_server_error(err))
}
