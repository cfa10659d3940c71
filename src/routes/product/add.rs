use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.")]
#[post("")]
pub async fn add(
    user: models::CurrentUser,
    form: web::Json<forms::product::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Product>::build().form_error(errors.to_string()));
    }

    let existing = db::product::fetch_by_slug(pg_pool.get_ref(), &form.slug)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))?;
    if existing.is_some() {
        return Err(JsonResponse::<models::Product>::build().conflict("Slug already exists"));
    }

    db::product::insert(pg_pool.get_ref(), form.into_inner().into_model(user.id))
        .await
        .map(|product| {
            JsonResponse::build()
                .set_id(product.id)
                .set_item(product)
                .created("success")
        })
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}
