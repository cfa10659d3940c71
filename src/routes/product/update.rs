use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update product.")]
#[put("/{id}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(i32,)>,
    form: web::Json<forms::product::ProductPatch>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Product>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    let mut product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Product>::build().not_found("Product not found"))?;

    let patch = form.into_inner();
    if let Some(slug) = patch.slug.as_deref() {
        if slug != product.slug {
            let clash = db::product::fetch_by_slug(pg_pool.get_ref(), slug)
                .await
                .map_err(|err| {
                    JsonResponse::<models::Product>::build().internal_server_error(err)
                })?;
            if clash.is_some() {
                return Err(
                    JsonResponse::<models::Product>::build().conflict("Slug already exists")
                );
            }
        }
    }

    patch.apply(&mut product);

    db::product::update(pg_pool.get_ref(), product)
        .await
        .map(|product| JsonResponse::build().set_item(product).ok("success"))
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
}
