use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update video.")]
#[put("/{id}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(i32,)>,
    form: web::Json<forms::video::VideoPatch>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Video>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    let mut video = db::video::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Video>::build().not_found("Video not found"))?;

    form.into_inner().apply(&mut video);

    db::video::update(pg_pool.get_ref(), video)
        .await
        .map(|video| JsonResponse::build().set_item(video).ok("success"))
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))
}
