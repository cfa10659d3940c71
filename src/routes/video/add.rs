use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add video.")]
#[post("")]
pub async fn add(
    user: models::CurrentUser,
    form: web::Json<forms::video::VideoForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Video>::build().form_error(errors.to_string()));
    }

    db::video::insert(pg_pool.get_ref(), form.into_inner().into_model(user.id))
        .await
        .map(|video| {
            JsonResponse::build()
                .set_id(video.id)
                .set_item(video)
                .created("success")
        })
        .map_err(|err| JsonResponse::<models::Video>::build().internal_server_error(err))
}
