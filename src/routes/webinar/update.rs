use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update webinar.")]
#[put("/{id}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(i32,)>,
    form: web::Json<forms::webinar::WebinarPatch>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Webinar>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    let mut webinar = db::webinar::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Webinar>::build().not_found("Webinar not found"))?;

    form.into_inner().apply(&mut webinar);

    db::webinar::update(pg_pool.get_ref(), webinar)
        .await
        .map(|webinar| JsonResponse::build().set_item(webinar).ok("success"))
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
}
