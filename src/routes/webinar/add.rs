use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add webinar.")]
#[post("")]
pub async fn add(
    user: models::CurrentUser,
    form: web::Json<forms::webinar::WebinarForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin, models::UserRole::Editor])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Webinar>::build().form_error(errors.to_string()));
    }

    db::webinar::insert(pg_pool.get_ref(), form.into_inner().into_model(user.id))
        .await
        .map(|webinar| {
            JsonResponse::build()
                .set_id(webinar.id)
                .set_item(webinar)
                .created("success")
        })
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
}
