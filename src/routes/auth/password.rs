use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::password;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Change password.", skip(form, settings))]
#[post("/change_password")]
pub async fn change_password_handler(
    user: models::CurrentUser,
    form: web::Json<forms::user::ChangePasswordForm>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::CurrentUser>::build().form_error(errors.to_string()));
    }

    let record = db::user::fetch(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<models::CurrentUser>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::CurrentUser>::build().not_found("User not found"))?;

    let verified = password::verify(form.current_password.clone(), record.password_hash.clone())
        .await
        .map_err(|err| JsonResponse::<models::CurrentUser>::build().internal_server_error(err))?;
    if !verified {
        return Err(JsonResponse::<models::CurrentUser>::build()
            .bad_request("Current password is incorrect"));
    }

    let password_hash = password::hash(form.new_password.clone(), settings.auth.bcrypt_cost)
        .await
        .map_err(|err| JsonResponse::<models::CurrentUser>::build().internal_server_error(err))?;

    db::user::update_password(pg_pool.get_ref(), record.id, &password_hash)
        .await
        .map_err(|err| JsonResponse::<models::CurrentUser>::build().internal_server_error(err))?;

    Ok(JsonResponse::<models::CurrentUser>::build().ok("Password updated"))
}
