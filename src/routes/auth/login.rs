use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{password, token};
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

/// Unknown email, inactive account and wrong password all fail the same
/// way so the endpoint can't be used to probe for accounts.
#[tracing::instrument(name = "Login.", skip(form, settings))]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::user::LoginForm>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::user::Session>::build().form_error(errors.to_string()));
    }

    let user = db::user::fetch_active_by_email(pg_pool.get_ref(), &form.normalized_email())
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::user::Session>::build()
                .unauthorized("Invalid email or password")
        })?;

    let verified = password::verify(form.password.clone(), user.password_hash.clone())
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;
    if !verified {
        return Err(
            JsonResponse::<views::user::Session>::build().unauthorized("Invalid email or password")
        );
    }

    db::user::touch_last_login(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;

    let token = token::issue(&user, &settings.auth)
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_item(views::user::Session::new(token, user))
        .ok("success"))
}
