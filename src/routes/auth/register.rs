use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{password, token};
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Register user.", skip(form, settings))]
#[post("/register")]
pub async fn register_handler(
    user: models::CurrentUser,
    form: web::Json<forms::user::RegisterForm>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin])?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::user::Session>::build().form_error(errors.to_string()));
    }

    let existing = db::user::fetch_by_email(pg_pool.get_ref(), &form.normalized_email())
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;
    if existing.is_some() {
        return Err(JsonResponse::<views::user::Session>::build()
            .conflict("User already exists with this email"));
    }

    let password_hash = password::hash(form.password.clone(), settings.auth.bcrypt_cost)
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;

    let new_user = db::user::insert(pg_pool.get_ref(), form.into_inner().into_user(password_hash))
        .await
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;

    let token = token::issue(&new_user, &settings.auth)
        .map_err(|err| JsonResponse::<views::user::Session>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(new_user.id)
        .set_item(views::user::Session::new(token, new_user))
        .created("success"))
}
