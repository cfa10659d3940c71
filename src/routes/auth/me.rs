use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get current user.")]
#[get("/me")]
pub async fn me_handler(
    user: models::CurrentUser,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::user::fetch(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::user::Profile>::build().internal_server_error(err))
        .and_then(|user| match user {
            Some(user) => Ok(JsonResponse::build()
                .set_item(views::user::Profile::from(user))
                .ok("OK")),
            None => Err(JsonResponse::<views::user::Profile>::build().not_found("User not found")),
        })
}
