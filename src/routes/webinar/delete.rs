use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete webinar.")]
#[delete("/{id}")]
pub async fn item(
    user: models::CurrentUser,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    user.require_role(&[models::UserRole::Admin])?;

    let (id,) = path.into_inner();
    db::webinar::delete(pg_pool.get_ref(), id)
        .await
        .map(|_| JsonResponse::<models::Webinar>::build().ok("Deleted"))
        .map_err(|err| JsonResponse::<models::Webinar>::build().internal_server_error(err))
}
