use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;

// Public, the storefront submits quotes without an account.
#[tracing::instrument(name = "Submit quote.")]
#[post("")]
pub async fn add(
    form: web::Json<forms::quote::QuoteForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(msg) = form.ensure_submittable() {
        return Err(JsonResponse::<models::Quote>::build().bad_request(msg));
    }

    db::quote::insert(pg_pool.get_ref(), form.into_inner().into_model())
        .await
        .map(|quote| JsonResponse::build().set_item(quote).created("success"))
        .map_err(|err| JsonResponse::<models::Quote>::build().internal_server_error(err))
}
