use actix_web::{get, HttpResponse};

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}
