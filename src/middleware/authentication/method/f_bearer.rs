use crate::configuration::Settings;
use crate::middleware::authentication::get_header;
use crate::models;
use crate::services::token;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

fn try_extract_token(authorization: String) -> Result<String, String> {
    let mut authorization_parts = authorization.splitn(2, ' ');
    match authorization_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer scheme is missing".to_string()),
    }

    match authorization_parts.next() {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => {
            tracing::error!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token")]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(authorization) => authorization,
        None => return Ok(false),
    };

    let token = try_extract_token(authorization)?;
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| "Authentication is not configured".to_string())?;

    let claims = token::decode(&token, &settings.auth.jwt_secret).map_err(|err| {
        tracing::debug!("Token rejected: {}", err);
        "Invalid token".to_string()
    })?;

    let user: models::CurrentUser = claims.into();
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}
