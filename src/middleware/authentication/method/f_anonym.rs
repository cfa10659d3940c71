use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "authenticate as anonym")]
pub fn anonym(_req: &mut ServiceRequest) -> Result<bool, String> {
    // Nothing goes into the request extensions; handlers that extract
    // CurrentUser refuse the call on their own.
    Ok(true)
}
