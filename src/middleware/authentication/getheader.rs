use actix_web::{dev::ServiceRequest, http::header::HeaderName};
use std::str::FromStr;

pub fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let value = match req.headers().get(HeaderName::from_static(header_name)) {
        Some(value) => value,
        None => return Ok(None),
    };

    value
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map(Some)
        .map_err(|_| format!("header {header_name} has wrong type"))
}
