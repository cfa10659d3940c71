use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::Serialize;

#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

// Failures go out flat so clients don't have to unwrap an envelope.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

#[derive(Default)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    message: String,
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn set_msg<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = msg.into();
        self
    }

    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn respond(self, code: StatusCode) -> HttpResponse {
        HttpResponse::build(code).json(JsonResponse {
            status: "OK".to_string(),
            message: self.message,
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    pub(crate) fn ok<S: Into<String>>(self, msg: S) -> HttpResponse {
        self.set_msg(msg).respond(StatusCode::OK)
    }

    pub(crate) fn created<S: Into<String>>(self, msg: S) -> HttpResponse {
        self.set_msg(msg).respond(StatusCode::CREATED)
    }

    fn fail<S: Into<String>>(self, code: StatusCode, msg: S) -> actix_web::Error {
        let msg = msg.into();
        let response = HttpResponse::build(code).json(ErrorBody { error: msg.clone() });
        InternalError::from_response(msg, response).into()
    }

    pub(crate) fn bad_request<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn form_error<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn unauthorized<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::UNAUTHORIZED, msg)
    }

    pub(crate) fn forbidden<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::FORBIDDEN, msg)
    }

    pub(crate) fn not_found<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::NOT_FOUND, msg)
    }

    pub(crate) fn conflict<S: Into<String>>(self, msg: S) -> actix_web::Error {
        self.fail(StatusCode::CONFLICT, msg)
    }

    pub(crate) fn internal_server_error<S: Into<String>>(self, msg: S) -> actix_web::Error {
        let msg = msg.into();
        let msg = if msg.trim().is_empty() {
            "Internal server error".to_string()
        } else {
            msg
        };
        self.fail(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}
