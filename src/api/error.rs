use rocket::http::Status;
use serde_json::json;

use crate::images::FetchError;

#[derive(Debug)]
pub enum ApiError {
    FetchError(FetchError),
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        ApiError::FetchError(error)
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        match self {
            ApiError::FetchError(error) => {
                let body = json!({
                    "error": error.to_string(),
                })
                .to_string();

                rocket::Response::build()
                    .status(Status::InternalServerError)
                    .header(rocket::http::ContentType::JSON)
                    .sized_body(None, std::io::Cursor::new(body))
                    .ok()
            }
        }
    }
}
