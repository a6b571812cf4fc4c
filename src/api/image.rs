use std::io::Cursor;

use rocket::http::ContentType;
use rocket::{
    request::Request,
    response::{self, Responder, Response},
    State,
};

use crate::api::ApiError;
use crate::images::ImageFetcher;
use crate::models::ImageCategory;

// Responder for image bytes. The content type is fixed to JPEG no matter
// what the upstream actually returned.
pub struct ImageResponse {
    pub data: Vec<u8>,
}

impl<'r> Responder<'r, 'static> for ImageResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::JPEG)
            .sized_body(None, Cursor::new(self.data))
            .ok()
    }
}

#[derive(FromForm)]
pub struct ImageQuery {
    #[field(name = "type")]
    pub category: Option<String>,
}

impl ImageQuery {
    fn category(&self) -> ImageCategory {
        ImageCategory::from_query(self.category.as_deref())
    }
}

#[get("/?<query..>")]
pub async fn get_image(
    query: ImageQuery,
    fetcher: &State<ImageFetcher>,
) -> Result<ImageResponse, ApiError> {
    let data = fetcher.fetch_image(query.category(), None, None).await?;

    Ok(ImageResponse { data })
}

#[get("/<width>/<height>?<query..>")]
pub async fn get_image_sized(
    width: &str,
    height: &str,
    query: ImageQuery,
    fetcher: &State<ImageFetcher>,
) -> Result<ImageResponse, ApiError> {
    let data = fetcher
        .fetch_image(query.category(), Some(width), Some(height))
        .await?;

    Ok(ImageResponse { data })
}

/// Routes mounted under `/image`.
pub fn routes() -> Vec<rocket::Route> {
    routes![get_image, get_image_sized]
}
