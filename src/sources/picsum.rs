use crate::models::ImageCategory;
use crate::sources::ImageSource;

pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";

/// Image source backed by the picsum.photos service. Sized requests map to
/// `{base}/{width}/{height}`, otherwise a fixed 500x500 default is used;
/// nature-flavored requests carry a `?nature` query suffix.
pub struct PicsumSource {
    base_url: String,
}

impl PicsumSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for PicsumSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ImageSource for PicsumSource {
    fn resolve(
        &self,
        category: ImageCategory,
        width: Option<&str>,
        height: Option<&str>,
    ) -> String {
        // Dimensions are passed through verbatim, no numeric validation.
        let path = match (width, height) {
            (Some(w), Some(h)) => format!("{}/{}", w, h),
            _ => "500/500".to_string(),
        };

        match category {
            ImageCategory::Nature => format!("{}/{}?nature", self.base_url, path),
            ImageCategory::Random => format!("{}/{}", self.base_url, path),
        }
    }
}
