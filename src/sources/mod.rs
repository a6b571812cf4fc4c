pub mod picsum;

pub use picsum::PicsumSource;

use crate::models::ImageCategory;

/// Strategy for resolving an upstream image URL from the requested
/// category and optional dimensions.
pub trait ImageSource: Send + Sync {
    fn resolve(
        &self,
        category: ImageCategory,
        width: Option<&str>,
        height: Option<&str>,
    ) -> String;
}
