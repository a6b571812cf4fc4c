pub mod image;

pub use image::ImageCategory;
