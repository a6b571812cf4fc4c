pub mod image;

pub use image::ImageCache;
