#[macro_use]
extern crate rocket;

pub mod api;
pub mod cache;
pub mod config;
pub mod images;
pub mod models;
pub mod sources;
