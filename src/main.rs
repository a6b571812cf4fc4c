#[macro_use]
extern crate rocket;

use std::sync::Arc;
use std::time::Duration;

use dotenv::dotenv;
use env_logger::Env;
use log::{debug, info};
use picrelay::api;
use picrelay::cache::ImageCache;
use picrelay::config::AppConfig;
use picrelay::images::ImageFetcher;
use picrelay::sources::PicsumSource;
use rocket::{
    figment::{
        providers::{Format, Toml},
        Figment, Profile,
    },
    tokio, Config,
};

#[launch]
async fn rocket() -> _ {
    dotenv().ok();

    // Load config
    let figment = Figment::from(Config::default())
        .merge(Toml::file("App.toml").nested())
        .select(Profile::from_env_or("APP_PROFILE", "default"));

    // App config
    let config = figment.extract::<AppConfig>().unwrap();

    // Initialize logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    info!("Configuration loaded successfully");

    // Create image cache
    let cache = Arc::new(ImageCache::new(Duration::from_secs(config.cache_ttl)));
    info!(
        "Image cache initialized ({}s TTL, {}s sweep interval)",
        config.cache_ttl, config.cache_sweep_interval
    );

    // Background sweep for expired entries
    let sweep_cache = cache.clone();
    let sweep_period = Duration::from_secs(config.cache_sweep_interval);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_period);
        loop {
            ticker.tick().await;
            let purged = sweep_cache.purge_expired();
            if purged > 0 {
                debug!("Cache sweep purged {} expired entries", purged);
            }
        }
    });

    // Create image fetcher
    let fetcher = ImageFetcher::new(
        Box::new(PicsumSource::new(config.image_base_url.clone())),
        cache,
        config.timeout,
    );
    info!("Image fetcher initialized for {}", config.image_base_url);

    info!(
        "Starting picrelay server on {}:{}",
        config.address, config.port
    );

    // Build Rocket instance
    rocket::custom(figment)
        .manage(fetcher)
        .manage(config)
        .mount("/image", api::image::routes())
}
