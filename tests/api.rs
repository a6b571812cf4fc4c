use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use picrelay::api;
use picrelay::cache::ImageCache;
use picrelay::images::ImageFetcher;
use picrelay::sources::PicsumSource;
use rocket::http::Status;
use rocket::local::asynchronous::Client;

fn test_rocket(base_url: &str, cache: Arc<ImageCache>) -> rocket::Rocket<rocket::Build> {
    let fetcher = ImageFetcher::new(
        Box::new(PicsumSource::new(base_url)),
        cache,
        5,
    );

    rocket::build()
        .manage(fetcher)
        .mount("/image", api::image::routes())
}

#[rocket::async_test]
async fn sized_nature_image_is_fetched_once_and_cached() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/300/400")
        .match_query(Matcher::Any)
        .with_body("cached image data")
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(ImageCache::new(Duration::from_secs(300)));
    let client = Client::tracked(test_rocket(&server.url(), cache.clone()))
        .await
        .unwrap();

    let response = client.get("/image/300/400?type=nature").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Content-Type"), Some("image/jpeg"));
    assert_eq!(response.into_string().await.unwrap(), "cached image data");

    // Identical second request is served from cache, no second upstream call.
    let response = client.get("/image/300/400?type=nature").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "cached image data");

    upstream.assert_async().await;
    assert_eq!(cache.len(), 1);
}

#[rocket::async_test]
async fn default_size_image_without_type_parameter() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/500/500")
        .with_body("default image")
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(ImageCache::new(Duration::from_secs(300)));
    let client = Client::tracked(test_rocket(&server.url(), cache))
        .await
        .unwrap();

    let response = client.get("/image").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Content-Type"), Some("image/jpeg"));
    assert_eq!(response.into_string().await.unwrap(), "default image");

    upstream.assert_async().await;
}

#[rocket::async_test]
async fn unknown_type_parameter_falls_back_to_random() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/500/500")
        .with_body("random image")
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(ImageCache::new(Duration::from_secs(300)));
    let client = Client::tracked(test_rocket(&server.url(), cache))
        .await
        .unwrap();

    let response = client.get("/image?type=cats").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "random image");

    upstream.assert_async().await;
}

#[rocket::async_test]
async fn expired_entry_triggers_a_new_upstream_fetch() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/500/500")
        .with_body("fresh bytes")
        .expect(1)
        .create_async()
        .await;

    // Zero TTL: the entry stored by a previous fetch is already stale.
    let cache = Arc::new(ImageCache::new(Duration::from_secs(0)));
    cache.store_image(&format!("{}/500/500", server.url()), b"stale bytes".to_vec());
    std::thread::sleep(Duration::from_millis(5));

    let client = Client::tracked(test_rocket(&server.url(), cache))
        .await
        .unwrap();

    let response = client.get("/image").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "fresh bytes");

    upstream.assert_async().await;
}

#[rocket::async_test]
async fn transport_failure_yields_500_json_and_no_cache_entry() {
    // Nothing listens here; the fetch fails at connect time.
    let cache = Arc::new(ImageCache::new(Duration::from_secs(300)));
    let client = Client::tracked(test_rocket("http://127.0.0.1:1", cache.clone()))
        .await
        .unwrap();

    let response = client.get("/image/300/400").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);

    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert!(body["error"].is_string());

    assert!(cache.is_empty());
}
