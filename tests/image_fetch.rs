use axum::{
    body::{Body, Bytes},
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use image::{Rgba, RgbaImage};
use std::io::Cursor;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

mod common;
use common::test_app;

async fn get(uri: &str) -> (StatusCode, Bytes, axum::http::HeaderMap) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body, headers)
}

fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    buffer
}

async fn serve_png(image: &RgbaImage) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(encode_png(image), "image/png"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn round_auto_clears_corners_and_preserves_dimensions() {
    let source = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
    let server = serve_png(&source).await;

    let (status, body, headers) =
        get(&format!("/image/round?url={}/img.png&auto=true", server.uri())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");

    let rounded = image::load_from_memory(&body).unwrap().to_rgba8();
    assert_eq!(rounded.dimensions(), (8, 8));
    assert_eq!(rounded.get_pixel(0, 0).0[3], 0);
    assert_eq!(rounded.get_pixel(7, 0).0[3], 0);
    assert_eq!(rounded.get_pixel(0, 7).0[3], 0);
    assert_eq!(rounded.get_pixel(7, 7).0[3], 0);
    assert_eq!(rounded.get_pixel(4, 4).0[3], 255);
}

#[tokio::test]
async fn dominant_orders_colors_by_pixel_count() {
    let mut source = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    for x in 0..4 {
        source.put_pixel(x, 3, Rgba([0, 0, 255, 255]));
    }
    let server = serve_png(&source).await;

    let (status, body, _) =
        get(&format!("/image/dominant?url={}/img.png", server.uri())).await;

    assert_eq!(status, StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(entries[0]["color"], "#ff0000");
    assert_eq!(entries[0]["colorName"], "red");
    assert_eq!(entries[0]["pixelsCounted"], 12);

    assert_eq!(entries[1]["color"], "#0000ff");
    assert_eq!(entries[1]["colorName"], "blue");
    assert_eq!(entries[1]["pixelsCounted"], 4);
}

#[tokio::test]
async fn oversized_upstream_content_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0_u8; 4 * 1024 * 1024], "image/png"),
        )
        .mount(&server)
        .await;

    let (status, body, _) =
        get(&format!("/image/round?url={}/big.png", server.uri())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("cannot exceed"));
}
