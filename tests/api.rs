use axum::{
    body::{Body, Bytes},
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

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

fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn captcha_solution_defaults_to_a_random_five_char_text() {
    let (status, body, _) = get("/utility/captcha").await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);
    assert_eq!(json["solution"].as_str().unwrap().chars().count(), 5);
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("https://api.mettwasser.xyz/image/gen_captcha?text="));
    assert!(url.contains("difficulty=5"));
}

#[tokio::test]
async fn captcha_solution_echoes_explicit_parameters() {
    let (status, body, _) = get("/utility/captcha?text=abc&difficulty=7&darkMode=true").await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);
    assert_eq!(json["solution"], "abc");
    assert_eq!(
        json["url"],
        "https://api.mettwasser.xyz/image/gen_captcha?text=abc&difficulty=7&darkMode=true"
    );
}

#[tokio::test]
async fn captcha_bounds_violations_are_rejected() {
    let (status, body, _) = get("/utility/captcha?difficulty=11").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["code"], 400);

    let (status, _, _) = get("/utility/captcha?text=toolong").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = get("/image/gen_captcha?text=abc&difficulty=0&darkMode=false").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn captcha_image_renders_a_png() {
    let (status, body, headers) =
        get("/image/gen_captcha?text=abc&difficulty=3&darkMode=false").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(&body[..4], b"\x89PNG");
}

#[tokio::test]
async fn color_preview_is_a_solid_png_of_the_requested_color() {
    let (status, body, headers) = get("/image/colorpreview?hex=ff0000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");

    let image = image::load_from_memory(&body).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (128, 128));
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(image.get_pixel(127, 127).0, [255, 0, 0]);
}

#[tokio::test]
async fn color_preview_honors_the_size_parameter() {
    let (status, body, _) = get("/image/colorpreview?hex=00ff00&size=2").await;

    assert_eq!(status, StatusCode::OK);
    let image = image::load_from_memory(&body).unwrap();
    assert_eq!(image.to_rgb8().dimensions(), (512, 512));
}

#[tokio::test]
async fn unparseable_hex_degrades_to_black() {
    let (status, body, _) = get("/image/colorpreview?hex=not-a-color").await;

    assert_eq!(status, StatusCode::OK);
    let image = image::load_from_memory(&body).unwrap().to_rgb8();
    assert_eq!(image.get_pixel(64, 64).0, [0, 0, 0]);
}

#[tokio::test]
async fn missing_query_parameters_render_the_json_error_body() {
    let (status, body, _) = get("/image/colorpreview").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = json(&body);
    assert_eq!(json["code"], 400);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn random_color_links_its_own_preview() {
    let (status, body, _) = get("/utility/randomcolor").await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);

    let hex = json["color_hex"].as_str().unwrap();
    assert!(hex.starts_with('#'));
    assert_eq!(hex.len(), 7);
    assert!(hex[1..].chars().all(|ch| ch.is_ascii_hexdigit()));

    let preview = json["preview_url"].as_str().unwrap();
    assert_eq!(
        preview,
        format!(
            "https://api.mettwasser.xyz/image/colorpreview?hex={}",
            &hex[1..]
        )
    );

    assert!(!json["color_name"].as_str().unwrap().is_empty());
}
