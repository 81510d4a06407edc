use crate::{error::ApiError, extract::Query, state::AppState};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use captcha_rs::CaptchaBuilder;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use utoipa::{IntoParams, ToSchema};

mod defaults {
    use rand::Rng;

    // No ambiguous glyphs (0/O, 1/l) in generated solutions.
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ\
    abcdefghijkmnpqrstuvwxyz\
    23456789";

    pub fn difficulty() -> u32 {
        5
    }

    pub fn text() -> String {
        let mut rng = rand::thread_rng();
        (0..5)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaptchaParams {
    #[serde(default = "defaults::difficulty")]
    #[param(minimum = 1, maximum = 10, default = 5)]
    pub difficulty: u32,

    /// Defaults to a random string of length 5.
    #[serde(default = "defaults::text")]
    #[param(required = false, min_length = 1, max_length = 5)]
    pub text: String,

    #[serde(default)]
    #[serde(rename = "darkMode")]
    #[param(default = false)]
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaptchaImageParams {
    #[param(minimum = 1, maximum = 10)]
    pub difficulty: u32,

    #[param(required = true, min_length = 1, max_length = 5)]
    pub text: String,

    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CaptchaSolution {
    pub solution: String,
    pub url: String,
}

fn check_bounds(difficulty: u32, text: &str) -> Result<(), ApiError> {
    if !(1..=10).contains(&difficulty) {
        return Err(ApiError::BadRequest(
            "The difficulty must be in between 1 and 10.".to_owned(),
        ));
    }

    if !(1..=5).contains(&text.len()) {
        return Err(ApiError::BadRequest(
            "Captcha text length has to be 5 or less.".to_owned(),
        ));
    }

    Ok(())
}

#[utoipa::path(
    get,
    path = "/utility/captcha",
    tag = "utility",
    params(CaptchaParams),
    responses(
        (status = 200, body = inline(CaptchaSolution)),
        (status = 400, description = "Difficulty or text out of bounds")
    )
)]
pub async fn captcha_solution(
    State(state): State<AppState>,
    Query(params): Query<CaptchaParams>,
) -> Result<Json<CaptchaSolution>, ApiError> {
    check_bounds(params.difficulty, &params.text)?;

    Ok(Json(CaptchaSolution {
        url: format!(
            "{}/image/gen_captcha?text={}&difficulty={}&darkMode={}",
            state.public_url(),
            &params.text,
            params.difficulty,
            params.dark_mode
        ),
        solution: params.text,
    }))
}

#[utoipa::path(
    get,
    path = "/image/gen_captcha",
    tag = "image",
    params(CaptchaImageParams),
    responses(
        (status = 200, content_type = "image/png", description = "The rendered captcha"),
        (status = 400, description = "Difficulty or text out of bounds")
    )
)]
pub async fn captcha_image(
    Query(params): Query<CaptchaImageParams>,
) -> Result<impl IntoResponse, ApiError> {
    check_bounds(params.difficulty, &params.text)?;

    // Rendering is CPU-bound; keep it off the async workers.
    let captcha = tokio::task::spawn_blocking(move || {
        CaptchaBuilder::new()
            .compression(30)
            .text(params.text)
            .complexity(params.difficulty)
            .dark_mode(params.dark_mode)
            .width(160)
            .height(40)
            .build()
    })
    .await
    .map_err(|_| ApiError::Internal("Something went wrong during captcha generation."))?;

    let mut buffer = Vec::new();
    captcha
        .image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_text_is_five_unambiguous_chars() {
        for _ in 0..50 {
            let text = defaults::text();
            assert_eq!(text.chars().count(), 5);
            assert!(text
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() && !"01lIOo".contains(ch)));
        }
    }

    #[test]
    fn bounds_reject_difficulty_and_length_violations() {
        assert!(check_bounds(0, "abc").is_err());
        assert!(check_bounds(11, "abc").is_err());
        assert!(check_bounds(5, "").is_err());
        assert!(check_bounds(5, "toolong").is_err());
        assert!(check_bounds(1, "ab").is_ok());
        assert!(check_bounds(10, "abcde").is_ok());
    }
}
