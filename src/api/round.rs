use crate::{api::decode_rgba, error::ApiError, extract::Query, state::AppState};
use axum::{extract::State, http::header, response::IntoResponse};
use image::{ImageBuffer, ImageFormat, Rgba};
use serde::Deserialize;
use std::{cmp::min, io::Cursor};
use utoipa::IntoParams;

type RgbaBuffer = ImageBuffer<Rgba<u8>, Vec<u8>>;

mod defaults {
    pub fn radius() -> u32 {
        3
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoundImageParams {
    /// URL of the image whose corners should be rounded.
    pub url: String,

    /// Use the largest radius that fits instead of the explicit ones. On a
    /// square image this yields a perfect circle.
    #[serde(default)]
    pub auto: bool,

    /// Radius applied to every corner not overridden individually.
    #[serde(default = "defaults::radius")]
    corner_radius: u32,

    top_left: Option<u32>,
    top_right: Option<u32>,
    bottom_left: Option<u32>,
    bottom_right: Option<u32>,
}

/// Per-corner radii after defaulting, auto mode and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CornerRadii {
    top_left: u32,
    top_right: u32,
    bottom_left: u32,
    bottom_right: u32,
}

impl RoundImageParams {
    fn radii(&self, width: u32, height: u32) -> CornerRadii {
        let max = min(width, height) / 2;

        if self.auto {
            return CornerRadii {
                top_left: max,
                top_right: max,
                bottom_left: max,
                bottom_right: max,
            };
        }

        let clamp = |corner: Option<u32>| min(corner.unwrap_or(self.corner_radius), max);
        CornerRadii {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }
}

#[utoipa::path(
    get,
    path = "/image/round",
    tag = "image",
    params(RoundImageParams),
    responses(
        (status = 200, content_type = "image/png", description = "The rounded image"),
        (status = 400, description = "The image could not be fetched")
    )
)]
pub async fn round_image(
    State(state): State<AppState>,
    Query(params): Query<RoundImageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.fetch_image_bytes(&params.url).await?;
    let mut image = decode_rgba(bytes)?;

    let (width, height) = image.dimensions();
    round_corners(&mut image, params.radii(width, height));

    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], buffer))
}

fn round_corners(image: &mut RgbaBuffer, radii: CornerRadii) {
    let (width, height) = image.dimensions();

    carve_corner(image, radii.top_left, |x, y| (x - 1, y - 1));
    carve_corner(image, radii.top_right, |x, y| (width - x, y - 1));
    carve_corner(image, radii.bottom_left, |x, y| (x - 1, height - y));
    carve_corner(image, radii.bottom_right, |x, y| (width - x, height - y));
}

/// Zeroes the alpha channel outside one anti-aliased quarter circle.
///
/// Works in 1/16th subpixel steps along the circle midpoint walk; `map`
/// translates corner-local coordinates (1..=radius on both axes) into image
/// coordinates for the corner being carved.
fn carve_corner(image: &mut RgbaBuffer, radius: u32, map: impl Fn(u32, u32) -> (u32, u32)) {
    if radius == 0 {
        return;
    }
    let r0 = radius;
    let r = 16 * radius;

    let mut x = 0;
    let mut y = r - 1;
    let mut p: i32 = 2 - r as i32;

    let mut alpha: u16 = 0;
    let mut skip_draw = true;

    let draw = |image: &mut RgbaBuffer, alpha: u16, x: u32, y: u32| {
        debug_assert!((1..=256).contains(&alpha));
        let pixel_alpha = &mut image[map(r0 - x, r0 - y)].0[3];
        *pixel_alpha = ((alpha * *pixel_alpha as u16 + 128) / 256) as u8;
    };

    'walk: loop {
        // Clear the rows and columns strictly outside the circle at the
        // current walk position.
        {
            let i = x / 16;
            for j in y / 16 + 1..r0 {
                image[map(r0 - i, r0 - j)].0[3] = 0;
            }
        }
        {
            let j = x / 16;
            for i in y / 16 + 1..r0 {
                image[map(r0 - i, r0 - j)].0[3] = 0;
            }
        }

        if !skip_draw {
            draw(image, alpha, x / 16 - 1, y / 16);
            draw(image, alpha, y / 16, x / 16 - 1);
            alpha = 0;
        }

        for _ in 0..16 {
            skip_draw = false;

            if x >= y {
                break 'walk;
            }

            alpha += y as u16 % 16 + 1;
            if p < 0 {
                x += 1;
                p += (2 * x + 2) as i32;
            } else {
                // Crossing into the next pixel row; emit the accumulated
                // coverage for the pixel being left.
                if y % 16 == 0 {
                    draw(image, alpha, x / 16, y / 16);
                    draw(image, alpha, y / 16, x / 16);
                    skip_draw = true;
                    alpha = (x + 1) as u16 % 16 * 16;
                }

                x += 1;
                p -= (2 * (y - x) + 2) as i32;
                y -= 1;
            }
        }
    }

    // The diagonal pixel where both walks meet.
    if x / 16 == y / 16 {
        if x == y {
            alpha += y as u16 % 16 + 1;
        }
        let s = y as u16 % 16 + 1;
        let alpha = 2 * alpha - s * s;
        draw(image, alpha, x / 16, y / 16);
    }

    // Remaining square of content fully outside the circle.
    let range = y / 16 + 1..r0;
    for i in range.clone() {
        for j in range.clone() {
            image[map(r0 - i, r0 - j)].0[3] = 0;
        }
    }
}
