use crate::{api::color::HexColor, error::ApiError, extract::Query};
use axum::{http::header, response::IntoResponse};
use image::ImageFormat;
use serde::Deserialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::io::Cursor;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr, ToSchema)]
#[repr(u8)]
#[schema(default = 0)]
pub enum PreviewSize {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl PreviewSize {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            PreviewSize::Small => (128, 128),
            PreviewSize::Medium => (256, 256),
            PreviewSize::Large => (512, 512),
        }
    }
}

mod defaults {
    use super::PreviewSize;

    pub fn size() -> PreviewSize {
        PreviewSize::Small
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PreviewColorParams {
    /// Hex color with or without a leading `#`. Unparseable input renders
    /// as black.
    hex: String,

    #[serde(default = "defaults::size")]
    #[param(inline)]
    size: PreviewSize,
}

#[utoipa::path(
    get,
    path = "/image/colorpreview",
    tag = "image",
    params(PreviewColorParams),
    responses(
        (status = 200, content_type = "image/png", description = "Solid-color preview square")
    )
)]
pub async fn preview_color(
    Query(params): Query<PreviewColorParams>,
) -> Result<impl IntoResponse, ApiError> {
    let image = HexColor::parse(&params.hex).into_preview(params.size);

    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], buffer))
}
