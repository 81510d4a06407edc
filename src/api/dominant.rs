use crate::{
    api::{color, decode_rgba},
    error::ApiError,
    extract::Query,
    state::AppState,
};
use axum::{extract::State, Json};
use image::Pixel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DominantColorParams {
    /// URL of the image to analyze.
    url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DominantColorEntry {
    color: String,
    color_name: String,
    pixels_counted: u32,
}

#[utoipa::path(
    get,
    path = "/image/dominant",
    tag = "image",
    params(DominantColorParams),
    responses(
        (status = 200, description = "Colors of the image, most dominant first", body = Vec<DominantColorEntry>),
        (status = 400, description = "The image could not be fetched")
    )
)]
pub async fn dominant_colors(
    State(state): State<AppState>,
    Query(params): Query<DominantColorParams>,
) -> Result<Json<Vec<DominantColorEntry>>, ApiError> {
    let bytes = state.fetch_image_bytes(&params.url).await?;
    let image = decode_rgba(bytes)?;

    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.to_rgb().0).or_insert(0) += 1;
    }

    let mut entries: Vec<DominantColorEntry> = counts
        .into_iter()
        .map(|(rgb, pixels_counted)| DominantColorEntry {
            color: color::hex_string(&rgb),
            color_name: color::nearest_name(&rgb).to_owned(),
            pixels_counted,
        })
        .collect();

    entries.sort_by(|a, b| b.pixels_counted.cmp(&a.pixels_counted));

    Ok(Json(entries))
}
