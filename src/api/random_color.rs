use crate::{api::color, state::AppState};
use axum::{extract::State, Json};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RandomColorResponse {
    color_hex: String,
    preview_url: String,
    color_name: String,
}

impl RandomColorResponse {
    fn new_random(public_url: &str) -> Self {
        let rgb: [u8; 3] = rand::thread_rng().gen();
        let color_hex = color::hex_string(&rgb);

        Self {
            preview_url: format!(
                "{}/image/colorpreview?hex={}",
                public_url,
                &color_hex[1..]
            ),
            color_name: color::nearest_name(&rgb).to_owned(),
            color_hex,
        }
    }
}

#[utoipa::path(
    get,
    path = "/utility/randomcolor",
    tag = "utility",
    responses(
        (
            status = 200,
            body = inline(RandomColorResponse),
            example = json!({
                "color_hex": "#6384b8",
                "preview_url": "https://api.mettwasser.xyz/image/colorpreview?hex=6384b8",
                "color_name": "steelblue"
            })
        )
    )
)]
pub async fn random_color(State(state): State<AppState>) -> Json<RandomColorResponse> {
    Json(RandomColorResponse::new_random(state.public_url()))
}
