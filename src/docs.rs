use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::captcha::captcha_solution,
        api::captcha::captcha_image,
        api::dominant::dominant_colors,
        api::preview::preview_color,
        api::random_color::random_color,
        api::round::round_image,
    ),
    components(schemas(api::preview::PreviewSize, api::dominant::DominantColorEntry)),
    tags(
        (name = "image", description = "Image generation and manipulation"),
        (name = "utility", description = "Small JSON utilities")
    ),
    servers((url = "https://api.mettwasser.xyz"))
)]
pub struct ApiDoc;
