use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
};
use include_dir::{include_dir, Dir};

/// Static assets compiled into the binary.
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, extension)| extension) {
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub async fn asset(Path(path): Path<String>) -> impl IntoResponse {
    match ASSETS.get_file(&path) {
        Some(file) => (
            [(header::CONTENT_TYPE, content_type(&path))],
            file.contents(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tree_contains_the_page_assets() {
        assert!(ASSETS.get_file("scripts/index.js").is_some());
        assert!(ASSETS.get_file("styles/index.css").is_some());
    }

    #[test]
    fn content_types_follow_the_extension() {
        assert_eq!(content_type("styles/index.css"), "text/css");
        assert_eq!(content_type("scripts/index.js"), "application/javascript");
        assert_eq!(content_type("unknown.bin"), "application/octet-stream");
    }
}
