use crate::{
    api, assets,
    docs::ApiDoc,
    error::ApiError,
    state::AppState,
    templates::IndexTemplate,
    typewriter::{self, SinkClosed, TextSink, Typewriter},
};
use askama::Template;
use async_trait::async_trait;
use axum::{
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::convert::Infallible;
use tokio::sync::mpsc;
use tokio_stream::{wrappers::ReceiverStream, Stream, StreamExt};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub fn router(state: AppState) -> Router {
    let service = Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/intro/events", get(intro_events))
        .route("/assets/*path", get(assets::asset))
        .route("/image/round", get(api::round_image))
        .route("/image/colorpreview", get(api::preview_color))
        .route("/image/gen_captcha", get(api::captcha_image))
        .route("/image/dominant", get(api::dominant_colors))
        .route("/utility/captcha", get(api::captcha_solution))
        .route("/utility/randomcolor", get(api::random_color))
        .with_state(state);

    service
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn home() -> Result<Html<String>, ApiError> {
    Ok(Html(IndexTemplate.render()?))
}

#[derive(Serialize)]
struct RevealFrame<'a> {
    target: &'a str,
    text: &'a str,
}

struct SseSink {
    tx: mpsc::Sender<Event>,
}

#[async_trait]
impl TextSink for SseSink {
    async fn set_text(&self, target: &str, text: &str) -> Result<(), SinkClosed> {
        let event = Event::default()
            .event("reveal")
            .json_data(RevealFrame { target, text })
            .map_err(|_| SinkClosed)?;
        self.tx.send(event).await.map_err(|_| SinkClosed)
    }
}

/// Streams the landing page intro as server-sent events: reveal frames for
/// the primary heading, then for the secondary one, then a single `done`.
/// A dropped connection ends the run silently.
pub async fn intro_events() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::channel(32);

    tokio::spawn(async move {
        let animator = Typewriter::new(SseSink { tx: tx.clone() });
        if typewriter::intro().run(&animator).await.is_ok() {
            let _ = tx.send(Event::default().event("done").data("intro")).await;
        }
    });

    Sse::new(ReceiverStream::new(rx).map(Ok::<Event, Infallible>))
        .keep_alive(KeepAlive::default())
}
