//! Character-by-character text reveal for the landing page headings.
//!
//! The pieces are deliberately small: an [`AnimationRequest`] describes one
//! reveal, an [`Animator`] performs it and resolves once the last character is
//! shown, and a [`Sequencer`] drains an ordered queue of requests, never
//! starting request *i + 1* before request *i* has completed. [`Typewriter`]
//! is the production animator; it writes each grown prefix into a [`TextSink`]
//! after sleeping the per-character interval.

mod sequencer;

pub use sequencer::Sequencer;

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// The consumer of revealed text went away (the page navigated off, the
/// stream was dropped). Not an error surface, just a stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkClosed;

/// One text-reveal animation: which element, what to show, and how fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRequest {
    pub target: String,
    pub text: String,
    /// Milliseconds between successive character reveals. Must be positive.
    pub speed_ms: u64,
}

impl AnimationRequest {
    pub fn new(target: impl Into<String>, text: impl Into<String>, speed_ms: u64) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
            speed_ms,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Time from start until the final character is revealed.
    pub fn duration(&self) -> Duration {
        self.interval() * self.text.chars().count() as u32
    }
}

/// Surface that receives the progressively revealed text, keyed by the
/// target element selector.
#[async_trait]
pub trait TextSink: Send + Sync {
    async fn set_text(&self, target: &str, text: &str) -> Result<(), SinkClosed>;
}

/// Capability that runs a single [`AnimationRequest`] to completion. The
/// returned future resolves exactly once, after the last character has been
/// revealed.
#[async_trait]
pub trait Animator: Send + Sync {
    async fn animate(&self, request: &AnimationRequest) -> Result<(), SinkClosed>;
}

/// Interval-driven [`Animator`] writing into a [`TextSink`].
pub struct Typewriter<S> {
    sink: S,
}

impl<S: TextSink> Typewriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl<S: TextSink> Animator for Typewriter<S> {
    async fn animate(&self, request: &AnimationRequest) -> Result<(), SinkClosed> {
        // Clear whatever the target currently shows before the first tick.
        self.sink.set_text(&request.target, "").await?;

        let mut revealed = String::with_capacity(request.text.len());
        for ch in request.text.chars() {
            sleep(request.interval()).await;
            revealed.push(ch);
            self.sink.set_text(&request.target, &revealed).await?;
        }

        Ok(())
    }
}

/// The landing page intro: the primary heading types out first, the
/// secondary one only once the primary has finished.
pub fn intro() -> Sequencer {
    Sequencer::new()
        .then(AnimationRequest::new(
            "#main-heading",
            "api.mettwasser.xyz",
            100,
        ))
        .then(AnimationRequest::new(
            "#sub-heading",
            "Transparent and community-driven.",
            65,
        ))
}
