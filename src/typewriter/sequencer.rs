use super::{AnimationRequest, Animator, SinkClosed};

/// Ordered queue of [`AnimationRequest`]s, dispatched strictly one at a time.
///
/// The completion signal is the animator's resolved future, so the next
/// request cannot start before the previous one has revealed its final
/// character. There is no cancellation and no replay; a closed sink simply
/// ends the run.
#[derive(Debug, Default)]
pub struct Sequencer {
    queue: Vec<AnimationRequest>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request to the end of the queue.
    pub fn then(mut self, request: AnimationRequest) -> Self {
        self.queue.push(request);
        self
    }

    pub fn requests(&self) -> &[AnimationRequest] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Runs the queue front to back, awaiting each animation before
    /// dispatching the next.
    pub async fn run<A: Animator>(&self, animator: &A) -> Result<(), SinkClosed> {
        for request in &self.queue {
            animator.animate(request).await?;
        }
        Ok(())
    }
}
