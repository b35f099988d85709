use crate::playback::scheduler::TraceReplayScheduler;

/// Owner of at most one active playback.
///
/// Installing a new scheduler cancels the previous one first, so two playbacks never
/// advance through the same slot.
#[derive(Debug, Default)]
pub struct PlaybackSlot {
    active: Option<TraceReplayScheduler>,
    generation: u64,
}

impl PlaybackSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the current scheduler (if any), install `next` and return the cancelled one.
    pub fn begin(&mut self, next: TraceReplayScheduler) -> Option<TraceReplayScheduler> {
        let mut previous = self.active.replace(next);
        if let Some(prev) = previous.as_mut() {
            prev.cancel();
            tracing::debug!(generation = self.generation, state = %prev.state(), "playback replaced");
        }
        self.generation += 1;
        previous
    }

    /// Active scheduler.
    pub fn current(&self) -> Option<&TraceReplayScheduler> {
        self.active.as_ref()
    }

    /// Active scheduler, for driving.
    pub fn current_mut(&mut self) -> Option<&mut TraceReplayScheduler> {
        self.active.as_mut()
    }

    /// Request cancellation of the active scheduler.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.cancel();
        }
    }

    /// Remove and return the active scheduler.
    pub fn take(&mut self) -> Option<TraceReplayScheduler> {
        self.active.take()
    }

    /// Number of schedulers installed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/slot.rs"]
mod tests;
