use std::sync::Arc;

use crate::{
    animation::counter::CounterSample,
    foundation::core::{Point, TimeMs},
    foundation::error::{RouteError, RouteResult},
    playback::plan::PlaybackPlan,
    search::trace::TraceEvent,
};

/// Lifecycle of a [`TraceReplayScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Nothing started yet.
    Idle,
    /// Algorithm steps are being emitted.
    StepPlaying,
    /// Motion frames and counter samples are being emitted.
    MotionPlaying,
    /// Terminal: finished or cancelled.
    Done,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::StepPlaying => "step-playing",
            Self::MotionPlaying => "motion-playing",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// One emitted unit of playback, stamped with its virtual time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "stream", rename_all = "snake_case")]
pub enum PlaybackFrame {
    /// An algorithm step.
    Step {
        /// Due time.
        at: TimeMs,
        /// Position in the trace.
        index: usize,
        /// The step itself.
        event: TraceEvent,
    },
    /// A traveller position in canvas space.
    Motion {
        /// Due time.
        at: TimeMs,
        /// Position in the motion stream.
        index: usize,
        /// Interpolated position.
        position: Point,
    },
    /// A progress counter reading.
    Counter {
        /// Due time.
        at: TimeMs,
        /// Position in the counter stream.
        index: usize,
        /// The reading.
        sample: CounterSample,
    },
}

impl PlaybackFrame {
    /// Virtual time at which the frame is due.
    pub fn at(&self) -> TimeMs {
        match self {
            Self::Step { at, .. } | Self::Motion { at, .. } | Self::Counter { at, .. } => *at,
        }
    }
}

/// Replays a [`PlaybackPlan`] one frame per tick on a virtual millisecond clock.
///
/// Driven externally: every [`advance`](Self::advance) emits the earliest due frame of the
/// active streams and moves the clock to its due time. Steps come first, one per step
/// interval. Motion and counter start together once the step stream has played and
/// interleave by due time (motion first on ties).
#[derive(Clone, Debug)]
pub struct TraceReplayScheduler {
    plan: Arc<PlaybackPlan>,
    state: PlaybackState,
    clock: TimeMs,
    next_step: usize,
    motion_origin: TimeMs,
    next_motion: usize,
    next_counter: usize,
    cancel_requested: bool,
}

impl TraceReplayScheduler {
    /// Wrap a plan; the scheduler starts [`PlaybackState::Idle`].
    pub fn new(plan: impl Into<Arc<PlaybackPlan>>) -> Self {
        Self {
            plan: plan.into(),
            state: PlaybackState::Idle,
            clock: TimeMs::ZERO,
            next_step: 0,
            motion_origin: TimeMs::ZERO,
            next_motion: 0,
            next_counter: 0,
            cancel_requested: false,
        }
    }

    /// Plan being replayed.
    pub fn plan(&self) -> &PlaybackPlan {
        &self.plan
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Due time of the most recently emitted frame.
    pub fn clock(&self) -> TimeMs {
        self.clock
    }

    /// `true` while steps or motion are playing.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::StepPlaying | PlaybackState::MotionPlaying
        )
    }

    /// `true` once [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_requested
    }

    /// `true` when every step has been emitted.
    pub fn steps_finished(&self) -> bool {
        self.next_step >= self.plan.steps().len()
    }

    /// `Idle → StepPlaying`. Requires a non-empty trace.
    pub fn start_steps(&mut self) -> RouteResult<()> {
        self.ensure_state(PlaybackState::Idle, "start steps")?;
        if self.plan.steps().is_empty() {
            return Err(RouteError::playback("cannot start steps: trace is empty"));
        }
        self.transition(PlaybackState::StepPlaying);
        Ok(())
    }

    /// `StepPlaying → MotionPlaying`. Requires a played step stream and a non-empty path.
    pub fn start_motion(&mut self) -> RouteResult<()> {
        self.ensure_state(PlaybackState::StepPlaying, "start motion")?;
        if !self.steps_finished() {
            return Err(RouteError::playback(format!(
                "cannot start motion: {} of {} steps played",
                self.next_step,
                self.plan.steps().len()
            )));
        }
        if self.plan.path().is_empty() {
            return Err(RouteError::playback("cannot start motion: no route to animate"));
        }

        let steps_end = TimeMs(self.plan.steps_duration_ms());
        self.motion_origin = self.clock.max(steps_end);
        self.transition(PlaybackState::MotionPlaying);
        Ok(())
    }

    /// Emit the next due frame, if any.
    ///
    /// A pending cancellation is honored here: nothing is emitted and the scheduler moves
    /// to [`PlaybackState::Done`]. Returns `None` in `Idle`, in `Done`, and while a played
    /// step stream waits for [`start_motion`](Self::start_motion).
    pub fn advance(&mut self) -> Option<PlaybackFrame> {
        if self.cancel_requested && self.state != PlaybackState::Done {
            tracing::debug!(at = %self.clock, "playback cancelled");
            self.transition(PlaybackState::Done);
            return None;
        }

        match self.state {
            PlaybackState::Idle | PlaybackState::Done => None,
            PlaybackState::StepPlaying => self.advance_step(),
            PlaybackState::MotionPlaying => self.advance_motion(),
        }
    }

    /// Request cooperative cancellation.
    ///
    /// An idle scheduler is finished at once; a playing one stops at the next
    /// [`advance`](Self::advance).
    pub fn cancel(&mut self) {
        if self.state == PlaybackState::Done {
            return;
        }
        self.cancel_requested = true;
        if self.state == PlaybackState::Idle {
            self.transition(PlaybackState::Done);
        }
    }

    /// Rewind a non-terminal scheduler to `Idle`.
    pub fn reset(&mut self) -> RouteResult<()> {
        if self.state == PlaybackState::Done || self.cancel_requested {
            return Err(RouteError::playback(format!(
                "cannot reset a {} scheduler",
                if self.cancel_requested {
                    "cancelled"
                } else {
                    "finished"
                }
            )));
        }
        self.clock = TimeMs::ZERO;
        self.next_step = 0;
        self.motion_origin = TimeMs::ZERO;
        self.next_motion = 0;
        self.next_counter = 0;
        self.transition(PlaybackState::Idle);
        Ok(())
    }

    /// Play everything that is left, starting and chaining phases as needed.
    ///
    /// An unreachable plan ends after its step stream.
    pub fn run_to_end(&mut self) -> RouteResult<Vec<PlaybackFrame>> {
        let mut frames = Vec::new();
        if self.state == PlaybackState::Idle {
            self.start_steps()?;
        }
        while let Some(frame) = self.advance() {
            frames.push(frame);
        }
        if self.state == PlaybackState::StepPlaying {
            self.start_motion()?;
            while let Some(frame) = self.advance() {
                frames.push(frame);
            }
        }
        Ok(frames)
    }

    fn advance_step(&mut self) -> Option<PlaybackFrame> {
        let index = self.next_step;
        let event = self.plan.steps().get(index)?.clone();
        let at = self.plan.step_due(index);
        self.clock = at;
        self.next_step += 1;

        if self.steps_finished() && self.plan.path().is_empty() {
            self.transition(PlaybackState::Done);
        }
        Some(PlaybackFrame::Step { at, index, event })
    }

    fn advance_motion(&mut self) -> Option<PlaybackFrame> {
        let motion = self.plan.motion();
        let counter = self.plan.counter();

        let motion_due = (self.next_motion < motion.len())
            .then(|| motion.due(self.motion_origin, self.next_motion));
        let counter_due = counter.due(self.motion_origin, self.next_counter);

        let frame = match (motion_due, counter_due) {
            (Some(m), Some(c)) if c < m => self.emit_counter(c),
            (Some(m), _) => self.emit_motion(m),
            (None, Some(c)) => self.emit_counter(c),
            (None, None) => {
                self.transition(PlaybackState::Done);
                return None;
            }
        };

        if self.next_motion >= self.plan.motion().len()
            && self.next_counter >= self.plan.counter().len()
        {
            self.transition(PlaybackState::Done);
        }
        Some(frame)
    }

    fn emit_motion(&mut self, at: TimeMs) -> PlaybackFrame {
        let index = self.next_motion;
        let position = self.plan.motion().frames()[index];
        self.next_motion += 1;
        self.clock = at;
        PlaybackFrame::Motion {
            at,
            index,
            position,
        }
    }

    fn emit_counter(&mut self, at: TimeMs) -> PlaybackFrame {
        let index = self.next_counter;
        let sample = self.plan.counter().samples()[index];
        self.next_counter += 1;
        self.clock = at;
        PlaybackFrame::Counter { at, index, sample }
    }

    fn ensure_state(&self, expected: PlaybackState, action: &str) -> RouteResult<()> {
        if self.cancel_requested {
            return Err(RouteError::playback(format!(
                "cannot {action}: playback was cancelled"
            )));
        }
        if self.state != expected {
            return Err(RouteError::playback(format!(
                "cannot {action} while {} (expected {expected})",
                self.state
            )));
        }
        Ok(())
    }

    fn transition(&mut self, next: PlaybackState) {
        tracing::debug!(from = %self.state, to = %next, at = %self.clock, "playback state");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
