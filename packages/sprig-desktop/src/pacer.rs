use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget.
#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    /// `frame_rate` of zero is treated as one frame per second.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / frame_rate.max(1),
            last_frame: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time still owed to the current frame at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => self
                .budget
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Marks a frame boundary at `now` without sleeping.
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.mark(Instant::now());
    }
}
