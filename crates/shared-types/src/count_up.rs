/// Interval between animation frames.
pub const DEFAULT_TICK_MS: u64 = 15;

/// Total animation time for a stat card.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Pause before the first frame so the card is on screen when it starts.
pub const DEFAULT_START_DELAY_MS: u64 = 300;

/// Count-up animation from 0 to a target in fixed increments.
///
/// The step is `ceil(target / frames)` where `frames = duration / tick`, so
/// the target is reached within the requested duration. Each tick clamps to
/// the target: the displayed value never decreases and never overshoots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    increment: u64,
    current: u64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u64, tick_ms: u64) -> Self {
        let frames = (duration_ms / tick_ms.max(1)).max(1);
        Self {
            target,
            increment: target.div_ceil(frames),
            current: 0,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one frame and return the value to display.
    pub fn tick(&mut self) -> u64 {
        if !self.is_done() {
            self.current = self.current.saturating_add(self.increment).min(self.target);
        }
        self.current
    }

    /// Frames left until the target is shown.
    pub fn remaining_ticks(&self) -> u64 {
        if self.increment == 0 {
            return 0;
        }
        (self.target - self.current).div_ceil(self.increment)
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_done() {
            None
        } else {
            Some(self.tick())
        }
    }
}
