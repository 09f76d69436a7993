//! Percent milestones for a running phase

/// Tracks how much of a phase is done and which milestone was last reported
#[derive(Debug, Clone)]
pub struct Progress {
    total: u64,
    done: u64,
    step: u8,
    reported: Option<u8>,
}

impl Progress {
    /// Start a phase of `total` units that reports every `step` percent
    #[must_use]
    pub fn new(total: u64, step: u8) -> Self {
        Self {
            total,
            done: 0,
            step: step.clamp(1, 100),
            reported: None,
        }
    }

    /// Record `amount` more units
    ///
    /// Returns the newest milestone crossed, if any. Milestones are
    /// multiples of the step, and 100 is always a milestone.
    pub fn advance(&mut self, amount: u64) -> Option<u8> {
        if self.total == 0 {
            return None;
        }

        self.done = self.done.saturating_add(amount).min(self.total);
        let percent = self.percent();
        let milestone = if percent == 100 {
            100
        } else {
            percent - percent % self.step
        };

        if milestone == 0 || self.reported.is_some_and(|last| milestone <= last) {
            return None;
        }
        self.reported = Some(milestone);
        Some(milestone)
    }

    /// Close the phase, returning 100 unless it was already reported
    pub fn finish(&mut self) -> Option<u8> {
        if self.reported == Some(100) {
            return None;
        }
        self.done = self.total;
        self.reported = Some(100);
        Some(100)
    }

    /// Whole percent done, rounded down
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = u128::from(self.done) * 100 / u128::from(self.total);
        u8::try_from(percent).unwrap_or(100)
    }
}
