/// Point-in-time snapshot of a run, cheap to hand to a progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub questions: usize,
    pub answered: usize,
    pub score: u32,
    pub finished: bool,
}

impl SessionProgress {
    /// Questions not yet answered, the current one included.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.saturating_sub(self.answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_and_saturates() {
        let mut progress = SessionProgress {
            questions: 19,
            answered: 0,
            score: 0,
            finished: false,
        };
        assert_eq!(progress.remaining(), 19);

        progress.answered = 19;
        assert_eq!(progress.remaining(), 0);

        // Over-reporting never underflows.
        progress.answered = 20;
        assert_eq!(progress.remaining(), 0);
    }
}
