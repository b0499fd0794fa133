use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use rankquiz_core::catalog::check_quizable;
use rankquiz_core::model::{Branch, CompletedRun, RankEntry, RunId};

use super::options::build_options;
use super::progress::SessionProgress;
use crate::error::SessionError;

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The label that would have been (or was) the right answer.
    pub correct_label: String,
}

/// Result of advancing past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next question.
    Next,
    /// That was the last question; the session is now terminal.
    Finished(CompletedRun),
}

/// In-memory state of one quiz run.
///
/// Steps through a shuffled permutation of the branch catalog. Each question
/// is answered once (repeat answers are no-ops), answering pauses the clock,
/// advancing resumes it, and paused time never counts toward the run.
pub struct QuizSession {
    run_id: RunId,
    branch: Branch,
    questions: Vec<RankEntry>,
    current: usize,
    correct_count: u32,
    total_answered: u32,
    options: Vec<String>,
    current_answer: Option<AnswerOutcome>,
    started_at: DateTime<Utc>,
    accumulated_pause: Duration,
    paused_at: Option<DateTime<Utc>>,
    finished: Option<CompletedRun>,
}

impl QuizSession {
    /// Start a new run over the given branch catalog.
    ///
    /// The question order is a uniformly random Fisher–Yates permutation of
    /// `entries`; time accrual begins at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` when the catalog is empty or has too
    /// few distinct labels to build four options.
    pub fn start<R: Rng + ?Sized>(
        branch: Branch,
        entries: &[RankEntry],
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        check_quizable(branch, entries)?;

        let mut questions = entries.to_vec();
        questions.shuffle(rng);

        let options = build_options(rng, &questions[0].rank, &questions)?;

        Ok(Self {
            run_id: RunId::new(rng.random()),
            branch,
            questions,
            current: 0,
            correct_count: 0,
            total_answered: 0,
            options,
            current_answer: None,
            started_at,
            accumulated_pause: Duration::zero(),
            paused_at: None,
            finished: None,
        })
    }

    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    #[must_use]
    pub fn branch(&self) -> Branch {
        self.branch
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The entry currently being asked about, `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&RankEntry> {
        if self.finished.is_some() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Option labels for the current question.
    ///
    /// Generated once per question and stable until the next [`advance`];
    /// re-rendering never reshuffles them.
    ///
    /// [`advance`]: QuizSession::advance
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The shuffled question order for this run.
    #[must_use]
    pub fn questions(&self) -> &[RankEntry] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    #[must_use]
    pub fn finished_run(&self) -> Option<&CompletedRun> {
        self.finished.as_ref()
    }

    /// Snapshot of the tallies for progress display.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            questions: self.questions.len(),
            answered: self.total_answered as usize,
            score: self.correct_count,
            finished: self.is_finished(),
        }
    }

    /// Milliseconds of quiz time accrued at `now`.
    ///
    /// Purely observational: a periodic UI tick reads this without touching
    /// any other state. While paused the value is frozen at the pause point.
    #[must_use]
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        let end = self.paused_at.unwrap_or(now);
        let accrued = end - self.started_at - self.accumulated_pause;
        u64::try_from(accrued.num_milliseconds().max(0)).unwrap_or(0)
    }

    /// Suspend time accrual. A no-op when already paused or finished.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused_at.is_none() && self.finished.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resume time accrual, crediting the pause duration. A no-op when not
    /// paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if let Some(paused_at) = self.paused_at.take() {
            self.accumulated_pause = self.accumulated_pause + (now - paused_at);
        }
    }

    /// Answer the current question with the selected option label.
    ///
    /// The first call per question records the outcome, updates the tallies
    /// and pauses the clock; calls before the next [`advance`] are no-ops
    /// that return the recorded outcome again.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session already finished.
    ///
    /// [`advance`]: QuizSession::advance
    pub fn answer(
        &mut self,
        selected_label: &str,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        if self.finished.is_some() {
            return Err(SessionError::Completed);
        }
        if let Some(outcome) = &self.current_answer {
            return Ok(outcome.clone());
        }

        let correct_label = self.questions[self.current].rank.clone();
        let correct = selected_label == correct_label;
        if correct {
            self.correct_count += 1;
        }
        self.total_answered += 1;
        self.pause(now);

        let outcome = AnswerOutcome {
            correct,
            correct_label,
        };
        self.current_answer = Some(outcome.clone());
        Ok(outcome)
    }

    /// Move past an answered question.
    ///
    /// On the last question this finishes the run, freezing the elapsed time
    /// at the moment the answer paused the clock. Otherwise the clock resumes
    /// (crediting the pause), the answer lock clears, and a fresh option set
    /// is generated for the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` on a finished session and
    /// `SessionError::NotAnswered` when the current question has no answer
    /// yet.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Advance, SessionError> {
        if self.finished.is_some() {
            return Err(SessionError::Completed);
        }
        if self.current_answer.is_none() {
            return Err(SessionError::NotAnswered);
        }

        if self.current + 1 == self.questions.len() {
            let run = CompletedRun::new(
                self.run_id,
                self.branch,
                self.correct_count,
                self.total_answered,
                self.elapsed_ms(now),
            );
            self.finished = Some(run.clone());
            return Ok(Advance::Finished(run));
        }

        self.resume(now);
        self.current += 1;
        self.current_answer = None;
        self.options = build_options(rng, &self.questions[self.current].rank, &self.questions)?;
        Ok(Advance::Next)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("run_id", &self.run_id)
            .field("branch", &self.branch)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("correct_count", &self.correct_count)
            .field("total_answered", &self.total_answered)
            .field("paused", &self.paused_at.is_some())
            .field("finished", &self.finished.is_some())
            .finish_non_exhaustive()
    }
}
