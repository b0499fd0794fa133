mod engine;
mod options;
mod progress;

pub use engine::{Advance, AnswerOutcome, QuizSession};
pub use options::{OPTION_COUNT, build_options};
pub use progress::SessionProgress;
