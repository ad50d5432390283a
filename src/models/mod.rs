pub mod quiz;
pub mod request;
pub mod score;

pub use quiz::{Quiz, QuizQuestion, Selection, MAX_OPTIONS, MAX_QUESTIONS, MIN_OPTIONS};
pub use request::{Language, Level, RequestContext, TaskKind};
pub use score::{ScoreReport, Verdict, NO_ANSWER};
