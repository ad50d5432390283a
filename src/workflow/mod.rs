pub mod quiz_view;
pub mod study_flow;

pub use quiz_view::{selections_from_labels, QuizGeneration, QuizSlot, QUIZ_READY_STATUS};
pub use study_flow::{evaluate_quiz, StudyTutor};
