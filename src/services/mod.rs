pub mod quiz_normalizer;
pub mod quiz_parser;
pub mod quiz_scorer;

pub use quiz_normalizer::{normalize, normalize_parsed};
pub use quiz_parser::{extract_json_object, parse_quiz, ParsedQuiz};
pub use quiz_scorer::{evaluate, render, score, NO_QUIZ_SUMMARY};
