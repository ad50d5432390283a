//! 测验评分 - 业务能力层
//!
//! 按位置比对用户作答与标准答案，生成分数和逐题反馈。

use crate::models::{Quiz, ScoreReport, Selection, Verdict, NO_ANSWER};

/// 还没有生成测验时的提示
pub const NO_QUIZ_SUMMARY: &str = "No quiz generated yet.";

const MASTERY_MESSAGE: &str = "Great job. You’ve mastered this set.";
const REVIEW_MESSAGE: &str = "Good work. Review the missed questions and try again.";
const REVISIT_MESSAGE: &str = "Keep practicing. Revisit the explanation and roadmap.";

/// 计算成绩报告
///
/// `selections` 按位置对应题目，长度不足的部分视为未作答；
/// 未作答或越界的选择都算错，并显示为 "No answer"。
pub fn evaluate(selections: &[Selection], quiz: &Quiz) -> ScoreReport {
    let verdicts: Vec<Verdict> = quiz
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let chosen = selections.get(i).copied().flatten();
            let chosen_label = chosen.and_then(|idx| question.option(idx));

            Verdict {
                correct: chosen == Some(question.answer_index()),
                chosen_label: chosen_label.unwrap_or(NO_ANSWER).to_string(),
                correct_label: question.correct_option().to_string(),
            }
        })
        .collect();

    ScoreReport {
        correct_count: verdicts.iter().filter(|v| v.correct).count(),
        total: quiz.len(),
        verdicts,
    }
}

/// 评分并生成 (分数行, 反馈文字)
///
/// 测验为空时返回固定提示和空反馈。
pub fn score(selections: &[Selection], quiz: &Quiz) -> (String, String) {
    render(&evaluate(selections, quiz))
}

/// 把成绩报告渲染成展示文字
pub fn render(report: &ScoreReport) -> (String, String) {
    if report.total == 0 {
        return (NO_QUIZ_SUMMARY.to_string(), String::new());
    }

    let summary = format!("Score: {} / {}", report.correct_count, report.total);

    let tier = if report.is_perfect() {
        MASTERY_MESSAGE
    } else if report.meets_review_threshold() {
        REVIEW_MESSAGE
    } else {
        REVISIT_MESSAGE
    };

    let details: Vec<String> = report
        .verdicts
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "Q{}: {} | Your answer: {} | Correct: {}",
                i + 1,
                if v.correct { "✅ Correct" } else { "❌ Incorrect" },
                v.chosen_label,
                v.correct_label
            )
        })
        .collect();

    (summary, format!("{}\n\n{}", tier, details.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizQuestion;

    fn question(options: &[&str], answer_index: usize) -> QuizQuestion {
        let options = options.iter().map(|s| s.to_string()).collect();
        QuizQuestion::new("q", options, answer_index).unwrap()
    }

    fn abc_quiz() -> Quiz {
        Quiz::new(vec![question(&["A", "B", "C"], 2)])
    }

    #[test]
    fn test_empty_quiz_is_terminal() {
        let (summary, feedback) = score(&[Some(1), None], &Quiz::empty());
        assert_eq!(summary, "No quiz generated yet.");
        assert_eq!(feedback, "");
    }

    #[test]
    fn test_all_correct_gets_mastery() {
        let quiz = abc_quiz();
        let report = evaluate(&[Some(2)], &quiz);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total, 1);

        let (summary, feedback) = render(&report);
        assert_eq!(summary, "Score: 1 / 1");
        assert_eq!(
            feedback,
            "Great job. You’ve mastered this set.\n\nQ1: ✅ Correct | Your answer: C | Correct: C"
        );
    }

    #[test]
    fn test_unanswered_reports_no_answer() {
        let quiz = abc_quiz();
        let report = evaluate(&[None], &quiz);
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.verdicts[0].chosen_label, "No answer");
        assert!(!report.verdicts[0].correct);

        let (_, feedback) = render(&report);
        assert!(feedback.ends_with("Q1: ❌ Incorrect | Your answer: No answer | Correct: C"));
    }

    #[test]
    fn test_out_of_range_and_missing_selections() {
        let quiz = Quiz::new(vec![question(&["A", "B", "C"], 0), question(&["A", "B", "C"], 1)]);
        let report = evaluate(&[Some(9)], &quiz);
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.verdicts.len(), 2);
        assert!(report.verdicts.iter().all(|v| v.chosen_label == NO_ANSWER));
    }

    #[test]
    fn test_feedback_tiers() {
        let quiz = Quiz::new(vec![question(&["A", "B", "C"], 0); 5]);

        // 3/5 = 60%
        let (summary, feedback) = score(&[Some(0), Some(0), Some(0), Some(1), None], &quiz);
        assert_eq!(summary, "Score: 3 / 5");
        assert!(feedback.starts_with("Good work. Review the missed questions and try again.\n\n"));

        // 2/5 = 40%
        let (_, feedback) = score(&[Some(0), Some(0)], &quiz);
        assert!(feedback.starts_with("Keep practicing. Revisit the explanation and roadmap."));
        assert_eq!(feedback.lines().count(), 2 + 5);
    }

    #[test]
    fn test_wrong_answer_shows_both_labels() {
        let quiz = abc_quiz();
        let (_, feedback) = score(&[Some(0)], &quiz);
        assert!(feedback.contains("Q1: ❌ Incorrect | Your answer: A | Correct: C"));
    }
}
