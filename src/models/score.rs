/// 未作答或选项越界时显示的文字
pub const NO_ANSWER: &str = "No answer";

/// 单题判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    /// 用户所选选项的文字，未作答为 "No answer"
    pub chosen_label: String,
    pub correct_label: String,
}

/// 成绩报告，每次按需重新计算，不缓存
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    pub verdicts: Vec<Verdict>,
}

impl ScoreReport {
    /// 是否全部答对
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct_count == self.total
    }

    /// 正确率是否达到 60%
    pub fn meets_review_threshold(&self) -> bool {
        // correct / total >= 0.6，整数比较避免浮点误差
        self.correct_count * 5 >= self.total * 3
    }
}
