//! 测验展示数据
//!
//! 核心只给出变长的题目列表；固定数量的显示槽位由前端自己绑定，
//! 这里提供补齐占位槽位和"选项文字 → 下标"映射两个辅助。

use crate::models::{Quiz, Selection};

/// 生成成功时的状态提示
pub const QUIZ_READY_STATUS: &str = "Quiz generated. Select your answers below.";

/// 单个题目槽位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSlot {
    pub visible: bool,
    /// 形如 "Q1. 题干"
    pub label: String,
    pub choices: Vec<String>,
}

impl QuizSlot {
    /// 隐藏的占位槽位
    pub fn placeholder() -> Self {
        Self {
            visible: false,
            label: "Question".to_string(),
            choices: vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
            ],
        }
    }
}

/// 一次测验生成的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizGeneration {
    pub quiz: Quiz,
    /// 每道题一个可见槽位
    pub slots: Vec<QuizSlot>,
    /// 成功时为固定提示，否则是模型原始输出（或错误信息）
    pub status: String,
}

impl QuizGeneration {
    /// 由规整后的测验和模型原始输出构造
    pub fn new(quiz: Quiz, raw: String) -> Self {
        let slots = quiz
            .iter()
            .enumerate()
            .map(|(i, q)| QuizSlot {
                visible: true,
                label: format!("Q{}. {}", i + 1, q.question()),
                choices: q.options().to_vec(),
            })
            .collect();

        let status = if quiz.is_empty() {
            raw
        } else {
            QUIZ_READY_STATUS.to_string()
        };

        Self {
            quiz,
            slots,
            status,
        }
    }

    /// 补齐到 `count` 个槽位，多出的为隐藏占位
    pub fn padded_slots(&self, count: usize) -> Vec<QuizSlot> {
        let mut slots: Vec<QuizSlot> = self.slots.iter().take(count).cloned().collect();
        slots.resize_with(count, QuizSlot::placeholder);
        slots
    }
}

/// 把前端选中的选项文字映射回下标
///
/// 缺失、未选或找不到的文字都视为未作答。
pub fn selections_from_labels(quiz: &Quiz, labels: &[Option<String>]) -> Vec<Selection> {
    quiz.iter()
        .enumerate()
        .map(|(i, q)| {
            labels
                .get(i)
                .and_then(|label| label.as_deref())
                .and_then(|label| q.index_of(label))
        })
        .collect()
}
