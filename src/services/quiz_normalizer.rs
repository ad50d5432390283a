//! 测验校验与清洗 - 业务能力层
//!
//! 逐题检查结构，不合格的题目直接丢弃，不做修补。

use serde_json::Value;
use tracing::debug;

use super::quiz_parser::ParsedQuiz;
use crate::models::{Quiz, QuizQuestion, MAX_QUESTIONS};

/// 把解析出的 JSON 规整成测验
///
/// 保留条件：`question` 是字符串，`options` 是长度 3..=5 的数组，
/// `answer_index` 是合法下标的整数。题干和选项去除首尾空白，
/// 非字符串选项按 JSON 文本转换。最多保留前 5 题，顺序不变。
pub fn normalize(parsed: &Value) -> Quiz {
    let entries = parsed
        .get("questions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    normalize_entries(entries)
}

/// 对 [`ParsedQuiz`] 做规整
pub fn normalize_parsed(parsed: &ParsedQuiz) -> Quiz {
    normalize_entries(parsed.questions())
}

fn normalize_entries(entries: &[Value]) -> Quiz {
    let mut kept = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        match normalize_question(entry) {
            Some(question) => kept.push(question),
            None => debug!("丢弃第 {} 题：结构不合法", i + 1),
        }
        if kept.len() == MAX_QUESTIONS {
            break;
        }
    }

    Quiz::new(kept)
}

fn normalize_question(entry: &Value) -> Option<QuizQuestion> {
    let question = entry.get("question")?.as_str()?;
    let options = entry.get("options")?.as_array()?;
    let answer_index = entry.get("answer_index")?.as_u64()?;
    let answer_index = usize::try_from(answer_index).ok()?;

    let options: Vec<String> = options.iter().map(option_text).collect();

    QuizQuestion::new(question.trim(), options, answer_index)
}

fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
