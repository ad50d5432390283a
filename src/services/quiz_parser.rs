//! 测验 JSON 提取 - 业务能力层
//!
//! 模型经常在 JSON 前后加说明文字或代码块标记，这里分两步找出测验对象：
//! 1. 整段文本直接按 JSON 解析
//! 2. 失败时按括号配对截取第一个 JSON 对象再解析
//!
//! 两步都失败时返回 [`ParsedQuiz::Empty`]，不向调用方报错。

use serde_json::Value;
use tracing::debug;

use crate::utils::logging::truncate_text;

/// 解析结果
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuiz {
    /// 整段文本就是合法 JSON
    Direct(Value),
    /// 从文本中截取出的 JSON 对象
    Extracted(Value),
    /// 没有找到含 `questions` 的 JSON 对象
    Empty,
}

impl ParsedQuiz {
    /// 解析出的 JSON，`Empty` 时为 `None`
    pub fn value(&self) -> Option<&Value> {
        match self {
            ParsedQuiz::Direct(v) | ParsedQuiz::Extracted(v) => Some(v),
            ParsedQuiz::Empty => None,
        }
    }

    /// `questions` 数组，不是数组时视为空
    pub fn questions(&self) -> &[Value] {
        self.value()
            .and_then(|v| v.get("questions"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedQuiz::Empty)
    }
}

/// 截取文本中第一个括号配对完整的 JSON 对象
///
/// 从第一个 `{` 开始单遍扫描，字符串字面量里的括号不计入深度，
/// 反斜杠转义的引号不会结束字符串。深度回到 0 时返回 `{` 到 `}`（含）之间的原文；
/// 没有 `{` 或扫描到结尾仍未配对时返回 `None`。
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

/// 从模型输出中解析测验 JSON
pub fn parse_quiz(raw: &str) -> ParsedQuiz {
    if let Some(value) = parse_with_questions(raw) {
        debug!("测验 JSON 直接解析成功");
        return ParsedQuiz::Direct(value);
    }

    if let Some(block) = extract_json_object(raw) {
        if let Some(value) = parse_with_questions(block) {
            debug!("从模型输出中截取到测验 JSON");
            return ParsedQuiz::Extracted(value);
        }
    }

    debug!("未找到测验 JSON，原始输出: {}", truncate_text(raw, 80));
    ParsedQuiz::Empty
}

/// 解析 JSON，且要求顶层含 `questions` 键
fn parse_with_questions(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(|v| v.get("questions").is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_prose() {
        let text = "Here you go: {\"a\": 1, \"b\": {\"c\": 2}} and more {\"d\": 3}";
        assert_eq!(
            extract_json_object(text),
            Some("{\"a\": 1, \"b\": {\"c\": 2}}")
        );
    }

    #[test]
    fn test_extract_ignores_braces_in_strings() {
        let text = r#"prefix {"a": "b{c}d"} suffix"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a": "b{c}d"}"#));

        let text = r#"{"a": "}"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_extract_handles_escaped_quotes() {
        let text = r#"x {"a": "say \"}\" now", "b": "\\"} y"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"a": "say \"}\" now", "b": "\\"}"#)
        );
    }

    #[test]
    fn test_extract_none_when_absent_or_unbalanced() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{\"a\": {\"b\": 1}"), None);
        assert_eq!(extract_json_object("{\"a\": \"}"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_extract_multibyte_text() {
        let text = "答案如下：{\"q\": \"你好{\"} 谢谢";
        assert_eq!(extract_json_object(text), Some("{\"q\": \"你好{\"}"));
    }

    #[test]
    fn test_parse_direct() {
        let raw = r#"{"questions": []}"#;
        assert_eq!(parse_quiz(raw), ParsedQuiz::Direct(json!({"questions": []})));
    }

    #[test]
    fn test_parse_fenced_output() {
        let raw = "```json\n{\"questions\": [{\"question\": \"q\"}]}\n```";
        let parsed = parse_quiz(raw);
        assert!(matches!(parsed, ParsedQuiz::Extracted(_)));
        assert_eq!(parsed.questions().len(), 1);
    }

    #[test]
    fn test_parse_requires_questions_key() {
        assert_eq!(parse_quiz(r#"{"items": []}"#), ParsedQuiz::Empty);
        assert_eq!(parse_quiz("Sorry, I can't help {with that"), ParsedQuiz::Empty);
        assert_eq!(parse_quiz("[1, 2, 3]"), ParsedQuiz::Empty);
    }

    #[test]
    fn test_questions_not_array_is_empty() {
        let parsed = parse_quiz(r#"{"questions": "none"}"#);
        assert!(!parsed.is_empty());
        assert!(parsed.questions().is_empty());
    }
}
