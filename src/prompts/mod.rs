//! 提示词构建
//!
//! 纯函数：相同输入总是得到相同的提示词，不访问网络。
//! 每个提示词 = 上下文头（原样复述 subject / topic / language / level）+ 空行 + 任务说明。

use crate::models::{Language, Level, RequestContext, TaskKind};

/// 构建指定任务的完整提示词
pub fn build_prompt(
    task: TaskKind,
    subject: &str,
    topic: &str,
    language: Language,
    level: Level,
) -> String {
    let header = build_context_header(subject, topic, language, level);
    let instructions = match task {
        TaskKind::Explanation => explanation_instructions(),
        TaskKind::Resources => resources_instructions(),
        TaskKind::Roadmap => roadmap_instructions(),
        TaskKind::Quiz => quiz_instructions(language),
    };

    format!("{}\n{}", header, instructions)
}

/// 按请求上下文构建提示词
pub fn build_prompt_for(task: TaskKind, ctx: &RequestContext) -> String {
    build_prompt(task, &ctx.subject, &ctx.topic, ctx.language, ctx.level)
}

fn build_context_header(subject: &str, topic: &str, language: Language, level: Level) -> String {
    format!(
        "Subject: {}\nTopic: {}\nLanguage: {}\nStudent Level: {}\n",
        subject, topic, language, level
    )
}

fn explanation_instructions() -> String {
    "Task: Write a clear, friendly, step-by-step explanation of the topic. \
     Use short paragraphs, numbered steps where helpful, and examples. \
     Keep it concise but thorough. Reply in the specified language only."
        .to_string()
}

fn resources_instructions() -> String {
    "Task: Recommend at least 3 quality learning resources (mix of articles, videos, documentation). \
     Return as a markdown bulleted list. Each item must include a title, the type (Article/Video/Docs), \
     a one-line why it's useful, and a URL. Reply in the specified language only."
        .to_string()
}

fn roadmap_instructions() -> String {
    "Task: Produce a structured learning roadmap for this topic and level. \
     Organize into stages with bullet points, estimated effort, and key outcomes. \
     Add a short list of common mistakes to avoid. Reply in the specified language only."
        .to_string()
}

fn quiz_instructions(language: Language) -> String {
    format!(
        r#"Task: Create a short multiple-choice quiz with 3 to 5 questions. Return STRICT JSON only with this schema:
{{
  "questions": [
    {{
      "question": "string",
      "options": ["A", "B", "C", "D"],
      "answer_index": 0
    }}
  ]
}}
Requirements:
- options length 3-5
- answer_index is an integer index into the options array
- No additional commentary or code fences
- Write the question text and options in {}."#,
        language
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prompt_restates_context() {
        for task in TaskKind::ALL {
            for language in Language::ALL {
                let prompt = build_prompt(task, "Mathematics", "Derivatives", language, Level::Advanced);
                assert!(prompt.contains("Mathematics"), "{task}");
                assert!(prompt.contains("Derivatives"), "{task}");
                assert!(prompt.contains(language.label()), "{task}");
                assert!(prompt.contains("Advanced"), "{task}");
            }
        }
    }

    #[test]
    fn test_header_layout() {
        let prompt = build_prompt(
            TaskKind::Explanation,
            "Physics",
            "Inertia",
            Language::French,
            Level::Beginner,
        );
        assert!(prompt.starts_with(
            "Subject: Physics\nTopic: Inertia\nLanguage: French\nStudent Level: Beginner\n\nTask: "
        ));
        assert!(prompt.ends_with("Reply in the specified language only."));
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        let prompt = build_prompt(TaskKind::Roadmap, "", "", Language::Urdu, Level::Intermediate);
        assert!(prompt.starts_with("Subject: \nTopic: \nLanguage: Urdu\n"));
    }

    #[test]
    fn test_resources_prompt_asks_for_tagged_list() {
        let prompt = build_prompt(TaskKind::Resources, "s", "t", Language::English, Level::Beginner);
        assert!(prompt.contains("at least 3"));
        assert!(prompt.contains("(Article/Video/Docs)"));
        assert!(prompt.contains("a URL"));
    }

    #[test]
    fn test_roadmap_prompt_mentions_mistakes() {
        let prompt = build_prompt(TaskKind::Roadmap, "s", "t", Language::English, Level::Beginner);
        assert!(prompt.contains("estimated effort"));
        assert!(prompt.contains("common mistakes"));
    }

    #[test]
    fn test_quiz_prompt_demands_strict_json() {
        let prompt = build_prompt(TaskKind::Quiz, "s", "t", Language::Indonesian, Level::Beginner);
        assert!(prompt.contains("STRICT JSON"));
        assert!(prompt.contains("\"answer_index\": 0"));
        assert!(prompt.contains("No additional commentary or code fences"));
        assert!(prompt.ends_with("- Write the question text and options in Indonasion."));
    }

    #[test]
    fn test_build_prompt_for_context() {
        let ctx = RequestContext::new("Biology", "Cells", Language::Hindi, Level::Intermediate);
        assert_eq!(
            build_prompt_for(TaskKind::Quiz, &ctx),
            build_prompt(TaskKind::Quiz, "Biology", "Cells", Language::Hindi, Level::Intermediate)
        );
    }
}
