//! 学习助手流程 - 流程层
//!
//! 对外提供五个操作：讲解、资源、路线图、生成测验、评分。
//! 每个操作都是一次独立的请求/响应，所有失败都在这里转换成可展示的文字，
//! 不会向前端抛出错误。

use tracing::{info, warn};

use crate::clients::CompletionClient;
use crate::models::{Quiz, RequestContext, Selection, TaskKind};
use crate::prompts::build_prompt_for;
use crate::services::{normalize_parsed, parse_quiz, score};
use crate::utils::logging::truncate_text;
use crate::workflow::quiz_view::QuizGeneration;

/// 学习助手
///
/// - 持有补全客户端（构造时注入）
/// - 不持有测验状态，测验由调用方保存并在评分时传回
pub struct StudyTutor<C> {
    client: C,
}

impl<C: CompletionClient> StudyTutor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 生成分步讲解
    pub async fn generate_explanation(&self, ctx: &RequestContext) -> String {
        self.generate_text(TaskKind::Explanation, ctx).await
    }

    /// 生成学习资源列表
    pub async fn generate_resources(&self, ctx: &RequestContext) -> String {
        self.generate_text(TaskKind::Resources, ctx).await
    }

    /// 生成学习路线图
    pub async fn generate_roadmap(&self, ctx: &RequestContext) -> String {
        self.generate_text(TaskKind::Roadmap, ctx).await
    }

    /// 生成测验
    ///
    /// 模型输出无法解析时得到空测验，状态文字为原始输出，方便用户查看。
    pub async fn generate_quiz(&self, ctx: &RequestContext) -> QuizGeneration {
        let raw = self.generate_text(TaskKind::Quiz, ctx).await;

        let parsed = parse_quiz(&raw);
        let quiz = normalize_parsed(&parsed);

        if quiz.is_empty() {
            warn!("⚠️ 测验为空，模型输出: {}", truncate_text(&raw, 80));
        } else {
            info!("✓ 测验生成完成，共 {} 题", quiz.len());
        }

        QuizGeneration::new(quiz, raw)
    }

    /// 对测验评分，返回 (分数行, 反馈文字)
    pub fn evaluate_quiz(&self, quiz: &Quiz, selections: &[Selection]) -> (String, String) {
        evaluate_quiz(quiz, selections)
    }

    async fn generate_text(&self, task: TaskKind, ctx: &RequestContext) -> String {
        info!(
            "📝 生成 {}: {} / {} ({}, {})",
            task, ctx.subject, ctx.topic, ctx.language, ctx.level
        );

        let prompt = build_prompt_for(task, ctx);

        match self.client.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ 生成 {} 失败: {}", task, e);
                e.to_string()
            }
        }
    }
}

/// 对测验评分，不需要客户端
pub fn evaluate_quiz(quiz: &Quiz, selections: &[Selection]) -> (String, String) {
    score(selections, quiz)
}
