//! # Study Tutor
//!
//! 把"学科 / 主题 / 语言 / 水平"转换成四类学习内容（讲解、资源、路线图、测验）的学习助手核心
//!
//! ## 架构设计
//!
//! ### ① 能力层
//! - `prompts/` - 提示词构建（纯函数）
//! - `clients/` - 补全客户端，唯一访问网络的部分
//! - `services/` - 测验 JSON 提取、校验清洗、评分
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 五个对外操作，失败统一转换成可展示的文字
//! - `StudyTutor` - 持有注入的客户端
//! - `QuizGeneration` - 测验、题目槽位和状态提示
//!
//! ### ③ 前端
//! - `app` - 终端交互界面，只负责收集输入和显示结果
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{connect, CompletionClient, LlmClient, Unconfigured};
pub use config::Config;
pub use error::{Result, TutorError};
pub use models::{Language, Level, Quiz, QuizQuestion, RequestContext, Selection, TaskKind};
pub use prompts::build_prompt;
pub use services::{extract_json_object, normalize, parse_quiz, score, ParsedQuiz};
pub use workflow::{evaluate_quiz, selections_from_labels, QuizGeneration, QuizSlot, StudyTutor};
