//! 补全客户端
//!
//! 核心逻辑只依赖 [`CompletionClient`]：发送一段提示词，得到文本或错误。
//! 唯一访问网络的实现是 [`LlmClient`]。

pub mod llm_client;

pub use llm_client::{connect, LlmClient, Unconfigured};

use async_trait::async_trait;

use crate::error::Result;

/// 文本补全能力
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 发送提示词，返回模型生成的文本
    ///
    /// 只请求一次，失败不重试。
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}
