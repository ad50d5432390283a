/// LLM API 客户端
///
/// 兼容 OpenAI 接口的服务（默认 Groq），使用 `async-openai` 调用。
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::CompletionClient;
use crate::config::Config;
use crate::error::{Result, TutorError};
use crate::utils::logging::truncate_text;

/// LLM 客户端
///
/// 构造时检查 API 密钥，之后每次调用不再检查。
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmClient {
    /// 创建新的 LLM 客户端，未配置密钥时返回 `CredentialMissing`
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .llm_api_key
            .as_deref()
            .ok_or(TutorError::CredentialMissing)?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl CompletionClient for LlmClient {
    #[allow(deprecated)]
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("提示词: {}", truncate_text(prompt, 120));

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            TutorError::from(e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                warn!("LLM 返回内容为空");
                TutorError::EmptyCompletion {
                    model: self.model_name.clone(),
                }
            })?;

        Ok(content)
    }
}

/// 未配置密钥时使用的客户端
///
/// 每次调用都直接返回 `CredentialMissing`，不发起任何请求。
#[derive(Debug, Default, Clone, Copy)]
pub struct Unconfigured;

#[async_trait]
impl CompletionClient for Unconfigured {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(TutorError::CredentialMissing)
    }
}

/// 根据配置创建补全客户端
pub fn connect(config: &Config) -> Box<dyn CompletionClient> {
    match LlmClient::new(config) {
        Ok(client) => {
            debug!("LLM 客户端就绪，模型: {}", client.model_name());
            Box::new(client)
        }
        Err(e) => {
            warn!("⚠️ 未配置 API 密钥，所有生成操作都将返回提示信息");
            debug!("{}", e);
            Box::new(Unconfigured)
        }
    }
}
