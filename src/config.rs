use serde::Deserialize;
use std::path::Path;

use crate::error::TutorError;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    /// API 密钥，未配置时为 `None`
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度
    pub temperature: f32,
    /// 单次回复的最大 token 数
    pub max_tokens: u32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://api.groq.com/openai/v1".to_string(),
            llm_model_name: "llama-3.1-8b-instant".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, TutorError> {
        let content = std::fs::read_to_string(path).map_err(|e| TutorError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| TutorError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.llm_api_key = normalize_key(config.llm_api_key);

        Ok(config)
    }

    /// 用环境变量覆盖已有配置
    pub fn merge_env(self) -> Self {
        self.merge_with(|name| std::env::var(name).ok())
    }

    /// 用 `lookup` 查到的值覆盖已有配置
    ///
    /// 无法解析的数值保留原值（文件中的值或默认值）。
    pub fn merge_with(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            llm_api_key: normalize_key(lookup("GROQ_API_KEY")).or(self.llm_api_key),
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            temperature: lookup("LLM_TEMPERATURE").and_then(|v| v.parse().ok()).unwrap_or(self.temperature),
            max_tokens: lookup("LLM_MAX_TOKENS").and_then(|v| v.parse().ok()).unwrap_or(self.max_tokens),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 是否配置了 API 密钥
    pub fn has_credential(&self) -> bool {
        self.llm_api_key.is_some()
    }
}

/// 空白密钥视为未配置
fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
