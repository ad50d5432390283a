use thiserror::Error;

/// 应用程序错误类型
///
/// `Display` 的输出直接展示给用户，所以前两个变体保留了固定的提示文案。
#[derive(Debug, Error)]
pub enum TutorError {
    /// 未配置 API 密钥
    #[error("❌ Missing GROQ_API_KEY. Set it in your environment or Space secrets.")]
    CredentialMissing,

    /// 网络或服务端错误
    #[error("❌ API error: {message}")]
    Provider { message: String },

    /// 服务端返回了空内容
    #[error("❌ API error: empty completion from model {model}")]
    EmptyCompletion { model: String },

    /// 配置文件错误
    #[error("配置错误 ({path}): {message}")]
    Config { path: String, message: String },
}

// ========== 从常见错误类型转换 ==========

impl From<async_openai::error::OpenAIError> for TutorError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        TutorError::Provider {
            message: err.to_string(),
        }
    }
}

// ========== 便捷构造函数 ==========

impl TutorError {
    /// 创建服务端错误
    pub fn provider(message: impl Into<String>) -> Self {
        TutorError::Provider {
            message: message.into(),
        }
    }
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, TutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            TutorError::CredentialMissing.to_string(),
            "❌ Missing GROQ_API_KEY. Set it in your environment or Space secrets."
        );
        assert_eq!(
            TutorError::provider("connection refused").to_string(),
            "❌ API error: connection refused"
        );
    }
}
