use thiserror::Error;

use crate::agents::Role;
use crate::workflow::Stage;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 流程编排错误
    #[error("{0}")]
    Pipeline(#[from] PipelineError),
    /// 终端 / 网络 IO 错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 构建请求失败
    #[error("无法构建 LLM 请求: {source}")]
    RequestBuildFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 流程编排错误
///
/// 单个阶段的 LLM 失败默认不会变成错误，只有在 `FailurePolicy::Abort`
/// 下才会中断流程。
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 注册表中缺少所需的 agent
    #[error("Agente '{}' não está registrado", .role.name())]
    AgentNotRegistered { role: Role },
    /// 某个阶段失败（Abort 策略）
    #[error("Falha na {}: {reason}", .stage.title())]
    StageFailed { stage: Stage, reason: String },
    /// 随机网址探索失败（Abort 策略）
    #[error("O explorador web não conseguiu escolher uma URL: {reason}")]
    ExplorerFailed { reason: String },
}

// ========== 便捷构造函数 ==========

impl LlmError {
    /// 创建LLM API调用错误
    pub fn api_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

impl From<async_openai::error::OpenAIError> for LlmError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        LlmError::RequestBuildFailed {
            source: Box::new(err),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
