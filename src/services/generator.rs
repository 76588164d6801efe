//! 文本生成能力
//!
//! 流程层只依赖这一个能力接口：给定系统指令和提示词，返回生成的文本。

use async_trait::async_trait;

use crate::error::LlmError;

/// 外部文本生成服务
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 以 `instruction` 作为系统指令，对 `prompt` 生成文本
    async fn generate(&self, instruction: &str, prompt: &str) -> Result<String, LlmError>;
}
