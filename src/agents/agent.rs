use std::sync::Arc;

use tracing::{info, warn};

use crate::agents::Role;
use crate::services::TextGenerator;

/// 上下文块的开头标记
pub const CONTEXT_HEADER: &str = "CONTEXTO PARA REALIZAR A TAREFA:";
/// 上下文块的分隔线
pub const CONTEXT_DELIMITER: &str = "---";
/// 任务前缀
pub const TASK_PREFIX: &str = "TAREFA:";

/// 一次 agent 调用的结果
///
/// 失败不再混在正文里，只有需要把失败继续传给下一阶段时才渲染成占位文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    /// 生成成功，原样保留返回文本
    Generated(String),
    /// 外部调用失败
    Failed { reason: String },
}

impl AgentOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, AgentOutcome::Failed { .. })
    }

    /// 作为文本使用时的内容，失败时为占位错误文本
    pub fn text(&self) -> String {
        match self {
            AgentOutcome::Generated(text) => text.clone(),
            AgentOutcome::Failed { reason } => failure_text(reason),
        }
    }
}

/// 失败阶段的占位文本
pub fn failure_text(reason: &str) -> String {
    format!("Erro: Não foi possível completar a tarefa. Motivo: {}", reason)
}

/// 构建提示词
///
/// 上下文为空时不输出任何分隔标记。
pub fn build_prompt(task: &str, context: Option<&str>) -> String {
    let prompt = format!("{} {}", TASK_PREFIX, task);
    match context.filter(|ctx| !ctx.is_empty()) {
        Some(ctx) => format!(
            "{}\n{}\n{}\n{}\n\n{}",
            CONTEXT_HEADER, CONTEXT_DELIMITER, ctx, CONTEXT_DELIMITER, prompt
        ),
        None => prompt,
    }
}

/// Agent
///
/// 名称 + 固定系统指令 + 文本生成能力。每次调用互相独立。
#[derive(Clone)]
pub struct Agent {
    role: Role,
    instruction: String,
    generator: Arc<dyn TextGenerator>,
}

impl Agent {
    pub fn new(role: Role, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            role,
            instruction: role.instruction().to_string(),
            generator,
        }
    }

    pub fn name(&self) -> &'static str {
        self.role.name()
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// 执行任务，可选地带上上下文
    ///
    /// 外部调用的任何失败都转换成 `AgentOutcome::Failed`，不会向上传播。
    pub async fn execute(&self, task: &str, context: Option<&str>) -> AgentOutcome {
        info!("⏳ Agente '{}' iniciando tarefa...", self.name());
        let prompt = build_prompt(task, context);

        match self.generator.generate(&self.instruction, &prompt).await {
            Ok(text) => {
                info!("✅ Agente '{}' concluiu a tarefa!", self.name());
                AgentOutcome::Generated(text)
            }
            Err(e) => {
                warn!("❌ Erro ao executar o agente '{}': {}", self.name(), e);
                AgentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("role", &self.role)
            .field("instruction_len", &self.instruction.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generator::testing::ScriptedGenerator;

    #[test]
    fn test_prompt_without_context_has_no_delimiter() {
        let prompt = build_prompt("Analise a URL: https://www.airbnb.com", None);
        assert_eq!(prompt, "TAREFA: Analise a URL: https://www.airbnb.com");
        assert!(!prompt.contains(CONTEXT_DELIMITER));
        assert!(!prompt.contains(CONTEXT_HEADER));
    }

    #[test]
    fn test_empty_context_is_treated_as_absent() {
        assert_eq!(build_prompt("Liste.", Some("")), "TAREFA: Liste.");
    }

    #[test]
    fn test_prompt_wraps_context_between_delimiters() {
        let prompt = build_prompt("Liste os componentes de UI/UX.", Some("conceito"));
        assert_eq!(
            prompt,
            "CONTEXTO PARA REALIZAR A TAREFA:\n---\nconceito\n---\n\nTAREFA: Liste os componentes de UI/UX."
        );
    }

    #[tokio::test]
    async fn test_execute_passes_instruction_and_returns_text_verbatim() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("  texto gerado\n")]));
        let agent = Agent::new(Role::BusinessAnalyst, generator.clone());

        let outcome = agent.execute("Analise a URL: x", None).await;

        assert_eq!(outcome, AgentOutcome::Generated("  texto gerado\n".to_string()));
        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].instruction, Role::BusinessAnalyst.instruction());
        assert_eq!(calls[0].prompt, "TAREFA: Analise a URL: x");
    }

    #[tokio::test]
    async fn test_execute_converts_failure_into_outcome() {
        let generator = Arc::new(ScriptedGenerator::new([Err("quota excedida")]));
        let agent = Agent::new(Role::UiUxEngineer, generator);

        let outcome = agent.execute("Liste.", Some("conceito")).await;

        assert!(outcome.is_failure());
        let text = outcome.text();
        assert!(text.starts_with("Erro: Não foi possível completar a tarefa. Motivo: "));
        assert!(text.contains("quota excedida"));
    }
}
