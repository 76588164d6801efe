//! 流水线上下文
//!
//! 记录一次运行中每个阶段"收到了什么、产出了什么"，运行结束后即丢弃。

use crate::agents::{AgentOutcome, Role};
use crate::workflow::stage::Stage;

/// 单个阶段的记录
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub stage: Stage,
    /// 交给该阶段的上下文（第 1 阶段为空）
    pub context: Option<String>,
    pub outcome: AgentOutcome,
}

/// 补充分析的记录
#[derive(Debug, Clone)]
pub struct ExtraRecord {
    pub role: Role,
    pub outcome: AgentOutcome,
}

/// 一次运行的有序阶段链
#[derive(Debug, Clone)]
pub struct PipelineContext {
    seed_url: String,
    records: Vec<StageRecord>,
}

impl PipelineContext {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            records: Vec::with_capacity(Stage::ALL.len()),
        }
    }

    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    pub fn push(&mut self, record: StageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[StageRecord] {
        &self.records
    }

    pub fn record(&self, stage: Stage) -> Option<&StageRecord> {
        self.records.iter().find(|record| record.stage == stage)
    }

    /// 某阶段的文本输出（失败时为占位错误文本）
    pub fn output(&self, stage: Stage) -> Option<String> {
        self.record(stage).map(|record| record.outcome.text())
    }

    /// 最终活动文本
    pub fn final_text(&self) -> Option<String> {
        self.output(Stage::PedagogicalReview)
    }

    /// 失败的阶段
    pub fn failed_stages(&self) -> Vec<Stage> {
        self.records
            .iter()
            .filter(|record| record.outcome.is_failure())
            .map(|record| record.stage)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.record(Stage::PedagogicalReview).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_renders_failures_as_text() {
        let mut ctx = PipelineContext::new("https://example.com");
        ctx.push(StageRecord {
            stage: Stage::BusinessConcept,
            context: None,
            outcome: AgentOutcome::Generated("conceito".to_string()),
        });
        ctx.push(StageRecord {
            stage: Stage::FrontendSpec,
            context: Some("conceito".to_string()),
            outcome: AgentOutcome::Failed {
                reason: "timeout".to_string(),
            },
        });

        assert_eq!(ctx.output(Stage::BusinessConcept).as_deref(), Some("conceito"));
        assert!(ctx.output(Stage::FrontendSpec).unwrap().contains("timeout"));
        assert_eq!(ctx.failed_stages(), vec![Stage::FrontendSpec]);
        assert!(!ctx.is_complete());
        assert!(ctx.final_text().is_none());
    }
}
