//! 活动生成流程 - 流程层
//!
//! 核心职责：定义"一个网址 → 一份练习"的完整处理流程
//!
//! 流程顺序：
//! 1. 业务概念 → 2. 前端规格 → 3. 后端规格 → 4. 练习草稿 → 5. 教学审阅
//!
//! 每个阶段的输出原样作为下一阶段的上下文，第 4 阶段例外，
//! 它收到的是第 2、3 阶段输出的带标签拼接。

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use crate::agents::{AgentOutcome, AgentRegistry, Role};
use crate::error::PipelineError;
use crate::workflow::pipeline_ctx::{ExtraRecord, PipelineContext, StageRecord};
use crate::workflow::stage::{challenge_context, Stage};

/// 随机探索者的任务
pub const EXPLORER_TASK: &str = "Escolha uma URL aleatória.";

/// 阶段失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// 把失败的占位文本继续传给下一阶段，流程照常跑完
    Propagate,
    /// 在第一个失败阶段停止，并报告是哪个阶段
    Abort,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "propagate" | "propagar" => Ok(FailurePolicy::Propagate),
            "abort" | "abortar" => Ok(FailurePolicy::Abort),
            other => Err(format!("política de falha desconhecida: {}", other)),
        }
    }
}

/// 流程参数
#[derive(Debug, Clone, Copy)]
pub struct FlowSettings {
    /// 相邻阶段之间的停顿，最后一个阶段之后不停顿
    pub stage_pause: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            stage_pause: Duration::ZERO,
            failure_policy: FailurePolicy::Propagate,
        }
    }
}

/// 补充分析的上下文来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtraContext {
    None,
    Concept,
    FinalActivity,
}

/// 补充分析：角色、任务、上下文来源，按执行顺序
const EXTRA_ANALYSES: [(Role, &str, ExtraContext); 5] = [
    (
        Role::FullStackTechnologies,
        "Liste as tecnologias full stack para construir um site completo.",
        ExtraContext::None,
    ),
    (
        Role::PracticalExamples,
        "Gere exemplos práticos de uso deste site.",
        ExtraContext::Concept,
    ),
    (
        Role::TechCuriosities,
        "Compartilhe curiosidades sobre este tema.",
        ExtraContext::Concept,
    ),
    (
        Role::CareerTips,
        "Relacione este desafio com oportunidades de carreira.",
        ExtraContext::FinalActivity,
    ),
    (
        Role::AutomatedTests,
        "Sugira testes automatizados para validar as soluções.",
        ExtraContext::FinalActivity,
    ),
];

/// 活动生成流程
///
/// - 按固定顺序调用五个 agent
/// - 决定每个阶段拿到什么上下文
/// - 只读共享注册表，不持有可变状态
pub struct ActivityFlow {
    registry: Arc<AgentRegistry>,
    settings: FlowSettings,
}

impl ActivityFlow {
    pub fn new(registry: Arc<AgentRegistry>, settings: FlowSettings) -> Self {
        Self { registry, settings }
    }

    /// 运行完整流程
    pub async fn run(&self, seed_url: &str) -> Result<PipelineContext, PipelineError> {
        self.run_with(seed_url, |_| {}).await
    }

    /// 运行完整流程，每个阶段完成后回调 `on_stage`
    pub async fn run_with<F>(
        &self,
        seed_url: &str,
        mut on_stage: F,
    ) -> Result<PipelineContext, PipelineError>
    where
        F: FnMut(&StageRecord),
    {
        info!("🚀 Orquestração iniciada para a URL: {}", seed_url);
        let mut ctx = PipelineContext::new(seed_url);

        for stage in Stage::ALL {
            let agent = self.registry.require(stage.role())?;
            let context = context_for(stage, &ctx);
            let outcome = agent.execute(&stage.task(seed_url), context.as_deref()).await;

            let record = StageRecord {
                stage,
                context,
                outcome,
            };
            on_stage(&record);

            if let AgentOutcome::Failed { reason } = &record.outcome {
                match self.settings.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(PipelineError::StageFailed {
                            stage,
                            reason: reason.clone(),
                        });
                    }
                    FailurePolicy::Propagate => {
                        warn!("⚠️ {} falhou, o texto de erro segue como contexto", stage);
                    }
                }
            }
            ctx.push(record);

            if !stage.is_last() && !self.settings.stage_pause.is_zero() {
                tokio::time::sleep(self.settings.stage_pause).await;
            }
        }

        let failed = ctx.failed_stages();
        if failed.is_empty() {
            info!("✅ Orquestração concluída com sucesso!");
        } else {
            warn!("⚠️ Orquestração concluída com {} etapa(s) com falha", failed.len());
        }
        Ok(ctx)
    }

    /// 让随机探索者挑选一个起始网址
    pub async fn pick_random_url(&self) -> Result<String, PipelineError> {
        let explorer = self.registry.require(Role::RandomExplorer)?;
        match explorer.execute(EXPLORER_TASK, None).await {
            AgentOutcome::Generated(text) => Ok(extract_url(&text)),
            AgentOutcome::Failed { reason } => match self.settings.failure_policy {
                FailurePolicy::Abort => Err(PipelineError::ExplorerFailed { reason }),
                FailurePolicy::Propagate => Ok(crate::agents::failure_text(&reason)),
            },
        }
    }

    /// 依次运行补充分析，失败只记录不中断
    pub async fn run_extras(&self, ctx: &PipelineContext) -> Result<Vec<ExtraRecord>, PipelineError> {
        let mut records = Vec::with_capacity(EXTRA_ANALYSES.len());

        for (role, task, source) in EXTRA_ANALYSES {
            let agent = self.registry.require(role)?;
            let context = match source {
                ExtraContext::None => None,
                ExtraContext::Concept => ctx.output(Stage::BusinessConcept),
                ExtraContext::FinalActivity => ctx.final_text(),
            };
            let outcome = agent.execute(task, context.as_deref()).await;
            records.push(ExtraRecord { role, outcome });
        }

        Ok(records)
    }
}

/// 某阶段应收到的上下文
fn context_for(stage: Stage, ctx: &PipelineContext) -> Option<String> {
    match stage {
        Stage::BusinessConcept => None,
        Stage::FrontendSpec => ctx.output(Stage::BusinessConcept),
        Stage::BackendSpec => ctx.output(Stage::FrontendSpec),
        Stage::ChallengeDraft => {
            let frontend = ctx.output(Stage::FrontendSpec).unwrap_or_default();
            let backend = ctx.output(Stage::BackendSpec).unwrap_or_default();
            Some(challenge_context(&frontend, &backend))
        }
        Stage::PedagogicalReview => ctx.output(Stage::ChallengeDraft),
    }
}

/// 从探索者的回复中取出第一个网址，找不到时返回去掉首尾空白的原文
pub fn extract_url(reply: &str) -> String {
    if let Ok(re) = Regex::new(r#"https?://[^\s<>"'`()\[\]*]+"#) {
        if let Some(found) = re.find(reply) {
            return found
                .as_str()
                .trim_end_matches(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
                .to_string();
        }
    }
    reply.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generator::testing::ScriptedGenerator;

    fn flow_with(generator: Arc<ScriptedGenerator>, policy: FailurePolicy) -> ActivityFlow {
        let registry = Arc::new(AgentRegistry::new(generator));
        ActivityFlow::new(
            registry,
            FlowSettings {
                stage_pause: Duration::ZERO,
                failure_policy: policy,
            },
        )
    }

    const OUTPUTS: [&str; 5] = ["conceito", "front", "back", "rascunho", "final"];

    #[tokio::test]
    async fn test_each_stage_receives_previous_output() {
        let generator = Arc::new(ScriptedGenerator::new(OUTPUTS.map(Ok)));
        let flow = flow_with(generator.clone(), FailurePolicy::Propagate);

        let ctx = flow.run("https://www.airbnb.com").await.unwrap();

        let contexts: Vec<Option<String>> =
            ctx.records().iter().map(|record| record.context.clone()).collect();
        assert_eq!(contexts[0], None);
        assert_eq!(contexts[1].as_deref(), Some("conceito"));
        assert_eq!(contexts[2].as_deref(), Some("front"));
        assert_eq!(
            contexts[3].as_deref(),
            Some("Especificações de Front-End:\nfront\n\nEspecificações de Back-End:\nback")
        );
        assert_eq!(contexts[4].as_deref(), Some("rascunho"));
        assert_eq!(ctx.final_text().as_deref(), Some("final"));

        let calls = generator.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0].prompt, "TAREFA: Analise a URL: https://www.airbnb.com");
        for (call, stage) in calls.iter().zip(Stage::ALL) {
            assert_eq!(call.instruction, stage.role().instruction());
        }
    }

    #[tokio::test]
    async fn test_failure_is_forwarded_under_propagate() {
        let generator = Arc::new(ScriptedGenerator::new([
            Ok("conceito"),
            Err("cota esgotada"),
            Ok("back"),
            Ok("rascunho"),
            Ok("final"),
        ]));
        let flow = flow_with(generator.clone(), FailurePolicy::Propagate);

        let ctx = flow.run("https://example.com").await.unwrap();

        assert!(ctx.is_complete());
        assert_eq!(ctx.failed_stages(), vec![Stage::FrontendSpec]);
        let backend_ctx = ctx.record(Stage::BackendSpec).unwrap().context.clone().unwrap();
        assert!(backend_ctx.starts_with("Erro: Não foi possível completar a tarefa."));
        assert!(backend_ctx.contains("cota esgotada"));
        assert_eq!(generator.calls().len(), 5);
    }

    #[tokio::test]
    async fn test_abort_reports_originating_stage() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("conceito"), Err("cota esgotada")]));
        let flow = flow_with(generator.clone(), FailurePolicy::Abort);

        let err = flow.run("https://example.com").await.unwrap_err();

        match err {
            PipelineError::StageFailed { stage, reason } => {
                assert_eq!(stage, Stage::FrontendSpec);
                assert!(reason.contains("cota esgotada"));
            }
            other => panic!("erro inesperado: {:?}", other),
        }
        assert_eq!(generator.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_observer_sees_every_stage_in_order() {
        let generator = Arc::new(ScriptedGenerator::new(OUTPUTS.map(Ok)));
        let flow = flow_with(generator, FailurePolicy::Propagate);

        let mut seen = Vec::new();
        flow.run_with("https://example.com", |record| seen.push(record.stage))
            .await
            .unwrap();

        assert_eq!(seen, Stage::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_missing_agent_is_reported() {
        let registry = Arc::new(AgentRegistry::with_roles(
            Arc::new(ScriptedGenerator::default()),
            &[Role::BusinessAnalyst],
        ));
        let flow = ActivityFlow::new(registry, FlowSettings::default());

        let err = flow.run("https://example.com").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::AgentNotRegistered { role: Role::UiUxEngineer }
        ));
    }

    #[tokio::test]
    async fn test_random_url_uses_explorer_without_context() {
        let generator = Arc::new(ScriptedGenerator::new([Ok(
            "https://www.khanacademy.org. Ótimo para aprender programação.",
        )]));
        let flow = flow_with(generator.clone(), FailurePolicy::Propagate);

        let url = flow.pick_random_url().await.unwrap();

        assert_eq!(url, "https://www.khanacademy.org");
        let calls = generator.calls();
        assert_eq!(calls[0].prompt, "TAREFA: Escolha uma URL aleatória.");
        assert_eq!(calls[0].instruction, Role::RandomExplorer.instruction());
    }

    #[tokio::test]
    async fn test_explorer_failure_under_abort() {
        let generator = Arc::new(ScriptedGenerator::new([Err("rede indisponível")]));
        let flow = flow_with(generator, FailurePolicy::Abort);

        assert!(matches!(
            flow.pick_random_url().await,
            Err(PipelineError::ExplorerFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_extras_use_concept_and_final_activity() {
        let generator = Arc::new(ScriptedGenerator::new(OUTPUTS.map(Ok)));
        let flow = flow_with(generator.clone(), FailurePolicy::Propagate);
        let ctx = flow.run("https://example.com").await.unwrap();

        let extras = flow.run_extras(&ctx).await.unwrap();

        let roles: Vec<Role> = extras.iter().map(|extra| extra.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::FullStackTechnologies,
                Role::PracticalExamples,
                Role::TechCuriosities,
                Role::CareerTips,
                Role::AutomatedTests,
            ]
        );
        let calls = generator.calls();
        assert!(!calls[5].prompt.contains("---"));
        assert!(calls[6].prompt.contains("---\nconceito\n---"));
        assert!(calls[8].prompt.contains("---\nfinal\n---"));
    }

    #[test]
    fn test_extract_url() {
        assert_eq!(
            extract_url("Escolhi https://developer.mozilla.org/pt-BR/, ótimo site!"),
            "https://developer.mozilla.org/pt-BR/"
        );
        assert_eq!(extract_url("**https://github.com**"), "https://github.com");
        assert_eq!(extract_url("  www.wikipedia.org \n"), "www.wikipedia.org");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_only_between_stages() {
        let generator = Arc::new(ScriptedGenerator::new(OUTPUTS.map(Ok)));
        let flow = ActivityFlow::new(
            Arc::new(AgentRegistry::new(generator.clone())),
            FlowSettings {
                stage_pause: Duration::from_secs(10),
                failure_policy: FailurePolicy::Propagate,
            },
        );

        let started = tokio::time::Instant::now();
        let ctx = flow.run("https://example.com").await.unwrap();
        let elapsed = started.elapsed();

        assert!(ctx.is_complete());
        assert_eq!(generator.calls().len(), 5);
        // 4 次停顿，最后一个阶段之后不再等待
        assert!(elapsed >= Duration::from_secs(40), "elapsed: {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(50), "elapsed: {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_pause_never_sleeps() {
        let flow = flow_with(Arc::new(ScriptedGenerator::default()), FailurePolicy::Propagate);

        let started = tokio::time::Instant::now();
        flow.run("https://example.com").await.unwrap();

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("Abort".parse::<FailurePolicy>().unwrap(), FailurePolicy::Abort);
        assert_eq!("propagar".parse::<FailurePolicy>().unwrap(), FailurePolicy::Propagate);
        assert!("ignorar".parse::<FailurePolicy>().is_err());
    }
}
