#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gerador_atividades::{
    ActivityFlow, AgentRegistry, FailurePolicy, FlowSettings, LlmError, TextGenerator,
};

/// 一次调用的记录
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub instruction: String,
    pub prompt: String,
}

/// 按顺序返回预设结果的生成器，预设用完后返回 "resposta padrão"
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Result<S, S>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|reply| reply.map(Into::into).map_err(Into::into))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, instruction: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            instruction: instruction.to_string(),
            prompt: prompt.to_string(),
        });
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("resposta padrão".to_string()));
        reply.map_err(|reason| {
            LlmError::api_failed(
                "roteiro",
                std::io::Error::new(std::io::ErrorKind::Other, reason),
            )
        })
    }
}

pub fn flow(generator: Arc<ScriptedGenerator>, policy: FailurePolicy) -> ActivityFlow {
    ActivityFlow::new(
        Arc::new(AgentRegistry::new(generator)),
        FlowSettings {
            stage_pause: std::time::Duration::ZERO,
            failure_policy: policy,
        },
    )
}

pub const FIVE_STAGES: [&str; 5] = ["conceito", "front", "back", "rascunho", "atividade final"];

pub fn five_ok() -> Vec<Result<&'static str, &'static str>> {
    FIVE_STAGES.iter().map(|text| Ok(*text)).collect()
}
