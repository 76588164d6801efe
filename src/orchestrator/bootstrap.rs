//! 启动装配
//!
//! 两个入口（终端 / HTTP）共用：配置 → LLM 服务 → 注册表 → 流程。

use std::sync::Arc;
use std::time::Duration;

use crate::agents::AgentRegistry;
use crate::config::Config;
use crate::services::{LlmService, TextGenerator};
use crate::workflow::{ActivityFlow, FlowSettings};

/// 构建只读注册表
pub fn build_registry(config: &Config) -> Arc<AgentRegistry> {
    let generator: Arc<dyn TextGenerator> = Arc::new(LlmService::new(config));
    Arc::new(AgentRegistry::new(generator))
}

/// 终端模式：阶段之间按配置停顿
pub fn console_settings(config: &Config) -> FlowSettings {
    FlowSettings {
        stage_pause: config.stage_pause(),
        failure_policy: config.failure_policy,
    }
}

/// HTTP 模式：阶段之间不停顿
pub fn http_settings(config: &Config) -> FlowSettings {
    FlowSettings {
        stage_pause: Duration::ZERO,
        failure_policy: config.failure_policy,
    }
}

pub fn console_flow(config: &Config, registry: Arc<AgentRegistry>) -> ActivityFlow {
    ActivityFlow::new(registry, console_settings(config))
}

pub fn http_flow(config: &Config, registry: Arc<AgentRegistry>) -> ActivityFlow {
    ActivityFlow::new(registry, http_settings(config))
}
