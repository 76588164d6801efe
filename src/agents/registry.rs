use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::agents::{Agent, Role};
use crate::error::PipelineError;
use crate::services::TextGenerator;

/// Agent 注册表
///
/// 启动时构建一次，之后只读，通过 `Arc` 共享给流程层和 HTTP 请求。
#[derive(Debug)]
pub struct AgentRegistry {
    agents: HashMap<Role, Agent>,
}

impl AgentRegistry {
    /// 注册全部角色
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_roles(generator, &Role::ALL)
    }

    /// 只注册指定角色
    pub fn with_roles(generator: Arc<dyn TextGenerator>, roles: &[Role]) -> Self {
        info!("{}", "=".repeat(80));
        info!("INICIANDO A FÁBRICA DE AGENTES...");

        let agents: HashMap<Role, Agent> = roles
            .iter()
            .map(|&role| {
                debug!("🤖 Agente '{}' contratado e pronto para o trabalho!", role);
                (role, Agent::new(role, generator.clone()))
            })
            .collect();

        info!("FÁBRICA CONCLUÍDA: {} agentes contratados.", agents.len());
        info!("{}", "=".repeat(80));

        Self { agents }
    }

    pub fn get(&self, role: Role) -> Option<&Agent> {
        self.agents.get(&role)
    }

    /// 获取 agent，不存在时返回错误
    pub fn require(&self, role: Role) -> Result<&Agent, PipelineError> {
        self.get(role)
            .ok_or(PipelineError::AgentNotRegistered { role })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// 已注册角色，按固定顺序
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.agents.contains_key(role))
            .collect()
    }
}
