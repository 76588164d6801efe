//! Agent 层
//!
//! - `role` - 角色枚举与展示名称
//! - `prompts` - 各角色的固定系统指令
//! - `agent` - 单个 agent 的调用与提示词构建
//! - `registry` - 启动时构建的只读注册表

pub mod agent;
pub mod prompts;
pub mod registry;
pub mod role;

pub use agent::{build_prompt, failure_text, Agent, AgentOutcome};
pub use registry::AgentRegistry;
pub use role::Role;
