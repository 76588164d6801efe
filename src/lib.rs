//! # Gerador de Atividades
//!
//! 把一个网站 URL 变成给学生的编程练习：五个 LLM agent 依次协作，
//! 每个阶段的输出作为下一阶段的上下文。
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 能力层（Services）
//! - `services/` - 只暴露"生成文本"能力
//! - `TextGenerator` - 唯一的外部依赖接口，测试时可替换
//! - `LlmService` - 基于 async-openai 的实现
//!
//! ### ② Agent 层（Agents）
//! - `agents/` - 角色、固定指令、提示词构建
//! - `AgentRegistry` - 启动时构建一次，之后只读
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个网址"的完整处理流程
//! - `PipelineContext` - 每个阶段的上下文与结果
//! - `ActivityFlow` - 流程编排（概念 → 前端 → 后端 → 草稿 → 审阅）
//!
//! ### ④ 入口层（Orchestration / API）
//! - `orchestrator/console_app` - 终端交互
//! - `api/` - HTTP 接口
//!
//! ## 模块结构

pub mod agents;
pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use agents::{Agent, AgentOutcome, AgentRegistry, Role};
pub use config::Config;
pub use error::{AppError, AppResult, LlmError, PipelineError};
pub use orchestrator::App;
pub use services::{LlmService, TextGenerator};
pub use workflow::{ActivityFlow, FailurePolicy, FlowSettings, PipelineContext, Stage};
