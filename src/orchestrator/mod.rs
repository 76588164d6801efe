//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把流程接到终端上，并为两个入口装配依赖。
//!
//! ## 模块划分
//!
//! ### `bootstrap` - 启动装配
//! - 配置 → LLM 服务 → 注册表 → 流程
//! - 终端模式带阶段停顿，HTTP 模式不带
//!
//! ### `console_app` - 终端应用
//! - 选择模式（manual / aleatorio）
//! - 逐阶段打印输出
//! - 兜住编排错误，不让进程崩溃
//!
//! ## 层次关系
//!
//! ```text
//! console_app / api (入口)
//!     ↓
//! workflow::ActivityFlow (五阶段流程)
//!     ↓
//! agents (Agent / AgentRegistry)
//!     ↓
//! services (能力层：TextGenerator / LlmService)
//! ```

pub mod bootstrap;
pub mod console_app;

pub use console_app::App;
