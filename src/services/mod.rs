pub mod generator;
pub mod llm_service;

pub use generator::TextGenerator;
pub use llm_service::LlmService;
