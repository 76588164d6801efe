pub mod activity_flow;
pub mod pipeline_ctx;
pub mod stage;

pub use activity_flow::{extract_url, ActivityFlow, FailurePolicy, FlowSettings};
pub use pipeline_ctx::{ExtraRecord, PipelineContext, StageRecord};
pub use stage::{challenge_context, Stage};
