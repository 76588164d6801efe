//! HTTP 接口
//!
//! - `POST /gerar-atividade` - 运行五阶段流程，只返回最终活动
//! - `GET /` - 静态页面

pub mod activity;

use std::sync::Arc;

use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::orchestrator::bootstrap;
use crate::utils::logging::log_startup;
use crate::workflow::ActivityFlow;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<ActivityFlow>,
}

impl AppState {
    pub fn new(flow: ActivityFlow) -> Self {
        Self {
            flow: Arc::new(flow),
        }
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/gerar-atividade", post(activity::generate_activity))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 启动 HTTP 服务
pub async fn start_server(config: Config) -> AppResult<()> {
    log_startup("servidor HTTP", &config);

    let registry = bootstrap::build_registry(&config);
    let state = AppState::new(bootstrap::http_flow(&config, registry));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("🌐 Servidor ouvindo em http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
