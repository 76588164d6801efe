use std::collections::BTreeMap;

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::api::AppState;
use crate::utils::logging::log_flow_complete;

/// 缺少网址时的错误信息
pub const MISSING_URL: &str = "URL não fornecida";

/// `extras` 不是布尔值时的错误信息
pub const INVALID_EXTRAS: &str = "Campo 'extras' deve ser booleano";

/// 解析后的请求
///
/// 逐字段读取：`url` 的判定不受其他字段影响。
#[derive(Debug, PartialEq)]
pub struct GenerateRequest {
    pub url: String,
    /// 是否附带补充分析
    pub extras: bool,
}

impl GenerateRequest {
    /// 从请求体解析
    ///
    /// 请求体不是 JSON、没有 `url`、`url` 不是字符串或为空，都按缺少网址处理。
    /// `extras` 缺省或为 `null` 时视为 `false`。
    pub fn parse(body: &[u8]) -> Result<Self, &'static str> {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let url = value
            .get("url")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(MISSING_URL)?;

        let extras = match value.get("extras") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(INVALID_EXTRAS),
        };

        Ok(Self {
            url: url.to_string(),
            extras,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub resultado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
}

impl ErrorResponse {
    fn reply(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
        (
            status,
            Json(ErrorResponse {
                erro: message.into(),
            }),
        )
            .into_response()
    }
}

/// `POST /gerar-atividade`
pub async fn generate_activity(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match GenerateRequest::parse(&body) {
        Ok(request) => request,
        Err(message) => return ErrorResponse::reply(StatusCode::BAD_REQUEST, message),
    };

    let ctx = match state.flow.run(&request.url).await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("❌ Erro fatal durante a orquestração: {}", e);
            return ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let Some(resultado) = ctx.final_text() else {
        return ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "A orquestração terminou sem atividade final",
        );
    };

    let extras = if request.extras {
        info!("📚 Executando análises complementares...");
        match state.flow.run_extras(&ctx).await {
            Ok(records) => Some(
                records
                    .into_iter()
                    .map(|record| (record.role.name().to_string(), record.outcome.text()))
                    .collect(),
            ),
            Err(e) => {
                error!("❌ Erro nas análises complementares: {}", e);
                return ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        }
    } else {
        None
    };

    log_flow_complete(ctx.seed_url(), ctx.failed_stages().len());
    (StatusCode::OK, Json(GenerateResponse { resultado, extras })).into_response()
}
