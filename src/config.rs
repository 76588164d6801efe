use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::workflow::FailurePolicy;

/// 默认配置文件名（存在时才读取）
pub const DEFAULT_CONFIG_FILE: &str = "atividades.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    /// 生成服务凭证，缺失时只告警，首次调用时才失败
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    // --- 流程配置 ---
    /// 终端模式下阶段之间的停顿（秒）
    pub stage_pause_secs: u64,
    /// 阶段失败时的处理策略
    pub failure_policy: FailurePolicy,
    /// 终端模式是否在最终活动后运行补充分析
    pub include_extras: bool,
    // --- HTTP 服务配置 ---
    pub server_host: String,
    pub server_port: u16,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 无法解析而被忽略的环境变量（名称, 值），日志初始化后再告警
    #[serde(skip)]
    pub rejected_env: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai/".to_string(),
            llm_model_name: "gemini-1.5-flash".to_string(),
            llm_temperature: 0.7,
            stage_pause_secs: 10,
            failure_policy: FailurePolicy::Propagate,
            include_extras: false,
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            verbose_logging: false,
            rejected_env: Vec::new(),
        }
    }
}

impl Config {
    /// 按 默认值 < TOML 文件 < 环境变量 的顺序加载配置
    ///
    /// 配置文件路径取自 `ATIVIDADES_CONFIG`，未设置时读取当前目录下的
    /// `atividades.toml`（不存在则跳过）。
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(env_lookup)
    }

    /// 同 [`Config::load`]，但变量从 `lookup` 读取
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup("ATIVIDADES_CONFIG") {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(lookup))
    }

    /// 只使用默认值和环境变量
    pub fn from_env() -> Self {
        Self::default().with_overrides(env_lookup)
    }

    /// 从 TOML 文件读取，缺省字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用 `lookup` 读到的变量覆盖当前配置
    ///
    /// 空白的凭证视为未设置：`GOOGLE_API_KEY` 为空时继续看 `LLM_API_KEY`。
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = self.rejected_env;
        let api_key = non_blank(lookup("GOOGLE_API_KEY"))
            .or_else(|| non_blank(lookup("LLM_API_KEY")))
            .or(self.llm_api_key);

        Self {
            llm_api_key: non_blank(api_key),
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            llm_temperature: parse_var(&lookup, "LLM_TEMPERATURE", &mut rejected)
                .unwrap_or(self.llm_temperature),
            stage_pause_secs: parse_var(&lookup, "STAGE_PAUSE_SECS", &mut rejected)
                .unwrap_or(self.stage_pause_secs),
            failure_policy: parse_var(&lookup, "FAILURE_POLICY", &mut rejected)
                .unwrap_or(self.failure_policy),
            include_extras: parse_var(&lookup, "INCLUDE_EXTRAS", &mut rejected)
                .unwrap_or(self.include_extras),
            server_host: lookup("SERVER_HOST").unwrap_or(self.server_host),
            server_port: parse_var(&lookup, "SERVER_PORT", &mut rejected)
                .unwrap_or(self.server_port),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", &mut rejected)
                .unwrap_or(self.verbose_logging),
            rejected_env: rejected,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.llm_api_key.is_some()
    }

    pub fn stage_pause(&self) -> Duration {
        Duration::from_secs(self.stage_pause_secs)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// 解析变量，格式不对时记下来并回退到原值
fn parse_var<T, F>(lookup: &F, name: &str, rejected: &mut Vec<(String, String)>) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            rejected.push((name.to_string(), value));
            None
        }
    }
}
