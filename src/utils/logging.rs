/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::config::Config;

/// 记录程序启动信息
///
/// 缺少 API key 只告警，不阻止启动。加载配置时被忽略的环境变量也在这里告警，
/// 因为加载配置时日志还没有初始化。
///
/// # 参数
/// - `mode`: 运行模式（终端 / HTTP）
/// - `config`: 当前配置
pub fn log_startup(mode: &str, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", mode);
    info!(
        "🕒 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {} @ {}", config.llm_model_name, config.llm_api_base_url);
    info!("🧭 失败策略: {:?}", config.failure_policy);
    info!("{}", "=".repeat(60));

    for (name, value) in &config.rejected_env {
        warn!("⚠️ 环境变量 {} 的值 '{}' 无法解析，已忽略", name, value);
    }

    if config.has_api_key() {
        info!("✅ Chave de API configurada com sucesso!");
    } else {
        warn!("⚠️ Atenção: Chave de API não encontrada (GOOGLE_API_KEY).");
        warn!("   Defina a variável de ambiente para o programa funcionar.");
    }
}

/// 记录流程完成信息
///
/// # 参数
/// - `seed_url`: 起始网址
/// - `failed`: 失败阶段数
pub fn log_flow_complete(seed_url: &str, failed: usize) {
    info!("{}", "─".repeat(60));
    info!("📊 流程完成: {}", truncate_text(seed_url, 80));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if failed > 0 {
        warn!("❌ 失败阶段: {}", failed);
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
