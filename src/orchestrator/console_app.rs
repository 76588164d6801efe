//! 终端应用 - 编排层
//!
//! ## 职责
//!
//! 1. 询问模式：`manual`（输入网址）或 `aleatorio`（探索者挑选）
//! 2. 运行五阶段流程，每完成一个阶段就打印出来
//! 3. 按配置打印补充分析
//! 4. 兜住编排错误，打印失败信息后正常退出

use std::io::{self, BufRead, Write};

use tracing::{error, info};

use crate::agents::AgentOutcome;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::orchestrator::bootstrap;
use crate::utils::logging::{log_flow_complete, log_startup};
use crate::utils::terminal::{format_for_terminal, rule};
use crate::workflow::{ActivityFlow, ExtraRecord, StageRecord};

/// 随机模式的输入
pub const RANDOM_MODE: &str = "aleatorio";

/// 应用主结构
pub struct App {
    config: Config,
    flow: ActivityFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup("modo terminal", &config);
        let registry = bootstrap::build_registry(&config);
        let flow = bootstrap::console_flow(&config, registry);
        Self { config, flow }
    }

    /// 使用现成的流程创建（测试用生成器）
    pub fn with_flow(config: Config, flow: ActivityFlow) -> Self {
        Self { config, flow }
    }

    /// 在标准输入输出上运行一次会话
    pub async fn run(&self) -> AppResult<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_session(&mut input, &mut output).await
    }

    /// 运行一次会话
    ///
    /// 编排中的任何错误（包括读取输入失败）都只打印，不返回；
    /// 只有失败信息本身写不出去时才返回错误。
    pub async fn run_session<R, W>(&self, input: &mut R, output: &mut W) -> AppResult<()>
    where
        R: BufRead,
        W: Write,
    {
        if let Err(e) = self.orchestrate(input, output).await {
            error!("❌ Erro durante a orquestração: {}", e);
            writeln!(
                output,
                "\n❌ Ocorreu um erro inesperado durante a orquestração: {}",
                e
            )?;
        }
        Ok(())
    }

    async fn orchestrate<R, W>(&self, input: &mut R, output: &mut W) -> AppResult<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "\n--- INICIANDO ORQUESTRADOR DE AGENTES ---")?;
        let choice = ask(
            input,
            output,
            "❓ Deseja informar uma URL ou deixar o agente escolher um site aleatório? (digite 'manual' ou 'aleatorio')",
        )?;
        writeln!(output, "{}", "-".repeat(80))?;

        let seed_url = if choice.to_lowercase() == RANDOM_MODE {
            let url = self.flow.pick_random_url().await?;
            writeln!(output, "\n🌐 URL escolhida pelo agente: {}", url)?;
            url
        } else {
            let url = ask(
                input,
                output,
                "❓ Qual a URL do site que vamos usar como base para a atividade? (ex: https://www.airbnb.com)",
            )?;
            if url.is_empty() {
                writeln!(output, "\n⚠️ URL não fornecida")?;
                return Ok(());
            }
            url
        };

        let mut write_error: Option<io::Error> = None;
        let ctx = self
            .flow
            .run_with(&seed_url, |record| {
                if write_error.is_none() {
                    if let Err(e) = print_stage(output, record) {
                        write_error = Some(e);
                    }
                }
            })
            .await?;
        if let Some(e) = write_error {
            return Err(AppError::Io(e));
        }

        if self.config.include_extras {
            info!("📚 Executando análises complementares...");
            for extra in self.flow.run_extras(&ctx).await? {
                print_extra(output, &extra)?;
            }
        }

        log_flow_complete(ctx.seed_url(), ctx.failed_stages().len());
        Ok(())
    }
}

/// 打印问题并读取一行（去掉首尾空白），输入结束时返回空串
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    writeln!(output, "{}", question)?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_stage<W: Write>(output: &mut W, record: &StageRecord) -> io::Result<()> {
    let body = format_for_terminal(&record.outcome.text());
    if record.stage.is_last() {
        writeln!(output, "\n{}", rule(80))?;
        writeln!(output, "✨🎉 ATIVIDADE FINAL REVISADA (Pronta para os Alunos!) 🎉✨")?;
        writeln!(output, "{}", rule(80))?;
    } else {
        writeln!(output, "\n--- {} {} ---", record.stage.icon(), record.stage.title())?;
    }
    writeln!(output, "{}", body)?;
    output.flush()
}

fn print_extra<W: Write>(output: &mut W, extra: &ExtraRecord) -> io::Result<()> {
    let marker = match extra.outcome {
        AgentOutcome::Generated(_) => "📚",
        AgentOutcome::Failed { .. } => "❌",
    };
    writeln!(output, "\n--- {} {} ---", marker, extra.role.name().to_uppercase())?;
    writeln!(output, "{}", format_for_terminal(&extra.outcome.text()))?;
    output.flush()
}
