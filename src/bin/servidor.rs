use anyhow::Result;
use gerador_atividades::{api, logger, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(config.verbose_logging);

    api::start_server(config).await?;

    Ok(())
}
