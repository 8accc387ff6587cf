use anyhow::Result;
use clap::Parser;
use question_import::cli::Cli;
use question_import::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    App::initialize(config)?.run(cli.command).await?;

    Ok(())
}
