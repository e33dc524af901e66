use clap::Parser;
use pets_list::utils::logger;
use pets_list::{CliConfig, Script, ScriptEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdout = std::io::stdout().lock();
    let mut engine = ScriptEngine::new(Script::demo(), stdout);

    if let Err(e) = engine.run() {
        tracing::error!("❌ Script failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
