use clap::Parser;
use rdutil::config::cli::{open_input, write_output};
use rdutil::core::ConfigProvider;
use rdutil::utils::{logger, validation::Validate};
use rdutil::{CliConfig, FoldEngine, TomlConfig};

fn run<C: ConfigProvider>(config: C, input: Option<&str>) -> anyhow::Result<()> {
    let format = config.output_format();
    let output_path = config.output_path().map(str::to_owned);

    let mut engine = FoldEngine::new(config);
    let report = engine.run(open_input(input)?)?;
    let rendered = engine.render(&report, format)?;

    write_output(output_path.as_deref(), &rendered)?;
    if let Some(path) = &output_path {
        tracing::info!("📁 Output saved to: {}", path);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先載入設定檔，日誌設定才能生效
    let file_config = match &cli.config {
        Some(path) => {
            let mut config = TomlConfig::from_file(path)?;
            config.apply_overrides(&cli);
            Some(config)
        }
        None => None,
    };

    // --verbose 已在 apply_overrides 中寫入設定檔的 logging.level
    let (level, json_logs) = match &file_config {
        Some(config) => (
            logger::resolve_level(Some(config.log_level()), false),
            config.json_logs(),
        ),
        None => (logger::resolve_level(None, cli.verbose), cli.json_logs),
    };
    if json_logs {
        logger::init_json_logger(&level);
    } else {
        logger::init_cli_logger(&level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let input = cli.input.clone();
    match file_config {
        Some(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                std::process::exit(1);
            }
            tracing::debug!("File config: {:?}", config);
            run(config, input.as_deref())
        }
        None => run(cli, input.as_deref()),
    }
}
