use crate::core::case::to_lower;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rdutil={}", level)))
}

/// 決定日誌等級：`--verbose` 優先，其次是設定檔的 `[logging] level`，預設 info
pub fn resolve_level(configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }

    match configured.map(str::trim) {
        Some(level) if !level.is_empty() => to_lower(level).into_owned(),
        _ => "info".to_string(),
    }
}

pub fn init_cli_logger(level: &str) {
    // stdout 用於輸出結果，日誌寫到 stderr
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON 格式日誌，方便交給日誌收集器
pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
