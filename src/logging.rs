//! 日誌初始化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設日誌過濾：模型 crate 輸出 info，verbose 時輸出 debug
fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "or_core=debug,or_calc=debug,or_optimizer=debug,or_session=debug,info"
    } else {
        "or_core=info,or_calc=info,or_optimizer=info,or_session=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// 初始化終端機日誌（`RUST_LOG` 優先）
///
/// 重複呼叫時保留第一次的設定。
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();
}
