use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 標準エラー出力へのログを初期化
///
/// `RUST_LOG` があればそれに従い、なければ `--verbose` でdebug、通常はinfo。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "artwork_picker={0},artwork_picker_common={0}",
            default_level
        ))
    });

    // テストなどで二重に初期化されても落とさない
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
