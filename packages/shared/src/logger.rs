//! Logging setup utilities for the Tactoe binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LIBRARY_TARGET: &str = "tactoe_server";

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// The server library crate, the binary and `tower_http` request traces all
/// log at `default_log_level`. A binary whose target matches the library
/// crate gets a single directive.
pub fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary = binary_name.replace('-', "_");
    let mut targets = vec![LIBRARY_TARGET];
    if binary != LIBRARY_TARGET {
        targets.push(&binary);
    }
    targets.push("tower_http");
    targets
        .iter()
        .map(|target| format!("{target}={default_log_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "tactoe-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use tactoe_shared::logger::setup_logger;
///
/// setup_logger("tactoe-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_skips_binary_matching_library() {
        // テスト項目: ライブラリと同じ名前のバイナリでは指定が重複しない
        // given (前提条件):
        let binary_name = "tactoe-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(filter, "tactoe_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_filter_normalizes_binary_name() {
        // テスト項目: 別名のバイナリはハイフンをアンダースコアに変換して追加される
        // given (前提条件):
        let binary_name = "tactoe-admin";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert_eq!(
            filter,
            "tactoe_server=info,tactoe_admin=info,tower_http=info"
        );
    }

    #[test]
    fn test_default_filter_is_a_valid_env_filter() {
        // テスト項目: 生成したフィルタ文字列が EnvFilter として解釈できる
        // given (前提条件):
        let filter = default_filter("server", "warn");

        // when (操作):
        let parsed = tracing_subscriber::EnvFilter::try_new(&filter);

        // then (期待する結果):
        assert!(parsed.is_ok());
    }
}
