//! # ログ出力の初期化
//!
//! `LOG_FORMAT` で JSON / Pretty を切り替え、`RUST_LOG` でフィルタを指定する。
//! インフラ層エラーの `SpanTrace` を取れるよう `ErrorLayer` も登録する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,todo_audit=debug,sqlx=warn";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値から決定する
    ///
    /// 未設定なら Pretty。不正な値は stderr に警告を出して Pretty にする
    /// （subscriber 登録前なので `tracing` は使えない）。
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("pretty") => Self::Pretty,
            Some("json") => Self::Json,
            Some(other) => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_setting(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// グローバル subscriber を登録する
#[cfg(feature = "observability")]
pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_未設定や空文字はprettyになる() {
        assert_eq!(LogFormat::from_setting(None), LogFormat::Pretty);
        assert_eq!(LogFormat::from_setting(Some("")), LogFormat::Pretty);
    }

    #[test]
    fn test_既知の値() {
        assert_eq!(LogFormat::from_setting(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some(" json ")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("pretty")), LogFormat::Pretty);
    }

    #[test]
    fn test_不正な値はprettyにフォールバックする() {
        assert_eq!(LogFormat::from_setting(Some("JSON")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_setting(Some("yaml")), LogFormat::Pretty);
    }
}
