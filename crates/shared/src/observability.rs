//! # Observability 基盤
//!
//! subscriber の登録と、サービス全体を包むルートスパンの作成を行う。
//!
//! フィルタの既定値 [`DEFAULT_FILTER`] の `todo=debug` はターゲットの前方一致で
//! `todo_service` / `todo_infra` / `todo_domain` のすべてに効く。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,todo=debug";

/// ログ出力形式（`LOG_FORMAT`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 前後の空白と大文字小文字は無視する。知らない値は `None`。
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }

    /// 環境変数 `LOG_FORMAT` から決める
    ///
    /// subscriber の登録前に呼ばれるため、不正値の警告は stderr に出す。
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var("LOG_FORMAT") else {
            return Self::default();
        };
        Self::from_name(&raw).unwrap_or_else(|| {
            eprintln!("WARNING: unknown LOG_FORMAT={raw:?}, falling back to pretty");
            Self::default()
        })
    }
}

/// subscriber を登録し、サービス名付きのルートスパンに入る
///
/// 戻り値のガードを保持している間、以降のログはすべて
/// `app{service=<service>}` スパンの中に記録される。
///
/// `tracing_error::ErrorLayer` も登録するので、インフラ層のエラーは
/// 生成時のスパン経路（`SpanTrace`）を持つ。
#[cfg(feature = "observability")]
pub fn init_tracing(service: &'static str, format: LogFormat) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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
        .with(filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::info_span!("app", service).entered()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_log_formatは大文字小文字と前後の空白を無視する() {
        assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name(" JSON\n"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name("Pretty"), Some(LogFormat::Pretty));
    }

    #[test]
    fn test_log_formatは知らない値を受け付けない() {
        assert_eq!(LogFormat::from_name("yaml"), None);
        assert_eq!(LogFormat::from_name(""), None);
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_既定フィルタはdebugまで通す() {
        use tracing_subscriber::{EnvFilter, Layer, Registry, filter::LevelFilter};

        let filter: EnvFilter = DEFAULT_FILTER.parse().unwrap();

        assert_eq!(
            Layer::<Registry>::max_level_hint(&filter),
            Some(LevelFilter::DEBUG)
        );
    }
}
