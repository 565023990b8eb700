/**
* filename : config
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AlertError;
use crate::indicators::IndicatorParams;
use crate::signals::Thresholds;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub monitor: MonitorConfig,
    pub logging: LoggingConfig,
}

/// 지표/신호 엔진 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fast_span: usize,
    pub slow_span: usize,
    pub macd_signal_span: usize,
    pub ema_fast_span: usize,
    pub ema_slow_span: usize,
    pub rolling_window: usize,
    pub price_threshold_pct: f64,
    pub volume_threshold_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub tickers: Vec<String>,
    pub data_dir: PathBuf,
    pub refresh_interval_secs: u64,
    pub history_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// 기본값 -> 설정 파일(경로를 주면 반드시 있어야 함) -> 환경 변수(ALERT_ENGINE__FAST_SPAN 등) 순으로 덮어쓴다
    pub fn load(path: Option<&Path>) -> Result<Self, AlertError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder
            .add_source(
                config::Environment::with_prefix("ALERT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("monitor.tickers"),
            )
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), AlertError> {
        self.engine.validate()?;
        self.monitor.validate()
    }
}

impl EngineConfig {
    pub fn indicator_params(&self) -> IndicatorParams {
        IndicatorParams {
            fast_span: self.fast_span,
            slow_span: self.slow_span,
            macd_signal_span: self.macd_signal_span,
            ema_fast_span: self.ema_fast_span,
            ema_slow_span: self.ema_slow_span,
            rolling_window: self.rolling_window,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            price_threshold_pct: self.price_threshold_pct,
            volume_threshold_pct: self.volume_threshold_pct,
        }
    }

    pub fn validate(&self) -> Result<(), AlertError> {
        self.indicator_params().validate()?;
        self.thresholds().validate()
    }
}

impl MonitorConfig {
    /// 공백 제거 + 대문자 변환, 빈 항목 제외
    pub fn normalized_tickers(&self) -> Vec<String> {
        normalize_tickers(self.tickers.iter().map(String::as_str))
    }

    pub fn validate(&self) -> Result<(), AlertError> {
        if self.refresh_interval_secs == 0 {
            return Err(AlertError::ConfigError("refresh_interval_secs must be > 0".to_string()));
        }
        Ok(())
    }
}

/// "TSLA, nio,,TSLL" 같은 입력을 티커 목록으로 변환
pub fn parse_tickers(input: &str) -> Vec<String> {
    normalize_tickers(input.split(','))
}

fn normalize_tickers<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        let params = IndicatorParams::default();
        let thresholds = Thresholds::default();
        EngineConfig {
            fast_span: params.fast_span,
            slow_span: params.slow_span,
            macd_signal_span: params.macd_signal_span,
            ema_fast_span: params.ema_fast_span,
            ema_slow_span: params.ema_slow_span,
            rolling_window: params.rolling_window,
            price_threshold_pct: thresholds.price_threshold_pct,
            volume_threshold_pct: thresholds.volume_threshold_pct,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            tickers: vec!["TSLA".to_string(), "NIO".to_string(), "TSLL".to_string()],
            data_dir: PathBuf::from("./data"),
            refresh_interval_secs: 144,
            history_rows: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.engine.fast_span, 12);
        assert_eq!(cfg.engine.slow_span, 26);
        assert_eq!(cfg.engine.macd_signal_span, 9);
        assert_eq!(cfg.engine.ema_fast_span, 5);
        assert_eq!(cfg.engine.ema_slow_span, 10);
        assert_eq!(cfg.engine.rolling_window, 5);
        assert_eq!(cfg.engine.price_threshold_pct, 2.0);
        assert_eq!(cfg.engine.volume_threshold_pct, 50.0);
    }

    #[rstest]
    #[case(EngineConfig { fast_span: 0, ..EngineConfig::default() })]
    #[case(EngineConfig { slow_span: 0, ..EngineConfig::default() })]
    #[case(EngineConfig { macd_signal_span: 0, ..EngineConfig::default() })]
    #[case(EngineConfig { ema_fast_span: 0, ..EngineConfig::default() })]
    #[case(EngineConfig { ema_slow_span: 0, ..EngineConfig::default() })]
    #[case(EngineConfig { rolling_window: 1, ..EngineConfig::default() })]
    #[case(EngineConfig { price_threshold_pct: 0.0, ..EngineConfig::default() })]
    #[case(EngineConfig { volume_threshold_pct: -1.0, ..EngineConfig::default() })]
    #[case(EngineConfig { price_threshold_pct: f64::NAN, ..EngineConfig::default() })]
    fn test_invalid_engine_config(#[case] engine: EngineConfig) {
        assert!(matches!(engine.validate(), Err(AlertError::ConfigError(_))));
    }

    #[test]
    fn test_parse_tickers() {
        assert_eq!(parse_tickers("TSLA, nio,, tsll "), vec!["TSLA", "NIO", "TSLL"]);
        assert!(parse_tickers(" , ").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("xalert-config-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "engine": { "price_threshold_pct": 3.5, "rolling_window": 7 }, "monitor": { "tickers": ["aapl"] } }"#,
        )
        .unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.engine.price_threshold_pct, 3.5);
        assert_eq!(cfg.engine.rolling_window, 7);
        assert_eq!(cfg.engine.fast_span, 12);
        assert_eq!(cfg.monitor.normalized_tickers(), vec!["AAPL"]);
        assert_eq!(cfg.monitor.refresh_interval_secs, 144);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!("xalert-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "engine": { "volume_threshold_pct": 0.0 } }"#).unwrap();

        let result = Config::load(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AlertError::ConfigError(_))));
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let path = std::env::temp_dir().join(format!("xalert-no-such-config-{}.json", std::process::id()));
        std::fs::remove_file(&path).ok();

        assert!(matches!(Config::load(Some(&path)), Err(AlertError::ConfigError(_))));
        assert!(Config::load(None).is_ok());
    }
}
