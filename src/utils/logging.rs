//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::error::AlertError;

/// 로깅 시스템 초기화. RUST_LOG가 있으면 설정값보다 우선한다
pub fn init(default_level: &str) -> Result<(), AlertError> {
    let mut builder = Builder::from_default_env();

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    builder
      .filter_level(parse_level(&log_level))
      .format_timestamp_millis()
      .try_init()
      .map_err(|e| AlertError::ConfigError(format!("Failed to init logger: {}", e)))?;

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 주기 시작 로그
pub fn log_cycle_start(ticker_count: usize) {
    log::info!("감시 주기 시작: 티커 {}개", ticker_count);
}

/// 주기 종료 로그
pub fn log_cycle_end(evaluated: usize, skipped: usize, alerts: usize) {
    log::info!("감시 주기 종료: 평가 {} - 건너뜀 {} - 알림 {}", evaluated, skipped, alerts);
}

/// 알림 발생 로그
pub fn log_alert(message: &str) {
    log::warn!("이상 변동: {}", message);
}

/// 데이터 부족 등으로 티커를 건너뛸 때
pub fn log_ticker_skipped(ticker: &str, error: &AlertError) {
    log::warn!("{} 데이터 없음 또는 부족, 이번 주기 건너뜀: {}", ticker, error);
}

/// 오류 로그
pub fn log_error(context: &str, error: &AlertError) {
    log::error!("오류 발생 - {}: {}", context, error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
