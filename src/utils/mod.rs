//! 시간 관련 유틸리티
//!
//! 타임스탬프 변환, 포맷팅 함수 제공

pub mod logging;

use chrono::{DateTime, TimeZone, Utc};

/// 타임스탬프(밀리초)를 DateTime<Utc>로 변환
pub fn timestamp_to_datetime(timestamp_ms: i64) -> DateTime<Utc> {
  Utc.timestamp_millis_opt(timestamp_ms).single().unwrap_or_default()
}

/// DateTime<Utc>를 타임스탬프(밀리초)로 변환
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp_millis()
}

/// 타임스탬프(밀리초)를 포맷팅된 문자열로 변환
pub fn format_timestamp(timestamp_ms: i64, format: &str) -> String {
  timestamp_to_datetime(timestamp_ms).format(format).to_string()
}

/// 현재 시각 문자열
pub fn now_string() -> String {
  Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
