//! 주가 이상 변동 감시 라이브러리
//!
//! OHLCV 봉 시계열에서 지표를 계산하고, 규칙 기반 신호를 판정해 알림 여부를 결정합니다.

pub mod alerts;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod models;
pub mod signals;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::AlertError;
pub use crate::models::market_data::{Bar, RawBar};
pub use crate::models::series::Series;
pub use crate::indicators::{compute_indicators, EnrichedBar, EnrichedSeries, IndicatorParams};
pub use crate::signals::{SignalEvaluator, SignalFlags, SignalRule, Thresholds};
pub use crate::alerts::{AlertAggregator, AlertDecision, LatestChange, Notification, Notifier};
pub use crate::core::{EvaluationReport, Monitor, SignalEngine};

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, AlertError>;
