/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description: 봉 시계열에서 파생 지표 열을 계산하는 순수 함수 모음
**/
pub mod change;
pub mod moving_averages;
pub mod trend;
pub mod utils;

pub use change::*;
pub use moving_averages::*;
pub use trend::*;
pub use utils::*;

use serde::{Deserialize, Serialize};
use crate::error::AlertError;
use crate::models::market_data::Bar;

/// 지표 계산 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
  pub fast_span: usize,
  pub slow_span: usize,
  pub macd_signal_span: usize,
  pub ema_fast_span: usize,
  pub ema_slow_span: usize,
  pub rolling_window: usize,
}

impl Default for IndicatorParams {
  fn default() -> Self {
    IndicatorParams {
      fast_span: 12,
      slow_span: 26,
      macd_signal_span: 9,
      ema_fast_span: 5,
      ema_slow_span: 10,
      rolling_window: 5,
    }
  }
}

impl IndicatorParams {
  pub fn validate(&self) -> Result<(), AlertError> {
    let spans = [
      ("fast_span", self.fast_span),
      ("slow_span", self.slow_span),
      ("macd_signal_span", self.macd_signal_span),
      ("ema_fast_span", self.ema_fast_span),
      ("ema_slow_span", self.ema_slow_span),
    ];

    for (name, span) in spans {
      if span == 0 {
        return Err(AlertError::ConfigError(format!("{} must be > 0, got {}", name, span)));
      }
    }

    if self.rolling_window < 2 {
      return Err(AlertError::ConfigError(format!(
        "rolling_window must be >= 2, got {}",
        self.rolling_window
      )));
    }

    Ok(())
  }
}

/// 원본 봉 + 같은 인덱스의 파생 지표
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBar {
  #[serde(flatten)]
  pub bar: Bar,
  pub price_change_pct: Option<f64>,
  pub volume_change_pct: Option<f64>,
  pub rolling_avg_price_change_pct: Option<f64>,
  pub rolling_avg_volume: Option<f64>,
  // 최근 평균 대비 편차
  pub price_change_deviation_pct: Option<f64>,
  pub volume_deviation_pct: Option<f64>,
  pub macd_line: f64,
  pub macd_signal_line: f64,
  pub macd_histogram: f64,
  pub ema_fast: f64,
  pub ema_slow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSeries {
  pub symbol: String,
  pub params: IndicatorParams,
  pub bars: Vec<EnrichedBar>,
}

impl EnrichedSeries {
  pub fn len(&self) -> usize {
    self.bars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bars.is_empty()
  }

  pub fn last(&self) -> Option<&EnrichedBar> {
    self.bars.last()
  }

  /// (직전 봉, 해당 봉) 쌍. 0번 봉은 직전 봉이 없으므로 None
  pub fn pair_at(&self, index: usize) -> Option<(&EnrichedBar, &EnrichedBar)> {
    if index == 0 || index >= self.bars.len() {
      return None;
    }
    Some((&self.bars[index - 1], &self.bars[index]))
  }
}
