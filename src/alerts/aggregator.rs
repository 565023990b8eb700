/**
* filename : aggregator
* author : HAMA
* date: 2025. 6. 3.
* description: 최신 봉 신호 + 임계값 비교로 알림 여부와 메시지 결정
**/

use serde::Serialize;
use crate::error::AlertError;
use crate::models::series::Series;
use crate::signals::{SignalFlags, Thresholds};

/// 최신 봉의 가격/거래량 변화 지표
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatestChange {
  pub current_price: f64,
  pub previous_close: f64,
  pub price_change: f64,
  pub price_pct_change: f64,
  pub last_volume: f64,
  pub prev_volume: f64,
  pub volume_change: f64,
  pub volume_pct_change: f64,
}

impl LatestChange {
  /// 기준가는 직전 봉 종가. `previous_close`(시세 제공자의 전일 종가)가 있으면 그 값으로 대체
  pub fn compute(series: &Series, previous_close: Option<f64>) -> Result<Self, AlertError> {
    series.require_len(2)?;

    let bars = series.bars();
    let last = &bars[bars.len() - 1];
    let prev = &bars[bars.len() - 2];

    let current_price = last.close;
    let previous_close = previous_close.filter(|p| p.is_finite()).unwrap_or(prev.close);
    let price_change = current_price - previous_close;
    let volume_change = last.volume - prev.volume;

    Ok(LatestChange {
      current_price,
      previous_close,
      price_change,
      price_pct_change: pct_or_zero(price_change, previous_close),
      last_volume: last.volume,
      prev_volume: prev.volume,
      volume_change,
      volume_pct_change: pct_or_zero(volume_change, prev.volume),
    })
  }
}

// 기준값이 0이면 0%
fn pct_or_zero(delta: f64, base: f64) -> f64 {
  if base != 0.0 { delta / base * 100.0 } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertDecision {
  pub fired: bool,
  pub message: String,
}

impl AlertDecision {
  pub fn quiet() -> Self {
    AlertDecision {
      fired: false,
      message: String::new(),
    }
  }
}

pub struct AlertAggregator {
  thresholds: Thresholds,
}

impl AlertAggregator {
  pub fn new(thresholds: Thresholds) -> Result<Self, AlertError> {
    thresholds.validate()?;
    Ok(AlertAggregator { thresholds })
  }

  /// 임계값 초과 또는 규칙 하나라도 발생하면 알림
  pub fn should_fire(&self, flags: &SignalFlags, change: &LatestChange) -> bool {
    self.thresholds.exceeded_by(change.price_pct_change, change.volume_pct_change) || flags.any()
  }

  pub fn decide(&self, ticker: &str, flags: &SignalFlags, change: &LatestChange) -> AlertDecision {
    if !self.should_fire(flags, change) {
      return AlertDecision::quiet();
    }

    AlertDecision {
      fired: true,
      message: compose_message(ticker, flags, change),
    }
  }
}

/// 티커, 가격%, 거래량% 뒤에 발생한 규칙 문구를 고정 순서로 이어 붙인다
pub fn compose_message(ticker: &str, flags: &SignalFlags, change: &LatestChange) -> String {
  let mut message = format!(
    "{} alert: price {:.2}%, volume {:.2}%",
    ticker, change.price_pct_change, change.volume_pct_change
  );

  for rule in flags.fired() {
    message.push_str(", ");
    message.push_str(rule.clause());
  }

  message
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Bar;
  use crate::signals::SignalRule;

  fn series(closes: &[f64], volumes: &[f64]) -> Series {
    let bars = closes
      .iter()
      .zip(volumes)
      .enumerate()
      .map(|(i, (&c, &v))| Bar::new(i as i64, c, c, c, c, v))
      .collect();
    Series::new("TSLA", bars).unwrap()
  }

  fn change(price_pct: f64, volume_pct: f64) -> LatestChange {
    LatestChange {
      current_price: 100.0,
      previous_close: 100.0,
      price_change: 0.0,
      price_pct_change: price_pct,
      last_volume: 1000.0,
      prev_volume: 1000.0,
      volume_change: 0.0,
      volume_pct_change: volume_pct,
    }
  }

  #[test]
  fn test_latest_change_uses_previous_close() {
    let s = series(&[100.0, 110.0], &[1000.0, 1500.0]);
    let c = LatestChange::compute(&s, Some(88.0)).unwrap();
    assert_eq!(c.price_change, 22.0);
    assert!((c.price_pct_change - 25.0).abs() < 1e-9);
    assert!((c.volume_pct_change - 50.0).abs() < 1e-9);
  }

  #[test]
  fn test_latest_change_falls_back_to_previous_bar_close() {
    let s = series(&[100.0, 110.0], &[0.0, 1500.0]);
    let c = LatestChange::compute(&s, None).unwrap();
    assert_eq!(c.previous_close, 100.0);
    assert_eq!(c.price_change, 10.0);
    assert!((c.price_pct_change - 10.0).abs() < 1e-9);
    // 직전 거래량 0이면 0%
    assert_eq!(c.volume_pct_change, 0.0);
  }

  #[test]
  fn test_latest_change_ignores_non_finite_quote() {
    let s = series(&[100.0, 105.0], &[1000.0, 2000.0]);
    let c = LatestChange::compute(&s, Some(f64::NAN)).unwrap();
    assert_eq!(c.previous_close, 100.0);
    assert!((c.price_pct_change - 5.0).abs() < 1e-9);
    assert!((c.volume_pct_change - 100.0).abs() < 1e-9);
  }

  #[test]
  fn test_latest_change_requires_two_bars() {
    let s = series(&[100.0], &[1000.0]);
    assert!(matches!(
      LatestChange::compute(&s, None),
      Err(AlertError::InsufficientData { required: 2, actual: 1 })
    ));
  }

  #[test]
  fn test_quiet_when_nothing_fires() {
    let agg = AlertAggregator::new(Thresholds::default()).unwrap();
    let decision = agg.decide("TSLA", &SignalFlags::default(), &change(1.0, 10.0));
    assert_eq!(decision, AlertDecision::quiet());
  }

  #[test]
  fn test_threshold_alone_fires() {
    let agg = AlertAggregator::new(Thresholds::default()).unwrap();
    let decision = agg.decide("TSLA", &SignalFlags::default(), &change(-2.5, 60.0));
    assert!(decision.fired);
    assert_eq!(decision.message, "TSLA alert: price -2.50%, volume 60.00%");
  }

  #[test]
  fn test_any_single_flag_fires() {
    let agg = AlertAggregator::new(Thresholds::default()).unwrap();
    for rule in SignalRule::ALL {
      let mut flags = SignalFlags::default();
      flags.set(rule, true);
      let decision = agg.decide("NIO", &flags, &change(0.0, 0.0));
      assert!(decision.fired, "{:?} should fire", rule);
      assert!(decision.message.ends_with(rule.clause()));
    }
  }

  #[test]
  fn test_message_golden_output() {
    let agg = AlertAggregator::new(Thresholds::default()).unwrap();
    let mut flags = SignalFlags::default();
    flags.trend_buy_volume = true;
    flags.macd_buy = true;
    flags.gap_up = true;

    let decision = agg.decide("TSLL", &flags, &change(1.234, -5.0));
    assert_eq!(
      decision.message,
      "TSLL alert: price 1.23%, volume -5.00%, \
       current low above previous high, \
       MACD buy signal (MACD line turned positive), \
       price trend buy signal (volume) (high, low and close all rose on above-average volume)"
    );
  }
}
