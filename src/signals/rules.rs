/**
* filename : rules
* author : HAMA
* date: 2025. 6. 2.
* description: 규칙별 판정 함수. 모두 (직전 봉, 현재 봉)만 본다
**/

use crate::indicators::EnrichedBar;
use super::signal_types::{SignalRule, Thresholds};

/// 추세 + 거래량% 규칙의 고정 거래량 변화율 기준
pub const TREND_VOLUME_PCT_THRESHOLD: f64 = 15.0;

pub fn volatility_spike(cur: &EnrichedBar, thresholds: &Thresholds) -> bool {
  match (cur.price_change_pct, cur.volume_change_pct) {
    (Some(price), Some(volume)) => thresholds.exceeded_by(price, volume),
    _ => false,
  }
}

pub fn gap_up(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.bar.low > prev.bar.high
}

pub fn gap_down(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.bar.high < prev.bar.low
}

// 0 경계는 비대칭: 현재 값이 정확히 0이면 매도 쪽으로만 판정
pub fn macd_cross_up(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.macd_line > 0.0 && prev.macd_line <= 0.0
}

pub fn macd_cross_down(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.macd_line <= 0.0 && prev.macd_line > 0.0
}

pub fn ema_cross_up(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.ema_fast > cur.ema_slow && prev.ema_fast <= prev.ema_slow && volume_rising(prev, cur)
}

pub fn ema_cross_down(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.ema_fast < cur.ema_slow && prev.ema_fast >= prev.ema_slow && volume_rising(prev, cur)
}

pub fn trend_up(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.bar.high > prev.bar.high && cur.bar.low > prev.bar.low && cur.bar.close > prev.bar.close
}

pub fn trend_down(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.bar.high < prev.bar.high && cur.bar.low < prev.bar.low && cur.bar.close < prev.bar.close
}

fn volume_rising(prev: &EnrichedBar, cur: &EnrichedBar) -> bool {
  cur.bar.volume > prev.bar.volume
}

// 이동평균 거래량이 아직 없으면 false
fn volume_above_average(cur: &EnrichedBar) -> bool {
  cur.rolling_avg_volume.is_some_and(|avg| cur.bar.volume > avg)
}

fn volume_pct_confirmed(cur: &EnrichedBar) -> bool {
  cur.volume_change_pct.is_some_and(|pct| pct > TREND_VOLUME_PCT_THRESHOLD)
}

impl SignalRule {
  pub fn evaluate(&self, prev: &EnrichedBar, cur: &EnrichedBar, thresholds: &Thresholds) -> bool {
    match self {
      SignalRule::VolatilitySpike => volatility_spike(cur, thresholds),
      SignalRule::GapUp => gap_up(prev, cur),
      SignalRule::GapDown => gap_down(prev, cur),
      SignalRule::MacdBuy => macd_cross_up(prev, cur),
      SignalRule::MacdSell => macd_cross_down(prev, cur),
      SignalRule::EmaBuy => ema_cross_up(prev, cur),
      SignalRule::EmaSell => ema_cross_down(prev, cur),
      SignalRule::TrendBuy => trend_up(prev, cur),
      SignalRule::TrendSell => trend_down(prev, cur),
      SignalRule::TrendBuyVolume => trend_up(prev, cur) && volume_above_average(cur),
      SignalRule::TrendSellVolume => trend_down(prev, cur) && volume_above_average(cur),
      SignalRule::TrendBuyVolumePct => trend_up(prev, cur) && volume_pct_confirmed(cur),
      SignalRule::TrendSellVolumePct => trend_down(prev, cur) && volume_pct_confirmed(cur),
    }
  }
}
