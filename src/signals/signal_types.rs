/**
* filename : signal_types
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use serde::{Deserialize, Serialize};
use crate::error::AlertError;

/// 봉 단위 규칙. 선언 순서가 태그/메시지 출력 순서다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalRule {
  VolatilitySpike,     // 가격/거래량 동시 급변
  GapUp,               // 현재 저가 > 직전 고가
  GapDown,             // 현재 고가 < 직전 저가
  MacdBuy,
  MacdSell,
  EmaBuy,
  EmaSell,
  TrendBuy,
  TrendSell,
  TrendBuyVolume,      // 추세 + 거래량 > 이동평균 거래량
  TrendSellVolume,
  TrendBuyVolumePct,   // 추세 + 거래량 변화율 > 15%
  TrendSellVolumePct,
}

impl SignalRule {
  pub const ALL: [SignalRule; 13] = [
    SignalRule::VolatilitySpike,
    SignalRule::GapUp,
    SignalRule::GapDown,
    SignalRule::MacdBuy,
    SignalRule::MacdSell,
    SignalRule::EmaBuy,
    SignalRule::EmaSell,
    SignalRule::TrendBuy,
    SignalRule::TrendSell,
    SignalRule::TrendBuyVolume,
    SignalRule::TrendSellVolume,
    SignalRule::TrendBuyVolumePct,
    SignalRule::TrendSellVolumePct,
  ];

  /// 과거 봉 표시에 쓰는 짧은 태그
  pub fn tag(&self) -> &'static str {
    match self {
      SignalRule::VolatilitySpike => "volume-price",
      SignalRule::GapUp => "low>high",
      SignalRule::GapDown => "high<low",
      SignalRule::MacdBuy => "macd-buy",
      SignalRule::MacdSell => "macd-sell",
      SignalRule::EmaBuy => "ema-buy",
      SignalRule::EmaSell => "ema-sell",
      SignalRule::TrendBuy => "trend-buy",
      SignalRule::TrendSell => "trend-sell",
      SignalRule::TrendBuyVolume => "trend-buy-vol",
      SignalRule::TrendSellVolume => "trend-sell-vol",
      SignalRule::TrendBuyVolumePct => "trend-buy-volpct",
      SignalRule::TrendSellVolumePct => "trend-sell-volpct",
    }
  }

  /// 알림 메시지에 붙는 설명 문구
  pub fn clause(&self) -> &'static str {
    match self {
      SignalRule::VolatilitySpike => "price and volume change both beyond thresholds",
      SignalRule::GapUp => "current low above previous high",
      SignalRule::GapDown => "current high below previous low",
      SignalRule::MacdBuy => "MACD buy signal (MACD line turned positive)",
      SignalRule::MacdSell => "MACD sell signal (MACD line turned non-positive)",
      SignalRule::EmaBuy => "EMA buy signal (fast EMA crossed above slow EMA on rising volume)",
      SignalRule::EmaSell => "EMA sell signal (fast EMA crossed below slow EMA on rising volume)",
      SignalRule::TrendBuy => "price trend buy signal (high, low and close all rose)",
      SignalRule::TrendSell => "price trend sell signal (high, low and close all fell)",
      SignalRule::TrendBuyVolume => {
        "price trend buy signal (volume) (high, low and close all rose on above-average volume)"
      }
      SignalRule::TrendSellVolume => {
        "price trend sell signal (volume) (high, low and close all fell on above-average volume)"
      }
      SignalRule::TrendBuyVolumePct => {
        "price trend buy signal (volume %) (high, low and close all rose with volume change > 15%)"
      }
      SignalRule::TrendSellVolumePct => {
        "price trend sell signal (volume %) (high, low and close all fell with volume change > 15%)"
      }
    }
  }

  pub fn is_buy(&self) -> bool {
    matches!(
      self,
      SignalRule::GapUp
        | SignalRule::MacdBuy
        | SignalRule::EmaBuy
        | SignalRule::TrendBuy
        | SignalRule::TrendBuyVolume
        | SignalRule::TrendBuyVolumePct
    )
  }

  pub fn is_sell(&self) -> bool {
    matches!(
      self,
      SignalRule::GapDown
        | SignalRule::MacdSell
        | SignalRule::EmaSell
        | SignalRule::TrendSell
        | SignalRule::TrendSellVolume
        | SignalRule::TrendSellVolumePct
    )
  }
}

/// 가격/거래량 급변 임계값 (%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
  pub price_threshold_pct: f64,
  pub volume_threshold_pct: f64,
}

impl Default for Thresholds {
  fn default() -> Self {
    Thresholds {
      price_threshold_pct: 2.0,
      volume_threshold_pct: 50.0,
    }
  }
}

impl Thresholds {
  pub fn validate(&self) -> Result<(), AlertError> {
    for (name, value) in [
      ("price_threshold_pct", self.price_threshold_pct),
      ("volume_threshold_pct", self.volume_threshold_pct),
    ] {
      if !value.is_finite() || value <= 0.0 {
        return Err(AlertError::ConfigError(format!("{} must be > 0, got {}", name, value)));
      }
    }
    Ok(())
  }

  /// 두 변화율이 모두 임계값 이상인지
  pub fn exceeded_by(&self, price_pct: f64, volume_pct: f64) -> bool {
    price_pct.abs() >= self.price_threshold_pct && volume_pct.abs() >= self.volume_threshold_pct
  }
}

/// 한 봉에 대한 규칙별 발생 여부
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalFlags {
  pub volatility_spike: bool,
  pub gap_up: bool,
  pub gap_down: bool,
  pub macd_buy: bool,
  pub macd_sell: bool,
  pub ema_buy: bool,
  pub ema_sell: bool,
  pub trend_buy: bool,
  pub trend_sell: bool,
  pub trend_buy_volume: bool,
  pub trend_sell_volume: bool,
  pub trend_buy_volume_pct: bool,
  pub trend_sell_volume_pct: bool,
}

impl SignalFlags {
  pub fn from_fn(mut f: impl FnMut(SignalRule) -> bool) -> Self {
    let mut flags = SignalFlags::default();
    for rule in SignalRule::ALL {
      flags.set(rule, f(rule));
    }
    flags
  }

  pub fn get(&self, rule: SignalRule) -> bool {
    match rule {
      SignalRule::VolatilitySpike => self.volatility_spike,
      SignalRule::GapUp => self.gap_up,
      SignalRule::GapDown => self.gap_down,
      SignalRule::MacdBuy => self.macd_buy,
      SignalRule::MacdSell => self.macd_sell,
      SignalRule::EmaBuy => self.ema_buy,
      SignalRule::EmaSell => self.ema_sell,
      SignalRule::TrendBuy => self.trend_buy,
      SignalRule::TrendSell => self.trend_sell,
      SignalRule::TrendBuyVolume => self.trend_buy_volume,
      SignalRule::TrendSellVolume => self.trend_sell_volume,
      SignalRule::TrendBuyVolumePct => self.trend_buy_volume_pct,
      SignalRule::TrendSellVolumePct => self.trend_sell_volume_pct,
    }
  }

  pub fn set(&mut self, rule: SignalRule, value: bool) {
    let slot = match rule {
      SignalRule::VolatilitySpike => &mut self.volatility_spike,
      SignalRule::GapUp => &mut self.gap_up,
      SignalRule::GapDown => &mut self.gap_down,
      SignalRule::MacdBuy => &mut self.macd_buy,
      SignalRule::MacdSell => &mut self.macd_sell,
      SignalRule::EmaBuy => &mut self.ema_buy,
      SignalRule::EmaSell => &mut self.ema_sell,
      SignalRule::TrendBuy => &mut self.trend_buy,
      SignalRule::TrendSell => &mut self.trend_sell,
      SignalRule::TrendBuyVolume => &mut self.trend_buy_volume,
      SignalRule::TrendSellVolume => &mut self.trend_sell_volume,
      SignalRule::TrendBuyVolumePct => &mut self.trend_buy_volume_pct,
      SignalRule::TrendSellVolumePct => &mut self.trend_sell_volume_pct,
    };
    *slot = value;
  }

  pub fn any(&self) -> bool {
    SignalRule::ALL.iter().any(|rule| self.get(*rule))
  }

  /// 발생한 규칙 (고정 순서)
  pub fn fired(&self) -> Vec<SignalRule> {
    SignalRule::ALL.into_iter().filter(|rule| self.get(*rule)).collect()
  }

  /// 발생한 태그를 ", "로 연결. 아무것도 없으면 빈 문자열
  pub fn tags(&self) -> String {
    self.fired().iter().map(|rule| rule.tag()).collect::<Vec<_>>().join(", ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rule_order_and_tags_unique() {
    let tags: Vec<&str> = SignalRule::ALL.iter().map(|r| r.tag()).collect();
    assert_eq!(tags.first(), Some(&"volume-price"));
    assert_eq!(tags.last(), Some(&"trend-sell-volpct"));

    let mut dedup = tags.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), tags.len());
  }

  #[test]
  fn test_flags_get_set_roundtrip() {
    for rule in SignalRule::ALL {
      let mut flags = SignalFlags::default();
      flags.set(rule, true);
      assert_eq!(flags.fired(), vec![rule]);
      assert!(flags.any());
    }
  }

  #[test]
  fn test_tags_follow_fixed_order() {
    let flags = SignalFlags::from_fn(|rule| {
      matches!(rule, SignalRule::TrendBuyVolume | SignalRule::GapUp | SignalRule::TrendBuy)
    });
    assert_eq!(flags.tags(), "low>high, trend-buy, trend-buy-vol");
    assert_eq!(SignalFlags::default().tags(), "");
  }

  #[test]
  fn test_buy_sell_partition() {
    for rule in SignalRule::ALL {
      assert!(!(rule.is_buy() && rule.is_sell()));
    }
    assert!(!SignalRule::VolatilitySpike.is_buy());
    assert!(!SignalRule::VolatilitySpike.is_sell());
  }

  #[test]
  fn test_thresholds_validation() {
    assert!(Thresholds::default().validate().is_ok());
    let zero = Thresholds { price_threshold_pct: 0.0, ..Thresholds::default() };
    assert!(matches!(zero.validate(), Err(AlertError::ConfigError(_))));
    let negative = Thresholds { volume_threshold_pct: -5.0, ..Thresholds::default() };
    assert!(negative.validate().is_err());
  }

  #[test]
  fn test_thresholds_exceeded_by_uses_absolute_values() {
    let th = Thresholds::default();
    assert!(th.exceeded_by(-2.0, -50.0));
    assert!(!th.exceeded_by(1.99, 400.0));
    assert!(!th.exceeded_by(30.0, 49.9));
  }
}
