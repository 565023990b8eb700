/**
* filename : signal_analyzer
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use serde::Serialize;
use crate::error::AlertError;
use crate::indicators::{EnrichedBar, EnrichedSeries};
use super::signal_types::{SignalFlags, SignalRule, Thresholds};

/// 태그 문자열이 붙은 봉
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedBar {
  #[serde(flatten)]
  pub bar: EnrichedBar,
  pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSeries {
  pub symbol: String,
  pub bars: Vec<AnnotatedBar>,
}

impl AnnotatedSeries {
  /// 최근 n개 봉 (표시용)
  pub fn tail(&self, n: usize) -> &[AnnotatedBar] {
    let start = self.bars.len().saturating_sub(n);
    &self.bars[start..]
  }
}

pub struct SignalEvaluator {
  thresholds: Thresholds,
}

impl SignalEvaluator {
  pub fn new(thresholds: Thresholds) -> Result<Self, AlertError> {
    thresholds.validate()?;
    Ok(SignalEvaluator { thresholds })
  }

  pub fn thresholds(&self) -> &Thresholds {
    &self.thresholds
  }

  // 특정 봉의 규칙 판정. 직전 봉이 없으면 모두 false
  pub fn flags_at(&self, series: &EnrichedSeries, index: usize) -> SignalFlags {
    match series.pair_at(index) {
      Some((prev, cur)) => SignalFlags::from_fn(|rule: SignalRule| rule.evaluate(prev, cur, &self.thresholds)),
      None => SignalFlags::default(),
    }
  }

  /// 모든 봉에 태그 문자열을 붙인다
  pub fn annotate(&self, series: &EnrichedSeries) -> AnnotatedSeries {
    let bars = series
      .bars
      .iter()
      .enumerate()
      .map(|(index, bar)| AnnotatedBar {
        bar: bar.clone(),
        tags: self.flags_at(series, index).tags(),
      })
      .collect();

    AnnotatedSeries {
      symbol: series.symbol.clone(),
      bars,
    }
  }

  /// 마지막 봉만 판정
  pub fn evaluate_latest(&self, series: &EnrichedSeries) -> SignalFlags {
    if series.len() < 2 {
      return SignalFlags::default();
    }

    let flags = self.flags_at(series, series.len() - 1);
    log::debug!("최신 봉 신호: {} - [{}]", series.symbol, flags.tags());
    flags
  }
}
