/**
* filename : engine
* author : HAMA
* date: 2025. 6. 3.
* description: 티커 하나, 주기 하나에 대한 지표 -> 신호 -> 알림 파이프라인
**/

use serde::Serialize;
use crate::alerts::{AlertAggregator, AlertDecision, LatestChange, Notification};
use crate::config::EngineConfig;
use crate::error::AlertError;
use crate::indicators::{compute_indicators, IndicatorParams};
use crate::models::series::Series;
use crate::signals::{AnnotatedBar, AnnotatedSeries, SignalEvaluator, SignalFlags};

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
  pub ticker: String,
  pub annotated: AnnotatedSeries,
  pub flags: SignalFlags,
  pub change: LatestChange,
  pub decision: AlertDecision,
}

impl EvaluationReport {
  /// 표시용 최근 n개 봉
  pub fn history(&self, n: usize) -> &[AnnotatedBar] {
    self.annotated.tail(n)
  }

  /// 알림이 발생한 경우에만 전달용 본문 생성
  pub fn notification(&self) -> Option<Notification> {
    if !self.decision.fired {
      return None;
    }
    Some(Notification::render(&self.ticker, &self.flags, &self.change))
  }
}

pub struct SignalEngine {
  params: IndicatorParams,
  evaluator: SignalEvaluator,
  aggregator: AlertAggregator,
}

impl SignalEngine {
  pub fn new(config: &EngineConfig) -> Result<Self, AlertError> {
    config.validate()?;

    Ok(SignalEngine {
      params: config.indicator_params(),
      evaluator: SignalEvaluator::new(config.thresholds())?,
      aggregator: AlertAggregator::new(config.thresholds())?,
    })
  }

  pub fn params(&self) -> &IndicatorParams {
    &self.params
  }

  pub fn evaluator(&self) -> &SignalEvaluator {
    &self.evaluator
  }

  /// 봉이 2개 미만이면 InsufficientData. 상태를 남기지 않는다
  pub fn evaluate(&self, series: &Series, previous_close: Option<f64>) -> Result<EvaluationReport, AlertError> {
    series.require_len(2)?;

    let enriched = compute_indicators(series, &self.params)?;
    let annotated = self.evaluator.annotate(&enriched);
    let flags = self.evaluator.evaluate_latest(&enriched);
    let change = LatestChange::compute(series, previous_close)?;
    let decision = self.aggregator.decide(series.symbol(), &flags, &change);

    Ok(EvaluationReport {
      ticker: series.symbol().to_string(),
      annotated,
      flags,
      change,
      decision,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Bar;

  #[test]
  fn test_engine_rejects_invalid_config() {
    let config = EngineConfig { slow_span: 0, ..EngineConfig::default() };
    assert!(matches!(SignalEngine::new(&config), Err(AlertError::ConfigError(_))));
  }

  #[test]
  fn test_engine_requires_two_bars() {
    let engine = SignalEngine::new(&EngineConfig::default()).unwrap();
    let series = Series::new("TSLA", vec![Bar::new(0, 1.0, 1.0, 1.0, 1.0, 1.0)]).unwrap();
    assert!(matches!(
      engine.evaluate(&series, None),
      Err(AlertError::InsufficientData { required: 2, actual: 1 })
    ));
  }

  #[test]
  fn test_quiet_report_has_no_notification() {
    let engine = SignalEngine::new(&EngineConfig::default()).unwrap();
    let bars = vec![
      Bar::new(0, 10.0, 10.0, 10.0, 10.0, 100.0),
      Bar::new(1, 10.0, 10.0, 10.0, 10.0, 100.0),
    ];
    let report = engine.evaluate(&Series::new("TSLA", bars).unwrap(), None).unwrap();

    assert!(!report.decision.fired);
    assert!(report.notification().is_none());
    assert_eq!(report.history(10).len(), 2);
  }
}
