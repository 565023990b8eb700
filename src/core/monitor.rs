/**
* filename : monitor
* author : HAMA
* date: 2025. 6. 3.
* description: 여러 티커를 한 주기 동안 평가하고 알림을 전달
**/

use crate::alerts::Notifier;
use crate::error::AlertError;
use crate::market_data::BarSource;
use crate::models::series::Series;
use crate::utils::logging;
use super::engine::{EvaluationReport, SignalEngine};

/// 한 주기 결과
#[derive(Debug, Default)]
pub struct CycleSummary {
  pub reports: Vec<EvaluationReport>,
  pub skipped: Vec<(String, AlertError)>,
  pub alerts_sent: usize,
}

impl CycleSummary {
  pub fn fired(&self) -> impl Iterator<Item = &EvaluationReport> {
    self.reports.iter().filter(|r| r.decision.fired)
  }
}

pub struct Monitor {
  engine: SignalEngine,
  source: Box<dyn BarSource>,
  notifier: Box<dyn Notifier>,
  tickers: Vec<String>,
}

impl Monitor {
  pub fn new(
    engine: SignalEngine,
    source: Box<dyn BarSource>,
    notifier: Box<dyn Notifier>,
    tickers: Vec<String>,
  ) -> Self {
    Monitor {
      engine,
      source,
      notifier,
      tickers,
    }
  }

  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  // 티커 하나 평가 (조회 -> 검증 -> 엔진)
  pub fn evaluate_ticker(&self, ticker: &str) -> Result<EvaluationReport, AlertError> {
    let bar_set = self.source.fetch(ticker)?;
    let series = Series::from_raw(ticker, bar_set.bars)?;
    self.engine.evaluate(&series, bar_set.previous_close)
  }

  /// 모든 티커를 순서대로 평가. 실패한 티커는 이번 주기만 건너뛴다
  pub fn run_cycle(&self) -> CycleSummary {
    logging::log_cycle_start(self.tickers.len());
    let mut summary = CycleSummary::default();

    for ticker in &self.tickers {
      let report = match self.evaluate_ticker(ticker) {
        Ok(report) => report,
        Err(e) => {
          if e.is_data_error() {
            logging::log_ticker_skipped(ticker, &e);
          } else {
            logging::log_error(ticker, &e);
          }
          summary.skipped.push((ticker.clone(), e));
          continue;
        }
      };

      if let Some(notification) = report.notification() {
        logging::log_alert(&report.decision.message);
        match self.notifier.notify(&notification) {
          Ok(()) => summary.alerts_sent += 1,
          Err(e) => logging::log_error("알림 전송", &e),
        }
      }

      summary.reports.push(report);
    }

    logging::log_cycle_end(summary.reports.len(), summary.skipped.len(), summary.alerts_sent);
    summary
  }
}
