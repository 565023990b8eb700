/**
* filename : trend
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use crate::error::AlertError;
use super::moving_averages::ema;

/// 입력 길이에 맞춰 정렬된 MACD 시계열
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
  pub line: Vec<f64>,
  pub signal: Vec<f64>,
  pub histogram: Vec<f64>,
}

/// MACD 라인 = EMA(fast) - EMA(slow), 시그널 = EMA(MACD 라인, signal)
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdSeries, AlertError> {
  let fast_ema = ema(closes, fast)?;
  let slow_ema = ema(closes, slow)?;

  let line: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
  let signal_line = ema(&line, signal)?;
  let histogram = line.iter().zip(&signal_line).map(|(m, s)| m - s).collect();

  Ok(MacdSeries {
    line,
    signal: signal_line,
    histogram,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_macd_flat_prices_is_zero() {
    let result = macd(&[50.0; 30], 12, 26, 9).unwrap();
    assert!(result.line.iter().all(|v| *v == 0.0));
    assert!(result.signal.iter().all(|v| *v == 0.0));
  }

  #[test]
  fn test_macd_aligned_with_input() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    let result = macd(&closes, 12, 26, 9).unwrap();

    assert_eq!(result.line.len(), closes.len());
    assert_eq!(result.signal.len(), closes.len());
    assert_eq!(result.histogram.len(), closes.len());
    assert_eq!(result.line[0], 0.0);
    // 상승 추세에서는 빠른 EMA가 느린 EMA 위
    assert!(result.line[9] > 0.0);
    assert!((result.histogram[9] - (result.line[9] - result.signal[9])).abs() < 1e-12);
  }

  #[test]
  fn test_macd_invalid_span() {
    assert!(macd(&[1.0, 2.0], 12, 0, 9).is_err());
  }
}
