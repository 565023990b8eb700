/**
* filename : moving_averages
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use crate::error::AlertError;

/// 지수이동평균. alpha = 2 / (span + 1), 첫 값으로 시드 (ema[0] = values[0])
pub fn ema(values: &[f64], span: usize) -> Result<Vec<f64>, AlertError> {
  if span == 0 {
    return Err(AlertError::InvalidParameter("EMA span must be > 0".to_string()));
  }

  let alpha = 2.0 / (span as f64 + 1.0);
  let mut result = Vec::with_capacity(values.len());

  for &value in values {
    let next = match result.last() {
      Some(&prev) => alpha * value + (1.0 - alpha) * prev,
      None => value,
    };
    result.push(next);
  }

  Ok(result)
}

/// 단순이동평균. i < window - 1 구간은 None
pub fn rolling_mean(values: &[f64], window: usize) -> Result<Vec<Option<f64>>, AlertError> {
  let sparse: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
  rolling_mean_sparse(&sparse, window)
}

/// 누락값이 섞인 입력의 단순이동평균. 창 안에 누락값이 하나라도 있으면 None
pub fn rolling_mean_sparse(values: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>, AlertError> {
  if window == 0 {
    return Err(AlertError::InvalidParameter("Rolling window must be > 0".to_string()));
  }

  let mut result = vec![None; values.len()];

  for (offset, slice) in values.windows(window).enumerate() {
    let sum: Option<f64> = slice.iter().copied().sum();
    result[offset + window - 1] = sum.map(|s| s / window as f64);
  }

  Ok(result)
}
