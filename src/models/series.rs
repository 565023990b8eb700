/**
* filename : series
* author : HAMA
* date: 2025. 6. 2.
* description: 시간순으로 정렬된 불변 봉 시계열
**/

use serde::Serialize;

use crate::error::AlertError;
use super::market_data::{Bar, RawBar};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
  symbol: String,
  bars: Vec<Bar>,
}

impl Series {
  /// 비어 있거나, 값이 빠졌거나, 타임스탬프가 증가하지 않으면 실패
  pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, AlertError> {
    if bars.is_empty() {
      return Err(AlertError::EmptySeries);
    }

    for (index, bar) in bars.iter().enumerate() {
      bar.check_fields(index)?;
    }

    if let Some(index) = (1..bars.len()).find(|&i| bars[i].timestamp <= bars[i - 1].timestamp) {
      return Err(AlertError::UnorderedSeries { index });
    }

    Ok(Series {
      symbol: symbol.into(),
      bars,
    })
  }

  pub fn from_raw(symbol: impl Into<String>, raw: Vec<RawBar>) -> Result<Self, AlertError> {
    let bars = raw
      .into_iter()
      .enumerate()
      .map(|(index, raw_bar)| raw_bar.into_bar(index))
      .collect::<Result<Vec<_>, _>>()?;

    Series::new(symbol, bars)
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn bars(&self) -> &[Bar] {
    &self.bars
  }

  pub fn len(&self) -> usize {
    self.bars.len()
  }

  // 생성자가 빈 시계열을 거부하므로 항상 false
  pub fn is_empty(&self) -> bool {
    self.bars.is_empty()
  }

  pub fn last(&self) -> &Bar {
    &self.bars[self.bars.len() - 1]
  }

  pub fn closes(&self) -> Vec<f64> {
    self.bars.iter().map(|b| b.close).collect()
  }

  pub fn volumes(&self) -> Vec<f64> {
    self.bars.iter().map(|b| b.volume).collect()
  }

  /// 최소 봉 개수 확인
  pub fn require_len(&self, required: usize) -> Result<(), AlertError> {
    if self.bars.len() < required {
      return Err(AlertError::InsufficientData {
        required,
        actual: self.bars.len(),
      });
    }
    Ok(())
  }
}
