/**
* filename : utils
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use crate::error::AlertError;
use crate::models::series::Series;
use super::{deviation_pct, ema, macd, percent_change, rolling_mean, rolling_mean_sparse};
use super::{EnrichedBar, EnrichedSeries, IndicatorParams};

// 시계열 전체에 대해 모든 지표 열을 계산. 입력은 건드리지 않는다
pub fn compute_indicators(series: &Series, params: &IndicatorParams) -> Result<EnrichedSeries, AlertError> {
  params.validate()?;

  let closes = series.closes();
  let volumes = series.volumes();

  let price_change = percent_change(&closes);
  let volume_change = percent_change(&volumes);
  let avg_price_change = rolling_mean_sparse(&price_change, params.rolling_window)?;
  let avg_volume = rolling_mean(&volumes, params.rolling_window)?;

  let macd_series = macd(&closes, params.fast_span, params.slow_span, params.macd_signal_span)?;
  let ema_fast = ema(&closes, params.ema_fast_span)?;
  let ema_slow = ema(&closes, params.ema_slow_span)?;

  let bars = series
    .bars()
    .iter()
    .enumerate()
    .map(|(i, bar)| EnrichedBar {
      bar: *bar,
      price_change_pct: price_change[i],
      volume_change_pct: volume_change[i],
      rolling_avg_price_change_pct: avg_price_change[i],
      rolling_avg_volume: avg_volume[i],
      price_change_deviation_pct: deviation_pct(price_change[i], avg_price_change[i]),
      volume_deviation_pct: deviation_pct(Some(bar.volume), avg_volume[i]),
      macd_line: macd_series.line[i],
      macd_signal_line: macd_series.signal[i],
      macd_histogram: macd_series.histogram[i],
      ema_fast: ema_fast[i],
      ema_slow: ema_slow[i],
    })
    .collect();

  log::debug!("지표 계산 완료: {} - 봉 {}개", series.symbol(), series.len());

  Ok(EnrichedSeries {
    symbol: series.symbol().to_string(),
    params: *params,
    bars,
  })
}
