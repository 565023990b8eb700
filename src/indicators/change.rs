/**
* filename : change
* author : HAMA
* date: 2025. 6. 2.
* description: 직전 값 대비 변화율 계산
**/

/// 직전 값 대비 변화율(%). 첫 값과 0/0 은 None, 0에서 오르면 +inf
pub fn percent_change(values: &[f64]) -> Vec<Option<f64>> {
  let mut result = Vec::with_capacity(values.len());

  for (i, &value) in values.iter().enumerate() {
    if i == 0 {
      result.push(None);
      continue;
    }
    result.push(pct_of(value - values[i - 1], values[i - 1]));
  }

  result
}

/// 기준값 대비 편차(%). 어느 한쪽이 없으면 None. 기준값 0은 ±inf (0/0 은 None)
pub fn deviation_pct(value: Option<f64>, base: Option<f64>) -> Option<f64> {
  let (value, base) = (value?, base?);
  pct_of(value - base, base)
}

// 부호 있는 무한대는 그대로 두고 NaN만 결측 처리
fn pct_of(delta: f64, base: f64) -> Option<f64> {
  let pct = delta / base * 100.0;
  if pct.is_nan() { None } else { Some(pct) }
}
