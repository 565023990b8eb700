use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// 검증이 끝난 OHLCV 봉 하나
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// 봉 시작 시각 (밀리초)
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    // NaN/inf 값은 누락으로 취급
    pub(crate) fn check_fields(&self, index: usize) -> Result<(), AlertError> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(AlertError::MissingField { index, field });
            }
        }

        Ok(())
    }
}

/// 외부 데이터 소스가 넘겨주는 원시 봉. 모든 필드가 비어 있을 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub timestamp: Option<i64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl RawBar {
    /// 필수 필드를 모두 채운 `Bar`로 변환. 빠진 필드는 기본값으로 채우지 않고 바로 실패한다.
    pub fn into_bar(self, index: usize) -> Result<Bar, AlertError> {
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or(AlertError::MissingField { index, field })
        };

        let bar = Bar {
            timestamp: self.timestamp.ok_or(AlertError::MissingField { index, field: "timestamp" })?,
            open: require(self.open, "open")?,
            high: require(self.high, "high")?,
            low: require(self.low, "low")?,
            close: require(self.close, "close")?,
            volume: require(self.volume, "volume")?,
        };

        bar.check_fields(index)?;
        Ok(bar)
    }
}

impl From<Bar> for RawBar {
    fn from(bar: Bar) -> Self {
        RawBar {
            timestamp: Some(bar.timestamp),
            open: Some(bar.open),
            high: Some(bar.high),
            low: Some(bar.low),
            close: Some(bar.close),
            volume: Some(bar.volume),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_bar_conversion() {
        let raw = RawBar::from(Bar::new(1_000, 10.0, 12.0, 9.0, 11.0, 500.0));
        let bar = raw.into_bar(0).unwrap();
        assert_eq!(bar.close, 11.0);
        assert_eq!(bar.timestamp, 1_000);
    }

    #[test]
    fn test_missing_close_fails_fast() {
        let raw = RawBar {
            close: None,
            ..RawBar::from(Bar::new(1_000, 10.0, 12.0, 9.0, 11.0, 500.0))
        };

        match raw.into_bar(7) {
            Err(AlertError::MissingField { index, field }) => {
                assert_eq!(index, 7);
                assert_eq!(field, "close");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nan_volume_is_missing() {
        let raw = RawBar::from(Bar::new(1_000, 10.0, 12.0, 9.0, 11.0, f64::NAN));
        assert!(matches!(
            raw.into_bar(0),
            Err(AlertError::MissingField { field: "volume", .. })
        ));
    }
}
