use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::AlertError;
use crate::models::market_data::RawBar;

/// 한 번의 조회 결과: 시간순 봉 목록 + (있다면) 시세 제공자의 전일 종가
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSet {
    pub bars: Vec<RawBar>,
    pub previous_close: Option<f64>,
}

impl BarSet {
    pub fn new(bars: Vec<RawBar>) -> Self {
        BarSet {
            bars,
            previous_close: None,
        }
    }

    pub fn with_previous_close(mut self, previous_close: f64) -> Self {
        self.previous_close = Some(previous_close);
        self
    }
}

/// 봉 데이터 공급자 인터페이스
pub trait BarSource: Send + Sync {
    /// 티커의 최신 봉 집합 조회. 매 주기마다 처음부터 다시 가져온다
    fn fetch(&self, ticker: &str) -> Result<BarSet, AlertError>;
}

/// `<dir>/<TICKER>.csv` 파일을 읽는 공급자
///
/// 헤더: `timestamp,open,high,low,close,volume` (timestamp는 밀리초)
pub struct CsvBarSource {
    dir: PathBuf,
}

impl CsvBarSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CsvBarSource { dir: dir.into() }
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", ticker))
    }

    fn read_bars(&self, path: &Path) -> Result<Vec<RawBar>, AlertError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut bars = Vec::new();
        for rec in rdr.deserialize() {
            let bar: RawBar = rec?;
            bars.push(bar);
        }
        Ok(bars)
    }
}

impl BarSource for CsvBarSource {
    fn fetch(&self, ticker: &str) -> Result<BarSet, AlertError> {
        let path = self.path_for(ticker);
        if !path.exists() {
            return Err(AlertError::UnknownTicker(ticker.to_string()));
        }

        log::debug!("CSV 로드: {}", path.display());
        Ok(BarSet::new(self.read_bars(&path)?))
    }
}

/// 메모리 보관 공급자 (테스트/데모용)
#[derive(Default)]
pub struct InMemoryBarSource {
    data: RwLock<HashMap<String, BarSet>>,
}

impl InMemoryBarSource {
    pub fn new() -> Self {
        InMemoryBarSource::default()
    }

    pub fn insert(&self, ticker: &str, bar_set: BarSet) -> Result<(), AlertError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| AlertError::InvalidParameter("bar source lock poisoned".to_string()))?;

        data.insert(ticker.to_string(), bar_set);
        Ok(())
    }
}

impl BarSource for InMemoryBarSource {
    fn fetch(&self, ticker: &str) -> Result<BarSet, AlertError> {
        let data = self
            .data
            .read()
            .map_err(|_| AlertError::InvalidParameter("bar source lock poisoned".to_string()))?;

        data.get(ticker)
            .cloned()
            .ok_or_else(|| AlertError::UnknownTicker(ticker.to_string()))
    }
}
