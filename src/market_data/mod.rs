//! 봉 데이터 공급자

pub mod provider;

pub use provider::{BarSet, BarSource, CsvBarSource, InMemoryBarSource};
