//! 신호 엔진과 주기 실행기

pub mod engine;
pub mod monitor;

pub use engine::{EvaluationReport, SignalEngine};
pub use monitor::{CycleSummary, Monitor};
