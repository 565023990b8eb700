//! 알림 결정 및 전달

pub mod aggregator;
pub mod notification;

pub use aggregator::*;
pub use notification::*;
