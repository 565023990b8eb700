//! 알림 본문 생성과 전달 인터페이스
//!
//! 실제 전송(메일, 토스트 등)은 `Notifier` 구현체가 담당한다.

use serde::Serialize;
use crate::error::AlertError;
use crate::signals::SignalFlags;
use super::aggregator::LatestChange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub ticker: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// 발생한 규칙을 고정 순서로 한 줄씩 나열한 본문 생성
    pub fn render(ticker: &str, flags: &SignalFlags, change: &LatestChange) -> Self {
        let mut lines = vec![
            format!("Ticker: {}", ticker),
            format!("Price change: {:.2}%", change.price_pct_change),
            format!("Volume change: {:.2}%", change.volume_pct_change),
        ];

        for rule in flags.fired() {
            let marker = if rule.is_buy() {
                "[BUY]"
            } else if rule.is_sell() {
                "[SELL]"
            } else {
                "[WARN]"
            };
            lines.push(format!("{} {}", marker, rule.clause()));
        }

        lines.push("Abnormal movement detected, please check the market.".to_string());

        Notification {
            ticker: ticker.to_string(),
            subject: format!("Stock alert: {}", ticker),
            body: lines.join("\n"),
        }
    }
}

/// 알림 전달 인터페이스
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), AlertError>;
}

/// 로그로만 알림을 남기는 기본 구현
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), AlertError> {
        log::warn!("{}\n{}", notification.subject, notification.body);
        Ok(())
    }
}
