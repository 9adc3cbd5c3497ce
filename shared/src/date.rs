//! 时间类型模块
//!
//! `Timestamp`: 可序列化的毫秒时间戳，用于传输，并通过 chrono 格式化显示。

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 格式化为 `YYYY-MM-DD`（UTC）
    ///
    /// 超出 chrono 可表示范围时返回 None
    pub fn format_date(&self) -> Option<String> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// 格式化为 `YYYY-MM-DD HH:MM`（UTC）
    pub fn format_datetime(&self) -> Option<String> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis_in_utc() {
        let ts = Timestamp::new(1_700_000_000_000);
        assert_eq!(ts.format_date().as_deref(), Some("2023-11-14"));
        assert_eq!(ts.format_datetime().as_deref(), Some("2023-11-14 22:13"));
    }

    #[test]
    fn out_of_range_formats_to_none() {
        assert!(Timestamp::new(i64::MAX).format_date().is_none());
    }
}
