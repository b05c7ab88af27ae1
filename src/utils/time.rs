//! 时间处理工具

use chrono::{DateTime, NaiveDate, Utc};

/// 格式化为 ISO 8601（毫秒，Z 结尾）
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// 格式化为 `YYYY-MM-DD HH:MM:SS`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 格式化为 `YYYY-MM-DD`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// 当前时间的 ISO 8601 字符串
pub fn now_iso8601() -> String {
    format_iso8601(&Utc::now())
}

/// 某日 UTC 零点的 ISO 8601 字符串
pub fn date_iso8601(date: NaiveDate) -> String {
    match date.and_hms_opt(0, 0, 0) {
        Some(naive) => format_iso8601(&naive.and_utc()),
        None => now_iso8601(),
    }
}
