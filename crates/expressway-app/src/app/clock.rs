//! Indian Standard Time clock

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn ist_offset() -> FixedOffset {
    // east_opt only fails outside ±24h
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current time in IST
pub fn ist_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist_offset())
}

/// 12-hour clock with seconds, e.g. "07:05:09 PM IST"
pub fn format_ist(time: &DateTime<FixedOffset>) -> String {
    format!("{} IST", time.format("%I:%M:%S %p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_offset_is_five_thirty() {
        assert_eq!(ist_offset().local_minus_utc(), 19800);
    }

    #[test]
    fn test_format_ist() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 19, 13, 35, 9).unwrap();
        let ist = utc.with_timezone(&ist_offset());
        assert_eq!(format_ist(&ist), "07:05:09 PM IST");
    }
}
