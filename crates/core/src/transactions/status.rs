//! Settlement status derived from the transaction date.

use chrono::{DateTime, Duration, Utc};

use super::types::TransactionStatus;

/// Transactions newer than this many days are still processing.
pub const PROCESSING_WINDOW_DAYS: i64 = 2;

/// Returns `Processing` for transactions inside the processing window
/// ending at `now`, `Success` otherwise.
///
/// `now` is passed in so the result depends only on the arguments.
#[must_use]
pub fn transaction_status(date: DateTime<Utc>, now: DateTime<Utc>) -> TransactionStatus {
    let cutoff = now - Duration::days(PROCESSING_WINDOW_DAYS);
    if date > cutoff {
        TransactionStatus::Processing
    } else {
        TransactionStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_transaction_is_processing() {
        let date = now() - Duration::hours(3);
        assert_eq!(transaction_status(date, now()), TransactionStatus::Processing);
    }

    #[test]
    fn test_old_transaction_is_success() {
        let date = now() - Duration::days(5);
        assert_eq!(transaction_status(date, now()), TransactionStatus::Success);
    }

    #[test]
    fn test_cutoff_boundary_is_success() {
        let cutoff = now() - Duration::days(PROCESSING_WINDOW_DAYS);
        assert_eq!(transaction_status(cutoff, now()), TransactionStatus::Success);
        assert_eq!(
            transaction_status(cutoff + Duration::seconds(1), now()),
            TransactionStatus::Processing
        );
    }

    #[test]
    fn test_future_dated_transaction_is_processing() {
        let date = now() + Duration::days(1);
        assert_eq!(transaction_status(date, now()), TransactionStatus::Processing);
    }
}
