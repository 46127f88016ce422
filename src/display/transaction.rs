//! Transaction display formatting

use chrono::Local;

use super::report::format_amount;
use crate::config::Settings;
use crate::models::Transaction;

/// Format one numbered log row: `1. coffee - UGX 5.00 [09:30:00]`
///
/// The timestamp is shown in local time.
pub fn format_transaction_row(number: usize, txn: &Transaction, settings: &Settings) -> String {
    let time = txn
        .created_at()
        .with_timezone(&Local)
        .format(&settings.time_format);

    format!(
        "{}. {} - {} [{}]",
        number,
        txn.description(),
        format_amount(txn.amount(), settings),
        time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_transaction_row() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 5).unwrap();
        let txn = Transaction::new("coffee", Money::from_cents(500), at).unwrap();
        let settings = Settings::default();

        let expected_time = at.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert_eq!(
            format_transaction_row(1, &txn, &settings),
            format!("1. coffee - UGX 5.00 [{}]", expected_time)
        );
    }

    #[test]
    fn test_custom_time_format() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 5).unwrap();
        let txn = Transaction::new("rent", Money::from_cents(100_000), at).unwrap();
        let settings = Settings {
            currency_code: "USD".into(),
            time_format: "%Y".into(),
            ..Settings::default()
        };

        let year = at.with_timezone(&Local).format("%Y").to_string();
        assert_eq!(
            format_transaction_row(12, &txn, &settings),
            format!("12. rent - USD 1000.00 [{}]", year)
        );
    }
}
