use std::sync::LazyLock;

use chrono::NaiveDate;

pub mod contact;

/// Date used as "today" by tests that mock the clock.
pub static TODAY: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
