use std::{ops::Deref, time::Duration as StdDuration};

use serde::Deserialize;

/// Human readable duration such as `"5s"`, `"1h 30m"` or `"250ms"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub StdDuration);

impl From<Duration> for StdDuration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = StdDuration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {s:?}")))
    }
}

fn parse(s: &str) -> Option<StdDuration> {
    s.split_whitespace()
        .try_fold(StdDuration::ZERO, |acc, part| acc.checked_add(parse_part(part)?))
}

fn parse_part(part: &str) -> Option<StdDuration> {
    // `ms` must be checked before `m` and `s`
    if let Some(n) = part.strip_suffix("ms") {
        return number(n).map(StdDuration::from_millis);
    }

    let (n, unit) = part.split_at(part.char_indices().next_back()?.0);
    let seconds = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };
    number(n)?.checked_mul(seconds).map(StdDuration::from_secs)
}

fn number(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
