// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

/// Number of trailing digits of the millisecond timestamp kept in an id.
const ID_DIGITS: usize = 10;

/// Derive a workout id from its creation instant.
///
/// Keeps the last ten digits of the Unix timestamp in milliseconds, so two
/// workouts created within the same millisecond share an id.
pub fn workout_id(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_DIGITS);
    millis[start..].to_string()
}

/// Format a date as `"<Month>, <day>"`, e.g. `"April, 14"`.
pub fn format_month_day(date: DateTime<Utc>) -> String {
    format!("{}, {}", date.format("%B"), date.day())
}
