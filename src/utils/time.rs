//! Timestamp utilities: RFC 3339 round-trip and human formatting.

use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_iso(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

pub fn parse_iso(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// True when every specifier in `fmt` is understood by chrono.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Format `ts` with `fmt`, falling back to `DEFAULT_TIMESTAMP_FORMAT` when
/// `fmt` cannot be rendered.
pub fn format_timestamp(ts: &DateTime<Local>, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(fmt)).is_ok() {
        return out;
    }

    tracing::warn!(format = fmt, "invalid timestamp format, using default");
    ts.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
