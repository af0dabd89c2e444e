// src/core/dates.rs
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::config::consts::SENTINEL_YEARS;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date of an upstream date/datetime string; time of day is dropped.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// A usable match date: parsable and not one of the upstream "unknown" years.
pub fn valid_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date).filter(|d| !SENTINEL_YEARS.contains(&d.year()))
}

pub fn is_invalid_date(raw: Option<&str>) -> bool {
    valid_date(raw).is_none()
}
