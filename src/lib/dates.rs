use chrono::{Duration, NaiveDate};

use crate::error::{FeesError, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";

fn parse_iso(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_FORMAT).map_err(|_| FeesError::InvalidDate {
        value: value.to_string(),
        expected: ISO_FORMAT,
    })
}

/// Reformats `yyyy-mm-dd` date strings to `dd Mon yyyy` -- "2001-01-01"
/// becomes "01 Jan 2001". Order and length are preserved. Any element that
/// does not parse fails the whole call, no partial results.
pub fn reformat_dates<S: AsRef<str>>(dates: &[S]) -> Result<Vec<String>> {
    dates
        .iter()
        .map(|d| Ok(parse_iso(d.as_ref())?.format("%d %b %Y").to_string()))
        .collect()
}

/// Returns `n` consecutive calendar dates starting at `start` (`yyyy-mm-dd`),
/// each element one day after the previous. `n <= 0` yields an empty
/// sequence.
pub fn date_range(start: &str, n: i64) -> Result<Vec<NaiveDate>> {
    let first = parse_iso(start)?;
    Ok((0..n).map(|offset| first + Duration::days(offset)).collect())
}

/// Zips `values` with a daily date range beginning at `start_date`. The
/// i-th pair holds `start_date + i days` and the i-th value, in input order.
pub fn add_date_range<V>(values: Vec<V>, start_date: &str) -> Result<Vec<(NaiveDate, V)>> {
    let first = parse_iso(start_date)?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| (first + Duration::days(idx as i64), value))
        .collect())
}
