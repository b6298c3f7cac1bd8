// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Display formatting for song metadata.

use chrono::{DateTime, Utc};

/// Formats a song length in seconds as `M:SS`, or `H:MM:SS` for anything an
/// hour or longer.
///
/// Fractional seconds are truncated and negative or non-finite values are
/// shown as zero.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_length(65.0), "1:05");
/// assert_eq!(format_length(3725.0), "1:02:05");
/// ```
pub(crate) fn format_length(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds as u64 } else { 0 };

    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Formats a release timestamp as a calendar date.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0.0), "0:00");
        assert_eq!(format_length(65.0), "1:05");
        assert_eq!(format_length(200.9), "3:20");
        assert_eq!(format_length(3725.0), "1:02:05");
        assert_eq!(format_length(-4.0), "0:00");
        assert_eq!(format_length(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2021, 3, 7, 18, 0, 0).unwrap();
        assert_eq!(format_date(&date), "2021/03/07");
    }
}
