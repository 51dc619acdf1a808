/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantParseError {
    InvalidDateTime(String),
    InvalidEpochSeconds(String),
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::InvalidDateTime(input) => {
                write!(f, "`{}` is not a valid RFC 3339 date-time", input)
            }
            InstantParseError::InvalidEpochSeconds(input) => {
                write!(f, "`{}` is not a valid epoch-seconds timestamp", input)
            }
        }
    }
}

impl Error for InstantParseError {}

pub(crate) mod rfc3339 {
    use super::InstantParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(instant: &Instant) -> Option<String> {
        let date_time = instant.to_chrono()?;
        if !instant.has_nanos() {
            return Some(date_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let mut rfc3339 = rfc3339
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .to_owned();
        rfc3339.push('Z');
        Some(rfc3339)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|_| InstantParseError::InvalidDateTime(s.to_owned()))?;
        // chrono stores a leap second as a nanosecond count past one full second
        let nanos = parsed.timestamp_subsec_nanos();
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            nanos.min(2 * NANOS_PER_SECOND - 1),
        ))
    }
}

pub(crate) mod epoch_seconds {
    use super::InstantParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5"
    pub(crate) fn format(instant: &Instant) -> String {
        if !instant.has_nanos() {
            return instant.seconds.to_string();
        }
        let (sign, whole, nanos) = if instant.seconds < 0 {
            (
                "-",
                (instant.seconds + 1).unsigned_abs(),
                NANOS_PER_SECOND - instant.subsecond_nanos,
            )
        } else {
            ("", instant.seconds as u64, instant.subsecond_nanos)
        };
        let fraction = format!("{:0>9}", nanos);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let invalid = || InstantParseError::InvalidEpochSeconds(s.to_owned());
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 9 {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let nanos: u32 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<9}", fraction).parse().map_err(|_| invalid())?
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(whole, nanos),
            (true, 0) => Instant::from_epoch_seconds(-whole),
            (true, _) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, rfc3339, InstantParseError};
    use crate::Instant;

    #[test]
    fn epoch_seconds_format() {
        assert_eq!(epoch_seconds::format(&Instant::from_epoch_seconds(0)), "0");
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(1576540098, 1)),
            "1576540098.000000001"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(-1, 750_000_000)),
            "-0.25"
        );
    }

    #[test]
    fn epoch_seconds_rejects_malformed_input() {
        for input in &["", "-", "1.", ".5", "1.2.3", "1e9", "1.0000000001", " 1", "+1"] {
            assert_eq!(
                epoch_seconds::parse(input),
                Err(InstantParseError::InvalidEpochSeconds(input.to_string())),
                "{}",
                input
            );
        }
    }

    #[test]
    fn rfc3339_parse_error_names_input() {
        let err = rfc3339::parse("yesterday").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`yesterday` is not a valid RFC 3339 date-time"
        );
    }

    #[test]
    fn rfc3339_out_of_range_has_no_rendering() {
        assert_eq!(rfc3339::format(&Instant::from_epoch_seconds(i64::MAX)), None);
    }
}
