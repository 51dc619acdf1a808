/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde-deserialize")]
mod de;
mod format;
#[cfg(feature = "serde-serialize")]
mod ser;

pub use self::format::InstantParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
///
/// `subsecond_nanos` is always in `0..1_000_000_000`, so instants before the epoch carry a
/// negative `seconds` and a positive fraction: `-1.5` is stored as `(-2, 500_000_000)`.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an instant from whole seconds and a fraction of a second.
    ///
    /// The fraction is rounded to the nearest nanosecond. Negative fractions clamp to zero and
    /// fractions of a second or more carry into `seconds`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * 1_000_000_000_f64).round().max(0.0) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, subsecond_nanos)
    }

    /// Creates an instant from whole seconds and a nanosecond fraction.
    ///
    /// Nanoseconds beyond a full second carry into `seconds`, saturating at `i64::MAX`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => {
                Instant::from_secs_and_nanos(duration.as_secs() as i64, duration.subsec_nanos())
            }
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant::from_secs_and_nanos(seconds - 1, NANOS_PER_SECOND - nanos),
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant.
    ///
    /// Instants outside of the range chrono can represent have no RFC 3339 rendering and are
    /// written as epoch seconds instead.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => format::rfc3339::format(self)
                .unwrap_or_else(|| format::epoch_seconds::format(self)),
            Format::EpochSeconds => format::epoch_seconds::format(self),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl FromStr for Instant {
    type Err = InstantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::rfc3339::parse(s)
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 date-time in UTC, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the Unix epoch, with a fraction only when one is present
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn whole_seconds_ending_in_zero_keep_their_digits() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.to_string(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn pre_epoch_instants() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(instant.fmt(Format::DateTime), "1969-12-31T23:59:58.5Z");
        assert_eq!(Instant::from_str("-1.5", Format::EpochSeconds), Ok(instant));
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 1_250_000_000);
        assert_eq!(instant, Instant::from_secs_and_nanos(11, 250_000_000));
    }

    #[test]
    fn fractions_keep_nanos_below_one_second() {
        let instant = Instant::from_fractional_seconds(0, 1.5);
        assert_eq!(instant, Instant::from_secs_and_nanos(1, 500_000_000));
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1.5");

        assert_eq!(
            Instant::from_fractional_seconds(7, -0.25),
            Instant::from_epoch_seconds(7)
        );
        assert_eq!(
            Instant::from_fractional_seconds(0, 0.001),
            Instant::from_secs_and_nanos(0, 1_000_000)
        );
    }

    #[test]
    fn carry_saturates_at_max_seconds() {
        let instant = Instant::from_secs_and_nanos(i64::MAX, 1_500_000_000);
        assert_eq!(instant.epoch_seconds(), i64::MAX);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
    }

    #[test]
    fn parse_rfc3339() {
        let instant: Instant = "2019-12-16T23:48:18.52Z".parse().unwrap();
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));

        let offset: Instant = "2019-12-17T00:48:18+01:00".parse().unwrap();
        assert_eq!(offset, Instant::from_epoch_seconds(1576540098));

        assert!("2019-12-16 23:48".parse::<Instant>().is_err());
    }

    #[test]
    fn instants_order_chronologically() {
        let before = Instant::from_secs_and_nanos(-1, 999_999_999);
        let epoch = Instant::from_epoch_seconds(0);
        let after = Instant::from_secs_and_nanos(0, 1);
        assert!(before < epoch);
        assert!(epoch < after);
    }

    proptest! {
        #[test]
        fn epoch_seconds_text_round_trips(seconds in -99_999_999_999i64..99_999_999_999i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let text = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&text, Format::EpochSeconds), Ok(instant));
        }

        #[test]
        fn date_time_text_round_trips(seconds in 0i64..253_402_300_799i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let text = instant.to_string();
            prop_assert_eq!(text.parse::<Instant>(), Ok(instant));
        }
    }
}
