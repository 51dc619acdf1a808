/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{Format, Instant};
use serde::de::{Error, Visitor};
use serde::Deserialize;
use std::fmt;

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC 3339 date-time")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v > i64::MAX as u64 {
            return Err(E::custom(format!("{} seconds is out of range", v)));
        }
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if !v.is_finite() || v.abs() >= i64::MAX as f64 {
            return Err(E::custom(format!("{} is not a valid timestamp", v)));
        }
        // the shortest decimal that reads back as `v` carries the fraction that was written
        match Instant::from_str(&v.to_string(), Format::EpochSeconds) {
            Ok(instant) => Ok(instant),
            Err(_) => Ok(Instant::from_f64(v)),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Instant::from_str(v, Format::DateTime)
            .or_else(|_| Instant::from_str(v, Format::EpochSeconds))
            .map_err(|_| E::custom(format!("`{}` is not a valid timestamp", v)))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(InstantVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Test {
        timestamp: Instant,
    }

    #[test]
    fn deserialize_epoch_seconds() {
        let test: Test = serde_json::from_str(r#"{"timestamp":1576540098}"#).unwrap();
        assert_eq!(test.timestamp, Instant::from_epoch_seconds(1576540098));

        let test: Test = serde_json::from_str(r#"{"timestamp":1576540098.5}"#).unwrap();
        assert_eq!(
            test.timestamp,
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
    }

    #[test]
    fn fractions_read_back_to_the_nanosecond() {
        for (json, nanos) in &[
            ("1576540098.52", 520_000_000),
            ("1576540098.001", 1_000_000),
        ] {
            let test: Test =
                serde_json::from_str(&format!(r#"{{"timestamp":{}}}"#, json)).unwrap();
            assert_eq!(
                test.timestamp,
                Instant::from_secs_and_nanos(1576540098, *nanos),
                "{}",
                json
            );
        }

        let test: Test = serde_json::from_str(r#"{"timestamp":-1.25}"#).unwrap();
        assert_eq!(test.timestamp, Instant::from_secs_and_nanos(-2, 750_000_000));

        let test: Test = serde_json::from_str(r#"{"timestamp":1e-10}"#).unwrap();
        assert_eq!(test.timestamp, Instant::from_epoch_seconds(0));
    }

    #[test]
    fn reject_out_of_range_seconds() {
        assert!(serde_json::from_str::<Test>(r#"{"timestamp":1e300}"#).is_err());
    }

    #[test]
    fn deserialize_date_time() {
        let test: Test = serde_json::from_str(r#"{"timestamp":"2019-12-16T23:48:18Z"}"#).unwrap();
        assert_eq!(test.timestamp, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn reject_other_strings() {
        assert!(serde_json::from_str::<Test>(r#"{"timestamp":"soon"}"#).is_err());
        assert!(serde_json::from_str::<Test>(r#"{"timestamp":true}"#).is_err());
    }
}
