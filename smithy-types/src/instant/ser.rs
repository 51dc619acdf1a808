/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::Instant;

/// Instants serialize as epoch seconds: an integer when there is no fraction, a float otherwise.
impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;

    #[test]
    fn whole_seconds_serialize_as_integer() {
        let json = serde_json::to_string(&Instant::from_epoch_seconds(1576540098)).unwrap();
        assert_eq!(json, "1576540098");
    }

    #[test]
    fn fractional_seconds_serialize_as_float() {
        let json =
            serde_json::to_string(&Instant::from_secs_and_nanos(1576540098, 500_000_000)).unwrap();
        assert_eq!(json, "1576540098.5");
    }
}
