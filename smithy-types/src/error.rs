/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;

/// An entry could not be added to a map member because its key is already present.
///
/// The map is left exactly as it was before the insertion was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    pub fn new(key: impl Into<String>) -> Self {
        DuplicateKeyError { key: key.into() }
    }

    /// The key that was already present
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key: {}", self.key)
    }
}

impl Error for DuplicateKeyError {}

#[cfg(test)]
mod test {
    use super::DuplicateKeyError;

    #[test]
    fn display_names_the_key() {
        let err = DuplicateKeyError::new("vendor");
        assert_eq!(err.to_string(), "duplicate key: vendor");
        assert_eq!(err.key(), "vendor");
    }
}
