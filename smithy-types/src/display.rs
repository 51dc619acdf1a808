/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Human readable rendering of generated shapes.
//!
//! A shape renders as `{Name: value, Other: value}`, listing only the members that are set, in
//! declaration order. Lists render as `[a, b]` and maps as `{k=v, k2=v2}` ordered by key so the
//! output is stable across runs.

use std::collections::HashMap;
use std::fmt;

/// Writer for the `Display` implementation of a generated shape, in the manner of
/// [`fmt::DebugStruct`].
///
/// ```rust
/// use smithy_types::display::ShapeDisplay;
/// use std::fmt;
///
/// struct Tag {
///     key: Option<String>,
///     value: Option<String>,
/// }
///
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         let mut shape = ShapeDisplay::new(f);
///         shape.field("Key", &self.key);
///         shape.field("Value", &self.value);
///         shape.finish()
///     }
/// }
///
/// let tag = Tag { key: Some("team".into()), value: None };
/// assert_eq!(tag.to_string(), "{Key: team}");
/// ```
pub struct ShapeDisplay<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> ShapeDisplay<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        ShapeDisplay {
            fmt,
            result,
            has_fields: false,
        }
    }

    fn write_name(&mut self, name: &str) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(", ")?;
        }
        self.has_fields = true;
        write!(self.fmt, "{}: ", name)
    }

    /// Write a scalar, enum, timestamp or nested shape member if it is set.
    pub fn field<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.result = self.result.and_then(|_| {
                self.write_name(name)?;
                write!(self.fmt, "{}", value)
            });
        }
        self
    }

    /// Write a list member if it is set.
    pub fn list<T: fmt::Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            self.result = self.result.and_then(|_| {
                self.write_name(name)?;
                self.fmt.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.fmt.write_str(", ")?;
                    }
                    write!(self.fmt, "{}", item)?;
                }
                self.fmt.write_str("]")
            });
        }
        self
    }

    /// Write a map member if it is set.
    pub fn map<V: fmt::Display>(
        &mut self,
        name: &str,
        value: &Option<HashMap<String, V>>,
    ) -> &mut Self {
        if let Some(entries) = value {
            self.result = self.result.and_then(|_| {
                self.write_name(name)?;
                let mut sorted: Vec<_> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));
                self.fmt.write_str("{")?;
                for (i, (k, v)) in sorted.into_iter().enumerate() {
                    if i > 0 {
                        self.fmt.write_str(", ")?;
                    }
                    write!(self.fmt, "{}={}", k, v)?;
                }
                self.fmt.write_str("}")
            });
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.fmt.write_str("}"))
    }
}

#[cfg(test)]
mod test {
    use super::ShapeDisplay;
    use crate::Instant;
    use std::collections::HashMap;
    use std::fmt;

    #[derive(Default)]
    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        when: Option<Instant>,
        args: Option<Vec<String>>,
        info: Option<HashMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut shape = ShapeDisplay::new(f);
            shape.field("Name", &self.name);
            shape.field("Count", &self.count);
            shape.field("When", &self.when);
            shape.list("Args", &self.args);
            shape.map("Info", &self.info);
            shape.finish()
        }
    }

    #[test]
    fn empty_shape() {
        assert_eq!(Sample::default().to_string(), "{}");
    }

    #[test]
    fn only_present_members_render() {
        let sample = Sample {
            count: Some(3),
            args: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(sample.to_string(), "{Count: 3, Args: []}");
    }

    #[test]
    fn all_members_render_in_order() {
        let mut info = HashMap::new();
        info.insert("zeta".to_string(), "26".to_string());
        info.insert("alpha".to_string(), "1".to_string());
        let sample = Sample {
            name: Some("Hive".into()),
            count: Some(-1),
            when: Some(Instant::from_epoch_seconds(1576540098)),
            args: Some(vec!["-x".into(), "-y".into()]),
            info: Some(info),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: Hive, Count: -1, When: 2019-12-16T23:48:18Z, Args: [-x, -y], Info: {alpha=1, zeta=26}}"
        );
    }
}
