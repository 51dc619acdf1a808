// Code generated by emr-codegen. DO NOT EDIT.
/// Opaque struct used as inner data for the `Unknown` variant of the enums in this crate.
///
/// It is only created when a string that matches no listed value is converted into an
/// enum, so every listed value has exactly one representation.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub struct UnknownVariantValue(pub(crate) std::string::String);
impl UnknownVariantValue {
    /// Returns the unrecognized value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct JobSpec {
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub priority: std::option::Option<crate::model::Priority>,
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "SizeInGB")
    )]
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub size_in_gb: std::option::Option<i32>,
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub weight: std::option::Option<f64>,
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub labels: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl JobSpec {
    pub fn priority(&self) -> std::option::Option<&crate::model::Priority> {
        self.priority.as_ref()
    }
    pub fn size_in_gb(&self) -> std::option::Option<i32> {
        self.size_in_gb
    }
    pub fn weight(&self) -> std::option::Option<f64> {
        self.weight
    }
    pub fn labels(
        &self,
    ) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.labels.as_ref()
    }
    /// Adds a key-value pair to `labels`, failing if the key is already present.
    ///
    /// The map is created on first use. An existing entry is never overwritten.
    pub fn add_labels_entry(
        &mut self,
        k: impl Into<std::string::String>,
        v: impl Into<std::string::String>,
    ) -> std::result::Result<&mut Self, smithy_types::DuplicateKeyError> {
        smithy_types::map::insert_unique(&mut self.labels, k.into(), v.into())?;
        Ok(self)
    }
    /// Removes every entry of `labels`, leaving it unset.
    pub fn clear_labels_entries(&mut self) -> &mut Self {
        self.labels = None;
        self
    }
}
impl std::fmt::Debug for JobSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobSpec");
        formatter.field("priority", &self.priority);
        formatter.field("size_in_gb", &self.size_in_gb);
        formatter.field("weight", &self.weight);
        formatter.field("labels", &self.labels);
        formatter.finish()
    }
}
impl std::fmt::Display for JobSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Priority", &self.priority);
        shape.field("SizeInGB", &self.size_in_gb);
        shape.field("Weight", &self.weight);
        shape.map("Labels", &self.labels);
        shape.finish()
    }
}
impl std::hash::Hash for JobSpec {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.priority, state);
        std::hash::Hash::hash(&self.size_in_gb, state);
        smithy_types::hash::hash_f64(&self.weight, state);
        smithy_types::hash::hash_map(&self.labels, state);
    }
}
/// See [`JobSpec`](crate::model::JobSpec)
pub mod job_spec {
    /// A builder for [`JobSpec`](crate::model::JobSpec)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) priority: std::option::Option<crate::model::Priority>,
        pub(crate) size_in_gb: std::option::Option<i32>,
        pub(crate) weight: std::option::Option<f64>,
        pub(crate) labels: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn priority(mut self, input: impl Into<crate::model::Priority>) -> Self {
            self.priority = Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<crate::model::Priority>) -> Self {
            self.priority = input;
            self
        }
        pub fn get_priority(&self) -> &std::option::Option<crate::model::Priority> {
            &self.priority
        }
        pub fn size_in_gb(mut self, input: i32) -> Self {
            self.size_in_gb = Some(input);
            self
        }
        pub fn set_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.size_in_gb = input;
            self
        }
        pub fn get_size_in_gb(&self) -> &std::option::Option<i32> {
            &self.size_in_gb
        }
        pub fn weight(mut self, input: f64) -> Self {
            self.weight = Some(input);
            self
        }
        pub fn set_weight(mut self, input: std::option::Option<f64>) -> Self {
            self.weight = input;
            self
        }
        pub fn get_weight(&self) -> &std::option::Option<f64> {
            &self.weight
        }
        /// Adds a key-value pair to `labels`, failing if the key is already present.
        ///
        /// To override the contents of this collection use [`set_labels`](Self::set_labels).
        ///
        pub fn labels(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> std::result::Result<Self, smithy_types::DuplicateKeyError> {
            smithy_types::map::insert_unique(&mut self.labels, k.into(), v.into())?;
            Ok(self)
        }
        pub fn set_labels(
            mut self,
            input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.labels = input;
            self
        }
        pub fn get_labels(
            &self,
        ) -> &std::option::Option<std::collections::HashMap<std::string::String, std::string::String>> {
            &self.labels
        }
        /// Consumes the builder and constructs a [`JobSpec`](crate::model::JobSpec)
        pub fn build(self) -> crate::model::JobSpec {
            crate::model::JobSpec {
                priority: self.priority,
                size_in_gb: self.size_in_gb,
                weight: self.weight,
                labels: self.labels,
            }
        }
    }
}
impl JobSpec {
    /// Creates a new builder-style object to manufacture [`JobSpec`](crate::model::JobSpec)
    pub fn builder() -> crate::model::job_spec::Builder {
        crate::model::job_spec::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Priority {
    #[allow(missing_docs)] // documentation missing in model
    Low,
    #[allow(missing_docs)] // documentation missing in model
    High,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s {
            "LOW" => Priority::Low,
            "HIGH" => Priority::High,
            other => Priority::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Priority::from(s))
    }
}
impl Priority {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "LOW",
            Priority::High => "HIGH",
            Priority::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["LOW", "HIGH"]
    }
}
impl AsRef<str> for Priority {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}
