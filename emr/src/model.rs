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
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ActionOnFailure {
    #[allow(missing_docs)] // documentation missing in model
    TerminateJobFlow,
    #[allow(missing_docs)] // documentation missing in model
    TerminateCluster,
    #[allow(missing_docs)] // documentation missing in model
    CancelAndWait,
    #[allow(missing_docs)] // documentation missing in model
    Continue,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ActionOnFailure {
    fn from(s: &str) -> Self {
        match s {
            "TERMINATE_JOB_FLOW" => ActionOnFailure::TerminateJobFlow,
            "TERMINATE_CLUSTER" => ActionOnFailure::TerminateCluster,
            "CANCEL_AND_WAIT" => ActionOnFailure::CancelAndWait,
            "CONTINUE" => ActionOnFailure::Continue,
            other => ActionOnFailure::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for ActionOnFailure {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ActionOnFailure::from(s))
    }
}
impl ActionOnFailure {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ActionOnFailure::TerminateJobFlow => "TERMINATE_JOB_FLOW",
            ActionOnFailure::TerminateCluster => "TERMINATE_CLUSTER",
            ActionOnFailure::CancelAndWait => "CANCEL_AND_WAIT",
            ActionOnFailure::Continue => "CONTINUE",
            ActionOnFailure::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["TERMINATE_JOB_FLOW", "TERMINATE_CLUSTER", "CANCEL_AND_WAIT", "CONTINUE"]
    }
}
impl AsRef<str> for ActionOnFailure {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ActionOnFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ActionOnFailure {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ActionOnFailure {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
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
pub enum AdjustmentType {
    #[allow(missing_docs)] // documentation missing in model
    ChangeInCapacity,
    #[allow(missing_docs)] // documentation missing in model
    PercentChangeInCapacity,
    #[allow(missing_docs)] // documentation missing in model
    ExactCapacity,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for AdjustmentType {
    fn from(s: &str) -> Self {
        match s {
            "CHANGE_IN_CAPACITY" => AdjustmentType::ChangeInCapacity,
            "PERCENT_CHANGE_IN_CAPACITY" => AdjustmentType::PercentChangeInCapacity,
            "EXACT_CAPACITY" => AdjustmentType::ExactCapacity,
            other => AdjustmentType::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for AdjustmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AdjustmentType::from(s))
    }
}
impl AdjustmentType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            AdjustmentType::ChangeInCapacity => "CHANGE_IN_CAPACITY",
            AdjustmentType::PercentChangeInCapacity => "PERCENT_CHANGE_IN_CAPACITY",
            AdjustmentType::ExactCapacity => "EXACT_CAPACITY",
            AdjustmentType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["CHANGE_IN_CAPACITY", "PERCENT_CHANGE_IN_CAPACITY", "EXACT_CAPACITY"]
    }
}
impl AsRef<str> for AdjustmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for AdjustmentType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for AdjustmentType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>With Amazon EMR release version 4.0 and later, the only accepted parameter is the application name. To pass arguments to applications, you use configuration classifications specified using configuration JSON objects. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/emr-configure-apps.html">Configuring Applications</a>.</p> <p>With earlier Amazon EMR releases, the application is any Amazon or third-party software that you can add to the cluster. This structure contains a list of strings that indicates the software to use with the cluster and accepts a user argument list. Amazon EMR accepts and forwards the argument list to the corresponding installation script as bootstrap action argument.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Application {
    /// <p>The name of the application.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The version of the application.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub version: std::option::Option<std::string::String>,
    /// <p>Arguments for Amazon EMR to pass to the application.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>This option is for advanced users only. This is meta information about third-party applications that third-party vendors use for testing purposes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_info: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl Application {
    /// <p>The name of the application.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The version of the application.</p>
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
    /// <p>Arguments for Amazon EMR to pass to the application.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
    /// <p>This option is for advanced users only. This is meta information about third-party applications that third-party vendors use for testing purposes.</p>
    pub fn additional_info(
        &self,
    ) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.additional_info.as_ref()
    }
    /// Adds a key-value pair to `additional_info`, failing if the key is already present.
    ///
    /// The map is created on first use. An existing entry is never overwritten.
    pub fn add_additional_info_entry(
        &mut self,
        k: impl Into<std::string::String>,
        v: impl Into<std::string::String>,
    ) -> std::result::Result<&mut Self, smithy_types::DuplicateKeyError> {
        smithy_types::map::insert_unique(&mut self.additional_info, k.into(), v.into())?;
        Ok(self)
    }
    /// Removes every entry of `additional_info`, leaving it unset.
    pub fn clear_additional_info_entries(&mut self) -> &mut Self {
        self.additional_info = None;
        self
    }
}
impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Application");
        formatter.field("name", &self.name);
        formatter.field("version", &self.version);
        formatter.field("args", &self.args);
        formatter.field("additional_info", &self.additional_info);
        formatter.finish()
    }
}
impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("Version", &self.version);
        shape.list("Args", &self.args);
        shape.map("AdditionalInfo", &self.additional_info);
        shape.finish()
    }
}
impl std::hash::Hash for Application {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.name, state);
        std::hash::Hash::hash(&self.version, state);
        std::hash::Hash::hash(&self.args, state);
        smithy_types::hash::hash_map(&self.additional_info, state);
    }
}
/// See [`Application`](crate::model::Application)
pub mod application {
    /// A builder for [`Application`](crate::model::Application)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) additional_info: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>The name of the application.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The version of the application.</p>
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &std::option::Option<std::string::String> {
            &self.version
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>Arguments for Amazon EMR to pass to the application.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Adds a key-value pair to `additional_info`, failing if the key is already present.
        ///
        /// To override the contents of this collection use [`set_additional_info`](Self::set_additional_info).
        ///
        /// <p>This option is for advanced users only. This is meta information about third-party applications that third-party vendors use for testing purposes.</p>
        pub fn additional_info(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> std::result::Result<Self, smithy_types::DuplicateKeyError> {
            smithy_types::map::insert_unique(&mut self.additional_info, k.into(), v.into())?;
            Ok(self)
        }
        pub fn set_additional_info(
            mut self,
            input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.additional_info = input;
            self
        }
        pub fn get_additional_info(
            &self,
        ) -> &std::option::Option<std::collections::HashMap<std::string::String, std::string::String>> {
            &self.additional_info
        }
        /// Consumes the builder and constructs a [`Application`](crate::model::Application)
        pub fn build(self) -> crate::model::Application {
            crate::model::Application {
                name: self.name,
                version: self.version,
                args: self.args,
                additional_info: self.additional_info,
            }
        }
    }
}
impl Application {
    /// Creates a new builder-style object to manufacture [`Application`](crate::model::Application)
    pub fn builder() -> crate::model::application::Builder {
        crate::model::application::Builder::default()
    }
}

/// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. An automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See <a>PutAutoScalingPolicy</a>.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AutoScalingPolicy {
    /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub constraints: std::option::Option<crate::model::ScalingConstraints>,
    /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub rules: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
}
impl AutoScalingPolicy {
    /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
    pub fn constraints(&self) -> std::option::Option<&crate::model::ScalingConstraints> {
        self.constraints.as_ref()
    }
    /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
    pub fn rules(&self) -> std::option::Option<&[crate::model::ScalingRule]> {
        self.rules.as_deref()
    }
}
impl std::fmt::Debug for AutoScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AutoScalingPolicy");
        formatter.field("constraints", &self.constraints);
        formatter.field("rules", &self.rules);
        formatter.finish()
    }
}
impl std::fmt::Display for AutoScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Constraints", &self.constraints);
        shape.list("Rules", &self.rules);
        shape.finish()
    }
}
/// See [`AutoScalingPolicy`](crate::model::AutoScalingPolicy)
pub mod auto_scaling_policy {
    /// A builder for [`AutoScalingPolicy`](crate::model::AutoScalingPolicy)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) constraints: std::option::Option<crate::model::ScalingConstraints>,
        pub(crate) rules: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
    }
    impl Builder {
        /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
        pub fn constraints(mut self, input: crate::model::ScalingConstraints) -> Self {
            self.constraints = Some(input);
            self
        }
        pub fn set_constraints(
            mut self,
            input: std::option::Option<crate::model::ScalingConstraints>,
        ) -> Self {
            self.constraints = input;
            self
        }
        pub fn get_constraints(&self) -> &std::option::Option<crate::model::ScalingConstraints> {
            &self.constraints
        }
        /// Appends an item to `rules`.
        ///
        /// To override the contents of this collection use [`set_rules`](Self::set_rules).
        ///
        /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
        pub fn rules(mut self, input: impl Into<crate::model::ScalingRule>) -> Self {
            let mut v = self.rules.unwrap_or_default();
            v.push(input.into());
            self.rules = Some(v);
            self
        }
        pub fn set_rules(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
        ) -> Self {
            self.rules = input;
            self
        }
        pub fn get_rules(&self) -> &std::option::Option<std::vec::Vec<crate::model::ScalingRule>> {
            &self.rules
        }
        /// Consumes the builder and constructs a [`AutoScalingPolicy`](crate::model::AutoScalingPolicy)
        pub fn build(self) -> crate::model::AutoScalingPolicy {
            crate::model::AutoScalingPolicy {
                constraints: self.constraints,
                rules: self.rules,
            }
        }
    }
}
impl AutoScalingPolicy {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicy`](crate::model::AutoScalingPolicy)
    pub fn builder() -> crate::model::auto_scaling_policy::Builder {
        crate::model::auto_scaling_policy::Builder::default()
    }
}

/// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See <a>PutAutoScalingPolicy</a>.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AutoScalingPolicyDescription {
    /// <p>The status of an automatic scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::AutoScalingPolicyStatus>,
    /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub constraints: std::option::Option<crate::model::ScalingConstraints>,
    /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub rules: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
}
impl AutoScalingPolicyDescription {
    /// <p>The status of an automatic scaling policy.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::AutoScalingPolicyStatus> {
        self.status.as_ref()
    }
    /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
    pub fn constraints(&self) -> std::option::Option<&crate::model::ScalingConstraints> {
        self.constraints.as_ref()
    }
    /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
    pub fn rules(&self) -> std::option::Option<&[crate::model::ScalingRule]> {
        self.rules.as_deref()
    }
}
impl std::fmt::Debug for AutoScalingPolicyDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AutoScalingPolicyDescription");
        formatter.field("status", &self.status);
        formatter.field("constraints", &self.constraints);
        formatter.field("rules", &self.rules);
        formatter.finish()
    }
}
impl std::fmt::Display for AutoScalingPolicyDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Status", &self.status);
        shape.field("Constraints", &self.constraints);
        shape.list("Rules", &self.rules);
        shape.finish()
    }
}
/// See [`AutoScalingPolicyDescription`](crate::model::AutoScalingPolicyDescription)
pub mod auto_scaling_policy_description {
    /// A builder for [`AutoScalingPolicyDescription`](crate::model::AutoScalingPolicyDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::AutoScalingPolicyStatus>,
        pub(crate) constraints: std::option::Option<crate::model::ScalingConstraints>,
        pub(crate) rules: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
    }
    impl Builder {
        /// <p>The status of an automatic scaling policy.</p>
        pub fn status(mut self, input: crate::model::AutoScalingPolicyStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicyStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::AutoScalingPolicyStatus> {
            &self.status
        }
        /// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activity will not cause an instance group to grow above or below these limits.</p>
        pub fn constraints(mut self, input: crate::model::ScalingConstraints) -> Self {
            self.constraints = Some(input);
            self
        }
        pub fn set_constraints(
            mut self,
            input: std::option::Option<crate::model::ScalingConstraints>,
        ) -> Self {
            self.constraints = input;
            self
        }
        pub fn get_constraints(&self) -> &std::option::Option<crate::model::ScalingConstraints> {
            &self.constraints
        }
        /// Appends an item to `rules`.
        ///
        /// To override the contents of this collection use [`set_rules`](Self::set_rules).
        ///
        /// <p>The scale-in and scale-out rules that comprise the automatic scaling policy.</p>
        pub fn rules(mut self, input: impl Into<crate::model::ScalingRule>) -> Self {
            let mut v = self.rules.unwrap_or_default();
            v.push(input.into());
            self.rules = Some(v);
            self
        }
        pub fn set_rules(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::ScalingRule>>,
        ) -> Self {
            self.rules = input;
            self
        }
        pub fn get_rules(&self) -> &std::option::Option<std::vec::Vec<crate::model::ScalingRule>> {
            &self.rules
        }
        /// Consumes the builder and constructs a [`AutoScalingPolicyDescription`](crate::model::AutoScalingPolicyDescription)
        pub fn build(self) -> crate::model::AutoScalingPolicyDescription {
            crate::model::AutoScalingPolicyDescription {
                status: self.status,
                constraints: self.constraints,
                rules: self.rules,
            }
        }
    }
}
impl AutoScalingPolicyDescription {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyDescription`](crate::model::AutoScalingPolicyDescription)
    pub fn builder() -> crate::model::auto_scaling_policy_description::Builder {
        crate::model::auto_scaling_policy_description::Builder::default()
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
pub enum AutoScalingPolicyState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Attaching,
    #[allow(missing_docs)] // documentation missing in model
    Attached,
    #[allow(missing_docs)] // documentation missing in model
    Detaching,
    #[allow(missing_docs)] // documentation missing in model
    Detached,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for AutoScalingPolicyState {
    fn from(s: &str) -> Self {
        match s {
            "PENDING" => AutoScalingPolicyState::Pending,
            "ATTACHING" => AutoScalingPolicyState::Attaching,
            "ATTACHED" => AutoScalingPolicyState::Attached,
            "DETACHING" => AutoScalingPolicyState::Detaching,
            "DETACHED" => AutoScalingPolicyState::Detached,
            "FAILED" => AutoScalingPolicyState::Failed,
            other => AutoScalingPolicyState::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for AutoScalingPolicyState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AutoScalingPolicyState::from(s))
    }
}
impl AutoScalingPolicyState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            AutoScalingPolicyState::Pending => "PENDING",
            AutoScalingPolicyState::Attaching => "ATTACHING",
            AutoScalingPolicyState::Attached => "ATTACHED",
            AutoScalingPolicyState::Detaching => "DETACHING",
            AutoScalingPolicyState::Detached => "DETACHED",
            AutoScalingPolicyState::Failed => "FAILED",
            AutoScalingPolicyState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["PENDING", "ATTACHING", "ATTACHED", "DETACHING", "DETACHED", "FAILED"]
    }
}
impl AsRef<str> for AutoScalingPolicyState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for AutoScalingPolicyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for AutoScalingPolicyState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for AutoScalingPolicyState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The reason for an <a>AutoScalingPolicyStatus</a> change.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AutoScalingPolicyStateChangeReason {
    /// <p>The code indicating the reason for the change in status.<code>USER_REQUEST</code> indicates that the scaling policy status was changed by a user. <code>PROVISION_FAILURE</code> indicates that the status change was because the policy failed to provision. <code>CLEANUP_FAILURE</code> indicates an error.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::AutoScalingPolicyStateChangeReasonCode>,
    /// <p>A friendly, more verbose message that accompanies an automatic scaling policy state change.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl AutoScalingPolicyStateChangeReason {
    /// <p>The code indicating the reason for the change in status.<code>USER_REQUEST</code> indicates that the scaling policy status was changed by a user. <code>PROVISION_FAILURE</code> indicates that the status change was because the policy failed to provision. <code>CLEANUP_FAILURE</code> indicates an error.</p>
    pub fn code(
        &self,
    ) -> std::option::Option<&crate::model::AutoScalingPolicyStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>A friendly, more verbose message that accompanies an automatic scaling policy state change.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for AutoScalingPolicyStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AutoScalingPolicyStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for AutoScalingPolicyStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`AutoScalingPolicyStateChangeReason`](crate::model::AutoScalingPolicyStateChangeReason)
pub mod auto_scaling_policy_state_change_reason {
    /// A builder for [`AutoScalingPolicyStateChangeReason`](crate::model::AutoScalingPolicyStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::AutoScalingPolicyStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The code indicating the reason for the change in status.<code>USER_REQUEST</code> indicates that the scaling policy status was changed by a user. <code>PROVISION_FAILURE</code> indicates that the status change was because the policy failed to provision. <code>CLEANUP_FAILURE</code> indicates an error.</p>
        pub fn code(
            mut self,
            input: impl Into<crate::model::AutoScalingPolicyStateChangeReasonCode>,
        ) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicyStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(
            &self,
        ) -> &std::option::Option<crate::model::AutoScalingPolicyStateChangeReasonCode> {
            &self.code
        }
        /// <p>A friendly, more verbose message that accompanies an automatic scaling policy state change.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`AutoScalingPolicyStateChangeReason`](crate::model::AutoScalingPolicyStateChangeReason)
        pub fn build(self) -> crate::model::AutoScalingPolicyStateChangeReason {
            crate::model::AutoScalingPolicyStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl AutoScalingPolicyStateChangeReason {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyStateChangeReason`](crate::model::AutoScalingPolicyStateChangeReason)
    pub fn builder() -> crate::model::auto_scaling_policy_state_change_reason::Builder {
        crate::model::auto_scaling_policy_state_change_reason::Builder::default()
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
pub enum AutoScalingPolicyStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    UserRequest,
    #[allow(missing_docs)] // documentation missing in model
    ProvisionFailure,
    #[allow(missing_docs)] // documentation missing in model
    CleanupFailure,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for AutoScalingPolicyStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "USER_REQUEST" => AutoScalingPolicyStateChangeReasonCode::UserRequest,
            "PROVISION_FAILURE" => AutoScalingPolicyStateChangeReasonCode::ProvisionFailure,
            "CLEANUP_FAILURE" => AutoScalingPolicyStateChangeReasonCode::CleanupFailure,
            other => AutoScalingPolicyStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for AutoScalingPolicyStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AutoScalingPolicyStateChangeReasonCode::from(s))
    }
}
impl AutoScalingPolicyStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            AutoScalingPolicyStateChangeReasonCode::UserRequest => "USER_REQUEST",
            AutoScalingPolicyStateChangeReasonCode::ProvisionFailure => "PROVISION_FAILURE",
            AutoScalingPolicyStateChangeReasonCode::CleanupFailure => "CLEANUP_FAILURE",
            AutoScalingPolicyStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["USER_REQUEST", "PROVISION_FAILURE", "CLEANUP_FAILURE"]
    }
}
impl AsRef<str> for AutoScalingPolicyStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for AutoScalingPolicyStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for AutoScalingPolicyStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for AutoScalingPolicyStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The status of an automatic scaling policy.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AutoScalingPolicyStatus {
    /// <p>Indicates the status of the automatic scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::AutoScalingPolicyState>,
    /// <p>The reason for a change in status.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::AutoScalingPolicyStateChangeReason>,
}
impl AutoScalingPolicyStatus {
    /// <p>Indicates the status of the automatic scaling policy.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::AutoScalingPolicyState> {
        self.state.as_ref()
    }
    /// <p>The reason for a change in status.</p>
    pub fn state_change_reason(
        &self,
    ) -> std::option::Option<&crate::model::AutoScalingPolicyStateChangeReason> {
        self.state_change_reason.as_ref()
    }
}
impl std::fmt::Debug for AutoScalingPolicyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AutoScalingPolicyStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.finish()
    }
}
impl std::fmt::Display for AutoScalingPolicyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.finish()
    }
}
/// See [`AutoScalingPolicyStatus`](crate::model::AutoScalingPolicyStatus)
pub mod auto_scaling_policy_status {
    /// A builder for [`AutoScalingPolicyStatus`](crate::model::AutoScalingPolicyStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::AutoScalingPolicyState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::AutoScalingPolicyStateChangeReason>,
    }
    impl Builder {
        /// <p>Indicates the status of the automatic scaling policy.</p>
        pub fn state(mut self, input: impl Into<crate::model::AutoScalingPolicyState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicyState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::AutoScalingPolicyState> {
            &self.state
        }
        /// <p>The reason for a change in status.</p>
        pub fn state_change_reason(
            mut self,
            input: crate::model::AutoScalingPolicyStateChangeReason,
        ) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicyStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::AutoScalingPolicyStateChangeReason> {
            &self.state_change_reason
        }
        /// Consumes the builder and constructs a [`AutoScalingPolicyStatus`](crate::model::AutoScalingPolicyStatus)
        pub fn build(self) -> crate::model::AutoScalingPolicyStatus {
            crate::model::AutoScalingPolicyStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
            }
        }
    }
}
impl AutoScalingPolicyStatus {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyStatus`](crate::model::AutoScalingPolicyStatus)
    pub fn builder() -> crate::model::auto_scaling_policy_status::Builder {
        crate::model::auto_scaling_policy_status::Builder::default()
    }
}

/// <p>A configuration for Amazon EMR block public access. When <code>BlockPublicSecurityGroupRules</code> is set to <code>true</code>, Amazon EMR prevents cluster creation if one of the cluster's security groups has a rule that allows inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct BlockPublicAccessConfiguration {
    /// <p>Indicates whether Amazon EMR block public access is enabled (<code>true</code>) or disabled (<code>false</code>). By default, the value is <code>false</code> for accounts that have created EMR clusters before July 2019. For accounts created after this, the default is <code>true</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub block_public_security_group_rules: std::option::Option<bool>,
    /// <p>Specifies ports and port ranges that are permitted to have security group rules that allow inbound traffic from all public sources. For example, if Port 23 (Telnet) is specified for <code>PermittedPublicSecurityGroupRuleRanges</code>, Amazon EMR allows cluster creation if a security group associated with the cluster has a rule that allows inbound traffic on Port 23 from IPv4 0.0.0.0/0 or IPv6 port ::/0 as the source.</p> <p>By default, Port 22, which is used for SSH access to the cluster EC2 instances, is in the list of <code>PermittedPublicSecurityGroupRuleRanges</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub permitted_public_security_group_rule_ranges: std::option::Option<std::vec::Vec<crate::model::PortRange>>,
}
impl BlockPublicAccessConfiguration {
    /// <p>Indicates whether Amazon EMR block public access is enabled (<code>true</code>) or disabled (<code>false</code>). By default, the value is <code>false</code> for accounts that have created EMR clusters before July 2019. For accounts created after this, the default is <code>true</code>.</p>
    pub fn block_public_security_group_rules(&self) -> std::option::Option<bool> {
        self.block_public_security_group_rules
    }
    /// <p>Specifies ports and port ranges that are permitted to have security group rules that allow inbound traffic from all public sources. For example, if Port 23 (Telnet) is specified for <code>PermittedPublicSecurityGroupRuleRanges</code>, Amazon EMR allows cluster creation if a security group associated with the cluster has a rule that allows inbound traffic on Port 23 from IPv4 0.0.0.0/0 or IPv6 port ::/0 as the source.</p> <p>By default, Port 22, which is used for SSH access to the cluster EC2 instances, is in the list of <code>PermittedPublicSecurityGroupRuleRanges</code>.</p>
    pub fn permitted_public_security_group_rule_ranges(
        &self,
    ) -> std::option::Option<&[crate::model::PortRange]> {
        self.permitted_public_security_group_rule_ranges.as_deref()
    }
}
impl std::fmt::Debug for BlockPublicAccessConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BlockPublicAccessConfiguration");
        formatter.field("block_public_security_group_rules", &self.block_public_security_group_rules);
        formatter.field("permitted_public_security_group_rule_ranges", &self.permitted_public_security_group_rule_ranges);
        formatter.finish()
    }
}
impl std::fmt::Display for BlockPublicAccessConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("BlockPublicSecurityGroupRules", &self.block_public_security_group_rules);
        shape.list("PermittedPublicSecurityGroupRuleRanges", &self.permitted_public_security_group_rule_ranges);
        shape.finish()
    }
}
/// See [`BlockPublicAccessConfiguration`](crate::model::BlockPublicAccessConfiguration)
pub mod block_public_access_configuration {
    /// A builder for [`BlockPublicAccessConfiguration`](crate::model::BlockPublicAccessConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) block_public_security_group_rules: std::option::Option<bool>,
        pub(crate) permitted_public_security_group_rule_ranges: std::option::Option<std::vec::Vec<crate::model::PortRange>>,
    }
    impl Builder {
        /// <p>Indicates whether Amazon EMR block public access is enabled (<code>true</code>) or disabled (<code>false</code>). By default, the value is <code>false</code> for accounts that have created EMR clusters before July 2019. For accounts created after this, the default is <code>true</code>.</p>
        pub fn block_public_security_group_rules(mut self, input: bool) -> Self {
            self.block_public_security_group_rules = Some(input);
            self
        }
        pub fn set_block_public_security_group_rules(
            mut self,
            input: std::option::Option<bool>,
        ) -> Self {
            self.block_public_security_group_rules = input;
            self
        }
        pub fn get_block_public_security_group_rules(&self) -> &std::option::Option<bool> {
            &self.block_public_security_group_rules
        }
        /// Appends an item to `permitted_public_security_group_rule_ranges`.
        ///
        /// To override the contents of this collection use [`set_permitted_public_security_group_rule_ranges`](Self::set_permitted_public_security_group_rule_ranges).
        ///
        /// <p>Specifies ports and port ranges that are permitted to have security group rules that allow inbound traffic from all public sources. For example, if Port 23 (Telnet) is specified for <code>PermittedPublicSecurityGroupRuleRanges</code>, Amazon EMR allows cluster creation if a security group associated with the cluster has a rule that allows inbound traffic on Port 23 from IPv4 0.0.0.0/0 or IPv6 port ::/0 as the source.</p> <p>By default, Port 22, which is used for SSH access to the cluster EC2 instances, is in the list of <code>PermittedPublicSecurityGroupRuleRanges</code>.</p>
        pub fn permitted_public_security_group_rule_ranges(
            mut self,
            input: impl Into<crate::model::PortRange>,
        ) -> Self {
            let mut v = self.permitted_public_security_group_rule_ranges.unwrap_or_default();
            v.push(input.into());
            self.permitted_public_security_group_rule_ranges = Some(v);
            self
        }
        pub fn set_permitted_public_security_group_rule_ranges(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::PortRange>>,
        ) -> Self {
            self.permitted_public_security_group_rule_ranges = input;
            self
        }
        pub fn get_permitted_public_security_group_rule_ranges(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::PortRange>> {
            &self.permitted_public_security_group_rule_ranges
        }
        /// Consumes the builder and constructs a [`BlockPublicAccessConfiguration`](crate::model::BlockPublicAccessConfiguration)
        pub fn build(self) -> crate::model::BlockPublicAccessConfiguration {
            crate::model::BlockPublicAccessConfiguration {
                block_public_security_group_rules: self.block_public_security_group_rules,
                permitted_public_security_group_rule_ranges: self.permitted_public_security_group_rule_ranges,
            }
        }
    }
}
impl BlockPublicAccessConfiguration {
    /// Creates a new builder-style object to manufacture [`BlockPublicAccessConfiguration`](crate::model::BlockPublicAccessConfiguration)
    pub fn builder() -> crate::model::block_public_access_configuration::Builder {
        crate::model::block_public_access_configuration::Builder::default()
    }
}

/// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created. Each time a configuration for block public access is updated, Amazon EMR updates this metadata.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct BlockPublicAccessConfigurationMetadata {
    /// <p>The date and time that the configuration was created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The Amazon Resource Name that created or last modified the configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub created_by_arn: std::option::Option<std::string::String>,
}
impl BlockPublicAccessConfigurationMetadata {
    /// <p>The date and time that the configuration was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The Amazon Resource Name that created or last modified the configuration.</p>
    pub fn created_by_arn(&self) -> std::option::Option<&str> {
        self.created_by_arn.as_deref()
    }
}
impl std::fmt::Debug for BlockPublicAccessConfigurationMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BlockPublicAccessConfigurationMetadata");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("created_by_arn", &self.created_by_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for BlockPublicAccessConfigurationMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("CreatedByArn", &self.created_by_arn);
        shape.finish()
    }
}
/// See [`BlockPublicAccessConfigurationMetadata`](crate::model::BlockPublicAccessConfigurationMetadata)
pub mod block_public_access_configuration_metadata {
    /// A builder for [`BlockPublicAccessConfigurationMetadata`](crate::model::BlockPublicAccessConfigurationMetadata)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) created_by_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The date and time that the configuration was created.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The Amazon Resource Name that created or last modified the configuration.</p>
        pub fn created_by_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.created_by_arn = Some(input.into());
            self
        }
        pub fn set_created_by_arn(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.created_by_arn = input;
            self
        }
        pub fn get_created_by_arn(&self) -> &std::option::Option<std::string::String> {
            &self.created_by_arn
        }
        /// Consumes the builder and constructs a [`BlockPublicAccessConfigurationMetadata`](crate::model::BlockPublicAccessConfigurationMetadata)
        pub fn build(self) -> crate::model::BlockPublicAccessConfigurationMetadata {
            crate::model::BlockPublicAccessConfigurationMetadata {
                creation_date_time: self.creation_date_time,
                created_by_arn: self.created_by_arn,
            }
        }
    }
}
impl BlockPublicAccessConfigurationMetadata {
    /// Creates a new builder-style object to manufacture [`BlockPublicAccessConfigurationMetadata`](crate::model::BlockPublicAccessConfigurationMetadata)
    pub fn builder() -> crate::model::block_public_access_configuration_metadata::Builder {
        crate::model::block_public_access_configuration_metadata::Builder::default()
    }
}

/// <p>Configuration of a bootstrap action.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct BootstrapActionConfig {
    /// <p>The name of the bootstrap action.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The script run by the bootstrap action.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub script_bootstrap_action: std::option::Option<crate::model::ScriptBootstrapActionConfig>,
}
impl BootstrapActionConfig {
    /// <p>The name of the bootstrap action.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The script run by the bootstrap action.</p>
    pub fn script_bootstrap_action(
        &self,
    ) -> std::option::Option<&crate::model::ScriptBootstrapActionConfig> {
        self.script_bootstrap_action.as_ref()
    }
}
impl std::fmt::Debug for BootstrapActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BootstrapActionConfig");
        formatter.field("name", &self.name);
        formatter.field("script_bootstrap_action", &self.script_bootstrap_action);
        formatter.finish()
    }
}
impl std::fmt::Display for BootstrapActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("ScriptBootstrapAction", &self.script_bootstrap_action);
        shape.finish()
    }
}
/// See [`BootstrapActionConfig`](crate::model::BootstrapActionConfig)
pub mod bootstrap_action_config {
    /// A builder for [`BootstrapActionConfig`](crate::model::BootstrapActionConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) script_bootstrap_action: std::option::Option<crate::model::ScriptBootstrapActionConfig>,
    }
    impl Builder {
        /// <p>The name of the bootstrap action.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The script run by the bootstrap action.</p>
        pub fn script_bootstrap_action(
            mut self,
            input: crate::model::ScriptBootstrapActionConfig,
        ) -> Self {
            self.script_bootstrap_action = Some(input);
            self
        }
        pub fn set_script_bootstrap_action(
            mut self,
            input: std::option::Option<crate::model::ScriptBootstrapActionConfig>,
        ) -> Self {
            self.script_bootstrap_action = input;
            self
        }
        pub fn get_script_bootstrap_action(
            &self,
        ) -> &std::option::Option<crate::model::ScriptBootstrapActionConfig> {
            &self.script_bootstrap_action
        }
        /// Consumes the builder and constructs a [`BootstrapActionConfig`](crate::model::BootstrapActionConfig)
        pub fn build(self) -> crate::model::BootstrapActionConfig {
            crate::model::BootstrapActionConfig {
                name: self.name,
                script_bootstrap_action: self.script_bootstrap_action,
            }
        }
    }
}
impl BootstrapActionConfig {
    /// Creates a new builder-style object to manufacture [`BootstrapActionConfig`](crate::model::BootstrapActionConfig)
    pub fn builder() -> crate::model::bootstrap_action_config::Builder {
        crate::model::bootstrap_action_config::Builder::default()
    }
}

/// <p>Reports the configuration of a bootstrap action in a cluster (job flow).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct BootstrapActionDetail {
    /// <p>A description of the bootstrap action.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bootstrap_action_config: std::option::Option<crate::model::BootstrapActionConfig>,
}
impl BootstrapActionDetail {
    /// <p>A description of the bootstrap action.</p>
    pub fn bootstrap_action_config(
        &self,
    ) -> std::option::Option<&crate::model::BootstrapActionConfig> {
        self.bootstrap_action_config.as_ref()
    }
}
impl std::fmt::Debug for BootstrapActionDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BootstrapActionDetail");
        formatter.field("bootstrap_action_config", &self.bootstrap_action_config);
        formatter.finish()
    }
}
impl std::fmt::Display for BootstrapActionDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("BootstrapActionConfig", &self.bootstrap_action_config);
        shape.finish()
    }
}
/// See [`BootstrapActionDetail`](crate::model::BootstrapActionDetail)
pub mod bootstrap_action_detail {
    /// A builder for [`BootstrapActionDetail`](crate::model::BootstrapActionDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bootstrap_action_config: std::option::Option<crate::model::BootstrapActionConfig>,
    }
    impl Builder {
        /// <p>A description of the bootstrap action.</p>
        pub fn bootstrap_action_config(
            mut self,
            input: crate::model::BootstrapActionConfig,
        ) -> Self {
            self.bootstrap_action_config = Some(input);
            self
        }
        pub fn set_bootstrap_action_config(
            mut self,
            input: std::option::Option<crate::model::BootstrapActionConfig>,
        ) -> Self {
            self.bootstrap_action_config = input;
            self
        }
        pub fn get_bootstrap_action_config(
            &self,
        ) -> &std::option::Option<crate::model::BootstrapActionConfig> {
            &self.bootstrap_action_config
        }
        /// Consumes the builder and constructs a [`BootstrapActionDetail`](crate::model::BootstrapActionDetail)
        pub fn build(self) -> crate::model::BootstrapActionDetail {
            crate::model::BootstrapActionDetail {
                bootstrap_action_config: self.bootstrap_action_config,
            }
        }
    }
}
impl BootstrapActionDetail {
    /// Creates a new builder-style object to manufacture [`BootstrapActionDetail`](crate::model::BootstrapActionDetail)
    pub fn builder() -> crate::model::bootstrap_action_detail::Builder {
        crate::model::bootstrap_action_detail::Builder::default()
    }
}

/// <p>Specification of the status of a CancelSteps request. Available only in Amazon EMR version 4.8.0 and later, excluding version 5.0.0.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct CancelStepsInfo {
    /// <p>The encrypted StepId of a step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_id: std::option::Option<std::string::String>,
    /// <p>The status of a CancelSteps Request. The value may be SUBMITTED or FAILED.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::CancelStepsRequestStatus>,
    /// <p>The reason for the failure if the CancelSteps request fails.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub reason: std::option::Option<std::string::String>,
}
impl CancelStepsInfo {
    /// <p>The encrypted StepId of a step.</p>
    pub fn step_id(&self) -> std::option::Option<&str> {
        self.step_id.as_deref()
    }
    /// <p>The status of a CancelSteps Request. The value may be SUBMITTED or FAILED.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::CancelStepsRequestStatus> {
        self.status.as_ref()
    }
    /// <p>The reason for the failure if the CancelSteps request fails.</p>
    pub fn reason(&self) -> std::option::Option<&str> {
        self.reason.as_deref()
    }
}
impl std::fmt::Debug for CancelStepsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CancelStepsInfo");
        formatter.field("step_id", &self.step_id);
        formatter.field("status", &self.status);
        formatter.field("reason", &self.reason);
        formatter.finish()
    }
}
impl std::fmt::Display for CancelStepsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("StepId", &self.step_id);
        shape.field("Status", &self.status);
        shape.field("Reason", &self.reason);
        shape.finish()
    }
}
/// See [`CancelStepsInfo`](crate::model::CancelStepsInfo)
pub mod cancel_steps_info {
    /// A builder for [`CancelStepsInfo`](crate::model::CancelStepsInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) step_id: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::CancelStepsRequestStatus>,
        pub(crate) reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The encrypted StepId of a step.</p>
        pub fn step_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.step_id = Some(input.into());
            self
        }
        pub fn set_step_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.step_id = input;
            self
        }
        pub fn get_step_id(&self) -> &std::option::Option<std::string::String> {
            &self.step_id
        }
        /// <p>The status of a CancelSteps Request. The value may be SUBMITTED or FAILED.</p>
        pub fn status(mut self, input: impl Into<crate::model::CancelStepsRequestStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::CancelStepsRequestStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::CancelStepsRequestStatus> {
            &self.status
        }
        /// <p>The reason for the failure if the CancelSteps request fails.</p>
        pub fn reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.reason = Some(input.into());
            self
        }
        pub fn set_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reason = input;
            self
        }
        pub fn get_reason(&self) -> &std::option::Option<std::string::String> {
            &self.reason
        }
        /// Consumes the builder and constructs a [`CancelStepsInfo`](crate::model::CancelStepsInfo)
        pub fn build(self) -> crate::model::CancelStepsInfo {
            crate::model::CancelStepsInfo {
                step_id: self.step_id,
                status: self.status,
                reason: self.reason,
            }
        }
    }
}
impl CancelStepsInfo {
    /// Creates a new builder-style object to manufacture [`CancelStepsInfo`](crate::model::CancelStepsInfo)
    pub fn builder() -> crate::model::cancel_steps_info::Builder {
        crate::model::cancel_steps_info::Builder::default()
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
pub enum CancelStepsRequestStatus {
    #[allow(missing_docs)] // documentation missing in model
    Submitted,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for CancelStepsRequestStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUBMITTED" => CancelStepsRequestStatus::Submitted,
            "FAILED" => CancelStepsRequestStatus::Failed,
            other => CancelStepsRequestStatus::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for CancelStepsRequestStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CancelStepsRequestStatus::from(s))
    }
}
impl CancelStepsRequestStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            CancelStepsRequestStatus::Submitted => "SUBMITTED",
            CancelStepsRequestStatus::Failed => "FAILED",
            CancelStepsRequestStatus::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SUBMITTED", "FAILED"]
    }
}
impl AsRef<str> for CancelStepsRequestStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for CancelStepsRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for CancelStepsRequestStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for CancelStepsRequestStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The definition of a CloudWatch metric alarm, which determines when an automatic scaling activity is triggered. When the defined alarm conditions are satisfied, scaling activity begins.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct CloudWatchAlarmDefinition {
    /// <p>Determines how the metric specified by <code>MetricName</code> is compared to the value specified by <code>Threshold</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers automatic scaling activity. The default value is <code>1</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub evaluation_periods: std::option::Option<i32>,
    /// <p>The name of the CloudWatch metric that is watched to determine an alarm condition.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub metric_name: std::option::Option<std::string::String>,
    /// <p>The namespace for the CloudWatch metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub namespace: std::option::Option<std::string::String>,
    /// <p>The period, in seconds, over which the statistic is applied. EMR CloudWatch metrics are emitted every five minutes (300 seconds), so if an EMR CloudWatch metric is specified, specify <code>300</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub period: std::option::Option<i32>,
    /// <p>The statistic to apply to the metric associated with the alarm. The default is <code>AVERAGE</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub statistic: std::option::Option<crate::model::Statistic>,
    /// <p>The value against which the specified statistic is compared.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub threshold: std::option::Option<f64>,
    /// <p>The unit of measure associated with the CloudWatch metric being watched. The value specified for <code>Unit</code> must correspond to the units specified in the CloudWatch metric.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub unit: std::option::Option<crate::model::Unit>,
    /// <p>A CloudWatch metric dimension.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub dimensions: std::option::Option<std::vec::Vec<crate::model::MetricDimension>>,
}
impl CloudWatchAlarmDefinition {
    /// <p>Determines how the metric specified by <code>MetricName</code> is compared to the value specified by <code>Threshold</code>.</p>
    pub fn comparison_operator(&self) -> std::option::Option<&crate::model::ComparisonOperator> {
        self.comparison_operator.as_ref()
    }
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers automatic scaling activity. The default value is <code>1</code>.</p>
    pub fn evaluation_periods(&self) -> std::option::Option<i32> {
        self.evaluation_periods
    }
    /// <p>The name of the CloudWatch metric that is watched to determine an alarm condition.</p>
    pub fn metric_name(&self) -> std::option::Option<&str> {
        self.metric_name.as_deref()
    }
    /// <p>The namespace for the CloudWatch metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub fn namespace(&self) -> std::option::Option<&str> {
        self.namespace.as_deref()
    }
    /// <p>The period, in seconds, over which the statistic is applied. EMR CloudWatch metrics are emitted every five minutes (300 seconds), so if an EMR CloudWatch metric is specified, specify <code>300</code>.</p>
    pub fn period(&self) -> std::option::Option<i32> {
        self.period
    }
    /// <p>The statistic to apply to the metric associated with the alarm. The default is <code>AVERAGE</code>.</p>
    pub fn statistic(&self) -> std::option::Option<&crate::model::Statistic> {
        self.statistic.as_ref()
    }
    /// <p>The value against which the specified statistic is compared.</p>
    pub fn threshold(&self) -> std::option::Option<f64> {
        self.threshold
    }
    /// <p>The unit of measure associated with the CloudWatch metric being watched. The value specified for <code>Unit</code> must correspond to the units specified in the CloudWatch metric.</p>
    pub fn unit(&self) -> std::option::Option<&crate::model::Unit> {
        self.unit.as_ref()
    }
    /// <p>A CloudWatch metric dimension.</p>
    pub fn dimensions(&self) -> std::option::Option<&[crate::model::MetricDimension]> {
        self.dimensions.as_deref()
    }
}
impl std::fmt::Debug for CloudWatchAlarmDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CloudWatchAlarmDefinition");
        formatter.field("comparison_operator", &self.comparison_operator);
        formatter.field("evaluation_periods", &self.evaluation_periods);
        formatter.field("metric_name", &self.metric_name);
        formatter.field("namespace", &self.namespace);
        formatter.field("period", &self.period);
        formatter.field("statistic", &self.statistic);
        formatter.field("threshold", &self.threshold);
        formatter.field("unit", &self.unit);
        formatter.field("dimensions", &self.dimensions);
        formatter.finish()
    }
}
impl std::fmt::Display for CloudWatchAlarmDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ComparisonOperator", &self.comparison_operator);
        shape.field("EvaluationPeriods", &self.evaluation_periods);
        shape.field("MetricName", &self.metric_name);
        shape.field("Namespace", &self.namespace);
        shape.field("Period", &self.period);
        shape.field("Statistic", &self.statistic);
        shape.field("Threshold", &self.threshold);
        shape.field("Unit", &self.unit);
        shape.list("Dimensions", &self.dimensions);
        shape.finish()
    }
}
impl std::hash::Hash for CloudWatchAlarmDefinition {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.comparison_operator, state);
        std::hash::Hash::hash(&self.evaluation_periods, state);
        std::hash::Hash::hash(&self.metric_name, state);
        std::hash::Hash::hash(&self.namespace, state);
        std::hash::Hash::hash(&self.period, state);
        std::hash::Hash::hash(&self.statistic, state);
        smithy_types::hash::hash_f64(&self.threshold, state);
        std::hash::Hash::hash(&self.unit, state);
        std::hash::Hash::hash(&self.dimensions, state);
    }
}
/// See [`CloudWatchAlarmDefinition`](crate::model::CloudWatchAlarmDefinition)
pub mod cloud_watch_alarm_definition {
    /// A builder for [`CloudWatchAlarmDefinition`](crate::model::CloudWatchAlarmDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
        pub(crate) evaluation_periods: std::option::Option<i32>,
        pub(crate) metric_name: std::option::Option<std::string::String>,
        pub(crate) namespace: std::option::Option<std::string::String>,
        pub(crate) period: std::option::Option<i32>,
        pub(crate) statistic: std::option::Option<crate::model::Statistic>,
        pub(crate) threshold: std::option::Option<f64>,
        pub(crate) unit: std::option::Option<crate::model::Unit>,
        pub(crate) dimensions: std::option::Option<std::vec::Vec<crate::model::MetricDimension>>,
    }
    impl Builder {
        /// <p>Determines how the metric specified by <code>MetricName</code> is compared to the value specified by <code>Threshold</code>.</p>
        pub fn comparison_operator(
            mut self,
            input: impl Into<crate::model::ComparisonOperator>,
        ) -> Self {
            self.comparison_operator = Some(input.into());
            self
        }
        pub fn set_comparison_operator(
            mut self,
            input: std::option::Option<crate::model::ComparisonOperator>,
        ) -> Self {
            self.comparison_operator = input;
            self
        }
        pub fn get_comparison_operator(
            &self,
        ) -> &std::option::Option<crate::model::ComparisonOperator> {
            &self.comparison_operator
        }
        /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers automatic scaling activity. The default value is <code>1</code>.</p>
        pub fn evaluation_periods(mut self, input: i32) -> Self {
            self.evaluation_periods = Some(input);
            self
        }
        pub fn set_evaluation_periods(mut self, input: std::option::Option<i32>) -> Self {
            self.evaluation_periods = input;
            self
        }
        pub fn get_evaluation_periods(&self) -> &std::option::Option<i32> {
            &self.evaluation_periods
        }
        /// <p>The name of the CloudWatch metric that is watched to determine an alarm condition.</p>
        pub fn metric_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.metric_name = Some(input.into());
            self
        }
        pub fn set_metric_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metric_name = input;
            self
        }
        pub fn get_metric_name(&self) -> &std::option::Option<std::string::String> {
            &self.metric_name
        }
        /// <p>The namespace for the CloudWatch metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
        pub fn namespace(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace = Some(input.into());
            self
        }
        pub fn set_namespace(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace = input;
            self
        }
        pub fn get_namespace(&self) -> &std::option::Option<std::string::String> {
            &self.namespace
        }
        /// <p>The period, in seconds, over which the statistic is applied. EMR CloudWatch metrics are emitted every five minutes (300 seconds), so if an EMR CloudWatch metric is specified, specify <code>300</code>.</p>
        pub fn period(mut self, input: i32) -> Self {
            self.period = Some(input);
            self
        }
        pub fn set_period(mut self, input: std::option::Option<i32>) -> Self {
            self.period = input;
            self
        }
        pub fn get_period(&self) -> &std::option::Option<i32> {
            &self.period
        }
        /// <p>The statistic to apply to the metric associated with the alarm. The default is <code>AVERAGE</code>.</p>
        pub fn statistic(mut self, input: impl Into<crate::model::Statistic>) -> Self {
            self.statistic = Some(input.into());
            self
        }
        pub fn set_statistic(
            mut self,
            input: std::option::Option<crate::model::Statistic>,
        ) -> Self {
            self.statistic = input;
            self
        }
        pub fn get_statistic(&self) -> &std::option::Option<crate::model::Statistic> {
            &self.statistic
        }
        /// <p>The value against which the specified statistic is compared.</p>
        pub fn threshold(mut self, input: f64) -> Self {
            self.threshold = Some(input);
            self
        }
        pub fn set_threshold(mut self, input: std::option::Option<f64>) -> Self {
            self.threshold = input;
            self
        }
        pub fn get_threshold(&self) -> &std::option::Option<f64> {
            &self.threshold
        }
        /// <p>The unit of measure associated with the CloudWatch metric being watched. The value specified for <code>Unit</code> must correspond to the units specified in the CloudWatch metric.</p>
        pub fn unit(mut self, input: impl Into<crate::model::Unit>) -> Self {
            self.unit = Some(input.into());
            self
        }
        pub fn set_unit(mut self, input: std::option::Option<crate::model::Unit>) -> Self {
            self.unit = input;
            self
        }
        pub fn get_unit(&self) -> &std::option::Option<crate::model::Unit> {
            &self.unit
        }
        /// Appends an item to `dimensions`.
        ///
        /// To override the contents of this collection use [`set_dimensions`](Self::set_dimensions).
        ///
        /// <p>A CloudWatch metric dimension.</p>
        pub fn dimensions(mut self, input: impl Into<crate::model::MetricDimension>) -> Self {
            let mut v = self.dimensions.unwrap_or_default();
            v.push(input.into());
            self.dimensions = Some(v);
            self
        }
        pub fn set_dimensions(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::MetricDimension>>,
        ) -> Self {
            self.dimensions = input;
            self
        }
        pub fn get_dimensions(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::MetricDimension>> {
            &self.dimensions
        }
        /// Consumes the builder and constructs a [`CloudWatchAlarmDefinition`](crate::model::CloudWatchAlarmDefinition)
        pub fn build(self) -> crate::model::CloudWatchAlarmDefinition {
            crate::model::CloudWatchAlarmDefinition {
                comparison_operator: self.comparison_operator,
                evaluation_periods: self.evaluation_periods,
                metric_name: self.metric_name,
                namespace: self.namespace,
                period: self.period,
                statistic: self.statistic,
                threshold: self.threshold,
                unit: self.unit,
                dimensions: self.dimensions,
            }
        }
    }
}
impl CloudWatchAlarmDefinition {
    /// Creates a new builder-style object to manufacture [`CloudWatchAlarmDefinition`](crate::model::CloudWatchAlarmDefinition)
    pub fn builder() -> crate::model::cloud_watch_alarm_definition::Builder {
        crate::model::cloud_watch_alarm_definition::Builder::default()
    }
}

/// <p>The detailed description of the cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Cluster {
    /// <p>The unique identifier for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The current status details about the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::ClusterStatus>,
    /// <p>Provides information about the EC2 instances in a cluster grouped by category. For example, key name, subnet ID, IAM instance profile, and so on.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_instance_attributes: std::option::Option<crate::model::Ec2InstanceAttributes>,
    /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>The instance group configuration of the cluster. A value of <code>INSTANCE_GROUP</code> indicates a uniform instance group configuration. A value of <code>INSTANCE_FLEET</code> indicates an instance fleets configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_collection_type: std::option::Option<crate::model::InstanceCollectionType>,
    /// <p>The path to the Amazon S3 location where logs for this cluster are stored.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub log_uri: std::option::Option<std::string::String>,
    /// <p>The AMI version requested for this cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub requested_ami_version: std::option::Option<std::string::String>,
    /// <p>The AMI version running on this cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub running_ami_version: std::option::Option<std::string::String>,
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>. For more information about Amazon EMR release versions and included application versions and features, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">https://docs.aws.amazon.com/emr/latest/ReleaseGuide/</a>. The release label applies only to Amazon EMR releases version 4.0 and later. Earlier versions use <code>AmiVersion</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub release_label: std::option::Option<std::string::String>,
    /// <p>Specifies whether the cluster should terminate after completing all steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_terminate: std::option::Option<bool>,
    /// <p>Indicates whether Amazon EMR will lock the cluster to prevent the EC2 instances from being terminated by an API call or user intervention, or in the event of a cluster error.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub termination_protected: std::option::Option<bool>,
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub visible_to_all_users: std::option::Option<bool>,
    /// <p>The applications installed on this cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub applications: std::option::Option<std::vec::Vec<crate::model::Application>>,
    /// <p>A list of tags associated with a cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub service_role: std::option::Option<std::string::String>,
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub normalized_instance_hours: std::option::Option<i32>,
    /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub master_public_dns_name: std::option::Option<std::string::String>,
    /// <p>Applies only to Amazon EMR releases 4.x and later. The list of Configurations supplied to the EMR cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>The name of the security configuration applied to the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub security_configuration: std::option::Option<std::string::String>,
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_role: std::option::Option<std::string::String>,
    /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI if the cluster uses a custom AMI.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub custom_ami_id: std::option::Option<std::string::String>,
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_root_volume_size: std::option::Option<i32>,
    /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies the type of updates that are applied from the Amazon Linux AMI package repositories when an instance boots using the AMI.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub repo_upgrade_on_boot: std::option::Option<crate::model::RepoUpgradeOnBoot>,
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration. For more information see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-kerberos.html">Use Kerberos Authentication</a> in the <i>EMR Management Guide</i>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub kerberos_attributes: std::option::Option<crate::model::KerberosAttributes>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub outpost_arn: std::option::Option<std::string::String>,
    /// <p>Specifies the number of steps that can be executed concurrently.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_concurrency_level: std::option::Option<i32>,
}
impl Cluster {
    /// <p>The unique identifier for the cluster.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The current status details about the cluster.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::ClusterStatus> {
        self.status.as_ref()
    }
    /// <p>Provides information about the EC2 instances in a cluster grouped by category. For example, key name, subnet ID, IAM instance profile, and so on.</p>
    pub fn ec2_instance_attributes(
        &self,
    ) -> std::option::Option<&crate::model::Ec2InstanceAttributes> {
        self.ec2_instance_attributes.as_ref()
    }
    /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>The instance group configuration of the cluster. A value of <code>INSTANCE_GROUP</code> indicates a uniform instance group configuration. A value of <code>INSTANCE_FLEET</code> indicates an instance fleets configuration.</p>
    pub fn instance_collection_type(
        &self,
    ) -> std::option::Option<&crate::model::InstanceCollectionType> {
        self.instance_collection_type.as_ref()
    }
    /// <p>The path to the Amazon S3 location where logs for this cluster are stored.</p>
    pub fn log_uri(&self) -> std::option::Option<&str> {
        self.log_uri.as_deref()
    }
    /// <p>The AMI version requested for this cluster.</p>
    pub fn requested_ami_version(&self) -> std::option::Option<&str> {
        self.requested_ami_version.as_deref()
    }
    /// <p>The AMI version running on this cluster.</p>
    pub fn running_ami_version(&self) -> std::option::Option<&str> {
        self.running_ami_version.as_deref()
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>. For more information about Amazon EMR release versions and included application versions and features, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">https://docs.aws.amazon.com/emr/latest/ReleaseGuide/</a>. The release label applies only to Amazon EMR releases version 4.0 and later. Earlier versions use <code>AmiVersion</code>.</p>
    pub fn release_label(&self) -> std::option::Option<&str> {
        self.release_label.as_deref()
    }
    /// <p>Specifies whether the cluster should terminate after completing all steps.</p>
    pub fn auto_terminate(&self) -> std::option::Option<bool> {
        self.auto_terminate
    }
    /// <p>Indicates whether Amazon EMR will lock the cluster to prevent the EC2 instances from being terminated by an API call or user intervention, or in the event of a cluster error.</p>
    pub fn termination_protected(&self) -> std::option::Option<bool> {
        self.termination_protected
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
    pub fn visible_to_all_users(&self) -> std::option::Option<bool> {
        self.visible_to_all_users
    }
    /// <p>The applications installed on this cluster.</p>
    pub fn applications(&self) -> std::option::Option<&[crate::model::Application]> {
        self.applications.as_deref()
    }
    /// <p>A list of tags associated with a cluster.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(&self) -> std::option::Option<&str> {
        self.service_role.as_deref()
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
    pub fn normalized_instance_hours(&self) -> std::option::Option<i32> {
        self.normalized_instance_hours
    }
    /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
    pub fn master_public_dns_name(&self) -> std::option::Option<&str> {
        self.master_public_dns_name.as_deref()
    }
    /// <p>Applies only to Amazon EMR releases 4.x and later. The list of Configurations supplied to the EMR cluster.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>The name of the security configuration applied to the cluster.</p>
    pub fn security_configuration(&self) -> std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
    pub fn auto_scaling_role(&self) -> std::option::Option<&str> {
        self.auto_scaling_role.as_deref()
    }
    /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    pub fn scale_down_behavior(&self) -> std::option::Option<&crate::model::ScaleDownBehavior> {
        self.scale_down_behavior.as_ref()
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI if the cluster uses a custom AMI.</p>
    pub fn custom_ami_id(&self) -> std::option::Option<&str> {
        self.custom_ami_id.as_deref()
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn ebs_root_volume_size(&self) -> std::option::Option<i32> {
        self.ebs_root_volume_size
    }
    /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies the type of updates that are applied from the Amazon Linux AMI package repositories when an instance boots using the AMI.</p>
    pub fn repo_upgrade_on_boot(&self) -> std::option::Option<&crate::model::RepoUpgradeOnBoot> {
        self.repo_upgrade_on_boot.as_ref()
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration. For more information see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-kerberos.html">Use Kerberos Authentication</a> in the <i>EMR Management Guide</i>.</p>
    pub fn kerberos_attributes(&self) -> std::option::Option<&crate::model::KerberosAttributes> {
        self.kerberos_attributes.as_ref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }
    /// <p>Specifies the number of steps that can be executed concurrently.</p>
    pub fn step_concurrency_level(&self) -> std::option::Option<i32> {
        self.step_concurrency_level
    }
}
impl std::fmt::Debug for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Cluster");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("status", &self.status);
        formatter.field("ec2_instance_attributes", &self.ec2_instance_attributes);
        formatter.field("instance_collection_type", &self.instance_collection_type);
        formatter.field("log_uri", &self.log_uri);
        formatter.field("requested_ami_version", &self.requested_ami_version);
        formatter.field("running_ami_version", &self.running_ami_version);
        formatter.field("release_label", &self.release_label);
        formatter.field("auto_terminate", &self.auto_terminate);
        formatter.field("termination_protected", &self.termination_protected);
        formatter.field("visible_to_all_users", &self.visible_to_all_users);
        formatter.field("applications", &self.applications);
        formatter.field("tags", &self.tags);
        formatter.field("service_role", &self.service_role);
        formatter.field("normalized_instance_hours", &self.normalized_instance_hours);
        formatter.field("master_public_dns_name", &self.master_public_dns_name);
        formatter.field("configurations", &self.configurations);
        formatter.field("security_configuration", &self.security_configuration);
        formatter.field("auto_scaling_role", &self.auto_scaling_role);
        formatter.field("scale_down_behavior", &self.scale_down_behavior);
        formatter.field("custom_ami_id", &self.custom_ami_id);
        formatter.field("ebs_root_volume_size", &self.ebs_root_volume_size);
        formatter.field("repo_upgrade_on_boot", &self.repo_upgrade_on_boot);
        formatter.field("kerberos_attributes", &self.kerberos_attributes);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.field("outpost_arn", &self.outpost_arn);
        formatter.field("step_concurrency_level", &self.step_concurrency_level);
        formatter.finish()
    }
}
impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Status", &self.status);
        shape.field("Ec2InstanceAttributes", &self.ec2_instance_attributes);
        shape.field("InstanceCollectionType", &self.instance_collection_type);
        shape.field("LogUri", &self.log_uri);
        shape.field("RequestedAmiVersion", &self.requested_ami_version);
        shape.field("RunningAmiVersion", &self.running_ami_version);
        shape.field("ReleaseLabel", &self.release_label);
        shape.field("AutoTerminate", &self.auto_terminate);
        shape.field("TerminationProtected", &self.termination_protected);
        shape.field("VisibleToAllUsers", &self.visible_to_all_users);
        shape.list("Applications", &self.applications);
        shape.list("Tags", &self.tags);
        shape.field("ServiceRole", &self.service_role);
        shape.field("NormalizedInstanceHours", &self.normalized_instance_hours);
        shape.field("MasterPublicDnsName", &self.master_public_dns_name);
        shape.list("Configurations", &self.configurations);
        shape.field("SecurityConfiguration", &self.security_configuration);
        shape.field("AutoScalingRole", &self.auto_scaling_role);
        shape.field("ScaleDownBehavior", &self.scale_down_behavior);
        shape.field("CustomAmiId", &self.custom_ami_id);
        shape.field("EbsRootVolumeSize", &self.ebs_root_volume_size);
        shape.field("RepoUpgradeOnBoot", &self.repo_upgrade_on_boot);
        shape.field("KerberosAttributes", &self.kerberos_attributes);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.field("OutpostArn", &self.outpost_arn);
        shape.field("StepConcurrencyLevel", &self.step_concurrency_level);
        shape.finish()
    }
}
/// See [`Cluster`](crate::model::Cluster)
pub mod cluster {
    /// A builder for [`Cluster`](crate::model::Cluster)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::ClusterStatus>,
        pub(crate) ec2_instance_attributes: std::option::Option<crate::model::Ec2InstanceAttributes>,
        pub(crate) instance_collection_type: std::option::Option<crate::model::InstanceCollectionType>,
        pub(crate) log_uri: std::option::Option<std::string::String>,
        pub(crate) requested_ami_version: std::option::Option<std::string::String>,
        pub(crate) running_ami_version: std::option::Option<std::string::String>,
        pub(crate) release_label: std::option::Option<std::string::String>,
        pub(crate) auto_terminate: std::option::Option<bool>,
        pub(crate) termination_protected: std::option::Option<bool>,
        pub(crate) visible_to_all_users: std::option::Option<bool>,
        pub(crate) applications: std::option::Option<std::vec::Vec<crate::model::Application>>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) normalized_instance_hours: std::option::Option<i32>,
        pub(crate) master_public_dns_name: std::option::Option<std::string::String>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) security_configuration: std::option::Option<std::string::String>,
        pub(crate) auto_scaling_role: std::option::Option<std::string::String>,
        pub(crate) scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
        pub(crate) custom_ami_id: std::option::Option<std::string::String>,
        pub(crate) ebs_root_volume_size: std::option::Option<i32>,
        pub(crate) repo_upgrade_on_boot: std::option::Option<crate::model::RepoUpgradeOnBoot>,
        pub(crate) kerberos_attributes: std::option::Option<crate::model::KerberosAttributes>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
        pub(crate) step_concurrency_level: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The unique identifier for the cluster.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the cluster.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The current status details about the cluster.</p>
        pub fn status(mut self, input: crate::model::ClusterStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::ClusterStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::ClusterStatus> {
            &self.status
        }
        /// <p>Provides information about the EC2 instances in a cluster grouped by category. For example, key name, subnet ID, IAM instance profile, and so on.</p>
        pub fn ec2_instance_attributes(
            mut self,
            input: crate::model::Ec2InstanceAttributes,
        ) -> Self {
            self.ec2_instance_attributes = Some(input);
            self
        }
        pub fn set_ec2_instance_attributes(
            mut self,
            input: std::option::Option<crate::model::Ec2InstanceAttributes>,
        ) -> Self {
            self.ec2_instance_attributes = input;
            self
        }
        pub fn get_ec2_instance_attributes(
            &self,
        ) -> &std::option::Option<crate::model::Ec2InstanceAttributes> {
            &self.ec2_instance_attributes
        }
        /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>The instance group configuration of the cluster. A value of <code>INSTANCE_GROUP</code> indicates a uniform instance group configuration. A value of <code>INSTANCE_FLEET</code> indicates an instance fleets configuration.</p>
        pub fn instance_collection_type(
            mut self,
            input: impl Into<crate::model::InstanceCollectionType>,
        ) -> Self {
            self.instance_collection_type = Some(input.into());
            self
        }
        pub fn set_instance_collection_type(
            mut self,
            input: std::option::Option<crate::model::InstanceCollectionType>,
        ) -> Self {
            self.instance_collection_type = input;
            self
        }
        pub fn get_instance_collection_type(
            &self,
        ) -> &std::option::Option<crate::model::InstanceCollectionType> {
            &self.instance_collection_type
        }
        /// <p>The path to the Amazon S3 location where logs for this cluster are stored.</p>
        pub fn log_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_uri = Some(input.into());
            self
        }
        pub fn set_log_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_uri = input;
            self
        }
        pub fn get_log_uri(&self) -> &std::option::Option<std::string::String> {
            &self.log_uri
        }
        /// <p>The AMI version requested for this cluster.</p>
        pub fn requested_ami_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.requested_ami_version = Some(input.into());
            self
        }
        pub fn set_requested_ami_version(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.requested_ami_version = input;
            self
        }
        pub fn get_requested_ami_version(&self) -> &std::option::Option<std::string::String> {
            &self.requested_ami_version
        }
        /// <p>The AMI version running on this cluster.</p>
        pub fn running_ami_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.running_ami_version = Some(input.into());
            self
        }
        pub fn set_running_ami_version(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.running_ami_version = input;
            self
        }
        pub fn get_running_ami_version(&self) -> &std::option::Option<std::string::String> {
            &self.running_ami_version
        }
        /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>. For more information about Amazon EMR release versions and included application versions and features, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">https://docs.aws.amazon.com/emr/latest/ReleaseGuide/</a>. The release label applies only to Amazon EMR releases version 4.0 and later. Earlier versions use <code>AmiVersion</code>.</p>
        pub fn release_label(mut self, input: impl Into<std::string::String>) -> Self {
            self.release_label = Some(input.into());
            self
        }
        pub fn set_release_label(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.release_label = input;
            self
        }
        pub fn get_release_label(&self) -> &std::option::Option<std::string::String> {
            &self.release_label
        }
        /// <p>Specifies whether the cluster should terminate after completing all steps.</p>
        pub fn auto_terminate(mut self, input: bool) -> Self {
            self.auto_terminate = Some(input);
            self
        }
        pub fn set_auto_terminate(mut self, input: std::option::Option<bool>) -> Self {
            self.auto_terminate = input;
            self
        }
        pub fn get_auto_terminate(&self) -> &std::option::Option<bool> {
            &self.auto_terminate
        }
        /// <p>Indicates whether Amazon EMR will lock the cluster to prevent the EC2 instances from being terminated by an API call or user intervention, or in the event of a cluster error.</p>
        pub fn termination_protected(mut self, input: bool) -> Self {
            self.termination_protected = Some(input);
            self
        }
        pub fn set_termination_protected(mut self, input: std::option::Option<bool>) -> Self {
            self.termination_protected = input;
            self
        }
        pub fn get_termination_protected(&self) -> &std::option::Option<bool> {
            &self.termination_protected
        }
        /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
        pub fn visible_to_all_users(mut self, input: bool) -> Self {
            self.visible_to_all_users = Some(input);
            self
        }
        pub fn set_visible_to_all_users(mut self, input: std::option::Option<bool>) -> Self {
            self.visible_to_all_users = input;
            self
        }
        pub fn get_visible_to_all_users(&self) -> &std::option::Option<bool> {
            &self.visible_to_all_users
        }
        /// Appends an item to `applications`.
        ///
        /// To override the contents of this collection use [`set_applications`](Self::set_applications).
        ///
        /// <p>The applications installed on this cluster.</p>
        pub fn applications(mut self, input: impl Into<crate::model::Application>) -> Self {
            let mut v = self.applications.unwrap_or_default();
            v.push(input.into());
            self.applications = Some(v);
            self
        }
        pub fn set_applications(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Application>>,
        ) -> Self {
            self.applications = input;
            self
        }
        pub fn get_applications(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Application>> {
            &self.applications
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A list of tags associated with a cluster.</p>
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.tags = input;
            self
        }
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_role = Some(input.into());
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_role = input;
            self
        }
        pub fn get_service_role(&self) -> &std::option::Option<std::string::String> {
            &self.service_role
        }
        /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
        pub fn normalized_instance_hours(mut self, input: i32) -> Self {
            self.normalized_instance_hours = Some(input);
            self
        }
        pub fn set_normalized_instance_hours(mut self, input: std::option::Option<i32>) -> Self {
            self.normalized_instance_hours = input;
            self
        }
        pub fn get_normalized_instance_hours(&self) -> &std::option::Option<i32> {
            &self.normalized_instance_hours
        }
        /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
        pub fn master_public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.master_public_dns_name = Some(input.into());
            self
        }
        pub fn set_master_public_dns_name(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.master_public_dns_name = input;
            self
        }
        pub fn get_master_public_dns_name(&self) -> &std::option::Option<std::string::String> {
            &self.master_public_dns_name
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>Applies only to Amazon EMR releases 4.x and later. The list of Configurations supplied to the EMR cluster.</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// <p>The name of the security configuration applied to the cluster.</p>
        pub fn security_configuration(mut self, input: impl Into<std::string::String>) -> Self {
            self.security_configuration = Some(input.into());
            self
        }
        pub fn set_security_configuration(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.security_configuration = input;
            self
        }
        pub fn get_security_configuration(&self) -> &std::option::Option<std::string::String> {
            &self.security_configuration
        }
        /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
        pub fn auto_scaling_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.auto_scaling_role = Some(input.into());
            self
        }
        pub fn set_auto_scaling_role(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.auto_scaling_role = input;
            self
        }
        pub fn get_auto_scaling_role(&self) -> &std::option::Option<std::string::String> {
            &self.auto_scaling_role
        }
        /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
        pub fn scale_down_behavior(
            mut self,
            input: impl Into<crate::model::ScaleDownBehavior>,
        ) -> Self {
            self.scale_down_behavior = Some(input.into());
            self
        }
        pub fn set_scale_down_behavior(
            mut self,
            input: std::option::Option<crate::model::ScaleDownBehavior>,
        ) -> Self {
            self.scale_down_behavior = input;
            self
        }
        pub fn get_scale_down_behavior(
            &self,
        ) -> &std::option::Option<crate::model::ScaleDownBehavior> {
            &self.scale_down_behavior
        }
        /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI if the cluster uses a custom AMI.</p>
        pub fn custom_ami_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.custom_ami_id = Some(input.into());
            self
        }
        pub fn set_custom_ami_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.custom_ami_id = input;
            self
        }
        pub fn get_custom_ami_id(&self) -> &std::option::Option<std::string::String> {
            &self.custom_ami_id
        }
        /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
        pub fn ebs_root_volume_size(mut self, input: i32) -> Self {
            self.ebs_root_volume_size = Some(input);
            self
        }
        pub fn set_ebs_root_volume_size(mut self, input: std::option::Option<i32>) -> Self {
            self.ebs_root_volume_size = input;
            self
        }
        pub fn get_ebs_root_volume_size(&self) -> &std::option::Option<i32> {
            &self.ebs_root_volume_size
        }
        /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies the type of updates that are applied from the Amazon Linux AMI package repositories when an instance boots using the AMI.</p>
        pub fn repo_upgrade_on_boot(
            mut self,
            input: impl Into<crate::model::RepoUpgradeOnBoot>,
        ) -> Self {
            self.repo_upgrade_on_boot = Some(input.into());
            self
        }
        pub fn set_repo_upgrade_on_boot(
            mut self,
            input: std::option::Option<crate::model::RepoUpgradeOnBoot>,
        ) -> Self {
            self.repo_upgrade_on_boot = input;
            self
        }
        pub fn get_repo_upgrade_on_boot(
            &self,
        ) -> &std::option::Option<crate::model::RepoUpgradeOnBoot> {
            &self.repo_upgrade_on_boot
        }
        /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration. For more information see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-kerberos.html">Use Kerberos Authentication</a> in the <i>EMR Management Guide</i>.</p>
        pub fn kerberos_attributes(mut self, input: crate::model::KerberosAttributes) -> Self {
            self.kerberos_attributes = Some(input);
            self
        }
        pub fn set_kerberos_attributes(
            mut self,
            input: std::option::Option<crate::model::KerberosAttributes>,
        ) -> Self {
            self.kerberos_attributes = input;
            self
        }
        pub fn get_kerberos_attributes(
            &self,
        ) -> &std::option::Option<crate::model::KerberosAttributes> {
            &self.kerberos_attributes
        }
        /// <p>The Amazon Resource Name of the cluster.</p>
        pub fn cluster_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_arn = Some(input.into());
            self
        }
        pub fn set_cluster_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_arn = input;
            self
        }
        pub fn get_cluster_arn(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_arn
        }
        /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
        pub fn outpost_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.outpost_arn = Some(input.into());
            self
        }
        pub fn set_outpost_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.outpost_arn = input;
            self
        }
        pub fn get_outpost_arn(&self) -> &std::option::Option<std::string::String> {
            &self.outpost_arn
        }
        /// <p>Specifies the number of steps that can be executed concurrently.</p>
        pub fn step_concurrency_level(mut self, input: i32) -> Self {
            self.step_concurrency_level = Some(input);
            self
        }
        pub fn set_step_concurrency_level(mut self, input: std::option::Option<i32>) -> Self {
            self.step_concurrency_level = input;
            self
        }
        pub fn get_step_concurrency_level(&self) -> &std::option::Option<i32> {
            &self.step_concurrency_level
        }
        /// Consumes the builder and constructs a [`Cluster`](crate::model::Cluster)
        pub fn build(self) -> crate::model::Cluster {
            crate::model::Cluster {
                id: self.id,
                name: self.name,
                status: self.status,
                ec2_instance_attributes: self.ec2_instance_attributes,
                instance_collection_type: self.instance_collection_type,
                log_uri: self.log_uri,
                requested_ami_version: self.requested_ami_version,
                running_ami_version: self.running_ami_version,
                release_label: self.release_label,
                auto_terminate: self.auto_terminate,
                termination_protected: self.termination_protected,
                visible_to_all_users: self.visible_to_all_users,
                applications: self.applications,
                tags: self.tags,
                service_role: self.service_role,
                normalized_instance_hours: self.normalized_instance_hours,
                master_public_dns_name: self.master_public_dns_name,
                configurations: self.configurations,
                security_configuration: self.security_configuration,
                auto_scaling_role: self.auto_scaling_role,
                scale_down_behavior: self.scale_down_behavior,
                custom_ami_id: self.custom_ami_id,
                ebs_root_volume_size: self.ebs_root_volume_size,
                repo_upgrade_on_boot: self.repo_upgrade_on_boot,
                kerberos_attributes: self.kerberos_attributes,
                cluster_arn: self.cluster_arn,
                outpost_arn: self.outpost_arn,
                step_concurrency_level: self.step_concurrency_level,
            }
        }
    }
}
impl Cluster {
    /// Creates a new builder-style object to manufacture [`Cluster`](crate::model::Cluster)
    pub fn builder() -> crate::model::cluster::Builder {
        crate::model::cluster::Builder::default()
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
pub enum ClusterState {
    #[allow(missing_docs)] // documentation missing in model
    Starting,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Waiting,
    #[allow(missing_docs)] // documentation missing in model
    Terminating,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    TerminatedWithErrors,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ClusterState {
    fn from(s: &str) -> Self {
        match s {
            "STARTING" => ClusterState::Starting,
            "BOOTSTRAPPING" => ClusterState::Bootstrapping,
            "RUNNING" => ClusterState::Running,
            "WAITING" => ClusterState::Waiting,
            "TERMINATING" => ClusterState::Terminating,
            "TERMINATED" => ClusterState::Terminated,
            "TERMINATED_WITH_ERRORS" => ClusterState::TerminatedWithErrors,
            other => ClusterState::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for ClusterState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ClusterState::from(s))
    }
}
impl ClusterState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ClusterState::Starting => "STARTING",
            ClusterState::Bootstrapping => "BOOTSTRAPPING",
            ClusterState::Running => "RUNNING",
            ClusterState::Waiting => "WAITING",
            ClusterState::Terminating => "TERMINATING",
            ClusterState::Terminated => "TERMINATED",
            ClusterState::TerminatedWithErrors => "TERMINATED_WITH_ERRORS",
            ClusterState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "STARTING",
            "BOOTSTRAPPING",
            "RUNNING",
            "WAITING",
            "TERMINATING",
            "TERMINATED",
            "TERMINATED_WITH_ERRORS",
        ]
    }
}
impl AsRef<str> for ClusterState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ClusterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ClusterState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ClusterState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The reason that the cluster changed to its current state.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ClusterStateChangeReason {
    /// <p>The programmatic code for the state change reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::ClusterStateChangeReasonCode>,
    /// <p>The descriptive message for the state change reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl ClusterStateChangeReason {
    /// <p>The programmatic code for the state change reason.</p>
    pub fn code(&self) -> std::option::Option<&crate::model::ClusterStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for ClusterStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ClusterStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for ClusterStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`ClusterStateChangeReason`](crate::model::ClusterStateChangeReason)
pub mod cluster_state_change_reason {
    /// A builder for [`ClusterStateChangeReason`](crate::model::ClusterStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::ClusterStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The programmatic code for the state change reason.</p>
        pub fn code(
            mut self,
            input: impl Into<crate::model::ClusterStateChangeReasonCode>,
        ) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::ClusterStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(&self) -> &std::option::Option<crate::model::ClusterStateChangeReasonCode> {
            &self.code
        }
        /// <p>The descriptive message for the state change reason.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`ClusterStateChangeReason`](crate::model::ClusterStateChangeReason)
        pub fn build(self) -> crate::model::ClusterStateChangeReason {
            crate::model::ClusterStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl ClusterStateChangeReason {
    /// Creates a new builder-style object to manufacture [`ClusterStateChangeReason`](crate::model::ClusterStateChangeReason)
    pub fn builder() -> crate::model::cluster_state_change_reason::Builder {
        crate::model::cluster_state_change_reason::Builder::default()
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
pub enum ClusterStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFleetTimeout,
    #[allow(missing_docs)] // documentation missing in model
    BootstrapFailure,
    #[allow(missing_docs)] // documentation missing in model
    UserRequest,
    #[allow(missing_docs)] // documentation missing in model
    StepFailure,
    #[allow(missing_docs)] // documentation missing in model
    AllStepsCompleted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ClusterStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "INTERNAL_ERROR" => ClusterStateChangeReasonCode::InternalError,
            "VALIDATION_ERROR" => ClusterStateChangeReasonCode::ValidationError,
            "INSTANCE_FAILURE" => ClusterStateChangeReasonCode::InstanceFailure,
            "INSTANCE_FLEET_TIMEOUT" => ClusterStateChangeReasonCode::InstanceFleetTimeout,
            "BOOTSTRAP_FAILURE" => ClusterStateChangeReasonCode::BootstrapFailure,
            "USER_REQUEST" => ClusterStateChangeReasonCode::UserRequest,
            "STEP_FAILURE" => ClusterStateChangeReasonCode::StepFailure,
            "ALL_STEPS_COMPLETED" => ClusterStateChangeReasonCode::AllStepsCompleted,
            other => ClusterStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for ClusterStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ClusterStateChangeReasonCode::from(s))
    }
}
impl ClusterStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ClusterStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            ClusterStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            ClusterStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            ClusterStateChangeReasonCode::InstanceFleetTimeout => "INSTANCE_FLEET_TIMEOUT",
            ClusterStateChangeReasonCode::BootstrapFailure => "BOOTSTRAP_FAILURE",
            ClusterStateChangeReasonCode::UserRequest => "USER_REQUEST",
            ClusterStateChangeReasonCode::StepFailure => "STEP_FAILURE",
            ClusterStateChangeReasonCode::AllStepsCompleted => "ALL_STEPS_COMPLETED",
            ClusterStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "INTERNAL_ERROR",
            "VALIDATION_ERROR",
            "INSTANCE_FAILURE",
            "INSTANCE_FLEET_TIMEOUT",
            "BOOTSTRAP_FAILURE",
            "USER_REQUEST",
            "STEP_FAILURE",
            "ALL_STEPS_COMPLETED",
        ]
    }
}
impl AsRef<str> for ClusterStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ClusterStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ClusterStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ClusterStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The detailed status of the cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ClusterStatus {
    /// <p>The current state of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::ClusterState>,
    /// <p>The reason for the cluster status change.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::ClusterStateChangeReason>,
    /// <p>A timeline that represents the status of a cluster over the lifetime of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeline: std::option::Option<crate::model::ClusterTimeline>,
}
impl ClusterStatus {
    /// <p>The current state of the cluster.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::ClusterState> {
        self.state.as_ref()
    }
    /// <p>The reason for the cluster status change.</p>
    pub fn state_change_reason(
        &self,
    ) -> std::option::Option<&crate::model::ClusterStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>A timeline that represents the status of a cluster over the lifetime of the cluster.</p>
    pub fn timeline(&self) -> std::option::Option<&crate::model::ClusterTimeline> {
        self.timeline.as_ref()
    }
}
impl std::fmt::Debug for ClusterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ClusterStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.field("timeline", &self.timeline);
        formatter.finish()
    }
}
impl std::fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.field("Timeline", &self.timeline);
        shape.finish()
    }
}
/// See [`ClusterStatus`](crate::model::ClusterStatus)
pub mod cluster_status {
    /// A builder for [`ClusterStatus`](crate::model::ClusterStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::ClusterState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::ClusterStateChangeReason>,
        pub(crate) timeline: std::option::Option<crate::model::ClusterTimeline>,
    }
    impl Builder {
        /// <p>The current state of the cluster.</p>
        pub fn state(mut self, input: impl Into<crate::model::ClusterState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::ClusterState>) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::ClusterState> {
            &self.state
        }
        /// <p>The reason for the cluster status change.</p>
        pub fn state_change_reason(
            mut self,
            input: crate::model::ClusterStateChangeReason,
        ) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::ClusterStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::ClusterStateChangeReason> {
            &self.state_change_reason
        }
        /// <p>A timeline that represents the status of a cluster over the lifetime of the cluster.</p>
        pub fn timeline(mut self, input: crate::model::ClusterTimeline) -> Self {
            self.timeline = Some(input);
            self
        }
        pub fn set_timeline(
            mut self,
            input: std::option::Option<crate::model::ClusterTimeline>,
        ) -> Self {
            self.timeline = input;
            self
        }
        pub fn get_timeline(&self) -> &std::option::Option<crate::model::ClusterTimeline> {
            &self.timeline
        }
        /// Consumes the builder and constructs a [`ClusterStatus`](crate::model::ClusterStatus)
        pub fn build(self) -> crate::model::ClusterStatus {
            crate::model::ClusterStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
                timeline: self.timeline,
            }
        }
    }
}
impl ClusterStatus {
    /// Creates a new builder-style object to manufacture [`ClusterStatus`](crate::model::ClusterStatus)
    pub fn builder() -> crate::model::cluster_status::Builder {
        crate::model::cluster_status::Builder::default()
    }
}

/// <p>The summary description of the cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ClusterSummary {
    /// <p>The unique identifier for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The details about the current status of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::ClusterStatus>,
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub normalized_instance_hours: std::option::Option<i32>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub outpost_arn: std::option::Option<std::string::String>,
}
impl ClusterSummary {
    /// <p>The unique identifier for the cluster.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The details about the current status of the cluster.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::ClusterStatus> {
        self.status.as_ref()
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
    pub fn normalized_instance_hours(&self) -> std::option::Option<i32> {
        self.normalized_instance_hours
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn outpost_arn(&self) -> std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }
}
impl std::fmt::Debug for ClusterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ClusterSummary");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("status", &self.status);
        formatter.field("normalized_instance_hours", &self.normalized_instance_hours);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.field("outpost_arn", &self.outpost_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Status", &self.status);
        shape.field("NormalizedInstanceHours", &self.normalized_instance_hours);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.field("OutpostArn", &self.outpost_arn);
        shape.finish()
    }
}
/// See [`ClusterSummary`](crate::model::ClusterSummary)
pub mod cluster_summary {
    /// A builder for [`ClusterSummary`](crate::model::ClusterSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::ClusterStatus>,
        pub(crate) normalized_instance_hours: std::option::Option<i32>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
        pub(crate) outpost_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the cluster.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the cluster.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The details about the current status of the cluster.</p>
        pub fn status(mut self, input: crate::model::ClusterStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::ClusterStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::ClusterStatus> {
            &self.status
        }
        /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is incremented one time for every hour an m1.small instance runs. Larger instances are weighted more, so an EC2 instance that is roughly four times more expensive would result in the normalized instance hours being incremented by four. This result is only an approximation and does not reflect the actual billing rate.</p>
        pub fn normalized_instance_hours(mut self, input: i32) -> Self {
            self.normalized_instance_hours = Some(input);
            self
        }
        pub fn set_normalized_instance_hours(mut self, input: std::option::Option<i32>) -> Self {
            self.normalized_instance_hours = input;
            self
        }
        pub fn get_normalized_instance_hours(&self) -> &std::option::Option<i32> {
            &self.normalized_instance_hours
        }
        /// <p>The Amazon Resource Name of the cluster.</p>
        pub fn cluster_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_arn = Some(input.into());
            self
        }
        pub fn set_cluster_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_arn = input;
            self
        }
        pub fn get_cluster_arn(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_arn
        }
        /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
        pub fn outpost_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.outpost_arn = Some(input.into());
            self
        }
        pub fn set_outpost_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.outpost_arn = input;
            self
        }
        pub fn get_outpost_arn(&self) -> &std::option::Option<std::string::String> {
            &self.outpost_arn
        }
        /// Consumes the builder and constructs a [`ClusterSummary`](crate::model::ClusterSummary)
        pub fn build(self) -> crate::model::ClusterSummary {
            crate::model::ClusterSummary {
                id: self.id,
                name: self.name,
                status: self.status,
                normalized_instance_hours: self.normalized_instance_hours,
                cluster_arn: self.cluster_arn,
                outpost_arn: self.outpost_arn,
            }
        }
    }
}
impl ClusterSummary {
    /// Creates a new builder-style object to manufacture [`ClusterSummary`](crate::model::ClusterSummary)
    pub fn builder() -> crate::model::cluster_summary::Builder {
        crate::model::cluster_summary::Builder::default()
    }
}

/// <p>Represents the timeline of the cluster's lifecycle.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ClusterTimeline {
    /// <p>The creation date and time of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the cluster was ready to execute steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the cluster was terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl ClusterTimeline {
    /// <p>The creation date and time of the cluster.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The date and time when the cluster was ready to execute steps.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The date and time when the cluster was terminated.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for ClusterTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ClusterTimeline");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for ClusterTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`ClusterTimeline`](crate::model::ClusterTimeline)
pub mod cluster_timeline {
    /// A builder for [`ClusterTimeline`](crate::model::ClusterTimeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The creation date and time of the cluster.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The date and time when the cluster was ready to execute steps.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The date and time when the cluster was terminated.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`ClusterTimeline`](crate::model::ClusterTimeline)
        pub fn build(self) -> crate::model::ClusterTimeline {
            crate::model::ClusterTimeline {
                creation_date_time: self.creation_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl ClusterTimeline {
    /// Creates a new builder-style object to manufacture [`ClusterTimeline`](crate::model::ClusterTimeline)
    pub fn builder() -> crate::model::cluster_timeline::Builder {
        crate::model::cluster_timeline::Builder::default()
    }
}

/// <p>An entity describing an executable that runs on a cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Command {
    /// <p>The name of the command.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The Amazon S3 location of the command script.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub script_path: std::option::Option<std::string::String>,
    /// <p>Arguments for Amazon EMR to pass to the command for execution.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl Command {
    /// <p>The name of the command.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Amazon S3 location of the command script.</p>
    pub fn script_path(&self) -> std::option::Option<&str> {
        self.script_path.as_deref()
    }
    /// <p>Arguments for Amazon EMR to pass to the command for execution.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
}
impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Command");
        formatter.field("name", &self.name);
        formatter.field("script_path", &self.script_path);
        formatter.field("args", &self.args);
        formatter.finish()
    }
}
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("ScriptPath", &self.script_path);
        shape.list("Args", &self.args);
        shape.finish()
    }
}
/// See [`Command`](crate::model::Command)
pub mod command {
    /// A builder for [`Command`](crate::model::Command)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) script_path: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The name of the command.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The Amazon S3 location of the command script.</p>
        pub fn script_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.script_path = Some(input.into());
            self
        }
        pub fn set_script_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.script_path = input;
            self
        }
        pub fn get_script_path(&self) -> &std::option::Option<std::string::String> {
            &self.script_path
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>Arguments for Amazon EMR to pass to the command for execution.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Consumes the builder and constructs a [`Command`](crate::model::Command)
        pub fn build(self) -> crate::model::Command {
            crate::model::Command {
                name: self.name,
                script_path: self.script_path,
                args: self.args,
            }
        }
    }
}
impl Command {
    /// Creates a new builder-style object to manufacture [`Command`](crate::model::Command)
    pub fn builder() -> crate::model::command::Builder {
        crate::model::command::Builder::default()
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
pub enum ComparisonOperator {
    #[allow(missing_docs)] // documentation missing in model
    GreaterThanOrEqual,
    #[allow(missing_docs)] // documentation missing in model
    GreaterThan,
    #[allow(missing_docs)] // documentation missing in model
    LessThan,
    #[allow(missing_docs)] // documentation missing in model
    LessThanOrEqual,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ComparisonOperator {
    fn from(s: &str) -> Self {
        match s {
            "GREATER_THAN_OR_EQUAL" => ComparisonOperator::GreaterThanOrEqual,
            "GREATER_THAN" => ComparisonOperator::GreaterThan,
            "LESS_THAN" => ComparisonOperator::LessThan,
            "LESS_THAN_OR_EQUAL" => ComparisonOperator::LessThanOrEqual,
            other => ComparisonOperator::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for ComparisonOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComparisonOperator::from(s))
    }
}
impl ComparisonOperator {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ComparisonOperator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            ComparisonOperator::GreaterThan => "GREATER_THAN",
            ComparisonOperator::LessThan => "LESS_THAN",
            ComparisonOperator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            ComparisonOperator::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["GREATER_THAN_OR_EQUAL", "GREATER_THAN", "LESS_THAN", "LESS_THAN_OR_EQUAL"]
    }
}
impl AsRef<str> for ComparisonOperator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ComparisonOperator {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ComparisonOperator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The EC2 unit limits for a managed scaling policy. The managed scaling activity of a cluster can not be above or below these limits. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ComputeLimits {
    /// <p>The unit type used for specifying a managed scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub unit_type: std::option::Option<crate::model::ComputeLimitsUnitType>,
    /// <p>The lower boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub minimum_capacity_units: std::option::Option<i32>,
    /// <p>The upper boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub maximum_capacity_units: std::option::Option<i32>,
    /// <p>The upper boundary of On-Demand EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. The On-Demand units are not allowed to scale beyond this boundary. The parameter is used to split capacity allocation between On-Demand and Spot instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub maximum_on_demand_capacity_units: std::option::Option<i32>,
}
impl ComputeLimits {
    /// <p>The unit type used for specifying a managed scaling policy.</p>
    pub fn unit_type(&self) -> std::option::Option<&crate::model::ComputeLimitsUnitType> {
        self.unit_type.as_ref()
    }
    /// <p>The lower boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    pub fn minimum_capacity_units(&self) -> std::option::Option<i32> {
        self.minimum_capacity_units
    }
    /// <p>The upper boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    pub fn maximum_capacity_units(&self) -> std::option::Option<i32> {
        self.maximum_capacity_units
    }
    /// <p>The upper boundary of On-Demand EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. The On-Demand units are not allowed to scale beyond this boundary. The parameter is used to split capacity allocation between On-Demand and Spot instances.</p>
    pub fn maximum_on_demand_capacity_units(&self) -> std::option::Option<i32> {
        self.maximum_on_demand_capacity_units
    }
}
impl std::fmt::Debug for ComputeLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ComputeLimits");
        formatter.field("unit_type", &self.unit_type);
        formatter.field("minimum_capacity_units", &self.minimum_capacity_units);
        formatter.field("maximum_capacity_units", &self.maximum_capacity_units);
        formatter.field("maximum_on_demand_capacity_units", &self.maximum_on_demand_capacity_units);
        formatter.finish()
    }
}
impl std::fmt::Display for ComputeLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("UnitType", &self.unit_type);
        shape.field("MinimumCapacityUnits", &self.minimum_capacity_units);
        shape.field("MaximumCapacityUnits", &self.maximum_capacity_units);
        shape.field("MaximumOnDemandCapacityUnits", &self.maximum_on_demand_capacity_units);
        shape.finish()
    }
}
/// See [`ComputeLimits`](crate::model::ComputeLimits)
pub mod compute_limits {
    /// A builder for [`ComputeLimits`](crate::model::ComputeLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) unit_type: std::option::Option<crate::model::ComputeLimitsUnitType>,
        pub(crate) minimum_capacity_units: std::option::Option<i32>,
        pub(crate) maximum_capacity_units: std::option::Option<i32>,
        pub(crate) maximum_on_demand_capacity_units: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The unit type used for specifying a managed scaling policy.</p>
        pub fn unit_type(mut self, input: impl Into<crate::model::ComputeLimitsUnitType>) -> Self {
            self.unit_type = Some(input.into());
            self
        }
        pub fn set_unit_type(
            mut self,
            input: std::option::Option<crate::model::ComputeLimitsUnitType>,
        ) -> Self {
            self.unit_type = input;
            self
        }
        pub fn get_unit_type(&self) -> &std::option::Option<crate::model::ComputeLimitsUnitType> {
            &self.unit_type
        }
        /// <p>The lower boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
        pub fn minimum_capacity_units(mut self, input: i32) -> Self {
            self.minimum_capacity_units = Some(input);
            self
        }
        pub fn set_minimum_capacity_units(mut self, input: std::option::Option<i32>) -> Self {
            self.minimum_capacity_units = input;
            self
        }
        pub fn get_minimum_capacity_units(&self) -> &std::option::Option<i32> {
            &self.minimum_capacity_units
        }
        /// <p>The upper boundary of EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. Managed scaling activities are not allowed beyond this boundary. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
        pub fn maximum_capacity_units(mut self, input: i32) -> Self {
            self.maximum_capacity_units = Some(input);
            self
        }
        pub fn set_maximum_capacity_units(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_capacity_units = input;
            self
        }
        pub fn get_maximum_capacity_units(&self) -> &std::option::Option<i32> {
            &self.maximum_capacity_units
        }
        /// <p>The upper boundary of On-Demand EC2 units. It is measured through VCPU cores or instances for instance groups and measured through units for instance fleets. The On-Demand units are not allowed to scale beyond this boundary. The parameter is used to split capacity allocation between On-Demand and Spot instances.</p>
        pub fn maximum_on_demand_capacity_units(mut self, input: i32) -> Self {
            self.maximum_on_demand_capacity_units = Some(input);
            self
        }
        pub fn set_maximum_on_demand_capacity_units(
            mut self,
            input: std::option::Option<i32>,
        ) -> Self {
            self.maximum_on_demand_capacity_units = input;
            self
        }
        pub fn get_maximum_on_demand_capacity_units(&self) -> &std::option::Option<i32> {
            &self.maximum_on_demand_capacity_units
        }
        /// Consumes the builder and constructs a [`ComputeLimits`](crate::model::ComputeLimits)
        pub fn build(self) -> crate::model::ComputeLimits {
            crate::model::ComputeLimits {
                unit_type: self.unit_type,
                minimum_capacity_units: self.minimum_capacity_units,
                maximum_capacity_units: self.maximum_capacity_units,
                maximum_on_demand_capacity_units: self.maximum_on_demand_capacity_units,
            }
        }
    }
}
impl ComputeLimits {
    /// Creates a new builder-style object to manufacture [`ComputeLimits`](crate::model::ComputeLimits)
    pub fn builder() -> crate::model::compute_limits::Builder {
        crate::model::compute_limits::Builder::default()
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
pub enum ComputeLimitsUnitType {
    #[allow(missing_docs)] // documentation missing in model
    InstanceFleetUnits,
    #[allow(missing_docs)] // documentation missing in model
    Instances,
    #[allow(missing_docs)] // documentation missing in model
    Vcpu,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ComputeLimitsUnitType {
    fn from(s: &str) -> Self {
        match s {
            "InstanceFleetUnits" => ComputeLimitsUnitType::InstanceFleetUnits,
            "Instances" => ComputeLimitsUnitType::Instances,
            "VCPU" => ComputeLimitsUnitType::Vcpu,
            other => ComputeLimitsUnitType::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for ComputeLimitsUnitType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComputeLimitsUnitType::from(s))
    }
}
impl ComputeLimitsUnitType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ComputeLimitsUnitType::InstanceFleetUnits => "InstanceFleetUnits",
            ComputeLimitsUnitType::Instances => "Instances",
            ComputeLimitsUnitType::Vcpu => "VCPU",
            ComputeLimitsUnitType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["InstanceFleetUnits", "Instances", "VCPU"]
    }
}
impl AsRef<str> for ComputeLimitsUnitType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ComputeLimitsUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ComputeLimitsUnitType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ComputeLimitsUnitType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>An optional configuration specification to be used when provisioning cluster instances, which can include configurations for applications and software bundled with Amazon EMR. A configuration consists of a classification, properties, and optional nested configurations. A classification refers to an application-specific configuration file. Properties are the settings you want to change in that file. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/emr-configure-apps.html">Configuring Applications</a>.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Configuration {
    /// <p>The classification within a configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub classification: std::option::Option<std::string::String>,
    /// <p>A list of additional configurations to apply within a configuration object.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>A set of properties specified within a configuration classification.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub properties: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl Configuration {
    /// <p>The classification within a configuration.</p>
    pub fn classification(&self) -> std::option::Option<&str> {
        self.classification.as_deref()
    }
    /// <p>A list of additional configurations to apply within a configuration object.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>A set of properties specified within a configuration classification.</p>
    pub fn properties(
        &self,
    ) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.properties.as_ref()
    }
    /// Adds a key-value pair to `properties`, failing if the key is already present.
    ///
    /// The map is created on first use. An existing entry is never overwritten.
    pub fn add_properties_entry(
        &mut self,
        k: impl Into<std::string::String>,
        v: impl Into<std::string::String>,
    ) -> std::result::Result<&mut Self, smithy_types::DuplicateKeyError> {
        smithy_types::map::insert_unique(&mut self.properties, k.into(), v.into())?;
        Ok(self)
    }
    /// Removes every entry of `properties`, leaving it unset.
    pub fn clear_properties_entries(&mut self) -> &mut Self {
        self.properties = None;
        self
    }
}
impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Configuration");
        formatter.field("classification", &self.classification);
        formatter.field("configurations", &self.configurations);
        formatter.field("properties", &self.properties);
        formatter.finish()
    }
}
impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Classification", &self.classification);
        shape.list("Configurations", &self.configurations);
        shape.map("Properties", &self.properties);
        shape.finish()
    }
}
impl std::hash::Hash for Configuration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.classification, state);
        std::hash::Hash::hash(&self.configurations, state);
        smithy_types::hash::hash_map(&self.properties, state);
    }
}
/// See [`Configuration`](crate::model::Configuration)
pub mod configuration {
    /// A builder for [`Configuration`](crate::model::Configuration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) classification: std::option::Option<std::string::String>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) properties: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>The classification within a configuration.</p>
        pub fn classification(mut self, input: impl Into<std::string::String>) -> Self {
            self.classification = Some(input.into());
            self
        }
        pub fn set_classification(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.classification = input;
            self
        }
        pub fn get_classification(&self) -> &std::option::Option<std::string::String> {
            &self.classification
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>A list of additional configurations to apply within a configuration object.</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// Adds a key-value pair to `properties`, failing if the key is already present.
        ///
        /// To override the contents of this collection use [`set_properties`](Self::set_properties).
        ///
        /// <p>A set of properties specified within a configuration classification.</p>
        pub fn properties(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> std::result::Result<Self, smithy_types::DuplicateKeyError> {
            smithy_types::map::insert_unique(&mut self.properties, k.into(), v.into())?;
            Ok(self)
        }
        pub fn set_properties(
            mut self,
            input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.properties = input;
            self
        }
        pub fn get_properties(
            &self,
        ) -> &std::option::Option<std::collections::HashMap<std::string::String, std::string::String>> {
            &self.properties
        }
        /// Consumes the builder and constructs a [`Configuration`](crate::model::Configuration)
        pub fn build(self) -> crate::model::Configuration {
            crate::model::Configuration {
                classification: self.classification,
                configurations: self.configurations,
                properties: self.properties,
            }
        }
    }
}
impl Configuration {
    /// Creates a new builder-style object to manufacture [`Configuration`](crate::model::Configuration)
    pub fn builder() -> crate::model::configuration::Builder {
        crate::model::configuration::Builder::default()
    }
}

/// <p>Configuration of requested EBS block device associated with the instance group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct EbsBlockDevice {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub volume_specification: std::option::Option<crate::model::VolumeSpecification>,
    /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub device: std::option::Option<std::string::String>,
}
impl EbsBlockDevice {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn volume_specification(&self) -> std::option::Option<&crate::model::VolumeSpecification> {
        self.volume_specification.as_ref()
    }
    /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
    pub fn device(&self) -> std::option::Option<&str> {
        self.device.as_deref()
    }
}
impl std::fmt::Debug for EbsBlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EbsBlockDevice");
        formatter.field("volume_specification", &self.volume_specification);
        formatter.field("device", &self.device);
        formatter.finish()
    }
}
impl std::fmt::Display for EbsBlockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("VolumeSpecification", &self.volume_specification);
        shape.field("Device", &self.device);
        shape.finish()
    }
}
/// See [`EbsBlockDevice`](crate::model::EbsBlockDevice)
pub mod ebs_block_device {
    /// A builder for [`EbsBlockDevice`](crate::model::EbsBlockDevice)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) volume_specification: std::option::Option<crate::model::VolumeSpecification>,
        pub(crate) device: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
        pub fn volume_specification(mut self, input: crate::model::VolumeSpecification) -> Self {
            self.volume_specification = Some(input);
            self
        }
        pub fn set_volume_specification(
            mut self,
            input: std::option::Option<crate::model::VolumeSpecification>,
        ) -> Self {
            self.volume_specification = input;
            self
        }
        pub fn get_volume_specification(
            &self,
        ) -> &std::option::Option<crate::model::VolumeSpecification> {
            &self.volume_specification
        }
        /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
        pub fn device(mut self, input: impl Into<std::string::String>) -> Self {
            self.device = Some(input.into());
            self
        }
        pub fn set_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device = input;
            self
        }
        pub fn get_device(&self) -> &std::option::Option<std::string::String> {
            &self.device
        }
        /// Consumes the builder and constructs a [`EbsBlockDevice`](crate::model::EbsBlockDevice)
        pub fn build(self) -> crate::model::EbsBlockDevice {
            crate::model::EbsBlockDevice {
                volume_specification: self.volume_specification,
                device: self.device,
            }
        }
    }
}
impl EbsBlockDevice {
    /// Creates a new builder-style object to manufacture [`EbsBlockDevice`](crate::model::EbsBlockDevice)
    pub fn builder() -> crate::model::ebs_block_device::Builder {
        crate::model::ebs_block_device::Builder::default()
    }
}

/// <p>Configuration of requested EBS block device associated with the instance group with count of volumes that will be associated to every instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct EbsBlockDeviceConfig {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub volume_specification: std::option::Option<crate::model::VolumeSpecification>,
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub volumes_per_instance: std::option::Option<i32>,
}
impl EbsBlockDeviceConfig {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn volume_specification(&self) -> std::option::Option<&crate::model::VolumeSpecification> {
        self.volume_specification.as_ref()
    }
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group</p>
    pub fn volumes_per_instance(&self) -> std::option::Option<i32> {
        self.volumes_per_instance
    }
}
impl std::fmt::Debug for EbsBlockDeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EbsBlockDeviceConfig");
        formatter.field("volume_specification", &self.volume_specification);
        formatter.field("volumes_per_instance", &self.volumes_per_instance);
        formatter.finish()
    }
}
impl std::fmt::Display for EbsBlockDeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("VolumeSpecification", &self.volume_specification);
        shape.field("VolumesPerInstance", &self.volumes_per_instance);
        shape.finish()
    }
}
/// See [`EbsBlockDeviceConfig`](crate::model::EbsBlockDeviceConfig)
pub mod ebs_block_device_config {
    /// A builder for [`EbsBlockDeviceConfig`](crate::model::EbsBlockDeviceConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) volume_specification: std::option::Option<crate::model::VolumeSpecification>,
        pub(crate) volumes_per_instance: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
        pub fn volume_specification(mut self, input: crate::model::VolumeSpecification) -> Self {
            self.volume_specification = Some(input);
            self
        }
        pub fn set_volume_specification(
            mut self,
            input: std::option::Option<crate::model::VolumeSpecification>,
        ) -> Self {
            self.volume_specification = input;
            self
        }
        pub fn get_volume_specification(
            &self,
        ) -> &std::option::Option<crate::model::VolumeSpecification> {
            &self.volume_specification
        }
        /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group</p>
        pub fn volumes_per_instance(mut self, input: i32) -> Self {
            self.volumes_per_instance = Some(input);
            self
        }
        pub fn set_volumes_per_instance(mut self, input: std::option::Option<i32>) -> Self {
            self.volumes_per_instance = input;
            self
        }
        pub fn get_volumes_per_instance(&self) -> &std::option::Option<i32> {
            &self.volumes_per_instance
        }
        /// Consumes the builder and constructs a [`EbsBlockDeviceConfig`](crate::model::EbsBlockDeviceConfig)
        pub fn build(self) -> crate::model::EbsBlockDeviceConfig {
            crate::model::EbsBlockDeviceConfig {
                volume_specification: self.volume_specification,
                volumes_per_instance: self.volumes_per_instance,
            }
        }
    }
}
impl EbsBlockDeviceConfig {
    /// Creates a new builder-style object to manufacture [`EbsBlockDeviceConfig`](crate::model::EbsBlockDeviceConfig)
    pub fn builder() -> crate::model::ebs_block_device_config::Builder {
        crate::model::ebs_block_device_config::Builder::default()
    }
}

/// <p>The Amazon EBS configuration of a cluster instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct EbsConfiguration {
    /// <p>An array of Amazon EBS volume specifications attached to a cluster instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_block_device_configs: std::option::Option<std::vec::Vec<crate::model::EbsBlockDeviceConfig>>,
    /// <p>Indicates whether an Amazon EBS volume is EBS-optimized.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_optimized: std::option::Option<bool>,
}
impl EbsConfiguration {
    /// <p>An array of Amazon EBS volume specifications attached to a cluster instance.</p>
    pub fn ebs_block_device_configs(
        &self,
    ) -> std::option::Option<&[crate::model::EbsBlockDeviceConfig]> {
        self.ebs_block_device_configs.as_deref()
    }
    /// <p>Indicates whether an Amazon EBS volume is EBS-optimized.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }
}
impl std::fmt::Debug for EbsConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EbsConfiguration");
        formatter.field("ebs_block_device_configs", &self.ebs_block_device_configs);
        formatter.field("ebs_optimized", &self.ebs_optimized);
        formatter.finish()
    }
}
impl std::fmt::Display for EbsConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("EbsBlockDeviceConfigs", &self.ebs_block_device_configs);
        shape.field("EbsOptimized", &self.ebs_optimized);
        shape.finish()
    }
}
/// See [`EbsConfiguration`](crate::model::EbsConfiguration)
pub mod ebs_configuration {
    /// A builder for [`EbsConfiguration`](crate::model::EbsConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ebs_block_device_configs: std::option::Option<std::vec::Vec<crate::model::EbsBlockDeviceConfig>>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `ebs_block_device_configs`.
        ///
        /// To override the contents of this collection use [`set_ebs_block_device_configs`](Self::set_ebs_block_device_configs).
        ///
        /// <p>An array of Amazon EBS volume specifications attached to a cluster instance.</p>
        pub fn ebs_block_device_configs(
            mut self,
            input: impl Into<crate::model::EbsBlockDeviceConfig>,
        ) -> Self {
            let mut v = self.ebs_block_device_configs.unwrap_or_default();
            v.push(input.into());
            self.ebs_block_device_configs = Some(v);
            self
        }
        pub fn set_ebs_block_device_configs(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::EbsBlockDeviceConfig>>,
        ) -> Self {
            self.ebs_block_device_configs = input;
            self
        }
        pub fn get_ebs_block_device_configs(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::EbsBlockDeviceConfig>> {
            &self.ebs_block_device_configs
        }
        /// <p>Indicates whether an Amazon EBS volume is EBS-optimized.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }
        pub fn get_ebs_optimized(&self) -> &std::option::Option<bool> {
            &self.ebs_optimized
        }
        /// Consumes the builder and constructs a [`EbsConfiguration`](crate::model::EbsConfiguration)
        pub fn build(self) -> crate::model::EbsConfiguration {
            crate::model::EbsConfiguration {
                ebs_block_device_configs: self.ebs_block_device_configs,
                ebs_optimized: self.ebs_optimized,
            }
        }
    }
}
impl EbsConfiguration {
    /// Creates a new builder-style object to manufacture [`EbsConfiguration`](crate::model::EbsConfiguration)
    pub fn builder() -> crate::model::ebs_configuration::Builder {
        crate::model::ebs_configuration::Builder::default()
    }
}

/// <p>EBS block device that's attached to an EC2 instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct EbsVolume {
    /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub device: std::option::Option<std::string::String>,
    /// <p>The volume identifier of the EBS volume.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub volume_id: std::option::Option<std::string::String>,
}
impl EbsVolume {
    /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
    pub fn device(&self) -> std::option::Option<&str> {
        self.device.as_deref()
    }
    /// <p>The volume identifier of the EBS volume.</p>
    pub fn volume_id(&self) -> std::option::Option<&str> {
        self.volume_id.as_deref()
    }
}
impl std::fmt::Debug for EbsVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EbsVolume");
        formatter.field("device", &self.device);
        formatter.field("volume_id", &self.volume_id);
        formatter.finish()
    }
}
impl std::fmt::Display for EbsVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Device", &self.device);
        shape.field("VolumeId", &self.volume_id);
        shape.finish()
    }
}
/// See [`EbsVolume`](crate::model::EbsVolume)
pub mod ebs_volume {
    /// A builder for [`EbsVolume`](crate::model::EbsVolume)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) device: std::option::Option<std::string::String>,
        pub(crate) volume_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The device name that is exposed to the instance, such as /dev/sdh.</p>
        pub fn device(mut self, input: impl Into<std::string::String>) -> Self {
            self.device = Some(input.into());
            self
        }
        pub fn set_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.device = input;
            self
        }
        pub fn get_device(&self) -> &std::option::Option<std::string::String> {
            &self.device
        }
        /// <p>The volume identifier of the EBS volume.</p>
        pub fn volume_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        pub fn set_volume_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_id = input;
            self
        }
        pub fn get_volume_id(&self) -> &std::option::Option<std::string::String> {
            &self.volume_id
        }
        /// Consumes the builder and constructs a [`EbsVolume`](crate::model::EbsVolume)
        pub fn build(self) -> crate::model::EbsVolume {
            crate::model::EbsVolume {
                device: self.device,
                volume_id: self.volume_id,
            }
        }
    }
}
impl EbsVolume {
    /// Creates a new builder-style object to manufacture [`EbsVolume`](crate::model::EbsVolume)
    pub fn builder() -> crate::model::ebs_volume::Builder {
        crate::model::ebs_volume::Builder::default()
    }
}

/// <p>Provides information about the EC2 instances in a cluster grouped by category. For example, key name, subnet ID, IAM instance profile, and so on.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Ec2InstanceAttributes {
    /// <p>The name of the Amazon EC2 key pair to use when connecting with SSH into the master node as a user named "hadoop".</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_key_name: std::option::Option<std::string::String>,
    /// <p>Set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value, and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_subnet_id: std::option::Option<std::string::String>,
    /// <p>Applies to clusters configured with the instance fleets option. Specifies the unique identifier of one or more Amazon EC2 subnets in which to launch EC2 cluster instances. Subnets must exist within the same VPC. Amazon EMR chooses the EC2 subnet with the best fit from among the list of <code>RequestedEc2SubnetIds</code>, and then launches all cluster instances within that Subnet. If this value is not specified, and the account and Region support EC2-Classic networks, the cluster launches instances in the EC2-Classic network and uses <code>RequestedEc2AvailabilityZones</code> instead of this setting. If EC2-Classic is not supported, and no Subnet is specified, Amazon EMR chooses the subnet for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub requested_ec2_subnet_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The Availability Zone in which the cluster will run.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_availability_zone: std::option::Option<std::string::String>,
    /// <p>Applies to clusters configured with the instance fleets option. Specifies one or more Availability Zones in which to launch EC2 cluster instances when the EC2-Classic network configuration is supported. Amazon EMR chooses the Availability Zone with the best fit from among the list of <code>RequestedEc2AvailabilityZones</code>, and then launches all cluster instances within that Availability Zone. If you do not specify this value, Amazon EMR chooses the Availability Zone for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub requested_ec2_availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The IAM role that was specified when the cluster was launched. The EC2 instances of the cluster assume this role.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub iam_instance_profile: std::option::Option<std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub emr_managed_master_security_group: std::option::Option<std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub emr_managed_slave_security_group: std::option::Option<std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub service_access_security_group: std::option::Option<std::string::String>,
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_master_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_slave_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl Ec2InstanceAttributes {
    /// <p>The name of the Amazon EC2 key pair to use when connecting with SSH into the master node as a user named "hadoop".</p>
    pub fn ec2_key_name(&self) -> std::option::Option<&str> {
        self.ec2_key_name.as_deref()
    }
    /// <p>Set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value, and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
    pub fn ec2_subnet_id(&self) -> std::option::Option<&str> {
        self.ec2_subnet_id.as_deref()
    }
    /// <p>Applies to clusters configured with the instance fleets option. Specifies the unique identifier of one or more Amazon EC2 subnets in which to launch EC2 cluster instances. Subnets must exist within the same VPC. Amazon EMR chooses the EC2 subnet with the best fit from among the list of <code>RequestedEc2SubnetIds</code>, and then launches all cluster instances within that Subnet. If this value is not specified, and the account and Region support EC2-Classic networks, the cluster launches instances in the EC2-Classic network and uses <code>RequestedEc2AvailabilityZones</code> instead of this setting. If EC2-Classic is not supported, and no Subnet is specified, Amazon EMR chooses the subnet for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
    pub fn requested_ec2_subnet_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.requested_ec2_subnet_ids.as_deref()
    }
    /// <p>The Availability Zone in which the cluster will run.</p>
    pub fn ec2_availability_zone(&self) -> std::option::Option<&str> {
        self.ec2_availability_zone.as_deref()
    }
    /// <p>Applies to clusters configured with the instance fleets option. Specifies one or more Availability Zones in which to launch EC2 cluster instances when the EC2-Classic network configuration is supported. Amazon EMR chooses the Availability Zone with the best fit from among the list of <code>RequestedEc2AvailabilityZones</code>, and then launches all cluster instances within that Availability Zone. If you do not specify this value, Amazon EMR chooses the Availability Zone for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
    pub fn requested_ec2_availability_zones(&self) -> std::option::Option<&[std::string::String]> {
        self.requested_ec2_availability_zones.as_deref()
    }
    /// <p>The IAM role that was specified when the cluster was launched. The EC2 instances of the cluster assume this role.</p>
    pub fn iam_instance_profile(&self) -> std::option::Option<&str> {
        self.iam_instance_profile.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn emr_managed_master_security_group(&self) -> std::option::Option<&str> {
        self.emr_managed_master_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn emr_managed_slave_security_group(&self) -> std::option::Option<&str> {
        self.emr_managed_slave_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn service_access_security_group(&self) -> std::option::Option<&str> {
        self.service_access_security_group.as_deref()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub fn additional_master_security_groups(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_master_security_groups.as_deref()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
    pub fn additional_slave_security_groups(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_slave_security_groups.as_deref()
    }
}
impl std::fmt::Debug for Ec2InstanceAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Ec2InstanceAttributes");
        formatter.field("ec2_key_name", &self.ec2_key_name);
        formatter.field("ec2_subnet_id", &self.ec2_subnet_id);
        formatter.field("requested_ec2_subnet_ids", &self.requested_ec2_subnet_ids);
        formatter.field("ec2_availability_zone", &self.ec2_availability_zone);
        formatter.field("requested_ec2_availability_zones", &self.requested_ec2_availability_zones);
        formatter.field("iam_instance_profile", &self.iam_instance_profile);
        formatter.field("emr_managed_master_security_group", &self.emr_managed_master_security_group);
        formatter.field("emr_managed_slave_security_group", &self.emr_managed_slave_security_group);
        formatter.field("service_access_security_group", &self.service_access_security_group);
        formatter.field("additional_master_security_groups", &self.additional_master_security_groups);
        formatter.field("additional_slave_security_groups", &self.additional_slave_security_groups);
        formatter.finish()
    }
}
impl std::fmt::Display for Ec2InstanceAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Ec2KeyName", &self.ec2_key_name);
        shape.field("Ec2SubnetId", &self.ec2_subnet_id);
        shape.list("RequestedEc2SubnetIds", &self.requested_ec2_subnet_ids);
        shape.field("Ec2AvailabilityZone", &self.ec2_availability_zone);
        shape.list("RequestedEc2AvailabilityZones", &self.requested_ec2_availability_zones);
        shape.field("IamInstanceProfile", &self.iam_instance_profile);
        shape.field("EmrManagedMasterSecurityGroup", &self.emr_managed_master_security_group);
        shape.field("EmrManagedSlaveSecurityGroup", &self.emr_managed_slave_security_group);
        shape.field("ServiceAccessSecurityGroup", &self.service_access_security_group);
        shape.list("AdditionalMasterSecurityGroups", &self.additional_master_security_groups);
        shape.list("AdditionalSlaveSecurityGroups", &self.additional_slave_security_groups);
        shape.finish()
    }
}
/// See [`Ec2InstanceAttributes`](crate::model::Ec2InstanceAttributes)
pub mod ec2_instance_attributes {
    /// A builder for [`Ec2InstanceAttributes`](crate::model::Ec2InstanceAttributes)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ec2_key_name: std::option::Option<std::string::String>,
        pub(crate) ec2_subnet_id: std::option::Option<std::string::String>,
        pub(crate) requested_ec2_subnet_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) ec2_availability_zone: std::option::Option<std::string::String>,
        pub(crate) requested_ec2_availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) iam_instance_profile: std::option::Option<std::string::String>,
        pub(crate) emr_managed_master_security_group: std::option::Option<std::string::String>,
        pub(crate) emr_managed_slave_security_group: std::option::Option<std::string::String>,
        pub(crate) service_access_security_group: std::option::Option<std::string::String>,
        pub(crate) additional_master_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) additional_slave_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The name of the Amazon EC2 key pair to use when connecting with SSH into the master node as a user named "hadoop".</p>
        pub fn ec2_key_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_key_name = Some(input.into());
            self
        }
        pub fn set_ec2_key_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ec2_key_name = input;
            self
        }
        pub fn get_ec2_key_name(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_key_name
        }
        /// <p>Set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value, and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
        pub fn ec2_subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_subnet_id = Some(input.into());
            self
        }
        pub fn set_ec2_subnet_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ec2_subnet_id = input;
            self
        }
        pub fn get_ec2_subnet_id(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_subnet_id
        }
        /// Appends an item to `requested_ec2_subnet_ids`.
        ///
        /// To override the contents of this collection use [`set_requested_ec2_subnet_ids`](Self::set_requested_ec2_subnet_ids).
        ///
        /// <p>Applies to clusters configured with the instance fleets option. Specifies the unique identifier of one or more Amazon EC2 subnets in which to launch EC2 cluster instances. Subnets must exist within the same VPC. Amazon EMR chooses the EC2 subnet with the best fit from among the list of <code>RequestedEc2SubnetIds</code>, and then launches all cluster instances within that Subnet. If this value is not specified, and the account and Region support EC2-Classic networks, the cluster launches instances in the EC2-Classic network and uses <code>RequestedEc2AvailabilityZones</code> instead of this setting. If EC2-Classic is not supported, and no Subnet is specified, Amazon EMR chooses the subnet for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
        pub fn requested_ec2_subnet_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.requested_ec2_subnet_ids.unwrap_or_default();
            v.push(input.into());
            self.requested_ec2_subnet_ids = Some(v);
            self
        }
        pub fn set_requested_ec2_subnet_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.requested_ec2_subnet_ids = input;
            self
        }
        pub fn get_requested_ec2_subnet_ids(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.requested_ec2_subnet_ids
        }
        /// <p>The Availability Zone in which the cluster will run.</p>
        pub fn ec2_availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_availability_zone = Some(input.into());
            self
        }
        pub fn set_ec2_availability_zone(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ec2_availability_zone = input;
            self
        }
        pub fn get_ec2_availability_zone(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_availability_zone
        }
        /// Appends an item to `requested_ec2_availability_zones`.
        ///
        /// To override the contents of this collection use [`set_requested_ec2_availability_zones`](Self::set_requested_ec2_availability_zones).
        ///
        /// <p>Applies to clusters configured with the instance fleets option. Specifies one or more Availability Zones in which to launch EC2 cluster instances when the EC2-Classic network configuration is supported. Amazon EMR chooses the Availability Zone with the best fit from among the list of <code>RequestedEc2AvailabilityZones</code>, and then launches all cluster instances within that Availability Zone. If you do not specify this value, Amazon EMR chooses the Availability Zone for you. <code>RequestedEc2SubnetIDs</code> and <code>RequestedEc2AvailabilityZones</code> cannot be specified together.</p>
        pub fn requested_ec2_availability_zones(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.requested_ec2_availability_zones.unwrap_or_default();
            v.push(input.into());
            self.requested_ec2_availability_zones = Some(v);
            self
        }
        pub fn set_requested_ec2_availability_zones(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.requested_ec2_availability_zones = input;
            self
        }
        pub fn get_requested_ec2_availability_zones(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.requested_ec2_availability_zones
        }
        /// <p>The IAM role that was specified when the cluster was launched. The EC2 instances of the cluster assume this role.</p>
        pub fn iam_instance_profile(mut self, input: impl Into<std::string::String>) -> Self {
            self.iam_instance_profile = Some(input.into());
            self
        }
        pub fn set_iam_instance_profile(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.iam_instance_profile = input;
            self
        }
        pub fn get_iam_instance_profile(&self) -> &std::option::Option<std::string::String> {
            &self.iam_instance_profile
        }
        /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
        pub fn emr_managed_master_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.emr_managed_master_security_group = Some(input.into());
            self
        }
        pub fn set_emr_managed_master_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.emr_managed_master_security_group = input;
            self
        }
        pub fn get_emr_managed_master_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.emr_managed_master_security_group
        }
        /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
        pub fn emr_managed_slave_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.emr_managed_slave_security_group = Some(input.into());
            self
        }
        pub fn set_emr_managed_slave_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.emr_managed_slave_security_group = input;
            self
        }
        pub fn get_emr_managed_slave_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.emr_managed_slave_security_group
        }
        /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
        pub fn service_access_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.service_access_security_group = Some(input.into());
            self
        }
        pub fn set_service_access_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.service_access_security_group = input;
            self
        }
        pub fn get_service_access_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.service_access_security_group
        }
        /// Appends an item to `additional_master_security_groups`.
        ///
        /// To override the contents of this collection use [`set_additional_master_security_groups`](Self::set_additional_master_security_groups).
        ///
        /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
        pub fn additional_master_security_groups(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.additional_master_security_groups.unwrap_or_default();
            v.push(input.into());
            self.additional_master_security_groups = Some(v);
            self
        }
        pub fn set_additional_master_security_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.additional_master_security_groups = input;
            self
        }
        pub fn get_additional_master_security_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.additional_master_security_groups
        }
        /// Appends an item to `additional_slave_security_groups`.
        ///
        /// To override the contents of this collection use [`set_additional_slave_security_groups`](Self::set_additional_slave_security_groups).
        ///
        /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
        pub fn additional_slave_security_groups(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.additional_slave_security_groups.unwrap_or_default();
            v.push(input.into());
            self.additional_slave_security_groups = Some(v);
            self
        }
        pub fn set_additional_slave_security_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.additional_slave_security_groups = input;
            self
        }
        pub fn get_additional_slave_security_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.additional_slave_security_groups
        }
        /// Consumes the builder and constructs a [`Ec2InstanceAttributes`](crate::model::Ec2InstanceAttributes)
        pub fn build(self) -> crate::model::Ec2InstanceAttributes {
            crate::model::Ec2InstanceAttributes {
                ec2_key_name: self.ec2_key_name,
                ec2_subnet_id: self.ec2_subnet_id,
                requested_ec2_subnet_ids: self.requested_ec2_subnet_ids,
                ec2_availability_zone: self.ec2_availability_zone,
                requested_ec2_availability_zones: self.requested_ec2_availability_zones,
                iam_instance_profile: self.iam_instance_profile,
                emr_managed_master_security_group: self.emr_managed_master_security_group,
                emr_managed_slave_security_group: self.emr_managed_slave_security_group,
                service_access_security_group: self.service_access_security_group,
                additional_master_security_groups: self.additional_master_security_groups,
                additional_slave_security_groups: self.additional_slave_security_groups,
            }
        }
    }
}
impl Ec2InstanceAttributes {
    /// Creates a new builder-style object to manufacture [`Ec2InstanceAttributes`](crate::model::Ec2InstanceAttributes)
    pub fn builder() -> crate::model::ec2_instance_attributes::Builder {
        crate::model::ec2_instance_attributes::Builder::default()
    }
}

/// <p>The details of the step failure. The service attempts to detect the root cause for many common failures.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct FailureDetails {
    /// <p>The reason for the step failure. In the case where the service cannot successfully determine the root cause of the failure, it returns "Unknown Error" as a reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub reason: std::option::Option<std::string::String>,
    /// <p>The descriptive message including the error the Amazon EMR service has identified as the cause of step failure. This is text from an error log that describes the root cause of the failure.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
    /// <p>The path to the log file where the step failure root cause was originally recorded.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub log_file: std::option::Option<std::string::String>,
}
impl FailureDetails {
    /// <p>The reason for the step failure. In the case where the service cannot successfully determine the root cause of the failure, it returns "Unknown Error" as a reason.</p>
    pub fn reason(&self) -> std::option::Option<&str> {
        self.reason.as_deref()
    }
    /// <p>The descriptive message including the error the Amazon EMR service has identified as the cause of step failure. This is text from an error log that describes the root cause of the failure.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The path to the log file where the step failure root cause was originally recorded.</p>
    pub fn log_file(&self) -> std::option::Option<&str> {
        self.log_file.as_deref()
    }
}
impl std::fmt::Debug for FailureDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("FailureDetails");
        formatter.field("reason", &self.reason);
        formatter.field("message", &self.message);
        formatter.field("log_file", &self.log_file);
        formatter.finish()
    }
}
impl std::fmt::Display for FailureDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Reason", &self.reason);
        shape.field("Message", &self.message);
        shape.field("LogFile", &self.log_file);
        shape.finish()
    }
}
/// See [`FailureDetails`](crate::model::FailureDetails)
pub mod failure_details {
    /// A builder for [`FailureDetails`](crate::model::FailureDetails)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) reason: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) log_file: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The reason for the step failure. In the case where the service cannot successfully determine the root cause of the failure, it returns "Unknown Error" as a reason.</p>
        pub fn reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.reason = Some(input.into());
            self
        }
        pub fn set_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reason = input;
            self
        }
        pub fn get_reason(&self) -> &std::option::Option<std::string::String> {
            &self.reason
        }
        /// <p>The descriptive message including the error the Amazon EMR service has identified as the cause of step failure. This is text from an error log that describes the root cause of the failure.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// <p>The path to the log file where the step failure root cause was originally recorded.</p>
        pub fn log_file(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_file = Some(input.into());
            self
        }
        pub fn set_log_file(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_file = input;
            self
        }
        pub fn get_log_file(&self) -> &std::option::Option<std::string::String> {
            &self.log_file
        }
        /// Consumes the builder and constructs a [`FailureDetails`](crate::model::FailureDetails)
        pub fn build(self) -> crate::model::FailureDetails {
            crate::model::FailureDetails {
                reason: self.reason,
                message: self.message,
                log_file: self.log_file,
            }
        }
    }
}
impl FailureDetails {
    /// Creates a new builder-style object to manufacture [`FailureDetails`](crate::model::FailureDetails)
    pub fn builder() -> crate::model::failure_details::Builder {
        crate::model::failure_details::Builder::default()
    }
}

/// <p>A job flow step consisting of a JAR file whose main function will be executed. The main function submits a job for Hadoop to execute and waits for the job to finish or fail.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct HadoopJarStepConfig {
    /// <p>A list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub properties: std::option::Option<std::vec::Vec<crate::model::KeyValue>>,
    /// <p>A path to a JAR file run during the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub jar: std::option::Option<std::string::String>,
    /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a Main-Class in its manifest file.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub main_class: std::option::Option<std::string::String>,
    /// <p>A list of command line arguments passed to the JAR file's main function when executed.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl HadoopJarStepConfig {
    /// <p>A list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
    pub fn properties(&self) -> std::option::Option<&[crate::model::KeyValue]> {
        self.properties.as_deref()
    }
    /// <p>A path to a JAR file run during the step.</p>
    pub fn jar(&self) -> std::option::Option<&str> {
        self.jar.as_deref()
    }
    /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a Main-Class in its manifest file.</p>
    pub fn main_class(&self) -> std::option::Option<&str> {
        self.main_class.as_deref()
    }
    /// <p>A list of command line arguments passed to the JAR file's main function when executed.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
}
impl std::fmt::Debug for HadoopJarStepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("HadoopJarStepConfig");
        formatter.field("properties", &self.properties);
        formatter.field("jar", &self.jar);
        formatter.field("main_class", &self.main_class);
        formatter.field("args", &self.args);
        formatter.finish()
    }
}
impl std::fmt::Display for HadoopJarStepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("Properties", &self.properties);
        shape.field("Jar", &self.jar);
        shape.field("MainClass", &self.main_class);
        shape.list("Args", &self.args);
        shape.finish()
    }
}
/// See [`HadoopJarStepConfig`](crate::model::HadoopJarStepConfig)
pub mod hadoop_jar_step_config {
    /// A builder for [`HadoopJarStepConfig`](crate::model::HadoopJarStepConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) properties: std::option::Option<std::vec::Vec<crate::model::KeyValue>>,
        pub(crate) jar: std::option::Option<std::string::String>,
        pub(crate) main_class: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `properties`.
        ///
        /// To override the contents of this collection use [`set_properties`](Self::set_properties).
        ///
        /// <p>A list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
        pub fn properties(mut self, input: impl Into<crate::model::KeyValue>) -> Self {
            let mut v = self.properties.unwrap_or_default();
            v.push(input.into());
            self.properties = Some(v);
            self
        }
        pub fn set_properties(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::KeyValue>>,
        ) -> Self {
            self.properties = input;
            self
        }
        pub fn get_properties(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::KeyValue>> {
            &self.properties
        }
        /// <p>A path to a JAR file run during the step.</p>
        pub fn jar(mut self, input: impl Into<std::string::String>) -> Self {
            self.jar = Some(input.into());
            self
        }
        pub fn set_jar(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.jar = input;
            self
        }
        pub fn get_jar(&self) -> &std::option::Option<std::string::String> {
            &self.jar
        }
        /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a Main-Class in its manifest file.</p>
        pub fn main_class(mut self, input: impl Into<std::string::String>) -> Self {
            self.main_class = Some(input.into());
            self
        }
        pub fn set_main_class(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.main_class = input;
            self
        }
        pub fn get_main_class(&self) -> &std::option::Option<std::string::String> {
            &self.main_class
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>A list of command line arguments passed to the JAR file's main function when executed.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Consumes the builder and constructs a [`HadoopJarStepConfig`](crate::model::HadoopJarStepConfig)
        pub fn build(self) -> crate::model::HadoopJarStepConfig {
            crate::model::HadoopJarStepConfig {
                properties: self.properties,
                jar: self.jar,
                main_class: self.main_class,
                args: self.args,
            }
        }
    }
}
impl HadoopJarStepConfig {
    /// Creates a new builder-style object to manufacture [`HadoopJarStepConfig`](crate::model::HadoopJarStepConfig)
    pub fn builder() -> crate::model::hadoop_jar_step_config::Builder {
        crate::model::hadoop_jar_step_config::Builder::default()
    }
}

/// <p>A cluster step consisting of a JAR file whose main function will be executed. The main function submits a job for Hadoop to execute and waits for the job to finish or fail.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct HadoopStepConfig {
    /// <p>The path to the JAR file that runs during the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub jar: std::option::Option<std::string::String>,
    /// <p>The list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub properties: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a main class in its manifest file.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub main_class: std::option::Option<std::string::String>,
    /// <p>The list of command line arguments to pass to the JAR file's main function for execution.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl HadoopStepConfig {
    /// <p>The path to the JAR file that runs during the step.</p>
    pub fn jar(&self) -> std::option::Option<&str> {
        self.jar.as_deref()
    }
    /// <p>The list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
    pub fn properties(
        &self,
    ) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.properties.as_ref()
    }
    /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a main class in its manifest file.</p>
    pub fn main_class(&self) -> std::option::Option<&str> {
        self.main_class.as_deref()
    }
    /// <p>The list of command line arguments to pass to the JAR file's main function for execution.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
    /// Adds a key-value pair to `properties`, failing if the key is already present.
    ///
    /// The map is created on first use. An existing entry is never overwritten.
    pub fn add_properties_entry(
        &mut self,
        k: impl Into<std::string::String>,
        v: impl Into<std::string::String>,
    ) -> std::result::Result<&mut Self, smithy_types::DuplicateKeyError> {
        smithy_types::map::insert_unique(&mut self.properties, k.into(), v.into())?;
        Ok(self)
    }
    /// Removes every entry of `properties`, leaving it unset.
    pub fn clear_properties_entries(&mut self) -> &mut Self {
        self.properties = None;
        self
    }
}
impl std::fmt::Debug for HadoopStepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("HadoopStepConfig");
        formatter.field("jar", &self.jar);
        formatter.field("properties", &self.properties);
        formatter.field("main_class", &self.main_class);
        formatter.field("args", &self.args);
        formatter.finish()
    }
}
impl std::fmt::Display for HadoopStepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Jar", &self.jar);
        shape.map("Properties", &self.properties);
        shape.field("MainClass", &self.main_class);
        shape.list("Args", &self.args);
        shape.finish()
    }
}
impl std::hash::Hash for HadoopStepConfig {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.jar, state);
        smithy_types::hash::hash_map(&self.properties, state);
        std::hash::Hash::hash(&self.main_class, state);
        std::hash::Hash::hash(&self.args, state);
    }
}
/// See [`HadoopStepConfig`](crate::model::HadoopStepConfig)
pub mod hadoop_step_config {
    /// A builder for [`HadoopStepConfig`](crate::model::HadoopStepConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) jar: std::option::Option<std::string::String>,
        pub(crate) properties: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) main_class: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The path to the JAR file that runs during the step.</p>
        pub fn jar(mut self, input: impl Into<std::string::String>) -> Self {
            self.jar = Some(input.into());
            self
        }
        pub fn set_jar(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.jar = input;
            self
        }
        pub fn get_jar(&self) -> &std::option::Option<std::string::String> {
            &self.jar
        }
        /// Adds a key-value pair to `properties`, failing if the key is already present.
        ///
        /// To override the contents of this collection use [`set_properties`](Self::set_properties).
        ///
        /// <p>The list of Java properties that are set when the step runs. You can use these properties to pass key value pairs to your main function.</p>
        pub fn properties(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> std::result::Result<Self, smithy_types::DuplicateKeyError> {
            smithy_types::map::insert_unique(&mut self.properties, k.into(), v.into())?;
            Ok(self)
        }
        pub fn set_properties(
            mut self,
            input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.properties = input;
            self
        }
        pub fn get_properties(
            &self,
        ) -> &std::option::Option<std::collections::HashMap<std::string::String, std::string::String>> {
            &self.properties
        }
        /// <p>The name of the main class in the specified Java file. If not specified, the JAR file should specify a main class in its manifest file.</p>
        pub fn main_class(mut self, input: impl Into<std::string::String>) -> Self {
            self.main_class = Some(input.into());
            self
        }
        pub fn set_main_class(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.main_class = input;
            self
        }
        pub fn get_main_class(&self) -> &std::option::Option<std::string::String> {
            &self.main_class
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>The list of command line arguments to pass to the JAR file's main function for execution.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Consumes the builder and constructs a [`HadoopStepConfig`](crate::model::HadoopStepConfig)
        pub fn build(self) -> crate::model::HadoopStepConfig {
            crate::model::HadoopStepConfig {
                jar: self.jar,
                properties: self.properties,
                main_class: self.main_class,
                args: self.args,
            }
        }
    }
}
impl HadoopStepConfig {
    /// Creates a new builder-style object to manufacture [`HadoopStepConfig`](crate::model::HadoopStepConfig)
    pub fn builder() -> crate::model::hadoop_step_config::Builder {
        crate::model::hadoop_step_config::Builder::default()
    }
}

/// <p>Represents an EC2 instance provisioned as part of cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Instance {
    /// <p>The unique identifier for the instance in Amazon EMR.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The unique identifier of the instance in Amazon EC2.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_instance_id: std::option::Option<std::string::String>,
    /// <p>The public DNS name of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub public_dns_name: std::option::Option<std::string::String>,
    /// <p>The public IP address of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub public_ip_address: std::option::Option<std::string::String>,
    /// <p>The private DNS name of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub private_dns_name: std::option::Option<std::string::String>,
    /// <p>The private IP address of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub private_ip_address: std::option::Option<std::string::String>,
    /// <p>The current status of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::InstanceStatus>,
    /// <p>The identifier of the instance group to which this instance belongs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
    /// <p>The unique identifier of the instance fleet to which an EC2 instance belongs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_id: std::option::Option<std::string::String>,
    /// <p>The instance purchasing option. Valid values are <code>ON_DEMAND</code> or <code>SPOT</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub market: std::option::Option<crate::model::MarketType>,
    /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The list of EBS volumes that are attached to this instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_volumes: std::option::Option<std::vec::Vec<crate::model::EbsVolume>>,
}
impl Instance {
    /// <p>The unique identifier for the instance in Amazon EMR.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The unique identifier of the instance in Amazon EC2.</p>
    pub fn ec2_instance_id(&self) -> std::option::Option<&str> {
        self.ec2_instance_id.as_deref()
    }
    /// <p>The public DNS name of the instance.</p>
    pub fn public_dns_name(&self) -> std::option::Option<&str> {
        self.public_dns_name.as_deref()
    }
    /// <p>The public IP address of the instance.</p>
    pub fn public_ip_address(&self) -> std::option::Option<&str> {
        self.public_ip_address.as_deref()
    }
    /// <p>The private DNS name of the instance.</p>
    pub fn private_dns_name(&self) -> std::option::Option<&str> {
        self.private_dns_name.as_deref()
    }
    /// <p>The private IP address of the instance.</p>
    pub fn private_ip_address(&self) -> std::option::Option<&str> {
        self.private_ip_address.as_deref()
    }
    /// <p>The current status of the instance.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::InstanceStatus> {
        self.status.as_ref()
    }
    /// <p>The identifier of the instance group to which this instance belongs.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>The unique identifier of the instance fleet to which an EC2 instance belongs.</p>
    pub fn instance_fleet_id(&self) -> std::option::Option<&str> {
        self.instance_fleet_id.as_deref()
    }
    /// <p>The instance purchasing option. Valid values are <code>ON_DEMAND</code> or <code>SPOT</code>.</p>
    pub fn market(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market.as_ref()
    }
    /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>The list of EBS volumes that are attached to this instance.</p>
    pub fn ebs_volumes(&self) -> std::option::Option<&[crate::model::EbsVolume]> {
        self.ebs_volumes.as_deref()
    }
}
impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Instance");
        formatter.field("id", &self.id);
        formatter.field("ec2_instance_id", &self.ec2_instance_id);
        formatter.field("public_dns_name", &self.public_dns_name);
        formatter.field("public_ip_address", &self.public_ip_address);
        formatter.field("private_dns_name", &self.private_dns_name);
        formatter.field("private_ip_address", &self.private_ip_address);
        formatter.field("status", &self.status);
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("instance_fleet_id", &self.instance_fleet_id);
        formatter.field("market", &self.market);
        formatter.field("instance_type", &self.instance_type);
        formatter.field("ebs_volumes", &self.ebs_volumes);
        formatter.finish()
    }
}
impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Ec2InstanceId", &self.ec2_instance_id);
        shape.field("PublicDnsName", &self.public_dns_name);
        shape.field("PublicIpAddress", &self.public_ip_address);
        shape.field("PrivateDnsName", &self.private_dns_name);
        shape.field("PrivateIpAddress", &self.private_ip_address);
        shape.field("Status", &self.status);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.field("InstanceFleetId", &self.instance_fleet_id);
        shape.field("Market", &self.market);
        shape.field("InstanceType", &self.instance_type);
        shape.list("EbsVolumes", &self.ebs_volumes);
        shape.finish()
    }
}
/// See [`Instance`](crate::model::Instance)
pub mod instance {
    /// A builder for [`Instance`](crate::model::Instance)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) ec2_instance_id: std::option::Option<std::string::String>,
        pub(crate) public_dns_name: std::option::Option<std::string::String>,
        pub(crate) public_ip_address: std::option::Option<std::string::String>,
        pub(crate) private_dns_name: std::option::Option<std::string::String>,
        pub(crate) private_ip_address: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::InstanceStatus>,
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) instance_fleet_id: std::option::Option<std::string::String>,
        pub(crate) market: std::option::Option<crate::model::MarketType>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) ebs_volumes: std::option::Option<std::vec::Vec<crate::model::EbsVolume>>,
    }
    impl Builder {
        /// <p>The unique identifier for the instance in Amazon EMR.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The unique identifier of the instance in Amazon EC2.</p>
        pub fn ec2_instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_instance_id = Some(input.into());
            self
        }
        pub fn set_ec2_instance_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ec2_instance_id = input;
            self
        }
        pub fn get_ec2_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_instance_id
        }
        /// <p>The public DNS name of the instance.</p>
        pub fn public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_dns_name = Some(input.into());
            self
        }
        pub fn set_public_dns_name(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.public_dns_name = input;
            self
        }
        pub fn get_public_dns_name(&self) -> &std::option::Option<std::string::String> {
            &self.public_dns_name
        }
        /// <p>The public IP address of the instance.</p>
        pub fn public_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.public_ip_address = Some(input.into());
            self
        }
        pub fn set_public_ip_address(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.public_ip_address = input;
            self
        }
        pub fn get_public_ip_address(&self) -> &std::option::Option<std::string::String> {
            &self.public_ip_address
        }
        /// <p>The private DNS name of the instance.</p>
        pub fn private_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_dns_name = Some(input.into());
            self
        }
        pub fn set_private_dns_name(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.private_dns_name = input;
            self
        }
        pub fn get_private_dns_name(&self) -> &std::option::Option<std::string::String> {
            &self.private_dns_name
        }
        /// <p>The private IP address of the instance.</p>
        pub fn private_ip_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_ip_address = Some(input.into());
            self
        }
        pub fn set_private_ip_address(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.private_ip_address = input;
            self
        }
        pub fn get_private_ip_address(&self) -> &std::option::Option<std::string::String> {
            &self.private_ip_address
        }
        /// <p>The current status of the instance.</p>
        pub fn status(mut self, input: crate::model::InstanceStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::InstanceStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::InstanceStatus> {
            &self.status
        }
        /// <p>The identifier of the instance group to which this instance belongs.</p>
        pub fn instance_group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_group_id = Some(input.into());
            self
        }
        pub fn set_instance_group_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_group_id = input;
            self
        }
        pub fn get_instance_group_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_group_id
        }
        /// <p>The unique identifier of the instance fleet to which an EC2 instance belongs.</p>
        pub fn instance_fleet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_fleet_id = Some(input.into());
            self
        }
        pub fn set_instance_fleet_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_fleet_id = input;
            self
        }
        pub fn get_instance_fleet_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_fleet_id
        }
        /// <p>The instance purchasing option. Valid values are <code>ON_DEMAND</code> or <code>SPOT</code>.</p>
        pub fn market(mut self, input: impl Into<crate::model::MarketType>) -> Self {
            self.market = Some(input.into());
            self
        }
        pub fn set_market(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market = input;
            self
        }
        pub fn get_market(&self) -> &std::option::Option<crate::model::MarketType> {
            &self.market
        }
        /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// Appends an item to `ebs_volumes`.
        ///
        /// To override the contents of this collection use [`set_ebs_volumes`](Self::set_ebs_volumes).
        ///
        /// <p>The list of EBS volumes that are attached to this instance.</p>
        pub fn ebs_volumes(mut self, input: impl Into<crate::model::EbsVolume>) -> Self {
            let mut v = self.ebs_volumes.unwrap_or_default();
            v.push(input.into());
            self.ebs_volumes = Some(v);
            self
        }
        pub fn set_ebs_volumes(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::EbsVolume>>,
        ) -> Self {
            self.ebs_volumes = input;
            self
        }
        pub fn get_ebs_volumes(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::EbsVolume>> {
            &self.ebs_volumes
        }
        /// Consumes the builder and constructs a [`Instance`](crate::model::Instance)
        pub fn build(self) -> crate::model::Instance {
            crate::model::Instance {
                id: self.id,
                ec2_instance_id: self.ec2_instance_id,
                public_dns_name: self.public_dns_name,
                public_ip_address: self.public_ip_address,
                private_dns_name: self.private_dns_name,
                private_ip_address: self.private_ip_address,
                status: self.status,
                instance_group_id: self.instance_group_id,
                instance_fleet_id: self.instance_fleet_id,
                market: self.market,
                instance_type: self.instance_type,
                ebs_volumes: self.ebs_volumes,
            }
        }
    }
}
impl Instance {
    /// Creates a new builder-style object to manufacture [`Instance`](crate::model::Instance)
    pub fn builder() -> crate::model::instance::Builder {
        crate::model::instance::Builder::default()
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
pub enum InstanceCollectionType {
    #[allow(missing_docs)] // documentation missing in model
    InstanceFleet,
    #[allow(missing_docs)] // documentation missing in model
    InstanceGroup,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceCollectionType {
    fn from(s: &str) -> Self {
        match s {
            "INSTANCE_FLEET" => InstanceCollectionType::InstanceFleet,
            "INSTANCE_GROUP" => InstanceCollectionType::InstanceGroup,
            other => InstanceCollectionType::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceCollectionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceCollectionType::from(s))
    }
}
impl InstanceCollectionType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceCollectionType::InstanceFleet => "INSTANCE_FLEET",
            InstanceCollectionType::InstanceGroup => "INSTANCE_GROUP",
            InstanceCollectionType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["INSTANCE_FLEET", "INSTANCE_GROUP"]
    }
}
impl AsRef<str> for InstanceCollectionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceCollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceCollectionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceCollectionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>Describes an instance fleet, which is a group of EC2 instances that host a particular node type (master, core, or task) in an Amazon EMR cluster. Instance fleets can consist of a mix of instance types and On-Demand and Spot instances, which are provisioned to meet a defined target capacity.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleet {
    /// <p>The unique identifier of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>A friendly name for the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The current status of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::InstanceFleetStatus>,
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_on_demand_capacity: std::option::Option<i32>,
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_spot_capacity: std::option::Option<i32>,
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>TargetOnDemandCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetOnDemandCapacity</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub provisioned_on_demand_capacity: std::option::Option<i32>,
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>TargetSpotCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetSpotCapacity</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub provisioned_spot_capacity: std::option::Option<i32>,
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type_specifications: std::option::Option<std::vec::Vec<crate::model::InstanceTypeSpecification>>,
    /// <p>Describes the launch specification for an instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub launch_specifications: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleet {
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>A friendly name for the instance fleet.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The current status of the instance fleet.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::InstanceFleetStatus> {
        self.status.as_ref()
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub fn instance_fleet_type(&self) -> std::option::Option<&crate::model::InstanceFleetType> {
        self.instance_fleet_type.as_ref()
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
    pub fn target_on_demand_capacity(&self) -> std::option::Option<i32> {
        self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
    pub fn target_spot_capacity(&self) -> std::option::Option<i32> {
        self.target_spot_capacity
    }
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>TargetOnDemandCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetOnDemandCapacity</code>.</p>
    pub fn provisioned_on_demand_capacity(&self) -> std::option::Option<i32> {
        self.provisioned_on_demand_capacity
    }
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>TargetSpotCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetSpotCapacity</code>.</p>
    pub fn provisioned_spot_capacity(&self) -> std::option::Option<i32> {
        self.provisioned_spot_capacity
    }
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    pub fn instance_type_specifications(
        &self,
    ) -> std::option::Option<&[crate::model::InstanceTypeSpecification]> {
        self.instance_type_specifications.as_deref()
    }
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub fn launch_specifications(
        &self,
    ) -> std::option::Option<&crate::model::InstanceFleetProvisioningSpecifications> {
        self.launch_specifications.as_ref()
    }
}
impl std::fmt::Debug for InstanceFleet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleet");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("status", &self.status);
        formatter.field("instance_fleet_type", &self.instance_fleet_type);
        formatter.field("target_on_demand_capacity", &self.target_on_demand_capacity);
        formatter.field("target_spot_capacity", &self.target_spot_capacity);
        formatter.field("provisioned_on_demand_capacity", &self.provisioned_on_demand_capacity);
        formatter.field("provisioned_spot_capacity", &self.provisioned_spot_capacity);
        formatter.field("instance_type_specifications", &self.instance_type_specifications);
        formatter.field("launch_specifications", &self.launch_specifications);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Status", &self.status);
        shape.field("InstanceFleetType", &self.instance_fleet_type);
        shape.field("TargetOnDemandCapacity", &self.target_on_demand_capacity);
        shape.field("TargetSpotCapacity", &self.target_spot_capacity);
        shape.field("ProvisionedOnDemandCapacity", &self.provisioned_on_demand_capacity);
        shape.field("ProvisionedSpotCapacity", &self.provisioned_spot_capacity);
        shape.list("InstanceTypeSpecifications", &self.instance_type_specifications);
        shape.field("LaunchSpecifications", &self.launch_specifications);
        shape.finish()
    }
}
/// See [`InstanceFleet`](crate::model::InstanceFleet)
pub mod instance_fleet {
    /// A builder for [`InstanceFleet`](crate::model::InstanceFleet)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::InstanceFleetStatus>,
        pub(crate) instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
        pub(crate) target_on_demand_capacity: std::option::Option<i32>,
        pub(crate) target_spot_capacity: std::option::Option<i32>,
        pub(crate) provisioned_on_demand_capacity: std::option::Option<i32>,
        pub(crate) provisioned_spot_capacity: std::option::Option<i32>,
        pub(crate) instance_type_specifications: std::option::Option<std::vec::Vec<crate::model::InstanceTypeSpecification>>,
        pub(crate) launch_specifications: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
    }
    impl Builder {
        /// <p>The unique identifier of the instance fleet.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>A friendly name for the instance fleet.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The current status of the instance fleet.</p>
        pub fn status(mut self, input: crate::model::InstanceFleetStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::InstanceFleetStatus> {
            &self.status
        }
        /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
        pub fn instance_fleet_type(
            mut self,
            input: impl Into<crate::model::InstanceFleetType>,
        ) -> Self {
            self.instance_fleet_type = Some(input.into());
            self
        }
        pub fn set_instance_fleet_type(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetType>,
        ) -> Self {
            self.instance_fleet_type = input;
            self
        }
        pub fn get_instance_fleet_type(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetType> {
            &self.instance_fleet_type
        }
        /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
        pub fn target_on_demand_capacity(mut self, input: i32) -> Self {
            self.target_on_demand_capacity = Some(input);
            self
        }
        pub fn set_target_on_demand_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_on_demand_capacity = input;
            self
        }
        pub fn get_target_on_demand_capacity(&self) -> &std::option::Option<i32> {
            &self.target_on_demand_capacity
        }
        /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage.</p>
        pub fn target_spot_capacity(mut self, input: i32) -> Self {
            self.target_spot_capacity = Some(input);
            self
        }
        pub fn set_target_spot_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_spot_capacity = input;
            self
        }
        pub fn get_target_spot_capacity(&self) -> &std::option::Option<i32> {
            &self.target_spot_capacity
        }
        /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>TargetOnDemandCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetOnDemandCapacity</code>.</p>
        pub fn provisioned_on_demand_capacity(mut self, input: i32) -> Self {
            self.provisioned_on_demand_capacity = Some(input);
            self
        }
        pub fn set_provisioned_on_demand_capacity(
            mut self,
            input: std::option::Option<i32>,
        ) -> Self {
            self.provisioned_on_demand_capacity = input;
            self
        }
        pub fn get_provisioned_on_demand_capacity(&self) -> &std::option::Option<i32> {
            &self.provisioned_on_demand_capacity
        }
        /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>TargetSpotCapacity</code>. This provisioned capacity might be less than or greater than <code>TargetSpotCapacity</code>.</p>
        pub fn provisioned_spot_capacity(mut self, input: i32) -> Self {
            self.provisioned_spot_capacity = Some(input);
            self
        }
        pub fn set_provisioned_spot_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.provisioned_spot_capacity = input;
            self
        }
        pub fn get_provisioned_spot_capacity(&self) -> &std::option::Option<i32> {
            &self.provisioned_spot_capacity
        }
        /// Appends an item to `instance_type_specifications`.
        ///
        /// To override the contents of this collection use [`set_instance_type_specifications`](Self::set_instance_type_specifications).
        ///
        /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
        pub fn instance_type_specifications(
            mut self,
            input: impl Into<crate::model::InstanceTypeSpecification>,
        ) -> Self {
            let mut v = self.instance_type_specifications.unwrap_or_default();
            v.push(input.into());
            self.instance_type_specifications = Some(v);
            self
        }
        pub fn set_instance_type_specifications(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceTypeSpecification>>,
        ) -> Self {
            self.instance_type_specifications = input;
            self
        }
        pub fn get_instance_type_specifications(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceTypeSpecification>> {
            &self.instance_type_specifications
        }
        /// <p>Describes the launch specification for an instance fleet.</p>
        pub fn launch_specifications(
            mut self,
            input: crate::model::InstanceFleetProvisioningSpecifications,
        ) -> Self {
            self.launch_specifications = Some(input);
            self
        }
        pub fn set_launch_specifications(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
        ) -> Self {
            self.launch_specifications = input;
            self
        }
        pub fn get_launch_specifications(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetProvisioningSpecifications> {
            &self.launch_specifications
        }
        /// Consumes the builder and constructs a [`InstanceFleet`](crate::model::InstanceFleet)
        pub fn build(self) -> crate::model::InstanceFleet {
            crate::model::InstanceFleet {
                id: self.id,
                name: self.name,
                status: self.status,
                instance_fleet_type: self.instance_fleet_type,
                target_on_demand_capacity: self.target_on_demand_capacity,
                target_spot_capacity: self.target_spot_capacity,
                provisioned_on_demand_capacity: self.provisioned_on_demand_capacity,
                provisioned_spot_capacity: self.provisioned_spot_capacity,
                instance_type_specifications: self.instance_type_specifications,
                launch_specifications: self.launch_specifications,
            }
        }
    }
}
impl InstanceFleet {
    /// Creates a new builder-style object to manufacture [`InstanceFleet`](crate::model::InstanceFleet)
    pub fn builder() -> crate::model::instance_fleet::Builder {
        crate::model::instance_fleet::Builder::default()
    }
}

/// <p>The configuration that defines an instance fleet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetConfig {
    /// <p>The friendly name of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER,CORE,and TASK.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_on_demand_capacity: std::option::Option<i32>,
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_spot_capacity: std::option::Option<i32>,
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type_configs: std::option::Option<std::vec::Vec<crate::model::InstanceTypeConfig>>,
    /// <p>The launch specification for the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub launch_specifications: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleetConfig {
    /// <p>The friendly name of the instance fleet.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER,CORE,and TASK.</p>
    pub fn instance_fleet_type(&self) -> std::option::Option<&crate::model::InstanceFleetType> {
        self.instance_fleet_type.as_ref()
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
    pub fn target_on_demand_capacity(&self) -> std::option::Option<i32> {
        self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
    pub fn target_spot_capacity(&self) -> std::option::Option<i32> {
        self.target_spot_capacity
    }
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    pub fn instance_type_configs(
        &self,
    ) -> std::option::Option<&[crate::model::InstanceTypeConfig]> {
        self.instance_type_configs.as_deref()
    }
    /// <p>The launch specification for the instance fleet.</p>
    pub fn launch_specifications(
        &self,
    ) -> std::option::Option<&crate::model::InstanceFleetProvisioningSpecifications> {
        self.launch_specifications.as_ref()
    }
}
impl std::fmt::Debug for InstanceFleetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetConfig");
        formatter.field("name", &self.name);
        formatter.field("instance_fleet_type", &self.instance_fleet_type);
        formatter.field("target_on_demand_capacity", &self.target_on_demand_capacity);
        formatter.field("target_spot_capacity", &self.target_spot_capacity);
        formatter.field("instance_type_configs", &self.instance_type_configs);
        formatter.field("launch_specifications", &self.launch_specifications);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("InstanceFleetType", &self.instance_fleet_type);
        shape.field("TargetOnDemandCapacity", &self.target_on_demand_capacity);
        shape.field("TargetSpotCapacity", &self.target_spot_capacity);
        shape.list("InstanceTypeConfigs", &self.instance_type_configs);
        shape.field("LaunchSpecifications", &self.launch_specifications);
        shape.finish()
    }
}
/// See [`InstanceFleetConfig`](crate::model::InstanceFleetConfig)
pub mod instance_fleet_config {
    /// A builder for [`InstanceFleetConfig`](crate::model::InstanceFleetConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
        pub(crate) target_on_demand_capacity: std::option::Option<i32>,
        pub(crate) target_spot_capacity: std::option::Option<i32>,
        pub(crate) instance_type_configs: std::option::Option<std::vec::Vec<crate::model::InstanceTypeConfig>>,
        pub(crate) launch_specifications: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
    }
    impl Builder {
        /// <p>The friendly name of the instance fleet.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The node type that the instance fleet hosts. Valid values are MASTER,CORE,and TASK.</p>
        pub fn instance_fleet_type(
            mut self,
            input: impl Into<crate::model::InstanceFleetType>,
        ) -> Self {
            self.instance_fleet_type = Some(input.into());
            self
        }
        pub fn set_instance_fleet_type(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetType>,
        ) -> Self {
            self.instance_fleet_type = input;
            self
        }
        pub fn get_instance_fleet_type(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetType> {
            &self.instance_fleet_type
        }
        /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When an On-Demand instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
        pub fn target_on_demand_capacity(mut self, input: i32) -> Self {
            self.target_on_demand_capacity = Some(input);
            self
        }
        pub fn set_target_on_demand_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_on_demand_capacity = input;
            self
        }
        pub fn get_target_on_demand_capacity(&self) -> &std::option::Option<i32> {
            &self.target_on_demand_capacity
        }
        /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot instances to provision. When the instance fleet launches, Amazon EMR tries to provision Spot instances as specified by <a>InstanceTypeConfig</a>. Each instance configuration has a specified <code>WeightedCapacity</code>. When a Spot instance is provisioned, the <code>WeightedCapacity</code> units count toward the target capacity. Amazon EMR provisions instances until the target capacity is totally fulfilled, even if this results in an overage. For example, if there are 2 units remaining to fulfill capacity, and Amazon EMR can only provision an instance with a <code>WeightedCapacity</code> of 5 units, the instance is provisioned, and the target capacity is exceeded by 3 units.</p>
        pub fn target_spot_capacity(mut self, input: i32) -> Self {
            self.target_spot_capacity = Some(input);
            self
        }
        pub fn set_target_spot_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_spot_capacity = input;
            self
        }
        pub fn get_target_spot_capacity(&self) -> &std::option::Option<i32> {
            &self.target_spot_capacity
        }
        /// Appends an item to `instance_type_configs`.
        ///
        /// To override the contents of this collection use [`set_instance_type_configs`](Self::set_instance_type_configs).
        ///
        /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
        pub fn instance_type_configs(
            mut self,
            input: impl Into<crate::model::InstanceTypeConfig>,
        ) -> Self {
            let mut v = self.instance_type_configs.unwrap_or_default();
            v.push(input.into());
            self.instance_type_configs = Some(v);
            self
        }
        pub fn set_instance_type_configs(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceTypeConfig>>,
        ) -> Self {
            self.instance_type_configs = input;
            self
        }
        pub fn get_instance_type_configs(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceTypeConfig>> {
            &self.instance_type_configs
        }
        /// <p>The launch specification for the instance fleet.</p>
        pub fn launch_specifications(
            mut self,
            input: crate::model::InstanceFleetProvisioningSpecifications,
        ) -> Self {
            self.launch_specifications = Some(input);
            self
        }
        pub fn set_launch_specifications(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetProvisioningSpecifications>,
        ) -> Self {
            self.launch_specifications = input;
            self
        }
        pub fn get_launch_specifications(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetProvisioningSpecifications> {
            &self.launch_specifications
        }
        /// Consumes the builder and constructs a [`InstanceFleetConfig`](crate::model::InstanceFleetConfig)
        pub fn build(self) -> crate::model::InstanceFleetConfig {
            crate::model::InstanceFleetConfig {
                name: self.name,
                instance_fleet_type: self.instance_fleet_type,
                target_on_demand_capacity: self.target_on_demand_capacity,
                target_spot_capacity: self.target_spot_capacity,
                instance_type_configs: self.instance_type_configs,
                launch_specifications: self.launch_specifications,
            }
        }
    }
}
impl InstanceFleetConfig {
    /// Creates a new builder-style object to manufacture [`InstanceFleetConfig`](crate::model::InstanceFleetConfig)
    pub fn builder() -> crate::model::instance_fleet_config::Builder {
        crate::model::instance_fleet_config::Builder::default()
    }
}

/// <p>Configuration parameters for an instance fleet modification request.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetModifyConfig {
    /// <p>A unique identifier for the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_id: std::option::Option<std::string::String>,
    /// <p>The target capacity of On-Demand units for the instance fleet. For more information see <a>InstanceFleetConfig$TargetOnDemandCapacity</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_on_demand_capacity: std::option::Option<i32>,
    /// <p>The target capacity of Spot units for the instance fleet. For more information, see <a>InstanceFleetConfig$TargetSpotCapacity</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub target_spot_capacity: std::option::Option<i32>,
}
impl InstanceFleetModifyConfig {
    /// <p>A unique identifier for the instance fleet.</p>
    pub fn instance_fleet_id(&self) -> std::option::Option<&str> {
        self.instance_fleet_id.as_deref()
    }
    /// <p>The target capacity of On-Demand units for the instance fleet. For more information see <a>InstanceFleetConfig$TargetOnDemandCapacity</a>.</p>
    pub fn target_on_demand_capacity(&self) -> std::option::Option<i32> {
        self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet. For more information, see <a>InstanceFleetConfig$TargetSpotCapacity</a>.</p>
    pub fn target_spot_capacity(&self) -> std::option::Option<i32> {
        self.target_spot_capacity
    }
}
impl std::fmt::Debug for InstanceFleetModifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetModifyConfig");
        formatter.field("instance_fleet_id", &self.instance_fleet_id);
        formatter.field("target_on_demand_capacity", &self.target_on_demand_capacity);
        formatter.field("target_spot_capacity", &self.target_spot_capacity);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetModifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("InstanceFleetId", &self.instance_fleet_id);
        shape.field("TargetOnDemandCapacity", &self.target_on_demand_capacity);
        shape.field("TargetSpotCapacity", &self.target_spot_capacity);
        shape.finish()
    }
}
/// See [`InstanceFleetModifyConfig`](crate::model::InstanceFleetModifyConfig)
pub mod instance_fleet_modify_config {
    /// A builder for [`InstanceFleetModifyConfig`](crate::model::InstanceFleetModifyConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_fleet_id: std::option::Option<std::string::String>,
        pub(crate) target_on_demand_capacity: std::option::Option<i32>,
        pub(crate) target_spot_capacity: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>A unique identifier for the instance fleet.</p>
        pub fn instance_fleet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_fleet_id = Some(input.into());
            self
        }
        pub fn set_instance_fleet_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_fleet_id = input;
            self
        }
        pub fn get_instance_fleet_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_fleet_id
        }
        /// <p>The target capacity of On-Demand units for the instance fleet. For more information see <a>InstanceFleetConfig$TargetOnDemandCapacity</a>.</p>
        pub fn target_on_demand_capacity(mut self, input: i32) -> Self {
            self.target_on_demand_capacity = Some(input);
            self
        }
        pub fn set_target_on_demand_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_on_demand_capacity = input;
            self
        }
        pub fn get_target_on_demand_capacity(&self) -> &std::option::Option<i32> {
            &self.target_on_demand_capacity
        }
        /// <p>The target capacity of Spot units for the instance fleet. For more information, see <a>InstanceFleetConfig$TargetSpotCapacity</a>.</p>
        pub fn target_spot_capacity(mut self, input: i32) -> Self {
            self.target_spot_capacity = Some(input);
            self
        }
        pub fn set_target_spot_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.target_spot_capacity = input;
            self
        }
        pub fn get_target_spot_capacity(&self) -> &std::option::Option<i32> {
            &self.target_spot_capacity
        }
        /// Consumes the builder and constructs a [`InstanceFleetModifyConfig`](crate::model::InstanceFleetModifyConfig)
        pub fn build(self) -> crate::model::InstanceFleetModifyConfig {
            crate::model::InstanceFleetModifyConfig {
                instance_fleet_id: self.instance_fleet_id,
                target_on_demand_capacity: self.target_on_demand_capacity,
                target_spot_capacity: self.target_spot_capacity,
            }
        }
    }
}
impl InstanceFleetModifyConfig {
    /// Creates a new builder-style object to manufacture [`InstanceFleetModifyConfig`](crate::model::InstanceFleetModifyConfig)
    pub fn builder() -> crate::model::instance_fleet_modify_config::Builder {
        crate::model::instance_fleet_modify_config::Builder::default()
    }
}

/// <p>The launch specification for Spot instances in the fleet, which determines the defined duration and provisioning timeout behavior.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetProvisioningSpecifications {
    /// <p>The launch specification for Spot instances in the fleet, which determines the defined duration and provisioning timeout behavior.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub spot_specification: std::option::Option<crate::model::SpotProvisioningSpecification>,
}
impl InstanceFleetProvisioningSpecifications {
    /// <p>The launch specification for Spot instances in the fleet, which determines the defined duration and provisioning timeout behavior.</p>
    pub fn spot_specification(
        &self,
    ) -> std::option::Option<&crate::model::SpotProvisioningSpecification> {
        self.spot_specification.as_ref()
    }
}
impl std::fmt::Debug for InstanceFleetProvisioningSpecifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetProvisioningSpecifications");
        formatter.field("spot_specification", &self.spot_specification);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetProvisioningSpecifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("SpotSpecification", &self.spot_specification);
        shape.finish()
    }
}
/// See [`InstanceFleetProvisioningSpecifications`](crate::model::InstanceFleetProvisioningSpecifications)
pub mod instance_fleet_provisioning_specifications {
    /// A builder for [`InstanceFleetProvisioningSpecifications`](crate::model::InstanceFleetProvisioningSpecifications)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) spot_specification: std::option::Option<crate::model::SpotProvisioningSpecification>,
    }
    impl Builder {
        /// <p>The launch specification for Spot instances in the fleet, which determines the defined duration and provisioning timeout behavior.</p>
        pub fn spot_specification(
            mut self,
            input: crate::model::SpotProvisioningSpecification,
        ) -> Self {
            self.spot_specification = Some(input);
            self
        }
        pub fn set_spot_specification(
            mut self,
            input: std::option::Option<crate::model::SpotProvisioningSpecification>,
        ) -> Self {
            self.spot_specification = input;
            self
        }
        pub fn get_spot_specification(
            &self,
        ) -> &std::option::Option<crate::model::SpotProvisioningSpecification> {
            &self.spot_specification
        }
        /// Consumes the builder and constructs a [`InstanceFleetProvisioningSpecifications`](crate::model::InstanceFleetProvisioningSpecifications)
        pub fn build(self) -> crate::model::InstanceFleetProvisioningSpecifications {
            crate::model::InstanceFleetProvisioningSpecifications {
                spot_specification: self.spot_specification,
            }
        }
    }
}
impl InstanceFleetProvisioningSpecifications {
    /// Creates a new builder-style object to manufacture [`InstanceFleetProvisioningSpecifications`](crate::model::InstanceFleetProvisioningSpecifications)
    pub fn builder() -> crate::model::instance_fleet_provisioning_specifications::Builder {
        crate::model::instance_fleet_provisioning_specifications::Builder::default()
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
pub enum InstanceFleetState {
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Resizing,
    #[allow(missing_docs)] // documentation missing in model
    Suspended,
    #[allow(missing_docs)] // documentation missing in model
    Terminating,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceFleetState {
    fn from(s: &str) -> Self {
        match s {
            "PROVISIONING" => InstanceFleetState::Provisioning,
            "BOOTSTRAPPING" => InstanceFleetState::Bootstrapping,
            "RUNNING" => InstanceFleetState::Running,
            "RESIZING" => InstanceFleetState::Resizing,
            "SUSPENDED" => InstanceFleetState::Suspended,
            "TERMINATING" => InstanceFleetState::Terminating,
            "TERMINATED" => InstanceFleetState::Terminated,
            other => InstanceFleetState::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceFleetState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceFleetState::from(s))
    }
}
impl InstanceFleetState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceFleetState::Provisioning => "PROVISIONING",
            InstanceFleetState::Bootstrapping => "BOOTSTRAPPING",
            InstanceFleetState::Running => "RUNNING",
            InstanceFleetState::Resizing => "RESIZING",
            InstanceFleetState::Suspended => "SUSPENDED",
            InstanceFleetState::Terminating => "TERMINATING",
            InstanceFleetState::Terminated => "TERMINATED",
            InstanceFleetState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "PROVISIONING",
            "BOOTSTRAPPING",
            "RUNNING",
            "RESIZING",
            "SUSPENDED",
            "TERMINATING",
            "TERMINATED",
        ]
    }
}
impl AsRef<str> for InstanceFleetState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceFleetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceFleetState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceFleetState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>Provides status change reason details for the instance fleet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetStateChangeReason {
    /// <p>A code corresponding to the reason the state change occurred.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::InstanceFleetStateChangeReasonCode>,
    /// <p>An explanatory message.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl InstanceFleetStateChangeReason {
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub fn code(&self) -> std::option::Option<&crate::model::InstanceFleetStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>An explanatory message.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InstanceFleetStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`InstanceFleetStateChangeReason`](crate::model::InstanceFleetStateChangeReason)
pub mod instance_fleet_state_change_reason {
    /// A builder for [`InstanceFleetStateChangeReason`](crate::model::InstanceFleetStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::InstanceFleetStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A code corresponding to the reason the state change occurred.</p>
        pub fn code(
            mut self,
            input: impl Into<crate::model::InstanceFleetStateChangeReasonCode>,
        ) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetStateChangeReasonCode> {
            &self.code
        }
        /// <p>An explanatory message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`InstanceFleetStateChangeReason`](crate::model::InstanceFleetStateChangeReason)
        pub fn build(self) -> crate::model::InstanceFleetStateChangeReason {
            crate::model::InstanceFleetStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl InstanceFleetStateChangeReason {
    /// Creates a new builder-style object to manufacture [`InstanceFleetStateChangeReason`](crate::model::InstanceFleetStateChangeReason)
    pub fn builder() -> crate::model::instance_fleet_state_change_reason::Builder {
        crate::model::instance_fleet_state_change_reason::Builder::default()
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
pub enum InstanceFleetStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceFleetStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "INTERNAL_ERROR" => InstanceFleetStateChangeReasonCode::InternalError,
            "VALIDATION_ERROR" => InstanceFleetStateChangeReasonCode::ValidationError,
            "INSTANCE_FAILURE" => InstanceFleetStateChangeReasonCode::InstanceFailure,
            "CLUSTER_TERMINATED" => InstanceFleetStateChangeReasonCode::ClusterTerminated,
            other => InstanceFleetStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceFleetStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceFleetStateChangeReasonCode::from(s))
    }
}
impl InstanceFleetStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceFleetStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceFleetStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceFleetStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceFleetStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
            InstanceFleetStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "CLUSTER_TERMINATED"]
    }
}
impl AsRef<str> for InstanceFleetStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceFleetStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceFleetStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceFleetStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The status of the instance fleet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetStatus {
    /// <p>A code representing the instance fleet status.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::InstanceFleetState>,
    /// <p>Provides status change reason details for the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::InstanceFleetStateChangeReason>,
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeline: std::option::Option<crate::model::InstanceFleetTimeline>,
}
impl InstanceFleetStatus {
    /// <p>A code representing the instance fleet status.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceFleetState> {
        self.state.as_ref()
    }
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub fn state_change_reason(
        &self,
    ) -> std::option::Option<&crate::model::InstanceFleetStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub fn timeline(&self) -> std::option::Option<&crate::model::InstanceFleetTimeline> {
        self.timeline.as_ref()
    }
}
impl std::fmt::Debug for InstanceFleetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.field("timeline", &self.timeline);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.field("Timeline", &self.timeline);
        shape.finish()
    }
}
/// See [`InstanceFleetStatus`](crate::model::InstanceFleetStatus)
pub mod instance_fleet_status {
    /// A builder for [`InstanceFleetStatus`](crate::model::InstanceFleetStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::InstanceFleetState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::InstanceFleetStateChangeReason>,
        pub(crate) timeline: std::option::Option<crate::model::InstanceFleetTimeline>,
    }
    impl Builder {
        /// <p>A code representing the instance fleet status.</p>
        pub fn state(mut self, input: impl Into<crate::model::InstanceFleetState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::InstanceFleetState> {
            &self.state
        }
        /// <p>Provides status change reason details for the instance fleet.</p>
        pub fn state_change_reason(
            mut self,
            input: crate::model::InstanceFleetStateChangeReason,
        ) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetStateChangeReason> {
            &self.state_change_reason
        }
        /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
        pub fn timeline(mut self, input: crate::model::InstanceFleetTimeline) -> Self {
            self.timeline = Some(input);
            self
        }
        pub fn set_timeline(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetTimeline>,
        ) -> Self {
            self.timeline = input;
            self
        }
        pub fn get_timeline(&self) -> &std::option::Option<crate::model::InstanceFleetTimeline> {
            &self.timeline
        }
        /// Consumes the builder and constructs a [`InstanceFleetStatus`](crate::model::InstanceFleetStatus)
        pub fn build(self) -> crate::model::InstanceFleetStatus {
            crate::model::InstanceFleetStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
                timeline: self.timeline,
            }
        }
    }
}
impl InstanceFleetStatus {
    /// Creates a new builder-style object to manufacture [`InstanceFleetStatus`](crate::model::InstanceFleetStatus)
    pub fn builder() -> crate::model::instance_fleet_status::Builder {
        crate::model::instance_fleet_status::Builder::default()
    }
}

/// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceFleetTimeline {
    /// <p>The time and date the instance fleet was created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The time and date the instance fleet was ready to run jobs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The time and date the instance fleet terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl InstanceFleetTimeline {
    /// <p>The time and date the instance fleet was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The time and date the instance fleet was ready to run jobs.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The time and date the instance fleet terminated.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for InstanceFleetTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceFleetTimeline");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceFleetTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`InstanceFleetTimeline`](crate::model::InstanceFleetTimeline)
pub mod instance_fleet_timeline {
    /// A builder for [`InstanceFleetTimeline`](crate::model::InstanceFleetTimeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The time and date the instance fleet was created.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The time and date the instance fleet was ready to run jobs.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The time and date the instance fleet terminated.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`InstanceFleetTimeline`](crate::model::InstanceFleetTimeline)
        pub fn build(self) -> crate::model::InstanceFleetTimeline {
            crate::model::InstanceFleetTimeline {
                creation_date_time: self.creation_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl InstanceFleetTimeline {
    /// Creates a new builder-style object to manufacture [`InstanceFleetTimeline`](crate::model::InstanceFleetTimeline)
    pub fn builder() -> crate::model::instance_fleet_timeline::Builder {
        crate::model::instance_fleet_timeline::Builder::default()
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
pub enum InstanceFleetType {
    #[allow(missing_docs)] // documentation missing in model
    Master,
    #[allow(missing_docs)] // documentation missing in model
    Core,
    #[allow(missing_docs)] // documentation missing in model
    Task,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceFleetType {
    fn from(s: &str) -> Self {
        match s {
            "MASTER" => InstanceFleetType::Master,
            "CORE" => InstanceFleetType::Core,
            "TASK" => InstanceFleetType::Task,
            other => InstanceFleetType::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceFleetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceFleetType::from(s))
    }
}
impl InstanceFleetType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceFleetType::Master => "MASTER",
            InstanceFleetType::Core => "CORE",
            InstanceFleetType::Task => "TASK",
            InstanceFleetType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["MASTER", "CORE", "TASK"]
    }
}
impl AsRef<str> for InstanceFleetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceFleetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceFleetType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceFleetType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>This entity represents an instance group, which is a group of instances that have common purpose. For example, CORE instance group is used for HDFS.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroup {
    /// <p>The identifier of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The marketplace to provision instances for this group. Valid values are ON_DEMAND or SPOT.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub market: std::option::Option<crate::model::MarketType>,
    /// <p>The type of the instance group. Valid values are MASTER, CORE or TASK.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_type: std::option::Option<crate::model::InstanceGroupType>,
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price: std::option::Option<std::string::String>,
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The target number of instances for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub requested_instance_count: std::option::Option<i32>,
    /// <p>The number of instances currently running in this instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub running_instance_count: std::option::Option<i32>,
    /// <p>The current status of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::InstanceGroupStatus>,
    /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>The version number of the requested configuration specification for this instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations_version: std::option::Option<i64>,
    /// <p>A list of configurations that were successfully applied for an instance group last time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub last_successfully_applied_configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>The version number of a configuration specification that was successfully applied for an instance group last time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub last_successfully_applied_configurations_version: std::option::Option<i64>,
    /// <p>The EBS block devices that are mapped to this instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_block_devices: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
    /// <p>If the instance group is EBS-optimized. An Amazon EBS-optimized instance uses an optimized configuration stack and provides additional, dedicated capacity for Amazon EBS I/O.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_optimized: std::option::Option<bool>,
    /// <p>Policy for customizing shrink operations.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub shrink_policy: std::option::Option<crate::model::ShrinkPolicy>,
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See PutAutoScalingPolicy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicyDescription>,
}
impl InstanceGroup {
    /// <p>The identifier of the instance group.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the instance group.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The marketplace to provision instances for this group. Valid values are ON_DEMAND or SPOT.</p>
    pub fn market(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market.as_ref()
    }
    /// <p>The type of the instance group. Valid values are MASTER, CORE or TASK.</p>
    pub fn instance_group_type(&self) -> std::option::Option<&crate::model::InstanceGroupType> {
        self.instance_group_type.as_ref()
    }
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    pub fn bid_price(&self) -> std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>The target number of instances for the instance group.</p>
    pub fn requested_instance_count(&self) -> std::option::Option<i32> {
        self.requested_instance_count
    }
    /// <p>The number of instances currently running in this instance group.</p>
    pub fn running_instance_count(&self) -> std::option::Option<i32> {
        self.running_instance_count
    }
    /// <p>The current status of the instance group.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::InstanceGroupStatus> {
        self.status.as_ref()
    }
    /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>The version number of the requested configuration specification for this instance group.</p>
    pub fn configurations_version(&self) -> std::option::Option<i64> {
        self.configurations_version
    }
    /// <p>A list of configurations that were successfully applied for an instance group last time.</p>
    pub fn last_successfully_applied_configurations(
        &self,
    ) -> std::option::Option<&[crate::model::Configuration]> {
        self.last_successfully_applied_configurations.as_deref()
    }
    /// <p>The version number of a configuration specification that was successfully applied for an instance group last time.</p>
    pub fn last_successfully_applied_configurations_version(&self) -> std::option::Option<i64> {
        self.last_successfully_applied_configurations_version
    }
    /// <p>The EBS block devices that are mapped to this instance group.</p>
    pub fn ebs_block_devices(&self) -> std::option::Option<&[crate::model::EbsBlockDevice]> {
        self.ebs_block_devices.as_deref()
    }
    /// <p>If the instance group is EBS-optimized. An Amazon EBS-optimized instance uses an optimized configuration stack and provides additional, dedicated capacity for Amazon EBS I/O.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }
    /// <p>Policy for customizing shrink operations.</p>
    pub fn shrink_policy(&self) -> std::option::Option<&crate::model::ShrinkPolicy> {
        self.shrink_policy.as_ref()
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See PutAutoScalingPolicy.</p>
    pub fn auto_scaling_policy(
        &self,
    ) -> std::option::Option<&crate::model::AutoScalingPolicyDescription> {
        self.auto_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for InstanceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroup");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("market", &self.market);
        formatter.field("instance_group_type", &self.instance_group_type);
        formatter.field("bid_price", &self.bid_price);
        formatter.field("instance_type", &self.instance_type);
        formatter.field("requested_instance_count", &self.requested_instance_count);
        formatter.field("running_instance_count", &self.running_instance_count);
        formatter.field("status", &self.status);
        formatter.field("configurations", &self.configurations);
        formatter.field("configurations_version", &self.configurations_version);
        formatter.field("last_successfully_applied_configurations", &self.last_successfully_applied_configurations);
        formatter.field("last_successfully_applied_configurations_version", &self.last_successfully_applied_configurations_version);
        formatter.field("ebs_block_devices", &self.ebs_block_devices);
        formatter.field("ebs_optimized", &self.ebs_optimized);
        formatter.field("shrink_policy", &self.shrink_policy);
        formatter.field("auto_scaling_policy", &self.auto_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Market", &self.market);
        shape.field("InstanceGroupType", &self.instance_group_type);
        shape.field("BidPrice", &self.bid_price);
        shape.field("InstanceType", &self.instance_type);
        shape.field("RequestedInstanceCount", &self.requested_instance_count);
        shape.field("RunningInstanceCount", &self.running_instance_count);
        shape.field("Status", &self.status);
        shape.list("Configurations", &self.configurations);
        shape.field("ConfigurationsVersion", &self.configurations_version);
        shape.list("LastSuccessfullyAppliedConfigurations", &self.last_successfully_applied_configurations);
        shape.field("LastSuccessfullyAppliedConfigurationsVersion", &self.last_successfully_applied_configurations_version);
        shape.list("EbsBlockDevices", &self.ebs_block_devices);
        shape.field("EbsOptimized", &self.ebs_optimized);
        shape.field("ShrinkPolicy", &self.shrink_policy);
        shape.field("AutoScalingPolicy", &self.auto_scaling_policy);
        shape.finish()
    }
}
/// See [`InstanceGroup`](crate::model::InstanceGroup)
pub mod instance_group {
    /// A builder for [`InstanceGroup`](crate::model::InstanceGroup)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) market: std::option::Option<crate::model::MarketType>,
        pub(crate) instance_group_type: std::option::Option<crate::model::InstanceGroupType>,
        pub(crate) bid_price: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) requested_instance_count: std::option::Option<i32>,
        pub(crate) running_instance_count: std::option::Option<i32>,
        pub(crate) status: std::option::Option<crate::model::InstanceGroupStatus>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) configurations_version: std::option::Option<i64>,
        pub(crate) last_successfully_applied_configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) last_successfully_applied_configurations_version: std::option::Option<i64>,
        pub(crate) ebs_block_devices: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
        pub(crate) shrink_policy: std::option::Option<crate::model::ShrinkPolicy>,
        pub(crate) auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicyDescription>,
    }
    impl Builder {
        /// <p>The identifier of the instance group.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the instance group.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The marketplace to provision instances for this group. Valid values are ON_DEMAND or SPOT.</p>
        pub fn market(mut self, input: impl Into<crate::model::MarketType>) -> Self {
            self.market = Some(input.into());
            self
        }
        pub fn set_market(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market = input;
            self
        }
        pub fn get_market(&self) -> &std::option::Option<crate::model::MarketType> {
            &self.market
        }
        /// <p>The type of the instance group. Valid values are MASTER, CORE or TASK.</p>
        pub fn instance_group_type(
            mut self,
            input: impl Into<crate::model::InstanceGroupType>,
        ) -> Self {
            self.instance_group_type = Some(input.into());
            self
        }
        pub fn set_instance_group_type(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupType>,
        ) -> Self {
            self.instance_group_type = input;
            self
        }
        pub fn get_instance_group_type(
            &self,
        ) -> &std::option::Option<crate::model::InstanceGroupType> {
            &self.instance_group_type
        }
        /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
        pub fn bid_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.bid_price = Some(input.into());
            self
        }
        pub fn set_bid_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bid_price = input;
            self
        }
        pub fn get_bid_price(&self) -> &std::option::Option<std::string::String> {
            &self.bid_price
        }
        /// <p>The EC2 instance type for all instances in the instance group.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// <p>The target number of instances for the instance group.</p>
        pub fn requested_instance_count(mut self, input: i32) -> Self {
            self.requested_instance_count = Some(input);
            self
        }
        pub fn set_requested_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.requested_instance_count = input;
            self
        }
        pub fn get_requested_instance_count(&self) -> &std::option::Option<i32> {
            &self.requested_instance_count
        }
        /// <p>The number of instances currently running in this instance group.</p>
        pub fn running_instance_count(mut self, input: i32) -> Self {
            self.running_instance_count = Some(input);
            self
        }
        pub fn set_running_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.running_instance_count = input;
            self
        }
        pub fn get_running_instance_count(&self) -> &std::option::Option<i32> {
            &self.running_instance_count
        }
        /// <p>The current status of the instance group.</p>
        pub fn status(mut self, input: crate::model::InstanceGroupStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::InstanceGroupStatus> {
            &self.status
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// <p>The version number of the requested configuration specification for this instance group.</p>
        pub fn configurations_version(mut self, input: i64) -> Self {
            self.configurations_version = Some(input);
            self
        }
        pub fn set_configurations_version(mut self, input: std::option::Option<i64>) -> Self {
            self.configurations_version = input;
            self
        }
        pub fn get_configurations_version(&self) -> &std::option::Option<i64> {
            &self.configurations_version
        }
        /// Appends an item to `last_successfully_applied_configurations`.
        ///
        /// To override the contents of this collection use [`set_last_successfully_applied_configurations`](Self::set_last_successfully_applied_configurations).
        ///
        /// <p>A list of configurations that were successfully applied for an instance group last time.</p>
        pub fn last_successfully_applied_configurations(
            mut self,
            input: impl Into<crate::model::Configuration>,
        ) -> Self {
            let mut v = self.last_successfully_applied_configurations.unwrap_or_default();
            v.push(input.into());
            self.last_successfully_applied_configurations = Some(v);
            self
        }
        pub fn set_last_successfully_applied_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.last_successfully_applied_configurations = input;
            self
        }
        pub fn get_last_successfully_applied_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.last_successfully_applied_configurations
        }
        /// <p>The version number of a configuration specification that was successfully applied for an instance group last time.</p>
        pub fn last_successfully_applied_configurations_version(mut self, input: i64) -> Self {
            self.last_successfully_applied_configurations_version = Some(input);
            self
        }
        pub fn set_last_successfully_applied_configurations_version(
            mut self,
            input: std::option::Option<i64>,
        ) -> Self {
            self.last_successfully_applied_configurations_version = input;
            self
        }
        pub fn get_last_successfully_applied_configurations_version(
            &self,
        ) -> &std::option::Option<i64> {
            &self.last_successfully_applied_configurations_version
        }
        /// Appends an item to `ebs_block_devices`.
        ///
        /// To override the contents of this collection use [`set_ebs_block_devices`](Self::set_ebs_block_devices).
        ///
        /// <p>The EBS block devices that are mapped to this instance group.</p>
        pub fn ebs_block_devices(mut self, input: impl Into<crate::model::EbsBlockDevice>) -> Self {
            let mut v = self.ebs_block_devices.unwrap_or_default();
            v.push(input.into());
            self.ebs_block_devices = Some(v);
            self
        }
        pub fn set_ebs_block_devices(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
        ) -> Self {
            self.ebs_block_devices = input;
            self
        }
        pub fn get_ebs_block_devices(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>> {
            &self.ebs_block_devices
        }
        /// <p>If the instance group is EBS-optimized. An Amazon EBS-optimized instance uses an optimized configuration stack and provides additional, dedicated capacity for Amazon EBS I/O.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }
        pub fn get_ebs_optimized(&self) -> &std::option::Option<bool> {
            &self.ebs_optimized
        }
        /// <p>Policy for customizing shrink operations.</p>
        pub fn shrink_policy(mut self, input: crate::model::ShrinkPolicy) -> Self {
            self.shrink_policy = Some(input);
            self
        }
        pub fn set_shrink_policy(
            mut self,
            input: std::option::Option<crate::model::ShrinkPolicy>,
        ) -> Self {
            self.shrink_policy = input;
            self
        }
        pub fn get_shrink_policy(&self) -> &std::option::Option<crate::model::ShrinkPolicy> {
            &self.shrink_policy
        }
        /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See PutAutoScalingPolicy.</p>
        pub fn auto_scaling_policy(
            mut self,
            input: crate::model::AutoScalingPolicyDescription,
        ) -> Self {
            self.auto_scaling_policy = Some(input);
            self
        }
        pub fn set_auto_scaling_policy(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicyDescription>,
        ) -> Self {
            self.auto_scaling_policy = input;
            self
        }
        pub fn get_auto_scaling_policy(
            &self,
        ) -> &std::option::Option<crate::model::AutoScalingPolicyDescription> {
            &self.auto_scaling_policy
        }
        /// Consumes the builder and constructs a [`InstanceGroup`](crate::model::InstanceGroup)
        pub fn build(self) -> crate::model::InstanceGroup {
            crate::model::InstanceGroup {
                id: self.id,
                name: self.name,
                market: self.market,
                instance_group_type: self.instance_group_type,
                bid_price: self.bid_price,
                instance_type: self.instance_type,
                requested_instance_count: self.requested_instance_count,
                running_instance_count: self.running_instance_count,
                status: self.status,
                configurations: self.configurations,
                configurations_version: self.configurations_version,
                last_successfully_applied_configurations: self.last_successfully_applied_configurations,
                last_successfully_applied_configurations_version: self.last_successfully_applied_configurations_version,
                ebs_block_devices: self.ebs_block_devices,
                ebs_optimized: self.ebs_optimized,
                shrink_policy: self.shrink_policy,
                auto_scaling_policy: self.auto_scaling_policy,
            }
        }
    }
}
impl InstanceGroup {
    /// Creates a new builder-style object to manufacture [`InstanceGroup`](crate::model::InstanceGroup)
    pub fn builder() -> crate::model::instance_group::Builder {
        crate::model::instance_group::Builder::default()
    }
}

/// <p>Configuration defining a new instance group.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupConfig {
    /// <p>Friendly name given to the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub market: std::option::Option<crate::model::MarketType>,
    /// <p>The role of the instance group in the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_role: std::option::Option<crate::model::InstanceRoleType>,
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price: std::option::Option<std::string::String>,
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>Target number of instances for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_count: std::option::Option<i32>,
    /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_configuration: std::option::Option<crate::model::EbsConfiguration>,
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See <a>PutAutoScalingPolicy</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicy>,
}
impl InstanceGroupConfig {
    /// <p>Friendly name given to the instance group.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn market(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market.as_ref()
    }
    /// <p>The role of the instance group in the cluster.</p>
    pub fn instance_role(&self) -> std::option::Option<&crate::model::InstanceRoleType> {
        self.instance_role.as_ref()
    }
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    pub fn bid_price(&self) -> std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>Target number of instances for the instance group.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub fn ebs_configuration(&self) -> std::option::Option<&crate::model::EbsConfiguration> {
        self.ebs_configuration.as_ref()
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See <a>PutAutoScalingPolicy</a>.</p>
    pub fn auto_scaling_policy(&self) -> std::option::Option<&crate::model::AutoScalingPolicy> {
        self.auto_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for InstanceGroupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupConfig");
        formatter.field("name", &self.name);
        formatter.field("market", &self.market);
        formatter.field("instance_role", &self.instance_role);
        formatter.field("bid_price", &self.bid_price);
        formatter.field("instance_type", &self.instance_type);
        formatter.field("instance_count", &self.instance_count);
        formatter.field("configurations", &self.configurations);
        formatter.field("ebs_configuration", &self.ebs_configuration);
        formatter.field("auto_scaling_policy", &self.auto_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("Market", &self.market);
        shape.field("InstanceRole", &self.instance_role);
        shape.field("BidPrice", &self.bid_price);
        shape.field("InstanceType", &self.instance_type);
        shape.field("InstanceCount", &self.instance_count);
        shape.list("Configurations", &self.configurations);
        shape.field("EbsConfiguration", &self.ebs_configuration);
        shape.field("AutoScalingPolicy", &self.auto_scaling_policy);
        shape.finish()
    }
}
/// See [`InstanceGroupConfig`](crate::model::InstanceGroupConfig)
pub mod instance_group_config {
    /// A builder for [`InstanceGroupConfig`](crate::model::InstanceGroupConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) market: std::option::Option<crate::model::MarketType>,
        pub(crate) instance_role: std::option::Option<crate::model::InstanceRoleType>,
        pub(crate) bid_price: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) ebs_configuration: std::option::Option<crate::model::EbsConfiguration>,
        pub(crate) auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicy>,
    }
    impl Builder {
        /// <p>Friendly name given to the instance group.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>Market type of the EC2 instances used to create a cluster node.</p>
        pub fn market(mut self, input: impl Into<crate::model::MarketType>) -> Self {
            self.market = Some(input.into());
            self
        }
        pub fn set_market(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market = input;
            self
        }
        pub fn get_market(&self) -> &std::option::Option<crate::model::MarketType> {
            &self.market
        }
        /// <p>The role of the instance group in the cluster.</p>
        pub fn instance_role(mut self, input: impl Into<crate::model::InstanceRoleType>) -> Self {
            self.instance_role = Some(input.into());
            self
        }
        pub fn set_instance_role(
            mut self,
            input: std::option::Option<crate::model::InstanceRoleType>,
        ) -> Self {
            self.instance_role = input;
            self
        }
        pub fn get_instance_role(&self) -> &std::option::Option<crate::model::InstanceRoleType> {
            &self.instance_role
        }
        /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
        pub fn bid_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.bid_price = Some(input.into());
            self
        }
        pub fn set_bid_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bid_price = input;
            self
        }
        pub fn get_bid_price(&self) -> &std::option::Option<std::string::String> {
            &self.bid_price
        }
        /// <p>The EC2 instance type for all instances in the instance group.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// <p>Target number of instances for the instance group.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <note> <p>Amazon EMR releases 4.x or later.</p> </note> <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
        pub fn ebs_configuration(mut self, input: crate::model::EbsConfiguration) -> Self {
            self.ebs_configuration = Some(input);
            self
        }
        pub fn set_ebs_configuration(
            mut self,
            input: std::option::Option<crate::model::EbsConfiguration>,
        ) -> Self {
            self.ebs_configuration = input;
            self
        }
        pub fn get_ebs_configuration(
            &self,
        ) -> &std::option::Option<crate::model::EbsConfiguration> {
            &self.ebs_configuration
        }
        /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric. See <a>PutAutoScalingPolicy</a>.</p>
        pub fn auto_scaling_policy(mut self, input: crate::model::AutoScalingPolicy) -> Self {
            self.auto_scaling_policy = Some(input);
            self
        }
        pub fn set_auto_scaling_policy(
            mut self,
            input: std::option::Option<crate::model::AutoScalingPolicy>,
        ) -> Self {
            self.auto_scaling_policy = input;
            self
        }
        pub fn get_auto_scaling_policy(
            &self,
        ) -> &std::option::Option<crate::model::AutoScalingPolicy> {
            &self.auto_scaling_policy
        }
        /// Consumes the builder and constructs a [`InstanceGroupConfig`](crate::model::InstanceGroupConfig)
        pub fn build(self) -> crate::model::InstanceGroupConfig {
            crate::model::InstanceGroupConfig {
                name: self.name,
                market: self.market,
                instance_role: self.instance_role,
                bid_price: self.bid_price,
                instance_type: self.instance_type,
                instance_count: self.instance_count,
                configurations: self.configurations,
                ebs_configuration: self.ebs_configuration,
                auto_scaling_policy: self.auto_scaling_policy,
            }
        }
    }
}
impl InstanceGroupConfig {
    /// Creates a new builder-style object to manufacture [`InstanceGroupConfig`](crate::model::InstanceGroupConfig)
    pub fn builder() -> crate::model::instance_group_config::Builder {
        crate::model::instance_group_config::Builder::default()
    }
}

/// <p>Detailed information about an instance group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupDetail {
    /// <p>Unique identifier for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
    /// <p>Friendly name for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub market: std::option::Option<crate::model::MarketType>,
    /// <p>Instance group role in the cluster</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_role: std::option::Option<crate::model::InstanceRoleType>,
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price: std::option::Option<std::string::String>,
    /// <p>EC2 instance type.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>Target number of instances to run in the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_request_count: std::option::Option<i32>,
    /// <p>Actual count of running instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_running_count: std::option::Option<i32>,
    /// <p>State of instance group. The following values are deprecated: STARTING, TERMINATED, and FAILED.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::InstanceGroupState>,
    /// <p>Details regarding the state of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub last_state_change_reason: std::option::Option<std::string::String>,
    /// <p>The date/time the instance group was created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date/time the instance group was started.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub start_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date/time the instance group was available to the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date/time the instance group was terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl InstanceGroupDetail {
    /// <p>Unique identifier for the instance group.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>Friendly name for the instance group.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn market(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market.as_ref()
    }
    /// <p>Instance group role in the cluster</p>
    pub fn instance_role(&self) -> std::option::Option<&crate::model::InstanceRoleType> {
        self.instance_role.as_ref()
    }
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    pub fn bid_price(&self) -> std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>EC2 instance type.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>Target number of instances to run in the instance group.</p>
    pub fn instance_request_count(&self) -> std::option::Option<i32> {
        self.instance_request_count
    }
    /// <p>Actual count of running instances.</p>
    pub fn instance_running_count(&self) -> std::option::Option<i32> {
        self.instance_running_count
    }
    /// <p>State of instance group. The following values are deprecated: STARTING, TERMINATED, and FAILED.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceGroupState> {
        self.state.as_ref()
    }
    /// <p>Details regarding the state of the instance group.</p>
    pub fn last_state_change_reason(&self) -> std::option::Option<&str> {
        self.last_state_change_reason.as_deref()
    }
    /// <p>The date/time the instance group was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The date/time the instance group was started.</p>
    pub fn start_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.start_date_time
    }
    /// <p>The date/time the instance group was available to the cluster.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The date/time the instance group was terminated.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for InstanceGroupDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupDetail");
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("name", &self.name);
        formatter.field("market", &self.market);
        formatter.field("instance_role", &self.instance_role);
        formatter.field("bid_price", &self.bid_price);
        formatter.field("instance_type", &self.instance_type);
        formatter.field("instance_request_count", &self.instance_request_count);
        formatter.field("instance_running_count", &self.instance_running_count);
        formatter.field("state", &self.state);
        formatter.field("last_state_change_reason", &self.last_state_change_reason);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("start_date_time", &self.start_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.field("Name", &self.name);
        shape.field("Market", &self.market);
        shape.field("InstanceRole", &self.instance_role);
        shape.field("BidPrice", &self.bid_price);
        shape.field("InstanceType", &self.instance_type);
        shape.field("InstanceRequestCount", &self.instance_request_count);
        shape.field("InstanceRunningCount", &self.instance_running_count);
        shape.field("State", &self.state);
        shape.field("LastStateChangeReason", &self.last_state_change_reason);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("StartDateTime", &self.start_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`InstanceGroupDetail`](crate::model::InstanceGroupDetail)
pub mod instance_group_detail {
    /// A builder for [`InstanceGroupDetail`](crate::model::InstanceGroupDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) market: std::option::Option<crate::model::MarketType>,
        pub(crate) instance_role: std::option::Option<crate::model::InstanceRoleType>,
        pub(crate) bid_price: std::option::Option<std::string::String>,
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_request_count: std::option::Option<i32>,
        pub(crate) instance_running_count: std::option::Option<i32>,
        pub(crate) state: std::option::Option<crate::model::InstanceGroupState>,
        pub(crate) last_state_change_reason: std::option::Option<std::string::String>,
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) start_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>Unique identifier for the instance group.</p>
        pub fn instance_group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_group_id = Some(input.into());
            self
        }
        pub fn set_instance_group_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_group_id = input;
            self
        }
        pub fn get_instance_group_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_group_id
        }
        /// <p>Friendly name for the instance group.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>Market type of the EC2 instances used to create a cluster node.</p>
        pub fn market(mut self, input: impl Into<crate::model::MarketType>) -> Self {
            self.market = Some(input.into());
            self
        }
        pub fn set_market(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market = input;
            self
        }
        pub fn get_market(&self) -> &std::option::Option<crate::model::MarketType> {
            &self.market
        }
        /// <p>Instance group role in the cluster</p>
        pub fn instance_role(mut self, input: impl Into<crate::model::InstanceRoleType>) -> Self {
            self.instance_role = Some(input.into());
            self
        }
        pub fn set_instance_role(
            mut self,
            input: std::option::Option<crate::model::InstanceRoleType>,
        ) -> Self {
            self.instance_role = input;
            self
        }
        pub fn get_instance_role(&self) -> &std::option::Option<crate::model::InstanceRoleType> {
            &self.instance_role
        }
        /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
        pub fn bid_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.bid_price = Some(input.into());
            self
        }
        pub fn set_bid_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bid_price = input;
            self
        }
        pub fn get_bid_price(&self) -> &std::option::Option<std::string::String> {
            &self.bid_price
        }
        /// <p>EC2 instance type.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// <p>Target number of instances to run in the instance group.</p>
        pub fn instance_request_count(mut self, input: i32) -> Self {
            self.instance_request_count = Some(input);
            self
        }
        pub fn set_instance_request_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_request_count = input;
            self
        }
        pub fn get_instance_request_count(&self) -> &std::option::Option<i32> {
            &self.instance_request_count
        }
        /// <p>Actual count of running instances.</p>
        pub fn instance_running_count(mut self, input: i32) -> Self {
            self.instance_running_count = Some(input);
            self
        }
        pub fn set_instance_running_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_running_count = input;
            self
        }
        pub fn get_instance_running_count(&self) -> &std::option::Option<i32> {
            &self.instance_running_count
        }
        /// <p>State of instance group. The following values are deprecated: STARTING, TERMINATED, and FAILED.</p>
        pub fn state(mut self, input: impl Into<crate::model::InstanceGroupState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::InstanceGroupState> {
            &self.state
        }
        /// <p>Details regarding the state of the instance group.</p>
        pub fn last_state_change_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_state_change_reason = Some(input.into());
            self
        }
        pub fn set_last_state_change_reason(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.last_state_change_reason = input;
            self
        }
        pub fn get_last_state_change_reason(&self) -> &std::option::Option<std::string::String> {
            &self.last_state_change_reason
        }
        /// <p>The date/time the instance group was created.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The date/time the instance group was started.</p>
        pub fn start_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_date_time = Some(input);
            self
        }
        pub fn set_start_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.start_date_time = input;
            self
        }
        pub fn get_start_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.start_date_time
        }
        /// <p>The date/time the instance group was available to the cluster.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The date/time the instance group was terminated.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`InstanceGroupDetail`](crate::model::InstanceGroupDetail)
        pub fn build(self) -> crate::model::InstanceGroupDetail {
            crate::model::InstanceGroupDetail {
                instance_group_id: self.instance_group_id,
                name: self.name,
                market: self.market,
                instance_role: self.instance_role,
                bid_price: self.bid_price,
                instance_type: self.instance_type,
                instance_request_count: self.instance_request_count,
                instance_running_count: self.instance_running_count,
                state: self.state,
                last_state_change_reason: self.last_state_change_reason,
                creation_date_time: self.creation_date_time,
                start_date_time: self.start_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl InstanceGroupDetail {
    /// Creates a new builder-style object to manufacture [`InstanceGroupDetail`](crate::model::InstanceGroupDetail)
    pub fn builder() -> crate::model::instance_group_detail::Builder {
        crate::model::instance_group_detail::Builder::default()
    }
}

/// <p>Modify the size or configurations of an instance group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupModifyConfig {
    /// <p>Unique ID of the instance group to expand or shrink.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
    /// <p>Target size for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_count: std::option::Option<i32>,
    /// <p>The EC2 InstanceIds to terminate. After you terminate the instances, the instance group will not return to its original requested size.</p>
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "EC2InstanceIdsToTerminate")
    )]
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_instance_ids_to_terminate: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Policy for customizing shrink operations.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub shrink_policy: std::option::Option<crate::model::ShrinkPolicy>,
    /// <p>A list of new or modified configurations to apply for an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
}
impl InstanceGroupModifyConfig {
    /// <p>Unique ID of the instance group to expand or shrink.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>Target size for the instance group.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <p>The EC2 InstanceIds to terminate. After you terminate the instances, the instance group will not return to its original requested size.</p>
    pub fn ec2_instance_ids_to_terminate(&self) -> std::option::Option<&[std::string::String]> {
        self.ec2_instance_ids_to_terminate.as_deref()
    }
    /// <p>Policy for customizing shrink operations.</p>
    pub fn shrink_policy(&self) -> std::option::Option<&crate::model::ShrinkPolicy> {
        self.shrink_policy.as_ref()
    }
    /// <p>A list of new or modified configurations to apply for an instance group.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
}
impl std::fmt::Debug for InstanceGroupModifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupModifyConfig");
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("instance_count", &self.instance_count);
        formatter.field("ec2_instance_ids_to_terminate", &self.ec2_instance_ids_to_terminate);
        formatter.field("shrink_policy", &self.shrink_policy);
        formatter.field("configurations", &self.configurations);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupModifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.field("InstanceCount", &self.instance_count);
        shape.list("EC2InstanceIdsToTerminate", &self.ec2_instance_ids_to_terminate);
        shape.field("ShrinkPolicy", &self.shrink_policy);
        shape.list("Configurations", &self.configurations);
        shape.finish()
    }
}
/// See [`InstanceGroupModifyConfig`](crate::model::InstanceGroupModifyConfig)
pub mod instance_group_modify_config {
    /// A builder for [`InstanceGroupModifyConfig`](crate::model::InstanceGroupModifyConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) ec2_instance_ids_to_terminate: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) shrink_policy: std::option::Option<crate::model::ShrinkPolicy>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    }
    impl Builder {
        /// <p>Unique ID of the instance group to expand or shrink.</p>
        pub fn instance_group_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_group_id = Some(input.into());
            self
        }
        pub fn set_instance_group_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_group_id = input;
            self
        }
        pub fn get_instance_group_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_group_id
        }
        /// <p>Target size for the instance group.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
        }
        /// Appends an item to `ec2_instance_ids_to_terminate`.
        ///
        /// To override the contents of this collection use [`set_ec2_instance_ids_to_terminate`](Self::set_ec2_instance_ids_to_terminate).
        ///
        /// <p>The EC2 InstanceIds to terminate. After you terminate the instances, the instance group will not return to its original requested size.</p>
        pub fn ec2_instance_ids_to_terminate(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.ec2_instance_ids_to_terminate.unwrap_or_default();
            v.push(input.into());
            self.ec2_instance_ids_to_terminate = Some(v);
            self
        }
        pub fn set_ec2_instance_ids_to_terminate(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.ec2_instance_ids_to_terminate = input;
            self
        }
        pub fn get_ec2_instance_ids_to_terminate(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.ec2_instance_ids_to_terminate
        }
        /// <p>Policy for customizing shrink operations.</p>
        pub fn shrink_policy(mut self, input: crate::model::ShrinkPolicy) -> Self {
            self.shrink_policy = Some(input);
            self
        }
        pub fn set_shrink_policy(
            mut self,
            input: std::option::Option<crate::model::ShrinkPolicy>,
        ) -> Self {
            self.shrink_policy = input;
            self
        }
        pub fn get_shrink_policy(&self) -> &std::option::Option<crate::model::ShrinkPolicy> {
            &self.shrink_policy
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>A list of new or modified configurations to apply for an instance group.</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// Consumes the builder and constructs a [`InstanceGroupModifyConfig`](crate::model::InstanceGroupModifyConfig)
        pub fn build(self) -> crate::model::InstanceGroupModifyConfig {
            crate::model::InstanceGroupModifyConfig {
                instance_group_id: self.instance_group_id,
                instance_count: self.instance_count,
                ec2_instance_ids_to_terminate: self.ec2_instance_ids_to_terminate,
                shrink_policy: self.shrink_policy,
                configurations: self.configurations,
            }
        }
    }
}
impl InstanceGroupModifyConfig {
    /// Creates a new builder-style object to manufacture [`InstanceGroupModifyConfig`](crate::model::InstanceGroupModifyConfig)
    pub fn builder() -> crate::model::instance_group_modify_config::Builder {
        crate::model::instance_group_modify_config::Builder::default()
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
pub enum InstanceGroupState {
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Reconfiguring,
    #[allow(missing_docs)] // documentation missing in model
    Resizing,
    #[allow(missing_docs)] // documentation missing in model
    Suspended,
    #[allow(missing_docs)] // documentation missing in model
    Terminating,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    Arrested,
    #[allow(missing_docs)] // documentation missing in model
    ShuttingDown,
    #[allow(missing_docs)] // documentation missing in model
    Ended,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceGroupState {
    fn from(s: &str) -> Self {
        match s {
            "PROVISIONING" => InstanceGroupState::Provisioning,
            "BOOTSTRAPPING" => InstanceGroupState::Bootstrapping,
            "RUNNING" => InstanceGroupState::Running,
            "RECONFIGURING" => InstanceGroupState::Reconfiguring,
            "RESIZING" => InstanceGroupState::Resizing,
            "SUSPENDED" => InstanceGroupState::Suspended,
            "TERMINATING" => InstanceGroupState::Terminating,
            "TERMINATED" => InstanceGroupState::Terminated,
            "ARRESTED" => InstanceGroupState::Arrested,
            "SHUTTING_DOWN" => InstanceGroupState::ShuttingDown,
            "ENDED" => InstanceGroupState::Ended,
            other => InstanceGroupState::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceGroupState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceGroupState::from(s))
    }
}
impl InstanceGroupState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceGroupState::Provisioning => "PROVISIONING",
            InstanceGroupState::Bootstrapping => "BOOTSTRAPPING",
            InstanceGroupState::Running => "RUNNING",
            InstanceGroupState::Reconfiguring => "RECONFIGURING",
            InstanceGroupState::Resizing => "RESIZING",
            InstanceGroupState::Suspended => "SUSPENDED",
            InstanceGroupState::Terminating => "TERMINATING",
            InstanceGroupState::Terminated => "TERMINATED",
            InstanceGroupState::Arrested => "ARRESTED",
            InstanceGroupState::ShuttingDown => "SHUTTING_DOWN",
            InstanceGroupState::Ended => "ENDED",
            InstanceGroupState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "PROVISIONING",
            "BOOTSTRAPPING",
            "RUNNING",
            "RECONFIGURING",
            "RESIZING",
            "SUSPENDED",
            "TERMINATING",
            "TERMINATED",
            "ARRESTED",
            "SHUTTING_DOWN",
            "ENDED",
        ]
    }
}
impl AsRef<str> for InstanceGroupState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceGroupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceGroupState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceGroupState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The status change reason details for the instance group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::InstanceGroupStateChangeReasonCode>,
    /// <p>The status change reason description.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl InstanceGroupStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    pub fn code(&self) -> std::option::Option<&crate::model::InstanceGroupStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The status change reason description.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InstanceGroupStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`InstanceGroupStateChangeReason`](crate::model::InstanceGroupStateChangeReason)
pub mod instance_group_state_change_reason {
    /// A builder for [`InstanceGroupStateChangeReason`](crate::model::InstanceGroupStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::InstanceGroupStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The programmable code for the state change reason.</p>
        pub fn code(
            mut self,
            input: impl Into<crate::model::InstanceGroupStateChangeReasonCode>,
        ) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(
            &self,
        ) -> &std::option::Option<crate::model::InstanceGroupStateChangeReasonCode> {
            &self.code
        }
        /// <p>The status change reason description.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`InstanceGroupStateChangeReason`](crate::model::InstanceGroupStateChangeReason)
        pub fn build(self) -> crate::model::InstanceGroupStateChangeReason {
            crate::model::InstanceGroupStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl InstanceGroupStateChangeReason {
    /// Creates a new builder-style object to manufacture [`InstanceGroupStateChangeReason`](crate::model::InstanceGroupStateChangeReason)
    pub fn builder() -> crate::model::instance_group_state_change_reason::Builder {
        crate::model::instance_group_state_change_reason::Builder::default()
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
pub enum InstanceGroupStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceGroupStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "INTERNAL_ERROR" => InstanceGroupStateChangeReasonCode::InternalError,
            "VALIDATION_ERROR" => InstanceGroupStateChangeReasonCode::ValidationError,
            "INSTANCE_FAILURE" => InstanceGroupStateChangeReasonCode::InstanceFailure,
            "CLUSTER_TERMINATED" => InstanceGroupStateChangeReasonCode::ClusterTerminated,
            other => InstanceGroupStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceGroupStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceGroupStateChangeReasonCode::from(s))
    }
}
impl InstanceGroupStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceGroupStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceGroupStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceGroupStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceGroupStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
            InstanceGroupStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "CLUSTER_TERMINATED"]
    }
}
impl AsRef<str> for InstanceGroupStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceGroupStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceGroupStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceGroupStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The details of the instance group status.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupStatus {
    /// <p>The current state of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::InstanceGroupState>,
    /// <p>The status change reason details for the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::InstanceGroupStateChangeReason>,
    /// <p>The timeline of the instance group status over time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeline: std::option::Option<crate::model::InstanceGroupTimeline>,
}
impl InstanceGroupStatus {
    /// <p>The current state of the instance group.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceGroupState> {
        self.state.as_ref()
    }
    /// <p>The status change reason details for the instance group.</p>
    pub fn state_change_reason(
        &self,
    ) -> std::option::Option<&crate::model::InstanceGroupStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>The timeline of the instance group status over time.</p>
    pub fn timeline(&self) -> std::option::Option<&crate::model::InstanceGroupTimeline> {
        self.timeline.as_ref()
    }
}
impl std::fmt::Debug for InstanceGroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.field("timeline", &self.timeline);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.field("Timeline", &self.timeline);
        shape.finish()
    }
}
/// See [`InstanceGroupStatus`](crate::model::InstanceGroupStatus)
pub mod instance_group_status {
    /// A builder for [`InstanceGroupStatus`](crate::model::InstanceGroupStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::InstanceGroupState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::InstanceGroupStateChangeReason>,
        pub(crate) timeline: std::option::Option<crate::model::InstanceGroupTimeline>,
    }
    impl Builder {
        /// <p>The current state of the instance group.</p>
        pub fn state(mut self, input: impl Into<crate::model::InstanceGroupState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::InstanceGroupState> {
            &self.state
        }
        /// <p>The status change reason details for the instance group.</p>
        pub fn state_change_reason(
            mut self,
            input: crate::model::InstanceGroupStateChangeReason,
        ) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::InstanceGroupStateChangeReason> {
            &self.state_change_reason
        }
        /// <p>The timeline of the instance group status over time.</p>
        pub fn timeline(mut self, input: crate::model::InstanceGroupTimeline) -> Self {
            self.timeline = Some(input);
            self
        }
        pub fn set_timeline(
            mut self,
            input: std::option::Option<crate::model::InstanceGroupTimeline>,
        ) -> Self {
            self.timeline = input;
            self
        }
        pub fn get_timeline(&self) -> &std::option::Option<crate::model::InstanceGroupTimeline> {
            &self.timeline
        }
        /// Consumes the builder and constructs a [`InstanceGroupStatus`](crate::model::InstanceGroupStatus)
        pub fn build(self) -> crate::model::InstanceGroupStatus {
            crate::model::InstanceGroupStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
                timeline: self.timeline,
            }
        }
    }
}
impl InstanceGroupStatus {
    /// Creates a new builder-style object to manufacture [`InstanceGroupStatus`](crate::model::InstanceGroupStatus)
    pub fn builder() -> crate::model::instance_group_status::Builder {
        crate::model::instance_group_status::Builder::default()
    }
}

/// <p>The timeline of the instance group lifecycle.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceGroupTimeline {
    /// <p>The creation date and time of the instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the instance group terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl InstanceGroupTimeline {
    /// <p>The creation date and time of the instance group.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The date and time when the instance group terminated.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for InstanceGroupTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceGroupTimeline");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceGroupTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`InstanceGroupTimeline`](crate::model::InstanceGroupTimeline)
pub mod instance_group_timeline {
    /// A builder for [`InstanceGroupTimeline`](crate::model::InstanceGroupTimeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The creation date and time of the instance group.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The date and time when the instance group became ready to perform tasks.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The date and time when the instance group terminated.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`InstanceGroupTimeline`](crate::model::InstanceGroupTimeline)
        pub fn build(self) -> crate::model::InstanceGroupTimeline {
            crate::model::InstanceGroupTimeline {
                creation_date_time: self.creation_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl InstanceGroupTimeline {
    /// Creates a new builder-style object to manufacture [`InstanceGroupTimeline`](crate::model::InstanceGroupTimeline)
    pub fn builder() -> crate::model::instance_group_timeline::Builder {
        crate::model::instance_group_timeline::Builder::default()
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
pub enum InstanceGroupType {
    #[allow(missing_docs)] // documentation missing in model
    Master,
    #[allow(missing_docs)] // documentation missing in model
    Core,
    #[allow(missing_docs)] // documentation missing in model
    Task,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceGroupType {
    fn from(s: &str) -> Self {
        match s {
            "MASTER" => InstanceGroupType::Master,
            "CORE" => InstanceGroupType::Core,
            "TASK" => InstanceGroupType::Task,
            other => InstanceGroupType::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceGroupType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceGroupType::from(s))
    }
}
impl InstanceGroupType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceGroupType::Master => "MASTER",
            InstanceGroupType::Core => "CORE",
            InstanceGroupType::Task => "TASK",
            InstanceGroupType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["MASTER", "CORE", "TASK"]
    }
}
impl AsRef<str> for InstanceGroupType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceGroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceGroupType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceGroupType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>Custom policy for requesting termination protection or termination of specific instances when shrinking an instance group.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceResizePolicy {
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instances_to_terminate: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instances_to_protect: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_termination_timeout: std::option::Option<i32>,
}
impl InstanceResizePolicy {
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    pub fn instances_to_terminate(&self) -> std::option::Option<&[std::string::String]> {
        self.instances_to_terminate.as_deref()
    }
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    pub fn instances_to_protect(&self) -> std::option::Option<&[std::string::String]> {
        self.instances_to_protect.as_deref()
    }
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub fn instance_termination_timeout(&self) -> std::option::Option<i32> {
        self.instance_termination_timeout
    }
}
impl std::fmt::Debug for InstanceResizePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceResizePolicy");
        formatter.field("instances_to_terminate", &self.instances_to_terminate);
        formatter.field("instances_to_protect", &self.instances_to_protect);
        formatter.field("instance_termination_timeout", &self.instance_termination_timeout);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceResizePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("InstancesToTerminate", &self.instances_to_terminate);
        shape.list("InstancesToProtect", &self.instances_to_protect);
        shape.field("InstanceTerminationTimeout", &self.instance_termination_timeout);
        shape.finish()
    }
}
/// See [`InstanceResizePolicy`](crate::model::InstanceResizePolicy)
pub mod instance_resize_policy {
    /// A builder for [`InstanceResizePolicy`](crate::model::InstanceResizePolicy)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instances_to_terminate: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) instances_to_protect: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) instance_termination_timeout: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `instances_to_terminate`.
        ///
        /// To override the contents of this collection use [`set_instances_to_terminate`](Self::set_instances_to_terminate).
        ///
        /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
        pub fn instances_to_terminate(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instances_to_terminate.unwrap_or_default();
            v.push(input.into());
            self.instances_to_terminate = Some(v);
            self
        }
        pub fn set_instances_to_terminate(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.instances_to_terminate = input;
            self
        }
        pub fn get_instances_to_terminate(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.instances_to_terminate
        }
        /// Appends an item to `instances_to_protect`.
        ///
        /// To override the contents of this collection use [`set_instances_to_protect`](Self::set_instances_to_protect).
        ///
        /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
        pub fn instances_to_protect(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instances_to_protect.unwrap_or_default();
            v.push(input.into());
            self.instances_to_protect = Some(v);
            self
        }
        pub fn set_instances_to_protect(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.instances_to_protect = input;
            self
        }
        pub fn get_instances_to_protect(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.instances_to_protect
        }
        /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
        pub fn instance_termination_timeout(mut self, input: i32) -> Self {
            self.instance_termination_timeout = Some(input);
            self
        }
        pub fn set_instance_termination_timeout(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_termination_timeout = input;
            self
        }
        pub fn get_instance_termination_timeout(&self) -> &std::option::Option<i32> {
            &self.instance_termination_timeout
        }
        /// Consumes the builder and constructs a [`InstanceResizePolicy`](crate::model::InstanceResizePolicy)
        pub fn build(self) -> crate::model::InstanceResizePolicy {
            crate::model::InstanceResizePolicy {
                instances_to_terminate: self.instances_to_terminate,
                instances_to_protect: self.instances_to_protect,
                instance_termination_timeout: self.instance_termination_timeout,
            }
        }
    }
}
impl InstanceResizePolicy {
    /// Creates a new builder-style object to manufacture [`InstanceResizePolicy`](crate::model::InstanceResizePolicy)
    pub fn builder() -> crate::model::instance_resize_policy::Builder {
        crate::model::instance_resize_policy::Builder::default()
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
pub enum InstanceRoleType {
    #[allow(missing_docs)] // documentation missing in model
    Master,
    #[allow(missing_docs)] // documentation missing in model
    Core,
    #[allow(missing_docs)] // documentation missing in model
    Task,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceRoleType {
    fn from(s: &str) -> Self {
        match s {
            "MASTER" => InstanceRoleType::Master,
            "CORE" => InstanceRoleType::Core,
            "TASK" => InstanceRoleType::Task,
            other => InstanceRoleType::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for InstanceRoleType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceRoleType::from(s))
    }
}
impl InstanceRoleType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceRoleType::Master => "MASTER",
            InstanceRoleType::Core => "CORE",
            InstanceRoleType::Task => "TASK",
            InstanceRoleType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["MASTER", "CORE", "TASK"]
    }
}
impl AsRef<str> for InstanceRoleType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceRoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceRoleType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceRoleType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
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
pub enum InstanceState {
    #[allow(missing_docs)] // documentation missing in model
    AwaitingFulfillment,
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceState {
    fn from(s: &str) -> Self {
        match s {
            "AWAITING_FULFILLMENT" => InstanceState::AwaitingFulfillment,
            "PROVISIONING" => InstanceState::Provisioning,
            "BOOTSTRAPPING" => InstanceState::Bootstrapping,
            "RUNNING" => InstanceState::Running,
            "TERMINATED" => InstanceState::Terminated,
            other => InstanceState::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for InstanceState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceState::from(s))
    }
}
impl InstanceState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceState::AwaitingFulfillment => "AWAITING_FULFILLMENT",
            InstanceState::Provisioning => "PROVISIONING",
            InstanceState::Bootstrapping => "BOOTSTRAPPING",
            InstanceState::Running => "RUNNING",
            InstanceState::Terminated => "TERMINATED",
            InstanceState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["AWAITING_FULFILLMENT", "PROVISIONING", "BOOTSTRAPPING", "RUNNING", "TERMINATED"]
    }
}
impl AsRef<str> for InstanceState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The details of the status change reason for the instance.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::InstanceStateChangeReasonCode>,
    /// <p>The status change reason description.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl InstanceStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    pub fn code(&self) -> std::option::Option<&crate::model::InstanceStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The status change reason description.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for InstanceStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`InstanceStateChangeReason`](crate::model::InstanceStateChangeReason)
pub mod instance_state_change_reason {
    /// A builder for [`InstanceStateChangeReason`](crate::model::InstanceStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::InstanceStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The programmable code for the state change reason.</p>
        pub fn code(
            mut self,
            input: impl Into<crate::model::InstanceStateChangeReasonCode>,
        ) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::InstanceStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(
            &self,
        ) -> &std::option::Option<crate::model::InstanceStateChangeReasonCode> {
            &self.code
        }
        /// <p>The status change reason description.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`InstanceStateChangeReason`](crate::model::InstanceStateChangeReason)
        pub fn build(self) -> crate::model::InstanceStateChangeReason {
            crate::model::InstanceStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl InstanceStateChangeReason {
    /// Creates a new builder-style object to manufacture [`InstanceStateChangeReason`](crate::model::InstanceStateChangeReason)
    pub fn builder() -> crate::model::instance_state_change_reason::Builder {
        crate::model::instance_state_change_reason::Builder::default()
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
pub enum InstanceStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    BootstrapFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for InstanceStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "INTERNAL_ERROR" => InstanceStateChangeReasonCode::InternalError,
            "VALIDATION_ERROR" => InstanceStateChangeReasonCode::ValidationError,
            "INSTANCE_FAILURE" => InstanceStateChangeReasonCode::InstanceFailure,
            "BOOTSTRAP_FAILURE" => InstanceStateChangeReasonCode::BootstrapFailure,
            "CLUSTER_TERMINATED" => InstanceStateChangeReasonCode::ClusterTerminated,
            other => InstanceStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for InstanceStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceStateChangeReasonCode::from(s))
    }
}
impl InstanceStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            InstanceStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceStateChangeReasonCode::BootstrapFailure => "BOOTSTRAP_FAILURE",
            InstanceStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
            InstanceStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "INTERNAL_ERROR",
            "VALIDATION_ERROR",
            "INSTANCE_FAILURE",
            "BOOTSTRAP_FAILURE",
            "CLUSTER_TERMINATED",
        ]
    }
}
impl AsRef<str> for InstanceStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for InstanceStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for InstanceStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for InstanceStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The instance status details.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceStatus {
    /// <p>The current state of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::InstanceState>,
    /// <p>The details of the status change reason for the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::InstanceStateChangeReason>,
    /// <p>The timeline of the instance status over time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeline: std::option::Option<crate::model::InstanceTimeline>,
}
impl InstanceStatus {
    /// <p>The current state of the instance.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::InstanceState> {
        self.state.as_ref()
    }
    /// <p>The details of the status change reason for the instance.</p>
    pub fn state_change_reason(
        &self,
    ) -> std::option::Option<&crate::model::InstanceStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>The timeline of the instance status over time.</p>
    pub fn timeline(&self) -> std::option::Option<&crate::model::InstanceTimeline> {
        self.timeline.as_ref()
    }
}
impl std::fmt::Debug for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.field("timeline", &self.timeline);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.field("Timeline", &self.timeline);
        shape.finish()
    }
}
/// See [`InstanceStatus`](crate::model::InstanceStatus)
pub mod instance_status {
    /// A builder for [`InstanceStatus`](crate::model::InstanceStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::InstanceState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::InstanceStateChangeReason>,
        pub(crate) timeline: std::option::Option<crate::model::InstanceTimeline>,
    }
    impl Builder {
        /// <p>The current state of the instance.</p>
        pub fn state(mut self, input: impl Into<crate::model::InstanceState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::InstanceState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::InstanceState> {
            &self.state
        }
        /// <p>The details of the status change reason for the instance.</p>
        pub fn state_change_reason(
            mut self,
            input: crate::model::InstanceStateChangeReason,
        ) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::InstanceStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::InstanceStateChangeReason> {
            &self.state_change_reason
        }
        /// <p>The timeline of the instance status over time.</p>
        pub fn timeline(mut self, input: crate::model::InstanceTimeline) -> Self {
            self.timeline = Some(input);
            self
        }
        pub fn set_timeline(
            mut self,
            input: std::option::Option<crate::model::InstanceTimeline>,
        ) -> Self {
            self.timeline = input;
            self
        }
        pub fn get_timeline(&self) -> &std::option::Option<crate::model::InstanceTimeline> {
            &self.timeline
        }
        /// Consumes the builder and constructs a [`InstanceStatus`](crate::model::InstanceStatus)
        pub fn build(self) -> crate::model::InstanceStatus {
            crate::model::InstanceStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
                timeline: self.timeline,
            }
        }
    }
}
impl InstanceStatus {
    /// Creates a new builder-style object to manufacture [`InstanceStatus`](crate::model::InstanceStatus)
    pub fn builder() -> crate::model::instance_status::Builder {
        crate::model::instance_status::Builder::default()
    }
}

/// <p>The timeline of the instance lifecycle.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceTimeline {
    /// <p>The creation date and time of the instance.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the instance was ready to perform tasks.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the instance was terminated.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl InstanceTimeline {
    /// <p>The creation date and time of the instance.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The date and time when the instance was ready to perform tasks.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The date and time when the instance was terminated.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for InstanceTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceTimeline");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`InstanceTimeline`](crate::model::InstanceTimeline)
pub mod instance_timeline {
    /// A builder for [`InstanceTimeline`](crate::model::InstanceTimeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The creation date and time of the instance.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The date and time when the instance was ready to perform tasks.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The date and time when the instance was terminated.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`InstanceTimeline`](crate::model::InstanceTimeline)
        pub fn build(self) -> crate::model::InstanceTimeline {
            crate::model::InstanceTimeline {
                creation_date_time: self.creation_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl InstanceTimeline {
    /// Creates a new builder-style object to manufacture [`InstanceTimeline`](crate::model::InstanceTimeline)
    pub fn builder() -> crate::model::instance_timeline::Builder {
        crate::model::instance_timeline::Builder::default()
    }
}

/// <p>An instance type configuration for each instance type in an instance fleet, which determines the EC2 instances Amazon EMR attempts to provision to fulfill On-Demand and Spot target capacities. There can be a maximum of five instance type configurations in a fleet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceTypeConfig {
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub weighted_capacity: std::option::Option<i32>,
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price: std::option::Option<std::string::String>,
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%). If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price_as_percentage_of_on_demand_price: std::option::Option<f64>,
    /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_configuration: std::option::Option<crate::model::EbsConfiguration>,
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
}
impl InstanceTypeConfig {
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub fn weighted_capacity(&self) -> std::option::Option<i32> {
        self.weighted_capacity
    }
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    pub fn bid_price(&self) -> std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%). If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
    pub fn bid_price_as_percentage_of_on_demand_price(&self) -> std::option::Option<f64> {
        self.bid_price_as_percentage_of_on_demand_price
    }
    /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
    pub fn ebs_configuration(&self) -> std::option::Option<&crate::model::EbsConfiguration> {
        self.ebs_configuration.as_ref()
    }
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
}
impl std::fmt::Debug for InstanceTypeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceTypeConfig");
        formatter.field("instance_type", &self.instance_type);
        formatter.field("weighted_capacity", &self.weighted_capacity);
        formatter.field("bid_price", &self.bid_price);
        formatter.field("bid_price_as_percentage_of_on_demand_price", &self.bid_price_as_percentage_of_on_demand_price);
        formatter.field("ebs_configuration", &self.ebs_configuration);
        formatter.field("configurations", &self.configurations);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceTypeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("InstanceType", &self.instance_type);
        shape.field("WeightedCapacity", &self.weighted_capacity);
        shape.field("BidPrice", &self.bid_price);
        shape.field("BidPriceAsPercentageOfOnDemandPrice", &self.bid_price_as_percentage_of_on_demand_price);
        shape.field("EbsConfiguration", &self.ebs_configuration);
        shape.list("Configurations", &self.configurations);
        shape.finish()
    }
}
impl std::hash::Hash for InstanceTypeConfig {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.weighted_capacity, state);
        std::hash::Hash::hash(&self.bid_price, state);
        smithy_types::hash::hash_f64(&self.bid_price_as_percentage_of_on_demand_price, state);
        std::hash::Hash::hash(&self.ebs_configuration, state);
        std::hash::Hash::hash(&self.configurations, state);
    }
}
/// See [`InstanceTypeConfig`](crate::model::InstanceTypeConfig)
pub mod instance_type_config {
    /// A builder for [`InstanceTypeConfig`](crate::model::InstanceTypeConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) weighted_capacity: std::option::Option<i32>,
        pub(crate) bid_price: std::option::Option<std::string::String>,
        pub(crate) bid_price_as_percentage_of_on_demand_price: std::option::Option<f64>,
        pub(crate) ebs_configuration: std::option::Option<crate::model::EbsConfiguration>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    }
    impl Builder {
        /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
        pub fn weighted_capacity(mut self, input: i32) -> Self {
            self.weighted_capacity = Some(input);
            self
        }
        pub fn set_weighted_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.weighted_capacity = input;
            self
        }
        pub fn get_weighted_capacity(&self) -> &std::option::Option<i32> {
            &self.weighted_capacity
        }
        /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD. If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
        pub fn bid_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.bid_price = Some(input.into());
            self
        }
        pub fn set_bid_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bid_price = input;
            self
        }
        pub fn get_bid_price(&self) -> &std::option::Option<std::string::String> {
            &self.bid_price
        }
        /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%). If neither <code>BidPrice</code> nor <code>BidPriceAsPercentageOfOnDemandPrice</code> is provided, <code>BidPriceAsPercentageOfOnDemandPrice</code> defaults to 100%.</p>
        pub fn bid_price_as_percentage_of_on_demand_price(mut self, input: f64) -> Self {
            self.bid_price_as_percentage_of_on_demand_price = Some(input);
            self
        }
        pub fn set_bid_price_as_percentage_of_on_demand_price(
            mut self,
            input: std::option::Option<f64>,
        ) -> Self {
            self.bid_price_as_percentage_of_on_demand_price = input;
            self
        }
        pub fn get_bid_price_as_percentage_of_on_demand_price(&self) -> &std::option::Option<f64> {
            &self.bid_price_as_percentage_of_on_demand_price
        }
        /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
        pub fn ebs_configuration(mut self, input: crate::model::EbsConfiguration) -> Self {
            self.ebs_configuration = Some(input);
            self
        }
        pub fn set_ebs_configuration(
            mut self,
            input: std::option::Option<crate::model::EbsConfiguration>,
        ) -> Self {
            self.ebs_configuration = input;
            self
        }
        pub fn get_ebs_configuration(
            &self,
        ) -> &std::option::Option<crate::model::EbsConfiguration> {
            &self.ebs_configuration
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// Consumes the builder and constructs a [`InstanceTypeConfig`](crate::model::InstanceTypeConfig)
        pub fn build(self) -> crate::model::InstanceTypeConfig {
            crate::model::InstanceTypeConfig {
                instance_type: self.instance_type,
                weighted_capacity: self.weighted_capacity,
                bid_price: self.bid_price,
                bid_price_as_percentage_of_on_demand_price: self.bid_price_as_percentage_of_on_demand_price,
                ebs_configuration: self.ebs_configuration,
                configurations: self.configurations,
            }
        }
    }
}
impl InstanceTypeConfig {
    /// Creates a new builder-style object to manufacture [`InstanceTypeConfig`](crate::model::InstanceTypeConfig)
    pub fn builder() -> crate::model::instance_type_config::Builder {
        crate::model::instance_type_config::Builder::default()
    }
}

/// <p>The configuration specification for each instance type in an instance fleet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct InstanceTypeSpecification {
    /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_type: std::option::Option<std::string::String>,
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. Capacity values represent performance characteristics such as vCPUs, memory, or I/O. If not specified, the default value is 1.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub weighted_capacity: std::option::Option<i32>,
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price: std::option::Option<std::string::String>,
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bid_price_as_percentage_of_on_demand_price: std::option::Option<f64>,
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software bundled with Amazon EMR.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_block_devices: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
    /// <p>Evaluates to <code>TRUE</code> when the specified <code>InstanceType</code> is EBS-optimized.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ebs_optimized: std::option::Option<bool>,
}
impl InstanceTypeSpecification {
    /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
    pub fn instance_type(&self) -> std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. Capacity values represent performance characteristics such as vCPUs, memory, or I/O. If not specified, the default value is 1.</p>
    pub fn weighted_capacity(&self) -> std::option::Option<i32> {
        self.weighted_capacity
    }
    /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD.</p>
    pub fn bid_price(&self) -> std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub fn bid_price_as_percentage_of_on_demand_price(&self) -> std::option::Option<f64> {
        self.bid_price_as_percentage_of_on_demand_price
    }
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software bundled with Amazon EMR.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
    pub fn ebs_block_devices(&self) -> std::option::Option<&[crate::model::EbsBlockDevice]> {
        self.ebs_block_devices.as_deref()
    }
    /// <p>Evaluates to <code>TRUE</code> when the specified <code>InstanceType</code> is EBS-optimized.</p>
    pub fn ebs_optimized(&self) -> std::option::Option<bool> {
        self.ebs_optimized
    }
}
impl std::fmt::Debug for InstanceTypeSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InstanceTypeSpecification");
        formatter.field("instance_type", &self.instance_type);
        formatter.field("weighted_capacity", &self.weighted_capacity);
        formatter.field("bid_price", &self.bid_price);
        formatter.field("bid_price_as_percentage_of_on_demand_price", &self.bid_price_as_percentage_of_on_demand_price);
        formatter.field("configurations", &self.configurations);
        formatter.field("ebs_block_devices", &self.ebs_block_devices);
        formatter.field("ebs_optimized", &self.ebs_optimized);
        formatter.finish()
    }
}
impl std::fmt::Display for InstanceTypeSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("InstanceType", &self.instance_type);
        shape.field("WeightedCapacity", &self.weighted_capacity);
        shape.field("BidPrice", &self.bid_price);
        shape.field("BidPriceAsPercentageOfOnDemandPrice", &self.bid_price_as_percentage_of_on_demand_price);
        shape.list("Configurations", &self.configurations);
        shape.list("EbsBlockDevices", &self.ebs_block_devices);
        shape.field("EbsOptimized", &self.ebs_optimized);
        shape.finish()
    }
}
impl std::hash::Hash for InstanceTypeSpecification {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.weighted_capacity, state);
        std::hash::Hash::hash(&self.bid_price, state);
        smithy_types::hash::hash_f64(&self.bid_price_as_percentage_of_on_demand_price, state);
        std::hash::Hash::hash(&self.configurations, state);
        std::hash::Hash::hash(&self.ebs_block_devices, state);
        std::hash::Hash::hash(&self.ebs_optimized, state);
    }
}
/// See [`InstanceTypeSpecification`](crate::model::InstanceTypeSpecification)
pub mod instance_type_specification {
    /// A builder for [`InstanceTypeSpecification`](crate::model::InstanceTypeSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_type: std::option::Option<std::string::String>,
        pub(crate) weighted_capacity: std::option::Option<i32>,
        pub(crate) bid_price: std::option::Option<std::string::String>,
        pub(crate) bid_price_as_percentage_of_on_demand_price: std::option::Option<f64>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) ebs_block_devices: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
        pub(crate) ebs_optimized: std::option::Option<bool>,
    }
    impl Builder {
        /// <p>The EC2 instance type, for example <code>m3.xlarge</code>.</p>
        pub fn instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_type = Some(input.into());
            self
        }
        pub fn set_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.instance_type = input;
            self
        }
        pub fn get_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.instance_type
        }
        /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <a>InstanceFleetConfig</a>. Capacity values represent performance characteristics such as vCPUs, memory, or I/O. If not specified, the default value is 1.</p>
        pub fn weighted_capacity(mut self, input: i32) -> Self {
            self.weighted_capacity = Some(input);
            self
        }
        pub fn set_weighted_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.weighted_capacity = input;
            self
        }
        pub fn get_weighted_capacity(&self) -> &std::option::Option<i32> {
            &self.weighted_capacity
        }
        /// <p>The bid price for each EC2 Spot instance type as defined by <code>InstanceType</code>. Expressed in USD.</p>
        pub fn bid_price(mut self, input: impl Into<std::string::String>) -> Self {
            self.bid_price = Some(input.into());
            self
        }
        pub fn set_bid_price(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bid_price = input;
            self
        }
        pub fn get_bid_price(&self) -> &std::option::Option<std::string::String> {
            &self.bid_price
        }
        /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot instance as defined by <code>InstanceType</code>. Expressed as a number (for example, 20 specifies 20%).</p>
        pub fn bid_price_as_percentage_of_on_demand_price(mut self, input: f64) -> Self {
            self.bid_price_as_percentage_of_on_demand_price = Some(input);
            self
        }
        pub fn set_bid_price_as_percentage_of_on_demand_price(
            mut self,
            input: std::option::Option<f64>,
        ) -> Self {
            self.bid_price_as_percentage_of_on_demand_price = input;
            self
        }
        pub fn get_bid_price_as_percentage_of_on_demand_price(&self) -> &std::option::Option<f64> {
            &self.bid_price_as_percentage_of_on_demand_price
        }
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software bundled with Amazon EMR.</p>
        pub fn configurations(mut self, input: impl Into<crate::model::Configuration>) -> Self {
            let mut v = self.configurations.unwrap_or_default();
            v.push(input.into());
            self.configurations = Some(v);
            self
        }
        pub fn set_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        ) -> Self {
            self.configurations = input;
            self
        }
        pub fn get_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Configuration>> {
            &self.configurations
        }
        /// Appends an item to `ebs_block_devices`.
        ///
        /// To override the contents of this collection use [`set_ebs_block_devices`](Self::set_ebs_block_devices).
        ///
        /// <p>The configuration of Amazon Elastic Block Storage (EBS) attached to each instance as defined by <code>InstanceType</code>.</p>
        pub fn ebs_block_devices(mut self, input: impl Into<crate::model::EbsBlockDevice>) -> Self {
            let mut v = self.ebs_block_devices.unwrap_or_default();
            v.push(input.into());
            self.ebs_block_devices = Some(v);
            self
        }
        pub fn set_ebs_block_devices(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>>,
        ) -> Self {
            self.ebs_block_devices = input;
            self
        }
        pub fn get_ebs_block_devices(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::EbsBlockDevice>> {
            &self.ebs_block_devices
        }
        /// <p>Evaluates to <code>TRUE</code> when the specified <code>InstanceType</code> is EBS-optimized.</p>
        pub fn ebs_optimized(mut self, input: bool) -> Self {
            self.ebs_optimized = Some(input);
            self
        }
        pub fn set_ebs_optimized(mut self, input: std::option::Option<bool>) -> Self {
            self.ebs_optimized = input;
            self
        }
        pub fn get_ebs_optimized(&self) -> &std::option::Option<bool> {
            &self.ebs_optimized
        }
        /// Consumes the builder and constructs a [`InstanceTypeSpecification`](crate::model::InstanceTypeSpecification)
        pub fn build(self) -> crate::model::InstanceTypeSpecification {
            crate::model::InstanceTypeSpecification {
                instance_type: self.instance_type,
                weighted_capacity: self.weighted_capacity,
                bid_price: self.bid_price,
                bid_price_as_percentage_of_on_demand_price: self.bid_price_as_percentage_of_on_demand_price,
                configurations: self.configurations,
                ebs_block_devices: self.ebs_block_devices,
                ebs_optimized: self.ebs_optimized,
            }
        }
    }
}
impl InstanceTypeSpecification {
    /// Creates a new builder-style object to manufacture [`InstanceTypeSpecification`](crate::model::InstanceTypeSpecification)
    pub fn builder() -> crate::model::instance_type_specification::Builder {
        crate::model::instance_type_specification::Builder::default()
    }
}

/// <p>A description of a cluster (job flow).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct JobFlowDetail {
    /// <p>The job flow identifier.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_id: std::option::Option<std::string::String>,
    /// <p>The name of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub log_uri: std::option::Option<std::string::String>,
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>ReleaseLabel</code> is used. To specify a custom AMI, use <code>CustomAmiID</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ami_version: std::option::Option<std::string::String>,
    /// <p>Describes the execution status of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub execution_status_detail: std::option::Option<crate::model::JobFlowExecutionStatusDetail>,
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instances: std::option::Option<crate::model::JobFlowInstancesDetail>,
    /// <p>A list of steps run by the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub steps: std::option::Option<std::vec::Vec<crate::model::StepDetail>>,
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::BootstrapActionDetail>>,
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub supported_products: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub visible_to_all_users: std::option::Option<bool>,
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_role: std::option::Option<std::string::String>,
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub service_role: std::option::Option<std::string::String>,
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_role: std::option::Option<std::string::String>,
    /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
}
impl JobFlowDetail {
    /// <p>The job flow identifier.</p>
    pub fn job_flow_id(&self) -> std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>The name of the job flow.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub fn log_uri(&self) -> std::option::Option<&str> {
        self.log_uri.as_deref()
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>ReleaseLabel</code> is used. To specify a custom AMI, use <code>CustomAmiID</code>.</p>
    pub fn ami_version(&self) -> std::option::Option<&str> {
        self.ami_version.as_deref()
    }
    /// <p>Describes the execution status of the job flow.</p>
    pub fn execution_status_detail(
        &self,
    ) -> std::option::Option<&crate::model::JobFlowExecutionStatusDetail> {
        self.execution_status_detail.as_ref()
    }
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub fn instances(&self) -> std::option::Option<&crate::model::JobFlowInstancesDetail> {
        self.instances.as_ref()
    }
    /// <p>A list of steps run by the job flow.</p>
    pub fn steps(&self) -> std::option::Option<&[crate::model::StepDetail]> {
        self.steps.as_deref()
    }
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    pub fn bootstrap_actions(&self) -> std::option::Option<&[crate::model::BootstrapActionDetail]> {
        self.bootstrap_actions.as_deref()
    }
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    pub fn supported_products(&self) -> std::option::Option<&[std::string::String]> {
        self.supported_products.as_deref()
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
    pub fn visible_to_all_users(&self) -> std::option::Option<bool> {
        self.visible_to_all_users
    }
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub fn job_flow_role(&self) -> std::option::Option<&str> {
        self.job_flow_role.as_deref()
    }
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(&self) -> std::option::Option<&str> {
        self.service_role.as_deref()
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
    pub fn auto_scaling_role(&self) -> std::option::Option<&str> {
        self.auto_scaling_role.as_deref()
    }
    /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    pub fn scale_down_behavior(&self) -> std::option::Option<&crate::model::ScaleDownBehavior> {
        self.scale_down_behavior.as_ref()
    }
}
impl std::fmt::Debug for JobFlowDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobFlowDetail");
        formatter.field("job_flow_id", &self.job_flow_id);
        formatter.field("name", &self.name);
        formatter.field("log_uri", &self.log_uri);
        formatter.field("ami_version", &self.ami_version);
        formatter.field("execution_status_detail", &self.execution_status_detail);
        formatter.field("instances", &self.instances);
        formatter.field("steps", &self.steps);
        formatter.field("bootstrap_actions", &self.bootstrap_actions);
        formatter.field("supported_products", &self.supported_products);
        formatter.field("visible_to_all_users", &self.visible_to_all_users);
        formatter.field("job_flow_role", &self.job_flow_role);
        formatter.field("service_role", &self.service_role);
        formatter.field("auto_scaling_role", &self.auto_scaling_role);
        formatter.field("scale_down_behavior", &self.scale_down_behavior);
        formatter.finish()
    }
}
impl std::fmt::Display for JobFlowDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("JobFlowId", &self.job_flow_id);
        shape.field("Name", &self.name);
        shape.field("LogUri", &self.log_uri);
        shape.field("AmiVersion", &self.ami_version);
        shape.field("ExecutionStatusDetail", &self.execution_status_detail);
        shape.field("Instances", &self.instances);
        shape.list("Steps", &self.steps);
        shape.list("BootstrapActions", &self.bootstrap_actions);
        shape.list("SupportedProducts", &self.supported_products);
        shape.field("VisibleToAllUsers", &self.visible_to_all_users);
        shape.field("JobFlowRole", &self.job_flow_role);
        shape.field("ServiceRole", &self.service_role);
        shape.field("AutoScalingRole", &self.auto_scaling_role);
        shape.field("ScaleDownBehavior", &self.scale_down_behavior);
        shape.finish()
    }
}
/// See [`JobFlowDetail`](crate::model::JobFlowDetail)
pub mod job_flow_detail {
    /// A builder for [`JobFlowDetail`](crate::model::JobFlowDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) log_uri: std::option::Option<std::string::String>,
        pub(crate) ami_version: std::option::Option<std::string::String>,
        pub(crate) execution_status_detail: std::option::Option<crate::model::JobFlowExecutionStatusDetail>,
        pub(crate) instances: std::option::Option<crate::model::JobFlowInstancesDetail>,
        pub(crate) steps: std::option::Option<std::vec::Vec<crate::model::StepDetail>>,
        pub(crate) bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::BootstrapActionDetail>>,
        pub(crate) supported_products: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) visible_to_all_users: std::option::Option<bool>,
        pub(crate) job_flow_role: std::option::Option<std::string::String>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) auto_scaling_role: std::option::Option<std::string::String>,
        pub(crate) scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
    }
    impl Builder {
        /// <p>The job flow identifier.</p>
        pub fn job_flow_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_flow_id = Some(input.into());
            self
        }
        pub fn set_job_flow_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_flow_id = input;
            self
        }
        pub fn get_job_flow_id(&self) -> &std::option::Option<std::string::String> {
            &self.job_flow_id
        }
        /// <p>The name of the job flow.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The location in Amazon S3 where log files for the job are stored.</p>
        pub fn log_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.log_uri = Some(input.into());
            self
        }
        pub fn set_log_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.log_uri = input;
            self
        }
        pub fn get_log_uri(&self) -> &std::option::Option<std::string::String> {
            &self.log_uri
        }
        /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>ReleaseLabel</code> is used. To specify a custom AMI, use <code>CustomAmiID</code>.</p>
        pub fn ami_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.ami_version = Some(input.into());
            self
        }
        pub fn set_ami_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ami_version = input;
            self
        }
        pub fn get_ami_version(&self) -> &std::option::Option<std::string::String> {
            &self.ami_version
        }
        /// <p>Describes the execution status of the job flow.</p>
        pub fn execution_status_detail(
            mut self,
            input: crate::model::JobFlowExecutionStatusDetail,
        ) -> Self {
            self.execution_status_detail = Some(input);
            self
        }
        pub fn set_execution_status_detail(
            mut self,
            input: std::option::Option<crate::model::JobFlowExecutionStatusDetail>,
        ) -> Self {
            self.execution_status_detail = input;
            self
        }
        pub fn get_execution_status_detail(
            &self,
        ) -> &std::option::Option<crate::model::JobFlowExecutionStatusDetail> {
            &self.execution_status_detail
        }
        /// <p>Describes the Amazon EC2 instances of the job flow.</p>
        pub fn instances(mut self, input: crate::model::JobFlowInstancesDetail) -> Self {
            self.instances = Some(input);
            self
        }
        pub fn set_instances(
            mut self,
            input: std::option::Option<crate::model::JobFlowInstancesDetail>,
        ) -> Self {
            self.instances = input;
            self
        }
        pub fn get_instances(&self) -> &std::option::Option<crate::model::JobFlowInstancesDetail> {
            &self.instances
        }
        /// Appends an item to `steps`.
        ///
        /// To override the contents of this collection use [`set_steps`](Self::set_steps).
        ///
        /// <p>A list of steps run by the job flow.</p>
        pub fn steps(mut self, input: impl Into<crate::model::StepDetail>) -> Self {
            let mut v = self.steps.unwrap_or_default();
            v.push(input.into());
            self.steps = Some(v);
            self
        }
        pub fn set_steps(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::StepDetail>>,
        ) -> Self {
            self.steps = input;
            self
        }
        pub fn get_steps(&self) -> &std::option::Option<std::vec::Vec<crate::model::StepDetail>> {
            &self.steps
        }
        /// Appends an item to `bootstrap_actions`.
        ///
        /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
        ///
        /// <p>A list of the bootstrap actions run by the job flow.</p>
        pub fn bootstrap_actions(
            mut self,
            input: impl Into<crate::model::BootstrapActionDetail>,
        ) -> Self {
            let mut v = self.bootstrap_actions.unwrap_or_default();
            v.push(input.into());
            self.bootstrap_actions = Some(v);
            self
        }
        pub fn set_bootstrap_actions(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::BootstrapActionDetail>>,
        ) -> Self {
            self.bootstrap_actions = input;
            self
        }
        pub fn get_bootstrap_actions(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::BootstrapActionDetail>> {
            &self.bootstrap_actions
        }
        /// Appends an item to `supported_products`.
        ///
        /// To override the contents of this collection use [`set_supported_products`](Self::set_supported_products).
        ///
        /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
        pub fn supported_products(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.supported_products.unwrap_or_default();
            v.push(input.into());
            self.supported_products = Some(v);
            self
        }
        pub fn set_supported_products(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.supported_products = input;
            self
        }
        pub fn get_supported_products(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.supported_products
        }
        /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster. The default value, <code>true</code>, indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. If this value is <code>false</code>, only the IAM user that created the cluster can perform actions. This value can be changed on a running cluster by using the <a>SetVisibleToAllUsers</a> action. You can override the default value of <code>true</code> when you create a cluster by using the <code>VisibleToAllUsers</code> parameter of the <code>RunJobFlow</code> action.</p>
        pub fn visible_to_all_users(mut self, input: bool) -> Self {
            self.visible_to_all_users = Some(input);
            self
        }
        pub fn set_visible_to_all_users(mut self, input: std::option::Option<bool>) -> Self {
            self.visible_to_all_users = input;
            self
        }
        pub fn get_visible_to_all_users(&self) -> &std::option::Option<bool> {
            &self.visible_to_all_users
        }
        /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
        pub fn job_flow_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_flow_role = Some(input.into());
            self
        }
        pub fn set_job_flow_role(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.job_flow_role = input;
            self
        }
        pub fn get_job_flow_role(&self) -> &std::option::Option<std::string::String> {
            &self.job_flow_role
        }
        /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_role = Some(input.into());
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_role = input;
            self
        }
        pub fn get_service_role(&self) -> &std::option::Option<std::string::String> {
            &self.service_role
        }
        /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
        pub fn auto_scaling_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.auto_scaling_role = Some(input.into());
            self
        }
        pub fn set_auto_scaling_role(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.auto_scaling_role = input;
            self
        }
        pub fn get_auto_scaling_role(&self) -> &std::option::Option<std::string::String> {
            &self.auto_scaling_role
        }
        /// <p>The way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
        pub fn scale_down_behavior(
            mut self,
            input: impl Into<crate::model::ScaleDownBehavior>,
        ) -> Self {
            self.scale_down_behavior = Some(input.into());
            self
        }
        pub fn set_scale_down_behavior(
            mut self,
            input: std::option::Option<crate::model::ScaleDownBehavior>,
        ) -> Self {
            self.scale_down_behavior = input;
            self
        }
        pub fn get_scale_down_behavior(
            &self,
        ) -> &std::option::Option<crate::model::ScaleDownBehavior> {
            &self.scale_down_behavior
        }
        /// Consumes the builder and constructs a [`JobFlowDetail`](crate::model::JobFlowDetail)
        pub fn build(self) -> crate::model::JobFlowDetail {
            crate::model::JobFlowDetail {
                job_flow_id: self.job_flow_id,
                name: self.name,
                log_uri: self.log_uri,
                ami_version: self.ami_version,
                execution_status_detail: self.execution_status_detail,
                instances: self.instances,
                steps: self.steps,
                bootstrap_actions: self.bootstrap_actions,
                supported_products: self.supported_products,
                visible_to_all_users: self.visible_to_all_users,
                job_flow_role: self.job_flow_role,
                service_role: self.service_role,
                auto_scaling_role: self.auto_scaling_role,
                scale_down_behavior: self.scale_down_behavior,
            }
        }
    }
}
impl JobFlowDetail {
    /// Creates a new builder-style object to manufacture [`JobFlowDetail`](crate::model::JobFlowDetail)
    pub fn builder() -> crate::model::job_flow_detail::Builder {
        crate::model::job_flow_detail::Builder::default()
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
pub enum JobFlowExecutionState {
    #[allow(missing_docs)] // documentation missing in model
    Starting,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Waiting,
    #[allow(missing_docs)] // documentation missing in model
    ShuttingDown,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for JobFlowExecutionState {
    fn from(s: &str) -> Self {
        match s {
            "STARTING" => JobFlowExecutionState::Starting,
            "BOOTSTRAPPING" => JobFlowExecutionState::Bootstrapping,
            "RUNNING" => JobFlowExecutionState::Running,
            "WAITING" => JobFlowExecutionState::Waiting,
            "SHUTTING_DOWN" => JobFlowExecutionState::ShuttingDown,
            "TERMINATED" => JobFlowExecutionState::Terminated,
            "COMPLETED" => JobFlowExecutionState::Completed,
            "FAILED" => JobFlowExecutionState::Failed,
            other => JobFlowExecutionState::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for JobFlowExecutionState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JobFlowExecutionState::from(s))
    }
}
impl JobFlowExecutionState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            JobFlowExecutionState::Starting => "STARTING",
            JobFlowExecutionState::Bootstrapping => "BOOTSTRAPPING",
            JobFlowExecutionState::Running => "RUNNING",
            JobFlowExecutionState::Waiting => "WAITING",
            JobFlowExecutionState::ShuttingDown => "SHUTTING_DOWN",
            JobFlowExecutionState::Terminated => "TERMINATED",
            JobFlowExecutionState::Completed => "COMPLETED",
            JobFlowExecutionState::Failed => "FAILED",
            JobFlowExecutionState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "STARTING",
            "BOOTSTRAPPING",
            "RUNNING",
            "WAITING",
            "SHUTTING_DOWN",
            "TERMINATED",
            "COMPLETED",
            "FAILED",
        ]
    }
}
impl AsRef<str> for JobFlowExecutionState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for JobFlowExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for JobFlowExecutionState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for JobFlowExecutionState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>Describes the status of the cluster (job flow).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct JobFlowExecutionStatusDetail {
    /// <p>The state of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::JobFlowExecutionState>,
    /// <p>The creation date and time of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The start date and time of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub start_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ready_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The completion date and time of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>Description of the job flow last changed state.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub last_state_change_reason: std::option::Option<std::string::String>,
}
impl JobFlowExecutionStatusDetail {
    /// <p>The state of the job flow.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::JobFlowExecutionState> {
        self.state.as_ref()
    }
    /// <p>The creation date and time of the job flow.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The start date and time of the job flow.</p>
    pub fn start_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.start_date_time
    }
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub fn ready_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.ready_date_time
    }
    /// <p>The completion date and time of the job flow.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
    /// <p>Description of the job flow last changed state.</p>
    pub fn last_state_change_reason(&self) -> std::option::Option<&str> {
        self.last_state_change_reason.as_deref()
    }
}
impl std::fmt::Debug for JobFlowExecutionStatusDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobFlowExecutionStatusDetail");
        formatter.field("state", &self.state);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("start_date_time", &self.start_date_time);
        formatter.field("ready_date_time", &self.ready_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.field("last_state_change_reason", &self.last_state_change_reason);
        formatter.finish()
    }
}
impl std::fmt::Display for JobFlowExecutionStatusDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("StartDateTime", &self.start_date_time);
        shape.field("ReadyDateTime", &self.ready_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.field("LastStateChangeReason", &self.last_state_change_reason);
        shape.finish()
    }
}
/// See [`JobFlowExecutionStatusDetail`](crate::model::JobFlowExecutionStatusDetail)
pub mod job_flow_execution_status_detail {
    /// A builder for [`JobFlowExecutionStatusDetail`](crate::model::JobFlowExecutionStatusDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::JobFlowExecutionState>,
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) start_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) ready_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) last_state_change_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The state of the job flow.</p>
        pub fn state(mut self, input: impl Into<crate::model::JobFlowExecutionState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::JobFlowExecutionState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::JobFlowExecutionState> {
            &self.state
        }
        /// <p>The creation date and time of the job flow.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The start date and time of the job flow.</p>
        pub fn start_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_date_time = Some(input);
            self
        }
        pub fn set_start_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.start_date_time = input;
            self
        }
        pub fn get_start_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.start_date_time
        }
        /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
        pub fn ready_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.ready_date_time = Some(input);
            self
        }
        pub fn set_ready_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.ready_date_time = input;
            self
        }
        pub fn get_ready_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.ready_date_time
        }
        /// <p>The completion date and time of the job flow.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// <p>Description of the job flow last changed state.</p>
        pub fn last_state_change_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_state_change_reason = Some(input.into());
            self
        }
        pub fn set_last_state_change_reason(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.last_state_change_reason = input;
            self
        }
        pub fn get_last_state_change_reason(&self) -> &std::option::Option<std::string::String> {
            &self.last_state_change_reason
        }
        /// Consumes the builder and constructs a [`JobFlowExecutionStatusDetail`](crate::model::JobFlowExecutionStatusDetail)
        pub fn build(self) -> crate::model::JobFlowExecutionStatusDetail {
            crate::model::JobFlowExecutionStatusDetail {
                state: self.state,
                creation_date_time: self.creation_date_time,
                start_date_time: self.start_date_time,
                ready_date_time: self.ready_date_time,
                end_date_time: self.end_date_time,
                last_state_change_reason: self.last_state_change_reason,
            }
        }
    }
}
impl JobFlowExecutionStatusDetail {
    /// Creates a new builder-style object to manufacture [`JobFlowExecutionStatusDetail`](crate::model::JobFlowExecutionStatusDetail)
    pub fn builder() -> crate::model::job_flow_execution_status_detail::Builder {
        crate::model::job_flow_execution_status_detail::Builder::default()
    }
}

/// <p>A description of the Amazon EC2 instance on which the cluster (job flow) runs. A valid JobFlowInstancesConfig must contain either InstanceGroups or InstanceFleets, which is the recommended configuration. They cannot be used together. You may also have MasterInstanceType, SlaveInstanceType, and InstanceCount (all three must be present), but we don't recommend this configuration.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct JobFlowInstancesConfig {
    /// <p>The EC2 instance type of the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub master_instance_type: std::option::Option<std::string::String>,
    /// <p>The EC2 instance type of the core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub slave_instance_type: std::option::Option<std::string::String>,
    /// <p>The number of EC2 instances in the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_count: std::option::Option<i32>,
    /// <p>Configuration for the instance groups in a cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>>,
    /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleets: std::option::Option<std::vec::Vec<crate::model::InstanceFleetConfig>>,
    /// <p>The name of the EC2 key pair that can be used to ssh to the master node as the user called "hadoop."</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_key_name: std::option::Option<std::string::String>,
    /// <p>The Availability Zone in which the cluster runs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub placement: std::option::Option<crate::model::PlacementType>,
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub keep_job_flow_alive_when_no_steps: std::option::Option<bool>,
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub termination_protected: std::option::Option<bool>,
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (deprecated), "0.20" (deprecated), "0.20.205" (deprecated), "1.0.3", "2.2.0", or "2.4.0". If you do not set this value, the default of 0.18 is used, unless the <code>AmiVersion</code> parameter is set in the RunJobFlow call, in which case the default version of Hadoop for that AMI version is used.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub hadoop_version: std::option::Option<std::string::String>,
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_subnet_id: std::option::Option<std::string::String>,
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_subnet_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub emr_managed_master_security_group: std::option::Option<std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub emr_managed_slave_security_group: std::option::Option<std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub service_access_security_group: std::option::Option<std::string::String>,
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_master_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_slave_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl JobFlowInstancesConfig {
    /// <p>The EC2 instance type of the master node.</p>
    pub fn master_instance_type(&self) -> std::option::Option<&str> {
        self.master_instance_type.as_deref()
    }
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub fn slave_instance_type(&self) -> std::option::Option<&str> {
        self.slave_instance_type.as_deref()
    }
    /// <p>The number of EC2 instances in the cluster.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <p>Configuration for the instance groups in a cluster.</p>
    pub fn instance_groups(&self) -> std::option::Option<&[crate::model::InstanceGroupConfig]> {
        self.instance_groups.as_deref()
    }
    /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    pub fn instance_fleets(&self) -> std::option::Option<&[crate::model::InstanceFleetConfig]> {
        self.instance_fleets.as_deref()
    }
    /// <p>The name of the EC2 key pair that can be used to ssh to the master node as the user called "hadoop."</p>
    pub fn ec2_key_name(&self) -> std::option::Option<&str> {
        self.ec2_key_name.as_deref()
    }
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::PlacementType> {
        self.placement.as_ref()
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn keep_job_flow_alive_when_no_steps(&self) -> std::option::Option<bool> {
        self.keep_job_flow_alive_when_no_steps
    }
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub fn termination_protected(&self) -> std::option::Option<bool> {
        self.termination_protected
    }
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (deprecated), "0.20" (deprecated), "0.20.205" (deprecated), "1.0.3", "2.2.0", or "2.4.0". If you do not set this value, the default of 0.18 is used, unless the <code>AmiVersion</code> parameter is set in the RunJobFlow call, in which case the default version of Hadoop for that AMI version is used.</p>
    pub fn hadoop_version(&self) -> std::option::Option<&str> {
        self.hadoop_version.as_deref()
    }
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
    pub fn ec2_subnet_id(&self) -> std::option::Option<&str> {
        self.ec2_subnet_id.as_deref()
    }
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
    pub fn ec2_subnet_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.ec2_subnet_ids.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn emr_managed_master_security_group(&self) -> std::option::Option<&str> {
        self.emr_managed_master_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn emr_managed_slave_security_group(&self) -> std::option::Option<&str> {
        self.emr_managed_slave_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn service_access_security_group(&self) -> std::option::Option<&str> {
        self.service_access_security_group.as_deref()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub fn additional_master_security_groups(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_master_security_groups.as_deref()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
    pub fn additional_slave_security_groups(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_slave_security_groups.as_deref()
    }
}
impl std::fmt::Debug for JobFlowInstancesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobFlowInstancesConfig");
        formatter.field("master_instance_type", &self.master_instance_type);
        formatter.field("slave_instance_type", &self.slave_instance_type);
        formatter.field("instance_count", &self.instance_count);
        formatter.field("instance_groups", &self.instance_groups);
        formatter.field("instance_fleets", &self.instance_fleets);
        formatter.field("ec2_key_name", &self.ec2_key_name);
        formatter.field("placement", &self.placement);
        formatter.field("keep_job_flow_alive_when_no_steps", &self.keep_job_flow_alive_when_no_steps);
        formatter.field("termination_protected", &self.termination_protected);
        formatter.field("hadoop_version", &self.hadoop_version);
        formatter.field("ec2_subnet_id", &self.ec2_subnet_id);
        formatter.field("ec2_subnet_ids", &self.ec2_subnet_ids);
        formatter.field("emr_managed_master_security_group", &self.emr_managed_master_security_group);
        formatter.field("emr_managed_slave_security_group", &self.emr_managed_slave_security_group);
        formatter.field("service_access_security_group", &self.service_access_security_group);
        formatter.field("additional_master_security_groups", &self.additional_master_security_groups);
        formatter.field("additional_slave_security_groups", &self.additional_slave_security_groups);
        formatter.finish()
    }
}
impl std::fmt::Display for JobFlowInstancesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("MasterInstanceType", &self.master_instance_type);
        shape.field("SlaveInstanceType", &self.slave_instance_type);
        shape.field("InstanceCount", &self.instance_count);
        shape.list("InstanceGroups", &self.instance_groups);
        shape.list("InstanceFleets", &self.instance_fleets);
        shape.field("Ec2KeyName", &self.ec2_key_name);
        shape.field("Placement", &self.placement);
        shape.field("KeepJobFlowAliveWhenNoSteps", &self.keep_job_flow_alive_when_no_steps);
        shape.field("TerminationProtected", &self.termination_protected);
        shape.field("HadoopVersion", &self.hadoop_version);
        shape.field("Ec2SubnetId", &self.ec2_subnet_id);
        shape.list("Ec2SubnetIds", &self.ec2_subnet_ids);
        shape.field("EmrManagedMasterSecurityGroup", &self.emr_managed_master_security_group);
        shape.field("EmrManagedSlaveSecurityGroup", &self.emr_managed_slave_security_group);
        shape.field("ServiceAccessSecurityGroup", &self.service_access_security_group);
        shape.list("AdditionalMasterSecurityGroups", &self.additional_master_security_groups);
        shape.list("AdditionalSlaveSecurityGroups", &self.additional_slave_security_groups);
        shape.finish()
    }
}
/// See [`JobFlowInstancesConfig`](crate::model::JobFlowInstancesConfig)
pub mod job_flow_instances_config {
    /// A builder for [`JobFlowInstancesConfig`](crate::model::JobFlowInstancesConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) master_instance_type: std::option::Option<std::string::String>,
        pub(crate) slave_instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>>,
        pub(crate) instance_fleets: std::option::Option<std::vec::Vec<crate::model::InstanceFleetConfig>>,
        pub(crate) ec2_key_name: std::option::Option<std::string::String>,
        pub(crate) placement: std::option::Option<crate::model::PlacementType>,
        pub(crate) keep_job_flow_alive_when_no_steps: std::option::Option<bool>,
        pub(crate) termination_protected: std::option::Option<bool>,
        pub(crate) hadoop_version: std::option::Option<std::string::String>,
        pub(crate) ec2_subnet_id: std::option::Option<std::string::String>,
        pub(crate) ec2_subnet_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) emr_managed_master_security_group: std::option::Option<std::string::String>,
        pub(crate) emr_managed_slave_security_group: std::option::Option<std::string::String>,
        pub(crate) service_access_security_group: std::option::Option<std::string::String>,
        pub(crate) additional_master_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) additional_slave_security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The EC2 instance type of the master node.</p>
        pub fn master_instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.master_instance_type = Some(input.into());
            self
        }
        pub fn set_master_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.master_instance_type = input;
            self
        }
        pub fn get_master_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.master_instance_type
        }
        /// <p>The EC2 instance type of the core and task nodes.</p>
        pub fn slave_instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.slave_instance_type = Some(input.into());
            self
        }
        pub fn set_slave_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.slave_instance_type = input;
            self
        }
        pub fn get_slave_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.slave_instance_type
        }
        /// <p>The number of EC2 instances in the cluster.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
        }
        /// Appends an item to `instance_groups`.
        ///
        /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
        ///
        /// <p>Configuration for the instance groups in a cluster.</p>
        pub fn instance_groups(
            mut self,
            input: impl Into<crate::model::InstanceGroupConfig>,
        ) -> Self {
            let mut v = self.instance_groups.unwrap_or_default();
            v.push(input.into());
            self.instance_groups = Some(v);
            self
        }
        pub fn set_instance_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>>,
        ) -> Self {
            self.instance_groups = input;
            self
        }
        pub fn get_instance_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>> {
            &self.instance_groups
        }
        /// Appends an item to `instance_fleets`.
        ///
        /// To override the contents of this collection use [`set_instance_fleets`](Self::set_instance_fleets).
        ///
        /// <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note> <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
        pub fn instance_fleets(
            mut self,
            input: impl Into<crate::model::InstanceFleetConfig>,
        ) -> Self {
            let mut v = self.instance_fleets.unwrap_or_default();
            v.push(input.into());
            self.instance_fleets = Some(v);
            self
        }
        pub fn set_instance_fleets(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceFleetConfig>>,
        ) -> Self {
            self.instance_fleets = input;
            self
        }
        pub fn get_instance_fleets(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceFleetConfig>> {
            &self.instance_fleets
        }
        /// <p>The name of the EC2 key pair that can be used to ssh to the master node as the user called "hadoop."</p>
        pub fn ec2_key_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_key_name = Some(input.into());
            self
        }
        pub fn set_ec2_key_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ec2_key_name = input;
            self
        }
        pub fn get_ec2_key_name(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_key_name
        }
        /// <p>The Availability Zone in which the cluster runs.</p>
        pub fn placement(mut self, input: crate::model::PlacementType) -> Self {
            self.placement = Some(input);
            self
        }
        pub fn set_placement(
            mut self,
            input: std::option::Option<crate::model::PlacementType>,
        ) -> Self {
            self.placement = input;
            self
        }
        pub fn get_placement(&self) -> &std::option::Option<crate::model::PlacementType> {
            &self.placement
        }
        /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
        pub fn keep_job_flow_alive_when_no_steps(mut self, input: bool) -> Self {
            self.keep_job_flow_alive_when_no_steps = Some(input);
            self
        }
        pub fn set_keep_job_flow_alive_when_no_steps(
            mut self,
            input: std::option::Option<bool>,
        ) -> Self {
            self.keep_job_flow_alive_when_no_steps = input;
            self
        }
        pub fn get_keep_job_flow_alive_when_no_steps(&self) -> &std::option::Option<bool> {
            &self.keep_job_flow_alive_when_no_steps
        }
        /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
        pub fn termination_protected(mut self, input: bool) -> Self {
            self.termination_protected = Some(input);
            self
        }
        pub fn set_termination_protected(mut self, input: std::option::Option<bool>) -> Self {
            self.termination_protected = input;
            self
        }
        pub fn get_termination_protected(&self) -> &std::option::Option<bool> {
            &self.termination_protected
        }
        /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (deprecated), "0.20" (deprecated), "0.20.205" (deprecated), "1.0.3", "2.2.0", or "2.4.0". If you do not set this value, the default of 0.18 is used, unless the <code>AmiVersion</code> parameter is set in the RunJobFlow call, in which case the default version of Hadoop for that AMI version is used.</p>
        pub fn hadoop_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.hadoop_version = Some(input.into());
            self
        }
        pub fn set_hadoop_version(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.hadoop_version = input;
            self
        }
        pub fn get_hadoop_version(&self) -> &std::option::Option<std::string::String> {
            &self.hadoop_version
        }
        /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch. If you do not specify this value and your account supports EC2-Classic, the cluster launches in EC2-Classic.</p>
        pub fn ec2_subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_subnet_id = Some(input.into());
            self
        }
        pub fn set_ec2_subnet_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ec2_subnet_id = input;
            self
        }
        pub fn get_ec2_subnet_id(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_subnet_id
        }
        /// Appends an item to `ec2_subnet_ids`.
        ///
        /// To override the contents of this collection use [`set_ec2_subnet_ids`](Self::set_ec2_subnet_ids).
        ///
        /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
        pub fn ec2_subnet_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.ec2_subnet_ids.unwrap_or_default();
            v.push(input.into());
            self.ec2_subnet_ids = Some(v);
            self
        }
        pub fn set_ec2_subnet_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.ec2_subnet_ids = input;
            self
        }
        pub fn get_ec2_subnet_ids(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.ec2_subnet_ids
        }
        /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
        pub fn emr_managed_master_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.emr_managed_master_security_group = Some(input.into());
            self
        }
        pub fn set_emr_managed_master_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.emr_managed_master_security_group = input;
            self
        }
        pub fn get_emr_managed_master_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.emr_managed_master_security_group
        }
        /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
        pub fn emr_managed_slave_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.emr_managed_slave_security_group = Some(input.into());
            self
        }
        pub fn set_emr_managed_slave_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.emr_managed_slave_security_group = input;
            self
        }
        pub fn get_emr_managed_slave_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.emr_managed_slave_security_group
        }
        /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
        pub fn service_access_security_group(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.service_access_security_group = Some(input.into());
            self
        }
        pub fn set_service_access_security_group(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.service_access_security_group = input;
            self
        }
        pub fn get_service_access_security_group(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.service_access_security_group
        }
        /// Appends an item to `additional_master_security_groups`.
        ///
        /// To override the contents of this collection use [`set_additional_master_security_groups`](Self::set_additional_master_security_groups).
        ///
        /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
        pub fn additional_master_security_groups(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.additional_master_security_groups.unwrap_or_default();
            v.push(input.into());
            self.additional_master_security_groups = Some(v);
            self
        }
        pub fn set_additional_master_security_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.additional_master_security_groups = input;
            self
        }
        pub fn get_additional_master_security_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.additional_master_security_groups
        }
        /// Appends an item to `additional_slave_security_groups`.
        ///
        /// To override the contents of this collection use [`set_additional_slave_security_groups`](Self::set_additional_slave_security_groups).
        ///
        /// <p>A list of additional Amazon EC2 security group IDs for the core and task nodes.</p>
        pub fn additional_slave_security_groups(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            let mut v = self.additional_slave_security_groups.unwrap_or_default();
            v.push(input.into());
            self.additional_slave_security_groups = Some(v);
            self
        }
        pub fn set_additional_slave_security_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.additional_slave_security_groups = input;
            self
        }
        pub fn get_additional_slave_security_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.additional_slave_security_groups
        }
        /// Consumes the builder and constructs a [`JobFlowInstancesConfig`](crate::model::JobFlowInstancesConfig)
        pub fn build(self) -> crate::model::JobFlowInstancesConfig {
            crate::model::JobFlowInstancesConfig {
                master_instance_type: self.master_instance_type,
                slave_instance_type: self.slave_instance_type,
                instance_count: self.instance_count,
                instance_groups: self.instance_groups,
                instance_fleets: self.instance_fleets,
                ec2_key_name: self.ec2_key_name,
                placement: self.placement,
                keep_job_flow_alive_when_no_steps: self.keep_job_flow_alive_when_no_steps,
                termination_protected: self.termination_protected,
                hadoop_version: self.hadoop_version,
                ec2_subnet_id: self.ec2_subnet_id,
                ec2_subnet_ids: self.ec2_subnet_ids,
                emr_managed_master_security_group: self.emr_managed_master_security_group,
                emr_managed_slave_security_group: self.emr_managed_slave_security_group,
                service_access_security_group: self.service_access_security_group,
                additional_master_security_groups: self.additional_master_security_groups,
                additional_slave_security_groups: self.additional_slave_security_groups,
            }
        }
    }
}
impl JobFlowInstancesConfig {
    /// Creates a new builder-style object to manufacture [`JobFlowInstancesConfig`](crate::model::JobFlowInstancesConfig)
    pub fn builder() -> crate::model::job_flow_instances_config::Builder {
        crate::model::job_flow_instances_config::Builder::default()
    }
}

/// <p>Specify the type of Amazon EC2 instances that the cluster (job flow) runs on.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct JobFlowInstancesDetail {
    /// <p>The Amazon EC2 master node instance type.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub master_instance_type: std::option::Option<std::string::String>,
    /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub master_public_dns_name: std::option::Option<std::string::String>,
    /// <p>The Amazon EC2 instance identifier of the master node.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub master_instance_id: std::option::Option<std::string::String>,
    /// <p>The Amazon EC2 core and task node instance type.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub slave_instance_type: std::option::Option<std::string::String>,
    /// <p>The number of Amazon EC2 instances in the cluster. If the value is 1, the same instance serves as both the master and core and task node. If the value is greater than 1, one instance is the master node and all others are core and task nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_count: std::option::Option<i32>,
    /// <p>Details about the instance groups in a cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupDetail>>,
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is increased one time for every hour that an m1.small instance runs. Larger instances are weighted more heavily, so an Amazon EC2 instance that is roughly four times more expensive would result in the normalized instance hours being increased incrementally four times. This result is only an approximation and does not reflect the actual billing rate.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub normalized_instance_hours: std::option::Option<i32>,
    /// <p>The name of an Amazon EC2 key pair that can be used to connect to the master node using SSH.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_key_name: std::option::Option<std::string::String>,
    /// <p>For clusters launched within Amazon Virtual Private Cloud, this is the identifier of the subnet where the cluster was launched.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ec2_subnet_id: std::option::Option<std::string::String>,
    /// <p>The Amazon EC2 Availability Zone for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub placement: std::option::Option<crate::model::PlacementType>,
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub keep_job_flow_alive_when_no_steps: std::option::Option<bool>,
    /// <p>Specifies whether the Amazon EC2 instances in the cluster are protected from termination by API calls, user intervention, or in the event of a job-flow error.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub termination_protected: std::option::Option<bool>,
    /// <p>The Hadoop version for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub hadoop_version: std::option::Option<std::string::String>,
}
impl JobFlowInstancesDetail {
    /// <p>The Amazon EC2 master node instance type.</p>
    pub fn master_instance_type(&self) -> std::option::Option<&str> {
        self.master_instance_type.as_deref()
    }
    /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
    pub fn master_public_dns_name(&self) -> std::option::Option<&str> {
        self.master_public_dns_name.as_deref()
    }
    /// <p>The Amazon EC2 instance identifier of the master node.</p>
    pub fn master_instance_id(&self) -> std::option::Option<&str> {
        self.master_instance_id.as_deref()
    }
    /// <p>The Amazon EC2 core and task node instance type.</p>
    pub fn slave_instance_type(&self) -> std::option::Option<&str> {
        self.slave_instance_type.as_deref()
    }
    /// <p>The number of Amazon EC2 instances in the cluster. If the value is 1, the same instance serves as both the master and core and task node. If the value is greater than 1, one instance is the master node and all others are core and task nodes.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <p>Details about the instance groups in a cluster.</p>
    pub fn instance_groups(&self) -> std::option::Option<&[crate::model::InstanceGroupDetail]> {
        self.instance_groups.as_deref()
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is increased one time for every hour that an m1.small instance runs. Larger instances are weighted more heavily, so an Amazon EC2 instance that is roughly four times more expensive would result in the normalized instance hours being increased incrementally four times. This result is only an approximation and does not reflect the actual billing rate.</p>
    pub fn normalized_instance_hours(&self) -> std::option::Option<i32> {
        self.normalized_instance_hours
    }
    /// <p>The name of an Amazon EC2 key pair that can be used to connect to the master node using SSH.</p>
    pub fn ec2_key_name(&self) -> std::option::Option<&str> {
        self.ec2_key_name.as_deref()
    }
    /// <p>For clusters launched within Amazon Virtual Private Cloud, this is the identifier of the subnet where the cluster was launched.</p>
    pub fn ec2_subnet_id(&self) -> std::option::Option<&str> {
        self.ec2_subnet_id.as_deref()
    }
    /// <p>The Amazon EC2 Availability Zone for the cluster.</p>
    pub fn placement(&self) -> std::option::Option<&crate::model::PlacementType> {
        self.placement.as_ref()
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn keep_job_flow_alive_when_no_steps(&self) -> std::option::Option<bool> {
        self.keep_job_flow_alive_when_no_steps
    }
    /// <p>Specifies whether the Amazon EC2 instances in the cluster are protected from termination by API calls, user intervention, or in the event of a job-flow error.</p>
    pub fn termination_protected(&self) -> std::option::Option<bool> {
        self.termination_protected
    }
    /// <p>The Hadoop version for the cluster.</p>
    pub fn hadoop_version(&self) -> std::option::Option<&str> {
        self.hadoop_version.as_deref()
    }
}
impl std::fmt::Debug for JobFlowInstancesDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobFlowInstancesDetail");
        formatter.field("master_instance_type", &self.master_instance_type);
        formatter.field("master_public_dns_name", &self.master_public_dns_name);
        formatter.field("master_instance_id", &self.master_instance_id);
        formatter.field("slave_instance_type", &self.slave_instance_type);
        formatter.field("instance_count", &self.instance_count);
        formatter.field("instance_groups", &self.instance_groups);
        formatter.field("normalized_instance_hours", &self.normalized_instance_hours);
        formatter.field("ec2_key_name", &self.ec2_key_name);
        formatter.field("ec2_subnet_id", &self.ec2_subnet_id);
        formatter.field("placement", &self.placement);
        formatter.field("keep_job_flow_alive_when_no_steps", &self.keep_job_flow_alive_when_no_steps);
        formatter.field("termination_protected", &self.termination_protected);
        formatter.field("hadoop_version", &self.hadoop_version);
        formatter.finish()
    }
}
impl std::fmt::Display for JobFlowInstancesDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("MasterInstanceType", &self.master_instance_type);
        shape.field("MasterPublicDnsName", &self.master_public_dns_name);
        shape.field("MasterInstanceId", &self.master_instance_id);
        shape.field("SlaveInstanceType", &self.slave_instance_type);
        shape.field("InstanceCount", &self.instance_count);
        shape.list("InstanceGroups", &self.instance_groups);
        shape.field("NormalizedInstanceHours", &self.normalized_instance_hours);
        shape.field("Ec2KeyName", &self.ec2_key_name);
        shape.field("Ec2SubnetId", &self.ec2_subnet_id);
        shape.field("Placement", &self.placement);
        shape.field("KeepJobFlowAliveWhenNoSteps", &self.keep_job_flow_alive_when_no_steps);
        shape.field("TerminationProtected", &self.termination_protected);
        shape.field("HadoopVersion", &self.hadoop_version);
        shape.finish()
    }
}
/// See [`JobFlowInstancesDetail`](crate::model::JobFlowInstancesDetail)
pub mod job_flow_instances_detail {
    /// A builder for [`JobFlowInstancesDetail`](crate::model::JobFlowInstancesDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) master_instance_type: std::option::Option<std::string::String>,
        pub(crate) master_public_dns_name: std::option::Option<std::string::String>,
        pub(crate) master_instance_id: std::option::Option<std::string::String>,
        pub(crate) slave_instance_type: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupDetail>>,
        pub(crate) normalized_instance_hours: std::option::Option<i32>,
        pub(crate) ec2_key_name: std::option::Option<std::string::String>,
        pub(crate) ec2_subnet_id: std::option::Option<std::string::String>,
        pub(crate) placement: std::option::Option<crate::model::PlacementType>,
        pub(crate) keep_job_flow_alive_when_no_steps: std::option::Option<bool>,
        pub(crate) termination_protected: std::option::Option<bool>,
        pub(crate) hadoop_version: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon EC2 master node instance type.</p>
        pub fn master_instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.master_instance_type = Some(input.into());
            self
        }
        pub fn set_master_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.master_instance_type = input;
            self
        }
        pub fn get_master_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.master_instance_type
        }
        /// <p>The DNS name of the master node. If the cluster is on a private subnet, this is the private DNS name. On a public subnet, this is the public DNS name.</p>
        pub fn master_public_dns_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.master_public_dns_name = Some(input.into());
            self
        }
        pub fn set_master_public_dns_name(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.master_public_dns_name = input;
            self
        }
        pub fn get_master_public_dns_name(&self) -> &std::option::Option<std::string::String> {
            &self.master_public_dns_name
        }
        /// <p>The Amazon EC2 instance identifier of the master node.</p>
        pub fn master_instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.master_instance_id = Some(input.into());
            self
        }
        pub fn set_master_instance_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.master_instance_id = input;
            self
        }
        pub fn get_master_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.master_instance_id
        }
        /// <p>The Amazon EC2 core and task node instance type.</p>
        pub fn slave_instance_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.slave_instance_type = Some(input.into());
            self
        }
        pub fn set_slave_instance_type(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.slave_instance_type = input;
            self
        }
        pub fn get_slave_instance_type(&self) -> &std::option::Option<std::string::String> {
            &self.slave_instance_type
        }
        /// <p>The number of Amazon EC2 instances in the cluster. If the value is 1, the same instance serves as both the master and core and task node. If the value is greater than 1, one instance is the master node and all others are core and task nodes.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
        }
        /// Appends an item to `instance_groups`.
        ///
        /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
        ///
        /// <p>Details about the instance groups in a cluster.</p>
        pub fn instance_groups(
            mut self,
            input: impl Into<crate::model::InstanceGroupDetail>,
        ) -> Self {
            let mut v = self.instance_groups.unwrap_or_default();
            v.push(input.into());
            self.instance_groups = Some(v);
            self
        }
        pub fn set_instance_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceGroupDetail>>,
        ) -> Self {
            self.instance_groups = input;
            self
        }
        pub fn get_instance_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceGroupDetail>> {
            &self.instance_groups
        }
        /// <p>An approximation of the cost of the cluster, represented in m1.small/hours. This value is increased one time for every hour that an m1.small instance runs. Larger instances are weighted more heavily, so an Amazon EC2 instance that is roughly four times more expensive would result in the normalized instance hours being increased incrementally four times. This result is only an approximation and does not reflect the actual billing rate.</p>
        pub fn normalized_instance_hours(mut self, input: i32) -> Self {
            self.normalized_instance_hours = Some(input);
            self
        }
        pub fn set_normalized_instance_hours(mut self, input: std::option::Option<i32>) -> Self {
            self.normalized_instance_hours = input;
            self
        }
        pub fn get_normalized_instance_hours(&self) -> &std::option::Option<i32> {
            &self.normalized_instance_hours
        }
        /// <p>The name of an Amazon EC2 key pair that can be used to connect to the master node using SSH.</p>
        pub fn ec2_key_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_key_name = Some(input.into());
            self
        }
        pub fn set_ec2_key_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ec2_key_name = input;
            self
        }
        pub fn get_ec2_key_name(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_key_name
        }
        /// <p>For clusters launched within Amazon Virtual Private Cloud, this is the identifier of the subnet where the cluster was launched.</p>
        pub fn ec2_subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.ec2_subnet_id = Some(input.into());
            self
        }
        pub fn set_ec2_subnet_id(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ec2_subnet_id = input;
            self
        }
        pub fn get_ec2_subnet_id(&self) -> &std::option::Option<std::string::String> {
            &self.ec2_subnet_id
        }
        /// <p>The Amazon EC2 Availability Zone for the cluster.</p>
        pub fn placement(mut self, input: crate::model::PlacementType) -> Self {
            self.placement = Some(input);
            self
        }
        pub fn set_placement(
            mut self,
            input: std::option::Option<crate::model::PlacementType>,
        ) -> Self {
            self.placement = input;
            self
        }
        pub fn get_placement(&self) -> &std::option::Option<crate::model::PlacementType> {
            &self.placement
        }
        /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
        pub fn keep_job_flow_alive_when_no_steps(mut self, input: bool) -> Self {
            self.keep_job_flow_alive_when_no_steps = Some(input);
            self
        }
        pub fn set_keep_job_flow_alive_when_no_steps(
            mut self,
            input: std::option::Option<bool>,
        ) -> Self {
            self.keep_job_flow_alive_when_no_steps = input;
            self
        }
        pub fn get_keep_job_flow_alive_when_no_steps(&self) -> &std::option::Option<bool> {
            &self.keep_job_flow_alive_when_no_steps
        }
        /// <p>Specifies whether the Amazon EC2 instances in the cluster are protected from termination by API calls, user intervention, or in the event of a job-flow error.</p>
        pub fn termination_protected(mut self, input: bool) -> Self {
            self.termination_protected = Some(input);
            self
        }
        pub fn set_termination_protected(mut self, input: std::option::Option<bool>) -> Self {
            self.termination_protected = input;
            self
        }
        pub fn get_termination_protected(&self) -> &std::option::Option<bool> {
            &self.termination_protected
        }
        /// <p>The Hadoop version for the cluster.</p>
        pub fn hadoop_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.hadoop_version = Some(input.into());
            self
        }
        pub fn set_hadoop_version(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.hadoop_version = input;
            self
        }
        pub fn get_hadoop_version(&self) -> &std::option::Option<std::string::String> {
            &self.hadoop_version
        }
        /// Consumes the builder and constructs a [`JobFlowInstancesDetail`](crate::model::JobFlowInstancesDetail)
        pub fn build(self) -> crate::model::JobFlowInstancesDetail {
            crate::model::JobFlowInstancesDetail {
                master_instance_type: self.master_instance_type,
                master_public_dns_name: self.master_public_dns_name,
                master_instance_id: self.master_instance_id,
                slave_instance_type: self.slave_instance_type,
                instance_count: self.instance_count,
                instance_groups: self.instance_groups,
                normalized_instance_hours: self.normalized_instance_hours,
                ec2_key_name: self.ec2_key_name,
                ec2_subnet_id: self.ec2_subnet_id,
                placement: self.placement,
                keep_job_flow_alive_when_no_steps: self.keep_job_flow_alive_when_no_steps,
                termination_protected: self.termination_protected,
                hadoop_version: self.hadoop_version,
            }
        }
    }
}
impl JobFlowInstancesDetail {
    /// Creates a new builder-style object to manufacture [`JobFlowInstancesDetail`](crate::model::JobFlowInstancesDetail)
    pub fn builder() -> crate::model::job_flow_instances_detail::Builder {
        crate::model::job_flow_instances_detail::Builder::default()
    }
}

/// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration. For more information see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-kerberos.html">Use Kerberos Authentication</a> in the <i>EMR Management Guide</i>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct KerberosAttributes {
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub realm: std::option::Option<std::string::String>,
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub kdc_admin_password: std::option::Option<std::string::String>,
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cross_realm_trust_principal_password: std::option::Option<std::string::String>,
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "ADDomainJoinUser")
    )]
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ad_domain_join_user: std::option::Option<std::string::String>,
    /// <p>The Active Directory password for <code>ADDomainJoinUser</code>.</p>
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "ADDomainJoinPassword")
    )]
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ad_domain_join_password: std::option::Option<std::string::String>,
}
impl KerberosAttributes {
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub fn realm(&self) -> std::option::Option<&str> {
        self.realm.as_deref()
    }
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub fn kdc_admin_password(&self) -> std::option::Option<&str> {
        self.kdc_admin_password.as_deref()
    }
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub fn cross_realm_trust_principal_password(&self) -> std::option::Option<&str> {
        self.cross_realm_trust_principal_password.as_deref()
    }
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub fn ad_domain_join_user(&self) -> std::option::Option<&str> {
        self.ad_domain_join_user.as_deref()
    }
    /// <p>The Active Directory password for <code>ADDomainJoinUser</code>.</p>
    pub fn ad_domain_join_password(&self) -> std::option::Option<&str> {
        self.ad_domain_join_password.as_deref()
    }
}
impl std::fmt::Debug for KerberosAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("KerberosAttributes");
        formatter.field("realm", &self.realm);
        formatter.field("kdc_admin_password", &self.kdc_admin_password);
        formatter.field("cross_realm_trust_principal_password", &self.cross_realm_trust_principal_password);
        formatter.field("ad_domain_join_user", &self.ad_domain_join_user);
        formatter.field("ad_domain_join_password", &self.ad_domain_join_password);
        formatter.finish()
    }
}
impl std::fmt::Display for KerberosAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Realm", &self.realm);
        shape.field("KdcAdminPassword", &self.kdc_admin_password);
        shape.field("CrossRealmTrustPrincipalPassword", &self.cross_realm_trust_principal_password);
        shape.field("ADDomainJoinUser", &self.ad_domain_join_user);
        shape.field("ADDomainJoinPassword", &self.ad_domain_join_password);
        shape.finish()
    }
}
/// See [`KerberosAttributes`](crate::model::KerberosAttributes)
pub mod kerberos_attributes {
    /// A builder for [`KerberosAttributes`](crate::model::KerberosAttributes)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) realm: std::option::Option<std::string::String>,
        pub(crate) kdc_admin_password: std::option::Option<std::string::String>,
        pub(crate) cross_realm_trust_principal_password: std::option::Option<std::string::String>,
        pub(crate) ad_domain_join_user: std::option::Option<std::string::String>,
        pub(crate) ad_domain_join_password: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
        pub fn realm(mut self, input: impl Into<std::string::String>) -> Self {
            self.realm = Some(input.into());
            self
        }
        pub fn set_realm(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.realm = input;
            self
        }
        pub fn get_realm(&self) -> &std::option::Option<std::string::String> {
            &self.realm
        }
        /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
        pub fn kdc_admin_password(mut self, input: impl Into<std::string::String>) -> Self {
            self.kdc_admin_password = Some(input.into());
            self
        }
        pub fn set_kdc_admin_password(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.kdc_admin_password = input;
            self
        }
        pub fn get_kdc_admin_password(&self) -> &std::option::Option<std::string::String> {
            &self.kdc_admin_password
        }
        /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
        pub fn cross_realm_trust_principal_password(
            mut self,
            input: impl Into<std::string::String>,
        ) -> Self {
            self.cross_realm_trust_principal_password = Some(input.into());
            self
        }
        pub fn set_cross_realm_trust_principal_password(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.cross_realm_trust_principal_password = input;
            self
        }
        pub fn get_cross_realm_trust_principal_password(
            &self,
        ) -> &std::option::Option<std::string::String> {
            &self.cross_realm_trust_principal_password
        }
        /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
        pub fn ad_domain_join_user(mut self, input: impl Into<std::string::String>) -> Self {
            self.ad_domain_join_user = Some(input.into());
            self
        }
        pub fn set_ad_domain_join_user(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ad_domain_join_user = input;
            self
        }
        pub fn get_ad_domain_join_user(&self) -> &std::option::Option<std::string::String> {
            &self.ad_domain_join_user
        }
        /// <p>The Active Directory password for <code>ADDomainJoinUser</code>.</p>
        pub fn ad_domain_join_password(mut self, input: impl Into<std::string::String>) -> Self {
            self.ad_domain_join_password = Some(input.into());
            self
        }
        pub fn set_ad_domain_join_password(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.ad_domain_join_password = input;
            self
        }
        pub fn get_ad_domain_join_password(&self) -> &std::option::Option<std::string::String> {
            &self.ad_domain_join_password
        }
        /// Consumes the builder and constructs a [`KerberosAttributes`](crate::model::KerberosAttributes)
        pub fn build(self) -> crate::model::KerberosAttributes {
            crate::model::KerberosAttributes {
                realm: self.realm,
                kdc_admin_password: self.kdc_admin_password,
                cross_realm_trust_principal_password: self.cross_realm_trust_principal_password,
                ad_domain_join_user: self.ad_domain_join_user,
                ad_domain_join_password: self.ad_domain_join_password,
            }
        }
    }
}
impl KerberosAttributes {
    /// Creates a new builder-style object to manufacture [`KerberosAttributes`](crate::model::KerberosAttributes)
    pub fn builder() -> crate::model::kerberos_attributes::Builder {
        crate::model::kerberos_attributes::Builder::default()
    }
}

/// <p>A key-value pair.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct KeyValue {
    /// <p>The unique identifier of a key-value pair.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub key: std::option::Option<std::string::String>,
    /// <p>The value part of the identified key.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub value: std::option::Option<std::string::String>,
}
impl KeyValue {
    /// <p>The unique identifier of a key-value pair.</p>
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>The value part of the identified key.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for KeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("KeyValue");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
impl std::fmt::Display for KeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Key", &self.key);
        shape.field("Value", &self.value);
        shape.finish()
    }
}
/// See [`KeyValue`](crate::model::KeyValue)
pub mod key_value {
    /// A builder for [`KeyValue`](crate::model::KeyValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier of a key-value pair.</p>
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn get_key(&self) -> &std::option::Option<std::string::String> {
            &self.key
        }
        /// <p>The value part of the identified key.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        pub fn get_value(&self) -> &std::option::Option<std::string::String> {
            &self.value
        }
        /// Consumes the builder and constructs a [`KeyValue`](crate::model::KeyValue)
        pub fn build(self) -> crate::model::KeyValue {
            crate::model::KeyValue {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl KeyValue {
    /// Creates a new builder-style object to manufacture [`KeyValue`](crate::model::KeyValue)
    pub fn builder() -> crate::model::key_value::Builder {
        crate::model::key_value::Builder::default()
    }
}

/// <p>Managed scaling policy for an Amazon EMR cluster. The policy specifies the limits for resources that can be added or terminated from a cluster. The policy only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ManagedScalingPolicy {
    /// <p>The EC2 unit limits for a managed scaling policy. The managed scaling activity of a cluster is not allowed to go above or below these limits. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub compute_limits: std::option::Option<crate::model::ComputeLimits>,
}
impl ManagedScalingPolicy {
    /// <p>The EC2 unit limits for a managed scaling policy. The managed scaling activity of a cluster is not allowed to go above or below these limits. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
    pub fn compute_limits(&self) -> std::option::Option<&crate::model::ComputeLimits> {
        self.compute_limits.as_ref()
    }
}
impl std::fmt::Debug for ManagedScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ManagedScalingPolicy");
        formatter.field("compute_limits", &self.compute_limits);
        formatter.finish()
    }
}
impl std::fmt::Display for ManagedScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ComputeLimits", &self.compute_limits);
        shape.finish()
    }
}
/// See [`ManagedScalingPolicy`](crate::model::ManagedScalingPolicy)
pub mod managed_scaling_policy {
    /// A builder for [`ManagedScalingPolicy`](crate::model::ManagedScalingPolicy)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) compute_limits: std::option::Option<crate::model::ComputeLimits>,
    }
    impl Builder {
        /// <p>The EC2 unit limits for a managed scaling policy. The managed scaling activity of a cluster is not allowed to go above or below these limits. The limit only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
        pub fn compute_limits(mut self, input: crate::model::ComputeLimits) -> Self {
            self.compute_limits = Some(input);
            self
        }
        pub fn set_compute_limits(
            mut self,
            input: std::option::Option<crate::model::ComputeLimits>,
        ) -> Self {
            self.compute_limits = input;
            self
        }
        pub fn get_compute_limits(&self) -> &std::option::Option<crate::model::ComputeLimits> {
            &self.compute_limits
        }
        /// Consumes the builder and constructs a [`ManagedScalingPolicy`](crate::model::ManagedScalingPolicy)
        pub fn build(self) -> crate::model::ManagedScalingPolicy {
            crate::model::ManagedScalingPolicy {
                compute_limits: self.compute_limits,
            }
        }
    }
}
impl ManagedScalingPolicy {
    /// Creates a new builder-style object to manufacture [`ManagedScalingPolicy`](crate::model::ManagedScalingPolicy)
    pub fn builder() -> crate::model::managed_scaling_policy::Builder {
        crate::model::managed_scaling_policy::Builder::default()
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
pub enum MarketType {
    #[allow(missing_docs)] // documentation missing in model
    OnDemand,
    #[allow(missing_docs)] // documentation missing in model
    Spot,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for MarketType {
    fn from(s: &str) -> Self {
        match s {
            "ON_DEMAND" => MarketType::OnDemand,
            "SPOT" => MarketType::Spot,
            other => MarketType::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for MarketType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MarketType::from(s))
    }
}
impl MarketType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            MarketType::OnDemand => "ON_DEMAND",
            MarketType::Spot => "SPOT",
            MarketType::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ON_DEMAND", "SPOT"]
    }
}
impl AsRef<str> for MarketType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for MarketType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for MarketType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>A CloudWatch dimension, which is specified using a <code>Key</code> (known as a <code>Name</code> in CloudWatch), <code>Value</code> pair. By default, Amazon EMR uses one dimension whose <code>Key</code> is <code>JobFlowID</code> and <code>Value</code> is a variable representing the cluster ID, which is <code>${emr.clusterId}</code>. This enables the rule to bootstrap when the cluster ID becomes available.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct MetricDimension {
    /// <p>The dimension name.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub key: std::option::Option<std::string::String>,
    /// <p>The dimension value.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub value: std::option::Option<std::string::String>,
}
impl MetricDimension {
    /// <p>The dimension name.</p>
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>The dimension value.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for MetricDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MetricDimension");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
impl std::fmt::Display for MetricDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Key", &self.key);
        shape.field("Value", &self.value);
        shape.finish()
    }
}
/// See [`MetricDimension`](crate::model::MetricDimension)
pub mod metric_dimension {
    /// A builder for [`MetricDimension`](crate::model::MetricDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The dimension name.</p>
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn get_key(&self) -> &std::option::Option<std::string::String> {
            &self.key
        }
        /// <p>The dimension value.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        pub fn get_value(&self) -> &std::option::Option<std::string::String> {
            &self.value
        }
        /// Consumes the builder and constructs a [`MetricDimension`](crate::model::MetricDimension)
        pub fn build(self) -> crate::model::MetricDimension {
            crate::model::MetricDimension {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl MetricDimension {
    /// Creates a new builder-style object to manufacture [`MetricDimension`](crate::model::MetricDimension)
    pub fn builder() -> crate::model::metric_dimension::Builder {
        crate::model::metric_dimension::Builder::default()
    }
}

/// <p>The Amazon EC2 Availability Zone configuration of the cluster (job flow).</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct PlacementType {
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>AvailabilityZone</code> is used for uniform instance groups, while <code>AvailabilityZones</code> (plural) is used for instance fleets.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub availability_zone: std::option::Option<std::string::String>,
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>AvailabilityZones</code> is used for instance fleets, while <code>AvailabilityZone</code> (singular) is used for uniform instance groups.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl PlacementType {
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>AvailabilityZone</code> is used for uniform instance groups, while <code>AvailabilityZones</code> (plural) is used for instance fleets.</p>
    pub fn availability_zone(&self) -> std::option::Option<&str> {
        self.availability_zone.as_deref()
    }
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>AvailabilityZones</code> is used for instance fleets, while <code>AvailabilityZone</code> (singular) is used for uniform instance groups.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
    pub fn availability_zones(&self) -> std::option::Option<&[std::string::String]> {
        self.availability_zones.as_deref()
    }
}
impl std::fmt::Debug for PlacementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PlacementType");
        formatter.field("availability_zone", &self.availability_zone);
        formatter.field("availability_zones", &self.availability_zones);
        formatter.finish()
    }
}
impl std::fmt::Display for PlacementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("AvailabilityZone", &self.availability_zone);
        shape.list("AvailabilityZones", &self.availability_zones);
        shape.finish()
    }
}
/// See [`PlacementType`](crate::model::PlacementType)
pub mod placement_type {
    /// A builder for [`PlacementType`](crate::model::PlacementType)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) availability_zone: std::option::Option<std::string::String>,
        pub(crate) availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The Amazon EC2 Availability Zone for the cluster. <code>AvailabilityZone</code> is used for uniform instance groups, while <code>AvailabilityZones</code> (plural) is used for instance fleets.</p>
        pub fn availability_zone(mut self, input: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(input.into());
            self
        }
        pub fn set_availability_zone(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.availability_zone = input;
            self
        }
        pub fn get_availability_zone(&self) -> &std::option::Option<std::string::String> {
            &self.availability_zone
        }
        /// Appends an item to `availability_zones`.
        ///
        /// To override the contents of this collection use [`set_availability_zones`](Self::set_availability_zones).
        ///
        /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>AvailabilityZones</code> is used for instance fleets, while <code>AvailabilityZone</code> (singular) is used for uniform instance groups.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
        pub fn availability_zones(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.availability_zones.unwrap_or_default();
            v.push(input.into());
            self.availability_zones = Some(v);
            self
        }
        pub fn set_availability_zones(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.availability_zones = input;
            self
        }
        pub fn get_availability_zones(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.availability_zones
        }
        /// Consumes the builder and constructs a [`PlacementType`](crate::model::PlacementType)
        pub fn build(self) -> crate::model::PlacementType {
            crate::model::PlacementType {
                availability_zone: self.availability_zone,
                availability_zones: self.availability_zones,
            }
        }
    }
}
impl PlacementType {
    /// Creates a new builder-style object to manufacture [`PlacementType`](crate::model::PlacementType)
    pub fn builder() -> crate::model::placement_type::Builder {
        crate::model::placement_type::Builder::default()
    }
}

/// <p>A list of port ranges that are permitted to allow inbound traffic from all public IP addresses. To specify a single port, use the same value for <code>MinRange</code> and <code>MaxRange</code>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct PortRange {
    /// <p>The smallest port number in a specified range of port numbers.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub min_range: std::option::Option<i32>,
    /// <p>The smallest port number in a specified range of port numbers.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub max_range: std::option::Option<i32>,
}
impl PortRange {
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn min_range(&self) -> std::option::Option<i32> {
        self.min_range
    }
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn max_range(&self) -> std::option::Option<i32> {
        self.max_range
    }
}
impl std::fmt::Debug for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PortRange");
        formatter.field("min_range", &self.min_range);
        formatter.field("max_range", &self.max_range);
        formatter.finish()
    }
}
impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("MinRange", &self.min_range);
        shape.field("MaxRange", &self.max_range);
        shape.finish()
    }
}
/// See [`PortRange`](crate::model::PortRange)
pub mod port_range {
    /// A builder for [`PortRange`](crate::model::PortRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) min_range: std::option::Option<i32>,
        pub(crate) max_range: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The smallest port number in a specified range of port numbers.</p>
        pub fn min_range(mut self, input: i32) -> Self {
            self.min_range = Some(input);
            self
        }
        pub fn set_min_range(mut self, input: std::option::Option<i32>) -> Self {
            self.min_range = input;
            self
        }
        pub fn get_min_range(&self) -> &std::option::Option<i32> {
            &self.min_range
        }
        /// <p>The smallest port number in a specified range of port numbers.</p>
        pub fn max_range(mut self, input: i32) -> Self {
            self.max_range = Some(input);
            self
        }
        pub fn set_max_range(mut self, input: std::option::Option<i32>) -> Self {
            self.max_range = input;
            self
        }
        pub fn get_max_range(&self) -> &std::option::Option<i32> {
            &self.max_range
        }
        /// Consumes the builder and constructs a [`PortRange`](crate::model::PortRange)
        pub fn build(self) -> crate::model::PortRange {
            crate::model::PortRange {
                min_range: self.min_range,
                max_range: self.max_range,
            }
        }
    }
}
impl PortRange {
    /// Creates a new builder-style object to manufacture [`PortRange`](crate::model::PortRange)
    pub fn builder() -> crate::model::port_range::Builder {
        crate::model::port_range::Builder::default()
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
pub enum RepoUpgradeOnBoot {
    #[allow(missing_docs)] // documentation missing in model
    Security,
    #[allow(missing_docs)] // documentation missing in model
    None,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for RepoUpgradeOnBoot {
    fn from(s: &str) -> Self {
        match s {
            "SECURITY" => RepoUpgradeOnBoot::Security,
            "NONE" => RepoUpgradeOnBoot::None,
            other => RepoUpgradeOnBoot::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for RepoUpgradeOnBoot {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RepoUpgradeOnBoot::from(s))
    }
}
impl RepoUpgradeOnBoot {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            RepoUpgradeOnBoot::Security => "SECURITY",
            RepoUpgradeOnBoot::None => "NONE",
            RepoUpgradeOnBoot::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SECURITY", "NONE"]
    }
}
impl AsRef<str> for RepoUpgradeOnBoot {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for RepoUpgradeOnBoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for RepoUpgradeOnBoot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for RepoUpgradeOnBoot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
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
pub enum ScaleDownBehavior {
    #[allow(missing_docs)] // documentation missing in model
    TerminateAtInstanceHour,
    #[allow(missing_docs)] // documentation missing in model
    TerminateAtTaskCompletion,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for ScaleDownBehavior {
    fn from(s: &str) -> Self {
        match s {
            "TERMINATE_AT_INSTANCE_HOUR" => ScaleDownBehavior::TerminateAtInstanceHour,
            "TERMINATE_AT_TASK_COMPLETION" => ScaleDownBehavior::TerminateAtTaskCompletion,
            other => ScaleDownBehavior::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for ScaleDownBehavior {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ScaleDownBehavior::from(s))
    }
}
impl ScaleDownBehavior {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            ScaleDownBehavior::TerminateAtInstanceHour => "TERMINATE_AT_INSTANCE_HOUR",
            ScaleDownBehavior::TerminateAtTaskCompletion => "TERMINATE_AT_TASK_COMPLETION",
            ScaleDownBehavior::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["TERMINATE_AT_INSTANCE_HOUR", "TERMINATE_AT_TASK_COMPLETION"]
    }
}
impl AsRef<str> for ScaleDownBehavior {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ScaleDownBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ScaleDownBehavior {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for ScaleDownBehavior {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ScalingAction {
    /// <p>Not available for instance groups. Instance groups use the market type specified for the group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub market: std::option::Option<crate::model::MarketType>,
    /// <p>The type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub simple_scaling_policy_configuration: std::option::Option<crate::model::SimpleScalingPolicyConfiguration>,
}
impl ScalingAction {
    /// <p>Not available for instance groups. Instance groups use the market type specified for the group.</p>
    pub fn market(&self) -> std::option::Option<&crate::model::MarketType> {
        self.market.as_ref()
    }
    /// <p>The type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.</p>
    pub fn simple_scaling_policy_configuration(
        &self,
    ) -> std::option::Option<&crate::model::SimpleScalingPolicyConfiguration> {
        self.simple_scaling_policy_configuration.as_ref()
    }
}
impl std::fmt::Debug for ScalingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ScalingAction");
        formatter.field("market", &self.market);
        formatter.field("simple_scaling_policy_configuration", &self.simple_scaling_policy_configuration);
        formatter.finish()
    }
}
impl std::fmt::Display for ScalingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Market", &self.market);
        shape.field("SimpleScalingPolicyConfiguration", &self.simple_scaling_policy_configuration);
        shape.finish()
    }
}
/// See [`ScalingAction`](crate::model::ScalingAction)
pub mod scaling_action {
    /// A builder for [`ScalingAction`](crate::model::ScalingAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) market: std::option::Option<crate::model::MarketType>,
        pub(crate) simple_scaling_policy_configuration: std::option::Option<crate::model::SimpleScalingPolicyConfiguration>,
    }
    impl Builder {
        /// <p>Not available for instance groups. Instance groups use the market type specified for the group.</p>
        pub fn market(mut self, input: impl Into<crate::model::MarketType>) -> Self {
            self.market = Some(input.into());
            self
        }
        pub fn set_market(mut self, input: std::option::Option<crate::model::MarketType>) -> Self {
            self.market = input;
            self
        }
        pub fn get_market(&self) -> &std::option::Option<crate::model::MarketType> {
            &self.market
        }
        /// <p>The type of adjustment the automatic scaling activity makes when triggered, and the periodicity of the adjustment.</p>
        pub fn simple_scaling_policy_configuration(
            mut self,
            input: crate::model::SimpleScalingPolicyConfiguration,
        ) -> Self {
            self.simple_scaling_policy_configuration = Some(input);
            self
        }
        pub fn set_simple_scaling_policy_configuration(
            mut self,
            input: std::option::Option<crate::model::SimpleScalingPolicyConfiguration>,
        ) -> Self {
            self.simple_scaling_policy_configuration = input;
            self
        }
        pub fn get_simple_scaling_policy_configuration(
            &self,
        ) -> &std::option::Option<crate::model::SimpleScalingPolicyConfiguration> {
            &self.simple_scaling_policy_configuration
        }
        /// Consumes the builder and constructs a [`ScalingAction`](crate::model::ScalingAction)
        pub fn build(self) -> crate::model::ScalingAction {
            crate::model::ScalingAction {
                market: self.market,
                simple_scaling_policy_configuration: self.simple_scaling_policy_configuration,
            }
        }
    }
}
impl ScalingAction {
    /// Creates a new builder-style object to manufacture [`ScalingAction`](crate::model::ScalingAction)
    pub fn builder() -> crate::model::scaling_action::Builder {
        crate::model::scaling_action::Builder::default()
    }
}

/// <p>The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling activities triggered by automatic scaling rules will not cause an instance group to grow above or below these limits.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ScalingConstraints {
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink. Scale-in activities will not terminate instances below this boundary.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub min_capacity: std::option::Option<i32>,
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow. Scale-out activities will not add instances beyond this boundary.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub max_capacity: std::option::Option<i32>,
}
impl ScalingConstraints {
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink. Scale-in activities will not terminate instances below this boundary.</p>
    pub fn min_capacity(&self) -> std::option::Option<i32> {
        self.min_capacity
    }
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow. Scale-out activities will not add instances beyond this boundary.</p>
    pub fn max_capacity(&self) -> std::option::Option<i32> {
        self.max_capacity
    }
}
impl std::fmt::Debug for ScalingConstraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ScalingConstraints");
        formatter.field("min_capacity", &self.min_capacity);
        formatter.field("max_capacity", &self.max_capacity);
        formatter.finish()
    }
}
impl std::fmt::Display for ScalingConstraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("MinCapacity", &self.min_capacity);
        shape.field("MaxCapacity", &self.max_capacity);
        shape.finish()
    }
}
/// See [`ScalingConstraints`](crate::model::ScalingConstraints)
pub mod scaling_constraints {
    /// A builder for [`ScalingConstraints`](crate::model::ScalingConstraints)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) min_capacity: std::option::Option<i32>,
        pub(crate) max_capacity: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink. Scale-in activities will not terminate instances below this boundary.</p>
        pub fn min_capacity(mut self, input: i32) -> Self {
            self.min_capacity = Some(input);
            self
        }
        pub fn set_min_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.min_capacity = input;
            self
        }
        pub fn get_min_capacity(&self) -> &std::option::Option<i32> {
            &self.min_capacity
        }
        /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow. Scale-out activities will not add instances beyond this boundary.</p>
        pub fn max_capacity(mut self, input: i32) -> Self {
            self.max_capacity = Some(input);
            self
        }
        pub fn set_max_capacity(mut self, input: std::option::Option<i32>) -> Self {
            self.max_capacity = input;
            self
        }
        pub fn get_max_capacity(&self) -> &std::option::Option<i32> {
            &self.max_capacity
        }
        /// Consumes the builder and constructs a [`ScalingConstraints`](crate::model::ScalingConstraints)
        pub fn build(self) -> crate::model::ScalingConstraints {
            crate::model::ScalingConstraints {
                min_capacity: self.min_capacity,
                max_capacity: self.max_capacity,
            }
        }
    }
}
impl ScalingConstraints {
    /// Creates a new builder-style object to manufacture [`ScalingConstraints`](crate::model::ScalingConstraints)
    pub fn builder() -> crate::model::scaling_constraints::Builder {
        crate::model::scaling_constraints::Builder::default()
    }
}

/// <p>A scale-in or scale-out rule that defines scaling activity, including the CloudWatch metric alarm that triggers activity, how EC2 instances are added or removed, and the periodicity of adjustments. The automatic scaling policy for an instance group can comprise one or more automatic scaling rules.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ScalingRule {
    /// <p>The name used to identify an automatic scaling rule. Rule names must be unique within a scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>A friendly, more verbose description of the automatic scaling rule.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub description: std::option::Option<std::string::String>,
    /// <p>The conditions that trigger an automatic scaling activity.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub action: std::option::Option<crate::model::ScalingAction>,
    /// <p>The CloudWatch alarm definition that determines when automatic scaling activity is triggered.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub trigger: std::option::Option<crate::model::ScalingTrigger>,
}
impl ScalingRule {
    /// <p>The name used to identify an automatic scaling rule. Rule names must be unique within a scaling policy.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A friendly, more verbose description of the automatic scaling rule.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The conditions that trigger an automatic scaling activity.</p>
    pub fn action(&self) -> std::option::Option<&crate::model::ScalingAction> {
        self.action.as_ref()
    }
    /// <p>The CloudWatch alarm definition that determines when automatic scaling activity is triggered.</p>
    pub fn trigger(&self) -> std::option::Option<&crate::model::ScalingTrigger> {
        self.trigger.as_ref()
    }
}
impl std::fmt::Debug for ScalingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ScalingRule");
        formatter.field("name", &self.name);
        formatter.field("description", &self.description);
        formatter.field("action", &self.action);
        formatter.field("trigger", &self.trigger);
        formatter.finish()
    }
}
impl std::fmt::Display for ScalingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("Description", &self.description);
        shape.field("Action", &self.action);
        shape.field("Trigger", &self.trigger);
        shape.finish()
    }
}
/// See [`ScalingRule`](crate::model::ScalingRule)
pub mod scaling_rule {
    /// A builder for [`ScalingRule`](crate::model::ScalingRule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) action: std::option::Option<crate::model::ScalingAction>,
        pub(crate) trigger: std::option::Option<crate::model::ScalingTrigger>,
    }
    impl Builder {
        /// <p>The name used to identify an automatic scaling rule. Rule names must be unique within a scaling policy.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>A friendly, more verbose description of the automatic scaling rule.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>The conditions that trigger an automatic scaling activity.</p>
        pub fn action(mut self, input: crate::model::ScalingAction) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(
            mut self,
            input: std::option::Option<crate::model::ScalingAction>,
        ) -> Self {
            self.action = input;
            self
        }
        pub fn get_action(&self) -> &std::option::Option<crate::model::ScalingAction> {
            &self.action
        }
        /// <p>The CloudWatch alarm definition that determines when automatic scaling activity is triggered.</p>
        pub fn trigger(mut self, input: crate::model::ScalingTrigger) -> Self {
            self.trigger = Some(input);
            self
        }
        pub fn set_trigger(
            mut self,
            input: std::option::Option<crate::model::ScalingTrigger>,
        ) -> Self {
            self.trigger = input;
            self
        }
        pub fn get_trigger(&self) -> &std::option::Option<crate::model::ScalingTrigger> {
            &self.trigger
        }
        /// Consumes the builder and constructs a [`ScalingRule`](crate::model::ScalingRule)
        pub fn build(self) -> crate::model::ScalingRule {
            crate::model::ScalingRule {
                name: self.name,
                description: self.description,
                action: self.action,
                trigger: self.trigger,
            }
        }
    }
}
impl ScalingRule {
    /// Creates a new builder-style object to manufacture [`ScalingRule`](crate::model::ScalingRule)
    pub fn builder() -> crate::model::scaling_rule::Builder {
        crate::model::scaling_rule::Builder::default()
    }
}

/// <p>The conditions that trigger an automatic scaling activity.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ScalingTrigger {
    /// <p>The definition of a CloudWatch metric alarm. When the defined alarm conditions are met along with other trigger parameters, scaling activity begins.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cloud_watch_alarm_definition: std::option::Option<crate::model::CloudWatchAlarmDefinition>,
}
impl ScalingTrigger {
    /// <p>The definition of a CloudWatch metric alarm. When the defined alarm conditions are met along with other trigger parameters, scaling activity begins.</p>
    pub fn cloud_watch_alarm_definition(
        &self,
    ) -> std::option::Option<&crate::model::CloudWatchAlarmDefinition> {
        self.cloud_watch_alarm_definition.as_ref()
    }
}
impl std::fmt::Debug for ScalingTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ScalingTrigger");
        formatter.field("cloud_watch_alarm_definition", &self.cloud_watch_alarm_definition);
        formatter.finish()
    }
}
impl std::fmt::Display for ScalingTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CloudWatchAlarmDefinition", &self.cloud_watch_alarm_definition);
        shape.finish()
    }
}
/// See [`ScalingTrigger`](crate::model::ScalingTrigger)
pub mod scaling_trigger {
    /// A builder for [`ScalingTrigger`](crate::model::ScalingTrigger)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cloud_watch_alarm_definition: std::option::Option<crate::model::CloudWatchAlarmDefinition>,
    }
    impl Builder {
        /// <p>The definition of a CloudWatch metric alarm. When the defined alarm conditions are met along with other trigger parameters, scaling activity begins.</p>
        pub fn cloud_watch_alarm_definition(
            mut self,
            input: crate::model::CloudWatchAlarmDefinition,
        ) -> Self {
            self.cloud_watch_alarm_definition = Some(input);
            self
        }
        pub fn set_cloud_watch_alarm_definition(
            mut self,
            input: std::option::Option<crate::model::CloudWatchAlarmDefinition>,
        ) -> Self {
            self.cloud_watch_alarm_definition = input;
            self
        }
        pub fn get_cloud_watch_alarm_definition(
            &self,
        ) -> &std::option::Option<crate::model::CloudWatchAlarmDefinition> {
            &self.cloud_watch_alarm_definition
        }
        /// Consumes the builder and constructs a [`ScalingTrigger`](crate::model::ScalingTrigger)
        pub fn build(self) -> crate::model::ScalingTrigger {
            crate::model::ScalingTrigger {
                cloud_watch_alarm_definition: self.cloud_watch_alarm_definition,
            }
        }
    }
}
impl ScalingTrigger {
    /// Creates a new builder-style object to manufacture [`ScalingTrigger`](crate::model::ScalingTrigger)
    pub fn builder() -> crate::model::scaling_trigger::Builder {
        crate::model::scaling_trigger::Builder::default()
    }
}

/// <p>Configuration of the script to run during a bootstrap action.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ScriptBootstrapActionConfig {
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub path: std::option::Option<std::string::String>,
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl ScriptBootstrapActionConfig {
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub fn path(&self) -> std::option::Option<&str> {
        self.path.as_deref()
    }
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
}
impl std::fmt::Debug for ScriptBootstrapActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ScriptBootstrapActionConfig");
        formatter.field("path", &self.path);
        formatter.field("args", &self.args);
        formatter.finish()
    }
}
impl std::fmt::Display for ScriptBootstrapActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Path", &self.path);
        shape.list("Args", &self.args);
        shape.finish()
    }
}
/// See [`ScriptBootstrapActionConfig`](crate::model::ScriptBootstrapActionConfig)
pub mod script_bootstrap_action_config {
    /// A builder for [`ScriptBootstrapActionConfig`](crate::model::ScriptBootstrapActionConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) path: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
        pub fn path(mut self, input: impl Into<std::string::String>) -> Self {
            self.path = Some(input.into());
            self
        }
        pub fn set_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.path = input;
            self
        }
        pub fn get_path(&self) -> &std::option::Option<std::string::String> {
            &self.path
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Consumes the builder and constructs a [`ScriptBootstrapActionConfig`](crate::model::ScriptBootstrapActionConfig)
        pub fn build(self) -> crate::model::ScriptBootstrapActionConfig {
            crate::model::ScriptBootstrapActionConfig {
                path: self.path,
                args: self.args,
            }
        }
    }
}
impl ScriptBootstrapActionConfig {
    /// Creates a new builder-style object to manufacture [`ScriptBootstrapActionConfig`](crate::model::ScriptBootstrapActionConfig)
    pub fn builder() -> crate::model::script_bootstrap_action_config::Builder {
        crate::model::script_bootstrap_action_config::Builder::default()
    }
}

/// <p>The creation date and time, and name, of a security configuration.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct SecurityConfigurationSummary {
    /// <p>The name of the security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The date and time the security configuration was created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
}
impl SecurityConfigurationSummary {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
}
impl std::fmt::Debug for SecurityConfigurationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SecurityConfigurationSummary");
        formatter.field("name", &self.name);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for SecurityConfigurationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.finish()
    }
}
/// See [`SecurityConfigurationSummary`](crate::model::SecurityConfigurationSummary)
pub mod security_configuration_summary {
    /// A builder for [`SecurityConfigurationSummary`](crate::model::SecurityConfigurationSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The name of the security configuration.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The date and time the security configuration was created.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// Consumes the builder and constructs a [`SecurityConfigurationSummary`](crate::model::SecurityConfigurationSummary)
        pub fn build(self) -> crate::model::SecurityConfigurationSummary {
            crate::model::SecurityConfigurationSummary {
                name: self.name,
                creation_date_time: self.creation_date_time,
            }
        }
    }
}
impl SecurityConfigurationSummary {
    /// Creates a new builder-style object to manufacture [`SecurityConfigurationSummary`](crate::model::SecurityConfigurationSummary)
    pub fn builder() -> crate::model::security_configuration_summary::Builder {
        crate::model::security_configuration_summary::Builder::default()
    }
}

/// <p>Policy for customizing shrink operations. Allows configuration of decommissioning timeout and targeted instance shrinking.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct ShrinkPolicy {
    /// <p>The desired timeout for decommissioning an instance. Overrides the default YARN decommissioning timeout.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub decommission_timeout: std::option::Option<i32>,
    /// <p>Custom policy for requesting termination protection or termination of specific instances when shrinking an instance group.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_resize_policy: std::option::Option<crate::model::InstanceResizePolicy>,
}
impl ShrinkPolicy {
    /// <p>The desired timeout for decommissioning an instance. Overrides the default YARN decommissioning timeout.</p>
    pub fn decommission_timeout(&self) -> std::option::Option<i32> {
        self.decommission_timeout
    }
    /// <p>Custom policy for requesting termination protection or termination of specific instances when shrinking an instance group.</p>
    pub fn instance_resize_policy(
        &self,
    ) -> std::option::Option<&crate::model::InstanceResizePolicy> {
        self.instance_resize_policy.as_ref()
    }
}
impl std::fmt::Debug for ShrinkPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ShrinkPolicy");
        formatter.field("decommission_timeout", &self.decommission_timeout);
        formatter.field("instance_resize_policy", &self.instance_resize_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for ShrinkPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("DecommissionTimeout", &self.decommission_timeout);
        shape.field("InstanceResizePolicy", &self.instance_resize_policy);
        shape.finish()
    }
}
/// See [`ShrinkPolicy`](crate::model::ShrinkPolicy)
pub mod shrink_policy {
    /// A builder for [`ShrinkPolicy`](crate::model::ShrinkPolicy)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) decommission_timeout: std::option::Option<i32>,
        pub(crate) instance_resize_policy: std::option::Option<crate::model::InstanceResizePolicy>,
    }
    impl Builder {
        /// <p>The desired timeout for decommissioning an instance. Overrides the default YARN decommissioning timeout.</p>
        pub fn decommission_timeout(mut self, input: i32) -> Self {
            self.decommission_timeout = Some(input);
            self
        }
        pub fn set_decommission_timeout(mut self, input: std::option::Option<i32>) -> Self {
            self.decommission_timeout = input;
            self
        }
        pub fn get_decommission_timeout(&self) -> &std::option::Option<i32> {
            &self.decommission_timeout
        }
        /// <p>Custom policy for requesting termination protection or termination of specific instances when shrinking an instance group.</p>
        pub fn instance_resize_policy(mut self, input: crate::model::InstanceResizePolicy) -> Self {
            self.instance_resize_policy = Some(input);
            self
        }
        pub fn set_instance_resize_policy(
            mut self,
            input: std::option::Option<crate::model::InstanceResizePolicy>,
        ) -> Self {
            self.instance_resize_policy = input;
            self
        }
        pub fn get_instance_resize_policy(
            &self,
        ) -> &std::option::Option<crate::model::InstanceResizePolicy> {
            &self.instance_resize_policy
        }
        /// Consumes the builder and constructs a [`ShrinkPolicy`](crate::model::ShrinkPolicy)
        pub fn build(self) -> crate::model::ShrinkPolicy {
            crate::model::ShrinkPolicy {
                decommission_timeout: self.decommission_timeout,
                instance_resize_policy: self.instance_resize_policy,
            }
        }
    }
}
impl ShrinkPolicy {
    /// Creates a new builder-style object to manufacture [`ShrinkPolicy`](crate::model::ShrinkPolicy)
    pub fn builder() -> crate::model::shrink_policy::Builder {
        crate::model::shrink_policy::Builder::default()
    }
}

/// <p>An automatic scaling configuration, which describes how the policy adds or removes instances, the cooldown period, and the number of EC2 instances that will be added each time the CloudWatch metric alarm condition is satisfied.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct SimpleScalingPolicyConfiguration {
    /// <p>The way in which EC2 instances are added (if <code>ScalingAdjustment</code> is a positive number) or terminated (if <code>ScalingAdjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default. <code>CHANGE_IN_CAPACITY</code> indicates that the EC2 instance count increments or decrements by <code>ScalingAdjustment</code>, which should be expressed as an integer. <code>PERCENT_CHANGE_IN_CAPACITY</code> indicates the instance count increments or decrements by the percentage specified by <code>ScalingAdjustment</code>, which should be expressed as an integer. For example, 20 indicates an increase in 20% increments of cluster capacity. <code>EXACT_CAPACITY</code> indicates the scaling activity results in an instance group with the number of EC2 instances specified by <code>ScalingAdjustment</code>, which should be expressed as a positive integer.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub adjustment_type: std::option::Option<crate::model::AdjustmentType>,
    /// <p>The amount by which to scale in or scale out, based on the specified <code>AdjustmentType</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances. If <code>AdjustmentType</code> is set to <code>EXACT_CAPACITY</code>, the number should only be a positive integer. If <code>AdjustmentType</code> is set to <code>PERCENT_CHANGE_IN_CAPACITY</code>, the value should express the percentage as an integer. For example, -20 indicates a decrease in 20% increments of cluster capacity.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub scaling_adjustment: std::option::Option<i32>,
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cool_down: std::option::Option<i32>,
}
impl SimpleScalingPolicyConfiguration {
    /// <p>The way in which EC2 instances are added (if <code>ScalingAdjustment</code> is a positive number) or terminated (if <code>ScalingAdjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default. <code>CHANGE_IN_CAPACITY</code> indicates that the EC2 instance count increments or decrements by <code>ScalingAdjustment</code>, which should be expressed as an integer. <code>PERCENT_CHANGE_IN_CAPACITY</code> indicates the instance count increments or decrements by the percentage specified by <code>ScalingAdjustment</code>, which should be expressed as an integer. For example, 20 indicates an increase in 20% increments of cluster capacity. <code>EXACT_CAPACITY</code> indicates the scaling activity results in an instance group with the number of EC2 instances specified by <code>ScalingAdjustment</code>, which should be expressed as a positive integer.</p>
    pub fn adjustment_type(&self) -> std::option::Option<&crate::model::AdjustmentType> {
        self.adjustment_type.as_ref()
    }
    /// <p>The amount by which to scale in or scale out, based on the specified <code>AdjustmentType</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances. If <code>AdjustmentType</code> is set to <code>EXACT_CAPACITY</code>, the number should only be a positive integer. If <code>AdjustmentType</code> is set to <code>PERCENT_CHANGE_IN_CAPACITY</code>, the value should express the percentage as an integer. For example, -20 indicates a decrease in 20% increments of cluster capacity.</p>
    pub fn scaling_adjustment(&self) -> std::option::Option<i32> {
        self.scaling_adjustment
    }
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub fn cool_down(&self) -> std::option::Option<i32> {
        self.cool_down
    }
}
impl std::fmt::Debug for SimpleScalingPolicyConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SimpleScalingPolicyConfiguration");
        formatter.field("adjustment_type", &self.adjustment_type);
        formatter.field("scaling_adjustment", &self.scaling_adjustment);
        formatter.field("cool_down", &self.cool_down);
        formatter.finish()
    }
}
impl std::fmt::Display for SimpleScalingPolicyConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("AdjustmentType", &self.adjustment_type);
        shape.field("ScalingAdjustment", &self.scaling_adjustment);
        shape.field("CoolDown", &self.cool_down);
        shape.finish()
    }
}
/// See [`SimpleScalingPolicyConfiguration`](crate::model::SimpleScalingPolicyConfiguration)
pub mod simple_scaling_policy_configuration {
    /// A builder for [`SimpleScalingPolicyConfiguration`](crate::model::SimpleScalingPolicyConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) adjustment_type: std::option::Option<crate::model::AdjustmentType>,
        pub(crate) scaling_adjustment: std::option::Option<i32>,
        pub(crate) cool_down: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The way in which EC2 instances are added (if <code>ScalingAdjustment</code> is a positive number) or terminated (if <code>ScalingAdjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default. <code>CHANGE_IN_CAPACITY</code> indicates that the EC2 instance count increments or decrements by <code>ScalingAdjustment</code>, which should be expressed as an integer. <code>PERCENT_CHANGE_IN_CAPACITY</code> indicates the instance count increments or decrements by the percentage specified by <code>ScalingAdjustment</code>, which should be expressed as an integer. For example, 20 indicates an increase in 20% increments of cluster capacity. <code>EXACT_CAPACITY</code> indicates the scaling activity results in an instance group with the number of EC2 instances specified by <code>ScalingAdjustment</code>, which should be expressed as a positive integer.</p>
        pub fn adjustment_type(mut self, input: impl Into<crate::model::AdjustmentType>) -> Self {
            self.adjustment_type = Some(input.into());
            self
        }
        pub fn set_adjustment_type(
            mut self,
            input: std::option::Option<crate::model::AdjustmentType>,
        ) -> Self {
            self.adjustment_type = input;
            self
        }
        pub fn get_adjustment_type(&self) -> &std::option::Option<crate::model::AdjustmentType> {
            &self.adjustment_type
        }
        /// <p>The amount by which to scale in or scale out, based on the specified <code>AdjustmentType</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances. If <code>AdjustmentType</code> is set to <code>EXACT_CAPACITY</code>, the number should only be a positive integer. If <code>AdjustmentType</code> is set to <code>PERCENT_CHANGE_IN_CAPACITY</code>, the value should express the percentage as an integer. For example, -20 indicates a decrease in 20% increments of cluster capacity.</p>
        pub fn scaling_adjustment(mut self, input: i32) -> Self {
            self.scaling_adjustment = Some(input);
            self
        }
        pub fn set_scaling_adjustment(mut self, input: std::option::Option<i32>) -> Self {
            self.scaling_adjustment = input;
            self
        }
        pub fn get_scaling_adjustment(&self) -> &std::option::Option<i32> {
            &self.scaling_adjustment
        }
        /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
        pub fn cool_down(mut self, input: i32) -> Self {
            self.cool_down = Some(input);
            self
        }
        pub fn set_cool_down(mut self, input: std::option::Option<i32>) -> Self {
            self.cool_down = input;
            self
        }
        pub fn get_cool_down(&self) -> &std::option::Option<i32> {
            &self.cool_down
        }
        /// Consumes the builder and constructs a [`SimpleScalingPolicyConfiguration`](crate::model::SimpleScalingPolicyConfiguration)
        pub fn build(self) -> crate::model::SimpleScalingPolicyConfiguration {
            crate::model::SimpleScalingPolicyConfiguration {
                adjustment_type: self.adjustment_type,
                scaling_adjustment: self.scaling_adjustment,
                cool_down: self.cool_down,
            }
        }
    }
}
impl SimpleScalingPolicyConfiguration {
    /// Creates a new builder-style object to manufacture [`SimpleScalingPolicyConfiguration`](crate::model::SimpleScalingPolicyConfiguration)
    pub fn builder() -> crate::model::simple_scaling_policy_configuration::Builder {
        crate::model::simple_scaling_policy_configuration::Builder::default()
    }
}

/// <p>The launch specification for Spot instances in the instance fleet, which determines the defined duration and provisioning timeout behavior.</p> <note> <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p> </note>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct SpotProvisioningSpecification {
    /// <p>The spot provisioning timeout period in minutes. If Spot instances are not provisioned within this time period, the <code>TimeOutAction</code> is taken. Minimum value is 5 and maximum value is 1440. The timeout applies only during initial provisioning, when the cluster is first created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeout_duration_minutes: std::option::Option<i32>,
    /// <p>The action to take when <code>TargetSpotCapacity</code> has not been fulfilled when the <code>TimeoutDurationMinutes</code> has expired; that is, when all Spot instances could not be provisioned within the Spot provisioning timeout. Valid values are <code>TERMINATE_CLUSTER</code> and <code>SWITCH_TO_ON_DEMAND</code>. SWITCH_TO_ON_DEMAND specifies that if no Spot instances are available, On-Demand Instances should be provisioned to fulfill any remaining Spot capacity.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeout_action: std::option::Option<crate::model::SpotProvisioningTimeoutAction>,
    /// <p>The defined duration for Spot instances (also known as Spot blocks) in minutes. When specified, the Spot instance does not terminate before the defined duration expires, and defined duration pricing for Spot instances applies. Valid values are 60, 120, 180, 240, 300, or 360. The duration period starts as soon as a Spot instance receives its instance ID. At the end of the duration, Amazon EC2 marks the Spot instance for termination and provides a Spot instance termination notice, which gives the instance a two-minute warning before it terminates.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub block_duration_minutes: std::option::Option<i32>,
}
impl SpotProvisioningSpecification {
    /// <p>The spot provisioning timeout period in minutes. If Spot instances are not provisioned within this time period, the <code>TimeOutAction</code> is taken. Minimum value is 5 and maximum value is 1440. The timeout applies only during initial provisioning, when the cluster is first created.</p>
    pub fn timeout_duration_minutes(&self) -> std::option::Option<i32> {
        self.timeout_duration_minutes
    }
    /// <p>The action to take when <code>TargetSpotCapacity</code> has not been fulfilled when the <code>TimeoutDurationMinutes</code> has expired; that is, when all Spot instances could not be provisioned within the Spot provisioning timeout. Valid values are <code>TERMINATE_CLUSTER</code> and <code>SWITCH_TO_ON_DEMAND</code>. SWITCH_TO_ON_DEMAND specifies that if no Spot instances are available, On-Demand Instances should be provisioned to fulfill any remaining Spot capacity.</p>
    pub fn timeout_action(
        &self,
    ) -> std::option::Option<&crate::model::SpotProvisioningTimeoutAction> {
        self.timeout_action.as_ref()
    }
    /// <p>The defined duration for Spot instances (also known as Spot blocks) in minutes. When specified, the Spot instance does not terminate before the defined duration expires, and defined duration pricing for Spot instances applies. Valid values are 60, 120, 180, 240, 300, or 360. The duration period starts as soon as a Spot instance receives its instance ID. At the end of the duration, Amazon EC2 marks the Spot instance for termination and provides a Spot instance termination notice, which gives the instance a two-minute warning before it terminates.</p>
    pub fn block_duration_minutes(&self) -> std::option::Option<i32> {
        self.block_duration_minutes
    }
}
impl std::fmt::Debug for SpotProvisioningSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SpotProvisioningSpecification");
        formatter.field("timeout_duration_minutes", &self.timeout_duration_minutes);
        formatter.field("timeout_action", &self.timeout_action);
        formatter.field("block_duration_minutes", &self.block_duration_minutes);
        formatter.finish()
    }
}
impl std::fmt::Display for SpotProvisioningSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("TimeoutDurationMinutes", &self.timeout_duration_minutes);
        shape.field("TimeoutAction", &self.timeout_action);
        shape.field("BlockDurationMinutes", &self.block_duration_minutes);
        shape.finish()
    }
}
/// See [`SpotProvisioningSpecification`](crate::model::SpotProvisioningSpecification)
pub mod spot_provisioning_specification {
    /// A builder for [`SpotProvisioningSpecification`](crate::model::SpotProvisioningSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) timeout_duration_minutes: std::option::Option<i32>,
        pub(crate) timeout_action: std::option::Option<crate::model::SpotProvisioningTimeoutAction>,
        pub(crate) block_duration_minutes: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The spot provisioning timeout period in minutes. If Spot instances are not provisioned within this time period, the <code>TimeOutAction</code> is taken. Minimum value is 5 and maximum value is 1440. The timeout applies only during initial provisioning, when the cluster is first created.</p>
        pub fn timeout_duration_minutes(mut self, input: i32) -> Self {
            self.timeout_duration_minutes = Some(input);
            self
        }
        pub fn set_timeout_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_duration_minutes = input;
            self
        }
        pub fn get_timeout_duration_minutes(&self) -> &std::option::Option<i32> {
            &self.timeout_duration_minutes
        }
        /// <p>The action to take when <code>TargetSpotCapacity</code> has not been fulfilled when the <code>TimeoutDurationMinutes</code> has expired; that is, when all Spot instances could not be provisioned within the Spot provisioning timeout. Valid values are <code>TERMINATE_CLUSTER</code> and <code>SWITCH_TO_ON_DEMAND</code>. SWITCH_TO_ON_DEMAND specifies that if no Spot instances are available, On-Demand Instances should be provisioned to fulfill any remaining Spot capacity.</p>
        pub fn timeout_action(
            mut self,
            input: impl Into<crate::model::SpotProvisioningTimeoutAction>,
        ) -> Self {
            self.timeout_action = Some(input.into());
            self
        }
        pub fn set_timeout_action(
            mut self,
            input: std::option::Option<crate::model::SpotProvisioningTimeoutAction>,
        ) -> Self {
            self.timeout_action = input;
            self
        }
        pub fn get_timeout_action(
            &self,
        ) -> &std::option::Option<crate::model::SpotProvisioningTimeoutAction> {
            &self.timeout_action
        }
        /// <p>The defined duration for Spot instances (also known as Spot blocks) in minutes. When specified, the Spot instance does not terminate before the defined duration expires, and defined duration pricing for Spot instances applies. Valid values are 60, 120, 180, 240, 300, or 360. The duration period starts as soon as a Spot instance receives its instance ID. At the end of the duration, Amazon EC2 marks the Spot instance for termination and provides a Spot instance termination notice, which gives the instance a two-minute warning before it terminates.</p>
        pub fn block_duration_minutes(mut self, input: i32) -> Self {
            self.block_duration_minutes = Some(input);
            self
        }
        pub fn set_block_duration_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.block_duration_minutes = input;
            self
        }
        pub fn get_block_duration_minutes(&self) -> &std::option::Option<i32> {
            &self.block_duration_minutes
        }
        /// Consumes the builder and constructs a [`SpotProvisioningSpecification`](crate::model::SpotProvisioningSpecification)
        pub fn build(self) -> crate::model::SpotProvisioningSpecification {
            crate::model::SpotProvisioningSpecification {
                timeout_duration_minutes: self.timeout_duration_minutes,
                timeout_action: self.timeout_action,
                block_duration_minutes: self.block_duration_minutes,
            }
        }
    }
}
impl SpotProvisioningSpecification {
    /// Creates a new builder-style object to manufacture [`SpotProvisioningSpecification`](crate::model::SpotProvisioningSpecification)
    pub fn builder() -> crate::model::spot_provisioning_specification::Builder {
        crate::model::spot_provisioning_specification::Builder::default()
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
pub enum SpotProvisioningTimeoutAction {
    #[allow(missing_docs)] // documentation missing in model
    SwitchToOnDemand,
    #[allow(missing_docs)] // documentation missing in model
    TerminateCluster,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for SpotProvisioningTimeoutAction {
    fn from(s: &str) -> Self {
        match s {
            "SWITCH_TO_ON_DEMAND" => SpotProvisioningTimeoutAction::SwitchToOnDemand,
            "TERMINATE_CLUSTER" => SpotProvisioningTimeoutAction::TerminateCluster,
            other => SpotProvisioningTimeoutAction::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for SpotProvisioningTimeoutAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpotProvisioningTimeoutAction::from(s))
    }
}
impl SpotProvisioningTimeoutAction {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            SpotProvisioningTimeoutAction::SwitchToOnDemand => "SWITCH_TO_ON_DEMAND",
            SpotProvisioningTimeoutAction::TerminateCluster => "TERMINATE_CLUSTER",
            SpotProvisioningTimeoutAction::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SWITCH_TO_ON_DEMAND", "TERMINATE_CLUSTER"]
    }
}
impl AsRef<str> for SpotProvisioningTimeoutAction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for SpotProvisioningTimeoutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for SpotProvisioningTimeoutAction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for SpotProvisioningTimeoutAction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
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
pub enum Statistic {
    #[allow(missing_docs)] // documentation missing in model
    SampleCount,
    #[allow(missing_docs)] // documentation missing in model
    Average,
    #[allow(missing_docs)] // documentation missing in model
    Sum,
    #[allow(missing_docs)] // documentation missing in model
    Minimum,
    #[allow(missing_docs)] // documentation missing in model
    Maximum,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for Statistic {
    fn from(s: &str) -> Self {
        match s {
            "SAMPLE_COUNT" => Statistic::SampleCount,
            "AVERAGE" => Statistic::Average,
            "SUM" => Statistic::Sum,
            "MINIMUM" => Statistic::Minimum,
            "MAXIMUM" => Statistic::Maximum,
            other => Statistic::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for Statistic {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Statistic::from(s))
    }
}
impl Statistic {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            Statistic::SampleCount => "SAMPLE_COUNT",
            Statistic::Average => "AVERAGE",
            Statistic::Sum => "SUM",
            Statistic::Minimum => "MINIMUM",
            Statistic::Maximum => "MAXIMUM",
            Statistic::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SAMPLE_COUNT", "AVERAGE", "SUM", "MINIMUM", "MAXIMUM"]
    }
}
impl AsRef<str> for Statistic {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Statistic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for Statistic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>This represents a step in a cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Step {
    /// <p>The identifier of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The Hadoop job configuration of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub config: std::option::Option<crate::model::HadoopStepConfig>,
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
    /// <p>The current execution status details of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::StepStatus>,
}
impl Step {
    /// <p>The identifier of the cluster step.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster step.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn config(&self) -> std::option::Option<&crate::model::HadoopStepConfig> {
        self.config.as_ref()
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    pub fn action_on_failure(&self) -> std::option::Option<&crate::model::ActionOnFailure> {
        self.action_on_failure.as_ref()
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::StepStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Step");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("config", &self.config);
        formatter.field("action_on_failure", &self.action_on_failure);
        formatter.field("status", &self.status);
        formatter.finish()
    }
}
impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Config", &self.config);
        shape.field("ActionOnFailure", &self.action_on_failure);
        shape.field("Status", &self.status);
        shape.finish()
    }
}
/// See [`Step`](crate::model::Step)
pub mod step {
    /// A builder for [`Step`](crate::model::Step)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) config: std::option::Option<crate::model::HadoopStepConfig>,
        pub(crate) action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
        pub(crate) status: std::option::Option<crate::model::StepStatus>,
    }
    impl Builder {
        /// <p>The identifier of the cluster step.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the cluster step.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The Hadoop job configuration of the cluster step.</p>
        pub fn config(mut self, input: crate::model::HadoopStepConfig) -> Self {
            self.config = Some(input);
            self
        }
        pub fn set_config(
            mut self,
            input: std::option::Option<crate::model::HadoopStepConfig>,
        ) -> Self {
            self.config = input;
            self
        }
        pub fn get_config(&self) -> &std::option::Option<crate::model::HadoopStepConfig> {
            &self.config
        }
        /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
        pub fn action_on_failure(
            mut self,
            input: impl Into<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = Some(input.into());
            self
        }
        pub fn set_action_on_failure(
            mut self,
            input: std::option::Option<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = input;
            self
        }
        pub fn get_action_on_failure(&self) -> &std::option::Option<crate::model::ActionOnFailure> {
            &self.action_on_failure
        }
        /// <p>The current execution status details of the cluster step.</p>
        pub fn status(mut self, input: crate::model::StepStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::StepStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::StepStatus> {
            &self.status
        }
        /// Consumes the builder and constructs a [`Step`](crate::model::Step)
        pub fn build(self) -> crate::model::Step {
            crate::model::Step {
                id: self.id,
                name: self.name,
                config: self.config,
                action_on_failure: self.action_on_failure,
                status: self.status,
            }
        }
    }
}
impl Step {
    /// Creates a new builder-style object to manufacture [`Step`](crate::model::Step)
    pub fn builder() -> crate::model::step::Builder {
        crate::model::step::Builder::default()
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
pub enum StepCancellationOption {
    #[allow(missing_docs)] // documentation missing in model
    SendInterrupt,
    #[allow(missing_docs)] // documentation missing in model
    TerminateProcess,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for StepCancellationOption {
    fn from(s: &str) -> Self {
        match s {
            "SEND_INTERRUPT" => StepCancellationOption::SendInterrupt,
            "TERMINATE_PROCESS" => StepCancellationOption::TerminateProcess,
            other => StepCancellationOption::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for StepCancellationOption {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StepCancellationOption::from(s))
    }
}
impl StepCancellationOption {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            StepCancellationOption::SendInterrupt => "SEND_INTERRUPT",
            StepCancellationOption::TerminateProcess => "TERMINATE_PROCESS",
            StepCancellationOption::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SEND_INTERRUPT", "TERMINATE_PROCESS"]
    }
}
impl AsRef<str> for StepCancellationOption {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for StepCancellationOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for StepCancellationOption {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for StepCancellationOption {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>Specification of a cluster (job flow) step.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepConfig {
    /// <p>The name of the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
    /// <p>The JAR file used for the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub hadoop_jar_step: std::option::Option<crate::model::HadoopJarStepConfig>,
}
impl StepConfig {
    /// <p>The name of the step.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    pub fn action_on_failure(&self) -> std::option::Option<&crate::model::ActionOnFailure> {
        self.action_on_failure.as_ref()
    }
    /// <p>The JAR file used for the step.</p>
    pub fn hadoop_jar_step(&self) -> std::option::Option<&crate::model::HadoopJarStepConfig> {
        self.hadoop_jar_step.as_ref()
    }
}
impl std::fmt::Debug for StepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepConfig");
        formatter.field("name", &self.name);
        formatter.field("action_on_failure", &self.action_on_failure);
        formatter.field("hadoop_jar_step", &self.hadoop_jar_step);
        formatter.finish()
    }
}
impl std::fmt::Display for StepConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("ActionOnFailure", &self.action_on_failure);
        shape.field("HadoopJarStep", &self.hadoop_jar_step);
        shape.finish()
    }
}
/// See [`StepConfig`](crate::model::StepConfig)
pub mod step_config {
    /// A builder for [`StepConfig`](crate::model::StepConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
        pub(crate) hadoop_jar_step: std::option::Option<crate::model::HadoopJarStepConfig>,
    }
    impl Builder {
        /// <p>The name of the step.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
        pub fn action_on_failure(
            mut self,
            input: impl Into<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = Some(input.into());
            self
        }
        pub fn set_action_on_failure(
            mut self,
            input: std::option::Option<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = input;
            self
        }
        pub fn get_action_on_failure(&self) -> &std::option::Option<crate::model::ActionOnFailure> {
            &self.action_on_failure
        }
        /// <p>The JAR file used for the step.</p>
        pub fn hadoop_jar_step(mut self, input: crate::model::HadoopJarStepConfig) -> Self {
            self.hadoop_jar_step = Some(input);
            self
        }
        pub fn set_hadoop_jar_step(
            mut self,
            input: std::option::Option<crate::model::HadoopJarStepConfig>,
        ) -> Self {
            self.hadoop_jar_step = input;
            self
        }
        pub fn get_hadoop_jar_step(
            &self,
        ) -> &std::option::Option<crate::model::HadoopJarStepConfig> {
            &self.hadoop_jar_step
        }
        /// Consumes the builder and constructs a [`StepConfig`](crate::model::StepConfig)
        pub fn build(self) -> crate::model::StepConfig {
            crate::model::StepConfig {
                name: self.name,
                action_on_failure: self.action_on_failure,
                hadoop_jar_step: self.hadoop_jar_step,
            }
        }
    }
}
impl StepConfig {
    /// Creates a new builder-style object to manufacture [`StepConfig`](crate::model::StepConfig)
    pub fn builder() -> crate::model::step_config::Builder {
        crate::model::step_config::Builder::default()
    }
}

/// <p>Combines the execution state and configuration of a step.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepDetail {
    /// <p>The step configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_config: std::option::Option<crate::model::StepConfig>,
    /// <p>The description of the step status.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub execution_status_detail: std::option::Option<crate::model::StepExecutionStatusDetail>,
}
impl StepDetail {
    /// <p>The step configuration.</p>
    pub fn step_config(&self) -> std::option::Option<&crate::model::StepConfig> {
        self.step_config.as_ref()
    }
    /// <p>The description of the step status.</p>
    pub fn execution_status_detail(
        &self,
    ) -> std::option::Option<&crate::model::StepExecutionStatusDetail> {
        self.execution_status_detail.as_ref()
    }
}
impl std::fmt::Debug for StepDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepDetail");
        formatter.field("step_config", &self.step_config);
        formatter.field("execution_status_detail", &self.execution_status_detail);
        formatter.finish()
    }
}
impl std::fmt::Display for StepDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("StepConfig", &self.step_config);
        shape.field("ExecutionStatusDetail", &self.execution_status_detail);
        shape.finish()
    }
}
/// See [`StepDetail`](crate::model::StepDetail)
pub mod step_detail {
    /// A builder for [`StepDetail`](crate::model::StepDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) step_config: std::option::Option<crate::model::StepConfig>,
        pub(crate) execution_status_detail: std::option::Option<crate::model::StepExecutionStatusDetail>,
    }
    impl Builder {
        /// <p>The step configuration.</p>
        pub fn step_config(mut self, input: crate::model::StepConfig) -> Self {
            self.step_config = Some(input);
            self
        }
        pub fn set_step_config(
            mut self,
            input: std::option::Option<crate::model::StepConfig>,
        ) -> Self {
            self.step_config = input;
            self
        }
        pub fn get_step_config(&self) -> &std::option::Option<crate::model::StepConfig> {
            &self.step_config
        }
        /// <p>The description of the step status.</p>
        pub fn execution_status_detail(
            mut self,
            input: crate::model::StepExecutionStatusDetail,
        ) -> Self {
            self.execution_status_detail = Some(input);
            self
        }
        pub fn set_execution_status_detail(
            mut self,
            input: std::option::Option<crate::model::StepExecutionStatusDetail>,
        ) -> Self {
            self.execution_status_detail = input;
            self
        }
        pub fn get_execution_status_detail(
            &self,
        ) -> &std::option::Option<crate::model::StepExecutionStatusDetail> {
            &self.execution_status_detail
        }
        /// Consumes the builder and constructs a [`StepDetail`](crate::model::StepDetail)
        pub fn build(self) -> crate::model::StepDetail {
            crate::model::StepDetail {
                step_config: self.step_config,
                execution_status_detail: self.execution_status_detail,
            }
        }
    }
}
impl StepDetail {
    /// Creates a new builder-style object to manufacture [`StepDetail`](crate::model::StepDetail)
    pub fn builder() -> crate::model::step_detail::Builder {
        crate::model::step_detail::Builder::default()
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
pub enum StepExecutionState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Continue,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    #[allow(missing_docs)] // documentation missing in model
    Interrupted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for StepExecutionState {
    fn from(s: &str) -> Self {
        match s {
            "PENDING" => StepExecutionState::Pending,
            "RUNNING" => StepExecutionState::Running,
            "CONTINUE" => StepExecutionState::Continue,
            "COMPLETED" => StepExecutionState::Completed,
            "CANCELLED" => StepExecutionState::Cancelled,
            "FAILED" => StepExecutionState::Failed,
            "INTERRUPTED" => StepExecutionState::Interrupted,
            other => StepExecutionState::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for StepExecutionState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StepExecutionState::from(s))
    }
}
impl StepExecutionState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            StepExecutionState::Pending => "PENDING",
            StepExecutionState::Running => "RUNNING",
            StepExecutionState::Continue => "CONTINUE",
            StepExecutionState::Completed => "COMPLETED",
            StepExecutionState::Cancelled => "CANCELLED",
            StepExecutionState::Failed => "FAILED",
            StepExecutionState::Interrupted => "INTERRUPTED",
            StepExecutionState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["PENDING", "RUNNING", "CONTINUE", "COMPLETED", "CANCELLED", "FAILED", "INTERRUPTED"]
    }
}
impl AsRef<str> for StepExecutionState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for StepExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for StepExecutionState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for StepExecutionState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The execution state of a step.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepExecutionStatusDetail {
    /// <p>The state of the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::StepExecutionState>,
    /// <p>The creation date and time of the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The start date and time of the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub start_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The completion date and time of the step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>A description of the step's current state.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub last_state_change_reason: std::option::Option<std::string::String>,
}
impl StepExecutionStatusDetail {
    /// <p>The state of the step.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::StepExecutionState> {
        self.state.as_ref()
    }
    /// <p>The creation date and time of the step.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The start date and time of the step.</p>
    pub fn start_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.start_date_time
    }
    /// <p>The completion date and time of the step.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
    /// <p>A description of the step's current state.</p>
    pub fn last_state_change_reason(&self) -> std::option::Option<&str> {
        self.last_state_change_reason.as_deref()
    }
}
impl std::fmt::Debug for StepExecutionStatusDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepExecutionStatusDetail");
        formatter.field("state", &self.state);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("start_date_time", &self.start_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.field("last_state_change_reason", &self.last_state_change_reason);
        formatter.finish()
    }
}
impl std::fmt::Display for StepExecutionStatusDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("StartDateTime", &self.start_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.field("LastStateChangeReason", &self.last_state_change_reason);
        shape.finish()
    }
}
/// See [`StepExecutionStatusDetail`](crate::model::StepExecutionStatusDetail)
pub mod step_execution_status_detail {
    /// A builder for [`StepExecutionStatusDetail`](crate::model::StepExecutionStatusDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::StepExecutionState>,
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) start_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) last_state_change_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The state of the step.</p>
        pub fn state(mut self, input: impl Into<crate::model::StepExecutionState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(
            mut self,
            input: std::option::Option<crate::model::StepExecutionState>,
        ) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::StepExecutionState> {
            &self.state
        }
        /// <p>The creation date and time of the step.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The start date and time of the step.</p>
        pub fn start_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_date_time = Some(input);
            self
        }
        pub fn set_start_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.start_date_time = input;
            self
        }
        pub fn get_start_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.start_date_time
        }
        /// <p>The completion date and time of the step.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// <p>A description of the step's current state.</p>
        pub fn last_state_change_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_state_change_reason = Some(input.into());
            self
        }
        pub fn set_last_state_change_reason(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.last_state_change_reason = input;
            self
        }
        pub fn get_last_state_change_reason(&self) -> &std::option::Option<std::string::String> {
            &self.last_state_change_reason
        }
        /// Consumes the builder and constructs a [`StepExecutionStatusDetail`](crate::model::StepExecutionStatusDetail)
        pub fn build(self) -> crate::model::StepExecutionStatusDetail {
            crate::model::StepExecutionStatusDetail {
                state: self.state,
                creation_date_time: self.creation_date_time,
                start_date_time: self.start_date_time,
                end_date_time: self.end_date_time,
                last_state_change_reason: self.last_state_change_reason,
            }
        }
    }
}
impl StepExecutionStatusDetail {
    /// Creates a new builder-style object to manufacture [`StepExecutionStatusDetail`](crate::model::StepExecutionStatusDetail)
    pub fn builder() -> crate::model::step_execution_status_detail::Builder {
        crate::model::step_execution_status_detail::Builder::default()
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
pub enum StepState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    CancelPending,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    #[allow(missing_docs)] // documentation missing in model
    Interrupted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for StepState {
    fn from(s: &str) -> Self {
        match s {
            "PENDING" => StepState::Pending,
            "CANCEL_PENDING" => StepState::CancelPending,
            "RUNNING" => StepState::Running,
            "COMPLETED" => StepState::Completed,
            "CANCELLED" => StepState::Cancelled,
            "FAILED" => StepState::Failed,
            "INTERRUPTED" => StepState::Interrupted,
            other => StepState::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for StepState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StepState::from(s))
    }
}
impl StepState {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            StepState::Pending => "PENDING",
            StepState::CancelPending => "CANCEL_PENDING",
            StepState::Running => "RUNNING",
            StepState::Completed => "COMPLETED",
            StepState::Cancelled => "CANCELLED",
            StepState::Failed => "FAILED",
            StepState::Interrupted => "INTERRUPTED",
            StepState::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["PENDING", "CANCEL_PENDING", "RUNNING", "COMPLETED", "CANCELLED", "FAILED", "INTERRUPTED"]
    }
}
impl AsRef<str> for StepState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for StepState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for StepState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for StepState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The details of the step state change reason.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepStateChangeReason {
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub code: std::option::Option<crate::model::StepStateChangeReasonCode>,
    /// <p>The descriptive message for the state change reason.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl StepStateChangeReason {
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub fn code(&self) -> std::option::Option<&crate::model::StepStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for StepStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepStateChangeReason");
        formatter.field("code", &self.code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for StepStateChangeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Code", &self.code);
        shape.field("Message", &self.message);
        shape.finish()
    }
}
/// See [`StepStateChangeReason`](crate::model::StepStateChangeReason)
pub mod step_state_change_reason {
    /// A builder for [`StepStateChangeReason`](crate::model::StepStateChangeReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) code: std::option::Option<crate::model::StepStateChangeReasonCode>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
        pub fn code(mut self, input: impl Into<crate::model::StepStateChangeReasonCode>) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(
            mut self,
            input: std::option::Option<crate::model::StepStateChangeReasonCode>,
        ) -> Self {
            self.code = input;
            self
        }
        pub fn get_code(&self) -> &std::option::Option<crate::model::StepStateChangeReasonCode> {
            &self.code
        }
        /// <p>The descriptive message for the state change reason.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &std::option::Option<std::string::String> {
            &self.message
        }
        /// Consumes the builder and constructs a [`StepStateChangeReason`](crate::model::StepStateChangeReason)
        pub fn build(self) -> crate::model::StepStateChangeReason {
            crate::model::StepStateChangeReason {
                code: self.code,
                message: self.message,
            }
        }
    }
}
impl StepStateChangeReason {
    /// Creates a new builder-style object to manufacture [`StepStateChangeReason`](crate::model::StepStateChangeReason)
    pub fn builder() -> crate::model::step_state_change_reason::Builder {
        crate::model::step_state_change_reason::Builder::default()
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
pub enum StepStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    None,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for StepStateChangeReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => StepStateChangeReasonCode::None,
            other => StepStateChangeReasonCode::Unknown(
                crate::model::UnknownVariantValue(other.to_owned()),
            ),
        }
    }
}
impl std::str::FromStr for StepStateChangeReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StepStateChangeReasonCode::from(s))
    }
}
impl StepStateChangeReasonCode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            StepStateChangeReasonCode::None => "NONE",
            StepStateChangeReasonCode::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NONE"]
    }
}
impl AsRef<str> for StepStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for StepStateChangeReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for StepStateChangeReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for StepStateChangeReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>The execution status details of the cluster step.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepStatus {
    /// <p>The execution state of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state: std::option::Option<crate::model::StepState>,
    /// <p>The reason for the step execution status change.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub state_change_reason: std::option::Option<crate::model::StepStateChangeReason>,
    /// <p>The details for the step failure including reason, message, and log file path where the root cause was identified.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub failure_details: std::option::Option<crate::model::FailureDetails>,
    /// <p>The timeline of the cluster step status over time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub timeline: std::option::Option<crate::model::StepTimeline>,
}
impl StepStatus {
    /// <p>The execution state of the cluster step.</p>
    pub fn state(&self) -> std::option::Option<&crate::model::StepState> {
        self.state.as_ref()
    }
    /// <p>The reason for the step execution status change.</p>
    pub fn state_change_reason(&self) -> std::option::Option<&crate::model::StepStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>The details for the step failure including reason, message, and log file path where the root cause was identified.</p>
    pub fn failure_details(&self) -> std::option::Option<&crate::model::FailureDetails> {
        self.failure_details.as_ref()
    }
    /// <p>The timeline of the cluster step status over time.</p>
    pub fn timeline(&self) -> std::option::Option<&crate::model::StepTimeline> {
        self.timeline.as_ref()
    }
}
impl std::fmt::Debug for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepStatus");
        formatter.field("state", &self.state);
        formatter.field("state_change_reason", &self.state_change_reason);
        formatter.field("failure_details", &self.failure_details);
        formatter.field("timeline", &self.timeline);
        formatter.finish()
    }
}
impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("State", &self.state);
        shape.field("StateChangeReason", &self.state_change_reason);
        shape.field("FailureDetails", &self.failure_details);
        shape.field("Timeline", &self.timeline);
        shape.finish()
    }
}
/// See [`StepStatus`](crate::model::StepStatus)
pub mod step_status {
    /// A builder for [`StepStatus`](crate::model::StepStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: std::option::Option<crate::model::StepState>,
        pub(crate) state_change_reason: std::option::Option<crate::model::StepStateChangeReason>,
        pub(crate) failure_details: std::option::Option<crate::model::FailureDetails>,
        pub(crate) timeline: std::option::Option<crate::model::StepTimeline>,
    }
    impl Builder {
        /// <p>The execution state of the cluster step.</p>
        pub fn state(mut self, input: impl Into<crate::model::StepState>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::StepState>) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &std::option::Option<crate::model::StepState> {
            &self.state
        }
        /// <p>The reason for the step execution status change.</p>
        pub fn state_change_reason(mut self, input: crate::model::StepStateChangeReason) -> Self {
            self.state_change_reason = Some(input);
            self
        }
        pub fn set_state_change_reason(
            mut self,
            input: std::option::Option<crate::model::StepStateChangeReason>,
        ) -> Self {
            self.state_change_reason = input;
            self
        }
        pub fn get_state_change_reason(
            &self,
        ) -> &std::option::Option<crate::model::StepStateChangeReason> {
            &self.state_change_reason
        }
        /// <p>The details for the step failure including reason, message, and log file path where the root cause was identified.</p>
        pub fn failure_details(mut self, input: crate::model::FailureDetails) -> Self {
            self.failure_details = Some(input);
            self
        }
        pub fn set_failure_details(
            mut self,
            input: std::option::Option<crate::model::FailureDetails>,
        ) -> Self {
            self.failure_details = input;
            self
        }
        pub fn get_failure_details(&self) -> &std::option::Option<crate::model::FailureDetails> {
            &self.failure_details
        }
        /// <p>The timeline of the cluster step status over time.</p>
        pub fn timeline(mut self, input: crate::model::StepTimeline) -> Self {
            self.timeline = Some(input);
            self
        }
        pub fn set_timeline(
            mut self,
            input: std::option::Option<crate::model::StepTimeline>,
        ) -> Self {
            self.timeline = input;
            self
        }
        pub fn get_timeline(&self) -> &std::option::Option<crate::model::StepTimeline> {
            &self.timeline
        }
        /// Consumes the builder and constructs a [`StepStatus`](crate::model::StepStatus)
        pub fn build(self) -> crate::model::StepStatus {
            crate::model::StepStatus {
                state: self.state,
                state_change_reason: self.state_change_reason,
                failure_details: self.failure_details,
                timeline: self.timeline,
            }
        }
    }
}
impl StepStatus {
    /// Creates a new builder-style object to manufacture [`StepStatus`](crate::model::StepStatus)
    pub fn builder() -> crate::model::step_status::Builder {
        crate::model::step_status::Builder::default()
    }
}

/// <p>The summary of the cluster step.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepSummary {
    /// <p>The identifier of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The Hadoop job configuration of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub config: std::option::Option<crate::model::HadoopStepConfig>,
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is available for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
    /// <p>The current execution status details of the cluster step.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub status: std::option::Option<crate::model::StepStatus>,
}
impl StepSummary {
    /// <p>The identifier of the cluster step.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster step.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn config(&self) -> std::option::Option<&crate::model::HadoopStepConfig> {
        self.config.as_ref()
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is available for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
    pub fn action_on_failure(&self) -> std::option::Option<&crate::model::ActionOnFailure> {
        self.action_on_failure.as_ref()
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::StepStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Debug for StepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepSummary");
        formatter.field("id", &self.id);
        formatter.field("name", &self.name);
        formatter.field("config", &self.config);
        formatter.field("action_on_failure", &self.action_on_failure);
        formatter.field("status", &self.status);
        formatter.finish()
    }
}
impl std::fmt::Display for StepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("Config", &self.config);
        shape.field("ActionOnFailure", &self.action_on_failure);
        shape.field("Status", &self.status);
        shape.finish()
    }
}
/// See [`StepSummary`](crate::model::StepSummary)
pub mod step_summary {
    /// A builder for [`StepSummary`](crate::model::StepSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) config: std::option::Option<crate::model::HadoopStepConfig>,
        pub(crate) action_on_failure: std::option::Option<crate::model::ActionOnFailure>,
        pub(crate) status: std::option::Option<crate::model::StepStatus>,
    }
    impl Builder {
        /// <p>The identifier of the cluster step.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the cluster step.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The Hadoop job configuration of the cluster step.</p>
        pub fn config(mut self, input: crate::model::HadoopStepConfig) -> Self {
            self.config = Some(input);
            self
        }
        pub fn set_config(
            mut self,
            input: std::option::Option<crate::model::HadoopStepConfig>,
        ) -> Self {
            self.config = input;
            self
        }
        pub fn get_config(&self) -> &std::option::Option<crate::model::HadoopStepConfig> {
            &self.config
        }
        /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is available for backward compatibility. We recommend using TERMINATE_CLUSTER instead.</p>
        pub fn action_on_failure(
            mut self,
            input: impl Into<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = Some(input.into());
            self
        }
        pub fn set_action_on_failure(
            mut self,
            input: std::option::Option<crate::model::ActionOnFailure>,
        ) -> Self {
            self.action_on_failure = input;
            self
        }
        pub fn get_action_on_failure(&self) -> &std::option::Option<crate::model::ActionOnFailure> {
            &self.action_on_failure
        }
        /// <p>The current execution status details of the cluster step.</p>
        pub fn status(mut self, input: crate::model::StepStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::StepStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn get_status(&self) -> &std::option::Option<crate::model::StepStatus> {
            &self.status
        }
        /// Consumes the builder and constructs a [`StepSummary`](crate::model::StepSummary)
        pub fn build(self) -> crate::model::StepSummary {
            crate::model::StepSummary {
                id: self.id,
                name: self.name,
                config: self.config,
                action_on_failure: self.action_on_failure,
                status: self.status,
            }
        }
    }
}
impl StepSummary {
    /// Creates a new builder-style object to manufacture [`StepSummary`](crate::model::StepSummary)
    pub fn builder() -> crate::model::step_summary::Builder {
        crate::model::step_summary::Builder::default()
    }
}

/// <p>The timeline of the cluster step lifecycle.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct StepTimeline {
    /// <p>The date and time when the cluster step was created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the cluster step execution started.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub start_date_time: std::option::Option<smithy_types::Instant>,
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub end_date_time: std::option::Option<smithy_types::Instant>,
}
impl StepTimeline {
    /// <p>The date and time when the cluster step was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
    /// <p>The date and time when the cluster step execution started.</p>
    pub fn start_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.start_date_time
    }
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub fn end_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.end_date_time
    }
}
impl std::fmt::Debug for StepTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StepTimeline");
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.field("start_date_time", &self.start_date_time);
        formatter.field("end_date_time", &self.end_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for StepTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.field("StartDateTime", &self.start_date_time);
        shape.field("EndDateTime", &self.end_date_time);
        shape.finish()
    }
}
/// See [`StepTimeline`](crate::model::StepTimeline)
pub mod step_timeline {
    /// A builder for [`StepTimeline`](crate::model::StepTimeline)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) creation_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) start_date_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        /// <p>The date and time when the cluster step was created.</p>
        pub fn creation_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(input);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = input;
            self
        }
        pub fn get_creation_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.creation_date_time
        }
        /// <p>The date and time when the cluster step execution started.</p>
        pub fn start_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_date_time = Some(input);
            self
        }
        pub fn set_start_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.start_date_time = input;
            self
        }
        pub fn get_start_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.start_date_time
        }
        /// <p>The date and time when the cluster step execution completed or failed.</p>
        pub fn end_date_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_date_time = Some(input);
            self
        }
        pub fn set_end_date_time(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.end_date_time = input;
            self
        }
        pub fn get_end_date_time(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.end_date_time
        }
        /// Consumes the builder and constructs a [`StepTimeline`](crate::model::StepTimeline)
        pub fn build(self) -> crate::model::StepTimeline {
            crate::model::StepTimeline {
                creation_date_time: self.creation_date_time,
                start_date_time: self.start_date_time,
                end_date_time: self.end_date_time,
            }
        }
    }
}
impl StepTimeline {
    /// Creates a new builder-style object to manufacture [`StepTimeline`](crate::model::StepTimeline)
    pub fn builder() -> crate::model::step_timeline::Builder {
        crate::model::step_timeline::Builder::default()
    }
}

/// <p>The list of supported product configurations which allow user-supplied arguments. EMR accepts these arguments and forwards them to the corresponding installation script as bootstrap action arguments.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct SupportedProductConfig {
    /// <p>The name of the product configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The list of user-supplied arguments.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub args: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl SupportedProductConfig {
    /// <p>The name of the product configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The list of user-supplied arguments.</p>
    pub fn args(&self) -> std::option::Option<&[std::string::String]> {
        self.args.as_deref()
    }
}
impl std::fmt::Debug for SupportedProductConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SupportedProductConfig");
        formatter.field("name", &self.name);
        formatter.field("args", &self.args);
        formatter.finish()
    }
}
impl std::fmt::Display for SupportedProductConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.list("Args", &self.args);
        shape.finish()
    }
}
/// See [`SupportedProductConfig`](crate::model::SupportedProductConfig)
pub mod supported_product_config {
    /// A builder for [`SupportedProductConfig`](crate::model::SupportedProductConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) args: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The name of the product configuration.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// Appends an item to `args`.
        ///
        /// To override the contents of this collection use [`set_args`](Self::set_args).
        ///
        /// <p>The list of user-supplied arguments.</p>
        pub fn args(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.args.unwrap_or_default();
            v.push(input.into());
            self.args = Some(v);
            self
        }
        pub fn set_args(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.args = input;
            self
        }
        pub fn get_args(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.args
        }
        /// Consumes the builder and constructs a [`SupportedProductConfig`](crate::model::SupportedProductConfig)
        pub fn build(self) -> crate::model::SupportedProductConfig {
            crate::model::SupportedProductConfig {
                name: self.name,
                args: self.args,
            }
        }
    }
}
impl SupportedProductConfig {
    /// Creates a new builder-style object to manufacture [`SupportedProductConfig`](crate::model::SupportedProductConfig)
    pub fn builder() -> crate::model::supported_product_config::Builder {
        crate::model::supported_product_config::Builder::default()
    }
}

/// <p>A key/value pair containing user-defined metadata that you can associate with an Amazon EMR resource. Tags make it easier to associate clusters in various ways, such as grouping clusters to track your Amazon EMR resource allocation costs. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag Clusters</a>.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct Tag {
    /// <p>A user-defined key, which is the minimum required information for a valid tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub key: std::option::Option<std::string::String>,
    /// <p>A user-defined value, which is optional in a tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag Clusters</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub value: std::option::Option<std::string::String>,
}
impl Tag {
    /// <p>A user-defined key, which is the minimum required information for a valid tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag</a>.</p>
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>A user-defined value, which is optional in a tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag Clusters</a>.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Key", &self.key);
        shape.field("Value", &self.value);
        shape.finish()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A user-defined key, which is the minimum required information for a valid tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag</a>.</p>
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn get_key(&self) -> &std::option::Option<std::string::String> {
            &self.key
        }
        /// <p>A user-defined value, which is optional in a tag. For more information, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-plan-tags.html">Tag Clusters</a>.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        pub fn get_value(&self) -> &std::option::Option<std::string::String> {
            &self.value
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
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
pub enum Unit {
    #[allow(missing_docs)] // documentation missing in model
    None,
    #[allow(missing_docs)] // documentation missing in model
    Seconds,
    #[allow(missing_docs)] // documentation missing in model
    MicroSeconds,
    #[allow(missing_docs)] // documentation missing in model
    MilliSeconds,
    #[allow(missing_docs)] // documentation missing in model
    Bytes,
    #[allow(missing_docs)] // documentation missing in model
    KiloBytes,
    #[allow(missing_docs)] // documentation missing in model
    MegaBytes,
    #[allow(missing_docs)] // documentation missing in model
    GigaBytes,
    #[allow(missing_docs)] // documentation missing in model
    TeraBytes,
    #[allow(missing_docs)] // documentation missing in model
    Bits,
    #[allow(missing_docs)] // documentation missing in model
    KiloBits,
    #[allow(missing_docs)] // documentation missing in model
    MegaBits,
    #[allow(missing_docs)] // documentation missing in model
    GigaBits,
    #[allow(missing_docs)] // documentation missing in model
    TeraBits,
    #[allow(missing_docs)] // documentation missing in model
    Percent,
    #[allow(missing_docs)] // documentation missing in model
    Count,
    #[allow(missing_docs)] // documentation missing in model
    BytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    KiloBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    MegaBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    GigaBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    TeraBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    BitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    KiloBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    MegaBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    GigaBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    TeraBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    CountPerSecond,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(crate::model::UnknownVariantValue),
}
impl std::convert::From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => Unit::None,
            "SECONDS" => Unit::Seconds,
            "MICRO_SECONDS" => Unit::MicroSeconds,
            "MILLI_SECONDS" => Unit::MilliSeconds,
            "BYTES" => Unit::Bytes,
            "KILO_BYTES" => Unit::KiloBytes,
            "MEGA_BYTES" => Unit::MegaBytes,
            "GIGA_BYTES" => Unit::GigaBytes,
            "TERA_BYTES" => Unit::TeraBytes,
            "BITS" => Unit::Bits,
            "KILO_BITS" => Unit::KiloBits,
            "MEGA_BITS" => Unit::MegaBits,
            "GIGA_BITS" => Unit::GigaBits,
            "TERA_BITS" => Unit::TeraBits,
            "PERCENT" => Unit::Percent,
            "COUNT" => Unit::Count,
            "BYTES_PER_SECOND" => Unit::BytesPerSecond,
            "KILO_BYTES_PER_SECOND" => Unit::KiloBytesPerSecond,
            "MEGA_BYTES_PER_SECOND" => Unit::MegaBytesPerSecond,
            "GIGA_BYTES_PER_SECOND" => Unit::GigaBytesPerSecond,
            "TERA_BYTES_PER_SECOND" => Unit::TeraBytesPerSecond,
            "BITS_PER_SECOND" => Unit::BitsPerSecond,
            "KILO_BITS_PER_SECOND" => Unit::KiloBitsPerSecond,
            "MEGA_BITS_PER_SECOND" => Unit::MegaBitsPerSecond,
            "GIGA_BITS_PER_SECOND" => Unit::GigaBitsPerSecond,
            "TERA_BITS_PER_SECOND" => Unit::TeraBitsPerSecond,
            "COUNT_PER_SECOND" => Unit::CountPerSecond,
            other => Unit::Unknown(crate::model::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl std::str::FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Unit::from(s))
    }
}
impl Unit {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::None => "NONE",
            Unit::Seconds => "SECONDS",
            Unit::MicroSeconds => "MICRO_SECONDS",
            Unit::MilliSeconds => "MILLI_SECONDS",
            Unit::Bytes => "BYTES",
            Unit::KiloBytes => "KILO_BYTES",
            Unit::MegaBytes => "MEGA_BYTES",
            Unit::GigaBytes => "GIGA_BYTES",
            Unit::TeraBytes => "TERA_BYTES",
            Unit::Bits => "BITS",
            Unit::KiloBits => "KILO_BITS",
            Unit::MegaBits => "MEGA_BITS",
            Unit::GigaBits => "GIGA_BITS",
            Unit::TeraBits => "TERA_BITS",
            Unit::Percent => "PERCENT",
            Unit::Count => "COUNT",
            Unit::BytesPerSecond => "BYTES_PER_SECOND",
            Unit::KiloBytesPerSecond => "KILO_BYTES_PER_SECOND",
            Unit::MegaBytesPerSecond => "MEGA_BYTES_PER_SECOND",
            Unit::GigaBytesPerSecond => "GIGA_BYTES_PER_SECOND",
            Unit::TeraBytesPerSecond => "TERA_BYTES_PER_SECOND",
            Unit::BitsPerSecond => "BITS_PER_SECOND",
            Unit::KiloBitsPerSecond => "KILO_BITS_PER_SECOND",
            Unit::MegaBitsPerSecond => "MEGA_BITS_PER_SECOND",
            Unit::GigaBitsPerSecond => "GIGA_BITS_PER_SECOND",
            Unit::TeraBitsPerSecond => "TERA_BITS_PER_SECOND",
            Unit::CountPerSecond => "COUNT_PER_SECOND",
            Unit::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &[
            "NONE",
            "SECONDS",
            "MICRO_SECONDS",
            "MILLI_SECONDS",
            "BYTES",
            "KILO_BYTES",
            "MEGA_BYTES",
            "GIGA_BYTES",
            "TERA_BYTES",
            "BITS",
            "KILO_BITS",
            "MEGA_BITS",
            "GIGA_BITS",
            "TERA_BITS",
            "PERCENT",
            "COUNT",
            "BYTES_PER_SECOND",
            "KILO_BYTES_PER_SECOND",
            "MEGA_BYTES_PER_SECOND",
            "GIGA_BYTES_PER_SECOND",
            "TERA_BYTES_PER_SECOND",
            "BITS_PER_SECOND",
            "KILO_BITS_PER_SECOND",
            "MEGA_BITS_PER_SECOND",
            "GIGA_BITS_PER_SECOND",
            "TERA_BITS_PER_SECOND",
            "COUNT_PER_SECOND",
        ]
    }
}
impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::cmp::Eq,
    std::default::Default,
    std::hash::Hash,
)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct VolumeSpecification {
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub volume_type: std::option::Option<std::string::String>,
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub iops: std::option::Option<i32>,
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "SizeInGB")
    )]
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub size_in_gb: std::option::Option<i32>,
}
impl VolumeSpecification {
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub fn volume_type(&self) -> std::option::Option<&str> {
        self.volume_type.as_deref()
    }
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn iops(&self) -> std::option::Option<i32> {
        self.iops
    }
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub fn size_in_gb(&self) -> std::option::Option<i32> {
        self.size_in_gb
    }
}
impl std::fmt::Debug for VolumeSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VolumeSpecification");
        formatter.field("volume_type", &self.volume_type);
        formatter.field("iops", &self.iops);
        formatter.field("size_in_gb", &self.size_in_gb);
        formatter.finish()
    }
}
impl std::fmt::Display for VolumeSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("VolumeType", &self.volume_type);
        shape.field("Iops", &self.iops);
        shape.field("SizeInGB", &self.size_in_gb);
        shape.finish()
    }
}
/// See [`VolumeSpecification`](crate::model::VolumeSpecification)
pub mod volume_specification {
    /// A builder for [`VolumeSpecification`](crate::model::VolumeSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) volume_type: std::option::Option<std::string::String>,
        pub(crate) iops: std::option::Option<i32>,
        pub(crate) size_in_gb: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
        pub fn volume_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        pub fn set_volume_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_type = input;
            self
        }
        pub fn get_volume_type(&self) -> &std::option::Option<std::string::String> {
            &self.volume_type
        }
        /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
        pub fn iops(mut self, input: i32) -> Self {
            self.iops = Some(input);
            self
        }
        pub fn set_iops(mut self, input: std::option::Option<i32>) -> Self {
            self.iops = input;
            self
        }
        pub fn get_iops(&self) -> &std::option::Option<i32> {
            &self.iops
        }
        /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
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
        /// Consumes the builder and constructs a [`VolumeSpecification`](crate::model::VolumeSpecification)
        pub fn build(self) -> crate::model::VolumeSpecification {
            crate::model::VolumeSpecification {
                volume_type: self.volume_type,
                iops: self.iops,
                size_in_gb: self.size_in_gb,
            }
        }
    }
}
impl VolumeSpecification {
    /// Creates a new builder-style object to manufacture [`VolumeSpecification`](crate::model::VolumeSpecification)
    pub fn builder() -> crate::model::volume_specification::Builder {
        crate::model::volume_specification::Builder::default()
    }
}
