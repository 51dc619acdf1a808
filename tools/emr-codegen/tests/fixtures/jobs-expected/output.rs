// Code generated by emr-codegen. DO NOT EDIT.
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
pub struct CancelJobOutput {}
impl std::fmt::Debug for CancelJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CancelJobOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for CancelJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`CancelJobOutput`](crate::output::CancelJobOutput)
pub mod cancel_job_output {
    /// A builder for [`CancelJobOutput`](crate::output::CancelJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`CancelJobOutput`](crate::output::CancelJobOutput)
        pub fn build(self) -> crate::output::CancelJobOutput {
            crate::output::CancelJobOutput {}
        }
    }
}
impl CancelJobOutput {
    /// Creates a new builder-style object to manufacture [`CancelJobOutput`](crate::output::CancelJobOutput)
    pub fn builder() -> crate::output::cancel_job_output::Builder {
        crate::output::cancel_job_output::Builder::default()
    }
}

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
pub struct StartJobOutput {
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_id: std::option::Option<std::string::String>,
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub started_at: std::option::Option<smithy_types::Instant>,
}
impl StartJobOutput {
    pub fn job_id(&self) -> std::option::Option<&str> {
        self.job_id.as_deref()
    }
    pub fn started_at(&self) -> std::option::Option<smithy_types::Instant> {
        self.started_at
    }
}
impl std::fmt::Debug for StartJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StartJobOutput");
        formatter.field("job_id", &self.job_id);
        formatter.field("started_at", &self.started_at);
        formatter.finish()
    }
}
impl std::fmt::Display for StartJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("JobId", &self.job_id);
        shape.field("StartedAt", &self.started_at);
        shape.finish()
    }
}
/// See [`StartJobOutput`](crate::output::StartJobOutput)
pub mod start_job_output {
    /// A builder for [`StartJobOutput`](crate::output::StartJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_id: std::option::Option<std::string::String>,
        pub(crate) started_at: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        pub fn get_job_id(&self) -> &std::option::Option<std::string::String> {
            &self.job_id
        }
        pub fn started_at(mut self, input: smithy_types::Instant) -> Self {
            self.started_at = Some(input);
            self
        }
        pub fn set_started_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.started_at = input;
            self
        }
        pub fn get_started_at(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.started_at
        }
        /// Consumes the builder and constructs a [`StartJobOutput`](crate::output::StartJobOutput)
        pub fn build(self) -> crate::output::StartJobOutput {
            crate::output::StartJobOutput {
                job_id: self.job_id,
                started_at: self.started_at,
            }
        }
    }
}
impl StartJobOutput {
    /// Creates a new builder-style object to manufacture [`StartJobOutput`](crate::output::StartJobOutput)
    pub fn builder() -> crate::output::start_job_output::Builder {
        crate::output::start_job_output::Builder::default()
    }
}
