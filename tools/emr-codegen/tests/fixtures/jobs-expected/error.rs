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
pub struct JobFailed {
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub error_code: std::option::Option<std::string::String>,
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub message: std::option::Option<std::string::String>,
}
impl JobFailed {
    pub fn error_code(&self) -> std::option::Option<&str> {
        self.error_code.as_deref()
    }
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Debug for JobFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JobFailed");
        formatter.field("error_code", &self.error_code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl std::fmt::Display for JobFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JobFailed")?;
        if let Some(code) = &self.error_code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl std::error::Error for JobFailed {}
/// See [`JobFailed`](crate::error::JobFailed)
pub mod job_failed {
    /// A builder for [`JobFailed`](crate::error::JobFailed)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) error_code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn error_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        pub fn set_error_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error_code = input;
            self
        }
        pub fn get_error_code(&self) -> &std::option::Option<std::string::String> {
            &self.error_code
        }
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
        /// Consumes the builder and constructs a [`JobFailed`](crate::error::JobFailed)
        pub fn build(self) -> crate::error::JobFailed {
            crate::error::JobFailed {
                error_code: self.error_code,
                message: self.message,
            }
        }
    }
}
impl JobFailed {
    /// Creates a new builder-style object to manufacture [`JobFailed`](crate::error::JobFailed)
    pub fn builder() -> crate::error::job_failed::Builder {
        crate::error::job_failed::Builder::default()
    }
}
