// Code generated by emr-codegen. DO NOT EDIT.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AddInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>Specifies the configuration of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet: std::option::Option<crate::model::InstanceFleetConfig>,
}
impl AddInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub fn instance_fleet(&self) -> std::option::Option<&crate::model::InstanceFleetConfig> {
        self.instance_fleet.as_ref()
    }
}
impl std::fmt::Debug for AddInstanceFleetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddInstanceFleetInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_fleet", &self.instance_fleet);
        formatter.finish()
    }
}
impl std::fmt::Display for AddInstanceFleetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceFleet", &self.instance_fleet);
        shape.finish()
    }
}
/// See [`AddInstanceFleetInput`](crate::input::AddInstanceFleetInput)
pub mod add_instance_fleet_input {
    /// A builder for [`AddInstanceFleetInput`](crate::input::AddInstanceFleetInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_fleet: std::option::Option<crate::model::InstanceFleetConfig>,
    }
    impl Builder {
        /// <p>The unique identifier of the cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>Specifies the configuration of the instance fleet.</p>
        pub fn instance_fleet(mut self, input: crate::model::InstanceFleetConfig) -> Self {
            self.instance_fleet = Some(input);
            self
        }
        pub fn set_instance_fleet(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetConfig>,
        ) -> Self {
            self.instance_fleet = input;
            self
        }
        pub fn get_instance_fleet(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetConfig> {
            &self.instance_fleet
        }
        /// Consumes the builder and constructs a [`AddInstanceFleetInput`](crate::input::AddInstanceFleetInput)
        pub fn build(self) -> crate::input::AddInstanceFleetInput {
            crate::input::AddInstanceFleetInput {
                cluster_id: self.cluster_id,
                instance_fleet: self.instance_fleet,
            }
        }
    }
}
impl AddInstanceFleetInput {
    /// Creates a new builder-style object to manufacture [`AddInstanceFleetInput`](crate::input::AddInstanceFleetInput)
    pub fn builder() -> crate::input::add_instance_fleet_input::Builder {
        crate::input::add_instance_fleet_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct AddInstanceGroupsInput {
    /// <p>Instance groups to add.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>>,
    /// <p>Job flow in which to add the instance groups.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_id: std::option::Option<std::string::String>,
}
impl AddInstanceGroupsInput {
    /// <p>Instance groups to add.</p>
    pub fn instance_groups(&self) -> std::option::Option<&[crate::model::InstanceGroupConfig]> {
        self.instance_groups.as_deref()
    }
    /// <p>Job flow in which to add the instance groups.</p>
    pub fn job_flow_id(&self) -> std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
}
impl std::fmt::Debug for AddInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddInstanceGroupsInput");
        formatter.field("instance_groups", &self.instance_groups);
        formatter.field("job_flow_id", &self.job_flow_id);
        formatter.finish()
    }
}
impl std::fmt::Display for AddInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("InstanceGroups", &self.instance_groups);
        shape.field("JobFlowId", &self.job_flow_id);
        shape.finish()
    }
}
/// See [`AddInstanceGroupsInput`](crate::input::AddInstanceGroupsInput)
pub mod add_instance_groups_input {
    /// A builder for [`AddInstanceGroupsInput`](crate::input::AddInstanceGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupConfig>>,
        pub(crate) job_flow_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instance_groups`.
        ///
        /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
        ///
        /// <p>Instance groups to add.</p>
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
        /// <p>Job flow in which to add the instance groups.</p>
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
        /// Consumes the builder and constructs a [`AddInstanceGroupsInput`](crate::input::AddInstanceGroupsInput)
        pub fn build(self) -> crate::input::AddInstanceGroupsInput {
            crate::input::AddInstanceGroupsInput {
                instance_groups: self.instance_groups,
                job_flow_id: self.job_flow_id,
            }
        }
    }
}
impl AddInstanceGroupsInput {
    /// Creates a new builder-style object to manufacture [`AddInstanceGroupsInput`](crate::input::AddInstanceGroupsInput)
    pub fn builder() -> crate::input::add_instance_groups_input::Builder {
        crate::input::add_instance_groups_input::Builder::default()
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
pub struct AddJobFlowStepsInput {
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>ListClusters</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_id: std::option::Option<std::string::String>,
    /// <p>A list of <a>StepConfig</a> to be executed by the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub steps: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
}
impl AddJobFlowStepsInput {
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>ListClusters</a>.</p>
    pub fn job_flow_id(&self) -> std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>A list of <a>StepConfig</a> to be executed by the job flow.</p>
    pub fn steps(&self) -> std::option::Option<&[crate::model::StepConfig]> {
        self.steps.as_deref()
    }
}
impl std::fmt::Debug for AddJobFlowStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddJobFlowStepsInput");
        formatter.field("job_flow_id", &self.job_flow_id);
        formatter.field("steps", &self.steps);
        formatter.finish()
    }
}
impl std::fmt::Display for AddJobFlowStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("JobFlowId", &self.job_flow_id);
        shape.list("Steps", &self.steps);
        shape.finish()
    }
}
/// See [`AddJobFlowStepsInput`](crate::input::AddJobFlowStepsInput)
pub mod add_job_flow_steps_input {
    /// A builder for [`AddJobFlowStepsInput`](crate::input::AddJobFlowStepsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_id: std::option::Option<std::string::String>,
        pub(crate) steps: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
    }
    impl Builder {
        /// <p>A string that uniquely identifies the job flow. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>ListClusters</a>.</p>
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
        /// Appends an item to `steps`.
        ///
        /// To override the contents of this collection use [`set_steps`](Self::set_steps).
        ///
        /// <p>A list of <a>StepConfig</a> to be executed by the job flow.</p>
        pub fn steps(mut self, input: impl Into<crate::model::StepConfig>) -> Self {
            let mut v = self.steps.unwrap_or_default();
            v.push(input.into());
            self.steps = Some(v);
            self
        }
        pub fn set_steps(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
        ) -> Self {
            self.steps = input;
            self
        }
        pub fn get_steps(&self) -> &std::option::Option<std::vec::Vec<crate::model::StepConfig>> {
            &self.steps
        }
        /// Consumes the builder and constructs a [`AddJobFlowStepsInput`](crate::input::AddJobFlowStepsInput)
        pub fn build(self) -> crate::input::AddJobFlowStepsInput {
            crate::input::AddJobFlowStepsInput {
                job_flow_id: self.job_flow_id,
                steps: self.steps,
            }
        }
    }
}
impl AddJobFlowStepsInput {
    /// Creates a new builder-style object to manufacture [`AddJobFlowStepsInput`](crate::input::AddJobFlowStepsInput)
    pub fn builder() -> crate::input::add_job_flow_steps_input::Builder {
        crate::input::add_job_flow_steps_input::Builder::default()
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
pub struct AddTagsInput {
    /// <p>The Amazon EMR resource identifier to which tags will be added. This value must be a cluster identifier.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub resource_id: std::option::Option<std::string::String>,
    /// <p>A list of tags to associate with a cluster and propagate to EC2 instances. Tags are user-defined key/value pairs that consist of a required key string with a maximum of 128 characters, and an optional value string with a maximum of 256 characters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl AddTagsInput {
    /// <p>The Amazon EMR resource identifier to which tags will be added. This value must be a cluster identifier.</p>
    pub fn resource_id(&self) -> std::option::Option<&str> {
        self.resource_id.as_deref()
    }
    /// <p>A list of tags to associate with a cluster and propagate to EC2 instances. Tags are user-defined key/value pairs that consist of a required key string with a maximum of 128 characters, and an optional value string with a maximum of 256 characters.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for AddTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddTagsInput");
        formatter.field("resource_id", &self.resource_id);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
impl std::fmt::Display for AddTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ResourceId", &self.resource_id);
        shape.list("Tags", &self.tags);
        shape.finish()
    }
}
/// See [`AddTagsInput`](crate::input::AddTagsInput)
pub mod add_tags_input {
    /// A builder for [`AddTagsInput`](crate::input::AddTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The Amazon EMR resource identifier to which tags will be added. This value must be a cluster identifier.</p>
        pub fn resource_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(input.into());
            self
        }
        pub fn set_resource_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_id = input;
            self
        }
        pub fn get_resource_id(&self) -> &std::option::Option<std::string::String> {
            &self.resource_id
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A list of tags to associate with a cluster and propagate to EC2 instances. Tags are user-defined key/value pairs that consist of a required key string with a maximum of 128 characters, and an optional value string with a maximum of 256 characters.</p>
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
        /// Consumes the builder and constructs a [`AddTagsInput`](crate::input::AddTagsInput)
        pub fn build(self) -> crate::input::AddTagsInput {
            crate::input::AddTagsInput {
                resource_id: self.resource_id,
                tags: self.tags,
            }
        }
    }
}
impl AddTagsInput {
    /// Creates a new builder-style object to manufacture [`AddTagsInput`](crate::input::AddTagsInput)
    pub fn builder() -> crate::input::add_tags_input::Builder {
        crate::input::add_tags_input::Builder::default()
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
pub struct CancelStepsInput {
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <a>RunJobFlow</a> and <a>ListClusters</a> to get ClusterIDs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The list of <code>StepIDs</code> to cancel. Use <a>ListSteps</a> to get steps and their states for the specified cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_cancellation_option: std::option::Option<crate::model::StepCancellationOption>,
}
impl CancelStepsInput {
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <a>RunJobFlow</a> and <a>ListClusters</a> to get ClusterIDs.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The list of <code>StepIDs</code> to cancel. Use <a>ListSteps</a> to get steps and their states for the specified cluster.</p>
    pub fn step_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.step_ids.as_deref()
    }
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub fn step_cancellation_option(
        &self,
    ) -> std::option::Option<&crate::model::StepCancellationOption> {
        self.step_cancellation_option.as_ref()
    }
}
impl std::fmt::Debug for CancelStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CancelStepsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("step_ids", &self.step_ids);
        formatter.field("step_cancellation_option", &self.step_cancellation_option);
        formatter.finish()
    }
}
impl std::fmt::Display for CancelStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.list("StepIds", &self.step_ids);
        shape.field("StepCancellationOption", &self.step_cancellation_option);
        shape.finish()
    }
}
/// See [`CancelStepsInput`](crate::input::CancelStepsInput)
pub mod cancel_steps_input {
    /// A builder for [`CancelStepsInput`](crate::input::CancelStepsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) step_cancellation_option: std::option::Option<crate::model::StepCancellationOption>,
    }
    impl Builder {
        /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <a>RunJobFlow</a> and <a>ListClusters</a> to get ClusterIDs.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Appends an item to `step_ids`.
        ///
        /// To override the contents of this collection use [`set_step_ids`](Self::set_step_ids).
        ///
        /// <p>The list of <code>StepIDs</code> to cancel. Use <a>ListSteps</a> to get steps and their states for the specified cluster.</p>
        pub fn step_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.step_ids.unwrap_or_default();
            v.push(input.into());
            self.step_ids = Some(v);
            self
        }
        pub fn set_step_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.step_ids = input;
            self
        }
        pub fn get_step_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.step_ids
        }
        /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
        pub fn step_cancellation_option(
            mut self,
            input: impl Into<crate::model::StepCancellationOption>,
        ) -> Self {
            self.step_cancellation_option = Some(input.into());
            self
        }
        pub fn set_step_cancellation_option(
            mut self,
            input: std::option::Option<crate::model::StepCancellationOption>,
        ) -> Self {
            self.step_cancellation_option = input;
            self
        }
        pub fn get_step_cancellation_option(
            &self,
        ) -> &std::option::Option<crate::model::StepCancellationOption> {
            &self.step_cancellation_option
        }
        /// Consumes the builder and constructs a [`CancelStepsInput`](crate::input::CancelStepsInput)
        pub fn build(self) -> crate::input::CancelStepsInput {
            crate::input::CancelStepsInput {
                cluster_id: self.cluster_id,
                step_ids: self.step_ids,
                step_cancellation_option: self.step_cancellation_option,
            }
        }
    }
}
impl CancelStepsInput {
    /// Creates a new builder-style object to manufacture [`CancelStepsInput`](crate::input::CancelStepsInput)
    pub fn builder() -> crate::input::cancel_steps_input::Builder {
        crate::input::cancel_steps_input::Builder::default()
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
pub struct CreateSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The security configuration details in JSON format. For JSON parameters and examples, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-security-configurations.html">Use Security Configurations to Set Up Cluster Security</a> in the <i>Amazon EMR Management Guide</i>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub security_configuration: std::option::Option<std::string::String>,
}
impl CreateSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The security configuration details in JSON format. For JSON parameters and examples, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-security-configurations.html">Use Security Configurations to Set Up Cluster Security</a> in the <i>Amazon EMR Management Guide</i>.</p>
    pub fn security_configuration(&self) -> std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
}
impl std::fmt::Debug for CreateSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSecurityConfigurationInput");
        formatter.field("name", &self.name);
        formatter.field("security_configuration", &self.security_configuration);
        formatter.finish()
    }
}
impl std::fmt::Display for CreateSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("SecurityConfiguration", &self.security_configuration);
        shape.finish()
    }
}
/// See [`CreateSecurityConfigurationInput`](crate::input::CreateSecurityConfigurationInput)
pub mod create_security_configuration_input {
    /// A builder for [`CreateSecurityConfigurationInput`](crate::input::CreateSecurityConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) security_configuration: std::option::Option<std::string::String>,
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
        /// <p>The security configuration details in JSON format. For JSON parameters and examples, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-security-configurations.html">Use Security Configurations to Set Up Cluster Security</a> in the <i>Amazon EMR Management Guide</i>.</p>
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
        /// Consumes the builder and constructs a [`CreateSecurityConfigurationInput`](crate::input::CreateSecurityConfigurationInput)
        pub fn build(self) -> crate::input::CreateSecurityConfigurationInput {
            crate::input::CreateSecurityConfigurationInput {
                name: self.name,
                security_configuration: self.security_configuration,
            }
        }
    }
}
impl CreateSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`CreateSecurityConfigurationInput`](crate::input::CreateSecurityConfigurationInput)
    pub fn builder() -> crate::input::create_security_configuration_input::Builder {
        crate::input::create_security_configuration_input::Builder::default()
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
pub struct DeleteSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
}
impl DeleteSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for DeleteSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteSecurityConfigurationInput");
        formatter.field("name", &self.name);
        formatter.finish()
    }
}
impl std::fmt::Display for DeleteSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.finish()
    }
}
/// See [`DeleteSecurityConfigurationInput`](crate::input::DeleteSecurityConfigurationInput)
pub mod delete_security_configuration_input {
    /// A builder for [`DeleteSecurityConfigurationInput`](crate::input::DeleteSecurityConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteSecurityConfigurationInput`](crate::input::DeleteSecurityConfigurationInput)
        pub fn build(self) -> crate::input::DeleteSecurityConfigurationInput {
            crate::input::DeleteSecurityConfigurationInput {
                name: self.name,
            }
        }
    }
}
impl DeleteSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`DeleteSecurityConfigurationInput`](crate::input::DeleteSecurityConfigurationInput)
    pub fn builder() -> crate::input::delete_security_configuration_input::Builder {
        crate::input::delete_security_configuration_input::Builder::default()
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
pub struct DescribeClusterInput {
    /// <p>The identifier of the cluster to describe.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
}
impl DescribeClusterInput {
    /// <p>The identifier of the cluster to describe.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl std::fmt::Debug for DescribeClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeClusterInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.finish()
    }
}
/// See [`DescribeClusterInput`](crate::input::DescribeClusterInput)
pub mod describe_cluster_input {
    /// A builder for [`DescribeClusterInput`](crate::input::DescribeClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The identifier of the cluster to describe.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Consumes the builder and constructs a [`DescribeClusterInput`](crate::input::DescribeClusterInput)
        pub fn build(self) -> crate::input::DescribeClusterInput {
            crate::input::DescribeClusterInput {
                cluster_id: self.cluster_id,
            }
        }
    }
}
impl DescribeClusterInput {
    /// Creates a new builder-style object to manufacture [`DescribeClusterInput`](crate::input::DescribeClusterInput)
    pub fn builder() -> crate::input::describe_cluster_input::Builder {
        crate::input::describe_cluster_input::Builder::default()
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
pub struct DescribeJobFlowsInput {
    /// <p>Return only job flows created after this date and time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub created_after: std::option::Option<smithy_types::Instant>,
    /// <p>Return only job flows created before this date and time.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub created_before: std::option::Option<smithy_types::Instant>,
    /// <p>Return only job flows whose job flow ID is contained in this list.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>Return only job flows whose state is contained in this list.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_states: std::option::Option<std::vec::Vec<crate::model::JobFlowExecutionState>>,
}
impl DescribeJobFlowsInput {
    /// <p>Return only job flows created after this date and time.</p>
    pub fn created_after(&self) -> std::option::Option<smithy_types::Instant> {
        self.created_after
    }
    /// <p>Return only job flows created before this date and time.</p>
    pub fn created_before(&self) -> std::option::Option<smithy_types::Instant> {
        self.created_before
    }
    /// <p>Return only job flows whose job flow ID is contained in this list.</p>
    pub fn job_flow_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.job_flow_ids.as_deref()
    }
    /// <p>Return only job flows whose state is contained in this list.</p>
    pub fn job_flow_states(&self) -> std::option::Option<&[crate::model::JobFlowExecutionState]> {
        self.job_flow_states.as_deref()
    }
}
impl std::fmt::Debug for DescribeJobFlowsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeJobFlowsInput");
        formatter.field("created_after", &self.created_after);
        formatter.field("created_before", &self.created_before);
        formatter.field("job_flow_ids", &self.job_flow_ids);
        formatter.field("job_flow_states", &self.job_flow_states);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeJobFlowsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreatedAfter", &self.created_after);
        shape.field("CreatedBefore", &self.created_before);
        shape.list("JobFlowIds", &self.job_flow_ids);
        shape.list("JobFlowStates", &self.job_flow_states);
        shape.finish()
    }
}
/// See [`DescribeJobFlowsInput`](crate::input::DescribeJobFlowsInput)
pub mod describe_job_flows_input {
    /// A builder for [`DescribeJobFlowsInput`](crate::input::DescribeJobFlowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) created_after: std::option::Option<smithy_types::Instant>,
        pub(crate) created_before: std::option::Option<smithy_types::Instant>,
        pub(crate) job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) job_flow_states: std::option::Option<std::vec::Vec<crate::model::JobFlowExecutionState>>,
    }
    impl Builder {
        /// <p>Return only job flows created after this date and time.</p>
        pub fn created_after(mut self, input: smithy_types::Instant) -> Self {
            self.created_after = Some(input);
            self
        }
        pub fn set_created_after(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.created_after = input;
            self
        }
        pub fn get_created_after(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.created_after
        }
        /// <p>Return only job flows created before this date and time.</p>
        pub fn created_before(mut self, input: smithy_types::Instant) -> Self {
            self.created_before = Some(input);
            self
        }
        pub fn set_created_before(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.created_before = input;
            self
        }
        pub fn get_created_before(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.created_before
        }
        /// Appends an item to `job_flow_ids`.
        ///
        /// To override the contents of this collection use [`set_job_flow_ids`](Self::set_job_flow_ids).
        ///
        /// <p>Return only job flows whose job flow ID is contained in this list.</p>
        pub fn job_flow_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.job_flow_ids.unwrap_or_default();
            v.push(input.into());
            self.job_flow_ids = Some(v);
            self
        }
        pub fn set_job_flow_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.job_flow_ids = input;
            self
        }
        pub fn get_job_flow_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.job_flow_ids
        }
        /// Appends an item to `job_flow_states`.
        ///
        /// To override the contents of this collection use [`set_job_flow_states`](Self::set_job_flow_states).
        ///
        /// <p>Return only job flows whose state is contained in this list.</p>
        pub fn job_flow_states(
            mut self,
            input: impl Into<crate::model::JobFlowExecutionState>,
        ) -> Self {
            let mut v = self.job_flow_states.unwrap_or_default();
            v.push(input.into());
            self.job_flow_states = Some(v);
            self
        }
        pub fn set_job_flow_states(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::JobFlowExecutionState>>,
        ) -> Self {
            self.job_flow_states = input;
            self
        }
        pub fn get_job_flow_states(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::JobFlowExecutionState>> {
            &self.job_flow_states
        }
        /// Consumes the builder and constructs a [`DescribeJobFlowsInput`](crate::input::DescribeJobFlowsInput)
        pub fn build(self) -> crate::input::DescribeJobFlowsInput {
            crate::input::DescribeJobFlowsInput {
                created_after: self.created_after,
                created_before: self.created_before,
                job_flow_ids: self.job_flow_ids,
                job_flow_states: self.job_flow_states,
            }
        }
    }
}
impl DescribeJobFlowsInput {
    /// Creates a new builder-style object to manufacture [`DescribeJobFlowsInput`](crate::input::DescribeJobFlowsInput)
    pub fn builder() -> crate::input::describe_job_flows_input::Builder {
        crate::input::describe_job_flows_input::Builder::default()
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
pub struct DescribeSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
}
impl DescribeSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl std::fmt::Debug for DescribeSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeSecurityConfigurationInput");
        formatter.field("name", &self.name);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeSecurityConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.finish()
    }
}
/// See [`DescribeSecurityConfigurationInput`](crate::input::DescribeSecurityConfigurationInput)
pub mod describe_security_configuration_input {
    /// A builder for [`DescribeSecurityConfigurationInput`](crate::input::DescribeSecurityConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeSecurityConfigurationInput`](crate::input::DescribeSecurityConfigurationInput)
        pub fn build(self) -> crate::input::DescribeSecurityConfigurationInput {
            crate::input::DescribeSecurityConfigurationInput {
                name: self.name,
            }
        }
    }
}
impl DescribeSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityConfigurationInput`](crate::input::DescribeSecurityConfigurationInput)
    pub fn builder() -> crate::input::describe_security_configuration_input::Builder {
        crate::input::describe_security_configuration_input::Builder::default()
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
pub struct DescribeStepInput {
    /// <p>The identifier of the cluster with steps to describe.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The identifier of the step to describe.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_id: std::option::Option<std::string::String>,
}
impl DescribeStepInput {
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The identifier of the step to describe.</p>
    pub fn step_id(&self) -> std::option::Option<&str> {
        self.step_id.as_deref()
    }
}
impl std::fmt::Debug for DescribeStepInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeStepInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("step_id", &self.step_id);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeStepInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("StepId", &self.step_id);
        shape.finish()
    }
}
/// See [`DescribeStepInput`](crate::input::DescribeStepInput)
pub mod describe_step_input {
    /// A builder for [`DescribeStepInput`](crate::input::DescribeStepInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) step_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The identifier of the cluster with steps to describe.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The identifier of the step to describe.</p>
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
        /// Consumes the builder and constructs a [`DescribeStepInput`](crate::input::DescribeStepInput)
        pub fn build(self) -> crate::input::DescribeStepInput {
            crate::input::DescribeStepInput {
                cluster_id: self.cluster_id,
                step_id: self.step_id,
            }
        }
    }
}
impl DescribeStepInput {
    /// Creates a new builder-style object to manufacture [`DescribeStepInput`](crate::input::DescribeStepInput)
    pub fn builder() -> crate::input::describe_step_input::Builder {
        crate::input::describe_step_input::Builder::default()
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
pub struct GetBlockPublicAccessConfigurationInput {}
impl std::fmt::Debug for GetBlockPublicAccessConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetBlockPublicAccessConfigurationInput");
        formatter.finish()
    }
}
impl std::fmt::Display for GetBlockPublicAccessConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`GetBlockPublicAccessConfigurationInput`](crate::input::GetBlockPublicAccessConfigurationInput)
pub mod get_block_public_access_configuration_input {
    /// A builder for [`GetBlockPublicAccessConfigurationInput`](crate::input::GetBlockPublicAccessConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`GetBlockPublicAccessConfigurationInput`](crate::input::GetBlockPublicAccessConfigurationInput)
        pub fn build(self) -> crate::input::GetBlockPublicAccessConfigurationInput {
            crate::input::GetBlockPublicAccessConfigurationInput {}
        }
    }
}
impl GetBlockPublicAccessConfigurationInput {
    /// Creates a new builder-style object to manufacture [`GetBlockPublicAccessConfigurationInput`](crate::input::GetBlockPublicAccessConfigurationInput)
    pub fn builder() -> crate::input::get_block_public_access_configuration_input::Builder {
        crate::input::get_block_public_access_configuration_input::Builder::default()
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
pub struct GetManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
}
impl GetManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl std::fmt::Debug for GetManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetManagedScalingPolicyInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.finish()
    }
}
impl std::fmt::Display for GetManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.finish()
    }
}
/// See [`GetManagedScalingPolicyInput`](crate::input::GetManagedScalingPolicyInput)
pub mod get_managed_scaling_policy_input {
    /// A builder for [`GetManagedScalingPolicyInput`](crate::input::GetManagedScalingPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Consumes the builder and constructs a [`GetManagedScalingPolicyInput`](crate::input::GetManagedScalingPolicyInput)
        pub fn build(self) -> crate::input::GetManagedScalingPolicyInput {
            crate::input::GetManagedScalingPolicyInput {
                cluster_id: self.cluster_id,
            }
        }
    }
}
impl GetManagedScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`GetManagedScalingPolicyInput`](crate::input::GetManagedScalingPolicyInput)
    pub fn builder() -> crate::input::get_managed_scaling_policy_input::Builder {
        crate::input::get_managed_scaling_policy_input::Builder::default()
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
pub struct ListBootstrapActionsInput {
    /// <p>The cluster identifier for the bootstrap actions to list.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListBootstrapActionsInput {
    /// <p>The cluster identifier for the bootstrap actions to list.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListBootstrapActionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListBootstrapActionsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListBootstrapActionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListBootstrapActionsInput`](crate::input::ListBootstrapActionsInput)
pub mod list_bootstrap_actions_input {
    /// A builder for [`ListBootstrapActionsInput`](crate::input::ListBootstrapActionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The cluster identifier for the bootstrap actions to list.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListBootstrapActionsInput`](crate::input::ListBootstrapActionsInput)
        pub fn build(self) -> crate::input::ListBootstrapActionsInput {
            crate::input::ListBootstrapActionsInput {
                cluster_id: self.cluster_id,
                marker: self.marker,
            }
        }
    }
}
impl ListBootstrapActionsInput {
    /// Creates a new builder-style object to manufacture [`ListBootstrapActionsInput`](crate::input::ListBootstrapActionsInput)
    pub fn builder() -> crate::input::list_bootstrap_actions_input::Builder {
        crate::input::list_bootstrap_actions_input::Builder::default()
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
pub struct ListClustersInput {
    /// <p>The creation date and time beginning value filter for listing clusters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub created_after: std::option::Option<smithy_types::Instant>,
    /// <p>The creation date and time end value filter for listing clusters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub created_before: std::option::Option<smithy_types::Instant>,
    /// <p>The cluster state filters to apply when listing clusters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_states: std::option::Option<std::vec::Vec<crate::model::ClusterState>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListClustersInput {
    /// <p>The creation date and time beginning value filter for listing clusters.</p>
    pub fn created_after(&self) -> std::option::Option<smithy_types::Instant> {
        self.created_after
    }
    /// <p>The creation date and time end value filter for listing clusters.</p>
    pub fn created_before(&self) -> std::option::Option<smithy_types::Instant> {
        self.created_before
    }
    /// <p>The cluster state filters to apply when listing clusters.</p>
    pub fn cluster_states(&self) -> std::option::Option<&[crate::model::ClusterState]> {
        self.cluster_states.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListClustersInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListClustersInput");
        formatter.field("created_after", &self.created_after);
        formatter.field("created_before", &self.created_before);
        formatter.field("cluster_states", &self.cluster_states);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListClustersInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("CreatedAfter", &self.created_after);
        shape.field("CreatedBefore", &self.created_before);
        shape.list("ClusterStates", &self.cluster_states);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListClustersInput`](crate::input::ListClustersInput)
pub mod list_clusters_input {
    /// A builder for [`ListClustersInput`](crate::input::ListClustersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) created_after: std::option::Option<smithy_types::Instant>,
        pub(crate) created_before: std::option::Option<smithy_types::Instant>,
        pub(crate) cluster_states: std::option::Option<std::vec::Vec<crate::model::ClusterState>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The creation date and time beginning value filter for listing clusters.</p>
        pub fn created_after(mut self, input: smithy_types::Instant) -> Self {
            self.created_after = Some(input);
            self
        }
        pub fn set_created_after(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.created_after = input;
            self
        }
        pub fn get_created_after(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.created_after
        }
        /// <p>The creation date and time end value filter for listing clusters.</p>
        pub fn created_before(mut self, input: smithy_types::Instant) -> Self {
            self.created_before = Some(input);
            self
        }
        pub fn set_created_before(
            mut self,
            input: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.created_before = input;
            self
        }
        pub fn get_created_before(&self) -> &std::option::Option<smithy_types::Instant> {
            &self.created_before
        }
        /// Appends an item to `cluster_states`.
        ///
        /// To override the contents of this collection use [`set_cluster_states`](Self::set_cluster_states).
        ///
        /// <p>The cluster state filters to apply when listing clusters.</p>
        pub fn cluster_states(mut self, input: impl Into<crate::model::ClusterState>) -> Self {
            let mut v = self.cluster_states.unwrap_or_default();
            v.push(input.into());
            self.cluster_states = Some(v);
            self
        }
        pub fn set_cluster_states(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::ClusterState>>,
        ) -> Self {
            self.cluster_states = input;
            self
        }
        pub fn get_cluster_states(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::ClusterState>> {
            &self.cluster_states
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListClustersInput`](crate::input::ListClustersInput)
        pub fn build(self) -> crate::input::ListClustersInput {
            crate::input::ListClustersInput {
                created_after: self.created_after,
                created_before: self.created_before,
                cluster_states: self.cluster_states,
                marker: self.marker,
            }
        }
    }
}
impl ListClustersInput {
    /// Creates a new builder-style object to manufacture [`ListClustersInput`](crate::input::ListClustersInput)
    pub fn builder() -> crate::input::list_clusters_input::Builder {
        crate::input::list_clusters_input::Builder::default()
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
pub struct ListInstanceFleetsInput {
    /// <p>The unique identifier of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstanceFleetsInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstanceFleetsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstanceFleetsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstanceFleetsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstanceFleetsInput`](crate::input::ListInstanceFleetsInput)
pub mod list_instance_fleets_input {
    /// A builder for [`ListInstanceFleetsInput`](crate::input::ListInstanceFleetsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier of the cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListInstanceFleetsInput`](crate::input::ListInstanceFleetsInput)
        pub fn build(self) -> crate::input::ListInstanceFleetsInput {
            crate::input::ListInstanceFleetsInput {
                cluster_id: self.cluster_id,
                marker: self.marker,
            }
        }
    }
}
impl ListInstanceFleetsInput {
    /// Creates a new builder-style object to manufacture [`ListInstanceFleetsInput`](crate::input::ListInstanceFleetsInput)
    pub fn builder() -> crate::input::list_instance_fleets_input::Builder {
        crate::input::list_instance_fleets_input::Builder::default()
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
pub struct ListInstanceGroupsInput {
    /// <p>The identifier of the cluster for which to list the instance groups.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstanceGroupsInput {
    /// <p>The identifier of the cluster for which to list the instance groups.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstanceGroupsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstanceGroupsInput`](crate::input::ListInstanceGroupsInput)
pub mod list_instance_groups_input {
    /// A builder for [`ListInstanceGroupsInput`](crate::input::ListInstanceGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The identifier of the cluster for which to list the instance groups.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListInstanceGroupsInput`](crate::input::ListInstanceGroupsInput)
        pub fn build(self) -> crate::input::ListInstanceGroupsInput {
            crate::input::ListInstanceGroupsInput {
                cluster_id: self.cluster_id,
                marker: self.marker,
            }
        }
    }
}
impl ListInstanceGroupsInput {
    /// Creates a new builder-style object to manufacture [`ListInstanceGroupsInput`](crate::input::ListInstanceGroupsInput)
    pub fn builder() -> crate::input::list_instance_groups_input::Builder {
        crate::input::list_instance_groups_input::Builder::default()
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
pub struct ListInstancesInput {
    /// <p>The identifier of the cluster for which to list the instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The identifier of the instance group for which to list the instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
    /// <p>The type of instance group for which to list the instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_types: std::option::Option<std::vec::Vec<crate::model::InstanceGroupType>>,
    /// <p>The unique identifier of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_id: std::option::Option<std::string::String>,
    /// <p>The node type of the instance fleet. For example MASTER, CORE, or TASK.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
    /// <p>A list of instance states that will filter the instances returned with this request.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_states: std::option::Option<std::vec::Vec<crate::model::InstanceState>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstancesInput {
    /// <p>The identifier of the cluster for which to list the instances.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The identifier of the instance group for which to list the instances.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>The type of instance group for which to list the instances.</p>
    pub fn instance_group_types(&self) -> std::option::Option<&[crate::model::InstanceGroupType]> {
        self.instance_group_types.as_deref()
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet_id(&self) -> std::option::Option<&str> {
        self.instance_fleet_id.as_deref()
    }
    /// <p>The node type of the instance fleet. For example MASTER, CORE, or TASK.</p>
    pub fn instance_fleet_type(&self) -> std::option::Option<&crate::model::InstanceFleetType> {
        self.instance_fleet_type.as_ref()
    }
    /// <p>A list of instance states that will filter the instances returned with this request.</p>
    pub fn instance_states(&self) -> std::option::Option<&[crate::model::InstanceState]> {
        self.instance_states.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstancesInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("instance_group_types", &self.instance_group_types);
        formatter.field("instance_fleet_id", &self.instance_fleet_id);
        formatter.field("instance_fleet_type", &self.instance_fleet_type);
        formatter.field("instance_states", &self.instance_states);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.list("InstanceGroupTypes", &self.instance_group_types);
        shape.field("InstanceFleetId", &self.instance_fleet_id);
        shape.field("InstanceFleetType", &self.instance_fleet_type);
        shape.list("InstanceStates", &self.instance_states);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstancesInput`](crate::input::ListInstancesInput)
pub mod list_instances_input {
    /// A builder for [`ListInstancesInput`](crate::input::ListInstancesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_types: std::option::Option<std::vec::Vec<crate::model::InstanceGroupType>>,
        pub(crate) instance_fleet_id: std::option::Option<std::string::String>,
        pub(crate) instance_fleet_type: std::option::Option<crate::model::InstanceFleetType>,
        pub(crate) instance_states: std::option::Option<std::vec::Vec<crate::model::InstanceState>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The identifier of the cluster for which to list the instances.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The identifier of the instance group for which to list the instances.</p>
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
        /// Appends an item to `instance_group_types`.
        ///
        /// To override the contents of this collection use [`set_instance_group_types`](Self::set_instance_group_types).
        ///
        /// <p>The type of instance group for which to list the instances.</p>
        pub fn instance_group_types(
            mut self,
            input: impl Into<crate::model::InstanceGroupType>,
        ) -> Self {
            let mut v = self.instance_group_types.unwrap_or_default();
            v.push(input.into());
            self.instance_group_types = Some(v);
            self
        }
        pub fn set_instance_group_types(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceGroupType>>,
        ) -> Self {
            self.instance_group_types = input;
            self
        }
        pub fn get_instance_group_types(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceGroupType>> {
            &self.instance_group_types
        }
        /// <p>The unique identifier of the instance fleet.</p>
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
        /// <p>The node type of the instance fleet. For example MASTER, CORE, or TASK.</p>
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
        /// Appends an item to `instance_states`.
        ///
        /// To override the contents of this collection use [`set_instance_states`](Self::set_instance_states).
        ///
        /// <p>A list of instance states that will filter the instances returned with this request.</p>
        pub fn instance_states(mut self, input: impl Into<crate::model::InstanceState>) -> Self {
            let mut v = self.instance_states.unwrap_or_default();
            v.push(input.into());
            self.instance_states = Some(v);
            self
        }
        pub fn set_instance_states(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceState>>,
        ) -> Self {
            self.instance_states = input;
            self
        }
        pub fn get_instance_states(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceState>> {
            &self.instance_states
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListInstancesInput`](crate::input::ListInstancesInput)
        pub fn build(self) -> crate::input::ListInstancesInput {
            crate::input::ListInstancesInput {
                cluster_id: self.cluster_id,
                instance_group_id: self.instance_group_id,
                instance_group_types: self.instance_group_types,
                instance_fleet_id: self.instance_fleet_id,
                instance_fleet_type: self.instance_fleet_type,
                instance_states: self.instance_states,
                marker: self.marker,
            }
        }
    }
}
impl ListInstancesInput {
    /// Creates a new builder-style object to manufacture [`ListInstancesInput`](crate::input::ListInstancesInput)
    pub fn builder() -> crate::input::list_instances_input::Builder {
        crate::input::list_instances_input::Builder::default()
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
pub struct ListSecurityConfigurationsInput {
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListSecurityConfigurationsInput {
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListSecurityConfigurationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListSecurityConfigurationsInput");
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListSecurityConfigurationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListSecurityConfigurationsInput`](crate::input::ListSecurityConfigurationsInput)
pub mod list_security_configurations_input {
    /// A builder for [`ListSecurityConfigurationsInput`](crate::input::ListSecurityConfigurationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListSecurityConfigurationsInput`](crate::input::ListSecurityConfigurationsInput)
        pub fn build(self) -> crate::input::ListSecurityConfigurationsInput {
            crate::input::ListSecurityConfigurationsInput {
                marker: self.marker,
            }
        }
    }
}
impl ListSecurityConfigurationsInput {
    /// Creates a new builder-style object to manufacture [`ListSecurityConfigurationsInput`](crate::input::ListSecurityConfigurationsInput)
    pub fn builder() -> crate::input::list_security_configurations_input::Builder {
        crate::input::list_security_configurations_input::Builder::default()
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
pub struct ListStepsInput {
    /// <p>The identifier of the cluster for which to list the steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The filter to limit the step list based on certain states.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_states: std::option::Option<std::vec::Vec<crate::model::StepState>>,
    /// <p>The filter to limit the step list based on the identifier of the steps. You can specify a maximum of ten Step IDs. The character constraint applies to the overall length of the array.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListStepsInput {
    /// <p>The identifier of the cluster for which to list the steps.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The filter to limit the step list based on certain states.</p>
    pub fn step_states(&self) -> std::option::Option<&[crate::model::StepState]> {
        self.step_states.as_deref()
    }
    /// <p>The filter to limit the step list based on the identifier of the steps. You can specify a maximum of ten Step IDs. The character constraint applies to the overall length of the array.</p>
    pub fn step_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.step_ids.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListStepsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("step_states", &self.step_states);
        formatter.field("step_ids", &self.step_ids);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListStepsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.list("StepStates", &self.step_states);
        shape.list("StepIds", &self.step_ids);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListStepsInput`](crate::input::ListStepsInput)
pub mod list_steps_input {
    /// A builder for [`ListStepsInput`](crate::input::ListStepsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) step_states: std::option::Option<std::vec::Vec<crate::model::StepState>>,
        pub(crate) step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The identifier of the cluster for which to list the steps.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Appends an item to `step_states`.
        ///
        /// To override the contents of this collection use [`set_step_states`](Self::set_step_states).
        ///
        /// <p>The filter to limit the step list based on certain states.</p>
        pub fn step_states(mut self, input: impl Into<crate::model::StepState>) -> Self {
            let mut v = self.step_states.unwrap_or_default();
            v.push(input.into());
            self.step_states = Some(v);
            self
        }
        pub fn set_step_states(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::StepState>>,
        ) -> Self {
            self.step_states = input;
            self
        }
        pub fn get_step_states(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::StepState>> {
            &self.step_states
        }
        /// Appends an item to `step_ids`.
        ///
        /// To override the contents of this collection use [`set_step_ids`](Self::set_step_ids).
        ///
        /// <p>The filter to limit the step list based on the identifier of the steps. You can specify a maximum of ten Step IDs. The character constraint applies to the overall length of the array.</p>
        pub fn step_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.step_ids.unwrap_or_default();
            v.push(input.into());
            self.step_ids = Some(v);
            self
        }
        pub fn set_step_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.step_ids = input;
            self
        }
        pub fn get_step_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.step_ids
        }
        /// <p>The pagination token that indicates the next set of results to retrieve.</p>
        pub fn marker(mut self, input: impl Into<std::string::String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.marker = input;
            self
        }
        pub fn get_marker(&self) -> &std::option::Option<std::string::String> {
            &self.marker
        }
        /// Consumes the builder and constructs a [`ListStepsInput`](crate::input::ListStepsInput)
        pub fn build(self) -> crate::input::ListStepsInput {
            crate::input::ListStepsInput {
                cluster_id: self.cluster_id,
                step_states: self.step_states,
                step_ids: self.step_ids,
                marker: self.marker,
            }
        }
    }
}
impl ListStepsInput {
    /// Creates a new builder-style object to manufacture [`ListStepsInput`](crate::input::ListStepsInput)
    pub fn builder() -> crate::input::list_steps_input::Builder {
        crate::input::list_steps_input::Builder::default()
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
pub struct ModifyClusterInput {
    /// <p>The unique identifier of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The number of steps that can be executed concurrently. You can specify a maximum of 256 steps.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_concurrency_level: std::option::Option<i32>,
}
impl ModifyClusterInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The number of steps that can be executed concurrently. You can specify a maximum of 256 steps.</p>
    pub fn step_concurrency_level(&self) -> std::option::Option<i32> {
        self.step_concurrency_level
    }
}
impl std::fmt::Debug for ModifyClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyClusterInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("step_concurrency_level", &self.step_concurrency_level);
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("StepConcurrencyLevel", &self.step_concurrency_level);
        shape.finish()
    }
}
/// See [`ModifyClusterInput`](crate::input::ModifyClusterInput)
pub mod modify_cluster_input {
    /// A builder for [`ModifyClusterInput`](crate::input::ModifyClusterInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) step_concurrency_level: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The unique identifier of the cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The number of steps that can be executed concurrently. You can specify a maximum of 256 steps.</p>
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
        /// Consumes the builder and constructs a [`ModifyClusterInput`](crate::input::ModifyClusterInput)
        pub fn build(self) -> crate::input::ModifyClusterInput {
            crate::input::ModifyClusterInput {
                cluster_id: self.cluster_id,
                step_concurrency_level: self.step_concurrency_level,
            }
        }
    }
}
impl ModifyClusterInput {
    /// Creates a new builder-style object to manufacture [`ModifyClusterInput`](crate::input::ModifyClusterInput)
    pub fn builder() -> crate::input::modify_cluster_input::Builder {
        crate::input::modify_cluster_input::Builder::default()
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
pub struct ModifyInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>The unique identifier of the instance fleet.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleet: std::option::Option<crate::model::InstanceFleetModifyConfig>,
}
impl ModifyInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet(&self) -> std::option::Option<&crate::model::InstanceFleetModifyConfig> {
        self.instance_fleet.as_ref()
    }
}
impl std::fmt::Debug for ModifyInstanceFleetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyInstanceFleetInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_fleet", &self.instance_fleet);
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyInstanceFleetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceFleet", &self.instance_fleet);
        shape.finish()
    }
}
/// See [`ModifyInstanceFleetInput`](crate::input::ModifyInstanceFleetInput)
pub mod modify_instance_fleet_input {
    /// A builder for [`ModifyInstanceFleetInput`](crate::input::ModifyInstanceFleetInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_fleet: std::option::Option<crate::model::InstanceFleetModifyConfig>,
    }
    impl Builder {
        /// <p>The unique identifier of the cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>The unique identifier of the instance fleet.</p>
        pub fn instance_fleet(mut self, input: crate::model::InstanceFleetModifyConfig) -> Self {
            self.instance_fleet = Some(input);
            self
        }
        pub fn set_instance_fleet(
            mut self,
            input: std::option::Option<crate::model::InstanceFleetModifyConfig>,
        ) -> Self {
            self.instance_fleet = input;
            self
        }
        pub fn get_instance_fleet(
            &self,
        ) -> &std::option::Option<crate::model::InstanceFleetModifyConfig> {
            &self.instance_fleet
        }
        /// Consumes the builder and constructs a [`ModifyInstanceFleetInput`](crate::input::ModifyInstanceFleetInput)
        pub fn build(self) -> crate::input::ModifyInstanceFleetInput {
            crate::input::ModifyInstanceFleetInput {
                cluster_id: self.cluster_id,
                instance_fleet: self.instance_fleet,
            }
        }
    }
}
impl ModifyInstanceFleetInput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceFleetInput`](crate::input::ModifyInstanceFleetInput)
    pub fn builder() -> crate::input::modify_instance_fleet_input::Builder {
        crate::input::modify_instance_fleet_input::Builder::default()
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
pub struct ModifyInstanceGroupsInput {
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>Instance groups to change.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupModifyConfig>>,
}
impl ModifyInstanceGroupsInput {
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Instance groups to change.</p>
    pub fn instance_groups(
        &self,
    ) -> std::option::Option<&[crate::model::InstanceGroupModifyConfig]> {
        self.instance_groups.as_deref()
    }
}
impl std::fmt::Debug for ModifyInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyInstanceGroupsInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_groups", &self.instance_groups);
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyInstanceGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.list("InstanceGroups", &self.instance_groups);
        shape.finish()
    }
}
/// See [`ModifyInstanceGroupsInput`](crate::input::ModifyInstanceGroupsInput)
pub mod modify_instance_groups_input {
    /// A builder for [`ModifyInstanceGroupsInput`](crate::input::ModifyInstanceGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroupModifyConfig>>,
    }
    impl Builder {
        /// <p>The ID of the cluster to which the instance group belongs.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Appends an item to `instance_groups`.
        ///
        /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
        ///
        /// <p>Instance groups to change.</p>
        pub fn instance_groups(
            mut self,
            input: impl Into<crate::model::InstanceGroupModifyConfig>,
        ) -> Self {
            let mut v = self.instance_groups.unwrap_or_default();
            v.push(input.into());
            self.instance_groups = Some(v);
            self
        }
        pub fn set_instance_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceGroupModifyConfig>>,
        ) -> Self {
            self.instance_groups = input;
            self
        }
        pub fn get_instance_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceGroupModifyConfig>> {
            &self.instance_groups
        }
        /// Consumes the builder and constructs a [`ModifyInstanceGroupsInput`](crate::input::ModifyInstanceGroupsInput)
        pub fn build(self) -> crate::input::ModifyInstanceGroupsInput {
            crate::input::ModifyInstanceGroupsInput {
                cluster_id: self.cluster_id,
                instance_groups: self.instance_groups,
            }
        }
    }
}
impl ModifyInstanceGroupsInput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceGroupsInput`](crate::input::ModifyInstanceGroupsInput)
    pub fn builder() -> crate::input::modify_instance_groups_input::Builder {
        crate::input::modify_instance_groups_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct PutAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicy>,
}
impl PutAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub fn auto_scaling_policy(&self) -> std::option::Option<&crate::model::AutoScalingPolicy> {
        self.auto_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for PutAutoScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutAutoScalingPolicyInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("auto_scaling_policy", &self.auto_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for PutAutoScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.field("AutoScalingPolicy", &self.auto_scaling_policy);
        shape.finish()
    }
}
/// See [`PutAutoScalingPolicyInput`](crate::input::PutAutoScalingPolicyInput)
pub mod put_auto_scaling_policy_input {
    /// A builder for [`PutAutoScalingPolicyInput`](crate::input::PutAutoScalingPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicy>,
    }
    impl Builder {
        /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
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
        /// <p>Specifies the definition of the automatic scaling policy.</p>
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
        /// Consumes the builder and constructs a [`PutAutoScalingPolicyInput`](crate::input::PutAutoScalingPolicyInput)
        pub fn build(self) -> crate::input::PutAutoScalingPolicyInput {
            crate::input::PutAutoScalingPolicyInput {
                cluster_id: self.cluster_id,
                instance_group_id: self.instance_group_id,
                auto_scaling_policy: self.auto_scaling_policy,
            }
        }
    }
}
impl PutAutoScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`PutAutoScalingPolicyInput`](crate::input::PutAutoScalingPolicyInput)
    pub fn builder() -> crate::input::put_auto_scaling_policy_input::Builder {
        crate::input::put_auto_scaling_policy_input::Builder::default()
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
pub struct PutBlockPublicAccessConfigurationInput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating <code>BlockPublicSecurityGroupRules</code> to remove the exception.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub block_public_access_configuration: std::option::Option<crate::model::BlockPublicAccessConfiguration>,
}
impl PutBlockPublicAccessConfigurationInput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating <code>BlockPublicSecurityGroupRules</code> to remove the exception.</p>
    pub fn block_public_access_configuration(
        &self,
    ) -> std::option::Option<&crate::model::BlockPublicAccessConfiguration> {
        self.block_public_access_configuration.as_ref()
    }
}
impl std::fmt::Debug for PutBlockPublicAccessConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutBlockPublicAccessConfigurationInput");
        formatter.field("block_public_access_configuration", &self.block_public_access_configuration);
        formatter.finish()
    }
}
impl std::fmt::Display for PutBlockPublicAccessConfigurationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("BlockPublicAccessConfiguration", &self.block_public_access_configuration);
        shape.finish()
    }
}
/// See [`PutBlockPublicAccessConfigurationInput`](crate::input::PutBlockPublicAccessConfigurationInput)
pub mod put_block_public_access_configuration_input {
    /// A builder for [`PutBlockPublicAccessConfigurationInput`](crate::input::PutBlockPublicAccessConfigurationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) block_public_access_configuration: std::option::Option<crate::model::BlockPublicAccessConfiguration>,
    }
    impl Builder {
        /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating <code>BlockPublicSecurityGroupRules</code> to remove the exception.</p>
        pub fn block_public_access_configuration(
            mut self,
            input: crate::model::BlockPublicAccessConfiguration,
        ) -> Self {
            self.block_public_access_configuration = Some(input);
            self
        }
        pub fn set_block_public_access_configuration(
            mut self,
            input: std::option::Option<crate::model::BlockPublicAccessConfiguration>,
        ) -> Self {
            self.block_public_access_configuration = input;
            self
        }
        pub fn get_block_public_access_configuration(
            &self,
        ) -> &std::option::Option<crate::model::BlockPublicAccessConfiguration> {
            &self.block_public_access_configuration
        }
        /// Consumes the builder and constructs a [`PutBlockPublicAccessConfigurationInput`](crate::input::PutBlockPublicAccessConfigurationInput)
        pub fn build(self) -> crate::input::PutBlockPublicAccessConfigurationInput {
            crate::input::PutBlockPublicAccessConfigurationInput {
                block_public_access_configuration: self.block_public_access_configuration,
            }
        }
    }
}
impl PutBlockPublicAccessConfigurationInput {
    /// Creates a new builder-style object to manufacture [`PutBlockPublicAccessConfigurationInput`](crate::input::PutBlockPublicAccessConfigurationInput)
    pub fn builder() -> crate::input::put_block_public_access_configuration_input::Builder {
        crate::input::put_block_public_access_configuration_input::Builder::default()
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
pub struct PutManagedScalingPolicyInput {
    /// <p>Specifies the ID of an EMR cluster where the managed scaling policy is attached.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>Specifies the constraints for the managed scaling policy.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
}
impl PutManagedScalingPolicyInput {
    /// <p>Specifies the ID of an EMR cluster where the managed scaling policy is attached.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the constraints for the managed scaling policy.</p>
    pub fn managed_scaling_policy(
        &self,
    ) -> std::option::Option<&crate::model::ManagedScalingPolicy> {
        self.managed_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for PutManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutManagedScalingPolicyInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("managed_scaling_policy", &self.managed_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for PutManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("ManagedScalingPolicy", &self.managed_scaling_policy);
        shape.finish()
    }
}
/// See [`PutManagedScalingPolicyInput`](crate::input::PutManagedScalingPolicyInput)
pub mod put_managed_scaling_policy_input {
    /// A builder for [`PutManagedScalingPolicyInput`](crate::input::PutManagedScalingPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
    }
    impl Builder {
        /// <p>Specifies the ID of an EMR cluster where the managed scaling policy is attached.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>Specifies the constraints for the managed scaling policy.</p>
        pub fn managed_scaling_policy(mut self, input: crate::model::ManagedScalingPolicy) -> Self {
            self.managed_scaling_policy = Some(input);
            self
        }
        pub fn set_managed_scaling_policy(
            mut self,
            input: std::option::Option<crate::model::ManagedScalingPolicy>,
        ) -> Self {
            self.managed_scaling_policy = input;
            self
        }
        pub fn get_managed_scaling_policy(
            &self,
        ) -> &std::option::Option<crate::model::ManagedScalingPolicy> {
            &self.managed_scaling_policy
        }
        /// Consumes the builder and constructs a [`PutManagedScalingPolicyInput`](crate::input::PutManagedScalingPolicyInput)
        pub fn build(self) -> crate::input::PutManagedScalingPolicyInput {
            crate::input::PutManagedScalingPolicyInput {
                cluster_id: self.cluster_id,
                managed_scaling_policy: self.managed_scaling_policy,
            }
        }
    }
}
impl PutManagedScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`PutManagedScalingPolicyInput`](crate::input::PutManagedScalingPolicyInput)
    pub fn builder() -> crate::input::put_managed_scaling_policy_input::Builder {
        crate::input::put_managed_scaling_policy_input::Builder::default()
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
pub struct RemoveAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_id: std::option::Option<std::string::String>,
}
impl RemoveAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
}
impl std::fmt::Debug for RemoveAutoScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveAutoScalingPolicyInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveAutoScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.finish()
    }
}
/// See [`RemoveAutoScalingPolicyInput`](crate::input::RemoveAutoScalingPolicyInput)
pub mod remove_auto_scaling_policy_input {
    /// A builder for [`RemoveAutoScalingPolicyInput`](crate::input::RemoveAutoScalingPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
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
        /// Consumes the builder and constructs a [`RemoveAutoScalingPolicyInput`](crate::input::RemoveAutoScalingPolicyInput)
        pub fn build(self) -> crate::input::RemoveAutoScalingPolicyInput {
            crate::input::RemoveAutoScalingPolicyInput {
                cluster_id: self.cluster_id,
                instance_group_id: self.instance_group_id,
            }
        }
    }
}
impl RemoveAutoScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`RemoveAutoScalingPolicyInput`](crate::input::RemoveAutoScalingPolicyInput)
    pub fn builder() -> crate::input::remove_auto_scaling_policy_input::Builder {
        crate::input::remove_auto_scaling_policy_input::Builder::default()
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
pub struct RemoveManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_id: std::option::Option<std::string::String>,
}
impl RemoveManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl std::fmt::Debug for RemoveManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveManagedScalingPolicyInput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveManagedScalingPolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.finish()
    }
}
/// See [`RemoveManagedScalingPolicyInput`](crate::input::RemoveManagedScalingPolicyInput)
pub mod remove_managed_scaling_policy_input {
    /// A builder for [`RemoveManagedScalingPolicyInput`](crate::input::RemoveManagedScalingPolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
        pub fn cluster_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cluster_id = Some(input.into());
            self
        }
        pub fn set_cluster_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cluster_id = input;
            self
        }
        pub fn get_cluster_id(&self) -> &std::option::Option<std::string::String> {
            &self.cluster_id
        }
        /// Consumes the builder and constructs a [`RemoveManagedScalingPolicyInput`](crate::input::RemoveManagedScalingPolicyInput)
        pub fn build(self) -> crate::input::RemoveManagedScalingPolicyInput {
            crate::input::RemoveManagedScalingPolicyInput {
                cluster_id: self.cluster_id,
            }
        }
    }
}
impl RemoveManagedScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`RemoveManagedScalingPolicyInput`](crate::input::RemoveManagedScalingPolicyInput)
    pub fn builder() -> crate::input::remove_managed_scaling_policy_input::Builder {
        crate::input::remove_managed_scaling_policy_input::Builder::default()
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
pub struct RemoveTagsInput {
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub resource_id: std::option::Option<std::string::String>,
    /// <p>A list of tag keys to remove from a resource.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl RemoveTagsInput {
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub fn resource_id(&self) -> std::option::Option<&str> {
        self.resource_id.as_deref()
    }
    /// <p>A list of tag keys to remove from a resource.</p>
    pub fn tag_keys(&self) -> std::option::Option<&[std::string::String]> {
        self.tag_keys.as_deref()
    }
}
impl std::fmt::Debug for RemoveTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveTagsInput");
        formatter.field("resource_id", &self.resource_id);
        formatter.field("tag_keys", &self.tag_keys);
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ResourceId", &self.resource_id);
        shape.list("TagKeys", &self.tag_keys);
        shape.finish()
    }
}
/// See [`RemoveTagsInput`](crate::input::RemoveTagsInput)
pub mod remove_tags_input {
    /// A builder for [`RemoveTagsInput`](crate::input::RemoveTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_id: std::option::Option<std::string::String>,
        pub(crate) tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
        pub fn resource_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(input.into());
            self
        }
        pub fn set_resource_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_id = input;
            self
        }
        pub fn get_resource_id(&self) -> &std::option::Option<std::string::String> {
            &self.resource_id
        }
        /// Appends an item to `tag_keys`.
        ///
        /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
        ///
        /// <p>A list of tag keys to remove from a resource.</p>
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.tag_keys = input;
            self
        }
        pub fn get_tag_keys(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.tag_keys
        }
        /// Consumes the builder and constructs a [`RemoveTagsInput`](crate::input::RemoveTagsInput)
        pub fn build(self) -> crate::input::RemoveTagsInput {
            crate::input::RemoveTagsInput {
                resource_id: self.resource_id,
                tag_keys: self.tag_keys,
            }
        }
    }
}
impl RemoveTagsInput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsInput`](crate::input::RemoveTagsInput)
    pub fn builder() -> crate::input::remove_tags_input::Builder {
        crate::input::remove_tags_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::hash::Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(
    any(feature = "serde-serialize", feature = "serde-deserialize"),
    serde(rename_all = "PascalCase")
)]
pub struct RunJobFlowInput {
    /// <p>The name of the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub log_uri: std::option::Option<std::string::String>,
    /// <p>A JSON string for selecting additional features.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub additional_info: std::option::Option<std::string::String>,
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>ReleaseLabel</code> is used. To specify a custom AMI, use <code>CustomAmiID</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub ami_version: std::option::Option<std::string::String>,
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>. For more information about Amazon EMR release versions and included application versions and features, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">https://docs.aws.amazon.com/emr/latest/ReleaseGuide/</a>. The release label applies only to Amazon EMR releases version 4.0 and later. Earlier versions use <code>AmiVersion</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub release_label: std::option::Option<std::string::String>,
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instances: std::option::Option<crate::model::JobFlowInstancesConfig>,
    /// <p>A list of steps to run.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub steps: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::BootstrapActionConfig>>,
    /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use. For more information, see the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Currently supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the job flow using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the job flow using MapR M5 Edition.</p> </li> </ul>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub supported_products: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list. EMR accepts and forwards the argument list to the corresponding installation script as bootstrap action arguments. For more information, see "Launch a Job Flow on the MapR Distribution for Hadoop" in the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the cluster using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the cluster using MapR M5 Edition.</p> </li> <li> <p>"mapr" with the user arguments specifying "--edition,m3" or "--edition,m5" - launch the job flow using MapR M3 or M5 Edition respectively.</p> </li> <li> <p>"mapr-m7" - launch the cluster using MapR M7 Edition.</p> </li> <li> <p>"hunk" - launch the cluster with the Hunk Big Data Analtics Platform.</p> </li> <li> <p>"hue"- launch the cluster with Hue installed.</p> </li> <li> <p>"spark" - launch the cluster with Apache Spark installed.</p> </li> <li> <p>"ganglia" - launch the cluster with the Ganglia Monitoring System installed.</p> </li> </ul>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub new_supported_products: std::option::Option<std::vec::Vec<crate::model::SupportedProductConfig>>,
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster. For a list of applications available for each Amazon EMR release version, see the <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">Amazon EMR Release Guide</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub applications: std::option::Option<std::vec::Vec<crate::model::Application>>,
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub visible_to_all_users: std::option::Option<bool>,
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>. In order to use the default role, you must have already created it using the CLI or console.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_role: std::option::Option<std::string::String>,
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub service_role: std::option::Option<std::string::String>,
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// <p>The name of a security configuration to apply to the cluster.</p>
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
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI. If specified, Amazon EMR uses this AMI when it launches cluster EC2 instances. For more information about custom AMIs in Amazon EMR, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-custom-ami.html">Using a Custom AMI</a> in the <i>Amazon EMR Management Guide</i>. If omitted, the cluster uses the base Linux AMI for the <code>ReleaseLabel</code> specified. For Amazon EMR versions 2.x and 3.x, use <code>AmiVersion</code> instead.</p> <p>For information about creating a custom AMI, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/creating-an-ami-ebs.html">Creating an Amazon EBS-Backed Linux AMI</a> in the <i>Amazon Elastic Compute Cloud User Guide for Linux Instances</i>. For information about finding an AMI ID, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/finding-an-ami.html">Finding a Linux AMI</a>.</p>
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
    /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>, which indicates that only security updates are applied. If <code>NONE</code> is specified, no updates are applied, and all updates must be applied manually.</p>
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
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_concurrency_level: std::option::Option<i32>,
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
}
impl RunJobFlowInput {
    /// <p>The name of the job flow.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub fn log_uri(&self) -> std::option::Option<&str> {
        self.log_uri.as_deref()
    }
    /// <p>A JSON string for selecting additional features.</p>
    pub fn additional_info(&self) -> std::option::Option<&str> {
        self.additional_info.as_deref()
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>ReleaseLabel</code> is used. To specify a custom AMI, use <code>CustomAmiID</code>.</p>
    pub fn ami_version(&self) -> std::option::Option<&str> {
        self.ami_version.as_deref()
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>. For more information about Amazon EMR release versions and included application versions and features, see <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">https://docs.aws.amazon.com/emr/latest/ReleaseGuide/</a>. The release label applies only to Amazon EMR releases version 4.0 and later. Earlier versions use <code>AmiVersion</code>.</p>
    pub fn release_label(&self) -> std::option::Option<&str> {
        self.release_label.as_deref()
    }
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub fn instances(&self) -> std::option::Option<&crate::model::JobFlowInstancesConfig> {
        self.instances.as_ref()
    }
    /// <p>A list of steps to run.</p>
    pub fn steps(&self) -> std::option::Option<&[crate::model::StepConfig]> {
        self.steps.as_deref()
    }
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    pub fn bootstrap_actions(&self) -> std::option::Option<&[crate::model::BootstrapActionConfig]> {
        self.bootstrap_actions.as_deref()
    }
    /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use. For more information, see the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Currently supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the job flow using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the job flow using MapR M5 Edition.</p> </li> </ul>
    pub fn supported_products(&self) -> std::option::Option<&[std::string::String]> {
        self.supported_products.as_deref()
    }
    /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list. EMR accepts and forwards the argument list to the corresponding installation script as bootstrap action arguments. For more information, see "Launch a Job Flow on the MapR Distribution for Hadoop" in the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the cluster using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the cluster using MapR M5 Edition.</p> </li> <li> <p>"mapr" with the user arguments specifying "--edition,m3" or "--edition,m5" - launch the job flow using MapR M3 or M5 Edition respectively.</p> </li> <li> <p>"mapr-m7" - launch the cluster using MapR M7 Edition.</p> </li> <li> <p>"hunk" - launch the cluster with the Hunk Big Data Analtics Platform.</p> </li> <li> <p>"hue"- launch the cluster with Hue installed.</p> </li> <li> <p>"spark" - launch the cluster with Apache Spark installed.</p> </li> <li> <p>"ganglia" - launch the cluster with the Ganglia Monitoring System installed.</p> </li> </ul>
    pub fn new_supported_products(
        &self,
    ) -> std::option::Option<&[crate::model::SupportedProductConfig]> {
        self.new_supported_products.as_deref()
    }
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster. For a list of applications available for each Amazon EMR release version, see the <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">Amazon EMR Release Guide</a>.</p>
    pub fn applications(&self) -> std::option::Option<&[crate::model::Application]> {
        self.applications.as_deref()
    }
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    pub fn configurations(&self) -> std::option::Option<&[crate::model::Configuration]> {
        self.configurations.as_deref()
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(&self) -> std::option::Option<bool> {
        self.visible_to_all_users
    }
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>. In order to use the default role, you must have already created it using the CLI or console.</p>
    pub fn job_flow_role(&self) -> std::option::Option<&str> {
        self.job_flow_role.as_deref()
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(&self) -> std::option::Option<&str> {
        self.service_role.as_deref()
    }
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub fn security_configuration(&self) -> std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>. The IAM role provides permissions that the automatic scaling feature requires to launch and terminate EC2 instances in an instance group.</p>
    pub fn auto_scaling_role(&self) -> std::option::Option<&str> {
        self.auto_scaling_role.as_deref()
    }
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
    pub fn scale_down_behavior(&self) -> std::option::Option<&crate::model::ScaleDownBehavior> {
        self.scale_down_behavior.as_ref()
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI. If specified, Amazon EMR uses this AMI when it launches cluster EC2 instances. For more information about custom AMIs in Amazon EMR, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-custom-ami.html">Using a Custom AMI</a> in the <i>Amazon EMR Management Guide</i>. If omitted, the cluster uses the base Linux AMI for the <code>ReleaseLabel</code> specified. For Amazon EMR versions 2.x and 3.x, use <code>AmiVersion</code> instead.</p> <p>For information about creating a custom AMI, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/creating-an-ami-ebs.html">Creating an Amazon EBS-Backed Linux AMI</a> in the <i>Amazon Elastic Compute Cloud User Guide for Linux Instances</i>. For information about finding an AMI ID, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/finding-an-ami.html">Finding a Linux AMI</a>.</p>
    pub fn custom_ami_id(&self) -> std::option::Option<&str> {
        self.custom_ami_id.as_deref()
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn ebs_root_volume_size(&self) -> std::option::Option<i32> {
        self.ebs_root_volume_size
    }
    /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>, which indicates that only security updates are applied. If <code>NONE</code> is specified, no updates are applied, and all updates must be applied manually.</p>
    pub fn repo_upgrade_on_boot(&self) -> std::option::Option<&crate::model::RepoUpgradeOnBoot> {
        self.repo_upgrade_on_boot.as_ref()
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration. For more information see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-kerberos.html">Use Kerberos Authentication</a> in the <i>EMR Management Guide</i>.</p>
    pub fn kerberos_attributes(&self) -> std::option::Option<&crate::model::KerberosAttributes> {
        self.kerberos_attributes.as_ref()
    }
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub fn step_concurrency_level(&self) -> std::option::Option<i32> {
        self.step_concurrency_level
    }
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(
        &self,
    ) -> std::option::Option<&crate::model::ManagedScalingPolicy> {
        self.managed_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for RunJobFlowInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RunJobFlowInput");
        formatter.field("name", &self.name);
        formatter.field("log_uri", &self.log_uri);
        formatter.field("additional_info", &self.additional_info);
        formatter.field("ami_version", &self.ami_version);
        formatter.field("release_label", &self.release_label);
        formatter.field("instances", &self.instances);
        formatter.field("steps", &self.steps);
        formatter.field("bootstrap_actions", &self.bootstrap_actions);
        formatter.field("supported_products", &self.supported_products);
        formatter.field("new_supported_products", &self.new_supported_products);
        formatter.field("applications", &self.applications);
        formatter.field("configurations", &self.configurations);
        formatter.field("visible_to_all_users", &self.visible_to_all_users);
        formatter.field("job_flow_role", &self.job_flow_role);
        formatter.field("service_role", &self.service_role);
        formatter.field("tags", &self.tags);
        formatter.field("security_configuration", &self.security_configuration);
        formatter.field("auto_scaling_role", &self.auto_scaling_role);
        formatter.field("scale_down_behavior", &self.scale_down_behavior);
        formatter.field("custom_ami_id", &self.custom_ami_id);
        formatter.field("ebs_root_volume_size", &self.ebs_root_volume_size);
        formatter.field("repo_upgrade_on_boot", &self.repo_upgrade_on_boot);
        formatter.field("kerberos_attributes", &self.kerberos_attributes);
        formatter.field("step_concurrency_level", &self.step_concurrency_level);
        formatter.field("managed_scaling_policy", &self.managed_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for RunJobFlowInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("LogUri", &self.log_uri);
        shape.field("AdditionalInfo", &self.additional_info);
        shape.field("AmiVersion", &self.ami_version);
        shape.field("ReleaseLabel", &self.release_label);
        shape.field("Instances", &self.instances);
        shape.list("Steps", &self.steps);
        shape.list("BootstrapActions", &self.bootstrap_actions);
        shape.list("SupportedProducts", &self.supported_products);
        shape.list("NewSupportedProducts", &self.new_supported_products);
        shape.list("Applications", &self.applications);
        shape.list("Configurations", &self.configurations);
        shape.field("VisibleToAllUsers", &self.visible_to_all_users);
        shape.field("JobFlowRole", &self.job_flow_role);
        shape.field("ServiceRole", &self.service_role);
        shape.list("Tags", &self.tags);
        shape.field("SecurityConfiguration", &self.security_configuration);
        shape.field("AutoScalingRole", &self.auto_scaling_role);
        shape.field("ScaleDownBehavior", &self.scale_down_behavior);
        shape.field("CustomAmiId", &self.custom_ami_id);
        shape.field("EbsRootVolumeSize", &self.ebs_root_volume_size);
        shape.field("RepoUpgradeOnBoot", &self.repo_upgrade_on_boot);
        shape.field("KerberosAttributes", &self.kerberos_attributes);
        shape.field("StepConcurrencyLevel", &self.step_concurrency_level);
        shape.field("ManagedScalingPolicy", &self.managed_scaling_policy);
        shape.finish()
    }
}
/// See [`RunJobFlowInput`](crate::input::RunJobFlowInput)
pub mod run_job_flow_input {
    /// A builder for [`RunJobFlowInput`](crate::input::RunJobFlowInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) log_uri: std::option::Option<std::string::String>,
        pub(crate) additional_info: std::option::Option<std::string::String>,
        pub(crate) ami_version: std::option::Option<std::string::String>,
        pub(crate) release_label: std::option::Option<std::string::String>,
        pub(crate) instances: std::option::Option<crate::model::JobFlowInstancesConfig>,
        pub(crate) steps: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
        pub(crate) bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::BootstrapActionConfig>>,
        pub(crate) supported_products: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) new_supported_products: std::option::Option<std::vec::Vec<crate::model::SupportedProductConfig>>,
        pub(crate) applications: std::option::Option<std::vec::Vec<crate::model::Application>>,
        pub(crate) configurations: std::option::Option<std::vec::Vec<crate::model::Configuration>>,
        pub(crate) visible_to_all_users: std::option::Option<bool>,
        pub(crate) job_flow_role: std::option::Option<std::string::String>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) security_configuration: std::option::Option<std::string::String>,
        pub(crate) auto_scaling_role: std::option::Option<std::string::String>,
        pub(crate) scale_down_behavior: std::option::Option<crate::model::ScaleDownBehavior>,
        pub(crate) custom_ami_id: std::option::Option<std::string::String>,
        pub(crate) ebs_root_volume_size: std::option::Option<i32>,
        pub(crate) repo_upgrade_on_boot: std::option::Option<crate::model::RepoUpgradeOnBoot>,
        pub(crate) kerberos_attributes: std::option::Option<crate::model::KerberosAttributes>,
        pub(crate) step_concurrency_level: std::option::Option<i32>,
        pub(crate) managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
    }
    impl Builder {
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
        /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
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
        /// <p>A JSON string for selecting additional features.</p>
        pub fn additional_info(mut self, input: impl Into<std::string::String>) -> Self {
            self.additional_info = Some(input.into());
            self
        }
        pub fn set_additional_info(
            mut self,
            input: std::option::Option<std::string::String>,
        ) -> Self {
            self.additional_info = input;
            self
        }
        pub fn get_additional_info(&self) -> &std::option::Option<std::string::String> {
            &self.additional_info
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
        /// <p>A specification of the number and type of Amazon EC2 instances.</p>
        pub fn instances(mut self, input: crate::model::JobFlowInstancesConfig) -> Self {
            self.instances = Some(input);
            self
        }
        pub fn set_instances(
            mut self,
            input: std::option::Option<crate::model::JobFlowInstancesConfig>,
        ) -> Self {
            self.instances = input;
            self
        }
        pub fn get_instances(&self) -> &std::option::Option<crate::model::JobFlowInstancesConfig> {
            &self.instances
        }
        /// Appends an item to `steps`.
        ///
        /// To override the contents of this collection use [`set_steps`](Self::set_steps).
        ///
        /// <p>A list of steps to run.</p>
        pub fn steps(mut self, input: impl Into<crate::model::StepConfig>) -> Self {
            let mut v = self.steps.unwrap_or_default();
            v.push(input.into());
            self.steps = Some(v);
            self
        }
        pub fn set_steps(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::StepConfig>>,
        ) -> Self {
            self.steps = input;
            self
        }
        pub fn get_steps(&self) -> &std::option::Option<std::vec::Vec<crate::model::StepConfig>> {
            &self.steps
        }
        /// Appends an item to `bootstrap_actions`.
        ///
        /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
        ///
        /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
        pub fn bootstrap_actions(
            mut self,
            input: impl Into<crate::model::BootstrapActionConfig>,
        ) -> Self {
            let mut v = self.bootstrap_actions.unwrap_or_default();
            v.push(input.into());
            self.bootstrap_actions = Some(v);
            self
        }
        pub fn set_bootstrap_actions(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::BootstrapActionConfig>>,
        ) -> Self {
            self.bootstrap_actions = input;
            self
        }
        pub fn get_bootstrap_actions(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::BootstrapActionConfig>> {
            &self.bootstrap_actions
        }
        /// Appends an item to `supported_products`.
        ///
        /// To override the contents of this collection use [`set_supported_products`](Self::set_supported_products).
        ///
        /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use. For more information, see the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Currently supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the job flow using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the job flow using MapR M5 Edition.</p> </li> </ul>
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
        /// Appends an item to `new_supported_products`.
        ///
        /// To override the contents of this collection use [`set_new_supported_products`](Self::set_new_supported_products).
        ///
        /// <note> <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use Applications.</p> </note> <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list. EMR accepts and forwards the argument list to the corresponding installation script as bootstrap action arguments. For more information, see "Launch a Job Flow on the MapR Distribution for Hadoop" in the <a href="https://docs.aws.amazon.com/emr/latest/DeveloperGuide/emr-dg.pdf">Amazon EMR Developer Guide</a>. Supported values are:</p> <ul> <li> <p>"mapr-m3" - launch the cluster using MapR M3 Edition.</p> </li> <li> <p>"mapr-m5" - launch the cluster using MapR M5 Edition.</p> </li> <li> <p>"mapr" with the user arguments specifying "--edition,m3" or "--edition,m5" - launch the job flow using MapR M3 or M5 Edition respectively.</p> </li> <li> <p>"mapr-m7" - launch the cluster using MapR M7 Edition.</p> </li> <li> <p>"hunk" - launch the cluster with the Hunk Big Data Analtics Platform.</p> </li> <li> <p>"hue"- launch the cluster with Hue installed.</p> </li> <li> <p>"spark" - launch the cluster with Apache Spark installed.</p> </li> <li> <p>"ganglia" - launch the cluster with the Ganglia Monitoring System installed.</p> </li> </ul>
        pub fn new_supported_products(
            mut self,
            input: impl Into<crate::model::SupportedProductConfig>,
        ) -> Self {
            let mut v = self.new_supported_products.unwrap_or_default();
            v.push(input.into());
            self.new_supported_products = Some(v);
            self
        }
        pub fn set_new_supported_products(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::SupportedProductConfig>>,
        ) -> Self {
            self.new_supported_products = input;
            self
        }
        pub fn get_new_supported_products(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::SupportedProductConfig>> {
            &self.new_supported_products
        }
        /// Appends an item to `applications`.
        ///
        /// To override the contents of this collection use [`set_applications`](Self::set_applications).
        ///
        /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster. For a list of applications available for each Amazon EMR release version, see the <a href="https://docs.aws.amazon.com/emr/latest/ReleaseGuide/">Amazon EMR Release Guide</a>.</p>
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
        /// Appends an item to `configurations`.
        ///
        /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
        ///
        /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
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
        /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
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
        /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>. In order to use the default role, you must have already created it using the CLI or console.</p>
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
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
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
        /// <p>The name of a security configuration to apply to the cluster.</p>
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
        /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized. <code>TERMINATE_AT_INSTANCE_HOUR</code> indicates that Amazon EMR terminates nodes at the instance-hour boundary, regardless of when the request to terminate the instance was submitted. This option is only available with Amazon EMR 5.1.0 and later and is the default for clusters created using that version. <code>TERMINATE_AT_TASK_COMPLETION</code> indicates that Amazon EMR blacklists and drains tasks from nodes before terminating the Amazon EC2 instances, regardless of the instance-hour boundary. With either behavior, Amazon EMR removes the least active nodes first and blocks instance termination if it could lead to HDFS corruption. <code>TERMINATE_AT_TASK_COMPLETION</code> is available only in Amazon EMR version 4.1.0 and later, and is the default for versions of Amazon EMR earlier than 5.1.0.</p>
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
        /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI. If specified, Amazon EMR uses this AMI when it launches cluster EC2 instances. For more information about custom AMIs in Amazon EMR, see <a href="https://docs.aws.amazon.com/emr/latest/ManagementGuide/emr-custom-ami.html">Using a Custom AMI</a> in the <i>Amazon EMR Management Guide</i>. If omitted, the cluster uses the base Linux AMI for the <code>ReleaseLabel</code> specified. For Amazon EMR versions 2.x and 3.x, use <code>AmiVersion</code> instead.</p> <p>For information about creating a custom AMI, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/creating-an-ami-ebs.html">Creating an Amazon EBS-Backed Linux AMI</a> in the <i>Amazon Elastic Compute Cloud User Guide for Linux Instances</i>. For information about finding an AMI ID, see <a href="https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/finding-an-ami.html">Finding a Linux AMI</a>.</p>
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
        /// <p>Applies only when <code>CustomAmiID</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>, which indicates that only security updates are applied. If <code>NONE</code> is specified, no updates are applied, and all updates must be applied manually.</p>
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
        /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
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
        /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
        pub fn managed_scaling_policy(mut self, input: crate::model::ManagedScalingPolicy) -> Self {
            self.managed_scaling_policy = Some(input);
            self
        }
        pub fn set_managed_scaling_policy(
            mut self,
            input: std::option::Option<crate::model::ManagedScalingPolicy>,
        ) -> Self {
            self.managed_scaling_policy = input;
            self
        }
        pub fn get_managed_scaling_policy(
            &self,
        ) -> &std::option::Option<crate::model::ManagedScalingPolicy> {
            &self.managed_scaling_policy
        }
        /// Consumes the builder and constructs a [`RunJobFlowInput`](crate::input::RunJobFlowInput)
        pub fn build(self) -> crate::input::RunJobFlowInput {
            crate::input::RunJobFlowInput {
                name: self.name,
                log_uri: self.log_uri,
                additional_info: self.additional_info,
                ami_version: self.ami_version,
                release_label: self.release_label,
                instances: self.instances,
                steps: self.steps,
                bootstrap_actions: self.bootstrap_actions,
                supported_products: self.supported_products,
                new_supported_products: self.new_supported_products,
                applications: self.applications,
                configurations: self.configurations,
                visible_to_all_users: self.visible_to_all_users,
                job_flow_role: self.job_flow_role,
                service_role: self.service_role,
                tags: self.tags,
                security_configuration: self.security_configuration,
                auto_scaling_role: self.auto_scaling_role,
                scale_down_behavior: self.scale_down_behavior,
                custom_ami_id: self.custom_ami_id,
                ebs_root_volume_size: self.ebs_root_volume_size,
                repo_upgrade_on_boot: self.repo_upgrade_on_boot,
                kerberos_attributes: self.kerberos_attributes,
                step_concurrency_level: self.step_concurrency_level,
                managed_scaling_policy: self.managed_scaling_policy,
            }
        }
    }
}
impl RunJobFlowInput {
    /// Creates a new builder-style object to manufacture [`RunJobFlowInput`](crate::input::RunJobFlowInput)
    pub fn builder() -> crate::input::run_job_flow_input::Builder {
        crate::input::run_job_flow_input::Builder::default()
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
pub struct SetTerminationProtectionInput {
    /// <p>A list of strings that uniquely identify the clusters to protect. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>DescribeJobFlows</a>.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>A Boolean that indicates whether to protect the cluster and prevent the Amazon EC2 instances in the cluster from shutting down due to API calls, user intervention, or job-flow error.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub termination_protected: std::option::Option<bool>,
}
impl SetTerminationProtectionInput {
    /// <p>A list of strings that uniquely identify the clusters to protect. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>DescribeJobFlows</a>.</p>
    pub fn job_flow_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.job_flow_ids.as_deref()
    }
    /// <p>A Boolean that indicates whether to protect the cluster and prevent the Amazon EC2 instances in the cluster from shutting down due to API calls, user intervention, or job-flow error.</p>
    pub fn termination_protected(&self) -> std::option::Option<bool> {
        self.termination_protected
    }
}
impl std::fmt::Debug for SetTerminationProtectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetTerminationProtectionInput");
        formatter.field("job_flow_ids", &self.job_flow_ids);
        formatter.field("termination_protected", &self.termination_protected);
        formatter.finish()
    }
}
impl std::fmt::Display for SetTerminationProtectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("JobFlowIds", &self.job_flow_ids);
        shape.field("TerminationProtected", &self.termination_protected);
        shape.finish()
    }
}
/// See [`SetTerminationProtectionInput`](crate::input::SetTerminationProtectionInput)
pub mod set_termination_protection_input {
    /// A builder for [`SetTerminationProtectionInput`](crate::input::SetTerminationProtectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) termination_protected: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `job_flow_ids`.
        ///
        /// To override the contents of this collection use [`set_job_flow_ids`](Self::set_job_flow_ids).
        ///
        /// <p>A list of strings that uniquely identify the clusters to protect. This identifier is returned by <a>RunJobFlow</a> and can also be obtained from <a>DescribeJobFlows</a>.</p>
        pub fn job_flow_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.job_flow_ids.unwrap_or_default();
            v.push(input.into());
            self.job_flow_ids = Some(v);
            self
        }
        pub fn set_job_flow_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.job_flow_ids = input;
            self
        }
        pub fn get_job_flow_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.job_flow_ids
        }
        /// <p>A Boolean that indicates whether to protect the cluster and prevent the Amazon EC2 instances in the cluster from shutting down due to API calls, user intervention, or job-flow error.</p>
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
        /// Consumes the builder and constructs a [`SetTerminationProtectionInput`](crate::input::SetTerminationProtectionInput)
        pub fn build(self) -> crate::input::SetTerminationProtectionInput {
            crate::input::SetTerminationProtectionInput {
                job_flow_ids: self.job_flow_ids,
                termination_protected: self.termination_protected,
            }
        }
    }
}
impl SetTerminationProtectionInput {
    /// Creates a new builder-style object to manufacture [`SetTerminationProtectionInput`](crate::input::SetTerminationProtectionInput)
    pub fn builder() -> crate::input::set_termination_protection_input::Builder {
        crate::input::set_termination_protection_input::Builder::default()
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
pub struct SetVisibleToAllUsersInput {
    /// <p>The unique identifier of the job flow (cluster).</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub visible_to_all_users: std::option::Option<bool>,
}
impl SetVisibleToAllUsersInput {
    /// <p>The unique identifier of the job flow (cluster).</p>
    pub fn job_flow_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.job_flow_ids.as_deref()
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(&self) -> std::option::Option<bool> {
        self.visible_to_all_users
    }
}
impl std::fmt::Debug for SetVisibleToAllUsersInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetVisibleToAllUsersInput");
        formatter.field("job_flow_ids", &self.job_flow_ids);
        formatter.field("visible_to_all_users", &self.visible_to_all_users);
        formatter.finish()
    }
}
impl std::fmt::Display for SetVisibleToAllUsersInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("JobFlowIds", &self.job_flow_ids);
        shape.field("VisibleToAllUsers", &self.visible_to_all_users);
        shape.finish()
    }
}
/// See [`SetVisibleToAllUsersInput`](crate::input::SetVisibleToAllUsersInput)
pub mod set_visible_to_all_users_input {
    /// A builder for [`SetVisibleToAllUsersInput`](crate::input::SetVisibleToAllUsersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) visible_to_all_users: std::option::Option<bool>,
    }
    impl Builder {
        /// Appends an item to `job_flow_ids`.
        ///
        /// To override the contents of this collection use [`set_job_flow_ids`](Self::set_job_flow_ids).
        ///
        /// <p>The unique identifier of the job flow (cluster).</p>
        pub fn job_flow_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.job_flow_ids.unwrap_or_default();
            v.push(input.into());
            self.job_flow_ids = Some(v);
            self
        }
        pub fn set_job_flow_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.job_flow_ids = input;
            self
        }
        pub fn get_job_flow_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.job_flow_ids
        }
        /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
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
        /// Consumes the builder and constructs a [`SetVisibleToAllUsersInput`](crate::input::SetVisibleToAllUsersInput)
        pub fn build(self) -> crate::input::SetVisibleToAllUsersInput {
            crate::input::SetVisibleToAllUsersInput {
                job_flow_ids: self.job_flow_ids,
                visible_to_all_users: self.visible_to_all_users,
            }
        }
    }
}
impl SetVisibleToAllUsersInput {
    /// Creates a new builder-style object to manufacture [`SetVisibleToAllUsersInput`](crate::input::SetVisibleToAllUsersInput)
    pub fn builder() -> crate::input::set_visible_to_all_users_input::Builder {
        crate::input::set_visible_to_all_users_input::Builder::default()
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
pub struct TerminateJobFlowsInput {
    /// <p>A list of job flows to be shut down.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl TerminateJobFlowsInput {
    /// <p>A list of job flows to be shut down.</p>
    pub fn job_flow_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.job_flow_ids.as_deref()
    }
}
impl std::fmt::Debug for TerminateJobFlowsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TerminateJobFlowsInput");
        formatter.field("job_flow_ids", &self.job_flow_ids);
        formatter.finish()
    }
}
impl std::fmt::Display for TerminateJobFlowsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("JobFlowIds", &self.job_flow_ids);
        shape.finish()
    }
}
/// See [`TerminateJobFlowsInput`](crate::input::TerminateJobFlowsInput)
pub mod terminate_job_flows_input {
    /// A builder for [`TerminateJobFlowsInput`](crate::input::TerminateJobFlowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `job_flow_ids`.
        ///
        /// To override the contents of this collection use [`set_job_flow_ids`](Self::set_job_flow_ids).
        ///
        /// <p>A list of job flows to be shut down.</p>
        pub fn job_flow_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.job_flow_ids.unwrap_or_default();
            v.push(input.into());
            self.job_flow_ids = Some(v);
            self
        }
        pub fn set_job_flow_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.job_flow_ids = input;
            self
        }
        pub fn get_job_flow_ids(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.job_flow_ids
        }
        /// Consumes the builder and constructs a [`TerminateJobFlowsInput`](crate::input::TerminateJobFlowsInput)
        pub fn build(self) -> crate::input::TerminateJobFlowsInput {
            crate::input::TerminateJobFlowsInput {
                job_flow_ids: self.job_flow_ids,
            }
        }
    }
}
impl TerminateJobFlowsInput {
    /// Creates a new builder-style object to manufacture [`TerminateJobFlowsInput`](crate::input::TerminateJobFlowsInput)
    pub fn builder() -> crate::input::terminate_job_flows_input::Builder {
        crate::input::terminate_job_flows_input::Builder::default()
    }
}
