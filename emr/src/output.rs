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
pub struct AddInstanceFleetOutput {
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
    pub instance_fleet_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
}
impl AddInstanceFleetOutput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet_id(&self) -> std::option::Option<&str> {
        self.instance_fleet_id.as_deref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl std::fmt::Debug for AddInstanceFleetOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddInstanceFleetOutput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_fleet_id", &self.instance_fleet_id);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for AddInstanceFleetOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceFleetId", &self.instance_fleet_id);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.finish()
    }
}
/// See [`AddInstanceFleetOutput`](crate::output::AddInstanceFleetOutput)
pub mod add_instance_fleet_output {
    /// A builder for [`AddInstanceFleetOutput`](crate::output::AddInstanceFleetOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_fleet_id: std::option::Option<std::string::String>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`AddInstanceFleetOutput`](crate::output::AddInstanceFleetOutput)
        pub fn build(self) -> crate::output::AddInstanceFleetOutput {
            crate::output::AddInstanceFleetOutput {
                cluster_id: self.cluster_id,
                instance_fleet_id: self.instance_fleet_id,
                cluster_arn: self.cluster_arn,
            }
        }
    }
}
impl AddInstanceFleetOutput {
    /// Creates a new builder-style object to manufacture [`AddInstanceFleetOutput`](crate::output::AddInstanceFleetOutput)
    pub fn builder() -> crate::output::add_instance_fleet_output::Builder {
        crate::output::add_instance_fleet_output::Builder::default()
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
pub struct AddInstanceGroupsOutput {
    /// <p>The job flow ID in which the instance groups are added.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_id: std::option::Option<std::string::String>,
    /// <p>Instance group IDs of the newly created instance groups.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
}
impl AddInstanceGroupsOutput {
    /// <p>The job flow ID in which the instance groups are added.</p>
    pub fn job_flow_id(&self) -> std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>Instance group IDs of the newly created instance groups.</p>
    pub fn instance_group_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.instance_group_ids.as_deref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl std::fmt::Debug for AddInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddInstanceGroupsOutput");
        formatter.field("job_flow_id", &self.job_flow_id);
        formatter.field("instance_group_ids", &self.instance_group_ids);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for AddInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("JobFlowId", &self.job_flow_id);
        shape.list("InstanceGroupIds", &self.instance_group_ids);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.finish()
    }
}
/// See [`AddInstanceGroupsOutput`](crate::output::AddInstanceGroupsOutput)
pub mod add_instance_groups_output {
    /// A builder for [`AddInstanceGroupsOutput`](crate::output::AddInstanceGroupsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The job flow ID in which the instance groups are added.</p>
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
        /// Appends an item to `instance_group_ids`.
        ///
        /// To override the contents of this collection use [`set_instance_group_ids`](Self::set_instance_group_ids).
        ///
        /// <p>Instance group IDs of the newly created instance groups.</p>
        pub fn instance_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instance_group_ids.unwrap_or_default();
            v.push(input.into());
            self.instance_group_ids = Some(v);
            self
        }
        pub fn set_instance_group_ids(
            mut self,
            input: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.instance_group_ids = input;
            self
        }
        pub fn get_instance_group_ids(
            &self,
        ) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.instance_group_ids
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
        /// Consumes the builder and constructs a [`AddInstanceGroupsOutput`](crate::output::AddInstanceGroupsOutput)
        pub fn build(self) -> crate::output::AddInstanceGroupsOutput {
            crate::output::AddInstanceGroupsOutput {
                job_flow_id: self.job_flow_id,
                instance_group_ids: self.instance_group_ids,
                cluster_arn: self.cluster_arn,
            }
        }
    }
}
impl AddInstanceGroupsOutput {
    /// Creates a new builder-style object to manufacture [`AddInstanceGroupsOutput`](crate::output::AddInstanceGroupsOutput)
    pub fn builder() -> crate::output::add_instance_groups_output::Builder {
        crate::output::add_instance_groups_output::Builder::default()
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
pub struct AddJobFlowStepsOutput {
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl AddJobFlowStepsOutput {
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    pub fn step_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.step_ids.as_deref()
    }
}
impl std::fmt::Debug for AddJobFlowStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddJobFlowStepsOutput");
        formatter.field("step_ids", &self.step_ids);
        formatter.finish()
    }
}
impl std::fmt::Display for AddJobFlowStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("StepIds", &self.step_ids);
        shape.finish()
    }
}
/// See [`AddJobFlowStepsOutput`](crate::output::AddJobFlowStepsOutput)
pub mod add_job_flow_steps_output {
    /// A builder for [`AddJobFlowStepsOutput`](crate::output::AddJobFlowStepsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) step_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `step_ids`.
        ///
        /// To override the contents of this collection use [`set_step_ids`](Self::set_step_ids).
        ///
        /// <p>The identifiers of the list of steps added to the job flow.</p>
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
        /// Consumes the builder and constructs a [`AddJobFlowStepsOutput`](crate::output::AddJobFlowStepsOutput)
        pub fn build(self) -> crate::output::AddJobFlowStepsOutput {
            crate::output::AddJobFlowStepsOutput {
                step_ids: self.step_ids,
            }
        }
    }
}
impl AddJobFlowStepsOutput {
    /// Creates a new builder-style object to manufacture [`AddJobFlowStepsOutput`](crate::output::AddJobFlowStepsOutput)
    pub fn builder() -> crate::output::add_job_flow_steps_output::Builder {
        crate::output::add_job_flow_steps_output::Builder::default()
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
pub struct AddTagsOutput {}
impl std::fmt::Debug for AddTagsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddTagsOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for AddTagsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`AddTagsOutput`](crate::output::AddTagsOutput)
pub mod add_tags_output {
    /// A builder for [`AddTagsOutput`](crate::output::AddTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`AddTagsOutput`](crate::output::AddTagsOutput)
        pub fn build(self) -> crate::output::AddTagsOutput {
            crate::output::AddTagsOutput {}
        }
    }
}
impl AddTagsOutput {
    /// Creates a new builder-style object to manufacture [`AddTagsOutput`](crate::output::AddTagsOutput)
    pub fn builder() -> crate::output::add_tags_output::Builder {
        crate::output::add_tags_output::Builder::default()
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
pub struct CancelStepsOutput {
    /// <p>A list of <a>CancelStepsInfo</a>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cancel_steps_info_list: std::option::Option<std::vec::Vec<crate::model::CancelStepsInfo>>,
}
impl CancelStepsOutput {
    /// <p>A list of <a>CancelStepsInfo</a>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    pub fn cancel_steps_info_list(&self) -> std::option::Option<&[crate::model::CancelStepsInfo]> {
        self.cancel_steps_info_list.as_deref()
    }
}
impl std::fmt::Debug for CancelStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CancelStepsOutput");
        formatter.field("cancel_steps_info_list", &self.cancel_steps_info_list);
        formatter.finish()
    }
}
impl std::fmt::Display for CancelStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("CancelStepsInfoList", &self.cancel_steps_info_list);
        shape.finish()
    }
}
/// See [`CancelStepsOutput`](crate::output::CancelStepsOutput)
pub mod cancel_steps_output {
    /// A builder for [`CancelStepsOutput`](crate::output::CancelStepsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cancel_steps_info_list: std::option::Option<std::vec::Vec<crate::model::CancelStepsInfo>>,
    }
    impl Builder {
        /// Appends an item to `cancel_steps_info_list`.
        ///
        /// To override the contents of this collection use [`set_cancel_steps_info_list`](Self::set_cancel_steps_info_list).
        ///
        /// <p>A list of <a>CancelStepsInfo</a>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
        pub fn cancel_steps_info_list(
            mut self,
            input: impl Into<crate::model::CancelStepsInfo>,
        ) -> Self {
            let mut v = self.cancel_steps_info_list.unwrap_or_default();
            v.push(input.into());
            self.cancel_steps_info_list = Some(v);
            self
        }
        pub fn set_cancel_steps_info_list(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::CancelStepsInfo>>,
        ) -> Self {
            self.cancel_steps_info_list = input;
            self
        }
        pub fn get_cancel_steps_info_list(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::CancelStepsInfo>> {
            &self.cancel_steps_info_list
        }
        /// Consumes the builder and constructs a [`CancelStepsOutput`](crate::output::CancelStepsOutput)
        pub fn build(self) -> crate::output::CancelStepsOutput {
            crate::output::CancelStepsOutput {
                cancel_steps_info_list: self.cancel_steps_info_list,
            }
        }
    }
}
impl CancelStepsOutput {
    /// Creates a new builder-style object to manufacture [`CancelStepsOutput`](crate::output::CancelStepsOutput)
    pub fn builder() -> crate::output::cancel_steps_output::Builder {
        crate::output::cancel_steps_output::Builder::default()
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
pub struct CreateSecurityConfigurationOutput {
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
impl CreateSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
}
impl std::fmt::Debug for CreateSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSecurityConfigurationOutput");
        formatter.field("name", &self.name);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for CreateSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.finish()
    }
}
/// See [`CreateSecurityConfigurationOutput`](crate::output::CreateSecurityConfigurationOutput)
pub mod create_security_configuration_output {
    /// A builder for [`CreateSecurityConfigurationOutput`](crate::output::CreateSecurityConfigurationOutput)
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
        /// Consumes the builder and constructs a [`CreateSecurityConfigurationOutput`](crate::output::CreateSecurityConfigurationOutput)
        pub fn build(self) -> crate::output::CreateSecurityConfigurationOutput {
            crate::output::CreateSecurityConfigurationOutput {
                name: self.name,
                creation_date_time: self.creation_date_time,
            }
        }
    }
}
impl CreateSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`CreateSecurityConfigurationOutput`](crate::output::CreateSecurityConfigurationOutput)
    pub fn builder() -> crate::output::create_security_configuration_output::Builder {
        crate::output::create_security_configuration_output::Builder::default()
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
pub struct DeleteSecurityConfigurationOutput {}
impl std::fmt::Debug for DeleteSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteSecurityConfigurationOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for DeleteSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`DeleteSecurityConfigurationOutput`](crate::output::DeleteSecurityConfigurationOutput)
pub mod delete_security_configuration_output {
    /// A builder for [`DeleteSecurityConfigurationOutput`](crate::output::DeleteSecurityConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteSecurityConfigurationOutput`](crate::output::DeleteSecurityConfigurationOutput)
        pub fn build(self) -> crate::output::DeleteSecurityConfigurationOutput {
            crate::output::DeleteSecurityConfigurationOutput {}
        }
    }
}
impl DeleteSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DeleteSecurityConfigurationOutput`](crate::output::DeleteSecurityConfigurationOutput)
    pub fn builder() -> crate::output::delete_security_configuration_output::Builder {
        crate::output::delete_security_configuration_output::Builder::default()
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
pub struct DescribeClusterOutput {
    /// <p>This output contains the details for the requested cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster: std::option::Option<crate::model::Cluster>,
}
impl DescribeClusterOutput {
    /// <p>This output contains the details for the requested cluster.</p>
    pub fn cluster(&self) -> std::option::Option<&crate::model::Cluster> {
        self.cluster.as_ref()
    }
}
impl std::fmt::Debug for DescribeClusterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeClusterOutput");
        formatter.field("cluster", &self.cluster);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeClusterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Cluster", &self.cluster);
        shape.finish()
    }
}
/// See [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
pub mod describe_cluster_output {
    /// A builder for [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster: std::option::Option<crate::model::Cluster>,
    }
    impl Builder {
        /// <p>This output contains the details for the requested cluster.</p>
        pub fn cluster(mut self, input: crate::model::Cluster) -> Self {
            self.cluster = Some(input);
            self
        }
        pub fn set_cluster(mut self, input: std::option::Option<crate::model::Cluster>) -> Self {
            self.cluster = input;
            self
        }
        pub fn get_cluster(&self) -> &std::option::Option<crate::model::Cluster> {
            &self.cluster
        }
        /// Consumes the builder and constructs a [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
        pub fn build(self) -> crate::output::DescribeClusterOutput {
            crate::output::DescribeClusterOutput {
                cluster: self.cluster,
            }
        }
    }
}
impl DescribeClusterOutput {
    /// Creates a new builder-style object to manufacture [`DescribeClusterOutput`](crate::output::DescribeClusterOutput)
    pub fn builder() -> crate::output::describe_cluster_output::Builder {
        crate::output::describe_cluster_output::Builder::default()
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
pub struct DescribeJobFlowsOutput {
    /// <p>A list of job flows matching the parameters supplied.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flows: std::option::Option<std::vec::Vec<crate::model::JobFlowDetail>>,
}
impl DescribeJobFlowsOutput {
    /// <p>A list of job flows matching the parameters supplied.</p>
    pub fn job_flows(&self) -> std::option::Option<&[crate::model::JobFlowDetail]> {
        self.job_flows.as_deref()
    }
}
impl std::fmt::Debug for DescribeJobFlowsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeJobFlowsOutput");
        formatter.field("job_flows", &self.job_flows);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeJobFlowsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("JobFlows", &self.job_flows);
        shape.finish()
    }
}
/// See [`DescribeJobFlowsOutput`](crate::output::DescribeJobFlowsOutput)
pub mod describe_job_flows_output {
    /// A builder for [`DescribeJobFlowsOutput`](crate::output::DescribeJobFlowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flows: std::option::Option<std::vec::Vec<crate::model::JobFlowDetail>>,
    }
    impl Builder {
        /// Appends an item to `job_flows`.
        ///
        /// To override the contents of this collection use [`set_job_flows`](Self::set_job_flows).
        ///
        /// <p>A list of job flows matching the parameters supplied.</p>
        pub fn job_flows(mut self, input: impl Into<crate::model::JobFlowDetail>) -> Self {
            let mut v = self.job_flows.unwrap_or_default();
            v.push(input.into());
            self.job_flows = Some(v);
            self
        }
        pub fn set_job_flows(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::JobFlowDetail>>,
        ) -> Self {
            self.job_flows = input;
            self
        }
        pub fn get_job_flows(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::JobFlowDetail>> {
            &self.job_flows
        }
        /// Consumes the builder and constructs a [`DescribeJobFlowsOutput`](crate::output::DescribeJobFlowsOutput)
        pub fn build(self) -> crate::output::DescribeJobFlowsOutput {
            crate::output::DescribeJobFlowsOutput {
                job_flows: self.job_flows,
            }
        }
    }
}
impl DescribeJobFlowsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeJobFlowsOutput`](crate::output::DescribeJobFlowsOutput)
    pub fn builder() -> crate::output::describe_job_flows_output::Builder {
        crate::output::describe_job_flows_output::Builder::default()
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
pub struct DescribeSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub name: std::option::Option<std::string::String>,
    /// <p>The security configuration details in JSON format.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub security_configuration: std::option::Option<std::string::String>,
    /// <p>The date and time the security configuration was created</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
}
impl DescribeSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The security configuration details in JSON format.</p>
    pub fn security_configuration(&self) -> std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
    /// <p>The date and time the security configuration was created</p>
    pub fn creation_date_time(&self) -> std::option::Option<smithy_types::Instant> {
        self.creation_date_time
    }
}
impl std::fmt::Debug for DescribeSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeSecurityConfigurationOutput");
        formatter.field("name", &self.name);
        formatter.field("security_configuration", &self.security_configuration);
        formatter.field("creation_date_time", &self.creation_date_time);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeSecurityConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Name", &self.name);
        shape.field("SecurityConfiguration", &self.security_configuration);
        shape.field("CreationDateTime", &self.creation_date_time);
        shape.finish()
    }
}
/// See [`DescribeSecurityConfigurationOutput`](crate::output::DescribeSecurityConfigurationOutput)
pub mod describe_security_configuration_output {
    /// A builder for [`DescribeSecurityConfigurationOutput`](crate::output::DescribeSecurityConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) security_configuration: std::option::Option<std::string::String>,
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
        /// <p>The security configuration details in JSON format.</p>
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
        /// <p>The date and time the security configuration was created</p>
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
        /// Consumes the builder and constructs a [`DescribeSecurityConfigurationOutput`](crate::output::DescribeSecurityConfigurationOutput)
        pub fn build(self) -> crate::output::DescribeSecurityConfigurationOutput {
            crate::output::DescribeSecurityConfigurationOutput {
                name: self.name,
                security_configuration: self.security_configuration,
                creation_date_time: self.creation_date_time,
            }
        }
    }
}
impl DescribeSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityConfigurationOutput`](crate::output::DescribeSecurityConfigurationOutput)
    pub fn builder() -> crate::output::describe_security_configuration_output::Builder {
        crate::output::describe_security_configuration_output::Builder::default()
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
pub struct DescribeStepOutput {
    /// <p>The step details for the requested step identifier.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step: std::option::Option<crate::model::Step>,
}
impl DescribeStepOutput {
    /// <p>The step details for the requested step identifier.</p>
    pub fn step(&self) -> std::option::Option<&crate::model::Step> {
        self.step.as_ref()
    }
}
impl std::fmt::Debug for DescribeStepOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeStepOutput");
        formatter.field("step", &self.step);
        formatter.finish()
    }
}
impl std::fmt::Display for DescribeStepOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("Step", &self.step);
        shape.finish()
    }
}
/// See [`DescribeStepOutput`](crate::output::DescribeStepOutput)
pub mod describe_step_output {
    /// A builder for [`DescribeStepOutput`](crate::output::DescribeStepOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) step: std::option::Option<crate::model::Step>,
    }
    impl Builder {
        /// <p>The step details for the requested step identifier.</p>
        pub fn step(mut self, input: crate::model::Step) -> Self {
            self.step = Some(input);
            self
        }
        pub fn set_step(mut self, input: std::option::Option<crate::model::Step>) -> Self {
            self.step = input;
            self
        }
        pub fn get_step(&self) -> &std::option::Option<crate::model::Step> {
            &self.step
        }
        /// Consumes the builder and constructs a [`DescribeStepOutput`](crate::output::DescribeStepOutput)
        pub fn build(self) -> crate::output::DescribeStepOutput {
            crate::output::DescribeStepOutput {
                step: self.step,
            }
        }
    }
}
impl DescribeStepOutput {
    /// Creates a new builder-style object to manufacture [`DescribeStepOutput`](crate::output::DescribeStepOutput)
    pub fn builder() -> crate::output::describe_step_output::Builder {
        crate::output::describe_step_output::Builder::default()
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
pub struct GetBlockPublicAccessConfigurationOutput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating the block public access configuration to remove the exception.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub block_public_access_configuration: std::option::Option<crate::model::BlockPublicAccessConfiguration>,
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created. Each time a configuration for block public access is updated, Amazon EMR updates this metadata.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub block_public_access_configuration_metadata: std::option::Option<crate::model::BlockPublicAccessConfigurationMetadata>,
}
impl GetBlockPublicAccessConfigurationOutput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating the block public access configuration to remove the exception.</p>
    pub fn block_public_access_configuration(
        &self,
    ) -> std::option::Option<&crate::model::BlockPublicAccessConfiguration> {
        self.block_public_access_configuration.as_ref()
    }
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created. Each time a configuration for block public access is updated, Amazon EMR updates this metadata.</p>
    pub fn block_public_access_configuration_metadata(
        &self,
    ) -> std::option::Option<&crate::model::BlockPublicAccessConfigurationMetadata> {
        self.block_public_access_configuration_metadata.as_ref()
    }
}
impl std::fmt::Debug for GetBlockPublicAccessConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetBlockPublicAccessConfigurationOutput");
        formatter.field("block_public_access_configuration", &self.block_public_access_configuration);
        formatter.field("block_public_access_configuration_metadata", &self.block_public_access_configuration_metadata);
        formatter.finish()
    }
}
impl std::fmt::Display for GetBlockPublicAccessConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("BlockPublicAccessConfiguration", &self.block_public_access_configuration);
        shape.field("BlockPublicAccessConfigurationMetadata", &self.block_public_access_configuration_metadata);
        shape.finish()
    }
}
/// See [`GetBlockPublicAccessConfigurationOutput`](crate::output::GetBlockPublicAccessConfigurationOutput)
pub mod get_block_public_access_configuration_output {
    /// A builder for [`GetBlockPublicAccessConfigurationOutput`](crate::output::GetBlockPublicAccessConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) block_public_access_configuration: std::option::Option<crate::model::BlockPublicAccessConfiguration>,
        pub(crate) block_public_access_configuration_metadata: std::option::Option<crate::model::BlockPublicAccessConfigurationMetadata>,
    }
    impl Builder {
        /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>PermittedPublicSecurityGroupRuleRanges</code> in the <code>BlockPublicAccessConfiguration</code>. By default, Port 22 (SSH) is an exception, and public access is allowed on this port. You can change this by updating the block public access configuration to remove the exception.</p>
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
        /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created. Each time a configuration for block public access is updated, Amazon EMR updates this metadata.</p>
        pub fn block_public_access_configuration_metadata(
            mut self,
            input: crate::model::BlockPublicAccessConfigurationMetadata,
        ) -> Self {
            self.block_public_access_configuration_metadata = Some(input);
            self
        }
        pub fn set_block_public_access_configuration_metadata(
            mut self,
            input: std::option::Option<crate::model::BlockPublicAccessConfigurationMetadata>,
        ) -> Self {
            self.block_public_access_configuration_metadata = input;
            self
        }
        pub fn get_block_public_access_configuration_metadata(
            &self,
        ) -> &std::option::Option<crate::model::BlockPublicAccessConfigurationMetadata> {
            &self.block_public_access_configuration_metadata
        }
        /// Consumes the builder and constructs a [`GetBlockPublicAccessConfigurationOutput`](crate::output::GetBlockPublicAccessConfigurationOutput)
        pub fn build(self) -> crate::output::GetBlockPublicAccessConfigurationOutput {
            crate::output::GetBlockPublicAccessConfigurationOutput {
                block_public_access_configuration: self.block_public_access_configuration,
                block_public_access_configuration_metadata: self.block_public_access_configuration_metadata,
            }
        }
    }
}
impl GetBlockPublicAccessConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`GetBlockPublicAccessConfigurationOutput`](crate::output::GetBlockPublicAccessConfigurationOutput)
    pub fn builder() -> crate::output::get_block_public_access_configuration_output::Builder {
        crate::output::get_block_public_access_configuration_output::Builder::default()
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
pub struct GetManagedScalingPolicyOutput {
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
}
impl GetManagedScalingPolicyOutput {
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(
        &self,
    ) -> std::option::Option<&crate::model::ManagedScalingPolicy> {
        self.managed_scaling_policy.as_ref()
    }
}
impl std::fmt::Debug for GetManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetManagedScalingPolicyOutput");
        formatter.field("managed_scaling_policy", &self.managed_scaling_policy);
        formatter.finish()
    }
}
impl std::fmt::Display for GetManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ManagedScalingPolicy", &self.managed_scaling_policy);
        shape.finish()
    }
}
/// See [`GetManagedScalingPolicyOutput`](crate::output::GetManagedScalingPolicyOutput)
pub mod get_managed_scaling_policy_output {
    /// A builder for [`GetManagedScalingPolicyOutput`](crate::output::GetManagedScalingPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) managed_scaling_policy: std::option::Option<crate::model::ManagedScalingPolicy>,
    }
    impl Builder {
        /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
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
        /// Consumes the builder and constructs a [`GetManagedScalingPolicyOutput`](crate::output::GetManagedScalingPolicyOutput)
        pub fn build(self) -> crate::output::GetManagedScalingPolicyOutput {
            crate::output::GetManagedScalingPolicyOutput {
                managed_scaling_policy: self.managed_scaling_policy,
            }
        }
    }
}
impl GetManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetManagedScalingPolicyOutput`](crate::output::GetManagedScalingPolicyOutput)
    pub fn builder() -> crate::output::get_managed_scaling_policy_output::Builder {
        crate::output::get_managed_scaling_policy_output::Builder::default()
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
pub struct ListBootstrapActionsOutput {
    /// <p>The bootstrap actions associated with the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::Command>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListBootstrapActionsOutput {
    /// <p>The bootstrap actions associated with the cluster.</p>
    pub fn bootstrap_actions(&self) -> std::option::Option<&[crate::model::Command]> {
        self.bootstrap_actions.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListBootstrapActionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListBootstrapActionsOutput");
        formatter.field("bootstrap_actions", &self.bootstrap_actions);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListBootstrapActionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("BootstrapActions", &self.bootstrap_actions);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListBootstrapActionsOutput`](crate::output::ListBootstrapActionsOutput)
pub mod list_bootstrap_actions_output {
    /// A builder for [`ListBootstrapActionsOutput`](crate::output::ListBootstrapActionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bootstrap_actions: std::option::Option<std::vec::Vec<crate::model::Command>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `bootstrap_actions`.
        ///
        /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
        ///
        /// <p>The bootstrap actions associated with the cluster.</p>
        pub fn bootstrap_actions(mut self, input: impl Into<crate::model::Command>) -> Self {
            let mut v = self.bootstrap_actions.unwrap_or_default();
            v.push(input.into());
            self.bootstrap_actions = Some(v);
            self
        }
        pub fn set_bootstrap_actions(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Command>>,
        ) -> Self {
            self.bootstrap_actions = input;
            self
        }
        pub fn get_bootstrap_actions(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::Command>> {
            &self.bootstrap_actions
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
        /// Consumes the builder and constructs a [`ListBootstrapActionsOutput`](crate::output::ListBootstrapActionsOutput)
        pub fn build(self) -> crate::output::ListBootstrapActionsOutput {
            crate::output::ListBootstrapActionsOutput {
                bootstrap_actions: self.bootstrap_actions,
                marker: self.marker,
            }
        }
    }
}
impl ListBootstrapActionsOutput {
    /// Creates a new builder-style object to manufacture [`ListBootstrapActionsOutput`](crate::output::ListBootstrapActionsOutput)
    pub fn builder() -> crate::output::list_bootstrap_actions_output::Builder {
        crate::output::list_bootstrap_actions_output::Builder::default()
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
pub struct ListClustersOutput {
    /// <p>The list of clusters for the account based on the given filters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub clusters: std::option::Option<std::vec::Vec<crate::model::ClusterSummary>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListClustersOutput {
    /// <p>The list of clusters for the account based on the given filters.</p>
    pub fn clusters(&self) -> std::option::Option<&[crate::model::ClusterSummary]> {
        self.clusters.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListClustersOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListClustersOutput");
        formatter.field("clusters", &self.clusters);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListClustersOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("Clusters", &self.clusters);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListClustersOutput`](crate::output::ListClustersOutput)
pub mod list_clusters_output {
    /// A builder for [`ListClustersOutput`](crate::output::ListClustersOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) clusters: std::option::Option<std::vec::Vec<crate::model::ClusterSummary>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `clusters`.
        ///
        /// To override the contents of this collection use [`set_clusters`](Self::set_clusters).
        ///
        /// <p>The list of clusters for the account based on the given filters.</p>
        pub fn clusters(mut self, input: impl Into<crate::model::ClusterSummary>) -> Self {
            let mut v = self.clusters.unwrap_or_default();
            v.push(input.into());
            self.clusters = Some(v);
            self
        }
        pub fn set_clusters(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::ClusterSummary>>,
        ) -> Self {
            self.clusters = input;
            self
        }
        pub fn get_clusters(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::ClusterSummary>> {
            &self.clusters
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
        /// Consumes the builder and constructs a [`ListClustersOutput`](crate::output::ListClustersOutput)
        pub fn build(self) -> crate::output::ListClustersOutput {
            crate::output::ListClustersOutput {
                clusters: self.clusters,
                marker: self.marker,
            }
        }
    }
}
impl ListClustersOutput {
    /// Creates a new builder-style object to manufacture [`ListClustersOutput`](crate::output::ListClustersOutput)
    pub fn builder() -> crate::output::list_clusters_output::Builder {
        crate::output::list_clusters_output::Builder::default()
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
pub struct ListInstanceFleetsOutput {
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_fleets: std::option::Option<std::vec::Vec<crate::model::InstanceFleet>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstanceFleetsOutput {
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    pub fn instance_fleets(&self) -> std::option::Option<&[crate::model::InstanceFleet]> {
        self.instance_fleets.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstanceFleetsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstanceFleetsOutput");
        formatter.field("instance_fleets", &self.instance_fleets);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstanceFleetsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("InstanceFleets", &self.instance_fleets);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstanceFleetsOutput`](crate::output::ListInstanceFleetsOutput)
pub mod list_instance_fleets_output {
    /// A builder for [`ListInstanceFleetsOutput`](crate::output::ListInstanceFleetsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_fleets: std::option::Option<std::vec::Vec<crate::model::InstanceFleet>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instance_fleets`.
        ///
        /// To override the contents of this collection use [`set_instance_fleets`](Self::set_instance_fleets).
        ///
        /// <p>The list of instance fleets for the cluster and given filters.</p>
        pub fn instance_fleets(mut self, input: impl Into<crate::model::InstanceFleet>) -> Self {
            let mut v = self.instance_fleets.unwrap_or_default();
            v.push(input.into());
            self.instance_fleets = Some(v);
            self
        }
        pub fn set_instance_fleets(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceFleet>>,
        ) -> Self {
            self.instance_fleets = input;
            self
        }
        pub fn get_instance_fleets(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceFleet>> {
            &self.instance_fleets
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
        /// Consumes the builder and constructs a [`ListInstanceFleetsOutput`](crate::output::ListInstanceFleetsOutput)
        pub fn build(self) -> crate::output::ListInstanceFleetsOutput {
            crate::output::ListInstanceFleetsOutput {
                instance_fleets: self.instance_fleets,
                marker: self.marker,
            }
        }
    }
}
impl ListInstanceFleetsOutput {
    /// Creates a new builder-style object to manufacture [`ListInstanceFleetsOutput`](crate::output::ListInstanceFleetsOutput)
    pub fn builder() -> crate::output::list_instance_fleets_output::Builder {
        crate::output::list_instance_fleets_output::Builder::default()
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
pub struct ListInstanceGroupsOutput {
    /// <p>The list of instance groups for the cluster and given filters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroup>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstanceGroupsOutput {
    /// <p>The list of instance groups for the cluster and given filters.</p>
    pub fn instance_groups(&self) -> std::option::Option<&[crate::model::InstanceGroup]> {
        self.instance_groups.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstanceGroupsOutput");
        formatter.field("instance_groups", &self.instance_groups);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("InstanceGroups", &self.instance_groups);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstanceGroupsOutput`](crate::output::ListInstanceGroupsOutput)
pub mod list_instance_groups_output {
    /// A builder for [`ListInstanceGroupsOutput`](crate::output::ListInstanceGroupsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instance_groups: std::option::Option<std::vec::Vec<crate::model::InstanceGroup>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instance_groups`.
        ///
        /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
        ///
        /// <p>The list of instance groups for the cluster and given filters.</p>
        pub fn instance_groups(mut self, input: impl Into<crate::model::InstanceGroup>) -> Self {
            let mut v = self.instance_groups.unwrap_or_default();
            v.push(input.into());
            self.instance_groups = Some(v);
            self
        }
        pub fn set_instance_groups(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::InstanceGroup>>,
        ) -> Self {
            self.instance_groups = input;
            self
        }
        pub fn get_instance_groups(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::InstanceGroup>> {
            &self.instance_groups
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
        /// Consumes the builder and constructs a [`ListInstanceGroupsOutput`](crate::output::ListInstanceGroupsOutput)
        pub fn build(self) -> crate::output::ListInstanceGroupsOutput {
            crate::output::ListInstanceGroupsOutput {
                instance_groups: self.instance_groups,
                marker: self.marker,
            }
        }
    }
}
impl ListInstanceGroupsOutput {
    /// Creates a new builder-style object to manufacture [`ListInstanceGroupsOutput`](crate::output::ListInstanceGroupsOutput)
    pub fn builder() -> crate::output::list_instance_groups_output::Builder {
        crate::output::list_instance_groups_output::Builder::default()
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
pub struct ListInstancesOutput {
    /// <p>The list of instances for the cluster and given filters.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub instances: std::option::Option<std::vec::Vec<crate::model::Instance>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListInstancesOutput {
    /// <p>The list of instances for the cluster and given filters.</p>
    pub fn instances(&self) -> std::option::Option<&[crate::model::Instance]> {
        self.instances.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListInstancesOutput");
        formatter.field("instances", &self.instances);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("Instances", &self.instances);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListInstancesOutput`](crate::output::ListInstancesOutput)
pub mod list_instances_output {
    /// A builder for [`ListInstancesOutput`](crate::output::ListInstancesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) instances: std::option::Option<std::vec::Vec<crate::model::Instance>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>The list of instances for the cluster and given filters.</p>
        pub fn instances(mut self, input: impl Into<crate::model::Instance>) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input.into());
            self.instances = Some(v);
            self
        }
        pub fn set_instances(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::Instance>>,
        ) -> Self {
            self.instances = input;
            self
        }
        pub fn get_instances(&self) -> &std::option::Option<std::vec::Vec<crate::model::Instance>> {
            &self.instances
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
        /// Consumes the builder and constructs a [`ListInstancesOutput`](crate::output::ListInstancesOutput)
        pub fn build(self) -> crate::output::ListInstancesOutput {
            crate::output::ListInstancesOutput {
                instances: self.instances,
                marker: self.marker,
            }
        }
    }
}
impl ListInstancesOutput {
    /// Creates a new builder-style object to manufacture [`ListInstancesOutput`](crate::output::ListInstancesOutput)
    pub fn builder() -> crate::output::list_instances_output::Builder {
        crate::output::list_instances_output::Builder::default()
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
pub struct ListSecurityConfigurationsOutput {
    /// <p>The creation date and time, and name, of each security configuration.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub security_configurations: std::option::Option<std::vec::Vec<crate::model::SecurityConfigurationSummary>>,
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListSecurityConfigurationsOutput {
    /// <p>The creation date and time, and name, of each security configuration.</p>
    pub fn security_configurations(
        &self,
    ) -> std::option::Option<&[crate::model::SecurityConfigurationSummary]> {
        self.security_configurations.as_deref()
    }
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListSecurityConfigurationsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListSecurityConfigurationsOutput");
        formatter.field("security_configurations", &self.security_configurations);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListSecurityConfigurationsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("SecurityConfigurations", &self.security_configurations);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListSecurityConfigurationsOutput`](crate::output::ListSecurityConfigurationsOutput)
pub mod list_security_configurations_output {
    /// A builder for [`ListSecurityConfigurationsOutput`](crate::output::ListSecurityConfigurationsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) security_configurations: std::option::Option<std::vec::Vec<crate::model::SecurityConfigurationSummary>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `security_configurations`.
        ///
        /// To override the contents of this collection use [`set_security_configurations`](Self::set_security_configurations).
        ///
        /// <p>The creation date and time, and name, of each security configuration.</p>
        pub fn security_configurations(
            mut self,
            input: impl Into<crate::model::SecurityConfigurationSummary>,
        ) -> Self {
            let mut v = self.security_configurations.unwrap_or_default();
            v.push(input.into());
            self.security_configurations = Some(v);
            self
        }
        pub fn set_security_configurations(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::SecurityConfigurationSummary>>,
        ) -> Self {
            self.security_configurations = input;
            self
        }
        pub fn get_security_configurations(
            &self,
        ) -> &std::option::Option<std::vec::Vec<crate::model::SecurityConfigurationSummary>> {
            &self.security_configurations
        }
        /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
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
        /// Consumes the builder and constructs a [`ListSecurityConfigurationsOutput`](crate::output::ListSecurityConfigurationsOutput)
        pub fn build(self) -> crate::output::ListSecurityConfigurationsOutput {
            crate::output::ListSecurityConfigurationsOutput {
                security_configurations: self.security_configurations,
                marker: self.marker,
            }
        }
    }
}
impl ListSecurityConfigurationsOutput {
    /// Creates a new builder-style object to manufacture [`ListSecurityConfigurationsOutput`](crate::output::ListSecurityConfigurationsOutput)
    pub fn builder() -> crate::output::list_security_configurations_output::Builder {
        crate::output::list_security_configurations_output::Builder::default()
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
pub struct ListStepsOutput {
    /// <p>The filtered list of steps for the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub steps: std::option::Option<std::vec::Vec<crate::model::StepSummary>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub marker: std::option::Option<std::string::String>,
}
impl ListStepsOutput {
    /// <p>The filtered list of steps for the cluster.</p>
    pub fn steps(&self) -> std::option::Option<&[crate::model::StepSummary]> {
        self.steps.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for ListStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListStepsOutput");
        formatter.field("steps", &self.steps);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
impl std::fmt::Display for ListStepsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.list("Steps", &self.steps);
        shape.field("Marker", &self.marker);
        shape.finish()
    }
}
/// See [`ListStepsOutput`](crate::output::ListStepsOutput)
pub mod list_steps_output {
    /// A builder for [`ListStepsOutput`](crate::output::ListStepsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) steps: std::option::Option<std::vec::Vec<crate::model::StepSummary>>,
        pub(crate) marker: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `steps`.
        ///
        /// To override the contents of this collection use [`set_steps`](Self::set_steps).
        ///
        /// <p>The filtered list of steps for the cluster.</p>
        pub fn steps(mut self, input: impl Into<crate::model::StepSummary>) -> Self {
            let mut v = self.steps.unwrap_or_default();
            v.push(input.into());
            self.steps = Some(v);
            self
        }
        pub fn set_steps(
            mut self,
            input: std::option::Option<std::vec::Vec<crate::model::StepSummary>>,
        ) -> Self {
            self.steps = input;
            self
        }
        pub fn get_steps(&self) -> &std::option::Option<std::vec::Vec<crate::model::StepSummary>> {
            &self.steps
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
        /// Consumes the builder and constructs a [`ListStepsOutput`](crate::output::ListStepsOutput)
        pub fn build(self) -> crate::output::ListStepsOutput {
            crate::output::ListStepsOutput {
                steps: self.steps,
                marker: self.marker,
            }
        }
    }
}
impl ListStepsOutput {
    /// Creates a new builder-style object to manufacture [`ListStepsOutput`](crate::output::ListStepsOutput)
    pub fn builder() -> crate::output::list_steps_output::Builder {
        crate::output::list_steps_output::Builder::default()
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
pub struct ModifyClusterOutput {
    /// <p>The number of steps that can be executed concurrently.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub step_concurrency_level: std::option::Option<i32>,
}
impl ModifyClusterOutput {
    /// <p>The number of steps that can be executed concurrently.</p>
    pub fn step_concurrency_level(&self) -> std::option::Option<i32> {
        self.step_concurrency_level
    }
}
impl std::fmt::Debug for ModifyClusterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyClusterOutput");
        formatter.field("step_concurrency_level", &self.step_concurrency_level);
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyClusterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("StepConcurrencyLevel", &self.step_concurrency_level);
        shape.finish()
    }
}
/// See [`ModifyClusterOutput`](crate::output::ModifyClusterOutput)
pub mod modify_cluster_output {
    /// A builder for [`ModifyClusterOutput`](crate::output::ModifyClusterOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) step_concurrency_level: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of steps that can be executed concurrently.</p>
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
        /// Consumes the builder and constructs a [`ModifyClusterOutput`](crate::output::ModifyClusterOutput)
        pub fn build(self) -> crate::output::ModifyClusterOutput {
            crate::output::ModifyClusterOutput {
                step_concurrency_level: self.step_concurrency_level,
            }
        }
    }
}
impl ModifyClusterOutput {
    /// Creates a new builder-style object to manufacture [`ModifyClusterOutput`](crate::output::ModifyClusterOutput)
    pub fn builder() -> crate::output::modify_cluster_output::Builder {
        crate::output::modify_cluster_output::Builder::default()
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
pub struct ModifyInstanceFleetOutput {}
impl std::fmt::Debug for ModifyInstanceFleetOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyInstanceFleetOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyInstanceFleetOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`ModifyInstanceFleetOutput`](crate::output::ModifyInstanceFleetOutput)
pub mod modify_instance_fleet_output {
    /// A builder for [`ModifyInstanceFleetOutput`](crate::output::ModifyInstanceFleetOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`ModifyInstanceFleetOutput`](crate::output::ModifyInstanceFleetOutput)
        pub fn build(self) -> crate::output::ModifyInstanceFleetOutput {
            crate::output::ModifyInstanceFleetOutput {}
        }
    }
}
impl ModifyInstanceFleetOutput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceFleetOutput`](crate::output::ModifyInstanceFleetOutput)
    pub fn builder() -> crate::output::modify_instance_fleet_output::Builder {
        crate::output::modify_instance_fleet_output::Builder::default()
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
pub struct ModifyInstanceGroupsOutput {}
impl std::fmt::Debug for ModifyInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ModifyInstanceGroupsOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for ModifyInstanceGroupsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`ModifyInstanceGroupsOutput`](crate::output::ModifyInstanceGroupsOutput)
pub mod modify_instance_groups_output {
    /// A builder for [`ModifyInstanceGroupsOutput`](crate::output::ModifyInstanceGroupsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`ModifyInstanceGroupsOutput`](crate::output::ModifyInstanceGroupsOutput)
        pub fn build(self) -> crate::output::ModifyInstanceGroupsOutput {
            crate::output::ModifyInstanceGroupsOutput {}
        }
    }
}
impl ModifyInstanceGroupsOutput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceGroupsOutput`](crate::output::ModifyInstanceGroupsOutput)
    pub fn builder() -> crate::output::modify_instance_groups_output::Builder {
        crate::output::modify_instance_groups_output::Builder::default()
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
pub struct PutAutoScalingPolicyOutput {
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
    /// <p>The automatic scaling policy definition.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicyDescription>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
}
impl PutAutoScalingPolicyOutput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(&self) -> std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn instance_group_id(&self) -> std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>The automatic scaling policy definition.</p>
    pub fn auto_scaling_policy(
        &self,
    ) -> std::option::Option<&crate::model::AutoScalingPolicyDescription> {
        self.auto_scaling_policy.as_ref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl std::fmt::Debug for PutAutoScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutAutoScalingPolicyOutput");
        formatter.field("cluster_id", &self.cluster_id);
        formatter.field("instance_group_id", &self.instance_group_id);
        formatter.field("auto_scaling_policy", &self.auto_scaling_policy);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for PutAutoScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("ClusterId", &self.cluster_id);
        shape.field("InstanceGroupId", &self.instance_group_id);
        shape.field("AutoScalingPolicy", &self.auto_scaling_policy);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.finish()
    }
}
/// See [`PutAutoScalingPolicyOutput`](crate::output::PutAutoScalingPolicyOutput)
pub mod put_auto_scaling_policy_output {
    /// A builder for [`PutAutoScalingPolicyOutput`](crate::output::PutAutoScalingPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cluster_id: std::option::Option<std::string::String>,
        pub(crate) instance_group_id: std::option::Option<std::string::String>,
        pub(crate) auto_scaling_policy: std::option::Option<crate::model::AutoScalingPolicyDescription>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
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
        /// <p>The automatic scaling policy definition.</p>
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
        /// Consumes the builder and constructs a [`PutAutoScalingPolicyOutput`](crate::output::PutAutoScalingPolicyOutput)
        pub fn build(self) -> crate::output::PutAutoScalingPolicyOutput {
            crate::output::PutAutoScalingPolicyOutput {
                cluster_id: self.cluster_id,
                instance_group_id: self.instance_group_id,
                auto_scaling_policy: self.auto_scaling_policy,
                cluster_arn: self.cluster_arn,
            }
        }
    }
}
impl PutAutoScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutAutoScalingPolicyOutput`](crate::output::PutAutoScalingPolicyOutput)
    pub fn builder() -> crate::output::put_auto_scaling_policy_output::Builder {
        crate::output::put_auto_scaling_policy_output::Builder::default()
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
pub struct PutBlockPublicAccessConfigurationOutput {}
impl std::fmt::Debug for PutBlockPublicAccessConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutBlockPublicAccessConfigurationOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for PutBlockPublicAccessConfigurationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`PutBlockPublicAccessConfigurationOutput`](crate::output::PutBlockPublicAccessConfigurationOutput)
pub mod put_block_public_access_configuration_output {
    /// A builder for [`PutBlockPublicAccessConfigurationOutput`](crate::output::PutBlockPublicAccessConfigurationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`PutBlockPublicAccessConfigurationOutput`](crate::output::PutBlockPublicAccessConfigurationOutput)
        pub fn build(self) -> crate::output::PutBlockPublicAccessConfigurationOutput {
            crate::output::PutBlockPublicAccessConfigurationOutput {}
        }
    }
}
impl PutBlockPublicAccessConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`PutBlockPublicAccessConfigurationOutput`](crate::output::PutBlockPublicAccessConfigurationOutput)
    pub fn builder() -> crate::output::put_block_public_access_configuration_output::Builder {
        crate::output::put_block_public_access_configuration_output::Builder::default()
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
pub struct PutManagedScalingPolicyOutput {}
impl std::fmt::Debug for PutManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutManagedScalingPolicyOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for PutManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`PutManagedScalingPolicyOutput`](crate::output::PutManagedScalingPolicyOutput)
pub mod put_managed_scaling_policy_output {
    /// A builder for [`PutManagedScalingPolicyOutput`](crate::output::PutManagedScalingPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`PutManagedScalingPolicyOutput`](crate::output::PutManagedScalingPolicyOutput)
        pub fn build(self) -> crate::output::PutManagedScalingPolicyOutput {
            crate::output::PutManagedScalingPolicyOutput {}
        }
    }
}
impl PutManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutManagedScalingPolicyOutput`](crate::output::PutManagedScalingPolicyOutput)
    pub fn builder() -> crate::output::put_managed_scaling_policy_output::Builder {
        crate::output::put_managed_scaling_policy_output::Builder::default()
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
pub struct RemoveAutoScalingPolicyOutput {}
impl std::fmt::Debug for RemoveAutoScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveAutoScalingPolicyOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveAutoScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`RemoveAutoScalingPolicyOutput`](crate::output::RemoveAutoScalingPolicyOutput)
pub mod remove_auto_scaling_policy_output {
    /// A builder for [`RemoveAutoScalingPolicyOutput`](crate::output::RemoveAutoScalingPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`RemoveAutoScalingPolicyOutput`](crate::output::RemoveAutoScalingPolicyOutput)
        pub fn build(self) -> crate::output::RemoveAutoScalingPolicyOutput {
            crate::output::RemoveAutoScalingPolicyOutput {}
        }
    }
}
impl RemoveAutoScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`RemoveAutoScalingPolicyOutput`](crate::output::RemoveAutoScalingPolicyOutput)
    pub fn builder() -> crate::output::remove_auto_scaling_policy_output::Builder {
        crate::output::remove_auto_scaling_policy_output::Builder::default()
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
pub struct RemoveManagedScalingPolicyOutput {}
impl std::fmt::Debug for RemoveManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveManagedScalingPolicyOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveManagedScalingPolicyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`RemoveManagedScalingPolicyOutput`](crate::output::RemoveManagedScalingPolicyOutput)
pub mod remove_managed_scaling_policy_output {
    /// A builder for [`RemoveManagedScalingPolicyOutput`](crate::output::RemoveManagedScalingPolicyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`RemoveManagedScalingPolicyOutput`](crate::output::RemoveManagedScalingPolicyOutput)
        pub fn build(self) -> crate::output::RemoveManagedScalingPolicyOutput {
            crate::output::RemoveManagedScalingPolicyOutput {}
        }
    }
}
impl RemoveManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`RemoveManagedScalingPolicyOutput`](crate::output::RemoveManagedScalingPolicyOutput)
    pub fn builder() -> crate::output::remove_managed_scaling_policy_output::Builder {
        crate::output::remove_managed_scaling_policy_output::Builder::default()
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
pub struct RemoveTagsOutput {}
impl std::fmt::Debug for RemoveTagsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RemoveTagsOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for RemoveTagsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`RemoveTagsOutput`](crate::output::RemoveTagsOutput)
pub mod remove_tags_output {
    /// A builder for [`RemoveTagsOutput`](crate::output::RemoveTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`RemoveTagsOutput`](crate::output::RemoveTagsOutput)
        pub fn build(self) -> crate::output::RemoveTagsOutput {
            crate::output::RemoveTagsOutput {}
        }
    }
}
impl RemoveTagsOutput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsOutput`](crate::output::RemoveTagsOutput)
    pub fn builder() -> crate::output::remove_tags_output::Builder {
        crate::output::remove_tags_output::Builder::default()
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
pub struct RunJobFlowOutput {
    /// <p>An unique identifier for the job flow.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub job_flow_id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    #[cfg_attr(
        feature = "serde-serialize",
        serde(skip_serializing_if = "std::option::Option::is_none")
    )]
    pub cluster_arn: std::option::Option<std::string::String>,
}
impl RunJobFlowOutput {
    /// <p>An unique identifier for the job flow.</p>
    pub fn job_flow_id(&self) -> std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl std::fmt::Debug for RunJobFlowOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RunJobFlowOutput");
        formatter.field("job_flow_id", &self.job_flow_id);
        formatter.field("cluster_arn", &self.cluster_arn);
        formatter.finish()
    }
}
impl std::fmt::Display for RunJobFlowOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut shape = smithy_types::display::ShapeDisplay::new(f);
        shape.field("JobFlowId", &self.job_flow_id);
        shape.field("ClusterArn", &self.cluster_arn);
        shape.finish()
    }
}
/// See [`RunJobFlowOutput`](crate::output::RunJobFlowOutput)
pub mod run_job_flow_output {
    /// A builder for [`RunJobFlowOutput`](crate::output::RunJobFlowOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) job_flow_id: std::option::Option<std::string::String>,
        pub(crate) cluster_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>An unique identifier for the job flow.</p>
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
        /// Consumes the builder and constructs a [`RunJobFlowOutput`](crate::output::RunJobFlowOutput)
        pub fn build(self) -> crate::output::RunJobFlowOutput {
            crate::output::RunJobFlowOutput {
                job_flow_id: self.job_flow_id,
                cluster_arn: self.cluster_arn,
            }
        }
    }
}
impl RunJobFlowOutput {
    /// Creates a new builder-style object to manufacture [`RunJobFlowOutput`](crate::output::RunJobFlowOutput)
    pub fn builder() -> crate::output::run_job_flow_output::Builder {
        crate::output::run_job_flow_output::Builder::default()
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
pub struct SetTerminationProtectionOutput {}
impl std::fmt::Debug for SetTerminationProtectionOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetTerminationProtectionOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for SetTerminationProtectionOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`SetTerminationProtectionOutput`](crate::output::SetTerminationProtectionOutput)
pub mod set_termination_protection_output {
    /// A builder for [`SetTerminationProtectionOutput`](crate::output::SetTerminationProtectionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`SetTerminationProtectionOutput`](crate::output::SetTerminationProtectionOutput)
        pub fn build(self) -> crate::output::SetTerminationProtectionOutput {
            crate::output::SetTerminationProtectionOutput {}
        }
    }
}
impl SetTerminationProtectionOutput {
    /// Creates a new builder-style object to manufacture [`SetTerminationProtectionOutput`](crate::output::SetTerminationProtectionOutput)
    pub fn builder() -> crate::output::set_termination_protection_output::Builder {
        crate::output::set_termination_protection_output::Builder::default()
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
pub struct SetVisibleToAllUsersOutput {}
impl std::fmt::Debug for SetVisibleToAllUsersOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetVisibleToAllUsersOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for SetVisibleToAllUsersOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`SetVisibleToAllUsersOutput`](crate::output::SetVisibleToAllUsersOutput)
pub mod set_visible_to_all_users_output {
    /// A builder for [`SetVisibleToAllUsersOutput`](crate::output::SetVisibleToAllUsersOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`SetVisibleToAllUsersOutput`](crate::output::SetVisibleToAllUsersOutput)
        pub fn build(self) -> crate::output::SetVisibleToAllUsersOutput {
            crate::output::SetVisibleToAllUsersOutput {}
        }
    }
}
impl SetVisibleToAllUsersOutput {
    /// Creates a new builder-style object to manufacture [`SetVisibleToAllUsersOutput`](crate::output::SetVisibleToAllUsersOutput)
    pub fn builder() -> crate::output::set_visible_to_all_users_output::Builder {
        crate::output::set_visible_to_all_users_output::Builder::default()
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
pub struct TerminateJobFlowsOutput {}
impl std::fmt::Debug for TerminateJobFlowsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TerminateJobFlowsOutput");
        formatter.finish()
    }
}
impl std::fmt::Display for TerminateJobFlowsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        smithy_types::display::ShapeDisplay::new(f).finish()
    }
}
/// See [`TerminateJobFlowsOutput`](crate::output::TerminateJobFlowsOutput)
pub mod terminate_job_flows_output {
    /// A builder for [`TerminateJobFlowsOutput`](crate::output::TerminateJobFlowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`TerminateJobFlowsOutput`](crate::output::TerminateJobFlowsOutput)
        pub fn build(self) -> crate::output::TerminateJobFlowsOutput {
            crate::output::TerminateJobFlowsOutput {}
        }
    }
}
impl TerminateJobFlowsOutput {
    /// Creates a new builder-style object to manufacture [`TerminateJobFlowsOutput`](crate::output::TerminateJobFlowsOutput)
    pub fn builder() -> crate::output::terminate_job_flows_output::Builder {
        crate::output::terminate_job_flows_output::Builder::default()
    }
}
