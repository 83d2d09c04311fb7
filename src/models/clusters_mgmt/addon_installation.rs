use crate::models::clusters_mgmt::{AddOn, Cluster};
use crate::models::macros::{ocm_class, ocm_enum};
use crate::models::Timestamp;

ocm_enum! {
    /// Lifecycle state of an add-on installation.
    AddOnInstallationState {
        Deleted => "deleted",
        Deleting => "deleting",
        Failed => "failed",
        Installing => "installing",
        Pending => "pending",
        Ready => "ready",
        Undefined => "undefined",
    }
}

ocm_class! {
    /// Value given to an add-on parameter for one installation.
    AddOnInstallationParameter("AddOnInstallationParameter"), AddOnInstallationParameterBuilder,
    AddOnInstallationParameterList, AddOnInstallationParameterListBuilder {
        value: string<String> => "value",
    }
}

ocm_class! {
    /// Add-on installed on a cluster.
    AddOnInstallation("AddOnInstallation"), AddOnInstallationBuilder, AddOnInstallationList,
    AddOnInstallationListBuilder {
        /// Link to the add-on.
        addon: object<AddOn> => "addon",
        /// Link to the cluster the add-on is installed on.
        cluster: object<Cluster> => "cluster",
        creation_timestamp: value<Timestamp> => "creation_timestamp",
        csv_name: string<String> => "csv_name",
        operator_version: string<String> => "operator_version",
        parameters: object<AddOnInstallationParameterList> => "parameters",
        state: enumeration<AddOnInstallationState> => "state",
        state_description: string<String> => "state_description",
        updated_timestamp: value<Timestamp> => "updated_timestamp",
    }
}
