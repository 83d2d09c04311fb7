use crate::models::clusters_mgmt::{
    AddOnInstallationList, CloudProvider, CloudRegion, IngressList, Value, Version,
};
use crate::models::macros::{ocm_class, ocm_enum, ocm_struct};
use crate::models::Timestamp;

ocm_enum! {
    /// Overall state of a cluster.
    ClusterState {
        Error => "error",
        Hibernating => "hibernating",
        Installing => "installing",
        Pending => "pending",
        PoweringDown => "powering_down",
        Ready => "ready",
        Resuming => "resuming",
        Uninstalling => "uninstalling",
        Unknown => "unknown",
        Validating => "validating",
        Waiting => "waiting",
    }
}

ocm_enum! {
    /// How the cluster is billed.
    BillingModel {
        Marketplace => "marketplace",
        MarketplaceAws => "marketplace-aws",
        MarketplaceGcp => "marketplace-gcp",
        MarketplaceRhm => "marketplace-rhm",
        Standard => "standard",
    }
}

ocm_enum! {
    /// Whether an endpoint is reachable from the internet or only from the
    /// cluster network.
    ListeningMethod {
        External => "external",
        Internal => "internal",
    }
}

ocm_struct! {
    /// Information about the API server of a cluster.
    ClusterApi("ClusterAPI"), ClusterApiBuilder, ClusterApiList, ClusterApiListBuilder {
        listening: enumeration<ListeningMethod> => "listening",
        url: string<String> => "url",
    }
}

ocm_struct! {
    ClusterConsole("ClusterConsole"), ClusterConsoleBuilder, ClusterConsoleList,
    ClusterConsoleListBuilder {
        url: string<String> => "url",
    }
}

ocm_struct! {
    /// Counts and placement of the nodes of a cluster.
    ClusterNodes("ClusterNodes"), ClusterNodesBuilder, ClusterNodesList, ClusterNodesListBuilder {
        availability_zones: values<String> => "availability_zones",
        compute: value<i32> => "compute",
        compute_labels: value_map<String> => "compute_labels",
        infra: value<i32> => "infra",
        master: value<i32> => "master",
    }
}

ocm_class! {
    /// Definition of an _OpenShift_ cluster.
    ///
    /// The `cloud_provider`, `region` and `version` attributes are usually
    /// links when returned by the server.
    Cluster("Cluster"), ClusterBuilder, ClusterList, ClusterListBuilder {
        api: object<ClusterApi> => "api",
        /// Add-ons installed on the cluster.
        addons: object<AddOnInstallationList> => "addons",
        billing_model: enumeration<BillingModel> => "billing_model",
        cloud_provider: object<CloudProvider> => "cloud_provider",
        console: object<ClusterConsole> => "console",
        creation_timestamp: value<Timestamp> => "creation_timestamp",
        display_name: string<String> => "display_name",
        /// Date and time when the cluster is deleted automatically.
        expiration_timestamp: value<Timestamp> => "expiration_timestamp",
        /// Identifier assigned by the cluster itself once installed.
        external_id: string<String> => "external_id",
        ingresses: object<IngressList> => "ingresses",
        managed: value<bool> => "managed",
        multi_az: value<bool> => "multi_az",
        name: string<String> => "name",
        nodes: object<ClusterNodes> => "nodes",
        /// User defined properties for tagging and querying.
        properties: value_map<String> => "properties",
        region: object<CloudRegion> => "region",
        state: enumeration<ClusterState> => "state",
        storage_quota: object<Value> => "storage_quota",
        version: object<Version> => "version",
    }
}

ocm_class! {
    /// Detailed state of a cluster, as reported by its `status` endpoint.
    ClusterStatus("ClusterStatus"), ClusterStatusBuilder, ClusterStatusList,
    ClusterStatusListBuilder {
        /// Human readable explanation of the state.
        description: string<String> => "description",
        dns_ready: value<bool> => "dns_ready",
        /// Error code reported when provisioning failed.
        provision_error_code: string<String> => "provision_error_code",
        provision_error_message: string<String> => "provision_error_message",
        state: enumeration<ClusterState> => "state",
    }
}
