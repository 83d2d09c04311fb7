#![forbid(unsafe_code)]

mod client_defaults;
mod clusters_mgmt;
#[cfg(feature = "async-client")]
mod clusters_mgmt_async;
mod error;
mod models;

pub use error::{Error, ResourceError};

pub use models::{
    marshal, marshal_list, marshal_to_string, marshal_to_vec, unmarshal, unmarshal_reader,
    ListPage, Model, ModelBuilder, ModelList, Timestamp,
};

pub use models::{
    AddOn, AddOnBuilder, AddOnInstallMode, AddOnInstallation, AddOnInstallationBuilder,
    AddOnInstallationList, AddOnInstallationListBuilder, AddOnInstallationParameter,
    AddOnInstallationParameterBuilder, AddOnInstallationParameterList,
    AddOnInstallationParameterListBuilder, AddOnInstallationState, AddOnList, AddOnListBuilder,
    AddOnParameter, AddOnParameterBuilder, AddOnParameterList, AddOnParameterListBuilder,
    AddOnParameterOption, AddOnParameterOptionBuilder, AddOnParameterOptionList,
    AddOnParameterOptionListBuilder, BillingModel, CloudProvider, CloudProviderBuilder,
    CloudProviderList, CloudProviderListBuilder, CloudRegion, CloudRegionBuilder, CloudRegionList,
    CloudRegionListBuilder, Cluster, ClusterApi, ClusterApiBuilder, ClusterApiList,
    ClusterApiListBuilder, ClusterBuilder, ClusterConsole, ClusterConsoleBuilder,
    ClusterConsoleList, ClusterConsoleListBuilder, ClusterList, ClusterListBuilder, ClusterNodes,
    ClusterNodesBuilder, ClusterNodesList, ClusterNodesListBuilder, ClusterState, ClusterStatus,
    ClusterStatusBuilder, ClusterStatusList, ClusterStatusListBuilder, ComponentRoute,
    ComponentRouteBuilder, ComponentRouteList, ComponentRouteListBuilder, Ingress, IngressBuilder,
    IngressList, IngressListBuilder, ListeningMethod, LoadBalancerFlavor,
    NamespaceOwnershipPolicy, Value, ValueBuilder, ValueList, ValueListBuilder, Version,
    VersionBuilder, VersionList, VersionListBuilder, WifAccessMethod, WifConfig, WifConfigBuilder,
    WifConfigList, WifConfigListBuilder, WifCredentialRequest, WifCredentialRequestBuilder,
    WifCredentialRequestList, WifCredentialRequestListBuilder, WifGcp, WifGcpBuilder, WifGcpList,
    WifGcpListBuilder, WifIdentityProvider, WifIdentityProviderBuilder, WifIdentityProviderList,
    WifIdentityProviderListBuilder, WifPool, WifPoolBuilder, WifPoolList, WifPoolListBuilder,
    WifRole, WifRoleBuilder, WifRoleList, WifRoleListBuilder, WifSecret, WifSecretBuilder,
    WifSecretList, WifSecretListBuilder, WifServiceAccount, WifServiceAccountBuilder,
    WifServiceAccountList, WifServiceAccountListBuilder, WifSupport, WifSupportBuilder,
    WifSupportList, WifSupportListBuilder, WildcardPolicy,
};

pub use clusters_mgmt::{
    ClustersMgmtClient, ClustersMgmtClientBuilder, DeleteClusterOptions, ListOptions,
};
#[cfg(feature = "async-client")]
pub use clusters_mgmt_async::{ClustersMgmtAsyncClient, ClustersMgmtAsyncClientBuilder};
