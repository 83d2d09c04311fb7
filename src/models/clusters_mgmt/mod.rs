//! Types of the `clusters_mgmt/v1` API.

mod addon;
mod addon_installation;
mod cloud;
mod cluster;
mod ingress;
mod value;
mod version;
mod wif;

pub use addon::{
    AddOn, AddOnBuilder, AddOnInstallMode, AddOnList, AddOnListBuilder, AddOnParameter,
    AddOnParameterBuilder, AddOnParameterList, AddOnParameterListBuilder, AddOnParameterOption,
    AddOnParameterOptionBuilder, AddOnParameterOptionList, AddOnParameterOptionListBuilder,
};
pub use addon_installation::{
    AddOnInstallation, AddOnInstallationBuilder, AddOnInstallationList,
    AddOnInstallationListBuilder, AddOnInstallationParameter, AddOnInstallationParameterBuilder,
    AddOnInstallationParameterList, AddOnInstallationParameterListBuilder,
    AddOnInstallationState,
};
pub use cloud::{
    CloudProvider, CloudProviderBuilder, CloudProviderList, CloudProviderListBuilder, CloudRegion,
    CloudRegionBuilder, CloudRegionList, CloudRegionListBuilder,
};
pub use cluster::{
    BillingModel, Cluster, ClusterApi, ClusterApiBuilder, ClusterApiList, ClusterApiListBuilder,
    ClusterBuilder, ClusterConsole, ClusterConsoleBuilder, ClusterConsoleList,
    ClusterConsoleListBuilder, ClusterList, ClusterListBuilder, ClusterNodes, ClusterNodesBuilder,
    ClusterNodesList, ClusterNodesListBuilder, ClusterState, ClusterStatus, ClusterStatusBuilder,
    ClusterStatusList, ClusterStatusListBuilder, ListeningMethod,
};
pub use ingress::{
    ComponentRoute, ComponentRouteBuilder, ComponentRouteList, ComponentRouteListBuilder, Ingress,
    IngressBuilder, IngressList, IngressListBuilder, LoadBalancerFlavor, NamespaceOwnershipPolicy,
    WildcardPolicy,
};
pub use value::{Value, ValueBuilder, ValueList, ValueListBuilder};
pub use version::{Version, VersionBuilder, VersionList, VersionListBuilder};
pub use wif::{
    WifAccessMethod, WifConfig, WifConfigBuilder, WifConfigList, WifConfigListBuilder,
    WifCredentialRequest, WifCredentialRequestBuilder, WifCredentialRequestList,
    WifCredentialRequestListBuilder, WifGcp, WifGcpBuilder, WifGcpList, WifGcpListBuilder,
    WifIdentityProvider, WifIdentityProviderBuilder, WifIdentityProviderList,
    WifIdentityProviderListBuilder, WifPool, WifPoolBuilder, WifPoolList, WifPoolListBuilder,
    WifRole, WifRoleBuilder, WifRoleList, WifRoleListBuilder, WifSecret, WifSecretBuilder,
    WifSecretList, WifSecretListBuilder, WifServiceAccount, WifServiceAccountBuilder,
    WifServiceAccountList, WifServiceAccountListBuilder, WifSupport, WifSupportBuilder,
    WifSupportList, WifSupportListBuilder,
};
