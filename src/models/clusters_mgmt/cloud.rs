use crate::models::macros::ocm_class;

ocm_class! {
    /// Cloud provider where clusters can be installed.
    CloudProvider("CloudProvider"), CloudProviderBuilder, CloudProviderList,
    CloudProviderListBuilder {
        /// Human friendly name, for example `Amazon Web Services`.
        display_name: string<String> => "display_name",
        /// Short name used as identifier, for example `aws`.
        name: string<String> => "name",
        regions: object<CloudRegionList> => "regions",
    }
}

ocm_class! {
    /// Region of a cloud provider.
    CloudRegion("CloudRegion"), CloudRegionBuilder, CloudRegionList, CloudRegionListBuilder {
        /// Whether the region is only available for customer cloud subscriptions.
        ccs_only: value<bool> => "ccs_only",
        cloud_provider: object<CloudProvider> => "cloud_provider",
        display_name: string<String> => "display_name",
        enabled: value<bool> => "enabled",
        name: string<String> => "name",
        supports_hypershift: value<bool> => "supports_hypershift",
        supports_multi_az: value<bool> => "supports_multi_az",
    }
}
