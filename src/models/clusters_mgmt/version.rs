use crate::models::macros::ocm_class;
use crate::models::Timestamp;

ocm_class! {
    /// Version of _OpenShift_ that can be used to create clusters.
    Version("Version"), VersionBuilder, VersionList, VersionListBuilder {
        /// Versions this one can be upgraded to.
        available_upgrades: values<String> => "available_upgrades",
        channel_group: string<String> => "channel_group",
        /// Whether this is the default version used when none is requested.
        default: value<bool> => "default",
        enabled: value<bool> => "enabled",
        end_of_life_timestamp: value<Timestamp> => "end_of_life_timestamp",
        hosted_control_plane_enabled: value<bool> => "hosted_control_plane_enabled",
        /// Version string without the `openshift-v` prefix, for example `4.16.3`.
        raw_id: string<String> => "raw_id",
        release_image: string<String> => "release_image",
        rosa_enabled: value<bool> => "rosa_enabled",
    }
}
