//! Workload identity federation configuration for GCP clusters.

use crate::models::macros::{ocm_class, ocm_enum, ocm_struct};

ocm_enum! {
    /// How a service account is used from inside the cluster.
    WifAccessMethod {
        Impersonate => "impersonate",
        Vm => "vm",
        Wif => "wif",
    }
}

ocm_class! {
    /// Workload identity federation configuration of a GCP project.
    WifConfig("WifConfig"), WifConfigBuilder, WifConfigList, WifConfigListBuilder {
        display_name: string<String> => "display_name",
        gcp: object<WifGcp> => "gcp",
        /// Names of the templates the configuration was rendered from.
        wif_templates: values<String> => "wif_templates",
    }
}

ocm_struct! {
    WifGcp("WifGcp"), WifGcpBuilder, WifGcpList, WifGcpListBuilder {
        federated_project_id: string<String> => "federated_project_id",
        federated_project_number: string<String> => "federated_project_number",
        /// Service account used by OCM to impersonate the others.
        impersonator_email: string<String> => "impersonator_email",
        project_id: string<String> => "project_id",
        project_number: string<String> => "project_number",
        role_prefix: string<String> => "role_prefix",
        service_accounts: objects<WifServiceAccount> => "service_accounts",
        support: object<WifSupport> => "support",
        workload_identity_pool: object<WifPool> => "workload_identity_pool",
    }
}

ocm_struct! {
    WifPool("WifPool"), WifPoolBuilder, WifPoolList, WifPoolListBuilder {
        identity_provider: object<WifIdentityProvider> => "identity_provider",
        pool_id: string<String> => "pool_id",
    }
}

ocm_struct! {
    /// OIDC identity provider registered in the workload identity pool.
    WifIdentityProvider("WifIdentityProvider"), WifIdentityProviderBuilder,
    WifIdentityProviderList, WifIdentityProviderListBuilder {
        allowed_audiences: values<String> => "allowed_audiences",
        identity_provider_id: string<String> => "identity_provider_id",
        issuer_url: string<String> => "issuer_url",
        /// JSON web key set of the issuer.
        jwks: string<String> => "jwks",
    }
}

ocm_struct! {
    WifServiceAccount("WifServiceAccount"), WifServiceAccountBuilder, WifServiceAccountList,
    WifServiceAccountListBuilder {
        access_method: enumeration<WifAccessMethod> => "access_method",
        credential_request: object<WifCredentialRequest> => "credential_request",
        osd_role: string<String> => "osd_role",
        roles: objects<WifRole> => "roles",
        service_account_id: string<String> => "service_account_id",
    }
}

ocm_struct! {
    WifCredentialRequest("WifCredentialRequest"), WifCredentialRequestBuilder,
    WifCredentialRequestList, WifCredentialRequestListBuilder {
        secret_ref: object<WifSecret> => "secret_ref",
        /// Kubernetes service accounts allowed to use the credentials.
        service_account_names: values<String> => "service_account_names",
    }
}

ocm_struct! {
    /// Reference to the Kubernetes secret holding the credentials.
    WifSecret("WifSecret"), WifSecretBuilder, WifSecretList, WifSecretListBuilder {
        name: string<String> => "name",
        namespace: string<String> => "namespace",
    }
}

ocm_struct! {
    WifRole("WifRole"), WifRoleBuilder, WifRoleList, WifRoleListBuilder {
        permissions: values<String> => "permissions",
        /// Whether the role is predefined by GCP rather than custom.
        predefined: value<bool> => "predefined",
        role_id: string<String> => "role_id",
    }
}

ocm_struct! {
    /// Access granted to Red Hat support.
    WifSupport("WifSupport"), WifSupportBuilder, WifSupportList, WifSupportListBuilder {
        principal: string<String> => "principal",
        roles: objects<WifRole> => "roles",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WifConfig {
        WifConfig::builder()
            .id("2a1b")
            .display_name("prod")
            .gcp(
                WifGcp::builder()
                    .project_id("acme-prod")
                    .service_accounts(vec![WifServiceAccount::builder()
                        .service_account_id("osd-deployer")
                        .access_method(WifAccessMethod::Impersonate)
                        .roles(vec![WifRole::builder()
                            .role_id("osd_deployer_v4.16")
                            .permissions(vec!["compute.instances.create".to_string()])])])
                    .workload_identity_pool(
                        WifPool::builder().pool_id("pool").identity_provider(
                            WifIdentityProvider::builder()
                                .issuer_url("https://issuer.example.com")
                                .allowed_audiences(vec!["openshift".to_string()]),
                        ),
                    ),
            )
            .build()
            .expect("build")
    }

    #[test]
    fn nested_builders_are_built() {
        let config = sample();
        let gcp = config.gcp().expect("gcp");
        assert_eq!(gcp.project_id(), "acme-prod");
        let account = &gcp.service_accounts()[0];
        assert_eq!(account.access_method(), Some(&WifAccessMethod::Impersonate));
        assert_eq!(account.roles()[0].permissions(), ["compute.instances.create"]);
        let pool = gcp.workload_identity_pool().expect("pool");
        assert_eq!(
            pool.identity_provider().map(|p| p.issuer_url()),
            Some("https://issuer.example.com")
        );
        assert!(gcp.support().is_none());
    }

    #[test]
    fn copy_is_deep() {
        let config = sample();
        let changed = WifConfigBuilder::new()
            .copy(&config)
            .display_name("staging")
            .build()
            .expect("build");
        assert_eq!(config.display_name(), "prod");
        assert_eq!(changed.display_name(), "staging");
        assert_eq!(changed.gcp(), config.gcp());
    }

    #[test]
    fn unknown_access_method_round_trips() {
        let json = r#"{"access_method":"token","service_account_id":"sa"}"#;
        let account: WifServiceAccount = serde_json::from_str(json).expect("decode");
        assert_eq!(
            account.access_method(),
            Some(&WifAccessMethod::Other("token".to_string()))
        );
        assert_eq!(serde_json::to_string(&account).expect("encode"), json);
    }
}
