use crate::models::clusters_mgmt::ListeningMethod;
use crate::models::macros::{ocm_class, ocm_enum, ocm_struct};

ocm_enum! {
    LoadBalancerFlavor {
        Classic => "classic",
        Nlb => "nlb",
    }
}

ocm_enum! {
    NamespaceOwnershipPolicy {
        Strict => "Strict",
        InterNamespaceAllowed => "InterNamespaceAllowed",
    }
}

ocm_enum! {
    WildcardPolicy {
        WildcardsDisallowed => "WildcardsDisallowed",
        WildcardsAllowed => "WildcardsAllowed",
    }
}

ocm_struct! {
    /// Custom hostname and TLS secret for one of the cluster components
    /// exposed through the ingress (console, downloads, oauth).
    ComponentRoute("ComponentRoute"), ComponentRouteBuilder, ComponentRouteList,
    ComponentRouteListBuilder {
        hostname: string<String> => "hostname",
        tls_secret_ref: string<String> => "tls_secret_ref",
    }
}

ocm_class! {
    /// Ingress controller of a cluster.
    Ingress("Ingress"), IngressBuilder, IngressList, IngressListBuilder {
        cluster_routes_hostname: string<String> => "cluster_routes_hostname",
        cluster_routes_tls_secret_ref: string<String> => "cluster_routes_tls_secret_ref",
        /// Routes of the cluster components, keyed by component name.
        component_routes: object_map<ComponentRoute> => "component_routes",
        /// Whether this is the default ingress of the cluster.
        default: value<bool> => "default",
        dns_name: string<String> => "dns_name",
        excluded_namespaces: values<String> => "excluded_namespaces",
        listening: enumeration<ListeningMethod> => "listening",
        load_balancer_type: enumeration<LoadBalancerFlavor> => "load_balancer_type",
        route_namespace_ownership_policy: enumeration<NamespaceOwnershipPolicy>
            => "route_namespace_ownership_policy",
        route_selectors: value_map<String> => "route_selectors",
        route_wildcard_policy: enumeration<WildcardPolicy> => "route_wildcard_policy",
    }
}
