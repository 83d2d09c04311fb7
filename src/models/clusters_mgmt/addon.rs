use crate::models::macros::{ocm_class, ocm_enum, ocm_struct};

ocm_enum! {
    /// Namespaces an add-on operator watches once installed.
    AddOnInstallMode {
        AllNamespaces => "all_namespaces",
        OwnNamespace => "own_namespace",
        SingleNamespace => "single_namespace",
    }
}

ocm_struct! {
    /// One of the values a user can choose for an add-on parameter.
    AddOnParameterOption("AddOnParameterOption"), AddOnParameterOptionBuilder,
    AddOnParameterOptionList, AddOnParameterOptionListBuilder {
        name: string<String> => "name",
        value: string<String> => "value",
    }
}

ocm_class! {
    /// Parameter accepted by an add-on at installation time.
    AddOnParameter("AddOnParameter"), AddOnParameterBuilder, AddOnParameterList,
    AddOnParameterListBuilder {
        default_value: string<String> => "default_value",
        description: string<String> => "description",
        /// Whether the value can be changed after installation.
        editable: value<bool> => "editable",
        enabled: value<bool> => "enabled",
        name: string<String> => "name",
        options: objects<AddOnParameterOption> => "options",
        required: value<bool> => "required",
        /// Regular expression the value has to match.
        validation: string<String> => "validation",
        /// Type of the value: `string`, `number`, `boolean`, `cidr` or `resource`.
        value_type: string<String> => "value_type",
    }
}

ocm_class! {
    /// Operator that can be installed on a cluster on top of _OpenShift_.
    AddOn("AddOn"), AddOnBuilder, AddOnList, AddOnListBuilder {
        description: string<String> => "description",
        docs_link: string<String> => "docs_link",
        enabled: value<bool> => "enabled",
        /// Whether the add-on creates resources outside the cluster.
        has_external_resources: value<bool> => "has_external_resources",
        hidden: value<bool> => "hidden",
        /// Base64 encoded icon.
        icon: string<String> => "icon",
        install_mode: enumeration<AddOnInstallMode> => "install_mode",
        /// Label applied to clusters that have the add-on installed.
        label: string<String> => "label",
        name: string<String> => "name",
        operator_name: string<String> => "operator_name",
        parameters: object<AddOnParameterList> => "parameters",
        /// Quota units consumed by one installation.
        resource_cost: value<f64> => "resource_cost",
        resource_name: string<String> => "resource_name",
        target_namespace: string<String> => "target_namespace",
    }
}
