use ocm_rs::{
    marshal_list, marshal_to_string, unmarshal, unmarshal_reader, AddOn, AddOnInstallMode,
    AddOnList, AddOnParameter, AddOnParameterList, AddOnParameterOption, ComponentRoute, Ingress,
    IngressBuilder, IngressList, ListeningMethod, Model, ModelBuilder, ModelList,
    NamespaceOwnershipPolicy, Version, VersionList, WildcardPolicy,
};
use std::collections::BTreeMap;

fn sample_addon() -> AddOn {
    AddOn::builder()
        .id("cluster-logging-operator")
        .href("/api/clusters_mgmt/v1/addons/cluster-logging-operator")
        .name("Cluster Logging Operator")
        .enabled(true)
        .resource_cost(1.0)
        .install_mode(AddOnInstallMode::OwnNamespace)
        .parameters(AddOnParameterList::builder().items(vec![AddOnParameter::builder()
            .id("retention")
            .value_type("number")
            .required(false)
            .options(vec![
                AddOnParameterOption::builder().name("One week").value("7"),
                AddOnParameterOption::builder().name("One month").value("30"),
            ])]))
        .build()
        .expect("build")
}

fn sample_ingress() -> IngressBuilder {
    let mut routes = BTreeMap::new();
    routes.insert(
        "oauth".to_string(),
        ComponentRoute::builder().hostname("oauth.apps.example.com"),
    );
    routes.insert(
        "console".to_string(),
        ComponentRoute::builder()
            .hostname("console.apps.example.com")
            .tls_secret_ref("console-tls"),
    );
    let mut selectors = BTreeMap::new();
    selectors.insert("tier".to_string(), "public".to_string());

    Ingress::builder()
        .id("abc")
        .default(true)
        .listening(ListeningMethod::External)
        .component_routes(routes)
        .route_selectors(selectors)
        .route_wildcard_policy(WildcardPolicy::WildcardsAllowed)
        .route_namespace_ownership_policy(NamespaceOwnershipPolicy::Strict)
        .excluded_namespaces(vec!["openshift-monitoring".to_string()])
}

#[test]
fn round_trip_preserves_every_attribute() {
    let addon = sample_addon();
    let text = marshal_to_string(&addon).expect("marshal");
    let decoded: AddOn = unmarshal(&text).expect("unmarshal");
    assert_eq!(decoded, addon);

    let ingress = sample_ingress().build().expect("build");
    let text = marshal_to_string(&ingress).expect("marshal");
    let decoded: Ingress = unmarshal(&text).expect("unmarshal");
    assert_eq!(decoded, ingress);
}

#[test]
fn nested_list_is_wrapped() {
    let text = marshal_to_string(&sample_addon()).expect("marshal");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["kind"], "AddOn");
    assert_eq!(value["install_mode"], "own_namespace");
    assert_eq!(value["parameters"]["kind"], "AddOnParameterList");
    assert_eq!(value["parameters"]["items"][0]["kind"], "AddOnParameter");
    assert_eq!(value["parameters"]["items"][0]["options"][1]["value"], "30");
    assert!(value["parameters"].get("href").is_none());
}

#[test]
fn maps_are_written_with_sorted_keys() {
    let ingress = sample_ingress().build().expect("build");
    let text = marshal_to_string(&ingress).expect("marshal");
    let console = text.find("\"console\"").expect("console");
    let oauth = text.find("\"oauth\"").expect("oauth");
    assert!(console < oauth);
    assert_eq!(
        ingress.component_routes()["console"].tls_secret_ref(),
        "console-tls"
    );
    assert_eq!(ingress.component_routes()["oauth"].get_tls_secret_ref(), None);
}

#[test]
fn decoder_skips_unknown_keys_and_nulls() {
    let text = r#"{
        "kind": "Version",
        "id": "openshift-v4.15.0",
        "unknown_object": {"nested": [1, 2, {"deep": true}]},
        "raw_id": "4.15.0",
        "enabled": null,
        "available_upgrades": ["4.15.1", "4.16.0"],
        "end_of_life_timestamp": "2025-06-27T00:00:00Z"
    }"#;
    let version: Version = unmarshal(text).expect("unmarshal");
    assert_eq!(version.raw_id(), "4.15.0");
    assert_eq!(version.get_enabled(), None);
    assert_eq!(version.available_upgrades(), ["4.15.1", "4.16.0"]);
    assert_eq!(
        version.end_of_life_timestamp().to_rfc3339(),
        "2025-06-27T00:00:00+00:00"
    );
    assert_eq!(version.kind(), Version::KIND);
}

#[test]
fn link_kind_sets_link_flag() {
    let version: Version =
        unmarshal(r#"{"kind":"VersionLink","id":"openshift-v4.16.3"}"#).expect("unmarshal");
    assert!(version.link());
    assert_eq!(
        marshal_to_string(&version).expect("marshal"),
        r#"{"kind":"VersionLink","id":"openshift-v4.16.3"}"#
    );
}

#[test]
fn list_decodes_from_array_or_object() {
    let bare: VersionList =
        unmarshal(r#"[{"id":"a"},{"id":"b"}]"#).expect("bare");
    let wrapped: VersionList = unmarshal(
        r#"{"kind":"VersionList","href":"/api/clusters_mgmt/v1/versions","items":[{"id":"a"},{"id":"b"}]}"#,
    )
    .expect("wrapped");
    assert_eq!(bare.items(), wrapped.items());
    assert_eq!(bare.get_href(), None);
    assert_eq!(wrapped.get_href(), Some("/api/clusters_mgmt/v1/versions"));
    assert_eq!(wrapped.kind(), "VersionList");

    let link: VersionList =
        unmarshal(r#"{"kind":"VersionListLink","href":"/x"}"#).expect("link");
    assert!(link.link());
    assert!(link.is_empty());
}

#[test]
fn null_list_elements_decode_as_empty_items() {
    let bare: VersionList = unmarshal(r#"[{"id":"a"},null]"#).expect("bare");
    assert_eq!(bare.len(), 2);
    assert_eq!(bare.get(0).map(|v| v.id()), Some("a"));
    assert!(bare.get(1).map(|v| v.is_empty()).unwrap_or(false));

    let wrapped: VersionList =
        unmarshal(r#"{"kind":"VersionList","items":[null,{"id":"b"}]}"#).expect("wrapped");
    assert_eq!(wrapped.len(), 2);
    assert!(wrapped.get(0).map(|v| v.is_empty()).unwrap_or(false));

    let null: VersionList = unmarshal("null").expect("null");
    assert!(null.is_empty());
}

#[test]
fn marshal_list_and_reader_agree() {
    let list = AddOnList::from(vec![sample_addon()]);
    let mut out = Vec::new();
    marshal_list(&list, &mut out).expect("marshal");
    assert!(out.starts_with(b"[{\"kind\":\"AddOn\""));
    let decoded: AddOnList = unmarshal_reader(out.as_slice()).expect("unmarshal");
    assert_eq!(decoded, list);
}

#[test]
fn copy_then_build_is_identity() {
    let builder = sample_ingress();
    let built = builder.build().expect("build");
    let copied = Ingress::builder().copy(&built).build().expect("build");
    assert_eq!(copied, built);
    assert_eq!(built.to_builder().build().expect("build"), built);

    let list = IngressList::from(vec![built.clone(), built]);
    let rebuilt = list.to_builder().build().expect("build");
    assert_eq!(rebuilt, list);
}

#[test]
fn builder_state_is_independent_of_built_value() {
    let builder = sample_ingress();
    let first = builder.build().expect("build");
    let second = builder.clone().dns_name("apps.example.com").build().expect("build");
    assert_eq!(first.get_dns_name(), None);
    assert_eq!(second.dns_name(), "apps.example.com");
    assert_ne!(first, second);
}

#[test]
fn is_empty_tracks_presence_not_value() {
    let ingress = Ingress::builder().build().expect("build");
    assert!(ingress.is_empty());
    assert!(ModelBuilder::is_empty(&Ingress::builder()));

    let ingress = Ingress::builder().default(false).build().expect("build");
    assert!(!ingress.is_empty());
    assert!(!ingress.default());
    assert_eq!(ingress.get_default(), Some(false));
}

#[test]
fn list_traversal_stops_early() {
    let list = VersionList::from(
        ["a", "b", "c", "d"]
            .iter()
            .map(|id| Version::builder().id(*id).build().expect("build"))
            .collect::<Vec<_>>(),
    );

    let mut seen = Vec::new();
    list.each(|version| {
        seen.push(version.id().to_string());
        version.id() != "b"
    });
    assert_eq!(seen, ["a", "b"]);

    let mut indices = Vec::new();
    list.range(|index, _| {
        indices.push(index);
        index < 2
    });
    assert_eq!(indices, [0, 1, 2]);

    assert!(list.get(4).is_none());
    assert_eq!(list.get(3).map(|v| v.id()), Some("d"));
    assert_eq!(ModelList::items(&list).len(), 4);
}

#[test]
fn slice_does_not_alias_items() {
    let mut list = VersionList::from(vec![Version::builder().id("a").build().expect("build")]);
    let mut copy = list.slice();
    copy.push(Version::builder().id("b").build().expect("build"));
    assert_eq!(list.len(), 1);

    list.set_items(copy);
    list.set_href("/api/clusters_mgmt/v1/versions");
    list.set_link(true);
    assert_eq!(list.len(), 2);
    assert_eq!(list.kind(), "VersionListLink");
    assert_eq!(list.href(), "/api/clusters_mgmt/v1/versions");
}

#[test]
fn unknown_enum_values_survive_round_trip() {
    let addon: AddOn =
        unmarshal(r#"{"kind":"AddOn","install_mode":"cluster_wide"}"#).expect("unmarshal");
    assert_eq!(
        addon.install_mode(),
        Some(&AddOnInstallMode::Other("cluster_wide".to_string()))
    );
    assert_eq!(
        marshal_to_string(&addon).expect("marshal"),
        r#"{"kind":"AddOn","install_mode":"cluster_wide"}"#
    );
}
