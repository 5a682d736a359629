use std::collections::BTreeMap;

use depbind::coordinate::Coordinate;
use depbind::core::NotationError;
use depbind::dependency::{DefaultDependencyFactory, DependencyFactory, ModuleDependency};

#[test]
fn manifest_shaped_map_notation_validates() {
    let map: BTreeMap<String, String> = toml::from_str(
        r#"
        group = "com.google.guava"
        name = "guava"
        version = "33.0"
        "#,
    )
    .unwrap();

    let dependency = DefaultDependencyFactory.module_from_map(&map).unwrap();
    assert_eq!(
        dependency.coordinate(),
        &Coordinate::full("com.google.guava", "guava", "33.0")
    );
}

#[test]
fn name_only_map_leaves_group_and_version_unset() {
    let map: BTreeMap<String, String> = toml::from_str(r#"name = "guava""#).unwrap();
    let coordinate = Coordinate::from_map(&map).unwrap();
    assert_eq!(coordinate.group, None);
    assert_eq!(coordinate.name, "guava");
    assert_eq!(coordinate.version, None);
}

#[test]
fn foreign_manifest_keys_are_all_reported() {
    let map: BTreeMap<String, String> = toml::from_str(
        r#"
        group = "com.g"
        name = "lib"
        version = "1.0"
        scope = "test"
        "#,
    )
    .unwrap();

    let err = Coordinate::from_map(&map).unwrap_err();
    assert_eq!(
        err.to_string(),
        "dependency map must not contain the following keys: [scope]"
    );

    let map: BTreeMap<String, String> = toml::from_str(
        r#"
        name = "lib"
        scope = "test"
        classifier = "sources"
        "#,
    )
    .unwrap();

    match Coordinate::from_map(&map).unwrap_err() {
        NotationError::IllegalMapKeys { keys } => {
            assert_eq!(keys, vec!["classifier".to_string(), "scope".to_string()]);
        }
        other => panic!("expected IllegalMapKeys, got {other:?}"),
    }
}

#[test]
fn map_without_a_name_is_rejected() {
    let map: BTreeMap<String, String> =
        toml::from_str(r#"group = "com.g""#).unwrap();
    let err = Coordinate::from_map(&map).unwrap_err();
    assert_eq!(err.to_string(), "dependency map must contain a name key");
}
