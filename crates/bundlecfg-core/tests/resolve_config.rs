//! End-to-end resolution of a typical Vue + Element Plus project config

use bundlecfg_core::{
    AliasError, Catalog, ConfigError, ConfigResolver, ImportStyle, PluginPipeline, PluginSpec,
    ResolverOption,
};
use serde_json::{json, Value};

fn project_config() -> Value {
    json!({
        "resolve": {
            "alias": [{ "find": "@", "replacement": "/proj/src/" }]
        },
        "plugins": [
            { "name": "vue" },
            { "name": "windicss", "enabled": false },
            {
                "name": "components",
                "resolvers": [{ "name": "element-plus", "importStyle": "sass" }]
            },
            {
                "name": "auto-import",
                "resolvers": [{ "name": "element-plus", "importStyle": "sass" }]
            }
        ]
    })
}

#[test]
fn test_project_config_resolves() {
    let config = ConfigResolver::new().load(&project_config()).unwrap();

    assert_eq!(
        config.resolve("@/components/Foo.vue").unwrap(),
        "/proj/src/components/Foo.vue"
    );
    assert_eq!(
        config.pipeline().names(),
        vec!["vue", "components", "auto-import"]
    );
    assert!(config.pipeline().find("windicss").is_none());
}

#[test]
fn test_ui_library_plugins_share_import_style() {
    let raw = json!({
        "plugins": [
            { "name": "components", "resolvers": [{ "name": "element-plus", "importStyle": "sass" }] },
            { "name": "auto-import", "resolvers": [{ "name": "element-plus", "importStyle": "sass" }] }
        ]
    });
    let config = ConfigResolver::new().load(&raw).unwrap();
    let pipeline = config.pipeline();

    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.get(0).unwrap().name(), "components");
    assert_eq!(pipeline.get(1).unwrap().name(), "auto-import");
    for stage in pipeline {
        assert_eq!(stage.resolvers().len(), 1);
        assert_eq!(stage.resolvers()[0].import_style, ImportStyle::Sass);
    }
}

#[test]
fn test_duplicate_at_alias_produces_no_config() {
    let raw = json!({
        "resolve": {
            "alias": [
                { "find": "@", "replacement": "/proj/src" },
                { "find": "@", "replacement": "/proj/lib" }
            ]
        },
        "plugins": [{ "name": "vue" }]
    });

    let result = ConfigResolver::new().load(&raw);
    assert!(matches!(result, Err(ConfigError::DuplicateAlias { .. })));
}

#[test]
fn test_disabled_entries_match_absent_entries() {
    let catalog = Catalog::default();
    let a = PluginSpec::new("vue");
    let b = PluginSpec::new("windicss");
    let c = PluginSpec::new("auto-import")
        .with_resolver(ResolverOption::new("element-plus", ImportStyle::Css));

    let with_disabled =
        PluginPipeline::build(vec![a.clone(), b.disabled(), c.clone()], &catalog).unwrap();
    let without = PluginPipeline::build(vec![a, c], &catalog).unwrap();

    assert_eq!(with_disabled, without);
}

#[test]
fn test_pipeline_round_trips_active_entries() {
    let config = ConfigResolver::new().load(&project_config()).unwrap();
    let specs = config.pipeline().to_specs();

    let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["vue", "components", "auto-import"]);
    assert_eq!(
        serde_json::to_value(&specs[1]).unwrap(),
        json!({
            "name": "components",
            "resolvers": [{ "name": "element-plus", "importStyle": "sass" }]
        })
    );

    let rebuilt = PluginPipeline::build(specs, &Catalog::default()).unwrap();
    assert_eq!(&rebuilt, config.pipeline());
}

#[test]
fn test_unresolved_alias_is_an_error() {
    let config = ConfigResolver::new().load(&project_config()).unwrap();

    let err = config.resolve("~/assets/logo.png").unwrap_err();
    assert_eq!(
        err,
        AliasError::UnresolvedAlias {
            specifier: "~/assets/logo.png".to_string()
        }
    );
}

#[test]
fn test_resolved_config_serializes_normalized_form() {
    let config = ConfigResolver::new().load(&project_config()).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value["resolve"]["alias"],
        json!([{ "find": "@", "replacement": "/proj/src/" }])
    );
    assert_eq!(value["plugins"].as_array().unwrap().len(), 3);
    assert_eq!(ConfigResolver::new().load(&value).unwrap(), config);
}
