use crate::docs::canonical_name;

#[test]
fn canonical_name_strips_one_conventional_suffix() {
    assert_eq!(canonical_name("LoggingConfig"), "Logging");
    assert_eq!(canonical_name("ThemeSchema"), "Theme");
    assert_eq!(canonical_name("Server"), "Server");
}

#[test]
fn canonical_name_strips_schema_before_config() {
    assert_eq!(canonical_name("PluginConfigSchema"), "Plugin");
}

#[test]
fn canonical_name_never_empties_a_name() {
    assert_eq!(canonical_name("Config"), "Config");
    assert_eq!(canonical_name("Schema"), "Schema");
}

#[test]
fn canonical_name_is_stable_when_applied_twice() {
    for raw in [
        "LoggingConfig",
        "ThemeSchema",
        "Config",
        "Schema",
        "PluginConfigSchema",
        "Server",
    ] {
        let once = canonical_name(raw);
        assert_eq!(canonical_name(&once), once, "unstable for {raw}");
    }
}

#[test]
fn canonical_name_of_schema_before_config_strips_only_config() {
    let once = canonical_name("FooSchemaConfig");

    assert_eq!(once, "FooSchema");
    assert_eq!(canonical_name(&once), "Foo");
}
