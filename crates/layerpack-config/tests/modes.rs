//! End-to-end composition per mode.

use layerpack_config::fragment::plugin_names;
use layerpack_config::{compose, ComposeEnv, Composer, ConfigError, Mode, ProjectConfig};
use serde_json::{json, Value};
use std::path::PathBuf;

fn project() -> ProjectConfig {
    ProjectConfig::default().with_root("/work/demo")
}

fn env(mode: Mode) -> ComposeEnv {
    ComposeEnv {
        mode,
        ..Default::default()
    }
}

fn as_json(mode: Mode) -> Value {
    let config = compose(project(), env(mode)).unwrap();
    serde_json::to_value(&*config).unwrap()
}

#[test]
fn build_output_dir_is_base_plus_dev() {
    let config = compose(project(), env(Mode::Build)).unwrap();
    assert_eq!(
        config.output.path,
        Some(PathBuf::from("/work/demo/build").join("dev"))
    );
}

#[test]
fn build_prod_output_dir_is_base_plus_prod() {
    let config = compose(project(), env(Mode::BuildProd)).unwrap();
    assert_eq!(
        config.output.path,
        Some(PathBuf::from("/work/demo/build").join("prod"))
    );
}

#[test]
fn build_plugins_in_order_without_hot_reload() {
    let config = compose(project(), env(Mode::Build)).unwrap();
    let names: Vec<_> = config.plugin_names().collect();
    assert_eq!(
        names,
        vec![
            plugin_names::HTML,
            plugin_names::EXTRACT_TEXT,
            plugin_names::CLEAN,
        ]
    );
    assert!(!config.has_plugin(plugin_names::HOT_MODULE_REPLACEMENT));
}

#[test]
fn build_prod_defines_production_node_env() {
    let config = compose(project(), env(Mode::BuildProd)).unwrap();
    let define = config
        .plugins
        .iter()
        .find(|p| p.name == plugin_names::DEFINE)
        .expect("define plugin present");
    assert_eq!(
        define.args,
        vec![json!({ "process.env.NODE_ENV": "\"production\"" })]
    );
    assert!(config.has_plugin(plugin_names::UGLIFY_JS));
}

#[test]
fn default_mode_without_host_or_port_omits_them() {
    let value = as_json(Mode::Default);
    let server = value["devServer"].as_object().expect("devServer present");
    assert!(!server.contains_key("host"));
    assert!(!server.contains_key("port"));
    assert_eq!(server["hot"], json!(true));
}

#[test]
fn default_mode_passes_host_and_port_through() {
    let env = ComposeEnv {
        host: Some("0.0.0.0".into()),
        port: Some(3000),
        ..Default::default()
    };
    let config = compose(project(), env).unwrap();
    let server = config.dev_server.as_ref().expect("dev server present");
    assert_eq!(server.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(server.port, Some(3000));
}

#[test]
fn default_mode_has_no_build_only_plugins() {
    let config = compose(project(), env(Mode::Default)).unwrap();
    assert!(!config.has_plugin(plugin_names::CLEAN));
    assert!(!config.has_plugin(plugin_names::EXTRACT_TEXT));
    assert!(!config.has_plugin(plugin_names::UGLIFY_JS));
    assert!(config.has_plugin(plugin_names::HOT_MODULE_REPLACEMENT));
    assert_eq!(config.devtool.as_deref(), Some("eval-source-map"));
}

#[test]
fn composition_is_deterministic() {
    for mode in [Mode::Default, Mode::Build, Mode::BuildProd] {
        let mut with_vendor = project();
        with_vendor.vendor = vec!["react".into()];
        let first = compose(with_vendor.clone(), env(mode)).unwrap().to_json().unwrap();
        let second = compose(with_vendor, env(mode)).unwrap().to_json().unwrap();
        assert_eq!(first, second, "mode {mode}");
    }
}

#[test]
fn clean_targets_the_suffixed_output_dir() {
    let value = as_json(Mode::Build);
    let clean = value["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == plugin_names::CLEAN)
        .expect("clean plugin present");
    assert_eq!(clean["args"][0], json!(["/work/demo/build/dev"]));
    assert_eq!(clean["args"][1], json!({ "root": "/work/demo" }));
}

#[test]
fn style_entry_and_asset_rules_when_configured() {
    let mut with_assets = project();
    with_assets.paths.style = Some(PathBuf::from("app/main.css"));
    with_assets.paths.images = Some(PathBuf::from("app/images"));
    with_assets.paths.fonts = Some(PathBuf::from("app/fonts"));

    let config = compose(with_assets, env(Mode::Build)).unwrap();
    assert_eq!(config.entry["style"], vec!["/work/demo/app/main.css"]);

    let loaders: Vec<_> = config
        .module
        .loaders
        .iter()
        .flat_map(|rule| rule.loaders.iter().map(String::as_str))
        .collect();
    assert!(loaders.iter().any(|l| l.starts_with("file?name=")));
    assert!(loaders.contains(&"file"));
    assert_eq!(config.module.loaders.last().unwrap().test, r"\.ttf$");
}

#[test]
fn deploy_falls_back_to_project_public_path() {
    let mut with_public = project();
    with_public.public_path = Some("/demo/".into());
    let env = ComposeEnv {
        mode: Mode::BuildProd,
        deploy: true,
        ..Default::default()
    };

    let config = compose(with_public, env).unwrap();
    assert_eq!(config.output.public_path.as_deref(), Some("/demo/"));
}

#[test]
fn deploy_without_public_path_fails() {
    let env = ComposeEnv {
        mode: Mode::BuildProd,
        deploy: true,
        ..Default::default()
    };
    let err = compose(project(), env).unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnv("PUBLIC_PATH")));
}

#[test]
fn unknown_lifecycle_event_composes_dev_server() {
    let env = ComposeEnv::default().with_mode(Mode::from_lifecycle(Some("lint")));
    let composer = Composer::new(project(), env);
    assert_eq!(composer.mode(), Mode::Default);
    assert!(composer.compose().unwrap().dev_server.is_some());
}

#[test]
fn emitted_document_validates_again() {
    for mode in [Mode::Default, Mode::Build, Mode::BuildProd] {
        let value = as_json(mode);
        assert!(layerpack_config::validate_value(&value).is_ok(), "mode {mode}");
    }
}
