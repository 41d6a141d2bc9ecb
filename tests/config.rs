use std::path::PathBuf;

use icoforge::config::Config;

#[test]
fn parse_minimal_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");
    std::fs::write(&path, r#"input = "icon.png""#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.input, PathBuf::from("icon.png"));
    assert_eq!(config.output.png, PathBuf::from("app_icon.png"));
    assert_eq!(config.output.ico, PathBuf::from("app.ico"));
    assert_eq!(config.matte.threshold, 240);
    assert!(!config.matte.bleed);
}

#[test]
fn parse_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");
    std::fs::write(
        &path,
        r#"
input = "art/raw.png"

[output]
png = "dist/icon.png"
ico = "dist/icon.ico"

[matte]
threshold = 230
bleed = true
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.input, PathBuf::from("art/raw.png"));
    assert_eq!(config.output.png, PathBuf::from("dist/icon.png"));
    assert_eq!(config.output.ico, PathBuf::from("dist/icon.ico"));
    assert_eq!(config.matte.threshold, 230);
    assert!(config.matte.bleed);
}

#[test]
fn missing_input_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");
    std::fs::write(&path, "[matte]\nthreshold = 200\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.toml");

    assert!(Config::load(&path).is_err());
}

#[test]
fn unknown_fields_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");
    std::fs::write(
        &path,
        r#"
input = "icon.png"
some_unknown_field = "hello"

[matte]
threshold = 250
extra = 1
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.matte.threshold, 250);
}

#[test]
fn default_template_is_valid_toml() {
    let template = Config::default_template();
    let result: Result<toml::Value, _> = toml::from_str(&template);
    assert!(
        result.is_ok(),
        "default template is not valid TOML: {:?}",
        result.err()
    );
}

#[test]
fn default_template_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");
    std::fs::write(&path, Config::default_template()).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.input, PathBuf::from("icon.png"));
    assert_eq!(config.output.png, PathBuf::from("app_icon.png"));
    assert_eq!(config.output.ico, PathBuf::from("app.ico"));
    assert_eq!(config.matte.threshold, 240);
    assert!(!config.matte.bleed);
}

#[test]
fn skip_serializing_default_sections() {
    let config = Config {
        input: PathBuf::from("icon.png"),
        output: Default::default(),
        matte: Default::default(),
    };

    let serialized = toml::to_string(&config).unwrap();
    assert!(!serialized.contains("[output]"));
    assert!(!serialized.contains("[matte]"));
}

#[test]
fn save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoforge.toml");

    let config = Config {
        input: PathBuf::from("raw.png"),
        output: Default::default(),
        matte: icoforge::config::MatteConfig {
            threshold: 220,
            bleed: true,
        },
    };
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.input, PathBuf::from("raw.png"));
    assert_eq!(loaded.matte.threshold, 220);
    assert!(loaded.matte.bleed);
}
