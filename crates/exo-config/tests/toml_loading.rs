//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use exo_config::{ConfigError, ExoConfig};
use exo_core::HabitatTag;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_lifeform_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[lifeform]
habitat = "aquatic"
base_size = 3.5
"#,
        )?;

        let config: ExoConfig = Figment::from(Serialized::defaults(ExoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.lifeform.habitat, "aquatic");
        assert!((config.lifeform.base_size - 3.5).abs() < f64::EPSILON);
        assert_eq!(config.lifeform.request().habitat, HabitatTag::Aquatic);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
path = "profiles/kepler.json"
"#,
        )?;

        let config: ExoConfig = Figment::from(Serialized::defaults(ExoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.path, "profiles/kepler.json");
        assert_eq!(config.lifeform.habitat, "terrestrial");
        assert!((config.classifier.threshold - 0.5).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".exoprofile")?;
        jail.create_file(
            ".exoprofile/config.toml",
            r#"
[classifier]
threshold = 0.7
"#,
        )?;

        let config = ExoConfig::load(None).expect("config loads");
        assert!((config.classifier.threshold - 0.7).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_local() {
    Jail::expect_with(|jail| {
        jail.create_dir(".exoprofile")?;
        jail.create_file(
            ".exoprofile/config.toml",
            r#"
[lifeform]
habitat = "desert"
base_size = 1.0
"#,
        )?;
        jail.create_file(
            "override.toml",
            r#"
[lifeform]
base_size = 4.0
"#,
        )?;

        let config =
            ExoConfig::load(Some(std::path::Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.lifeform.habitat, "desert");
        assert!((config.lifeform.base_size - 4.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = ExoConfig::load(Some(std::path::Path::new("nope.toml")));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "bad.toml",
            r#"
[classifier]
threshold = 1.5
"#,
        )?;

        let result = ExoConfig::load(Some(std::path::Path::new("bad.toml")));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field, .. }) if field == "classifier.threshold"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", "[lifeform\nbase_size = ")?;

        let result = ExoConfig::load(Some(std::path::Path::new("broken.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
