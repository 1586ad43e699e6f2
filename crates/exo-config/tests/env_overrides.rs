use exo_config::{ConfigError, ExoConfig};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("EXOPROFILE_LIFEFORM__HABITAT", "forest");
        jail.set_env("EXOPROFILE_LIFEFORM__BASE_SIZE", "1.25");
        jail.set_env("EXOPROFILE_OUTPUT__PATH", "out/profile.json");

        let config = ExoConfig::load(None).expect("config loads");
        assert_eq!(config.lifeform.habitat, "forest");
        assert!((config.lifeform.base_size - 1.25).abs() < f64::EPSILON);
        assert_eq!(config.output.path, "out/profile.json");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".exoprofile")?;
        jail.create_file(
            ".exoprofile/config.toml",
            r#"
[classifier]
threshold = 0.6
"#,
        )?;
        jail.set_env("EXOPROFILE_CLASSIFIER__THRESHOLD", "0.9");

        let config = ExoConfig::load(None).expect("config loads");
        assert!((config.classifier.threshold - 0.9).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn non_positive_base_size_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("EXOPROFILE_LIFEFORM__BASE_SIZE", "-2");

        let result = ExoConfig::load(None);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field, .. }) if field == "lifeform.base_size"
        ));
        Ok(())
    });
}

#[test]
fn unrelated_prefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("EXOPROFILE_LOG", "debug");

        let config = ExoConfig::load(None).expect("config loads");
        assert_eq!(config.lifeform.habitat, "terrestrial");
        Ok(())
    });
}
