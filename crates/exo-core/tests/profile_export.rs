//! Serde roundtrip, JsonSchema validation, and file export of profiles.

use exo_core::{
    CandidateAssessment, CoreError, HabitatTag, LifeformRequest, Profile, ProfileReport, Record,
    derive_profile, report,
};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn habitable_record() -> Record {
    Record::new()
        .with("koi_teq", 288.0)
        .with("koi_prad", 1.0)
        .with("koi_insol", 1.0)
        .with("koi_steff", 5778.0)
        .with("kepoi_name", "K00001.01")
}

fn hostile_record() -> Record {
    Record::new()
        .with("equilibrium_temperature_K", 900.0)
        .with("planet_radius_earth", 4.0)
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $record:expr, $assessment:expr) => {
        #[test]
        fn $name() {
            let profile = derive_profile(
                &$record,
                &LifeformRequest::new(HabitatTag::Forest, 2.0),
                $assessment,
            )
            .unwrap();

            let json_str = serde_json::to_string_pretty(&profile).unwrap();
            let recovered: Profile = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, profile);

            let schema = serde_json::to_value(schema_for!(Profile)).unwrap();
            let instance = serde_json::to_value(&profile).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(errors.is_empty(), "Schema validation failed: {errors:?}");
        }
    };
}

roundtrip_and_validate!(habitable_profile_roundtrip, habitable_record(), None);
roundtrip_and_validate!(hostile_profile_roundtrip, hostile_record(), None);
roundtrip_and_validate!(
    annotated_profile_roundtrip,
    habitable_record(),
    CandidateAssessment::from_probability(0.42, 0.5).ok()
);

#[test]
fn out_of_range_classifier_confidence_is_not_deserialized() {
    let profile = derive_profile(
        &habitable_record(),
        &LifeformRequest::default(),
        CandidateAssessment::new(true, 0.91).ok(),
    )
    .unwrap();
    let mut json = serde_json::to_value(&profile).unwrap();
    assert_eq!(serde_json::from_value::<Profile>(json.clone()).unwrap(), profile);

    json["parameters"]["classifier"]["confidence"] = serde_json::json!(-3.0);
    let err = serde_json::from_value::<Profile>(json).unwrap_err();
    assert!(err.to_string().contains("confidence"), "{err}");
}

#[test]
fn report_validates_against_schema() {
    let report = report(&hostile_record());
    let schema = serde_json::to_value(schema_for!(ProfileReport)).unwrap();
    let instance = serde_json::to_value(&report).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn export_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("planet_profile.json");

    let profile =
        derive_profile(&habitable_record(), &LifeformRequest::default(), None).unwrap();
    profile.write_to(&path).unwrap();

    let written: Profile =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, profile);
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planet_profile.json");
    std::fs::write(&path, "stale").unwrap();

    let profile = derive_profile(&hostile_record(), &LifeformRequest::default(), None).unwrap();
    profile.write_to(&path).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["parameters"]["exoplanet"]["environment"], "Hot Jupiter");
    assert!(written["parameters"]["lifeform"]["diet"].is_null());
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();

    let profile = derive_profile(&hostile_record(), &LifeformRequest::default(), None).unwrap();
    let err = profile.write_to(blocker.join("profile.json")).unwrap_err();

    assert!(matches!(err, CoreError::Export { .. }));
}
