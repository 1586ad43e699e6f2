//! Profile assembly and export.
//!
//! A [`Profile`] pairs a text narrative with a parameter map. The narrative is
//! always rendered from the parameters, so the two never disagree.
//!
//! ```text
//! {
//!   "text_description": "...",
//!   "parameters": {
//!     "exoplanet": { "habitable": bool, "environment": "Earth-like" },
//!     "lifeform":  { "size", "coloration", "environment", "communicationMethod", "diet" },
//!     "classifier": { "is_candidate": bool, "confidence": 0.0..=1.0 }   // optional
//!   }
//! }
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentLabel;
use crate::errors::CoreError;
use crate::habitability::HabitabilityVerdict;
use crate::lifeform::{Color, CommunicationMethod, Diet, LifeformAttributes};

// ---------------------------------------------------------------------------
// CandidateAssessment
// ---------------------------------------------------------------------------

/// Verdict of an external statistical classifier, carried through opaquely.
///
/// Confidence is always within `[0, 1]`; deserialization goes through
/// [`CandidateAssessment::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "AssessmentFields")]
pub struct CandidateAssessment {
    is_candidate: bool,
    #[schemars(range(min = 0.0, max = 1.0))]
    confidence: f64,
}

/// Unchecked wire form of [`CandidateAssessment`].
#[derive(Deserialize, JsonSchema)]
struct AssessmentFields {
    is_candidate: bool,
    #[schemars(range(min = 0.0, max = 1.0))]
    confidence: f64,
}

impl TryFrom<AssessmentFields> for CandidateAssessment {
    type Error = CoreError;

    fn try_from(fields: AssessmentFields) -> Result<Self, Self::Error> {
        Self::new(fields.is_candidate, fields.confidence)
    }
}

impl CandidateAssessment {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` if `confidence` is outside `[0, 1]`.
    pub fn new(is_candidate: bool, confidence: f64) -> Result<Self, CoreError> {
        check_unit_interval("confidence", confidence)?;
        Ok(Self {
            is_candidate,
            confidence,
        })
    }

    /// Build from a raw candidate probability.
    ///
    /// The body is a candidate when `probability >= threshold`; confidence is
    /// the probability of whichever class was predicted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` if either argument is outside `[0, 1]`.
    pub fn from_probability(probability: f64, threshold: f64) -> Result<Self, CoreError> {
        check_unit_interval("probability", probability)?;
        check_unit_interval("threshold", threshold)?;

        let is_candidate = probability >= threshold;
        let confidence = if is_candidate {
            probability
        } else {
            1.0 - probability
        };
        Self::new(is_candidate, confidence)
    }

    #[must_use]
    pub const fn is_candidate(&self) -> bool {
        self.is_candidate
    }

    /// Confidence in [`Self::is_candidate`], within `[0, 1]`.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::invalid(
            name,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}

// ---------------------------------------------------------------------------
// Parameter sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExoplanetParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub habitable: bool,
    pub environment: EnvironmentLabel,
}

/// Lifeform half of the parameter map.
///
/// Serialized through [`LifeformParameters`]: a not-applicable section writes
/// every key with a null value rather than omitting it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "LifeformParameters", try_from = "LifeformParameters")]
pub enum LifeformSection {
    Populated {
        attributes: LifeformAttributes,
        environment: EnvironmentLabel,
    },
    NotApplicable,
}

impl LifeformSection {
    #[must_use]
    pub const fn attributes(&self) -> Option<&LifeformAttributes> {
        match self {
            Self::Populated { attributes, .. } => Some(attributes),
            Self::NotApplicable => None,
        }
    }
}

/// Wire form of [`LifeformSection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifeformParameters {
    pub size: Option<f64>,
    pub coloration: Option<Color>,
    pub environment: Option<EnvironmentLabel>,
    pub communication_method: Option<CommunicationMethod>,
    pub diet: Option<Diet>,
}

impl From<LifeformSection> for LifeformParameters {
    fn from(section: LifeformSection) -> Self {
        match section {
            LifeformSection::Populated {
                attributes,
                environment,
            } => Self {
                size: Some(attributes.size),
                coloration: Some(attributes.color),
                environment: Some(environment),
                communication_method: Some(attributes.communication_method),
                diet: Some(attributes.diet),
            },
            LifeformSection::NotApplicable => Self::default(),
        }
    }
}

impl TryFrom<LifeformParameters> for LifeformSection {
    type Error = String;

    fn try_from(params: LifeformParameters) -> Result<Self, Self::Error> {
        match params {
            LifeformParameters {
                size: Some(size),
                coloration: Some(color),
                environment: Some(environment),
                communication_method: Some(communication_method),
                diet: Some(diet),
            } => Ok(Self::Populated {
                attributes: LifeformAttributes {
                    size,
                    color,
                    communication_method,
                    diet,
                },
                environment,
            }),
            LifeformParameters {
                size: None,
                coloration: None,
                environment: None,
                communication_method: None,
                diet: None,
            } => Ok(Self::NotApplicable),
            _ => Err("lifeform parameters must be either all null or all populated".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileParameters {
    pub exoplanet: ExoplanetParameters,
    #[schemars(with = "LifeformParameters")]
    pub lifeform: LifeformSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<CandidateAssessment>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The exported planet and lifeform profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    pub text_description: String,
    pub parameters: ProfileParameters,
}

/// Compose a profile. Lifeform attributes are dropped unless habitable.
#[must_use]
pub fn assemble(
    verdict: &HabitabilityVerdict,
    environment: EnvironmentLabel,
    lifeform: Option<LifeformAttributes>,
) -> Profile {
    let lifeform = match lifeform {
        Some(attributes) if verdict.habitable => LifeformSection::Populated {
            attributes,
            environment,
        },
        _ => LifeformSection::NotApplicable,
    };

    Profile::from_parameters(ProfileParameters {
        exoplanet: ExoplanetParameters {
            name: None,
            habitable: verdict.habitable,
            environment,
        },
        lifeform,
        classifier: None,
    })
}

impl Profile {
    #[must_use]
    pub fn from_parameters(parameters: ProfileParameters) -> Self {
        Self {
            text_description: narrate(&parameters),
            parameters,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.parameters.exoplanet.name = name;
        Self::from_parameters(self.parameters)
    }

    #[must_use]
    pub fn with_classifier(mut self, assessment: Option<CandidateAssessment>) -> Self {
        self.parameters.classifier = assessment;
        Self::from_parameters(self.parameters)
    }

    #[must_use]
    pub const fn is_habitable(&self) -> bool {
        self.parameters.exoplanet.habitable
    }

    /// Write the profile as pretty JSON, creating parent directories.
    ///
    /// Single attempt; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Export` on I/O failure or `CoreError::Encode` if
    /// the profile cannot be encoded.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let export_error = |source: std::io::Error| CoreError::Export {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(export_error)?;
        }

        let mut json = serde_json::to_vec_pretty(self)?;
        json.push(b'\n');
        fs::write(path, json).map_err(export_error)?;

        tracing::info!(path = %path.display(), habitable = self.is_habitable(), "profile exported");
        Ok(())
    }
}

fn narrate(parameters: &ProfileParameters) -> String {
    let mut text = String::new();
    let exoplanet = &parameters.exoplanet;

    if let Some(name) = &exoplanet.name {
        let _ = writeln!(text, "Planet: {name}");
    }
    if exoplanet.habitable {
        text.push_str("This planet is habitable and may support life.\n");
    } else {
        text.push_str("This planet is not habitable.\n");
    }
    let _ = writeln!(text, "Environment: {}", exoplanet.environment);
    if let Some(assessment) = &parameters.classifier {
        let verdict = if assessment.is_candidate() {
            "candidate"
        } else {
            "not a candidate"
        };
        let _ = writeln!(
            text,
            "Classifier: {verdict} (confidence {:.2})",
            assessment.confidence()
        );
    }
    text.push('\n');

    match parameters.lifeform.attributes() {
        Some(lifeform) => {
            let _ = writeln!(text, "Size: {:.2} m", lifeform.size);
            let _ = writeln!(text, "Coloration: {}", lifeform.color);
            let _ = writeln!(text, "Communication method: {}", lifeform.communication_method);
            let _ = write!(text, "Diet: {}", lifeform.diet);
        }
        None => text.push_str("No known lifeforms."),
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitability::HabitabilityRule;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lifeform() -> LifeformAttributes {
        LifeformAttributes {
            size: 2.186,
            color: Color::rgb(177, 100, 50),
            communication_method: CommunicationMethod::SonarOrPressureWaves,
            diet: Diet::Herbivore,
        }
    }

    #[test]
    fn habitable_profile_populates_every_lifeform_key() {
        let profile = assemble(
            &HabitabilityVerdict::habitable(),
            EnvironmentLabel::EarthLike,
            Some(lifeform()),
        );
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(
            json["parameters"],
            json!({
                "exoplanet": { "habitable": true, "environment": "Earth-like" },
                "lifeform": {
                    "size": 2.186,
                    "coloration": [177, 100, 50],
                    "environment": "Earth-like",
                    "communicationMethod": "sonar or pressure waves",
                    "diet": "herbivore"
                }
            })
        );
        assert_eq!(
            profile.text_description,
            "This planet is habitable and may support life.\n\
             Environment: Earth-like\n\
             \n\
             Size: 2.19 m\n\
             Coloration: (177, 100, 50)\n\
             Communication method: sonar or pressure waves\n\
             Diet: herbivore"
        );
    }

    #[test]
    fn not_habitable_profile_writes_explicit_nulls() {
        let profile = assemble(
            &HabitabilityVerdict::failed(HabitabilityRule::Temperature),
            EnvironmentLabel::HotJupiter,
            Some(lifeform()),
        );
        let json = serde_json::to_value(&profile).unwrap();
        let lifeform = json["parameters"]["lifeform"].as_object().unwrap();

        assert_eq!(lifeform.len(), 5);
        assert!(lifeform.values().all(serde_json::Value::is_null));
        assert_eq!(json["parameters"]["exoplanet"]["habitable"], false);
        assert_eq!(json["parameters"]["exoplanet"]["environment"], "Hot Jupiter");
        assert_eq!(
            profile.text_description,
            "This planet is not habitable.\nEnvironment: Hot Jupiter\n\nNo known lifeforms."
        );
    }

    #[test]
    fn habitable_without_lifeform_is_not_applicable() {
        let profile = assemble(
            &HabitabilityVerdict::habitable(),
            EnvironmentLabel::EarthLike,
            None,
        );
        assert_eq!(profile.parameters.lifeform, LifeformSection::NotApplicable);
    }

    #[test]
    fn lifeform_section_roundtrips() {
        for section in [
            LifeformSection::NotApplicable,
            LifeformSection::Populated {
                attributes: lifeform(),
                environment: EnvironmentLabel::EarthLike,
            },
        ] {
            let json = serde_json::to_string(&section).unwrap();
            let recovered: LifeformSection = serde_json::from_str(&json).unwrap();
            assert_eq!(recovered, section);
        }
    }

    #[test]
    fn partially_null_lifeform_is_rejected() {
        let result = serde_json::from_value::<LifeformSection>(json!({
            "size": 1.0,
            "coloration": null,
            "environment": "Earth-like",
            "communicationMethod": "vocal communication",
            "diet": "omnivore"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn name_and_classifier_are_narrated() {
        let profile = assemble(
            &HabitabilityVerdict::failed(HabitabilityRule::Radius),
            EnvironmentLabel::GasGiant,
            None,
        )
        .with_name(Some("Kepler-22 b".into()))
        .with_classifier(Some(CandidateAssessment::new(true, 0.875).unwrap()));

        assert!(profile.text_description.starts_with("Planet: Kepler-22 b\n"));
        assert!(
            profile
                .text_description
                .contains("Classifier: candidate (confidence 0.88)")
        );

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["parameters"]["exoplanet"]["name"], "Kepler-22 b");
        assert_eq!(json["parameters"]["classifier"]["is_candidate"], true);
    }

    #[test]
    fn classifier_key_is_omitted_when_absent() {
        let profile = assemble(
            &HabitabilityVerdict::habitable(),
            EnvironmentLabel::EarthLike,
            Some(lifeform()),
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["parameters"].get("classifier").is_none());
        assert!(json["parameters"]["exoplanet"].get("name").is_none());
    }

    #[test]
    fn confidence_must_be_unit_interval() {
        assert!(CandidateAssessment::new(true, 1.0).is_ok());
        assert!(CandidateAssessment::new(false, 0.0).is_ok());
        assert!(CandidateAssessment::new(true, 1.01).is_err());
        assert!(CandidateAssessment::new(true, -0.1).is_err());
        assert!(CandidateAssessment::new(true, f64::NAN).is_err());
    }

    #[test]
    fn probability_maps_to_predicted_class_confidence() {
        let candidate = CandidateAssessment::from_probability(0.8, 0.5).unwrap();
        assert!(candidate.is_candidate());
        assert!((candidate.confidence() - 0.8).abs() < 1e-12);

        let rejected = CandidateAssessment::from_probability(0.3, 0.5).unwrap();
        assert!(!rejected.is_candidate());
        assert!((rejected.confidence() - 0.7).abs() < 1e-12);

        assert!(CandidateAssessment::from_probability(0.5, 1.5).is_err());
    }

    #[test]
    fn out_of_range_confidence_does_not_deserialize() {
        for confidence in [7.0, -0.5] {
            let result = serde_json::from_value::<CandidateAssessment>(json!({
                "is_candidate": true,
                "confidence": confidence
            }));
            assert!(result.is_err(), "accepted confidence {confidence}");
        }

        let ok: CandidateAssessment =
            serde_json::from_value(json!({ "is_candidate": false, "confidence": 0.25 })).unwrap();
        assert_eq!(ok, CandidateAssessment::new(false, 0.25).unwrap());
    }
}
