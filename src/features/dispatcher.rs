//! Payload construction for the selected feature

use crate::error::{Result, SmartAtsError};
use crate::features::registry::{Feature, FeatureRegistry};
use crate::features::templates::{JOB_SLOT, RESUME_SLOT};

/// Fully substituted instruction payload, ready for the generation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub text: String,
    pub result_label: &'static str,
}

/// Pure template substitution: no trimming, no content validation, no
/// truncation. Identical inputs always produce byte-identical payloads.
pub fn build_payload(
    registry: &FeatureRegistry,
    feature: Feature,
    resume_text: &str,
    jd_text: &str,
) -> Result<Payload> {
    let definition = registry.get(feature).ok_or_else(|| {
        SmartAtsError::UnknownFeature(format!(
            "no definition registered for '{}'",
            feature.name()
        ))
    })?;

    let text = definition
        .template
        .replace(RESUME_SLOT, resume_text)
        .replace(JOB_SLOT, jd_text);

    Ok(Payload {
        text,
        result_label: definition.result_label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Software Engineer with Python experience at Tech Corp.";
    const JOB: &str = "Senior Software Engineer role requiring React and Python.";

    #[test]
    fn test_payloads_contain_inputs_verbatim() {
        let registry = FeatureRegistry::new();

        for feature in Feature::ALL {
            let payload = build_payload(&registry, feature, RESUME, JOB).unwrap();

            assert!(
                payload.text.contains(RESUME),
                "{:?} payload lost the resume text",
                feature
            );
            if registry.get(feature).unwrap().uses_job_description {
                assert!(
                    payload.text.contains(JOB),
                    "{:?} payload lost the job description",
                    feature
                );
            } else {
                assert!(!payload.text.contains(JOB));
            }

            // No slot may be left unfilled.
            assert!(!payload.text.contains(RESUME_SLOT));
            assert!(!payload.text.contains(JOB_SLOT));
        }
    }

    #[test]
    fn test_build_payload_is_deterministic() {
        let registry = FeatureRegistry::new();

        let first = build_payload(&registry, Feature::CoverLetter, RESUME, JOB).unwrap();
        let second = build_payload(&registry, Feature::CoverLetter, RESUME, JOB).unwrap();

        assert_eq!(first.text, second.text);
        assert_eq!(first.result_label, second.result_label);
    }

    #[test]
    fn test_no_preprocessing_of_inputs() {
        let registry = FeatureRegistry::new();
        let padded = "  spaced resume text  ";

        let payload = build_payload(&registry, Feature::SkillGap, padded, JOB).unwrap();
        assert!(payload.text.contains(padded));
    }

    #[test]
    fn test_missing_definition_is_unknown_feature() {
        let registry = FeatureRegistry::empty();

        let result = build_payload(&registry, Feature::SkillGap, RESUME, JOB);
        assert!(matches!(result, Err(SmartAtsError::UnknownFeature(_))));
    }
}
