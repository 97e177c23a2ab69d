//! Fixed catalog of analysis features
//!
//! The seven features form a closed set keyed by name. The registry is
//! populated once at startup and is read-only afterwards.

use crate::features::templates;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    SkillGap,
    Recommendations,
    KeywordOptimization,
    AtsCompliance,
    CoverLetter,
    MatchAnalysis,
    CraftResume,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::SkillGap,
        Feature::Recommendations,
        Feature::KeywordOptimization,
        Feature::AtsCompliance,
        Feature::CoverLetter,
        Feature::MatchAnalysis,
        Feature::CraftResume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::SkillGap => "Skill Gap Analysis",
            Feature::Recommendations => "Actionable Recommendations",
            Feature::KeywordOptimization => "Keyword Optimization",
            Feature::AtsCompliance => "ATS Compliance Check",
            Feature::CoverLetter => "Cover Letter Generator",
            Feature::MatchAnalysis => "Detailed Match Analysis",
            Feature::CraftResume => "Craft New Resume",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::SkillGap => {
                "Identifies missing skills in your resume compared to the job description"
            }
            Feature::Recommendations => {
                "Provides specific suggestions on how to improve your resume"
            }
            Feature::KeywordOptimization => {
                "Highlights important keywords from the job description and shows how to incorporate them"
            }
            Feature::AtsCompliance => {
                "Checks your resume for Applicant Tracking System compatibility issues"
            }
            Feature::CoverLetter => {
                "Generates a personalized cover letter based on your resume and the job description"
            }
            Feature::MatchAnalysis => {
                "In-depth analysis of how well your resume matches the job description, with strengths, weaknesses, and an overall match percentage"
            }
            Feature::CraftResume => {
                "Rewrites your resume with better keyword integration and grammar"
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().find(|f| f.name() == name).copied()
    }
}

#[derive(Debug, Clone)]
pub struct FeatureDefinition {
    pub feature: Feature,
    pub template: &'static str,
    pub result_label: &'static str,
    /// False only for the ATS compliance check, which works from the
    /// resume alone.
    pub uses_job_description: bool,
}

pub struct FeatureRegistry {
    definitions: HashMap<Feature, FeatureDefinition>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        let mut definitions = HashMap::new();

        for (feature, template, result_label, uses_job_description) in [
            (
                Feature::SkillGap,
                templates::SKILL_GAP_TEMPLATE,
                "Skill Gap Analysis",
                true,
            ),
            (
                Feature::Recommendations,
                templates::RECOMMENDATIONS_TEMPLATE,
                "Actionable Recommendations",
                true,
            ),
            (
                Feature::KeywordOptimization,
                templates::KEYWORD_OPTIMIZATION_TEMPLATE,
                "Keyword Optimization Suggestions",
                true,
            ),
            (
                Feature::AtsCompliance,
                templates::ATS_COMPLIANCE_TEMPLATE,
                "ATS Compliance Report",
                false,
            ),
            (
                Feature::CoverLetter,
                templates::COVER_LETTER_TEMPLATE,
                "Generated Cover Letter",
                true,
            ),
            (
                Feature::MatchAnalysis,
                templates::MATCH_ANALYSIS_TEMPLATE,
                "Detailed Match Analysis Report",
                true,
            ),
            (
                Feature::CraftResume,
                templates::CRAFT_RESUME_TEMPLATE,
                "Crafted Resume",
                true,
            ),
        ] {
            definitions.insert(
                feature,
                FeatureDefinition {
                    feature,
                    template,
                    result_label,
                    uses_job_description,
                },
            );
        }

        Self { definitions }
    }

    /// O(1) lookup; `None` means a dispatch bug, not a user error.
    pub fn get(&self, feature: Feature) -> Option<&FeatureDefinition> {
        self.definitions.get(&feature)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::templates::{JOB_SLOT, RESUME_SLOT};

    #[test]
    fn test_registry_holds_all_seven_features() {
        let registry = FeatureRegistry::new();
        assert_eq!(registry.len(), 7);

        for feature in Feature::ALL {
            assert!(registry.get(feature).is_some(), "missing {:?}", feature);
        }
    }

    #[test]
    fn test_templates_declare_exactly_their_slots() {
        let registry = FeatureRegistry::new();

        for feature in Feature::ALL {
            let definition = registry.get(feature).unwrap();
            assert!(
                definition.template.contains(RESUME_SLOT),
                "{:?} template lacks the resume slot",
                feature
            );
            assert_eq!(
                definition.template.contains(JOB_SLOT),
                definition.uses_job_description,
                "{:?} template slot mismatch",
                feature
            );
        }
    }

    #[test]
    fn test_ats_compliance_uses_resume_only() {
        let registry = FeatureRegistry::new();
        let definition = registry.get(Feature::AtsCompliance).unwrap();

        assert!(!definition.uses_job_description);
        assert!(!definition.template.contains(JOB_SLOT));
    }

    #[test]
    fn test_result_labels() {
        let registry = FeatureRegistry::new();

        assert_eq!(
            registry.get(Feature::KeywordOptimization).unwrap().result_label,
            "Keyword Optimization Suggestions"
        );
        assert_eq!(
            registry.get(Feature::AtsCompliance).unwrap().result_label,
            "ATS Compliance Report"
        );
        assert_eq!(
            registry.get(Feature::CoverLetter).unwrap().result_label,
            "Generated Cover Letter"
        );
        assert_eq!(
            registry.get(Feature::CraftResume).unwrap().result_label,
            "Crafted Resume"
        );
    }

    #[test]
    fn test_feature_from_name() {
        assert_eq!(
            Feature::from_name("Detailed Match Analysis"),
            Some(Feature::MatchAnalysis)
        );
        assert_eq!(Feature::from_name("Feature 6"), None);
    }
}
