//! Per-run analysis pipeline
//!
//! One user action drives one fresh state machine instance through
//! ingest, normalize, dispatch, generate, and localize. The stages run
//! strictly sequentially with no retries; the only non-fatal failure is
//! output localization, which degrades to the untranslated text.

use crate::error::{Result, SmartAtsError};
use crate::features::{build_payload, Feature, FeatureRegistry};
use crate::input::manager::InputManager;
use crate::llm::GenerationBackend;
use crate::translate::{LanguageCode, LocalizationAdapter, Translated, TranslationService};
use log::{debug, info};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Ingesting,
    Normalizing,
    Dispatching,
    Generating,
    LocalizingOutput,
    Done,
    Rejected,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Ingesting => "ingesting",
            RunState::Normalizing => "normalizing",
            RunState::Dispatching => "dispatching",
            RunState::Generating => "generating",
            RunState::LocalizingOutput => "localizing-output",
            RunState::Done => "done",
            RunState::Rejected => "rejected",
            RunState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Inputs for one run. Constructed per user action and discarded with it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub feature: Feature,
    pub resume_text: String,
    pub job_text: String,
    pub display_language: LanguageCode,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Canonical-language backend response, verbatim. This is what the
    /// download artifact contains, localized or not.
    pub raw_text: String,
    /// Text in the display language; equals `raw_text` when the display
    /// language is the canonical one or localization degraded.
    pub display_text: String,
    pub result_label: &'static str,
    /// Non-fatal degradations encountered along the way.
    pub warnings: Vec<String>,
}

pub struct Pipeline<G, S> {
    registry: FeatureRegistry,
    generator: G,
    localizer: LocalizationAdapter<S>,
    canonical: LanguageCode,
}

impl<G: GenerationBackend, S: TranslationService> Pipeline<G, S> {
    pub fn new(
        registry: FeatureRegistry,
        generator: G,
        localizer: LocalizationAdapter<S>,
        canonical: LanguageCode,
    ) -> Self {
        Self {
            registry,
            generator,
            localizer,
            canonical,
        }
    }

    /// Full run starting from files on disk.
    pub async fn run_paths(
        &self,
        input: &mut InputManager,
        resume_path: &Path,
        job_path: &Path,
        feature: Feature,
        display_language: LanguageCode,
    ) -> Result<AnalysisOutcome> {
        let mut state = RunState::Idle;
        self.transition(&mut state, RunState::Ingesting);

        let resume_text = match input.extract_text(resume_path).await {
            Ok(text) => text,
            Err(e) => {
                self.transition(&mut state, RunState::Failed);
                return Err(e);
            }
        };
        let job_text = match input.extract_text(job_path).await {
            Ok(text) => text,
            Err(e) => {
                self.transition(&mut state, RunState::Failed);
                return Err(e);
            }
        };

        self.run(AnalysisRequest {
            feature,
            resume_text,
            job_text,
            display_language,
        })
        .await
    }

    /// Run from already-ingested text. Empty extraction is valid input up
    /// to this point; the precondition check here is what rejects it.
    pub async fn run(&self, request: AnalysisRequest) -> Result<AnalysisOutcome> {
        let mut state = RunState::Idle;
        let mut warnings = Vec::new();

        if request.resume_text.trim().is_empty() || request.job_text.trim().is_empty() {
            self.transition(&mut state, RunState::Rejected);
            return Err(SmartAtsError::PreconditionFailed(
                "please provide both the resume and the job description".to_string(),
            ));
        }

        self.transition(&mut state, RunState::Normalizing);
        let resume_text = self
            .normalize(&request.resume_text, request.display_language, &mut warnings)
            .await;
        let job_text = self
            .normalize(&request.job_text, request.display_language, &mut warnings)
            .await;

        self.transition(&mut state, RunState::Dispatching);
        let payload = match build_payload(&self.registry, request.feature, &resume_text, &job_text)
        {
            Ok(payload) => payload,
            Err(e) => {
                self.transition(&mut state, RunState::Failed);
                return Err(e);
            }
        };

        self.transition(&mut state, RunState::Generating);
        info!(
            "Calling generation backend for '{}'",
            request.feature.name()
        );
        let raw_text = match self.generator.generate(&payload.text).await {
            Ok(text) => text,
            Err(e) => {
                self.transition(&mut state, RunState::Failed);
                return Err(e);
            }
        };

        self.transition(&mut state, RunState::LocalizingOutput);
        let display_text = match self
            .localizer
            .translate(&raw_text, self.canonical, request.display_language)
            .await
        {
            Translated::Full(text) => text,
            Translated::Degraded { text, reason } => {
                warnings.push(format!("result shown untranslated: {}", reason));
                text
            }
        };

        self.transition(&mut state, RunState::Done);
        Ok(AnalysisOutcome {
            raw_text,
            display_text,
            result_label: payload.result_label,
            warnings,
        })
    }

    /// Translate one input document to the canonical analysis language.
    /// Degradation keeps the original text and records a warning.
    async fn normalize(
        &self,
        text: &str,
        display_language: LanguageCode,
        warnings: &mut Vec<String>,
    ) -> String {
        match self
            .localizer
            .translate(text, display_language, self.canonical)
            .await
        {
            Translated::Full(translated) => translated,
            Translated::Degraded { text, reason } => {
                warnings.push(format!("document not normalized: {}", reason));
                text
            }
        }
    }

    fn transition(&self, state: &mut RunState, next: RunState) {
        debug!("pipeline state: {} -> {}", state, next);
        *state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::TranslationService;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubGenerator {
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        response: String,
        fail: bool,
    }

    impl StubGenerator {
        fn replying(response: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                response: response.to_string(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::replying("")
            }
        }
    }

    impl GenerationBackend for &StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            if self.fail {
                return Err(SmartAtsError::Generation("quota exceeded".to_string()));
            }
            Ok(self.response.clone())
        }
    }

    struct EchoTranslation {
        calls: AtomicUsize,
        fail: bool,
    }

    impl EchoTranslation {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    impl TranslationService for &EchoTranslation {
        async fn translate(
            &self,
            text: &str,
            _source: LanguageCode,
            dest: LanguageCode,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SmartAtsError::Network("service unavailable".to_string()));
            }
            Ok(format!("[{}] {}", dest, text))
        }
    }

    fn pipeline<'a>(
        generator: &'a StubGenerator,
        translation: &'a EchoTranslation,
    ) -> Pipeline<&'a StubGenerator, &'a EchoTranslation> {
        Pipeline::new(
            FeatureRegistry::new(),
            generator,
            LocalizationAdapter::new(translation),
            LanguageCode::En,
        )
    }

    fn request(feature: Feature, language: LanguageCode) -> AnalysisRequest {
        AnalysisRequest {
            feature,
            resume_text: "Experienced engineer. Skills: Python, SQL.".to_string(),
            job_text: "Backend role requiring Python.".to_string(),
            display_language: language,
        }
    }

    #[tokio::test]
    async fn test_blank_resume_is_rejected_without_backend_call() {
        let generator = StubGenerator::replying("unused");
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        let mut req = request(Feature::SkillGap, LanguageCode::En);
        req.resume_text = "   \n".to_string();

        let result = pipeline.run(req).await;
        assert!(matches!(result, Err(SmartAtsError::PreconditionFailed(_))));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(translation.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_job_description_is_rejected() {
        let generator = StubGenerator::replying("unused");
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        let mut req = request(Feature::MatchAnalysis, LanguageCode::En);
        req.job_text = String::new();

        let result = pipeline.run(req).await;
        assert!(matches!(result, Err(SmartAtsError::PreconditionFailed(_))));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_english_run_never_translates() {
        let generator = StubGenerator::replying("Looks good.");
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        let outcome = pipeline
            .run(request(Feature::MatchAnalysis, LanguageCode::En))
            .await
            .unwrap();

        assert_eq!(translation.calls.load(Ordering::SeqCst), 0);
        assert_eq!(outcome.raw_text, "Looks good.");
        assert_eq!(outcome.display_text, "Looks good.");
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_non_english_run_translates_inputs_and_output() {
        let generator = StubGenerator::replying("Missing: Kubernetes.");
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        let outcome = pipeline
            .run(request(Feature::SkillGap, LanguageCode::Es))
            .await
            .unwrap();

        // Two normalizations in, one localization out.
        assert_eq!(translation.calls.load(Ordering::SeqCst), 3);
        assert_eq!(outcome.raw_text, "Missing: Kubernetes.");
        assert_eq!(outcome.display_text, "[es] Missing: Kubernetes.");

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("[en] Experienced engineer. Skills: Python, SQL."));
    }

    #[tokio::test]
    async fn test_translation_failure_degrades_but_run_completes() {
        let generator = StubGenerator::replying("Overall match: 70%.");
        let translation = EchoTranslation::failing();
        let pipeline = pipeline(&generator, &translation);

        let outcome = pipeline
            .run(request(Feature::MatchAnalysis, LanguageCode::De))
            .await
            .unwrap();

        assert_eq!(outcome.display_text, outcome.raw_text);
        assert_eq!(outcome.warnings.len(), 3);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generation_failure_fails_the_run() {
        let generator = StubGenerator::failing();
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        let result = pipeline
            .run(request(Feature::CoverLetter, LanguageCode::En))
            .await;

        assert!(matches!(result, Err(SmartAtsError::Generation(_))));
    }

    #[tokio::test]
    async fn test_unknown_feature_fails_before_backend_call() {
        let generator = StubGenerator::replying("unused");
        let translation = EchoTranslation::new();
        let pipeline = Pipeline::new(
            FeatureRegistry::empty(),
            &generator,
            LocalizationAdapter::new(&translation),
            LanguageCode::En,
        );

        let result = pipeline
            .run(request(Feature::SkillGap, LanguageCode::En))
            .await;

        assert!(matches!(result, Err(SmartAtsError::UnknownFeature(_))));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ats_compliance_prompt_has_no_job_text() {
        let generator = StubGenerator::replying("ATS ready.");
        let translation = EchoTranslation::new();
        let pipeline = pipeline(&generator, &translation);

        pipeline
            .run(request(Feature::AtsCompliance, LanguageCode::En))
            .await
            .unwrap();

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Experienced engineer. Skills: Python, SQL."));
        assert!(!prompt.contains("Backend role requiring Python."));
    }
}
