//! Localization adapter wrapping an external translation service
//!
//! All translation is best-effort: a failing service never fails the run,
//! it degrades to the original, untranslated text.

pub mod google;

use crate::error::Result;
use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display languages. Prompt templates are always authored in
/// the canonical language (English), so translation only happens at the
/// input/output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
    ZhCn,
    Hi,
}

impl LanguageCode {
    /// Wire code understood by the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::ZhCn => "zh-cn",
            LanguageCode::Hi => "hi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Es => "Spanish",
            LanguageCode::Fr => "French",
            LanguageCode::De => "German",
            LanguageCode::ZhCn => "Chinese (Simplified)",
            LanguageCode::Hi => "Hindi",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Raw translation service: may fail with a network or shape error.
pub trait TranslationService {
    fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        dest: LanguageCode,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Outcome of a best-effort translation.
#[derive(Debug, Clone, PartialEq)]
pub enum Translated {
    /// Text in the requested destination language.
    Full(String),
    /// The service failed; the original text is returned unchanged.
    Degraded { text: String, reason: String },
}

impl Translated {
    pub fn text(&self) -> &str {
        match self {
            Translated::Full(text) => text,
            Translated::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Translated::Degraded { .. })
    }
}

/// Adapter in front of a [`TranslationService`]: passes text through
/// untouched when source and destination match, and converts service
/// failures into [`Translated::Degraded`] instead of propagating them.
pub struct LocalizationAdapter<S> {
    service: S,
}

impl<S: TranslationService> LocalizationAdapter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        dest: LanguageCode,
    ) -> Translated {
        if source == dest {
            debug!("Translation skipped: text already in '{}'", dest);
            return Translated::Full(text.to_string());
        }

        match self.service.translate(text, source, dest).await {
            Ok(translated) => Translated::Full(translated),
            Err(e) => {
                warn!(
                    "Translation from '{}' to '{}' failed, keeping original text: {}",
                    source, dest, e
                );
                Translated::Degraded {
                    text: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
