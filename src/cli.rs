//! CLI interface for Smart ATS

use crate::features::Feature;
use crate::translate::LanguageCode;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smart-ats")]
#[command(about = "AI-powered resume optimization and ATS compliance assistant")]
#[command(
    long_about = "Analyze a resume against a job description with AI-generated feedback: skill gaps, recommendations, keyword suggestions, ATS compliance, cover letters, match reports, and resume rewrites, with optional translation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to the resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Analysis feature to run
        #[arg(short, long, value_enum)]
        feature: Feature,

        /// Display language for the rendered result
        #[arg(short, long, value_enum, default_value = "en")]
        language: LanguageCode,

        /// Directory to save the downloadable raw result into
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the available analysis features
    Features,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
