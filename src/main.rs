//! Smart ATS: AI-powered resume optimization and ATS compliance assistant

mod cli;
mod config;
mod error;
mod features;
mod input;
mod llm;
mod output;
mod pipeline;
mod translate;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SmartAtsError};
use features::{Feature, FeatureRegistry};
use input::manager::InputManager;
use llm::gemini::GeminiClient;
use log::{error, info};
use output::OutputWriter;
use pipeline::Pipeline;
use std::path::PathBuf;
use std::process;
use translate::google::GoogleTranslateClient;
use translate::LocalizationAdapter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            feature,
            language,
            save,
        } => {
            info!("Starting resume analysis run");

            // Validate input files (the "upload filter")
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| SmartAtsError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| SmartAtsError::InvalidInput(format!("Job description file: {}", e)))?;

            // Fail fast on a missing API key before touching any document.
            let api_key = Config::api_key()?;

            println!("🚀 {}", feature.name());
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());
            println!("🌐 Language: {}", language.display_name());

            let generator = GeminiClient::new(&config.generation, api_key);
            let localizer = LocalizationAdapter::new(GoogleTranslateClient::new(
                config.translation.endpoint.clone(),
            ));
            let pipeline = Pipeline::new(
                FeatureRegistry::new(),
                generator,
                localizer,
                config.translation.canonical_language,
            );

            // One manager per run; extracted text is discarded with it.
            let mut input_manager = InputManager::new();

            println!("\n📂 Extracting text from files...");
            if language != config.translation.canonical_language {
                println!("🌐 Translating documents...");
            }
            println!("🤖 Running analysis...");

            let outcome = match pipeline
                .run_paths(&mut input_manager, &resume, &job, feature, language)
                .await
            {
                Ok(outcome) => outcome,
                Err(SmartAtsError::PreconditionFailed(msg)) => {
                    println!("\n⚠️  {}", msg);
                    return Err(SmartAtsError::PreconditionFailed(msg));
                }
                Err(e) => return Err(e),
            };

            let writer = OutputWriter::new(&config.output);
            writer.render(&outcome);

            let save_dir = save.unwrap_or_else(|| PathBuf::from("."));
            let artifact = writer.export(&outcome, &save_dir)?;
            println!("\n💾 Raw result saved to {}", artifact.display());

            println!("\n✅ Analysis completed successfully!");
            Ok(())
        }

        Commands::Features => {
            println!("📋 Available analysis features:\n");
            for feature in Feature::ALL {
                println!("  • {}", feature.name());
                println!("    {}", feature.description());
            }
            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        SmartAtsError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    let defaults = Config::default();
                    defaults.save()?;
                    println!("✅ Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}
