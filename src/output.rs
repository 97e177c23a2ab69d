//! Result rendering and download artifact export

use crate::config::OutputConfig;
use crate::error::Result;
use crate::pipeline::AnalysisOutcome;
use colored::Colorize;
use log::info;
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    use_colors: bool,
    download_filename: String,
}

impl OutputWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            use_colors: config.color_output,
            download_filename: config.download_filename.clone(),
        }
    }

    /// Print the localized result to the console.
    pub fn render(&self, outcome: &AnalysisOutcome) {
        let header = if self.use_colors {
            outcome.result_label.bold().cyan().to_string()
        } else {
            outcome.result_label.to_string()
        };

        println!("\n{}", header);
        println!("{}", "=".repeat(outcome.result_label.len()));
        println!("\n{}", outcome.display_text);

        for warning in &outcome.warnings {
            let line = format!("⚠️  {}", warning);
            if self.use_colors {
                println!("\n{}", line.yellow());
            } else {
                println!("\n{}", line);
            }
        }
    }

    /// Write the canonical-language raw response, verbatim, under the
    /// fixed download filename. The on-screen text may be localized; the
    /// artifact never is.
    pub fn export(&self, outcome: &AnalysisOutcome, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.download_filename);
        std::fs::write(&path, outcome.raw_text.as_bytes())?;
        info!("Saved raw result to {}", path.display());
        Ok(path)
    }
}
