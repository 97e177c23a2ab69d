//! Smart ATS library

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod input;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod translate;

pub use config::Config;
pub use error::{Result, SmartAtsError};
