//! Document ingestion
//! Turns uploaded resume and job-description files into plain text

pub mod manager;
pub mod text_extractor;
