// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    stats::{Distribution, ScoreStats},
    AnalysisResults, RejectedRow, ScoredRespondent, SusClassification, SusResponse,
    SUS_ITEM_COUNT,
};

pub use crate::errors::{RowError, SusError};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::io::reader::{read_survey_csv, SurveyData};

pub use crate::scoring::{classify, score, ItemPolarity};
