pub mod config;
pub mod error;
pub mod relevance;
pub mod source;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use relevance::RelevanceModel;
pub use source::PaperSource;
pub use types::{rank_papers, Paper, PaperSubmission, ScoredPaper};
