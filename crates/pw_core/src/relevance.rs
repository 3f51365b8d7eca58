use async_trait::async_trait;

use crate::types::{Paper, ScoredPaper};
use crate::Result;

#[async_trait]
pub trait RelevanceModel: Send + Sync {
    /// Returns the name of the model
    fn name(&self) -> &str;

    /// Annotates every paper with a relevance score. Returns the same
    /// papers in the same order, each carrying a finite score.
    async fn score_papers(&self, papers: Vec<Paper>) -> Result<Vec<ScoredPaper>>;
}
