use async_trait::async_trait;

use crate::types::Paper;
use crate::Result;

#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Returns the name of the paper source
    fn name(&self) -> &str;

    /// Fetches the recently published papers. The source owns the
    /// definition of "recent".
    async fn fetch_recent(&self) -> Result<Vec<Paper>>;
}
