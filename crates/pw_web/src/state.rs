use std::sync::Arc;

use pw_core::{PaperSource, RelevanceModel};
use pw_notion::NotionClient;

/// Everything the handlers need, assembled once at startup. Immutable for
/// the process lifetime; concurrent requests share it without locking.
pub struct AppState {
    pub source: Arc<dyn PaperSource>,
    pub relevance: Arc<dyn RelevanceModel>,
    pub notion: NotionClient,
}
