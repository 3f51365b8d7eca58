pub mod models;

pub use models::{create_model, KeywordModel};

pub mod prelude {
    pub use crate::models::create_model;
    pub use pw_core::{Paper, RelevanceModel, Result, ScoredPaper};
}
