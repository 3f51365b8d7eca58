use std::sync::Arc;

use pw_core::{Error, RelevanceModel, Result};

pub mod keyword;

pub use keyword::KeywordModel;

/// Creates a relevance model by name. `keywords` overrides the model's
/// built-in interest list when given.
pub fn create_model(
    name: &str,
    keywords: Option<Vec<String>>,
) -> Result<Arc<dyn RelevanceModel>> {
    match name {
        "keyword" => Ok(Arc::new(match keywords {
            Some(keywords) => KeywordModel::new(keywords),
            None => KeywordModel::default(),
        })),
        other => Err(Error::Relevance(format!(
            "Unknown relevance model: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        let model = create_model("keyword", None).unwrap();
        assert_eq!(model.name(), "keyword");

        assert!(create_model("llm", None).is_err());
    }
}
