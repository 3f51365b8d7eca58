use async_trait::async_trait;

use pw_core::{Paper, RelevanceModel, Result, ScoredPaper};

const TITLE_WEIGHT: f64 = 3.0;
const SUMMARY_WEIGHT: f64 = 1.0;
const SMOOTHING: f64 = 4.0;

/// Scores papers by weighted keyword occurrences in the title and summary.
/// Crude, but enough to order a listing page by interest.
#[derive(Debug, Clone)]
pub struct KeywordModel {
    keywords: Vec<String>,
}

impl KeywordModel {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    fn score(&self, paper: &Paper) -> f64 {
        let title = paper.title.to_lowercase();
        let summary = paper.summary.to_lowercase();

        let mut weight = 0.0;
        for keyword in &self.keywords {
            weight += title.matches(keyword.as_str()).count() as f64 * TITLE_WEIGHT;
            weight += summary.matches(keyword.as_str()).count() as f64 * SUMMARY_WEIGHT;
        }

        // Maps [0, inf) into [0, 1): no hits scores 0, further hits have
        // diminishing returns.
        weight / (weight + SMOOTHING)
    }
}

impl Default for KeywordModel {
    fn default() -> Self {
        Self::new(
            [
                "segmentation",
                "detection",
                "diffusion",
                "transformer",
                "3d reconstruction",
                "pose estimation",
                "self-supervised",
                "vision-language",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        )
    }
}

#[async_trait]
impl RelevanceModel for KeywordModel {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn score_papers(&self, papers: Vec<Paper>) -> Result<Vec<ScoredPaper>> {
        Ok(papers
            .into_iter()
            .map(|paper| {
                let relevance = self.score(&paper);
                tracing::debug!("Scored {:.2} for {}", relevance, paper.title);
                ScoredPaper { paper, relevance }
            })
            .collect())
    }
}
