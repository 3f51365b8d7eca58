use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recently published paper as returned by a paper source. Papers have no
/// persisted identity; they are refetched on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub authors: Vec<String>,
    pub published_at: DateTime<Utc>,
}

/// A paper annotated with a relevance score. Serializes flat, so the wire
/// shape is the paper's fields plus `relevance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPaper {
    #[serde(flatten)]
    pub paper: Paper,
    pub relevance: f64,
}

/// Request payload for forwarding a single paper to Notion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSubmission {
    pub title: String,
    pub url: String,
}

/// Sorts papers by relevance, most relevant first. The sort is stable, so
/// papers with equal scores keep the order the scorer returned them in.
pub fn rank_papers(mut papers: Vec<ScoredPaper>) -> Vec<ScoredPaper> {
    papers.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    papers
}
