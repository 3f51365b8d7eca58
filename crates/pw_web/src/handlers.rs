use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use pw_core::{rank_papers, Error, PaperSubmission, ScoredPaper};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PapersResponse {
    pub papers: Vec<ScoredPaper>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct UpstreamDetail {
    detail: String,
}

/// Fetches and scores the recent papers, returning them most relevant
/// first. Zero papers is a normal empty response, not an error.
pub async fn fetch_recent_papers(State(state): State<Arc<AppState>>) -> Response {
    let papers = match state.source.fetch_recent().await {
        Ok(papers) => papers,
        Err(e) => {
            tracing::error!("Failed to fetch recent papers: {}", e);
            return error_response("source", e);
        }
    };

    let scored = match state.relevance.score_papers(papers).await {
        Ok(scored) => scored,
        Err(e) => {
            tracing::error!("Failed to score papers: {}", e);
            return error_response("relevance", e);
        }
    };

    let papers = rank_papers(scored);
    (StatusCode::OK, Json(PapersResponse { papers })).into_response()
}

/// Forwards one paper to the configured Notion database. A non-200 from
/// Notion is passed through with its status code and raw body text as the
/// detail.
pub async fn add_to_notion(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<PaperSubmission>,
) -> Response {
    if submission.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "validation",
                message: "title must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .notion
        .create_paper_page(&submission.title, &submission.url)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Paper added to Notion successfully".to_string(),
            }),
        )
            .into_response(),
        Err(Error::NotionApi { status, body }) => {
            tracing::error!("Notion rejected '{}' with status {}", submission.title, status);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(UpstreamDetail { detail: body })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to add paper to Notion: {}", e);
            error_response("notion", e)
        }
    }
}

/// One structured shape for every collaborator or transport failure.
fn error_response(kind: &'static str, error: Error) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: kind,
            message: error.to_string(),
        }),
    )
        .into_response()
}
