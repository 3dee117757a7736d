use crate::error::ServerResult;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use lexreport::{build_report, fetch_corpus, validate_count};
use serde_json::Value;
use std::sync::Arc;

/// Name offered to the browser for the downloaded report.
pub const REPORT_FILENAME: &str = "report.pdf";

/// Generate a PDF report
///
/// Body: `{"paragraphsQty": N}` where N is an integer or a string of digits.
/// The corpus is fetched on the runtime; tokenizing through assembly runs on
/// the blocking pool.
pub async fn generate_pdf(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ServerResult<Response> {
    let request: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    let count = validate_count(request.get("paragraphsQty"), &state.pipeline)?;

    let corpus = fetch_corpus(state.source.as_ref(), count).await?;
    let pipeline = state.pipeline.clone();
    let document =
        tokio::task::spawn_blocking(move || build_report(corpus.paragraphs(), &pipeline))
            .await??;

    tracing::info!(
        paragraphs = count.get(),
        pages = document.page_count(),
        bytes = document.len(),
        "report served"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        document.into_bytes(),
    )
        .into_response())
}
