use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use lexreport::{build_chart_svg, fetch_corpus, validate_count};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(rename = "paragraphsQty")]
    pub paragraphs_qty: Option<String>,
}

/// Render the four-panel chart as SVG
///
/// Same validation and failures as report generation; the count comes from
/// the `paragraphsQty` query parameter.
pub async fn chart_svg(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ChartQuery>,
) -> ServerResult<impl IntoResponse> {
    let raw = query.paragraphs_qty.map(Value::String);
    let count = validate_count(raw.as_ref(), &state.pipeline)?;

    let corpus = fetch_corpus(state.source.as_ref(), count).await?;
    let pipeline = state.pipeline.clone();
    let svg = tokio::task::spawn_blocking(move || build_chart_svg(corpus.paragraphs(), &pipeline))
        .await??;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
